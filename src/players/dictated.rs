//! Scripted players that replay a fixed list of moves.
//!
//! Used by tests, benchmarks and replays. When the script runs out the player
//! either quits (`auto_quit`) or reports `PlayerError::Exhausted`.

use std::collections::VecDeque;

use tracing::debug;

use super::{Operative, Player, Spymaster};
use crate::core::{Clue, Guess, OperativeState, PlayerError, SpymasterState, Team};
use crate::games::duet::{DuetSide, DuetTeam};

/// Pop the next scripted move, or explain why there is none.
fn next_move<M>(moves: &mut VecDeque<M>, name: &str, auto_quit: bool) -> Result<M, PlayerError> {
    match moves.pop_front() {
        Some(next) => Ok(next),
        None if auto_quit => {
            debug!(player = name, "script over, quitting");
            Err(PlayerError::Quit(name.to_owned()))
        }
        None => Err(PlayerError::Exhausted(name.to_owned())),
    }
}

/// Spymaster that gives scripted clues in order.
#[derive(Clone, Debug)]
pub struct DictatedSpymaster<T: Team> {
    name: String,
    team: T,
    clues: VecDeque<Clue>,
    auto_quit: bool,
}

impl<T: Team> DictatedSpymaster<T> {
    pub fn new(clues: impl IntoIterator<Item = Clue>, team: T) -> Self {
        Self {
            name: "Test Spymaster".to_owned(),
            team,
            clues: clues.into_iter().collect(),
            auto_quit: false,
        }
    }

    #[must_use]
    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    #[must_use]
    pub fn with_auto_quit(mut self, auto_quit: bool) -> Self {
        self.auto_quit = auto_quit;
        self
    }

    /// Clues not given yet.
    #[must_use]
    pub fn remaining(&self) -> usize {
        self.clues.len()
    }
}

impl<T: Team> Player<T> for DictatedSpymaster<T> {
    fn name(&self) -> &str {
        &self.name
    }

    fn team(&self) -> T {
        self.team
    }
}

impl<T: Team> Spymaster<T> for DictatedSpymaster<T> {
    fn give_clue(&mut self, _state: &SpymasterState<T>) -> Result<Clue, PlayerError> {
        next_move(&mut self.clues, &self.name, self.auto_quit)
    }
}

/// Operative that makes scripted guesses in order.
#[derive(Clone, Debug)]
pub struct DictatedOperative<T: Team> {
    name: String,
    team: T,
    guesses: VecDeque<Guess>,
    auto_quit: bool,
}

impl<T: Team> DictatedOperative<T> {
    pub fn new(guesses: impl IntoIterator<Item = Guess>, team: T) -> Self {
        Self {
            name: "Test Operative".to_owned(),
            team,
            guesses: guesses.into_iter().collect(),
            auto_quit: false,
        }
    }

    #[must_use]
    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    #[must_use]
    pub fn with_auto_quit(mut self, auto_quit: bool) -> Self {
        self.auto_quit = auto_quit;
        self
    }

    #[must_use]
    pub fn remaining(&self) -> usize {
        self.guesses.len()
    }
}

impl<T: Team> Player<T> for DictatedOperative<T> {
    fn name(&self) -> &str {
        &self.name
    }

    fn team(&self) -> T {
        self.team
    }
}

impl<T: Team> Operative<T> for DictatedOperative<T> {
    fn guess(&mut self, _state: &OperativeState<T>) -> Result<Guess, PlayerError> {
        next_move(&mut self.guesses, &self.name, self.auto_quit)
    }
}

/// Duet player with a clue script for its own side and a guess script for
/// the partner side.
#[derive(Clone, Debug)]
pub struct DictatedDuetPlayer {
    name: String,
    spymaster: DictatedSpymaster<DuetTeam>,
    operative: DictatedOperative<DuetTeam>,
}

impl DictatedDuetPlayer {
    pub fn new(
        clues: impl IntoIterator<Item = Clue>,
        guesses: impl IntoIterator<Item = Guess>,
        side: DuetSide,
    ) -> Self {
        let name = format!("Duet player {side}");
        Self {
            spymaster: DictatedSpymaster::new(clues, DuetTeam::Main).with_name(name.clone()),
            operative: DictatedOperative::new(guesses, DuetTeam::Main).with_name(name.clone()),
            name,
        }
    }

    #[must_use]
    pub fn with_auto_quit(mut self, auto_quit: bool) -> Self {
        self.spymaster = self.spymaster.with_auto_quit(auto_quit);
        self.operative = self.operative.with_auto_quit(auto_quit);
        self
    }
}

impl Player<DuetTeam> for DictatedDuetPlayer {
    fn name(&self) -> &str {
        &self.name
    }

    fn team(&self) -> DuetTeam {
        DuetTeam::Main
    }
}

impl Spymaster<DuetTeam> for DictatedDuetPlayer {
    fn give_clue(&mut self, state: &SpymasterState<DuetTeam>) -> Result<Clue, PlayerError> {
        self.spymaster.give_clue(state)
    }
}

impl Operative<DuetTeam> for DictatedDuetPlayer {
    fn guess(&mut self, state: &OperativeState<DuetTeam>) -> Result<Guess, PlayerError> {
        self.operative.guess(state)
    }
}
