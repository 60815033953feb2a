//! Seating players around a game.
//!
//! A `Lineup` maps "whoever is on turn" to a concrete player for one variant
//! and forwards notifications to every seated player in seat order.

use tracing::debug;

use super::{Operative, Player, Spymaster};
use crate::core::{Clue, GivenClue, GivenGuess, Guess, PlayerError, SetupError, Team};
use crate::games::classic::{ClassicGameState, ClassicTeam};
use crate::games::duet::{DuetGameState, DuetSide, DuetTeam};
use crate::games::mini::MiniGameState;
use crate::rules::RulesEngine;

/// Players seated around one game of variant `E`.
pub trait Lineup<E: RulesEngine> {
    /// Show every player the board they are allowed to see.
    fn start(&mut self, game: &E);

    /// Ask the spymaster on turn for a clue.
    fn give_clue(&mut self, game: &E) -> Result<Clue, PlayerError>;

    /// Ask the operative on turn for a guess.
    fn guess(&mut self, game: &E) -> Result<Guess, PlayerError>;

    /// Forward an accepted clue to every player.
    fn clue_given(&mut self, given_clue: &GivenClue<E::Team>);

    /// Forward a revealed card to every player.
    fn guess_given(&mut self, given_guess: &GivenGuess<E::Team>);
}

// =============================================================================
// Team Players
// =============================================================================

/// The spymaster and operative of one team.
#[derive(Clone, Debug)]
pub struct TeamPlayers<S, O> {
    spymaster: S,
    operative: O,
}

impl<S, O> TeamPlayers<S, O> {
    /// Seat a team; both players must be on the same team.
    pub fn new<T>(spymaster: S, operative: O) -> Result<Self, SetupError>
    where
        T: Team,
        S: Spymaster<T>,
        O: Operative<T>,
    {
        if spymaster.team() != operative.team() {
            return Err(SetupError::InvalidConfig(format!(
                "spymaster {} and operative {} must be on the same team",
                spymaster.name(),
                operative.name()
            )));
        }
        Ok(Self { spymaster, operative })
    }

    pub fn spymaster(&self) -> &S {
        &self.spymaster
    }

    pub fn operative(&self) -> &O {
        &self.operative
    }

    pub fn into_parts(self) -> (S, O) {
        (self.spymaster, self.operative)
    }

    fn notify_clue<T: Team>(&mut self, given_clue: &GivenClue<T>)
    where
        S: Spymaster<T>,
        O: Operative<T>,
    {
        self.spymaster.on_clue_given(given_clue);
        self.operative.on_clue_given(given_clue);
    }

    fn notify_guess<T: Team>(&mut self, given_guess: &GivenGuess<T>)
    where
        S: Spymaster<T>,
        O: Operative<T>,
    {
        self.spymaster.on_guess_given(given_guess);
        self.operative.on_guess_given(given_guess);
    }
}

/// Mini: one team plays one board.
impl<S, O> Lineup<MiniGameState> for TeamPlayers<S, O>
where
    S: Spymaster<DuetTeam>,
    O: Operative<DuetTeam>,
{
    fn start(&mut self, game: &MiniGameState) {
        self.spymaster.on_game_start(game.board());
        self.operative.on_game_start(&game.board().censored());
    }

    fn give_clue(&mut self, game: &MiniGameState) -> Result<Clue, PlayerError> {
        self.spymaster.give_clue(&game.spymaster_state())
    }

    fn guess(&mut self, game: &MiniGameState) -> Result<Guess, PlayerError> {
        self.operative.guess(&game.operative_state())
    }

    fn clue_given(&mut self, given_clue: &GivenClue<DuetTeam>) {
        self.notify_clue(given_clue);
    }

    fn guess_given(&mut self, given_guess: &GivenGuess<DuetTeam>) {
        self.notify_guess(given_guess);
    }
}

// =============================================================================
// Classic
// =============================================================================

/// Blue and red teams of a Classic game.
#[derive(Clone, Debug)]
pub struct ClassicGamePlayers<S, O> {
    blue_team: TeamPlayers<S, O>,
    red_team: TeamPlayers<S, O>,
}

impl<S, O> ClassicGamePlayers<S, O>
where
    S: Spymaster<ClassicTeam>,
    O: Operative<ClassicTeam>,
{
    pub fn new(blue_team: TeamPlayers<S, O>, red_team: TeamPlayers<S, O>) -> Result<Self, SetupError> {
        for (team, players) in [(ClassicTeam::Blue, &blue_team), (ClassicTeam::Red, &red_team)] {
            if players.spymaster.team() != team {
                return Err(SetupError::InvalidConfig(format!(
                    "{} is not on the {team} team",
                    players.spymaster.name()
                )));
            }
        }
        Ok(Self { blue_team, red_team })
    }

    /// Seat exactly one spymaster and one operative per team.
    pub fn from_players(spymasters: Vec<S>, operatives: Vec<O>) -> Result<Self, SetupError> {
        let count = spymasters.len() + operatives.len();
        if count != 4 {
            return Err(SetupError::InvalidConfig(format!("there must be exactly 4 players, got {count}")));
        }
        let (mut blue_spymasters, mut red_spymasters): (Vec<S>, Vec<S>) =
            spymasters.into_iter().partition(|player| player.team() == ClassicTeam::Blue);
        let (mut blue_operatives, mut red_operatives): (Vec<O>, Vec<O>) =
            operatives.into_iter().partition(|player| player.team() == ClassicTeam::Blue);

        let blue_team = find_team(&mut blue_spymasters, &mut blue_operatives, ClassicTeam::Blue)?;
        let red_team = find_team(&mut red_spymasters, &mut red_operatives, ClassicTeam::Red)?;
        Ok(Self { blue_team, red_team })
    }

    pub fn team(&self, team: ClassicTeam) -> &TeamPlayers<S, O> {
        match team {
            ClassicTeam::Blue => &self.blue_team,
            ClassicTeam::Red => &self.red_team,
        }
    }

    fn team_mut(&mut self, team: ClassicTeam) -> &mut TeamPlayers<S, O> {
        match team {
            ClassicTeam::Blue => &mut self.blue_team,
            ClassicTeam::Red => &mut self.red_team,
        }
    }
}

fn find_team<S, O>(spymasters: &mut Vec<S>, operatives: &mut Vec<O>, team: ClassicTeam) -> Result<TeamPlayers<S, O>, SetupError> {
    if spymasters.len() != 1 {
        return Err(SetupError::InvalidConfig(format!("{team} team needs exactly one spymaster")));
    }
    if operatives.len() != 1 {
        return Err(SetupError::InvalidConfig(format!("{team} team needs exactly one operative")));
    }
    match (spymasters.pop(), operatives.pop()) {
        (Some(spymaster), Some(operative)) => Ok(TeamPlayers { spymaster, operative }),
        _ => Err(SetupError::InvalidConfig(format!("{team} team is incomplete"))),
    }
}

impl<S, O> Lineup<ClassicGameState> for ClassicGamePlayers<S, O>
where
    S: Spymaster<ClassicTeam>,
    O: Operative<ClassicTeam>,
{
    fn start(&mut self, game: &ClassicGameState) {
        let censored = game.board().censored();
        self.blue_team.spymaster.on_game_start(game.board());
        self.red_team.spymaster.on_game_start(game.board());
        self.blue_team.operative.on_game_start(&censored);
        self.red_team.operative.on_game_start(&censored);
    }

    fn give_clue(&mut self, game: &ClassicGameState) -> Result<Clue, PlayerError> {
        let spymaster = &mut self.team_mut(game.current_team()).spymaster;
        debug!(player = spymaster.name(), "asking for clue");
        spymaster.give_clue(&game.spymaster_state())
    }

    fn guess(&mut self, game: &ClassicGameState) -> Result<Guess, PlayerError> {
        let operative = &mut self.team_mut(game.current_team()).operative;
        debug!(player = operative.name(), "asking for guess");
        operative.guess(&game.operative_state())
    }

    fn clue_given(&mut self, given_clue: &GivenClue<ClassicTeam>) {
        self.blue_team.notify_clue(given_clue);
        self.red_team.notify_clue(given_clue);
    }

    fn guess_given(&mut self, given_guess: &GivenGuess<ClassicTeam>) {
        self.blue_team.notify_guess(given_guess);
        self.red_team.notify_guess(given_guess);
    }
}

// =============================================================================
// Duet
// =============================================================================

/// The two players of a Duet game.
///
/// Player A clues side A and guesses on side B; player B the other way round.
#[derive(Clone, Debug)]
pub struct DuetGamePlayers<A, B> {
    player_a: A,
    player_b: B,
}

impl<A, B> DuetGamePlayers<A, B>
where
    A: Spymaster<DuetTeam> + Operative<DuetTeam>,
    B: Spymaster<DuetTeam> + Operative<DuetTeam>,
{
    pub fn new(player_a: A, player_b: B) -> Self {
        Self { player_a, player_b }
    }

    pub fn player_a(&self) -> &A {
        &self.player_a
    }

    pub fn player_b(&self) -> &B {
        &self.player_b
    }
}

impl<A, B> Lineup<DuetGameState> for DuetGamePlayers<A, B>
where
    A: Spymaster<DuetTeam> + Operative<DuetTeam>,
    B: Spymaster<DuetTeam> + Operative<DuetTeam>,
{
    fn start(&mut self, game: &DuetGameState) {
        let (board_a, board_b) = (game.side_a().board(), game.side_b().board());
        self.player_a.on_game_start(board_a);
        self.player_a.on_game_start(&board_b.censored());
        self.player_b.on_game_start(board_b);
        self.player_b.on_game_start(&board_a.censored());
    }

    fn give_clue(&mut self, game: &DuetGameState) -> Result<Clue, PlayerError> {
        let state = game.spymaster_state();
        match game.current_playing_side() {
            DuetSide::SideA => self.player_a.give_clue(&state),
            DuetSide::SideB => self.player_b.give_clue(&state),
        }
    }

    fn guess(&mut self, game: &DuetGameState) -> Result<Guess, PlayerError> {
        let state = game.operative_state();
        match game.current_playing_side() {
            DuetSide::SideA => self.player_b.guess(&state),
            DuetSide::SideB => self.player_a.guess(&state),
        }
    }

    fn clue_given(&mut self, given_clue: &GivenClue<DuetTeam>) {
        self.player_a.on_clue_given(given_clue);
        self.player_b.on_clue_given(given_clue);
    }

    fn guess_given(&mut self, given_guess: &GivenGuess<DuetTeam>) {
        self.player_a.on_guess_given(given_guess);
        self.player_b.on_guess_given(given_guess);
    }
}
