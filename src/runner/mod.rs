//! The turn loop.
//!
//! `Runner` owns a game and a lineup. It asks whoever is on turn for a move,
//! feeds the move to the rules engine and tells everyone what happened, until
//! the engine reports an outcome.
//!
//! ## Policy
//!
//! - Invalid guesses are asked again; every other rule error propagates
//! - `PlayerError::Quit` becomes the quit move, so the engine decides what a
//!   quit means; `PlayerError::Exhausted` propagates
//! - Subscribers run in registration order, after the seated players

use tracing::{debug, info, instrument};

use crate::core::{Clue, GivenClue, GivenGuess, Guess, PlayerError, PlayerRole, RuleError, RunnerError};
use crate::games::classic::{ClassicGameState, ClassicTeam};
use crate::players::{ClassicGamePlayers, Lineup, Operative, Spymaster};
use crate::rules::RulesEngine;

type StartSubscriber<E> = Box<dyn FnMut(&E)>;
type ClueSubscriber<T> = Box<dyn FnMut(&GivenClue<T>)>;
type GuessSubscriber<T> = Box<dyn FnMut(&GivenGuess<T>)>;

/// Drives one game to its outcome.
///
/// ```
/// use codenames::core::{Board, Card, Clue, Guess, MiniConfig};
/// use codenames::games::duet::{DuetColor, DuetTeam};
/// use codenames::games::mini::MiniGameState;
/// use codenames::players::{DictatedOperative, DictatedSpymaster, TeamPlayers};
/// use codenames::rules::GameResult;
/// use codenames::runner::Runner;
///
/// let board = Board::new("english", vec![Card::new("Moon", DuetColor::Green)]);
/// let game = MiniGameState::from_board(board, MiniConfig::default()).unwrap();
/// let players = TeamPlayers::new(
///     DictatedSpymaster::new([Clue::new("night", 1)], DuetTeam::Main),
///     DictatedOperative::new([Guess::new(0)], DuetTeam::Main),
/// )
/// .unwrap();
///
/// let mut runner = Runner::new(game, players);
/// assert_eq!(runner.run().unwrap(), GameResult::TargetReached);
/// ```
pub struct Runner<E: RulesEngine, L: Lineup<E>> {
    game: E,
    lineup: L,
    start_subscribers: Vec<StartSubscriber<E>>,
    clue_subscribers: Vec<ClueSubscriber<E::Team>>,
    guess_subscribers: Vec<GuessSubscriber<E::Team>>,
}

impl<E: RulesEngine, L: Lineup<E>> Runner<E, L> {
    pub fn new(game: E, lineup: L) -> Self {
        Self {
            game,
            lineup,
            start_subscribers: Vec::new(),
            clue_subscribers: Vec::new(),
            guess_subscribers: Vec::new(),
        }
    }

    /// Called once with the game before the first move.
    ///
    /// Subscribers get the whole game rather than a board: a Duet game has
    /// two boards, and each variant exposes its own (`board()`,
    /// `side_a().board()`).
    pub fn on_game_start(&mut self, subscriber: impl FnMut(&E) + 'static) -> &mut Self {
        self.start_subscribers.push(Box::new(subscriber));
        self
    }

    /// Called after every accepted clue.
    pub fn on_clue_given(&mut self, subscriber: impl FnMut(&GivenClue<E::Team>) + 'static) -> &mut Self {
        self.clue_subscribers.push(Box::new(subscriber));
        self
    }

    /// Called after every revealed card.
    pub fn on_guess_given(&mut self, subscriber: impl FnMut(&GivenGuess<E::Team>) + 'static) -> &mut Self {
        self.guess_subscribers.push(Box::new(subscriber));
        self
    }

    #[must_use]
    pub fn game(&self) -> &E {
        &self.game
    }

    #[must_use]
    pub fn lineup(&self) -> &L {
        &self.lineup
    }

    pub fn into_parts(self) -> (E, L) {
        (self.game, self.lineup)
    }

    /// Play until the engine reports an outcome.
    ///
    /// Running a finished game returns its outcome without asking anyone.
    #[instrument(skip(self))]
    pub fn run(&mut self) -> Result<E::Outcome, RunnerError> {
        self.lineup.start(&self.game);
        for subscriber in &mut self.start_subscribers {
            subscriber(&self.game);
        }

        loop {
            if let Some(outcome) = self.game.outcome() {
                info!(%outcome, "game over");
                return Ok(outcome);
            }
            match self.game.current_player_role() {
                PlayerRole::Spymaster => self.play_clue()?,
                PlayerRole::Operative => self.play_guess()?,
            }
        }
    }

    fn play_clue(&mut self) -> Result<(), RunnerError> {
        let clue = match self.lineup.give_clue(&self.game) {
            Ok(clue) => clue,
            Err(PlayerError::Quit(name)) => {
                info!(player = %name, "spymaster quit");
                Clue::quit()
            }
            Err(err) => return Err(err.into()),
        };
        let Some(given_clue) = self.game.process_clue(&clue)? else {
            return Ok(());
        };
        info!(clue = %given_clue, "clue given");
        self.lineup.clue_given(&given_clue);
        for subscriber in &mut self.clue_subscribers {
            subscriber(&given_clue);
        }
        Ok(())
    }

    fn play_guess(&mut self) -> Result<(), RunnerError> {
        let given_guess = loop {
            let guess = match self.lineup.guess(&self.game) {
                Ok(guess) => guess,
                Err(PlayerError::Quit(name)) => {
                    info!(player = %name, "operative quit");
                    Guess::quit()
                }
                Err(err) => return Err(err.into()),
            };
            match self.game.process_guess(guess) {
                Ok(given_guess) => break given_guess,
                Err(RuleError::InvalidGuess(reason)) => {
                    debug!(%reason, card_index = guess.card_index, "invalid guess, asking again");
                }
                Err(err) => return Err(err.into()),
            }
        };
        let Some(given_guess) = given_guess else {
            return Ok(());
        };
        info!(guess = %given_guess, "guess given");
        self.lineup.guess_given(&given_guess);
        for subscriber in &mut self.guess_subscribers {
            subscriber(&given_guess);
        }
        Ok(())
    }
}

impl<S, O> Runner<ClassicGameState, ClassicGamePlayers<S, O>>
where
    S: Spymaster<ClassicTeam>,
    O: Operative<ClassicTeam>,
{
    /// Seat two spymasters and two operatives at a Classic game.
    ///
    /// Fails with `RunnerError::Setup` unless each team gets exactly one of
    /// each role.
    pub fn classic(game: ClassicGameState, spymasters: Vec<S>, operatives: Vec<O>) -> Result<Self, RunnerError> {
        let lineup = ClassicGamePlayers::from_players(spymasters, operatives)?;
        Ok(Self::new(game, lineup))
    }
}
