//! Player agents the runner asks for moves.
//!
//! A player is seated on one team and acts as a `Spymaster`, an `Operative`,
//! or both (Duet players clue their own side and guess on the partner side).
//! How a player picks a move is its own business: scripted, human-driven or
//! model-driven players all implement the same traits.
//!
//! ## Lineups
//!
//! Seating differs per variant, so each variant gets a lineup type that
//! implements `Lineup` for its state machine:
//! - `ClassicGamePlayers`: blue and red `TeamPlayers`
//! - `DuetGamePlayers`: two players, each a spymaster and an operative
//! - `TeamPlayers`: a single team, used for Mini

mod dictated;
mod lineup;

pub use dictated::{DictatedDuetPlayer, DictatedOperative, DictatedSpymaster};
pub use lineup::{ClassicGamePlayers, DuetGamePlayers, Lineup, TeamPlayers};

use crate::core::{Board, Clue, GivenClue, GivenGuess, Guess, OperativeState, PlayerError, SpymasterState, Team};

/// A seated participant.
///
/// The notification hooks default to no-ops.
pub trait Player<T: Team> {
    /// Display name, used in logs.
    fn name(&self) -> &str;

    /// The team the player is seated on.
    fn team(&self) -> T;

    /// Called once before the first move with the board this player sees.
    fn on_game_start(&mut self, _board: &Board<T::Color>) {}

    /// Called after every accepted clue.
    fn on_clue_given(&mut self, _given_clue: &GivenClue<T>) {}

    /// Called after every revealed card.
    fn on_guess_given(&mut self, _given_guess: &GivenGuess<T>) {}
}

/// A player that gives clues.
pub trait Spymaster<T: Team>: Player<T> {
    /// Pick a clue. `Err(PlayerError::Quit)` quits the game.
    fn give_clue(&mut self, state: &SpymasterState<T>) -> Result<Clue, PlayerError>;
}

/// A player that guesses cards.
pub trait Operative<T: Team>: Player<T> {
    /// Pick a card, pass or quit.
    fn guess(&mut self, state: &OperativeState<T>) -> Result<Guess, PlayerError>;
}

impl<T: Team, P: Player<T> + ?Sized> Player<T> for Box<P> {
    fn name(&self) -> &str {
        (**self).name()
    }

    fn team(&self) -> T {
        (**self).team()
    }

    fn on_game_start(&mut self, board: &Board<T::Color>) {
        (**self).on_game_start(board);
    }

    fn on_clue_given(&mut self, given_clue: &GivenClue<T>) {
        (**self).on_clue_given(given_clue);
    }

    fn on_guess_given(&mut self, given_guess: &GivenGuess<T>) {
        (**self).on_guess_given(given_guess);
    }
}

impl<T: Team, P: Spymaster<T> + ?Sized> Spymaster<T> for Box<P> {
    fn give_clue(&mut self, state: &SpymasterState<T>) -> Result<Clue, PlayerError> {
        (**self).give_clue(state)
    }
}

impl<T: Team, P: Operative<T> + ?Sized> Operative<T> for Box<P> {
    fn guess(&mut self, state: &OperativeState<T>) -> Result<Guess, PlayerError> {
        (**self).guess(state)
    }
}
