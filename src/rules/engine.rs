//! Rules engine trait for game variants.
//!
//! Variants implement `RulesEngine` to define:
//! - How clues and guesses change the state
//! - Which role acts next
//! - When the game is over and how it ended

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::core::{Clue, GivenClue, GivenGuess, Guess, OperativeState, PlayerRole, RuleError, SpymasterState, Team};

/// How a cooperative (Duet / Mini) game ended.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum GameResult {
    /// Every target card was found.
    TargetReached,
    AssassinHit,
    GameQuit,
    TimerTokensDepleted,
    MistakeLimitReached,
}

impl GameResult {
    /// Only `TargetReached` is a win.
    #[must_use]
    pub const fn is_win(self) -> bool {
        matches!(self, GameResult::TargetReached)
    }
}

impl fmt::Display for GameResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let reason = match self {
            GameResult::TargetReached => "target reached",
            GameResult::AssassinHit => "assassin hit",
            GameResult::GameQuit => "game quit",
            GameResult::TimerTokensDepleted => "timer tokens depleted",
            GameResult::MistakeLimitReached => "mistake limit reached",
        };
        let verdict = if self.is_win() { "won" } else { "lost" };
        write!(f, "{verdict}: {reason}")
    }
}

/// Rules engine trait.
///
/// The runner drives a game only through this trait.
///
/// ## Implementation Notes
///
/// - `process_clue` / `process_guess`: reject with `GameIsOver` once
///   `outcome` is set, with `InvalidTurn` when the other role is on turn
/// - A rejected move never changes the state, except that a rejected clue is
///   kept in the raw clue history
/// - `Ok(None)` means the move was a pass or a quit
pub trait RulesEngine {
    /// Team type of the variant.
    type Team: Team;

    /// How a finished game ended.
    type Outcome: Clone + fmt::Debug + fmt::Display + PartialEq;

    /// Submit a spymaster clue.
    fn process_clue(&mut self, clue: &Clue) -> Result<Option<GivenClue<Self::Team>>, RuleError>;

    /// Submit an operative guess.
    fn process_guess(&mut self, guess: Guess) -> Result<Option<GivenGuess<Self::Team>>, RuleError>;

    /// `Some` once the game is over.
    fn outcome(&self) -> Option<Self::Outcome>;

    /// Role expected to move next.
    fn current_player_role(&self) -> PlayerRole;

    /// View for the spymaster on turn.
    fn spymaster_state(&self) -> SpymasterState<Self::Team>;

    /// View for the operative on turn.
    fn operative_state(&self) -> OperativeState<Self::Team>;

    // === Convenience Methods ===

    fn is_game_over(&self) -> bool {
        self.outcome().is_some()
    }
}
