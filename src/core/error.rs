//! Error kinds raised by boards, the rules engine, players and the runner.
//!
//! Rule violations are plain values: a rejected clue or guess never leaves the
//! state half-mutated, so callers can inspect the error and retry.

use thiserror::Error;

/// Card lookup failures.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum BoardError {
    /// Index outside `0..size`.
    #[error("card index out of range: {index} (board size {size})")]
    OutOfRange { index: i64, size: usize },

    /// No card's canonical word matches.
    #[error("card not found: {0}")]
    CardNotFound(String),
}

/// Game rule violations raised by `process_clue` / `process_guess`.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RuleError {
    /// Any move submitted after the game reached a result.
    #[error("game is over")]
    GameIsOver,

    /// Move submitted by the wrong role.
    #[error("invalid turn: {0}")]
    InvalidTurn(String),

    /// Clue word is on the board or was already used.
    #[error("invalid clue: {0}")]
    InvalidClue(String),

    /// Guessed card is out of range, unknown, or already revealed.
    #[error("invalid guess: {0}")]
    InvalidGuess(String),
}

impl RuleError {
    /// True for `InvalidTurn` and for `GameIsOver`, which is a special case of
    /// it: once the game is over every move is out of turn.
    #[must_use]
    pub fn is_invalid_turn(&self) -> bool {
        matches!(self, RuleError::GameIsOver | RuleError::InvalidTurn(_))
    }
}

impl From<BoardError> for RuleError {
    fn from(err: BoardError) -> Self {
        RuleError::InvalidGuess(err.to_string())
    }
}

/// Failures while building boards, states or configuration.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SetupError {
    #[error("board must be clean")]
    BoardNotClean,

    #[error("not enough words: need {needed}, vocabulary has {available}")]
    NotEnoughWords { needed: usize, available: usize },

    #[error("invalid board composition: {0}")]
    InvalidComposition(String),

    #[error("invalid configuration: {0}")]
    InvalidConfig(String),

    #[error("unknown language: {0}")]
    UnknownLanguage(String),
}

/// Signals raised by player collaborators instead of returning a move.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PlayerError {
    /// The player deliberately abandons the game.
    #[error("{0} quit the game")]
    Quit(String),

    /// The player has no more moves to offer (scripted input ran out).
    #[error("{0} ran out of moves")]
    Exhausted(String),
}

/// Everything that can stop a runner before the game reaches a result.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RunnerError {
    #[error(transparent)]
    Rule(#[from] RuleError),

    #[error(transparent)]
    Player(#[from] PlayerError),

    #[error(transparent)]
    Setup(#[from] SetupError),
}

/// Failures while encoding or decoding state snapshots.
#[derive(Debug, Error)]
pub enum SnapshotError {
    #[error("binary snapshot failed: {0}")]
    Binary(#[from] bincode::Error),

    #[error("json snapshot failed: {0}")]
    Json(#[from] serde_json::Error),
}
