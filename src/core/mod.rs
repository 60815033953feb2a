//! Core game types: cards, boards, moves, scores, views, RNG, configuration.
//!
//! This module contains the building blocks shared by every variant. Variants
//! plug in their own color and team sets through the `CardColor` and `Team`
//! traits rather than modifying the core.

pub mod board;
pub mod card;
pub mod config;
pub mod error;
pub mod history;
pub mod moves;
pub mod rng;
pub mod score;
pub mod snapshot;
pub mod state;
pub mod team;

pub use board::{two_integer_factors, Board, CardKey};
pub use card::{canonical_format, Card, CardColor};
pub use config::{ClassicBoardConfig, DuetBoardConfig, DuetConfig, MiniConfig, DEFAULT_BOARD_SIZE};
pub use error::{BoardError, PlayerError, RuleError, RunnerError, SetupError, SnapshotError};
pub use history::Move;
pub use moves::{Clue, ForWords, GivenClue, GivenGuess, Guess, PASS_GUESS, QUIT_GAME};
pub use rng::GameRng;
pub use score::{Score, TeamScore};
pub use snapshot::{from_bytes, to_bytes, to_json_with_derived, DerivedFields};
pub use state::{OperativeState, PlayerState, SpymasterState};
pub use team::{PlayerRole, Team};
