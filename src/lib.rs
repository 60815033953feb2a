//! # codenames
//!
//! A rules engine for Codenames-style word guessing games.
//!
//! ## Design Principles
//!
//! 1. **One State Machine, Many Variants**: Clue and guess resolution is
//!    written once over the `CardColor` / `Team` traits. Classic, Duet and
//!    Mini only decide turn passing and outcomes.
//!
//! 2. **Views, Not State**: Players never touch a game. They receive a
//!    `SpymasterState` or an `OperativeState` built for their role.
//!
//! 3. **Moves Are Values**: Passing and quitting are moves like any other,
//!    and a rejected move is an error value that leaves the state untouched.
//!
//! ## Architecture
//!
//! - **Persistent Histories**: Clue and guess histories use `im-rs` vectors,
//!   so handing out a view costs O(1).
//!
//! - **Deterministic Setup**: Boards are dealt from a seeded `GameRng`; the
//!   Duet partner board comes from a derived stream of the same seed.
//!
//! - **Snapshots**: Every state is `serde`-serializable, to JSON for hosts and
//!   to `bincode` for checkpoints.
//!
//! ## Modules
//!
//! - `core`: Cards, boards, moves, scores, views, RNG, configuration, errors
//! - `rules`: Shared clue/guess resolution and the `RulesEngine` trait
//! - `games`: Classic, Duet and Mini state machines
//! - `players`: Player traits, lineups and scripted players
//! - `runner`: The turn loop
//! - `vocabulary`: Word lists boards are dealt from

pub mod core;
pub mod games;
pub mod players;
pub mod rules;
pub mod runner;
pub mod vocabulary;

// Re-export commonly used types
pub use crate::core::{
    Board, Card, CardColor, Clue, GameRng, GivenClue, GivenGuess, Guess,
    OperativeState, PlayerRole, PlayerState, Score, SpymasterState, Team, TeamScore,
    ClassicBoardConfig, DuetBoardConfig, DuetConfig, MiniConfig,
    BoardError, PlayerError, RuleError, RunnerError, SetupError, SnapshotError,
};

pub use crate::games::GameType;
pub use crate::games::classic::{ClassicColor, ClassicGameState, ClassicTeam, Winner, WinningReason};
pub use crate::games::duet::{DuetColor, DuetGameState, DuetSide, DuetSideState, DuetTeam};
pub use crate::games::mini::MiniGameState;

pub use crate::players::{Lineup, Operative, Player, Spymaster};
pub use crate::rules::{GameResult, RulesEngine};
pub use crate::runner::Runner;
pub use crate::vocabulary::{BuiltinVocabulary, Vocabulary, VocabularyProvider};
