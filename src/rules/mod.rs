//! Shared state-machine machinery.
//!
//! - `table`: clue and guess resolution common to every variant
//! - `engine`: the `RulesEngine` trait the runner drives, plus `GameResult`
//!
//! Variants decide turn passing and outcomes; the table never does.

pub mod engine;
pub mod table;

pub use engine::{GameResult, RulesEngine};
