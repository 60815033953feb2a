//! Codenames Duet: two players cooperate across two coupled boards.
//!
//! - Each player sees one board and clues their partner on it
//! - Greens found on one board are consumed on the other
//! - Both boards must be cleared before the shared timer runs out

mod board;
mod color;
mod side;
mod state;

pub use board::{common_green_amount, dual_board, from_vocabulary};
pub use color::{DuetColor, DuetTeam};
pub use side::{DuetSide, DuetSideState};
pub use state::DuetGameState;
