//! Classic Codenames: two teams race to find their cards.
//!
//! - Blue and red spymasters take turns giving clues
//! - Operatives guess until they miss, pass or run out of guesses
//! - First team to find all its cards wins; hitting the assassin loses

mod board;
mod color;
mod state;
mod winner;

pub use board::{first_team, from_vocabulary};
pub use color::{ClassicColor, ClassicTeam};
pub use state::ClassicGameState;
pub use winner::{Winner, WinningReason};
