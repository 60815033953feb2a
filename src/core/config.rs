//! Game configuration types.
//!
//! Board composition and token budgets are plain data with sensible defaults
//! and `with_*` builders. Every config checks itself with `validate()` before
//! a board or state is built from it.

use serde::{Deserialize, Serialize};

use super::error::SetupError;
use crate::games::classic::ClassicTeam;

/// Default number of cards on a board.
pub const DEFAULT_BOARD_SIZE: usize = 25;

/// Composition of a random Classic board.
///
/// Each team gets `board_size / 3` cards, the first team one more, assassins
/// are fixed and the rest is neutral.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClassicBoardConfig {
    pub board_size: usize,
    pub assassin_amount: usize,
    /// Team that starts. `None` picks one at random.
    pub first_team: Option<ClassicTeam>,
}

impl Default for ClassicBoardConfig {
    fn default() -> Self {
        Self {
            board_size: DEFAULT_BOARD_SIZE,
            assassin_amount: 1,
            first_team: None,
        }
    }
}

impl ClassicBoardConfig {
    #[must_use]
    pub fn with_board_size(mut self, board_size: usize) -> Self {
        self.board_size = board_size;
        self
    }

    #[must_use]
    pub fn with_assassin_amount(mut self, assassin_amount: usize) -> Self {
        self.assassin_amount = assassin_amount;
        self
    }

    #[must_use]
    pub fn with_first_team(mut self, team: ClassicTeam) -> Self {
        self.first_team = Some(team);
        self
    }

    /// Cards of the team that does not start.
    #[must_use]
    pub fn second_team_amount(&self) -> usize {
        self.board_size / 3
    }

    /// Cards of the starting team.
    #[must_use]
    pub fn first_team_amount(&self) -> usize {
        self.second_team_amount() + 1
    }

    /// Neutral cards, or `None` if the other colors do not fit.
    #[must_use]
    pub fn neutral_amount(&self) -> Option<usize> {
        self.board_size
            .checked_sub(self.first_team_amount() + self.second_team_amount())?
            .checked_sub(self.assassin_amount)
    }

    pub fn validate(&self) -> Result<(), SetupError> {
        if self.board_size < 3 {
            return Err(SetupError::InvalidConfig(format!(
                "board size {} is too small",
                self.board_size
            )));
        }
        if self.neutral_amount().is_none() {
            return Err(SetupError::InvalidConfig(format!(
                "{} assassin(s) do not fit on a board of {}",
                self.assassin_amount, self.board_size
            )));
        }
        Ok(())
    }
}

/// Composition of a random Duet board.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct DuetBoardConfig {
    pub board_size: usize,
    pub green_amount: usize,
    pub assassin_amount: usize,
}

impl Default for DuetBoardConfig {
    fn default() -> Self {
        Self {
            board_size: DEFAULT_BOARD_SIZE,
            green_amount: 9,
            assassin_amount: 3,
        }
    }
}

impl DuetBoardConfig {
    #[must_use]
    pub fn with_board_size(mut self, board_size: usize) -> Self {
        self.board_size = board_size;
        self
    }

    #[must_use]
    pub fn with_green_amount(mut self, green_amount: usize) -> Self {
        self.green_amount = green_amount;
        self
    }

    #[must_use]
    pub fn with_assassin_amount(mut self, assassin_amount: usize) -> Self {
        self.assassin_amount = assassin_amount;
        self
    }

    #[must_use]
    pub fn neutral_amount(&self) -> Option<usize> {
        self.board_size
            .checked_sub(self.green_amount)?
            .checked_sub(self.assassin_amount)
    }

    pub fn validate(&self) -> Result<(), SetupError> {
        if self.green_amount == 0 {
            return Err(SetupError::InvalidConfig("duet board needs green cards".into()));
        }
        if self.neutral_amount().is_none() {
            return Err(SetupError::InvalidConfig(format!(
                "{} green and {} assassin cards do not fit on a board of {}",
                self.green_amount, self.assassin_amount, self.board_size
            )));
        }
        Ok(())
    }
}

/// Shared timer and mistake budget of a Duet game.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct DuetConfig {
    pub timer_tokens: i32,
    pub allowed_mistakes: i32,
}

impl Default for DuetConfig {
    fn default() -> Self {
        Self {
            timer_tokens: 9,
            allowed_mistakes: 9,
        }
    }
}

impl DuetConfig {
    #[must_use]
    pub fn with_timer_tokens(mut self, timer_tokens: i32) -> Self {
        self.timer_tokens = timer_tokens;
        self
    }

    #[must_use]
    pub fn with_allowed_mistakes(mut self, allowed_mistakes: i32) -> Self {
        self.allowed_mistakes = allowed_mistakes;
        self
    }

    pub fn validate(&self) -> Result<(), SetupError> {
        validate_tokens(self.timer_tokens, self.allowed_mistakes)
    }
}

/// Timer and mistake budget of a Mini game.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct MiniConfig {
    pub timer_tokens: i32,
    pub allowed_mistakes: i32,
}

impl Default for MiniConfig {
    fn default() -> Self {
        Self {
            timer_tokens: 5,
            allowed_mistakes: 4,
        }
    }
}

impl MiniConfig {
    #[must_use]
    pub fn with_timer_tokens(mut self, timer_tokens: i32) -> Self {
        self.timer_tokens = timer_tokens;
        self
    }

    #[must_use]
    pub fn with_allowed_mistakes(mut self, allowed_mistakes: i32) -> Self {
        self.allowed_mistakes = allowed_mistakes;
        self
    }

    pub fn validate(&self) -> Result<(), SetupError> {
        validate_tokens(self.timer_tokens, self.allowed_mistakes)
    }
}

pub(crate) fn validate_tokens(timer_tokens: i32, allowed_mistakes: i32) -> Result<(), SetupError> {
    if allowed_mistakes <= 0 {
        return Err(SetupError::InvalidConfig(format!(
            "allowed mistakes must be positive, got {allowed_mistakes}"
        )));
    }
    if allowed_mistakes > timer_tokens {
        return Err(SetupError::InvalidConfig(format!(
            "allowed mistakes ({allowed_mistakes}) cannot exceed timer tokens ({timer_tokens})"
        )));
    }
    Ok(())
}
