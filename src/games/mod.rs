//! Game variants.
//!
//! Each variant owns its colors, teams, board dealing and state machine, and
//! implements `RulesEngine` so the runner can drive it.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::core::SetupError;

pub mod classic;
pub mod duet;
pub mod mini;

/// Variant tag for hosts choosing a game by name.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum GameType {
    Classic,
    Duet,
    Mini,
}

impl GameType {
    #[must_use]
    pub const fn all() -> [GameType; 3] {
        [GameType::Classic, GameType::Duet, GameType::Mini]
    }

    #[must_use]
    pub const fn code(self) -> &'static str {
        match self {
            GameType::Classic => "CLASSIC",
            GameType::Duet => "DUET",
            GameType::Mini => "MINI",
        }
    }
}

impl fmt::Display for GameType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

impl FromStr for GameType {
    type Err = SetupError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        GameType::all()
            .into_iter()
            .find(|game_type| game_type.code().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| SetupError::InvalidConfig(format!("unknown game type '{s}'")))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_game_type_from_str() {
        assert_eq!("duet".parse::<GameType>().unwrap(), GameType::Duet);
        assert_eq!(" MINI ".parse::<GameType>().unwrap(), GameType::Mini);
        assert!("chess".parse::<GameType>().is_err());
    }

    #[test]
    fn test_game_type_serde_code() {
        assert_eq!(serde_json::to_string(&GameType::Classic).unwrap(), "\"CLASSIC\"");
        assert_eq!(GameType::Classic.to_string(), "CLASSIC");
    }
}
