//! Classic colors and teams.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::core::{CardColor, Team};

/// Card colors of a Classic board.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ClassicColor {
    Blue,
    Red,
    Neutral,
    Assassin,
}

impl CardColor for ClassicColor {
    fn is_neutral(self) -> bool {
        self == ClassicColor::Neutral
    }

    fn is_assassin(self) -> bool {
        self == ClassicColor::Assassin
    }

    fn emoji(self) -> &'static str {
        match self {
            ClassicColor::Blue => "🟦",
            ClassicColor::Red => "🟥",
            ClassicColor::Neutral => "⬜",
            ClassicColor::Assassin => "💀",
        }
    }

    fn all() -> &'static [Self] {
        &[ClassicColor::Blue, ClassicColor::Red, ClassicColor::Neutral, ClassicColor::Assassin]
    }
}

impl fmt::Display for ClassicColor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ClassicColor::Blue => write!(f, "Blue"),
            ClassicColor::Red => write!(f, "Red"),
            ClassicColor::Neutral => write!(f, "Neutral"),
            ClassicColor::Assassin => write!(f, "Assassin"),
        }
    }
}

/// The two competing teams.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ClassicTeam {
    Blue,
    Red,
}

impl Team for ClassicTeam {
    type Color = ClassicColor;

    fn as_card_color(self) -> ClassicColor {
        match self {
            ClassicTeam::Blue => ClassicColor::Blue,
            ClassicTeam::Red => ClassicColor::Red,
        }
    }

    fn opponent(self) -> Self {
        match self {
            ClassicTeam::Blue => ClassicTeam::Red,
            ClassicTeam::Red => ClassicTeam::Blue,
        }
    }

    fn all() -> &'static [Self] {
        &[ClassicTeam::Blue, ClassicTeam::Red]
    }
}

impl fmt::Display for ClassicTeam {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ClassicTeam::Blue => write!(f, "Blue"),
            ClassicTeam::Red => write!(f, "Red"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_opponent_is_involution() {
        for &team in <ClassicTeam as Team>::all() {
            assert_ne!(team.opponent(), team);
            assert_eq!(team.opponent().opponent(), team);
        }
    }

    #[test]
    fn test_team_colors() {
        assert_eq!(ClassicTeam::Blue.as_card_color(), ClassicColor::Blue);
        assert!(ClassicColor::Neutral.is_neutral());
        assert!(ClassicColor::Assassin.is_assassin());
        assert!(ClassicColor::consumed_marker().is_none());
    }

    #[test]
    fn test_color_codes() {
        assert_eq!(serde_json::to_string(&ClassicColor::Assassin).unwrap(), "\"ASSASSIN\"");
        let team: ClassicTeam = serde_json::from_str("\"RED\"").unwrap();
        assert_eq!(team, ClassicTeam::Red);
    }
}
