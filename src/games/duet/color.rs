//! Duet colors and the single cooperative team.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::core::{CardColor, Team};

/// Card colors of a Duet board.
///
/// `Irrelevant` never appears on a dealt board. It is what a card consumed
/// through the partner board looks like.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum DuetColor {
    Green,
    Neutral,
    Assassin,
    Irrelevant,
}

impl CardColor for DuetColor {
    fn is_neutral(self) -> bool {
        self == DuetColor::Neutral
    }

    fn is_assassin(self) -> bool {
        self == DuetColor::Assassin
    }

    fn consumed_marker() -> Option<Self> {
        Some(DuetColor::Irrelevant)
    }

    fn emoji(self) -> &'static str {
        match self {
            DuetColor::Green => "🟩",
            DuetColor::Neutral => "⬜",
            DuetColor::Assassin => "💀",
            DuetColor::Irrelevant => "🔘",
        }
    }

    fn all() -> &'static [Self] {
        &[DuetColor::Green, DuetColor::Neutral, DuetColor::Assassin, DuetColor::Irrelevant]
    }
}

impl fmt::Display for DuetColor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DuetColor::Green => write!(f, "Green"),
            DuetColor::Neutral => write!(f, "Neutral"),
            DuetColor::Assassin => write!(f, "Assassin"),
            DuetColor::Irrelevant => write!(f, "Irrelevant"),
        }
    }
}

/// Both Duet players are on the same team.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum DuetTeam {
    #[default]
    Main,
}

impl Team for DuetTeam {
    type Color = DuetColor;

    fn as_card_color(self) -> DuetColor {
        DuetColor::Green
    }

    fn opponent(self) -> Self {
        self
    }

    fn all() -> &'static [Self] {
        &[DuetTeam::Main]
    }
}

impl fmt::Display for DuetTeam {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Main")
    }
}
