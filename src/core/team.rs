//! Team and role capabilities shared by every game variant.
//!
//! Each variant defines a closed set of teams and card colors. The rules
//! engine only needs to know which color a team is after and who its opponent
//! is, so those two questions form the `Team` trait.

use std::fmt;
use std::hash::Hash;

use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};

use super::card::CardColor;

/// A side in a game variant.
///
/// ## Example
///
/// ```
/// use codenames::core::Team;
/// use codenames::games::classic::{ClassicColor, ClassicTeam};
///
/// assert_eq!(ClassicTeam::Blue.opponent(), ClassicTeam::Red);
/// assert_eq!(ClassicTeam::Red.as_card_color(), ClassicColor::Red);
/// ```
pub trait Team:
    Copy + Eq + Ord + Hash + fmt::Debug + fmt::Display + Serialize + DeserializeOwned + 'static
{
    /// The card color set of this variant.
    type Color: CardColor;

    /// The color this team is trying to reveal.
    fn as_card_color(self) -> Self::Color;

    /// The team that scores when this team reveals a card of the opponent's color.
    ///
    /// Single-team variants return the team itself.
    fn opponent(self) -> Self;

    /// Every team of the variant, in a fixed order.
    fn all() -> &'static [Self];
}

/// The two hats a player can wear during a turn.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum PlayerRole {
    #[default]
    Spymaster,
    Operative,
}

impl PlayerRole {
    /// The role that acts after this one.
    #[must_use]
    pub const fn other(self) -> Self {
        match self {
            PlayerRole::Spymaster => PlayerRole::Operative,
            PlayerRole::Operative => PlayerRole::Spymaster,
        }
    }
}

impl fmt::Display for PlayerRole {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PlayerRole::Spymaster => write!(f, "Spymaster"),
            PlayerRole::Operative => write!(f, "Operative"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_role_other() {
        assert_eq!(PlayerRole::Spymaster.other(), PlayerRole::Operative);
        assert_eq!(PlayerRole::Operative.other(), PlayerRole::Spymaster);
        assert_eq!(PlayerRole::default(), PlayerRole::Spymaster);
    }

    #[test]
    fn test_role_string_codes() {
        assert_eq!(serde_json::to_string(&PlayerRole::Spymaster).unwrap(), "\"SPYMASTER\"");
        let role: PlayerRole = serde_json::from_str("\"OPERATIVE\"").unwrap();
        assert_eq!(role, PlayerRole::Operative);
    }
}
