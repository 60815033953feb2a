//! Word cards and the color capability every variant implements.
//!
//! A card is a word, a color and a revealed flag. The color is `None` only
//! in censored copies handed to operatives. Duet adds a fourth state: a card
//! consumed through the partner board is revealed and reports the variant's
//! consumed marker (`IRRELEVANT`) as its effective color, while the original
//! color stays available to the full board.

use std::fmt;
use std::hash::Hash;

use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};

/// Card color set of a game variant.
pub trait CardColor:
    Copy + Eq + Ord + Hash + fmt::Debug + fmt::Display + Serialize + DeserializeOwned + 'static
{
    /// Revealing this color scores for nobody and ends the turn.
    fn is_neutral(self) -> bool;

    /// Revealing this color loses the game immediately.
    fn is_assassin(self) -> bool;

    /// Color reported for cards consumed through a partner board.
    ///
    /// `None` for variants without partner boards.
    fn consumed_marker() -> Option<Self> {
        None
    }

    /// Short symbol used when rendering boards.
    fn emoji(self) -> &'static str;

    /// Every color of the variant, in a fixed order.
    fn all() -> &'static [Self];
}

/// Canonical form used for matching words: underscores become spaces,
/// surrounding whitespace is trimmed, letters are lowercased.
///
/// ```
/// use codenames::core::canonical_format;
///
/// assert_eq!(canonical_format("  New_York "), "new york");
/// ```
#[must_use]
pub fn canonical_format(word: &str) -> String {
    word.replace('_', " ").trim().to_lowercase()
}

/// A single word card.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Card<C> {
    /// Display word, as dealt.
    pub word: String,

    /// Card color. `None` only in censored copies.
    pub color: Option<C>,

    /// Has this card been revealed?
    #[serde(default)]
    pub revealed: bool,

    /// Was this card consumed through the partner board (Duet)?
    #[serde(default)]
    pub consumed: bool,
}

impl<C: CardColor> Card<C> {
    /// Create an unrevealed card.
    pub fn new(word: impl Into<String>, color: C) -> Self {
        Self {
            word: word.into(),
            color: Some(color),
            revealed: false,
            consumed: false,
        }
    }

    /// Set the revealed flag.
    #[must_use]
    pub fn with_revealed(mut self, revealed: bool) -> Self {
        self.revealed = revealed;
        self
    }

    /// Canonical form of the word, used for matching only.
    #[must_use]
    pub fn formatted_word(&self) -> String {
        canonical_format(&self.word)
    }

    /// The color players should reason about.
    ///
    /// Consumed cards report the variant's consumed marker.
    #[must_use]
    pub fn effective_color(&self) -> Option<C> {
        if self.consumed {
            C::consumed_marker()
        } else {
            self.color
        }
    }

    /// Copy of this card as an operative sees it.
    ///
    /// Revealed cards pass through, consumed cards show the consumed marker,
    /// unrevealed cards lose their color.
    #[must_use]
    pub fn censored(&self) -> Self {
        let color = if self.consumed {
            C::consumed_marker()
        } else if self.revealed {
            self.color
        } else {
            None
        };
        Self {
            word: self.word.clone(),
            color,
            revealed: self.revealed,
            consumed: self.consumed,
        }
    }
}

impl<C: CardColor> fmt::Display for Card<C> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.effective_color() {
            Some(color) => write!(f, "{} {}", color.emoji(), self.word),
            None => write!(f, "{}", self.word),
        }
    }
}
