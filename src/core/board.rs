//! The board: an ordered, fixed-size collection of word cards.
//!
//! Card order is set at creation and never changes. Only the per-card
//! `revealed` / `consumed` flags mutate during a game, and only through the
//! rules engine.

use std::fmt;

use serde::{Deserialize, Serialize};

use super::card::{canonical_format, Card, CardColor};
use super::error::BoardError;

/// Key for looking up a card: by position or by word.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum CardKey<'a> {
    Index(usize),
    Word(&'a str),
}

impl From<usize> for CardKey<'_> {
    fn from(index: usize) -> Self {
        CardKey::Index(index)
    }
}

impl<'a> From<&'a str> for CardKey<'a> {
    fn from(word: &'a str) -> Self {
        CardKey::Word(word)
    }
}

/// A game board.
///
/// ## Example
///
/// ```
/// use codenames::core::{Board, Card};
/// use codenames::games::classic::ClassicColor;
///
/// let board = Board::new(
///     "english",
///     vec![Card::new("Moon", ClassicColor::Blue), Card::new("Ice_Cream", ClassicColor::Red)],
/// );
///
/// assert_eq!(board.get(1).unwrap().word, "Ice_Cream");
/// assert_eq!(board.get("ice cream").unwrap().word, "Ice_Cream");
/// assert!(board.get(2).is_err());
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Board<C> {
    language: String,
    cards: Vec<Card<C>>,
}

impl<C: CardColor> Board<C> {
    /// Create a board from dealt cards.
    pub fn new(language: impl Into<String>, cards: Vec<Card<C>>) -> Self {
        Self {
            language: language.into(),
            cards,
        }
    }

    /// Board language code.
    #[must_use]
    pub fn language(&self) -> &str {
        &self.language
    }

    /// Number of cards.
    #[must_use]
    pub fn size(&self) -> usize {
        self.cards.len()
    }

    /// All cards in board order.
    #[must_use]
    pub fn cards(&self) -> &[Card<C>] {
        &self.cards
    }

    /// Iterate over cards in board order.
    pub fn iter(&self) -> impl Iterator<Item = &Card<C>> {
        self.cards.iter()
    }

    /// Look up a card by index or by word.
    pub fn get<'a>(&self, key: impl Into<CardKey<'a>>) -> Result<&Card<C>, BoardError> {
        match key.into() {
            CardKey::Index(index) => self.card_at(index),
            CardKey::Word(word) => {
                let index = self.find_card_index(word)?;
                Ok(&self.cards[index])
            }
        }
    }

    /// Card at `index`, failing with `OutOfRange` outside `0..size`.
    pub fn card_at(&self, index: usize) -> Result<&Card<C>, BoardError> {
        self.cards.get(index).ok_or(BoardError::OutOfRange {
            index: index as i64,
            size: self.size(),
        })
    }

    /// Index of the first card whose canonical word matches `word`.
    pub fn find_card_index(&self, word: &str) -> Result<usize, BoardError> {
        let formatted = canonical_format(word);
        self.cards
            .iter()
            .position(|card| card.formatted_word() == formatted)
            .ok_or_else(|| BoardError::CardNotFound(word.to_string()))
    }

    /// Canonical words of all cards, in board order.
    #[must_use]
    pub fn all_words(&self) -> Vec<String> {
        self.cards.iter().map(Card::formatted_word).collect()
    }

    /// Revealed flags of all cards, in board order.
    #[must_use]
    pub fn all_reveals(&self) -> Vec<bool> {
        self.cards.iter().map(|card| card.revealed).collect()
    }

    /// Indices of revealed cards.
    #[must_use]
    pub fn revealed_card_indexes(&self) -> Vec<usize> {
        self.indexes_where(|card| card.revealed)
    }

    /// Indices of cards whose effective color is `color`.
    #[must_use]
    pub fn color_indexes(&self, color: C) -> Vec<usize> {
        self.indexes_where(|card| card.effective_color() == Some(color))
    }

    /// Cards whose effective color is `color`, in board order.
    #[must_use]
    pub fn cards_for_color(&self, color: C) -> Vec<&Card<C>> {
        self.cards_where(|card| card.effective_color() == Some(color))
    }

    /// Revealed cards of `color`, in board order.
    #[must_use]
    pub fn revealed_cards_for_color(&self, color: C) -> Vec<&Card<C>> {
        self.cards_where(|card| card.revealed && card.effective_color() == Some(color))
    }

    /// Unrevealed cards of `color`, in board order.
    #[must_use]
    pub fn unrevealed_cards_for_color(&self, color: C) -> Vec<&Card<C>> {
        self.cards_where(|card| !card.revealed && card.effective_color() == Some(color))
    }

    /// True iff no card is revealed or consumed and no card carries the
    /// variant's consumed marker color.
    #[must_use]
    pub fn is_clean(&self) -> bool {
        let marker = C::consumed_marker();
        self.cards
            .iter()
            .all(|card| !card.revealed && !card.consumed && (marker.is_none() || card.color != marker))
    }

    /// Copy of the board as operatives see it. The source is not touched.
    #[must_use]
    pub fn censored(&self) -> Self {
        Self {
            language: self.language.clone(),
            cards: self.cards.iter().map(Card::censored).collect(),
        }
    }

    /// Hide every card again.
    pub fn reset_state(&mut self) {
        for card in &mut self.cards {
            card.revealed = false;
            card.consumed = false;
        }
    }

    /// Mark a card revealed. Only the rules engine reveals cards.
    pub(crate) fn reveal(&mut self, index: usize) -> &Card<C> {
        let card = &mut self.cards[index];
        card.revealed = true;
        card
    }

    /// Mark a card consumed through the partner board.
    pub(crate) fn consume(&mut self, index: usize) {
        let card = &mut self.cards[index];
        card.revealed = true;
        card.consumed = true;
    }

    fn indexes_where(&self, predicate: impl Fn(&Card<C>) -> bool) -> Vec<usize> {
        self.cards
            .iter()
            .enumerate()
            .filter(|(_, card)| predicate(card))
            .map(|(i, _)| i)
            .collect()
    }

    fn cards_where(&self, predicate: impl Fn(&Card<C>) -> bool) -> Vec<&Card<C>> {
        self.cards.iter().filter(|card| predicate(card)).collect()
    }
}

impl<'a, C> IntoIterator for &'a Board<C> {
    type Item = &'a Card<C>;
    type IntoIter = std::slice::Iter<'a, Card<C>>;

    fn into_iter(self) -> Self::IntoIter {
        self.cards.iter()
    }
}

/// Split `n` into `(columns, rows)` with `rows` the largest factor not above
/// `sqrt(n)`.
///
/// ```
/// use codenames::core::two_integer_factors;
///
/// assert_eq!(two_integer_factors(25), (5, 5));
/// assert_eq!(two_integer_factors(10), (5, 2));
/// assert_eq!(two_integer_factors(7), (7, 1));
/// ```
#[must_use]
pub fn two_integer_factors(n: usize) -> (usize, usize) {
    let mut x = (n as f64).sqrt().floor() as usize;
    if x == 0 {
        return (0, 0);
    }
    while n % x != 0 {
        x -= 1;
    }
    (n / x, x)
}

impl<C: CardColor> fmt::Display for Board<C> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let (cols, _) = two_integer_factors(self.size());
        if cols == 0 {
            return Ok(());
        }
        let cells: Vec<String> = self.cards.iter().map(ToString::to_string).collect();
        let width = cells.iter().map(|cell| cell.chars().count()).max().unwrap_or(0);
        for row in cells.chunks(cols) {
            let line: Vec<String> = row.iter().map(|cell| format!("{cell:<width$}")).collect();
            writeln!(f, "| {} |", line.join(" | "))?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::games::classic::ClassicColor;
    use crate::games::duet::DuetColor;

    fn board() -> Board<ClassicColor> {
        Board::new(
            "english",
            vec![
                Card::new("Card 0", ClassicColor::Blue),
                Card::new("Card 1", ClassicColor::Red),
                Card::new("Card 2", ClassicColor::Blue),
                Card::new("Card 3", ClassicColor::Neutral),
                Card::new("Card 4", ClassicColor::Assassin),
                Card::new("Card_5", ClassicColor::Neutral),
            ],
        )
    }

    #[test]
    fn test_card_at_bounds() {
        let board = board();
        assert_eq!(board.card_at(0).unwrap().word, "Card 0");
        assert_eq!(board.card_at(5).unwrap().word, "Card_5");
        assert_eq!(
            board.card_at(6),
            Err(BoardError::OutOfRange { index: 6, size: 6 })
        );
    }

    #[test]
    fn test_word_lookup_is_canonical() {
        let board = board();
        assert_eq!(board.find_card_index("card 5").unwrap(), 5);
        assert_eq!(board.find_card_index(" CARD_1 ").unwrap(), 1);
        assert_eq!(
            board.find_card_index("nothing"),
            Err(BoardError::CardNotFound("nothing".to_string()))
        );
    }

    #[test]
    fn test_color_filters_preserve_order() {
        let mut board = board();
        board.reveal(2);

        let blue: Vec<_> = board.cards_for_color(ClassicColor::Blue).iter().map(|c| c.word.clone()).collect();
        assert_eq!(blue, vec!["Card 0", "Card 2"]);

        let revealed = board.revealed_cards_for_color(ClassicColor::Blue);
        assert_eq!(revealed.len(), 1);
        assert_eq!(revealed[0].word, "Card 2");

        let unrevealed = board.unrevealed_cards_for_color(ClassicColor::Blue);
        assert_eq!(unrevealed.len(), 1);
        assert_eq!(unrevealed[0].word, "Card 0");

        assert_eq!(board.color_indexes(ClassicColor::Neutral), vec![3, 5]);
    }

    #[test]
    fn test_is_clean() {
        let mut board = board();
        assert!(board.is_clean());
        board.reveal(0);
        assert!(!board.is_clean());
        assert_eq!(board.revealed_card_indexes(), vec![0]);
        board.reset_state();
        assert!(board.is_clean());
    }

    #[test]
    fn test_duet_board_with_irrelevant_card_is_not_clean() {
        let board = Board::new(
            "english",
            vec![Card::new("a", DuetColor::Green), Card::new("b", DuetColor::Irrelevant)],
        );
        assert!(!board.is_clean());
    }

    #[test]
    fn test_censored_board() {
        let mut board = board();
        board.reveal(1);
        let censored = board.censored();

        assert_eq!(censored.card_at(1).unwrap(), board.card_at(1).unwrap());
        assert_eq!(censored.card_at(0).unwrap().color, None);
        assert_eq!(censored.censored(), censored);
        // source untouched
        assert_eq!(board.card_at(0).unwrap().color, Some(ClassicColor::Blue));
    }

    #[test]
    fn test_two_integer_factors() {
        assert_eq!(two_integer_factors(0), (0, 0));
        assert_eq!(two_integer_factors(1), (1, 1));
        assert_eq!(two_integer_factors(6), (3, 2));
        assert_eq!(two_integer_factors(25), (5, 5));
    }

    #[test]
    fn test_display_grid() {
        let printed = board().censored().to_string();
        let lines: Vec<_> = printed.lines().collect();
        assert_eq!(lines.len(), 2);
        assert!(lines[0].contains("Card 0"));
        assert!(lines[1].contains("Card_5"));
    }
}
