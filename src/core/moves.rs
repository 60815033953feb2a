//! Clue and guess value objects.
//!
//! `Clue` and `Guess` are what players submit. `GivenClue` and `GivenGuess`
//! are what the rules engine records once a move is accepted; they are never
//! mutated afterwards.

use std::hash::{Hash, Hasher};

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use super::card::{canonical_format, Card};
use super::error::RuleError;
use super::team::Team;

/// Operative sentinel: end the turn without guessing.
pub const PASS_GUESS: i32 = -1;

/// Sentinel for abandoning the game, on both clues and guesses.
pub const QUIT_GAME: i32 = -2;

/// Words a clue was meant to point at. Explanation only, never validated.
pub type ForWords = SmallVec<[String; 4]>;

/// A spymaster's clue.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Clue {
    pub word: String,
    pub card_amount: i32,
    #[serde(default)]
    pub for_words: Option<ForWords>,
}

impl Clue {
    pub fn new(word: impl Into<String>, card_amount: i32) -> Self {
        Self {
            word: word.into(),
            card_amount,
            for_words: None,
        }
    }

    /// The clue that abandons the game.
    #[must_use]
    pub fn quit() -> Self {
        Self::new("", QUIT_GAME)
    }

    /// Attach the words this clue was meant for.
    #[must_use]
    pub fn with_for_words<I, S>(mut self, words: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.for_words = Some(words.into_iter().map(Into::into).collect());
        self
    }

    #[must_use]
    pub fn is_quit(&self) -> bool {
        self.card_amount == QUIT_GAME
    }

    #[must_use]
    pub fn formatted_word(&self) -> String {
        canonical_format(&self.word)
    }
}

/// An operative's guess: a board index or one of the sentinels.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Guess {
    pub card_index: i32,
}

impl Guess {
    #[must_use]
    pub const fn new(card_index: i32) -> Self {
        Self { card_index }
    }

    #[must_use]
    pub const fn pass() -> Self {
        Self::new(PASS_GUESS)
    }

    #[must_use]
    pub const fn quit() -> Self {
        Self::new(QUIT_GAME)
    }

    #[must_use]
    pub const fn is_pass(self) -> bool {
        self.card_index == PASS_GUESS
    }

    #[must_use]
    pub const fn is_quit(self) -> bool {
        self.card_index == QUIT_GAME
    }
}

/// Guess a board index. Indexes that do not fit an `i32` would collide with
/// the sentinels, so they are rejected.
impl TryFrom<usize> for Guess {
    type Error = RuleError;

    fn try_from(index: usize) -> Result<Self, Self::Error> {
        i32::try_from(index)
            .map(Self::new)
            .map_err(|_| RuleError::InvalidGuess(format!("card index {index} is out of range")))
    }
}

/// A clue accepted by the rules engine, stamped with the issuing team.
///
/// The word is stored in canonical form. Equality and hashing look at the
/// word and amount only, so the same clue from another team compares equal.
#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(bound = "")]
pub struct GivenClue<T: Team> {
    pub word: String,
    pub card_amount: i32,
    pub team: T,
}

impl<T: Team> GivenClue<T> {
    pub fn new(word: &str, card_amount: i32, team: T) -> Self {
        Self {
            word: canonical_format(word),
            card_amount,
            team,
        }
    }

    #[must_use]
    pub fn formatted_word(&self) -> String {
        canonical_format(&self.word)
    }
}

impl<T: Team> PartialEq for GivenClue<T> {
    fn eq(&self, other: &Self) -> bool {
        self.formatted_word() == other.formatted_word() && self.card_amount == other.card_amount
    }
}

impl<T: Team> Eq for GivenClue<T> {}

impl<T: Team> Hash for GivenClue<T> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.formatted_word().hash(state);
        self.card_amount.hash(state);
    }
}

impl<T: Team> std::fmt::Display for GivenClue<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "'{}' {} card(s)", self.word, self.card_amount)
    }
}

/// A guess accepted by the rules engine.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(bound = "")]
pub struct GivenGuess<T: Team> {
    /// Snapshot of the card right after it was revealed.
    pub guessed_card: Card<T::Color>,
    pub for_clue: GivenClue<T>,
}

impl<T: Team> GivenGuess<T> {
    /// The team that gave the clue this guess answers.
    #[must_use]
    pub fn team(&self) -> T {
        self.for_clue.team
    }

    /// Did the guess land on the guessing team's own color?
    #[must_use]
    pub fn correct(&self) -> bool {
        self.guessed_card.color == Some(self.team().as_card_color())
    }
}

impl<T: Team> std::fmt::Display for GivenGuess<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let verdict = if self.correct() { "correct" } else { "wrong" };
        write!(f, "'{}' ({})", self.guessed_card, verdict)
    }
}
