//! Word lists boards are dealt from.
//!
//! A `VocabularyProvider` maps a language code to a `Vocabulary`. The crate
//! ships `BuiltinVocabulary` with an English list; hosts plug in their own
//! providers for other languages.

use rustc_hash::FxHashSet;
use serde::{Deserialize, Serialize};

use crate::core::{canonical_format, GameRng, SetupError};

/// Language code of the built-in English list.
pub const ENGLISH: &str = "english";

const ENGLISH_WORDS: &str = include_str!("english.txt");

/// The words of one language, unique by canonical form.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Vocabulary {
    language: String,
    words: Vec<String>,
}

impl Vocabulary {
    /// Build a vocabulary. Words that collide after canonical formatting are
    /// dropped, keeping the first; blank words are dropped too.
    pub fn new<I, S>(language: impl Into<String>, words: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut seen = FxHashSet::default();
        let words = words
            .into_iter()
            .map(Into::into)
            .filter(|word| {
                let formatted = canonical_format(word);
                !formatted.is_empty() && seen.insert(formatted)
            })
            .collect();
        Self {
            language: language.into(),
            words,
        }
    }

    #[must_use]
    pub fn language(&self) -> &str {
        &self.language
    }

    #[must_use]
    pub fn words(&self) -> &[String] {
        &self.words
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.words.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }

    /// Draw disjoint random word groups of the given sizes.
    pub fn sample_groups(&self, amounts: &[usize], rng: &mut GameRng) -> Result<Vec<Vec<String>>, SetupError> {
        let needed: usize = amounts.iter().sum();
        if needed > self.len() {
            return Err(SetupError::NotEnoughWords {
                needed,
                available: self.len(),
            });
        }
        let mut indices = rng.sample_indices(self.len(), needed).into_iter();
        Ok(amounts
            .iter()
            .map(|&amount| indices.by_ref().take(amount).map(|i| self.words[i].clone()).collect())
            .collect())
    }
}

/// Source of vocabularies by language code.
pub trait VocabularyProvider {
    /// Fails with `SetupError::UnknownLanguage` for unsupported codes.
    fn vocabulary(&self, language: &str) -> Result<Vocabulary, SetupError>;
}

/// Vocabularies shipped with the crate.
#[derive(Clone, Copy, Debug, Default)]
pub struct BuiltinVocabulary;

impl VocabularyProvider for BuiltinVocabulary {
    fn vocabulary(&self, language: &str) -> Result<Vocabulary, SetupError> {
        match language.trim().to_lowercase().as_str() {
            ENGLISH => Ok(Vocabulary::new(ENGLISH, ENGLISH_WORDS.lines().map(str::trim))),
            other => Err(SetupError::UnknownLanguage(other.to_string())),
        }
    }
}
