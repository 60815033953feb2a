//! Serialized forms of game data.
//!
//! Default serialization carries stored fields only. Computed properties
//! (canonical words, correctness, illegal clue words) are added on request
//! through `DerivedFields`. Whole game states can also be checkpointed as
//! compact binary blobs.

use serde::de::DeserializeOwned;
use serde::Serialize;
use serde_json::{Map, Value};

use super::board::Board;
use super::card::{Card, CardColor};
use super::error::SnapshotError;
use super::moves::{GivenClue, GivenGuess};
use super::score::{Score, TeamScore};
use super::state::PlayerState;
use super::team::Team;

/// Computed properties a type can expose next to its stored fields.
pub trait DerivedFields {
    fn derived_fields(&self) -> Map<String, Value>;
}

/// Serialize `value` to JSON with its derived fields merged in.
///
/// ```
/// use codenames::core::{to_json_with_derived, Card};
/// use codenames::games::classic::ClassicColor;
///
/// let json = to_json_with_derived(&Card::new("Ice_Cream", ClassicColor::Red)).unwrap();
/// assert_eq!(json["formatted_word"], "ice cream");
/// assert_eq!(json["color"], "RED");
/// ```
pub fn to_json_with_derived<S: Serialize + DerivedFields>(value: &S) -> Result<Value, SnapshotError> {
    let mut json = serde_json::to_value(value)?;
    if let Value::Object(fields) = &mut json {
        fields.extend(value.derived_fields());
    }
    Ok(json)
}

/// Encode a value as a binary snapshot.
pub fn to_bytes<S: Serialize>(value: &S) -> Result<Vec<u8>, SnapshotError> {
    Ok(bincode::serialize(value)?)
}

/// Decode a binary snapshot produced by `to_bytes`.
pub fn from_bytes<S: DeserializeOwned>(bytes: &[u8]) -> Result<S, SnapshotError> {
    Ok(bincode::deserialize(bytes)?)
}

pub(crate) fn derived(entries: impl IntoIterator<Item = (&'static str, Value)>) -> Map<String, Value> {
    entries
        .into_iter()
        .map(|(key, value)| (key.to_string(), value))
        .collect()
}

impl<C: CardColor> DerivedFields for Card<C> {
    fn derived_fields(&self) -> Map<String, Value> {
        derived([("formatted_word", Value::from(self.formatted_word()))])
    }
}

impl<C: CardColor> DerivedFields for Board<C> {
    fn derived_fields(&self) -> Map<String, Value> {
        derived([
            ("size", Value::from(self.size())),
            ("all_words", Value::from(self.all_words())),
            ("revealed_card_indexes", Value::from(self.revealed_card_indexes())),
        ])
    }
}

impl<T: Team> DerivedFields for GivenClue<T> {
    fn derived_fields(&self) -> Map<String, Value> {
        derived([("formatted_word", Value::from(self.formatted_word()))])
    }
}

impl<T: Team> DerivedFields for GivenGuess<T> {
    fn derived_fields(&self) -> Map<String, Value> {
        derived([("correct", Value::from(self.correct()))])
    }
}

impl DerivedFields for TeamScore {
    fn derived_fields(&self) -> Map<String, Value> {
        derived([("unrevealed", Value::from(self.unrevealed()))])
    }
}

impl<T: Team> DerivedFields for Score<T> {
    fn derived_fields(&self) -> Map<String, Value> {
        let unrevealed: Map<String, Value> = self
            .iter()
            .map(|(team, score)| (team.to_string().to_uppercase(), Value::from(score.unrevealed())))
            .collect();
        derived([("unrevealed", Value::Object(unrevealed))])
    }
}

impl<T: Team> DerivedFields for PlayerState<T> {
    fn derived_fields(&self) -> Map<String, Value> {
        let mut illegal: Vec<String> = self.illegal_clue_words().into_iter().collect();
        illegal.sort_unstable();
        derived([
            ("given_clue_words", Value::from(self.given_clue_words())),
            ("illegal_clue_words", Value::from(illegal)),
        ])
    }
}
