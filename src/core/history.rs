//! Move list reconstruction from a game's append-only histories.
//!
//! States only record accepted clues and revealed cards. Passes leave no
//! trace, so they are inferred: a clue answered by no guess, or by fewer
//! guesses than allowed with the last one correct, must have ended in a pass.

use rustc_hash::FxHashMap;
use serde::{Deserialize, Serialize};

use super::moves::{GivenClue, GivenGuess};
use super::team::{PlayerRole, Team};

/// One step in a game's history.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(bound = "", tag = "type", rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Move<T: Team> {
    Clue { given_clue: GivenClue<T> },
    Guess { given_guess: GivenGuess<T> },
    Pass { team: T },
}

impl<T: Team> Move<T> {
    /// The team that made the move.
    #[must_use]
    pub fn team(&self) -> T {
        match self {
            Move::Clue { given_clue } => given_clue.team,
            Move::Guess { given_guess } => given_guess.team(),
            Move::Pass { team } => *team,
        }
    }
}

/// Rebuild the ordered move list.
///
/// A trailing inferred pass is dropped while the operative is on turn: the
/// operative has not passed yet, it simply has not guessed.
pub fn moves<'a, T, C, G>(given_clues: C, given_guesses: G, current_role: PlayerRole) -> Vec<Move<T>>
where
    T: Team,
    C: IntoIterator<Item = &'a GivenClue<T>>,
    G: IntoIterator<Item = &'a GivenGuess<T>>,
{
    let mut guesses_by_clue: FxHashMap<&GivenClue<T>, Vec<&GivenGuess<T>>> = FxHashMap::default();
    for guess in given_guesses {
        guesses_by_clue.entry(&guess.for_clue).or_default().push(guess);
    }

    let mut result = Vec::new();
    for clue in given_clues {
        result.push(Move::Clue { given_clue: clue.clone() });
        let guesses = guesses_by_clue.remove(clue).unwrap_or_default();
        let inferred_pass = match guesses.last() {
            None => true,
            Some(last) => (guesses.len() as i64) < i64::from(clue.card_amount) + 1 && last.correct(),
        };
        result.extend(guesses.into_iter().map(|guess| Move::Guess { given_guess: guess.clone() }));
        if inferred_pass {
            result.push(Move::Pass { team: clue.team });
        }
    }

    if current_role == PlayerRole::Operative && matches!(result.last(), Some(Move::Pass { .. })) {
        result.pop();
    }
    result
}
