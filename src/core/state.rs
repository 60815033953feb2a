//! Role-scoped views of a game.
//!
//! The rules engine never hands its own state to a player. Instead it builds
//! a `SpymasterState` (full board, raw clue history) or an `OperativeState`
//! (censored board). Histories are persistent vectors, so building a view
//! shares them instead of copying.

use std::ops::Deref;

use im::Vector;
use rustc_hash::FxHashSet;
use serde::{Deserialize, Serialize};

use super::board::Board;
use super::moves::{Clue, GivenClue, GivenGuess};
use super::score::Score;
use super::team::{PlayerRole, Team};

/// Everything any player may see.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(bound = "")]
pub struct PlayerState<T: Team> {
    pub board: Board<T::Color>,
    pub score: Score<T>,
    pub current_team: T,
    pub current_player_role: PlayerRole,
    pub given_clues: Vector<GivenClue<T>>,
    pub given_guesses: Vector<GivenGuess<T>>,
    /// Words already clued on the partner board (Duet). Empty elsewhere.
    pub dual_given_words: Vector<String>,
    /// Guesses left in the current turn, for variants that limit them.
    pub left_guesses: Option<u32>,
}

impl<T: Team> PlayerState<T> {
    /// Canonical words of every accepted clue, oldest first.
    #[must_use]
    pub fn given_clue_words(&self) -> Vec<String> {
        self.given_clues.iter().map(GivenClue::formatted_word).collect()
    }

    /// Words a spymaster may not use: board words, given clues and partner clues.
    #[must_use]
    pub fn illegal_clue_words(&self) -> FxHashSet<String> {
        self.board
            .all_words()
            .into_iter()
            .chain(self.given_clue_words())
            .chain(self.dual_given_words.iter().cloned())
            .collect()
    }
}

/// What a spymaster sees.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(bound = "")]
pub struct SpymasterState<T: Team> {
    pub state: PlayerState<T>,
    /// Every clue submitted, accepted or not.
    pub clues: Vector<Clue>,
    /// The partner side as its operative sees it (Duet).
    pub dual_state: Option<Box<OperativeState<T>>>,
}

impl<T: Team> Deref for SpymasterState<T> {
    type Target = PlayerState<T>;

    fn deref(&self) -> &Self::Target {
        &self.state
    }
}

/// What an operative sees. The board is always censored.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(bound = "")]
pub struct OperativeState<T: Team> {
    pub state: PlayerState<T>,
    /// The partner side as its spymaster sees it (Duet).
    pub dual_state: Option<Box<SpymasterState<T>>>,
}

impl<T: Team> OperativeState<T> {
    /// The clue being answered, if any clue was given yet.
    #[must_use]
    pub fn current_clue(&self) -> Option<&GivenClue<T>> {
        self.state.given_clues.last()
    }

    /// Guesses made for the current clue.
    #[must_use]
    pub fn turn_guesses(&self) -> Vec<&GivenGuess<T>> {
        match self.current_clue() {
            Some(clue) => self
                .state
                .given_guesses
                .iter()
                .filter(|guess| &guess.for_clue == clue)
                .collect(),
            None => Vec::new(),
        }
    }
}

impl<T: Team> Deref for OperativeState<T> {
    type Target = PlayerState<T>;

    fn deref(&self) -> &Self::Target {
        &self.state
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::Card;
    use crate::games::classic::{ClassicColor, ClassicTeam};

    fn player_state() -> PlayerState<ClassicTeam> {
        let board = Board::new(
            "english",
            vec![
                Card::new("Moon", ClassicColor::Blue),
                Card::new("Ice_Cream", ClassicColor::Red),
                Card::new("Tree", ClassicColor::Blue),
            ],
        );
        let clue_a = GivenClue::new("Sky", 1, ClassicTeam::Blue);
        let clue_b = GivenClue::new("Forest", 1, ClassicTeam::Blue);
        let mut given_guesses = Vector::new();
        given_guesses.push_back(GivenGuess {
            guessed_card: board.cards()[0].clone().with_revealed(true),
            for_clue: clue_a.clone(),
        });
        given_guesses.push_back(GivenGuess {
            guessed_card: board.cards()[2].clone().with_revealed(true),
            for_clue: clue_b.clone(),
        });
        PlayerState {
            board,
            score: Score::new([(ClassicTeam::Blue, 2), (ClassicTeam::Red, 1)]),
            current_team: ClassicTeam::Blue,
            current_player_role: PlayerRole::Operative,
            given_clues: Vector::from(vec![clue_a, clue_b]),
            given_guesses,
            dual_given_words: Vector::from(vec!["planet".to_string()]),
            left_guesses: Some(1),
        }
    }

    #[test]
    fn test_illegal_clue_words() {
        let state = player_state();
        let illegal = state.illegal_clue_words();
        for word in ["moon", "ice cream", "tree", "sky", "forest", "planet"] {
            assert!(illegal.contains(word), "{word} should be illegal");
        }
        assert_eq!(illegal.len(), 6);
        assert_eq!(state.given_clue_words(), vec!["sky", "forest"]);
    }

    #[test]
    fn test_operative_current_clue_and_turn_guesses() {
        let operative = OperativeState { state: player_state(), dual_state: None };
        assert_eq!(operative.current_clue().unwrap().word, "forest");
        let turn = operative.turn_guesses();
        assert_eq!(turn.len(), 1);
        assert_eq!(turn[0].guessed_card.word, "Tree");
    }

    #[test]
    fn test_operative_without_clue() {
        let mut state = player_state();
        state.given_clues = Vector::new();
        let operative = OperativeState { state, dual_state: None };
        assert!(operative.current_clue().is_none());
        assert!(operative.turn_guesses().is_empty());
    }
}
