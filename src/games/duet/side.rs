//! One side of a Duet game: a board, its score and its histories.
//!
//! A side keeps guessing while it is correct. Misses, passes and quits hand
//! the role back to the spymaster. Cards revealed on the partner board are
//! consumed here through `dual_card_revealed`.

use std::fmt;

use serde::{Deserialize, Serialize};
use tracing::info;

use super::color::{DuetColor, DuetTeam};
use crate::core::{
    Board, Clue, GivenClue, GivenGuess, Guess, OperativeState, PlayerRole, RuleError, Score, SetupError,
    SpymasterState,
};
use crate::rules::table::{GuessSubmission, RevealEffect, Table};
use crate::rules::GameResult;

/// Which board of a Duet game is being played.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum DuetSide {
    #[default]
    SideA,
    SideB,
}

impl DuetSide {
    #[must_use]
    pub const fn opposite(self) -> Self {
        match self {
            DuetSide::SideA => DuetSide::SideB,
            DuetSide::SideB => DuetSide::SideA,
        }
    }
}

impl fmt::Display for DuetSide {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DuetSide::SideA => write!(f, "side A"),
            DuetSide::SideB => write!(f, "side B"),
        }
    }
}

/// State of one Duet board.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct DuetSideState {
    table: Table<DuetTeam>,
    game_result: Option<GameResult>,
}

impl DuetSideState {
    /// Seat a side at a clean board; it must find all of its green cards.
    pub fn from_board(board: Board<DuetColor>) -> Result<Self, SetupError> {
        if !board.is_clean() {
            return Err(SetupError::BoardNotClean);
        }
        let total = board.cards_for_color(DuetColor::Green).len() as u32;
        let score = Score::new([(DuetTeam::Main, total)]);
        Ok(Self {
            table: Table::new(board, score, DuetTeam::Main),
            game_result: None,
        })
    }

    #[must_use]
    pub fn board(&self) -> &Board<DuetColor> {
        self.table.board()
    }

    #[must_use]
    pub fn score(&self) -> &Score<DuetTeam> {
        self.table.score()
    }

    #[must_use]
    pub fn current_player_role(&self) -> PlayerRole {
        self.table.current_player_role()
    }

    #[must_use]
    pub fn game_result(&self) -> Option<GameResult> {
        self.game_result
    }

    #[must_use]
    pub fn is_game_over(&self) -> bool {
        self.game_result.is_some()
    }

    #[must_use]
    pub fn clues(&self) -> &im::Vector<Clue> {
        self.table.clues()
    }

    /// Green cards still to find on this side.
    #[must_use]
    pub fn unrevealed(&self) -> u32 {
        self.score().get(DuetTeam::Main).unrevealed()
    }

    #[must_use]
    pub fn given_clues(&self) -> &im::Vector<GivenClue<DuetTeam>> {
        self.table.given_clues()
    }

    #[must_use]
    pub fn given_guesses(&self) -> &im::Vector<GivenGuess<DuetTeam>> {
        self.table.given_guesses()
    }

    /// Words clued on the partner board.
    #[must_use]
    pub fn dual_given_words(&self) -> &im::Vector<String> {
        self.table.dual_given_words()
    }

    pub fn process_clue(&mut self, clue: &Clue) -> Result<Option<GivenClue<DuetTeam>>, RuleError> {
        if self.is_game_over() {
            return Err(RuleError::GameIsOver);
        }
        let given_clue = self.table.submit_clue(clue)?;
        if given_clue.is_none() {
            self.quit();
        }
        Ok(given_clue)
    }

    pub fn process_guess(&mut self, guess: Guess) -> Result<Option<GivenGuess<DuetTeam>>, RuleError> {
        if self.is_game_over() {
            return Err(RuleError::GameIsOver);
        }
        let given_guess = match self.table.submit_guess(guess)? {
            GuessSubmission::Pass => {
                self.end_turn();
                return Ok(None);
            }
            GuessSubmission::Quit => {
                self.quit();
                return Ok(None);
            }
            GuessSubmission::Revealed(given_guess) => given_guess,
        };
        let effect = self.table.score_reveal(&given_guess);
        self.apply(effect);
        if !given_guess.correct() {
            info!("operative wrong, turn is over");
            self.end_turn();
        }
        Ok(Some(given_guess))
    }

    /// The partner board revealed the card at `index`: consume it here.
    ///
    /// If it was one of our greens it counts as found.
    pub fn dual_card_revealed(&mut self, index: usize) {
        if let Some(effect) = self.table.consume(index) {
            self.apply(effect);
        }
    }

    pub(crate) fn add_dual_given_word(&mut self, word: String) {
        self.table.add_dual_given_word(word);
    }

    pub(crate) fn set_role(&mut self, role: PlayerRole) {
        self.table.set_role(role);
    }

    pub(crate) fn set_game_result(&mut self, result: GameResult) {
        info!(%result, "side finished");
        self.game_result = Some(result);
    }

    /// View for this side's spymaster, optionally with the partner side.
    #[must_use]
    pub fn spymaster_state(&self, dual: Option<&DuetSideState>) -> SpymasterState<DuetTeam> {
        let dual_state = dual.map(|side| side.operative_state(None));
        self.table.spymaster_state(None, dual_state)
    }

    /// View for this side's operative, optionally with the partner side.
    #[must_use]
    pub fn operative_state(&self, dual: Option<&DuetSideState>) -> OperativeState<DuetTeam> {
        let dual_state = dual.map(|side| side.spymaster_state(None));
        self.table.operative_state(None, dual_state)
    }

    fn apply(&mut self, effect: RevealEffect<DuetTeam>) {
        match effect {
            RevealEffect::Neutral => {}
            RevealEffect::Assassin => self.set_game_result(GameResult::AssassinHit),
            RevealEffect::Point { target_reached, .. } => {
                if target_reached {
                    self.set_game_result(GameResult::TargetReached);
                }
            }
        }
    }

    fn end_turn(&mut self) {
        self.table.flip_role();
    }

    fn quit(&mut self) {
        self.set_game_result(GameResult::GameQuit);
        self.end_turn();
    }
}
