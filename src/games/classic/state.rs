//! The Classic turn state machine.
//!
//! Two teams alternate. A turn is a clue followed by up to `amount + 1`
//! guesses; a wrong guess, a pass or an exhausted guess budget ends it.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use tracing::info;

use super::board::{first_team, from_vocabulary};
use super::color::{ClassicColor, ClassicTeam};
use super::winner::{Winner, WinningReason};
use crate::core::history::{self, Move};
use crate::core::snapshot::derived;
use crate::core::{
    Board, ClassicBoardConfig, Clue, DerivedFields, GameRng, GivenClue, GivenGuess, Guess, OperativeState,
    PlayerRole, RuleError, Score, SetupError, SpymasterState, Team,
};
use crate::rules::table::{GuessSubmission, RevealEffect, Table};
use crate::rules::RulesEngine;
use crate::vocabulary::{BuiltinVocabulary, VocabularyProvider};

/// Full state of a Classic game.
///
/// ## Example
///
/// ```
/// use codenames::core::{Board, Card, Clue, Guess, PlayerRole};
/// use codenames::games::classic::{ClassicColor, ClassicGameState, ClassicTeam};
///
/// let board = Board::new(
///     "english",
///     vec![
///         Card::new("Moon", ClassicColor::Blue),
///         Card::new("Sun", ClassicColor::Red),
///         Card::new("Star", ClassicColor::Neutral),
///     ],
/// );
/// let mut state = ClassicGameState::from_board(board).unwrap();
/// assert_eq!(state.current_team(), ClassicTeam::Blue);
///
/// state.process_clue(&Clue::new("sky", 1)).unwrap();
/// assert_eq!(state.left_guesses(), 2);
///
/// state.process_guess(Guess::new(2)).unwrap();
/// assert_eq!(state.current_team(), ClassicTeam::Red);
/// assert_eq!(state.current_player_role(), PlayerRole::Spymaster);
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClassicGameState {
    table: Table<ClassicTeam>,
    left_guesses: u32,
    winner: Option<Winner>,
}

impl ClassicGameState {
    /// Start a game on a clean board.
    ///
    /// The team with more cards starts and each team must find all of its cards.
    pub fn from_board(board: Board<ClassicColor>) -> Result<Self, SetupError> {
        if !board.is_clean() {
            return Err(SetupError::BoardNotClean);
        }
        let score = Score::new(<ClassicTeam as Team>::all().iter().map(|&team| {
            let total = board.cards_for_color(team.as_card_color()).len() as u32;
            (team, total)
        }));
        let current_team = first_team(&board);
        info!(%current_team, size = board.size(), "classic game started");
        Ok(Self {
            table: Table::new(board, score, current_team),
            left_guesses: 0,
            winner: None,
        })
    }

    /// Start a game on a random board dealt from the built-in vocabulary.
    pub fn from_language(language: &str, config: &ClassicBoardConfig, rng: &mut GameRng) -> Result<Self, SetupError> {
        let vocabulary = BuiltinVocabulary.vocabulary(language)?;
        Self::from_board(from_vocabulary(&vocabulary, config, rng)?)
    }

    #[must_use]
    pub fn board(&self) -> &Board<ClassicColor> {
        self.table.board()
    }

    #[must_use]
    pub fn score(&self) -> &Score<ClassicTeam> {
        self.table.score()
    }

    #[must_use]
    pub fn current_team(&self) -> ClassicTeam {
        self.table.current_team()
    }

    #[must_use]
    pub fn current_player_role(&self) -> PlayerRole {
        self.table.current_player_role()
    }

    #[must_use]
    pub fn left_guesses(&self) -> u32 {
        self.left_guesses
    }

    #[must_use]
    pub fn winner(&self) -> Option<Winner> {
        self.winner
    }

    #[must_use]
    pub fn is_game_over(&self) -> bool {
        self.winner.is_some()
    }

    /// Every submitted clue, including rejected ones.
    #[must_use]
    pub fn clues(&self) -> &im::Vector<Clue> {
        self.table.clues()
    }

    #[must_use]
    pub fn given_clues(&self) -> &im::Vector<GivenClue<ClassicTeam>> {
        self.table.given_clues()
    }

    #[must_use]
    pub fn given_guesses(&self) -> &im::Vector<GivenGuess<ClassicTeam>> {
        self.table.given_guesses()
    }

    /// Clues, guesses and inferred passes in play order.
    #[must_use]
    pub fn moves(&self) -> Vec<Move<ClassicTeam>> {
        history::moves(self.given_clues(), self.given_guesses(), self.current_player_role())
    }

    #[must_use]
    pub fn spymaster_state(&self) -> SpymasterState<ClassicTeam> {
        self.table.spymaster_state(None, None)
    }

    #[must_use]
    pub fn operative_state(&self) -> OperativeState<ClassicTeam> {
        self.table.operative_state(Some(self.left_guesses), None)
    }

    pub fn process_clue(&mut self, clue: &Clue) -> Result<Option<GivenClue<ClassicTeam>>, RuleError> {
        if self.is_game_over() {
            return Err(RuleError::GameIsOver);
        }
        match self.table.submit_clue(clue)? {
            None => {
                self.team_quit();
                Ok(None)
            }
            Some(given_clue) => {
                self.left_guesses = given_clue.card_amount.unsigned_abs() + 1;
                Ok(Some(given_clue))
            }
        }
    }

    pub fn process_guess(&mut self, guess: Guess) -> Result<Option<GivenGuess<ClassicTeam>>, RuleError> {
        if self.is_game_over() {
            return Err(RuleError::GameIsOver);
        }
        let given_guess = match self.table.submit_guess(guess)? {
            GuessSubmission::Pass => {
                self.end_turn();
                return Ok(None);
            }
            GuessSubmission::Quit => {
                self.team_quit();
                return Ok(None);
            }
            GuessSubmission::Revealed(given_guess) => given_guess,
        };
        self.update_score(&given_guess);
        if self.is_game_over() {
            info!("winner found, turn is over");
            self.end_turn();
            return Ok(Some(given_guess));
        }
        if !given_guess.correct() {
            info!("operative wrong, turn is over");
            self.end_turn();
            return Ok(Some(given_guess));
        }
        self.left_guesses = self.left_guesses.saturating_sub(1);
        if self.left_guesses == 0 {
            info!("no guesses left, turn is over");
            self.end_turn();
        }
        Ok(Some(given_guess))
    }

    fn update_score(&mut self, given_guess: &GivenGuess<ClassicTeam>) {
        match self.table.score_reveal(given_guess) {
            RevealEffect::Neutral => {}
            RevealEffect::Assassin => {
                self.set_winner(Winner::new(given_guess.team().opponent(), WinningReason::OpponentHitAssassin));
            }
            RevealEffect::Point { team, target_reached } => {
                if target_reached {
                    self.set_winner(Winner::new(team, WinningReason::TargetScoreReached));
                }
            }
        }
    }

    fn team_quit(&mut self) {
        let team = self.current_team().opponent();
        self.set_winner(Winner::new(team, WinningReason::OpponentQuit));
        self.end_turn();
    }

    fn set_winner(&mut self, winner: Winner) {
        info!(%winner, "game over");
        self.winner = Some(winner);
    }

    fn end_turn(&mut self) {
        self.left_guesses = 0;
        let next = self.current_team().opponent();
        self.table.set_current_team(next);
        self.table.flip_role();
    }
}

impl RulesEngine for ClassicGameState {
    type Team = ClassicTeam;
    type Outcome = Winner;

    fn process_clue(&mut self, clue: &Clue) -> Result<Option<GivenClue<ClassicTeam>>, RuleError> {
        ClassicGameState::process_clue(self, clue)
    }

    fn process_guess(&mut self, guess: Guess) -> Result<Option<GivenGuess<ClassicTeam>>, RuleError> {
        ClassicGameState::process_guess(self, guess)
    }

    fn outcome(&self) -> Option<Winner> {
        self.winner
    }

    fn current_player_role(&self) -> PlayerRole {
        self.table.current_player_role()
    }

    fn spymaster_state(&self) -> SpymasterState<ClassicTeam> {
        ClassicGameState::spymaster_state(self)
    }

    fn operative_state(&self) -> OperativeState<ClassicTeam> {
        ClassicGameState::operative_state(self)
    }
}

impl DerivedFields for ClassicGameState {
    fn derived_fields(&self) -> Map<String, Value> {
        let mut fields = self.spymaster_state().state.derived_fields();
        fields.extend(derived([("is_game_over", Value::from(self.is_game_over()))]));
        fields
    }
}
