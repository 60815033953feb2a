//! The Duet game: two coupled sides sharing a timer and a mistake budget.
//!
//! Side A is clued by player A and guessed by player B, side B the other way
//! round. A correct guess on one side consumes the same position on the other
//! side in the same step, so the two boards never drift apart.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use tracing::info;

use super::board::{dual_board, from_vocabulary};
use super::color::{DuetColor, DuetTeam};
use super::side::{DuetSide, DuetSideState};
use crate::core::snapshot::derived;
use crate::core::{
    Board, Clue, DerivedFields, DuetBoardConfig, DuetConfig, GameRng, GivenClue, GivenGuess, Guess,
    OperativeState, PlayerRole, RuleError, SetupError, SpymasterState,
};
use crate::rules::{GameResult, RulesEngine};
use crate::vocabulary::{BuiltinVocabulary, VocabularyProvider};

/// Full state of a Duet game.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct DuetGameState {
    side_a: DuetSideState,
    side_b: DuetSideState,
    current_playing_side: DuetSide,
    timer_tokens: i32,
    allowed_mistakes: i32,
}

impl DuetGameState {
    /// Start a game on `board`, deriving the partner board from `rng`.
    pub fn from_board(board: Board<DuetColor>, rng: &mut GameRng) -> Result<Self, SetupError> {
        let board_b = dual_board(&board, rng)?;
        Self::from_boards(board, board_b)
    }

    /// Start a game on two explicit boards with the default budget.
    pub fn from_boards(board_a: Board<DuetColor>, board_b: Board<DuetColor>) -> Result<Self, SetupError> {
        Self::with_config(board_a, board_b, DuetConfig::default())
    }

    /// Start a game on two explicit boards.
    ///
    /// Both boards must be clean and `allowed_mistakes <= timer_tokens`.
    pub fn with_config(
        board_a: Board<DuetColor>,
        board_b: Board<DuetColor>,
        config: DuetConfig,
    ) -> Result<Self, SetupError> {
        config.validate()?;
        if board_a.size() != board_b.size() {
            return Err(SetupError::InvalidComposition(format!(
                "partner boards differ in size: {} and {}",
                board_a.size(),
                board_b.size()
            )));
        }
        let side_a = DuetSideState::from_board(board_a)?;
        let side_b = DuetSideState::from_board(board_b)?;
        info!(timer_tokens = config.timer_tokens, allowed_mistakes = config.allowed_mistakes, "duet game started");
        Ok(Self {
            side_a,
            side_b,
            current_playing_side: DuetSide::SideA,
            timer_tokens: config.timer_tokens,
            allowed_mistakes: config.allowed_mistakes,
        })
    }

    /// Start a game on a random board dealt from the built-in vocabulary.
    ///
    /// The partner board is derived from an independent stream of the same
    /// seed, so a seed fixes both boards.
    pub fn from_language(
        language: &str,
        board_config: &DuetBoardConfig,
        config: DuetConfig,
        rng: &mut GameRng,
    ) -> Result<Self, SetupError> {
        let vocabulary = BuiltinVocabulary.vocabulary(language)?;
        let board_a = from_vocabulary(&vocabulary, board_config, rng)?;
        let board_b = dual_board(&board_a, &mut rng.for_context("dual"))?;
        Self::with_config(board_a, board_b, config)
    }

    #[must_use]
    pub fn side_a(&self) -> &DuetSideState {
        &self.side_a
    }

    #[must_use]
    pub fn side_b(&self) -> &DuetSideState {
        &self.side_b
    }

    #[must_use]
    pub fn side(&self, side: DuetSide) -> &DuetSideState {
        match side {
            DuetSide::SideA => &self.side_a,
            DuetSide::SideB => &self.side_b,
        }
    }

    fn side_mut(&mut self, side: DuetSide) -> &mut DuetSideState {
        match side {
            DuetSide::SideA => &mut self.side_a,
            DuetSide::SideB => &mut self.side_b,
        }
    }

    #[must_use]
    pub fn current_playing_side(&self) -> DuetSide {
        self.current_playing_side
    }

    /// The side on turn.
    #[must_use]
    pub fn current_side_state(&self) -> &DuetSideState {
        self.side(self.current_playing_side)
    }

    /// The partner of the side on turn.
    #[must_use]
    pub fn current_dual_state(&self) -> &DuetSideState {
        self.side(self.current_playing_side.opposite())
    }

    #[must_use]
    pub fn timer_tokens(&self) -> i32 {
        self.timer_tokens
    }

    #[must_use]
    pub fn allowed_mistakes(&self) -> i32 {
        self.allowed_mistakes
    }

    /// No timer tokens left: operatives guess without new clues.
    #[must_use]
    pub fn is_sudden_death(&self) -> bool {
        self.timer_tokens == 0
    }

    /// The overall result.
    ///
    /// Running out of time or mistakes loses. A side that lost loses the
    /// game. Both sides reaching their target wins it.
    #[must_use]
    pub fn game_result(&self) -> Option<GameResult> {
        if self.timer_tokens < 0 {
            return Some(GameResult::TimerTokensDepleted);
        }
        if self.allowed_mistakes == 0 {
            return Some(GameResult::MistakeLimitReached);
        }
        let results = [self.side_a.game_result(), self.side_b.game_result()];
        if let Some(loss) = results.iter().flatten().find(|result| !result.is_win()) {
            return Some(*loss);
        }
        if results.iter().all(Option::is_some) {
            return Some(GameResult::TargetReached);
        }
        None
    }

    #[must_use]
    pub fn is_game_over(&self) -> bool {
        self.game_result().is_some()
    }

    #[must_use]
    pub fn current_player_role(&self) -> PlayerRole {
        self.current_side_state().current_player_role()
    }

    pub fn process_clue(&mut self, clue: &Clue) -> Result<Option<GivenClue<DuetTeam>>, RuleError> {
        if self.is_game_over() {
            return Err(RuleError::GameIsOver);
        }
        let side = self.current_playing_side;
        let given_clue = self.side_mut(side).process_clue(clue)?;
        if let Some(given_clue) = &given_clue {
            self.side_mut(side.opposite()).add_dual_given_word(given_clue.formatted_word());
        }
        Ok(given_clue)
    }

    pub fn process_guess(&mut self, guess: Guess) -> Result<Option<GivenGuess<DuetTeam>>, RuleError> {
        if self.is_game_over() {
            return Err(RuleError::GameIsOver);
        }
        let side = self.current_playing_side;
        let given_guess = self.side_mut(side).process_guess(guess)?;

        let correct = given_guess.as_ref().is_some_and(GivenGuess::correct);
        if !correct {
            self.update_tokens(given_guess.is_some());
            self.pass_to_partner();
            return Ok(given_guess);
        }

        if let Ok(index) = usize::try_from(guess.card_index) {
            self.side_mut(side.opposite()).dual_card_revealed(index);
        }
        let side_done = self.side(side).is_game_over();
        if side_done && !self.is_sudden_death() {
            self.update_tokens(false);
        }
        if side_done || self.is_sudden_death() {
            self.pass_to_partner();
        }
        Ok(given_guess)
    }

    /// Hand the turn to the partner side unless it already finished.
    fn pass_to_partner(&mut self) {
        let partner = self.current_playing_side.opposite();
        if !self.side(partner).is_game_over() {
            info!(side = %partner, "turn passes to partner side");
            self.current_playing_side = partner;
        }
    }

    fn update_tokens(&mut self, mistake: bool) {
        if self.timer_tokens >= 0 {
            self.timer_tokens -= 1;
        }
        if self.timer_tokens == 0 {
            info!("timer tokens depleted, entering sudden death");
            self.side_a.set_role(PlayerRole::Operative);
            self.side_b.set_role(PlayerRole::Operative);
        }
        if !mistake {
            return;
        }
        self.allowed_mistakes -= 1;
        if self.allowed_mistakes == 0 {
            info!("mistake limit reached");
        }
    }

    /// View for the spymaster of the side on turn.
    #[must_use]
    pub fn spymaster_state(&self) -> SpymasterState<DuetTeam> {
        self.current_side_state()
            .spymaster_state(Some(self.current_dual_state()))
    }

    /// View for the operative of the side on turn.
    #[must_use]
    pub fn operative_state(&self) -> OperativeState<DuetTeam> {
        self.current_side_state()
            .operative_state(Some(self.current_dual_state()))
    }
}

impl RulesEngine for DuetGameState {
    type Team = DuetTeam;
    type Outcome = GameResult;

    fn process_clue(&mut self, clue: &Clue) -> Result<Option<GivenClue<DuetTeam>>, RuleError> {
        DuetGameState::process_clue(self, clue)
    }

    fn process_guess(&mut self, guess: Guess) -> Result<Option<GivenGuess<DuetTeam>>, RuleError> {
        DuetGameState::process_guess(self, guess)
    }

    fn outcome(&self) -> Option<GameResult> {
        self.game_result()
    }

    fn current_player_role(&self) -> PlayerRole {
        DuetGameState::current_player_role(self)
    }

    fn spymaster_state(&self) -> SpymasterState<DuetTeam> {
        DuetGameState::spymaster_state(self)
    }

    fn operative_state(&self) -> OperativeState<DuetTeam> {
        DuetGameState::operative_state(self)
    }
}

impl DerivedFields for DuetGameState {
    fn derived_fields(&self) -> Map<String, Value> {
        let result = self
            .game_result()
            .map_or(Value::Null, |result| serde_json::to_value(result).unwrap_or(Value::Null));
        derived([
            ("is_sudden_death", Value::from(self.is_sudden_death())),
            ("is_game_over", Value::from(self.is_game_over())),
            ("game_result", result),
        ])
    }
}
