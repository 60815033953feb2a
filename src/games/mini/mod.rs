//! Codenames Mini: a single Duet side played against a shorter clock.
//!
//! One spymaster clues, one operative guesses. Misses and passes spend timer
//! tokens; misses also spend mistakes. When the timer hits zero the operative
//! keeps guessing without new clues, and the next token spent loses.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use tracing::info;

use crate::core::history::{self, Move};
use crate::core::snapshot::derived;
use crate::core::{
    Board, Clue, DerivedFields, DuetBoardConfig, GameRng, GivenClue, GivenGuess, Guess, MiniConfig,
    OperativeState, PlayerRole, RuleError, SetupError, SpymasterState,
};
use crate::games::duet::{self, DuetColor, DuetSideState, DuetTeam};
use crate::rules::{GameResult, RulesEngine};
use crate::vocabulary::{BuiltinVocabulary, VocabularyProvider};

/// Full state of a Mini game.
///
/// ```
/// use codenames::core::{Board, Card, Clue, Guess, MiniConfig};
/// use codenames::games::duet::DuetColor;
/// use codenames::games::mini::MiniGameState;
///
/// let board = Board::new(
///     "english",
///     vec![Card::new("Moon", DuetColor::Green), Card::new("Sun", DuetColor::Neutral)],
/// );
/// let mut state = MiniGameState::from_board(board, MiniConfig::default()).unwrap();
/// state.process_clue(&Clue::new("night", 1)).unwrap();
/// state.process_guess(Guess::new(1)).unwrap();
///
/// assert_eq!(state.timer_tokens(), 4);
/// assert_eq!(state.allowed_mistakes(), 3);
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct MiniGameState {
    side: DuetSideState,
    timer_tokens: i32,
    allowed_mistakes: i32,
}

impl MiniGameState {
    /// Start a game on a clean board.
    pub fn from_board(board: Board<DuetColor>, config: MiniConfig) -> Result<Self, SetupError> {
        config.validate()?;
        let side = DuetSideState::from_board(board)?;
        info!(timer_tokens = config.timer_tokens, allowed_mistakes = config.allowed_mistakes, "mini game started");
        Ok(Self {
            side,
            timer_tokens: config.timer_tokens,
            allowed_mistakes: config.allowed_mistakes,
        })
    }

    /// Start a game on a random board dealt from the built-in vocabulary.
    pub fn from_language(
        language: &str,
        board_config: &DuetBoardConfig,
        config: MiniConfig,
        rng: &mut GameRng,
    ) -> Result<Self, SetupError> {
        let vocabulary = BuiltinVocabulary.vocabulary(language)?;
        Self::from_board(duet::from_vocabulary(&vocabulary, board_config, rng)?, config)
    }

    #[must_use]
    pub fn side(&self) -> &DuetSideState {
        &self.side
    }

    #[must_use]
    pub fn board(&self) -> &Board<DuetColor> {
        self.side.board()
    }

    #[must_use]
    pub fn timer_tokens(&self) -> i32 {
        self.timer_tokens
    }

    #[must_use]
    pub fn allowed_mistakes(&self) -> i32 {
        self.allowed_mistakes
    }

    #[must_use]
    pub fn is_sudden_death(&self) -> bool {
        self.timer_tokens == 0
    }

    #[must_use]
    pub fn game_result(&self) -> Option<GameResult> {
        self.side.game_result()
    }

    #[must_use]
    pub fn is_game_over(&self) -> bool {
        self.side.is_game_over()
    }

    #[must_use]
    pub fn current_player_role(&self) -> PlayerRole {
        self.side.current_player_role()
    }

    /// Clues, guesses and inferred passes in play order.
    #[must_use]
    pub fn moves(&self) -> Vec<Move<DuetTeam>> {
        history::moves(self.side.given_clues(), self.side.given_guesses(), self.current_player_role())
    }

    pub fn process_clue(&mut self, clue: &Clue) -> Result<Option<GivenClue<DuetTeam>>, RuleError> {
        self.side.process_clue(clue)
    }

    pub fn process_guess(&mut self, guess: Guess) -> Result<Option<GivenGuess<DuetTeam>>, RuleError> {
        let given_guess = self.side.process_guess(guess)?;
        if given_guess.as_ref().is_some_and(GivenGuess::correct) {
            return Ok(given_guess);
        }
        self.update_tokens(given_guess.is_some());
        Ok(given_guess)
    }

    fn update_tokens(&mut self, mistake: bool) {
        if self.timer_tokens >= 0 {
            self.timer_tokens -= 1;
        }
        if self.timer_tokens == 0 {
            info!("timer tokens depleted, entering sudden death");
            self.side.set_role(PlayerRole::Operative);
        } else if self.timer_tokens < 0 {
            self.side.set_game_result(GameResult::TimerTokensDepleted);
        }
        if !mistake {
            return;
        }
        self.allowed_mistakes -= 1;
        if self.allowed_mistakes == 0 {
            self.side.set_game_result(GameResult::MistakeLimitReached);
        }
    }

    #[must_use]
    pub fn spymaster_state(&self) -> SpymasterState<DuetTeam> {
        self.side.spymaster_state(None)
    }

    #[must_use]
    pub fn operative_state(&self) -> OperativeState<DuetTeam> {
        self.side.operative_state(None)
    }
}

impl RulesEngine for MiniGameState {
    type Team = DuetTeam;
    type Outcome = GameResult;

    fn process_clue(&mut self, clue: &Clue) -> Result<Option<GivenClue<DuetTeam>>, RuleError> {
        MiniGameState::process_clue(self, clue)
    }

    fn process_guess(&mut self, guess: Guess) -> Result<Option<GivenGuess<DuetTeam>>, RuleError> {
        MiniGameState::process_guess(self, guess)
    }

    fn outcome(&self) -> Option<GameResult> {
        self.game_result()
    }

    fn current_player_role(&self) -> PlayerRole {
        MiniGameState::current_player_role(self)
    }

    fn spymaster_state(&self) -> SpymasterState<DuetTeam> {
        MiniGameState::spymaster_state(self)
    }

    fn operative_state(&self) -> OperativeState<DuetTeam> {
        MiniGameState::operative_state(self)
    }
}

impl DerivedFields for MiniGameState {
    fn derived_fields(&self) -> Map<String, Value> {
        derived([
            ("is_sudden_death", Value::from(self.is_sudden_death())),
            ("is_game_over", Value::from(self.is_game_over())),
        ])
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::Card;

    fn board() -> Board<DuetColor> {
        use DuetColor::{Assassin as A, Green as G, Neutral as N};
        let colors = [G, G, G, N, N, N, N, N, A, N];
        let cards = colors
            .iter()
            .enumerate()
            .map(|(i, &color)| Card::new(format!("Card {i}"), color))
            .collect();
        Board::new("english", cards)
    }

    #[test]
    fn test_correct_guess_spends_nothing() {
        let mut state = MiniGameState::from_board(board(), MiniConfig::default()).unwrap();
        state.process_clue(&Clue::new("clue", 1)).unwrap();
        state.process_guess(Guess::new(0)).unwrap();
        assert_eq!(state.timer_tokens(), 5);
        assert_eq!(state.current_player_role(), PlayerRole::Operative);
    }

    #[test]
    fn test_sudden_death_then_depleted() {
        let config = MiniConfig::default().with_timer_tokens(2).with_allowed_mistakes(2);
        let mut state = MiniGameState::from_board(board(), config).unwrap();

        state.process_clue(&Clue::new("one", 1)).unwrap();
        state.process_guess(Guess::pass()).unwrap();
        assert_eq!(state.timer_tokens(), 1);
        assert_eq!(state.current_player_role(), PlayerRole::Spymaster);

        state.process_clue(&Clue::new("two", 1)).unwrap();
        state.process_guess(Guess::pass()).unwrap();
        assert!(state.is_sudden_death());
        assert_eq!(state.current_player_role(), PlayerRole::Operative);
        assert!(state.process_clue(&Clue::new("three", 1)).unwrap_err().is_invalid_turn());

        state.process_guess(Guess::pass()).unwrap();
        assert_eq!(state.game_result(), Some(GameResult::TimerTokensDepleted));
    }

    #[test]
    fn test_mistake_limit() {
        let config = MiniConfig::default().with_timer_tokens(5).with_allowed_mistakes(1);
        let mut state = MiniGameState::from_board(board(), config).unwrap();
        state.process_clue(&Clue::new("one", 1)).unwrap();
        state.process_guess(Guess::new(3)).unwrap();
        assert_eq!(state.game_result(), Some(GameResult::MistakeLimitReached));
    }

    #[test]
    fn test_finding_all_greens_wins() {
        let mut state = MiniGameState::from_board(board(), MiniConfig::default()).unwrap();
        state.process_clue(&Clue::new("three", 3)).unwrap();
        for index in 0..3 {
            state.process_guess(Guess::new(index)).unwrap();
        }
        assert_eq!(state.game_result(), Some(GameResult::TargetReached));
        assert_eq!(state.moves().len(), 4);
    }
}
