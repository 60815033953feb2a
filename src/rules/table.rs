//! Clue and guess resolution shared by every variant.
//!
//! A `Table` owns one board with its score and histories. It validates and
//! records moves, reveals cards and reports what a reveal means for the
//! score. Turn passing and win conditions differ per variant, so they stay
//! with the variant's game state.

use im::Vector;
use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use crate::core::{
    canonical_format, Board, CardColor, Clue, GivenClue, GivenGuess, Guess, OperativeState, PlayerRole,
    PlayerState, RuleError, Score, SpymasterState, Team,
};

/// What an operative submission turned out to be.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum GuessSubmission<T: Team> {
    Pass,
    Quit,
    Revealed(GivenGuess<T>),
}

/// Score effect of a revealed card.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RevealEffect<T> {
    /// Nobody scores.
    Neutral,
    /// The guessing team hit the assassin.
    Assassin,
    /// `team` scored; `target_reached` if it has no cards left to find.
    Point { team: T, target_reached: bool },
}

/// One board with everything recorded on it.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(bound = "")]
pub struct Table<T: Team> {
    board: Board<T::Color>,
    score: Score<T>,
    current_team: T,
    current_player_role: PlayerRole,
    clues: Vector<Clue>,
    given_clues: Vector<GivenClue<T>>,
    given_guesses: Vector<GivenGuess<T>>,
    dual_given_words: Vector<String>,
}

impl<T: Team> Table<T> {
    /// Seat `current_team` at `board`; the spymaster acts first.
    pub fn new(board: Board<T::Color>, score: Score<T>, current_team: T) -> Self {
        Self {
            board,
            score,
            current_team,
            current_player_role: PlayerRole::Spymaster,
            clues: Vector::new(),
            given_clues: Vector::new(),
            given_guesses: Vector::new(),
            dual_given_words: Vector::new(),
        }
    }

    #[must_use]
    pub fn board(&self) -> &Board<T::Color> {
        &self.board
    }

    #[must_use]
    pub fn score(&self) -> &Score<T> {
        &self.score
    }

    #[must_use]
    pub fn current_team(&self) -> T {
        self.current_team
    }

    #[must_use]
    pub fn current_player_role(&self) -> PlayerRole {
        self.current_player_role
    }

    /// Every submitted clue, accepted or not.
    #[must_use]
    pub fn clues(&self) -> &Vector<Clue> {
        &self.clues
    }

    #[must_use]
    pub fn given_clues(&self) -> &Vector<GivenClue<T>> {
        &self.given_clues
    }

    #[must_use]
    pub fn given_guesses(&self) -> &Vector<GivenGuess<T>> {
        &self.given_guesses
    }

    #[must_use]
    pub fn dual_given_words(&self) -> &Vector<String> {
        &self.dual_given_words
    }

    /// The clue operatives are answering.
    #[must_use]
    pub fn last_given_clue(&self) -> Option<&GivenClue<T>> {
        self.given_clues.last()
    }

    pub(crate) fn set_current_team(&mut self, team: T) {
        self.current_team = team;
    }

    pub(crate) fn set_role(&mut self, role: PlayerRole) {
        self.current_player_role = role;
    }

    pub(crate) fn flip_role(&mut self) {
        self.current_player_role = self.current_player_role.other();
    }

    /// Remember a word clued on the partner board.
    pub(crate) fn add_dual_given_word(&mut self, word: String) {
        self.dual_given_words.push_back(word);
    }

    fn ensure_turn(&self, role: PlayerRole) -> Result<(), RuleError> {
        if self.current_player_role == role {
            Ok(())
        } else {
            debug!(expected = %role, actual = %self.current_player_role, "move out of turn");
            Err(RuleError::InvalidTurn(format!("it's not the {role}'s turn now")))
        }
    }

    /// Validate and record a clue.
    ///
    /// The raw clue enters the history before validation. Returns `None` for
    /// the quit sentinel; the caller decides what quitting means.
    pub(crate) fn submit_clue(&mut self, clue: &Clue) -> Result<Option<GivenClue<T>>, RuleError> {
        self.ensure_turn(PlayerRole::Spymaster)?;
        self.clues.push_back(clue.clone());
        if clue.is_quit() {
            info!(team = %self.current_team, "spymaster quit the game");
            return Ok(None);
        }
        if clue.card_amount < 0 {
            debug!(amount = clue.card_amount, "clue rejected");
            return Err(RuleError::InvalidClue(format!(
                "card amount must not be negative, got {}",
                clue.card_amount
            )));
        }
        let formatted = canonical_format(&clue.word);
        if self.is_illegal_clue_word(&formatted) {
            debug!(word = %formatted, "clue rejected");
            return Err(RuleError::InvalidClue(format!(
                "clue word '{formatted}' is on board or was already used"
            )));
        }
        let given_clue = GivenClue::new(&formatted, clue.card_amount, self.current_team);
        info!(team = %self.current_team, clue = %given_clue, "spymaster gave a clue");
        self.given_clues.push_back(given_clue.clone());
        self.current_player_role = PlayerRole::Operative;
        Ok(Some(given_clue))
    }

    fn is_illegal_clue_word(&self, formatted: &str) -> bool {
        self.board.iter().any(|card| card.formatted_word() == formatted)
            || self.given_clues.iter().any(|given| given.word == formatted)
            || self.dual_given_words.iter().any(|word| word == formatted)
    }

    /// Validate a guess and reveal the guessed card.
    ///
    /// Rejections leave the table untouched.
    pub(crate) fn submit_guess(&mut self, guess: Guess) -> Result<GuessSubmission<T>, RuleError> {
        self.ensure_turn(PlayerRole::Operative)?;
        if guess.is_pass() {
            info!(team = %self.current_team, "operative passed the turn");
            return Ok(GuessSubmission::Pass);
        }
        if guess.is_quit() {
            info!(team = %self.current_team, "operative quit the game");
            return Ok(GuessSubmission::Quit);
        }
        let for_clue = self
            .last_given_clue()
            .cloned()
            .ok_or_else(|| RuleError::InvalidTurn("no clue was given yet".to_string()))?;
        let index = self.resolve_index(guess)?;
        let guessed_card = self.board.reveal(index).clone();
        let given_guess = GivenGuess { guessed_card, for_clue };
        info!(team = %self.current_team, guess = %given_guess, "operative guessed");
        self.given_guesses.push_back(given_guess.clone());
        Ok(GuessSubmission::Revealed(given_guess))
    }

    fn resolve_index(&self, guess: Guess) -> Result<usize, RuleError> {
        let index = usize::try_from(guess.card_index).map_err(|_| {
            RuleError::InvalidGuess(format!("card index {} is out of range", guess.card_index))
        })?;
        let card = self.board.card_at(index)?;
        if card.revealed {
            debug!(index, "guess rejected");
            return Err(RuleError::InvalidGuess(format!("card '{}' is already revealed", card.word)));
        }
        Ok(index)
    }

    /// Apply a reveal to the score.
    ///
    /// A wrong guess on a team color scores for the opponent of the clue team.
    pub(crate) fn score_reveal(&mut self, given_guess: &GivenGuess<T>) -> RevealEffect<T> {
        let color = match given_guess.guessed_card.color {
            Some(color) if !color.is_neutral() => color,
            _ => return RevealEffect::Neutral,
        };
        if color.is_assassin() {
            return RevealEffect::Assassin;
        }
        let clue_team = given_guess.team();
        let team = if given_guess.correct() { clue_team } else { clue_team.opponent() };
        let target_reached = self.score.add_point(team);
        RevealEffect::Point { team, target_reached }
    }

    /// Consume the card at `index` because the partner board revealed it.
    ///
    /// Already revealed cards are left alone. If the card was one of ours the
    /// current team scores.
    pub(crate) fn consume(&mut self, index: usize) -> Option<RevealEffect<T>> {
        let card = self.board.card_at(index).ok()?;
        if card.revealed {
            return None;
        }
        let color = card.color;
        self.board.consume(index);
        let team = self.current_team;
        if color == Some(team.as_card_color()) {
            let target_reached = self.score.add_point(team);
            return Some(RevealEffect::Point { team, target_reached });
        }
        None
    }

    fn player_state(&self, board: Board<T::Color>, left_guesses: Option<u32>) -> PlayerState<T> {
        PlayerState {
            board,
            score: self.score.clone(),
            current_team: self.current_team,
            current_player_role: self.current_player_role,
            given_clues: self.given_clues.clone(),
            given_guesses: self.given_guesses.clone(),
            dual_given_words: self.dual_given_words.clone(),
            left_guesses,
        }
    }

    /// The view handed to this table's spymaster.
    pub(crate) fn spymaster_state(
        &self,
        left_guesses: Option<u32>,
        dual_state: Option<OperativeState<T>>,
    ) -> SpymasterState<T> {
        SpymasterState {
            state: self.player_state(self.board.clone(), left_guesses),
            clues: self.clues.clone(),
            dual_state: dual_state.map(Box::new),
        }
    }

    /// The view handed to this table's operative.
    pub(crate) fn operative_state(
        &self,
        left_guesses: Option<u32>,
        dual_state: Option<SpymasterState<T>>,
    ) -> OperativeState<T> {
        OperativeState {
            state: self.player_state(self.board.censored(), left_guesses),
            dual_state: dual_state.map(Box::new),
        }
    }
}
