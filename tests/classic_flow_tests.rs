//! Classic game flows driven end to end through the runner.
//!
//! Every game is played on a 10 card board: cards 0-3 blue, 4-6 red, 7-8
//! neutral, 9 assassin. Blue starts.

use std::cell::RefCell;
use std::rc::Rc;

use codenames::core::{
    Board, Card, Clue, GivenClue, GivenGuess, Guess, OperativeState, PlayerError, PlayerRole, RuleError, RunnerError,
    SetupError, SpymasterState, PASS_GUESS, QUIT_GAME,
};
use codenames::games::classic::{ClassicColor, ClassicGameState, ClassicTeam, Winner, WinningReason};
use codenames::players::{ClassicGamePlayers, DictatedOperative, DictatedSpymaster, Operative, Player, Spymaster, TeamPlayers};
use codenames::runner::Runner;

type Log = Rc<RefCell<Vec<String>>>;

struct Turn {
    clue: Clue,
    guesses: Vec<i32>,
}

fn turn(word: &str, card_amount: i32, guesses: &[i32]) -> Turn {
    Turn {
        clue: Clue::new(word, card_amount),
        guesses: guesses.to_vec(),
    }
}

fn board_10() -> Board<ClassicColor> {
    use ClassicColor::{Assassin as A, Blue as B, Neutral as N, Red as R};
    board_with_colors(&[B, B, B, B, R, R, R, N, N, A])
}

fn board_with_colors(colors: &[ClassicColor]) -> Board<ClassicColor> {
    let cards = colors
        .iter()
        .enumerate()
        .map(|(i, &color)| Card::new(format!("Card {i}"), color))
        .collect();
    Board::new("english", cards)
}

/// Wraps a scripted player and records every notification it receives.
struct Recording<P> {
    inner: P,
    log: Log,
}

impl<P: Player<ClassicTeam>> Player<ClassicTeam> for Recording<P> {
    fn name(&self) -> &str {
        self.inner.name()
    }

    fn team(&self) -> ClassicTeam {
        self.inner.team()
    }

    fn on_game_start(&mut self, board: &Board<ClassicColor>) {
        let colored = board.iter().filter(|card| card.color.is_some()).count();
        self.log.borrow_mut().push(format!("{} start {colored}", self.name()));
    }

    fn on_clue_given(&mut self, given_clue: &GivenClue<ClassicTeam>) {
        self.log.borrow_mut().push(format!("{} clue {}", self.name(), given_clue.word));
    }

    fn on_guess_given(&mut self, given_guess: &GivenGuess<ClassicTeam>) {
        self.log
            .borrow_mut()
            .push(format!("{} guess {}", self.name(), given_guess.guessed_card.word));
    }
}

impl<P: Spymaster<ClassicTeam>> Spymaster<ClassicTeam> for Recording<P> {
    fn give_clue(&mut self, state: &SpymasterState<ClassicTeam>) -> Result<Clue, PlayerError> {
        self.inner.give_clue(state)
    }
}

impl<P: Operative<ClassicTeam>> Operative<ClassicTeam> for Recording<P> {
    fn guess(&mut self, state: &OperativeState<ClassicTeam>) -> Result<Guess, PlayerError> {
        let colored = state.board.iter().filter(|card| card.color.is_some()).count();
        self.log.borrow_mut().push(format!(
            "{} asked left={:?} colored={colored} turn={}",
            self.name(),
            state.left_guesses,
            state.turn_guesses().len()
        ));
        self.inner.guess(state)
    }
}

type Players = ClassicGamePlayers<DictatedSpymaster<ClassicTeam>, DictatedOperative<ClassicTeam>>;

/// Split alternating turns between the two teams, `first` moving first.
fn build_players(turns: &[Turn], first: ClassicTeam) -> Players {
    let team_players = |team: ClassicTeam, parity: usize| {
        let own = turns.iter().enumerate().filter(|(i, _)| i % 2 == parity).map(|(_, t)| t);
        let clues: Vec<Clue> = own.clone().map(|t| t.clue.clone()).collect();
        let guesses: Vec<Guess> = own.flat_map(|t| t.guesses.iter().map(|&i| Guess::new(i))).collect();
        TeamPlayers::new(
            DictatedSpymaster::new(clues, team).with_name(format!("{team} Spymaster")),
            DictatedOperative::new(guesses, team).with_name(format!("{team} Operative")),
        )
        .unwrap()
    };
    let (blue_parity, red_parity) = if first == ClassicTeam::Blue { (0, 1) } else { (1, 0) };
    ClassicGamePlayers::new(
        team_players(ClassicTeam::Blue, blue_parity),
        team_players(ClassicTeam::Red, red_parity),
    )
    .unwrap()
}

fn run_game(board: Board<ClassicColor>, turns: &[Turn]) -> (Winner, ClassicGameState) {
    let game = ClassicGameState::from_board(board).unwrap();
    let mut runner = Runner::new(game, build_players(turns, ClassicTeam::Blue));
    let winner = runner.run().unwrap();
    let (game, _) = runner.into_parts();
    (winner, game)
}

fn revealed(board: &Board<ClassicColor>, index: usize) -> Card<ClassicColor> {
    board.card_at(index).unwrap().clone().with_revealed(true)
}

// =============================================================================
// Outcomes
// =============================================================================

/// Test that blue wins by revealing all its cards.
#[test]
fn test_blue_reveals_all_and_wins() {
    let turns = [
        turn("A", 2, &[0, 1, PASS_GUESS]),
        turn("B", 2, &[4, 5, PASS_GUESS]),
        turn("C", 2, &[2, 3]),
    ];
    let (winner, _) = run_game(board_10(), &turns);
    assert_eq!(winner, Winner::new(ClassicTeam::Blue, WinningReason::TargetScoreReached));
}

/// Test that red wins by revealing all its cards.
#[test]
fn test_red_reveals_all_and_wins() {
    let turns = [
        turn("A", 2, &[0, 1, PASS_GUESS]),
        turn("B", 2, &[4, 5, PASS_GUESS]),
        turn("C", 2, &[7]),
        turn("D", 1, &[6]),
    ];
    let (winner, _) = run_game(board_10(), &turns);
    assert_eq!(winner, Winner::new(ClassicTeam::Red, WinningReason::TargetScoreReached));
}

/// Test that hitting the assassin hands the win to the opponent.
#[test]
fn test_blue_picks_assassin_and_red_wins() {
    let (winner, game) = run_game(board_10(), &[turn("A", 2, &[0, 9])]);
    assert_eq!(winner, Winner::new(ClassicTeam::Red, WinningReason::OpponentHitAssassin));
    assert_eq!(game.winner(), Some(winner));
}

/// Test that a wrong guess scores for the opponent and can win it the game.
#[test]
fn test_blue_picks_red_and_red_wins() {
    let board = board_10();
    let turns = [
        turn("A", 2, &[0, 7]),
        turn("B", 2, &[4, 5, 1]),
        turn("C", 1, &[2, 6]),
    ];
    let (winner, game) = run_game(board.clone(), &turns);
    assert_eq!(winner, Winner::new(ClassicTeam::Red, WinningReason::TargetScoreReached));

    let clues = [
        GivenClue::new("a", 2, ClassicTeam::Blue),
        GivenClue::new("b", 2, ClassicTeam::Red),
        GivenClue::new("c", 1, ClassicTeam::Blue),
    ];
    assert_eq!(game.given_clues().iter().cloned().collect::<Vec<_>>(), clues.to_vec());

    let expected: Vec<GivenGuess<ClassicTeam>> = [(0, 0), (0, 7), (1, 4), (1, 5), (1, 1), (2, 2), (2, 6)]
        .iter()
        .map(|&(clue, card)| GivenGuess {
            guessed_card: revealed(&board, card),
            for_clue: clues[clue].clone(),
        })
        .collect();
    assert_eq!(game.given_guesses().iter().cloned().collect::<Vec<_>>(), expected);
}

/// Test that the turn ends once the bonus guess is used.
#[test]
fn test_turns_switch_when_operatives_use_extra_guess() {
    let turns = [
        turn("A", 2, &[0, 1, 2]),
        turn("B", 1, &[4, 5]),
        turn("C", 1, &[3]),
    ];
    let (winner, game) = run_game(board_10(), &turns);
    assert_eq!(winner, Winner::new(ClassicTeam::Blue, WinningReason::TargetScoreReached));
    assert_eq!(game.given_clues().len(), 3);
    assert_eq!(game.given_guesses().len(), 6);
}

/// Test that the team with more cards moves first.
#[test]
fn test_game_starts_with_team_with_most_cards() {
    use ClassicColor::{Assassin as A, Blue as B, Neutral as N, Red as R};
    let board = board_with_colors(&[B, B, B, R, R, R, R, N, N, A]);
    let game = ClassicGameState::from_board(board).unwrap();
    assert_eq!(game.current_team(), ClassicTeam::Red);

    let mut runner = Runner::new(game, build_players(&[turn("A", 2, &[9])], ClassicTeam::Red));
    let winner = runner.run().unwrap();
    assert_eq!(winner, Winner::new(ClassicTeam::Blue, WinningReason::OpponentHitAssassin));
}

// =============================================================================
// Quitting
// =============================================================================

/// Test that a spymaster quitting forfeits the game.
#[test]
fn test_spymaster_quit_ends_game() {
    let turns = [turn("A", 2, &[0, 1, PASS_GUESS]), turn("B", QUIT_GAME, &[])];
    let (winner, game) = run_game(board_10(), &turns);
    assert_eq!(winner, Winner::new(ClassicTeam::Blue, WinningReason::OpponentQuit));
    assert_eq!(game.given_clues().len(), 1);
    assert_eq!(game.given_guesses().len(), 2);
    assert_eq!(game.clues().len(), 2);
}

/// Test that an operative quitting forfeits the game.
#[test]
fn test_operative_quit_ends_game() {
    let (winner, game) = run_game(board_10(), &[turn("A", 2, &[0, 1, QUIT_GAME])]);
    assert_eq!(winner, Winner::new(ClassicTeam::Red, WinningReason::OpponentQuit));
    assert_eq!(game.given_guesses().len(), 2);
}

/// Test that a player quitting is played as the quit move.
#[test]
fn test_player_quit_signal_becomes_quit_move() {
    let players = ClassicGamePlayers::new(
        TeamPlayers::new(
            DictatedSpymaster::new([Clue::new("A", 1)], ClassicTeam::Blue),
            DictatedOperative::new([Guess::new(0), Guess::pass()], ClassicTeam::Blue),
        )
        .unwrap(),
        TeamPlayers::new(
            DictatedSpymaster::new([], ClassicTeam::Red).with_auto_quit(true),
            DictatedOperative::new([], ClassicTeam::Red),
        )
        .unwrap(),
    )
    .unwrap();
    let game = ClassicGameState::from_board(board_10()).unwrap();
    let winner = Runner::new(game, players).run().unwrap();
    assert_eq!(winner, Winner::new(ClassicTeam::Blue, WinningReason::OpponentQuit));
}

/// Test that a player out of moves stops the runner.
#[test]
fn test_exhausted_player_stops_runner() {
    let game = ClassicGameState::from_board(board_10()).unwrap();
    let mut runner = Runner::new(game, build_players(&[turn("A", 2, &[0])], ClassicTeam::Blue));
    let err = runner.run().unwrap_err();
    assert_eq!(err, RunnerError::Player(PlayerError::Exhausted("Blue Operative".to_owned())));
    assert!(!runner.game().is_game_over());
}

// =============================================================================
// Runner Policy
// =============================================================================

/// Test that the runner asks again after an invalid guess.
#[test]
fn test_invalid_guesses_are_asked_again() {
    let turns = [turn("A", 2, &[0, 0, 42, -7, 1, PASS_GUESS]), turn("B", 1, &[9])];
    let (winner, game) = run_game(board_10(), &turns);
    assert_eq!(winner, Winner::new(ClassicTeam::Blue, WinningReason::OpponentHitAssassin));
    let words: Vec<_> = game.given_guesses().iter().map(|g| g.guessed_card.word.clone()).collect();
    assert_eq!(words, ["Card 0", "Card 1", "Card 9"]);
}

/// Test that an invalid clue stops the runner.
#[test]
fn test_invalid_clue_propagates() {
    let game = ClassicGameState::from_board(board_10()).unwrap();
    let mut runner = Runner::new(game, build_players(&[turn("card 3", 1, &[])], ClassicTeam::Blue));
    let err = runner.run().unwrap_err();
    assert!(matches!(err, RunnerError::Rule(RuleError::InvalidClue(_))));
    assert_eq!(runner.game().clues().len(), 1);
    assert!(runner.game().given_clues().is_empty());
}

/// Test that subscribers see accepted moves in play order.
#[test]
fn test_subscribers_see_accepted_moves_in_order() {
    let turns = [
        turn("A", 2, &[0, 1, PASS_GUESS]),
        turn("B", 2, &[4, 5, PASS_GUESS]),
        turn("C", 2, &[7]),
        turn("D", 1, &[6]),
    ];
    let game = ClassicGameState::from_board(board_10()).unwrap();
    let mut runner = Runner::new(game, build_players(&turns, ClassicTeam::Blue));

    let log: Log = Rc::default();
    let (clue_log, guess_log, start_log) = (log.clone(), log.clone(), log.clone());
    runner
        .on_game_start(move |game: &ClassicGameState| {
            start_log.borrow_mut().push(format!("start {}", game.current_team()));
        })
        .on_clue_given(move |clue| clue_log.borrow_mut().push(format!("{} {}", clue.team, clue.word)))
        .on_guess_given(move |guess| guess_log.borrow_mut().push(guess.guessed_card.word.clone()));
    runner.run().unwrap();

    let expected = [
        "start Blue", "Blue a", "Card 0", "Card 1", "Red b", "Card 4", "Card 5", "Blue c", "Card 7", "Red d",
        "Card 6",
    ];
    assert_eq!(*log.borrow(), expected);
}

/// Test that every seated player hears about every move.
#[test]
fn test_all_players_are_notified() {
    let turns = [turn("A", 2, &[0, 1, 2]), turn("B", 1, &[4, 9])];
    let log: Log = Rc::default();
    let record = |team: ClassicTeam, parity: usize| {
        let own: Vec<&Turn> = turns.iter().enumerate().filter(|(i, _)| i % 2 == parity).map(|(_, t)| t).collect();
        let spymaster = DictatedSpymaster::new(own.iter().map(|t| t.clue.clone()), team).with_name(format!("{team}S"));
        let operative = DictatedOperative::new(
            own.iter().flat_map(|t| t.guesses.iter().map(|&i| Guess::new(i))),
            team,
        )
        .with_name(format!("{team}O"));
        TeamPlayers::new(
            Recording { inner: spymaster, log: log.clone() },
            Recording { inner: operative, log: log.clone() },
        )
        .unwrap()
    };
    let players = ClassicGamePlayers::new(record(ClassicTeam::Blue, 0), record(ClassicTeam::Red, 1)).unwrap();
    let game = ClassicGameState::from_board(board_10()).unwrap();
    let winner = Runner::new(game, players).run().unwrap();
    assert_eq!(winner, Winner::new(ClassicTeam::Blue, WinningReason::OpponentHitAssassin));

    let log = log.borrow();
    let starts: Vec<_> = log.iter().filter(|line| line.contains("start")).cloned().collect();
    assert_eq!(starts, ["BlueS start 10", "RedS start 10", "BlueO start 0", "RedO start 0"]);
    assert_eq!(log.iter().filter(|line| line.contains(" clue ")).count(), 2 * 4);
    assert_eq!(log.iter().filter(|line| line.contains(" guess ")).count(), 5 * 4);

    let asked: Vec<_> = log.iter().filter(|line| line.contains("asked")).cloned().collect();
    assert_eq!(
        asked,
        [
            "BlueO asked left=Some(3) colored=0 turn=0",
            "BlueO asked left=Some(2) colored=1 turn=1",
            "BlueO asked left=Some(1) colored=2 turn=2",
            "RedO asked left=Some(2) colored=3 turn=0",
            "RedO asked left=Some(1) colored=4 turn=1",
        ]
    );
}

// =============================================================================
// Rejected moves on the state
// =============================================================================

/// Test that guessing a revealed card again leaves the turn as it was.
#[test]
fn test_repeated_guess_keeps_turn() {
    let mut state = ClassicGameState::from_board(board_10()).unwrap();
    state.process_clue(&Clue::new("A", 2)).unwrap();
    state.process_guess(Guess::new(0)).unwrap();
    assert_eq!(state.left_guesses(), 2);

    let err = state.process_guess(Guess::new(0)).unwrap_err();
    assert!(matches!(err, RuleError::InvalidGuess(_)));
    assert_eq!(state.left_guesses(), 2);
    assert_eq!(state.current_player_role(), PlayerRole::Operative);
    assert_eq!(state.current_team(), ClassicTeam::Blue);
    assert_eq!(state.given_guesses().len(), 1);
}

/// Test that an index too large for a guess is rejected instead of passing.
#[test]
fn test_oversized_index_is_not_a_pass() {
    let mut state = ClassicGameState::from_board(board_10()).unwrap();
    state.process_clue(&Clue::new("A", 2)).unwrap();

    let err = Guess::try_from(u32::MAX as usize).unwrap_err();
    assert!(matches!(err, RuleError::InvalidGuess(_)));
    assert!(matches!(state.process_guess(Guess::new(10)), Err(RuleError::InvalidGuess(_))));
    assert_eq!(state.current_team(), ClassicTeam::Blue);
    assert_eq!(state.left_guesses(), 3);
}

/// Test that board words match clues with underscores read as spaces.
#[test]
fn test_clue_matching_board_word_with_underscore() {
    let mut state = ClassicGameState::from_board(board_10()).unwrap();

    let err = state.process_clue(&Clue::new("Card_3", 2)).unwrap_err();
    assert!(matches!(err, RuleError::InvalidClue(_)));
    assert_eq!(state.current_player_role(), PlayerRole::Spymaster);
    assert_eq!(state.current_team(), ClassicTeam::Blue);
    assert_eq!(state.clues().len(), 1);
    assert!(state.given_clues().is_empty());

    let err = state.process_clue(&Clue::new(" CARD_3 ", 1)).unwrap_err();
    assert!(matches!(err, RuleError::InvalidClue(_)));
    assert_eq!(state.current_player_role(), PlayerRole::Spymaster);
    assert_eq!(state.clues().len(), 2);
}

// =============================================================================
// Seating
// =============================================================================

/// Test that the runner seats four loose players by team and plays the game.
#[test]
fn test_runner_seats_loose_players() {
    let game = ClassicGameState::from_board(board_10()).unwrap();
    let spymasters = vec![
        DictatedSpymaster::new([], ClassicTeam::Red).with_auto_quit(true),
        DictatedSpymaster::new([Clue::new("A", 4)], ClassicTeam::Blue),
    ];
    let operatives = vec![
        DictatedOperative::new([Guess::new(0), Guess::new(1), Guess::new(2), Guess::new(3)], ClassicTeam::Blue),
        DictatedOperative::new([], ClassicTeam::Red),
    ];

    let mut runner = Runner::classic(game, spymasters, operatives).unwrap();
    let winner = runner.run().unwrap();
    assert_eq!(winner, Winner::new(ClassicTeam::Blue, WinningReason::TargetScoreReached));
}

/// Test that a lineup missing a team's operative is a setup error.
#[test]
fn test_runner_rejects_bad_seating() {
    let game = ClassicGameState::from_board(board_10()).unwrap();
    let spymasters = vec![
        DictatedSpymaster::new([], ClassicTeam::Blue),
        DictatedSpymaster::new([], ClassicTeam::Red),
    ];
    let operatives = vec![
        DictatedOperative::new([], ClassicTeam::Blue),
        DictatedOperative::new([], ClassicTeam::Blue),
    ];

    let result = Runner::classic(game, spymasters, operatives);
    assert!(matches!(result, Err(RunnerError::Setup(SetupError::InvalidConfig(_)))));
}
