//! Dealing Classic boards.

use tracing::debug;

use super::color::{ClassicColor, ClassicTeam};
use crate::core::{Board, Card, ClassicBoardConfig, GameRng, SetupError, Team};
use crate::vocabulary::Vocabulary;

/// Deal a random Classic board from `vocabulary`.
///
/// The starting team gets one card more than the other. Without a configured
/// first team one is picked at random.
///
/// ```
/// use codenames::core::{ClassicBoardConfig, GameRng};
/// use codenames::games::classic::{self, ClassicColor, ClassicTeam};
/// use codenames::vocabulary::{BuiltinVocabulary, VocabularyProvider};
///
/// let vocabulary = BuiltinVocabulary.vocabulary("english").unwrap();
/// let config = ClassicBoardConfig::default().with_first_team(ClassicTeam::Red);
/// let board = classic::from_vocabulary(&vocabulary, &config, &mut GameRng::new(1)).unwrap();
///
/// assert_eq!(board.size(), 25);
/// assert_eq!(board.cards_for_color(ClassicColor::Red).len(), 9);
/// assert_eq!(board.cards_for_color(ClassicColor::Blue).len(), 8);
/// ```
pub fn from_vocabulary(
    vocabulary: &Vocabulary,
    config: &ClassicBoardConfig,
    rng: &mut GameRng,
) -> Result<Board<ClassicColor>, SetupError> {
    config.validate()?;
    let first_team = match config.first_team {
        Some(team) => team,
        None => *rng.choose(<ClassicTeam as Team>::all()).unwrap_or(&ClassicTeam::Blue),
    };
    let (blue_amount, red_amount) = match first_team {
        ClassicTeam::Blue => (config.first_team_amount(), config.second_team_amount()),
        ClassicTeam::Red => (config.second_team_amount(), config.first_team_amount()),
    };
    let neutral_amount = config
        .neutral_amount()
        .ok_or_else(|| SetupError::InvalidComposition("no room for neutral cards".into()))?;
    let colors = [
        (ClassicColor::Red, red_amount),
        (ClassicColor::Blue, blue_amount),
        (ClassicColor::Neutral, neutral_amount),
        (ClassicColor::Assassin, config.assassin_amount),
    ];

    let amounts: Vec<usize> = colors.iter().map(|(_, amount)| *amount).collect();
    let groups = vocabulary.sample_groups(&amounts, rng)?;
    let mut cards: Vec<Card<ClassicColor>> = colors
        .iter()
        .zip(groups)
        .flat_map(|((color, _), words)| words.into_iter().map(move |word| Card::new(word, *color)))
        .collect();
    rng.shuffle(&mut cards);

    debug!(%first_team, size = cards.len(), seed = rng.seed(), "dealt classic board");
    Ok(Board::new(vocabulary.language(), cards))
}

/// The team with more cards starts; blue on ties.
#[must_use]
pub fn first_team(board: &Board<ClassicColor>) -> ClassicTeam {
    let blue = board.cards_for_color(ClassicColor::Blue).len();
    let red = board.cards_for_color(ClassicColor::Red).len();
    if blue >= red {
        ClassicTeam::Blue
    } else {
        ClassicTeam::Red
    }
}
