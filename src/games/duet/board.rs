//! Dealing Duet boards and deriving the partner board.

use tracing::debug;

use super::color::DuetColor;
use crate::core::{Board, Card, DuetBoardConfig, GameRng, SetupError};
use crate::vocabulary::Vocabulary;

/// One in this many green cards is green on both boards.
const OVERLAP_RATIO: f64 = 3.0;

/// Deal a random Duet board from `vocabulary`.
pub fn from_vocabulary(
    vocabulary: &Vocabulary,
    config: &DuetBoardConfig,
    rng: &mut GameRng,
) -> Result<Board<DuetColor>, SetupError> {
    config.validate()?;
    let neutral_amount = config
        .neutral_amount()
        .ok_or_else(|| SetupError::InvalidComposition("no room for neutral cards".into()))?;
    let colors = [
        (DuetColor::Green, config.green_amount),
        (DuetColor::Neutral, neutral_amount),
        (DuetColor::Assassin, config.assassin_amount),
    ];
    let amounts: Vec<usize> = colors.iter().map(|(_, amount)| *amount).collect();
    let groups = vocabulary.sample_groups(&amounts, rng)?;
    let mut cards: Vec<Card<DuetColor>> = colors
        .iter()
        .zip(groups)
        .flat_map(|((color, _), words)| words.into_iter().map(move |word| Card::new(word, *color)))
        .collect();
    rng.shuffle(&mut cards);

    debug!(size = cards.len(), seed = rng.seed(), "dealt duet board");
    Ok(Board::new(vocabulary.language(), cards))
}

/// Number of green positions shared by a board and its partner.
#[must_use]
pub fn common_green_amount(green_amount: usize) -> usize {
    (green_amount as f64 / OVERLAP_RATIO).round() as usize
}

/// Derive the partner board of `board`.
///
/// Words stay in place; only colors move. A third of the greens (rounded)
/// stay green, the other greens land on positions that were not green, and
/// the non-green colors are reshuffled over what is left. Both boards end up
/// with the same color counts.
pub fn dual_board(board: &Board<DuetColor>, rng: &mut GameRng) -> Result<Board<DuetColor>, SetupError> {
    let size = board.size();
    let mut green_indices = Vec::new();
    let mut non_green_indices = Vec::new();
    let mut non_green_colors = Vec::new();
    for (index, card) in board.iter().enumerate() {
        match card.color {
            Some(DuetColor::Green) => green_indices.push(index),
            Some(color @ (DuetColor::Neutral | DuetColor::Assassin)) => {
                non_green_indices.push(index);
                non_green_colors.push(color);
            }
            _ => {
                return Err(SetupError::InvalidComposition(format!(
                    "card '{}' has no dealt color",
                    card.word
                )))
            }
        }
    }

    let overlap = common_green_amount(green_indices.len());
    let unique_amount = green_indices.len() - overlap;
    if unique_amount > non_green_indices.len() {
        return Err(SetupError::InvalidComposition(format!(
            "{} green cards do not fit a partner board of {size}",
            green_indices.len()
        )));
    }

    let mut dual_colors: Vec<Option<DuetColor>> = vec![None; size];
    for i in rng.sample_indices(green_indices.len(), overlap) {
        dual_colors[green_indices[i]] = Some(DuetColor::Green);
    }
    for i in rng.sample_indices(non_green_indices.len(), unique_amount) {
        dual_colors[non_green_indices[i]] = Some(DuetColor::Green);
    }
    rng.shuffle(&mut non_green_colors);
    let mut remaining = non_green_colors.into_iter();
    for slot in dual_colors.iter_mut().filter(|slot| slot.is_none()) {
        *slot = remaining.next();
    }

    let cards = board
        .iter()
        .zip(dual_colors)
        .map(|(card, color)| Card {
            word: card.word.clone(),
            color,
            revealed: false,
            consumed: false,
        })
        .collect();
    Ok(Board::new(board.language(), cards))
}
