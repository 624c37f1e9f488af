//! One-line summaries of a workout day for list views.
//!
//! The digest is lossy on purpose: it picks at most [`MAX_TOKENS`] salient bits,
//! scanning blocks in order, so a history list can be skimmed quickly.
//!
//! | Block        | Token                                  |
//! |--------------|----------------------------------------|
//! | `strength`   | exercise name, if non-empty            |
//! | `circuit`    | `"<rounds> rounds"`                    |
//! | `activity`   | `"<steps> steps"`, if steps are non-zero |
//! | `kettlebell` | nothing                                |
//! | `note`       | nothing                                |

use crate::block::Block;
use crate::model::WorkoutDay;

pub const MAX_TOKENS: usize = 2;
pub const SEPARATOR: &str = " · ";

pub fn digest(day: &WorkoutDay) -> String {
    digest_blocks(&day.blocks)
}

pub fn digest_blocks(blocks: &[Block]) -> String {
    blocks
        .iter()
        .filter_map(token)
        .take(MAX_TOKENS)
        .collect::<Vec<_>>()
        .join(SEPARATOR)
}

fn token(block: &Block) -> Option<String> {
    match block {
        Block::Strength(s) if !s.exercise.is_empty() => Some(s.exercise.clone()),
        Block::Circuit(c) => Some(format!("{} rounds", c.rounds)),
        Block::Activity(a) if !a.steps.is_zero_or_blank() => Some(format!("{} steps", a.steps)),
        _ => None,
    }
}
