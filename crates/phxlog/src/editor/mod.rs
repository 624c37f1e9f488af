//! # Editor Engine
//!
//! [`Editor`] is the staging area for exactly one [`WorkoutDay`]. Every structural
//! change to a day goes through it: adding, removing and reordering blocks, and the
//! nested edits inside a block's payload.
//!
//! ## Index Contract
//!
//! Operations address blocks and nested items by position, resolved against the
//! lengths at call time. There is no stale-index protection: after a structural
//! change (add/remove/move) the caller re-reads the current positions before issuing
//! the next index-based call. A bad index is reported as [`PhxError::OutOfRange`] and
//! an operation aimed at the wrong variant as [`PhxError::InvalidVariant`]; in both
//! cases the day is left exactly as it was.
//!
//! ## Nested Collections
//!
//! | [`NestedKind`] | Variant      | New item                 |
//! |----------------|--------------|--------------------------|
//! | `Exercises`    | `circuit`    | `{name: "", reps: 8}`    |
//! | `Sets`         | `strength`   | `{weight: "", reps: ""}` |
//! | `Cardio`       | `activity`   | `{"", "", ""}`           |

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::block::{Block, BlockKind, CardioEntry, CircuitExercise, StrengthSet};
use crate::error::{PhxError, Result};
use crate::model::{ScenarioType, WorkoutDay};

pub mod field;

pub use field::FieldEdit;
use field::item_mut;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Direction {
    Up,
    Down,
}

/// A collection nested inside a block payload.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum NestedKind {
    Exercises,
    Sets,
    Cardio,
}

impl NestedKind {
    pub fn block_kind(&self) -> BlockKind {
        match self {
            NestedKind::Exercises => BlockKind::Circuit,
            NestedKind::Sets => BlockKind::Strength,
            NestedKind::Cardio => BlockKind::Activity,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            NestedKind::Exercises => "exercises",
            NestedKind::Sets => "sets",
            NestedKind::Cardio => "cardio",
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Editor {
    day: WorkoutDay,
}

impl Editor {
    /// Stage `day` as a new, unsaved day. Any id it carries is dropped: only the
    /// store assigns ids, through [`crate::commands::save`].
    pub fn new(mut day: WorkoutDay) -> Self {
        day.id = None;
        Self { day }
    }

    /// Stage a day loaded from the store, keeping its id.
    pub(crate) fn resume(day: WorkoutDay) -> Self {
        Self { day }
    }

    pub fn day(&self) -> &WorkoutDay {
        &self.day
    }

    pub fn into_day(self) -> WorkoutDay {
        self.day
    }

    pub(crate) fn day_mut(&mut self) -> &mut WorkoutDay {
        &mut self.day
    }

    pub fn blocks(&self) -> &[Block] {
        &self.day.blocks
    }

    /// Scenario is metadata only; blocks are left alone.
    pub fn set_scenario(&mut self, scenario: ScenarioType) {
        self.day.scenario_type = scenario;
    }

    pub fn set_date(&mut self, date: NaiveDate) {
        self.day.date = date;
    }

    pub fn set_comment(&mut self, comment: impl Into<String>) {
        self.day.comment = comment.into();
    }

    /// Appends a default block of `kind`, returning its index.
    pub fn add_block(&mut self, kind: BlockKind) -> usize {
        self.day.blocks.push(kind.default_block());
        self.day.blocks.len() - 1
    }

    /// Removes and returns the block at `index`; later blocks shift down by one.
    pub fn remove_block(&mut self, index: usize) -> Result<Block> {
        self.check_block(index)?;
        Ok(self.day.blocks.remove(index))
    }

    /// Swaps the block with its neighbour. Returns `false` when the block is already
    /// at the edge it is being moved towards.
    pub fn move_block(&mut self, index: usize, direction: Direction) -> Result<bool> {
        let len = self.check_block(index)?;
        let target = match direction {
            Direction::Up => index.checked_sub(1),
            Direction::Down => Some(index + 1).filter(|t| *t < len),
        };
        match target {
            Some(target) => {
                self.day.blocks.swap(index, target);
                Ok(true)
            }
            None => Ok(false),
        }
    }

    pub fn edit_field(&mut self, block: usize, edit: FieldEdit) -> Result<()> {
        edit.apply(self.block_mut(block)?)
    }

    /// Form-style edit: `field` is a field name such as `"set-weight"`, `item` the
    /// nested position for fields inside a collection.
    pub fn edit_named_field(
        &mut self,
        block: usize,
        field: &str,
        item: Option<usize>,
        raw: &str,
    ) -> Result<()> {
        let target = self.block_mut(block)?;
        let edit = FieldEdit::parse(target.kind(), field, item, raw)?;
        edit.apply(target)
    }

    /// Appends a default item to the block's nested collection, returning its index.
    pub fn add_item(&mut self, block: usize, kind: NestedKind) -> Result<usize> {
        let target = self.block_mut(block)?;
        let len = match (kind, target) {
            (NestedKind::Exercises, Block::Circuit(c)) => {
                c.exercises.push(CircuitExercise::default());
                c.exercises.len()
            }
            (NestedKind::Sets, Block::Strength(s)) => {
                s.sets.push(StrengthSet::default());
                s.sets.len()
            }
            (NestedKind::Cardio, Block::Activity(a)) => {
                a.cardio.push(CardioEntry::default());
                a.cardio.len()
            }
            (kind, other) => {
                return Err(PhxError::invalid_variant(
                    format!("add to {}", kind.as_str()),
                    other.kind(),
                ))
            }
        };
        Ok(len - 1)
    }

    pub fn remove_item(&mut self, block: usize, kind: NestedKind, item: usize) -> Result<()> {
        let target = self.block_mut(block)?;
        match (kind, target) {
            (NestedKind::Exercises, Block::Circuit(c)) => {
                remove_at(&mut c.exercises, "exercise", item)
            }
            (NestedKind::Sets, Block::Strength(s)) => remove_at(&mut s.sets, "set", item),
            (NestedKind::Cardio, Block::Activity(a)) => remove_at(&mut a.cardio, "cardio", item),
            (kind, other) => Err(PhxError::invalid_variant(
                format!("remove from {}", kind.as_str()),
                other.kind(),
            )),
        }
    }

    /// Appends a copy of set `set` to the same strength block, returning the copy's index.
    pub fn duplicate_set(&mut self, block: usize, set: usize) -> Result<usize> {
        let target = self.block_mut(block)?;
        let kind = target.kind();
        let Block::Strength(strength) = target else {
            return Err(PhxError::invalid_variant("duplicate set", kind));
        };
        let copy = item_mut(&mut strength.sets, "set", set)?.clone();
        strength.sets.push(copy);
        Ok(strength.sets.len() - 1)
    }

    /// Adds `delta` to a circuit exercise's reps. The count never drops below zero.
    pub fn increment_rep(&mut self, block: usize, exercise: usize, delta: i64) -> Result<u32> {
        let target = self.block_mut(block)?;
        let kind = target.kind();
        let Block::Circuit(circuit) = target else {
            return Err(PhxError::invalid_variant("change reps", kind));
        };
        let entry = item_mut(&mut circuit.exercises, "exercise", exercise)?;
        let next = i64::from(entry.reps)
            .saturating_add(delta)
            .clamp(0, i64::from(u32::MAX));
        entry.reps = next as u32;
        Ok(entry.reps)
    }

    fn check_block(&self, index: usize) -> Result<usize> {
        let len = self.day.blocks.len();
        if index >= len {
            return Err(PhxError::out_of_range("block", index, len));
        }
        Ok(len)
    }

    fn block_mut(&mut self, index: usize) -> Result<&mut Block> {
        item_mut(&mut self.day.blocks, "block", index)
    }
}

fn remove_at<T>(items: &mut Vec<T>, what: &'static str, index: usize) -> Result<()> {
    if index >= items.len() {
        return Err(PhxError::out_of_range(what, index, items.len()));
    }
    items.remove(index);
    Ok(())
}
