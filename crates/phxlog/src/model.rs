//! # Domain Model: Workout Days and Templates
//!
//! This module defines the records the rest of the crate passes around:
//! [`WorkoutDay`], [`Template`], [`ScenarioType`] and the [`Analytics`] aggregate.
//!
//! ## Identity
//!
//! A [`WorkoutDay`] starts life without an id. The id is assigned by the store on the
//! first successful save (see [`crate::commands::save`]) and never changes afterwards;
//! there is no public setter. Ids are opaque [`RecordId`]s: the local stores hand out
//! UUIDs, the remote diary service integers. Dates are not unique: several days may share a date and
//! the most recently written one wins when asking for "today".
//!
//! ## Scenario vs Blocks
//!
//! `scenario_type` is metadata chosen when the day was started. It seeds the initial
//! blocks but does not constrain them: a `rest` day may end up holding strength
//! blocks, and that is accepted as-is.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;
use std::str::FromStr;
use uuid::Uuid;

use crate::block::{Block, CircuitExercise, StrengthSet};
use crate::error::PhxError;

/// Store-owned identity of a day or template.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(untagged)]
pub enum RecordId {
    Number(i64),
    Uuid(Uuid),
}

impl RecordId {
    /// A fresh random id, as the local stores assign them.
    pub fn generate() -> Self {
        RecordId::Uuid(Uuid::new_v4())
    }

    pub fn as_uuid(&self) -> Option<Uuid> {
        match self {
            RecordId::Uuid(id) => Some(*id),
            RecordId::Number(_) => None,
        }
    }
}

impl fmt::Display for RecordId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RecordId::Number(n) => write!(f, "{}", n),
            RecordId::Uuid(id) => write!(f, "{}", id),
        }
    }
}

impl From<Uuid> for RecordId {
    fn from(id: Uuid) -> Self {
        RecordId::Uuid(id)
    }
}

impl From<i64> for RecordId {
    fn from(id: i64) -> Self {
        RecordId::Number(id)
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ScenarioType {
    Gtg,
    #[default]
    Strength,
    Kettlebell,
    Activity,
    Mixed,
    Rest,
}

impl ScenarioType {
    pub const ALL: [ScenarioType; 6] = [
        ScenarioType::Gtg,
        ScenarioType::Strength,
        ScenarioType::Kettlebell,
        ScenarioType::Activity,
        ScenarioType::Mixed,
        ScenarioType::Rest,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            ScenarioType::Gtg => "gtg",
            ScenarioType::Strength => "strength",
            ScenarioType::Kettlebell => "kettlebell",
            ScenarioType::Activity => "activity",
            ScenarioType::Mixed => "mixed",
            ScenarioType::Rest => "rest",
        }
    }

    /// Blocks a freshly started day of this scenario begins with.
    pub fn default_blocks(&self) -> Vec<Block> {
        match self {
            ScenarioType::Gtg => vec![Block::circuit(
                5,
                vec![CircuitExercise::new("Отжимания", 10)],
            )],
            ScenarioType::Strength => {
                vec![Block::strength("Присед", vec![StrengthSet::new(60, 5)])]
            }
            ScenarioType::Kettlebell => {
                vec![Block::kettlebell("Свинг", 24, "2 руки", "10x10")]
            }
            ScenarioType::Activity => vec![Block::activity(6000)],
            ScenarioType::Rest => vec![Block::activity(3000), Block::note("")],
            ScenarioType::Mixed => {
                vec![Block::strength("Жим стоя", vec![StrengthSet::new(30, 5)])]
            }
        }
    }
}

impl fmt::Display for ScenarioType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ScenarioType {
    type Err = PhxError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        ScenarioType::ALL
            .into_iter()
            .find(|scenario| scenario.as_str() == s.trim())
            .ok_or_else(|| PhxError::ValidationFailed(format!("Unknown scenario: {}", s)))
    }
}

/// One recorded training day.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WorkoutDay {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub(crate) id: Option<RecordId>,
    pub date: NaiveDate,
    pub scenario_type: ScenarioType,
    #[serde(default)]
    pub blocks: Vec<Block>,
    #[serde(default)]
    pub comment: String,
}

impl WorkoutDay {
    /// An unsaved day seeded with the scenario's default blocks.
    pub fn new(date: NaiveDate, scenario_type: ScenarioType) -> Self {
        Self::with_blocks(date, scenario_type, scenario_type.default_blocks())
    }

    pub fn with_blocks(date: NaiveDate, scenario_type: ScenarioType, blocks: Vec<Block>) -> Self {
        Self {
            id: None,
            date,
            scenario_type,
            blocks,
            comment: String::new(),
        }
    }

    pub fn id(&self) -> Option<RecordId> {
        self.id
    }

    pub fn is_saved(&self) -> bool {
        self.id.is_some()
    }

    pub(crate) fn with_id(mut self, id: RecordId) -> Self {
        self.id = Some(id);
        self
    }
}

/// A named, dateless block sequence used to start new days.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Template {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub(crate) id: Option<RecordId>,
    pub name: String,
    pub scenario_type: ScenarioType,
    #[serde(default)]
    pub blocks: Vec<Block>,
}

impl Template {
    pub fn id(&self) -> Option<RecordId> {
        self.id
    }

    pub(crate) fn with_id(mut self, id: RecordId) -> Self {
        self.id = Some(id);
        self
    }
}

/// Aggregates over a trailing window of days, as reported by the store.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Analytics {
    pub days: u32,
    pub training_days: u32,
    #[serde(default)]
    pub avg_steps: Option<i64>,
    #[serde(default)]
    pub last_working_weights: BTreeMap<String, Option<f64>>,
}
