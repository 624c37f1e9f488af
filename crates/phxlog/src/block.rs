//! # Blocks: the entries of a workout day
//!
//! A day is recorded as an ordered list of [`Block`]s. Each block is one of a closed
//! set of variants, and every variant owns its own payload:
//!
//! | Variant      | Payload                                              |
//! |--------------|------------------------------------------------------|
//! | `circuit`    | round count + ordered `exercises` (`name`, `reps`)   |
//! | `strength`   | exercise name + ordered `sets` (`weight`, `reps`)    |
//! | `kettlebell` | exercise, weight, grip mode, rep scheme              |
//! | `activity`   | step count + ordered `cardio` entries                |
//! | `note`       | free text                                            |
//!
//! The variant is fixed when a block is created. Switching variants means building a
//! new block; a payload never changes its tag.
//!
//! ## Wire Format
//!
//! Blocks serialize as `{"type": "<variant>", "data": {...}}`, which is the shape the
//! remote diary service stores. Values typed by hand while training (weights, reps in
//! a set, steps, cardio numbers) are [`FieldValue`]s: they accept both numbers and
//! strings so that half-typed input like `""` or `"62.5"` survives a round trip.
//!
//! Records written by the service's own form are read leniently: a `null` value is
//! blank, and counts (`rounds`, circuit `reps`) that arrive as fractions, text or
//! `null` are truncated to a whole number, with anything unreadable read as 0.
//!
//! ## Defaults
//!
//! [`BlockKind::default_block`] is what "add block" inserts. Defaults are always
//! complete: a strength block starts with one set, so there is always a set to
//! duplicate.

use serde::de::Error as _;
use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;
use std::fmt;

/// Reps given to an exercise appended to a circuit.
pub const NEW_EXERCISE_REPS: u32 = 8;

/// A free-form scalar entered by the user.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum FieldValue {
    Int(i64),
    Float(f64),
    Text(String),
}

impl FieldValue {
    pub fn empty() -> Self {
        FieldValue::Text(String::new())
    }

    /// Numeric reading of the value, if it has one. Text is trimmed and parsed.
    pub fn as_f64(&self) -> Option<f64> {
        match self {
            FieldValue::Int(v) => Some(*v as f64),
            FieldValue::Float(v) => Some(*v),
            FieldValue::Text(s) => s.trim().parse::<f64>().ok(),
        }
    }

    pub fn as_i64(&self) -> Option<i64> {
        match self {
            FieldValue::Int(v) => Some(*v),
            FieldValue::Float(v) => Some(v.trunc() as i64),
            FieldValue::Text(s) => {
                let s = s.trim();
                s.parse::<i64>()
                    .ok()
                    .or_else(|| s.parse::<f64>().ok().map(|v| v.trunc() as i64))
            }
        }
    }

    pub fn is_blank(&self) -> bool {
        matches!(self, FieldValue::Text(s) if s.trim().is_empty())
    }

    /// True for blank text and anything that reads as the number zero.
    pub fn is_zero_or_blank(&self) -> bool {
        self.is_blank() || self.as_f64() == Some(0.0)
    }
}

impl<'de> Deserialize<'de> for FieldValue {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        match Value::deserialize(deserializer)? {
            Value::Null => Ok(FieldValue::empty()),
            Value::Number(n) => Ok(match n.as_i64() {
                Some(v) => FieldValue::Int(v),
                None => FieldValue::Float(n.as_f64().unwrap_or_default()),
            }),
            Value::String(s) => Ok(FieldValue::Text(s)),
            Value::Bool(b) => Ok(FieldValue::Text(b.to_string())),
            other => Err(D::Error::custom(format!(
                "expected a number, text or null, got {}",
                other
            ))),
        }
    }
}

/// Reads a count the way the form produced it; see the module docs.
fn lenient_count<'de, D: Deserializer<'de>>(deserializer: D) -> Result<u32, D::Error> {
    let reading = match Value::deserialize(deserializer)? {
        Value::Number(n) => n.as_f64(),
        Value::String(s) => s.trim().parse::<f64>().ok(),
        _ => None,
    };
    Ok(match reading {
        Some(v) if v.is_finite() && v > 0.0 => v.trunc().min(f64::from(u32::MAX)) as u32,
        _ => 0,
    })
}

impl Default for FieldValue {
    fn default() -> Self {
        Self::empty()
    }
}

impl fmt::Display for FieldValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FieldValue::Int(v) => write!(f, "{}", v),
            FieldValue::Float(v) => write!(f, "{}", v),
            FieldValue::Text(s) => f.write_str(s),
        }
    }
}

impl From<i64> for FieldValue {
    fn from(v: i64) -> Self {
        FieldValue::Int(v)
    }
}

impl From<i32> for FieldValue {
    fn from(v: i32) -> Self {
        FieldValue::Int(v.into())
    }
}

impl From<u32> for FieldValue {
    fn from(v: u32) -> Self {
        FieldValue::Int(v.into())
    }
}

impl From<f64> for FieldValue {
    fn from(v: f64) -> Self {
        FieldValue::Float(v)
    }
}

impl From<&str> for FieldValue {
    fn from(v: &str) -> Self {
        FieldValue::Text(v.to_string())
    }
}

impl From<String> for FieldValue {
    fn from(v: String) -> Self {
        FieldValue::Text(v)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CircuitExercise {
    #[serde(default)]
    pub name: String,
    #[serde(default, deserialize_with = "lenient_count")]
    pub reps: u32,
}

impl CircuitExercise {
    pub fn new(name: impl Into<String>, reps: u32) -> Self {
        Self {
            name: name.into(),
            reps,
        }
    }
}

impl Default for CircuitExercise {
    fn default() -> Self {
        Self::new("", NEW_EXERCISE_REPS)
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Circuit {
    #[serde(default, deserialize_with = "lenient_count")]
    pub rounds: u32,
    #[serde(default)]
    pub exercises: Vec<CircuitExercise>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct StrengthSet {
    #[serde(default)]
    pub weight: FieldValue,
    #[serde(default)]
    pub reps: FieldValue,
}

impl StrengthSet {
    pub fn new(weight: impl Into<FieldValue>, reps: impl Into<FieldValue>) -> Self {
        Self {
            weight: weight.into(),
            reps: reps.into(),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Strength {
    #[serde(default)]
    pub exercise: String,
    #[serde(default)]
    pub sets: Vec<StrengthSet>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Kettlebell {
    #[serde(default)]
    pub exercise: String,
    #[serde(default)]
    pub weight: FieldValue,
    /// Grip, e.g. "1 рука" / "2 руки".
    #[serde(default)]
    pub mode: String,
    /// Rep scheme such as "10x10" or "50+50".
    #[serde(default, rename = "schema")]
    pub scheme: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CardioEntry {
    #[serde(default)]
    pub minutes: FieldValue,
    #[serde(default)]
    pub level: FieldValue,
    #[serde(default)]
    pub kcal: FieldValue,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Activity {
    #[serde(default)]
    pub steps: FieldValue,
    #[serde(default)]
    pub cardio: Vec<CardioEntry>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Note {
    #[serde(default)]
    pub text: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", content = "data", rename_all = "lowercase")]
pub enum Block {
    Circuit(Circuit),
    Strength(Strength),
    Kettlebell(Kettlebell),
    Activity(Activity),
    Note(Note),
}

impl Block {
    pub fn kind(&self) -> BlockKind {
        match self {
            Block::Circuit(_) => BlockKind::Circuit,
            Block::Strength(_) => BlockKind::Strength,
            Block::Kettlebell(_) => BlockKind::Kettlebell,
            Block::Activity(_) => BlockKind::Activity,
            Block::Note(_) => BlockKind::Note,
        }
    }

    pub fn circuit(rounds: u32, exercises: Vec<CircuitExercise>) -> Self {
        Block::Circuit(Circuit { rounds, exercises })
    }

    pub fn strength(exercise: impl Into<String>, sets: Vec<StrengthSet>) -> Self {
        Block::Strength(Strength {
            exercise: exercise.into(),
            sets,
        })
    }

    pub fn kettlebell(
        exercise: impl Into<String>,
        weight: impl Into<FieldValue>,
        mode: impl Into<String>,
        scheme: impl Into<String>,
    ) -> Self {
        Block::Kettlebell(Kettlebell {
            exercise: exercise.into(),
            weight: weight.into(),
            mode: mode.into(),
            scheme: scheme.into(),
        })
    }

    pub fn activity(steps: impl Into<FieldValue>) -> Self {
        Block::Activity(Activity {
            steps: steps.into(),
            cardio: Vec::new(),
        })
    }

    pub fn note(text: impl Into<String>) -> Self {
        Block::Note(Note { text: text.into() })
    }
}

/// The tag of a [`Block`], without its payload.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BlockKind {
    Circuit,
    Strength,
    Kettlebell,
    Activity,
    Note,
}

impl BlockKind {
    pub const ALL: [BlockKind; 5] = [
        BlockKind::Circuit,
        BlockKind::Strength,
        BlockKind::Kettlebell,
        BlockKind::Activity,
        BlockKind::Note,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            BlockKind::Circuit => "circuit",
            BlockKind::Strength => "strength",
            BlockKind::Kettlebell => "kettlebell",
            BlockKind::Activity => "activity",
            BlockKind::Note => "note",
        }
    }

    /// The block inserted when the user adds a block of this kind.
    pub fn default_block(&self) -> Block {
        match self {
            BlockKind::Circuit => {
                Block::circuit(4, vec![CircuitExercise::new("Подтягивания", 6)])
            }
            BlockKind::Strength => Block::strength("Тяга", vec![StrengthSet::default()]),
            BlockKind::Kettlebell => Block::kettlebell("Рывок", 16, "1 рука", "5+5"),
            BlockKind::Activity => Block::activity(""),
            BlockKind::Note => Block::note(""),
        }
    }
}

impl fmt::Display for BlockKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_block_matches_kind() {
        for kind in BlockKind::ALL {
            assert_eq!(kind.default_block().kind(), kind);
        }
    }

    #[test]
    fn test_default_strength_block_has_a_set() {
        match BlockKind::Strength.default_block() {
            Block::Strength(s) => {
                assert_eq!(s.sets.len(), 1);
                assert!(s.sets[0].weight.is_blank());
            }
            other => panic!("Expected strength block, got {:?}", other),
        }
    }

    #[test]
    fn test_new_circuit_exercise_gets_eight_reps() {
        let ex = CircuitExercise::default();
        assert_eq!(ex.name, "");
        assert_eq!(ex.reps, 8);
    }

    #[test]
    fn test_block_serializes_with_type_and_data() {
        let block = Block::strength("Присед", vec![StrengthSet::new(60, 5)]);
        let json = serde_json::to_value(&block).unwrap();
        assert_eq!(json["type"], "strength");
        assert_eq!(json["data"]["exercise"], "Присед");
        assert_eq!(json["data"]["sets"][0]["weight"], 60);
    }

    #[test]
    fn test_kettlebell_scheme_uses_schema_key() {
        let block = BlockKind::Kettlebell.default_block();
        let json = serde_json::to_value(&block).unwrap();
        assert_eq!(json["data"]["schema"], "5+5");
        assert_eq!(json["data"]["mode"], "1 рука");
    }

    #[test]
    fn test_parses_partially_entered_sets() {
        let raw = r#"{"type":"strength","data":{"exercise":"Тяга","sets":[{"weight":"","reps":"5"},{"weight":62.5,"reps":3}]}}"#;
        let block: Block = serde_json::from_str(raw).unwrap();
        let Block::Strength(s) = block else {
            panic!("Expected strength block");
        };
        assert!(s.sets[0].weight.is_blank());
        assert_eq!(s.sets[0].reps.as_i64(), Some(5));
        assert_eq!(s.sets[1].weight, FieldValue::Float(62.5));
    }

    #[test]
    fn test_missing_payload_fields_fall_back_to_empty() {
        let block: Block = serde_json::from_str(r#"{"type":"activity","data":{}}"#).unwrap();
        assert_eq!(block, Block::activity(""));
    }

    #[test]
    fn test_field_value_numeric_readings() {
        assert_eq!(FieldValue::from(" 60 ").as_f64(), Some(60.0));
        assert_eq!(FieldValue::from("abc").as_f64(), None);
        assert!(FieldValue::from("0").is_zero_or_blank());
        assert!(FieldValue::Int(0).is_zero_or_blank());
        assert!(!FieldValue::Int(6000).is_zero_or_blank());
        assert_eq!(FieldValue::Float(7.9).as_i64(), Some(7));
    }

    #[test]
    fn test_field_value_display() {
        assert_eq!(FieldValue::Int(6000).to_string(), "6000");
        assert_eq!(FieldValue::Float(62.5).to_string(), "62.5");
        assert_eq!(FieldValue::from("лёгкий").to_string(), "лёгкий");
    }

    fn circuit_from(raw: &str) -> Circuit {
        match serde_json::from_str::<Block>(raw).unwrap() {
            Block::Circuit(c) => c,
            other => panic!("Expected circuit block, got {:?}", other),
        }
    }

    #[test]
    fn test_fractional_rounds_are_truncated() {
        let c = circuit_from(r#"{"type":"circuit","data":{"rounds":3.5,"exercises":[]}}"#);
        assert_eq!(c.rounds, 3);
    }

    #[test]
    fn test_null_rounds_read_as_zero() {
        let c = circuit_from(r#"{"type":"circuit","data":{"rounds":null,"exercises":[]}}"#);
        assert_eq!(c.rounds, 0);
    }

    #[test]
    fn test_null_exercise_reps_read_as_zero() {
        let c = circuit_from(
            r#"{"type":"circuit","data":{"rounds":4,"exercises":[{"name":"Подтягивания","reps":null}]}}"#,
        );
        assert_eq!(c.exercises[0].reps, 0);
        assert_eq!(c.exercises[0].name, "Подтягивания");
    }

    #[test]
    fn test_odd_counts_are_clamped() {
        let c = circuit_from(
            r#"{"type":"circuit","data":{"rounds":"5","exercises":[{"name":"a","reps":-2},{"name":"b","reps":"x"},{"name":"c","reps":1e12}]}}"#,
        );
        assert_eq!(c.rounds, 5);
        let reps: Vec<u32> = c.exercises.iter().map(|e| e.reps).collect();
        assert_eq!(reps, vec![0, 0, u32::MAX]);
    }

    #[test]
    fn test_null_set_weight_is_blank() {
        let block: Block = serde_json::from_str(
            r#"{"type":"strength","data":{"exercise":"Становая","sets":[{"weight":null,"reps":5}]}}"#,
        )
        .unwrap();
        let Block::Strength(s) = block else {
            panic!("Expected strength block");
        };
        assert!(s.sets[0].weight.is_blank());
        assert_eq!(s.sets[0].reps, FieldValue::Int(5));
    }

    #[test]
    fn test_day_with_service_quirks_loads() {
        let raw = r#"{
            "id": 9,
            "date": "2024-03-02",
            "scenario_type": "mixed",
            "blocks": [
                {"type": "circuit", "data": {"rounds": null, "exercises": [{"name": "Отжимания", "reps": 2.5}]}},
                {"type": "strength", "data": {"exercise": "Жим стоя", "sets": [{"weight": null, "reps": null}]}}
            ],
            "comment": ""
        }"#;
        let day: crate::model::WorkoutDay = serde_json::from_str(raw).unwrap();
        assert_eq!(day.blocks.len(), 2);
    }

    #[test]
    fn test_nested_field_value_rejected() {
        assert!(serde_json::from_str::<FieldValue>("[1]").is_err());
    }
}
