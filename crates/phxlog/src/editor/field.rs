//! Typed edits of the scalar fields inside a block.
//!
//! Every [`FieldEdit`] names exactly one field of one variant. Applying it to a block
//! of another variant is an [`PhxError::InvalidVariant`]; a nested index that does not
//! exist is an [`PhxError::OutOfRange`]. Nothing is written until both checks pass.
//!
//! Form-based clients address fields by name (`"set-weight"`, `"cardio-min"`, ...).
//! [`FieldEdit::parse`] turns such a name plus the raw input into a typed edit.

use crate::block::{Block, BlockKind, FieldValue};
use crate::error::{PhxError, Result};

#[derive(Debug, Clone, PartialEq)]
pub enum FieldEdit {
    Rounds(u32),
    ExerciseName { exercise: usize, name: String },
    ExerciseReps { exercise: usize, reps: u32 },
    StrengthExercise(String),
    SetWeight { set: usize, weight: FieldValue },
    SetReps { set: usize, reps: FieldValue },
    KettlebellExercise(String),
    KettlebellWeight(FieldValue),
    KettlebellMode(String),
    KettlebellScheme(String),
    Steps(FieldValue),
    CardioMinutes { entry: usize, minutes: FieldValue },
    CardioLevel { entry: usize, level: FieldValue },
    CardioKcal { entry: usize, kcal: FieldValue },
    NoteText(String),
}

impl FieldEdit {
    /// The form name of the edited field.
    pub fn field_name(&self) -> &'static str {
        match self {
            FieldEdit::Rounds(_) => "rounds",
            FieldEdit::ExerciseName { .. } => "exercise-name",
            FieldEdit::ExerciseReps { .. } => "exercise-reps",
            FieldEdit::StrengthExercise(_) => "exercise",
            FieldEdit::SetWeight { .. } => "set-weight",
            FieldEdit::SetReps { .. } => "set-reps",
            FieldEdit::KettlebellExercise(_) => "kb-exercise",
            FieldEdit::KettlebellWeight(_) => "kb-weight",
            FieldEdit::KettlebellMode(_) => "kb-mode",
            FieldEdit::KettlebellScheme(_) => "kb-schema",
            FieldEdit::Steps(_) => "steps",
            FieldEdit::CardioMinutes { .. } => "cardio-min",
            FieldEdit::CardioLevel { .. } => "cardio-level",
            FieldEdit::CardioKcal { .. } => "cardio-kcal",
            FieldEdit::NoteText(_) => "note",
        }
    }

    /// The only variant this edit can be applied to.
    pub fn block_kind(&self) -> BlockKind {
        match self {
            FieldEdit::Rounds(_) | FieldEdit::ExerciseName { .. } | FieldEdit::ExerciseReps { .. } => {
                BlockKind::Circuit
            }
            FieldEdit::StrengthExercise(_) | FieldEdit::SetWeight { .. } | FieldEdit::SetReps { .. } => {
                BlockKind::Strength
            }
            FieldEdit::KettlebellExercise(_)
            | FieldEdit::KettlebellWeight(_)
            | FieldEdit::KettlebellMode(_)
            | FieldEdit::KettlebellScheme(_) => BlockKind::Kettlebell,
            FieldEdit::Steps(_)
            | FieldEdit::CardioMinutes { .. }
            | FieldEdit::CardioLevel { .. }
            | FieldEdit::CardioKcal { .. } => BlockKind::Activity,
            FieldEdit::NoteText(_) => BlockKind::Note,
        }
    }

    /// Build an edit for a block of `kind` from a form field name.
    ///
    /// `item` is the nested index for fields living inside `exercises`, `sets` or
    /// `cardio`. Counts (`rounds`, `exercise-reps`) read empty input as zero.
    pub fn parse(kind: BlockKind, field: &str, item: Option<usize>, raw: &str) -> Result<Self> {
        let nested = || {
            item.ok_or_else(|| {
                PhxError::ValidationFailed(format!("Field '{}' needs an item index", field))
            })
        };

        let edit = match field {
            "rounds" => FieldEdit::Rounds(parse_count(field, raw)?),
            "exercise-name" => FieldEdit::ExerciseName {
                exercise: nested()?,
                name: raw.to_string(),
            },
            "exercise-reps" => FieldEdit::ExerciseReps {
                exercise: nested()?,
                reps: parse_count(field, raw)?,
            },
            "exercise" => FieldEdit::StrengthExercise(raw.to_string()),
            "set-weight" => FieldEdit::SetWeight {
                set: nested()?,
                weight: raw.into(),
            },
            "set-reps" => FieldEdit::SetReps {
                set: nested()?,
                reps: raw.into(),
            },
            "kb-exercise" => FieldEdit::KettlebellExercise(raw.to_string()),
            "kb-weight" => FieldEdit::KettlebellWeight(raw.into()),
            "kb-mode" => FieldEdit::KettlebellMode(raw.to_string()),
            "kb-schema" => FieldEdit::KettlebellScheme(raw.to_string()),
            "steps" => FieldEdit::Steps(raw.into()),
            "cardio-min" => FieldEdit::CardioMinutes {
                entry: nested()?,
                minutes: raw.into(),
            },
            "cardio-level" => FieldEdit::CardioLevel {
                entry: nested()?,
                level: raw.into(),
            },
            "cardio-kcal" => FieldEdit::CardioKcal {
                entry: nested()?,
                kcal: raw.into(),
            },
            "note" => FieldEdit::NoteText(raw.to_string()),
            _ => return Err(PhxError::invalid_variant(format!("field '{}'", field), kind)),
        };

        if edit.block_kind() != kind {
            return Err(PhxError::invalid_variant(format!("field '{}'", field), kind));
        }
        Ok(edit)
    }

    pub(crate) fn apply(self, block: &mut Block) -> Result<()> {
        let kind = block.kind();
        match (self, block) {
            (FieldEdit::Rounds(rounds), Block::Circuit(c)) => c.rounds = rounds,
            (FieldEdit::ExerciseName { exercise, name }, Block::Circuit(c)) => {
                item_mut(&mut c.exercises, "exercise", exercise)?.name = name
            }
            (FieldEdit::ExerciseReps { exercise, reps }, Block::Circuit(c)) => {
                item_mut(&mut c.exercises, "exercise", exercise)?.reps = reps
            }
            (FieldEdit::StrengthExercise(name), Block::Strength(s)) => s.exercise = name,
            (FieldEdit::SetWeight { set, weight }, Block::Strength(s)) => {
                item_mut(&mut s.sets, "set", set)?.weight = weight
            }
            (FieldEdit::SetReps { set, reps }, Block::Strength(s)) => {
                item_mut(&mut s.sets, "set", set)?.reps = reps
            }
            (FieldEdit::KettlebellExercise(name), Block::Kettlebell(k)) => k.exercise = name,
            (FieldEdit::KettlebellWeight(weight), Block::Kettlebell(k)) => k.weight = weight,
            (FieldEdit::KettlebellMode(mode), Block::Kettlebell(k)) => k.mode = mode,
            (FieldEdit::KettlebellScheme(scheme), Block::Kettlebell(k)) => k.scheme = scheme,
            (FieldEdit::Steps(steps), Block::Activity(a)) => a.steps = steps,
            (FieldEdit::CardioMinutes { entry, minutes }, Block::Activity(a)) => {
                item_mut(&mut a.cardio, "cardio", entry)?.minutes = minutes
            }
            (FieldEdit::CardioLevel { entry, level }, Block::Activity(a)) => {
                item_mut(&mut a.cardio, "cardio", entry)?.level = level
            }
            (FieldEdit::CardioKcal { entry, kcal }, Block::Activity(a)) => {
                item_mut(&mut a.cardio, "cardio", entry)?.kcal = kcal
            }
            (FieldEdit::NoteText(text), Block::Note(n)) => n.text = text,
            (edit, _) => {
                return Err(PhxError::invalid_variant(
                    format!("field '{}'", edit.field_name()),
                    kind,
                ))
            }
        }
        Ok(())
    }
}

pub(crate) fn item_mut<'a, T>(items: &'a mut [T], what: &'static str, index: usize) -> Result<&'a mut T> {
    let len = items.len();
    items
        .get_mut(index)
        .ok_or_else(|| PhxError::out_of_range(what, index, len))
}

fn parse_count(field: &str, raw: &str) -> Result<u32> {
    let raw = raw.trim();
    if raw.is_empty() {
        return Ok(0);
    }
    raw.parse::<u32>().map_err(|_| {
        PhxError::ValidationFailed(format!("Field '{}' expects a whole number, got '{}'", field, raw))
    })
}
