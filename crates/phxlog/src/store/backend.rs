use crate::error::Result;
use crate::model::{Template, WorkoutDay};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use uuid::Uuid;

/// A stored day plus the bookkeeping `LogStore` needs for ordering.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DayRecord {
    pub day: WorkoutDay,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TemplateRecord {
    pub template: Template,
    pub created_at: DateTime<Utc>,
}

/// Abstract interface for raw storage I/O.
/// This trait handles the "how" of storage (filesystem vs memory),
/// while LogStore handles the "what" (ids, ordering, search).
pub trait StorageBackend {
    /// Load the day index (days.json)
    fn load_days(&self) -> Result<HashMap<Uuid, DayRecord>>;

    /// Save the day index.
    /// MUST be atomic (e.g. write to tmp then rename) to avoid partial writes.
    fn save_days(&self, days: &HashMap<Uuid, DayRecord>) -> Result<()>;

    /// Load the template index (templates.json)
    fn load_templates(&self) -> Result<HashMap<Uuid, TemplateRecord>>;

    /// Save the template index
    fn save_templates(&self, templates: &HashMap<Uuid, TemplateRecord>) -> Result<()>;
}
