//! # Storage Layer
//!
//! [`WorkoutStore`] is the boundary to whatever persists workout days: in production
//! the remote diary service, locally one of the reference stores in this module. The
//! rest of the crate only ever talks to the trait.
//!
//! ## Contract
//!
//! | Call               | Result                                               |
//! |--------------------|------------------------------------------------------|
//! | `get_day`          | the full day, or `NotFound`                          |
//! | `recent_days`      | newest first: date descending, then last write       |
//! | `create_day`       | the day with a freshly assigned id                   |
//! | `update_day`       | the day under the same id, or `NotFound`             |
//! | `delete_day`       | removes the day, or `NotFound`                       |
//! | `list_templates`   | newest first                                         |
//! | `create_template`  | the template with a freshly assigned id              |
//! | `search_days`      | matching days, date descending, at most `limit`      |
//! | `analytics`        | aggregates over the trailing `days` window           |
//!
//! Matching in `search_days` and the analytics computation belong to the store. The
//! reference stores match case-insensitively against the serialized blocks and use
//! [`crate::analytics::compute`].
//!
//! ## Implementations
//!
//! - [`memory::InMemoryStore`]: for tests and embedding.
//! - [`fs::FileStore`]: JSON files in a data directory.
//!
//! Both are [`log_store::LogStore`] over a [`backend::StorageBackend`]: the backend
//! does raw reads and writes, `LogStore` owns ordering, ids and timestamps.
//!
//! ## Ids
//!
//! Ids are opaque [`RecordId`]s. The local stores key their files by UUID and report
//! an integer id as `NotFound`; a client of the remote service gets integers back.
//!
//! ## Storage Layout
//!
//! ```text
//! <data_dir>/
//! ├── days.json           # id -> day record
//! └── templates.json      # id -> template record
//! ```

use crate::error::Result;
use crate::model::{Analytics, RecordId, Template, WorkoutDay};

pub mod backend;
pub mod fs;
pub mod fs_backend;
pub mod log_store;
pub mod mem_backend;
pub mod memory;

/// The day as a store hands it back once `id` has been assigned.
///
/// For [`WorkoutStore`] implementations only. Editing always starts from an unsaved
/// copy ([`crate::editor::Editor::new`] drops any id), so a stamped day reaches a
/// session only through [`crate::commands::save`] or [`crate::session::EditorSession::open`].
pub fn stored_day(day: WorkoutDay, id: RecordId) -> WorkoutDay {
    day.with_id(id)
}

/// The template as a store hands it back once `id` has been assigned.
pub fn stored_template(template: Template, id: RecordId) -> Template {
    template.with_id(id)
}

pub trait WorkoutStore {
    /// Load one day by id
    fn get_day(&self, id: &RecordId) -> Result<WorkoutDay>;

    /// Most recent days first, at most `limit`
    fn recent_days(&self, limit: usize) -> Result<Vec<WorkoutDay>>;

    /// Persist a new day; the returned copy carries the assigned id
    fn create_day(&mut self, day: &WorkoutDay) -> Result<WorkoutDay>;

    /// Overwrite the day stored under `id`
    fn update_day(&mut self, id: &RecordId, day: &WorkoutDay) -> Result<WorkoutDay>;

    fn delete_day(&mut self, id: &RecordId) -> Result<()>;

    fn list_templates(&self) -> Result<Vec<Template>>;

    fn create_template(&mut self, template: &Template) -> Result<Template>;

    /// Free-text search over recorded days
    fn search_days(&self, query: &str, limit: usize) -> Result<Vec<WorkoutDay>>;

    /// Aggregates over the trailing `days` window
    fn analytics(&self, days: u32) -> Result<Analytics>;
}
