//! The working copy of the day being edited.
//!
//! An [`EditorSession`] holds at most one staged day, wrapped in an [`Editor`]. Starting
//! or opening a day replaces whatever was staged; nothing reaches the store until
//! [`EditorSession::save`] is called. Saving keeps the working copy staged, so edits
//! can continue and the next save updates the same record.

use crate::commands::save::save;
use crate::editor::Editor;
use crate::error::{PhxError, Result};
use crate::model::{RecordId, ScenarioType, Template, WorkoutDay};
use crate::store::WorkoutStore;
use crate::template::from_template_on;
use chrono::{Local, NaiveDate};
use tracing::info;

#[derive(Debug, Default)]
pub struct EditorSession {
    working: Option<Editor>,
}

impl EditorSession {
    pub fn new() -> Self {
        Self::default()
    }

    /// Stage a new day for today with the scenario's default blocks.
    pub fn start(&mut self, scenario: ScenarioType) -> &mut Editor {
        self.start_on(scenario, Local::now().date_naive())
    }

    pub fn start_on(&mut self, scenario: ScenarioType, date: NaiveDate) -> &mut Editor {
        info!(scenario = %scenario, date = %date, "starting workout");
        self.stage(WorkoutDay::new(date, scenario))
    }

    pub fn start_from_template(&mut self, template: &Template) -> &mut Editor {
        self.start_from_template_on(template, Local::now().date_naive())
    }

    pub fn start_from_template_on(&mut self, template: &Template, date: NaiveDate) -> &mut Editor {
        info!(template = %template.name, date = %date, "starting workout from template");
        self.stage(from_template_on(template, date))
    }

    /// Stage a recorded day for editing.
    pub fn open<S: WorkoutStore>(&mut self, store: &S, id: &RecordId) -> Result<&mut Editor> {
        let day = store.get_day(id)?;
        info!(day_id = %id, "opening workout");
        Ok(self.working.insert(Editor::resume(day)))
    }

    /// Drop the working copy, returning it if there was one.
    pub fn discard(&mut self) -> Option<WorkoutDay> {
        let discarded = self.working.take().map(Editor::into_day);
        if let Some(day) = &discarded {
            info!(day_id = ?day.id(), "discarded working copy");
        }
        discarded
    }

    pub fn is_editing(&self) -> bool {
        self.working.is_some()
    }

    pub fn editor(&self) -> Result<&Editor> {
        self.working.as_ref().ok_or(PhxError::NoWorkingCopy)
    }

    pub fn editor_mut(&mut self) -> Result<&mut Editor> {
        self.working.as_mut().ok_or(PhxError::NoWorkingCopy)
    }

    /// Persist the working copy. On success it stays staged and now carries its id.
    pub fn save<S: WorkoutStore>(&mut self, store: &mut S) -> Result<WorkoutDay> {
        let editor = self.editor_mut()?;
        save(store, editor.day_mut())
    }

    fn stage(&mut self, day: WorkoutDay) -> &mut Editor {
        self.working.insert(Editor::new(day))
    }
}
