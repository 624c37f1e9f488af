//! # API Facade
//!
//! [`PhxApi`] is the single entry point for clients (a web view, a bot, a CLI). It owns
//! the store, the configuration and the [`EditorSession`], and dispatches to the
//! command layer.
//!
//! The facade does no business logic of its own: it fills in configured limits,
//! resolves template ids and hands the working copy to the commands. Editing happens
//! through the [`Editor`] returned by the `start_*`/`open_workout` calls or by
//! [`PhxApi::editor_mut`].
//!
//! ## Generic Over WorkoutStore
//!
//! - Production: `PhxApi<FileStore>` via [`PhxApi::from_config`], or any remote
//!   implementation of [`WorkoutStore`].
//! - Testing: `PhxApi<InMemoryStore>`.

use crate::commands::{self, CmdMessage, CmdResult};
use crate::config::PhxConfig;
use crate::editor::Editor;
use crate::error::{PhxError, Result};
use crate::model::{RecordId, ScenarioType, WorkoutDay};
use crate::session::EditorSession;
use crate::store::fs::FileStore;
use crate::store::WorkoutStore;
use chrono::{Local, NaiveDate};
use tracing::info;

pub struct PhxApi<S: WorkoutStore> {
    store: S,
    config: PhxConfig,
    session: EditorSession,
}

impl PhxApi<FileStore> {
    /// A file-backed API rooted at the configured data directory.
    pub fn from_config(config: PhxConfig) -> Result<Self> {
        let root = config.data_dir().ok_or_else(|| {
            PhxError::Store("No data directory configured or available".to_string())
        })?;
        let store = FileStore::new(root).with_tracked_lifts(config.tracked_lifts());
        Ok(Self::new(store, config))
    }
}

impl<S: WorkoutStore> PhxApi<S> {
    pub fn new(store: S, config: PhxConfig) -> Self {
        Self {
            store,
            config,
            session: EditorSession::new(),
        }
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    pub fn config(&self) -> &PhxConfig {
        &self.config
    }

    pub fn session(&self) -> &EditorSession {
        &self.session
    }

    // --- Working copy ---

    pub fn start_workout(&mut self, scenario: ScenarioType) -> &mut Editor {
        self.session.start(scenario)
    }

    pub fn start_workout_on(&mut self, scenario: ScenarioType, date: NaiveDate) -> &mut Editor {
        self.session.start_on(scenario, date)
    }

    pub fn start_from_template(&mut self, id: &RecordId) -> Result<&mut Editor> {
        let template = commands::templates::find(&self.store, id)?;
        Ok(self.session.start_from_template(&template))
    }

    pub fn open_workout(&mut self, id: &RecordId) -> Result<&mut Editor> {
        self.session.open(&self.store, id)
    }

    pub fn discard(&mut self) -> Option<WorkoutDay> {
        self.session.discard()
    }

    pub fn editor(&self) -> Result<&Editor> {
        self.session.editor()
    }

    pub fn editor_mut(&mut self) -> Result<&mut Editor> {
        self.session.editor_mut()
    }

    pub fn save_workout(&mut self) -> Result<CmdResult> {
        let stored = self.session.save(&mut self.store)?;
        let mut result = CmdResult::default();
        result.add_message(CmdMessage::success(format!(
            "Workout saved: {}",
            stored.date
        )));
        Ok(result.with_affected_days(vec![stored]))
    }

    /// Store the working copy's scenario and blocks as a named template.
    pub fn save_as_template(&mut self, name: &str) -> Result<CmdResult> {
        let day = self.session.editor()?.day();
        commands::templates::save_as_template(&mut self.store, name, day)
    }

    // --- Reads ---

    pub fn templates(&self) -> Result<CmdResult> {
        commands::templates::list(&self.store)
    }

    pub fn recent(&self) -> Result<CmdResult> {
        commands::list::recent(&self.store, self.config.recent_limit)
    }

    pub fn today(&self) -> Result<CmdResult> {
        commands::list::today(
            &self.store,
            Local::now().date_naive(),
            self.config.recent_limit,
        )
    }

    pub fn history(&self, scenario: Option<ScenarioType>) -> Result<CmdResult> {
        commands::list::history(&self.store, scenario, self.config.recent_limit)
    }

    pub fn search(&self, query: &str) -> Result<CmdResult> {
        commands::search::run(
            &self.store,
            query,
            self.config.search_limit,
            self.config.recent_limit,
        )
    }

    /// Analytics over `days`, or the configured window when `None`.
    pub fn analytics(&self, days: Option<u32>) -> Result<CmdResult> {
        let days = days.unwrap_or(self.config.analytics_window_days);
        commands::stats::run(&self.store, days)
    }

    // --- Removal ---

    /// Delete a recorded day. A working copy of that day is discarded too.
    pub fn delete_workout(&mut self, id: &RecordId) -> Result<CmdResult> {
        let mut result = commands::delete::run(&mut self.store, id)?;
        let staged_id = self.session.editor().ok().and_then(|e| e.day().id());
        if staged_id == Some(*id) {
            self.session.discard();
            info!(day_id = %id, "working copy of deleted workout discarded");
            result.add_message(CmdMessage::warning(
                "The workout being edited was deleted; unsaved edits were discarded",
            ));
        }
        Ok(result)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::block::BlockKind;
    use crate::commands::MessageLevel;
    use crate::editor::Direction;
    use crate::store::memory::InMemoryStore;
    use crate::test_utils::TestEnv;

    fn api() -> PhxApi<InMemoryStore> {
        PhxApi::new(InMemoryStore::new(), PhxConfig::default())
    }

    #[test]
    fn test_start_edit_save_lists_in_recent() {
        let mut api = api();
        let editor = api.start_workout(ScenarioType::Strength);
        editor.add_block(BlockKind::Circuit);
        editor.move_block(1, Direction::Up).unwrap();

        let saved = api.save_workout().unwrap();
        assert_eq!(saved.affected_days[0].digest, "4 rounds · Присед");

        let recent = api.recent().unwrap();
        assert_eq!(recent.listed_days.len(), 1);
        assert_eq!(recent.listed_days[0].digest, "4 rounds · Присед");
        assert_eq!(api.today().unwrap().listed_days.len(), 1);
    }

    #[test]
    fn test_save_without_working_copy() {
        let mut api = api();
        assert!(matches!(api.save_workout(), Err(PhxError::NoWorkingCopy)));
        assert!(matches!(
            api.save_as_template("X"),
            Err(PhxError::NoWorkingCopy)
        ));
    }

    #[test]
    fn test_template_flow() {
        let mut api = api();
        api.start_workout(ScenarioType::Kettlebell);
        let template = api.save_as_template("Гиря").unwrap().templates[0].clone();
        api.discard();

        let id = template.id().unwrap();
        let editor = api.start_from_template(&id).unwrap();
        assert_eq!(editor.blocks(), template.blocks.as_slice());
        assert!(!editor.day().is_saved());

        assert!(matches!(
            api.start_from_template(&RecordId::generate()),
            Err(PhxError::TemplateNotFound(_))
        ));
        assert_eq!(api.templates().unwrap().templates.len(), 1);
    }

    #[test]
    fn test_history_and_search_use_config_limits() {
        let config = PhxConfig {
            recent_limit: 2,
            search_limit: 1,
            ..Default::default()
        };
        let mut api = PhxApi::new(InMemoryStore::new(), config);
        for scenario in [ScenarioType::Gtg, ScenarioType::Gtg, ScenarioType::Gtg] {
            api.start_workout(scenario);
            api.save_workout().unwrap();
        }
        assert_eq!(api.history(Some(ScenarioType::Gtg)).unwrap().listed_days.len(), 2);
        assert_eq!(api.search("отжимания").unwrap().listed_days.len(), 1);
        assert_eq!(api.search("").unwrap().listed_days.len(), 2);
    }

    #[test]
    fn test_analytics_defaults_to_configured_window() {
        let mut api = api();
        api.start_workout(ScenarioType::Activity);
        api.save_workout().unwrap();

        let stats = api.analytics(None).unwrap().analytics.unwrap();
        assert_eq!(stats.days, 14);
        assert_eq!(stats.training_days, 1);
        assert_eq!(api.analytics(Some(3)).unwrap().analytics.unwrap().days, 3);
    }

    #[test]
    fn test_delete_discards_matching_working_copy() {
        let mut api = api();
        api.start_workout(ScenarioType::Rest);
        let saved = api.save_workout().unwrap();
        let id = saved.affected_days[0].day.id().unwrap();

        let result = api.delete_workout(&id).unwrap();
        assert!(!api.session().is_editing());
        assert!(result
            .messages
            .iter()
            .any(|m| matches!(m.level, MessageLevel::Warning)));
        assert!(api.recent().unwrap().listed_days.is_empty());
        assert!(matches!(api.open_workout(&id), Err(PhxError::NotFound(_))));
    }

    #[test]
    fn test_delete_of_other_day_keeps_working_copy() {
        let mut api = api();
        api.start_workout(ScenarioType::Rest);
        let saved = api.save_workout().unwrap();
        let id = saved.affected_days[0].day.id().unwrap();
        api.start_workout(ScenarioType::Gtg);

        let result = api.delete_workout(&id).unwrap();
        assert!(api.session().is_editing());
        assert!(result
            .messages
            .iter()
            .all(|m| matches!(m.level, MessageLevel::Success)));
    }

    #[test]
    fn test_failed_save_keeps_working_copy_unsaved() {
        let mut api = api();
        api.start_workout(ScenarioType::Gtg);
        api.store().set_simulate_write_error(true);
        assert!(matches!(
            api.save_workout(),
            Err(PhxError::PersistenceFailed(_))
        ));
        assert!(!api.editor().unwrap().day().is_saved());

        api.store().set_simulate_write_error(false);
        api.save_workout().unwrap();
        assert!(api.editor().unwrap().day().is_saved());
    }

    #[test]
    fn test_from_config_uses_data_dir() {
        let env = TestEnv::new();
        let mut api = env.api();
        api.start_workout(ScenarioType::Mixed);
        api.save_workout().unwrap();
        assert!(env.root().join("days.json").exists());
        assert_eq!(api.store().root(), env.root());
        assert_eq!(env.reopen().recent_days(10).unwrap().len(), 1);
    }
}
