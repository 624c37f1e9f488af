//! A throwaway data directory with a `FileStore` over it.

use crate::api::PhxApi;
use crate::config::PhxConfig;
use crate::model::{ScenarioType, WorkoutDay};
use crate::store::fs::FileStore;
use crate::store::WorkoutStore;
use chrono::NaiveDate;
use std::path::Path;
use tempfile::TempDir;

pub struct TestEnv {
    dir: TempDir,
    pub store: FileStore,
}

impl TestEnv {
    pub fn new() -> Self {
        let dir = tempfile::tempdir().expect("failed to create temp dir");
        let store = FileStore::new(dir.path().to_path_buf());
        Self { dir, store }
    }

    pub fn root(&self) -> &Path {
        self.dir.path()
    }

    /// A second store over the same files, as after a restart.
    pub fn reopen(&self) -> FileStore {
        FileStore::new(self.root().to_path_buf())
    }

    pub fn config(&self) -> PhxConfig {
        PhxConfig {
            data_dir: Some(self.root().to_path_buf()),
            ..Default::default()
        }
    }

    pub fn api(&self) -> PhxApi<FileStore> {
        PhxApi::from_config(self.config()).expect("data dir is configured")
    }

    /// Save a day with the scenario's default blocks.
    pub fn seed(&mut self, date: NaiveDate, scenario: ScenarioType) -> WorkoutDay {
        self.store
            .create_day(&WorkoutDay::new(date, scenario))
            .expect("seeding a day")
    }
}
