use super::log_store::LogStore;
use super::mem_backend::MemBackend;

pub type InMemoryStore = LogStore<MemBackend>;

impl Default for InMemoryStore {
    fn default() -> Self {
        Self::new()
    }
}

impl InMemoryStore {
    pub fn new() -> Self {
        LogStore::with_backend(MemBackend::new())
    }

    /// Make every subsequent write fail, to exercise failed saves.
    pub fn set_simulate_write_error(&self, simulate: bool) {
        self.backend.set_simulate_write_error(simulate);
    }
}

// --- Test Fixtures ---

#[cfg(any(test, feature = "test_utils"))]
pub mod fixtures {
    use super::*;
    use crate::model::{ScenarioType, WorkoutDay};
    use crate::store::WorkoutStore;
    use chrono::{Duration, Local};

    pub struct StoreFixture {
        pub store: InMemoryStore,
    }

    impl Default for StoreFixture {
        fn default() -> Self {
            Self::new()
        }
    }

    impl StoreFixture {
        pub fn new() -> Self {
            Self {
                store: InMemoryStore::new(),
            }
        }

        /// One saved day per scenario, dated today, yesterday and so on.
        pub fn with_days(mut self, scenarios: &[ScenarioType]) -> Self {
            let today = Local::now().date_naive();
            for (offset, scenario) in scenarios.iter().enumerate() {
                let date = today - Duration::days(offset as i64);
                self.store
                    .create_day(&WorkoutDay::new(date, *scenario))
                    .unwrap();
            }
            self
        }

        pub fn with_day(mut self, day: WorkoutDay) -> Self {
            self.store.create_day(&day).unwrap();
            self
        }
    }
}
