use super::fs_backend::FsBackend;
use super::log_store::LogStore;
use std::path::{Path, PathBuf};

/// Workout days and templates kept as JSON files under one data directory.
pub type FileStore = LogStore<FsBackend>;

impl FileStore {
    pub fn new(root: PathBuf) -> Self {
        LogStore::with_backend(FsBackend::new(root))
    }

    pub fn root(&self) -> &Path {
        self.backend.root()
    }
}
