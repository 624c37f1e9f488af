//! # Configuration
//!
//! Settings are managed by [`confique`], layered in priority order:
//! 1. **Environment variables**: `PHXLOG_RECENT_LIMIT`, `PHXLOG_DATA_DIR`, etc.
//! 2. **Config file**: an optional `phxlog.toml` passed to [`PhxConfig::load`].
//! 3. **Compiled defaults**: via `#[config(default = ...)]`.
//!
//! ## Available Settings
//!
//! | Key | Default | Description |
//! |-----|---------|-------------|
//! | `recent_limit` | `30` | Days shown in the recent list |
//! | `analytics_window_days` | `14` | Trailing window for analytics |
//! | `search_limit` | `50` | Maximum search hits |
//! | `tracked_lifts` | `["присед", "становая", "жим стоя"]` | Lifts reported in analytics |
//! | `data_dir` | OS data directory | Where `FileStore` keeps its JSON files |

use crate::analytics;
use crate::error::Result;
use confique::Config;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

#[derive(Config, Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct PhxConfig {
    /// How many days `recent` returns
    #[config(default = 30, env = "PHXLOG_RECENT_LIMIT")]
    pub recent_limit: usize,

    #[config(default = 14, env = "PHXLOG_ANALYTICS_WINDOW_DAYS")]
    pub analytics_window_days: u32,

    #[config(default = 50, env = "PHXLOG_SEARCH_LIMIT")]
    pub search_limit: usize,

    /// Lift names matched (case-insensitively, as substrings) against strength
    /// exercises. When absent, defaults to the three main barbell lifts.
    pub tracked_lifts: Option<Vec<String>>,

    /// Data directory for the file store.
    #[config(env = "PHXLOG_DATA_DIR")]
    pub data_dir: Option<PathBuf>,
}

impl Default for PhxConfig {
    fn default() -> Self {
        Self {
            recent_limit: 30,
            analytics_window_days: 14,
            search_limit: 50,
            tracked_lifts: None,
            data_dir: None,
        }
    }
}

impl PhxConfig {
    /// Load from the environment and, if given, a TOML file.
    pub fn load(path: Option<&Path>) -> Result<Self> {
        let mut builder = Self::builder().env();
        if let Some(path) = path {
            builder = builder.file(path);
        }
        Ok(builder.load()?)
    }

    pub fn tracked_lifts(&self) -> Vec<String> {
        self.tracked_lifts
            .clone()
            .unwrap_or_else(analytics::default_tracked_lifts)
    }

    /// Configured data directory, or the platform data directory for phxlog.
    pub fn data_dir(&self) -> Option<PathBuf> {
        self.data_dir.clone().or_else(|| {
            directories::ProjectDirs::from("", "", "phxlog")
                .map(|dirs| dirs.data_dir().to_path_buf())
        })
    }
}
