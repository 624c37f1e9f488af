use super::backend::{DayRecord, StorageBackend, TemplateRecord};
use crate::error::{PhxError, Result};
use serde::de::DeserializeOwned;
use serde::Serialize;
use std::collections::HashMap;
use std::fs;
use std::path::{Path, PathBuf};
use uuid::Uuid;

const DAYS_FILE: &str = "days.json";
const TEMPLATES_FILE: &str = "templates.json";

pub struct FsBackend {
    root: PathBuf,
}

impl FsBackend {
    pub fn new(root: PathBuf) -> Self {
        Self { root }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    fn ensure_dir(&self) -> Result<()> {
        if !self.root.exists() {
            fs::create_dir_all(&self.root).map_err(PhxError::Io)?;
        }
        Ok(())
    }

    fn read_map<T: DeserializeOwned>(&self, name: &str) -> Result<HashMap<Uuid, T>> {
        let file = self.root.join(name);
        if !file.exists() {
            return Ok(HashMap::new());
        }
        let content = fs::read_to_string(file).map_err(PhxError::Io)?;
        let map = serde_json::from_str(&content).map_err(PhxError::Serialization)?;
        Ok(map)
    }

    fn write_map<T: Serialize>(&self, name: &str, map: &HashMap<Uuid, T>) -> Result<()> {
        self.ensure_dir()?;
        let content = serde_json::to_string_pretty(map).map_err(PhxError::Serialization)?;

        // Atomic write: tmp file in the same dir, then rename over the target
        let tmp_file = self.root.join(format!(".{}-{}.tmp", name, Uuid::new_v4()));
        fs::write(&tmp_file, content).map_err(PhxError::Io)?;
        fs::rename(&tmp_file, self.root.join(name)).map_err(PhxError::Io)?;
        Ok(())
    }
}

impl StorageBackend for FsBackend {
    fn load_days(&self) -> Result<HashMap<Uuid, DayRecord>> {
        self.read_map(DAYS_FILE)
    }

    fn save_days(&self, days: &HashMap<Uuid, DayRecord>) -> Result<()> {
        self.write_map(DAYS_FILE, days)
    }

    fn load_templates(&self) -> Result<HashMap<Uuid, TemplateRecord>> {
        self.read_map(TEMPLATES_FILE)
    }

    fn save_templates(&self, templates: &HashMap<Uuid, TemplateRecord>) -> Result<()> {
        self.write_map(TEMPLATES_FILE, templates)
    }
}
