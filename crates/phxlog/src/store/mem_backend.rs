use super::backend::{DayRecord, StorageBackend, TemplateRecord};
use crate::error::{PhxError, Result};
use std::cell::RefCell;
use std::collections::HashMap;
use uuid::Uuid;

/// In-memory storage backend for testing.
///
/// Uses `RefCell` for interior mutability since the editor is single-threaded.
/// This avoids the overhead of `RwLock` while still allowing the
/// `StorageBackend` trait to use `&self` for all methods.
#[derive(Default)]
pub struct MemBackend {
    days: RefCell<HashMap<Uuid, DayRecord>>,
    templates: RefCell<HashMap<Uuid, TemplateRecord>>,
    simulate_write_error: RefCell<bool>,
}

impl MemBackend {
    pub fn new() -> Self {
        Self::default()
    }

    /// Enable write error simulation for testing error handling.
    pub fn set_simulate_write_error(&self, simulate: bool) {
        *self.simulate_write_error.borrow_mut() = simulate;
    }

    fn check_writable(&self) -> Result<()> {
        if *self.simulate_write_error.borrow() {
            return Err(PhxError::Store("Simulated write error".to_string()));
        }
        Ok(())
    }
}

impl StorageBackend for MemBackend {
    fn load_days(&self) -> Result<HashMap<Uuid, DayRecord>> {
        Ok(self.days.borrow().clone())
    }

    fn save_days(&self, days: &HashMap<Uuid, DayRecord>) -> Result<()> {
        self.check_writable()?;
        *self.days.borrow_mut() = days.clone();
        Ok(())
    }

    fn load_templates(&self) -> Result<HashMap<Uuid, TemplateRecord>> {
        Ok(self.templates.borrow().clone())
    }

    fn save_templates(&self, templates: &HashMap<Uuid, TemplateRecord>) -> Result<()> {
        self.check_writable()?;
        *self.templates.borrow_mut() = templates.clone();
        Ok(())
    }
}
