//! # Command Layer
//!
//! The business logic that touches the store. Each command lives in its own submodule
//! and is a plain function generic over [`WorkoutStore`](crate::store::WorkoutStore).
//!
//! Commands do no presentation: they return [`CmdResult`] (or, for [`save`], the
//! stored day) and let the caller decide how to render it. Listed days are paired
//! with their [`digest`](crate::digest::digest) so list views need no further work.
//!
//! ## Testing Strategy
//!
//! Command tests use `InMemoryStore`; failed writes are exercised with
//! `set_simulate_write_error`.
//!
//! ## Command Modules
//!
//! - [`save`]: reconcile a staged day with the store (create or update)
//! - [`list`]: recent, today and history views
//! - [`search`]: free-text search over recorded days
//! - [`templates`]: save a day as a template, list templates
//! - [`stats`]: analytics over a trailing window
//! - [`delete`]: remove a recorded day

use crate::digest::digest;
use crate::model::{Analytics, Template, WorkoutDay};
use serde::Serialize;

pub mod delete;
pub mod list;
pub mod save;
pub mod search;
pub mod stats;
pub mod templates;

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum MessageLevel {
    Info,
    Success,
    Warning,
    Error,
}

#[derive(Debug, Clone, Serialize)]
pub struct CmdMessage {
    pub level: MessageLevel,
    pub content: String,
}

impl CmdMessage {
    pub fn info(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Info,
            content: content.into(),
        }
    }

    pub fn success(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Success,
            content: content.into(),
        }
    }

    pub fn warning(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Warning,
            content: content.into(),
        }
    }
}

/// A day as list views show it.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DisplayDay {
    pub day: WorkoutDay,
    pub digest: String,
}

impl From<WorkoutDay> for DisplayDay {
    fn from(day: WorkoutDay) -> Self {
        let digest = digest(&day);
        Self { day, digest }
    }
}

#[derive(Debug, Default)]
pub struct CmdResult {
    pub affected_days: Vec<DisplayDay>,
    pub listed_days: Vec<DisplayDay>,
    pub templates: Vec<Template>,
    pub analytics: Option<Analytics>,
    pub messages: Vec<CmdMessage>,
}

impl CmdResult {
    pub fn add_message(&mut self, message: CmdMessage) {
        self.messages.push(message);
    }

    pub fn with_affected_days(mut self, days: Vec<WorkoutDay>) -> Self {
        self.affected_days = days.into_iter().map(DisplayDay::from).collect();
        self
    }

    pub fn with_listed_days(mut self, days: Vec<WorkoutDay>) -> Self {
        self.listed_days = days.into_iter().map(DisplayDay::from).collect();
        self
    }

    pub fn with_templates(mut self, templates: Vec<Template>) -> Self {
        self.templates = templates;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::ScenarioType;
    use chrono::NaiveDate;

    #[test]
    fn test_display_day_carries_digest() {
        let day = WorkoutDay::new(
            NaiveDate::from_ymd_opt(2024, 5, 1).unwrap(),
            ScenarioType::Gtg,
        );
        let shown = DisplayDay::from(day.clone());
        assert_eq!(shown.digest, "5 rounds");
        assert_eq!(shown.day, day);
    }

    #[test]
    fn test_listed_days_keep_order() {
        let d = |n| NaiveDate::from_ymd_opt(2024, 5, n).unwrap();
        let result = CmdResult::default().with_listed_days(vec![
            WorkoutDay::new(d(3), ScenarioType::Strength),
            WorkoutDay::new(d(1), ScenarioType::Activity),
        ]);
        let digests: Vec<&str> = result.listed_days.iter().map(|d| d.digest.as_str()).collect();
        assert_eq!(digests, vec!["Присед", "6000 steps"]);
    }
}
