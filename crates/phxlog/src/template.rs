//! Projection between workout days and reusable templates.
//!
//! A template keeps a day's scenario and blocks and drops everything tied to the
//! particular day (date, comment, id). Both directions copy the block list, so a day
//! started from a template and the template itself never share nested data.

use chrono::{Local, NaiveDate};

use crate::error::{PhxError, Result};
use crate::model::{Template, WorkoutDay};

pub fn to_template(name: &str, day: &WorkoutDay) -> Result<Template> {
    let name = name.trim();
    if name.is_empty() {
        return Err(PhxError::ValidationFailed(
            "Template name cannot be empty".to_string(),
        ));
    }
    Ok(Template {
        id: None,
        name: name.to_string(),
        scenario_type: day.scenario_type,
        blocks: day.blocks.clone(),
    })
}

/// An unsaved day dated today (local time) with the template's blocks.
pub fn from_template(template: &Template) -> WorkoutDay {
    from_template_on(template, Local::now().date_naive())
}

pub fn from_template_on(template: &Template, date: NaiveDate) -> WorkoutDay {
    WorkoutDay::with_blocks(date, template.scenario_type, template.blocks.clone())
}
