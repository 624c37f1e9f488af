use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;
use crate::model::{ScenarioType, WorkoutDay};
use crate::store::WorkoutStore;
use chrono::NaiveDate;

/// The most recent days, newest first.
pub fn recent<S: WorkoutStore>(store: &S, limit: usize) -> Result<CmdResult> {
    let days = store.recent_days(limit)?;
    Ok(CmdResult::default().with_listed_days(days))
}

/// The latest-written day recorded for `date` among the recent ones, if any.
pub fn today<S: WorkoutStore>(store: &S, date: NaiveDate, limit: usize) -> Result<CmdResult> {
    let found: Vec<WorkoutDay> = store
        .recent_days(limit)?
        .into_iter()
        .find(|day| day.date == date)
        .into_iter()
        .collect();

    let mut result = CmdResult::default().with_listed_days(found);
    if result.listed_days.is_empty() {
        result.add_message(CmdMessage::info("Nothing recorded today"));
    }
    Ok(result)
}

/// Recent days, optionally narrowed to one scenario.
pub fn history<S: WorkoutStore>(
    store: &S,
    scenario: Option<ScenarioType>,
    limit: usize,
) -> Result<CmdResult> {
    let days: Vec<WorkoutDay> = store
        .recent_days(limit)?
        .into_iter()
        .filter(|day| scenario.map_or(true, |s| day.scenario_type == s))
        .collect();
    Ok(CmdResult::default().with_listed_days(days))
}
