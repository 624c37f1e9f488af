use crate::commands::{list, CmdMessage, CmdResult};
use crate::error::Result;
use crate::store::WorkoutStore;

/// Search recorded days; a blank query shows the recent list instead.
pub fn run<S: WorkoutStore>(
    store: &S,
    query: &str,
    search_limit: usize,
    recent_limit: usize,
) -> Result<CmdResult> {
    let query = query.trim();
    if query.is_empty() {
        return list::recent(store, recent_limit);
    }

    let days = store.search_days(query, search_limit)?;
    let mut result = CmdResult::default().with_listed_days(days);
    if result.listed_days.is_empty() {
        result.add_message(CmdMessage::info(format!("No workouts match '{}'", query)));
    }
    Ok(result)
}
