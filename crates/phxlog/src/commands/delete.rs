use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;
use crate::model::RecordId;
use crate::store::WorkoutStore;

pub fn run<S: WorkoutStore>(store: &mut S, id: &RecordId) -> Result<CmdResult> {
    let day = store.get_day(id)?;
    store.delete_day(id)?;

    let mut result = CmdResult::default();
    result.add_message(CmdMessage::success(format!(
        "Workout deleted: {}",
        day.date
    )));
    Ok(result.with_affected_days(vec![day]))
}
