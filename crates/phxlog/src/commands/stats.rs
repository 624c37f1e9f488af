use crate::commands::CmdResult;
use crate::error::{PhxError, Result};
use crate::store::WorkoutStore;

pub fn run<S: WorkoutStore>(store: &S, days: u32) -> Result<CmdResult> {
    if days == 0 {
        return Err(PhxError::ValidationFailed(
            "Analytics window must cover at least one day".to_string(),
        ));
    }
    let analytics = store.analytics(days)?;
    Ok(CmdResult {
        analytics: Some(analytics),
        ..Default::default()
    })
}
