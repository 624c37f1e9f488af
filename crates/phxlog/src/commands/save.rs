//! Reconcile a staged day with the store.
//!
//! A staged day without an id is created, one with an id is updated in place. The
//! staged copy only learns its id once the store has confirmed the write, so a failed
//! first save can simply be retried as a create.

use crate::error::{PhxError, Result};
use crate::model::WorkoutDay;
use crate::store::WorkoutStore;
use tracing::{debug, warn};

pub fn save<S: WorkoutStore>(store: &mut S, day: &mut WorkoutDay) -> Result<WorkoutDay> {
    let staged_id = day.id();
    let outcome = match staged_id {
        None => store.create_day(day),
        Some(id) => store.update_day(&id, day),
    };

    let stored = match outcome {
        Ok(stored) => stored,
        Err(err) => {
            warn!(day_id = ?staged_id, error = %err, "workout save failed");
            return Err(PhxError::PersistenceFailed(err.to_string()));
        }
    };

    let Some(stored_id) = stored.id() else {
        warn!(day_id = ?staged_id, "store returned a day without an id");
        return Err(PhxError::PersistenceFailed(
            "store returned no id".to_string(),
        ));
    };
    if let Some(id) = staged_id {
        if id != stored_id {
            warn!(day_id = %id, returned = %stored_id, "store returned a different id");
            return Err(PhxError::PersistenceFailed(format!(
                "store returned id {} for update of {}",
                stored_id, id
            )));
        }
    }

    day.id = Some(stored_id);
    debug!(day_id = %stored_id, created = staged_id.is_none(), "workout saved");
    Ok(stored)
}
