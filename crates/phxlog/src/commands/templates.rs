use crate::commands::{CmdMessage, CmdResult};
use crate::error::{PhxError, Result};
use crate::model::{RecordId, Template, WorkoutDay};
use crate::store::WorkoutStore;
use crate::template::to_template;

/// Store the day's scenario and blocks as a new named template.
pub fn save_as_template<S: WorkoutStore>(
    store: &mut S,
    name: &str,
    day: &WorkoutDay,
) -> Result<CmdResult> {
    let template = to_template(name, day)?;
    let stored = store.create_template(&template)?;

    let mut result = CmdResult::default();
    result.add_message(CmdMessage::success(format!(
        "Template saved: {}",
        stored.name
    )));
    Ok(result.with_templates(vec![stored]))
}

pub fn list<S: WorkoutStore>(store: &S) -> Result<CmdResult> {
    let templates = store.list_templates()?;
    Ok(CmdResult::default().with_templates(templates))
}

pub fn find<S: WorkoutStore>(store: &S, id: &RecordId) -> Result<Template> {
    store
        .list_templates()?
        .into_iter()
        .find(|t| t.id() == Some(*id))
        .ok_or(PhxError::TemplateNotFound(*id))
}
