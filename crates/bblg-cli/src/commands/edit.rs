use std::path::Path;

use bblg_core::clock::format_time;
use bblg_core::document;
use bblg_core::{EventDetails, EventFormController};
use chrono::Local;

use crate::cli::EventFields;
use crate::commands::common::{apply_event_fields, open_log, resolve_event_id};
use crate::error::CliError;

pub fn run_edit(id: &str, fields: &EventFields, log_path: &Path) -> Result<(), CliError> {
    let mut log = open_log(log_path)?;
    let event_id = resolve_event_id(id, &log)?;
    let stored = log
        .get(&event_id)
        .cloned()
        .ok_or_else(|| CliError::EventNotFound(id.to_string()))?;

    let mut form = EventFormController::edit(stored.clone(), &Local);
    if let Some(adjustment) = fields.adjust {
        form.nudge(adjustment);
    }
    apply_event_fields(form.details_mut(), fields)?;
    if matches!(form.details(), EventDetails::Custom { title, .. } if title.is_empty()) {
        return Err(CliError::EmptyTitle);
    }

    let when = format_time(&form.current_timestamp());
    let edited = form.commit();
    if edited == stored {
        println!("{event_id}  {when}");
        return Ok(());
    }

    log.save_event(edited);
    document::save(&log, log_path)?;
    println!("{event_id}  {when}");
    Ok(())
}
