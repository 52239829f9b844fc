use std::path::Path;

use bblg_core::clock::format_time;
use bblg_core::document;
use bblg_core::{EventDetails, EventFormController, EventKind};
use chrono::Local;

use crate::cli::EventFields;
use crate::commands::common::{apply_event_fields, open_log};
use crate::error::CliError;

pub fn run_add(kind: EventKind, fields: &EventFields, log_path: &Path) -> Result<(), CliError> {
    let mut log = open_log(log_path)?;

    let mut form = EventFormController::new_event(kind, Local::now());
    if let Some(adjustment) = fields.adjust {
        form.nudge(adjustment);
    }
    apply_event_fields(form.details_mut(), fields)?;
    if matches!(form.details(), EventDetails::Custom { title, .. } if title.is_empty()) {
        return Err(CliError::EmptyTitle);
    }

    let when = format_time(&form.current_timestamp());
    let event = form.commit();
    let id = event.id;
    log.save_event(event);
    document::save(&log, log_path)?;

    println!("{id}  {when}");
    Ok(())
}
