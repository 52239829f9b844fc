use std::path::Path;

use bblg_core::document;

use crate::commands::common::{open_log, resolve_event_id};
use crate::error::CliError;

pub fn run_delete(id: &str, log_path: &Path) -> Result<(), CliError> {
    let mut log = open_log(log_path)?;
    let event_id = resolve_event_id(id, &log)?;

    log.remove(&event_id)
        .ok_or_else(|| CliError::EventNotFound(id.to_string()))?;
    document::save(&log, log_path)?;
    println!("{event_id}");
    Ok(())
}
