use std::path::Path;

use bblg_core::EventKind;

use crate::commands::common::{event_to_list_item, format_event_lines, open_log, EventListItem};
use crate::error::CliError;

pub fn run_list(
    kind: Option<EventKind>,
    limit: usize,
    as_json: bool,
    log_path: &Path,
) -> Result<(), CliError> {
    let log = open_log(log_path)?;
    let mut events = match kind {
        Some(kind) => log.events_of(kind),
        None => log.date_sorted(),
    };
    events.truncate(limit);

    if as_json {
        let json_items = events
            .iter()
            .map(|event| event_to_list_item(event))
            .collect::<Vec<EventListItem>>();
        println!("{}", serde_json::to_string_pretty(&json_items)?);
    } else {
        println!("{} {}", log.baby.display_initial(), log.baby.name);
        for line in format_event_lines(&events) {
            println!("{line}");
        }
    }

    Ok(())
}
