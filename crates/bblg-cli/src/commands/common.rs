use std::path::Path;

use bblg_core::catalog;
use bblg_core::clock::{format_duration, format_time};
use bblg_core::document;
use bblg_core::models::{FeedSource, Mass, MassUnit};
use bblg_core::util::{normalize_text_option, parse_duration_secs};
use bblg_core::{BabyEvent, BabyLog, EventDetails, EventId};
use chrono::{DateTime, Local, Utc};
use serde::Serialize;

use crate::cli::EventFields;
use crate::error::CliError;

#[derive(Debug, Serialize)]
pub struct EventListItem {
    pub id: String,
    pub kind: String,
    pub glyph: String,
    pub color: String,
    pub date: String,
    pub local_time: String,
    pub summary: String,
    pub duration_secs: Option<u32>,
    pub relative_time: String,
}

pub fn open_log(log_path: &Path) -> Result<BabyLog, CliError> {
    if !log_path.exists() {
        return Err(CliError::LogNotFound(log_path.to_path_buf()));
    }
    Ok(document::load(log_path)?)
}

pub fn normalize_event_identifier(id: &str) -> Result<String, CliError> {
    let trimmed = id.trim();
    if trimmed.is_empty() {
        Err(CliError::EmptyEventId)
    } else {
        Ok(trimmed.to_string())
    }
}

/// Resolve a full event id or a unique prefix of one
pub fn resolve_event_id(event_query: &str, log: &BabyLog) -> Result<EventId, CliError> {
    let event_query = normalize_event_identifier(event_query)?;

    if let Ok(event_id) = event_query.parse::<EventId>() {
        if log.get(&event_id).is_some() {
            return Ok(event_id);
        }
    }

    let matching_ids = log.ids_with_prefix(&event_query);

    match matching_ids.as_slice() {
        [] => Err(CliError::EventNotFound(event_query)),
        [id] => Ok(*id),
        _ => {
            let options = matching_ids
                .iter()
                .take(3)
                .map(short_id)
                .collect::<Vec<_>>()
                .join(", ");

            Err(CliError::AmbiguousEventId(format!(
                "ID prefix '{event_query}' is ambiguous; matches: {options}"
            )))
        }
    }
}

pub fn short_id(id: &EventId) -> String {
    id.as_str().chars().take(13).collect()
}

/// Copy the optional CLI fields onto an event payload
///
/// Fields that do not belong to the payload's kind are rejected rather than
/// silently dropped.
pub fn apply_event_fields(details: &mut EventDetails, fields: &EventFields) -> Result<(), CliError> {
    let kind = details.kind();
    let duration = fields
        .duration
        .as_deref()
        .map(|raw| {
            parse_duration_secs(raw).ok_or_else(|| CliError::InvalidDuration(raw.to_string()))
        })
        .transpose()?;

    let reject = |field: &'static str| CliError::FieldNotApplicable { field, kind };

    if !matches!(details, EventDetails::Feed { .. }) {
        if fields.side.is_some() {
            return Err(reject("side"));
        }
        if fields.bottle.is_some() {
            return Err(reject("bottle"));
        }
    }
    if !matches!(details, EventDetails::Diaper { .. }) {
        if fields.pee {
            return Err(reject("pee"));
        }
        if fields.poop {
            return Err(reject("poop"));
        }
    }
    if !matches!(details, EventDetails::Weight { .. }) {
        if fields.weight.is_some() {
            return Err(reject("weight"));
        }
        if fields.unit.is_some() {
            return Err(reject("unit"));
        }
    }
    if !matches!(details, EventDetails::Custom { .. }) {
        if fields.title.is_some() {
            return Err(reject("title"));
        }
        if fields.info.is_some() {
            return Err(reject("info"));
        }
    }
    if duration.is_some() && !has_duration_slot(details) {
        return Err(reject("duration"));
    }

    match details {
        EventDetails::Feed {
            source,
            duration_secs,
        } => {
            if let Some(volume_ml) = fields.bottle {
                *source = FeedSource::Bottle {
                    volume_ml: Some(volume_ml),
                };
            } else if let Some(side) = fields.side {
                *source = FeedSource::Breast { side };
            }
            if duration.is_some() {
                *duration_secs = duration;
            }
        }
        EventDetails::Nap { duration_secs }
        | EventDetails::Fuss { duration_secs }
        | EventDetails::TummyTime { duration_secs } => {
            if duration.is_some() {
                *duration_secs = duration;
            }
        }
        EventDetails::Diaper { pee, poop } => {
            if fields.pee || fields.poop {
                *pee = fields.pee;
                *poop = fields.poop;
            }
        }
        EventDetails::Weight { measurement } => {
            if let Some(value) = fields.weight {
                let unit = fields
                    .unit
                    .or_else(|| measurement.map(|m| m.unit))
                    .unwrap_or(MassUnit::Kilograms);
                *measurement = Some(Mass::new(value, unit));
            } else if let (Some(unit), Some(current)) = (fields.unit, measurement.as_mut()) {
                *current = current.converted(unit);
            }
        }
        EventDetails::Custom { title, info } => {
            if let Some(new_title) = normalize_text_option(fields.title.clone()) {
                *title = new_title;
            }
            if let Some(new_info) = fields.info.clone() {
                *info = new_info.trim().to_string();
            }
        }
    }

    Ok(())
}

const fn has_duration_slot(details: &EventDetails) -> bool {
    matches!(
        details,
        EventDetails::Feed { .. }
            | EventDetails::Nap { .. }
            | EventDetails::Fuss { .. }
            | EventDetails::TummyTime { .. }
    )
}

pub fn format_event_lines(events: &[&BabyEvent]) -> Vec<String> {
    let now_ms = Utc::now().timestamp_millis();
    events
        .iter()
        .map(|event| {
            let glyph = catalog::display_glyph(event.kind());
            let label = event.kind().label();
            let when = format_local(event.date);
            let relative_time = format_relative_time(event.date.timestamp_millis(), now_ms);
            let detail = describe_details(event);

            format!(
                "{:<13}  {glyph} {label:<10}  {when:<18}  {relative_time:<8}  {detail}",
                short_id(&event.id)
            )
            .trim_end()
            .to_string()
        })
        .collect()
}

pub fn event_to_list_item(event: &BabyEvent) -> EventListItem {
    let now_ms = Utc::now().timestamp_millis();
    let kind = event.kind();

    EventListItem {
        id: event.id.to_string(),
        kind: kind.tag().to_string(),
        glyph: catalog::display_glyph(kind).to_string(),
        color: catalog::display_color(kind).hex(),
        date: event.date.to_rfc3339(),
        local_time: format_local(event.date),
        summary: event.summary(),
        duration_secs: event.details.duration_secs(),
        relative_time: format_relative_time(event.date.timestamp_millis(), now_ms),
    }
}

/// Summary plus duration, e.g. `Breast (left)  15m`
pub fn describe_details(event: &BabyEvent) -> String {
    let summary = event.summary();
    match event.details.duration_secs() {
        Some(secs) if summary.is_empty() => format_duration(secs),
        Some(secs) => format!("{summary}  {}", format_duration(secs)),
        None => summary,
    }
}

pub fn format_local(date: DateTime<Utc>) -> String {
    let local = date.with_timezone(&Local);
    format!("{} {}", local.format("%a %b %-d"), format_time(&local))
}

pub fn format_relative_time(timestamp_ms: i64, now_ms: i64) -> String {
    let diff = now_ms.saturating_sub(timestamp_ms);
    let minute = 60_000;
    let hour = 60 * minute;
    let day = 24 * hour;
    let week = 7 * day;
    let month = 30 * day;
    let year = 365 * day;

    if diff < 0 {
        "upcoming".to_string()
    } else if diff < minute {
        "just now".to_string()
    } else if diff < hour {
        format!("{}m ago", diff / minute)
    } else if diff < day {
        format!("{}h ago", diff / hour)
    } else if diff < week {
        format!("{}d ago", diff / day)
    } else if diff < month {
        format!("{}w ago", diff / week)
    } else if diff < year {
        format!("{}mo ago", diff / month)
    } else {
        format!("{}y ago", diff / year)
    }
}
