//! The per-baby log document
//!
//! A `BabyLog` owns every event recorded for one baby. Form drafts are merged
//! back with [`BabyLog::save_event`]; persistence lives in [`crate::document`].

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::models::{Baby, BabyEvent, EventId, EventKind};

/// Current log document schema version
pub const LOG_SCHEMA_VERSION: u32 = 1;

/// Events recorded for one baby
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BabyLog {
    #[serde(default = "default_version")]
    pub version: u32,
    pub baby: Baby,
    #[serde(default)]
    pub events: Vec<BabyEvent>,
}

const fn default_version() -> u32 {
    LOG_SCHEMA_VERSION
}

impl BabyLog {
    #[must_use]
    pub const fn new(baby: Baby) -> Self {
        Self {
            version: LOG_SCHEMA_VERSION,
            baby,
            events: Vec::new(),
        }
    }

    #[must_use]
    pub fn get(&self, id: &EventId) -> Option<&BabyEvent> {
        self.events.iter().find(|event| &event.id == id)
    }

    /// Insert a new event or replace the stored event with the same id
    pub fn save_event(&mut self, event: BabyEvent) {
        if let Some(existing) = self.events.iter_mut().find(|e| e.id == event.id) {
            tracing::debug!(id = %event.id, "Updated event");
            *existing = event;
        } else {
            tracing::debug!(id = %event.id, kind = %event.kind(), "Added event");
            self.events.push(event);
        }
    }

    /// Remove an event, returning it if it existed
    pub fn remove(&mut self, id: &EventId) -> Option<BabyEvent> {
        let index = self.events.iter().position(|event| &event.id == id)?;
        Some(self.events.remove(index))
    }

    /// Copy an event under a new id, dated `now`
    pub fn duplicate(&mut self, id: &EventId, now: DateTime<Utc>) -> Option<EventId> {
        let source = self.get(id)?;
        let copy = BabyEvent::with_details(source.details.clone(), now);
        let copy_id = copy.id;
        self.save_event(copy);
        Some(copy_id)
    }

    /// Events newest first
    #[must_use]
    pub fn date_sorted(&self) -> Vec<&BabyEvent> {
        let mut events = self.events.iter().collect::<Vec<_>>();
        events.sort_by(|a, b| {
            b.date
                .cmp(&a.date)
                .then_with(|| b.id.cmp(&a.id))
        });
        events
    }

    /// Events of one kind, newest first
    #[must_use]
    pub fn events_of(&self, kind: EventKind) -> Vec<&BabyEvent> {
        self.date_sorted()
            .into_iter()
            .filter(|event| event.kind() == kind)
            .collect()
    }

    /// Most recent event of one kind
    #[must_use]
    pub fn latest(&self, kind: EventKind) -> Option<&BabyEvent> {
        self.events
            .iter()
            .filter(|event| event.kind() == kind)
            .max_by_key(|event| event.date)
    }

    /// Ids whose string form starts with `prefix`
    #[must_use]
    pub fn ids_with_prefix(&self, prefix: &str) -> Vec<EventId> {
        let prefix = prefix.trim().to_lowercase();
        self.events
            .iter()
            .map(|event| event.id)
            .filter(|id| id.as_str().starts_with(&prefix))
            .collect()
    }
}
