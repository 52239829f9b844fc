//! Event form controller
//!
//! Owns the draft event while a caregiver fills in a form. The displayed time
//! is always `apply(adjustment, base)`: the base follows the live clock for new
//! events and stays fixed at the stored date when editing.

use chrono::{DateTime, TimeZone, Timelike, Utc};

use crate::adjust::{self, TimestampAdjustment};
use crate::clock::ObservableTimestamp;
use crate::models::{BabyEvent, EventDetails, EventId, EventKind};

/// Where the form's base time comes from
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Anchor {
    /// Base follows the externally supplied clock on every tick
    Live,
    /// Base stays at a stored timestamp
    Fixed,
}

/// Draft state of an event form
#[derive(Debug, Clone)]
pub struct EventFormController<Tz: TimeZone> {
    kind: EventKind,
    draft: BabyEvent,
    base: DateTime<Tz>,
    anchor: Anchor,
    adjustment: TimestampAdjustment,
    target: ObservableTimestamp<Tz>,
}

impl<Tz: TimeZone> EventFormController<Tz> {
    /// Start a form for a new event of `kind`, following the live clock
    pub fn new_event(kind: EventKind, now: DateTime<Tz>) -> Self {
        let draft = BabyEvent::new(kind, now.with_timezone(&Utc));
        tracing::debug!(%kind, id = %draft.id, "Opened new event form");
        Self::with_anchor(draft, now, Anchor::Live)
    }

    /// Start a form editing an existing event, anchored at its stored date
    pub fn edit(event: BabyEvent, tz: &Tz) -> Self {
        let base = event.date.with_timezone(tz);
        tracing::debug!(id = %event.id, "Opened event form for editing");
        Self::with_anchor(event, base, Anchor::Fixed)
    }

    fn with_anchor(draft: BabyEvent, base: DateTime<Tz>, anchor: Anchor) -> Self {
        Self {
            kind: draft.kind(),
            draft,
            target: ObservableTimestamp::new(base.clone()),
            base,
            anchor,
            adjustment: TimestampAdjustment::ZERO,
        }
    }

    pub const fn id(&self) -> EventId {
        self.draft.id
    }

    pub const fn kind(&self) -> EventKind {
        self.kind
    }

    pub const fn anchor(&self) -> Anchor {
        self.anchor
    }

    pub const fn adjustment(&self) -> &TimestampAdjustment {
        &self.adjustment
    }

    pub const fn base(&self) -> &DateTime<Tz> {
        &self.base
    }

    pub const fn details(&self) -> &EventDetails {
        &self.draft.details
    }

    /// Mutable access to the payload for field-by-field editing
    ///
    /// The kind is fixed by the form; edits that swap the variant are ignored
    /// on commit.
    pub fn details_mut(&mut self) -> &mut EventDetails {
        &mut self.draft.details
    }

    /// The time the form currently shows
    pub const fn target(&self) -> &ObservableTimestamp<Tz> {
        &self.target
    }

    pub fn current_timestamp(&self) -> DateTime<Tz> {
        self.target.get().clone()
    }

    /// Whether the caregiver moved the date (day or month) away from the base
    pub fn is_modified(&self) -> bool {
        adjust::is_active(&self.adjustment)
    }

    /// Feed the form the current wall-clock time
    pub fn tick(&mut self, now: DateTime<Tz>) {
        if self.anchor == Anchor::Live {
            self.base = now;
            self.recompute();
        }
    }

    /// Add `delta` to the pending adjustment, field by field
    ///
    /// Repeated nudges to the same field accumulate: two `+1h` nudges move the
    /// time by two hours.
    pub fn nudge(&mut self, delta: TimestampAdjustment) {
        self.adjustment = self.adjustment.merged(delta);
        tracing::debug!(adjustment = %self.adjustment, "Nudged event time");
        self.recompute();
    }

    /// Flip between AM and PM while keeping the clock face time
    pub fn toggle_meridiem(&mut self) {
        let hour = self.target.get().hour();
        let delta = if hour < 12 { 12 } else { -12 };
        self.nudge(TimestampAdjustment::hours(delta));
    }

    /// Drop all adjustments and follow the live clock from `now`
    pub fn reset_to_now(&mut self, now: DateTime<Tz>) {
        self.adjustment = adjust::reset();
        self.anchor = Anchor::Live;
        self.base = now;
        self.recompute();
    }

    /// Materialize the draft with the adjusted time
    pub fn commit(self) -> BabyEvent {
        let Self {
            kind,
            mut draft,
            target,
            ..
        } = self;
        if draft.kind() != kind {
            draft.details = EventDetails::new_for(kind);
        }
        draft.date = target.into_inner().with_timezone(&Utc);
        tracing::debug!(id = %draft.id, date = %draft.date, "Committed event form");
        draft
    }

    fn recompute(&mut self) {
        self.target.update(&self.adjustment, &self.base);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{BreastSide, FeedSource};
    use chrono::TimeDelta;
    use pretty_assertions::assert_eq;

    fn at(h: u32, m: u32) -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2020, 6, 22, h, m, 0).unwrap()
    }

    #[test]
    fn test_new_event_starts_unmodified_at_now() {
        let form = EventFormController::new_event(EventKind::Nap, at(10, 0));
        assert_eq!(form.current_timestamp(), at(10, 0));
        assert_eq!(form.anchor(), Anchor::Live);
        assert!(!form.is_modified());
        assert_eq!(form.kind(), EventKind::Nap);
    }

    #[test]
    fn test_nudges_accumulate() {
        let mut form = EventFormController::new_event(EventKind::Feed, at(10, 0));
        form.nudge(TimestampAdjustment::hours(1));
        form.nudge(TimestampAdjustment::hours(1));
        form.nudge(TimestampAdjustment::minutes(-10));
        assert_eq!(
            form.adjustment(),
            &(TimestampAdjustment::hours(2) + TimestampAdjustment::minutes(-10))
        );
        assert_eq!(form.current_timestamp(), at(11, 50));
    }

    #[test]
    fn test_hour_nudge_does_not_mark_modified() {
        let mut form = EventFormController::new_event(EventKind::Feed, at(10, 0));
        form.nudge(TimestampAdjustment::hours(-3));
        assert!(!form.is_modified());

        form.nudge(TimestampAdjustment::days(-1));
        assert!(form.is_modified());
    }

    #[test]
    fn test_tick_moves_live_base_and_keeps_offset() {
        let mut form = EventFormController::new_event(EventKind::Fuss, at(10, 0));
        form.nudge(TimestampAdjustment::minutes(-5));
        form.tick(at(10, 1));
        assert_eq!(form.current_timestamp(), at(9, 56));
    }

    #[test]
    fn test_tick_ignored_when_editing() {
        let stored = BabyEvent::new(EventKind::Diaper, at(7, 30));
        let mut form = EventFormController::edit(stored.clone(), &Utc);
        form.tick(at(12, 0));
        assert_eq!(form.current_timestamp(), at(7, 30));
        assert_eq!(form.id(), stored.id);
    }

    #[test]
    fn test_toggle_meridiem() {
        let mut form = EventFormController::new_event(EventKind::Nap, at(9, 15));
        form.toggle_meridiem();
        assert_eq!(form.current_timestamp(), at(21, 15));
        form.toggle_meridiem();
        assert_eq!(form.current_timestamp(), at(9, 15));
        assert!(form.adjustment().is_zero());
    }

    #[test]
    fn test_reset_to_now() {
        let stored = BabyEvent::new(EventKind::Nap, at(7, 30));
        let mut form = EventFormController::edit(stored, &Utc);
        form.nudge(TimestampAdjustment::days(-2));
        form.reset_to_now(at(12, 0));
        assert_eq!(form.anchor(), Anchor::Live);
        assert!(!form.is_modified());
        assert_eq!(form.current_timestamp(), at(12, 0));
    }

    #[test]
    fn test_commit_uses_adjusted_time_and_edits() {
        let mut form = EventFormController::new_event(EventKind::Feed, at(10, 0));
        form.nudge(TimestampAdjustment::minutes(-20));
        if let EventDetails::Feed { source, duration_secs } = form.details_mut() {
            *source = FeedSource::Breast {
                side: BreastSide::Left,
            };
            *duration_secs = Some(900);
        }

        let event = form.commit();
        assert_eq!(event.date, at(9, 40));
        assert_eq!(event.kind(), EventKind::Feed);
        assert_eq!(
            event.details,
            EventDetails::Feed {
                source: FeedSource::Breast {
                    side: BreastSide::Left
                },
                duration_secs: Some(900),
            }
        );
    }

    #[test]
    fn test_commit_restores_kind_when_variant_swapped() {
        let mut form = EventFormController::new_event(EventKind::Diaper, at(10, 0));
        *form.details_mut() = EventDetails::new_for(EventKind::Nap);
        assert_eq!(form.commit().kind(), EventKind::Diaper);
    }

    #[test]
    fn test_commit_edit_keeps_id() {
        let stored = BabyEvent::new(EventKind::Weight, at(8, 0));
        let id = stored.id;
        let mut form = EventFormController::edit(stored, &Utc);
        form.nudge(TimestampAdjustment::days(1));
        let event = form.commit();
        assert_eq!(event.id, id);
        assert_eq!(event.date, at(8, 0) + TimeDelta::days(1));
    }
}
