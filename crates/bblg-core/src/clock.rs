//! Displayed target time and time formatting

use std::fmt::Display;

use chrono::{DateTime, TimeZone};

use crate::adjust::{self, TimestampAdjustment};

/// The timestamp a form currently shows
///
/// Recomputed from a base time and an adjustment whenever either changes;
/// read by the hour/minute/meridiem columns of the time stepper.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ObservableTimestamp<Tz: TimeZone> {
    value: DateTime<Tz>,
}

impl<Tz: TimeZone> ObservableTimestamp<Tz> {
    #[must_use]
    pub const fn new(value: DateTime<Tz>) -> Self {
        Self { value }
    }

    #[must_use]
    pub const fn get(&self) -> &DateTime<Tz> {
        &self.value
    }

    #[must_use]
    pub fn into_inner(self) -> DateTime<Tz> {
        self.value
    }

    /// Replace the value with `adjustment` applied to `base`
    pub fn update(&mut self, adjustment: &TimestampAdjustment, base: &DateTime<Tz>) {
        self.value = adjust::apply(adjustment, base);
    }
}

impl<Tz: TimeZone> ObservableTimestamp<Tz>
where
    Tz::Offset: Display,
{
    /// 12-hour clock hour without padding, e.g. `3`
    #[must_use]
    pub fn hour_text(&self) -> String {
        self.value.format("%-I").to_string()
    }

    /// Zero-padded minute, e.g. `05`
    #[must_use]
    pub fn minute_text(&self) -> String {
        self.value.format("%M").to_string()
    }

    /// `AM` or `PM`
    #[must_use]
    pub fn meridiem_text(&self) -> String {
        self.value.format("%p").to_string()
    }

    /// Short time, e.g. `3:05 PM`
    #[must_use]
    pub fn time_display(&self) -> String {
        format_time(&self.value)
    }
}

/// Short time, e.g. `3:05 PM`
pub fn format_time<Tz: TimeZone>(value: &DateTime<Tz>) -> String
where
    Tz::Offset: Display,
{
    value.format("%-I:%M %p").to_string()
}

/// Abbreviated duration, e.g. `1h 5m` or `45m`
///
/// Sub-minute remainders are dropped; anything under a minute reads `0m`.
pub fn format_duration(duration_secs: u32) -> String {
    let hours = duration_secs / 3600;
    let minutes = (duration_secs % 3600) / 60;
    match (hours, minutes) {
        (0, m) => format!("{m}m"),
        (h, 0) => format!("{h}h"),
        (h, m) => format!("{h}h {m}m"),
    }
}
