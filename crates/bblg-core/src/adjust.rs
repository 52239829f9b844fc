//! Relative date adjustment
//!
//! A [`TimestampAdjustment`] is a set of signed calendar deltas that an event
//! form applies to a base time when the caregiver nudges the event time up or
//! down. Arithmetic runs on the proleptic Gregorian calendar in the base
//! timestamp's own time zone:
//!
//! 1. years and months move the local date, clamping the day of month
//!    (Jan 31 + 1 month is the last day of February);
//! 2. days move the local date and keep the wall-clock time;
//! 3. hours, minutes and seconds are added as elapsed time.
//!
//! Local times skipped by a DST transition resolve forward by the gap, folded
//! local times resolve to the earlier instant, and results past chrono's range
//! saturate at its bounds. Applying an adjustment never fails.

use std::fmt;
use std::ops::Add;
use std::str::FromStr;

use chrono::{DateTime, Days, FixedOffset, Months, NaiveDateTime, Offset, TimeDelta, TimeZone};
use regex::Regex;
use serde::{Deserialize, Serialize};

use crate::error::Error;
use crate::util::unit_tokens;

/// Calendar field an adjustment delta is keyed by
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DateField {
    Year,
    Month,
    Day,
    Hour,
    Minute,
    Second,
}

impl DateField {
    /// All fields, largest first
    pub const ALL: [Self; 6] = [
        Self::Year,
        Self::Month,
        Self::Day,
        Self::Hour,
        Self::Minute,
        Self::Second,
    ];

    /// Unit suffix used when parsing and displaying adjustments
    #[must_use]
    pub const fn suffix(self) -> &'static str {
        match self {
            Self::Year => "y",
            Self::Month => "mo",
            Self::Day => "d",
            Self::Hour => "h",
            Self::Minute => "m",
            Self::Second => "s",
        }
    }

    fn from_suffix(suffix: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|field| field.suffix() == suffix)
    }
}

/// Signed deltas keyed by calendar field; zero fields leave the base unchanged
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(default)]
pub struct TimestampAdjustment {
    pub year: i32,
    pub month: i32,
    pub day: i32,
    pub hour: i32,
    pub minute: i32,
    pub second: i32,
}

impl TimestampAdjustment {
    /// The adjustment that changes nothing
    pub const ZERO: Self = Self {
        year: 0,
        month: 0,
        day: 0,
        hour: 0,
        minute: 0,
        second: 0,
    };

    #[must_use]
    pub const fn years(year: i32) -> Self {
        Self { year, ..Self::ZERO }
    }

    #[must_use]
    pub const fn months(month: i32) -> Self {
        Self { month, ..Self::ZERO }
    }

    #[must_use]
    pub const fn days(day: i32) -> Self {
        Self { day, ..Self::ZERO }
    }

    #[must_use]
    pub const fn hours(hour: i32) -> Self {
        Self { hour, ..Self::ZERO }
    }

    #[must_use]
    pub const fn minutes(minute: i32) -> Self {
        Self { minute, ..Self::ZERO }
    }

    #[must_use]
    pub const fn seconds(second: i32) -> Self {
        Self { second, ..Self::ZERO }
    }

    /// Check whether every field is zero
    #[must_use]
    pub const fn is_zero(&self) -> bool {
        self.year == 0
            && self.month == 0
            && self.day == 0
            && self.hour == 0
            && self.minute == 0
            && self.second == 0
    }

    /// Read the delta for one field
    #[must_use]
    pub const fn get(&self, field: DateField) -> i32 {
        match field {
            DateField::Year => self.year,
            DateField::Month => self.month,
            DateField::Day => self.day,
            DateField::Hour => self.hour,
            DateField::Minute => self.minute,
            DateField::Second => self.second,
        }
    }

    /// Overwrite the delta for one field
    pub fn set(&mut self, field: DateField, value: i32) {
        match field {
            DateField::Year => self.year = value,
            DateField::Month => self.month = value,
            DateField::Day => self.day = value,
            DateField::Hour => self.hour = value,
            DateField::Minute => self.minute = value,
            DateField::Second => self.second = value,
        }
    }

    /// Field-wise sum of two adjustments, saturating at the `i32` bounds
    #[must_use]
    pub const fn merged(self, other: Self) -> Self {
        Self {
            year: self.year.saturating_add(other.year),
            month: self.month.saturating_add(other.month),
            day: self.day.saturating_add(other.day),
            hour: self.hour.saturating_add(other.hour),
            minute: self.minute.saturating_add(other.minute),
            second: self.second.saturating_add(other.second),
        }
    }
}

impl Add for TimestampAdjustment {
    type Output = Self;

    fn add(self, rhs: Self) -> Self {
        self.merged(rhs)
    }
}

impl fmt::Display for TimestampAdjustment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_zero() {
            return write!(f, "0");
        }

        let parts = DateField::ALL
            .into_iter()
            .filter(|field| self.get(*field) != 0)
            .map(|field| format!("{:+}{}", self.get(field), field.suffix()))
            .collect::<Vec<_>>();
        write!(f, "{}", parts.join(" "))
    }
}

/// Parse adjustments such as `-1d +2h`, `1mo`, or `-1d30m`
///
/// Each token is an optionally signed integer followed by one of `y`, `mo`,
/// `d`, `h`, `m`, `s`. Repeated fields accumulate.
impl FromStr for TimestampAdjustment {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let compact = s.split_whitespace().collect::<String>();
        if compact.is_empty() {
            return Err(Error::InvalidInput("Adjustment cannot be empty".to_string()));
        }
        if compact == "0" {
            return Ok(Self::ZERO);
        }

        let re = Regex::new(r"([+-]?\d+)(mo|y|d|h|m|s)").expect("Invalid regex");
        let tokens = unit_tokens(&re, &compact).ok_or_else(|| {
            Error::InvalidInput(format!(
                "Could not parse adjustment '{}' (expected tokens like -1d, +2h, 10m)",
                s.trim()
            ))
        })?;

        let mut adjustment = Self::ZERO;
        for (value, unit) in tokens {
            let value = value.parse::<i32>().map_err(|_| {
                Error::InvalidInput(format!("Adjustment value out of range: {value}"))
            })?;
            let field = DateField::from_suffix(unit)
                .ok_or_else(|| Error::InvalidInput(format!("Unknown unit: {unit}")))?;
            adjustment.set(field, adjustment.get(field).saturating_add(value));
        }

        Ok(adjustment)
    }
}

/// Apply an adjustment to a base timestamp
pub fn apply<Tz: TimeZone>(adjustment: &TimestampAdjustment, base: &DateTime<Tz>) -> DateTime<Tz> {
    if adjustment.is_zero() {
        return base.clone();
    }

    let tz = base.timezone();
    let months = i64::from(adjustment.year) * 12 + i64::from(adjustment.month);
    let days = i64::from(adjustment.day);

    let calendar_shifted = if months == 0 && days == 0 {
        base.clone()
    } else {
        let local = shift_days(shift_months(base.naive_local(), months), days);
        resolve_local(&tz, local, base.offset().fix())
    };

    let elapsed = TimeDelta::hours(i64::from(adjustment.hour))
        + TimeDelta::minutes(i64::from(adjustment.minute))
        + TimeDelta::seconds(i64::from(adjustment.second));

    let result = if elapsed.is_zero() {
        calendar_shifted
    } else {
        calendar_shifted
            .checked_add_signed(elapsed)
            .unwrap_or_else(|| tz.from_utc_datetime(&bound(elapsed > TimeDelta::zero())))
    };

    tracing::debug!(%adjustment, "Applied timestamp adjustment");
    result
}

/// Check whether an adjustment moves the date
///
/// Only the day and month deltas count: an hour or minute nudge on its own
/// does not mark the date as modified.
pub fn is_active(adjustment: &TimestampAdjustment) -> bool {
    let highest = adjustment
        .day
        .unsigned_abs()
        .max(adjustment.month.unsigned_abs());
    highest != 0
}

/// The zero adjustment
pub const fn reset() -> TimestampAdjustment {
    TimestampAdjustment::ZERO
}

fn shift_months(local: NaiveDateTime, months: i64) -> NaiveDateTime {
    if months == 0 {
        return local;
    }

    let count = Months::new(u32::try_from(months.unsigned_abs()).unwrap_or(u32::MAX));
    let shifted = if months > 0 {
        local.checked_add_months(count)
    } else {
        local.checked_sub_months(count)
    };
    shifted.unwrap_or_else(|| bound(months > 0))
}

fn shift_days(local: NaiveDateTime, days: i64) -> NaiveDateTime {
    if days == 0 {
        return local;
    }

    let count = Days::new(days.unsigned_abs());
    let shifted = if days > 0 {
        local.checked_add_days(count)
    } else {
        local.checked_sub_days(count)
    };
    shifted.unwrap_or_else(|| bound(days > 0))
}

const fn bound(forward: bool) -> NaiveDateTime {
    if forward {
        NaiveDateTime::MAX
    } else {
        NaiveDateTime::MIN
    }
}

/// Map a wall-clock time back onto the zone
fn resolve_local<Tz: TimeZone>(tz: &Tz, local: NaiveDateTime, fallback: FixedOffset) -> DateTime<Tz> {
    if let Some(resolved) = tz.from_local_datetime(&local).earliest() {
        return resolved;
    }

    // Skipped local time: read it with the offset in force before the gap,
    // which lands the same distance past the transition.
    let before_gap = local
        .checked_sub_signed(TimeDelta::days(1))
        .and_then(|day_before| tz.from_local_datetime(&day_before).earliest())
        .map_or(fallback, |dt| dt.offset().fix());
    let utc = local
        .checked_sub_signed(TimeDelta::seconds(i64::from(before_gap.local_minus_utc())))
        .unwrap_or(local);
    tz.from_utc_datetime(&utc)
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{Datelike, NaiveDate, Timelike, Utc};
    use chrono_tz::America::New_York;
    use pretty_assertions::assert_eq;

    fn utc(y: i32, mo: u32, d: u32, h: u32, mi: u32) -> DateTime<Utc> {
        Utc.with_ymd_and_hms(y, mo, d, h, mi, 0).unwrap()
    }

    #[test]
    fn test_zero_adjustment_is_identity() {
        let base = utc(2020, 6, 22, 14, 5);
        assert_eq!(apply(&TimestampAdjustment::ZERO, &base), base);

        let local = New_York.with_ymd_and_hms(2020, 11, 1, 1, 30, 0).latest().unwrap();
        assert_eq!(apply(&TimestampAdjustment::default(), &local), local);
    }

    #[test]
    fn test_reset_then_apply_is_identity() {
        let base = utc(2021, 2, 28, 23, 59);
        let mut adjustment = TimestampAdjustment::days(3) + TimestampAdjustment::hours(-7);
        assert_ne!(apply(&adjustment, &base), base);

        adjustment = reset();
        assert_eq!(apply(&adjustment, &base), base);
    }

    #[test]
    fn test_day_deltas_compose() {
        let base = utc(2020, 12, 30, 8, 0);
        for (d1, d2) in [(1, 1), (3, -5), (-40, 400), (0, 7)] {
            let stepwise = apply(
                &TimestampAdjustment::days(d2),
                &apply(&TimestampAdjustment::days(d1), &base),
            );
            let combined = apply(&TimestampAdjustment::days(d1 + d2), &base);
            assert_eq!(stepwise, combined, "d1={d1} d2={d2}");
        }
    }

    #[test]
    fn test_month_overflow_clamps_to_end_of_february() {
        let jan_31 = utc(2023, 1, 31, 9, 15);
        assert_eq!(apply(&TimestampAdjustment::months(1), &jan_31), utc(2023, 2, 28, 9, 15));

        let leap = utc(2024, 1, 31, 9, 15);
        assert_eq!(apply(&TimestampAdjustment::months(1), &leap), utc(2024, 2, 29, 9, 15));
    }

    #[test]
    fn test_negative_month_clamps() {
        let mar_31 = utc(2023, 3, 31, 0, 0);
        assert_eq!(apply(&TimestampAdjustment::months(-1), &mar_31), utc(2023, 2, 28, 0, 0));
    }

    #[test]
    fn test_year_on_leap_day() {
        let leap_day = utc(2024, 2, 29, 12, 0);
        assert_eq!(apply(&TimestampAdjustment::years(1), &leap_day), utc(2025, 2, 28, 12, 0));
    }

    #[test]
    fn test_time_deltas_cross_midnight() {
        let base = utc(2020, 6, 30, 23, 50);
        let adjustment = TimestampAdjustment::minutes(10) + TimestampAdjustment::hours(1);
        assert_eq!(apply(&adjustment, &base), utc(2020, 7, 1, 1, 0));
    }

    #[test]
    fn test_day_delta_keeps_wall_clock_across_dst() {
        // Day before spring forward, 9:00 EST
        let base = New_York.with_ymd_and_hms(2024, 3, 9, 9, 0, 0).unwrap();
        let next = apply(&TimestampAdjustment::days(1), &base);
        assert_eq!(next.hour(), 9);
        assert_eq!(next.day(), 10);
        assert_eq!(next.signed_duration_since(base), TimeDelta::hours(23));
    }

    #[test]
    fn test_hour_delta_is_elapsed_time_across_dst() {
        let base = New_York.with_ymd_and_hms(2024, 3, 10, 1, 30, 0).unwrap();
        let next = apply(&TimestampAdjustment::hours(1), &base);
        assert_eq!(next.signed_duration_since(base), TimeDelta::hours(1));
        assert_eq!(next.hour(), 3);
        assert_eq!(next.minute(), 30);
    }

    #[test]
    fn test_skipped_local_time_resolves_forward() {
        // 2:30 does not exist on 2024-03-10 in New York
        let base = New_York.with_ymd_and_hms(2024, 3, 9, 2, 30, 0).unwrap();
        let next = apply(&TimestampAdjustment::days(1), &base);
        assert_eq!(
            next.naive_local(),
            NaiveDate::from_ymd_opt(2024, 3, 10)
                .unwrap()
                .and_hms_opt(3, 30, 0)
                .unwrap()
        );
    }

    #[test]
    fn test_folded_local_time_resolves_to_earlier_instant() {
        // 01:30 happens twice on 2024-11-03 in New York
        let base = New_York.with_ymd_and_hms(2024, 10, 3, 1, 30, 0).unwrap();
        let folded = apply(&TimestampAdjustment::months(1), &base);
        let earliest = New_York
            .with_ymd_and_hms(2024, 11, 3, 1, 30, 0)
            .earliest()
            .unwrap();
        assert_eq!(folded, earliest);
        assert_eq!(folded.offset().fix().local_minus_utc(), -4 * 3600);
    }

    #[test]
    fn test_extreme_deltas_saturate() {
        let base = utc(2020, 1, 1, 0, 0);
        let far = apply(&TimestampAdjustment::years(i32::MAX), &base);
        assert_eq!(far.naive_utc(), NaiveDateTime::MAX);

        let past = apply(&TimestampAdjustment::days(i32::MIN), &base);
        assert_eq!(past.naive_utc(), NaiveDateTime::MIN);
    }

    #[test]
    fn test_is_active_only_counts_day_and_month() {
        assert!(!is_active(&TimestampAdjustment::hours(5)));
        assert!(!is_active(&TimestampAdjustment::minutes(-10)));
        assert!(!is_active(&TimestampAdjustment::years(1)));
        assert!(is_active(&TimestampAdjustment::days(1)));
        assert!(is_active(&TimestampAdjustment::months(-2)));
        assert!(is_active(&TimestampAdjustment::days(i32::MIN)));
        assert!(!is_active(&reset()));
    }

    #[test]
    fn test_merged_accumulates_and_saturates() {
        let sum = TimestampAdjustment::hours(1) + TimestampAdjustment::hours(2);
        assert_eq!(sum, TimestampAdjustment::hours(3));

        let saturated = TimestampAdjustment::days(i32::MAX) + TimestampAdjustment::days(1);
        assert_eq!(saturated.day, i32::MAX);
    }

    #[test]
    fn test_parse_adjustment() {
        let parsed: TimestampAdjustment = "-1d +2h".parse().unwrap();
        assert_eq!(parsed, TimestampAdjustment::days(-1) + TimestampAdjustment::hours(2));

        let compact: TimestampAdjustment = "1mo-1d30m".parse().unwrap();
        assert_eq!(compact.month, 1);
        assert_eq!(compact.day, -1);
        assert_eq!(compact.minute, 30);

        let repeated: TimestampAdjustment = "10m 10m -1m".parse().unwrap();
        assert_eq!(repeated, TimestampAdjustment::minutes(19));

        assert_eq!("0".parse::<TimestampAdjustment>().unwrap(), TimestampAdjustment::ZERO);
    }

    #[test]
    fn test_parse_adjustment_rejects_garbage() {
        assert!("".parse::<TimestampAdjustment>().is_err());
        assert!("yesterday".parse::<TimestampAdjustment>().is_err());
        assert!("1d tomorrow".parse::<TimestampAdjustment>().is_err());
        assert!("5".parse::<TimestampAdjustment>().is_err());
        assert!("99999999999h".parse::<TimestampAdjustment>().is_err());
    }

    #[test]
    fn test_display_round_trips_through_parse() {
        let adjustment = TimestampAdjustment::months(1) + TimestampAdjustment::minutes(-10);
        assert_eq!(adjustment.to_string(), "+1mo -10m");
        assert_eq!(adjustment.to_string().parse::<TimestampAdjustment>().unwrap(), adjustment);
        assert_eq!(TimestampAdjustment::ZERO.to_string(), "0");
    }
}
