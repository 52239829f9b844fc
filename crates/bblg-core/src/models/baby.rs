//! Baby profile model

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::catalog::Rgb;

/// A profile theme color with channels in `0.0..=1.0`
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PreferredColor {
    pub r: f64,
    pub g: f64,
    pub b: f64,
}

impl PreferredColor {
    #[must_use]
    pub const fn new(r: f64, g: f64, b: f64) -> Self {
        Self { r, g, b }
    }

    /// The palette offered when creating a profile
    pub const PREBUILT_SET: [Self; 5] = [
        Self::new(0.537, 0.820, 0.863),
        Self::new(0.973, 0.612, 0.980),
        Self::new(0.765, 0.525, 0.945),
        Self::new(0.941, 0.839, 0.537),
        Self::new(0.686, 0.949, 0.545),
    ];

    /// Pick a palette entry from a seed string, stable across runs
    #[must_use]
    pub fn suggested_for(seed: &str) -> Self {
        let sum = seed.chars().map(|c| c as usize).sum::<usize>();
        Self::PREBUILT_SET[sum % Self::PREBUILT_SET.len()]
    }

    /// Quantize to 8-bit channels
    #[must_use]
    pub fn to_rgb(self) -> Rgb {
        Rgb::new(channel(self.r), channel(self.g), channel(self.b))
    }
}

#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
fn channel(value: f64) -> u8 {
    (value.clamp(0.0, 1.0) * 255.0).round() as u8
}

/// The baby a log belongs to
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Baby {
    pub name: String,
    #[serde(default)]
    pub emoji: String,
    #[serde(default)]
    pub birthday: Option<NaiveDate>,
    #[serde(default)]
    pub theme_color: Option<PreferredColor>,
}

impl Baby {
    #[must_use]
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Self::default()
        }
    }

    /// Short label for the profile icon: the name's first letter, else the emoji
    #[must_use]
    pub fn display_initial(&self) -> String {
        if let Some(initial) = self.name.trim().chars().next() {
            return initial.to_uppercase().collect();
        }
        if !self.emoji.trim().is_empty() {
            return self.emoji.trim().to_string();
        }
        "👶".to_string()
    }

    #[must_use]
    pub fn active_color(&self) -> PreferredColor {
        self.theme_color
            .unwrap_or_else(|| PreferredColor::suggested_for(&self.name))
    }

    /// Whether two profiles describe the same child: same name (ignoring case) and birthday
    #[must_use]
    pub fn is_same_baby(&self, other: &Self) -> bool {
        self.name.trim().to_lowercase() == other.name.trim().to_lowercase()
            && self.birthday == other.birthday
    }

    /// Age in whole days on `today`, if the birthday is known and not in the future
    #[must_use]
    pub fn age_in_days(&self, today: NaiveDate) -> Option<i64> {
        let days = today.signed_duration_since(self.birthday?).num_days();
        (days >= 0).then_some(days)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_initial() {
        let mut baby = Baby::new("sophia");
        baby.emoji = "🐣".to_string();
        assert_eq!(baby.display_initial(), "S");

        baby.name = "  ".to_string();
        assert_eq!(baby.display_initial(), "🐣");

        assert_eq!(Baby::default().display_initial(), "👶");
    }

    #[test]
    fn test_is_same_baby() {
        let mut sophia = Baby::new("Sophia");
        let mut copy = Baby::new(" sophia ");
        copy.emoji = "🐣".to_string();
        assert!(sophia.is_same_baby(&copy));
        assert!(!sophia.is_same_baby(&Baby::new("Olivia")));

        sophia.birthday = NaiveDate::from_ymd_opt(2024, 5, 1);
        assert!(!sophia.is_same_baby(&copy));
    }

    #[test]
    fn test_active_color_prefers_theme() {
        let mut baby = Baby::new("Sophia");
        assert_eq!(baby.active_color(), PreferredColor::suggested_for("Sophia"));
        assert!(PreferredColor::PREBUILT_SET.contains(&baby.active_color()));

        baby.theme_color = Some(PreferredColor::new(0.1, 0.2, 0.3));
        assert_eq!(baby.active_color(), PreferredColor::new(0.1, 0.2, 0.3));
    }

    #[test]
    fn test_to_rgb() {
        assert_eq!(PreferredColor::new(1.0, 0.0, 0.5).to_rgb(), Rgb::new(255, 0, 128));
        assert_eq!(PreferredColor::new(2.0, -1.0, 0.0).to_rgb(), Rgb::new(255, 0, 0));
    }

    #[test]
    fn test_age_in_days() {
        let mut baby = Baby::new("Sophia");
        let today = NaiveDate::from_ymd_opt(2020, 6, 22).unwrap();
        assert_eq!(baby.age_in_days(today), None);

        baby.birthday = NaiveDate::from_ymd_opt(2020, 3, 14);
        assert_eq!(baby.age_in_days(today), Some(100));

        baby.birthday = NaiveDate::from_ymd_opt(2021, 1, 1);
        assert_eq!(baby.age_in_days(today), None);
    }
}
