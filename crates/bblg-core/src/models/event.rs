//! Baby event model

use std::fmt;
use std::str::FromStr;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::measurement::{Mass, MassUnit};
use crate::error::Error;

/// A unique identifier for an event, using UUID v7 (time-sortable)
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct EventId(Uuid);

impl EventId {
    /// Create a new unique event ID using UUID v7
    #[must_use]
    pub fn new() -> Self {
        Self(Uuid::now_v7())
    }

    /// Get the string representation of this ID
    #[must_use]
    pub fn as_str(&self) -> String {
        self.0.to_string()
    }
}

impl Default for EventId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for EventId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for EventId {
    type Err = uuid::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(Self(Uuid::parse_str(s)?))
    }
}

/// The seven fixed categories of trackable events
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum EventKind {
    Feed,
    Diaper,
    Nap,
    Fuss,
    Weight,
    TummyTime,
    Custom,
}

impl EventKind {
    /// Every kind, in the order the new-event selector offers them
    pub const ALL: [Self; 7] = [
        Self::Feed,
        Self::Diaper,
        Self::Nap,
        Self::TummyTime,
        Self::Weight,
        Self::Fuss,
        Self::Custom,
    ];

    /// Stable tag used in documents and on the command line
    #[must_use]
    pub const fn tag(self) -> &'static str {
        match self {
            Self::Feed => "feed",
            Self::Diaper => "diaper",
            Self::Nap => "nap",
            Self::Fuss => "fuss",
            Self::Weight => "weight",
            Self::TummyTime => "tummyTime",
            Self::Custom => "custom",
        }
    }

    /// Human-readable name
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Feed => "Feed",
            Self::Diaper => "Diaper",
            Self::Nap => "Nap",
            Self::Fuss => "Fuss",
            Self::Weight => "Weight",
            Self::TummyTime => "Tummy Time",
            Self::Custom => "Custom",
        }
    }
}

impl fmt::Display for EventKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.tag())
    }
}

impl FromStr for EventKind {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized = s.trim().to_lowercase().replace(['-', '_', ' '], "");
        Self::ALL
            .into_iter()
            .find(|kind| kind.tag().to_lowercase() == normalized)
            .ok_or_else(|| Error::InvalidInput(format!("Unknown event type: {}", s.trim())))
    }
}

/// Which side a breast feed used
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BreastSide {
    Left,
    Right,
    #[default]
    Both,
}

impl FromStr for BreastSide {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "left" | "l" => Ok(Self::Left),
            "right" | "r" => Ok(Self::Right),
            "both" | "b" => Ok(Self::Both),
            other => Err(Error::InvalidInput(format!("Unknown breast side: {other}"))),
        }
    }
}

/// How a feed was given
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "method", rename_all = "lowercase")]
pub enum FeedSource {
    Breast { side: BreastSide },
    Bottle { volume_ml: Option<u32> },
}

impl Default for FeedSource {
    fn default() -> Self {
        Self::Breast {
            side: BreastSide::default(),
        }
    }
}

/// Kind-specific payload of an event
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "camelCase")]
pub enum EventDetails {
    Feed {
        source: FeedSource,
        duration_secs: Option<u32>,
    },
    Diaper {
        pee: bool,
        poop: bool,
    },
    Nap {
        duration_secs: Option<u32>,
    },
    Fuss {
        duration_secs: Option<u32>,
    },
    Weight {
        measurement: Option<Mass>,
    },
    TummyTime {
        duration_secs: Option<u32>,
    },
    Custom {
        title: String,
        info: String,
    },
}

impl EventDetails {
    /// The values a fresh form starts with for `kind`
    #[must_use]
    pub fn new_for(kind: EventKind) -> Self {
        match kind {
            EventKind::Feed => Self::Feed {
                source: FeedSource::default(),
                duration_secs: None,
            },
            EventKind::Diaper => Self::Diaper {
                pee: true,
                poop: false,
            },
            EventKind::Nap => Self::Nap {
                duration_secs: None,
            },
            EventKind::Fuss => Self::Fuss {
                duration_secs: None,
            },
            EventKind::Weight => Self::Weight {
                measurement: Some(Mass::new(4.20, MassUnit::Kilograms)),
            },
            EventKind::TummyTime => Self::TummyTime {
                duration_secs: None,
            },
            EventKind::Custom => Self::Custom {
                title: String::new(),
                info: String::new(),
            },
        }
    }

    #[must_use]
    pub const fn kind(&self) -> EventKind {
        match self {
            Self::Feed { .. } => EventKind::Feed,
            Self::Diaper { .. } => EventKind::Diaper,
            Self::Nap { .. } => EventKind::Nap,
            Self::Fuss { .. } => EventKind::Fuss,
            Self::Weight { .. } => EventKind::Weight,
            Self::TummyTime { .. } => EventKind::TummyTime,
            Self::Custom { .. } => EventKind::Custom,
        }
    }

    /// Duration for the kinds that track one
    #[must_use]
    pub const fn duration_secs(&self) -> Option<u32> {
        match self {
            Self::Feed { duration_secs, .. }
            | Self::Nap { duration_secs }
            | Self::Fuss { duration_secs }
            | Self::TummyTime { duration_secs } => *duration_secs,
            Self::Diaper { .. } | Self::Weight { .. } | Self::Custom { .. } => None,
        }
    }
}

/// A logged infant care event
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BabyEvent {
    /// Unique identifier
    pub id: EventId,
    /// When the event happened
    pub date: DateTime<Utc>,
    /// Kind-specific payload; also determines the kind
    pub details: EventDetails,
}

impl BabyEvent {
    /// Create an event of `kind` with default values at `date`
    #[must_use]
    pub fn new(kind: EventKind, date: DateTime<Utc>) -> Self {
        Self::with_details(EventDetails::new_for(kind), date)
    }

    #[must_use]
    pub fn with_details(details: EventDetails, date: DateTime<Utc>) -> Self {
        Self {
            id: EventId::new(),
            date,
            details,
        }
    }

    #[must_use]
    pub const fn kind(&self) -> EventKind {
        self.details.kind()
    }

    /// Measurement carried by measured kinds (weight)
    #[must_use]
    pub const fn measurement(&self) -> Option<&Mass> {
        match &self.details {
            EventDetails::Weight { measurement } => measurement.as_ref(),
            _ => None,
        }
    }

    /// One-line description of the payload
    #[must_use]
    pub fn summary(&self) -> String {
        match &self.details {
            EventDetails::Feed { source, .. } => match source {
                FeedSource::Breast { side } => match side {
                    BreastSide::Left => "Breast (left)".to_string(),
                    BreastSide::Right => "Breast (right)".to_string(),
                    BreastSide::Both => "Breast (both)".to_string(),
                },
                FeedSource::Bottle {
                    volume_ml: Some(ml),
                } => format!("Bottle {ml} ml"),
                FeedSource::Bottle { volume_ml: None } => "Bottle".to_string(),
            },
            EventDetails::Diaper { pee, poop } => match (pee, poop) {
                (true, true) => "Pee + poop".to_string(),
                (true, false) => "Pee".to_string(),
                (false, true) => "Poop".to_string(),
                (false, false) => "Dry".to_string(),
            },
            EventDetails::Weight { measurement } => measurement
                .as_ref()
                .map_or_else(String::new, ToString::to_string),
            EventDetails::Custom { title, .. } => title.clone(),
            EventDetails::Nap { .. } | EventDetails::Fuss { .. } | EventDetails::TummyTime { .. } => {
                String::new()
            }
        }
    }
}
