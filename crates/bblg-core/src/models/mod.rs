//! Data models for BBLG

mod baby;
mod event;
mod measurement;

pub use baby::{Baby, PreferredColor};
pub use event::{BabyEvent, BreastSide, EventDetails, EventId, EventKind, FeedSource};
pub use measurement::{Mass, MassUnit};
