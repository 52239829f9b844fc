//! bblg-core - Core library for BBLG
//!
//! This crate contains the event models, the relative date adjustment used by
//! event forms, the event type display catalog, and the per-baby log document
//! shared by every BBLG interface.

pub mod adjust;
pub mod catalog;
pub mod clock;
pub mod document;
pub mod error;
pub mod form;
pub mod log;
pub mod models;
pub mod util;
pub mod versions;

pub use adjust::TimestampAdjustment;
pub use error::{Error, Result};
pub use form::EventFormController;
pub use log::BabyLog;
pub use models::{BabyEvent, EventDetails, EventId, EventKind};
