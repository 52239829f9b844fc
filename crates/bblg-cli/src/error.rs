use std::io;
use std::path::PathBuf;

use bblg_core::EventKind;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum CliError {
    #[error(transparent)]
    Core(#[from] bblg_core::Error),
    #[error(transparent)]
    Io(#[from] io::Error),
    #[error(transparent)]
    Serialization(#[from] serde_json::Error),
    #[error("No baby log at {0}. Run `bblg init <NAME>` to create one.")]
    LogNotFound(PathBuf),
    #[error("A baby log already exists at {0} (use --force to replace it)")]
    LogExists(PathBuf),
    #[error("Baby name cannot be empty")]
    EmptyName,
    #[error("Event ID cannot be empty")]
    EmptyEventId,
    #[error("Event not found for id/prefix: {0}")]
    EventNotFound(String),
    #[error("{0}")]
    AmbiguousEventId(String),
    #[error("--{field} does not apply to {kind} events")]
    FieldNotApplicable { field: &'static str, kind: EventKind },
    #[error("Custom events need a --title")]
    EmptyTitle,
    #[error("Invalid duration '{0}' (expected e.g. 15m, 1h30m, 90s)")]
    InvalidDuration(String),
    #[error("No conflicting versions of {0}")]
    NoConflicts(PathBuf),
    #[error("Configuration error: {0}")]
    Config(String),
}
