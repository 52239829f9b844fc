//! Reading and writing `.bblg` log documents
//!
//! A document is the pretty-printed JSON form of a [`BabyLog`], written whole.

use std::fs;
use std::path::{Path, PathBuf};

use crate::error::{Error, Result};
use crate::log::{BabyLog, LOG_SCHEMA_VERSION};

/// File extension of log documents
pub const LOG_EXTENSION: &str = "bblg";

/// Parse a document from its JSON text
pub fn parse(raw: &str) -> Result<BabyLog> {
    let log = serde_json::from_str::<BabyLog>(raw)?;
    if log.version > LOG_SCHEMA_VERSION {
        return Err(Error::UnsupportedVersion(log.version));
    }
    Ok(log)
}

/// Render a document as pretty JSON
pub fn render(log: &BabyLog) -> Result<String> {
    Ok(serde_json::to_string_pretty(log)?)
}

pub fn load(path: &Path) -> Result<BabyLog> {
    let raw = fs::read_to_string(path)?;
    parse(&raw)
}

/// Write a document, replacing any existing file atomically
pub fn save(log: &BabyLog, path: &Path) -> Result<()> {
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent)?;
    }

    let serialized = render(log)?;
    let temp_path = temp_path_for(path);
    fs::write(&temp_path, serialized)?;
    fs::rename(&temp_path, path)?;

    tracing::info!(
        "Saved log for {} ({} events) to {}",
        log.baby.name,
        log.events.len(),
        path.display()
    );
    Ok(())
}

fn temp_path_for(path: &Path) -> PathBuf {
    let mut name = path
        .file_name()
        .map(|n| n.to_os_string())
        .unwrap_or_default();
    name.push(".tmp");
    path.with_file_name(name)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Baby, BabyEvent, EventKind};
    use chrono::Utc;
    use pretty_assertions::assert_eq;

    fn sample_log() -> BabyLog {
        let mut log = BabyLog::new(Baby::new("Sophia"));
        log.save_event(BabyEvent::new(EventKind::Weight, Utc::now()));
        log.save_event(BabyEvent::new(EventKind::Custom, Utc::now()));
        log
    }

    #[test]
    fn test_save_then_load() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested").join("MyBabyLog.bblg");
        let log = sample_log();

        save(&log, &path).unwrap();
        assert_eq!(load(&path).unwrap(), log);
        assert!(!temp_path_for(&path).exists());
    }

    #[test]
    fn test_save_overwrites() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("MyBabyLog.bblg");
        let mut log = sample_log();
        save(&log, &path).unwrap();

        log.events.clear();
        save(&log, &path).unwrap();
        assert!(load(&path).unwrap().events.is_empty());
    }

    #[test]
    fn test_parse_rejects_newer_version() {
        let raw = r#"{"version": 99, "baby": {"name": "Sophia"}, "events": []}"#;
        assert!(matches!(parse(raw), Err(Error::UnsupportedVersion(99))));
    }

    #[test]
    fn test_parse_minimal_document() {
        let log = parse(r#"{"baby": {"name": "Sophia"}}"#).unwrap();
        assert_eq!(log.version, LOG_SCHEMA_VERSION);
        assert!(log.events.is_empty());
        assert_eq!(log.baby.emoji, "");
    }

    #[test]
    fn test_load_missing_file_is_io_error() {
        let dir = tempfile::tempdir().unwrap();
        assert!(matches!(
            load(&dir.path().join("missing.bblg")),
            Err(Error::Io(_))
        ));
    }
}
