//! Conflicting copies of a log document
//!
//! File sync services leave alternatives next to a document when two devices
//! edit it at once, e.g. `MyBabyLog (Sophia's iPad).bblg`. This module lists
//! those alternatives so the caregiver can pick one by hand; it never merges.

use std::fs;
use std::path::{Path, PathBuf};

use chrono::{DateTime, Utc};

use crate::document::{self, LOG_EXTENSION};
use crate::error::{Error, Result};
use crate::log::BabyLog;

/// One available version of a document
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileVersion {
    pub path: PathBuf,
    pub modified_at: Option<DateTime<Utc>>,
    /// Whether this is the document itself rather than a conflict copy
    pub is_current: bool,
    /// Number of events, or `None` when the current file could not be read
    pub event_count: Option<usize>,
}

/// A document together with its conflicting copies, newest first
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VersionGroup {
    pub name: String,
    pub current: PathBuf,
    pub versions: Vec<FileVersion>,
}

impl VersionGroup {
    /// e.g. `MyBabyLog  3 versions`
    #[must_use]
    pub fn summary(&self) -> String {
        let count = self.versions.len();
        let noun = if count == 1 { "version" } else { "versions" };
        format!("{}  {count} {noun}", self.name)
    }

    #[must_use]
    pub fn has_conflicts(&self) -> bool {
        self.versions.iter().any(|version| !version.is_current)
    }

    /// Keep the version at `index` as the document and delete the other copies
    ///
    /// A copy is only deleted if it still belongs to the same baby as the kept
    /// version. Copies that cannot be removed are logged and left in place,
    /// since the document has already been replaced by then.
    pub fn resolve(&self, index: usize) -> Result<BabyLog> {
        let chosen = self.versions.get(index).ok_or_else(|| {
            Error::NotFound(format!(
                "version {index} (only {} available)",
                self.versions.len()
            ))
        })?;

        let log = document::load(&chosen.path)?;
        if !chosen.is_current {
            document::save(&log, &self.current)?;
        }

        for version in self.versions.iter().filter(|v| !v.is_current) {
            match document::load(&version.path) {
                Ok(copy) if copy.baby.is_same_baby(&log.baby) => {
                    if let Err(error) = fs::remove_file(&version.path) {
                        tracing::warn!(
                            "Failed to remove conflict copy {}: {}",
                            version.path.display(),
                            error
                        );
                    }
                }
                Ok(_) => tracing::warn!(
                    "Keeping {}: it now belongs to a different baby",
                    version.path.display()
                ),
                Err(error) => tracing::warn!(
                    "Keeping unreadable copy {}: {}",
                    version.path.display(),
                    error
                ),
            }
        }

        tracing::info!(
            "Resolved {} using {}",
            self.current.display(),
            chosen.path.display()
        );
        Ok(log)
    }
}

/// List the document at `path` and its conflicting copies
///
/// A sibling named `<stem> (…).bblg` only counts as a copy when it parses and
/// belongs to the same baby as the current document. Anything else is another
/// log and is left out.
pub fn discover(path: &Path) -> Result<VersionGroup> {
    let name = path
        .file_stem()
        .and_then(|stem| stem.to_str())
        .ok_or_else(|| Error::InvalidInput(format!("Not a log path: {}", path.display())))?
        .to_string();
    let conflict_prefix = format!("{name} (");
    let suffix = format!(".{LOG_EXTENSION}");

    let mut versions = Vec::new();
    let mut current_baby = None;
    if path.exists() {
        let loaded = document::load(path);
        if let Err(error) = &loaded {
            tracing::warn!("Current log {} is unreadable: {}", path.display(), error);
        }
        let loaded = loaded.ok();
        versions.push(describe(path, true, loaded.as_ref()));
        current_baby = loaded.map(|log| log.baby);
    }

    let parent = path
        .parent()
        .filter(|p| !p.as_os_str().is_empty())
        .unwrap_or_else(|| Path::new("."));
    if let Some(baby) = current_baby.filter(|_| parent.is_dir()) {
        for entry in fs::read_dir(parent)? {
            let entry_path = entry?.path();
            let Some(file_name) = entry_path.file_name().and_then(|n| n.to_str()) else {
                continue;
            };
            if !(file_name.starts_with(&conflict_prefix) && file_name.ends_with(&suffix)) {
                continue;
            }
            match document::load(&entry_path) {
                Ok(copy) if copy.baby.is_same_baby(&baby) => {
                    versions.push(describe(&entry_path, false, Some(&copy)));
                }
                Ok(_) => tracing::debug!(
                    "Ignoring {}: belongs to a different baby",
                    entry_path.display()
                ),
                Err(error) => tracing::warn!(
                    "Skipping unreadable version {}: {}",
                    entry_path.display(),
                    error
                ),
            }
        }
    }

    versions.sort_by(|a, b| {
        b.modified_at
            .cmp(&a.modified_at)
            .then_with(|| b.is_current.cmp(&a.is_current))
            .then_with(|| a.path.cmp(&b.path))
    });

    Ok(VersionGroup {
        name,
        current: path.to_path_buf(),
        versions,
    })
}

fn describe(path: &Path, is_current: bool, log: Option<&BabyLog>) -> FileVersion {
    let modified_at = fs::metadata(path)
        .and_then(|meta| meta.modified())
        .ok()
        .map(DateTime::<Utc>::from);
    FileVersion {
        path: path.to_path_buf(),
        modified_at,
        is_current,
        event_count: log.map(|log| log.events.len()),
    }
}
