use std::path::Path;

use bblg_core::versions::{self, FileVersion};
use serde::Serialize;

use crate::error::CliError;

#[derive(Debug, Serialize)]
pub struct VersionItem {
    pub index: usize,
    pub path: String,
    pub modified_at: Option<String>,
    pub current: bool,
    pub events: Option<usize>,
}

pub fn version_to_item(index: usize, version: &FileVersion) -> VersionItem {
    VersionItem {
        index,
        path: version.path.display().to_string(),
        modified_at: version.modified_at.map(|at| at.to_rfc3339()),
        current: version.is_current,
        events: version.event_count,
    }
}

pub fn format_version_line(index: usize, version: &FileVersion) -> String {
    let modified = version.modified_at.map_or_else(
        || "unknown".to_string(),
        |at| at.format("%Y-%m-%d %H:%M:%S UTC").to_string(),
    );
    let events = version
        .event_count
        .map_or_else(|| "unreadable".to_string(), |count| format!("{count} events"));
    let marker = if version.is_current { "*" } else { " " };
    let file_name = version
        .path
        .file_name()
        .map_or_else(String::new, |name| name.to_string_lossy().to_string());

    format!("{index:>3}{marker} {modified}  {events:<12}  {file_name}")
}

pub fn run_versions(as_json: bool, log_path: &Path) -> Result<(), CliError> {
    let group = versions::discover(log_path)?;

    if as_json {
        let items = group
            .versions
            .iter()
            .enumerate()
            .map(|(index, version)| version_to_item(index, version))
            .collect::<Vec<_>>();
        println!("{}", serde_json::to_string_pretty(&items)?);
    } else {
        println!("{}", group.summary());
        for (index, version) in group.versions.iter().enumerate() {
            println!("{}", format_version_line(index, version));
        }
    }
    Ok(())
}

pub fn run_resolve(index: usize, log_path: &Path) -> Result<(), CliError> {
    let group = versions::discover(log_path)?;
    if !group.has_conflicts() {
        return Err(CliError::NoConflicts(log_path.to_path_buf()));
    }

    let log = group.resolve(index)?;
    println!("{}  {} events", log_path.display(), log.events.len());
    Ok(())
}
