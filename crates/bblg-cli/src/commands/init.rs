use std::path::Path;

use bblg_core::document;
use bblg_core::models::{Baby, PreferredColor};
use bblg_core::util::normalize_text_option;
use bblg_core::BabyLog;
use chrono::NaiveDate;

use crate::error::CliError;

pub fn run_init(
    name: &str,
    emoji: Option<&str>,
    birthday: Option<NaiveDate>,
    force: bool,
    log_path: &Path,
) -> Result<(), CliError> {
    let name = normalize_text_option(Some(name.to_string())).ok_or(CliError::EmptyName)?;
    if log_path.exists() && !force {
        return Err(CliError::LogExists(log_path.to_path_buf()));
    }

    let mut baby = Baby::new(name);
    baby.emoji = emoji.map(str::trim).unwrap_or_default().to_string();
    baby.birthday = birthday;
    baby.theme_color = Some(PreferredColor::suggested_for(&baby.name));

    document::save(&BabyLog::new(baby), log_path)?;
    println!("{}", log_path.display());
    Ok(())
}
