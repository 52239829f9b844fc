use std::path::{Path, PathBuf};

use crate::config::{default_config_path, CliConfig};
use crate::error::CliError;

pub fn run_config_show(config: &CliConfig, log_path: &Path) -> Result<(), CliError> {
    let config_path = default_config_path()
        .map_or_else(|| "(unavailable)".to_string(), |path| path.display().to_string());
    let default_log = config
        .default_log
        .as_ref()
        .map_or_else(|| "(not set)".to_string(), |path| path.display().to_string());

    println!("config file:  {config_path}");
    println!("default log:  {default_log}");
    println!("active log:   {}", log_path.display());
    Ok(())
}

pub fn run_config_set_log(mut config: CliConfig, path: PathBuf) -> Result<(), CliError> {
    let path = absolutize(path)?;
    config.default_log = Some(path.clone());
    let saved_at = config.save().map_err(CliError::Config)?;
    tracing::info!("Updated config at {}", saved_at.display());
    println!("{}", path.display());
    Ok(())
}

pub fn absolutize(path: PathBuf) -> Result<PathBuf, CliError> {
    if path.is_absolute() {
        Ok(path)
    } else {
        Ok(std::env::current_dir()?.join(path))
    }
}
