//! BBLG CLI - Command-line interface for logging infant care events
//!
//! Quick logging from the terminal against a `.bblg` log document.

mod cli;
mod commands;
mod config;
mod error;


use std::env;

use clap::{CommandFactory, Parser};

use crate::cli::{Cli, Commands, ConfigCommands};
use crate::commands::add::run_add;
use crate::commands::completions::run_completions;
use crate::commands::config::{run_config_set_log, run_config_show};
use crate::commands::delete::run_delete;
use crate::commands::duplicate::run_duplicate;
use crate::commands::edit::run_edit;
use crate::commands::init::run_init;
use crate::commands::kinds::run_kinds;
use crate::commands::list::run_list;
use crate::commands::versions::{run_resolve, run_versions};
use crate::config::{resolve_log_path, CliConfig};
use crate::error::CliError;

fn main() {
    if let Err(error) = run() {
        eprintln!("Error: {error}");
        std::process::exit(1);
    }
}

fn run() -> Result<(), CliError> {
    dotenvy::dotenv().ok();

    let directive = "bblg=info"
        .parse::<tracing_subscriber::filter::Directive>()
        .map_err(|error| CliError::Config(format!("invalid log directive: {error}")))?;
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env().add_directive(directive))
        .init();

    let cli = Cli::parse();
    let config = CliConfig::load().map_err(CliError::Config)?;
    let log_path = resolve_log_path(cli.log, env::var_os("BBLG_LOG_PATH"), &config);
    tracing::debug!("Using log document {}", log_path.display());

    match cli.command {
        Some(Commands::Init {
            name,
            emoji,
            birthday,
            force,
        }) => run_init(&name, emoji.as_deref(), birthday, force, &log_path)?,
        Some(Commands::Add { kind, fields }) => run_add(kind, &fields, &log_path)?,
        Some(Commands::List { kind, limit, json }) => run_list(kind, limit, json, &log_path)?,
        Some(Commands::Edit { id, fields }) => run_edit(&id, &fields, &log_path)?,
        Some(Commands::Delete { id }) => run_delete(&id, &log_path)?,
        Some(Commands::Duplicate { id }) => run_duplicate(&id, &log_path)?,
        Some(Commands::Kinds { json }) => run_kinds(json)?,
        Some(Commands::Versions { json }) => run_versions(json, &log_path)?,
        Some(Commands::Resolve { index }) => run_resolve(index, &log_path)?,
        Some(Commands::Completions { shell, output }) => {
            run_completions(shell, output.as_deref())?;
        }
        Some(Commands::Config { command }) => match command {
            ConfigCommands::Show => run_config_show(&config, &log_path)?,
            ConfigCommands::SetLog { path } => run_config_set_log(config, path)?,
        },
        None => {
            Cli::command().print_help().map_err(CliError::Io)?;
            println!();
        }
    }

    Ok(())
}
