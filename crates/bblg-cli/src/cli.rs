use std::path::PathBuf;

use bblg_core::models::{BreastSide, MassUnit};
use bblg_core::{EventKind, TimestampAdjustment};
use chrono::NaiveDate;
use clap::{Args, Parser, Subcommand};
use clap_complete::Shell;

#[derive(Parser)]
#[command(name = "bblg")]
#[command(about = "Log feeds, diapers, naps and more from the command line")]
#[command(version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Optional path to the baby log document
    #[arg(long, global = true, value_name = "PATH")]
    pub log: Option<PathBuf>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Create a new baby log
    Init {
        /// Baby's name
        name: String,
        /// Emoji shown next to the name
        #[arg(long)]
        emoji: Option<String>,
        /// Birthday (YYYY-MM-DD)
        #[arg(long, value_name = "DATE")]
        birthday: Option<NaiveDate>,
        /// Replace an existing log at the same path
        #[arg(long)]
        force: bool,
    },
    /// Record a new event
    #[command(alias = "new")]
    Add {
        /// Event type (feed, diaper, nap, fuss, weight, tummyTime, custom)
        kind: EventKind,
        #[command(flatten)]
        fields: EventFields,
    },
    /// List recent events
    List {
        /// Only show one event type
        #[arg(long)]
        kind: Option<EventKind>,
        /// Number of events to show
        #[arg(short = 'n', long, default_value = "20")]
        limit: usize,
        /// Output as JSON
        #[arg(long)]
        json: bool,
    },
    /// Change an existing event
    Edit {
        /// Event ID or unique ID prefix
        id: String,
        #[command(flatten)]
        fields: EventFields,
    },
    /// Delete an event
    Delete {
        /// Event ID or unique ID prefix
        id: String,
    },
    /// Log an event again, dated now
    Duplicate {
        /// Event ID or unique ID prefix
        id: String,
    },
    /// Show event types with their glyphs and colors
    Kinds {
        /// Output as JSON
        #[arg(long)]
        json: bool,
    },
    /// List conflicting versions of the log
    Versions {
        /// Output as JSON
        #[arg(long)]
        json: bool,
    },
    /// Keep one version of the log and delete the others
    Resolve {
        /// Index from `bblg versions`
        index: usize,
    },
    /// Generate shell completion scripts
    Completions {
        /// Target shell
        #[arg(value_enum)]
        shell: Shell,
        /// Optional output path (stdout when omitted)
        #[arg(short, long, value_name = "PATH")]
        output: Option<PathBuf>,
    },
    /// Show or change CLI configuration
    Config {
        #[command(subcommand)]
        command: ConfigCommands,
    },
}

/// Optional event fields shared by `add` and `edit`
#[derive(Args, Debug, Default, Clone)]
pub struct EventFields {
    /// Move the time, e.g. "-1d", "+2h -10m", "1mo"
    #[arg(short, long, value_name = "ADJUSTMENT", allow_hyphen_values = true)]
    pub adjust: Option<TimestampAdjustment>,
    /// Breast side for feeds (left, right, both)
    #[arg(long)]
    pub side: Option<BreastSide>,
    /// Bottle feed volume in ml
    #[arg(long, value_name = "ML")]
    pub bottle: Option<u32>,
    /// Duration for feeds, naps, fussing, tummy time (e.g. 15m, 1h30m)
    #[arg(long, value_name = "DURATION")]
    pub duration: Option<String>,
    /// Wet diaper
    #[arg(long)]
    pub pee: bool,
    /// Dirty diaper
    #[arg(long)]
    pub poop: bool,
    /// Weight value
    #[arg(long, value_name = "VALUE")]
    pub weight: Option<f64>,
    /// Weight unit (kg, lb, oz)
    #[arg(long)]
    pub unit: Option<MassUnit>,
    /// Title for custom events
    #[arg(long)]
    pub title: Option<String>,
    /// Notes for custom events
    #[arg(long)]
    pub info: Option<String>,
}

#[derive(Subcommand)]
pub enum ConfigCommands {
    /// Print the active configuration
    Show,
    /// Set the log document used when --log is not given
    SetLog {
        /// Path to a .bblg document
        path: PathBuf,
    },
}
