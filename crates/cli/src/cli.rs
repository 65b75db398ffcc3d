//! CLI argument definitions using clap.

use clap::{Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

/// Clinic Desk - patient intake and dispatch
#[derive(Parser, Debug)]
#[command(
    name = "clinic-desk",
    author,
    version,
    about = "Patient intake and dispatch desk",
    long_about = "Drives the clinic desk dispatch core.\n\n\
                  Regular patients wait in a FIFO queue, emergency patients in a \n\
                  LIFO stack, and emergencies are always consulted first."
)]
pub struct Cli {
    /// Increase logging verbosity (-v for debug, -vv for trace)
    #[arg(short, long, action = clap::ArgAction::Count, global = true, env = "CLINIC_DESK_VERBOSE")]
    pub verbose: u8,

    /// Suppress all output except errors
    #[arg(short, long, global = true, conflicts_with = "verbose")]
    pub quiet: bool,

    /// Log output format
    #[arg(
        long,
        value_enum,
        default_value = "pretty",
        global = true,
        env = "CLINIC_DESK_LOG_FORMAT"
    )]
    pub log_format: LogFormat,

    #[command(subcommand)]
    pub command: Commands,
}

/// Available CLI commands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Replay a session script against a fresh desk
    Replay(ReplayArgs),

    /// Validate configuration (and optionally a script) without running
    Validate(ValidateArgs),

    /// Display configuration information
    Info(InfoArgs),
}

/// Arguments for the `replay` command
#[derive(Parser, Debug, Clone)]
pub struct ReplayArgs {
    /// Path to the session script (TOML or JSON)
    #[arg(short, long, env = "CLINIC_DESK_SCRIPT")]
    pub script: PathBuf,

    /// Path to desk configuration; built-in defaults when omitted
    #[arg(short, long, env = "CLINIC_DESK_CONFIG")]
    pub config: Option<PathBuf>,

    /// Print step outcomes as JSON
    #[arg(long)]
    pub json: bool,

    /// Continue after a rejected registration instead of failing
    #[arg(long)]
    pub keep_going: bool,

    /// Release everyone still waiting once the script ends
    #[arg(long)]
    pub drain: bool,

    /// Override the metrics port from configuration (0 = disabled)
    #[arg(long, env = "CLINIC_DESK_METRICS_PORT")]
    pub metrics_port: Option<u16>,
}

/// Arguments for the `validate` command
#[derive(Parser, Debug)]
pub struct ValidateArgs {
    /// Path to configuration file to validate
    #[arg(short, long, default_value = "desk.toml")]
    pub config: PathBuf,

    /// Also validate a session script
    #[arg(short, long)]
    pub script: Option<PathBuf>,

    /// Output validation result as JSON
    #[arg(long)]
    pub json: bool,
}

/// Arguments for the `info` command
#[derive(Parser, Debug)]
pub struct InfoArgs {
    /// Path to configuration file
    #[arg(short, long, default_value = "desk.toml")]
    pub config: PathBuf,

    /// Output as JSON
    #[arg(long)]
    pub json: bool,
}

/// Log output format
#[derive(ValueEnum, Clone, Copy, Debug, Default)]
pub enum LogFormat {
    /// JSON structured logging
    Json,
    /// Human-readable pretty format
    #[default]
    Pretty,
    /// Compact single-line format
    Compact,
}

impl From<LogFormat> for contracts::LogFormat {
    fn from(format: LogFormat) -> Self {
        match format {
            LogFormat::Json => Self::Json,
            LogFormat::Pretty => Self::Pretty,
            LogFormat::Compact => Self::Compact,
        }
    }
}
