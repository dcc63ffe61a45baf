//! Command-line interface for oas-style.

use std::path::PathBuf;

use clap::{ArgAction, Parser, ValueEnum};

pub mod commands;
pub mod output;

pub use commands::Commands;

#[derive(Parser, Debug)]
#[command(
    name = "oas-style",
    version,
    about = "Style linter for OpenAPI documents",
    propagate_version = true
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Increase log verbosity (-v, -vv, -vvv)
    #[arg(short, long, action = ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Suppress all log output
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Machine-readable mode: JSON output, JSON logs and JSON errors
    #[arg(long, global = true, env = "OAS_STYLE_ROBOT")]
    pub robot: bool,

    /// Config file to use instead of the project and global files
    #[arg(long, global = true, value_name = "PATH")]
    pub config: Option<PathBuf>,
}

impl Cli {
    #[must_use]
    pub const fn output_format(&self) -> OutputFormat {
        if self.robot {
            OutputFormat::Json
        } else {
            OutputFormat::Human
        }
    }
}

/// Output format shared by commands that only distinguish human and JSON.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    #[default]
    Human,
    Json,
}
