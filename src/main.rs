//! oas-style - OpenAPI style linter CLI
//!
//! Checks OpenAPI documents for missing documentation and naming drift.

use std::process::ExitCode;

use clap::Parser;
use tracing_subscriber::{EnvFilter, fmt, prelude::*};

use oas_style::Result;
use oas_style::app::AppContext;
use oas_style::cli::Cli;

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_tracing(&cli);

    match run(&cli) {
        Ok(()) => ExitCode::SUCCESS,
        // The report has already been printed.
        Err(oas_style::OasError::ValidationFailed(_)) if cli.robot => ExitCode::FAILURE,
        Err(e) => {
            if cli.robot {
                let code = match &e {
                    oas_style::OasError::Io(_) => "io",
                    oas_style::OasError::Parse(_) => "parse",
                    oas_style::OasError::Config(_) => "config",
                    oas_style::OasError::InvalidDocument(_) => "invalid_document",
                    oas_style::OasError::ValidationFailed(_) => "validation_failed",
                    oas_style::OasError::NotFound(_) => "not_found",
                    oas_style::OasError::Serialization(_) => "serialization",
                };
                let error_json = serde_json::json!({
                    "error": true,
                    "code": code,
                    "message": e.to_string(),
                });
                println!("{}", serde_json::to_string(&error_json).unwrap_or_default());
            } else {
                eprintln!("Error: {e}");
            }
            ExitCode::FAILURE
        }
    }
}

fn run(cli: &Cli) -> Result<()> {
    let ctx = AppContext::from_cli(cli)?;
    oas_style::cli::commands::run(&ctx, &cli.command)
}

fn init_tracing(cli: &Cli) {
    if cli.quiet {
        return;
    }

    let filter = match cli.verbose {
        0 => "warn,oas_style=info",
        1 => "info,oas_style=debug",
        2 => "debug,oas_style=trace",
        _ => "trace",
    };

    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(filter));

    if cli.robot {
        // JSON logging for robot mode
        tracing_subscriber::registry()
            .with(env_filter)
            .with(fmt::layer().json().with_writer(std::io::stderr))
            .init();
    } else {
        tracing_subscriber::registry()
            .with(env_filter)
            .with(fmt::layer().with_writer(std::io::stderr))
            .init();
    }
}
