//! CLI command implementations
//!
//! Each subcommand has its own module with:
//! - Args struct for command-line arguments
//! - run() function to execute the command

use clap::Subcommand;

pub mod rules;
pub mod validate;

use crate::app::AppContext;
use crate::error::Result;

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Check an OpenAPI document against the style rules
    Validate(validate::ValidateArgs),

    /// List the validation passes and the toggles that control them
    Rules(rules::RulesArgs),
}

/// Dispatch a command to its handler
pub fn run(ctx: &AppContext, command: &Commands) -> Result<()> {
    match command {
        Commands::Validate(args) => validate::run(ctx, args),
        Commands::Rules(args) => rules::run(ctx, args),
    }
}
