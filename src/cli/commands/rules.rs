//! oas-style rules - List the validation passes

use clap::Args;

use crate::app::AppContext;
use crate::cli::OutputFormat;
use crate::cli::output::{HumanLayout, emit_human, emit_json};
use crate::error::Result;
use crate::lint::{PassInfo, RuleToggle};

#[derive(Args, Debug)]
pub struct RulesArgs {
    /// Output format
    #[arg(long, short, value_enum)]
    pub format: Option<OutputFormat>,
}

pub fn run(ctx: &AppContext, args: &RulesArgs) -> Result<()> {
    let passes = ctx.validator.list_passes(&ctx.config.validation);

    if args.format.unwrap_or(ctx.output_format) == OutputFormat::Json {
        return emit_json(&passes);
    }

    emit_human(build_layout(&passes, &ctx.config.validation.disabled_toggles()));
    Ok(())
}

fn build_layout(passes: &[PassInfo], disabled: &[RuleToggle]) -> HumanLayout {
    let mut layout = HumanLayout::new();
    layout.title("Validation Passes");

    for pass in passes {
        let badge = if pass.enabled { "" } else { " [disabled]" };
        layout.section(&format!("{} - {}{badge}", pass.id, pass.name));
        layout.push_line(pass.description.as_str());
        for toggle in &pass.toggles {
            let state = if disabled.contains(toggle) { "off" } else { "on" };
            layout.bullet(&format!("{toggle} ({state})"));
        }
        layout.blank();
    }

    layout
}
