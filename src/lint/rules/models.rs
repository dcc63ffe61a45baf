//! Schema property examples.

use crate::error::Result;
use crate::lint::config::{RuleToggle, ValidationConfig, ValidationContext};
use crate::lint::rule::ValidationPass;
use crate::lint::sink::ViolationSink;
use crate::lint::violation::Section;

/// Requires an `example` on every inline schema property.
pub struct ModelsPass;

impl ValidationPass for ModelsPass {
    fn id(&self) -> &'static str {
        "models"
    }

    fn name(&self) -> &'static str {
        "Models"
    }

    fn description(&self) -> &'static str {
        "Schema properties that are not references must declare an example"
    }

    fn section(&self) -> Section {
        Section::Model
    }

    fn toggles(&self) -> &'static [RuleToggle] {
        &[
            RuleToggle::ValidateModelPropertiesExample,
            RuleToggle::ValidateModelNoLocalDef,
        ]
    }

    // validateModelNoLocalDef has no check behind it, so it alone does not
    // enable the pass.
    fn is_enabled(&self, config: &ValidationConfig) -> bool {
        config.validate_model_properties_example
    }

    fn run(&self, ctx: &ValidationContext<'_>, sink: &mut ViolationSink) -> Result<()> {
        for (model, schema) in ctx.document.schemas() {
            for (property_name, property) in &schema.properties {
                if !property.is_reference() && property.example.is_none() {
                    sink.log_missing_or_empty_model_attribute(model, property_name, "example");
                }
            }
        }
        Ok(())
    }
}
