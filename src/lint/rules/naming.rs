//! Naming conventions for properties, parameters and path segments.

use crate::document::{Parameter, ParameterLocation};
use crate::error::Result;
use crate::lint::config::{RuleToggle, ValidationConfig, ValidationContext};
use crate::lint::rule::ValidationPass;
use crate::lint::sink::ViolationSink;
use crate::lint::violation::{IdentifierKind, Section};

/// Header names with this prefix are conventionally `X-Upper-Case`.
const CUSTOM_HEADER_PREFIX: &str = "X-";

/// Classifies identifiers against the configured naming conventions.
pub struct NamingPass;

impl ValidationPass for NamingPass {
    fn id(&self) -> &'static str {
        "naming"
    }

    fn name(&self) -> &'static str {
        "Naming"
    }

    fn description(&self) -> &'static str {
        "Property names, parameter names and literal path segments must follow their naming conventions"
    }

    fn section(&self) -> Section {
        Section::Naming
    }

    fn toggles(&self) -> &'static [RuleToggle] {
        &[RuleToggle::ValidateNaming, RuleToggle::IgnoreHeaderXNaming]
    }

    fn is_enabled(&self, config: &ValidationConfig) -> bool {
        config.validate_naming
    }

    fn run(&self, ctx: &ValidationContext<'_>, sink: &mut ViolationSink) -> Result<()> {
        let config = ctx.config;

        for (model, schema) in ctx.document.schemas() {
            for property_name in schema.properties.keys() {
                if !config.property_naming_convention.is_compliant(property_name) {
                    sink.log_model_bad_naming(
                        property_name,
                        IdentifierKind::Property,
                        config.property_naming_convention,
                        model,
                    );
                }
            }
        }

        for (path, item) in &ctx.document.paths {
            for (method, op) in item.operations() {
                for name in op
                    .parameters
                    .iter()
                    .filter_map(|param| checked_parameter_name(param, config))
                {
                    if !config.parameter_naming_convention.is_compliant(name) {
                        sink.log_operation_bad_naming(
                            name,
                            IdentifierKind::Parameter,
                            config.parameter_naming_convention,
                            path,
                            Some(method),
                        );
                    }
                }
            }

            for segment in literal_segments(path) {
                if !config.path_naming_convention.is_compliant(segment) {
                    sink.log_operation_bad_naming(
                        segment,
                        IdentifierKind::Path,
                        config.path_naming_convention,
                        path,
                        None,
                    );
                }
            }
        }

        Ok(())
    }
}

/// Name to classify, or `None` when the parameter is exempt.
fn checked_parameter_name<'p>(param: &'p Parameter, config: &ValidationConfig) -> Option<&'p str> {
    if param.reference.is_some() {
        return None;
    }
    let name = param.name.as_deref()?;
    let custom_header = param.location == Some(ParameterLocation::Header)
        && name.starts_with(CUSTOM_HEADER_PREFIX);
    if custom_header && config.ignore_header_x_naming {
        return None;
    }
    Some(name)
}

/// Path segments that are neither empty nor a whole `{parameter}`.
fn literal_segments(path: &str) -> impl Iterator<Item = &str> {
    path.split('/').filter(|segment| {
        !segment.is_empty() && !(segment.starts_with('{') && segment.ends_with('}'))
    })
}
