//! Required operation attributes and operationId uniqueness.

use std::collections::HashSet;

use crate::error::Result;
use crate::lint::config::{RuleToggle, ValidationContext};
use crate::lint::rule::ValidationPass;
use crate::lint::sink::ViolationSink;
use crate::lint::violation::Section;

use super::has_text;

/// Checks every operation for id, summary, description and tags.
pub struct OperationsPass;

impl ValidationPass for OperationsPass {
    fn id(&self) -> &'static str {
        "operations"
    }

    fn name(&self) -> &'static str {
        "Operations"
    }

    fn description(&self) -> &'static str {
        "Operations need a unique operationId, a summary, a description and at least one tag"
    }

    fn section(&self) -> Section {
        Section::Operation
    }

    fn toggles(&self) -> &'static [RuleToggle] {
        &[
            RuleToggle::ValidateOperationOperationId,
            RuleToggle::ValidateOperationOperationIdUnique,
            RuleToggle::ValidateOperationDescription,
            RuleToggle::ValidateOperationSummary,
            RuleToggle::ValidateOperationTag,
        ]
    }

    fn run(&self, ctx: &ValidationContext<'_>, sink: &mut ViolationSink) -> Result<()> {
        let config = ctx.config;
        let mut seen_ids: HashSet<&str> = HashSet::new();

        for (path, item) in &ctx.document.paths {
            for (method, op) in item.operations() {
                let operation_id = op.operation_id.as_deref().filter(|id| !id.is_empty());

                if config.validate_operation_operation_id && operation_id.is_none() {
                    sink.log_missing_or_empty_operation_attribute(path, method, "operationId");
                }

                if config.validate_operation_operation_id_unique {
                    if let Some(id) = operation_id {
                        if !seen_ids.insert(id) {
                            sink.log_operation_non_unique_naming(id, path, method);
                        }
                    }
                }

                if config.validate_operation_description && !has_text(op.description.as_deref()) {
                    sink.log_missing_or_empty_operation_attribute(path, method, "description");
                }

                if config.validate_operation_summary && !has_text(op.summary.as_deref()) {
                    sink.log_missing_or_empty_operation_attribute(path, method, "summary");
                }

                if config.validate_operation_tag && op.tags.as_ref().is_none_or(Vec::is_empty) {
                    sink.log_missing_or_empty_operation_collection(path, method, "tags");
                }
            }
        }

        Ok(())
    }
}
