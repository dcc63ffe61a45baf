//! Append-only collector for the violations of one validation run.

use super::naming::NamingConvention;
use super::violation::{IdentifierKind, NamingIssue, NamingLocation, Section, Violation};
use crate::document::HttpMethod;

const MISSING_ATTRIBUTE: &str = "Should be present and not empty";
const MISSING_FIELD: &str = "This field should be present and not empty";
const MISSING_COLLECTION: &str =
    "The collection should be present and there should be at least one item in it";

/// Collects violations in the order they are logged.
///
/// The sink does not deduplicate or second-guess its inputs; every call
/// appends exactly one record. A fresh sink is created for every
/// [`StyleValidator::validate`](super::StyleValidator::validate) call.
#[derive(Debug, Default)]
pub struct ViolationSink {
    violations: Vec<Violation>,
}

impl ViolationSink {
    #[must_use]
    pub const fn new() -> Self {
        Self {
            violations: Vec::new(),
        }
    }

    /// A required scalar attribute is absent or empty.
    pub fn log_missing_or_empty_attribute(&mut self, section: Section, field: &str) {
        self.push(Violation::Generic {
            section,
            field: field.to_string(),
            message: MISSING_ATTRIBUTE.to_string(),
        });
    }

    /// None of `fields` on `parent` carries a value.
    pub fn log_at_least_one_of(&mut self, section: Section, parent: &str, fields: &[&str]) {
        self.push(Violation::Generic {
            section,
            field: parent.to_string(),
            message: format!(
                "At least one of {} should be present and not empty",
                fields.join("|")
            ),
        });
    }

    pub fn log_missing_or_empty_operation_attribute(
        &mut self,
        path: &str,
        method: HttpMethod,
        field: &str,
    ) {
        self.push(Violation::Operation {
            field: field.to_string(),
            message: MISSING_FIELD.to_string(),
            path: path.to_string(),
            method,
        });
    }

    pub fn log_missing_or_empty_operation_collection(
        &mut self,
        path: &str,
        method: HttpMethod,
        field: &str,
    ) {
        self.push(Violation::Operation {
            field: field.to_string(),
            message: MISSING_COLLECTION.to_string(),
            path: path.to_string(),
            method,
        });
    }

    pub fn log_missing_or_empty_model_attribute(&mut self, model: &str, property: &str, field: &str) {
        self.push(Violation::Model {
            field: field.to_string(),
            message: MISSING_FIELD.to_string(),
            model: model.to_string(),
            property: property.to_string(),
        });
    }

    pub fn log_operation_bad_naming(
        &mut self,
        name: &str,
        kind: IdentifierKind,
        expected: NamingConvention,
        path: &str,
        method: Option<HttpMethod>,
    ) {
        self.push(Violation::Naming {
            subject: name.to_string(),
            kind,
            issue: NamingIssue::Convention { expected },
            location: NamingLocation::Operation {
                path: path.to_string(),
                method,
            },
        });
    }

    pub fn log_operation_non_unique_naming(
        &mut self,
        operation_id: &str,
        path: &str,
        method: HttpMethod,
    ) {
        self.push(Violation::Naming {
            subject: operation_id.to_string(),
            kind: IdentifierKind::OperationId,
            issue: NamingIssue::NotUnique,
            location: NamingLocation::Operation {
                path: path.to_string(),
                method: Some(method),
            },
        });
    }

    pub fn log_model_bad_naming(
        &mut self,
        name: &str,
        kind: IdentifierKind,
        expected: NamingConvention,
        model: &str,
    ) {
        self.push(Violation::Naming {
            subject: name.to_string(),
            kind,
            issue: NamingIssue::Convention { expected },
            location: NamingLocation::Model {
                model: model.to_string(),
            },
        });
    }

    /// A `{placeholder}` in a server URL has no matching variable.
    pub fn log_missing_server_attribute(&mut self, url: &str, attribute: &str) {
        self.push(Violation::Generic {
            section: Section::ApiInfo,
            field: "server".to_string(),
            message: format!("server url {url} has missing attribute {{{attribute}}}"),
        });
    }

    pub fn log_invalid_server_url(&mut self, url: &str) {
        self.push(Violation::Generic {
            section: Section::ApiInfo,
            field: "server".to_string(),
            message: format!("Invalid server url format: {url}"),
        });
    }

    /// Everything logged so far, in logging order.
    #[must_use]
    pub fn violations(&self) -> &[Violation] {
        &self.violations
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.violations.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.violations.is_empty()
    }

    #[must_use]
    pub fn into_violations(self) -> Vec<Violation> {
        self.violations
    }

    fn push(&mut self, violation: Violation) {
        self.violations.push(violation);
    }
}
