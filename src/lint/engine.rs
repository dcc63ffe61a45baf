//! Style validator that runs the passes against a document.

use serde::Serialize;
use tracing::debug;

use crate::document::OpenApi;
use crate::error::Result;

use super::config::{RuleToggle, ValidationConfig, ValidationContext};
use super::rule::BoxedPass;
use super::rules::all_passes;
use super::sink::ViolationSink;
use super::violation::{Section, Violation};

/// Runs an ordered list of passes over a document.
///
/// The validator holds no per-run state, so one instance can serve any
/// number of `validate` calls, including concurrent ones.
pub struct StyleValidator {
    passes: Vec<BoxedPass>,
}

impl StyleValidator {
    /// Create a validator with the built-in passes
    #[must_use]
    pub fn new() -> Self {
        Self {
            passes: all_passes(),
        }
    }

    /// Create a validator with no passes
    #[must_use]
    pub const fn empty() -> Self {
        Self { passes: Vec::new() }
    }

    /// Register a pass; it runs after those already registered
    pub fn register(&mut self, pass: BoxedPass) {
        self.passes.push(pass);
    }

    /// Register a pass (builder pattern)
    #[must_use]
    pub fn with_pass(mut self, pass: BoxedPass) -> Self {
        self.register(pass);
        self
    }

    /// Get registered passes
    #[must_use]
    pub fn passes(&self) -> &[BoxedPass] {
        &self.passes
    }

    /// Validate `document` under `config`.
    ///
    /// Style problems are returned as violations, never as errors. An error
    /// means the document is missing a section the passes rely on.
    pub fn validate(&self, document: &OpenApi, config: &ValidationConfig) -> Result<Vec<Violation>> {
        let ctx = ValidationContext::new(document, config)?;
        let mut sink = ViolationSink::new();

        for pass in &self.passes {
            if !pass.is_enabled(config) {
                debug!(pass = pass.id(), "pass disabled, skipping");
                continue;
            }

            let before = sink.len();
            pass.run(&ctx, &mut sink)?;
            debug!(pass = pass.id(), violations = sink.len() - before, "pass complete");
        }

        debug!(total = sink.len(), "validation complete");
        Ok(sink.into_violations())
    }

    /// List all registered passes
    #[must_use]
    pub fn list_passes(&self, config: &ValidationConfig) -> Vec<PassInfo> {
        self.passes
            .iter()
            .map(|p| PassInfo {
                id: p.id().to_string(),
                name: p.name().to_string(),
                description: p.description().to_string(),
                section: p.section(),
                toggles: p.toggles().to_vec(),
                enabled: p.is_enabled(config),
            })
            .collect()
    }
}

impl Default for StyleValidator {
    fn default() -> Self {
        Self::new()
    }
}

/// Information about a registered pass
#[derive(Debug, Clone, Serialize)]
pub struct PassInfo {
    pub id: String,
    pub name: String,
    pub description: String,
    pub section: Section,
    pub toggles: Vec<RuleToggle>,
    /// Whether the pass runs under the config it was listed with
    pub enabled: bool,
}

/// Validate with the built-in passes.
pub fn validate(document: &OpenApi, config: &ValidationConfig) -> Result<Vec<Violation>> {
    StyleValidator::new().validate(document, config)
}
