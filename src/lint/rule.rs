//! Validation pass trait.

use crate::error::Result;

use super::config::{RuleToggle, ValidationConfig, ValidationContext};
use super::sink::ViolationSink;
use super::violation::Section;

/// One independent group of style rules run over a document.
///
/// Passes are stateless. Everything a pass needs comes in through the
/// `ValidationContext`, and everything it finds goes into the sink.
pub trait ValidationPass: Send + Sync {
    /// Unique identifier for this pass (e.g., "operations")
    fn id(&self) -> &'static str;

    /// Human-readable name
    fn name(&self) -> &'static str;

    /// What the pass checks
    fn description(&self) -> &'static str;

    /// Section most of this pass's violations land in
    fn section(&self) -> Section;

    /// Configuration switches that shape this pass
    fn toggles(&self) -> &'static [RuleToggle];

    /// Whether the pass has anything to do under `config`.
    fn is_enabled(&self, config: &ValidationConfig) -> bool {
        self.toggles().iter().any(|toggle| config.is_enabled(*toggle))
    }

    /// Run the pass, appending findings to `sink`.
    fn run(&self, ctx: &ValidationContext<'_>, sink: &mut ViolationSink) -> Result<()>;
}

/// A boxed validation pass for dynamic dispatch
pub type BoxedPass = Box<dyn ValidationPass>;
