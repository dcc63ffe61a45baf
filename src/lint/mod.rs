//! Style linting for OpenAPI documents.
//!
//! This module provides the style rule engine, including:
//!
//! - `ValidationPass` trait for implementing a group of checks
//! - `StyleValidator` for running passes against a document
//! - `Violation` records collected through a per-run `ViolationSink`
//! - `ValidationConfig` for toggling rules and choosing naming conventions
//!
//! # Example
//!
//! ```
//! use oas_style::document::OpenApi;
//! use oas_style::lint::{StyleValidator, ValidationConfig};
//!
//! let document = OpenApi::from_yaml_str(
//!     "openapi: 3.0.3\ninfo:\n  title: Petstore\n  version: '1.0'\n",
//! )?;
//!
//! let violations = StyleValidator::new().validate(&document, &ValidationConfig::new())?;
//!
//! // license, description and contact are all missing
//! assert_eq!(violations.len(), 3);
//! for violation in &violations {
//!     eprintln!("{violation}");
//! }
//! # Ok::<(), oas_style::OasError>(())
//! ```

pub mod config;
pub mod engine;
pub mod naming;
pub mod rule;
pub mod rules;
pub mod sink;
pub mod tld;
pub mod url;
pub mod violation;

pub use config::{RuleToggle, ValidationConfig, ValidationContext};
pub use engine::{PassInfo, StyleValidator, validate};
pub use naming::{NamingConvention, is_compliant};
pub use rule::{BoxedPass, ValidationPass};
pub use rules::all_passes;
pub use sink::ViolationSink;
pub use violation::{IdentifierKind, NamingIssue, NamingLocation, Section, Violation};
