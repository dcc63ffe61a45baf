//! oas-style - OpenAPI style linter
//!
//! Checks OpenAPI 3 documents against documentation and naming rules that a
//! schema validator does not cover: required metadata, server URL templates,
//! operation attributes, property examples and identifier naming conventions.

pub mod app;
pub mod cli;
pub mod config;
pub mod document;
pub mod error;
pub mod lint;
pub mod test_utils;

pub use error::{OasError, Result};
