//! Built-in validation passes.
//!
//! Passes run in a fixed order, and the order of their findings is part of
//! the result:
//!
//! - **Info** (`info`): license, description and contact on the `info` object
//! - **Servers** (`servers`): URL placeholders and URL syntax
//! - **Operations** (`operations`): required operation attributes, unique ids
//! - **Models** (`models`): examples on schema properties
//! - **Naming** (`naming`): property, parameter and path segment conventions
//!
//! # Usage
//!
//! ```
//! use oas_style::lint::rules::all_passes;
//!
//! let ids: Vec<&str> = all_passes().iter().map(|p| p.id()).collect();
//! assert_eq!(ids, ["info", "servers", "operations", "models", "naming"]);
//! ```

pub mod info;
pub mod models;
pub mod naming;
pub mod operations;
pub mod servers;

use crate::lint::rule::BoxedPass;

pub use info::InfoPass;
pub use models::ModelsPass;
pub use naming::NamingPass;
pub use operations::OperationsPass;
pub use servers::ServersPass;

/// Present and not empty.
pub(crate) fn has_text(value: Option<&str>) -> bool {
    value.is_some_and(|text| !text.is_empty())
}

/// Returns every built-in pass in execution order.
pub fn all_passes() -> Vec<BoxedPass> {
    vec![
        Box::new(InfoPass),
        Box::new(ServersPass),
        Box::new(OperationsPass),
        Box::new(ModelsPass),
        Box::new(NamingPass),
    ]
}
