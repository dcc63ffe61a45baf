//! Violation records produced by a style run.

use std::borrow::Cow;
use std::fmt;

use serde::{Deserialize, Serialize};

use super::naming::NamingConvention;
use crate::document::HttpMethod;

/// Part of the document a violation belongs to.
#[derive(Debug, Clone, Copy, Eq, PartialEq, Hash, Serialize, Deserialize)]
pub enum Section {
    #[serde(rename = "APIInfo")]
    ApiInfo,
    Naming,
    Operation,
    Model,
}

impl Section {
    pub const ALL: [Self; 4] = [Self::ApiInfo, Self::Operation, Self::Model, Self::Naming];

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::ApiInfo => "APIInfo",
            Self::Naming => "Naming",
            Self::Operation => "Operation",
            Self::Model => "Model",
        }
    }
}

impl fmt::Display for Section {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// What kind of identifier a naming violation is about.
#[derive(Debug, Clone, Copy, Eq, PartialEq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum IdentifierKind {
    Property,
    Parameter,
    Path,
    OperationId,
}

impl fmt::Display for IdentifierKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            Self::Property => "property",
            Self::Parameter => "parameter",
            Self::Path => "path",
            Self::OperationId => "operationId",
        };
        f.write_str(label)
    }
}

#[derive(Debug, Clone, Copy, Eq, PartialEq, Serialize, Deserialize)]
#[serde(tag = "issue", rename_all = "snake_case")]
pub enum NamingIssue {
    /// The name does not follow the expected convention.
    Convention { expected: NamingConvention },
    /// The name was already used earlier in the document.
    NotUnique,
}

#[derive(Debug, Clone, Eq, PartialEq, Serialize, Deserialize)]
#[serde(tag = "scope", rename_all = "snake_case")]
pub enum NamingLocation {
    /// `method` is `None` for path segments, which belong to the whole path item.
    Operation {
        path: String,
        method: Option<HttpMethod>,
    },
    Model { model: String },
}

/// A single style finding.
#[derive(Debug, Clone, Eq, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum Violation {
    /// Info- and server-level findings.
    Generic {
        section: Section,
        field: String,
        message: String,
    },
    Operation {
        field: String,
        message: String,
        path: String,
        method: HttpMethod,
    },
    Model {
        field: String,
        message: String,
        model: String,
        property: String,
    },
    Naming {
        subject: String,
        kind: IdentifierKind,
        issue: NamingIssue,
        location: NamingLocation,
    },
}

impl Violation {
    #[must_use]
    pub const fn section(&self) -> Section {
        match self {
            Self::Generic { section, .. } => *section,
            Self::Operation { .. } => Section::Operation,
            Self::Model { .. } => Section::Model,
            Self::Naming { .. } => Section::Naming,
        }
    }

    /// The attribute or identifier the violation is about.
    #[must_use]
    pub fn field(&self) -> &str {
        match self {
            Self::Generic { field, .. }
            | Self::Operation { field, .. }
            | Self::Model { field, .. } => field,
            Self::Naming { subject, .. } => subject,
        }
    }

    #[must_use]
    pub fn message(&self) -> Cow<'_, str> {
        match self {
            Self::Generic { message, .. }
            | Self::Operation { message, .. }
            | Self::Model { message, .. } => Cow::Borrowed(message),
            Self::Naming { kind, issue, .. } => match issue {
                NamingIssue::Convention { expected } => {
                    Cow::Owned(format!("{kind} should be in {expected}"))
                }
                NamingIssue::NotUnique => Cow::Owned(format!("{kind} should be UNIQUE")),
            },
        }
    }

    /// Rendered location suffix, if the variant carries one.
    #[must_use]
    pub fn location(&self) -> Option<String> {
        match self {
            Self::Generic { .. } => None,
            Self::Operation { path, method, .. } => Some(format!("path: {path}, method: {method}")),
            Self::Model { model, property, .. } => {
                Some(format!("model: {model}, property: {property}"))
            }
            Self::Naming { location, .. } => Some(match location {
                NamingLocation::Operation {
                    path,
                    method: Some(method),
                } => format!("path: {path}, method: {method}"),
                NamingLocation::Operation { path, method: None } => format!("path: {path}"),
                NamingLocation::Model { model } => format!("model: {model}"),
            }),
        }
    }
}

impl fmt::Display for Violation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}] {}: {}", self.section(), self.field(), self.message())?;
        if let Some(location) = self.location() {
            write!(f, " ({location})")?;
        }
        Ok(())
    }
}
