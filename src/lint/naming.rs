//! Naming-convention classifier.
//!
//! Each convention is a fixed ASCII shape:
//!
//! | convention        | pattern                              |
//! |-------------------|--------------------------------------|
//! | `camelCase`       | `^[a-z][a-zA-Z0-9]*$`                |
//! | `underscore_case` | `^[a-z][a-z0-9]*(_[a-z0-9]+)*$`      |
//! | `hyphen-case`     | `^[a-z][a-z0-9]*(-[a-z0-9]+)*$`      |
//!
//! No convention accepts an empty string, a leading digit, whitespace, or a
//! leading, trailing or doubled separator. The separated conventions are
//! lowercase only.

use std::fmt;
use std::str::FromStr;
use std::sync::LazyLock;

use regex::Regex;
use serde::{Deserialize, Serialize};

static CAMEL_CASE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[a-z][a-zA-Z0-9]*$").expect("valid regex"));
static UNDERSCORE_CASE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[a-z][a-z0-9]*(_[a-z0-9]+)*$").expect("valid regex"));
static HYPHEN_CASE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[a-z][a-z0-9]*(-[a-z0-9]+)*$").expect("valid regex"));

/// Identifier shape a name is expected to follow.
#[derive(Debug, Clone, Copy, Eq, PartialEq, Hash, Serialize, Deserialize)]
pub enum NamingConvention {
    #[serde(rename = "camelCase")]
    CamelCase,
    #[serde(rename = "underscore_case")]
    UnderscoreCase,
    #[serde(rename = "hyphen-case")]
    HyphenCase,
}

impl NamingConvention {
    pub const ALL: [Self; 3] = [Self::CamelCase, Self::UnderscoreCase, Self::HyphenCase];

    /// Name of the convention as it appears in reports and configuration.
    #[must_use]
    pub const fn designation(self) -> &'static str {
        match self {
            Self::CamelCase => "camelCase",
            Self::UnderscoreCase => "underscore_case",
            Self::HyphenCase => "hyphen-case",
        }
    }

    #[must_use]
    pub fn is_compliant(self, identifier: &str) -> bool {
        let pattern = match self {
            Self::CamelCase => &*CAMEL_CASE,
            Self::UnderscoreCase => &*UNDERSCORE_CASE,
            Self::HyphenCase => &*HYPHEN_CASE,
        };
        pattern.is_match(identifier)
    }
}

impl fmt::Display for NamingConvention {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.designation())
    }
}

impl FromStr for NamingConvention {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|convention| convention.designation() == s)
            .ok_or_else(|| {
                format!("unknown naming convention '{s}' (expected camelCase|underscore_case|hyphen-case)")
            })
    }
}

/// Is `identifier` shaped according to `convention`?
#[must_use]
pub fn is_compliant(identifier: &str, convention: NamingConvention) -> bool {
    convention.is_compliant(identifier)
}
