//! Validation configuration.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use super::naming::NamingConvention;
use crate::document::{Info, OpenApi};
use crate::error::{OasError, Result};

/// The independent boolean switches of a style run.
#[derive(Debug, Clone, Copy, Eq, PartialEq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum RuleToggle {
    ValidateInfoLicense,
    ValidateInfoDescription,
    ValidateInfoContact,
    ValidateServerInfo,
    ValidateOperationOperationId,
    ValidateOperationOperationIdUnique,
    ValidateOperationDescription,
    ValidateOperationTag,
    ValidateOperationSummary,
    ValidateModelPropertiesExample,
    /// Reserved: accepted and stored, no check is attached to it yet.
    ValidateModelNoLocalDef,
    ValidateNaming,
    IgnoreHeaderXNaming,
}

impl RuleToggle {
    pub const ALL: [Self; 13] = [
        Self::ValidateInfoLicense,
        Self::ValidateInfoDescription,
        Self::ValidateInfoContact,
        Self::ValidateServerInfo,
        Self::ValidateOperationOperationId,
        Self::ValidateOperationOperationIdUnique,
        Self::ValidateOperationDescription,
        Self::ValidateOperationTag,
        Self::ValidateOperationSummary,
        Self::ValidateModelPropertiesExample,
        Self::ValidateModelNoLocalDef,
        Self::ValidateNaming,
        Self::IgnoreHeaderXNaming,
    ];

    /// Property name used on the command line and in config files.
    #[must_use]
    pub const fn id(self) -> &'static str {
        match self {
            Self::ValidateInfoLicense => "validateInfoLicense",
            Self::ValidateInfoDescription => "validateInfoDescription",
            Self::ValidateInfoContact => "validateInfoContact",
            Self::ValidateServerInfo => "validateServerInfo",
            Self::ValidateOperationOperationId => "validateOperationOperationId",
            Self::ValidateOperationOperationIdUnique => "validateOperationOperationIdUnique",
            Self::ValidateOperationDescription => "validateOperationDescription",
            Self::ValidateOperationTag => "validateOperationTag",
            Self::ValidateOperationSummary => "validateOperationSummary",
            Self::ValidateModelPropertiesExample => "validateModelPropertiesExample",
            Self::ValidateModelNoLocalDef => "validateModelNoLocalDef",
            Self::ValidateNaming => "validateNaming",
            Self::IgnoreHeaderXNaming => "ignoreHeaderXNaming",
        }
    }

    /// `validateInfoLicense` -> `validate_info_license`
    #[must_use]
    pub fn snake_case(self) -> String {
        let mut out = String::with_capacity(self.id().len() + 8);
        for ch in self.id().chars() {
            if ch.is_ascii_uppercase() {
                out.push('_');
                out.push(ch.to_ascii_lowercase());
            } else {
                out.push(ch);
            }
        }
        out
    }

    /// Environment variable that overrides this toggle.
    #[must_use]
    pub fn env_key(self) -> String {
        format!("OAS_STYLE_{}", self.snake_case().to_ascii_uppercase())
    }
}

impl fmt::Display for RuleToggle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.id())
    }
}

impl FromStr for RuleToggle {
    type Err = OasError;

    /// Accepts the camelCase id or its snake_case spelling.
    fn from_str(s: &str) -> Result<Self> {
        let wanted = s.trim();
        Self::ALL
            .into_iter()
            .find(|toggle| toggle.id() == wanted || toggle.snake_case() == wanted)
            .ok_or_else(|| OasError::Config(format!("unknown rule '{wanted}'")))
    }
}

/// Configuration for a style run. Defaults enable every rule.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ValidationConfig {
    pub validate_info_license: bool,
    pub validate_info_description: bool,
    pub validate_info_contact: bool,
    pub validate_server_info: bool,
    pub validate_operation_operation_id: bool,
    pub validate_operation_operation_id_unique: bool,
    pub validate_operation_description: bool,
    pub validate_operation_tag: bool,
    pub validate_operation_summary: bool,
    pub validate_model_properties_example: bool,
    pub validate_model_no_local_def: bool,
    pub validate_naming: bool,
    pub ignore_header_x_naming: bool,
    pub path_naming_convention: NamingConvention,
    pub parameter_naming_convention: NamingConvention,
    pub property_naming_convention: NamingConvention,
    /// Extra top-level domains accepted in server URLs for this run.
    pub additional_top_level_domains: Vec<String>,
}

impl Default for ValidationConfig {
    fn default() -> Self {
        Self {
            validate_info_license: true,
            validate_info_description: true,
            validate_info_contact: true,
            validate_server_info: true,
            validate_operation_operation_id: true,
            validate_operation_operation_id_unique: true,
            validate_operation_description: true,
            validate_operation_tag: true,
            validate_operation_summary: true,
            validate_model_properties_example: true,
            validate_model_no_local_def: true,
            validate_naming: true,
            ignore_header_x_naming: true,
            path_naming_convention: NamingConvention::HyphenCase,
            parameter_naming_convention: NamingConvention::CamelCase,
            property_naming_convention: NamingConvention::CamelCase,
            additional_top_level_domains: Vec::new(),
        }
    }
}

impl ValidationConfig {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub const fn is_enabled(&self, toggle: RuleToggle) -> bool {
        match toggle {
            RuleToggle::ValidateInfoLicense => self.validate_info_license,
            RuleToggle::ValidateInfoDescription => self.validate_info_description,
            RuleToggle::ValidateInfoContact => self.validate_info_contact,
            RuleToggle::ValidateServerInfo => self.validate_server_info,
            RuleToggle::ValidateOperationOperationId => self.validate_operation_operation_id,
            RuleToggle::ValidateOperationOperationIdUnique => {
                self.validate_operation_operation_id_unique
            }
            RuleToggle::ValidateOperationDescription => self.validate_operation_description,
            RuleToggle::ValidateOperationTag => self.validate_operation_tag,
            RuleToggle::ValidateOperationSummary => self.validate_operation_summary,
            RuleToggle::ValidateModelPropertiesExample => self.validate_model_properties_example,
            RuleToggle::ValidateModelNoLocalDef => self.validate_model_no_local_def,
            RuleToggle::ValidateNaming => self.validate_naming,
            RuleToggle::IgnoreHeaderXNaming => self.ignore_header_x_naming,
        }
    }

    pub fn set(&mut self, toggle: RuleToggle, enabled: bool) {
        let slot = match toggle {
            RuleToggle::ValidateInfoLicense => &mut self.validate_info_license,
            RuleToggle::ValidateInfoDescription => &mut self.validate_info_description,
            RuleToggle::ValidateInfoContact => &mut self.validate_info_contact,
            RuleToggle::ValidateServerInfo => &mut self.validate_server_info,
            RuleToggle::ValidateOperationOperationId => &mut self.validate_operation_operation_id,
            RuleToggle::ValidateOperationOperationIdUnique => {
                &mut self.validate_operation_operation_id_unique
            }
            RuleToggle::ValidateOperationDescription => &mut self.validate_operation_description,
            RuleToggle::ValidateOperationTag => &mut self.validate_operation_tag,
            RuleToggle::ValidateOperationSummary => &mut self.validate_operation_summary,
            RuleToggle::ValidateModelPropertiesExample => {
                &mut self.validate_model_properties_example
            }
            RuleToggle::ValidateModelNoLocalDef => &mut self.validate_model_no_local_def,
            RuleToggle::ValidateNaming => &mut self.validate_naming,
            RuleToggle::IgnoreHeaderXNaming => &mut self.ignore_header_x_naming,
        };
        *slot = enabled;
    }

    /// Turn a toggle off
    #[must_use]
    pub fn disable(mut self, toggle: RuleToggle) -> Self {
        self.set(toggle, false);
        self
    }

    /// Turn a toggle on
    #[must_use]
    pub fn enable(mut self, toggle: RuleToggle) -> Self {
        self.set(toggle, true);
        self
    }

    #[must_use]
    pub const fn with_path_naming(mut self, convention: NamingConvention) -> Self {
        self.path_naming_convention = convention;
        self
    }

    #[must_use]
    pub const fn with_parameter_naming(mut self, convention: NamingConvention) -> Self {
        self.parameter_naming_convention = convention;
        self
    }

    #[must_use]
    pub const fn with_property_naming(mut self, convention: NamingConvention) -> Self {
        self.property_naming_convention = convention;
        self
    }

    pub fn with_additional_tld(mut self, tld: impl Into<String>) -> Self {
        self.additional_top_level_domains.push(tld.into());
        self
    }

    /// Toggles that are currently off.
    #[must_use]
    pub fn disabled_toggles(&self) -> Vec<RuleToggle> {
        RuleToggle::ALL
            .into_iter()
            .filter(|toggle| !self.is_enabled(*toggle))
            .collect()
    }
}

/// Context handed to every validation pass.
pub struct ValidationContext<'a> {
    /// The document being validated
    pub document: &'a OpenApi,

    /// The document's `info` object, checked to exist up front
    pub info: &'a Info,

    pub config: &'a ValidationConfig,
}

impl<'a> ValidationContext<'a> {
    /// Fails when the document lacks the sections the passes rely on.
    pub fn new(document: &'a OpenApi, config: &'a ValidationConfig) -> Result<Self> {
        let info = document.info.as_ref().ok_or_else(|| {
            OasError::InvalidDocument("document has no 'info' object".to_string())
        })?;

        Ok(Self {
            document,
            info,
            config,
        })
    }
}
