use std::collections::{BTreeMap, HashSet};
use std::path::{Path, PathBuf};

use serde::Deserialize;
use tracing::debug;

use crate::error::{OasError, Result};
use crate::lint::naming::NamingConvention;
use crate::lint::{RuleToggle, ValidationConfig};

/// File name looked up in the project directory.
pub const PROJECT_CONFIG_FILE: &str = ".oas-style.toml";

/// Environment variable naming an explicit config file.
pub const CONFIG_ENV: &str = "OAS_STYLE_CONFIG";

#[derive(Debug, Clone, Default)]
pub struct Config {
    pub validation: ValidationConfig,
    /// Files that contributed to this config, in merge order.
    pub sources: Vec<PathBuf>,
}

impl Config {
    pub fn load(explicit_path: Option<&Path>, project_root: &Path) -> Result<Self> {
        Self::load_with_env(explicit_path, project_root, |key| std::env::var(key).ok())
    }

    /// Like [`Config::load`], reading environment variables through `env`.
    pub fn load_with_env<F>(explicit_path: Option<&Path>, project_root: &Path, env: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = Self::default();

        let explicit = explicit_path
            .map(PathBuf::from)
            .or_else(|| env(CONFIG_ENV).map(PathBuf::from));

        if let Some(path) = explicit {
            let patch = Self::load_patch(&path)?
                .ok_or_else(|| OasError::NotFound(format!("config file {}", path.display())))?;
            config.merge_patch(patch, &path)?;
        } else {
            if let Some(path) = Self::global_path() {
                if let Some(patch) = Self::load_patch(&path)? {
                    config.merge_patch(patch, &path)?;
                }
            }
            let path = project_root.join(PROJECT_CONFIG_FILE);
            if let Some(patch) = Self::load_patch(&path)? {
                config.merge_patch(patch, &path)?;
            }
        }

        config.apply_env_overrides(&env)?;
        debug!(sources = ?config.sources, "configuration loaded");

        Ok(config)
    }

    /// Parse a single TOML document on top of the defaults.
    pub fn from_toml_str(raw: &str) -> Result<Self> {
        let patch: ConfigPatch =
            toml::from_str(raw).map_err(|err| OasError::Config(format!("parse config: {err}")))?;
        let mut config = Self::default();
        config.apply_patch(patch)?;
        Ok(config)
    }

    fn global_path() -> Option<PathBuf> {
        dirs::config_dir().map(|dir| dir.join("oas-style/config.toml"))
    }

    fn load_patch(path: &Path) -> Result<Option<ConfigPatch>> {
        if !path.exists() {
            return Ok(None);
        }

        let raw = std::fs::read_to_string(path)
            .map_err(|err| OasError::Config(format!("read config {}: {err}", path.display())))?;
        let patch = toml::from_str(&raw)
            .map_err(|err| OasError::Config(format!("parse config {}: {err}", path.display())))?;
        Ok(Some(patch))
    }

    fn merge_patch(&mut self, patch: ConfigPatch, source: &Path) -> Result<()> {
        self.apply_patch(patch).map_err(|err| match err {
            OasError::Config(msg) => OasError::Config(format!("{}: {msg}", source.display())),
            other => other,
        })?;
        self.sources.push(source.to_path_buf());
        Ok(())
    }

    fn apply_patch(&mut self, patch: ConfigPatch) -> Result<()> {
        let validation = &mut self.validation;

        if let Some(rules) = patch.rules {
            for (key, enabled) in rules {
                validation.set(key.parse::<RuleToggle>()?, enabled);
            }
        }

        if let Some(naming) = patch.naming {
            if let Some(value) = naming.path {
                validation.path_naming_convention = parse_naming_convention(&value)?;
            }
            if let Some(value) = naming.parameter {
                validation.parameter_naming_convention = parse_naming_convention(&value)?;
            }
            if let Some(value) = naming.property {
                validation.property_naming_convention = parse_naming_convention(&value)?;
            }
            if let Some(ignore) = naming.ignore_header_x {
                validation.ignore_header_x_naming = ignore;
            }
        }

        if let Some(servers) = patch.servers {
            if let Some(values) = servers.additional_top_level_domains {
                validation.additional_top_level_domains =
                    merge_unique(values, &validation.additional_top_level_domains);
            }
        }

        Ok(())
    }

    fn apply_env_overrides<F>(&mut self, env: &F) -> Result<()>
    where
        F: Fn(&str) -> Option<String>,
    {
        let validation = &mut self.validation;

        for toggle in RuleToggle::ALL {
            if let Some(enabled) = env_bool(env, &toggle.env_key()) {
                validation.set(toggle, enabled);
            }
        }

        if let Some(value) = env("OAS_STYLE_PATH_NAMING") {
            validation.path_naming_convention = parse_naming_convention(&value)?;
        }
        if let Some(value) = env("OAS_STYLE_PARAMETER_NAMING") {
            validation.parameter_naming_convention = parse_naming_convention(&value)?;
        }
        if let Some(value) = env("OAS_STYLE_PROPERTY_NAMING") {
            validation.property_naming_convention = parse_naming_convention(&value)?;
        }

        if let Some(values) = env_list(env, "OAS_STYLE_ADDITIONAL_TLDS") {
            validation.additional_top_level_domains =
                merge_unique(values, &validation.additional_top_level_domains);
        }

        Ok(())
    }
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(deny_unknown_fields)]
struct ConfigPatch {
    pub rules: Option<BTreeMap<String, bool>>,
    pub naming: Option<NamingPatch>,
    pub servers: Option<ServersPatch>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(deny_unknown_fields)]
struct NamingPatch {
    pub path: Option<String>,
    pub parameter: Option<String>,
    pub property: Option<String>,
    pub ignore_header_x: Option<bool>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(deny_unknown_fields)]
struct ServersPatch {
    pub additional_top_level_domains: Option<Vec<String>>,
}

/// Accepts the convention designations and the legacy enum spellings.
pub fn parse_naming_convention(value: &str) -> Result<NamingConvention> {
    let value = value.trim();
    match value {
        "CamelCase" => Ok(NamingConvention::CamelCase),
        "UnderscoreCase" => Ok(NamingConvention::UnderscoreCase),
        "HyphenCase" => Ok(NamingConvention::HyphenCase),
        _ => value.parse::<NamingConvention>().map_err(|_| {
            OasError::Config(format!(
                "invalid naming convention {value} (expected camelCase|underscore_case|hyphen-case)"
            ))
        }),
    }
}

fn merge_unique(values: Vec<String>, existing: &[String]) -> Vec<String> {
    let mut seen = HashSet::new();
    let mut out = Vec::new();
    for value in existing.iter().cloned().chain(values) {
        if seen.insert(value.clone()) {
            out.push(value);
        }
    }
    out
}

fn env_bool<F>(env: &F, key: &str) -> Option<bool>
where
    F: Fn(&str) -> Option<String>,
{
    env(key).map(|value| matches!(value.to_lowercase().as_str(), "1" | "true" | "yes" | "on"))
}

fn env_list<F>(env: &F, key: &str) -> Option<Vec<String>>
where
    F: Fn(&str) -> Option<String>,
{
    env(key).map(|value| {
        value
            .split(',')
            .map(str::trim)
            .filter(|entry| !entry.is_empty())
            .map(ToString::to_string)
            .collect()
    })
}
