//! oas-style validate - Check an OpenAPI document against the style rules
//!
//! Supports human, JSON, SARIF and `JUnit` output. Any violation makes the
//! command fail so it can gate CI pipelines.

use std::fmt::Write as _;
use std::path::{Path, PathBuf};

use clap::{Args, ValueEnum};
use console::style;
use serde::Serialize;
use tracing::info;

use crate::app::AppContext;
use crate::cli::output::{HumanLayout, emit_human, emit_json};
use crate::config::parse_naming_convention;
use crate::document::OpenApi;
use crate::error::{OasError, Result};
use crate::lint::{
    NamingConvention, NamingIssue, RuleToggle, Section, ValidationConfig, Violation,
};

/// Output format for validation results
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum)]
pub enum ReportFormat {
    /// Human-readable output with colors
    #[default]
    Human,
    /// JSON format for programmatic consumption
    Json,
    /// SARIF format for code scanning integrations
    Sarif,
    /// `JUnit` XML format for CI systems
    Junit,
}

#[derive(Args, Debug)]
pub struct ValidateArgs {
    /// OpenAPI document to check (YAML or JSON)
    #[arg(value_name = "INPUT")]
    pub input: PathBuf,

    /// Output format
    #[arg(long, short, value_enum, default_value_t = ReportFormat::Human)]
    pub format: ReportFormat,

    /// Turn rules off (comma-separated, e.g. validateOperationTag,validate_naming)
    #[arg(long, value_delimiter = ',', value_name = "RULE")]
    pub disable: Vec<RuleToggle>,

    /// Turn rules on that the config file disabled (comma-separated)
    #[arg(long, value_delimiter = ',', value_name = "RULE")]
    pub enable: Vec<RuleToggle>,

    /// Convention for literal path segments
    #[arg(long, value_parser = parse_naming_convention, value_name = "CONVENTION")]
    pub path_naming: Option<NamingConvention>,

    /// Convention for parameter names
    #[arg(long, value_parser = parse_naming_convention, value_name = "CONVENTION")]
    pub parameter_naming: Option<NamingConvention>,

    /// Convention for schema property names
    #[arg(long, value_parser = parse_naming_convention, value_name = "CONVENTION")]
    pub property_naming: Option<NamingConvention>,

    /// Extra top-level domain accepted in server URLs (repeatable, comma-separated)
    #[arg(long = "additional-tld", value_delimiter = ',', value_name = "TLD")]
    pub additional_tlds: Vec<String>,
}

impl ValidateArgs {
    /// Layer the command-line flags over the loaded configuration.
    #[must_use]
    pub fn apply_to(&self, mut config: ValidationConfig) -> ValidationConfig {
        for toggle in &self.enable {
            config.set(*toggle, true);
        }
        for toggle in &self.disable {
            config.set(*toggle, false);
        }
        if let Some(convention) = self.path_naming {
            config.path_naming_convention = convention;
        }
        if let Some(convention) = self.parameter_naming {
            config.parameter_naming_convention = convention;
        }
        if let Some(convention) = self.property_naming {
            config.property_naming_convention = convention;
        }
        for tld in &self.additional_tlds {
            if !config.additional_top_level_domains.contains(tld) {
                config.additional_top_level_domains.push(tld.clone());
            }
        }
        config
    }
}

pub fn run(ctx: &AppContext, args: &ValidateArgs) -> Result<()> {
    let document = OpenApi::from_path(&args.input)?;
    let config = args.apply_to(ctx.config.validation.clone());
    let violations = ctx.validator.validate(&document, &config)?;

    info!(
        input = %args.input.display(),
        violations = violations.len(),
        "validation finished"
    );

    // Robot mode upgrades the default human report to JSON.
    let format = if ctx.robot_mode && args.format == ReportFormat::Human {
        ReportFormat::Json
    } else {
        args.format
    };

    match format {
        ReportFormat::Human => output_human(&args.input, &violations, &config),
        ReportFormat::Json => emit_json(&build_json_report(&args.input, &violations))?,
        ReportFormat::Sarif => emit_json(&build_sarif_report(ctx, &args.input, &violations))?,
        ReportFormat::Junit => println!("{}", build_junit_report(&args.input, &violations)),
    }

    if violations.is_empty() {
        Ok(())
    } else {
        Err(OasError::ValidationFailed(format!(
            "{} violation(s) found",
            violations.len()
        )))
    }
}

/// Id of the pass that reports this kind of violation.
#[must_use]
pub fn pass_id(violation: &Violation) -> &'static str {
    match violation {
        Violation::Generic { field, .. } if field == "server" => "servers",
        Violation::Generic { .. } => "info",
        Violation::Operation { .. }
        | Violation::Naming {
            issue: NamingIssue::NotUnique,
            ..
        } => "operations",
        Violation::Model { .. } => "models",
        Violation::Naming { .. } => "naming",
    }
}

fn output_human(input: &Path, violations: &[Violation], config: &ValidationConfig) {
    emit_human(build_human_report(input, violations, config));
}

/// Violations in result order, each tagged with its section, then a summary.
fn build_human_report(
    input: &Path,
    violations: &[Violation],
    config: &ValidationConfig,
) -> HumanLayout {
    let mut layout = HumanLayout::new();
    let path_str = input.display().to_string();

    if violations.is_empty() {
        layout.push_line(format!("{} {}", style("✓").green(), style(&path_str).dim()));
    } else {
        layout.push_line(format!("{} {}", style("✗").red(), style(&path_str).bold()));
        layout.blank();

        for violation in violations {
            let location = violation
                .location()
                .map(|loc| format!(" ({loc})"))
                .unwrap_or_default();
            layout.push_line(format!(
                "  {} {} {}{}",
                style(format!("[{}]", violation.section())).cyan(),
                style(violation.field()).yellow(),
                violation.message(),
                style(location).dim()
            ));
        }
    }
    layout.blank();

    layout.section("Summary");
    layout.kv("Document", &path_str);
    layout.kv("Violations", &violations.len().to_string());
    for section in Section::ALL {
        let count = violations.iter().filter(|v| v.section() == section).count();
        if count > 0 {
            layout.kv(&format!("  {section}"), &count.to_string());
        }
    }
    let disabled = config.disabled_toggles();
    if !disabled.is_empty() {
        let names: Vec<&str> = disabled.iter().map(|t| t.id()).collect();
        layout.kv("Disabled rules", &names.join(", "));
    }

    layout
}

fn build_json_report<'a>(input: &Path, violations: &'a [Violation]) -> JsonReport<'a> {
    JsonReport {
        path: input.display().to_string(),
        passed: violations.is_empty(),
        violations: violations
            .iter()
            .map(|v| JsonViolation {
                rule: pass_id(v),
                section: v.section(),
                field: v.field(),
                message: v.message().into_owned(),
                location: v.location(),
                detail: v,
            })
            .collect(),
        summary: JsonSummary {
            total: violations.len(),
            by_section: Section::ALL
                .into_iter()
                .map(|section| SectionCount {
                    section,
                    count: violations.iter().filter(|v| v.section() == section).count(),
                })
                .collect(),
        },
    }
}

fn build_sarif_report(ctx: &AppContext, input: &Path, violations: &[Violation]) -> SarifReport {
    let uri = input.display().to_string();

    SarifReport {
        schema: "https://json.schemastore.org/sarif-2.1.0.json".to_string(),
        version: "2.1.0".to_string(),
        runs: vec![SarifRun {
            tool: SarifTool {
                driver: SarifDriver {
                    name: "oas-style".to_string(),
                    version: env!("CARGO_PKG_VERSION").to_string(),
                    rules: ctx
                        .validator
                        .passes()
                        .iter()
                        .map(|p| SarifRule {
                            id: p.id().to_string(),
                            name: p.name().to_string(),
                            short_description: SarifMessage {
                                text: p.description().to_string(),
                            },
                            default_configuration: SarifConfiguration {
                                level: "warning".to_string(),
                            },
                        })
                        .collect(),
                },
            },
            results: violations
                .iter()
                .map(|v| SarifResult {
                    rule_id: pass_id(v).to_string(),
                    level: "warning".to_string(),
                    message: SarifMessage {
                        text: v.to_string(),
                    },
                    locations: vec![SarifLocation {
                        physical_location: SarifPhysicalLocation {
                            artifact_location: SarifArtifactLocation { uri: uri.clone() },
                        },
                        logical_locations: v
                            .location()
                            .map(|name| vec![SarifLogicalLocation { name }])
                            .unwrap_or_default(),
                    }],
                })
                .collect(),
        }],
    }
}

fn build_junit_report(input: &Path, violations: &[Violation]) -> String {
    let path_str = escape_xml(&input.display().to_string());
    let tests = violations.len().max(1);
    let failures = violations.len();

    let mut xml = String::new();
    xml.push_str("<?xml version=\"1.0\" encoding=\"UTF-8\"?>\n");
    let _ = writeln!(xml, "<testsuites tests=\"{tests}\" failures=\"{failures}\">");
    let _ = writeln!(
        xml,
        "  <testsuite name=\"{path_str}\" tests=\"{tests}\" failures=\"{failures}\">"
    );

    if violations.is_empty() {
        let _ = writeln!(xml, "    <testcase name=\"{path_str}\" classname=\"oas-style\"/>");
    }

    for violation in violations {
        let name = match violation.location() {
            Some(location) => format!("{}: {location}", violation.field()),
            None => violation.field().to_string(),
        };
        let message = escape_xml(&violation.message());
        let _ = writeln!(
            xml,
            "    <testcase name=\"{}\" classname=\"{}\">",
            escape_xml(&name),
            violation.section()
        );
        let _ = writeln!(
            xml,
            "      <failure message=\"{message}\" type=\"{}\">{message}</failure>",
            pass_id(violation)
        );
        xml.push_str("    </testcase>\n");
    }

    xml.push_str("  </testsuite>\n");
    xml.push_str("</testsuites>");
    xml
}

fn escape_xml(s: &str) -> String {
    s.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
        .replace('\'', "&apos;")
}

// JSON output types

#[derive(Serialize)]
struct JsonReport<'a> {
    path: String,
    passed: bool,
    violations: Vec<JsonViolation<'a>>,
    summary: JsonSummary,
}

#[derive(Serialize)]
struct JsonViolation<'a> {
    rule: &'static str,
    section: Section,
    field: &'a str,
    message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    location: Option<String>,
    detail: &'a Violation,
}

#[derive(Serialize)]
struct JsonSummary {
    total: usize,
    by_section: Vec<SectionCount>,
}

#[derive(Serialize)]
struct SectionCount {
    section: Section,
    count: usize,
}

// SARIF output types

#[derive(Serialize)]
struct SarifReport {
    #[serde(rename = "$schema")]
    schema: String,
    version: String,
    runs: Vec<SarifRun>,
}

#[derive(Serialize)]
struct SarifRun {
    tool: SarifTool,
    results: Vec<SarifResult>,
}

#[derive(Serialize)]
struct SarifTool {
    driver: SarifDriver,
}

#[derive(Serialize)]
struct SarifDriver {
    name: String,
    version: String,
    rules: Vec<SarifRule>,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct SarifRule {
    id: String,
    name: String,
    short_description: SarifMessage,
    default_configuration: SarifConfiguration,
}

#[derive(Serialize)]
struct SarifConfiguration {
    level: String,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct SarifResult {
    rule_id: String,
    level: String,
    message: SarifMessage,
    locations: Vec<SarifLocation>,
}

#[derive(Serialize)]
struct SarifMessage {
    text: String,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct SarifLocation {
    physical_location: SarifPhysicalLocation,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    logical_locations: Vec<SarifLogicalLocation>,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct SarifPhysicalLocation {
    artifact_location: SarifArtifactLocation,
}

#[derive(Serialize)]
struct SarifArtifactLocation {
    uri: String,
}

#[derive(Serialize)]
struct SarifLogicalLocation {
    name: String,
}
