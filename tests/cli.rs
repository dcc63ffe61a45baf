use assert_cmd::Command;
use predicates::prelude::*;
use serde_json::Value;
use tempfile::tempdir;

fn fixture(relative: &str) -> String {
    format!("{}/tests/fixtures/{relative}", env!("CARGO_MANIFEST_DIR"))
}

/// A command isolated from any config in the caller's environment.
fn oas_style() -> Command {
    let dir = tempdir().unwrap();
    let mut cmd = Command::cargo_bin("oas-style").unwrap();
    cmd.current_dir(dir.keep())
        .env_remove("OAS_STYLE_CONFIG")
        .env_remove("OAS_STYLE_ROBOT")
        .env("NO_COLOR", "1");
    cmd
}

#[test]
fn test_cli_help() {
    oas_style()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("Usage:"));
}

#[test]
fn test_cli_version() {
    oas_style()
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains(env!("CARGO_PKG_VERSION")));
}

#[test]
fn test_validate_clean_document() {
    oas_style()
        .args(["validate", &fixture("specs/petstore-clean.yaml")])
        .assert()
        .success()
        .stdout(predicate::str::contains("Violations"));
}

#[test]
fn test_validate_messy_document_fails() {
    oas_style()
        .args(["-q", "validate", &fixture("specs/petstore-messy.yaml")])
        .assert()
        .code(1)
        .stdout(predicate::str::contains("APIInfo"))
        .stdout(predicate::str::contains("getThing"))
        .stderr(predicate::str::contains("13 violation(s) found"));
}

#[test]
fn test_validate_json_report() {
    let output = oas_style()
        .args([
            "-q",
            "validate",
            &fixture("specs/petstore-messy.yaml"),
            "--format",
            "json",
        ])
        .output()
        .unwrap();
    assert_eq!(output.status.code(), Some(1));

    let json: Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(json["passed"], Value::Bool(false));
    assert_eq!(json["summary"]["total"], 13);
    assert_eq!(json["violations"][0]["section"], "APIInfo");
    assert_eq!(json["violations"][0]["field"], "license");
}

#[test]
fn test_robot_mode_keeps_stdout_parseable() {
    let output = oas_style()
        .args(["--robot", "-q", "validate", &fixture("specs/petstore-messy.yaml")])
        .output()
        .unwrap();
    assert_eq!(output.status.code(), Some(1));
    let json: Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(json["violations"].as_array().map(Vec::len), Some(13));
}

#[test]
fn test_disable_and_naming_flags() {
    let output = oas_style()
        .args([
            "-q",
            "validate",
            &fixture("specs/petstore-messy.yaml"),
            "--format",
            "json",
            "--disable",
            "validateInfoLicense,validate_info_description,validateInfoContact",
            "--path-naming",
            "camelCase",
        ])
        .output()
        .unwrap();
    let json: Value = serde_json::from_slice(&output.stdout).unwrap();
    // userAccounts becomes compliant, user-accounts does not.
    assert_eq!(json["summary"]["total"], 10);
    let fields: Vec<&str> = json["violations"]
        .as_array()
        .unwrap()
        .iter()
        .filter_map(|v| v["field"].as_str())
        .collect();
    assert!(fields.contains(&"user-accounts"));
    assert!(!fields.contains(&"userAccounts"));
}

#[test]
fn test_additional_tld_flag() {
    oas_style()
        .args(["-q", "validate", &fixture("specs/internal-tld.yaml")])
        .assert()
        .code(1);

    oas_style()
        .args([
            "-q",
            "validate",
            &fixture("specs/internal-tld.yaml"),
            "--additional-tld",
            "corp",
        ])
        .assert()
        .success();
}

#[test]
fn test_config_flag() {
    oas_style()
        .args([
            "-q",
            "--config",
            &fixture("configs/relaxed.toml"),
            "validate",
            &fixture("specs/internal-tld.yaml"),
        ])
        .assert()
        .success();
}

#[test]
fn test_project_config_file() {
    let dir = tempdir().unwrap();
    std::fs::write(
        dir.path().join(".oas-style.toml"),
        "[servers]\nadditional_top_level_domains = [\"corp\"]\n",
    )
    .unwrap();

    Command::cargo_bin("oas-style")
        .unwrap()
        .current_dir(dir.path())
        .env_remove("OAS_STYLE_CONFIG")
        .args(["-q", "validate", &fixture("specs/internal-tld.yaml")])
        .assert()
        .success();
}

#[test]
fn test_sarif_output() {
    let output = oas_style()
        .args([
            "-q",
            "validate",
            &fixture("specs/petstore-messy.yaml"),
            "--format",
            "sarif",
        ])
        .output()
        .unwrap();
    let json: Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(json["version"], "2.1.0");
    assert_eq!(json["runs"][0]["tool"]["driver"]["rules"].as_array().map(Vec::len), Some(5));
    assert_eq!(json["runs"][0]["results"][3]["ruleId"], "servers");
}

#[test]
fn test_junit_output() {
    oas_style()
        .args([
            "-q",
            "validate",
            &fixture("specs/petstore-messy.yaml"),
            "--format",
            "junit",
        ])
        .assert()
        .code(1)
        .stdout(predicate::str::starts_with("<?xml"))
        .stdout(predicate::str::contains("failures=\"13\""));
}

#[test]
fn test_missing_info_is_reported() {
    oas_style()
        .args(["-q", "validate", &fixture("specs/no-info.yaml")])
        .assert()
        .failure()
        .stderr(predicate::str::contains("invalid document"));
}

#[test]
fn test_missing_input_file() {
    oas_style()
        .args(["--robot", "-q", "validate", "does-not-exist.yaml"])
        .assert()
        .failure()
        .stdout(predicate::str::contains("\"code\":\"not_found\""));
}

#[test]
fn test_unknown_rule_is_a_usage_error() {
    oas_style()
        .args(["validate", &fixture("specs/petstore-clean.yaml"), "--disable", "validateAll"])
        .assert()
        .code(2)
        .stderr(predicate::str::contains("unknown rule"));
}

#[test]
fn test_rules_listing() {
    oas_style()
        .args(["rules"])
        .assert()
        .success()
        .stdout(predicate::str::contains("operations - Operations"))
        .stdout(predicate::str::contains("validateOperationOperationIdUnique"));

    let output = oas_style().args(["rules", "--format", "json"]).output().unwrap();
    let json: Value = serde_json::from_slice(&output.stdout).unwrap();
    let ids: Vec<&str> = json
        .as_array()
        .unwrap()
        .iter()
        .filter_map(|p| p["id"].as_str())
        .collect();
    assert_eq!(ids, vec!["info", "servers", "operations", "models", "naming"]);
}
