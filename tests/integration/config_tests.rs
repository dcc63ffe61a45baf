use std::collections::HashMap;

use oas_style::OasError;
use oas_style::config::{CONFIG_ENV, Config, PROJECT_CONFIG_FILE};
use oas_style::lint::NamingConvention;
use oas_style::test_utils::{TestCase, UnitTestFixture, run_table_tests};

use crate::common::fixture_path;

fn env_map(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> + use<> {
    let map: HashMap<String, String> = pairs
        .iter()
        .map(|(k, v)| ((*k).to_string(), (*v).to_string()))
        .collect();
    move |key| map.get(key).cloned()
}

#[test]
fn config_relaxed_fixture() {
    let path = fixture_path("configs/relaxed.toml");
    let fixture = UnitTestFixture::new();
    let config = Config::load_with_env(Some(&path), &fixture.data_path, env_map(&[])).unwrap();
    let v = &config.validation;

    assert!(!v.validate_info_contact);
    assert!(!v.validate_operation_tag);
    assert!(v.validate_info_license);
    assert_eq!(v.path_naming_convention, NamingConvention::CamelCase);
    assert_eq!(v.parameter_naming_convention, NamingConvention::UnderscoreCase);
    assert_eq!(v.property_naming_convention, NamingConvention::CamelCase);
    assert_eq!(v.additional_top_level_domains, vec!["corp"]);
    assert_eq!(config.sources, vec![path]);
}

#[test]
fn config_invalid_naming_fixture() {
    let path = fixture_path("configs/invalid-naming.toml");
    let fixture = UnitTestFixture::new();
    let err = Config::load_with_env(Some(&path), &fixture.data_path, env_map(&[])).unwrap_err();
    assert!(matches!(err, OasError::Config(_)));
    assert!(err.to_string().contains("PascalCase"));
}

#[test]
fn config_env_names_the_file() {
    let fixture = UnitTestFixture::new();
    let path = fixture_path("configs/relaxed.toml");
    let path_str = path.to_string_lossy().into_owned();
    let env = env_map(&[(CONFIG_ENV, path_str.as_str())]);

    let config = Config::load_with_env(None, &fixture.data_path, env).unwrap();
    assert!(!config.validation.validate_info_contact);
}

#[test]
fn config_project_file_is_picked_up() {
    let fixture = UnitTestFixture::new();
    let written = fixture.create_file(PROJECT_CONFIG_FILE, "[naming]\nproperty = \"UnderscoreCase\"\n");

    let config = Config::load_with_env(None, &fixture.data_path, env_map(&[])).unwrap();
    assert_eq!(
        config.validation.property_naming_convention,
        NamingConvention::UnderscoreCase
    );
    assert!(config.sources.contains(&written));
}

#[test]
fn config_env_booleans() -> Result<(), String> {
    let cases = vec![
        TestCase {
            name: "one",
            input: "1",
            expected: true,
            should_panic: false,
        },
        TestCase {
            name: "yes uppercase",
            input: "YES",
            expected: true,
            should_panic: false,
        },
        TestCase {
            name: "on",
            input: "on",
            expected: true,
            should_panic: false,
        },
        TestCase {
            name: "zero",
            input: "0",
            expected: false,
            should_panic: false,
        },
        TestCase {
            name: "anything else",
            input: "maybe",
            expected: false,
            should_panic: false,
        },
    ];

    run_table_tests(cases, |value| {
        let fixture = UnitTestFixture::new();
        let env = env_map(&[("OAS_STYLE_VALIDATE_OPERATION_SUMMARY", value)]);
        let config = Config::load_with_env(None, &fixture.data_path, env).expect("load config");
        config.validation.validate_operation_summary
    })
}
