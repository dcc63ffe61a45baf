use oas_style::OasError;
use oas_style::config::Config;
use oas_style::document::OpenApi;
use oas_style::lint::{
    IdentifierKind, NamingConvention, NamingIssue, NamingLocation, RuleToggle, Section,
    StyleValidator, ValidationConfig, Violation, validate,
};
use oas_style::test_utils::{TestCase, run_table_tests};

use crate::common::{fixture_path, load_spec};

fn fields(violations: &[Violation]) -> Vec<String> {
    violations.iter().map(|v| v.field().to_string()).collect()
}

#[test]
fn clean_petstore_has_no_violations() {
    let document = load_spec("petstore-clean.yaml");
    let violations = validate(&document, &ValidationConfig::new()).unwrap();
    assert!(violations.is_empty(), "unexpected: {violations:#?}");
}

#[test]
fn path_extensions_are_not_linted() {
    let document = OpenApi::from_yaml_str(
        r"
openapi: 3.0.3
info:
  title: Extensions
  version: '1'
  description: Paths object with vendor extensions
  license:
    name: MIT
  contact:
    name: API Team
paths:
  x-internal: true
  x-Legacy_Routes:
    get:
      summary: not an operation
  /pets:
    x-rate-limit: 100
    get:
      operationId: listPets
      summary: List pets
      description: Returns every pet
      tags: [pets]
",
    )
    .unwrap();

    assert_eq!(document.paths.len(), 1);
    let violations = validate(&document, &ValidationConfig::new()).unwrap();
    assert!(violations.is_empty(), "unexpected: {violations:#?}");
}

#[test]
fn messy_petstore_reports_in_pass_order() {
    let document = load_spec("petstore-messy.yaml");
    let violations = validate(&document, &ValidationConfig::new()).unwrap();

    assert_eq!(
        fields(&violations),
        vec![
            "license",
            "description",
            "contact",
            "server",
            "server",
            "getThing",
            "description",
            "summary",
            "tags",
            "example",
            "My_Prop",
            "account_id",
            "userAccounts",
        ]
    );

    let sections: Vec<Section> = violations.iter().map(Violation::section).collect();
    assert_eq!(&sections[..5], &[Section::ApiInfo; 5]);
    assert_eq!(sections[5], Section::Naming);
    assert_eq!(&sections[6..9], &[Section::Operation; 3]);
    assert_eq!(sections[9], Section::Model);
    assert_eq!(&sections[10..], &[Section::Naming; 3]);
}

#[test]
fn messy_petstore_details() {
    let document = load_spec("petstore-messy.yaml");
    let violations = validate(&document, &ValidationConfig::new()).unwrap();

    assert_eq!(
        violations[3].message(),
        "server url https://{region}.api.example.com has missing attribute {region}"
    );
    assert_eq!(
        violations[4].message(),
        "Invalid server url format: https://api.example.notatld"
    );
    assert_eq!(
        violations[5].location().as_deref(),
        Some("path: /user-accounts/{accountId}/items, method: POST")
    );
    assert_eq!(
        violations[12],
        Violation::Naming {
            subject: "userAccounts".into(),
            kind: IdentifierKind::Path,
            issue: NamingIssue::Convention {
                expected: NamingConvention::HyphenCase,
            },
            location: NamingLocation::Operation {
                path: "/userAccounts/{accountId}".into(),
                method: None,
            },
        }
    );
}

#[test]
fn relaxed_config_changes_the_findings() {
    let config = Config::from_toml_str(
        &std::fs::read_to_string(fixture_path("configs/relaxed.toml")).unwrap(),
    )
    .unwrap();
    let document = load_spec("petstore-messy.yaml");
    let violations = validate(&document, &config.validation).unwrap();

    assert_eq!(
        fields(&violations),
        vec![
            "license",
            "description",
            "server",
            "server",
            "getThing",
            "description",
            "summary",
            "example",
            "My_Prop",
            "user-accounts",
        ]
    );
}

#[test]
fn additional_tld_accepts_internal_server() {
    let document = load_spec("internal-tld.yaml");

    let violations = validate(&document, &ValidationConfig::new()).unwrap();
    assert_eq!(fields(&violations), vec!["server"]);

    let config = ValidationConfig::new().with_additional_tld(".corp");
    assert!(validate(&document, &config).unwrap().is_empty());

    // The override from the previous call does not leak into this one.
    let violations = validate(&document, &ValidationConfig::new()).unwrap();
    assert_eq!(violations.len(), 1);
}

#[test]
fn json_document_loads() {
    let document = load_spec("minimal.json");
    let violations = validate(&document, &ValidationConfig::new()).unwrap();
    assert_eq!(fields(&violations), vec!["license", "description", "contact"]);
}

#[test]
fn missing_info_is_a_precondition_failure() {
    let document = load_spec("no-info.yaml");
    let err = validate(&document, &ValidationConfig::new()).unwrap_err();
    assert!(matches!(err, OasError::InvalidDocument(_)));
}

#[test]
fn repeated_runs_are_equal_and_independent() {
    let document = load_spec("petstore-messy.yaml");
    let validator = StyleValidator::new();
    let config = ValidationConfig::new();

    let first = validator.validate(&document, &config).unwrap();
    let second = validator.validate(&document, &config).unwrap();
    assert_eq!(first, second);
    assert_eq!(first.len(), 13);
}

#[test]
fn disabling_one_toggle_removes_only_its_findings() -> Result<(), String> {
    let cases = vec![
        TestCase {
            name: "info license",
            input: RuleToggle::ValidateInfoLicense,
            expected: 12,
            should_panic: false,
        },
        TestCase {
            name: "server info",
            input: RuleToggle::ValidateServerInfo,
            expected: 11,
            should_panic: false,
        },
        TestCase {
            name: "operationId uniqueness",
            input: RuleToggle::ValidateOperationOperationIdUnique,
            expected: 12,
            should_panic: false,
        },
        TestCase {
            name: "operation tags",
            input: RuleToggle::ValidateOperationTag,
            expected: 12,
            should_panic: false,
        },
        TestCase {
            name: "model examples",
            input: RuleToggle::ValidateModelPropertiesExample,
            expected: 12,
            should_panic: false,
        },
        TestCase {
            name: "reserved local definitions toggle",
            input: RuleToggle::ValidateModelNoLocalDef,
            expected: 13,
            should_panic: false,
        },
        TestCase {
            name: "naming",
            input: RuleToggle::ValidateNaming,
            expected: 10,
            should_panic: false,
        },
        TestCase {
            name: "x-header exemption",
            input: RuleToggle::IgnoreHeaderXNaming,
            expected: 14,
            should_panic: false,
        },
    ];

    run_table_tests(cases, |toggle| {
        let document = load_spec("petstore-messy.yaml");
        let config = ValidationConfig::new().disable(toggle);
        validate(&document, &config).map(|v| v.len()).unwrap_or(usize::MAX)
    })
}
