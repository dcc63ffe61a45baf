use proptest::prelude::*;

use oas_style::lint::{NamingConvention, is_compliant};

fn any_convention() -> impl Strategy<Value = NamingConvention> {
    prop::sample::select(NamingConvention::ALL.to_vec())
}

proptest! {
    #[test]
    fn test_classifier_deterministic(identifier in ".*", convention in any_convention()) {
        let first = is_compliant(&identifier, convention);
        let second = is_compliant(&identifier, convention);
        prop_assert_eq!(first, second);
    }

    #[test]
    fn test_camel_case_words_are_compliant(identifier in "[a-z][a-zA-Z0-9]{0,30}") {
        prop_assert!(is_compliant(&identifier, NamingConvention::CamelCase));
    }

    #[test]
    fn test_underscore_words_are_compliant(identifier in "[a-z][a-z0-9]{0,8}(_[a-z0-9]{1,8}){0,4}") {
        prop_assert!(is_compliant(&identifier, NamingConvention::UnderscoreCase));
        prop_assert!(is_compliant(&identifier.replace('_', "-"), NamingConvention::HyphenCase));
    }

    #[test]
    fn test_uppercase_start_never_compliant(identifier in "[A-Z][a-zA-Z0-9_-]{0,20}", convention in any_convention()) {
        prop_assert!(!is_compliant(&identifier, convention));
    }

    #[test]
    fn test_separators_excluded_from_camel_case(head in "[a-z]{1,8}", sep in "[-_ ./]", tail in "[a-z]{1,8}") {
        let identifier = format!("{head}{sep}{tail}");
        prop_assert!(!is_compliant(&identifier, NamingConvention::CamelCase));
    }
}

#[test]
fn test_empty_identifier_never_compliant() {
    for convention in NamingConvention::ALL {
        assert!(!is_compliant("", convention), "{convention}");
    }
}
