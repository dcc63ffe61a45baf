use proptest::prelude::*;

use oas_style::document::{Info, OpenApi, Server};
use oas_style::lint::{ValidationConfig, validate};

fn document_with_servers(urls: &[String]) -> OpenApi {
    OpenApi {
        info: Some(Info {
            description: Some("d".into()),
            license: Some(oas_style::document::License {
                name: Some("MIT".into()),
                url: None,
            }),
            contact: Some(oas_style::document::Contact {
                name: Some("Team".into()),
                ..Default::default()
            }),
            ..Info::default()
        }),
        servers: urls.iter().map(Server::new).collect(),
        ..OpenApi::default()
    }
}

proptest! {
    #[test]
    fn test_validate_never_panics_on_server_urls(urls in prop::collection::vec(".{0,40}", 0..6)) {
        let document = document_with_servers(&urls);
        let violations = validate(&document, &ValidationConfig::new()).unwrap();
        // Each server yields at most one violation per placeholder plus one format error.
        let bound: usize = urls.iter().map(|u| u.matches('{').count() + 1).sum();
        prop_assert!(violations.len() <= bound);
    }

    #[test]
    fn test_resolved_placeholder_matches_literal(host in "[a-z]{1,10}") {
        let literal = format!("https://{host}.example.com");
        let templated = Server::new("https://{sub}.example.com").with_variable("sub", host.as_str());

        let mut document = document_with_servers(&[literal]);
        let expected = validate(&document, &ValidationConfig::new()).unwrap();

        document.servers = vec![templated];
        let actual = validate(&document, &ValidationConfig::new()).unwrap();
        prop_assert_eq!(expected.len(), actual.len());
        prop_assert!(actual.is_empty());
    }
}
