//! Common test utilities shared across integration tests.

#![allow(dead_code)]

use std::path::PathBuf;

use oas_style::document::OpenApi;

/// Absolute path of a file under `tests/fixtures`.
pub fn fixture_path(relative: &str) -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("tests/fixtures")
        .join(relative)
}

/// Load a document from `tests/fixtures/specs`.
pub fn load_spec(name: &str) -> OpenApi {
    let path = fixture_path(&format!("specs/{name}"));
    OpenApi::from_path(&path)
        .unwrap_or_else(|err| panic!("failed to load {}: {err}", path.display()))
}
