//! Integration test suite entry point.

#[path = "../common/mod.rs"]
mod common;
mod config_tests;
mod engine_tests;
