//! Property test suite entry point.

mod classifier_tests;
mod engine_tests;
