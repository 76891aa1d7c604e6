//! Common test utilities for workforce-authz
//!
//! This module provides shared test infrastructure for all tests:
//! - Test fixtures and data factories
//! - Custom assertions and helpers

pub mod fixtures;

// Re-export commonly used items
pub use assertions::AccessDecisionAssertions;
pub use fixtures::{EngineFactory, SubjectFactory, TestSubject, context};

/// Assert that a result is Ok and return the value
#[macro_export]
macro_rules! assert_ok {
    ($expr:expr) => {
        match $expr {
            Ok(v) => v,
            Err(e) => panic!("Expected Ok, got Err: {:?}", e),
        }
    };
}
