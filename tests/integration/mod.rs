//! Integration tests for workforce-authz
//!
//! These tests verify engine behavior through the public API,
//! without reaching into module internals.

pub mod concurrency_tests;
