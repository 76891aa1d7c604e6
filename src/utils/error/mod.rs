//! Error handling for the authorization engine
//!
//! This module defines all error types used throughout the crate.

mod helpers;
mod types;

// Re-export all public types
pub use types::{AuthzError, Result};
