//! Utility modules for the authorization engine
//!
//! - **error**: Error handling and the crate-wide `Result` alias

pub mod error;

pub use error::{AuthzError, Result};
