//! Error types for the authorization engine

use thiserror::Error;

/// Result type alias for the authorization engine
pub type Result<T> = std::result::Result<T, AuthzError>;

/// Main error type for the authorization engine
///
/// Permission denials are not errors: `check_permission` reports them as
/// [`AccessDecision`](crate::authz::AccessDecision) values so that callers
/// handle denial as ordinary control flow. This enum covers configuration
/// and catalogue construction problems only.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum AuthzError {
    /// Configuration errors
    #[error("Configuration error: {0}")]
    Config(String),

    /// Role assignment naming a role absent from the catalogue
    #[error("Invalid role: {0}")]
    InvalidRole(String),

    /// Catalogue entry inheriting from a role that is not defined
    #[error("Unknown role: {0}")]
    UnknownRole(String),

    /// Cycle detected in the role inheritance graph
    #[error("Role inheritance cycle: {0}")]
    InheritanceCycle(String),
}
