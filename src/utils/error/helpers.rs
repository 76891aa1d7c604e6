//! Helper functions for creating specific error types

use super::types::AuthzError;

/// Helper functions for creating specific errors
impl AuthzError {
    pub fn config<S: Into<String>>(message: S) -> Self {
        Self::Config(message.into())
    }

    pub fn invalid_role<S: Into<String>>(message: S) -> Self {
        Self::InvalidRole(message.into())
    }

    pub fn unknown_role<S: Into<String>>(message: S) -> Self {
        Self::UnknownRole(message.into())
    }

    pub fn inheritance_cycle<S: Into<String>>(message: S) -> Self {
        Self::InheritanceCycle(message.into())
    }
}
