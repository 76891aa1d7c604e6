//! Test fixtures and data factories
//!
//! Provides factory methods for creating test data with sensible defaults.
//! All factories create real objects, not mocks.

use std::collections::HashMap;
use uuid::Uuid;
use workforce_authz::{AuthzEngine, RoleName};

/// A (user, tenant) pair under test
#[derive(Debug, Clone)]
pub struct TestSubject {
    pub user_id: String,
    pub tenant_id: String,
}

/// Factory for creating test subjects
pub struct SubjectFactory;

impl SubjectFactory {
    /// Create a subject with fresh user and tenant ids
    pub fn create() -> TestSubject {
        TestSubject {
            user_id: format!("user_{}", &Uuid::new_v4().to_string()[..8]),
            tenant_id: format!("tenant_{}", &Uuid::new_v4().to_string()[..8]),
        }
    }

    /// Create a subject in a specific tenant
    pub fn in_tenant(tenant_id: &str) -> TestSubject {
        TestSubject {
            user_id: format!("user_{}", &Uuid::new_v4().to_string()[..8]),
            tenant_id: tenant_id.to_string(),
        }
    }
}

/// Factory for creating engines
pub struct EngineFactory;

impl EngineFactory {
    /// Create an engine with the built-in catalogue and default config
    pub fn create() -> AuthzEngine {
        AuthzEngine::with_defaults()
    }

    /// Create an engine with the given roles already assigned to the subject
    pub fn with_roles(subject: &TestSubject, roles: &[RoleName]) -> AuthzEngine {
        let engine = Self::create();
        for role in roles {
            engine
                .assign_role(&subject.user_id, &subject.tenant_id, *role, "fixture")
                .unwrap();
        }
        engine
    }
}

/// Build a check context from key/value pairs
pub fn context(pairs: &[(&str, &str)]) -> HashMap<String, String> {
    pairs
        .iter()
        .map(|(key, value)| (key.to_string(), value.to_string()))
        .collect()
}
