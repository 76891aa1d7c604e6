//! Authorization engine configuration

use crate::authz::RoleName;
use serde::{Deserialize, Serialize};

/// Authorization configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AuthzConfig {
    /// Role assigned when a user is bootstrapped without an explicit role
    #[serde(default = "default_role")]
    pub default_role: RoleName,
    /// Roles treated as administrative by [`is_admin`](crate::AuthzEngine::is_admin)
    #[serde(default = "default_admin_roles")]
    pub admin_roles: Vec<RoleName>,
}

impl Default for AuthzConfig {
    fn default() -> Self {
        Self {
            default_role: default_role(),
            admin_roles: default_admin_roles(),
        }
    }
}

impl AuthzConfig {
    /// Merge configurations, preferring non-default values from `other`
    pub fn merge(mut self, other: Self) -> Self {
        if other.default_role != default_role() {
            self.default_role = other.default_role;
        }
        if other.admin_roles != default_admin_roles() {
            self.admin_roles = other.admin_roles;
        }
        self
    }

    /// Validate the configuration
    pub fn validate(&self) -> Result<(), String> {
        if self.admin_roles.is_empty() {
            return Err("At least one admin role must be configured".to_string());
        }
        if self.admin_roles.contains(&self.default_role) {
            return Err(format!(
                "Default role '{}' must not be an admin role",
                self.default_role
            ));
        }
        Ok(())
    }
}

fn default_role() -> RoleName {
    RoleName::Employee
}

fn default_admin_roles() -> Vec<RoleName> {
    vec![RoleName::Admin, RoleName::SuperAdmin]
}
