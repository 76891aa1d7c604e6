//! Authorization engine core

use crate::config::AuthzConfig;
use crate::utils::error::{AuthzError, Result};
use dashmap::DashMap;
use std::sync::Arc;
use tracing::info;

use super::catalog::RoleCatalog;
use super::matrix::{PermissionMatrix, RoleMatrixEntry};
use super::types::{Role, RoleName, UserPermission};

/// Grant records are keyed by (user id, tenant id)
pub(super) type GrantKey = (String, String);

/// Multi-tenant authorization engine
///
/// Holds an immutable role catalogue and the per-user grant records. All
/// methods take `&self`: reads run lock-free and writes lock only the one
/// record they touch, so the engine can be shared behind an `Arc` across
/// request handlers.
#[derive(Debug)]
pub struct AuthzEngine {
    /// Engine configuration
    pub(super) config: AuthzConfig,
    /// Role definitions, immutable after construction
    pub(super) catalog: Arc<RoleCatalog>,
    /// Derived permission matrix, built once with the catalogue
    matrix: PermissionMatrix,
    /// Per (user, tenant) grant records
    pub(super) grants: DashMap<GrantKey, UserPermission>,
}

impl AuthzEngine {
    /// Create an engine from a configuration and a role catalogue
    ///
    /// Fails when the configuration is invalid or references roles the
    /// catalogue does not define.
    pub fn new(config: AuthzConfig, catalog: RoleCatalog) -> Result<Self> {
        info!("Initializing authorization engine");

        config.validate().map_err(AuthzError::config)?;

        if !catalog.contains(config.default_role) {
            return Err(AuthzError::unknown_role(format!(
                "default role {}",
                config.default_role
            )));
        }
        for role in &config.admin_roles {
            if !catalog.contains(*role) {
                return Err(AuthzError::unknown_role(format!("admin role {}", role)));
            }
        }

        info!(roles = catalog.len(), "Authorization engine initialized");
        let matrix = PermissionMatrix::from_catalog(&catalog);
        Ok(Self {
            config,
            catalog: Arc::new(catalog),
            matrix,
            grants: DashMap::new(),
        })
    }

    /// Create an engine with the default configuration and built-in roles
    pub fn with_defaults() -> Self {
        let catalog = RoleCatalog::with_defaults();
        let matrix = PermissionMatrix::from_catalog(&catalog);
        Self {
            config: AuthzConfig::default(),
            catalog: Arc::new(catalog),
            matrix,
            grants: DashMap::new(),
        }
    }

    /// Engine configuration
    pub fn config(&self) -> &AuthzConfig {
        &self.config
    }

    /// Role catalogue backing this engine
    pub fn catalog(&self) -> &RoleCatalog {
        &self.catalog
    }

    /// Look up a role definition by name
    pub fn role(&self, name: RoleName) -> Option<&Role> {
        self.catalog.role(name)
    }

    /// List all catalogue roles
    pub fn list_roles(&self) -> Vec<&Role> {
        self.catalog.list_roles()
    }

    /// Permission matrix over the whole catalogue
    pub fn permission_matrix(&self) -> &PermissionMatrix {
        &self.matrix
    }

    /// Matrix slice for one role: module -> resource -> actions
    pub fn role_permissions(&self, name: RoleName) -> Option<&RoleMatrixEntry> {
        self.matrix.role(name)
    }
}
