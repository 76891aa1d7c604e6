//! Grant management: role assignment, custom permissions, restrictions

use crate::utils::error::{AuthzError, Result};
use chrono::{DateTime, Utc};
use tracing::{debug, info};

use super::engine::{AuthzEngine, GrantKey};
use super::types::{Module, Permission, Restriction, RoleName, UserPermission};

impl AuthzEngine {
    /// Assign a role to a user within a tenant
    ///
    /// Creates the grant record if none exists. Assigning a role the user
    /// already holds is a no-op. Fails when the catalogue does not define
    /// the role.
    pub fn assign_role(
        &self,
        user_id: &str,
        tenant_id: &str,
        role: RoleName,
        assigned_by: &str,
    ) -> Result<()> {
        if !self.catalog.contains(role) {
            return Err(AuthzError::invalid_role(role.to_string()));
        }

        let added = self.with_record(user_id, tenant_id, |record| record.add_role(role));
        if added {
            info!(
                "Assigned role {} to user {} in tenant {} (assigned by {})",
                role, user_id, tenant_id, assigned_by
            );
        }
        Ok(())
    }

    /// Assign the configured default role
    ///
    /// The default role is validated against the catalogue when the engine
    /// is built, so this cannot fail. Returns the role that was assigned.
    pub fn assign_default_role(&self, user_id: &str, tenant_id: &str) -> RoleName {
        let role = self.config.default_role;
        let added = self.with_record(user_id, tenant_id, |record| record.add_role(role));
        if added {
            info!(
                "Assigned default role {} to user {} in tenant {}",
                role, user_id, tenant_id
            );
        }
        role
    }

    /// Remove a role from a user within a tenant
    ///
    /// Removing a role the user does not hold, or from a user with no
    /// record, is a silent no-op. Returns whether the role set changed.
    pub fn remove_role(&self, user_id: &str, tenant_id: &str, role: RoleName) -> bool {
        let key: GrantKey = (user_id.to_string(), tenant_id.to_string());
        let Some(mut record) = self.grants.get_mut(&key) else {
            return false;
        };

        let removed = record.remove_role(role);
        if removed {
            debug!(
                "Removed role {} from user {} in tenant {}",
                role, user_id, tenant_id
            );
        }
        removed
    }

    /// Grant an individual permission outside any role
    ///
    /// Creates the grant record if none exists. A custom grant with the
    /// same id replaces the previous one.
    pub fn grant_custom_permission(&self, user_id: &str, tenant_id: &str, permission: Permission) {
        let permission_id = permission.id.clone();
        self.with_record(user_id, tenant_id, |record| {
            match record
                .custom_permissions
                .iter()
                .position(|existing| existing.id == permission.id)
            {
                Some(pos) => record.custom_permissions[pos] = permission,
                None => record.custom_permissions.push(permission),
            }
        });

        info!(
            "Granted custom permission {} to user {} in tenant {}",
            permission_id, user_id, tenant_id
        );
    }

    /// Revoke a custom permission by id
    ///
    /// Returns whether a grant was removed. Unknown ids and missing records
    /// are silent no-ops.
    pub fn revoke_custom_permission(
        &self,
        user_id: &str,
        tenant_id: &str,
        permission_id: &str,
    ) -> bool {
        let key: GrantKey = (user_id.to_string(), tenant_id.to_string());
        let Some(mut record) = self.grants.get_mut(&key) else {
            return false;
        };

        let before = record.custom_permissions.len();
        record
            .custom_permissions
            .retain(|permission| permission.id != permission_id);
        let removed = record.custom_permissions.len() < before;
        if removed {
            debug!(
                "Revoked custom permission {} from user {} in tenant {}",
                permission_id, user_id, tenant_id
            );
        }
        removed
    }

    /// Add a restriction entry to a user's record
    ///
    /// Creates the grant record if none exists. Exact duplicates are
    /// ignored.
    pub fn add_restriction(&self, user_id: &str, tenant_id: &str, restriction: Restriction) {
        let module = restriction.module;
        let added = self.with_record(user_id, tenant_id, |record| {
            if record.restrictions.contains(&restriction) {
                return false;
            }
            record.restrictions.push(restriction);
            true
        });

        if added {
            info!(
                "Added restriction on {} for user {} in tenant {}",
                module, user_id, tenant_id
            );
        }
    }

    /// Remove restriction entries covering a module (and optional resource)
    ///
    /// With `resource: None` every restriction on the module is removed;
    /// with a resource only entries pinned to that resource are. Returns
    /// whether anything was removed.
    pub fn remove_restriction(
        &self,
        user_id: &str,
        tenant_id: &str,
        module: Module,
        resource: Option<&str>,
    ) -> bool {
        let key: GrantKey = (user_id.to_string(), tenant_id.to_string());
        let Some(mut record) = self.grants.get_mut(&key) else {
            return false;
        };

        let before = record.restrictions.len();
        record.restrictions.retain(|restriction| {
            !(restriction.module == module
                && match resource {
                    Some(resource) => restriction.resource.as_deref() == Some(resource),
                    None => true,
                })
        });
        let removed = record.restrictions.len() < before;
        if removed {
            debug!(
                "Removed restrictions on {} for user {} in tenant {}",
                module, user_id, tenant_id
            );
        }
        removed
    }

    /// Set or clear the expiry on a user's record
    ///
    /// Creates the grant record if none exists, so an expiry can be staged
    /// before roles are assigned.
    pub fn set_expiry(&self, user_id: &str, tenant_id: &str, expires_at: Option<DateTime<Utc>>) {
        self.with_record(user_id, tenant_id, |record| {
            record.expires_at = expires_at;
        });

        match expires_at {
            Some(expires_at) => info!(
                "Set expiry {} for user {} in tenant {}",
                expires_at, user_id, tenant_id
            ),
            None => info!("Cleared expiry for user {} in tenant {}", user_id, tenant_id),
        }
    }

    /// Run a closure against the user's record, creating it if absent
    ///
    /// The record stays locked for the duration of the closure, so
    /// concurrent mutations of the same record serialize.
    fn with_record<R>(
        &self,
        user_id: &str,
        tenant_id: &str,
        apply: impl FnOnce(&mut UserPermission) -> R,
    ) -> R {
        let key: GrantKey = (user_id.to_string(), tenant_id.to_string());
        let mut record = self
            .grants
            .entry(key)
            .or_insert_with(|| UserPermission::new(user_id, tenant_id));
        apply(record.value_mut())
    }
}
