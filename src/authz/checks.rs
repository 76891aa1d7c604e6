//! Permission checking methods

use chrono::Utc;
use std::collections::HashMap;
use tracing::debug;

use super::engine::{AuthzEngine, GrantKey};
use super::helpers::PermissionMatch;
use super::types::{AccessDecision, Action, Module, RoleName, UserPermission, reasons};

/// Outcome of resolving a single role against a target
enum RoleResolution {
    /// The role allows the target; carries the matching grant id, or `None`
    /// for the unconditional super admin allow
    Allowed(Option<String>),
    /// A direct entry matched but its conditions failed
    ConditionsFailed,
    /// Neither the role nor its ancestors grant the target
    NoMatch,
}

impl AuthzEngine {
    /// Decide whether a user may perform an action on a resource
    ///
    /// Resolution order, first match wins: missing record, expiry, assigned
    /// roles in assignment order, custom permissions, restrictions, then a
    /// generic deny. The result carries the denial reason or the grant that
    /// allowed access. This operation never fails; denials are values.
    pub fn check_permission(
        &self,
        user_id: &str,
        tenant_id: &str,
        module: Module,
        resource: &str,
        action: Action,
        context: Option<&HashMap<String, String>>,
    ) -> AccessDecision {
        let key: GrantKey = (user_id.to_string(), tenant_id.to_string());
        let decision = match self.grants.get(&key) {
            Some(record) => self.evaluate_record(&record, module, resource, action, context),
            None => AccessDecision::denied(reasons::NO_RECORD),
        };

        debug!(
            "Permission check for user {} in tenant {}: {} {}.{} -> {}",
            user_id,
            tenant_id,
            action,
            module,
            resource,
            if decision.allowed { "allow" } else { "deny" }
        );
        decision
    }

    /// Steps of the resolution pipeline that need an existing record
    fn evaluate_record(
        &self,
        record: &UserPermission,
        module: Module,
        resource: &str,
        action: Action,
        context: Option<&HashMap<String, String>>,
    ) -> AccessDecision {
        // Expiry precedes role resolution, so it covers super admins too
        if record.is_expired_at(Utc::now()) {
            return AccessDecision::denied(reasons::EXPIRED);
        }

        for role in &record.roles {
            match self.resolve_role(*role, module, resource, action, context) {
                RoleResolution::Allowed(Some(permission_id)) => {
                    return AccessDecision::granted_by_role(*role, permission_id);
                }
                RoleResolution::Allowed(None) => {
                    return AccessDecision::granted_unconditionally(*role);
                }
                // A conditions failure on one role does not stop the scan;
                // a later role may still allow
                RoleResolution::ConditionsFailed | RoleResolution::NoMatch => {}
            }
        }

        if let Some(permission) = record
            .custom_permissions
            .iter()
            .find(|permission| permission.matches_target(module, resource, action))
        {
            // The first matching custom grant decides
            return if permission.conditions_satisfied(context) {
                AccessDecision::granted_by_custom(permission.id.clone())
            } else {
                AccessDecision::denied(reasons::CONDITIONS_NOT_MET)
            };
        }

        if record
            .restrictions
            .iter()
            .any(|restriction| restriction.covers(module, resource))
        {
            return AccessDecision::denied(reasons::RESTRICTED);
        }

        AccessDecision::denied(reasons::INSUFFICIENT)
    }

    /// Resolve one role against the target, walking inheritance
    ///
    /// A direct entry is terminal for the role: when it matches but its
    /// conditions fail, inheritance is not consulted. Ancestors are only
    /// searched when the role has no direct entry for the target, and the
    /// first inherited allow wins. The catalogue is validated acyclic at
    /// construction, so the recursion terminates.
    fn resolve_role(
        &self,
        role: RoleName,
        module: Module,
        resource: &str,
        action: Action,
        context: Option<&HashMap<String, String>>,
    ) -> RoleResolution {
        if role == RoleName::SuperAdmin {
            return RoleResolution::Allowed(None);
        }

        let Some(definition) = self.catalog.role(role) else {
            // A role missing from the catalogue never matches
            return RoleResolution::NoMatch;
        };

        if let Some(permission) = definition
            .permissions
            .iter()
            .find(|permission| permission.matches_target(module, resource, action))
        {
            return if permission.conditions_satisfied(context) {
                RoleResolution::Allowed(Some(permission.id.clone()))
            } else {
                RoleResolution::ConditionsFailed
            };
        }

        for parent in &definition.inherit_from {
            if let RoleResolution::Allowed(grant) =
                self.resolve_role(*parent, module, resource, action, context)
            {
                return RoleResolution::Allowed(grant);
            }
        }
        RoleResolution::NoMatch
    }

    /// Check a catalogue role directly, without a user record
    ///
    /// Same resolution as the per-role step of [`check_permission`], with a
    /// role-specific denial reason. Useful for previewing what a role can
    /// reach before assigning it.
    ///
    /// [`check_permission`]: AuthzEngine::check_permission
    pub fn check_role_permission(
        &self,
        role: RoleName,
        module: Module,
        resource: &str,
        action: Action,
        context: Option<&HashMap<String, String>>,
    ) -> AccessDecision {
        match self.resolve_role(role, module, resource, action, context) {
            RoleResolution::Allowed(Some(permission_id)) => {
                AccessDecision::granted_by_role(role, permission_id)
            }
            RoleResolution::Allowed(None) => AccessDecision::granted_unconditionally(role),
            RoleResolution::ConditionsFailed => {
                AccessDecision::denied(reasons::CONDITIONS_NOT_MET)
            }
            RoleResolution::NoMatch => AccessDecision::denied(reasons::role_lacks_permission(
                role, action, module, resource,
            )),
        }
    }

    /// Direct role membership test
    ///
    /// Narrower than [`check_permission`]: no inheritance and no expiry
    /// check, so a caller gating on `has_role` alone will keep honoring an
    /// expired record. Prefer `check_permission` for access decisions.
    ///
    /// [`check_permission`]: AuthzEngine::check_permission
    pub fn has_role(&self, user_id: &str, tenant_id: &str, role: RoleName) -> bool {
        let key: GrantKey = (user_id.to_string(), tenant_id.to_string());
        self.grants
            .get(&key)
            .is_some_and(|record| record.has_role(role))
    }

    /// Current role set for a (user, tenant) pair, in assignment order
    pub fn user_roles(&self, user_id: &str, tenant_id: &str) -> Vec<RoleName> {
        let key: GrantKey = (user_id.to_string(), tenant_id.to_string());
        self.grants
            .get(&key)
            .map(|record| record.roles.clone())
            .unwrap_or_default()
    }

    /// Snapshot of the full grant record, if one exists
    pub fn user_permission(&self, user_id: &str, tenant_id: &str) -> Option<UserPermission> {
        let key: GrantKey = (user_id.to_string(), tenant_id.to_string());
        self.grants.get(&key).map(|record| record.clone())
    }

    /// Whether the user holds any configured admin role
    ///
    /// Membership test like [`has_role`], so it is also expiry-blind.
    ///
    /// [`has_role`]: AuthzEngine::has_role
    pub fn is_admin(&self, user_id: &str, tenant_id: &str) -> bool {
        let key: GrantKey = (user_id.to_string(), tenant_id.to_string());
        self.grants.get(&key).is_some_and(|record| {
            record
                .roles
                .iter()
                .any(|role| self.config.admin_roles.contains(role))
        })
    }
}
