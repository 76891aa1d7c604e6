//! Authorization type definitions

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Wildcard resource identifier, matching every resource within a module
pub const WILDCARD_RESOURCE: &str = "*";

/// Functional area of the platform, the first dimension of a permission key
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Module {
    /// Payroll runs, paystubs, off-cycle processing
    Payroll,
    /// Employee records and profiles
    Employees,
    /// Benefit plans and enrollments
    Benefits,
    /// Timesheets and time tracking
    TimeTracking,
    /// Compliance filings and audits
    Compliance,
    /// Reporting and analytics
    Reports,
    /// Tenant administration
    Admin,
    /// Platform-level system operations
    System,
}

impl std::fmt::Display for Module {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Module::Payroll => write!(f, "payroll"),
            Module::Employees => write!(f, "employees"),
            Module::Benefits => write!(f, "benefits"),
            Module::TimeTracking => write!(f, "time_tracking"),
            Module::Compliance => write!(f, "compliance"),
            Module::Reports => write!(f, "reports"),
            Module::Admin => write!(f, "admin"),
            Module::System => write!(f, "system"),
        }
    }
}

impl std::str::FromStr for Module {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "payroll" => Ok(Module::Payroll),
            "employees" => Ok(Module::Employees),
            "benefits" => Ok(Module::Benefits),
            "time_tracking" => Ok(Module::TimeTracking),
            "compliance" => Ok(Module::Compliance),
            "reports" => Ok(Module::Reports),
            "admin" => Ok(Module::Admin),
            "system" => Ok(Module::System),
            _ => Err(format!("Invalid module: {}", s)),
        }
    }
}

/// Operation being gated by a permission check
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Action {
    /// Create a new record
    Create,
    /// Read an existing record
    Read,
    /// Update an existing record
    Update,
    /// Delete a record
    Delete,
    /// Execute a process (payroll run, onboarding flow)
    Execute,
    /// Approve a pending item
    Approve,
    /// Reject a pending item
    Reject,
    /// Export data out of the platform
    Export,
    /// Import data into the platform
    Import,
}

impl std::fmt::Display for Action {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Action::Create => write!(f, "create"),
            Action::Read => write!(f, "read"),
            Action::Update => write!(f, "update"),
            Action::Delete => write!(f, "delete"),
            Action::Execute => write!(f, "execute"),
            Action::Approve => write!(f, "approve"),
            Action::Reject => write!(f, "reject"),
            Action::Export => write!(f, "export"),
            Action::Import => write!(f, "import"),
        }
    }
}

impl std::str::FromStr for Action {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "create" => Ok(Action::Create),
            "read" => Ok(Action::Read),
            "update" => Ok(Action::Update),
            "delete" => Ok(Action::Delete),
            "execute" => Ok(Action::Execute),
            "approve" => Ok(Action::Approve),
            "reject" => Ok(Action::Reject),
            "export" => Ok(Action::Export),
            "import" => Ok(Action::Import),
            _ => Err(format!("Invalid action: {}", s)),
        }
    }
}

/// Well-known role names
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RoleName {
    /// Platform super administrator, every check short-circuits to allow
    SuperAdmin,
    /// Tenant administrator
    Admin,
    /// Payroll operations manager
    PayrollManager,
    /// Human resources manager
    HrManager,
    /// People manager
    Manager,
    /// Regular employee
    Employee,
    /// Read-only access
    Viewer,
    /// External contractor
    Contractor,
}

impl RoleName {
    /// Stable string form, matching the serde representation
    pub fn as_str(&self) -> &'static str {
        match self {
            RoleName::SuperAdmin => "super_admin",
            RoleName::Admin => "admin",
            RoleName::PayrollManager => "payroll_manager",
            RoleName::HrManager => "hr_manager",
            RoleName::Manager => "manager",
            RoleName::Employee => "employee",
            RoleName::Viewer => "viewer",
            RoleName::Contractor => "contractor",
        }
    }
}

impl std::fmt::Display for RoleName {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl std::str::FromStr for RoleName {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "super_admin" => Ok(RoleName::SuperAdmin),
            "admin" => Ok(RoleName::Admin),
            "payroll_manager" => Ok(RoleName::PayrollManager),
            "hr_manager" => Ok(RoleName::HrManager),
            "manager" => Ok(RoleName::Manager),
            "employee" => Ok(RoleName::Employee),
            "viewer" => Ok(RoleName::Viewer),
            "contractor" => Ok(RoleName::Contractor),
            _ => Err(format!("Invalid role name: {}", s)),
        }
    }
}

/// An atomic grant: one action on one resource within one module
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Permission {
    /// Stable identifier for the grant (catalogue ids like `pm_payroll_execute`)
    pub id: String,
    /// Module the permission applies to
    pub module: Module,
    /// Resource within the module, or [`WILDCARD_RESOURCE`] for every resource
    pub resource: String,
    /// Action this permission allows
    pub action: Action,
    /// Context keys that must match exactly at check time; `None` and an
    /// empty map both mean the grant is unconditional
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub conditions: Option<HashMap<String, String>>,
}

impl Permission {
    /// Create an unconditional permission
    pub fn new(
        id: impl Into<String>,
        module: Module,
        resource: impl Into<String>,
        action: Action,
    ) -> Self {
        Self {
            id: id.into(),
            module,
            resource: resource.into(),
            action,
            conditions: None,
        }
    }

    /// Attach exact-match context conditions to the permission
    pub fn with_conditions<K, V, I>(mut self, conditions: I) -> Self
    where
        K: Into<String>,
        V: Into<String>,
        I: IntoIterator<Item = (K, V)>,
    {
        self.conditions = Some(
            conditions
                .into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        );
        self
    }

    /// Whether the permission applies to every resource in its module
    pub fn is_wildcard(&self) -> bool {
        self.resource == WILDCARD_RESOURCE
    }
}

/// A named, reusable bundle of permissions assignable to users
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Role {
    /// Role identifier
    pub id: String,
    /// Role name
    pub name: RoleName,
    /// Human-readable display name
    pub display_name: String,
    /// Role description
    pub description: String,
    /// Permissions granted directly by this role
    pub permissions: Vec<Permission>,
    /// Whether this is a built-in system role
    pub is_system_role: bool,
    /// Whether the role is scoped to a single tenant
    pub tenant_scoped: bool,
    /// Roles whose permissions are also granted, checked transitively
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub inherit_from: Vec<RoleName>,
}

/// An explicit denial entry narrowing a user's access within a module
///
/// Restrictions are consulted only after role and custom grants failed to
/// produce an allow: they refine the deny reason but cannot revoke access a
/// role has already granted.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Restriction {
    /// Module the restriction applies to
    pub module: Module,
    /// Specific resource, or `None` for the whole module
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub resource: Option<String>,
    /// Rationale recorded with the entry
    pub condition: String,
}

impl Restriction {
    /// Restrict every resource in a module
    pub fn for_module(module: Module, condition: impl Into<String>) -> Self {
        Self {
            module,
            resource: None,
            condition: condition.into(),
        }
    }

    /// Restrict one resource within a module
    pub fn for_resource(
        module: Module,
        resource: impl Into<String>,
        condition: impl Into<String>,
    ) -> Self {
        Self {
            module,
            resource: Some(resource.into()),
            condition: condition.into(),
        }
    }

    /// Whether the restriction covers the given module and resource
    pub fn covers(&self, module: Module, resource: &str) -> bool {
        self.module == module
            && self
                .resource
                .as_deref()
                .is_none_or(|restricted| restricted == resource)
    }
}

/// Per (user, tenant) assignment record
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UserPermission {
    /// User identifier, supplied by the hosting platform's auth system
    pub user_id: String,
    /// Tenant identifier
    pub tenant_id: String,
    /// Assigned roles, in assignment order; access is the union over them
    pub roles: Vec<RoleName>,
    /// Individual grants outside any role
    #[serde(default)]
    pub custom_permissions: Vec<Permission>,
    /// Explicit denial entries
    #[serde(default)]
    pub restrictions: Vec<Restriction>,
    /// When set and in the past, the whole record grants nothing
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub expires_at: Option<DateTime<Utc>>,
}

impl UserPermission {
    /// Create an empty record for a (user, tenant) pair
    pub fn new(user_id: impl Into<String>, tenant_id: impl Into<String>) -> Self {
        Self {
            user_id: user_id.into(),
            tenant_id: tenant_id.into(),
            roles: Vec::new(),
            custom_permissions: Vec::new(),
            restrictions: Vec::new(),
            expires_at: None,
        }
    }

    /// Direct membership test on the role set
    pub fn has_role(&self, role: RoleName) -> bool {
        self.roles.contains(&role)
    }

    /// Append a role if not already present; returns whether the set changed
    pub fn add_role(&mut self, role: RoleName) -> bool {
        if self.roles.contains(&role) {
            return false;
        }
        self.roles.push(role);
        true
    }

    /// Remove a role if present; returns whether the set changed
    pub fn remove_role(&mut self, role: RoleName) -> bool {
        if let Some(pos) = self.roles.iter().position(|&r| r == role) {
            self.roles.remove(pos);
            return true;
        }
        false
    }

    /// Whether the record has expired as of `now`
    pub fn is_expired_at(&self, now: DateTime<Utc>) -> bool {
        self.expires_at.is_some_and(|expires_at| expires_at <= now)
    }
}

/// Denial reasons returned by permission checks
///
/// The strings are stable: they are meant for logs and audit trails, never
/// for verbatim display to end users.
pub mod reasons {
    use super::{Action, Module, RoleName};

    /// No record exists for the (user, tenant) pair
    pub const NO_RECORD: &str = "User not found or no permissions assigned";
    /// The record's `expires_at` is in the past
    pub const EXPIRED: &str = "Permissions expired";
    /// A restriction entry covers the module/resource
    pub const RESTRICTED: &str = "Access restricted for this resource";
    /// Nothing granted the requested action
    pub const INSUFFICIENT: &str = "Insufficient permissions";
    /// A grant matched the request but its conditions failed
    pub const CONDITIONS_NOT_MET: &str = "Conditions not met";

    /// Role-specific denial for single-role checks
    pub fn role_lacks_permission(
        role: RoleName,
        action: Action,
        module: Module,
        resource: &str,
    ) -> String {
        format!(
            "Role {} does not have permission for {} on {}.{}",
            role, action, module, resource
        )
    }
}

/// Outcome of a permission check
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AccessDecision {
    /// Whether access is allowed
    pub allowed: bool,
    /// Denial reason, present only when access is denied
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub reason: Option<String>,
    /// Assigned role that granted access, if a role granted it
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub granted_by: Option<RoleName>,
    /// Identifier of the permission entry that matched
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub matched_permission: Option<String>,
}

impl AccessDecision {
    /// Allow, granted through an assigned role
    pub fn granted_by_role(role: RoleName, permission_id: impl Into<String>) -> Self {
        Self {
            allowed: true,
            reason: None,
            granted_by: Some(role),
            matched_permission: Some(permission_id.into()),
        }
    }

    /// Allow, granted through a custom per-user permission
    pub fn granted_by_custom(permission_id: impl Into<String>) -> Self {
        Self {
            allowed: true,
            reason: None,
            granted_by: None,
            matched_permission: Some(permission_id.into()),
        }
    }

    /// Unconditional allow with no matching permission entry (super admin)
    pub fn granted_unconditionally(role: RoleName) -> Self {
        Self {
            allowed: true,
            reason: None,
            granted_by: Some(role),
            matched_permission: None,
        }
    }

    /// Deny with a reason from the fixed set
    pub fn denied(reason: impl Into<String>) -> Self {
        Self {
            allowed: false,
            reason: Some(reason.into()),
            granted_by: None,
            matched_permission: None,
        }
    }
}
