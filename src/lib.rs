//! # Workforce AuthZ
//!
//! Role-based authorization engine for multi-tenant HR, payroll, and CRM
//! platforms. Answers "may this user, in this tenant, perform this action on
//! this resource?" and manages the role-assignment lifecycle behind that
//! answer.
//!
//! ## Features
//!
//! - **Role catalogue**: built-in workforce roles with transitive inheritance
//!   (`hr_manager -> manager -> employee`), validated cycle-free at startup
//! - **Tenant scoping**: every grant record is keyed by (user, tenant); the
//!   same user can hold different roles in different tenants
//! - **Custom grants**: per-user permissions outside any role, plus explicit
//!   restrictions and record expiry
//! - **Conditions**: exact-match context requirements on any permission,
//!   evaluated at check time
//! - **Structured denials**: every deny carries a stable reason string;
//!   authorization failures are ordinary values, never errors
//! - **Thread-safe**: lock-free reads and per-record write locking, share the
//!   engine behind an `Arc`
//!
//! ## Quick Start
//!
//! ```rust
//! use workforce_authz::{Action, AuthzEngine, Module, RoleName};
//!
//! # fn main() -> workforce_authz::Result<()> {
//! let engine = AuthzEngine::with_defaults();
//! engine.assign_role("user-1", "acme", RoleName::PayrollManager, "admin-7")?;
//!
//! let decision = engine.check_permission(
//!     "user-1",
//!     "acme",
//!     Module::Payroll,
//!     "payroll_run",
//!     Action::Execute,
//!     None,
//! );
//! assert!(decision.allowed);
//!
//! // Same user, different tenant: no grants there
//! let decision = engine.check_permission(
//!     "user-1",
//!     "globex",
//!     Module::Payroll,
//!     "payroll_run",
//!     Action::Execute,
//!     None,
//! );
//! assert!(!decision.allowed);
//! # Ok(())
//! # }
//! ```

#![warn(clippy::all)]

// Public module exports
pub mod authz;
pub mod config;
pub mod utils;

// Re-export main types
pub use authz::{
    AccessDecision, Action, AuditEvent, AuditRecord, AuthzEngine, Module, Permission,
    PermissionMatrix, Restriction, Role, RoleCatalog, RoleMatrixEntry, RoleName, UserPermission,
    WILDCARD_RESOURCE, reasons,
};
pub use config::AuthzConfig;
pub use utils::error::{AuthzError, Result};

// Version information
/// Current version of the crate
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
/// Name of the crate
pub const NAME: &str = env!("CARGO_PKG_NAME");
