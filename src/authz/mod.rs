//! Role-based authorization for multi-tenant workforce platforms
//!
//! This module provides the authorization engine: the role catalogue,
//! permission checks, and per-user grant management.

mod audit;
mod catalog;
mod checks;
mod defaults;
mod engine;
mod grants;
mod helpers;
mod matrix;
mod types;

// Re-export public types and structs
pub use audit::{AuditEvent, AuditRecord};
pub use catalog::RoleCatalog;
pub use engine::AuthzEngine;
pub use matrix::{PermissionMatrix, RoleMatrixEntry};
pub use types::{
    AccessDecision, Action, Module, Permission, Restriction, Role, RoleName, UserPermission,
    WILDCARD_RESOURCE, reasons,
};
