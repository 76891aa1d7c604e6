//! Audit record shapes for grant lifecycle events
//!
//! The engine does not emit these yet. The types pin down the wire shape so
//! embedders can persist grant changes once an audit sink is wired in.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::types::{Module, RoleName};

/// What happened to a grant record
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum AuditEvent {
    /// A role was assigned
    RoleAssigned {
        /// Role that was assigned
        role: RoleName,
    },
    /// A role was removed
    RoleRemoved {
        /// Role that was removed
        role: RoleName,
    },
    /// A custom permission was granted
    CustomPermissionGranted {
        /// Id of the granted permission
        permission_id: String,
    },
    /// A custom permission was revoked
    CustomPermissionRevoked {
        /// Id of the revoked permission
        permission_id: String,
    },
    /// A restriction was added
    RestrictionAdded {
        /// Module the restriction covers
        module: Module,
        /// Restricted resource, `None` for the whole module
        resource: Option<String>,
    },
    /// A restriction was removed
    RestrictionRemoved {
        /// Module the restriction covered
        module: Module,
        /// Restricted resource, `None` for the whole module
        resource: Option<String>,
    },
    /// The record expiry was set or cleared
    ExpiryChanged {
        /// New expiry, `None` when cleared
        expires_at: Option<DateTime<Utc>>,
    },
}

/// One audit trail entry
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AuditRecord {
    /// Unique record id
    pub id: Uuid,
    /// When the event occurred
    pub occurred_at: DateTime<Utc>,
    /// User whose grants changed
    pub user_id: String,
    /// Tenant the change applies to
    pub tenant_id: String,
    /// Who made the change
    pub actor: String,
    /// What changed
    pub event: AuditEvent,
}

impl AuditRecord {
    /// Create a record stamped with a fresh id and the current time
    pub fn new(
        user_id: impl Into<String>,
        tenant_id: impl Into<String>,
        actor: impl Into<String>,
        event: AuditEvent,
    ) -> Self {
        Self {
            id: Uuid::new_v4(),
            occurred_at: Utc::now(),
            user_id: user_id.into(),
            tenant_id: tenant_id.into(),
            actor: actor.into(),
            event,
        }
    }
}
