//! Precomputed permission matrix for admin surfaces

use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, BTreeSet};

use super::catalog::RoleCatalog;
use super::types::{Module, RoleName};

/// Per-role view of the matrix
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RoleMatrixEntry {
    /// Human-readable display name
    pub display_name: String,
    /// Parent roles, as declared; their grants are resolved at check time
    /// and are not folded into `modules`
    pub inherit_from: Vec<String>,
    /// module -> resource -> actions, from the role's direct grants
    pub modules: BTreeMap<String, BTreeMap<String, BTreeSet<String>>>,
}

/// Direct permissions of every catalogue role, grouped for display
///
/// Built once from the catalogue and immutable afterwards, like the
/// catalogue itself. Keys are the stable string forms of the enums so the
/// matrix serializes to a plain nested map with deterministic ordering.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PermissionMatrix {
    /// role name -> matrix entry
    pub roles: BTreeMap<String, RoleMatrixEntry>,
}

impl PermissionMatrix {
    /// Build the matrix from a catalogue
    pub fn from_catalog(catalog: &RoleCatalog) -> Self {
        let mut roles = BTreeMap::new();

        for role in catalog.list_roles() {
            let mut modules: BTreeMap<String, BTreeMap<String, BTreeSet<String>>> =
                BTreeMap::new();
            for permission in &role.permissions {
                modules
                    .entry(permission.module.to_string())
                    .or_default()
                    .entry(permission.resource.clone())
                    .or_default()
                    .insert(permission.action.to_string());
            }

            roles.insert(
                role.name.to_string(),
                RoleMatrixEntry {
                    display_name: role.display_name.clone(),
                    inherit_from: role.inherit_from.iter().map(|r| r.to_string()).collect(),
                    modules,
                },
            );
        }

        Self { roles }
    }

    /// Matrix entry for one role
    pub fn role(&self, name: RoleName) -> Option<&RoleMatrixEntry> {
        self.roles.get(name.as_str())
    }

    /// Actions a role's direct grants allow on one resource
    pub fn actions_for(
        &self,
        name: RoleName,
        module: Module,
        resource: &str,
    ) -> Option<&BTreeSet<String>> {
        self.role(name)?
            .modules
            .get(module.to_string().as_str())?
            .get(resource)
    }
}
