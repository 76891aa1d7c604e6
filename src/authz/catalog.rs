//! Role catalogue storage and validation

use crate::utils::error::{AuthzError, Result};
use std::collections::{HashMap, HashSet};
use tracing::debug;

use super::defaults::default_roles;
use super::types::{Role, RoleName};

/// Immutable collection of role definitions
///
/// The catalogue is validated on construction: duplicate names, inheritance
/// references to undefined roles, and inheritance cycles are all rejected.
/// Once built it never changes, so the engine can share it freely across
/// threads.
#[derive(Debug, Clone)]
pub struct RoleCatalog {
    /// Role definitions keyed by name
    roles: HashMap<RoleName, Role>,
}

impl RoleCatalog {
    /// Create a catalogue with the built-in roles
    pub fn with_defaults() -> Self {
        let mut roles = HashMap::new();
        for role in default_roles() {
            roles.insert(role.name, role);
        }

        debug!("Initialized {} default roles", roles.len());
        Self { roles }
    }

    /// Create a catalogue from caller-supplied role definitions
    pub fn from_roles(definitions: Vec<Role>) -> Result<Self> {
        let mut roles: HashMap<RoleName, Role> = HashMap::new();
        for role in definitions {
            if roles.contains_key(&role.name) {
                return Err(AuthzError::config(format!(
                    "Duplicate role definition: {}",
                    role.name
                )));
            }
            roles.insert(role.name, role);
        }

        let catalog = Self { roles };
        catalog.validate_inheritance()?;

        debug!("Initialized {} roles", catalog.roles.len());
        Ok(catalog)
    }

    /// Look up a role definition by name
    pub fn role(&self, name: RoleName) -> Option<&Role> {
        self.roles.get(&name)
    }

    /// Whether the catalogue defines the role
    pub fn contains(&self, name: RoleName) -> bool {
        self.roles.contains_key(&name)
    }

    /// List all roles
    pub fn list_roles(&self) -> Vec<&Role> {
        self.roles.values().collect()
    }

    /// Number of roles in the catalogue
    pub fn len(&self) -> usize {
        self.roles.len()
    }

    /// Whether the catalogue is empty
    pub fn is_empty(&self) -> bool {
        self.roles.is_empty()
    }

    /// Reject undefined parents and inheritance cycles
    fn validate_inheritance(&self) -> Result<()> {
        for role in self.roles.values() {
            for parent in &role.inherit_from {
                if !self.roles.contains_key(parent) {
                    return Err(AuthzError::unknown_role(format!(
                        "{} (inherited by {})",
                        parent, role.name
                    )));
                }
            }
        }

        let mut visited = HashSet::new();
        for name in self.roles.keys() {
            let mut path = Vec::new();
            self.visit(*name, &mut visited, &mut path)?;
        }
        Ok(())
    }

    /// Depth-first walk of the inheritance graph
    ///
    /// `path` holds the chain currently being explored; revisiting a role on
    /// the active path is a cycle. Roles in `visited` have already been
    /// cleared and are skipped.
    fn visit(
        &self,
        name: RoleName,
        visited: &mut HashSet<RoleName>,
        path: &mut Vec<RoleName>,
    ) -> Result<()> {
        if visited.contains(&name) {
            return Ok(());
        }
        if path.contains(&name) {
            path.push(name);
            let chain = path
                .iter()
                .map(|role| role.as_str())
                .collect::<Vec<_>>()
                .join(" -> ");
            return Err(AuthzError::inheritance_cycle(chain));
        }

        path.push(name);
        if let Some(role) = self.roles.get(&name) {
            for parent in &role.inherit_from {
                self.visit(*parent, visited, path)?;
            }
        }
        path.pop();

        visited.insert(name);
        Ok(())
    }
}

impl Default for RoleCatalog {
    fn default() -> Self {
        Self::with_defaults()
    }
}
