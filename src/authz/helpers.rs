//! Helper methods for permission matching

use std::collections::HashMap;

use super::types::{Action, Module, Permission};

pub(super) trait PermissionMatch {
    /// Whether the permission covers the target, honoring the resource wildcard
    fn matches_target(&self, module: Module, resource: &str, action: Action) -> bool;

    /// Whether the permission's conditions hold against the request context
    fn conditions_satisfied(&self, context: Option<&HashMap<String, String>>) -> bool;
}

impl PermissionMatch for Permission {
    /// Whether the permission covers the target, honoring the resource wildcard
    fn matches_target(&self, module: Module, resource: &str, action: Action) -> bool {
        self.module == module
            && self.action == action
            && (self.resource == resource || self.is_wildcard())
    }

    /// Whether the permission's conditions hold against the request context
    fn conditions_satisfied(&self, context: Option<&HashMap<String, String>>) -> bool {
        let conditions = match &self.conditions {
            Some(conditions) if !conditions.is_empty() => conditions,
            // No conditions (or an empty map) always passes
            _ => return true,
        };

        let Some(context) = context else {
            return false;
        };

        conditions
            .iter()
            .all(|(key, expected)| context.get(key) == Some(expected))
    }
}
