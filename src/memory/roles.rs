//! Role registry
//!
//! Tracks which roles may be attached to messages. Seeded with the default
//! roles; custom roles can be added but never removed.

use crate::error::ChatError;
use crate::Result;
use std::collections::HashSet;

pub const SYSTEM: &str = "system";
pub const USER: &str = "user";
pub const ASSISTANT: &str = "assistant";

/// Roles every registry starts with
pub const DEFAULT_ROLES: &[&str] = &[SYSTEM, USER, ASSISTANT];

/// Set of roles allowed in a conversation
#[derive(Debug, Clone)]
pub struct RoleRegistry {
    roles: HashSet<String>,
}

impl RoleRegistry {
    pub fn new() -> Self {
        Self {
            roles: DEFAULT_ROLES.iter().map(|r| r.to_string()).collect(),
        }
    }

    pub fn is_default(role: &str) -> bool {
        DEFAULT_ROLES.contains(&role)
    }

    /// Register a custom role
    ///
    /// Returns `true` if the role was newly added, `false` if it was already
    /// registered. Default roles are rejected.
    pub fn register(&mut self, role: &str) -> Result<bool> {
        if Self::is_default(role) {
            return Err(ChatError::InvalidOperation(format!(
                "Role '{}' is already a default role and cannot be redefined.",
                role
            )));
        }

        Ok(self.roles.insert(role.to_string()))
    }

    pub fn contains(&self, role: &str) -> bool {
        self.roles.contains(role)
    }

    /// Sorted snapshot of all allowed roles
    pub fn roles(&self) -> Vec<String> {
        let mut roles: Vec<String> = self.roles.iter().cloned().collect();
        roles.sort();
        roles
    }

    /// Sorted snapshot of the registered non-default roles
    pub fn custom_roles(&self) -> Vec<String> {
        let mut roles: Vec<String> = self
            .roles
            .iter()
            .filter(|r| !Self::is_default(r))
            .cloned()
            .collect();
        roles.sort();
        roles
    }

    pub fn len(&self) -> usize {
        self.roles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.roles.is_empty()
    }
}

impl Default for RoleRegistry {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_roles_seeded() {
        let registry = RoleRegistry::new();
        assert_eq!(registry.len(), 3);
        assert!(registry.contains("system"));
        assert!(registry.contains("user"));
        assert!(registry.contains("assistant"));
        assert!(registry.custom_roles().is_empty());
    }

    #[test]
    fn test_register_default_role_rejected() {
        let mut registry = RoleRegistry::new();
        for role in DEFAULT_ROLES {
            let err = registry.register(role).unwrap_err();
            assert!(matches!(err, ChatError::InvalidOperation(_)));
        }
        assert_eq!(registry.len(), 3);
    }

    #[test]
    fn test_register_custom_role_is_idempotent() {
        let mut registry = RoleRegistry::new();
        assert!(registry.register("tool").unwrap());
        assert!(!registry.register("tool").unwrap());
        assert_eq!(registry.custom_roles(), vec!["tool".to_string()]);
        assert_eq!(
            registry.roles(),
            vec!["assistant", "system", "tool", "user"]
        );
    }

    #[test]
    fn test_role_lookup_is_case_sensitive() {
        let registry = RoleRegistry::new();
        assert!(!registry.contains("User"));
        assert!(!RoleRegistry::is_default("SYSTEM"));
    }
}
