//! Error types for the conversation store

use thiserror::Error;

/// Result type alias for conversation store operations
pub type Result<T> = std::result::Result<T, ChatError>;

#[derive(Error, Debug)]
pub enum ChatError {

    // =============================
    // Role Errors
    // =============================

    #[error("Invalid role: {role}. Allowed roles: {allowed:?}")]
    InvalidRole { role: String, allowed: Vec<String> },

    #[error("Role '{0}' is not registered. Use `register_role()` first.")]
    RoleNotRegistered(String),

    #[error("Invalid operation: {0}")]
    InvalidOperation(String),

    // =============================
    // Configuration
    // =============================

    #[error("Configuration error: {0}")]
    Config(String),

    // =============================
    // External Library Conversions
    // =============================

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

impl ChatError {
    /// True for the role-related failures raised by the add/register paths
    pub fn is_role_error(&self) -> bool {
        matches!(
            self,
            ChatError::InvalidRole { .. }
                | ChatError::RoleNotRegistered(_)
                | ChatError::InvalidOperation(_)
        )
    }
}
