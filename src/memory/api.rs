//! Chat-completion export types
//!
//! The shape a model endpoint expects: only `system`, `user` and `assistant`.

use crate::memory::roles::{ASSISTANT, SYSTEM};
use serde::{Deserialize, Serialize};
use std::fmt;

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum ApiRole {
    System,
    User,
    Assistant,
}

impl ApiRole {
    /// Role used when exporting a message
    ///
    /// `system` and `assistant` are kept; every other role, custom ones
    /// included, is sent as `user`.
    pub fn effective(role: &str) -> Self {
        match role {
            SYSTEM => ApiRole::System,
            ASSISTANT => ApiRole::Assistant,
            _ => ApiRole::User,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            ApiRole::System => "system",
            ApiRole::User => "user",
            ApiRole::Assistant => "assistant",
        }
    }
}

impl fmt::Display for ApiRole {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// One `{role, content}` entry of a chat-completion request
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ApiMessage {
    pub role: ApiRole,
    pub content: String,
}

impl ApiMessage {
    pub fn new(role: ApiRole, content: impl Into<String>) -> Self {
        Self {
            role,
            content: content.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_effective_role() {
        assert_eq!(ApiRole::effective("system"), ApiRole::System);
        assert_eq!(ApiRole::effective("assistant"), ApiRole::Assistant);
        assert_eq!(ApiRole::effective("user"), ApiRole::User);
        assert_eq!(ApiRole::effective("tool"), ApiRole::User);
        assert_eq!(ApiRole::effective("Assistant"), ApiRole::User);
    }

    #[test]
    fn test_api_message_serializes_lowercase() {
        let msg = ApiMessage::new(ApiRole::Assistant, "Hello!");
        let json = serde_json::to_string(&msg).unwrap();
        assert_eq!(json, r#"{"role":"assistant","content":"Hello!"}"#);
    }
}
