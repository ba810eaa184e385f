//! Conversation message type
//!
//! A single role-tagged turn with optional provenance metadata and a UTC timestamp

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Optional provenance attached to a message at creation time
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct MessageMetadata {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub agent_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub agent_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub model: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub vendor: Option<String>,
    /// Caller-supplied timestamp; `Utc::now()` is used when absent
    #[serde(skip_serializing_if = "Option::is_none")]
    pub timestamp: Option<DateTime<Utc>>,
}

impl MessageMetadata {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_agent(mut self, agent_id: impl Into<String>, agent_name: impl Into<String>) -> Self {
        self.agent_id = Some(agent_id.into());
        self.agent_name = Some(agent_name.into());
        self
    }

    pub fn with_agent_id(mut self, agent_id: impl Into<String>) -> Self {
        self.agent_id = Some(agent_id.into());
        self
    }

    pub fn with_agent_name(mut self, agent_name: impl Into<String>) -> Self {
        self.agent_name = Some(agent_name.into());
        self
    }

    pub fn with_model(mut self, model: impl Into<String>) -> Self {
        self.model = Some(model.into());
        self
    }

    pub fn with_vendor(mut self, vendor: impl Into<String>) -> Self {
        self.vendor = Some(vendor.into());
        self
    }

    pub fn with_timestamp(mut self, timestamp: DateTime<Utc>) -> Self {
        self.timestamp = Some(timestamp);
        self
    }
}

/// A single message in the conversation history
///
/// Fields are private; a message never changes after it is built.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Message {
    message_id: Uuid,
    role: String,
    content: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    agent_id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    agent_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    model: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    vendor: Option<String>,
    timestamp: DateTime<Utc>,
}

impl Message {
    /// Create a new message stamped with the current time
    pub fn new(role: impl Into<String>, content: impl Into<String>) -> Self {
        Self::with_metadata(role, content, MessageMetadata::default())
    }

    /// Create a message carrying provenance metadata
    pub fn with_metadata(
        role: impl Into<String>,
        content: impl Into<String>,
        metadata: MessageMetadata,
    ) -> Self {
        let MessageMetadata {
            agent_id,
            agent_name,
            model,
            vendor,
            timestamp,
        } = metadata;

        Self {
            message_id: Uuid::new_v4(),
            role: role.into(),
            content: content.into(),
            agent_id,
            agent_name,
            model,
            vendor,
            timestamp: timestamp.unwrap_or_else(Utc::now),
        }
    }

    pub fn message_id(&self) -> Uuid {
        self.message_id
    }

    pub fn role(&self) -> &str {
        &self.role
    }

    pub fn content(&self) -> &str {
        &self.content
    }

    pub fn agent_id(&self) -> Option<&str> {
        self.agent_id.as_deref()
    }

    pub fn agent_name(&self) -> Option<&str> {
        self.agent_name.as_deref()
    }

    pub fn model(&self) -> Option<&str> {
        self.model.as_deref()
    }

    pub fn vendor(&self) -> Option<&str> {
        self.vendor.as_deref()
    }

    pub fn timestamp(&self) -> DateTime<Utc> {
        self.timestamp
    }

    /// ISO-8601 rendering of the timestamp
    pub fn timestamp_rfc3339(&self) -> String {
        self.timestamp.to_rfc3339()
    }
}
