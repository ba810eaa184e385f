//! Conversation history storage
//!
//! Keeps a bounded, role-checked window of messages and formats it for
//! chat-completion requests. Safe to share across threads behind an `Arc`.

use crate::config::StoreConfig;
use crate::error::ChatError;
use crate::memory::api::{ApiMessage, ApiRole};
use crate::memory::message::{Message, MessageMetadata};
use crate::memory::roles::{RoleRegistry, ASSISTANT, SYSTEM, USER};
use crate::Result;
use std::collections::VecDeque;
use std::sync::{PoisonError, RwLock, RwLockReadGuard, RwLockWriteGuard};
use tracing::{debug, info, warn, Span};

/// Bounded conversation history with a role registry
#[derive(Debug)]
pub struct ConversationStore {
    /// Messages in conversation order (VecDeque for cheap front eviction)
    messages: RwLock<VecDeque<Message>>,
    roles: RwLock<RoleRegistry>,
    max_history_size: usize,
    span: Span,
}

impl ConversationStore {
    /// Create a store with the default bound, optionally seeded with a system message
    pub fn new(system_message: Option<&str>) -> Self {
        let mut config = StoreConfig::default();
        config.system_message = system_message.map(str::to_string);
        Self::with_config(config)
    }

    /// Create a store holding at most `max_history_size` messages
    pub fn with_max_history_size(system_message: Option<&str>, max_history_size: usize) -> Self {
        let mut config = StoreConfig::default().with_max_history_size(max_history_size);
        config.system_message = system_message.map(str::to_string);
        Self::with_config(config)
    }

    pub fn with_config(config: StoreConfig) -> Self {
        let StoreConfig {
            max_history_size,
            system_message,
            span,
        } = config;

        let max_history_size = if max_history_size == 0 {
            warn!(parent: &span, "max_history_size must be positive, using 1");
            1
        } else {
            max_history_size
        };

        let store = Self {
            messages: RwLock::new(VecDeque::with_capacity(max_history_size.min(64))),
            roles: RwLock::new(RoleRegistry::new()),
            max_history_size,
            span,
        };

        if let Some(content) = system_message.filter(|s| !s.is_empty()) {
            store.push(Message::new(SYSTEM, content));
        }

        store
    }

    // =============================
    // Lock helpers
    // =============================

    fn read_messages(&self) -> RwLockReadGuard<'_, VecDeque<Message>> {
        self.messages.read().unwrap_or_else(PoisonError::into_inner)
    }

    fn write_messages(&self) -> RwLockWriteGuard<'_, VecDeque<Message>> {
        self.messages.write().unwrap_or_else(PoisonError::into_inner)
    }

    fn read_roles(&self) -> RwLockReadGuard<'_, RoleRegistry> {
        self.roles.read().unwrap_or_else(PoisonError::into_inner)
    }

    // =============================
    // Roles
    // =============================

    /// Register a custom role
    ///
    /// Default roles are rejected with `InvalidOperation`; registering an
    /// existing custom role again is a no-op.
    pub fn register_role(&self, role: &str) -> Result<()> {
        let added = self
            .roles
            .write()
            .unwrap_or_else(PoisonError::into_inner)
            .register(role)?;

        if added {
            debug!(parent: &self.span, role = %role, "Registered custom role");
        }

        Ok(())
    }

    pub fn is_role_allowed(&self, role: &str) -> bool {
        self.read_roles().contains(role)
    }

    /// Sorted snapshot of the allowed roles
    pub fn allowed_roles(&self) -> Vec<String> {
        self.read_roles().roles()
    }

    // =============================
    // Mutation
    // =============================

    /// Add a message, evicting the oldest one when the store is full
    pub fn add_message(&self, message: Message) -> Result<()> {
        {
            let roles = self.read_roles();
            if !roles.contains(message.role()) {
                return Err(ChatError::InvalidRole {
                    role: message.role().to_string(),
                    allowed: roles.roles(),
                });
            }
        }

        self.push(message);
        Ok(())
    }

    pub fn add_user_message(&self, content: impl Into<String>, metadata: MessageMetadata) -> Result<()> {
        self.add_message(Message::with_metadata(USER, content, metadata))
    }

    pub fn add_assistant_message(
        &self,
        content: impl Into<String>,
        metadata: MessageMetadata,
    ) -> Result<()> {
        self.add_message(Message::with_metadata(ASSISTANT, content, metadata))
    }

    /// Add a message under a previously registered role
    pub fn add_custom_message(
        &self,
        role: &str,
        content: impl Into<String>,
        metadata: MessageMetadata,
    ) -> Result<()> {
        if !self.is_role_allowed(role) {
            return Err(ChatError::RoleNotRegistered(role.to_string()));
        }

        self.add_message(Message::with_metadata(role, content, metadata))
    }

    /// Drop every message, optionally reseeding a system message
    ///
    /// Registered roles and the size bound are kept.
    pub fn reset(&self, system_message: Option<&str>) {
        let cleared = {
            let mut messages = self.write_messages();
            let cleared = messages.len();
            messages.clear();
            cleared
        };

        info!(parent: &self.span, cleared, "Conversation reset");

        if let Some(content) = system_message.filter(|s| !s.is_empty()) {
            self.push(Message::new(SYSTEM, content));
        }
    }

    /// Evict and append under a single write lock. Role must already be checked.
    fn push(&self, message: Message) {
        let message_id = message.message_id();
        let role = message.role().to_string();

        let (evicted, len) = {
            let mut messages = self.write_messages();
            let mut evicted = 0usize;
            while messages.len() >= self.max_history_size {
                messages.pop_front();
                evicted += 1;
            }
            messages.push_back(message);
            (evicted, messages.len())
        };

        info!(
            parent: &self.span,
            message_id = %message_id,
            role = %role,
            evicted,
            len,
            "Added message"
        );
    }

    // =============================
    // Reads
    // =============================

    pub fn get_last_message(&self) -> Option<Message> {
        self.read_messages().back().cloned()
    }

    /// Snapshot of the full history in conversation order
    pub fn get_messages(&self) -> Vec<Message> {
        self.read_messages().iter().cloned().collect()
    }

    /// The `count` most recent messages, oldest first
    pub fn recent_messages(&self, count: usize) -> Vec<Message> {
        let messages = self.read_messages();
        let skip = messages.len().saturating_sub(count);
        messages.iter().skip(skip).cloned().collect()
    }

    /// Format the history for a chat-completion request
    ///
    /// Non-system messages are exported in order with their effective role.
    /// The first system message is held aside and placed in front after
    /// `max_messages` truncation, so it never counts against the cap.
    pub fn get_messages_for_api(&self, max_messages: Option<usize>) -> Vec<ApiMessage> {
        let messages = self.read_messages();

        let mut system_message: Option<&Message> = None;
        let mut formatted = Vec::with_capacity(messages.len() + 1);

        for msg in messages.iter() {
            if msg.role() == SYSTEM {
                if system_message.is_none() {
                    system_message = Some(msg);
                }
                continue;
            }

            formatted.push(ApiMessage::new(ApiRole::effective(msg.role()), msg.content()));
        }

        if let Some(max) = max_messages {
            if formatted.len() > max {
                let excess = formatted.len() - max;
                formatted.drain(..excess);
            }
        }

        if let Some(system) = system_message {
            if !formatted.iter().any(|m| m.role == ApiRole::System) {
                formatted.insert(0, ApiMessage::new(ApiRole::System, system.content()));
            }
        }

        formatted
    }

    /// `get_messages_for_api` rendered as the JSON array a request body expects
    pub fn get_messages_for_api_json(&self, max_messages: Option<usize>) -> Result<serde_json::Value> {
        Ok(serde_json::to_value(self.get_messages_for_api(max_messages))?)
    }

    /// Get formatted conversation for context (useful for plain-text prompts)
    pub fn get_formatted_context(&self) -> String {
        let mut context = String::new();
        context.push_str("## Conversation History\n\n");

        for msg in self.read_messages().iter() {
            let speaker = msg.agent_name().unwrap_or_else(|| msg.role());
            context.push_str(&format!(
                "**{}**: {} ({})\n\n",
                speaker,
                msg.content(),
                msg.timestamp().format("%H:%M:%S")
            ));
        }

        context
    }

    pub fn len(&self) -> usize {
        self.read_messages().len()
    }

    pub fn is_empty(&self) -> bool {
        self.read_messages().is_empty()
    }

    pub fn max_history_size(&self) -> usize {
        self.max_history_size
    }
}

impl Default for ConversationStore {
    fn default() -> Self {
        Self::new(None)
    }
}
