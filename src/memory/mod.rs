//! Conversation Memory
//!
//! Role-tagged message history with a bounded window, a role registry,
//! and export to the chat-completion message format

pub mod api;
pub mod message;
pub mod roles;
pub mod store;

pub use api::{ApiMessage, ApiRole};
pub use message::{Message, MessageMetadata};
pub use roles::{RoleRegistry, DEFAULT_ROLES};
pub use store::ConversationStore;
