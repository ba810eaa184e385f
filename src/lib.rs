//! Chrono Chat
//!
//! In-memory conversation history for chat-style model interactions:
//! - Role-tagged messages (system, user, assistant, plus registered custom roles)
//! - Bounded history with oldest-first eviction
//! - Export to the `{role, content}` format chat-completion APIs expect

pub mod config;
pub mod error;
pub mod memory;
pub mod telemetry;

pub use error::{ChatError, Result};

// Re-export common types
pub use config::StoreConfig;
pub use memory::{ApiMessage, ApiRole, ConversationStore, Message, MessageMetadata};
