//! Store configuration
//!
//! Defaults can be overridden from the environment (a `.env` file is honored).

use crate::error::ChatError;
use crate::Result;
use std::env;
use tracing::Span;

pub const DEFAULT_MAX_HISTORY_SIZE: usize = 1000;

pub const ENV_MAX_HISTORY: &str = "CHRONO_CHAT_MAX_HISTORY";
pub const ENV_SYSTEM_MESSAGE: &str = "CHRONO_CHAT_SYSTEM_MESSAGE";

/// Configuration for a conversation store
#[derive(Debug, Clone)]
pub struct StoreConfig {
    /// Maximum number of messages kept before the oldest is evicted
    pub max_history_size: usize,
    /// Optional system message seeded at construction
    pub system_message: Option<String>,
    /// Span every store log event is attached to
    pub span: Span,
}

impl Default for StoreConfig {
    fn default() -> Self {
        Self {
            max_history_size: DEFAULT_MAX_HISTORY_SIZE,
            system_message: None,
            span: tracing::info_span!("conversation_store"),
        }
    }
}

impl StoreConfig {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_max_history_size(mut self, max_history_size: usize) -> Self {
        self.max_history_size = max_history_size;
        self
    }

    pub fn with_system_message(mut self, system_message: impl Into<String>) -> Self {
        self.system_message = Some(system_message.into());
        self
    }

    pub fn with_span(mut self, span: Span) -> Self {
        self.span = span;
        self
    }

    /// Load configuration from `.env` and the process environment
    pub fn from_env() -> Result<Self> {
        dotenv::dotenv().ok();
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Build configuration from an arbitrary key lookup
    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = Self::default();

        if let Some(raw) = lookup(ENV_MAX_HISTORY) {
            let size: usize = raw.trim().parse().map_err(|e| {
                ChatError::Config(format!("{} must be a positive integer, got '{}': {}", ENV_MAX_HISTORY, raw, e))
            })?;

            if size == 0 {
                return Err(ChatError::Config(format!(
                    "{} must be a positive integer, got 0",
                    ENV_MAX_HISTORY
                )));
            }

            config.max_history_size = size;
        }

        if let Some(system_message) = lookup(ENV_SYSTEM_MESSAGE) {
            if !system_message.is_empty() {
                config.system_message = Some(system_message);
            }
        }

        Ok(config)
    }
}
