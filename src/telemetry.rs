//! Tracing subscriber setup
//!
//! The library never installs a subscriber itself; binaries call
//! [`init_tracing`] once at startup.

use tracing::Level;
use tracing_subscriber::EnvFilter;

/// Install a global fmt subscriber
///
/// `RUST_LOG` takes precedence over `default_level`. Returns `false` if a
/// subscriber was already installed.
pub fn init_tracing(default_level: Level) -> bool {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(default_level.as_str().to_lowercase()));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .try_init()
        .is_ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_init_tracing_twice() {
        init_tracing(Level::DEBUG);
        assert!(!init_tracing(Level::INFO));
    }
}
