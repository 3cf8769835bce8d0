//! Application state for the shift roster API.
//!
//! This module defines the shared application state that is available
//! to all request handlers.

use std::sync::Arc;

use crate::config::ConfigLoader;

/// Shared application state.
///
/// Holds the scheduler configuration. Each request builds its own
/// scheduler, so nothing mutable is shared between requests.
#[derive(Clone)]
pub struct AppState {
    /// The loaded scheduler configuration.
    config: Arc<ConfigLoader>,
}

impl AppState {
    /// Creates a new application state with the given configuration loader.
    pub fn new(config: ConfigLoader) -> Self {
        Self {
            config: Arc::new(config),
        }
    }

    /// Returns a reference to the configuration loader.
    pub fn config(&self) -> &ConfigLoader {
        &self.config
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_app_state_is_clone() {
        fn assert_clone<T: Clone>() {}
        assert_clone::<AppState>();
    }

    #[test]
    fn test_clones_share_configuration() {
        let state = AppState::new(ConfigLoader::default());
        let clone = state.clone();
        assert!(std::ptr::eq(state.config(), clone.config()));
    }
}
