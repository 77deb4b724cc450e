//! Application state for the billing API.
//!
//! This module defines the shared application state that is available
//! to all request handlers.

use std::sync::Arc;

use crate::config::ConfigLoader;

/// Shared application state.
///
/// Contains resources that are shared across all request handlers,
/// such as the loaded facility configuration.
#[derive(Clone)]
pub struct AppState {
    /// The loaded facility configuration.
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

    /// Returns the id of the facility being served.
    pub fn facility_id(&self) -> &str {
        &self.config.facility().id
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_app_state_is_clone() {
        // Verify AppState can be cloned (required for axum state)
        fn assert_clone<T: Clone>() {}
        assert_clone::<AppState>();
    }

    #[test]
    fn test_app_state_exposes_facility() {
        let state = AppState::new(ConfigLoader::load("./config/sunny_days").unwrap());
        assert_eq!(state.facility_id(), "sunny_days");
        let cloned = state.clone();
        assert_eq!(cloned.config().facility().name, state.config().facility().name);
    }
}
