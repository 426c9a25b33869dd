//! Application state for the Benefit Simulation Engine API.
//!
//! This module defines the shared application state that is available
//! to all request handlers.

use std::sync::Arc;

use tokio::sync::Mutex;

use crate::config::RulesConfig;
use crate::persistence::SimulationHistory;

/// Shared application state.
///
/// Holds the loaded rules and the simulation history. Writes to the history
/// are serialised by its mutex.
#[derive(Clone)]
pub struct AppState {
    /// The loaded benefit rules.
    rules: Arc<RulesConfig>,
    /// Simulations performed so far.
    history: Arc<Mutex<SimulationHistory>>,
}

impl AppState {
    /// Creates a new application state.
    pub fn new(rules: RulesConfig, history: SimulationHistory) -> Self {
        Self {
            rules: Arc::new(rules),
            history: Arc::new(Mutex::new(history)),
        }
    }

    /// Returns the loaded rules.
    pub fn rules(&self) -> &RulesConfig {
        &self.rules
    }

    /// Returns the shared history.
    pub fn history(&self) -> &Arc<Mutex<SimulationHistory>> {
        &self.history
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::new(RulesConfig::default(), SimulationHistory::in_memory())
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

    #[tokio::test]
    async fn test_clones_share_history() {
        let state = AppState::default();
        let clone = state.clone();

        assert!(Arc::ptr_eq(&state.history, &clone.history));
        assert!(clone.history().lock().await.is_empty());
    }
}
