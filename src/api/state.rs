//! Application state for the payroll engine API.
//!
//! This module defines the shared application state that is available
//! to all request handlers.

use std::sync::Arc;

use crate::config::EngineConfig;
use crate::payroll::PayrollProcessor;
use crate::reports::ReportEngine;
use crate::store::DataStore;

/// Shared application state.
///
/// Contains the engine collaborators shared across all request handlers:
/// the payroll processor, the report engine and the configuration.
#[derive(Clone)]
pub struct AppState {
    processor: Arc<PayrollProcessor>,
    reports: Arc<ReportEngine>,
    config: EngineConfig,
}

impl AppState {
    /// Creates application state over the given store and configuration.
    pub fn new(store: Arc<dyn DataStore>, config: EngineConfig) -> Self {
        Self {
            processor: Arc::new(PayrollProcessor::new(store.clone(), config.clone())),
            reports: Arc::new(ReportEngine::new(store, config.clone())),
            config,
        }
    }

    /// Returns the payroll processor.
    pub fn processor(&self) -> &PayrollProcessor {
        &self.processor
    }

    /// Returns the report engine.
    pub fn reports(&self) -> &ReportEngine {
        &self.reports
    }

    /// Returns the engine configuration.
    pub fn config(&self) -> &EngineConfig {
        &self.config
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::MemoryStore;

    #[test]
    fn test_app_state_is_clone() {
        // Verify AppState can be cloned (required for axum state)
        fn assert_clone<T: Clone>() {}
        assert_clone::<AppState>();
    }

    #[test]
    fn test_app_state_shares_config() {
        let state = AppState::new(Arc::new(MemoryStore::new()), EngineConfig::default());
        assert_eq!(state.config().top_earner_limit, 10);
    }
}
