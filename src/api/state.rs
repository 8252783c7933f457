//! Application state for the mileage ledger API.

use std::sync::Arc;

use crate::config::ConfigLoader;
use crate::rates::RateTable;

/// Shared application state.
///
/// The rate table is immutable, so handlers read it without locking.
#[derive(Clone)]
pub struct AppState {
    rates: Arc<RateTable>,
}

impl AppState {
    /// Creates a new application state around a rate table.
    pub fn new(rates: RateTable) -> Self {
        Self {
            rates: Arc::new(rates),
        }
    }

    /// Creates application state from loaded configuration.
    pub fn from_config(config: ConfigLoader) -> Self {
        Self::new(config.into_rate_table())
    }

    /// Returns the rate table.
    pub fn rates(&self) -> &RateTable {
        &self.rates
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::new(RateTable::standard())
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
    fn test_clones_share_the_table() {
        let state = AppState::default();
        let clone = state.clone();
        assert!(std::ptr::eq(state.rates(), clone.rates()));
    }
}
