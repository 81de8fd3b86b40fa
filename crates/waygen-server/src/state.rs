//! Shared handler state.

use crate::config::Config;

/// Read-only state handed to every handler. Requests share nothing mutable.
pub struct AppState {
    config: Config,
}

impl AppState {
    pub fn new(config: Config) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &Config {
        &self.config
    }
}
