//! Application state for the HTTP server.

use std::sync::Arc;

use crate::rifles::RifleRepository;
use crate::wind::WindDriftModel;

/// Shared application state passed to all handlers.
#[derive(Clone)]
pub struct AppState {
    /// Rifle registry
    pub repository: Arc<dyn RifleRepository>,
    /// Model used when a calculation request does not name one
    pub wind_model: WindDriftModel,
}

impl AppState {
    pub fn new(repository: Arc<dyn RifleRepository>) -> Self {
        Self {
            repository,
            wind_model: WindDriftModel::default(),
        }
    }

    pub fn with_wind_model(mut self, wind_model: WindDriftModel) -> Self {
        self.wind_model = wind_model;
        self
    }
}
