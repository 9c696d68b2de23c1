use std::sync::Arc;

use crate::config::Config;
use crate::services::{CatalogProvider, InMemoryCatalog, RecommenderSettings};

/// Shared application state
#[derive(Clone)]
pub struct AppState {
    pub catalog: Arc<dyn CatalogProvider>,
    pub settings: RecommenderSettings,
    /// Seed applied to every request's RNG; fresh entropy per request when `None`
    pub seed: Option<u64>,
}

impl Default for AppState {
    fn default() -> Self {
        Self::new()
    }
}

impl AppState {
    /// Creates state with an empty in-memory catalog and default settings
    pub fn new() -> Self {
        Self {
            catalog: Arc::new(InMemoryCatalog::new()),
            settings: RecommenderSettings::default(),
            seed: None,
        }
    }

    pub fn from_config(config: &Config) -> Self {
        Self {
            settings: config.recommender_settings(),
            seed: config.recommender_seed,
            ..Self::new()
        }
    }

    pub fn with_catalog(mut self, catalog: Arc<dyn CatalogProvider>) -> Self {
        self.catalog = catalog;
        self
    }

    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }
}
