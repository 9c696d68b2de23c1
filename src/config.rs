use serde::Deserialize;

use std::ops::RangeInclusive;

use crate::services::combinations::DEFAULT_MAX_COMBINATIONS;
use crate::services::recommendations::{
    RecommenderSettings, DEFAULT_OUTFIT_COUNT, MAX_OUTFIT_COUNT,
};

/// Accepted values for `MAX_COMBINATIONS`
const MAX_COMBINATIONS_RANGE: RangeInclusive<usize> = 1..=100;

/// Application configuration loaded from environment variables
#[derive(Debug, Deserialize, Clone)]
pub struct Config {
    /// Server host address
    #[serde(default = "default_host")]
    pub host: String,

    /// Server port
    #[serde(default = "default_port")]
    pub port: u16,

    /// Fixed seed for reproducible recommendations; OS entropy when unset
    #[serde(default)]
    pub recommender_seed: Option<u64>,

    /// Upper bound on candidates generated for a single outfit
    #[serde(default = "default_max_combinations")]
    pub max_combinations: usize,

    /// Outfits returned by the multiple-outfit endpoint when no count is given
    #[serde(default = "default_outfit_count")]
    pub default_outfit_count: usize,
}

fn default_host() -> String {
    "127.0.0.1".to_string()
}

fn default_port() -> u16 {
    3000
}

fn default_max_combinations() -> usize {
    DEFAULT_MAX_COMBINATIONS
}

fn default_outfit_count() -> usize {
    DEFAULT_OUTFIT_COUNT
}

impl Config {
    /// Load configuration from environment variables
    pub fn from_env() -> anyhow::Result<Self> {
        dotenvy::dotenv().ok();
        envy::from_env::<Config>()
            .map_err(|e| anyhow::anyhow!("Failed to load config: {}", e))?
            .validate()
    }

    /// Rejects tunables the recommender cannot honor
    pub fn validate(self) -> anyhow::Result<Self> {
        if !MAX_COMBINATIONS_RANGE.contains(&self.max_combinations) {
            anyhow::bail!(
                "MAX_COMBINATIONS must be between {} and {}, got {}",
                MAX_COMBINATIONS_RANGE.start(),
                MAX_COMBINATIONS_RANGE.end(),
                self.max_combinations
            );
        }
        if !(1..=MAX_OUTFIT_COUNT).contains(&self.default_outfit_count) {
            anyhow::bail!(
                "DEFAULT_OUTFIT_COUNT must be between 1 and {}, got {}",
                MAX_OUTFIT_COUNT,
                self.default_outfit_count
            );
        }
        Ok(self)
    }

    pub fn bind_address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }

    pub fn recommender_settings(&self) -> RecommenderSettings {
        RecommenderSettings {
            max_combinations: self.max_combinations,
            default_outfit_count: self.default_outfit_count,
        }
    }
}
