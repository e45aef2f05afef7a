use std::env;
use std::sync::Arc;

use business::domain::recommendation::random::{RandomSource, SeededRandom, ThreadRandom};

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("config.invalid_recommendation_seed: {0}")]
    InvalidRecommendationSeed(String),
}

/// Settings of the recommendation engine.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RecommendationConfig {
    pub seed: Option<u64>,
}

impl RecommendationConfig {
    /// Load recommendation settings from environment variables
    ///
    /// Environment variables:
    /// - RECOMMENDATION_SEED: fixed seed for reproducible picks (default: unset, fresh randomness per call)
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::parse(env::var("RECOMMENDATION_SEED").ok())
    }

    fn parse(seed: Option<String>) -> Result<Self, ConfigError> {
        let seed = match seed.map(|s| s.trim().to_string()).filter(|s| !s.is_empty()) {
            Some(raw) => Some(
                raw.parse::<u64>()
                    .map_err(|_| ConfigError::InvalidRecommendationSeed(raw))?,
            ),
            None => None,
        };
        Ok(Self { seed })
    }

    pub fn random_source(&self) -> Arc<dyn RandomSource> {
        match self.seed {
            Some(seed) => Arc::new(SeededRandom::new(seed)),
            None => Arc::new(ThreadRandom),
        }
    }
}
