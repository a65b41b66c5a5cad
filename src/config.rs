use serde::{Deserialize, Serialize};
use std::env;
use std::path::PathBuf;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LimitsConfig {
    pub max_tweets_to_fetch: usize,
    pub max_replies_to_generate: usize,
}

impl Default for LimitsConfig {
    fn default() -> Self {
        Self {
            max_tweets_to_fetch: 10,
            max_replies_to_generate: 5,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ViralWeights {
    pub engagement_weight: f64,
    pub recency_weight: f64,
    pub recency_window_hours: f64,
    pub verified_multiplier: f64,
    pub views_per_like: u64,
}

impl Default for ViralWeights {
    fn default() -> Self {
        Self {
            engagement_weight: 0.7,
            recency_weight: 0.3,
            recency_window_hours: 72.0,
            verified_multiplier: 1.2,
            views_per_like: 100,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PotentialWeights {
    pub views_floor: u64,
    pub rate_scale: f64,
    pub verified_bonus: f64,
    pub recency_scale: f64,
}

impl Default for PotentialWeights {
    fn default() -> Self {
        Self {
            views_floor: 1000,
            rate_scale: 50.0,
            verified_bonus: 10.0,
            recency_scale: 5.0,
        }
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    pub limits: LimitsConfig,
    pub viral: ViralWeights,
    pub potential: PotentialWeights,
}

impl AppConfig {
    pub fn load(path: Option<PathBuf>) -> Result<(Self, Option<PathBuf>), String> {
        let config_path = path.or_else(default_config_path);
        let mut config = if let Some(path) = config_path.as_ref() {
            if path.exists() {
                let contents = std::fs::read_to_string(path)
                    .map_err(|err| format!("failed to read config: {}", err))?;
                toml::from_str(&contents)
                    .map_err(|err| format!("failed to parse config: {}", err))?
            } else {
                AppConfig::default()
            }
        } else {
            AppConfig::default()
        };

        config.apply_env_overrides();
        Ok((config, config_path))
    }

    fn apply_env_overrides(&mut self) {
        if let Ok(value) = env::var("MAX_TWEETS_TO_FETCH") {
            if let Ok(value) = value.parse::<usize>() {
                self.limits.max_tweets_to_fetch = value;
            }
        }
        if let Ok(value) = env::var("MAX_REPLIES_TO_GENERATE") {
            if let Ok(value) = value.parse::<usize>() {
                self.limits.max_replies_to_generate = value;
            }
        }
    }
}

fn default_config_path() -> Option<PathBuf> {
    env::var("REPLYGUY_CONFIG_PATH")
        .ok()
        .filter(|value| !value.trim().is_empty())
        .map(PathBuf::from)
        .or_else(|| Some(PathBuf::from("config/replyguy.toml")))
}
