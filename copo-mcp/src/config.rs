//! Environment configuration

use std::env;
use std::path::PathBuf;

use copo_bar::DEFAULT_POPULAR_COUNT;
use tracing::warn;

pub const CATALOG_PATH_VAR: &str = "COPO_CATALOG_PATH";
pub const POPULAR_COUNT_VAR: &str = "COPO_POPULAR_COUNT";
pub const DEFAULT_CATALOG_PATH: &str = "/app/copo/drinks.json";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServerConfig {
    /// JSON array of catalog drinks
    pub catalog_path: PathBuf,
    /// `n` for popular_ingredients when the request omits it
    pub popular_count: usize,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            catalog_path: PathBuf::from(DEFAULT_CATALOG_PATH),
            popular_count: DEFAULT_POPULAR_COUNT,
        }
    }
}

impl ServerConfig {
    pub fn from_env() -> Self {
        Self::from_vars(|key| env::var(key).ok())
    }

    fn from_vars(get: impl Fn(&str) -> Option<String>) -> Self {
        let mut config = Self::default();
        if let Some(path) = get(CATALOG_PATH_VAR) {
            config.catalog_path = PathBuf::from(path);
        }
        if let Some(raw) = get(POPULAR_COUNT_VAR) {
            match raw.trim().parse::<usize>() {
                Ok(n) => config.popular_count = n,
                Err(_) => warn!(value = %raw, "{} is not a non-negative integer, using {}",
                    POPULAR_COUNT_VAR, DEFAULT_POPULAR_COUNT),
            }
        }
        config
    }
}
