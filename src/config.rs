use std::env;

use crate::error::ConfigError;

pub const DEFAULT_GEMINI_MODEL: &str = "gemini-3-flash-preview";
pub const DEFAULT_GEMINI_API_URL: &str = "https://generativelanguage.googleapis.com/v1beta";

#[derive(Debug, Clone)]
pub struct AppConfig {
    pub host: String,
    pub port: u16,
    pub gemini_api_key: String,
    pub gemini_model: String,
    pub gemini_api_url: String,
    /// Image interleaving is skipped without it.
    pub unsplash_access_key: Option<String>,
    pub image_count: usize,
    pub search_max_results: usize,
    pub search_region: String,
}

impl AppConfig {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let non_empty = |key: &str| lookup(key).filter(|value| !value.trim().is_empty());

        let gemini_api_key = non_empty("GEMINI_API_KEY").ok_or(ConfigError::MissingCredential {
            name: "GEMINI_API_KEY",
        })?;

        Ok(Self {
            host: non_empty("HOST").unwrap_or_else(|| "0.0.0.0".to_string()),
            port: non_empty("PORT")
                .and_then(|p| p.parse().ok())
                .unwrap_or(3000),
            gemini_api_key,
            gemini_model: non_empty("GEMINI_MODEL")
                .unwrap_or_else(|| DEFAULT_GEMINI_MODEL.to_string()),
            gemini_api_url: non_empty("GEMINI_API_URL")
                .unwrap_or_else(|| DEFAULT_GEMINI_API_URL.to_string()),
            unsplash_access_key: non_empty("UNSPLASH_ACCESS_KEY"),
            image_count: non_empty("IMAGE_COUNT")
                .and_then(|s| s.parse().ok())
                .unwrap_or(7),
            search_max_results: non_empty("SEARCH_MAX_RESULTS")
                .and_then(|s| s.parse().ok())
                .unwrap_or(6),
            search_region: non_empty("SEARCH_REGION").unwrap_or_else(|| "kr-kr".to_string()),
        })
    }

    pub fn bind_addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}
