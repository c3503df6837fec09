//! Server configuration from environment variables.
//!
//! Load configuration using `Config::from_env()` after calling `dotenvy::dotenv()`.
//! The WASM bundle gets its API base at build time (`WARDROBE_API_BASE`); this
//! struct covers what the serving binary wants to know at startup.

/// Application configuration loaded from environment variables.
#[derive(Debug, Clone)]
pub struct Config {
    /// Base URL of the external auth backend
    /// Example: http://localhost:8000
    pub api_base_url: Option<String>,
}

impl Config {
    /// Load configuration from environment variables.
    ///
    /// Call `dotenvy::dotenv()` before this to load from `.env` file.
    pub fn from_env() -> Self {
        Self {
            api_base_url: std::env::var("WARDROBE_API_BASE").ok(),
        }
    }

    /// Check if an explicit API base is configured
    pub fn has_api_base(&self) -> bool {
        self.api_base_url.is_some()
    }

    /// API base, falling back to the development default
    pub fn api_base_or_default(&self) -> &str {
        self.api_base_url
            .as_deref()
            .unwrap_or("http://localhost:8000")
    }
}

impl Default for Config {
    fn default() -> Self {
        Self::from_env()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // Struct-level tests only; no env var mutation, thread safe.

    #[test]
    fn test_config_with_api_base() {
        let config = Config {
            api_base_url: Some("https://api.wardrobe.example".to_string()),
        };

        assert!(config.has_api_base());
        assert_eq!(config.api_base_or_default(), "https://api.wardrobe.example");
    }

    #[test]
    fn test_config_without_api_base_falls_back() {
        let config = Config { api_base_url: None };

        assert!(!config.has_api_base());
        assert_eq!(config.api_base_or_default(), "http://localhost:8000");
    }
}
