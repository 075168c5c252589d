//! Configuration loading for ddg-search-mcp
//!
//! Configuration is loaded from:
//! 1. Environment variable DDG_SEARCH_CONFIG_PATH
//! 2. ~/.ddg-search.toml
//! 3. Default values
//!
//! The DDG_REGION environment variable overrides the configured region.

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Main configuration structure
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// General search configuration
    #[serde(default)]
    pub search: SearchConfig,
    /// DuckDuckGo endpoint configuration
    #[serde(default)]
    pub ddg: DdgConfig,
}

/// General search configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SearchConfig {
    /// HTTP request timeout in seconds
    #[serde(default = "default_timeout_seconds")]
    pub timeout_seconds: u64,
    /// User-Agent header sent with every request
    #[serde(default = "default_user_agent")]
    pub user_agent: String,
}

/// DuckDuckGo endpoint configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DdgConfig {
    /// Base URL for the token handshake and the news endpoint
    #[serde(default = "default_base_url")]
    pub base_url: String,
    /// Base URL for the web results endpoint
    #[serde(default = "default_links_base_url")]
    pub links_base_url: String,
    /// Region code passed to the engine (wt-wt = no region)
    #[serde(default = "default_region")]
    pub region: String,
}

// Default value functions
fn default_timeout_seconds() -> u64 {
    10
}

fn default_user_agent() -> String {
    // DuckDuckGo serves its JSON endpoints to browser user agents
    "Mozilla/5.0 (Windows NT 10.0; Win64; x64; rv:128.0) Gecko/20100101 Firefox/128.0".to_string()
}

fn default_base_url() -> String {
    "https://duckduckgo.com".to_string()
}

fn default_links_base_url() -> String {
    "https://links.duckduckgo.com".to_string()
}

fn default_region() -> String {
    "wt-wt".to_string()
}

impl Default for Config {
    fn default() -> Self {
        Self {
            search: SearchConfig::default(),
            ddg: DdgConfig::default(),
        }
    }
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            timeout_seconds: default_timeout_seconds(),
            user_agent: default_user_agent(),
        }
    }
}

impl Default for DdgConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            links_base_url: default_links_base_url(),
            region: default_region(),
        }
    }
}

impl Config {
    /// Load configuration from file or use defaults
    ///
    /// Never fails: an unreadable or unparseable config file is logged
    /// and replaced with defaults so the server still comes up.
    pub fn load() -> Self {
        let mut config = match Self::find_config_path() {
            Some(path) if path.exists() => {
                tracing::info!("Loading config from: {}", path.display());
                match std::fs::read_to_string(&path) {
                    Ok(content) => match toml::from_str(&content) {
                        Ok(config) => config,
                        Err(e) => {
                            tracing::warn!("Failed to parse {}: {}, using defaults", path.display(), e);
                            Self::default()
                        }
                    },
                    Err(e) => {
                        tracing::warn!("Failed to read {}: {}, using defaults", path.display(), e);
                        Self::default()
                    }
                }
            }
            _ => {
                tracing::info!("No config file found, using defaults");
                Self::default()
            }
        };

        // Region from environment (highest priority)
        if let Ok(region) = std::env::var("DDG_REGION") {
            config.ddg.region = region;
        }

        config
    }

    /// Find the configuration file path
    fn find_config_path() -> Option<PathBuf> {
        // 1. Check environment variable
        if let Ok(path) = std::env::var("DDG_SEARCH_CONFIG_PATH") {
            return Some(PathBuf::from(path));
        }

        // 2. Check ~/.ddg-search.toml
        if let Ok(home) = std::env::var("HOME") {
            return Some(PathBuf::from(home).join(".ddg-search.toml"));
        }

        None
    }
}
