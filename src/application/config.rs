/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 18/10/26
******************************************************************************/

use crate::constants::{
    API_TIMEOUT_ENV, API_URL_ENV, DEFAULT_API_BASE_URL, DEFAULT_STORAGE_PATH,
    DEFAULT_TIMEOUT_SECS, STORAGE_PATH_ENV,
};
use crate::storage::config::StorageConfig;
use crate::utils::config::{get_env_non_empty, get_env_or_default};
use dotenv::dotenv;
use pretty_simple_display::{DebugPretty, DisplaySimple};
use serde::{Deserialize, Serialize};
use tracing::debug;

#[derive(DebugPretty, DisplaySimple, Serialize, Deserialize, Clone, PartialEq)]
/// Main configuration for the Post Now API client
pub struct Config {
    /// REST API configuration
    pub rest_api: RestApiConfig,
    /// Durable token storage configuration
    pub storage: StorageConfig,
}

#[derive(DebugPretty, DisplaySimple, Serialize, Deserialize, Clone, PartialEq)]
/// Configuration for the REST API
pub struct RestApiConfig {
    /// Base URL every endpoint path is appended to
    pub base_url: String,
    /// Timeout in seconds for REST API requests
    pub timeout: u64,
}

impl Default for Config {
    fn default() -> Self {
        Self::new()
    }
}

impl Config {
    /// Creates a configuration from the environment
    ///
    /// Loads `.env` if present, then reads:
    /// * `POST_NOW_API_URL` - base URL (default `http://localhost:8090/api`)
    /// * `POST_NOW_API_TIMEOUT` - request timeout in seconds (default 30)
    /// * `POST_NOW_STORAGE_PATH` - token store file (default `.post_now/storage.json`)
    pub fn new() -> Self {
        match dotenv() {
            Ok(_) => debug!("Successfully loaded .env file"),
            Err(e) => debug!("Failed to load .env file: {e}"),
        }

        let base_url = resolve_base_url(get_env_non_empty(API_URL_ENV));
        debug!("Using API base URL {}", base_url);

        Config {
            rest_api: RestApiConfig {
                base_url,
                timeout: get_env_or_default(API_TIMEOUT_ENV, DEFAULT_TIMEOUT_SECS),
            },
            storage: StorageConfig {
                path: get_env_or_default(STORAGE_PATH_ENV, DEFAULT_STORAGE_PATH.to_string()),
            },
        }
    }

    /// Creates a configuration pointing at `base_url` with default settings
    /// otherwise, ignoring the environment
    pub fn with_base_url(base_url: impl Into<String>) -> Self {
        Config {
            rest_api: RestApiConfig {
                base_url: base_url.into(),
                timeout: DEFAULT_TIMEOUT_SECS,
            },
            storage: StorageConfig {
                path: DEFAULT_STORAGE_PATH.to_string(),
            },
        }
    }
}

/// Picks the API base URL: the override when present and non-empty, the
/// built-in default otherwise
#[must_use]
pub fn resolve_base_url(override_url: Option<String>) -> String {
    override_url
        .filter(|url| !url.trim().is_empty())
        .unwrap_or_else(|| DEFAULT_API_BASE_URL.to_string())
}
