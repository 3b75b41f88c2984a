/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 18/10/26
******************************************************************************/

//! Per-client request configuration
//!
//! Every resource client owns one [`Configuration`] behind a
//! [`ConfigurationHandle`]. The handle is created once and never swapped;
//! token changes are written into it in place.

use crate::storage::TokenStore;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;
use std::sync::{Arc, PoisonError, RwLock};

/// Settings a resource client applies to every request
#[derive(Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct Configuration {
    /// Base URL the endpoint paths are appended to
    pub base_path: String,
    /// Bearer token, absent for unauthenticated calls
    pub access_token: Option<String>,
    /// Headers added to every request
    pub headers: BTreeMap<String, String>,
}

impl Configuration {
    /// Creates a configuration with the default header set
    pub fn new(base_path: impl Into<String>, access_token: Option<String>) -> Self {
        Self {
            base_path: base_path.into(),
            access_token,
            headers: default_headers(),
        }
    }

    /// Value of the `Authorization` header, if a token is set
    #[must_use]
    pub fn authorization(&self) -> Option<String> {
        self.access_token
            .as_deref()
            .map(|token| format!("Bearer {token}"))
    }

    /// Joins `path` onto the base path with exactly one slash between them
    #[must_use]
    pub fn url_for(&self, path: &str) -> String {
        format!(
            "{}/{}",
            self.base_path.trim_end_matches('/'),
            path.trim_start_matches('/')
        )
    }
}

impl fmt::Debug for Configuration {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Configuration")
            .field("base_path", &self.base_path)
            .field(
                "access_token",
                &self.access_token.as_ref().map(|_| "***"),
            )
            .field("headers", &self.headers)
            .finish()
    }
}

/// Header set every configuration starts with
#[must_use]
pub fn default_headers() -> BTreeMap<String, String> {
    BTreeMap::from([("Content-Type".to_string(), "application/json".to_string())])
}

/// Builds a fresh configuration from the token currently held in `tokens`
///
/// A missing, empty or unreadable token yields a configuration for
/// unauthenticated endpoints.
pub fn build_auth_configuration(base_path: &str, tokens: &TokenStore) -> Configuration {
    let token = tokens.load().filter(|t| !t.is_empty());
    Configuration::new(base_path, token)
}

/// Shared, mutable slot holding a client's [`Configuration`]
///
/// Clones point at the same slot.
#[derive(Clone, Debug)]
pub struct ConfigurationHandle {
    inner: Arc<RwLock<Configuration>>,
}

impl ConfigurationHandle {
    /// Wraps `configuration` in a new slot
    pub fn new(configuration: Configuration) -> Self {
        Self {
            inner: Arc::new(RwLock::new(configuration)),
        }
    }

    /// Copy of the current configuration
    #[must_use]
    pub fn snapshot(&self) -> Configuration {
        self.inner
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }

    /// Current access token
    #[must_use]
    pub fn access_token(&self) -> Option<String> {
        self.inner
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .access_token
            .clone()
    }

    /// Overwrites the access token in place
    pub fn set_access_token(&self, token: Option<String>) {
        self.inner
            .write()
            .unwrap_or_else(PoisonError::into_inner)
            .access_token = token;
    }

    /// Adds or replaces a default header
    pub fn set_header(&self, name: impl Into<String>, value: impl Into<String>) {
        self.inner
            .write()
            .unwrap_or_else(PoisonError::into_inner)
            .headers
            .insert(name.into(), value.into());
    }

    /// Returns `true` if both handles point at the same slot
    #[must_use]
    pub fn same_slot(&self, other: &ConfigurationHandle) -> bool {
        Arc::ptr_eq(&self.inner, &other.inner)
    }
}
