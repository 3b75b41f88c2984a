/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 18/10/26
******************************************************************************/

use crate::constants::AUTH_TOKEN_KEY;
use crate::error::AppError;
use crate::storage::interface::KeyValueStore;
use std::fmt;
use std::sync::Arc;
use tracing::{debug, warn};

/// The bearer token slot of a [`KeyValueStore`]
///
/// Always reads and writes the fixed `authToken` key.
#[derive(Clone)]
pub struct TokenStore {
    store: Arc<dyn KeyValueStore>,
}

impl TokenStore {
    /// Binds the token slot to `store`
    pub fn new(store: Arc<dyn KeyValueStore>) -> Self {
        Self { store }
    }

    /// Returns the stored token
    ///
    /// A read failure is logged and reported as "no token", so callers can
    /// always fall back to unauthenticated requests.
    pub fn load(&self) -> Option<String> {
        match self.store.get_item(AUTH_TOKEN_KEY) {
            Ok(token) => {
                debug!("Token present in store: {}", token.is_some());
                token
            }
            Err(e) => {
                warn!("Failed to read token from store, treating as absent: {}", e);
                None
            }
        }
    }

    /// Persists `token`, replacing any previous one
    pub fn save(&self, token: &str) -> Result<(), AppError> {
        self.store.set_item(AUTH_TOKEN_KEY, token)
    }

    /// Removes the stored token
    pub fn remove(&self) -> Result<(), AppError> {
        self.store.remove_item(AUTH_TOKEN_KEY)
    }
}

impl fmt::Debug for TokenStore {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TokenStore")
            .field("key", &AUTH_TOKEN_KEY)
            .finish_non_exhaustive()
    }
}
