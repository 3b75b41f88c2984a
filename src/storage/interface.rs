/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 18/10/26
******************************************************************************/
use crate::error::AppError;

/// Durable string key-value storage
///
/// Mirrors the shape of a browser's local storage: string keys, string
/// values, and removal of a missing key is not an error.
pub trait KeyValueStore: Send + Sync {
    /// Returns the value stored under `key`, or `None` if there is none
    fn get_item(&self, key: &str) -> Result<Option<String>, AppError>;

    /// Stores `value` under `key`, replacing any previous value
    fn set_item(&self, key: &str, value: &str) -> Result<(), AppError>;

    /// Removes `key` from the store
    fn remove_item(&self, key: &str) -> Result<(), AppError>;
}
