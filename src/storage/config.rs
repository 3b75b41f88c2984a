/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 18/10/26
******************************************************************************/

use pretty_simple_display::DisplaySimple;
use serde::{Deserialize, Serialize};

/// Configuration for the durable token store
#[derive(Debug, DisplaySimple, Serialize, Deserialize, Clone, PartialEq)]
pub struct StorageConfig {
    /// Path of the JSON file backing the store
    pub path: String,
}
