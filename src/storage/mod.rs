/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 18/10/26
******************************************************************************/

/// Token store configuration
pub mod config;
/// JSON-file backed store
pub mod file;
/// Key-value store trait
pub mod interface;
/// In-memory store
pub mod memory;
/// Bearer token slot on top of a store
pub mod token;

pub use file::FileStore;
pub use interface::KeyValueStore;
pub use memory::MemoryStore;
pub use token::TokenStore;
