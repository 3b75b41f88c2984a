/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 18/10/26
******************************************************************************/

//! # Post Now Client
//!
//! A credential-scoped client for the Post Now social API (posts, users,
//! comments, likes, notifications and follows).
//!
//! One [`ApiClient`](application::registry::ApiClient) owns a client per
//! resource group. All of them share a base URL and the bearer token kept in
//! durable key-value storage. Logging in or out updates every client in
//! place, so later calls through any of them use the new credential.
//!
//! ## Example
//!
//! ```ignore
//! use post_now_client::prelude::*;
//!
//! let client = ApiClient::from_env();
//! client.login("alice", "secret").await?;
//!
//! let posts = client.posts.get_all_posts(&PageRequest::default()).await?;
//! for post in posts.content {
//!     info!("{}", post.title);
//! }
//!
//! client.logout()?;
//! ```

/// Client configuration, the resource clients and the registry that binds them
pub mod application;
/// Global constants
pub mod constants;
/// Error types
pub mod error;
/// HTTP plumbing and request models
pub mod model;
/// Convenient re-exports
pub mod prelude;
/// Wire models returned by the backend
pub mod presentation;
/// Durable key-value storage for the bearer token
pub mod storage;
/// Environment and logging helpers
pub mod utils;

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Returns the library version
pub fn version() -> &'static str {
    VERSION
}
