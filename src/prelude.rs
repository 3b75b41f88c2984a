/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 18/10/26
******************************************************************************/

//! # Post Now Client Prelude
//!
//! Brings the commonly used types and traits into scope with one import.
//!
//! ## Usage
//!
//! ```rust
//! use post_now_client::prelude::*;
//!
//! let client = ApiClient::in_memory(Config::with_base_url("http://localhost:8090/api"));
//! assert!(client.get_auth_token().is_none());
//! ```

// ============================================================================
// CORE CONFIGURATION AND SETUP
// ============================================================================

/// Environment-driven configuration
pub use crate::application::config::{Config, RestApiConfig, resolve_base_url};

/// Per-client configuration and its factory
pub use crate::application::configuration::{
    Configuration, ConfigurationHandle, build_auth_configuration,
};

/// Library version information
pub use crate::{VERSION, version};

// ============================================================================
// ERROR HANDLING
// ============================================================================

/// Main error type for the library
pub use crate::error::AppError;

// ============================================================================
// CLIENT REGISTRY AND RESOURCE CLIENTS
// ============================================================================

/// The credential-scoped registry
pub use crate::application::registry::ApiClient;

/// Resource clients
pub use crate::application::services::{
    AuthApi, CommentsApi, FollowApi, LikesApi, NotificationApi, PostsApi, UsersApi,
};

/// Service interfaces and the token capability
pub use crate::application::interfaces::{
    AuthScoped, AuthService, CommentsService, FollowService, LikesService, NotificationService,
    PostsService, ResourceGroup, UsersService,
};

// ============================================================================
// MODELS
// ============================================================================

/// Request models
pub use crate::model::requests::{
    CommentCreateDto, ImageUpload, LoginRequest, PageRequest, PostCreateDto, UserUpdateDto,
};

/// Response models
pub use crate::model::responses::{
    CountResponse, LikedResponse, LoginResponse, MessageResponse, TokenValidation,
};

/// Wire models returned by the backend
pub use crate::presentation::{
    CommentDto, FollowDto, FollowStats, NotificationDto, NotificationType, Page, PostDto,
    PostType, Role, UserDto, UserSummaryDto,
};

// ============================================================================
// STORAGE
// ============================================================================

/// Token storage
pub use crate::storage::{FileStore, KeyValueStore, MemoryStore, TokenStore};

/// Storage configuration
pub use crate::storage::config::StorageConfig;

// ============================================================================
// UTILITIES
// ============================================================================

/// Logging utilities
pub use crate::utils::logger::setup_logger;

/// Global constants
pub use crate::constants::*;

// ============================================================================
// RE-EXPORTS FROM EXTERNAL CRATES
// ============================================================================

pub use async_trait::async_trait;
pub use serde::{Deserialize, Serialize};
pub use std::sync::Arc;
pub use tracing::{debug, error, info, warn};
