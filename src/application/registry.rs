/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 18/10/26
******************************************************************************/

//! Credential-scoped client registry
//!
//! [`ApiClient`] owns one client per resource group. Each client starts with
//! its own configuration built from the stored token. Setting or clearing the
//! token writes the new value into every client's configuration in place, so
//! once the call returns no client still carries the old token.
//!
//! # Example
//! ```ignore
//! use post_now_client::prelude::*;
//!
//! let client = ApiClient::from_env();
//! let login = client.login("alice", "secret").await?;
//! let me = client.users.get_current_user().await?;
//! client.logout()?;
//! ```

use crate::application::config::Config;
use crate::application::configuration::{Configuration, build_auth_configuration};
use crate::application::interfaces::{AuthScoped, AuthService, ResourceGroup};
use crate::application::services::{
    AuthApi, CommentsApi, FollowApi, LikesApi, NotificationApi, PostsApi, UsersApi,
};
use crate::constants::USER_AGENT;
use crate::error::AppError;
use crate::model::requests::LoginRequest;
use crate::model::responses::LoginResponse;
use crate::storage::{FileStore, KeyValueStore, MemoryStore, TokenStore};
use reqwest::Client;
use std::sync::{Arc, Mutex, PoisonError};
use std::time::Duration;
use tracing::{debug, info, warn};

/// The set of API clients sharing one bearer token
pub struct ApiClient {
    /// Authentication endpoints (login, token validation)
    pub auth: AuthApi,
    /// Posts endpoints (CRUD, search, images)
    pub posts: PostsApi,
    /// Users endpoints (profiles, search, profile images)
    pub users: UsersApi,
    /// Comments endpoints
    pub comments: CommentsApi,
    /// Likes endpoints
    pub likes: LikesApi,
    /// Notification endpoints
    pub notifications: NotificationApi,
    /// Follow endpoints
    pub follow: FollowApi,
    config: Arc<Config>,
    tokens: TokenStore,
    // held while the store and the clients are being brought in line
    token_lock: Mutex<()>,
}

impl ApiClient {
    /// Creates the registry on top of `store`
    ///
    /// The stored token, if any, is read once per client. Construction never
    /// fails: an unreadable store is treated as holding no token.
    pub fn new(config: Config, store: Arc<dyn KeyValueStore>) -> Self {
        let http_client = Client::builder()
            .user_agent(USER_AGENT)
            .timeout(Duration::from_secs(config.rest_api.timeout))
            .build()
            .unwrap_or_else(|e| {
                warn!("Failed to build configured HTTP client, using defaults: {}", e);
                Client::new()
            });
        let tokens = TokenStore::new(store);
        let base_url = config.rest_api.base_url.clone();
        let fresh = || build_auth_configuration(&base_url, &tokens);

        let auth = AuthApi::new(http_client.clone(), fresh());
        let posts = PostsApi::new(http_client.clone(), fresh());
        let users = UsersApi::new(http_client.clone(), fresh());
        let comments = CommentsApi::new(http_client.clone(), fresh());
        let likes = LikesApi::new(http_client.clone(), fresh());
        let notifications = NotificationApi::new(http_client.clone(), fresh());
        let follow = FollowApi::new(http_client, fresh());

        let client = Self {
            auth,
            posts,
            users,
            comments,
            likes,
            notifications,
            follow,
            config: Arc::new(config),
            tokens,
            token_lock: Mutex::new(()),
        };
        debug!(
            "API client ready at {} (authenticated: {})",
            client.base_url(),
            client.is_authenticated()
        );
        client
    }

    /// Creates the registry from the environment, persisting the token in a
    /// JSON file at `POST_NOW_STORAGE_PATH`
    pub fn from_env() -> Self {
        let config = Config::new();
        let store = Arc::new(FileStore::new(config.storage.path.clone()));
        Self::new(config, store)
    }

    /// Creates a registry whose token lives only as long as the process
    pub fn in_memory(config: Config) -> Self {
        Self::new(config, Arc::new(MemoryStore::new()))
    }

    /// Base URL shared by every client
    #[must_use]
    pub fn base_url(&self) -> &str {
        &self.config.rest_api.base_url
    }

    /// Configuration the registry was built with
    #[must_use]
    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Every client in the registry, in [`ResourceGroup::ALL`] order
    #[must_use]
    pub fn clients(&self) -> [&dyn AuthScoped; 7] {
        [
            &self.auth,
            &self.posts,
            &self.users,
            &self.comments,
            &self.likes,
            &self.notifications,
            &self.follow,
        ]
    }

    /// The client serving `group`
    #[must_use]
    pub fn client(&self, group: ResourceGroup) -> &dyn AuthScoped {
        match group {
            ResourceGroup::Auth => &self.auth,
            ResourceGroup::Posts => &self.posts,
            ResourceGroup::Users => &self.users,
            ResourceGroup::Comments => &self.comments,
            ResourceGroup::Likes => &self.likes,
            ResourceGroup::Notifications => &self.notifications,
            ResourceGroup::Follow => &self.follow,
        }
    }

    /// A fresh configuration built from the stored token
    #[must_use]
    pub fn auth_configuration(&self) -> Configuration {
        build_auth_configuration(self.base_url(), &self.tokens)
    }

    /// Stores `token` and makes every client use it
    ///
    /// Call this after a successful login. If the store cannot be written
    /// the error is returned and no client is touched.
    pub fn set_auth_token(&self, token: &str) -> Result<(), AppError> {
        let _guard = self.token_lock.lock().unwrap_or_else(PoisonError::into_inner);
        self.tokens.save(token)?;

        let configuration = self.auth_configuration();
        for client in self.clients() {
            client.set_access_token(configuration.access_token.as_deref());
        }
        info!("Auth token updated for {} clients", ResourceGroup::ALL.len());
        Ok(())
    }

    /// Removes the stored token and leaves every client unauthenticated
    ///
    /// Call this on logout. If the store cannot be written the error is
    /// returned and no client is touched.
    pub fn clear_auth_token(&self) -> Result<(), AppError> {
        let _guard = self.token_lock.lock().unwrap_or_else(PoisonError::into_inner);
        self.tokens.remove()?;

        for client in self.clients() {
            client.set_access_token(None);
        }
        info!("Auth token cleared for {} clients", ResourceGroup::ALL.len());
        Ok(())
    }

    /// The stored token, or `None` if there is none
    #[must_use]
    pub fn get_auth_token(&self) -> Option<String> {
        self.tokens.load()
    }

    /// Returns `true` when a non-empty token is stored
    #[must_use]
    pub fn is_authenticated(&self) -> bool {
        self.get_auth_token().is_some_and(|t| !t.is_empty())
    }

    /// Logs in and, on success, makes every client use the returned token
    pub async fn login(
        &self,
        username: impl Into<String>,
        password: impl Into<String>,
    ) -> Result<LoginResponse, AppError> {
        let request = LoginRequest::new(username, password);
        let response = self.auth.login(&request).await?;
        self.set_auth_token(&response.token)?;
        info!("✓ Logged in as {}", response.username);
        Ok(response)
    }

    /// Forgets the token; the backend keeps no session to close
    pub fn logout(&self) -> Result<(), AppError> {
        self.clear_auth_token()?;
        info!("Logged out");
        Ok(())
    }
}

impl Default for ApiClient {
    fn default() -> Self {
        Self::from_env()
    }
}
