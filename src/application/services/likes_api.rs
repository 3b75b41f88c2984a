/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 18/10/26
******************************************************************************/

use crate::application::configuration::{Configuration, ConfigurationHandle};
use crate::application::interfaces::{AuthScoped, LikesService, ResourceGroup};
use crate::error::AppError;
use crate::model::http::ResourceClient;
use crate::model::responses::{CountResponse, LikedResponse, MessageResponse};
use async_trait::async_trait;
use reqwest::Client;

/// Client for the `likes` endpoints
#[derive(Clone, Debug)]
pub struct LikesApi {
    client: ResourceClient,
}

impl LikesApi {
    /// Creates the client with its own configuration slot
    pub fn new(http_client: Client, configuration: Configuration) -> Self {
        Self {
            client: ResourceClient::new(ResourceGroup::Likes, http_client, configuration),
        }
    }
}

impl AuthScoped for LikesApi {
    fn resource_group(&self) -> ResourceGroup {
        ResourceGroup::Likes
    }

    fn configuration(&self) -> &ConfigurationHandle {
        self.client.configuration()
    }
}

#[async_trait]
impl LikesService for LikesApi {
    async fn get_likes_count(&self, post_id: i64) -> Result<u64, AppError> {
        let response: CountResponse = self
            .client
            .get(&format!("likes/post/{post_id}/count"), &[])
            .await?;
        Ok(response.count)
    }

    async fn is_post_liked_by_user(&self, post_id: i64) -> Result<bool, AppError> {
        let response: LikedResponse = self
            .client
            .get(&format!("likes/post/{post_id}/status"), &[])
            .await?;
        Ok(response.liked)
    }

    async fn like_post(&self, post_id: i64) -> Result<MessageResponse, AppError> {
        self.client
            .post_empty(&format!("likes/post/{post_id}"))
            .await
    }

    async fn unlike_post(&self, post_id: i64) -> Result<MessageResponse, AppError> {
        self.client.delete(&format!("likes/post/{post_id}")).await
    }

    async fn toggle_like(&self, post_id: i64) -> Result<MessageResponse, AppError> {
        self.client
            .post_empty(&format!("likes/post/{post_id}/toggle"))
            .await
    }
}
