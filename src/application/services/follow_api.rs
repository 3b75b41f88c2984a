/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 18/10/26
******************************************************************************/

use crate::application::configuration::{Configuration, ConfigurationHandle};
use crate::application::interfaces::{AuthScoped, FollowService, ResourceGroup};
use crate::error::AppError;
use crate::model::http::ResourceClient;
use crate::model::requests::PageRequest;
use crate::presentation::{FollowDto, FollowStats, Page, UserSummaryDto};
use async_trait::async_trait;
use reqwest::Client;
use tracing::info;

/// Client for the follow endpoints, which live under `users/{username}`
#[derive(Clone, Debug)]
pub struct FollowApi {
    client: ResourceClient,
}

impl FollowApi {
    /// Creates the client with its own configuration slot
    pub fn new(http_client: Client, configuration: Configuration) -> Self {
        Self {
            client: ResourceClient::new(ResourceGroup::Follow, http_client, configuration),
        }
    }
}

impl AuthScoped for FollowApi {
    fn resource_group(&self) -> ResourceGroup {
        ResourceGroup::Follow
    }

    fn configuration(&self) -> &ConfigurationHandle {
        self.client.configuration()
    }
}

#[async_trait]
impl FollowService for FollowApi {
    async fn follow_user(&self, username: &str) -> Result<FollowDto, AppError> {
        let follow: FollowDto = self
            .client
            .post_empty(&format!("users/{}/follow", urlencoding::encode(username)))
            .await?;
        info!("Now following {}", follow.following.username);
        Ok(follow)
    }

    async fn unfollow_user(&self, username: &str) -> Result<(), AppError> {
        self.client
            .delete_no_content(&format!("users/{}/follow", urlencoding::encode(username)))
            .await?;
        info!("Unfollowed {}", username);
        Ok(())
    }

    async fn get_followers(
        &self,
        username: &str,
        page: &PageRequest,
    ) -> Result<Page<UserSummaryDto>, AppError> {
        let path = format!("users/{}/followers", urlencoding::encode(username));
        self.client.get(&path, &page.to_query()).await
    }

    async fn get_following(
        &self,
        username: &str,
        page: &PageRequest,
    ) -> Result<Page<UserSummaryDto>, AppError> {
        let path = format!("users/{}/following", urlencoding::encode(username));
        self.client.get(&path, &page.to_query()).await
    }

    async fn get_follow_stats(&self, username: &str) -> Result<FollowStats, AppError> {
        self.client
            .get(&format!("users/{}/follow-stats", urlencoding::encode(username)), &[])
            .await
    }
}
