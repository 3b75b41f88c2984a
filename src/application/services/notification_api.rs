/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 18/10/26
******************************************************************************/

use crate::application::configuration::{Configuration, ConfigurationHandle};
use crate::application::interfaces::{AuthScoped, NotificationService, ResourceGroup};
use crate::error::AppError;
use crate::model::http::ResourceClient;
use crate::model::requests::PageRequest;
use crate::model::responses::CountResponse;
use crate::presentation::{NotificationDto, Page};
use async_trait::async_trait;
use reqwest::Client;
use tracing::debug;

/// Client for the `notifications` endpoints
#[derive(Clone, Debug)]
pub struct NotificationApi {
    client: ResourceClient,
}

impl NotificationApi {
    /// Creates the client with its own configuration slot
    pub fn new(http_client: Client, configuration: Configuration) -> Self {
        Self {
            client: ResourceClient::new(ResourceGroup::Notifications, http_client, configuration),
        }
    }
}

impl AuthScoped for NotificationApi {
    fn resource_group(&self) -> ResourceGroup {
        ResourceGroup::Notifications
    }

    fn configuration(&self) -> &ConfigurationHandle {
        self.client.configuration()
    }
}

#[async_trait]
impl NotificationService for NotificationApi {
    async fn get_all_notifications(
        &self,
        page: &PageRequest,
    ) -> Result<Page<NotificationDto>, AppError> {
        self.client.get("notifications", &page.to_query()).await
    }

    async fn get_unread_notifications(
        &self,
        page: &PageRequest,
    ) -> Result<Page<NotificationDto>, AppError> {
        self.client
            .get("notifications/unread", &page.to_query())
            .await
    }

    async fn get_unread_count(&self) -> Result<u64, AppError> {
        let response: CountResponse = self.client.get("notifications/unread-count", &[]).await?;
        debug!("Unread notifications: {}", response.count);
        Ok(response.count)
    }

    async fn mark_as_read(&self, id: i64) -> Result<(), AppError> {
        self.client
            .put_no_content(&format!("notifications/{id}/read"))
            .await
    }

    async fn mark_all_as_read(&self) -> Result<(), AppError> {
        self.client.put_no_content("notifications/read-all").await
    }
}
