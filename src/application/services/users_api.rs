/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 18/10/26
******************************************************************************/

use crate::application::configuration::{Configuration, ConfigurationHandle};
use crate::application::interfaces::{AuthScoped, ResourceGroup, UsersService};
use crate::error::AppError;
use crate::model::http::ResourceClient;
use crate::model::requests::{ImageUpload, PageRequest, UserUpdateDto};
use crate::presentation::{Page, UserDto};
use async_trait::async_trait;
use reqwest::Client;
use reqwest::multipart::Form;
use tracing::info;

/// Client for the `users` endpoints
#[derive(Clone, Debug)]
pub struct UsersApi {
    client: ResourceClient,
}

impl UsersApi {
    /// Creates the client with its own configuration slot
    pub fn new(http_client: Client, configuration: Configuration) -> Self {
        Self {
            client: ResourceClient::new(ResourceGroup::Users, http_client, configuration),
        }
    }
}

impl AuthScoped for UsersApi {
    fn resource_group(&self) -> ResourceGroup {
        ResourceGroup::Users
    }

    fn configuration(&self) -> &ConfigurationHandle {
        self.client.configuration()
    }
}

#[async_trait]
impl UsersService for UsersApi {
    async fn get_current_user(&self) -> Result<UserDto, AppError> {
        self.client.get("users/me", &[]).await
    }

    async fn get_user_by_username(&self, username: &str) -> Result<UserDto, AppError> {
        self.client
            .get(&format!("users/{}", urlencoding::encode(username)), &[])
            .await
    }

    async fn get_all_users(&self, page: &PageRequest) -> Result<Page<UserDto>, AppError> {
        self.client.get("users", &page.to_query()).await
    }

    async fn search_users(
        &self,
        query: &str,
        page: &PageRequest,
    ) -> Result<Page<UserDto>, AppError> {
        let mut params = vec![("query".to_string(), query.to_string())];
        params.extend(page.to_query());
        self.client.get("users/search", &params).await
    }

    async fn update_current_user(&self, update: &UserUpdateDto) -> Result<UserDto, AppError> {
        update.validate()?;
        self.client.put("users/me", update).await
    }

    async fn delete_current_user(&self) -> Result<(), AppError> {
        self.client.delete_no_content("users/me").await?;
        info!("Deleted current user account");
        Ok(())
    }

    async fn upload_profile_image(&self, image: &ImageUpload) -> Result<UserDto, AppError> {
        let form = Form::new().part("image", image.to_part()?);
        self.client
            .post_multipart("users/me/profile-image", form)
            .await
    }

    async fn delete_profile_image(&self) -> Result<UserDto, AppError> {
        self.client.delete("users/me/profile-image").await
    }
}
