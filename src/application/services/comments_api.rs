/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 18/10/26
******************************************************************************/

use crate::application::configuration::{Configuration, ConfigurationHandle};
use crate::application::interfaces::{AuthScoped, CommentsService, ResourceGroup};
use crate::error::AppError;
use crate::model::http::ResourceClient;
use crate::model::requests::{CommentCreateDto, PageRequest};
use crate::presentation::{CommentDto, Page};
use async_trait::async_trait;
use reqwest::Client;

/// Client for the `comments` endpoints
#[derive(Clone, Debug)]
pub struct CommentsApi {
    client: ResourceClient,
}

impl CommentsApi {
    /// Creates the client with its own configuration slot
    pub fn new(http_client: Client, configuration: Configuration) -> Self {
        Self {
            client: ResourceClient::new(ResourceGroup::Comments, http_client, configuration),
        }
    }
}

impl AuthScoped for CommentsApi {
    fn resource_group(&self) -> ResourceGroup {
        ResourceGroup::Comments
    }

    fn configuration(&self) -> &ConfigurationHandle {
        self.client.configuration()
    }
}

#[async_trait]
impl CommentsService for CommentsApi {
    async fn get_comments_by_post_id(
        &self,
        post_id: i64,
        page: &PageRequest,
    ) -> Result<Page<CommentDto>, AppError> {
        self.client
            .get(&format!("comments/post/{post_id}"), &page.to_query())
            .await
    }

    async fn get_comments_by_username(
        &self,
        username: &str,
        page: &PageRequest,
    ) -> Result<Page<CommentDto>, AppError> {
        let path = format!("comments/user/{}", urlencoding::encode(username));
        self.client.get(&path, &page.to_query()).await
    }

    async fn create_comment(
        &self,
        post_id: i64,
        comment: &CommentCreateDto,
    ) -> Result<CommentDto, AppError> {
        comment.validate()?;
        self.client
            .post(&format!("comments/post/{post_id}"), comment)
            .await
    }

    async fn delete_comment(&self, comment_id: i64) -> Result<(), AppError> {
        self.client
            .delete_no_content(&format!("comments/{comment_id}"))
            .await
    }
}
