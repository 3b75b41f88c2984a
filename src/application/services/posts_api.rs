/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 18/10/26
******************************************************************************/

use crate::application::configuration::{Configuration, ConfigurationHandle};
use crate::application::interfaces::{AuthScoped, PostsService, ResourceGroup};
use crate::error::AppError;
use crate::model::http::ResourceClient;
use crate::model::requests::{ImageUpload, PageRequest, PostCreateDto, validate_title};
use crate::presentation::{Page, PostDto};
use async_trait::async_trait;
use reqwest::Client;
use reqwest::multipart::Form;
use tracing::{debug, info};

/// Client for the `posts` endpoints
#[derive(Clone, Debug)]
pub struct PostsApi {
    client: ResourceClient,
}

impl PostsApi {
    /// Creates the client with its own configuration slot
    pub fn new(http_client: Client, configuration: Configuration) -> Self {
        Self {
            client: ResourceClient::new(ResourceGroup::Posts, http_client, configuration),
        }
    }
}

impl AuthScoped for PostsApi {
    fn resource_group(&self) -> ResourceGroup {
        ResourceGroup::Posts
    }

    fn configuration(&self) -> &ConfigurationHandle {
        self.client.configuration()
    }
}

#[async_trait]
impl PostsService for PostsApi {
    async fn get_all_posts(&self, page: &PageRequest) -> Result<Page<PostDto>, AppError> {
        let posts: Page<PostDto> = self.client.get("posts", &page.to_query()).await?;
        debug!("Fetched {} posts", posts.content.len());
        Ok(posts)
    }

    async fn get_post_by_id(&self, id: i64) -> Result<PostDto, AppError> {
        self.client.get(&format!("posts/{id}"), &[]).await
    }

    async fn search_posts(
        &self,
        query: &str,
        page: &PageRequest,
    ) -> Result<Page<PostDto>, AppError> {
        let mut params = vec![("query".to_string(), query.to_string())];
        params.extend(page.to_query());
        self.client.get("posts/search", &params).await
    }

    async fn get_posts_by_author(
        &self,
        username: &str,
        page: &PageRequest,
    ) -> Result<Page<PostDto>, AppError> {
        let path = format!("posts/user/{}", urlencoding::encode(username));
        self.client.get(&path, &page.to_query()).await
    }

    async fn create_post(&self, post: &PostCreateDto) -> Result<PostDto, AppError> {
        post.validate()?;
        let created: PostDto = self.client.post("posts", post).await?;
        info!("Created post {}", created.id);
        Ok(created)
    }

    async fn create_post_with_image(
        &self,
        title: &str,
        content: &str,
        image: Option<&ImageUpload>,
    ) -> Result<PostDto, AppError> {
        validate_title(title)?;
        let mut form = Form::new()
            .text("title", title.to_string())
            .text("content", content.to_string());
        if let Some(image) = image {
            form = form.part("image", image.to_part()?);
        }
        let created: PostDto = self.client.post_multipart("posts", form).await?;
        info!("Created post {} with image: {}", created.id, image.is_some());
        Ok(created)
    }

    async fn update_post(&self, id: i64, post: &PostCreateDto) -> Result<PostDto, AppError> {
        post.validate()?;
        self.client.put(&format!("posts/{id}"), post).await
    }

    async fn update_post_image(&self, id: i64, image: &ImageUpload) -> Result<PostDto, AppError> {
        let form = Form::new().part("image", image.to_part()?);
        self.client
            .post_multipart(&format!("posts/{id}/image"), form)
            .await
    }

    async fn delete_post_image(&self, id: i64) -> Result<PostDto, AppError> {
        self.client.delete(&format!("posts/{id}/image")).await
    }

    async fn delete_post(&self, id: i64) -> Result<(), AppError> {
        self.client.delete_no_content(&format!("posts/{id}")).await?;
        info!("Deleted post {}", id);
        Ok(())
    }
}
