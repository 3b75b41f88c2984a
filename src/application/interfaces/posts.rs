/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 18/10/26
******************************************************************************/

use crate::error::AppError;
use crate::model::requests::{ImageUpload, PageRequest, PostCreateDto};
use crate::presentation::{Page, PostDto};
use async_trait::async_trait;

/// Interface for the posts endpoints
#[async_trait]
pub trait PostsService: Send + Sync {
    /// Lists visible posts, newest first
    async fn get_all_posts(&self, page: &PageRequest) -> Result<Page<PostDto>, AppError>;

    /// Gets a single post
    async fn get_post_by_id(&self, id: i64) -> Result<PostDto, AppError>;

    /// Full-text search over titles and content
    async fn search_posts(&self, query: &str, page: &PageRequest)
    -> Result<Page<PostDto>, AppError>;

    /// Lists the posts written by `username`
    async fn get_posts_by_author(
        &self,
        username: &str,
        page: &PageRequest,
    ) -> Result<Page<PostDto>, AppError>;

    /// Creates a post from a JSON body
    async fn create_post(&self, post: &PostCreateDto) -> Result<PostDto, AppError>;

    /// Creates a post and uploads its image in one multipart request
    ///
    /// # Arguments
    /// * `title` - Post title, required
    /// * `content` - Post body
    /// * `image` - Optional image to attach
    async fn create_post_with_image(
        &self,
        title: &str,
        content: &str,
        image: Option<&ImageUpload>,
    ) -> Result<PostDto, AppError>;

    /// Replaces title, content and visibility of a post
    async fn update_post(&self, id: i64, post: &PostCreateDto) -> Result<PostDto, AppError>;

    /// Replaces the image of a post
    async fn update_post_image(&self, id: i64, image: &ImageUpload) -> Result<PostDto, AppError>;

    /// Removes the image of a post
    async fn delete_post_image(&self, id: i64) -> Result<PostDto, AppError>;

    /// Deletes a post
    async fn delete_post(&self, id: i64) -> Result<(), AppError>;
}
