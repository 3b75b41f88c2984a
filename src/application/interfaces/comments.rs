/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 18/10/26
******************************************************************************/

use crate::error::AppError;
use crate::model::requests::{CommentCreateDto, PageRequest};
use crate::presentation::{CommentDto, Page};
use async_trait::async_trait;

/// Interface for the comments endpoints
#[async_trait]
pub trait CommentsService: Send + Sync {
    /// Lists the comments on a post
    async fn get_comments_by_post_id(
        &self,
        post_id: i64,
        page: &PageRequest,
    ) -> Result<Page<CommentDto>, AppError>;

    /// Lists the comments written by `username`
    async fn get_comments_by_username(
        &self,
        username: &str,
        page: &PageRequest,
    ) -> Result<Page<CommentDto>, AppError>;

    /// Comments on a post
    async fn create_comment(
        &self,
        post_id: i64,
        comment: &CommentCreateDto,
    ) -> Result<CommentDto, AppError>;

    /// Deletes one of the authenticated user's comments
    async fn delete_comment(&self, comment_id: i64) -> Result<(), AppError>;
}
