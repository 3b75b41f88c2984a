/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 18/10/26
******************************************************************************/

use crate::error::AppError;
use crate::model::responses::MessageResponse;
use async_trait::async_trait;

/// Interface for the likes endpoints
#[async_trait]
pub trait LikesService: Send + Sync {
    /// Number of likes on a post
    async fn get_likes_count(&self, post_id: i64) -> Result<u64, AppError>;

    /// Whether the authenticated user liked a post
    async fn is_post_liked_by_user(&self, post_id: i64) -> Result<bool, AppError>;

    /// Likes a post
    async fn like_post(&self, post_id: i64) -> Result<MessageResponse, AppError>;

    /// Removes a like
    async fn unlike_post(&self, post_id: i64) -> Result<MessageResponse, AppError>;

    /// Likes the post if not liked yet, unlikes it otherwise
    async fn toggle_like(&self, post_id: i64) -> Result<MessageResponse, AppError>;
}
