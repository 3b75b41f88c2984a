/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 18/10/26
******************************************************************************/

use crate::error::AppError;
use crate::model::requests::PageRequest;
use crate::presentation::{FollowDto, FollowStats, Page, UserSummaryDto};
use async_trait::async_trait;

/// Interface for the follow endpoints
#[async_trait]
pub trait FollowService: Send + Sync {
    /// Follows `username`
    async fn follow_user(&self, username: &str) -> Result<FollowDto, AppError>;

    /// Stops following `username`
    async fn unfollow_user(&self, username: &str) -> Result<(), AppError>;

    /// Lists the followers of `username`
    async fn get_followers(
        &self,
        username: &str,
        page: &PageRequest,
    ) -> Result<Page<UserSummaryDto>, AppError>;

    /// Lists the users `username` follows
    async fn get_following(
        &self,
        username: &str,
        page: &PageRequest,
    ) -> Result<Page<UserSummaryDto>, AppError>;

    /// Follower and following counts of `username`
    async fn get_follow_stats(&self, username: &str) -> Result<FollowStats, AppError>;
}
