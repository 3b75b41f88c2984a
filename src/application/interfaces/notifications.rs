/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 18/10/26
******************************************************************************/

use crate::error::AppError;
use crate::model::requests::PageRequest;
use crate::presentation::{NotificationDto, Page};
use async_trait::async_trait;

/// Interface for the notification endpoints
#[async_trait]
pub trait NotificationService: Send + Sync {
    /// Lists all notifications of the authenticated user
    async fn get_all_notifications(
        &self,
        page: &PageRequest,
    ) -> Result<Page<NotificationDto>, AppError>;

    /// Lists unread notifications
    async fn get_unread_notifications(
        &self,
        page: &PageRequest,
    ) -> Result<Page<NotificationDto>, AppError>;

    /// Number of unread notifications
    async fn get_unread_count(&self) -> Result<u64, AppError>;

    /// Marks one notification as read
    async fn mark_as_read(&self, id: i64) -> Result<(), AppError>;

    /// Marks every notification as read
    async fn mark_all_as_read(&self) -> Result<(), AppError>;
}
