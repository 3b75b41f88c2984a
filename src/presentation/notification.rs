/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 18/10/26
******************************************************************************/

use crate::presentation::user::UserSummaryDto;
use chrono::NaiveDateTime;
use pretty_simple_display::DisplaySimple;
use serde::{Deserialize, Serialize};

/// What triggered a notification
#[derive(Debug, Clone, Copy, DisplaySimple, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum NotificationType {
    /// A followed user published a post
    NewPost,
    /// Someone liked one of your posts
    NewLike,
    /// Someone commented on one of your posts
    NewComment,
    /// Someone followed you
    NewFollow,
}

/// A notification addressed to the authenticated user
#[derive(Debug, Clone, DisplaySimple, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct NotificationDto {
    /// Notification identifier
    pub id: i64,
    /// Trigger
    #[serde(rename = "type")]
    pub notification_type: NotificationType,
    /// User who caused the notification
    #[serde(default)]
    pub actor: Option<UserSummaryDto>,
    /// Related post
    #[serde(default)]
    pub post_id: Option<i64>,
    /// Related comment
    #[serde(default)]
    pub comment_id: Option<i64>,
    /// Whether the notification has been read
    #[serde(default)]
    pub read: bool,
    /// Creation time
    #[serde(default)]
    pub created_at: Option<NaiveDateTime>,
    /// Human readable message
    #[serde(default)]
    pub message: Option<String>,
}
