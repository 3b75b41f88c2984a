/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 18/10/26
******************************************************************************/

use crate::presentation::user::UserSummaryDto;
use chrono::NaiveDateTime;
use pretty_simple_display::DisplaySimple;
use serde::{Deserialize, Serialize};

/// Visibility of a post
#[derive(Debug, Clone, Copy, DisplaySimple, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "UPPERCASE")]
pub enum PostType {
    /// Visible to everyone
    #[default]
    Public,
    /// Visible to the author only
    Private,
    /// Not published yet
    Draft,
}

/// A post as returned by the backend
#[derive(Debug, Clone, DisplaySimple, Serialize, Deserialize, PartialEq, Default)]
#[serde(rename_all = "camelCase")]
pub struct PostDto {
    /// Post identifier
    pub id: i64,
    /// Title
    pub title: String,
    /// Body text
    #[serde(default)]
    pub content: Option<String>,
    /// Visibility
    #[serde(rename = "type", default)]
    pub post_type: PostType,
    /// URL of the attached image
    #[serde(default)]
    pub image_url: Option<String>,
    /// `false` once the post has been soft-deleted
    #[serde(default)]
    pub active: Option<bool>,
    /// Creation time
    #[serde(default)]
    pub created_at: Option<NaiveDateTime>,
    /// Last update time
    #[serde(default)]
    pub updated_at: Option<NaiveDateTime>,
    /// Author
    #[serde(default)]
    pub author: Option<UserSummaryDto>,
    /// Number of likes
    #[serde(default)]
    pub likes_count: Option<i64>,
    /// Number of comments
    #[serde(default)]
    pub comments_count: Option<i64>,
    /// Whether the authenticated user liked this post; absent for anonymous calls
    #[serde(default)]
    pub liked_by_current_user: Option<bool>,
}
