/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 18/10/26
******************************************************************************/

use crate::presentation::user::UserSummaryDto;
use chrono::NaiveDateTime;
use pretty_simple_display::DisplaySimple;
use serde::{Deserialize, Serialize};

/// A comment on a post
#[derive(Debug, Clone, DisplaySimple, Serialize, Deserialize, PartialEq, Default)]
#[serde(rename_all = "camelCase")]
pub struct CommentDto {
    /// Comment identifier
    pub id: i64,
    /// Comment text
    pub content: String,
    /// `false` once the comment has been soft-deleted
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
    /// Post the comment belongs to
    #[serde(default)]
    pub post_id: Option<i64>,
}
