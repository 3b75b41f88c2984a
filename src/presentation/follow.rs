/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 18/10/26
******************************************************************************/

use crate::presentation::user::UserSummaryDto;
use chrono::NaiveDateTime;
use pretty_simple_display::DisplaySimple;
use serde::{Deserialize, Serialize};

/// A follow relationship
#[derive(Debug, Clone, DisplaySimple, Serialize, Deserialize, PartialEq, Default)]
#[serde(rename_all = "camelCase")]
pub struct FollowDto {
    /// Relationship identifier
    pub id: i64,
    /// The user who follows
    pub follower: UserSummaryDto,
    /// The user being followed
    pub following: UserSummaryDto,
    /// Creation time
    #[serde(default)]
    pub created_at: Option<NaiveDateTime>,
}

/// Follower counts of a user
#[derive(Debug, Clone, DisplaySimple, Serialize, Deserialize, PartialEq, Default)]
#[serde(rename_all = "camelCase")]
pub struct FollowStats {
    /// Number of followers
    pub followers: u64,
    /// Number of followed users
    pub following: u64,
    /// Whether the authenticated user follows this user; absent for anonymous calls
    #[serde(default)]
    pub is_following: Option<bool>,
}
