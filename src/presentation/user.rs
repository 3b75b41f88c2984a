/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 18/10/26
******************************************************************************/

use chrono::NaiveDateTime;
use pretty_simple_display::DisplaySimple;
use serde::{Deserialize, Serialize};

/// Role of a user account
#[derive(Debug, Clone, Copy, DisplaySimple, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "UPPERCASE")]
pub enum Role {
    /// Regular account
    #[default]
    User,
    /// Administrator account
    Admin,
}

/// Full user profile
#[derive(Debug, Clone, DisplaySimple, Serialize, Deserialize, PartialEq, Default)]
#[serde(rename_all = "camelCase")]
pub struct UserDto {
    /// User identifier
    pub id: i64,
    /// Unique login name
    pub username: String,
    /// Email address, only returned for the account owner and admins
    #[serde(default)]
    pub email: Option<String>,
    /// First name
    #[serde(default)]
    pub first_name: Option<String>,
    /// Last name
    #[serde(default)]
    pub last_name: Option<String>,
    /// Free-form profile text
    #[serde(default)]
    pub bio: Option<String>,
    /// URL of the profile image
    #[serde(default)]
    pub profile_image: Option<String>,
    /// Account role
    #[serde(default)]
    pub role: Option<Role>,
    /// Creation time
    #[serde(default)]
    pub created_at: Option<NaiveDateTime>,
    /// Last update time
    #[serde(default)]
    pub updated_at: Option<NaiveDateTime>,
}

/// Compact user view embedded in posts, comments, notifications and follows
#[derive(Debug, Clone, DisplaySimple, Serialize, Deserialize, PartialEq, Default)]
#[serde(rename_all = "camelCase")]
pub struct UserSummaryDto {
    /// User identifier
    pub id: i64,
    /// Unique login name
    pub username: String,
    /// First name
    #[serde(default)]
    pub first_name: Option<String>,
    /// Last name
    #[serde(default)]
    pub last_name: Option<String>,
    /// URL of the profile image
    #[serde(default)]
    pub profile_image: Option<String>,
}

impl UserSummaryDto {
    /// Returns "First Last" when both names are known, the username otherwise
    #[must_use]
    pub fn display_name(&self) -> String {
        match (&self.first_name, &self.last_name) {
            (Some(first), Some(last)) if !first.is_empty() && !last.is_empty() => {
                format!("{first} {last}")
            }
            _ => self.username.clone(),
        }
    }
}
