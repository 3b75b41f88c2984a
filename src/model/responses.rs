/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 18/10/26
******************************************************************************/

use pretty_simple_display::DisplaySimple;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Successful login
#[derive(Clone, Serialize, Deserialize, PartialEq)]
pub struct LoginResponse {
    /// Bearer token for subsequent requests
    pub token: String,
    /// Name of the authenticated user
    pub username: String,
    /// Human readable status
    #[serde(default)]
    pub message: Option<String>,
}

impl fmt::Debug for LoginResponse {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("LoginResponse")
            .field("token", &"***")
            .field("username", &self.username)
            .field("message", &self.message)
            .finish()
    }
}

/// Result of `auth/validate`
#[derive(Debug, Clone, DisplaySimple, Serialize, Deserialize, PartialEq, Default)]
pub struct TokenValidation {
    /// Whether the token is valid
    pub valid: bool,
    /// Owner of the token when valid
    #[serde(default)]
    pub username: Option<String>,
    /// Reason when invalid
    #[serde(default)]
    pub error: Option<String>,
}

/// `{"count": n}` bodies
#[derive(Debug, Clone, Copy, DisplaySimple, Serialize, Deserialize, PartialEq, Eq)]
pub struct CountResponse {
    /// The count
    pub count: u64,
}

/// `{"liked": bool}` bodies
#[derive(Debug, Clone, Copy, DisplaySimple, Serialize, Deserialize, PartialEq, Eq)]
pub struct LikedResponse {
    /// Whether the authenticated user liked the post
    pub liked: bool,
}

/// `{"message": "..."}` bodies
#[derive(Debug, Clone, DisplaySimple, Serialize, Deserialize, PartialEq)]
pub struct MessageResponse {
    /// The message
    pub message: String,
}

/// `{"error": "..."}` bodies returned with failing status codes
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ErrorBody {
    /// Failure reason
    pub error: String,
}
