/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 18/10/26
******************************************************************************/
use crate::constants::{DEFAULT_PAGE_SIZE, MAX_BIO_LEN, MAX_COMMENT_LEN, MAX_POST_TITLE_LEN};
use crate::error::AppError;
use crate::presentation::post::PostType;
use pretty_simple_display::DisplaySimple;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Credentials sent to `auth/login`
#[derive(Clone, Serialize, Deserialize, PartialEq)]
pub struct LoginRequest {
    /// Login name
    pub username: String,
    /// Plain-text password
    pub password: String,
}

impl LoginRequest {
    /// Creates a login request
    pub fn new(username: impl Into<String>, password: impl Into<String>) -> Self {
        Self {
            username: username.into(),
            password: password.into(),
        }
    }
}

impl fmt::Debug for LoginRequest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("LoginRequest")
            .field("username", &self.username)
            .field("password", &"***")
            .finish()
    }
}

/// Body of post creation and update requests
#[derive(Debug, Clone, DisplaySimple, Serialize, Deserialize, PartialEq, Default)]
#[serde(rename_all = "camelCase")]
pub struct PostCreateDto {
    /// Title, required and at most 1000 characters
    pub title: String,
    /// Body text
    #[serde(skip_serializing_if = "Option::is_none")]
    pub content: Option<String>,
    /// Visibility, `PUBLIC` unless stated otherwise
    #[serde(rename = "type")]
    pub post_type: PostType,
    /// URL of an already uploaded image
    #[serde(skip_serializing_if = "Option::is_none")]
    pub image_url: Option<String>,
}

impl PostCreateDto {
    /// Creates a public post body with the given title and content
    pub fn new(title: impl Into<String>, content: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            content: Some(content.into()),
            ..Self::default()
        }
    }

    /// Checks the constraints the backend enforces on posts
    pub fn validate(&self) -> Result<(), AppError> {
        validate_title(&self.title)
    }
}

/// Body of a profile update
#[derive(Debug, Clone, DisplaySimple, Serialize, Deserialize, PartialEq, Default)]
#[serde(rename_all = "camelCase")]
pub struct UserUpdateDto {
    /// New email address
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    /// New first name
    #[serde(skip_serializing_if = "Option::is_none")]
    pub first_name: Option<String>,
    /// New last name
    #[serde(skip_serializing_if = "Option::is_none")]
    pub last_name: Option<String>,
    /// New bio, at most 1000 characters
    #[serde(skip_serializing_if = "Option::is_none")]
    pub bio: Option<String>,
    /// URL of an already uploaded profile image
    #[serde(skip_serializing_if = "Option::is_none")]
    pub profile_image: Option<String>,
}

impl UserUpdateDto {
    /// Checks the constraints the backend enforces on profile updates
    ///
    /// The email test only rejects values without an `@`. Stricter address
    /// rules are left to the backend, whose rejection comes back as
    /// [`AppError::Api`] with status 400.
    pub fn validate(&self) -> Result<(), AppError> {
        if let Some(bio) = &self.bio {
            if bio.chars().count() > MAX_BIO_LEN {
                return Err(AppError::InvalidInput(format!(
                    "bio cannot exceed {MAX_BIO_LEN} characters"
                )));
            }
        }
        if let Some(email) = &self.email {
            if !email.contains('@') {
                return Err(AppError::InvalidInput(format!(
                    "email should be valid: {email}"
                )));
            }
        }
        Ok(())
    }
}

/// Body of comment creation
#[derive(Debug, Clone, DisplaySimple, Serialize, Deserialize, PartialEq, Default)]
pub struct CommentCreateDto {
    /// Comment text, required and at most 2000 characters
    pub content: String,
}

impl CommentCreateDto {
    /// Creates a comment body
    pub fn new(content: impl Into<String>) -> Self {
        Self {
            content: content.into(),
        }
    }

    /// Checks the constraints the backend enforces on comments
    pub fn validate(&self) -> Result<(), AppError> {
        if self.content.trim().is_empty() {
            return Err(AppError::InvalidInput("content is required".to_string()));
        }
        if self.content.chars().count() > MAX_COMMENT_LEN {
            return Err(AppError::InvalidInput(format!(
                "content cannot exceed {MAX_COMMENT_LEN} characters"
            )));
        }
        Ok(())
    }
}

/// Paging parameters of list endpoints
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PageRequest {
    /// Zero-based page index
    pub page: u32,
    /// Page size
    pub size: u32,
    /// Sort expressions such as `createdAt,desc`
    pub sort: Vec<String>,
}

impl Default for PageRequest {
    fn default() -> Self {
        Self {
            page: 0,
            size: DEFAULT_PAGE_SIZE,
            sort: Vec::new(),
        }
    }
}

impl PageRequest {
    /// Creates a request for the given page and size
    #[must_use]
    pub fn new(page: u32, size: u32) -> Self {
        Self {
            page,
            size,
            sort: Vec::new(),
        }
    }

    /// Adds a sort expression
    #[must_use]
    pub fn sorted_by(mut self, sort: impl Into<String>) -> Self {
        self.sort.push(sort.into());
        self
    }

    /// Query parameters in the order the backend expects them
    #[must_use]
    pub fn to_query(&self) -> Vec<(String, String)> {
        let mut query = vec![
            ("page".to_string(), self.page.to_string()),
            ("size".to_string(), self.size.to_string()),
        ];
        query.extend(self.sort.iter().map(|s| ("sort".to_string(), s.clone())));
        query
    }
}

/// An image to upload as a multipart part
#[derive(Clone, PartialEq)]
pub struct ImageUpload {
    /// File name reported to the backend
    pub file_name: String,
    /// MIME type such as `image/png`
    pub mime_type: String,
    /// Raw bytes
    pub bytes: Vec<u8>,
}

impl ImageUpload {
    /// Creates an upload from raw bytes
    pub fn new(
        file_name: impl Into<String>,
        mime_type: impl Into<String>,
        bytes: impl Into<Vec<u8>>,
    ) -> Self {
        Self {
            file_name: file_name.into(),
            mime_type: mime_type.into(),
            bytes: bytes.into(),
        }
    }

    /// Builds the multipart part for this image
    pub fn to_part(&self) -> Result<reqwest::multipart::Part, AppError> {
        if self.bytes.is_empty() {
            return Err(AppError::InvalidInput("image is empty".to_string()));
        }
        reqwest::multipart::Part::bytes(self.bytes.clone())
            .file_name(self.file_name.clone())
            .mime_str(&self.mime_type)
            .map_err(|e| AppError::InvalidInput(format!("invalid mime type {}: {e}", self.mime_type)))
    }
}

impl fmt::Debug for ImageUpload {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ImageUpload")
            .field("file_name", &self.file_name)
            .field("mime_type", &self.mime_type)
            .field("len", &self.bytes.len())
            .finish()
    }
}

/// Checks a post title against the backend constraints
pub fn validate_title(title: &str) -> Result<(), AppError> {
    if title.trim().is_empty() {
        return Err(AppError::InvalidInput("title is required".to_string()));
    }
    if title.chars().count() > MAX_POST_TITLE_LEN {
        return Err(AppError::InvalidInput(format!(
            "title cannot exceed {MAX_POST_TITLE_LEN} characters"
        )));
    }
    Ok(())
}
