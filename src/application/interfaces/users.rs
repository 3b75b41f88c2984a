/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 18/10/26
******************************************************************************/

use crate::error::AppError;
use crate::model::requests::{ImageUpload, PageRequest, UserUpdateDto};
use crate::presentation::{Page, UserDto};
use async_trait::async_trait;

/// Interface for the user profile endpoints
#[async_trait]
pub trait UsersService: Send + Sync {
    /// Profile of the authenticated user
    async fn get_current_user(&self) -> Result<UserDto, AppError>;

    /// Public profile of `username`
    async fn get_user_by_username(&self, username: &str) -> Result<UserDto, AppError>;

    /// Lists all users
    async fn get_all_users(&self, page: &PageRequest) -> Result<Page<UserDto>, AppError>;

    /// Searches users by name
    async fn search_users(&self, query: &str, page: &PageRequest)
    -> Result<Page<UserDto>, AppError>;

    /// Updates the profile of the authenticated user
    async fn update_current_user(&self, update: &UserUpdateDto) -> Result<UserDto, AppError>;

    /// Deletes the authenticated user's account
    async fn delete_current_user(&self) -> Result<(), AppError>;

    /// Uploads a new profile image
    async fn upload_profile_image(&self, image: &ImageUpload) -> Result<UserDto, AppError>;

    /// Removes the profile image
    async fn delete_profile_image(&self) -> Result<UserDto, AppError>;
}
