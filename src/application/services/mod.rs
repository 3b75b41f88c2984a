/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 18/10/26
******************************************************************************/

/// Client for the authentication endpoints
pub mod auth_api;
/// Client for the comments endpoints
pub mod comments_api;
/// Client for the follow endpoints
pub mod follow_api;
/// Client for the likes endpoints
pub mod likes_api;
/// Client for the notification endpoints
pub mod notification_api;
/// Client for the posts endpoints
pub mod posts_api;
/// Client for the user profile endpoints
pub mod users_api;

pub use auth_api::AuthApi;
pub use comments_api::CommentsApi;
pub use follow_api::FollowApi;
pub use likes_api::LikesApi;
pub use notification_api::NotificationApi;
pub use posts_api::PostsApi;
pub use users_api::UsersApi;
