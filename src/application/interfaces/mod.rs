/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 18/10/26
******************************************************************************/

/// Authentication service interface
pub mod auth;
/// Comments service interface
pub mod comments;
/// Follow service interface
pub mod follow;
/// Likes service interface
pub mod likes;
/// Notification service interface
pub mod notifications;
/// Posts service interface
pub mod posts;
/// Token capability shared by every resource client
pub mod scoped;
/// Users service interface
pub mod users;

pub use auth::AuthService;
pub use comments::CommentsService;
pub use follow::FollowService;
pub use likes::LikesService;
pub use notifications::NotificationService;
pub use posts::PostsService;
pub use scoped::{AuthScoped, ResourceGroup};
pub use users::UsersService;
