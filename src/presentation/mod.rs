/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 18/10/26
******************************************************************************/
/// Comment models
pub mod comment;
/// Follow models
pub mod follow;
/// Notification models
pub mod notification;
/// Pagination envelope
pub mod page;
/// Post models
pub mod post;
/// User models
pub mod user;

pub use comment::CommentDto;
pub use follow::{FollowDto, FollowStats};
pub use notification::{NotificationDto, NotificationType};
pub use page::Page;
pub use post::{PostDto, PostType};
pub use user::{Role, UserDto, UserSummaryDto};
