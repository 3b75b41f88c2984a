/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 18/10/26
******************************************************************************/
use crate::application::configuration::ConfigurationHandle;
use serde::{Deserialize, Serialize};
use std::fmt;

/// The resource groups of the API, one client each
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ResourceGroup {
    /// Login and token validation
    Auth,
    /// Posts and post images
    Posts,
    /// User profiles
    Users,
    /// Comments on posts
    Comments,
    /// Post likes
    Likes,
    /// Notifications of the authenticated user
    Notifications,
    /// Follow relationships
    Follow,
}

impl ResourceGroup {
    /// Every group, in registry order
    pub const ALL: [ResourceGroup; 7] = [
        ResourceGroup::Auth,
        ResourceGroup::Posts,
        ResourceGroup::Users,
        ResourceGroup::Comments,
        ResourceGroup::Likes,
        ResourceGroup::Notifications,
        ResourceGroup::Follow,
    ];

    /// Name the group is exposed under in the registry
    #[must_use]
    pub fn name(&self) -> &'static str {
        match self {
            ResourceGroup::Auth => "auth",
            ResourceGroup::Posts => "posts",
            ResourceGroup::Users => "users",
            ResourceGroup::Comments => "comments",
            ResourceGroup::Likes => "likes",
            ResourceGroup::Notifications => "notifications",
            ResourceGroup::Follow => "follow",
        }
    }
}

impl fmt::Display for ResourceGroup {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// A resource client whose bearer token can be changed in place
///
/// Every client held by the registry implements this, which is what lets
/// the registry update all of them on login and logout.
pub trait AuthScoped: Send + Sync {
    /// Group served by this client
    fn resource_group(&self) -> ResourceGroup;

    /// The client's configuration slot
    fn configuration(&self) -> &ConfigurationHandle;

    /// Writes `token` into the configuration slot
    fn set_access_token(&self, token: Option<&str>) {
        self.configuration()
            .set_access_token(token.map(str::to_owned));
    }

    /// Token the next request will carry
    fn access_token(&self) -> Option<String> {
        self.configuration().access_token()
    }
}
