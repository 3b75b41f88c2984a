/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 18/10/26
******************************************************************************/

/// Base URL used when `POST_NOW_API_URL` is not set
pub const DEFAULT_API_BASE_URL: &str = "http://localhost:8090/api";
/// Environment variable overriding the API base URL
pub const API_URL_ENV: &str = "POST_NOW_API_URL";
/// Environment variable overriding the request timeout in seconds
pub const API_TIMEOUT_ENV: &str = "POST_NOW_API_TIMEOUT";
/// Environment variable overriding the path of the on-disk token store
pub const STORAGE_PATH_ENV: &str = "POST_NOW_STORAGE_PATH";
/// Default request timeout in seconds
pub const DEFAULT_TIMEOUT_SECS: u64 = 30;
/// Default location of the on-disk token store
pub const DEFAULT_STORAGE_PATH: &str = ".post_now/storage.json";
/// Storage key under which the bearer token is kept
pub const AUTH_TOKEN_KEY: &str = "authToken";
/// User agent string sent with every request
pub const USER_AGENT: &str = "post-now-client/0.1.0";
/// Default page size used by the backend for list endpoints
pub const DEFAULT_PAGE_SIZE: u32 = 20;
/// Maximum length of a post title accepted by the backend
pub const MAX_POST_TITLE_LEN: usize = 1000;
/// Maximum length of a comment accepted by the backend
pub const MAX_COMMENT_LEN: usize = 2000;
/// Maximum length of a user bio accepted by the backend
pub const MAX_BIO_LEN: usize = 1000;
