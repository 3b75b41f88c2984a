/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 18/10/26
******************************************************************************/

use crate::error::AppError;
use crate::model::requests::LoginRequest;
use crate::model::responses::{LoginResponse, TokenValidation};
use async_trait::async_trait;

/// Interface for the authentication endpoints
#[async_trait]
pub trait AuthService: Send + Sync {
    /// Exchanges credentials for a bearer token
    ///
    /// Does not store the token; see `ApiClient::login` for that.
    async fn login(&self, request: &LoginRequest) -> Result<LoginResponse, AppError>;

    /// Asks the backend whether the configured token is still valid
    ///
    /// An invalid or missing token is reported in the returned value, not as
    /// an error.
    async fn validate_token(&self) -> Result<TokenValidation, AppError>;
}
