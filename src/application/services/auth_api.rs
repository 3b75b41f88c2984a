/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 18/10/26
******************************************************************************/
use crate::application::configuration::{Configuration, ConfigurationHandle};
use crate::application::interfaces::{AuthScoped, AuthService, ResourceGroup};
use crate::error::AppError;
use crate::model::http::ResourceClient;
use crate::model::requests::LoginRequest;
use crate::model::responses::{LoginResponse, TokenValidation};
use async_trait::async_trait;
use reqwest::{Client, StatusCode};
use tracing::{debug, info};

/// Client for the `auth` endpoints
#[derive(Clone, Debug)]
pub struct AuthApi {
    client: ResourceClient,
}

impl AuthApi {
    /// Creates the client with its own configuration slot
    pub fn new(http_client: Client, configuration: Configuration) -> Self {
        Self {
            client: ResourceClient::new(ResourceGroup::Auth, http_client, configuration),
        }
    }
}

impl AuthScoped for AuthApi {
    fn resource_group(&self) -> ResourceGroup {
        ResourceGroup::Auth
    }

    fn configuration(&self) -> &ConfigurationHandle {
        self.client.configuration()
    }
}

#[async_trait]
impl AuthService for AuthApi {
    async fn login(&self, request: &LoginRequest) -> Result<LoginResponse, AppError> {
        if request.username.trim().is_empty() || request.password.is_empty() {
            return Err(AppError::InvalidInput(
                "username and password are required".to_string(),
            ));
        }
        info!("Logging in as {}", request.username);
        let response: LoginResponse = self.client.post("auth/login", request).await?;
        debug!("Login accepted for {}", response.username);
        Ok(response)
    }

    async fn validate_token(&self) -> Result<TokenValidation, AppError> {
        if self.access_token().is_none() {
            return Ok(TokenValidation {
                valid: false,
                username: None,
                error: Some("no token configured".to_string()),
            });
        }
        // the backend answers 400 with a {"valid": false, ...} body for bad tokens
        match self.client.get("auth/validate", &[]).await {
            Ok(validation) => Ok(validation),
            Err(AppError::Api { status, message }) if status == StatusCode::BAD_REQUEST => {
                Ok(TokenValidation {
                    valid: false,
                    username: None,
                    error: Some(message),
                })
            }
            Err(e) => Err(e),
        }
    }
}
