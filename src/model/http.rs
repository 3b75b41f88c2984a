/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 18/10/26
******************************************************************************/
use crate::application::configuration::{Configuration, ConfigurationHandle};
use crate::application::interfaces::scoped::ResourceGroup;
use crate::error::AppError;
use crate::model::responses::ErrorBody;
use reqwest::header::CONTENT_TYPE;
use reqwest::multipart::Form;
use reqwest::{Client, Method, RequestBuilder, Response, StatusCode};
use serde::Serialize;
use serde::de::DeserializeOwned;
use tracing::{debug, error};

/// HTTP plumbing shared by every resource client
///
/// Holds the resource group's [`ConfigurationHandle`] and reads it on every
/// request, so a token written into the handle applies to the next call.
/// Failures are reported as they happen; nothing is retried.
#[derive(Clone, Debug)]
pub struct ResourceClient {
    group: ResourceGroup,
    http_client: Client,
    configuration: ConfigurationHandle,
}

impl ResourceClient {
    /// Creates a client for `group` owning a new slot for `configuration`
    pub fn new(group: ResourceGroup, http_client: Client, configuration: Configuration) -> Self {
        Self {
            group,
            http_client,
            configuration: ConfigurationHandle::new(configuration),
        }
    }

    /// Resource group this client serves
    #[must_use]
    pub fn group(&self) -> ResourceGroup {
        self.group
    }

    /// The configuration slot of this client
    #[must_use]
    pub fn configuration(&self) -> &ConfigurationHandle {
        &self.configuration
    }

    /// Makes a GET request and decodes the JSON body
    pub async fn get<T: DeserializeOwned>(
        &self,
        path: &str,
        query: &[(String, String)],
    ) -> Result<T, AppError> {
        let request = self.request(Method::GET, path, true).query(query);
        let response = self.send(request).await?;
        parse_json(response).await
    }

    /// Makes a POST request with a JSON body and decodes the JSON response
    pub async fn post<B: Serialize + ?Sized, T: DeserializeOwned>(
        &self,
        path: &str,
        body: &B,
    ) -> Result<T, AppError> {
        let request = self.request(Method::POST, path, true).json(body);
        let response = self.send(request).await?;
        parse_json(response).await
    }

    /// Makes a POST request without a body and decodes the JSON response
    pub async fn post_empty<T: DeserializeOwned>(&self, path: &str) -> Result<T, AppError> {
        let request = self.request(Method::POST, path, true);
        let response = self.send(request).await?;
        parse_json(response).await
    }

    /// Makes a multipart POST request and decodes the JSON response
    pub async fn post_multipart<T: DeserializeOwned>(
        &self,
        path: &str,
        form: Form,
    ) -> Result<T, AppError> {
        // reqwest only sets the multipart boundary header when none is present
        let request = self.request(Method::POST, path, false).multipart(form);
        let response = self.send(request).await?;
        parse_json(response).await
    }

    /// Makes a PUT request with a JSON body and decodes the JSON response
    pub async fn put<B: Serialize + ?Sized, T: DeserializeOwned>(
        &self,
        path: &str,
        body: &B,
    ) -> Result<T, AppError> {
        let request = self.request(Method::PUT, path, true).json(body);
        let response = self.send(request).await?;
        parse_json(response).await
    }

    /// Makes a PUT request without a body, discarding the response body
    pub async fn put_no_content(&self, path: &str) -> Result<(), AppError> {
        let request = self.request(Method::PUT, path, true);
        self.send(request).await?;
        Ok(())
    }

    /// Makes a DELETE request and decodes the JSON response
    pub async fn delete<T: DeserializeOwned>(&self, path: &str) -> Result<T, AppError> {
        let request = self.request(Method::DELETE, path, true);
        let response = self.send(request).await?;
        parse_json(response).await
    }

    /// Makes a DELETE request, discarding the response body
    pub async fn delete_no_content(&self, path: &str) -> Result<(), AppError> {
        let request = self.request(Method::DELETE, path, true);
        self.send(request).await?;
        Ok(())
    }

    fn request(&self, method: Method, path: &str, with_content_type: bool) -> RequestBuilder {
        let config = self.configuration.snapshot();
        let url = config.url_for(path);
        debug!("[{}] {} {}", self.group, method, url);

        let mut request = self.http_client.request(method, &url);
        for (name, value) in &config.headers {
            if !with_content_type && name.eq_ignore_ascii_case(CONTENT_TYPE.as_str()) {
                continue;
            }
            request = request.header(name.as_str(), value.as_str());
        }
        if let Some(token) = config.access_token.as_deref() {
            request = request.bearer_auth(token);
        }
        request
    }

    async fn send(&self, request: RequestBuilder) -> Result<Response, AppError> {
        let response = request.send().await?;
        let status = response.status();
        debug!("[{}] Response status: {}", self.group, status);

        if status.is_success() {
            return Ok(response);
        }

        let body = response.text().await.unwrap_or_default();
        match status {
            StatusCode::UNAUTHORIZED => {
                error!("[{}] Unauthorized: {}", self.group, body);
                Err(AppError::Unauthorized)
            }
            StatusCode::NOT_FOUND => {
                debug!("[{}] Not found", self.group);
                Err(AppError::NotFound)
            }
            _ => {
                error!("[{}] Request failed with status {}: {}", self.group, status, body);
                Err(AppError::Api {
                    status,
                    message: error_message(&body),
                })
            }
        }
    }
}

/// Extracts the `error` field of a failure body, falling back to the raw text
#[must_use]
pub fn error_message(body: &str) -> String {
    serde_json::from_str::<ErrorBody>(body)
        .map(|b| b.error)
        .unwrap_or_else(|_| body.trim().to_string())
}

async fn parse_json<T: DeserializeOwned>(response: Response) -> Result<T, AppError> {
    let url = response.url().clone();
    let body = response.text().await?;
    serde_json::from_str(&body)
        .map_err(|e| AppError::Deserialization(format!("{url}: {e}")))
}
