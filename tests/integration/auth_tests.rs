use crate::common::{api_client, default_page_query, mock_server, page_body};
use mockito::Matcher;
use post_now_client::prelude::*;
use serde_json::json;

#[tokio::test]
async fn test_login_stores_token_and_authorizes_every_client() {
    let mut server = mock_server().await;
    let login = server
        .mock("POST", "/api/auth/login")
        .match_header("content-type", "application/json")
        .match_header("authorization", Matcher::Missing)
        .match_body(Matcher::Json(json!({ "username": "alice", "password": "secret" })))
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(r#"{"token":"T","username":"alice","message":"Login successful"}"#)
        .create_async()
        .await;
    let me = server
        .mock("GET", "/api/users/me")
        .match_header("authorization", "Bearer T")
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(r#"{"id":1,"username":"alice"}"#)
        .create_async()
        .await;
    let count = server
        .mock("GET", "/api/notifications/unread-count")
        .match_header("authorization", "Bearer T")
        .with_status(200)
        .with_body(r#"{"count":3}"#)
        .create_async()
        .await;

    let client = api_client(&server);
    let response = client.login("alice", "secret").await.unwrap();

    assert_eq!(response.username, "alice");
    assert_eq!(client.get_auth_token().as_deref(), Some("T"));
    assert_eq!(client.users.get_current_user().await.unwrap().username, "alice");
    assert_eq!(client.notifications.get_unread_count().await.unwrap(), 3);

    login.assert_async().await;
    me.assert_async().await;
    count.assert_async().await;
}

#[tokio::test]
async fn test_rejected_login_keeps_client_unauthenticated() {
    let mut server = mock_server().await;
    let login = server
        .mock("POST", "/api/auth/login")
        .with_status(401)
        .with_body(r#"{"error":"Invalid credentials"}"#)
        .create_async()
        .await;

    let client = api_client(&server);
    let result = client.login("alice", "wrong").await;

    assert!(matches!(result, Err(AppError::Unauthorized)));
    assert!(!client.is_authenticated());
    assert!(client.clients().iter().all(|c| c.access_token().is_none()));
    login.assert_async().await;
}

#[tokio::test]
async fn test_login_requires_credentials() {
    let mut server = mock_server().await;
    let login = server
        .mock("POST", "/api/auth/login")
        .expect(0)
        .create_async()
        .await;

    let client = api_client(&server);
    let result = client.auth.login(&LoginRequest::new(" ", "secret")).await;

    assert!(matches!(result, Err(AppError::InvalidInput(_))));
    login.assert_async().await;
}

#[tokio::test]
async fn test_logout_drops_bearer_header() {
    let mut server = mock_server().await;
    let authorized = server
        .mock("GET", "/api/posts")
        .match_query(default_page_query())
        .match_header("authorization", "Bearer T")
        .with_status(200)
        .with_body(page_body(json!([])))
        .create_async()
        .await;
    let anonymous = server
        .mock("GET", "/api/posts")
        .match_query(default_page_query())
        .match_header("authorization", Matcher::Missing)
        .with_status(200)
        .with_body(page_body(json!([])))
        .create_async()
        .await;

    let client = api_client(&server);
    client.set_auth_token("T").unwrap();
    client.posts.get_all_posts(&PageRequest::default()).await.unwrap();

    client.logout().unwrap();
    client.posts.get_all_posts(&PageRequest::default()).await.unwrap();

    authorized.assert_async().await;
    anonymous.assert_async().await;
}

#[tokio::test]
async fn test_validate_token_without_token_skips_request() {
    let mut server = mock_server().await;
    let validate = server
        .mock("GET", "/api/auth/validate")
        .expect(0)
        .create_async()
        .await;

    let client = api_client(&server);
    let validation = client.auth.validate_token().await.unwrap();

    assert!(!validation.valid);
    validate.assert_async().await;
}

#[tokio::test]
async fn test_validate_token_valid() {
    let mut server = mock_server().await;
    let validate = server
        .mock("GET", "/api/auth/validate")
        .match_header("authorization", "Bearer T")
        .with_status(200)
        .with_body(r#"{"valid":true,"username":"alice"}"#)
        .create_async()
        .await;

    let client = api_client(&server);
    client.set_auth_token("T").unwrap();
    let validation = client.auth.validate_token().await.unwrap();

    assert!(validation.valid);
    assert_eq!(validation.username.as_deref(), Some("alice"));
    validate.assert_async().await;
}

#[tokio::test]
async fn test_validate_token_rejected() {
    let mut server = mock_server().await;
    let validate = server
        .mock("GET", "/api/auth/validate")
        .with_status(400)
        .with_body(r#"{"valid":false,"error":"Invalid token"}"#)
        .create_async()
        .await;

    let client = api_client(&server);
    client.set_auth_token("expired").unwrap();
    let validation = client.auth.validate_token().await.unwrap();

    assert!(!validation.valid);
    assert_eq!(validation.error.as_deref(), Some("Invalid token"));
    validate.assert_async().await;
}

#[tokio::test]
async fn test_unreachable_backend_is_network_error() {
    let client = ApiClient::in_memory(Config::with_base_url("http://127.0.0.1:1/api"));
    let result = client.posts.get_post_by_id(1).await;
    assert!(matches!(result, Err(AppError::Network(_))));
}

#[tokio::test]
async fn test_empty_token_sends_no_bearer_header() {
    let mut server = mock_server().await;
    let anonymous = server
        .mock("GET", "/api/posts/1")
        .match_header("authorization", Matcher::Missing)
        .with_status(200)
        .with_body(crate::common::post_json(1, "one").to_string())
        .create_async()
        .await;

    let client = api_client(&server);
    client.set_auth_token("").unwrap();
    client.posts.get_post_by_id(1).await.unwrap();

    anonymous.assert_async().await;
}
