use crate::common::{api_client, mock_server, page_body, user_summary};
use mockito::Matcher;
use post_now_client::prelude::*;
use serde_json::json;

#[tokio::test]
async fn test_get_user_by_username() {
    let mut server = mock_server().await;
    let get = server
        .mock("GET", "/api/users/bob")
        .with_status(200)
        .with_body(r#"{"id":2,"username":"bob","role":"USER"}"#)
        .create_async()
        .await;

    let client = api_client(&server);
    let user = client.users.get_user_by_username("bob").await.unwrap();

    assert_eq!(user.id, 2);
    assert_eq!(user.role, Some(Role::User));
    get.assert_async().await;
}

#[tokio::test]
async fn test_search_users() {
    let mut server = mock_server().await;
    let search = server
        .mock("GET", "/api/users/search")
        .match_query(Matcher::UrlEncoded("query".into(), "bo".into()))
        .with_status(200)
        .with_body(page_body(json!([user_summary(2, "bob")])))
        .create_async()
        .await;

    let client = api_client(&server);
    let page = client
        .users
        .search_users("bo", &PageRequest::default())
        .await
        .unwrap();

    assert_eq!(page.content[0].username, "bob");
    search.assert_async().await;
}

#[tokio::test]
async fn test_update_current_user() {
    let mut server = mock_server().await;
    let update = server
        .mock("PUT", "/api/users/me")
        .match_header("authorization", "Bearer T")
        .match_body(Matcher::Json(json!({ "bio": "hello" })))
        .with_status(200)
        .with_body(r#"{"id":1,"username":"alice","bio":"hello"}"#)
        .create_async()
        .await;

    let client = api_client(&server);
    client.set_auth_token("T").unwrap();
    let changes = UserUpdateDto {
        bio: Some("hello".to_string()),
        ..UserUpdateDto::default()
    };
    let user = client.users.update_current_user(&changes).await.unwrap();

    assert_eq!(user.bio.as_deref(), Some("hello"));
    update.assert_async().await;
}

#[tokio::test]
async fn test_current_user_requires_token() {
    let mut server = mock_server().await;
    let me = server
        .mock("GET", "/api/users/me")
        .match_header("authorization", Matcher::Missing)
        .with_status(401)
        .create_async()
        .await;

    let client = api_client(&server);
    let result = client.users.get_current_user().await;

    assert!(matches!(result, Err(AppError::Unauthorized)));
    me.assert_async().await;
}

#[tokio::test]
async fn test_delete_profile_image() {
    let mut server = mock_server().await;
    let delete = server
        .mock("DELETE", "/api/users/me/profile-image")
        .with_status(200)
        .with_body(r#"{"id":1,"username":"alice","profileImage":null}"#)
        .create_async()
        .await;

    let client = api_client(&server);
    client.set_auth_token("T").unwrap();
    let user = client.users.delete_profile_image().await.unwrap();

    assert_eq!(user.profile_image, None);
    delete.assert_async().await;
}

#[tokio::test]
async fn test_username_is_percent_encoded_in_path() {
    let mut server = mock_server().await;
    let get = server
        .mock("GET", "/api/users/john%20doe")
        .with_status(200)
        .with_body(r#"{"id":3,"username":"john doe"}"#)
        .create_async()
        .await;
    let stats = server
        .mock("GET", "/api/users/a%2Fb/follow-stats")
        .with_status(200)
        .with_body(r#"{"followers":0,"following":0}"#)
        .create_async()
        .await;

    let client = api_client(&server);
    let user = client.users.get_user_by_username("john doe").await.unwrap();
    let follow_stats = client.follow.get_follow_stats("a/b").await.unwrap();

    assert_eq!(user.username, "john doe");
    assert_eq!(follow_stats.followers, 0);
    get.assert_async().await;
    stats.assert_async().await;
}
