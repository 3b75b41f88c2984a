use post_now_client::model::responses::{
    CountResponse, LikedResponse, LoginResponse, TokenValidation,
};

#[test]
fn test_login_response_deserialization() {
    let json = r#"{"token":"eyJhbGciOi","username":"alice","message":"Login successful"}"#;
    let response: LoginResponse = serde_json::from_str(json).unwrap();
    assert_eq!(response.token, "eyJhbGciOi");
    assert_eq!(response.username, "alice");
    assert_eq!(response.message.as_deref(), Some("Login successful"));
    assert!(!format!("{response:?}").contains("eyJhbGciOi"));
}

#[test]
fn test_token_validation_deserialization() {
    let valid: TokenValidation =
        serde_json::from_str(r#"{"valid":true,"username":"alice"}"#).unwrap();
    assert!(valid.valid);
    assert_eq!(valid.username.as_deref(), Some("alice"));
    assert_eq!(valid.error, None);

    let invalid: TokenValidation =
        serde_json::from_str(r#"{"valid":false,"error":"Invalid token"}"#).unwrap();
    assert!(!invalid.valid);
    assert_eq!(invalid.error.as_deref(), Some("Invalid token"));
}

#[test]
fn test_small_bodies() {
    let count: CountResponse = serde_json::from_str(r#"{"count":42}"#).unwrap();
    assert_eq!(count.count, 42);
    let liked: LikedResponse = serde_json::from_str(r#"{"liked":true}"#).unwrap();
    assert!(liked.liked);
}
