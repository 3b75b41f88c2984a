use post_now_client::application::configuration::{
    Configuration, build_auth_configuration, default_headers,
};
use post_now_client::storage::{KeyValueStore, MemoryStore, TokenStore};
use std::sync::Arc;

#[test]
fn factory_without_token_builds_unauthenticated_configuration() {
    let tokens = TokenStore::new(Arc::new(MemoryStore::new()));
    let config = build_auth_configuration("http://localhost:8090/api", &tokens);

    assert_eq!(config.base_path, "http://localhost:8090/api");
    assert_eq!(config.access_token, None);
    assert_eq!(config.headers, default_headers());
}

#[test]
fn factory_reads_stored_token() {
    let store = Arc::new(MemoryStore::new());
    store.set_item("authToken", "jwt").unwrap();
    let config = build_auth_configuration("http://x/api", &TokenStore::new(store));
    assert_eq!(config.access_token.as_deref(), Some("jwt"));
}

#[test]
fn default_headers_are_json() {
    let config = Configuration::new("http://x", None);
    assert_eq!(config.headers.len(), 1);
    assert_eq!(
        config.headers.get("Content-Type").map(String::as_str),
        Some("application/json")
    );
}

#[test]
fn factory_treats_empty_token_as_absent() {
    let store = Arc::new(MemoryStore::new());
    store.set_item("authToken", "").unwrap();
    let config = build_auth_configuration("http://x/api", &TokenStore::new(store));
    assert_eq!(config.access_token, None);
    assert_eq!(config.authorization(), None);
}
