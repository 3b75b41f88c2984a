use post_now_client::error::AppError;
use post_now_client::storage::{KeyValueStore, MemoryStore, TokenStore};
use std::sync::Arc;

struct BrokenStore;

impl KeyValueStore for BrokenStore {
    fn get_item(&self, _key: &str) -> Result<Option<String>, AppError> {
        Err(AppError::Storage("unavailable".to_string()))
    }

    fn set_item(&self, _key: &str, _value: &str) -> Result<(), AppError> {
        Err(AppError::Storage("unavailable".to_string()))
    }

    fn remove_item(&self, _key: &str) -> Result<(), AppError> {
        Err(AppError::Storage("unavailable".to_string()))
    }
}

#[test]
fn token_lives_under_auth_token_key() {
    let store = Arc::new(MemoryStore::new());
    let tokens = TokenStore::new(store.clone());

    tokens.save("jwt").unwrap();
    assert_eq!(store.get_item("authToken").unwrap().as_deref(), Some("jwt"));
    assert_eq!(tokens.load().as_deref(), Some("jwt"));

    tokens.remove().unwrap();
    assert_eq!(tokens.load(), None);
    assert!(store.is_empty());
}

#[test]
fn read_failure_loads_as_none() {
    let tokens = TokenStore::new(Arc::new(BrokenStore));
    assert_eq!(tokens.load(), None);
}

#[test]
fn write_failures_are_returned() {
    let tokens = TokenStore::new(Arc::new(BrokenStore));
    assert!(matches!(tokens.save("jwt"), Err(AppError::Storage(_))));
    assert!(matches!(tokens.remove(), Err(AppError::Storage(_))));
}

#[test]
fn debug_does_not_print_token() {
    let store = Arc::new(MemoryStore::new());
    let tokens = TokenStore::new(store);
    tokens.save("very-secret").unwrap();
    assert!(!format!("{tokens:?}").contains("very-secret"));
}
