use post_now_client::application::config::Config;
use post_now_client::application::interfaces::{AuthScoped, ResourceGroup};
use post_now_client::application::registry::ApiClient;
use post_now_client::error::AppError;
use post_now_client::storage::{KeyValueStore, MemoryStore};
use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};

const BASE_URL: &str = "http://localhost:8090/api";

fn new_client() -> (ApiClient, Arc<MemoryStore>) {
    let store = Arc::new(MemoryStore::new());
    let client = ApiClient::new(Config::with_base_url(BASE_URL), store.clone());
    (client, store)
}

fn tokens(client: &ApiClient) -> Vec<Option<String>> {
    client.clients().iter().map(|c| c.access_token()).collect()
}

/// Store whose writes can be made to fail on demand
#[derive(Default)]
struct FlakyStore {
    inner: MemoryStore,
    fail_writes: AtomicBool,
    fail_reads: AtomicBool,
}

impl KeyValueStore for FlakyStore {
    fn get_item(&self, key: &str) -> Result<Option<String>, AppError> {
        if self.fail_reads.load(Ordering::SeqCst) {
            return Err(AppError::Storage("read refused".to_string()));
        }
        self.inner.get_item(key)
    }

    fn set_item(&self, key: &str, value: &str) -> Result<(), AppError> {
        if self.fail_writes.load(Ordering::SeqCst) {
            return Err(AppError::Storage("write refused".to_string()));
        }
        self.inner.set_item(key, value)
    }

    fn remove_item(&self, key: &str) -> Result<(), AppError> {
        if self.fail_writes.load(Ordering::SeqCst) {
            return Err(AppError::Storage("write refused".to_string()));
        }
        self.inner.remove_item(key)
    }
}

#[test]
fn new_registry_without_token_is_unauthenticated() {
    let (client, _) = new_client();
    assert_eq!(client.get_auth_token(), None);
    assert!(!client.is_authenticated());
    assert!(tokens(&client).iter().all(Option::is_none));
}

#[test]
fn new_registry_picks_up_stored_token() {
    let store = Arc::new(MemoryStore::new());
    store.set_item("authToken", "persisted").unwrap();

    let client = ApiClient::new(Config::with_base_url(BASE_URL), store);

    assert_eq!(client.get_auth_token().as_deref(), Some("persisted"));
    for c in client.clients() {
        assert_eq!(c.access_token().as_deref(), Some("persisted"), "{}", c.resource_group());
    }
}

#[test]
fn every_client_gets_its_own_configuration() {
    let (client, _) = new_client();
    let clients = client.clients();
    for (i, a) in clients.iter().enumerate() {
        for b in clients.iter().skip(i + 1) {
            assert!(!a.configuration().same_slot(b.configuration()));
        }
    }
    for c in clients {
        assert_eq!(c.configuration().snapshot().base_path, BASE_URL);
    }
}

#[test]
fn set_auth_token_is_visible_through_get() {
    let (client, store) = new_client();
    client.set_auth_token("T").unwrap();
    assert_eq!(client.get_auth_token().as_deref(), Some("T"));
    assert_eq!(store.get_item("authToken").unwrap().as_deref(), Some("T"));
}

#[test]
fn clear_auth_token_empties_storage() {
    let (client, store) = new_client();
    client.set_auth_token("T").unwrap();
    client.clear_auth_token().unwrap();
    assert_eq!(client.get_auth_token(), None);
    assert!(store.is_empty());
}

#[test]
fn set_auth_token_reaches_every_client() {
    let (client, _) = new_client();
    client.set_auth_token("T").unwrap();

    let seen: Vec<ResourceGroup> = client
        .clients()
        .iter()
        .filter(|c| c.access_token().as_deref() == Some("T"))
        .map(|c| c.resource_group())
        .collect();
    assert_eq!(seen, ResourceGroup::ALL.to_vec());
    assert_eq!(
        client.posts.configuration().snapshot().authorization().as_deref(),
        Some("Bearer T")
    );
}

#[test]
fn set_and_clear_update_configurations_in_place() {
    let (client, _) = new_client();
    let before: Vec<_> = client
        .clients()
        .iter()
        .map(|c| c.configuration().clone())
        .collect();

    client.set_auth_token("T").unwrap();
    for (handle, c) in before.iter().zip(client.clients()) {
        assert!(handle.same_slot(c.configuration()));
        assert_eq!(handle.access_token().as_deref(), Some("T"));
    }

    client.clear_auth_token().unwrap();
    for (handle, c) in before.iter().zip(client.clients()) {
        assert!(handle.same_slot(c.configuration()));
        assert_eq!(handle.access_token(), None);
    }
}

#[test]
fn replacing_a_token_leaves_no_stale_client() {
    let (client, _) = new_client();
    client.set_auth_token("first").unwrap();
    client.set_auth_token("second").unwrap();
    assert!(tokens(&client).iter().all(|t| t.as_deref() == Some("second")));
}

#[test]
fn empty_token_leaves_clients_unauthenticated() {
    let (client, _) = new_client();
    client.set_auth_token("T").unwrap();
    client.set_auth_token("").unwrap();

    assert!(!client.is_authenticated());
    assert_eq!(client.auth_configuration().access_token, None);
    for c in client.clients() {
        assert_eq!(c.access_token(), None, "{}", c.resource_group());
        assert_eq!(c.configuration().snapshot().authorization(), None);
    }
}

#[test]
fn set_get_clear_sequence_is_idempotent() {
    let (client, store) = new_client();
    for _ in 0..3 {
        client.set_auth_token("T").unwrap();
        assert_eq!(client.get_auth_token().as_deref(), Some("T"));
        client.clear_auth_token().unwrap();
    }
    client.clear_auth_token().unwrap();

    assert!(store.is_empty());
    assert_eq!(client.get_auth_token(), None);
    assert!(tokens(&client).iter().all(Option::is_none));
}

#[test]
fn clear_keeps_other_headers_and_base_path() {
    let (client, _) = new_client();
    client.users.configuration().set_header("X-Trace", "1");
    client.set_auth_token("T").unwrap();
    client.clear_auth_token().unwrap();

    let config = client.users.configuration().snapshot();
    assert_eq!(config.base_path, BASE_URL);
    assert_eq!(config.headers.get("X-Trace").map(String::as_str), Some("1"));
    assert_eq!(
        config.headers.get("Content-Type").map(String::as_str),
        Some("application/json")
    );
}

#[test]
fn failed_store_write_leaves_clients_untouched() {
    let store = Arc::new(FlakyStore::default());
    let client = ApiClient::new(Config::with_base_url(BASE_URL), store.clone());
    client.set_auth_token("T").unwrap();

    store.fail_writes.store(true, Ordering::SeqCst);
    let err = client.set_auth_token("U").unwrap_err();
    assert!(matches!(err, AppError::Storage(_)));
    assert!(tokens(&client).iter().all(|t| t.as_deref() == Some("T")));

    assert!(client.clear_auth_token().is_err());
    assert!(tokens(&client).iter().all(|t| t.as_deref() == Some("T")));
    assert_eq!(client.get_auth_token().as_deref(), Some("T"));
}

#[test]
fn unreadable_store_reads_as_no_token() {
    let store = Arc::new(FlakyStore::default());
    store.inner.set_item("authToken", "T").unwrap();
    store.fail_reads.store(true, Ordering::SeqCst);

    let client = ApiClient::new(Config::with_base_url(BASE_URL), store);
    assert_eq!(client.get_auth_token(), None);
    assert!(tokens(&client).iter().all(Option::is_none));
}

#[test]
fn auth_configuration_reflects_store() {
    let (client, _) = new_client();
    assert_eq!(client.auth_configuration().access_token, None);
    client.set_auth_token("T").unwrap();
    let config = client.auth_configuration();
    assert_eq!(config.access_token.as_deref(), Some("T"));
    assert_eq!(config.base_path, BASE_URL);
}

#[test]
fn concurrent_mutators_leave_clients_consistent() {
    let (client, _) = new_client();
    let client = Arc::new(client);

    let handles: Vec<_> = (0..8)
        .map(|i| {
            let client = client.clone();
            std::thread::spawn(move || {
                for j in 0..50 {
                    if (i + j) % 3 == 0 {
                        client.clear_auth_token().unwrap();
                    } else {
                        client.set_auth_token(&format!("t{i}-{j}")).unwrap();
                    }
                }
            })
        })
        .collect();
    for handle in handles {
        handle.join().unwrap();
    }

    let stored = client.get_auth_token();
    assert!(tokens(&client).iter().all(|t| *t == stored));
}

#[test]
fn validate_token_without_token_is_answered_locally() {
    use post_now_client::application::interfaces::AuthService;

    let (client, _) = new_client();
    let validation = tokio_test::block_on(client.auth.validate_token()).unwrap();
    assert!(!validation.valid);
    assert!(validation.error.is_some());
}
