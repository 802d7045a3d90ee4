use std::sync::Arc;

use welfare_client::{MemoryCredentialStore, WelfareClient};

/// Set up a test client pointed at the mock server, with no stored token.
#[allow(dead_code)]
pub fn setup_test_client(server_url: &str) -> WelfareClient {
    let _ = env_logger::builder().is_test(true).try_init();

    WelfareClient::builder()
        .base_url(server_url)
        .build()
        .expect("Failed to build WelfareClient")
}

/// Set up a test client whose credential store is pre-seeded with a token.
#[allow(dead_code)]
pub fn setup_client_with_token(server_url: &str, token: &str) -> WelfareClient {
    let _ = env_logger::builder().is_test(true).try_init();

    WelfareClient::builder()
        .base_url(server_url)
        .credential_provider(Arc::new(MemoryCredentialStore::with_token(token)))
        .build()
        .expect("Failed to build WelfareClient")
}
