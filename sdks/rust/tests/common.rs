//! Common test utilities

use hutch_sdk::{HutchClient, HutchConfig};
use mockito::{Server, ServerGuard};

/// Create a mock management endpoint for testing
#[allow(dead_code)] // Used by other test modules
pub async fn create_mock_server() -> ServerGuard {
    Server::new_async().await
}

/// Setup a test client pointing to a mock server
#[allow(dead_code)] // Used by other test modules
pub async fn setup_test_client() -> (HutchClient, ServerGuard) {
    let server = create_mock_server().await;
    let config = HutchConfig::new(server.url())
        .with_basic_auth("guest", "guest")
        .with_timeout(std::time::Duration::from_secs(5));
    let client = HutchClient::new(config).unwrap();
    (client, server)
}

/// Setup a client for S2S tests (requires a running broker)
#[allow(dead_code)] // Used by S2S test modules
pub fn setup_s2s_client() -> HutchClient {
    let url = std::env::var("HUTCH_URL").unwrap_or_else(|_| "http://localhost:15672".to_string());
    let username = std::env::var("HUTCH_USERNAME").unwrap_or_else(|_| "guest".to_string());
    let password = std::env::var("HUTCH_PASSWORD").unwrap_or_else(|_| "guest".to_string());
    let config = HutchConfig::new(url)
        .with_basic_auth(username, password)
        .with_timeout(std::time::Duration::from_secs(10));
    HutchClient::new(config).expect("Failed to create S2S client")
}
