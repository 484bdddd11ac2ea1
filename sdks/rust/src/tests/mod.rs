//! Test utilities and mocks

use mockito::{Server, ServerGuard};

/// Create a mock management endpoint for testing
pub async fn create_mock_server() -> ServerGuard {
    Server::new_async().await
}

/// Common test utilities
pub mod helpers {
    use super::*;

    /// Setup a test client pointing to a mock server
    pub async fn setup_test_client() -> (crate::HutchClient, ServerGuard) {
        let server = create_mock_server().await;
        let config = crate::HutchConfig::new(server.url()).with_basic_auth("guest", "guest");
        let client = crate::HutchClient::new(config).unwrap();
        (client, server)
    }
}
