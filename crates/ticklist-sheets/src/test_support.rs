//! Shared fixtures for unit tests.

use crate::credentials::ServiceAccountKey;

/// Pre-generated 2048-bit RSA key pair for testing only.
pub const TEST_RSA_PRIVATE_PEM: &str = include_str!("../testdata/test_key.pem");

/// A service-account key pointing at the given token endpoint.
pub fn test_key(token_uri: &str) -> ServiceAccountKey {
    ServiceAccountKey {
        client_email: "logger@test-project.iam.gserviceaccount.com".to_string(),
        private_key: TEST_RSA_PRIVATE_PEM.to_string(),
        token_uri: token_uri.to_string(),
    }
}
