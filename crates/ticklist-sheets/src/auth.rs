//! OAuth2 JWT-bearer token exchange for service accounts.
//!
//! The service account signs a short-lived RS256 assertion which is
//! exchanged at the token endpoint for a bearer access token. Tokens
//! are cached until shortly before expiry.

use std::sync::RwLock;
use std::time::{Duration, Instant, SystemTime, UNIX_EPOCH};

use jsonwebtoken::{Algorithm, EncodingKey, Header, encode};
use serde::{Deserialize, Serialize};

use crate::credentials::ServiceAccountKey;
use ticklist_core::{Error, Result};

/// OAuth2 scope for reading and writing spreadsheets.
const SPREADSHEETS_SCOPE: &str = "https://www.googleapis.com/auth/spreadsheets";

/// Grant type for service-account assertions.
const JWT_BEARER_GRANT: &str = "urn:ietf:params:oauth:grant-type:jwt-bearer";

/// Assertion lifetime requested from the token endpoint.
const ASSERTION_LIFETIME: Duration = Duration::from_secs(3600);

/// Refresh this long before the token actually expires.
const EXPIRY_MARGIN: Duration = Duration::from_secs(60);

/// Claims of the signed service-account assertion.
#[derive(Debug, Serialize)]
struct AssertionClaims {
    iss: String,
    scope: String,
    aud: String,
    iat: u64,
    exp: u64,
}

/// Response from the OAuth2 token endpoint.
#[derive(Debug, Deserialize)]
struct TokenResponse {
    access_token: String,
    expires_in: u64,
}

/// A cached access token with its fetch time and lifetime.
struct CachedToken {
    token: String,
    fetched_at: Instant,
    lifetime: Duration,
}

/// Produces and caches bearer tokens for the Sheets API.
pub struct TokenProvider {
    key: ServiceAccountKey,
    http: reqwest::Client,
    cached: RwLock<Option<CachedToken>>,
}

impl TokenProvider {
    /// Create a provider for the given service-account key.
    pub fn new(key: ServiceAccountKey, http: reqwest::Client) -> Self {
        Self {
            key,
            http,
            cached: RwLock::new(None),
        }
    }

    /// Return a valid access token, refreshing if the cached one is
    /// absent or close to expiry.
    pub async fn access_token(&self) -> Result<String> {
        if let Some(token) = self.lookup_cached() {
            return Ok(token);
        }
        self.refresh().await
    }

    fn lookup_cached(&self) -> Option<String> {
        let cache = self.cached.read().ok()?;
        let cached = cache.as_ref()?;

        let usable = cached.lifetime.saturating_sub(EXPIRY_MARGIN);
        if cached.fetched_at.elapsed() >= usable {
            return None;
        }
        Some(cached.token.clone())
    }

    async fn refresh(&self) -> Result<String> {
        let assertion = self.sign_assertion()?;

        let response = self
            .http
            .post(&self.key.token_uri)
            .form(&[("grant_type", JWT_BEARER_GRANT), ("assertion", &assertion)])
            .send()
            .await
            .map_err(|e| Error::unavailable(format!("token endpoint unreachable: {e}")))?;

        if !response.status().is_success() {
            return Err(Error::unavailable(format!(
                "token endpoint rejected assertion (HTTP {})",
                response.status()
            )));
        }

        let token: TokenResponse = response
            .json()
            .await
            .map_err(|e| Error::unavailable(format!("token response not parseable: {e}")))?;

        let mut cache = self
            .cached
            .write()
            .map_err(|e| Error::internal(e.to_string()))?;
        *cache = Some(CachedToken {
            token: token.access_token.clone(),
            fetched_at: Instant::now(),
            lifetime: Duration::from_secs(token.expires_in),
        });

        tracing::debug!(
            issuer = %self.key.client_email,
            expires_in = token.expires_in,
            "access token refreshed"
        );
        Ok(token.access_token)
    }

    /// Build and sign the RS256 assertion for the token exchange.
    fn sign_assertion(&self) -> Result<String> {
        let now = SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .map_err(|e| Error::internal(e.to_string()))?
            .as_secs();

        let claims = AssertionClaims {
            iss: self.key.client_email.clone(),
            scope: SPREADSHEETS_SCOPE.to_string(),
            aud: self.key.token_uri.clone(),
            iat: now,
            exp: now + ASSERTION_LIFETIME.as_secs(),
        };

        let encoding_key = EncodingKey::from_rsa_pem(self.key.private_key.as_bytes())
            .map_err(|e| Error::unavailable(format!("service account private key invalid: {e}")))?;

        encode(&Header::new(Algorithm::RS256), &claims, &encoding_key)
            .map_err(|e| Error::unavailable(format!("could not sign token assertion: {e}")))
    }
}
