//! Service-account authentication for the Sheets API.
//!
//! A signed JWT assertion is exchanged at the OAuth token endpoint for a
//! short-lived bearer token (RFC 7523 `jwt-bearer` grant). The token is cached
//! and reused until shortly before it expires.

use std::time::Duration;

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use jsonwebtoken::{encode, Algorithm, EncodingKey, Header};
use reqwest::Client;
use serde::Serialize;
use tokio::sync::Mutex;

use crate::error::DataSourceError;
use crate::types::TokenResponse;

pub const SPREADSHEETS_READONLY_SCOPE: &str =
    "https://www.googleapis.com/auth/spreadsheets.readonly";

const JWT_BEARER_GRANT: &str = "urn:ietf:params:oauth:grant-type:jwt-bearer";

/// Lifetime requested for each assertion. Google caps this at one hour.
const ASSERTION_TTL_SECS: i64 = 3600;

/// Cached tokens are refreshed this long before their reported expiry.
const EXPIRY_MARGIN_SECS: i64 = 60;

/// Reported lifetimes are clamped into `0..=MAX_TOKEN_LIFETIME_SECS`.
const MAX_TOKEN_LIFETIME_SECS: i64 = 86_400;

/// Source of bearer tokens for Sheets API requests.
#[async_trait]
pub trait TokenProvider: Send + Sync {
    /// Returns a bearer token valid for at least the next request.
    ///
    /// # Errors
    ///
    /// Returns [`DataSourceError`] when no token can be obtained.
    async fn access_token(&self) -> Result<String, DataSourceError>;
}

/// Fixed token, for tests and for tokens minted outside this process.
#[derive(Debug, Clone)]
pub struct StaticToken(pub String);

#[async_trait]
impl TokenProvider for StaticToken {
    async fn access_token(&self) -> Result<String, DataSourceError> {
        Ok(self.0.clone())
    }
}

#[derive(Debug, Serialize)]
struct Claims<'a> {
    iss: &'a str,
    scope: &'a str,
    aud: &'a str,
    iat: i64,
    exp: i64,
}

#[derive(Debug, Clone)]
struct CachedToken {
    access_token: String,
    expires_at: DateTime<Utc>,
}

/// Google service-account credentials with an in-memory token cache.
pub struct ServiceAccountAuth {
    client: Client,
    client_email: String,
    key: EncodingKey,
    token_uri: String,
    scope: String,
    cached: Mutex<Option<CachedToken>>,
}

impl std::fmt::Debug for ServiceAccountAuth {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ServiceAccountAuth")
            .field("client_email", &self.client_email)
            .field("key", &"[redacted]")
            .field("token_uri", &self.token_uri)
            .field("scope", &self.scope)
            .finish_non_exhaustive()
    }
}

impl ServiceAccountAuth {
    /// Creates credentials with the read-only spreadsheets scope.
    ///
    /// `private_key_pem` is the PKCS#8 (or PKCS#1) RSA key from the service
    /// account JSON, with real newlines.
    ///
    /// # Errors
    ///
    /// - [`DataSourceError::InvalidPrivateKey`] if the key is not an RSA PEM key.
    /// - [`DataSourceError::Http`] if the HTTP client cannot be constructed.
    pub fn new(
        client_email: &str,
        private_key_pem: &str,
        token_uri: &str,
        timeout_secs: u64,
    ) -> Result<Self, DataSourceError> {
        let key = EncodingKey::from_rsa_pem(private_key_pem.as_bytes())
            .map_err(DataSourceError::InvalidPrivateKey)?;
        let client = Client::builder()
            .timeout(Duration::from_secs(timeout_secs))
            .connect_timeout(Duration::from_secs(10))
            .build()?;

        Ok(Self {
            client,
            client_email: client_email.to_owned(),
            key,
            token_uri: token_uri.to_owned(),
            scope: SPREADSHEETS_READONLY_SCOPE.to_owned(),
            cached: Mutex::new(None),
        })
    }

    /// Signs the RS256 assertion presented to the token endpoint.
    fn assertion(&self, now: DateTime<Utc>) -> Result<String, DataSourceError> {
        let iat = now.timestamp();
        let claims = Claims {
            iss: &self.client_email,
            scope: &self.scope,
            aud: &self.token_uri,
            iat,
            exp: iat + ASSERTION_TTL_SECS,
        };
        encode(&Header::new(Algorithm::RS256), &claims, &self.key)
            .map_err(DataSourceError::InvalidPrivateKey)
    }

    async fn request_token(&self, now: DateTime<Utc>) -> Result<CachedToken, DataSourceError> {
        let assertion = self.assertion(now)?;
        let response = self
            .client
            .post(&self.token_uri)
            .form(&[("grant_type", JWT_BEARER_GRANT), ("assertion", assertion.as_str())])
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(DataSourceError::Auth {
                status: status.as_u16(),
                body,
            });
        }

        let body = response.text().await?;
        let token: TokenResponse =
            serde_json::from_str(&body).map_err(|e| DataSourceError::Deserialize {
                context: "token response".to_string(),
                source: e,
            })?;

        tracing::debug!(
            client_email = %self.client_email,
            expires_in = token.expires_in,
            "obtained sheets access token"
        );

        let lifetime = token.expires_in.clamp(0, MAX_TOKEN_LIFETIME_SECS);
        Ok(CachedToken {
            access_token: token.access_token,
            expires_at: now + chrono::Duration::seconds(lifetime),
        })
    }
}

#[async_trait]
impl TokenProvider for ServiceAccountAuth {
    async fn access_token(&self) -> Result<String, DataSourceError> {
        // Held across the exchange so concurrent callers share one request.
        let mut cached = self.cached.lock().await;
        let now = Utc::now();

        if let Some(token) = cached.as_ref() {
            if token.expires_at - chrono::Duration::seconds(EXPIRY_MARGIN_SECS) > now {
                return Ok(token.access_token.clone());
            }
        }

        let fresh = self.request_token(now).await?;
        let access_token = fresh.access_token.clone();
        *cached = Some(fresh);
        Ok(access_token)
    }
}
