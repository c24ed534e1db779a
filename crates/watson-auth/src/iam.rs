//! IAM access token acquisition and caching.

use std::fmt;
use std::sync::Arc;

use base64::Engine as _;
use chrono::{DateTime, Utc};
use tokio::sync::RwLock;

use crate::error::AuthError;

/// IBM Cloud IAM token endpoint.
pub const DEFAULT_IAM_URL: &str = "https://iam.cloud.ibm.com/identity/token";

const GRANT_TYPE: &str = "urn:ibm:params:oauth:grant-type:apikey";
const EXPIRY_BUFFER_SECS: i64 = 60;

/// A cached IAM bearer token.
#[derive(Debug, Clone)]
pub struct IamToken {
    pub access_token: String,
    pub expires_at: DateTime<Utc>,
}

impl IamToken {
    /// True when the token expires within `buffer_secs`.
    #[must_use]
    pub fn is_near_expiry(&self, buffer_secs: i64) -> bool {
        self.expires_at - chrono::Duration::seconds(buffer_secs) <= Utc::now()
    }
}

#[derive(Debug, serde::Deserialize)]
struct IamTokenResponse {
    access_token: String,
    #[serde(default)]
    expires_in: Option<i64>,
    #[serde(default)]
    expiration: Option<i64>,
}

/// Exchanges an API key for IAM bearer tokens and caches the result.
///
/// Clones share the same cache. A token is reused until it is within 60 s of
/// expiry; [`IamTokenManager::invalidate`] drops it early (used after a 401).
#[derive(Clone)]
pub struct IamTokenManager {
    http: reqwest::Client,
    url: String,
    apikey: String,
    client_credentials: Option<(String, String)>,
    cached: Arc<RwLock<Option<IamToken>>>,
}

impl fmt::Debug for IamTokenManager {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("IamTokenManager")
            .field("url", &self.url)
            .field("apikey", &"<redacted>")
            .field("client_id", &self.client_credentials.as_ref().map(|(id, _)| id))
            .finish_non_exhaustive()
    }
}

impl IamTokenManager {
    /// Create a token manager for `apikey` against the public IAM endpoint.
    #[must_use]
    pub fn new(apikey: impl Into<String>) -> Self {
        Self {
            http: reqwest::Client::new(),
            url: DEFAULT_IAM_URL.to_string(),
            apikey: apikey.into(),
            client_credentials: None,
            cached: Arc::new(RwLock::new(None)),
        }
    }

    /// Use a different IAM token endpoint.
    #[must_use]
    pub fn with_url(mut self, url: impl Into<String>) -> Self {
        self.url = url.into();
        self
    }

    /// Send client id/secret as basic auth on token requests.
    #[must_use]
    pub fn with_client_credentials(
        mut self,
        client_id: impl Into<String>,
        client_secret: impl Into<String>,
    ) -> Self {
        self.client_credentials = Some((client_id.into(), client_secret.into()));
        self
    }

    /// Share the service's HTTP client (timeouts, TLS settings).
    #[must_use]
    pub fn with_http_client(mut self, http: reqwest::Client) -> Self {
        self.http = http;
        self
    }

    #[must_use]
    pub fn url(&self) -> &str {
        &self.url
    }

    /// Return a valid access token, requesting a new one if the cache is
    /// empty or near expiry.
    ///
    /// # Errors
    ///
    /// Returns [`AuthError`] if the token endpoint is unreachable, rejects the
    /// key, or returns an unparseable body.
    pub async fn token(&self) -> Result<String, AuthError> {
        {
            let cached = self.cached.read().await;
            if let Some(token) = cached.as_ref()
                && !token.is_near_expiry(EXPIRY_BUFFER_SECS)
            {
                return Ok(token.access_token.clone());
            }
        }

        let mut cached = self.cached.write().await;
        // Another task may have refreshed while we waited for the write lock.
        if let Some(token) = cached.as_ref()
            && !token.is_near_expiry(EXPIRY_BUFFER_SECS)
        {
            return Ok(token.access_token.clone());
        }

        let token = self.request_token().await?;
        let access_token = token.access_token.clone();
        *cached = Some(token);
        Ok(access_token)
    }

    /// Drop the cached token so the next call requests a fresh one.
    pub async fn invalidate(&self) {
        *self.cached.write().await = None;
    }

    async fn request_token(&self) -> Result<IamToken, AuthError> {
        tracing::debug!(url = %self.url, "requesting IAM access token");

        let mut request = self
            .http
            .post(&self.url)
            .header(reqwest::header::ACCEPT, "application/json")
            .form(&[
                ("grant_type", GRANT_TYPE),
                ("apikey", self.apikey.as_str()),
                ("response_type", "cloud_iam"),
            ]);
        if let Some((client_id, client_secret)) = &self.client_credentials {
            request = request.basic_auth(client_id, Some(client_secret));
        }

        let resp = request.send().await?;
        if !resp.status().is_success() {
            return Err(AuthError::TokenRequest {
                status: resp.status().as_u16(),
                message: resp.text().await.unwrap_or_default(),
            });
        }

        let body: IamTokenResponse = resp
            .json()
            .await
            .map_err(|e| AuthError::Parse(format!("IAM token response: {e}")))?;
        let expires_at = resolve_expiry(&body)?;

        Ok(IamToken {
            access_token: body.access_token,
            expires_at,
        })
    }
}

/// Prefer the absolute `expiration`, then `expires_in`, then the JWT `exp` claim.
fn resolve_expiry(body: &IamTokenResponse) -> Result<DateTime<Utc>, AuthError> {
    if let Some(expiration) = body.expiration {
        return DateTime::from_timestamp(expiration, 0)
            .ok_or_else(|| AuthError::Parse("invalid expiration timestamp".into()));
    }
    if let Some(expires_in) = body.expires_in {
        return Ok(Utc::now() + chrono::Duration::seconds(expires_in));
    }
    decode_expiry(&body.access_token)
}

/// Decode the JWT `exp` claim without verifying the signature.
///
/// # Errors
///
/// Returns `AuthError::Parse` if the JWT format is invalid or the `exp` claim
/// is missing or cannot be parsed.
pub fn decode_expiry(jwt: &str) -> Result<DateTime<Utc>, AuthError> {
    let parts: Vec<&str> = jwt.split('.').collect();
    if parts.len() != 3 {
        return Err(AuthError::Parse("invalid JWT format".into()));
    }
    let payload = base64::engine::general_purpose::URL_SAFE_NO_PAD
        .decode(parts[1])
        .map_err(|e| AuthError::Parse(format!("base64 decode failed: {e}")))?;
    let value: serde_json::Value = serde_json::from_slice(&payload)
        .map_err(|e| AuthError::Parse(format!("JSON parse failed: {e}")))?;
    let exp = value["exp"]
        .as_i64()
        .ok_or_else(|| AuthError::Parse("missing exp claim".into()))?;
    DateTime::from_timestamp(exp, 0).ok_or_else(|| AuthError::Parse("invalid exp timestamp".into()))
}
