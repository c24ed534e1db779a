use std::fmt;

use watson_config::ServiceConfig;

use crate::error::AuthError;
use crate::iam::IamTokenManager;

/// API keys with this prefix belong to Cloud Pak deployments and are sent as
/// basic auth instead of being exchanged for an IAM token.
const ICP_PREFIX: &str = "icp-";
const APIKEY_USERNAME: &str = "apikey";

/// How a service client authenticates its requests.
#[derive(Clone)]
pub enum Authenticator {
    /// No `Authorization` header.
    None,
    /// Static basic-auth credentials.
    Basic { username: String, password: String },
    /// Caller-managed bearer token.
    Bearer(String),
    /// IAM API key exchanged for cached bearer tokens.
    Iam(IamTokenManager),
}

impl fmt::Debug for Authenticator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::None => f.write_str("None"),
            Self::Basic { username, .. } => f
                .debug_struct("Basic")
                .field("username", username)
                .field("password", &"<redacted>")
                .finish(),
            Self::Bearer(_) => f.debug_tuple("Bearer").field(&"<redacted>").finish(),
            Self::Iam(manager) => f.debug_tuple("Iam").field(manager).finish(),
        }
    }
}

impl Authenticator {
    #[must_use]
    pub fn basic(username: impl Into<String>, password: impl Into<String>) -> Self {
        Self::Basic {
            username: username.into(),
            password: password.into(),
        }
    }

    #[must_use]
    pub fn bearer(token: impl Into<String>) -> Self {
        Self::Bearer(token.into())
    }

    #[must_use]
    pub fn iam(apikey: impl Into<String>) -> Self {
        Self::Iam(IamTokenManager::new(apikey))
    }

    /// Pick an authenticator from service settings.
    ///
    /// Priority: `access_token` → `apikey` (`icp-` keys use basic auth) →
    /// `username == "apikey"` (password is an IAM key) → `username`/`password`.
    ///
    /// # Errors
    ///
    /// Returns [`AuthError::InvalidCredentials`] if no usable credentials are set.
    pub fn from_config(config: &ServiceConfig) -> Result<Self, AuthError> {
        if !config.access_token.is_empty() {
            return Ok(Self::bearer(&config.access_token));
        }

        if !config.apikey.is_empty() {
            return Ok(Self::for_apikey(&config.apikey, config));
        }

        if config.username == APIKEY_USERNAME && !config.password.is_empty() {
            return Ok(Self::for_apikey(&config.password, config));
        }

        if !config.username.is_empty() && !config.password.is_empty() {
            return Ok(Self::basic(&config.username, &config.password));
        }

        Err(AuthError::InvalidCredentials(
            "set an apikey, an access token, or a username and password".into(),
        ))
    }

    fn for_apikey(apikey: &str, config: &ServiceConfig) -> Self {
        if apikey.starts_with(ICP_PREFIX) {
            return Self::basic(APIKEY_USERNAME, apikey);
        }

        let mut manager = IamTokenManager::new(apikey);
        if !config.iam_url.is_empty() {
            manager = manager.with_url(&config.iam_url);
        }
        if !config.iam_client_id.is_empty() {
            manager =
                manager.with_client_credentials(&config.iam_client_id, &config.iam_client_secret);
        }
        Self::Iam(manager)
    }

    /// Route IAM token requests through `http`. Other variants are unchanged.
    #[must_use]
    pub fn with_http_client(self, http: reqwest::Client) -> Self {
        match self {
            Self::Iam(manager) => Self::Iam(manager.with_http_client(http)),
            other => other,
        }
    }

    /// Short name for logs.
    #[must_use]
    pub const fn kind(&self) -> &'static str {
        match self {
            Self::None => "none",
            Self::Basic { .. } => "basic",
            Self::Bearer(_) => "bearer",
            Self::Iam(_) => "iam",
        }
    }

    /// Whether a rejected request may be retried with fresh credentials.
    #[must_use]
    pub const fn can_refresh(&self) -> bool {
        matches!(self, Self::Iam(_))
    }

    /// Attach credentials to `request`.
    ///
    /// # Errors
    ///
    /// Returns [`AuthError`] if an IAM token cannot be obtained.
    pub async fn authenticate(
        &self,
        request: reqwest::RequestBuilder,
    ) -> Result<reqwest::RequestBuilder, AuthError> {
        Ok(match self {
            Self::None => request,
            Self::Basic { username, password } => request.basic_auth(username, Some(password)),
            Self::Bearer(token) => request.bearer_auth(token),
            Self::Iam(manager) => request.bearer_auth(manager.token().await?),
        })
    }

    /// Discard cached credentials so the next request fetches new ones.
    pub async fn invalidate(&self) {
        if let Self::Iam(manager) = self {
            manager.invalidate().await;
        }
    }
}
