//! Per-service connection settings.

use serde::{Deserialize, Serialize};

/// Connection settings for a single Watson service.
///
/// Credentials are resolved by `watson-auth` in this order: `access_token`,
/// then `apikey`, then `username`/`password`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize)]
pub struct ServiceConfig {
    /// Service endpoint. Empty means the client's built-in default.
    #[serde(default)]
    pub url: String,

    /// IAM API key.
    #[serde(default)]
    pub apikey: String,

    /// Basic-auth username (`apikey` selects IAM with `password` as the key).
    #[serde(default)]
    pub username: String,

    /// Basic-auth password.
    #[serde(default)]
    pub password: String,

    /// IAM token endpoint override.
    #[serde(default)]
    pub iam_url: String,

    /// IAM client id, sent as basic auth on token requests.
    #[serde(default)]
    pub iam_client_id: String,

    /// IAM client secret.
    #[serde(default)]
    pub iam_client_secret: String,

    /// Caller-managed bearer token. Never refreshed.
    #[serde(default)]
    pub access_token: String,

    /// API version date (only for versioned services).
    #[serde(default)]
    pub version: String,
}

impl ServiceConfig {
    /// Check if any form of credentials is present.
    pub fn is_configured(&self) -> bool {
        !self.access_token.is_empty()
            || !self.apikey.is_empty()
            || (!self.username.is_empty() && !self.password.is_empty())
    }

    /// The configured endpoint, or `default_url` when none is set.
    pub fn url_or<'a>(&'a self, default_url: &'a str) -> &'a str {
        if self.url.is_empty() {
            default_url
        } else {
            self.url.trim_end_matches('/')
        }
    }
}
