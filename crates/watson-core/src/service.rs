//! Connection state shared by every service client.

use std::time::Duration;

use reqwest::StatusCode;
use reqwest::header::{HeaderMap, HeaderName, HeaderValue};
use serde::de::DeserializeOwned;
use watson_auth::Authenticator;
use watson_config::{GeneralConfig, ServiceConfig};

use crate::error::WatsonError;
use crate::request::RequestSpec;
use crate::response::{DetailedResponse, check_response};

const LEARNING_OPT_OUT_HEADER: &str = "x-watson-learning-opt-out";

/// Default `User-Agent` sent with every request.
#[must_use]
pub fn default_user_agent() -> String {
    format!(
        "watson-apis-rust-sdk/{} ({})",
        env!("CARGO_PKG_VERSION"),
        std::env::consts::OS
    )
}

/// Base URL, HTTP client, authenticator, and default headers for one service.
///
/// Read-only after construction apart from the explicit setters. Cloning is
/// cheap and clones share the connection pool and IAM token cache.
#[derive(Debug, Clone)]
pub struct BaseService {
    service_url: String,
    http: reqwest::Client,
    authenticator: Authenticator,
    default_headers: HeaderMap,
}

impl BaseService {
    /// Create a service with a default HTTP client.
    ///
    /// # Errors
    ///
    /// Returns [`WatsonError::Http`] if the HTTP client cannot be built.
    pub fn new(
        service_url: impl Into<String>,
        authenticator: Authenticator,
    ) -> Result<Self, WatsonError> {
        Self::with_settings(service_url, authenticator, &GeneralConfig::default())
    }

    /// Create a service from loaded configuration, falling back to
    /// `default_url` when the section has no `url`.
    ///
    /// # Errors
    ///
    /// Returns [`WatsonError::Auth`] if the section has no usable credentials,
    /// or [`WatsonError::Http`] if the HTTP client cannot be built.
    pub fn from_config(
        config: &ServiceConfig,
        general: &GeneralConfig,
        default_url: &str,
    ) -> Result<Self, WatsonError> {
        let authenticator = Authenticator::from_config(config)?;
        Self::with_settings(config.url_or(default_url), authenticator, general)
    }

    /// Create a service with explicit client settings.
    ///
    /// # Errors
    ///
    /// Returns [`WatsonError::Http`] if the HTTP client cannot be built.
    pub fn with_settings(
        service_url: impl Into<String>,
        authenticator: Authenticator,
        general: &GeneralConfig,
    ) -> Result<Self, WatsonError> {
        let user_agent = if general.user_agent.is_empty() {
            default_user_agent()
        } else {
            general.user_agent.clone()
        };

        let http = reqwest::Client::builder()
            .user_agent(user_agent)
            .timeout(Duration::from_secs(general.timeout_secs))
            .danger_accept_invalid_certs(general.disable_ssl_verification)
            .build()?;

        let mut default_headers = HeaderMap::new();
        if general.learning_opt_out {
            default_headers.insert(LEARNING_OPT_OUT_HEADER, HeaderValue::from_static("true"));
        }

        Ok(Self {
            service_url: service_url.into().trim_end_matches('/').to_string(),
            authenticator: authenticator.with_http_client(http.clone()),
            http,
            default_headers,
        })
    }

    #[must_use]
    pub fn service_url(&self) -> &str {
        &self.service_url
    }

    pub fn set_service_url(&mut self, url: impl Into<String>) {
        self.service_url = url.into().trim_end_matches('/').to_string();
    }

    #[must_use]
    pub const fn authenticator(&self) -> &Authenticator {
        &self.authenticator
    }

    #[must_use]
    pub const fn default_headers(&self) -> &HeaderMap {
        &self.default_headers
    }

    /// Replace the headers sent with every request.
    pub fn set_default_headers(&mut self, headers: HeaderMap) {
        self.default_headers = headers;
    }

    /// Add one header sent with every request.
    ///
    /// # Errors
    ///
    /// Returns [`WatsonError::InvalidParameter`] if the name or value is malformed.
    pub fn add_default_header(&mut self, name: &str, value: &str) -> Result<(), WatsonError> {
        let header_name =
            HeaderName::from_bytes(name.as_bytes()).map_err(|e| WatsonError::InvalidParameter {
                name: name.to_string(),
                reason: e.to_string(),
            })?;
        let header_value = HeaderValue::from_str(value).map_err(|e| WatsonError::InvalidParameter {
            name: name.to_string(),
            reason: e.to_string(),
        })?;
        self.default_headers.insert(header_name, header_value);
        Ok(())
    }

    /// Authenticate and send `spec`, returning the successful response.
    ///
    /// A 401 from an IAM-authenticated request drops the cached token and the
    /// request is sent exactly once more.
    ///
    /// # Errors
    ///
    /// Returns [`WatsonError::Api`] for non-2xx responses, [`WatsonError::Http`]
    /// for transport failures, and [`WatsonError::Auth`] if credentials cannot
    /// be obtained.
    pub async fn execute(&self, spec: &RequestSpec) -> Result<reqwest::Response, WatsonError> {
        let mut retried = false;
        loop {
            let request = spec.to_request(&self.http, &self.service_url, &self.default_headers)?;
            let request = self.authenticator.authenticate(request).await?;

            tracing::debug!(
                method = %spec.method(),
                path = spec.path(),
                auth = self.authenticator.kind(),
                "sending request"
            );
            let resp = request.send().await?;

            if resp.status() == StatusCode::UNAUTHORIZED
                && self.authenticator.can_refresh()
                && !retried
            {
                tracing::warn!(path = spec.path(), "request unauthorized; refreshing token and retrying once");
                self.authenticator.invalidate().await;
                retried = true;
                continue;
            }

            return check_response(resp).await;
        }
    }

    /// Send `spec` and decode the JSON body as `T`.
    ///
    /// # Errors
    ///
    /// Everything [`BaseService::execute`] returns, plus [`WatsonError::Parse`]
    /// if the body does not match `T`.
    pub async fn send_json<T: DeserializeOwned>(
        &self,
        spec: &RequestSpec,
    ) -> Result<DetailedResponse<T>, WatsonError> {
        let resp = self.execute(spec).await?;
        let status_code = resp.status().as_u16();
        let headers = resp.headers().clone();
        let body = resp.bytes().await?;
        let result = serde_json::from_slice(&body)
            .map_err(|e| WatsonError::Parse(format!("{} {}: {e}", spec.method(), spec.path())))?;
        Ok(DetailedResponse {
            status_code,
            headers,
            result,
        })
    }

    /// Send `spec` and ignore the response body.
    ///
    /// # Errors
    ///
    /// Everything [`BaseService::execute`] returns.
    pub async fn send_empty(
        &self,
        spec: &RequestSpec,
    ) -> Result<DetailedResponse<()>, WatsonError> {
        let resp = self.execute(spec).await?;
        Ok(DetailedResponse {
            status_code: resp.status().as_u16(),
            headers: resp.headers().clone(),
            result: (),
        })
    }
}
