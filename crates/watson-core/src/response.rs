//! Response status checks and the typed response envelope.

use reqwest::header::HeaderMap;

use crate::error::WatsonError;

/// A decoded result together with the raw status code and headers.
#[derive(Debug, Clone)]
pub struct DetailedResponse<T> {
    pub status_code: u16,
    pub headers: HeaderMap,
    pub result: T,
}

impl<T> DetailedResponse<T> {
    /// Discard status and headers.
    pub fn into_result(self) -> T {
        self.result
    }

    /// Transform the result, keeping status and headers.
    pub fn map<U>(self, f: impl FnOnce(T) -> U) -> DetailedResponse<U> {
        DetailedResponse {
            status_code: self.status_code,
            headers: self.headers,
            result: f(self.result),
        }
    }
}

/// Return the response unchanged on success; otherwise wrap the status code
/// and raw body text in [`WatsonError::Api`].
///
/// # Errors
///
/// Returns [`WatsonError::Api`] for any non-2xx status.
pub async fn check_response(resp: reqwest::Response) -> Result<reqwest::Response, WatsonError> {
    if !resp.status().is_success() {
        return Err(WatsonError::Api {
            status: resp.status().as_u16(),
            message: resp.text().await.unwrap_or_default(),
        });
    }
    Ok(resp)
}
