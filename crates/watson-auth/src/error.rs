use thiserror::Error;

#[derive(Debug, Error)]
pub enum AuthError {
    #[error("HTTP error while requesting token: {0}")]
    Http(#[from] reqwest::Error),

    #[error("IAM token request failed ({status}): {message}")]
    TokenRequest { status: u16, message: String },

    #[error("invalid credentials: {0}")]
    InvalidCredentials(String),

    #[error("token parse error: {0}")]
    Parse(String),
}
