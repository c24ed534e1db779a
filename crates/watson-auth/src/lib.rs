//! # watson-auth
//!
//! Request authentication for the Watson service clients.
//!
//! Supports static basic auth, caller-managed bearer tokens, and IAM API keys
//! exchanged for bearer tokens that are cached until shortly before expiry.

pub mod authenticator;
pub mod error;
pub mod iam;

pub use authenticator::Authenticator;
pub use error::AuthError;
pub use iam::{DEFAULT_IAM_URL, IamToken, IamTokenManager};
