//! # watson-core
//!
//! Request plumbing shared by the Watson service clients.
//!
//! Every operation follows the same template: check required options, fill the
//! path template, attach query parameters, headers and a JSON, binary or
//! multipart body, authenticate, send, and decode the JSON result into a
//! [`DetailedResponse`]. Non-2xx responses become [`WatsonError::Api`] carrying
//! the raw body text; nothing is retried except a single resend after an IAM
//! token is rejected.

mod error;
mod macros;
mod request;
mod response;
pub mod serde_util;
mod service;
pub mod timestamp;

pub use error::WatsonError;
pub use request::{Body, FileData, FormPart, RequestSpec, build_path, require};
pub use response::{DetailedResponse, check_response};
pub use service::{BaseService, default_user_agent};

pub use reqwest::Method;
pub use watson_auth::{AuthError, Authenticator, IamTokenManager};
pub use watson_config::{GeneralConfig, ServiceConfig, WatsonConfig};
