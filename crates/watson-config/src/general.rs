//! Settings shared by every service client.

use serde::{Deserialize, Serialize};

/// Default request timeout in seconds.
const fn default_timeout_secs() -> u64 {
    60
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct GeneralConfig {
    /// Per-request timeout, in seconds.
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,

    /// Accept invalid TLS certificates (private deployments only).
    #[serde(default)]
    pub disable_ssl_verification: bool,

    /// Send `X-Watson-Learning-Opt-Out: true` on every request.
    #[serde(default)]
    pub learning_opt_out: bool,

    /// Custom `User-Agent`. Empty means the SDK default.
    #[serde(default)]
    pub user_agent: String,
}

impl Default for GeneralConfig {
    fn default() -> Self {
        Self {
            timeout_secs: default_timeout_secs(),
            disable_ssl_verification: false,
            learning_opt_out: false,
            user_agent: String::new(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_are_correct() {
        let config = GeneralConfig::default();
        assert_eq!(config.timeout_secs, 60);
        assert!(!config.disable_ssl_verification);
        assert!(!config.learning_opt_out);
        assert!(config.user_agent.is_empty());
    }
}
