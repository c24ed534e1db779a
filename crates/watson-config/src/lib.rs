//! # watson-config
//!
//! Layered configuration loading for the Watson service clients using figment.
//!
//! Configuration sources (in priority order, highest wins):
//! 1. Environment variables (`WATSON_*` prefix, `__` as separator)
//! 2. External overrides (e.g. entries from `ibm-credentials.env`)
//! 3. Project-level `.watson/config.toml`
//! 4. User-level `~/.config/watson/config.toml`
//! 5. Built-in defaults
//!
//! # Environment Variable Mapping
//!
//! Figment maps `WATSON_SPEECH_TO_TEXT__APIKEY` -> `speech_to_text.apikey`,
//! `WATSON_GENERAL__TIMEOUT_SECS` -> `general.timeout_secs`, etc.
//!
//! # Usage
//!
//! ```no_run
//! use watson_config::WatsonConfig;
//!
//! let config = WatsonConfig::load_with_credentials_file().expect("config");
//!
//! if config.speech_to_text.is_configured() {
//!     println!("Speech to Text URL: {}", config.speech_to_text.url);
//! }
//! ```

mod credentials;
mod error;
mod general;
mod service;

pub use credentials::{find_credentials_file, read_credentials_file};
pub use error::ConfigError;
pub use general::GeneralConfig;
pub use service::ServiceConfig;

use figment::{
    Figment,
    providers::{Env, Format, Serialized, Toml},
};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

const ENV_PREFIX: &str = "WATSON_";

#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct WatsonConfig {
    #[serde(default)]
    pub compare_comply: ServiceConfig,
    #[serde(default)]
    pub speech_to_text: ServiceConfig,
    #[serde(default)]
    pub natural_language_classifier: ServiceConfig,
    #[serde(default)]
    pub general: GeneralConfig,
}

impl WatsonConfig {
    /// Load configuration from TOML files and environment variables.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Figment`] if a source cannot be parsed or a
    /// value has the wrong type, and [`ConfigError::InvalidValue`] if a value
    /// is out of range.
    pub fn load() -> Result<Self, ConfigError> {
        Self::load_with_env_overrides(&[])
    }

    /// Load configuration with `.env` file support.
    ///
    /// # Errors
    ///
    /// See [`WatsonConfig::load`].
    pub fn load_with_dotenv() -> Result<Self, ConfigError> {
        let _ = dotenvy::dotenv();
        Self::load()
    }

    /// Load configuration with extra `WATSON_*` key/value pairs layered
    /// between the TOML files and the process environment.
    ///
    /// Keys without the `WATSON_` prefix are ignored. Values are taken as
    /// strings.
    ///
    /// # Errors
    ///
    /// See [`WatsonConfig::load`].
    pub fn load_with_env_overrides(overrides: &[(String, String)]) -> Result<Self, ConfigError> {
        let config: Self = Self::figment_with_overrides(overrides).extract()?;
        config.validate()?;
        Ok(config)
    }

    /// Load configuration, layering an `ibm-credentials.env` file when one
    /// can be found (see [`find_credentials_file`]).
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::CredentialsFile`] if the file exists but cannot
    /// be read, or any error from [`WatsonConfig::load`].
    pub fn load_with_credentials_file() -> Result<Self, ConfigError> {
        let _ = dotenvy::dotenv();
        let overrides = match find_credentials_file() {
            Some(path) => {
                tracing::debug!(path = %path.display(), "loading IBM credentials file");
                read_credentials_file(&path)?
            }
            None => Vec::new(),
        };
        Self::load_with_env_overrides(&overrides)
    }

    /// Look up a service section by name, requiring credentials.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::InvalidValue`] for an unknown section name and
    /// [`ConfigError::NotConfigured`] if the section has no credentials.
    pub fn service(&self, section: &str) -> Result<&ServiceConfig, ConfigError> {
        let config = match section {
            "compare_comply" => &self.compare_comply,
            "speech_to_text" => &self.speech_to_text,
            "natural_language_classifier" => &self.natural_language_classifier,
            _ => {
                return Err(ConfigError::InvalidValue {
                    field: section.to_string(),
                    reason: "unknown service section".into(),
                });
            }
        };
        if !config.is_configured() {
            return Err(ConfigError::NotConfigured {
                section: section.to_string(),
            });
        }
        Ok(config)
    }

    /// Reject values that parse but cannot work.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::InvalidValue`] naming the first bad field.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.general.timeout_secs == 0 {
            return Err(ConfigError::InvalidValue {
                field: "general.timeout_secs".into(),
                reason: "must be greater than zero".into(),
            });
        }
        for (section, config) in [
            ("compare_comply", &self.compare_comply),
            ("speech_to_text", &self.speech_to_text),
            ("natural_language_classifier", &self.natural_language_classifier),
        ] {
            for (name, url) in [("url", &config.url), ("iam_url", &config.iam_url)] {
                let is_http = url.starts_with("https://") || url.starts_with("http://");
                if !url.is_empty() && !is_http {
                    return Err(ConfigError::InvalidValue {
                        field: format!("{section}.{name}"),
                        reason: format!("'{url}' is not an http(s) URL"),
                    });
                }
            }
        }
        Ok(())
    }

    /// Build the figment provider chain.
    ///
    /// Public so tests can inspect the figment directly or add providers on top.
    pub fn figment() -> Figment {
        Self::figment_with_overrides(&[])
    }

    fn figment_with_overrides(overrides: &[(String, String)]) -> Figment {
        let mut figment = Figment::from(Serialized::defaults(Self::default()));

        if let Some(global_path) = Self::global_config_path()
            && global_path.exists()
        {
            figment = figment.merge(Toml::file(global_path));
        }

        let local_path = PathBuf::from(".watson/config.toml");
        if local_path.exists() {
            figment = figment.merge(Toml::file(local_path));
        }

        for (key, value) in overrides {
            if let Some(path) = env_key_to_path(key) {
                figment = figment.merge(Serialized::default(&path, value.as_str()));
            }
        }

        figment.merge(Env::prefixed(ENV_PREFIX).split("__"))
    }

    /// Path to the user-global config file.
    fn global_config_path() -> Option<PathBuf> {
        dirs::config_dir().map(|p| p.join("watson").join("config.toml"))
    }
}

/// `WATSON_SPEECH_TO_TEXT__APIKEY` -> `speech_to_text.apikey`.
fn env_key_to_path(key: &str) -> Option<String> {
    let rest = key.strip_prefix(ENV_PREFIX)?;
    if rest.is_empty() {
        return None;
    }
    Some(
        rest.split("__")
            .map(str::to_ascii_lowercase)
            .collect::<Vec<_>>()
            .join("."),
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config_loads() {
        let config = WatsonConfig::default();
        assert!(!config.compare_comply.is_configured());
        assert!(!config.speech_to_text.is_configured());
        assert!(!config.natural_language_classifier.is_configured());
        assert_eq!(config.general.timeout_secs, 60);
    }

    #[test]
    fn figment_builds_without_files() {
        figment::Jail::expect_with(|_jail| {
            let config: WatsonConfig = WatsonConfig::figment().extract()?;
            assert!(!config.speech_to_text.is_configured());
            assert!(!config.general.learning_opt_out);
            Ok(())
        });
    }

    #[test]
    fn service_requires_credentials() {
        let mut config = WatsonConfig::default();
        assert!(matches!(
            config.service("speech_to_text"),
            Err(ConfigError::NotConfigured { section }) if section == "speech_to_text"
        ));

        config.speech_to_text.apikey = "key".into();
        assert_eq!(config.service("speech_to_text").unwrap().apikey, "key");
        assert!(matches!(
            config.service("text_to_speech"),
            Err(ConfigError::InvalidValue { .. })
        ));
    }

    #[test]
    fn validate_rejects_zero_timeout_and_bad_urls() {
        let mut config = WatsonConfig::default();
        assert!(config.validate().is_ok());

        config.general.timeout_secs = 0;
        assert!(matches!(
            config.validate(),
            Err(ConfigError::InvalidValue { field, .. }) if field == "general.timeout_secs"
        ));

        config.general.timeout_secs = 30;
        config.compare_comply.url = "gateway.watsonplatform.net/compare-comply/api".into();
        assert!(matches!(
            config.validate(),
            Err(ConfigError::InvalidValue { field, .. }) if field == "compare_comply.url"
        ));
    }

    #[test]
    fn env_key_to_path_splits_sections() {
        assert_eq!(
            env_key_to_path("WATSON_SPEECH_TO_TEXT__APIKEY").as_deref(),
            Some("speech_to_text.apikey")
        );
        assert_eq!(
            env_key_to_path("WATSON_GENERAL__USER_AGENT").as_deref(),
            Some("general.user_agent")
        );
        assert!(env_key_to_path("SPEECH_TO_TEXT_APIKEY").is_none());
        assert!(env_key_to_path("WATSON_").is_none());
    }
}
