use anyhow::Context;
use watson_config::WatsonConfig;

/// Load `.env`, any `ibm-credentials.env` file, TOML files and `WATSON_*`
/// variables.
pub fn load_config() -> anyhow::Result<WatsonConfig> {
    WatsonConfig::load_with_credentials_file().context("failed to load watson configuration")
}
