//! IBM credential files (`ibm-credentials.env`).
//!
//! The file uses the IBM Cloud naming scheme, e.g. `SPEECH_TO_TEXT_APIKEY` and
//! `SPEECH_TO_TEXT_URL`. Each recognised entry is rewritten to the matching
//! `WATSON_<SECTION>__<FIELD>` key so it can be layered like any other
//! environment override.

use std::path::{Path, PathBuf};

use crate::error::ConfigError;

const CREDENTIALS_FILE_NAME: &str = "ibm-credentials.env";
const CREDENTIALS_FILE_ENV: &str = "IBM_CREDENTIALS_FILE";

/// IBM service prefix → config section.
const SERVICES: &[(&str, &str)] = &[
    ("COMPARE_COMPLY_", "COMPARE_COMPLY"),
    ("SPEECH_TO_TEXT_", "SPEECH_TO_TEXT"),
    ("NATURAL_LANGUAGE_CLASSIFIER_", "NATURAL_LANGUAGE_CLASSIFIER"),
];

/// IBM field suffix → config field.
const FIELDS: &[(&str, &str)] = &[
    ("IAM_APIKEY", "APIKEY"),
    ("APIKEY", "APIKEY"),
    ("URL", "URL"),
    ("USERNAME", "USERNAME"),
    ("PASSWORD", "PASSWORD"),
    ("IAM_URL", "IAM_URL"),
    ("AUTH_URL", "IAM_URL"),
    ("CLIENT_ID", "IAM_CLIENT_ID"),
    ("CLIENT_SECRET", "IAM_CLIENT_SECRET"),
    ("BEARER_TOKEN", "ACCESS_TOKEN"),
    ("VERSION", "VERSION"),
];

/// Locate the credentials file.
///
/// Priority: `IBM_CREDENTIALS_FILE` → `./ibm-credentials.env` → `~/ibm-credentials.env`.
#[must_use]
pub fn find_credentials_file() -> Option<PathBuf> {
    if let Ok(path) = std::env::var(CREDENTIALS_FILE_ENV)
        && !path.is_empty()
    {
        let path = PathBuf::from(path);
        return path.is_file().then_some(path);
    }

    let local = PathBuf::from(CREDENTIALS_FILE_NAME);
    if local.is_file() {
        return Some(local);
    }

    dirs::home_dir()
        .map(|home| home.join(CREDENTIALS_FILE_NAME))
        .filter(|path| path.is_file())
}

/// Read a credentials file into `WATSON_*` override pairs.
///
/// Unrecognised keys are skipped. Keys of a supported service with an
/// unknown field are logged at `warn`, since they are usually typos.
///
/// # Errors
///
/// Returns [`ConfigError::CredentialsFile`] if the file cannot be opened or a
/// line cannot be parsed.
pub fn read_credentials_file(path: &Path) -> Result<Vec<(String, String)>, ConfigError> {
    let entries = dotenvy::from_path_iter(path)
        .map_err(|e| ConfigError::CredentialsFile(format!("{}: {e}", path.display())))?;

    let mut overrides = Vec::new();
    for entry in entries {
        let (key, value) =
            entry.map_err(|e| ConfigError::CredentialsFile(format!("{}: {e}", path.display())))?;
        match translate_key(&key) {
            Some(mapped) => overrides.push((mapped, value)),
            None if is_service_key(&key) => {
                tracing::warn!(
                    key,
                    path = %path.display(),
                    "skipping unknown field in credentials file"
                );
            }
            None => tracing::debug!(key, "ignoring unrecognised credentials entry"),
        }
    }
    Ok(overrides)
}

fn is_service_key(key: &str) -> bool {
    let key = key.to_ascii_uppercase();
    SERVICES.iter().any(|(prefix, _)| key.starts_with(prefix))
}

/// Map `SPEECH_TO_TEXT_APIKEY` to `WATSON_SPEECH_TO_TEXT__APIKEY`.
fn translate_key(key: &str) -> Option<String> {
    let key = key.to_ascii_uppercase();
    SERVICES.iter().find_map(|(prefix, section)| {
        let suffix = key.strip_prefix(prefix)?;
        FIELDS
            .iter()
            .find(|(name, _)| *name == suffix)
            .map(|(_, field)| format!("WATSON_{section}__{field}"))
    })
}
