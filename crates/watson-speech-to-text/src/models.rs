//! Available language models.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};
use watson_core::{DetailedResponse, Method, WatsonError, build_path};

use crate::SpeechToTextV1;
use crate::options::ListOptions;

/// Model identifiers accepted by `model` and `base_model_name`.
pub mod model_id {
    pub const AR_AR_BROADBAND: &str = "ar-AR_BroadbandModel";
    pub const DE_DE_BROADBAND: &str = "de-DE_BroadbandModel";
    pub const DE_DE_NARROWBAND: &str = "de-DE_NarrowbandModel";
    pub const EN_GB_BROADBAND: &str = "en-GB_BroadbandModel";
    pub const EN_GB_NARROWBAND: &str = "en-GB_NarrowbandModel";
    pub const EN_US_BROADBAND: &str = "en-US_BroadbandModel";
    pub const EN_US_NARROWBAND: &str = "en-US_NarrowbandModel";
    pub const EN_US_SHORTFORM_NARROWBAND: &str = "en-US_ShortForm_NarrowbandModel";
    pub const ES_ES_BROADBAND: &str = "es-ES_BroadbandModel";
    pub const ES_ES_NARROWBAND: &str = "es-ES_NarrowbandModel";
    pub const FR_FR_BROADBAND: &str = "fr-FR_BroadbandModel";
    pub const FR_FR_NARROWBAND: &str = "fr-FR_NarrowbandModel";
    pub const JA_JP_BROADBAND: &str = "ja-JP_BroadbandModel";
    pub const JA_JP_NARROWBAND: &str = "ja-JP_NarrowbandModel";
    pub const KO_KR_BROADBAND: &str = "ko-KR_BroadbandModel";
    pub const KO_KR_NARROWBAND: &str = "ko-KR_NarrowbandModel";
    pub const PT_BR_BROADBAND: &str = "pt-BR_BroadbandModel";
    pub const PT_BR_NARROWBAND: &str = "pt-BR_NarrowbandModel";
    pub const ZH_CN_BROADBAND: &str = "zh-CN_BroadbandModel";
    pub const ZH_CN_NARROWBAND: &str = "zh-CN_NarrowbandModel";
}

/// A language model available for recognition.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SpeechModel {
    pub name: Option<String>,
    pub language: Option<String>,
    /// Sampling rate in Hz.
    pub rate: Option<i64>,
    pub url: Option<String>,
    pub supported_features: Option<SupportedFeatures>,
    pub description: Option<String>,
    /// Only present for models a custom model is based on.
    pub sessions: Option<String>,
}

/// Customization support of a model.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SupportedFeatures {
    pub custom_language_model: bool,
    pub speaker_labels: bool,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SpeechModels {
    #[serde(default, deserialize_with = "watson_core::serde_util::null_as_default")]
    pub models: Vec<SpeechModel>,
}

/// Options for [`SpeechToTextV1::list_models`].
pub type ListModelsOptions = ListOptions;

/// Options for [`SpeechToTextV1::get_model`].
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct GetModelOptions {
    pub model_id: String,
    pub headers: HashMap<String, String>,
}

impl GetModelOptions {
    #[must_use]
    pub fn new(model_id: impl Into<String>) -> Self {
        Self {
            model_id: model_id.into(),
            headers: HashMap::new(),
        }
    }
}

watson_core::impl_with_header!(GetModelOptions);

impl SpeechToTextV1 {
    /// List the models available for recognition.
    ///
    /// # Errors
    ///
    /// Returns any error from sending the request.
    pub async fn list_models(
        &self,
        options: &ListModelsOptions,
    ) -> Result<DetailedResponse<SpeechModels>, WatsonError> {
        let spec = Self::request(Method::GET, "/v1/models", "ListModels").headers(&options.headers);
        self.service.send_json(&spec).await
    }

    /// Describe one model.
    ///
    /// # Errors
    ///
    /// Returns [`WatsonError::MissingParameter`] if `model_id` is empty, or
    /// any error from sending the request.
    pub async fn get_model(
        &self,
        options: &GetModelOptions,
    ) -> Result<DetailedResponse<SpeechModel>, WatsonError> {
        let path = build_path("/v1/models/{model_id}", &[("model_id", &options.model_id)])?;
        let spec = Self::request(Method::GET, path, "GetModel").headers(&options.headers);
        self.service.send_json(&spec).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn parse_models() {
        let data: SpeechModels = serde_json::from_str(
            r#"{
                "models": [
                    {
                        "name": "en-US_BroadbandModel",
                        "language": "en-US",
                        "rate": 16000,
                        "url": "https://stream.watsonplatform.net/speech-to-text/api/v1/models/en-US_BroadbandModel",
                        "supported_features": {"custom_language_model": true, "speaker_labels": true},
                        "description": "US English broadband model."
                    },
                    {"name": "ja-JP_NarrowbandModel", "rate": 8000}
                ]
            }"#,
        )
        .unwrap();

        assert_eq!(data.models.len(), 2);
        let first = &data.models[0];
        assert_eq!(first.name.as_deref(), Some(model_id::EN_US_BROADBAND));
        assert_eq!(first.rate, Some(16_000));
        assert!(first.supported_features.unwrap().speaker_labels);
        assert!(data.models[1].supported_features.is_none());
    }
}
