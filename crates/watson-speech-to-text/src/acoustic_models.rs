//! Custom acoustic models.

use std::collections::HashMap;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use watson_core::{DetailedResponse, Method, WatsonError, build_path, require};

use crate::SpeechToTextV1;
use crate::language_models::TrainingResponse;
use crate::options::{CustomizationOptions, ListCustomizationsOptions};

const ACOUSTIC_PATH: &str = "/v1/acoustic_customizations/{customization_id}";

/// A custom acoustic model. Status values are shared with language models,
/// see [`crate::language_models::status`].
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct AcousticModel {
    pub customization_id: String,
    #[serde(with = "watson_core::timestamp::option")]
    pub created: Option<DateTime<Utc>>,
    #[serde(with = "watson_core::timestamp::option")]
    pub updated: Option<DateTime<Utc>>,
    pub language: Option<String>,
    #[serde(default, deserialize_with = "watson_core::serde_util::null_as_default")]
    pub versions: Vec<String>,
    pub owner: Option<String>,
    pub name: Option<String>,
    pub description: Option<String>,
    pub base_model_name: Option<String>,
    pub status: Option<String>,
    pub progress: Option<i64>,
    pub warnings: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct AcousticModels {
    #[serde(default, deserialize_with = "watson_core::serde_util::null_as_default")]
    pub customizations: Vec<AcousticModel>,
}

/// Options for [`SpeechToTextV1::create_acoustic_model`].
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct CreateAcousticModelOptions {
    pub name: String,
    pub base_model_name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip)]
    pub headers: HashMap<String, String>,
}

impl CreateAcousticModelOptions {
    #[must_use]
    pub fn new(name: impl Into<String>, base_model_name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            base_model_name: base_model_name.into(),
            ..Self::default()
        }
    }

    #[must_use]
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }
}

/// Options for [`SpeechToTextV1::train_acoustic_model`].
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TrainAcousticModelOptions {
    pub customization_id: String,
    /// Custom language model to train alongside, for transcription-aware
    /// acoustic training.
    pub custom_language_model_id: Option<String>,
    pub headers: HashMap<String, String>,
}

impl TrainAcousticModelOptions {
    #[must_use]
    pub fn new(customization_id: impl Into<String>) -> Self {
        Self {
            customization_id: customization_id.into(),
            ..Self::default()
        }
    }

    #[must_use]
    pub fn with_custom_language_model_id(mut self, id: impl Into<String>) -> Self {
        self.custom_language_model_id = Some(id.into());
        self
    }
}

/// Options for [`SpeechToTextV1::upgrade_acoustic_model`].
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct UpgradeAcousticModelOptions {
    pub customization_id: String,
    pub custom_language_model_id: Option<String>,
    /// Upgrade even when the model has no changes since the last upgrade.
    pub force: Option<bool>,
    pub headers: HashMap<String, String>,
}

impl UpgradeAcousticModelOptions {
    #[must_use]
    pub fn new(customization_id: impl Into<String>) -> Self {
        Self {
            customization_id: customization_id.into(),
            ..Self::default()
        }
    }

    #[must_use]
    pub fn with_custom_language_model_id(mut self, id: impl Into<String>) -> Self {
        self.custom_language_model_id = Some(id.into());
        self
    }

    #[must_use]
    pub const fn with_force(mut self, force: bool) -> Self {
        self.force = Some(force);
        self
    }
}

watson_core::impl_with_header!(
    CreateAcousticModelOptions,
    TrainAcousticModelOptions,
    UpgradeAcousticModelOptions,
);

pub type ListAcousticModelsOptions = ListCustomizationsOptions;
pub type GetAcousticModelOptions = CustomizationOptions;
pub type DeleteAcousticModelOptions = CustomizationOptions;
pub type ResetAcousticModelOptions = CustomizationOptions;

impl SpeechToTextV1 {
    /// Create an empty custom acoustic model.
    ///
    /// # Errors
    ///
    /// Returns [`WatsonError::MissingParameter`] if `name` or
    /// `base_model_name` is empty, or any error from sending the request.
    pub async fn create_acoustic_model(
        &self,
        options: &CreateAcousticModelOptions,
    ) -> Result<DetailedResponse<AcousticModel>, WatsonError> {
        require("name", &options.name)?;
        require("base_model_name", &options.base_model_name)?;
        let spec = Self::request(Method::POST, "/v1/acoustic_customizations", "CreateAcousticModel")
            .headers(&options.headers)
            .json(options)?;
        self.service.send_json(&spec).await
    }

    /// List custom acoustic models owned by the caller.
    ///
    /// # Errors
    ///
    /// Returns any error from sending the request.
    pub async fn list_acoustic_models(
        &self,
        options: &ListAcousticModelsOptions,
    ) -> Result<DetailedResponse<AcousticModels>, WatsonError> {
        let spec = Self::request(Method::GET, "/v1/acoustic_customizations", "ListAcousticModels")
            .query_opt("language", options.language.as_ref())
            .headers(&options.headers);
        self.service.send_json(&spec).await
    }

    /// Describe a custom acoustic model.
    ///
    /// # Errors
    ///
    /// Returns [`WatsonError::MissingParameter`] if `customization_id` is
    /// empty, or any error from sending the request.
    pub async fn get_acoustic_model(
        &self,
        options: &GetAcousticModelOptions,
    ) -> Result<DetailedResponse<AcousticModel>, WatsonError> {
        let path = build_path(ACOUSTIC_PATH, &[("customization_id", &options.customization_id)])?;
        let spec = Self::request(Method::GET, path, "GetAcousticModel").headers(&options.headers);
        self.service.send_json(&spec).await
    }

    /// Delete a custom acoustic model.
    ///
    /// # Errors
    ///
    /// Returns [`WatsonError::MissingParameter`] if `customization_id` is
    /// empty, or any error from sending the request.
    pub async fn delete_acoustic_model(
        &self,
        options: &DeleteAcousticModelOptions,
    ) -> Result<DetailedResponse<()>, WatsonError> {
        let path = build_path(ACOUSTIC_PATH, &[("customization_id", &options.customization_id)])?;
        let spec = Self::request(Method::DELETE, path, "DeleteAcousticModel").headers(&options.headers);
        self.service.send_empty(&spec).await
    }

    /// Start training on the model's audio resources.
    ///
    /// # Errors
    ///
    /// Returns [`WatsonError::MissingParameter`] if `customization_id` is
    /// empty, or any error from sending the request.
    pub async fn train_acoustic_model(
        &self,
        options: &TrainAcousticModelOptions,
    ) -> Result<DetailedResponse<TrainingResponse>, WatsonError> {
        let path = build_path(
            "/v1/acoustic_customizations/{customization_id}/train",
            &[("customization_id", &options.customization_id)],
        )?;
        let spec = Self::request(Method::POST, path, "TrainAcousticModel")
            .query_opt("custom_language_model_id", options.custom_language_model_id.as_ref())
            .headers(&options.headers);
        self.service.send_json(&spec).await
    }

    /// Remove all audio resources from the model.
    ///
    /// # Errors
    ///
    /// Returns [`WatsonError::MissingParameter`] if `customization_id` is
    /// empty, or any error from sending the request.
    pub async fn reset_acoustic_model(
        &self,
        options: &ResetAcousticModelOptions,
    ) -> Result<DetailedResponse<()>, WatsonError> {
        let path = build_path(
            "/v1/acoustic_customizations/{customization_id}/reset",
            &[("customization_id", &options.customization_id)],
        )?;
        let spec = Self::request(Method::POST, path, "ResetAcousticModel").headers(&options.headers);
        self.service.send_empty(&spec).await
    }

    /// Upgrade the model to the latest version of its base model.
    ///
    /// # Errors
    ///
    /// Returns [`WatsonError::MissingParameter`] if `customization_id` is
    /// empty, or any error from sending the request.
    pub async fn upgrade_acoustic_model(
        &self,
        options: &UpgradeAcousticModelOptions,
    ) -> Result<DetailedResponse<()>, WatsonError> {
        let path = build_path(
            "/v1/acoustic_customizations/{customization_id}/upgrade_model",
            &[("customization_id", &options.customization_id)],
        )?;
        let spec = Self::request(Method::POST, path, "UpgradeAcousticModel")
            .query_opt("custom_language_model_id", options.custom_language_model_id.as_ref())
            .query_opt("force", options.force.as_ref())
            .headers(&options.headers);
        self.service.send_empty(&spec).await
    }
}
