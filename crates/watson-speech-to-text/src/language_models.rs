//! Custom language models.

use std::collections::HashMap;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use watson_core::{DetailedResponse, Method, WatsonError, build_path, require};

use crate::SpeechToTextV1;
use crate::options::{CustomizationOptions, ListCustomizationsOptions};

pub(crate) const CUSTOMIZATION_PATH: &str = "/v1/customizations/{customization_id}";

/// Lifecycle states of a custom model.
pub mod status {
    pub const PENDING: &str = "pending";
    pub const READY: &str = "ready";
    pub const TRAINING: &str = "training";
    pub const AVAILABLE: &str = "available";
    pub const UPGRADING: &str = "upgrading";
    pub const FAILED: &str = "failed";
}

/// Which words `train_language_model` adds to the model.
pub mod word_type_to_add {
    pub const ALL: &str = "all";
    pub const USER: &str = "user";
}

/// A custom language model.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LanguageModel {
    pub customization_id: String,
    #[serde(with = "watson_core::timestamp::option")]
    pub created: Option<DateTime<Utc>>,
    #[serde(with = "watson_core::timestamp::option")]
    pub updated: Option<DateTime<Utc>>,
    pub language: Option<String>,
    pub dialect: Option<String>,
    #[serde(default, deserialize_with = "watson_core::serde_util::null_as_default")]
    pub versions: Vec<String>,
    pub owner: Option<String>,
    pub name: Option<String>,
    pub description: Option<String>,
    pub base_model_name: Option<String>,
    /// One of the [`status`] values.
    pub status: Option<String>,
    /// Training progress in percent.
    pub progress: Option<i64>,
    pub error: Option<String>,
    pub warnings: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LanguageModels {
    #[serde(default, deserialize_with = "watson_core::serde_util::null_as_default")]
    pub customizations: Vec<LanguageModel>,
}

/// Warnings reported when training starts.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct TrainingResponse {
    #[serde(default, deserialize_with = "watson_core::serde_util::null_as_default")]
    pub warnings: Vec<TrainingWarning>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct TrainingWarning {
    pub code: Option<String>,
    pub message: Option<String>,
}

/// Options for [`SpeechToTextV1::create_language_model`].
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct CreateLanguageModelOptions {
    pub name: String,
    pub base_model_name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub dialect: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip)]
    pub headers: HashMap<String, String>,
}

impl CreateLanguageModelOptions {
    #[must_use]
    pub fn new(name: impl Into<String>, base_model_name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            base_model_name: base_model_name.into(),
            ..Self::default()
        }
    }

    #[must_use]
    pub fn with_dialect(mut self, dialect: impl Into<String>) -> Self {
        self.dialect = Some(dialect.into());
        self
    }

    #[must_use]
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }
}

/// Options for [`SpeechToTextV1::train_language_model`].
#[derive(Debug, Clone, Default, PartialEq)]
pub struct TrainLanguageModelOptions {
    pub customization_id: String,
    /// One of the [`word_type_to_add`] values.
    pub word_type_to_add: Option<String>,
    pub customization_weight: Option<f64>,
    pub headers: HashMap<String, String>,
}

impl TrainLanguageModelOptions {
    #[must_use]
    pub fn new(customization_id: impl Into<String>) -> Self {
        Self {
            customization_id: customization_id.into(),
            ..Self::default()
        }
    }

    #[must_use]
    pub fn with_word_type_to_add(mut self, word_type: impl Into<String>) -> Self {
        self.word_type_to_add = Some(word_type.into());
        self
    }

    #[must_use]
    pub const fn with_customization_weight(mut self, weight: f64) -> Self {
        self.customization_weight = Some(weight);
        self
    }
}

watson_core::impl_with_header!(CreateLanguageModelOptions, TrainLanguageModelOptions);

pub type ListLanguageModelsOptions = ListCustomizationsOptions;
pub type GetLanguageModelOptions = CustomizationOptions;
pub type DeleteLanguageModelOptions = CustomizationOptions;
pub type ResetLanguageModelOptions = CustomizationOptions;
pub type UpgradeLanguageModelOptions = CustomizationOptions;

impl SpeechToTextV1 {
    /// Create an empty custom language model.
    ///
    /// # Errors
    ///
    /// Returns [`WatsonError::MissingParameter`] if `name` or
    /// `base_model_name` is empty, or any error from sending the request.
    pub async fn create_language_model(
        &self,
        options: &CreateLanguageModelOptions,
    ) -> Result<DetailedResponse<LanguageModel>, WatsonError> {
        require("name", &options.name)?;
        require("base_model_name", &options.base_model_name)?;
        let spec = Self::request(Method::POST, "/v1/customizations", "CreateLanguageModel")
            .headers(&options.headers)
            .json(options)?;
        self.service.send_json(&spec).await
    }

    /// List custom language models owned by the caller.
    ///
    /// # Errors
    ///
    /// Returns any error from sending the request.
    pub async fn list_language_models(
        &self,
        options: &ListLanguageModelsOptions,
    ) -> Result<DetailedResponse<LanguageModels>, WatsonError> {
        let spec = Self::request(Method::GET, "/v1/customizations", "ListLanguageModels")
            .query_opt("language", options.language.as_ref())
            .headers(&options.headers);
        self.service.send_json(&spec).await
    }

    /// Describe a custom language model.
    ///
    /// # Errors
    ///
    /// Returns [`WatsonError::MissingParameter`] if `customization_id` is
    /// empty, or any error from sending the request.
    pub async fn get_language_model(
        &self,
        options: &GetLanguageModelOptions,
    ) -> Result<DetailedResponse<LanguageModel>, WatsonError> {
        let path = build_path(CUSTOMIZATION_PATH, &[("customization_id", &options.customization_id)])?;
        let spec = Self::request(Method::GET, path, "GetLanguageModel").headers(&options.headers);
        self.service.send_json(&spec).await
    }

    /// Delete a custom language model.
    ///
    /// # Errors
    ///
    /// Returns [`WatsonError::MissingParameter`] if `customization_id` is
    /// empty, or any error from sending the request.
    pub async fn delete_language_model(
        &self,
        options: &DeleteLanguageModelOptions,
    ) -> Result<DetailedResponse<()>, WatsonError> {
        let path = build_path(CUSTOMIZATION_PATH, &[("customization_id", &options.customization_id)])?;
        let spec = Self::request(Method::DELETE, path, "DeleteLanguageModel").headers(&options.headers);
        self.service.send_empty(&spec).await
    }

    /// Start training on the model's corpora, grammars and words.
    ///
    /// # Errors
    ///
    /// Returns [`WatsonError::MissingParameter`] if `customization_id` is
    /// empty, or any error from sending the request.
    pub async fn train_language_model(
        &self,
        options: &TrainLanguageModelOptions,
    ) -> Result<DetailedResponse<TrainingResponse>, WatsonError> {
        let path = build_path(
            "/v1/customizations/{customization_id}/train",
            &[("customization_id", &options.customization_id)],
        )?;
        let spec = Self::request(Method::POST, path, "TrainLanguageModel")
            .query_opt("word_type_to_add", options.word_type_to_add.as_ref())
            .query_opt("customization_weight", options.customization_weight.as_ref())
            .headers(&options.headers);
        self.service.send_json(&spec).await
    }

    /// Remove all corpora, grammars and words from the model.
    ///
    /// # Errors
    ///
    /// Returns [`WatsonError::MissingParameter`] if `customization_id` is
    /// empty, or any error from sending the request.
    pub async fn reset_language_model(
        &self,
        options: &ResetLanguageModelOptions,
    ) -> Result<DetailedResponse<()>, WatsonError> {
        let path = build_path(
            "/v1/customizations/{customization_id}/reset",
            &[("customization_id", &options.customization_id)],
        )?;
        let spec = Self::request(Method::POST, path, "ResetLanguageModel").headers(&options.headers);
        self.service.send_empty(&spec).await
    }

    /// Upgrade the model to the latest version of its base model.
    ///
    /// # Errors
    ///
    /// Returns [`WatsonError::MissingParameter`] if `customization_id` is
    /// empty, or any error from sending the request.
    pub async fn upgrade_language_model(
        &self,
        options: &UpgradeLanguageModelOptions,
    ) -> Result<DetailedResponse<()>, WatsonError> {
        let path = build_path(
            "/v1/customizations/{customization_id}/upgrade_model",
            &[("customization_id", &options.customization_id)],
        )?;
        let spec = Self::request(Method::POST, path, "UpgradeLanguageModel").headers(&options.headers);
        self.service.send_empty(&spec).await
    }
}
