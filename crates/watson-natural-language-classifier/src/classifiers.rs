//! Manage classifiers.

use std::collections::HashMap;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use watson_core::{DetailedResponse, FileData, FormPart, RequestSpec, WatsonError, build_path};

use crate::{NaturalLanguageClassifierV1, SERVICE_NAME, SERVICE_VERSION};

/// A classifier and its training state.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Classifier {
    pub name: Option<String>,
    pub url: Option<String>,
    pub status: Option<String>,
    pub classifier_id: Option<String>,
    #[serde(with = "watson_core::timestamp::option")]
    pub created: Option<DateTime<Utc>>,
    pub status_description: Option<String>,
    pub language: Option<String>,
}

impl Classifier {
    pub const STATUS_NON_EXISTENT: &'static str = "Non Existent";
    pub const STATUS_TRAINING: &'static str = "Training";
    pub const STATUS_FAILED: &'static str = "Failed";
    pub const STATUS_AVAILABLE: &'static str = "Available";
    pub const STATUS_UNAVAILABLE: &'static str = "Unavailable";

    /// Whether the classifier can accept classify requests.
    #[must_use]
    pub fn is_available(&self) -> bool {
        self.status.as_deref() == Some(Self::STATUS_AVAILABLE)
    }
}

/// Classifiers owned by the service instance.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ClassifierList {
    #[serde(default, deserialize_with = "watson_core::serde_util::null_as_default")]
    pub classifiers: Vec<Classifier>,
}

/// Options for [`NaturalLanguageClassifierV1::create_classifier`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CreateClassifierOptions {
    /// JSON with `language` and optional `name`, e.g. `{"language":"en","name":"weather"}`.
    pub training_metadata: FileData,
    /// CSV of `text,class[,class...]` rows.
    pub training_data: FileData,
    pub headers: HashMap<String, String>,
}

impl CreateClassifierOptions {
    #[must_use]
    pub fn new(training_metadata: FileData, training_data: FileData) -> Self {
        Self {
            training_metadata,
            training_data,
            headers: HashMap::new(),
        }
    }
}

/// Options for [`NaturalLanguageClassifierV1::list_classifiers`].
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ListClassifiersOptions {
    pub headers: HashMap<String, String>,
}

impl ListClassifiersOptions {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
}

/// Options for [`NaturalLanguageClassifierV1::get_classifier`].
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct GetClassifierOptions {
    pub classifier_id: String,
    pub headers: HashMap<String, String>,
}

impl GetClassifierOptions {
    #[must_use]
    pub fn new(classifier_id: impl Into<String>) -> Self {
        Self {
            classifier_id: classifier_id.into(),
            headers: HashMap::new(),
        }
    }
}

/// Options for [`NaturalLanguageClassifierV1::delete_classifier`].
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DeleteClassifierOptions {
    pub classifier_id: String,
    pub headers: HashMap<String, String>,
}

impl DeleteClassifierOptions {
    #[must_use]
    pub fn new(classifier_id: impl Into<String>) -> Self {
        Self {
            classifier_id: classifier_id.into(),
            headers: HashMap::new(),
        }
    }
}

watson_core::impl_with_header!(
    CreateClassifierOptions,
    ListClassifiersOptions,
    GetClassifierOptions,
    DeleteClassifierOptions,
);

impl NaturalLanguageClassifierV1 {
    /// Send data to create and train a classifier.
    ///
    /// # Errors
    ///
    /// Returns [`WatsonError::MissingParameter`] if either upload is empty, or
    /// any error from sending the request.
    pub async fn create_classifier(
        &self,
        options: &CreateClassifierOptions,
    ) -> Result<DetailedResponse<Classifier>, WatsonError> {
        if options.training_metadata.data.is_empty() {
            return Err(WatsonError::MissingParameter("training_metadata"));
        }
        if options.training_data.data.is_empty() {
            return Err(WatsonError::MissingParameter("training_data"));
        }
        let spec = RequestSpec::post("/v1/classifiers")
            .analytics(SERVICE_NAME, SERVICE_VERSION, "CreateClassifier")
            .headers(&options.headers)
            .multipart(vec![
                FormPart::file("training_metadata", &options.training_metadata, "application/json"),
                FormPart::file("training_data", &options.training_data, "text/csv"),
            ]);
        self.service.send_json(&spec).await
    }

    /// Return an empty list if no classifiers are available.
    ///
    /// # Errors
    ///
    /// Returns any error from sending the request.
    pub async fn list_classifiers(
        &self,
        options: &ListClassifiersOptions,
    ) -> Result<DetailedResponse<ClassifierList>, WatsonError> {
        let spec = RequestSpec::get("/v1/classifiers")
            .analytics(SERVICE_NAME, SERVICE_VERSION, "ListClassifiers")
            .headers(&options.headers);
        self.service.send_json(&spec).await
    }

    /// Return status and other information about a classifier.
    ///
    /// # Errors
    ///
    /// Returns [`WatsonError::MissingParameter`] if `classifier_id` is empty,
    /// or any error from sending the request.
    pub async fn get_classifier(
        &self,
        options: &GetClassifierOptions,
    ) -> Result<DetailedResponse<Classifier>, WatsonError> {
        let path = build_path(
            "/v1/classifiers/{classifier_id}",
            &[("classifier_id", &options.classifier_id)],
        )?;
        let spec = RequestSpec::get(path)
            .analytics(SERVICE_NAME, SERVICE_VERSION, "GetClassifier")
            .headers(&options.headers);
        self.service.send_json(&spec).await
    }

    /// Delete a classifier.
    ///
    /// # Errors
    ///
    /// Returns [`WatsonError::MissingParameter`] if `classifier_id` is empty,
    /// or any error from sending the request.
    pub async fn delete_classifier(
        &self,
        options: &DeleteClassifierOptions,
    ) -> Result<DetailedResponse<()>, WatsonError> {
        let path = build_path(
            "/v1/classifiers/{classifier_id}",
            &[("classifier_id", &options.classifier_id)],
        )?;
        let spec = RequestSpec::delete(path)
            .analytics(SERVICE_NAME, SERVICE_VERSION, "DeleteClassifier")
            .headers(&options.headers);
        self.service.send_empty(&spec).await
    }
}
