//! Batch processing of documents stored in Cloud Object Storage.

use std::collections::HashMap;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use watson_core::{DetailedResponse, FileData, FormPart, Method, WatsonError, build_path, require};

use crate::CompareComplyV1;

/// Values of the `function` query parameter and [`BatchStatus::function`].
pub mod function {
    pub const HTML_CONVERSION: &str = "html_conversion";
    pub const ELEMENT_CLASSIFICATION: &str = "element_classification";
    pub const TABLES: &str = "tables";
}

/// Values of the `action` query parameter of [`CompareComplyV1::update_batch`].
pub mod action {
    pub const RESCAN: &str = "rescan";
    pub const CANCEL: &str = "cancel";
}

/// Bucket locations for batch input and output.
pub mod bucket_location {
    pub const CLOUD: &str = "cloud";
    pub const OTHER: &str = "other";
}

/// Progress of a batch.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct BatchStatus {
    pub function: Option<String>,
    pub input_bucket_location: Option<String>,
    pub input_bucket_name: Option<String>,
    pub output_bucket_location: Option<String>,
    pub output_bucket_name: Option<String>,
    pub batch_id: Option<String>,
    pub document_counts: Option<DocCounts>,
    pub status: Option<String>,
    #[serde(with = "watson_core::timestamp::option")]
    pub created: Option<DateTime<Utc>>,
    #[serde(with = "watson_core::timestamp::option")]
    pub updated: Option<DateTime<Utc>>,
}

/// Document counts of a batch.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct DocCounts {
    pub total: Option<i64>,
    pub pending: Option<i64>,
    pub successful: Option<i64>,
    pub failed: Option<i64>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Batches {
    #[serde(default, deserialize_with = "watson_core::serde_util::null_as_default")]
    pub batches: Vec<BatchStatus>,
}

/// Options for [`CompareComplyV1::create_batch`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CreateBatchOptions {
    /// One of the [`function`] constants.
    pub function: String,
    /// JSON file with the input bucket's HMAC credentials.
    pub input_credentials_file: FileData,
    pub input_bucket_location: String,
    pub input_bucket_name: String,
    /// JSON file with the output bucket's HMAC credentials.
    pub output_credentials_file: FileData,
    pub output_bucket_location: String,
    pub output_bucket_name: String,
    pub model: Option<String>,
    pub headers: HashMap<String, String>,
}

impl CreateBatchOptions {
    /// Start from the function and credential files; buckets default to the
    /// `cloud` location and must be named with [`Self::with_input_bucket`]
    /// and [`Self::with_output_bucket`].
    #[must_use]
    pub fn new(
        function: impl Into<String>,
        input_credentials_file: FileData,
        output_credentials_file: FileData,
    ) -> Self {
        Self {
            function: function.into(),
            input_credentials_file,
            input_bucket_location: bucket_location::CLOUD.to_string(),
            input_bucket_name: String::new(),
            output_credentials_file,
            output_bucket_location: bucket_location::CLOUD.to_string(),
            output_bucket_name: String::new(),
            model: None,
            headers: HashMap::new(),
        }
    }

    #[must_use]
    pub fn with_input_bucket(
        mut self,
        location: impl Into<String>,
        name: impl Into<String>,
    ) -> Self {
        self.input_bucket_location = location.into();
        self.input_bucket_name = name.into();
        self
    }

    #[must_use]
    pub fn with_output_bucket(
        mut self,
        location: impl Into<String>,
        name: impl Into<String>,
    ) -> Self {
        self.output_bucket_location = location.into();
        self.output_bucket_name = name.into();
        self
    }

    #[must_use]
    pub fn with_model(mut self, model: impl Into<String>) -> Self {
        self.model = Some(model.into());
        self
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ListBatchesOptions {
    pub headers: HashMap<String, String>,
}

impl ListBatchesOptions {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct GetBatchOptions {
    pub batch_id: String,
    pub headers: HashMap<String, String>,
}

impl GetBatchOptions {
    #[must_use]
    pub fn new(batch_id: impl Into<String>) -> Self {
        Self {
            batch_id: batch_id.into(),
            headers: HashMap::new(),
        }
    }
}

/// Options for [`CompareComplyV1::update_batch`].
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct UpdateBatchOptions {
    pub batch_id: String,
    /// One of the [`action`] constants.
    pub action: String,
    pub model: Option<String>,
    pub headers: HashMap<String, String>,
}

impl UpdateBatchOptions {
    #[must_use]
    pub fn new(batch_id: impl Into<String>, action: impl Into<String>) -> Self {
        Self {
            batch_id: batch_id.into(),
            action: action.into(),
            model: None,
            headers: HashMap::new(),
        }
    }

    #[must_use]
    pub fn with_model(mut self, model: impl Into<String>) -> Self {
        self.model = Some(model.into());
        self
    }
}

watson_core::impl_with_header!(
    CreateBatchOptions,
    ListBatchesOptions,
    GetBatchOptions,
    UpdateBatchOptions,
);

impl CompareComplyV1 {
    /// Submit a batch job.
    ///
    /// # Errors
    ///
    /// Returns [`WatsonError::MissingParameter`] if the function, a bucket or
    /// a credentials file is missing, or any error from sending the request.
    pub async fn create_batch(
        &self,
        options: &CreateBatchOptions,
    ) -> Result<DetailedResponse<BatchStatus>, WatsonError> {
        require("function", &options.function)?;
        require("input_bucket_location", &options.input_bucket_location)?;
        require("input_bucket_name", &options.input_bucket_name)?;
        require("output_bucket_location", &options.output_bucket_location)?;
        require("output_bucket_name", &options.output_bucket_name)?;
        if options.input_credentials_file.data.is_empty() {
            return Err(WatsonError::MissingParameter("input_credentials_file"));
        }
        if options.output_credentials_file.data.is_empty() {
            return Err(WatsonError::MissingParameter("output_credentials_file"));
        }
        let spec = self
            .request(Method::POST, "/v1/batches", "CreateBatch")
            .query("function", &options.function)
            .query_opt("model", options.model.as_ref())
            .headers(&options.headers)
            .multipart(vec![
                FormPart::file(
                    "input_credentials_file",
                    &options.input_credentials_file,
                    "application/json",
                ),
                FormPart::text("input_bucket_location", &options.input_bucket_location),
                FormPart::text("input_bucket_name", &options.input_bucket_name),
                FormPart::file(
                    "output_credentials_file",
                    &options.output_credentials_file,
                    "application/json",
                ),
                FormPart::text("output_bucket_location", &options.output_bucket_location),
                FormPart::text("output_bucket_name", &options.output_bucket_name),
            ]);
        self.service.send_json(&spec).await
    }

    /// List submitted batches.
    ///
    /// # Errors
    ///
    /// Returns any error from sending the request.
    pub async fn list_batches(
        &self,
        options: &ListBatchesOptions,
    ) -> Result<DetailedResponse<Batches>, WatsonError> {
        let spec = self
            .request(Method::GET, "/v1/batches", "ListBatches")
            .headers(&options.headers);
        self.service.send_json(&spec).await
    }

    /// Status of one batch.
    ///
    /// # Errors
    ///
    /// Returns [`WatsonError::MissingParameter`] if `batch_id` is empty, or
    /// any error from sending the request.
    pub async fn get_batch(
        &self,
        options: &GetBatchOptions,
    ) -> Result<DetailedResponse<BatchStatus>, WatsonError> {
        let path = build_path("/v1/batches/{batch_id}", &[("batch_id", &options.batch_id)])?;
        let spec = self
            .request(Method::GET, path, "GetBatch")
            .headers(&options.headers);
        self.service.send_json(&spec).await
    }

    /// Rescan or cancel a batch.
    ///
    /// # Errors
    ///
    /// Returns [`WatsonError::MissingParameter`] if `batch_id` or `action` is
    /// empty, or any error from sending the request.
    pub async fn update_batch(
        &self,
        options: &UpdateBatchOptions,
    ) -> Result<DetailedResponse<BatchStatus>, WatsonError> {
        require("action", &options.action)?;
        let path = build_path("/v1/batches/{batch_id}", &[("batch_id", &options.batch_id)])?;
        let spec = self
            .request(Method::PUT, path, "UpdateBatch")
            .query("action", &options.action)
            .query_opt("model", options.model.as_ref())
            .headers(&options.headers);
        self.service.send_json(&spec).await
    }
}
