//! Asynchronous recognition jobs and callback URLs.

use std::collections::HashMap;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use watson_core::{DetailedResponse, Method, WatsonError, build_path, require};

use crate::SpeechToTextV1;
use crate::options::ListOptions;
use crate::recognize::{RecognitionParams, SpeechRecognitionResults, audio_body};

/// Events a job can report to its callback URL.
pub mod event {
    pub const STARTED: &str = "recognitions.started";
    pub const COMPLETED: &str = "recognitions.completed";
    pub const COMPLETED_WITH_RESULTS: &str = "recognitions.completed_with_results";
    pub const FAILED: &str = "recognitions.failed";
}

/// Outcome of registering a callback URL.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct RegisterStatus {
    pub status: Option<String>,
    pub url: Option<String>,
}

impl RegisterStatus {
    pub const STATUS_CREATED: &'static str = "created";
    pub const STATUS_ALREADY_CREATED: &'static str = "already created";
}

/// An asynchronous recognition job.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RecognitionJob {
    pub id: Option<String>,
    pub status: Option<String>,
    #[serde(with = "watson_core::timestamp::option")]
    pub created: Option<DateTime<Utc>>,
    #[serde(with = "watson_core::timestamp::option")]
    pub updated: Option<DateTime<Utc>>,
    pub url: Option<String>,
    pub user_token: Option<String>,
    /// Present once the job is `completed` and no callback consumed them.
    #[serde(default, deserialize_with = "watson_core::serde_util::null_as_default")]
    pub results: Vec<SpeechRecognitionResults>,
    #[serde(default, deserialize_with = "watson_core::serde_util::null_as_default")]
    pub warnings: Vec<String>,
}

impl RecognitionJob {
    pub const STATUS_WAITING: &'static str = "waiting";
    pub const STATUS_PROCESSING: &'static str = "processing";
    pub const STATUS_COMPLETED: &'static str = "completed";
    pub const STATUS_FAILED: &'static str = "failed";

    /// Whether the job has finished, successfully or not.
    #[must_use]
    pub fn is_finished(&self) -> bool {
        matches!(
            self.status.as_deref(),
            Some(Self::STATUS_COMPLETED | Self::STATUS_FAILED)
        )
    }
}

/// The caller's most recent jobs.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RecognitionJobs {
    #[serde(default, deserialize_with = "watson_core::serde_util::null_as_default")]
    pub recognitions: Vec<RecognitionJob>,
}

/// Options for [`SpeechToTextV1::register_callback`].
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RegisterCallbackOptions {
    pub callback_url: String,
    /// Secret used to sign callback requests with HMAC-SHA1.
    pub user_secret: Option<String>,
    pub headers: HashMap<String, String>,
}

impl RegisterCallbackOptions {
    #[must_use]
    pub fn new(callback_url: impl Into<String>) -> Self {
        Self {
            callback_url: callback_url.into(),
            ..Self::default()
        }
    }

    #[must_use]
    pub fn with_user_secret(mut self, secret: impl Into<String>) -> Self {
        self.user_secret = Some(secret.into());
        self
    }
}

/// Options for [`SpeechToTextV1::unregister_callback`].
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct UnregisterCallbackOptions {
    pub callback_url: String,
    pub headers: HashMap<String, String>,
}

impl UnregisterCallbackOptions {
    #[must_use]
    pub fn new(callback_url: impl Into<String>) -> Self {
        Self {
            callback_url: callback_url.into(),
            headers: HashMap::new(),
        }
    }
}

/// Options for [`SpeechToTextV1::create_job`].
#[derive(Debug, Clone, Default, PartialEq)]
pub struct CreateJobOptions {
    pub audio: Vec<u8>,
    pub content_type: Option<String>,
    pub params: RecognitionParams,
    /// A URL registered with [`SpeechToTextV1::register_callback`]; results
    /// must be polled when unset.
    pub callback_url: Option<String>,
    /// Subset of the [`event`] values.
    pub events: Vec<String>,
    pub user_token: Option<String>,
    /// Minutes to keep results, 0 to 10080.
    pub results_ttl: Option<i64>,
    pub headers: HashMap<String, String>,
}

impl CreateJobOptions {
    #[must_use]
    pub fn new(audio: impl Into<Vec<u8>>) -> Self {
        Self {
            audio: audio.into(),
            ..Self::default()
        }
    }

    #[must_use]
    pub fn with_content_type(mut self, content_type: impl Into<String>) -> Self {
        self.content_type = Some(content_type.into());
        self
    }

    #[must_use]
    pub fn with_params(mut self, params: RecognitionParams) -> Self {
        self.params = params;
        self
    }

    #[must_use]
    pub fn with_callback(mut self, callback_url: impl Into<String>, events: Vec<String>) -> Self {
        self.callback_url = Some(callback_url.into());
        self.events = events;
        self
    }

    #[must_use]
    pub fn with_user_token(mut self, token: impl Into<String>) -> Self {
        self.user_token = Some(token.into());
        self
    }

    #[must_use]
    pub const fn with_results_ttl(mut self, minutes: i64) -> Self {
        self.results_ttl = Some(minutes);
        self
    }
}

/// Options for [`SpeechToTextV1::check_job`] and [`SpeechToTextV1::delete_job`].
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct JobOptions {
    pub id: String,
    pub headers: HashMap<String, String>,
}

impl JobOptions {
    #[must_use]
    pub fn new(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            headers: HashMap::new(),
        }
    }
}

pub type CheckJobOptions = JobOptions;
pub type DeleteJobOptions = JobOptions;
pub type CheckJobsOptions = ListOptions;

watson_core::impl_with_header!(
    RegisterCallbackOptions,
    UnregisterCallbackOptions,
    CreateJobOptions,
    JobOptions,
);

impl SpeechToTextV1 {
    /// Allowlist a callback URL for job notifications.
    ///
    /// # Errors
    ///
    /// Returns [`WatsonError::MissingParameter`] if `callback_url` is empty,
    /// or any error from sending the request.
    pub async fn register_callback(
        &self,
        options: &RegisterCallbackOptions,
    ) -> Result<DetailedResponse<RegisterStatus>, WatsonError> {
        require("callback_url", &options.callback_url)?;
        let spec = Self::request(Method::POST, "/v1/register_callback", "RegisterCallback")
            .query("callback_url", &options.callback_url)
            .query_opt("user_secret", options.user_secret.as_ref())
            .headers(&options.headers);
        self.service.send_json(&spec).await
    }

    /// Remove a callback URL from the allowlist.
    ///
    /// # Errors
    ///
    /// Returns [`WatsonError::MissingParameter`] if `callback_url` is empty,
    /// or any error from sending the request.
    pub async fn unregister_callback(
        &self,
        options: &UnregisterCallbackOptions,
    ) -> Result<DetailedResponse<()>, WatsonError> {
        require("callback_url", &options.callback_url)?;
        let spec = Self::request(Method::POST, "/v1/unregister_callback", "UnregisterCallback")
            .query("callback_url", &options.callback_url)
            .headers(&options.headers);
        self.service.send_empty(&spec).await
    }

    /// Submit audio for asynchronous recognition.
    ///
    /// # Errors
    ///
    /// Returns [`WatsonError::MissingParameter`] if the audio is empty, or any
    /// error from sending the request.
    pub async fn create_job(
        &self,
        options: &CreateJobOptions,
    ) -> Result<DetailedResponse<RecognitionJob>, WatsonError> {
        let spec = Self::request(Method::POST, "/v1/recognitions", "CreateJob")
            .query_opt("callback_url", options.callback_url.as_ref())
            .query_list("events", &options.events)
            .query_opt("user_token", options.user_token.as_ref())
            .query_opt("results_ttl", options.results_ttl.as_ref());
        let spec = options.params.apply(spec).headers(&options.headers);
        let spec = audio_body(spec, &options.audio, options.content_type.as_ref())?;
        self.service.send_json(&spec).await
    }

    /// Status of the caller's latest jobs, without results.
    ///
    /// # Errors
    ///
    /// Returns any error from sending the request.
    pub async fn check_jobs(
        &self,
        options: &CheckJobsOptions,
    ) -> Result<DetailedResponse<RecognitionJobs>, WatsonError> {
        let spec = Self::request(Method::GET, "/v1/recognitions", "CheckJobs").headers(&options.headers);
        self.service.send_json(&spec).await
    }

    /// Status of one job, with results once completed.
    ///
    /// # Errors
    ///
    /// Returns [`WatsonError::MissingParameter`] if `id` is empty, or any
    /// error from sending the request.
    pub async fn check_job(
        &self,
        options: &CheckJobOptions,
    ) -> Result<DetailedResponse<RecognitionJob>, WatsonError> {
        let path = build_path("/v1/recognitions/{id}", &[("id", &options.id)])?;
        let spec = Self::request(Method::GET, path, "CheckJob").headers(&options.headers);
        self.service.send_json(&spec).await
    }

    /// Delete a job and its results.
    ///
    /// # Errors
    ///
    /// Returns [`WatsonError::MissingParameter`] if `id` is empty, or any
    /// error from sending the request.
    pub async fn delete_job(
        &self,
        options: &DeleteJobOptions,
    ) -> Result<DetailedResponse<()>, WatsonError> {
        let path = build_path("/v1/recognitions/{id}", &[("id", &options.id)])?;
        let spec = Self::request(Method::DELETE, path, "DeleteJob").headers(&options.headers);
        self.service.send_empty(&spec).await
    }
}
