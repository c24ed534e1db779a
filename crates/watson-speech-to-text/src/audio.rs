//! Audio resources of custom acoustic models.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};
use watson_core::{DetailedResponse, Method, WatsonError, build_path};

use crate::SpeechToTextV1;
use crate::options::{CustomizationOptions, ResourceOptions};
use crate::recognize::audio_body;

const AUDIO_PATH: &str = "/v1/acoustic_customizations/{customization_id}/audio/{audio_name}";
const CONTAINED_CONTENT_TYPE: &str = "Contained-Content-Type";

/// Archive formats accepted as `Content-Type` for [`SpeechToTextV1::add_audio`].
pub mod archive_type {
    pub const ZIP: &str = "application/zip";
    pub const GZIP: &str = "application/gzip";
}

/// Format details of an audio resource.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct AudioDetails {
    /// `audio`, `archive` or `undetermined`.
    #[serde(rename = "type")]
    pub kind: Option<String>,
    pub codec: Option<String>,
    pub frequency: Option<i64>,
    /// `zip` or `gzip` for archives.
    pub compression: Option<String>,
}

/// An audio file or archive.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AudioResource {
    /// Seconds of audio.
    pub duration: Option<f64>,
    pub name: String,
    pub details: Option<AudioDetails>,
    pub status: Option<String>,
}

impl AudioResource {
    pub const STATUS_OK: &'static str = "ok";
    pub const STATUS_BEING_PROCESSED: &'static str = "being_processed";
    pub const STATUS_INVALID: &'static str = "invalid";
}

/// All audio resources of a model.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AudioResources {
    pub total_minutes_of_audio: f64,
    #[serde(default, deserialize_with = "watson_core::serde_util::null_as_default")]
    pub audio: Vec<AudioResource>,
}

/// One audio resource. Archives list their files under `audio`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AudioListing {
    pub duration: Option<f64>,
    pub name: Option<String>,
    pub details: Option<AudioDetails>,
    pub status: Option<String>,
    pub container: Option<AudioResource>,
    #[serde(default, deserialize_with = "watson_core::serde_util::null_as_default")]
    pub audio: Vec<AudioResource>,
}

/// Options for [`SpeechToTextV1::add_audio`].
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AddAudioOptions {
    pub customization_id: String,
    pub audio_name: String,
    pub audio_resource: Vec<u8>,
    /// Audio format of a single file, or an [`archive_type`] value.
    pub content_type: Option<String>,
    /// Audio format of the files inside an archive.
    pub contained_content_type: Option<String>,
    pub allow_overwrite: Option<bool>,
    pub headers: HashMap<String, String>,
}

impl AddAudioOptions {
    #[must_use]
    pub fn new(
        customization_id: impl Into<String>,
        audio_name: impl Into<String>,
        audio_resource: impl Into<Vec<u8>>,
    ) -> Self {
        Self {
            customization_id: customization_id.into(),
            audio_name: audio_name.into(),
            audio_resource: audio_resource.into(),
            ..Self::default()
        }
    }

    #[must_use]
    pub fn with_content_type(mut self, content_type: impl Into<String>) -> Self {
        self.content_type = Some(content_type.into());
        self
    }

    #[must_use]
    pub fn with_contained_content_type(mut self, content_type: impl Into<String>) -> Self {
        self.contained_content_type = Some(content_type.into());
        self
    }

    #[must_use]
    pub const fn with_allow_overwrite(mut self, allow: bool) -> Self {
        self.allow_overwrite = Some(allow);
        self
    }
}

watson_core::impl_with_header!(AddAudioOptions);

pub type ListAudioOptions = CustomizationOptions;
pub type GetAudioOptions = ResourceOptions;
pub type DeleteAudioOptions = ResourceOptions;

impl SpeechToTextV1 {
    /// List the audio resources of a custom acoustic model.
    ///
    /// # Errors
    ///
    /// Returns [`WatsonError::MissingParameter`] if `customization_id` is
    /// empty, or any error from sending the request.
    pub async fn list_audio(
        &self,
        options: &ListAudioOptions,
    ) -> Result<DetailedResponse<AudioResources>, WatsonError> {
        let path = build_path(
            "/v1/acoustic_customizations/{customization_id}/audio",
            &[("customization_id", &options.customization_id)],
        )?;
        let spec = Self::request(Method::GET, path, "ListAudio").headers(&options.headers);
        self.service.send_json(&spec).await
    }

    /// Upload an audio file or archive.
    ///
    /// # Errors
    ///
    /// Returns [`WatsonError::MissingParameter`] if an identifier or the audio
    /// is empty, or any error from sending the request.
    pub async fn add_audio(
        &self,
        options: &AddAudioOptions,
    ) -> Result<DetailedResponse<()>, WatsonError> {
        let path = build_path(
            AUDIO_PATH,
            &[
                ("customization_id", &options.customization_id),
                ("audio_name", &options.audio_name),
            ],
        )?;
        let spec = Self::request(Method::POST, path, "AddAudio")
            .query_opt("allow_overwrite", options.allow_overwrite.as_ref())
            .header_opt(CONTAINED_CONTENT_TYPE, options.contained_content_type.as_ref())
            .headers(&options.headers);
        let spec = audio_body(spec, &options.audio_resource, options.content_type.as_ref())?;
        self.service.send_empty(&spec).await
    }

    /// Describe one audio resource.
    ///
    /// # Errors
    ///
    /// Returns [`WatsonError::MissingParameter`] if an identifier is empty, or
    /// any error from sending the request.
    pub async fn get_audio(
        &self,
        options: &GetAudioOptions,
    ) -> Result<DetailedResponse<AudioListing>, WatsonError> {
        let path = build_path(
            AUDIO_PATH,
            &[
                ("customization_id", &options.customization_id),
                ("audio_name", &options.name),
            ],
        )?;
        let spec = Self::request(Method::GET, path, "GetAudio").headers(&options.headers);
        self.service.send_json(&spec).await
    }

    /// Delete one audio resource.
    ///
    /// # Errors
    ///
    /// Returns [`WatsonError::MissingParameter`] if an identifier is empty, or
    /// any error from sending the request.
    pub async fn delete_audio(
        &self,
        options: &DeleteAudioOptions,
    ) -> Result<DetailedResponse<()>, WatsonError> {
        let path = build_path(
            AUDIO_PATH,
            &[
                ("customization_id", &options.customization_id),
                ("audio_name", &options.name),
            ],
        )?;
        let spec = Self::request(Method::DELETE, path, "DeleteAudio").headers(&options.headers);
        self.service.send_empty(&spec).await
    }
}
