//! Synchronous recognition and the result types shared with jobs.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};
use watson_core::{DetailedResponse, Method, RequestSpec, WatsonError};

use crate::SpeechToTextV1;

/// Audio formats accepted as `Content-Type`.
pub mod content_type {
    pub const APPLICATION_OCTET_STREAM: &str = "application/octet-stream";
    pub const AUDIO_BASIC: &str = "audio/basic";
    pub const AUDIO_FLAC: &str = "audio/flac";
    pub const AUDIO_G729: &str = "audio/g729";
    pub const AUDIO_L16: &str = "audio/l16";
    pub const AUDIO_MP3: &str = "audio/mp3";
    pub const AUDIO_MPEG: &str = "audio/mpeg";
    pub const AUDIO_MULAW: &str = "audio/mulaw";
    pub const AUDIO_OGG: &str = "audio/ogg";
    pub const AUDIO_OGG_OPUS: &str = "audio/ogg;codecs=opus";
    pub const AUDIO_OGG_VORBIS: &str = "audio/ogg;codecs=vorbis";
    pub const AUDIO_WAV: &str = "audio/wav";
    pub const AUDIO_WEBM: &str = "audio/webm";
    pub const AUDIO_WEBM_OPUS: &str = "audio/webm;codecs=opus";
    pub const AUDIO_WEBM_VORBIS: &str = "audio/webm;codecs=vorbis";
}

/// Recognition query parameters shared by [`SpeechToTextV1::recognize`] and
/// [`SpeechToTextV1::create_job`].
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RecognitionParams {
    pub model: Option<String>,
    pub language_customization_id: Option<String>,
    pub acoustic_customization_id: Option<String>,
    pub base_model_version: Option<String>,
    pub customization_weight: Option<f64>,
    pub inactivity_timeout: Option<i64>,
    pub keywords: Vec<String>,
    pub keywords_threshold: Option<f32>,
    pub max_alternatives: Option<i64>,
    pub word_alternatives_threshold: Option<f32>,
    pub word_confidence: Option<bool>,
    pub timestamps: Option<bool>,
    pub profanity_filter: Option<bool>,
    pub smart_formatting: Option<bool>,
    pub speaker_labels: Option<bool>,
    /// Superseded by `language_customization_id`.
    pub customization_id: Option<String>,
    pub grammar_name: Option<String>,
    pub redaction: Option<bool>,
}

impl RecognitionParams {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn with_model(mut self, model: impl Into<String>) -> Self {
        self.model = Some(model.into());
        self
    }

    #[must_use]
    pub fn with_language_customization_id(mut self, id: impl Into<String>) -> Self {
        self.language_customization_id = Some(id.into());
        self
    }

    #[must_use]
    pub fn with_acoustic_customization_id(mut self, id: impl Into<String>) -> Self {
        self.acoustic_customization_id = Some(id.into());
        self
    }

    #[must_use]
    pub fn with_base_model_version(mut self, version: impl Into<String>) -> Self {
        self.base_model_version = Some(version.into());
        self
    }

    #[must_use]
    pub const fn with_customization_weight(mut self, weight: f64) -> Self {
        self.customization_weight = Some(weight);
        self
    }

    #[must_use]
    pub const fn with_inactivity_timeout(mut self, seconds: i64) -> Self {
        self.inactivity_timeout = Some(seconds);
        self
    }

    /// Spot `keywords` with at least `threshold` confidence.
    #[must_use]
    pub fn with_keywords(mut self, keywords: Vec<String>, threshold: f32) -> Self {
        self.keywords = keywords;
        self.keywords_threshold = Some(threshold);
        self
    }

    #[must_use]
    pub const fn with_max_alternatives(mut self, max: i64) -> Self {
        self.max_alternatives = Some(max);
        self
    }

    #[must_use]
    pub const fn with_word_alternatives_threshold(mut self, threshold: f32) -> Self {
        self.word_alternatives_threshold = Some(threshold);
        self
    }

    #[must_use]
    pub const fn with_word_confidence(mut self, enabled: bool) -> Self {
        self.word_confidence = Some(enabled);
        self
    }

    #[must_use]
    pub const fn with_timestamps(mut self, enabled: bool) -> Self {
        self.timestamps = Some(enabled);
        self
    }

    #[must_use]
    pub const fn with_profanity_filter(mut self, enabled: bool) -> Self {
        self.profanity_filter = Some(enabled);
        self
    }

    #[must_use]
    pub const fn with_smart_formatting(mut self, enabled: bool) -> Self {
        self.smart_formatting = Some(enabled);
        self
    }

    #[must_use]
    pub const fn with_speaker_labels(mut self, enabled: bool) -> Self {
        self.speaker_labels = Some(enabled);
        self
    }

    #[must_use]
    pub fn with_grammar_name(mut self, grammar_name: impl Into<String>) -> Self {
        self.grammar_name = Some(grammar_name.into());
        self
    }

    #[must_use]
    pub const fn with_redaction(mut self, enabled: bool) -> Self {
        self.redaction = Some(enabled);
        self
    }

    pub(crate) fn apply(&self, spec: RequestSpec) -> RequestSpec {
        spec.query_opt("model", self.model.as_ref())
            .query_opt("language_customization_id", self.language_customization_id.as_ref())
            .query_opt("acoustic_customization_id", self.acoustic_customization_id.as_ref())
            .query_opt("base_model_version", self.base_model_version.as_ref())
            .query_opt("customization_weight", self.customization_weight.as_ref())
            .query_opt("inactivity_timeout", self.inactivity_timeout.as_ref())
            .query_list("keywords", &self.keywords)
            .query_opt("keywords_threshold", self.keywords_threshold.as_ref())
            .query_opt("max_alternatives", self.max_alternatives.as_ref())
            .query_opt("word_alternatives_threshold", self.word_alternatives_threshold.as_ref())
            .query_opt("word_confidence", self.word_confidence.as_ref())
            .query_opt("timestamps", self.timestamps.as_ref())
            .query_opt("profanity_filter", self.profanity_filter.as_ref())
            .query_opt("smart_formatting", self.smart_formatting.as_ref())
            .query_opt("speaker_labels", self.speaker_labels.as_ref())
            .query_opt("customization_id", self.customization_id.as_ref())
            .query_opt("grammar_name", self.grammar_name.as_ref())
            .query_opt("redaction", self.redaction.as_ref())
    }
}

/// Options for [`SpeechToTextV1::recognize`].
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RecognizeOptions {
    pub audio: Vec<u8>,
    /// One of the [`content_type`] values; the service detects the format
    /// when unset.
    pub content_type: Option<String>,
    pub params: RecognitionParams,
    pub headers: HashMap<String, String>,
}

impl RecognizeOptions {
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
}

watson_core::impl_with_header!(RecognizeOptions);

/// Attach `audio` as the raw request body.
pub(crate) fn audio_body(
    spec: RequestSpec,
    audio: &[u8],
    mime: Option<&String>,
) -> Result<RequestSpec, WatsonError> {
    if audio.is_empty() {
        return Err(WatsonError::MissingParameter("audio"));
    }
    let mime = mime.map_or(content_type::APPLICATION_OCTET_STREAM, String::as_str);
    Ok(spec.bytes(mime, audio.to_vec()))
}

/// Complete results of a recognition request.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SpeechRecognitionResults {
    #[serde(default, deserialize_with = "watson_core::serde_util::null_as_default")]
    pub results: Vec<SpeechRecognitionResult>,
    pub result_index: Option<i64>,
    #[serde(default, deserialize_with = "watson_core::serde_util::null_as_default")]
    pub speaker_labels: Vec<SpeakerLabelsResult>,
    #[serde(default, deserialize_with = "watson_core::serde_util::null_as_default")]
    pub warnings: Vec<String>,
}

impl SpeechRecognitionResults {
    /// Best transcript of every final result, joined in order.
    #[must_use]
    pub fn transcript(&self) -> String {
        self.results
            .iter()
            .filter(|result| result.final_result)
            .filter_map(|result| result.alternatives.first())
            .map(|alt| alt.transcript.trim())
            .collect::<Vec<_>>()
            .join(" ")
    }
}

/// Results for one utterance.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SpeechRecognitionResult {
    #[serde(rename = "final")]
    pub final_result: bool,
    #[serde(default, deserialize_with = "watson_core::serde_util::null_as_default")]
    pub alternatives: Vec<SpeechRecognitionAlternative>,
    /// Spotted keywords keyed by the requested keyword.
    #[serde(default, deserialize_with = "watson_core::serde_util::null_as_default")]
    pub keywords_result: HashMap<String, Vec<KeywordResult>>,
    #[serde(default, deserialize_with = "watson_core::serde_util::null_as_default")]
    pub word_alternatives: Vec<WordAlternativeResults>,
}

/// A transcription hypothesis.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SpeechRecognitionAlternative {
    pub transcript: String,
    pub confidence: Option<f64>,
    #[serde(default, deserialize_with = "watson_core::serde_util::null_as_default")]
    pub timestamps: Vec<WordTimestamp>,
    #[serde(default, deserialize_with = "watson_core::serde_util::null_as_default")]
    pub word_confidence: Vec<WordConfidence>,
}

/// `[word, start, end]` with times in seconds.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct WordTimestamp(pub String, pub f64, pub f64);

/// `[word, confidence]`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct WordConfidence(pub String, pub f64);

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct KeywordResult {
    pub normalized_text: String,
    pub start_time: f64,
    pub end_time: f64,
    pub confidence: f64,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct WordAlternativeResults {
    pub start_time: f64,
    pub end_time: f64,
    #[serde(default, deserialize_with = "watson_core::serde_util::null_as_default")]
    pub alternatives: Vec<WordAlternativeResult>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct WordAlternativeResult {
    pub confidence: f64,
    pub word: String,
}

/// Speaker of a span of audio.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SpeakerLabelsResult {
    pub from: f64,
    pub to: f64,
    pub speaker: i64,
    pub confidence: f64,
    #[serde(rename = "final")]
    pub final_result: bool,
}

impl SpeechToTextV1 {
    /// Transcribe audio in a single request.
    ///
    /// # Errors
    ///
    /// Returns [`WatsonError::MissingParameter`] if the audio is empty, or any
    /// error from sending the request.
    pub async fn recognize(
        &self,
        options: &RecognizeOptions,
    ) -> Result<DetailedResponse<SpeechRecognitionResults>, WatsonError> {
        let spec = Self::request(Method::POST, "/v1/recognize", "Recognize");
        let spec = options.params.apply(spec).headers(&options.headers);
        let spec = audio_body(spec, &options.audio, options.content_type.as_ref())?;
        self.service.send_json(&spec).await
    }
}
