//! # watson-speech-to-text
//!
//! Client for IBM Watson Speech to Text v1.
//!
//! Covers model discovery, synchronous and asynchronous recognition, and
//! customization: custom language models with their corpora, words and
//! grammars, and custom acoustic models with their audio resources. Audio is
//! passed through untouched with the caller's content type.

pub mod acoustic_models;
pub mod audio;
pub mod corpora;
pub mod grammars;
pub mod jobs;
pub mod language_models;
pub mod models;
pub mod options;
pub mod recognize;
pub mod user_data;
pub mod words;

pub use acoustic_models::{
    AcousticModel, AcousticModels, CreateAcousticModelOptions, TrainAcousticModelOptions,
    UpgradeAcousticModelOptions,
};
pub use audio::{AddAudioOptions, AudioDetails, AudioListing, AudioResource, AudioResources};
pub use corpora::{AddCorpusOptions, Corpora, Corpus};
pub use grammars::{AddGrammarOptions, Grammar, Grammars};
pub use jobs::{
    CreateJobOptions, JobOptions, RecognitionJob, RecognitionJobs, RegisterCallbackOptions,
    RegisterStatus, UnregisterCallbackOptions,
};
pub use language_models::{
    CreateLanguageModelOptions, LanguageModel, LanguageModels, TrainLanguageModelOptions,
    TrainingResponse, TrainingWarning,
};
pub use models::{GetModelOptions, SpeechModel, SpeechModels, SupportedFeatures};
pub use options::{CustomizationOptions, ListCustomizationsOptions, ListOptions, ResourceOptions};
pub use recognize::{
    KeywordResult, RecognitionParams, RecognizeOptions, SpeakerLabelsResult,
    SpeechRecognitionAlternative, SpeechRecognitionResult, SpeechRecognitionResults,
    WordAlternativeResult, WordAlternativeResults, WordConfidence, WordTimestamp,
};
pub use user_data::DeleteUserDataOptions;
pub use words::{AddWordOptions, AddWordsOptions, CustomWord, ListWordsOptions, Word, Words};

use watson_core::{Authenticator, BaseService, Method, RequestSpec, WatsonConfig, WatsonError};

/// Public endpoint used when no URL is configured.
pub const DEFAULT_SERVICE_URL: &str = "https://stream.watsonplatform.net/speech-to-text/api";

const SERVICE_NAME: &str = "speech_to_text";
const SERVICE_VERSION: &str = "V1";

/// Speech to Text v1.
#[derive(Debug, Clone)]
pub struct SpeechToTextV1 {
    service: BaseService,
}

impl SpeechToTextV1 {
    /// Create a client for the public endpoint.
    ///
    /// # Errors
    ///
    /// Returns [`WatsonError::Http`] if the HTTP client cannot be built.
    pub fn new(authenticator: Authenticator) -> Result<Self, WatsonError> {
        Ok(Self::with_service(BaseService::new(DEFAULT_SERVICE_URL, authenticator)?))
    }

    /// Create a client from the `speech_to_text` config section.
    ///
    /// # Errors
    ///
    /// Returns [`WatsonError::Auth`] if the section has no usable credentials.
    pub fn from_config(config: &WatsonConfig) -> Result<Self, WatsonError> {
        Ok(Self::with_service(BaseService::from_config(
            &config.speech_to_text,
            &config.general,
            DEFAULT_SERVICE_URL,
        )?))
    }

    #[must_use]
    pub const fn with_service(service: BaseService) -> Self {
        Self { service }
    }

    #[must_use]
    pub const fn service(&self) -> &BaseService {
        &self.service
    }

    pub const fn service_mut(&mut self) -> &mut BaseService {
        &mut self.service
    }

    fn request(method: Method, path: impl Into<String>, operation_id: &str) -> RequestSpec {
        RequestSpec::new(method, path).analytics(SERVICE_NAME, SERVICE_VERSION, operation_id)
    }
}
