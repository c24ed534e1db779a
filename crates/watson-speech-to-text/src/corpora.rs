//! Text corpora of custom language models.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};
use watson_core::{DetailedResponse, FileData, FormPart, Method, WatsonError, build_path};

use crate::SpeechToTextV1;
use crate::options::{CustomizationOptions, ResourceOptions};

const CORPUS_PATH: &str = "/v1/customizations/{customization_id}/corpora/{corpus_name}";

/// A corpus and the words it contributed.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Corpus {
    pub name: String,
    pub total_words: i64,
    pub out_of_vocabulary_words: i64,
    pub status: Option<String>,
    pub error: Option<String>,
}

impl Corpus {
    pub const STATUS_ANALYZED: &'static str = "analyzed";
    pub const STATUS_BEING_PROCESSED: &'static str = "being_processed";
    pub const STATUS_UNDETERMINED: &'static str = "undetermined";
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Corpora {
    #[serde(default, deserialize_with = "watson_core::serde_util::null_as_default")]
    pub corpora: Vec<Corpus>,
}

/// Options for [`SpeechToTextV1::add_corpus`].
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AddCorpusOptions {
    pub customization_id: String,
    pub corpus_name: String,
    /// Plain text, one sentence per line.
    pub corpus_file: Vec<u8>,
    pub allow_overwrite: Option<bool>,
    pub headers: HashMap<String, String>,
}

impl AddCorpusOptions {
    #[must_use]
    pub fn new(
        customization_id: impl Into<String>,
        corpus_name: impl Into<String>,
        corpus_file: impl Into<Vec<u8>>,
    ) -> Self {
        Self {
            customization_id: customization_id.into(),
            corpus_name: corpus_name.into(),
            corpus_file: corpus_file.into(),
            ..Self::default()
        }
    }

    #[must_use]
    pub const fn with_allow_overwrite(mut self, allow: bool) -> Self {
        self.allow_overwrite = Some(allow);
        self
    }
}

watson_core::impl_with_header!(AddCorpusOptions);

pub type ListCorporaOptions = CustomizationOptions;
pub type GetCorpusOptions = ResourceOptions;
pub type DeleteCorpusOptions = ResourceOptions;

impl SpeechToTextV1 {
    /// List the corpora of a custom language model.
    ///
    /// # Errors
    ///
    /// Returns [`WatsonError::MissingParameter`] if `customization_id` is
    /// empty, or any error from sending the request.
    pub async fn list_corpora(
        &self,
        options: &ListCorporaOptions,
    ) -> Result<DetailedResponse<Corpora>, WatsonError> {
        let path = build_path(
            "/v1/customizations/{customization_id}/corpora",
            &[("customization_id", &options.customization_id)],
        )?;
        let spec = Self::request(Method::GET, path, "ListCorpora").headers(&options.headers);
        self.service.send_json(&spec).await
    }

    /// Upload a corpus. The service analyzes it in the background.
    ///
    /// # Errors
    ///
    /// Returns [`WatsonError::MissingParameter`] if an identifier or the file
    /// is empty, or any error from sending the request.
    pub async fn add_corpus(
        &self,
        options: &AddCorpusOptions,
    ) -> Result<DetailedResponse<()>, WatsonError> {
        let path = build_path(
            CORPUS_PATH,
            &[
                ("customization_id", &options.customization_id),
                ("corpus_name", &options.corpus_name),
            ],
        )?;
        if options.corpus_file.is_empty() {
            return Err(WatsonError::MissingParameter("corpus_file"));
        }
        let file = FileData::new(options.corpus_file.clone());
        let spec = Self::request(Method::POST, path, "AddCorpus")
            .query_opt("allow_overwrite", options.allow_overwrite.as_ref())
            .headers(&options.headers)
            .multipart(vec![FormPart::file("corpus_file", &file, "text/plain")]);
        self.service.send_empty(&spec).await
    }

    /// Describe one corpus.
    ///
    /// # Errors
    ///
    /// Returns [`WatsonError::MissingParameter`] if an identifier is empty, or
    /// any error from sending the request.
    pub async fn get_corpus(
        &self,
        options: &GetCorpusOptions,
    ) -> Result<DetailedResponse<Corpus>, WatsonError> {
        let path = build_path(
            CORPUS_PATH,
            &[
                ("customization_id", &options.customization_id),
                ("corpus_name", &options.name),
            ],
        )?;
        let spec = Self::request(Method::GET, path, "GetCorpus").headers(&options.headers);
        self.service.send_json(&spec).await
    }

    /// Delete a corpus. Words it added stay until the model is retrained.
    ///
    /// # Errors
    ///
    /// Returns [`WatsonError::MissingParameter`] if an identifier is empty, or
    /// any error from sending the request.
    pub async fn delete_corpus(
        &self,
        options: &DeleteCorpusOptions,
    ) -> Result<DetailedResponse<()>, WatsonError> {
        let path = build_path(
            CORPUS_PATH,
            &[
                ("customization_id", &options.customization_id),
                ("corpus_name", &options.name),
            ],
        )?;
        let spec = Self::request(Method::DELETE, path, "DeleteCorpus").headers(&options.headers);
        self.service.send_empty(&spec).await
    }
}
