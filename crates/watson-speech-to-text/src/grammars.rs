//! Grammars of custom language models.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};
use watson_core::{DetailedResponse, Method, WatsonError, build_path, require};

use crate::SpeechToTextV1;
use crate::options::{CustomizationOptions, ResourceOptions};

const GRAMMAR_PATH: &str = "/v1/customizations/{customization_id}/grammars/{grammar_name}";

/// Grammar formats accepted as `Content-Type`.
pub mod content_type {
    pub const APPLICATION_SRGS: &str = "application/srgs";
    pub const APPLICATION_SRGS_XML: &str = "application/srgs+xml";
}

/// A grammar and the words it contributed.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Grammar {
    pub name: String,
    pub out_of_vocabulary_words: i64,
    pub status: Option<String>,
    pub error: Option<String>,
}

impl Grammar {
    pub const STATUS_ANALYZED: &'static str = "analyzed";
    pub const STATUS_BEING_PROCESSED: &'static str = "being_processed";
    pub const STATUS_UNDETERMINED: &'static str = "undetermined";
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Grammars {
    #[serde(default, deserialize_with = "watson_core::serde_util::null_as_default")]
    pub grammars: Vec<Grammar>,
}

/// Options for [`SpeechToTextV1::add_grammar`].
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AddGrammarOptions {
    pub customization_id: String,
    pub grammar_name: String,
    /// The grammar source, sent as is.
    pub grammar_file: Vec<u8>,
    /// One of the [`content_type`] values.
    pub content_type: String,
    pub allow_overwrite: Option<bool>,
    pub headers: HashMap<String, String>,
}

impl AddGrammarOptions {
    #[must_use]
    pub fn new(
        customization_id: impl Into<String>,
        grammar_name: impl Into<String>,
        grammar_file: impl Into<Vec<u8>>,
        content_type: impl Into<String>,
    ) -> Self {
        Self {
            customization_id: customization_id.into(),
            grammar_name: grammar_name.into(),
            grammar_file: grammar_file.into(),
            content_type: content_type.into(),
            ..Self::default()
        }
    }

    #[must_use]
    pub const fn with_allow_overwrite(mut self, allow: bool) -> Self {
        self.allow_overwrite = Some(allow);
        self
    }
}

watson_core::impl_with_header!(AddGrammarOptions);

pub type ListGrammarsOptions = CustomizationOptions;
pub type GetGrammarOptions = ResourceOptions;
pub type DeleteGrammarOptions = ResourceOptions;

impl SpeechToTextV1 {
    /// List the grammars of a custom language model.
    ///
    /// # Errors
    ///
    /// Returns [`WatsonError::MissingParameter`] if `customization_id` is
    /// empty, or any error from sending the request.
    pub async fn list_grammars(
        &self,
        options: &ListGrammarsOptions,
    ) -> Result<DetailedResponse<Grammars>, WatsonError> {
        let path = build_path(
            "/v1/customizations/{customization_id}/grammars",
            &[("customization_id", &options.customization_id)],
        )?;
        let spec = Self::request(Method::GET, path, "ListGrammars").headers(&options.headers);
        self.service.send_json(&spec).await
    }

    /// Upload a grammar in ABNF or XML form.
    ///
    /// # Errors
    ///
    /// Returns [`WatsonError::MissingParameter`] if an identifier, the grammar
    /// or its content type is empty, or any error from sending the request.
    pub async fn add_grammar(
        &self,
        options: &AddGrammarOptions,
    ) -> Result<DetailedResponse<()>, WatsonError> {
        let path = build_path(
            GRAMMAR_PATH,
            &[
                ("customization_id", &options.customization_id),
                ("grammar_name", &options.grammar_name),
            ],
        )?;
        require("content_type", &options.content_type)?;
        if options.grammar_file.is_empty() {
            return Err(WatsonError::MissingParameter("grammar_file"));
        }
        let spec = Self::request(Method::POST, path, "AddGrammar")
            .query_opt("allow_overwrite", options.allow_overwrite.as_ref())
            .headers(&options.headers)
            .bytes(&options.content_type, options.grammar_file.clone());
        self.service.send_empty(&spec).await
    }

    /// Describe one grammar.
    ///
    /// # Errors
    ///
    /// Returns [`WatsonError::MissingParameter`] if an identifier is empty, or
    /// any error from sending the request.
    pub async fn get_grammar(
        &self,
        options: &GetGrammarOptions,
    ) -> Result<DetailedResponse<Grammar>, WatsonError> {
        let path = build_path(
            GRAMMAR_PATH,
            &[
                ("customization_id", &options.customization_id),
                ("grammar_name", &options.name),
            ],
        )?;
        let spec = Self::request(Method::GET, path, "GetGrammar").headers(&options.headers);
        self.service.send_json(&spec).await
    }

    /// Delete one grammar.
    ///
    /// # Errors
    ///
    /// Returns [`WatsonError::MissingParameter`] if an identifier is empty, or
    /// any error from sending the request.
    pub async fn delete_grammar(
        &self,
        options: &DeleteGrammarOptions,
    ) -> Result<DetailedResponse<()>, WatsonError> {
        let path = build_path(
            GRAMMAR_PATH,
            &[
                ("customization_id", &options.customization_id),
                ("grammar_name", &options.name),
            ],
        )?;
        let spec = Self::request(Method::DELETE, path, "DeleteGrammar").headers(&options.headers);
        self.service.send_empty(&spec).await
    }
}
