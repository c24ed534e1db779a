//! Custom words of custom language models.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};
use watson_core::{DetailedResponse, Method, WatsonError, build_path};

use crate::SpeechToTextV1;
use crate::options::ResourceOptions;

const WORDS_PATH: &str = "/v1/customizations/{customization_id}/words";
const WORD_PATH: &str = "/v1/customizations/{customization_id}/words/{word_name}";

/// Values of the `word_type` filter.
pub mod word_type {
    pub const ALL: &str = "all";
    pub const USER: &str = "user";
    pub const CORPORA: &str = "corpora";
    pub const GRAMMARS: &str = "grammars";
}

/// Values of the `sort` parameter. Prefix with `-` for descending order.
pub mod sort {
    pub const ALPHABETICAL: &str = "alphabetical";
    pub const COUNT: &str = "count";
}

/// A word in a custom model's vocabulary.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Word {
    pub word: String,
    #[serde(default, deserialize_with = "watson_core::serde_util::null_as_default")]
    pub sounds_like: Vec<String>,
    pub display_as: Option<String>,
    /// Occurrences across corpora and grammars.
    pub count: i64,
    /// `user` or the names of the corpora and grammars the word came from.
    #[serde(default, deserialize_with = "watson_core::serde_util::null_as_default")]
    pub source: Vec<String>,
    /// Problems with `sounds_like` pronunciations, keyed by element.
    #[serde(default, deserialize_with = "watson_core::serde_util::null_as_default")]
    pub error: Vec<HashMap<String, String>>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Words {
    #[serde(default, deserialize_with = "watson_core::serde_util::null_as_default")]
    pub words: Vec<Word>,
}

/// A word to add or update.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CustomWord {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub word: Option<String>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    #[serde(default, deserialize_with = "watson_core::serde_util::null_as_default")]
    pub sounds_like: Vec<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub display_as: Option<String>,
}

impl CustomWord {
    #[must_use]
    pub fn new(word: impl Into<String>) -> Self {
        Self {
            word: Some(word.into()),
            ..Self::default()
        }
    }

    #[must_use]
    pub fn with_sounds_like(mut self, sounds_like: Vec<String>) -> Self {
        self.sounds_like = sounds_like;
        self
    }

    #[must_use]
    pub fn with_display_as(mut self, display_as: impl Into<String>) -> Self {
        self.display_as = Some(display_as.into());
        self
    }
}

/// Options for [`SpeechToTextV1::list_words`].
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ListWordsOptions {
    pub customization_id: String,
    /// One of the [`word_type`] values.
    pub word_type: Option<String>,
    /// One of the [`sort`] values, optionally `-` prefixed.
    pub sort: Option<String>,
    pub headers: HashMap<String, String>,
}

impl ListWordsOptions {
    #[must_use]
    pub fn new(customization_id: impl Into<String>) -> Self {
        Self {
            customization_id: customization_id.into(),
            ..Self::default()
        }
    }

    #[must_use]
    pub fn with_word_type(mut self, word_type: impl Into<String>) -> Self {
        self.word_type = Some(word_type.into());
        self
    }

    #[must_use]
    pub fn with_sort(mut self, sort: impl Into<String>) -> Self {
        self.sort = Some(sort.into());
        self
    }
}

/// Options for [`SpeechToTextV1::add_words`].
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AddWordsOptions {
    pub customization_id: String,
    pub words: Vec<CustomWord>,
    pub headers: HashMap<String, String>,
}

impl AddWordsOptions {
    #[must_use]
    pub fn new(customization_id: impl Into<String>, words: Vec<CustomWord>) -> Self {
        Self {
            customization_id: customization_id.into(),
            words,
            headers: HashMap::new(),
        }
    }
}

/// Options for [`SpeechToTextV1::add_word`].
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AddWordOptions {
    pub customization_id: String,
    pub word_name: String,
    /// Body of the request. `word` may be left unset to use `word_name`.
    pub word: CustomWord,
    pub headers: HashMap<String, String>,
}

impl AddWordOptions {
    #[must_use]
    pub fn new(customization_id: impl Into<String>, word_name: impl Into<String>) -> Self {
        Self {
            customization_id: customization_id.into(),
            word_name: word_name.into(),
            ..Self::default()
        }
    }

    #[must_use]
    pub fn with_sounds_like(mut self, sounds_like: Vec<String>) -> Self {
        self.word.sounds_like = sounds_like;
        self
    }

    #[must_use]
    pub fn with_display_as(mut self, display_as: impl Into<String>) -> Self {
        self.word.display_as = Some(display_as.into());
        self
    }
}

watson_core::impl_with_header!(ListWordsOptions, AddWordsOptions, AddWordOptions);

pub type GetWordOptions = ResourceOptions;
pub type DeleteWordOptions = ResourceOptions;

#[derive(Serialize)]
struct AddWordsBody<'a> {
    words: &'a [CustomWord],
}

impl SpeechToTextV1 {
    /// List the words of a custom language model.
    ///
    /// # Errors
    ///
    /// Returns [`WatsonError::MissingParameter`] if `customization_id` is
    /// empty, or any error from sending the request.
    pub async fn list_words(
        &self,
        options: &ListWordsOptions,
    ) -> Result<DetailedResponse<Words>, WatsonError> {
        let path = build_path(WORDS_PATH, &[("customization_id", &options.customization_id)])?;
        let spec = Self::request(Method::GET, path, "ListWords")
            .query_opt("word_type", options.word_type.as_ref())
            .query_opt("sort", options.sort.as_ref())
            .headers(&options.headers);
        self.service.send_json(&spec).await
    }

    /// Add or replace several words.
    ///
    /// # Errors
    ///
    /// Returns [`WatsonError::MissingParameter`] if `customization_id` is
    /// empty or no words are given, or any error from sending the request.
    pub async fn add_words(
        &self,
        options: &AddWordsOptions,
    ) -> Result<DetailedResponse<()>, WatsonError> {
        let path = build_path(WORDS_PATH, &[("customization_id", &options.customization_id)])?;
        if options.words.is_empty() {
            return Err(WatsonError::MissingParameter("words"));
        }
        let spec = Self::request(Method::POST, path, "AddWords")
            .headers(&options.headers)
            .json(&AddWordsBody {
                words: &options.words,
            })?;
        self.service.send_empty(&spec).await
    }

    /// Add or replace one word.
    ///
    /// # Errors
    ///
    /// Returns [`WatsonError::MissingParameter`] if an identifier is empty, or
    /// any error from sending the request.
    pub async fn add_word(
        &self,
        options: &AddWordOptions,
    ) -> Result<DetailedResponse<()>, WatsonError> {
        let path = build_path(
            WORD_PATH,
            &[
                ("customization_id", &options.customization_id),
                ("word_name", &options.word_name),
            ],
        )?;
        let spec = Self::request(Method::PUT, path, "AddWord")
            .headers(&options.headers)
            .json(&options.word)?;
        self.service.send_empty(&spec).await
    }

    /// Describe one word.
    ///
    /// # Errors
    ///
    /// Returns [`WatsonError::MissingParameter`] if an identifier is empty, or
    /// any error from sending the request.
    pub async fn get_word(
        &self,
        options: &GetWordOptions,
    ) -> Result<DetailedResponse<Word>, WatsonError> {
        let path = build_path(
            WORD_PATH,
            &[
                ("customization_id", &options.customization_id),
                ("word_name", &options.name),
            ],
        )?;
        let spec = Self::request(Method::GET, path, "GetWord").headers(&options.headers);
        self.service.send_json(&spec).await
    }

    /// Delete one word.
    ///
    /// # Errors
    ///
    /// Returns [`WatsonError::MissingParameter`] if an identifier is empty, or
    /// any error from sending the request.
    pub async fn delete_word(
        &self,
        options: &DeleteWordOptions,
    ) -> Result<DetailedResponse<()>, WatsonError> {
        let path = build_path(
            WORD_PATH,
            &[
                ("customization_id", &options.customization_id),
                ("word_name", &options.name),
            ],
        )?;
        let spec = Self::request(Method::DELETE, path, "DeleteWord").headers(&options.headers);
        self.service.send_empty(&spec).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn add_words_body_shape() {
        let words = vec![
            CustomWord::new("HHonors")
                .with_sounds_like(vec!["hilton honors".into(), "h honors".into()])
                .with_display_as("HHonors"),
            CustomWord::new("IEEE").with_sounds_like(vec!["i triple e".into()]),
        ];
        let body = serde_json::to_value(AddWordsBody { words: &words }).unwrap();
        assert_eq!(
            body,
            serde_json::json!({
                "words": [
                    {"word": "HHonors", "sounds_like": ["hilton honors", "h honors"], "display_as": "HHonors"},
                    {"word": "IEEE", "sounds_like": ["i triple e"]}
                ]
            })
        );
    }

    #[test]
    fn add_word_body_omits_word_by_default() {
        let options = AddWordOptions::new("cust-1", "NCAA").with_sounds_like(vec!["n c double a".into()]);
        assert_eq!(
            serde_json::to_value(&options.word).unwrap(),
            serde_json::json!({"sounds_like": ["n c double a"]})
        );
    }

    #[test]
    fn parse_word_with_errors() {
        let word: Word = serde_json::from_str(
            r#"{
                "word": "NCAA",
                "sounds_like": ["n c double a"],
                "count": 2,
                "source": ["corpus1", "user"],
                "error": [{"n c double a": "Numbers are not allowed in sounds-like."}]
            }"#,
        )
        .unwrap();
        assert_eq!(word.count, 2);
        assert_eq!(word.source, vec!["corpus1", "user"]);
        assert_eq!(word.error[0].len(), 1);
        assert!(word.display_as.is_none());
    }

    #[tokio::test]
    async fn add_words_requires_words() {
        let client = SpeechToTextV1::new(watson_core::Authenticator::None).unwrap();
        let err = client
            .add_words(&AddWordsOptions::new("cust-1", Vec::new()))
            .await
            .unwrap_err();
        assert!(matches!(err, WatsonError::MissingParameter("words")));
    }
}
