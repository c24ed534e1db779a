//! Classify text with a trained classifier.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};
use watson_core::{DetailedResponse, RequestSpec, WatsonError, build_path, require};

use crate::{NaturalLanguageClassifierV1, SERVICE_NAME, SERVICE_VERSION};

/// Response from the classifier for a phrase.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Classification {
    pub classifier_id: Option<String>,
    pub url: Option<String>,
    pub text: Option<String>,
    pub top_class: Option<String>,
    #[serde(default, deserialize_with = "watson_core::serde_util::null_as_default")]
    pub classes: Vec<ClassifiedClass>,
}

/// A class and its confidence.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ClassifiedClass {
    pub confidence: Option<f64>,
    pub class_name: Option<String>,
}

/// Response from the classifier for multiple phrases.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ClassificationCollection {
    pub classifier_id: Option<String>,
    pub url: Option<String>,
    #[serde(default, deserialize_with = "watson_core::serde_util::null_as_default")]
    pub collection: Vec<CollectionItem>,
}

/// Classification for one phrase of a collection.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CollectionItem {
    pub text: Option<String>,
    pub top_class: Option<String>,
    #[serde(default, deserialize_with = "watson_core::serde_util::null_as_default")]
    pub classes: Vec<ClassifiedClass>,
}

/// One phrase of a collection request.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClassifyInput {
    pub text: String,
}

impl ClassifyInput {
    #[must_use]
    pub fn new(text: impl Into<String>) -> Self {
        Self { text: text.into() }
    }
}

/// Options for [`NaturalLanguageClassifierV1::classify`].
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ClassifyOptions {
    pub classifier_id: String,
    /// Phrase to classify, at most 2048 characters.
    pub text: String,
    pub headers: HashMap<String, String>,
}

impl ClassifyOptions {
    #[must_use]
    pub fn new(classifier_id: impl Into<String>, text: impl Into<String>) -> Self {
        Self {
            classifier_id: classifier_id.into(),
            text: text.into(),
            headers: HashMap::new(),
        }
    }
}

/// Options for [`NaturalLanguageClassifierV1::classify_collection`].
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ClassifyCollectionOptions {
    pub classifier_id: String,
    /// Up to 30 phrases.
    pub collection: Vec<ClassifyInput>,
    pub headers: HashMap<String, String>,
}

impl ClassifyCollectionOptions {
    #[must_use]
    pub fn new(classifier_id: impl Into<String>, collection: Vec<ClassifyInput>) -> Self {
        Self {
            classifier_id: classifier_id.into(),
            collection,
            headers: HashMap::new(),
        }
    }
}

watson_core::impl_with_header!(ClassifyOptions, ClassifyCollectionOptions);

#[derive(Serialize)]
struct ClassifyBody<'a> {
    text: &'a str,
}

#[derive(Serialize)]
struct ClassifyCollectionBody<'a> {
    collection: &'a [ClassifyInput],
}

impl NaturalLanguageClassifierV1 {
    /// Return label information for the input text.
    ///
    /// # Errors
    ///
    /// Returns [`WatsonError::MissingParameter`] if `classifier_id` or `text`
    /// is empty, or any error from sending the request.
    pub async fn classify(
        &self,
        options: &ClassifyOptions,
    ) -> Result<DetailedResponse<Classification>, WatsonError> {
        require("text", &options.text)?;
        let path = build_path(
            "/v1/classifiers/{classifier_id}/classify",
            &[("classifier_id", &options.classifier_id)],
        )?;
        let spec = RequestSpec::post(path)
            .analytics(SERVICE_NAME, SERVICE_VERSION, "Classify")
            .headers(&options.headers)
            .json(&ClassifyBody {
                text: &options.text,
            })?;
        self.service.send_json(&spec).await
    }

    /// Return label information for multiple phrases.
    ///
    /// # Errors
    ///
    /// Returns [`WatsonError::MissingParameter`] if `classifier_id` is empty
    /// or `collection` has no entries, or any error from sending the request.
    pub async fn classify_collection(
        &self,
        options: &ClassifyCollectionOptions,
    ) -> Result<DetailedResponse<ClassificationCollection>, WatsonError> {
        if options.collection.is_empty() {
            return Err(WatsonError::MissingParameter("collection"));
        }
        let path = build_path(
            "/v1/classifiers/{classifier_id}/classify_collection",
            &[("classifier_id", &options.classifier_id)],
        )?;
        let spec = RequestSpec::post(path)
            .analytics(SERVICE_NAME, SERVICE_VERSION, "ClassifyCollection")
            .headers(&options.headers)
            .json(&ClassifyCollectionBody {
                collection: &options.collection,
            })?;
        self.service.send_json(&spec).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    const FIXTURE: &str = r#"{
        "classifier_id": "10D41B-nlc-1",
        "url": "https://gateway.watsonplatform.net/natural-language-classifier/api/v1/classifiers/10D41B-nlc-1",
        "text": "How hot will it be today?",
        "top_class": "temperature",
        "classes": [
            {"class_name": "temperature", "confidence": 0.9998201258549781},
            {"class_name": "conditions", "confidence": 0.00017987414502176904}
        ]
    }"#;

    #[test]
    fn null_classes_are_empty() {
        let data: Classification =
            serde_json::from_str(r#"{"top_class": "temperature", "classes": null}"#).unwrap();
        assert_eq!(data.top_class.as_deref(), Some("temperature"));
        assert!(data.classes.is_empty());
    }

    #[test]
    fn parse_classification() {
        let data: Classification = serde_json::from_str(FIXTURE).unwrap();
        assert_eq!(data.top_class.as_deref(), Some("temperature"));
        assert_eq!(data.classes.len(), 2);
        assert_eq!(data.classes[1].class_name.as_deref(), Some("conditions"));
        assert!(data.classes[0].confidence.unwrap() > 0.99);
    }

    #[test]
    fn parse_collection_with_missing_fields() {
        let data: ClassificationCollection = serde_json::from_str(
            r#"{"classifier_id": "abc", "collection": [{"text": "hi", "classes": []}]}"#,
        )
        .unwrap();
        assert_eq!(data.collection.len(), 1);
        assert!(data.collection[0].top_class.is_none());
        assert!(data.url.is_none());
    }

    #[test]
    fn collection_body_shape() {
        let inputs = vec![ClassifyInput::new("a"), ClassifyInput::new("b")];
        let body = serde_json::to_value(ClassifyCollectionBody {
            collection: &inputs,
        })
        .unwrap();
        assert_eq!(
            body,
            serde_json::json!({"collection": [{"text": "a"}, {"text": "b"}]})
        );
    }

    #[tokio::test]
    async fn empty_text_fails_before_sending() {
        let client = NaturalLanguageClassifierV1::new(watson_core::Authenticator::None).unwrap();
        let err = client
            .classify(&ClassifyOptions::new("abc", ""))
            .await
            .unwrap_err();
        assert!(matches!(err, WatsonError::MissingParameter("text")));
    }

    #[tokio::test]
    async fn empty_collection_fails_before_sending() {
        let client = NaturalLanguageClassifierV1::new(watson_core::Authenticator::None).unwrap();
        let err = client
            .classify_collection(&ClassifyCollectionOptions::new("abc", Vec::new()))
            .await
            .unwrap_err();
        assert!(matches!(err, WatsonError::MissingParameter("collection")));
    }
}
