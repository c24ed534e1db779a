//! Compare two documents.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};
use watson_core::{DetailedResponse, FileData, FormPart, Method, WatsonError};

use crate::CompareComplyV1;
use crate::conversion::DEFAULT_FILE_CONTENT_TYPE;
use crate::elements::{Attribute, Category, Document, Location, TypeLabel};

/// Options for [`CompareComplyV1::compare_documents`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CompareDocumentsOptions {
    pub file_1: FileData,
    pub file_2: FileData,
    /// Label for the first document, `file_1` when unset.
    pub file_1_label: Option<String>,
    /// Label for the second document, `file_2` when unset.
    pub file_2_label: Option<String>,
    pub model: Option<String>,
    pub headers: HashMap<String, String>,
}

impl CompareDocumentsOptions {
    #[must_use]
    pub fn new(file_1: FileData, file_2: FileData) -> Self {
        Self {
            file_1,
            file_2,
            file_1_label: None,
            file_2_label: None,
            model: None,
            headers: HashMap::new(),
        }
    }

    #[must_use]
    pub fn with_file_1_label(mut self, label: impl Into<String>) -> Self {
        self.file_1_label = Some(label.into());
        self
    }

    #[must_use]
    pub fn with_file_2_label(mut self, label: impl Into<String>) -> Self {
        self.file_2_label = Some(label.into());
        self
    }

    #[must_use]
    pub fn with_model(mut self, model: impl Into<String>) -> Self {
        self.model = Some(model.into());
        self
    }
}

watson_core::impl_with_header!(CompareDocumentsOptions);

/// Result of comparing two documents.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct CompareReturn {
    pub model_id: Option<String>,
    pub model_version: Option<String>,
    #[serde(default, deserialize_with = "watson_core::serde_util::null_as_default")]
    pub documents: Vec<Document>,
    #[serde(default, deserialize_with = "watson_core::serde_util::null_as_default")]
    pub aligned_elements: Vec<AlignedElement>,
    #[serde(default, deserialize_with = "watson_core::serde_util::null_as_default")]
    pub unaligned_elements: Vec<UnalignedElement>,
}

/// Elements of the two documents that correspond to each other.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct AlignedElement {
    #[serde(default, deserialize_with = "watson_core::serde_util::null_as_default")]
    pub element_pair: Vec<ElementPair>,
    pub identical_text: Option<bool>,
    #[serde(default, deserialize_with = "watson_core::serde_util::null_as_default")]
    pub provenance_ids: Vec<String>,
    pub significant_elements: Option<bool>,
}

/// One side of an aligned pair.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ElementPair {
    pub document_label: Option<String>,
    pub text: Option<String>,
    pub location: Option<Location>,
    #[serde(default, deserialize_with = "watson_core::serde_util::null_as_default")]
    pub types: Vec<TypeLabel>,
    #[serde(default, deserialize_with = "watson_core::serde_util::null_as_default")]
    pub categories: Vec<Category>,
    #[serde(default, deserialize_with = "watson_core::serde_util::null_as_default")]
    pub attributes: Vec<Attribute>,
}

/// An element present in only one of the documents.
pub type UnalignedElement = ElementPair;

impl CompareComplyV1 {
    /// Compare two documents.
    ///
    /// # Errors
    ///
    /// Returns [`WatsonError::MissingParameter`] if either file is empty, or
    /// any error from sending the request.
    pub async fn compare_documents(
        &self,
        options: &CompareDocumentsOptions,
    ) -> Result<DetailedResponse<CompareReturn>, WatsonError> {
        if options.file_1.data.is_empty() {
            return Err(WatsonError::MissingParameter("file_1"));
        }
        if options.file_2.data.is_empty() {
            return Err(WatsonError::MissingParameter("file_2"));
        }
        let spec = self
            .request(Method::POST, "/v1/comparison", "CompareDocuments")
            .query_opt("file_1_label", options.file_1_label.as_ref())
            .query_opt("file_2_label", options.file_2_label.as_ref())
            .query_opt("model", options.model.as_ref())
            .headers(&options.headers)
            .multipart(vec![
                FormPart::file("file_1", &options.file_1, DEFAULT_FILE_CONTENT_TYPE),
                FormPart::file("file_2", &options.file_2, DEFAULT_FILE_CONTENT_TYPE),
            ]);
        self.service.send_json(&spec).await
    }
}
