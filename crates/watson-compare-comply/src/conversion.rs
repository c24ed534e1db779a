//! Single-document analysis: HTML conversion, element classification and
//! table extraction.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};
use watson_core::{DetailedResponse, FileData, FormPart, Method, WatsonError};

use crate::CompareComplyV1;
use crate::elements::{
    ContractAmts, ContractCurrencies, ContractTerms, ContractType, DocInfo, DocStructure,
    Document, EffectiveDates, Element, Parties, PaymentTerms, TerminationDates,
};
use crate::tables::Tables;

/// Content type sent for uploads that do not name one.
pub const DEFAULT_FILE_CONTENT_TYPE: &str = "application/octet-stream";

/// A document upload with an optional model, shared by the single-document
/// operations.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DocumentOptions {
    /// PDF, Word, image or text document. Set `content_type` when known.
    pub file: FileData,
    pub model: Option<String>,
    pub headers: HashMap<String, String>,
}

impl DocumentOptions {
    #[must_use]
    pub fn new(file: FileData) -> Self {
        Self {
            file,
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

watson_core::impl_with_header!(DocumentOptions);

/// Options for [`CompareComplyV1::convert_to_html`].
pub type ConvertToHtmlOptions = DocumentOptions;
/// Options for [`CompareComplyV1::classify_elements`].
pub type ClassifyElementsOptions = DocumentOptions;
/// Options for [`CompareComplyV1::extract_tables`].
pub type ExtractTablesOptions = DocumentOptions;

/// The HTML version of a document.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct HtmlReturn {
    pub num_pages: Option<String>,
    pub author: Option<String>,
    pub publication_date: Option<String>,
    pub title: Option<String>,
    pub html: Option<String>,
}

/// Analysis of a contract's elements.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ClassifyReturn {
    pub document: Option<Document>,
    pub model_id: Option<String>,
    pub model_version: Option<String>,
    #[serde(default, deserialize_with = "watson_core::serde_util::null_as_default")]
    pub elements: Vec<Element>,
    #[serde(default, deserialize_with = "watson_core::serde_util::null_as_default")]
    pub effective_dates: Vec<EffectiveDates>,
    #[serde(default, deserialize_with = "watson_core::serde_util::null_as_default")]
    pub contract_amounts: Vec<ContractAmts>,
    #[serde(default, deserialize_with = "watson_core::serde_util::null_as_default")]
    pub termination_dates: Vec<TerminationDates>,
    #[serde(default, deserialize_with = "watson_core::serde_util::null_as_default")]
    pub contract_types: Vec<ContractType>,
    #[serde(default, deserialize_with = "watson_core::serde_util::null_as_default")]
    pub contract_terms: Vec<ContractTerms>,
    #[serde(default, deserialize_with = "watson_core::serde_util::null_as_default")]
    pub payment_terms: Vec<PaymentTerms>,
    #[serde(default, deserialize_with = "watson_core::serde_util::null_as_default")]
    pub contract_currencies: Vec<ContractCurrencies>,
    #[serde(default, deserialize_with = "watson_core::serde_util::null_as_default")]
    pub tables: Vec<Tables>,
    pub document_structure: Option<DocStructure>,
    #[serde(default, deserialize_with = "watson_core::serde_util::null_as_default")]
    pub parties: Vec<Parties>,
}

/// Tables found in a document.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct TableReturn {
    pub document: Option<DocInfo>,
    pub model_id: Option<String>,
    pub model_version: Option<String>,
    #[serde(default, deserialize_with = "watson_core::serde_util::null_as_default")]
    pub tables: Vec<Tables>,
}

impl CompareComplyV1 {
    /// Convert a document to HTML.
    ///
    /// # Errors
    ///
    /// Returns [`WatsonError::MissingParameter`] if the file is empty, or any
    /// error from sending the request.
    pub async fn convert_to_html(
        &self,
        options: &ConvertToHtmlOptions,
    ) -> Result<DetailedResponse<HtmlReturn>, WatsonError> {
        self.analyze_document("/v1/html_conversion", "ConvertToHtml", options)
            .await
    }

    /// Analyze a document for structural and semantic elements.
    ///
    /// # Errors
    ///
    /// Returns [`WatsonError::MissingParameter`] if the file is empty, or any
    /// error from sending the request.
    pub async fn classify_elements(
        &self,
        options: &ClassifyElementsOptions,
    ) -> Result<DetailedResponse<ClassifyReturn>, WatsonError> {
        self.analyze_document("/v1/element_classification", "ClassifyElements", options)
            .await
    }

    /// Analyze the tables in a document.
    ///
    /// # Errors
    ///
    /// Returns [`WatsonError::MissingParameter`] if the file is empty, or any
    /// error from sending the request.
    pub async fn extract_tables(
        &self,
        options: &ExtractTablesOptions,
    ) -> Result<DetailedResponse<TableReturn>, WatsonError> {
        self.analyze_document("/v1/tables", "ExtractTables", options)
            .await
    }

    async fn analyze_document<T: serde::de::DeserializeOwned>(
        &self,
        path: &str,
        operation_id: &str,
        options: &DocumentOptions,
    ) -> Result<DetailedResponse<T>, WatsonError> {
        if options.file.data.is_empty() {
            return Err(WatsonError::MissingParameter("file"));
        }
        let spec = self
            .request(Method::POST, path, operation_id)
            .query_opt("model", options.model.as_ref())
            .headers(&options.headers)
            .multipart(vec![FormPart::file(
                "file",
                &options.file,
                DEFAULT_FILE_CONTENT_TYPE,
            )]);
        self.service.send_json(&spec).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use watson_core::Authenticator;

    const CLASSIFY_FIXTURE: &str = r#"{
        "document": {"title": "Sample contract", "hash": "0a1b"},
        "model_id": "contracts",
        "model_version": "1.2.0",
        "elements": [
            {
                "location": {"begin": 2411, "end": 2468},
                "text": "The Supplier shall deliver the goods.",
                "types": [
                    {
                        "label": {"nature": "Obligation", "party": "Supplier"},
                        "provenance_ids": ["8f3a"]
                    }
                ],
                "categories": [{"label": "Delivery", "provenance_ids": ["9b1c"]}],
                "attributes": []
            }
        ],
        "effective_dates": [{"confidence_level": "High", "text": "May 1, 2018", "text_normalized": "2018-05-01"}],
        "parties": [{"party": "Supplier", "role": "Supplier", "importance": "Primary", "contacts": [{"name": "Jane"}]}],
        "document_structure": {"section_titles": [{"text": "1. Delivery", "level": 1, "element_locations": [{"begin": 2411, "end": 2468}]}]}
    }"#;

    #[test]
    fn null_lists_are_empty() {
        let data: ClassifyReturn = serde_json::from_str(
            r#"{"elements": null, "parties": null, "tables": [{"body_cells": null, "key_value_pairs": null}]}"#,
        )
        .unwrap();
        assert!(data.elements.is_empty());
        assert!(data.parties.is_empty());
        assert!(data.tables[0].body_cells.is_empty());
        assert!(data.tables[0].key_value_pairs.is_empty());
    }

    #[test]
    fn parse_classify_return() {
        let data: ClassifyReturn = serde_json::from_str(CLASSIFY_FIXTURE).unwrap();
        assert_eq!(data.model_id.as_deref(), Some("contracts"));
        assert_eq!(data.elements.len(), 1);

        let element = &data.elements[0];
        let label = element.types[0].label.as_ref().unwrap();
        assert_eq!(label.nature, "Obligation");
        assert_eq!(
            element.categories[0].label.as_deref(),
            Some(crate::Category::LABEL_DELIVERY)
        );
        assert_eq!(data.effective_dates[0].text_normalized.as_deref(), Some("2018-05-01"));
        assert_eq!(
            data.parties[0].importance.as_deref(),
            Some(crate::elements::Parties::IMPORTANCE_PRIMARY)
        );
        let structure = data.document_structure.unwrap();
        assert_eq!(structure.section_titles[0].level, Some(1));
        assert!(data.tables.is_empty());
    }

    #[test]
    fn parse_html_return() {
        let data: HtmlReturn =
            serde_json::from_str(r#"{"num_pages": "2", "title": "Contract", "html": "<html></html>"}"#)
                .unwrap();
        assert_eq!(data.num_pages.as_deref(), Some("2"));
        assert!(data.author.is_none());
    }

    #[test]
    fn options_builder() {
        let options = ConvertToHtmlOptions::new(FileData::new(b"%PDF".to_vec()))
            .with_model(crate::model::CONTRACTS)
            .with_header("X-Trace", "1");
        assert_eq!(options.model.as_deref(), Some("contracts"));
        assert_eq!(options.headers["X-Trace"], "1");
    }

    #[tokio::test]
    async fn empty_file_fails_before_sending() {
        let client = CompareComplyV1::new("2018-10-15", Authenticator::None).unwrap();
        let err = client
            .extract_tables(&ExtractTablesOptions::new(FileData::new(Vec::new())))
            .await
            .unwrap_err();
        assert!(matches!(err, WatsonError::MissingParameter("file")));
    }
}
