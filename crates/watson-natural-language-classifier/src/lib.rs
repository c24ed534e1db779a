//! # watson-natural-language-classifier
//!
//! Client for IBM Watson Natural Language Classifier v1.
//!
//! Classifiers are trained from CSV phrase/class pairs and then used to
//! classify short texts, one at a time or in collections of up to 30.

pub mod classifiers;
pub mod classify;

pub use classifiers::{
    Classifier, ClassifierList, CreateClassifierOptions, DeleteClassifierOptions,
    GetClassifierOptions, ListClassifiersOptions,
};
pub use classify::{
    Classification, ClassificationCollection, ClassifiedClass, ClassifyCollectionOptions,
    ClassifyInput, ClassifyOptions, CollectionItem,
};

use watson_core::{Authenticator, BaseService, WatsonConfig, WatsonError};

/// Public endpoint used when no URL is configured.
pub const DEFAULT_SERVICE_URL: &str =
    "https://gateway.watsonplatform.net/natural-language-classifier/api";

const SERVICE_NAME: &str = "natural_language_classifier";
const SERVICE_VERSION: &str = "V1";

/// Natural Language Classifier v1.
#[derive(Debug, Clone)]
pub struct NaturalLanguageClassifierV1 {
    service: BaseService,
}

impl NaturalLanguageClassifierV1 {
    /// Create a client for the public endpoint.
    ///
    /// # Errors
    ///
    /// Returns [`WatsonError::Http`] if the HTTP client cannot be built.
    pub fn new(authenticator: Authenticator) -> Result<Self, WatsonError> {
        Ok(Self::with_service(BaseService::new(DEFAULT_SERVICE_URL, authenticator)?))
    }

    /// Create a client from the `natural_language_classifier` config section.
    ///
    /// # Errors
    ///
    /// Returns [`WatsonError::Auth`] if the section has no usable credentials.
    pub fn from_config(config: &WatsonConfig) -> Result<Self, WatsonError> {
        Ok(Self::with_service(BaseService::from_config(
            &config.natural_language_classifier,
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
}
