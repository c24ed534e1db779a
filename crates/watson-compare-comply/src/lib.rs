//! # watson-compare-comply
//!
//! Client for IBM Watson Compare and Comply v1.
//!
//! Converts contracts to HTML, classifies their elements, extracts tables,
//! compares two documents, records feedback on classifications, and runs
//! batch jobs over Cloud Object Storage buckets. Every request carries the
//! API `version` date given at construction.

pub mod batches;
pub mod comparison;
pub mod conversion;
pub mod elements;
pub mod feedback;
pub mod tables;

pub use batches::{
    BatchStatus, Batches, CreateBatchOptions, DocCounts, GetBatchOptions, ListBatchesOptions,
    UpdateBatchOptions,
};
pub use comparison::{
    AlignedElement, CompareDocumentsOptions, CompareReturn, ElementPair, UnalignedElement,
};
pub use conversion::{
    ClassifyElementsOptions, ClassifyReturn, ConvertToHtmlOptions, ExtractTablesOptions,
    HtmlReturn, TableReturn,
};
pub use elements::{Category, Document, Element, Label, Location, TypeLabel};
pub use feedback::{
    AddFeedbackOptions, DeleteFeedbackOptions, FeedbackDataInput, FeedbackDataOutput,
    FeedbackDeleted, FeedbackLabels, FeedbackList, FeedbackReturn, GetFeedback,
    GetFeedbackOptions, ListFeedbackOptions, Pagination, ShortDoc,
};
pub use tables::Tables;

use watson_core::{
    Authenticator, BaseService, Method, RequestSpec, WatsonConfig, WatsonError, require,
};

/// Public endpoint used when no URL is configured.
pub const DEFAULT_SERVICE_URL: &str = "https://gateway.watsonplatform.net/compare-comply/api";

/// API version date used by [`CompareComplyV1::from_config`] when the config
/// section has none.
pub const DEFAULT_VERSION: &str = "2018-10-15";

const SERVICE_NAME: &str = "compare-comply";
const SERVICE_VERSION: &str = "V1";

/// Model names accepted by the `model` query parameter.
pub mod model {
    pub const CONTRACTS: &str = "contracts";
    pub const TABLES: &str = "tables";
}

/// Compare and Comply v1.
#[derive(Debug, Clone)]
pub struct CompareComplyV1 {
    service: BaseService,
    version: String,
}

impl CompareComplyV1 {
    /// Create a client for the public endpoint.
    ///
    /// # Errors
    ///
    /// Returns [`WatsonError::MissingParameter`] if `version` is empty, or
    /// [`WatsonError::Http`] if the HTTP client cannot be built.
    pub fn new(
        version: impl Into<String>,
        authenticator: Authenticator,
    ) -> Result<Self, WatsonError> {
        Self::with_service(BaseService::new(DEFAULT_SERVICE_URL, authenticator)?, version)
    }

    /// Create a client from the `compare_comply` config section.
    ///
    /// # Errors
    ///
    /// Returns [`WatsonError::Auth`] if the section has no usable credentials.
    pub fn from_config(config: &WatsonConfig) -> Result<Self, WatsonError> {
        let section = &config.compare_comply;
        let version = if section.version.is_empty() {
            DEFAULT_VERSION
        } else {
            section.version.as_str()
        };
        let service = BaseService::from_config(section, &config.general, DEFAULT_SERVICE_URL)?;
        Self::with_service(service, version)
    }

    /// Wrap an already configured [`BaseService`].
    ///
    /// # Errors
    ///
    /// Returns [`WatsonError::MissingParameter`] if `version` is empty.
    pub fn with_service(
        service: BaseService,
        version: impl Into<String>,
    ) -> Result<Self, WatsonError> {
        let version = version.into();
        require("version", &version)?;
        Ok(Self { service, version })
    }

    #[must_use]
    pub fn version(&self) -> &str {
        &self.version
    }

    #[must_use]
    pub const fn service(&self) -> &BaseService {
        &self.service
    }

    pub const fn service_mut(&mut self) -> &mut BaseService {
        &mut self.service
    }

    fn request(&self, method: Method, path: impl Into<String>, operation_id: &str) -> RequestSpec {
        RequestSpec::new(method, path)
            .analytics(SERVICE_NAME, SERVICE_VERSION, operation_id)
            .query("version", &self.version)
    }
}
