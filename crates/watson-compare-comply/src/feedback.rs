//! Feedback on element classifications.

use std::collections::HashMap;

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use watson_core::{DetailedResponse, Method, WatsonError, build_path, require};

use crate::CompareComplyV1;
use crate::elements::{Category, Location, TypeLabel};

pub const FEEDBACK_TYPE_ELEMENT_CLASSIFICATION: &str = "element_classification";

/// Values of the `modification` field in feedback records.
pub mod modification {
    pub const ADDED: &str = "added";
    pub const UNCHANGED: &str = "unchanged";
    pub const REMOVED: &str = "removed";
}

/// Title and hash of the document the feedback is about.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ShortDoc {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub hash: Option<String>,
}

/// Types and categories of an element, before or after correction.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FeedbackLabels {
    #[serde(default, deserialize_with = "watson_core::serde_util::null_as_default")]
    pub types: Vec<TypeLabel>,
    #[serde(default, deserialize_with = "watson_core::serde_util::null_as_default")]
    pub categories: Vec<Category>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub modification: Option<String>,
}

impl FeedbackLabels {
    #[must_use]
    pub const fn new(types: Vec<TypeLabel>, categories: Vec<Category>) -> Self {
        Self {
            types,
            categories,
            modification: None,
        }
    }
}

/// Feedback to submit.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FeedbackDataInput {
    pub feedback_type: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub document: Option<ShortDoc>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub model_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub model_version: Option<String>,
    pub location: Location,
    pub text: String,
    pub original_labels: FeedbackLabels,
    pub updated_labels: FeedbackLabels,
}

impl FeedbackDataInput {
    /// Element-classification feedback for the element at `location`.
    #[must_use]
    pub fn new(
        location: Location,
        text: impl Into<String>,
        original_labels: FeedbackLabels,
        updated_labels: FeedbackLabels,
    ) -> Self {
        Self {
            feedback_type: FEEDBACK_TYPE_ELEMENT_CLASSIFICATION.to_string(),
            document: None,
            model_id: None,
            model_version: None,
            location,
            text: text.into(),
            original_labels,
            updated_labels,
        }
    }

    #[must_use]
    pub fn with_document(mut self, document: ShortDoc) -> Self {
        self.document = Some(document);
        self
    }

    #[must_use]
    pub fn with_model(
        mut self,
        model_id: impl Into<String>,
        model_version: impl Into<String>,
    ) -> Self {
        self.model_id = Some(model_id.into());
        self.model_version = Some(model_version.into());
        self
    }
}

/// Feedback as stored by the service.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FeedbackDataOutput {
    pub feedback_type: Option<String>,
    pub document: Option<ShortDoc>,
    pub model_id: Option<String>,
    pub model_version: Option<String>,
    pub location: Option<Location>,
    pub text: Option<String>,
    pub original_labels: Option<FeedbackLabels>,
    pub updated_labels: Option<FeedbackLabels>,
    pub pagination: Option<Pagination>,
}

/// Cursors for paging through feedback.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Pagination {
    pub refresh_cursor: Option<String>,
    pub next_cursor: Option<String>,
    pub refresh_url: Option<String>,
    pub next_url: Option<String>,
    pub total: Option<i64>,
}

/// Response to [`CompareComplyV1::add_feedback`].
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FeedbackReturn {
    pub feedback_id: Option<String>,
    pub user_id: Option<String>,
    pub comment: Option<String>,
    #[serde(with = "watson_core::timestamp::option")]
    pub created: Option<DateTime<Utc>>,
    pub feedback_data: Option<FeedbackDataOutput>,
}

/// A single feedback record.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct GetFeedback {
    pub feedback_id: Option<String>,
    #[serde(with = "watson_core::timestamp::option")]
    pub created: Option<DateTime<Utc>>,
    pub comment: Option<String>,
    pub feedback_data: Option<FeedbackDataOutput>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FeedbackList {
    #[serde(default, deserialize_with = "watson_core::serde_util::null_as_default")]
    pub feedback: Vec<GetFeedback>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FeedbackDeleted {
    pub status: Option<i64>,
    pub message: Option<String>,
}

/// Options for [`CompareComplyV1::add_feedback`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AddFeedbackOptions {
    pub feedback_data: FeedbackDataInput,
    pub user_id: Option<String>,
    pub comment: Option<String>,
    pub headers: HashMap<String, String>,
}

impl AddFeedbackOptions {
    #[must_use]
    pub fn new(feedback_data: FeedbackDataInput) -> Self {
        Self {
            feedback_data,
            user_id: None,
            comment: None,
            headers: HashMap::new(),
        }
    }

    #[must_use]
    pub fn with_user_id(mut self, user_id: impl Into<String>) -> Self {
        self.user_id = Some(user_id.into());
        self
    }

    #[must_use]
    pub fn with_comment(mut self, comment: impl Into<String>) -> Self {
        self.comment = Some(comment.into());
        self
    }
}

/// Options for [`CompareComplyV1::get_feedback`].
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct GetFeedbackOptions {
    pub feedback_id: String,
    pub model: Option<String>,
    pub headers: HashMap<String, String>,
}

impl GetFeedbackOptions {
    #[must_use]
    pub fn new(feedback_id: impl Into<String>) -> Self {
        Self {
            feedback_id: feedback_id.into(),
            ..Self::default()
        }
    }

    #[must_use]
    pub fn with_model(mut self, model: impl Into<String>) -> Self {
        self.model = Some(model.into());
        self
    }
}

/// Options for [`CompareComplyV1::delete_feedback`].
pub type DeleteFeedbackOptions = GetFeedbackOptions;

/// Filters for [`CompareComplyV1::list_feedback`].
///
/// The `category_*` and `type_*` filters take comma-separated lists as the
/// service expects them.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ListFeedbackOptions {
    pub feedback_type: Option<String>,
    pub before: Option<NaiveDate>,
    pub after: Option<NaiveDate>,
    pub document_title: Option<String>,
    pub model_id: Option<String>,
    pub model_version: Option<String>,
    pub category_removed: Option<String>,
    pub category_added: Option<String>,
    pub category_not_changed: Option<String>,
    pub type_removed: Option<String>,
    pub type_added: Option<String>,
    pub type_not_changed: Option<String>,
    pub page_limit: Option<i64>,
    pub cursor: Option<String>,
    /// Comma-separated sort fields, `-` prefix for descending.
    pub sort: Option<String>,
    pub include_total: Option<bool>,
    pub headers: HashMap<String, String>,
}

impl ListFeedbackOptions {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn with_feedback_type(mut self, feedback_type: impl Into<String>) -> Self {
        self.feedback_type = Some(feedback_type.into());
        self
    }

    #[must_use]
    pub const fn with_before(mut self, before: NaiveDate) -> Self {
        self.before = Some(before);
        self
    }

    #[must_use]
    pub const fn with_after(mut self, after: NaiveDate) -> Self {
        self.after = Some(after);
        self
    }

    #[must_use]
    pub fn with_document_title(mut self, title: impl Into<String>) -> Self {
        self.document_title = Some(title.into());
        self
    }

    #[must_use]
    pub fn with_model_id(mut self, model_id: impl Into<String>) -> Self {
        self.model_id = Some(model_id.into());
        self
    }

    #[must_use]
    pub fn with_model_version(mut self, model_version: impl Into<String>) -> Self {
        self.model_version = Some(model_version.into());
        self
    }

    #[must_use]
    pub fn with_category_removed(mut self, categories: impl Into<String>) -> Self {
        self.category_removed = Some(categories.into());
        self
    }

    #[must_use]
    pub fn with_category_added(mut self, categories: impl Into<String>) -> Self {
        self.category_added = Some(categories.into());
        self
    }

    #[must_use]
    pub fn with_category_not_changed(mut self, categories: impl Into<String>) -> Self {
        self.category_not_changed = Some(categories.into());
        self
    }

    #[must_use]
    pub fn with_type_removed(mut self, types: impl Into<String>) -> Self {
        self.type_removed = Some(types.into());
        self
    }

    #[must_use]
    pub fn with_type_added(mut self, types: impl Into<String>) -> Self {
        self.type_added = Some(types.into());
        self
    }

    #[must_use]
    pub fn with_type_not_changed(mut self, types: impl Into<String>) -> Self {
        self.type_not_changed = Some(types.into());
        self
    }

    #[must_use]
    pub const fn with_page_limit(mut self, page_limit: i64) -> Self {
        self.page_limit = Some(page_limit);
        self
    }

    #[must_use]
    pub fn with_cursor(mut self, cursor: impl Into<String>) -> Self {
        self.cursor = Some(cursor.into());
        self
    }

    #[must_use]
    pub fn with_sort(mut self, sort: impl Into<String>) -> Self {
        self.sort = Some(sort.into());
        self
    }

    #[must_use]
    pub const fn with_include_total(mut self, include_total: bool) -> Self {
        self.include_total = Some(include_total);
        self
    }
}

watson_core::impl_with_header!(AddFeedbackOptions, GetFeedbackOptions, ListFeedbackOptions);

#[derive(Serialize)]
struct AddFeedbackBody<'a> {
    feedback_data: &'a FeedbackDataInput,
    #[serde(skip_serializing_if = "Option::is_none")]
    user_id: Option<&'a String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    comment: Option<&'a String>,
}

impl CompareComplyV1 {
    /// Record feedback on an element classification.
    ///
    /// # Errors
    ///
    /// Returns [`WatsonError::MissingParameter`] if the feedback type or text
    /// is empty, or any error from sending the request.
    pub async fn add_feedback(
        &self,
        options: &AddFeedbackOptions,
    ) -> Result<DetailedResponse<FeedbackReturn>, WatsonError> {
        require("feedback_type", &options.feedback_data.feedback_type)?;
        require("text", &options.feedback_data.text)?;
        let spec = self
            .request(Method::POST, "/v1/feedback", "AddFeedback")
            .headers(&options.headers)
            .json(&AddFeedbackBody {
                feedback_data: &options.feedback_data,
                user_id: options.user_id.as_ref(),
                comment: options.comment.as_ref(),
            })?;
        self.service.send_json(&spec).await
    }

    /// Delete a feedback record.
    ///
    /// # Errors
    ///
    /// Returns [`WatsonError::MissingParameter`] if `feedback_id` is empty, or
    /// any error from sending the request.
    pub async fn delete_feedback(
        &self,
        options: &DeleteFeedbackOptions,
    ) -> Result<DetailedResponse<FeedbackDeleted>, WatsonError> {
        let path = build_path("/v1/feedback/{feedback_id}", &[("feedback_id", &options.feedback_id)])?;
        let spec = self
            .request(Method::DELETE, path, "DeleteFeedback")
            .query_opt("model", options.model.as_ref())
            .headers(&options.headers);
        self.service.send_json(&spec).await
    }

    /// Fetch a feedback record.
    ///
    /// # Errors
    ///
    /// Returns [`WatsonError::MissingParameter`] if `feedback_id` is empty, or
    /// any error from sending the request.
    pub async fn get_feedback(
        &self,
        options: &GetFeedbackOptions,
    ) -> Result<DetailedResponse<GetFeedback>, WatsonError> {
        let path = build_path("/v1/feedback/{feedback_id}", &[("feedback_id", &options.feedback_id)])?;
        let spec = self
            .request(Method::GET, path, "GetFeedback")
            .query_opt("model", options.model.as_ref())
            .headers(&options.headers);
        self.service.send_json(&spec).await
    }

    /// List feedback records matching the filters. Paging is driven by the
    /// caller through `cursor`.
    ///
    /// # Errors
    ///
    /// Returns any error from sending the request.
    pub async fn list_feedback(
        &self,
        options: &ListFeedbackOptions,
    ) -> Result<DetailedResponse<FeedbackList>, WatsonError> {
        let spec = self
            .request(Method::GET, "/v1/feedback", "ListFeedback")
            .query_opt("feedback_type", options.feedback_type.as_ref())
            .query_opt("before", options.before.as_ref())
            .query_opt("after", options.after.as_ref())
            .query_opt("document_title", options.document_title.as_ref())
            .query_opt("model_id", options.model_id.as_ref())
            .query_opt("model_version", options.model_version.as_ref())
            .query_opt("category_removed", options.category_removed.as_ref())
            .query_opt("category_added", options.category_added.as_ref())
            .query_opt("category_not_changed", options.category_not_changed.as_ref())
            .query_opt("type_removed", options.type_removed.as_ref())
            .query_opt("type_added", options.type_added.as_ref())
            .query_opt("type_not_changed", options.type_not_changed.as_ref())
            .query_opt("page_limit", options.page_limit.as_ref())
            .query_opt("cursor", options.cursor.as_ref())
            .query_opt("sort", options.sort.as_ref())
            .query_opt("include_total", options.include_total.as_ref())
            .headers(&options.headers);
        self.service.send_json(&spec).await
    }
}
