//! Deletion of data labeled with a customer ID.

use std::collections::HashMap;

use watson_core::{DetailedResponse, Method, WatsonError, require};

use crate::SpeechToTextV1;

/// Options for [`SpeechToTextV1::delete_user_data`].
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DeleteUserDataOptions {
    pub customer_id: String,
    pub headers: HashMap<String, String>,
}

impl DeleteUserDataOptions {
    #[must_use]
    pub fn new(customer_id: impl Into<String>) -> Self {
        Self {
            customer_id: customer_id.into(),
            headers: HashMap::new(),
        }
    }
}

watson_core::impl_with_header!(DeleteUserDataOptions);

impl SpeechToTextV1 {
    /// Delete all data associated with a customer ID.
    ///
    /// # Errors
    ///
    /// Returns [`WatsonError::MissingParameter`] if `customer_id` is empty, or
    /// any error from sending the request.
    pub async fn delete_user_data(
        &self,
        options: &DeleteUserDataOptions,
    ) -> Result<DetailedResponse<()>, WatsonError> {
        require("customer_id", &options.customer_id)?;
        let spec = Self::request(Method::DELETE, "/v1/user_data", "DeleteUserData")
            .query("customer_id", &options.customer_id)
            .headers(&options.headers);
        self.service.send_empty(&spec).await
    }
}
