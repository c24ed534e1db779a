//! Request description shared by every service operation.
//!
//! A [`RequestSpec`] is a plain value (method, path, query, headers, body)
//! that can be turned into a `reqwest::RequestBuilder` any number of times.
//! Multipart forms in `reqwest` are single-use, so keeping the description
//! around is what lets [`crate::BaseService`] resend after a token refresh.

use std::collections::HashMap;

use reqwest::header::{CONTENT_TYPE, HeaderMap, HeaderName, HeaderValue};
use reqwest::multipart::{Form, Part};
use reqwest::Method;
use serde::Serialize;

use crate::error::WatsonError;

/// Binary payload for uploads (audio, documents, corpora, training data).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileData {
    pub data: Vec<u8>,
    pub file_name: Option<String>,
    pub content_type: Option<String>,
}

impl FileData {
    #[must_use]
    pub fn new(data: impl Into<Vec<u8>>) -> Self {
        Self {
            data: data.into(),
            file_name: None,
            content_type: None,
        }
    }

    #[must_use]
    pub fn with_file_name(mut self, file_name: impl Into<String>) -> Self {
        self.file_name = Some(file_name.into());
        self
    }

    #[must_use]
    pub fn with_content_type(mut self, content_type: impl Into<String>) -> Self {
        self.content_type = Some(content_type.into());
        self
    }
}

/// One field of a multipart form.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FormPart {
    Text { name: String, value: String },
    File { name: String, file: FileData },
}

impl FormPart {
    #[must_use]
    pub fn text(name: &str, value: impl Into<String>) -> Self {
        Self::Text {
            name: name.to_string(),
            value: value.into(),
        }
    }

    /// File part named `name`. A missing file name defaults to `name` and a
    /// missing content type to `default_content_type`.
    #[must_use]
    pub fn file(name: &str, file: &FileData, default_content_type: &str) -> Self {
        let mut file = file.clone();
        if file.file_name.is_none() {
            file.file_name = Some(name.to_string());
        }
        if file.content_type.is_none() {
            file.content_type = Some(default_content_type.to_string());
        }
        Self::File {
            name: name.to_string(),
            file,
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq)]
pub enum Body {
    #[default]
    Empty,
    Json(serde_json::Value),
    Bytes { content_type: String, data: Vec<u8> },
    Multipart(Vec<FormPart>),
}

/// Everything needed to issue one REST call, relative to a service URL.
#[derive(Debug, Clone)]
pub struct RequestSpec {
    method: Method,
    path: String,
    query: Vec<(String, String)>,
    headers: Vec<(String, String)>,
    body: Body,
}

impl RequestSpec {
    #[must_use]
    pub fn new(method: Method, path: impl Into<String>) -> Self {
        Self {
            method,
            path: path.into(),
            query: Vec::new(),
            headers: Vec::new(),
            body: Body::Empty,
        }
    }

    #[must_use]
    pub fn get(path: impl Into<String>) -> Self {
        Self::new(Method::GET, path)
    }

    #[must_use]
    pub fn post(path: impl Into<String>) -> Self {
        Self::new(Method::POST, path)
    }

    #[must_use]
    pub fn put(path: impl Into<String>) -> Self {
        Self::new(Method::PUT, path)
    }

    #[must_use]
    pub fn delete(path: impl Into<String>) -> Self {
        Self::new(Method::DELETE, path)
    }

    #[must_use]
    pub const fn method(&self) -> &Method {
        &self.method
    }

    #[must_use]
    pub fn path(&self) -> &str {
        &self.path
    }

    #[must_use]
    pub fn query_pairs(&self) -> &[(String, String)] {
        &self.query
    }

    #[must_use]
    pub const fn body(&self) -> &Body {
        &self.body
    }

    /// Add a query parameter.
    #[must_use]
    pub fn query(mut self, name: &str, value: impl ToString) -> Self {
        self.query.push((name.to_string(), value.to_string()));
        self
    }

    /// Add a query parameter when `value` is set.
    #[must_use]
    pub fn query_opt<T: ToString>(self, name: &str, value: Option<&T>) -> Self {
        match value {
            Some(value) => self.query(name, value.to_string()),
            None => self,
        }
    }

    /// Add a comma-separated list parameter when `values` is non-empty.
    #[must_use]
    pub fn query_list(self, name: &str, values: &[String]) -> Self {
        if values.is_empty() {
            self
        } else {
            self.query(name, values.join(","))
        }
    }

    /// Add a request header. Later values replace earlier ones.
    #[must_use]
    pub fn header(mut self, name: &str, value: impl Into<String>) -> Self {
        self.headers.push((name.to_string(), value.into()));
        self
    }

    /// Add a header when `value` is set.
    #[must_use]
    pub fn header_opt(self, name: &str, value: Option<&String>) -> Self {
        match value {
            Some(value) => self.header(name, value.clone()),
            None => self,
        }
    }

    /// Tag the request with the `X-IBMCloud-SDK-Analytics` header.
    #[must_use]
    pub fn analytics(self, service_name: &str, service_version: &str, operation_id: &str) -> Self {
        self.header(
            "X-IBMCloud-SDK-Analytics",
            format!(
                "service_name={service_name};service_version={service_version};operation_id={operation_id}"
            ),
        )
    }

    /// Add caller-supplied headers from an options struct.
    #[must_use]
    pub fn headers(mut self, headers: &HashMap<String, String>) -> Self {
        let mut sorted: Vec<_> = headers.iter().collect();
        sorted.sort();
        for (name, value) in sorted {
            self.headers.push((name.clone(), value.clone()));
        }
        self
    }

    /// Use `body` serialized as the JSON request body.
    ///
    /// # Errors
    ///
    /// Returns [`WatsonError::Parse`] if `body` cannot be serialized.
    pub fn json<T: Serialize>(mut self, body: &T) -> Result<Self, WatsonError> {
        let value = serde_json::to_value(body)
            .map_err(|e| WatsonError::Parse(format!("request body: {e}")))?;
        self.body = Body::Json(value);
        Ok(self)
    }

    /// Send `data` verbatim with the given content type.
    #[must_use]
    pub fn bytes(mut self, content_type: impl Into<String>, data: Vec<u8>) -> Self {
        self.body = Body::Bytes {
            content_type: content_type.into(),
            data,
        };
        self
    }

    /// Send a `multipart/form-data` body.
    #[must_use]
    pub fn multipart(mut self, parts: Vec<FormPart>) -> Self {
        self.body = Body::Multipart(parts);
        self
    }

    /// Build a `reqwest` request against `base_url`.
    ///
    /// `default_headers` are applied first so per-call headers win.
    ///
    /// # Errors
    ///
    /// Returns [`WatsonError::InvalidParameter`] for malformed headers or
    /// multipart content types.
    pub fn to_request(
        &self,
        http: &reqwest::Client,
        base_url: &str,
        default_headers: &HeaderMap,
    ) -> Result<reqwest::RequestBuilder, WatsonError> {
        let url = format!("{}{}", base_url.trim_end_matches('/'), self.path);

        let mut headers = default_headers.clone();
        headers.insert(reqwest::header::ACCEPT, HeaderValue::from_static("application/json"));

        let mut request = http.request(self.method.clone(), url);
        if !self.query.is_empty() {
            request = request.query(&self.query);
        }

        request = match &self.body {
            Body::Empty => request,
            Body::Json(value) => {
                headers.insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));
                request.json(value)
            }
            Body::Bytes { content_type, data } => {
                let value = HeaderValue::from_str(content_type).map_err(|e| {
                    WatsonError::InvalidParameter {
                        name: "Content-Type".into(),
                        reason: e.to_string(),
                    }
                })?;
                headers.insert(CONTENT_TYPE, value);
                request.body(data.clone())
            }
            Body::Multipart(parts) => request.multipart(build_form(parts)?),
        };

        // Per-call headers go last so they win over defaults and the body type.
        for (name, value) in &self.headers {
            let name = HeaderName::from_bytes(name.as_bytes()).map_err(|e| {
                WatsonError::InvalidParameter {
                    name: name.clone(),
                    reason: e.to_string(),
                }
            })?;
            let value = HeaderValue::from_str(value).map_err(|e| WatsonError::InvalidParameter {
                name: name.to_string(),
                reason: e.to_string(),
            })?;
            headers.insert(name, value);
        }

        Ok(request.headers(headers))
    }
}

fn build_form(parts: &[FormPart]) -> Result<Form, WatsonError> {
    let mut form = Form::new();
    for part in parts {
        form = match part {
            FormPart::Text { name, value } => form.text(name.clone(), value.clone()),
            FormPart::File { name, file } => {
                let mut body = Part::bytes(file.data.clone());
                if let Some(file_name) = &file.file_name {
                    body = body.file_name(file_name.clone());
                }
                if let Some(content_type) = &file.content_type {
                    body = body
                        .mime_str(content_type)
                        .map_err(|e| WatsonError::InvalidParameter {
                            name: name.clone(),
                            reason: e.to_string(),
                        })?;
                }
                form.part(name.clone(), body)
            }
        };
    }
    Ok(form)
}

/// Substitute `{name}` segments of `template` with percent-encoded values.
///
/// # Errors
///
/// Returns [`WatsonError::MissingParameter`] if any value is empty.
pub fn build_path(template: &str, params: &[(&'static str, &str)]) -> Result<String, WatsonError> {
    let mut path = template.to_string();
    for (name, value) in params {
        require(name, value)?;
        path = path.replace(&format!("{{{name}}}"), &urlencoding::encode(value));
    }
    Ok(path)
}

/// Fail with [`WatsonError::MissingParameter`] when `value` is empty.
///
/// # Errors
///
/// Returns [`WatsonError::MissingParameter`] naming the parameter.
pub fn require(name: &'static str, value: &str) -> Result<(), WatsonError> {
    if value.is_empty() {
        Err(WatsonError::MissingParameter(name))
    } else {
        Ok(())
    }
}
