//! Request specification type

use serde::{Deserialize, Serialize};
use serde_json::Value;

use super::{HttpMethod, QueryParam};
use crate::error::{DomainError, DomainResult};

/// Specification of one HTTP interaction against the base endpoint.
///
/// The path is relative to the base URL (e.g. `/users/2`); the base is
/// supplied by whichever client executes the request.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RequestSpec {
    /// Human-readable name, used in logs
    pub name: String,
    /// HTTP method
    pub method: HttpMethod,
    /// Path relative to the base URL, starting with `/`
    pub path: String,
    /// Query parameters in insertion order
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub query: Vec<QueryParam>,
    /// Optional JSON body
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub body: Option<Value>,
}

impl RequestSpec {
    /// Creates a request with the given method and path and no body.
    #[must_use]
    pub fn new(method: HttpMethod, path: impl Into<String>) -> Self {
        let path = path.into();
        Self {
            name: format!("{method} {path}"),
            method,
            path,
            query: Vec::new(),
            body: None,
        }
    }

    /// Creates a GET request.
    #[must_use]
    pub fn get(path: impl Into<String>) -> Self {
        Self::new(HttpMethod::Get, path)
    }

    /// Creates a POST request.
    #[must_use]
    pub fn post(path: impl Into<String>) -> Self {
        Self::new(HttpMethod::Post, path)
    }

    /// Creates a PUT request.
    #[must_use]
    pub fn put(path: impl Into<String>) -> Self {
        Self::new(HttpMethod::Put, path)
    }

    /// Creates a PATCH request.
    #[must_use]
    pub fn patch(path: impl Into<String>) -> Self {
        Self::new(HttpMethod::Patch, path)
    }

    /// Creates a DELETE request.
    #[must_use]
    pub fn delete(path: impl Into<String>) -> Self {
        Self::new(HttpMethod::Delete, path)
    }

    /// Renames the request.
    #[must_use]
    pub fn named(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    /// Appends a query parameter.
    #[must_use]
    pub fn with_query(mut self, key: impl Into<String>, value: impl ToString) -> Self {
        self.query.push(QueryParam::new(key, value.to_string()));
        self
    }

    /// Sets the JSON body.
    #[must_use]
    pub fn with_json(mut self, body: Value) -> Self {
        self.body = Some(body);
        self
    }

    /// Checks that the request is well-formed before it is sent.
    ///
    /// # Errors
    ///
    /// Returns an error if the path is empty or not rooted, or if a body is
    /// attached to a method that does not carry one.
    pub fn validate(&self) -> DomainResult<()> {
        let path = self.path.trim();
        if path.is_empty() {
            return Err(DomainError::InvalidPath("path is required".to_string()));
        }
        if !path.starts_with('/') {
            return Err(DomainError::InvalidPath(format!(
                "path must start with '/': {path}"
            )));
        }
        if self.body.is_some() && !self.method.has_body() {
            return Err(DomainError::InvalidBody(format!(
                "{} requests do not carry a body",
                self.method
            )));
        }
        Ok(())
    }
}
