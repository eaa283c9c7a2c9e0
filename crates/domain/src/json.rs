//! Schema-less JSON documents with explicit lookups.
//!
//! Response bodies are kept as a `serde_json::Value` tree and read through
//! dotted paths (`data.id`, `token`). Every accessor reports why a lookup
//! failed, so a test can tell an absent field from one holding an
//! unexpected value.

use serde_json::Value;
use thiserror::Error;

/// Reasons a JSON lookup can fail.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum LookupError {
    /// The body was empty where a document was expected.
    #[error("response body is empty")]
    EmptyBody,

    /// The body could not be parsed as JSON.
    #[error("response body is not valid JSON: {0}")]
    NotJson(String),

    /// No field exists at the path.
    #[error("field '{path}' is missing")]
    Missing {
        /// Dotted path that was looked up.
        path: String,
    },

    /// The field exists but holds `null`.
    #[error("field '{path}' is null")]
    Null {
        /// Dotted path that was looked up.
        path: String,
    },

    /// The field exists but has a different JSON type.
    #[error("field '{path}' is {found}, expected {expected}")]
    WrongType {
        /// Dotted path that was looked up.
        path: String,
        /// Type the accessor wanted.
        expected: &'static str,
        /// Type actually found.
        found: &'static str,
    },
}

/// A parsed JSON response body.
#[derive(Debug, Clone, PartialEq)]
pub struct JsonDocument {
    root: Value,
}

impl JsonDocument {
    /// Parses a document from raw body text.
    ///
    /// # Errors
    ///
    /// Returns `EmptyBody` for blank input and `NotJson` for malformed input.
    pub fn parse(text: &str) -> Result<Self, LookupError> {
        if text.trim().is_empty() {
            return Err(LookupError::EmptyBody);
        }
        serde_json::from_str(text)
            .map(Self::from_value)
            .map_err(|e| LookupError::NotJson(e.to_string()))
    }

    /// Wraps an already parsed value.
    #[must_use]
    pub const fn from_value(root: Value) -> Self {
        Self { root }
    }

    /// Looks up the value at a dotted path. An empty path is the root.
    ///
    /// Numeric segments index into arrays (`data.0.id`).
    ///
    /// # Errors
    ///
    /// Returns `Missing` if any segment does not resolve.
    pub fn get(&self, path: &str) -> Result<&Value, LookupError> {
        if path.is_empty() {
            return Ok(&self.root);
        }
        path.split('.')
            .try_fold(&self.root, |current, segment| match current {
                Value::Object(map) => map.get(segment),
                Value::Array(items) => segment.parse::<usize>().ok().and_then(|i| items.get(i)),
                _ => None,
            })
            .ok_or_else(|| LookupError::Missing {
                path: path.to_string(),
            })
    }

    /// Looks up a present, non-null value.
    ///
    /// # Errors
    ///
    /// Returns `Missing` or `Null`.
    pub fn require(&self, path: &str) -> Result<&Value, LookupError> {
        match self.get(path)? {
            Value::Null => Err(LookupError::Null {
                path: path.to_string(),
            }),
            value => Ok(value),
        }
    }

    /// Looks up a string field.
    ///
    /// # Errors
    ///
    /// Returns `Missing`, `Null` or `WrongType`.
    pub fn str_at(&self, path: &str) -> Result<&str, LookupError> {
        let value = self.require(path)?;
        value.as_str().ok_or_else(|| LookupError::WrongType {
            path: path.to_string(),
            expected: "a string",
            found: type_name(value),
        })
    }

    /// Looks up a scalar field and renders it as text.
    ///
    /// Strings are returned as-is, numbers and booleans in their JSON form,
    /// so an id of `2` and an id of `"2"` both read as `"2"`.
    ///
    /// # Errors
    ///
    /// Returns `Missing`, `Null` or `WrongType` for arrays and objects.
    pub fn text_at(&self, path: &str) -> Result<String, LookupError> {
        match self.require(path)? {
            Value::String(s) => Ok(s.clone()),
            Value::Number(n) => Ok(n.to_string()),
            Value::Bool(b) => Ok(b.to_string()),
            other => Err(LookupError::WrongType {
                path: path.to_string(),
                expected: "a scalar",
                found: type_name(other),
            }),
        }
    }

    /// Returns true if the document has no content (`null`, `{}`, `[]`, `""`).
    #[must_use]
    pub fn is_empty(&self) -> bool {
        match &self.root {
            Value::Null => true,
            Value::Object(map) => map.is_empty(),
            Value::Array(items) => items.is_empty(),
            Value::String(s) => s.is_empty(),
            Value::Bool(_) | Value::Number(_) => false,
        }
    }
}

const fn type_name(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}
