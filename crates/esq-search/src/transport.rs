//! Transport collaborator interface.
//!
//! The core never performs I/O itself: query execution and template
//! persistence go through a [`Connection`], a synchronous collaborator with
//! a success/failure outcome per call. Retries, timeouts, and cancellation
//! belong to the implementation behind this trait, not to the core.

use serde_json::Value;
use thiserror::Error;

/// An opaque transport failure, propagated unchanged by the core.
#[derive(Debug, Error)]
#[error("transport error: {message}")]
pub struct TransportError {
    /// Human-readable description from the transport implementation.
    message: String,
}

impl TransportError {
    /// Creates a transport error with the given description.
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

/// Executes raw search documents and persists named templates.
pub trait Connection {
    /// Executes `body` as an immediate search against `index`.
    fn search(&self, index: &str, body: &Value) -> Result<Response, TransportError>;

    /// Creates or replaces the named stored template. Idempotent.
    fn put_template(&self, name: &str, body: &Value) -> Result<Response, TransportError>;
}

/// An opaque structured engine response with dot-path field extraction.
#[derive(Debug, Clone, PartialEq)]
pub struct Response {
    /// The raw response document.
    body: Value,
}

impl Response {
    /// Wraps a raw response document.
    pub fn new(body: Value) -> Self {
        Self { body }
    }

    /// Returns the raw response document.
    pub fn body(&self) -> &Value {
        &self.body
    }

    /// Extracts a field by dot path, e.g. `hits.total.value`.
    ///
    /// Array indices are not supported; each path segment must name an
    /// object key. Returns `None` when any segment is missing.
    pub fn path(&self, path: &str) -> Option<&Value> {
        path.split('.')
            .try_fold(&self.body, |value, segment| value.get(segment))
    }

    /// Returns the store's acknowledgement flag, `false` when absent.
    pub fn acknowledged(&self) -> bool {
        self.path("acknowledged")
            .and_then(Value::as_bool)
            .unwrap_or(false)
    }
}
