//! Error types for the esq-template crate.

use thiserror::Error;

/// Errors that can occur when constructing markers or expanding templates.
#[derive(Debug, Error)]
pub enum TemplateError {
    /// A marker name violates the marker grammar.
    #[error("invalid marker name '{0}': expected one or more lowercase letters")]
    InvalidName(String),

    /// A marker default value violates the marker grammar.
    #[error("invalid marker default '{0}': expected lowercase letters, digits, or commas")]
    InvalidDefault(String),

    /// A block marker payload is not valid JSON.
    #[error("marker payload is not valid JSON: {0}")]
    InvalidPayload(String),

    /// The document could not be serialized to JSON text.
    #[error("failed to serialize document: {0}")]
    Serialize(#[from] serde_json::Error),
}
