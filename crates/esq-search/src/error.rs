//! Error types for the esq-search crate.

use thiserror::Error;

use crate::transport::TransportError;

/// Errors that can occur when configuring, compiling, or submitting a search.
///
/// Configuration and template errors are raised at the call that introduces
/// the bad state; transport errors are the collaborator's failures passed
/// through unchanged. Nothing is ever persisted after an error.
#[derive(Debug, Error)]
pub enum SearchError {
    /// Malformed search configuration (weights, fields, sort entries).
    #[error("invalid search configuration: {0}")]
    Configuration(String),

    /// A template marker could not be constructed or expanded.
    #[error(transparent)]
    Template(#[from] esq_template::TemplateError),

    /// The transport collaborator failed; opaque to the core.
    #[error(transparent)]
    Transport(#[from] TransportError),
}
