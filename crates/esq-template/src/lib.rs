//! Template markers and mustache macro expansion for esq.
//!
//! A compiled query document is pure JSON, but a persisted search template
//! needs mustache control syntax — which is not valid JSON and cannot ride
//! through a JSON serializer. This crate bridges the two with a small macro
//! language:
//!
//! - a [`Marker`] is a tagged placeholder carried through the document tree
//!   as an ordinary string leaf (`"@var(size,10)"`, `"@json(filters)"`, ...);
//! - [`expand`] serializes the finished document and textually rewrites each
//!   marker into its mustache equivalent, leaving everything else untouched.
//!
//! # Example
//!
//! ```
//! use esq_template::{Marker, expand};
//! use serde_json::json;
//!
//! let size = Marker::var("size", "10").unwrap();
//! let doc = json!({ "size": size.value(), "query": { "match_all": {} } });
//!
//! let source = expand(&doc).unwrap();
//! assert!(source.contains("{{size}}{{^size}}10{{/size}}"));
//! ```

#![warn(missing_docs)]

mod error;
mod expand;
mod marker;

pub use error::TemplateError;
pub use expand::expand;
pub use marker::Marker;
