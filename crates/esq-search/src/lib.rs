//! Search spec assembly and weighted multi-field query compilation for esq.
//!
//! This crate turns a declarative search intent into two artifacts:
//!
//! - an immediate, fully-resolved query document ([`Search::to_raw`]), and
//! - a parameterized mustache template persisted under a name
//!   ([`Search::save`]), with conditional regions for the externally bound
//!   `query`, `filters`, `sort`, and `size` variables.
//!
//! [`SearchBuilder`] installs a single clause as the root query of a
//! [`Search`]. [`SearchOptions`] is the higher layer: it compiles a free-text
//! query over weighted fields with per-field typo tolerance into a boolean
//! composition, embedding template placeholders so the persisted form can
//! fall back gracefully when a variable is unbound.
//!
//! All I/O is delegated to a [`Connection`] collaborator; the core itself is
//! synchronous and never blocks.
//!
//! # Example
//!
//! ```
//! use esq_search::SearchOptions;
//!
//! let search = SearchOptions::new("products")
//!     .query("running shoe")
//!     .fields(["title", "description"])
//!     .weight("title", 3.0)
//!     .typo_tolerant_fields(["title"])
//!     .filterable()
//!     .compile()
//!     .unwrap();
//!
//! let raw = search.to_raw();
//! assert!(raw["query"]["bool"]["must"].is_array());
//! ```

#![warn(missing_docs)]

mod builder;
mod error;
mod fuzziness;
mod highlight;
mod options;
mod search;
mod sort;
mod transport;

pub use builder::SearchBuilder;
pub use error::SearchError;
pub use fuzziness::auto_fuzziness;
pub use highlight::HighlightField;
pub use options::SearchOptions;
pub use search::{Search, WindowValue};
pub use sort::{Direction, SortEntry};
pub use transport::{Connection, Response, TransportError};
