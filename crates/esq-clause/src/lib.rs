//! Query clause model for esq search compilation.
//!
//! This crate provides the building blocks that esq compiles search intents
//! into: a closed set of query clause variants, each able to render itself to
//! a raw JSON document fragment:
//!
//! - **Term-level**: `term`, `terms`, `range`, `exists`, `fuzzy`, `regexp`,
//!   `wildcard`, `ids`
//! - **Text**: `match`, `multi_match`
//! - **Constant**: `match_all`, `match_none`
//! - **Compound**: `bool` with `must` / `should` / `must_not` / `filter` roles
//!
//! Every clause carries a boost factor (default 1.0) that is merged into its
//! raw form. Compound clauses additionally accept raw key/value pairs so
//! callers can splice opaque content (such as template placeholders) into the
//! rendered document.
//!
//! # Example
//!
//! ```
//! use esq_clause::Clause;
//!
//! let clause = Clause::match_field("title", "running shoes").boost(2.0);
//! let raw = clause.to_raw();
//! assert_eq!(raw["match"]["title"]["boost"], 2.0);
//! ```

#![warn(missing_docs)]

mod boolean;
mod clause;

pub use boolean::{BoolQuery, RoleBuilder};
pub use clause::{Clause, ClauseKind, RangeBounds};
