//! Clause-level entry points.
//!
//! [`SearchBuilder`] mirrors the clause model one-to-one: each method builds
//! a single clause, installs it as the root query of a fresh [`Search`], and
//! hands the search back for further shaping.

use esq_clause::{BoolQuery, Clause, RangeBounds};
use serde_json::Value;

use crate::search::Search;

/// Starts a [`Search`] from a single root clause.
#[derive(Debug, Clone)]
pub struct SearchBuilder {
    /// Target index name.
    index: String,
}

impl SearchBuilder {
    /// Creates a builder for the given index.
    pub fn new(index: impl Into<String>) -> Self {
        Self {
            index: index.into(),
        }
    }

    /// Installs `clause` as the root query of a fresh search.
    pub fn query(&self, clause: Clause) -> Search {
        let mut search = Search::new(&self.index);
        search.query(clause);
        search
    }

    /// Starts from a `term` clause.
    pub fn term(&self, field: impl Into<String>, value: impl Into<Value>) -> Search {
        self.query(Clause::term(field, value))
    }

    /// Starts from a `terms` clause.
    pub fn terms(&self, field: impl Into<String>, values: Vec<Value>) -> Search {
        self.query(Clause::terms(field, values))
    }

    /// Starts from a `range` clause.
    pub fn range(&self, field: impl Into<String>, bounds: RangeBounds, boost: f64) -> Search {
        self.query(Clause::range(field, bounds).boost(boost))
    }

    /// Starts from an `exists` clause.
    pub fn exists(&self, field: impl Into<String>, boost: f64) -> Search {
        self.query(Clause::exists(field).boost(boost))
    }

    /// Starts from a `fuzzy` clause.
    pub fn fuzzy(&self, field: impl Into<String>, value: impl Into<String>, boost: f64) -> Search {
        self.query(Clause::fuzzy(field, value).boost(boost))
    }

    /// Starts from a `regexp` clause.
    pub fn regex(
        &self,
        field: impl Into<String>,
        pattern: impl Into<String>,
        boost: f64,
    ) -> Search {
        self.query(Clause::regex(field, pattern).boost(boost))
    }

    /// Starts from a `wildcard` clause.
    pub fn wildcard(
        &self,
        field: impl Into<String>,
        value: impl Into<String>,
        boost: f64,
    ) -> Search {
        self.query(Clause::wildcard(field, value).boost(boost))
    }

    /// Starts from an `ids` clause.
    pub fn ids(&self, values: Vec<String>, boost: f64) -> Search {
        self.query(Clause::ids(values).boost(boost))
    }

    /// Starts from a `match_all` clause.
    pub fn match_all(&self, boost: f64) -> Search {
        self.query(Clause::match_all().boost(boost))
    }

    /// Starts from a `match_none` clause.
    pub fn match_none(&self) -> Search {
        self.query(Clause::match_none())
    }

    /// Starts from a `match` clause.
    pub fn match_field(&self, field: impl Into<String>, query: impl Into<String>, boost: f64) -> Search {
        self.query(Clause::match_field(field, query).boost(boost))
    }

    /// Starts from a `multi_match` clause.
    pub fn multi_match(&self, query: impl Into<String>, fields: Vec<String>, boost: f64) -> Search {
        self.query(Clause::multi_match(query, fields).boost(boost))
    }

    /// Starts from a boolean compound clause configured by the closure.
    pub fn bool_query(&self, build: impl FnOnce(&mut BoolQuery), boost: f64) -> Search {
        let mut query = BoolQuery::new();
        build(&mut query);
        self.query(Clause::bool(query).boost(boost))
    }
}
