//! The search specification: a single query intent and its raw document.
//!
//! A [`Search`] accumulates everything one request needs — index, result
//! window, requested fields, sort, highlighting, the root query clause, an
//! opaque aggregation tree, and raw key overrides — and assembles the final
//! raw document with [`Search::to_raw`]. Execution and template persistence
//! are delegated to a [`Connection`] collaborator.

use esq_clause::Clause;
use esq_template::{Marker, expand};
use serde_json::{Map, Value, json};

use crate::{
    error::SearchError,
    highlight::HighlightField,
    sort::{Direction, SortEntry},
    transport::{Connection, Response},
};

/// Default number of results per page.
const DEFAULT_SIZE: u64 = 500;

/// No-match excerpt size for the top-level highlight block.
const HIGHLIGHT_NO_MATCH_SIZE: u64 = 100;

/// A result-window parameter: a literal count or an unresolved placeholder.
#[derive(Debug, Clone, PartialEq)]
pub enum WindowValue {
    /// A resolved literal.
    Literal(u64),
    /// A template placeholder resolved at render time.
    Template(Marker),
}

impl WindowValue {
    /// Renders the parameter to its wire form.
    fn to_raw(&self) -> Value {
        match self {
            Self::Literal(n) => json!(n),
            Self::Template(marker) => marker.value(),
        }
    }
}

/// A single search intent, consumed once by `to_raw`/`get`/`save`.
#[derive(Debug, Clone, PartialEq)]
pub struct Search {
    /// Target index name.
    index: String,
    /// Root query clause.
    query: Clause,
    /// Result offset.
    from: WindowValue,
    /// Page size.
    size: WindowValue,
    /// Requested output fields (`_source`).
    fields: Vec<String>,
    /// Sort entries in application order.
    sort: Vec<SortEntry>,
    /// Highlighted fields in application order; last write per field wins.
    highlight: Vec<(String, HighlightField)>,
    /// Opaque aggregation tree; present in output iff non-empty.
    aggs: Map<String, Value>,
    /// Raw overrides in application order; merged last.
    raw: Vec<(String, Value)>,
}

impl Search {
    /// Creates a defaulted search against an index: match-all query, window
    /// `0..500`, all source fields, no sort, no highlighting.
    pub fn new(index: impl Into<String>) -> Self {
        Self {
            index: index.into(),
            query: Clause::match_all(),
            from: WindowValue::Literal(0),
            size: WindowValue::Literal(DEFAULT_SIZE),
            fields: vec!["*".to_string()],
            sort: Vec::new(),
            highlight: Vec::new(),
            aggs: Map::new(),
            raw: Vec::new(),
        }
    }

    /// Returns the target index name.
    pub fn index(&self) -> &str {
        &self.index
    }

    /// Replaces the root query clause.
    pub fn query(&mut self, query: Clause) -> &mut Self {
        self.query = query;
        self
    }

    /// Replaces the requested output fields.
    pub fn fields(&mut self, fields: impl IntoIterator<Item = impl Into<String>>) -> &mut Self {
        self.fields = fields.into_iter().map(Into::into).collect();
        self
    }

    /// Sets the result offset to a literal.
    pub fn from(&mut self, from: u64) -> &mut Self {
        self.from = WindowValue::Literal(from);
        self
    }

    /// Sets the result offset to a template placeholder.
    pub fn from_marker(&mut self, marker: Marker) -> &mut Self {
        self.from = WindowValue::Template(marker);
        self
    }

    /// Sets the page size to a literal.
    pub fn size(&mut self, size: u64) -> &mut Self {
        self.size = WindowValue::Literal(size);
        self
    }

    /// Sets the page size to a template placeholder.
    pub fn size_marker(&mut self, marker: Marker) -> &mut Self {
        self.size = WindowValue::Template(marker);
        self
    }

    /// Appends a sort entry.
    ///
    /// The sentinel field `_score` sorts by relevance and takes no
    /// direction; any other field without a direction is a configuration
    /// error.
    pub fn sort(
        &mut self,
        field: impl Into<String>,
        direction: Option<Direction>,
    ) -> Result<&mut Self, SearchError> {
        self.sort.push(SortEntry::new(field, direction)?);
        Ok(self)
    }

    /// Appends a pre-built sort entry.
    pub fn sort_entry(&mut self, entry: SortEntry) -> &mut Self {
        self.sort.push(entry);
        self
    }

    /// Configures highlighting for a field with the given wrapping tags.
    pub fn highlight(
        &mut self,
        field: impl Into<String>,
        pre_tag: impl Into<String>,
        post_tag: impl Into<String>,
    ) -> &mut Self {
        self.highlight
            .push((field.into(), HighlightField::new(pre_tag, post_tag)));
        self
    }

    /// Replaces the aggregation tree with an opaque raw value.
    ///
    /// Aggregation construction is a collaborator concern; the search only
    /// splices the finished tree into the output document.
    pub fn aggs(&mut self, aggs: Map<String, Value>) -> &mut Self {
        self.aggs = aggs;
        self
    }

    /// Injects a raw key/value override into the output document.
    ///
    /// Overrides are merged after all computed keys, so they may shadow any
    /// of them; later writes win on key collision.
    pub fn add_raw(&mut self, key: impl Into<String>, value: Value) -> &mut Self {
        self.raw.push((key.into(), value));
        self
    }

    /// Assembles the final raw query document.
    ///
    /// Assembly is deterministic: identical configuration always yields
    /// byte-identical serialized output.
    pub fn to_raw(&self) -> Value {
        let mut doc = Map::new();
        doc.insert("_source".to_string(), json!(self.fields));
        doc.insert("query".to_string(), self.query.to_raw());
        doc.insert("from".to_string(), self.from.to_raw());
        doc.insert("size".to_string(), self.size.to_raw());

        let sort: Vec<Value> = self.sort.iter().map(SortEntry::to_raw).collect();
        doc.insert("sort".to_string(), Value::Array(sort));

        let mut highlight_fields = Map::new();
        for (field, settings) in &self.highlight {
            highlight_fields.insert(field.clone(), settings.to_raw());
        }
        doc.insert(
            "highlight".to_string(),
            json!({
                "force_source": true,
                "no_match_size": HIGHLIGHT_NO_MATCH_SIZE,
                "fields": highlight_fields,
            }),
        );

        for (key, value) in &self.raw {
            doc.insert(key.clone(), value.clone());
        }

        if !self.aggs.is_empty() {
            doc.insert("aggs".to_string(), Value::Object(self.aggs.clone()));
        }

        Value::Object(doc)
    }

    /// Executes the search and returns the engine response.
    pub fn get(&self, connection: &dyn Connection) -> Result<Response, SearchError> {
        let raw = self.to_raw();
        Ok(connection.search(&self.index, &raw)?)
    }

    /// Executes the search without DSL pre-extraction.
    ///
    /// Identical to [`Search::get`]; kept for symmetry with callers that
    /// want the untouched engine response.
    pub fn response(&self, connection: &dyn Connection) -> Result<Response, SearchError> {
        self.get(connection)
    }

    /// Expands the document into template source and persists it under
    /// `name`, returning the store's acknowledgement.
    ///
    /// Any marker or transport error aborts before submission; a partial
    /// template is never persisted.
    pub fn save(&self, connection: &dyn Connection, name: &str) -> Result<bool, SearchError> {
        let source = expand(&self.to_raw())?;
        let body = json!({
            "script": {
                "lang": "mustache",
                "source": source,
            }
        });
        let response = connection.put_template(name, &body)?;
        Ok(response.acknowledged())
    }
}
