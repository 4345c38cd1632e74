//! Weighted multi-field query compilation.
//!
//! [`SearchOptions`] accumulates a field-level search intent — free-text
//! query, target fields, per-field weights, typo tolerance, filtering,
//! sorting, highlighting, result shaping — and compiles it into a [`Search`]
//! whose document doubles as a persistable template: the per-field clauses
//! ride inside a query-fallback block, the filter slot is a dump-variable
//! placeholder, and the page size is an interpolation with a default.
//!
//! Degenerate configurations never fail compilation; they degrade to
//! progressively more permissive queries. An empty field list contributes no
//! query block, leaving the filter block (or match-all) in charge.

use std::collections::{BTreeMap, BTreeSet};

use esq_clause::{BoolQuery, Clause};
use esq_template::Marker;
use serde_json::Value;

use crate::{
    error::SearchError, fuzziness::auto_fuzziness, search::Search, sort::SortEntry,
    transport::Connection,
};

/// Default page size for field-level searches.
const DEFAULT_SIZE: u64 = 20;

/// Default minimum term length for one tolerated typo.
const DEFAULT_ONE_TYPO_CHARS: usize = 3;

/// Default minimum term length for two tolerated typos.
const DEFAULT_TWO_TYPO_CHARS: usize = 6;

/// A field-level search intent, consumed once by [`SearchOptions::compile`].
#[derive(Debug, Clone)]
pub struct SearchOptions {
    /// Target index name.
    index: String,
    /// Free-text query.
    query: String,
    /// Fields searched by the compiled query.
    fields: Vec<String>,
    /// Per-field boost overrides; absent fields default to 1.0.
    weight: BTreeMap<String, f64>,
    /// Fields eligible for typo tolerance.
    typo_tolerant_fields: BTreeSet<String>,
    /// Minimum term length before one typo is tolerated.
    one_typo_chars: usize,
    /// Minimum term length before two typos are tolerated.
    two_typo_chars: usize,
    /// Page size, embedded as the `size` variable's default.
    size: u64,
    /// Whether the compiled query reserves a slot for an external filter.
    filterable: bool,
    /// Whether the persisted template accepts a runtime sort override.
    sortable: bool,
    /// Default sort entries.
    sorts: Vec<SortEntry>,
    /// Fields to highlight.
    highlight_fields: Vec<String>,
    /// Tag inserted before highlighted matches.
    pre_tag: String,
    /// Tag inserted after highlighted matches.
    post_tag: String,
    /// Fields to retrieve, when narrower than the default `["*"]`.
    retrieve: Option<Vec<String>>,
}

impl SearchOptions {
    /// Creates a defaulted intent for the given index: empty query, no
    /// fields, relevance sort, page size 20, typo thresholds 3 and 6.
    pub fn new(index: impl Into<String>) -> Self {
        Self {
            index: index.into(),
            query: String::new(),
            fields: Vec::new(),
            weight: BTreeMap::new(),
            typo_tolerant_fields: BTreeSet::new(),
            one_typo_chars: DEFAULT_ONE_TYPO_CHARS,
            two_typo_chars: DEFAULT_TWO_TYPO_CHARS,
            size: DEFAULT_SIZE,
            filterable: false,
            sortable: false,
            sorts: vec![SortEntry::Score],
            highlight_fields: Vec::new(),
            pre_tag: String::new(),
            post_tag: String::new(),
            retrieve: None,
        }
    }

    /// Sets the free-text query.
    pub fn query(mut self, query: impl Into<String>) -> Self {
        self.query = query.into();
        self
    }

    /// Sets the fields searched by the compiled query.
    pub fn fields(mut self, fields: impl IntoIterator<Item = impl Into<String>>) -> Self {
        self.fields = fields.into_iter().map(Into::into).collect();
        self
    }

    /// Sets the boost for one field.
    pub fn weight(mut self, field: impl Into<String>, boost: f64) -> Self {
        self.weight.insert(field.into(), boost);
        self
    }

    /// Sets boosts for several fields at once.
    pub fn weights(mut self, weights: impl IntoIterator<Item = (impl Into<String>, f64)>) -> Self {
        for (field, boost) in weights {
            self.weight.insert(field.into(), boost);
        }
        self
    }

    /// Marks fields as eligible for typo tolerance.
    pub fn typo_tolerant_fields(
        mut self,
        fields: impl IntoIterator<Item = impl Into<String>>,
    ) -> Self {
        self.typo_tolerant_fields = fields.into_iter().map(Into::into).collect();
        self
    }

    /// Sets both typo-tolerance length thresholds.
    pub fn typo_tolerance(mut self, one_typo_chars: usize, two_typo_chars: usize) -> Self {
        self.one_typo_chars = one_typo_chars;
        self.two_typo_chars = two_typo_chars;
        self
    }

    /// Sets the minimum term length before one typo is tolerated.
    pub fn min_chars_for_one_typo(mut self, chars: usize) -> Self {
        self.one_typo_chars = chars;
        self
    }

    /// Sets the minimum term length before two typos are tolerated.
    pub fn min_chars_for_two_typo(mut self, chars: usize) -> Self {
        self.two_typo_chars = chars;
        self
    }

    /// Sets the page size, used as the `size` variable's default.
    pub fn size(mut self, size: u64) -> Self {
        self.size = size;
        self
    }

    /// Reserves a slot in the compiled query for an externally supplied
    /// filter clause (the `filters` variable; default: none).
    pub fn filterable(mut self) -> Self {
        self.filterable = true;
        self
    }

    /// Lets a bound `sort` variable override the default sorts at render
    /// time. Without this, the default sorts are emitted literally.
    pub fn sortable(mut self) -> Self {
        self.sortable = true;
        self
    }

    /// Replaces the default sort entries.
    pub fn sorts(mut self, sorts: impl IntoIterator<Item = SortEntry>) -> Self {
        self.sorts = sorts.into_iter().collect();
        self
    }

    /// Configures highlighting for the given fields with wrapping tags.
    pub fn highlighting(
        mut self,
        fields: impl IntoIterator<Item = impl Into<String>>,
        pre_tag: impl Into<String>,
        post_tag: impl Into<String>,
    ) -> Self {
        self.highlight_fields = fields.into_iter().map(Into::into).collect();
        self.pre_tag = pre_tag.into();
        self.post_tag = post_tag.into();
        self
    }

    /// Narrows the retrieved output fields.
    pub fn retrieve(mut self, fields: impl IntoIterator<Item = impl Into<String>>) -> Self {
        self.retrieve = Some(fields.into_iter().map(Into::into).collect());
        self
    }

    /// Compiles the intent into a [`Search`].
    ///
    /// The compiled root is a boolean query whose `must` role holds the
    /// filter slot (when filterable) and a wrapper carrying the per-field
    /// `should` clauses inside a query-fallback block, so the persisted
    /// template degrades to match-all when no `query` variable is bound.
    pub fn compile(self) -> Result<Search, SearchError> {
        let mut root = BoolQuery::new();

        if self.filterable {
            let filter_slot = Marker::json_var("filters")?;
            root.must().bool(|nested| {
                nested.add_raw("filter", filter_slot.value());
            });
        }

        let mut field_queries = BoolQuery::new();
        for field in &self.fields {
            let boost = self.weight.get(field).copied().unwrap_or(1.0);
            let fuzziness = self
                .typo_tolerant_fields
                .contains(field)
                .then(|| auto_fuzziness(self.one_typo_chars, self.two_typo_chars));
            field_queries.should().query(
                Clause::match_with_fuzziness(field, &self.query, fuzziness).boost(boost),
            );
        }

        let should_block = if field_queries.should_clauses().is_empty() {
            None
        } else {
            let rendered: Vec<Value> = field_queries
                .should_clauses()
                .iter()
                .map(Clause::to_raw)
                .collect();
            Some(Marker::query_block(&Value::Array(rendered)))
        };
        root.must().bool(|wrapper| {
            if let Some(block) = should_block {
                wrapper.add_raw("should", block.value());
            }
        });

        let mut search = Search::new(&self.index);
        search.query(Clause::bool(root));

        if let Some(retrieve) = self.retrieve {
            search.fields(retrieve);
        }

        if self.sortable {
            let defaults: Vec<Value> = self.sorts.iter().map(SortEntry::to_raw).collect();
            search.add_raw("sort", Marker::sort_block(&Value::Array(defaults)).value());
        } else {
            for entry in self.sorts {
                search.sort_entry(entry);
            }
        }

        for field in &self.highlight_fields {
            search.highlight(field, &self.pre_tag, &self.post_tag);
        }

        search.size_marker(Marker::var("size", self.size.to_string())?);

        Ok(search)
    }

    /// Compiles and persists the template under `name` in one step.
    pub fn save(self, connection: &dyn Connection, name: &str) -> Result<bool, SearchError> {
        self.compile()?.save(connection, name)
    }
}
