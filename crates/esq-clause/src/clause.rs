//! Query clause variants and their raw document forms.
//!
//! A [`Clause`] is a context-independent query fragment: it can always render
//! itself to a raw JSON structure without knowing where in a larger query it
//! will be placed. Construction is purely additive and never fails.

use serde_json::{Map, Value, json};

use crate::boolean::BoolQuery;

/// The closed set of query clause variants.
#[derive(Debug, Clone, PartialEq)]
pub enum ClauseKind {
    /// Exact value match on a single field.
    Term {
        /// Field to match against.
        field: String,
        /// Value that must appear verbatim.
        value: Value,
    },

    /// Match any of several exact values on a single field.
    Terms {
        /// Field to match against.
        field: String,
        /// Accepted values.
        values: Vec<Value>,
    },

    /// Numeric or date range match.
    Range {
        /// Field to compare.
        field: String,
        /// The configured bounds.
        bounds: RangeBounds,
    },

    /// Matches documents where the field has any value.
    Exists {
        /// Field that must be present.
        field: String,
    },

    /// Edit-distance match on a single field.
    Fuzzy {
        /// Field to match against.
        field: String,
        /// Value to match within edit distance.
        value: String,
    },

    /// Regular expression match on a single field.
    Regex {
        /// Field to match against.
        field: String,
        /// The regular expression pattern.
        pattern: String,
    },

    /// Wildcard match (`*` and `?`) on a single field.
    Wildcard {
        /// Field to match against.
        field: String,
        /// The wildcard pattern.
        value: String,
    },

    /// Match documents by identifier.
    Ids {
        /// Document identifiers to match.
        values: Vec<String>,
    },

    /// Matches every document.
    MatchAll,

    /// Matches no document.
    MatchNone,

    /// Analyzed full-text match on a single field.
    Match {
        /// Field to search.
        field: String,
        /// Query text.
        query: String,
        /// Optional fuzziness setting (e.g. `AUTO:3,6`).
        fuzziness: Option<String>,
    },

    /// Analyzed full-text match across several fields.
    MultiMatch {
        /// Fields to search.
        fields: Vec<String>,
        /// Query text.
        query: String,
    },

    /// Boolean composition of sub-clauses.
    Bool(BoolQuery),
}

/// Bounds for a [`ClauseKind::Range`] clause.
///
/// All bounds are optional; only configured bounds appear in the raw form.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct RangeBounds {
    /// Exclusive lower bound.
    pub gt: Option<Value>,
    /// Inclusive lower bound.
    pub gte: Option<Value>,
    /// Exclusive upper bound.
    pub lt: Option<Value>,
    /// Inclusive upper bound.
    pub lte: Option<Value>,
}

impl RangeBounds {
    /// Renders the configured bounds as a JSON object.
    fn to_map(&self) -> Map<String, Value> {
        let mut map = Map::new();
        if let Some(gt) = &self.gt {
            map.insert("gt".to_string(), gt.clone());
        }
        if let Some(gte) = &self.gte {
            map.insert("gte".to_string(), gte.clone());
        }
        if let Some(lt) = &self.lt {
            map.insert("lt".to_string(), lt.clone());
        }
        if let Some(lte) = &self.lte {
            map.insert("lte".to_string(), lte.clone());
        }
        map
    }
}

/// A query clause: a variant plus a boost factor.
///
/// The boost multiplies the clause's contribution to the relevance score and
/// is merged into the variant's raw form when rendered.
#[derive(Debug, Clone, PartialEq)]
pub struct Clause {
    /// The clause variant.
    kind: ClauseKind,
    /// Relevance weight, default 1.0.
    boost: f64,
}

impl Clause {
    /// Wraps a variant with the default boost.
    pub fn new(kind: ClauseKind) -> Self {
        Self { kind, boost: 1.0 }
    }

    /// Creates a `term` clause.
    pub fn term(field: impl Into<String>, value: impl Into<Value>) -> Self {
        Self::new(ClauseKind::Term {
            field: field.into(),
            value: value.into(),
        })
    }

    /// Creates a `terms` clause.
    pub fn terms(field: impl Into<String>, values: Vec<Value>) -> Self {
        Self::new(ClauseKind::Terms {
            field: field.into(),
            values,
        })
    }

    /// Creates a `range` clause.
    pub fn range(field: impl Into<String>, bounds: RangeBounds) -> Self {
        Self::new(ClauseKind::Range {
            field: field.into(),
            bounds,
        })
    }

    /// Creates an `exists` clause.
    pub fn exists(field: impl Into<String>) -> Self {
        Self::new(ClauseKind::Exists {
            field: field.into(),
        })
    }

    /// Creates a `fuzzy` clause.
    pub fn fuzzy(field: impl Into<String>, value: impl Into<String>) -> Self {
        Self::new(ClauseKind::Fuzzy {
            field: field.into(),
            value: value.into(),
        })
    }

    /// Creates a `regexp` clause.
    pub fn regex(field: impl Into<String>, pattern: impl Into<String>) -> Self {
        Self::new(ClauseKind::Regex {
            field: field.into(),
            pattern: pattern.into(),
        })
    }

    /// Creates a `wildcard` clause.
    pub fn wildcard(field: impl Into<String>, value: impl Into<String>) -> Self {
        Self::new(ClauseKind::Wildcard {
            field: field.into(),
            value: value.into(),
        })
    }

    /// Creates an `ids` clause.
    pub fn ids(values: Vec<String>) -> Self {
        Self::new(ClauseKind::Ids { values })
    }

    /// Creates a `match_all` clause.
    pub fn match_all() -> Self {
        Self::new(ClauseKind::MatchAll)
    }

    /// Creates a `match_none` clause.
    pub fn match_none() -> Self {
        Self::new(ClauseKind::MatchNone)
    }

    /// Creates a `match` clause without fuzziness.
    pub fn match_field(field: impl Into<String>, query: impl Into<String>) -> Self {
        Self::new(ClauseKind::Match {
            field: field.into(),
            query: query.into(),
            fuzziness: None,
        })
    }

    /// Creates a `match` clause with an explicit fuzziness setting.
    pub fn match_with_fuzziness(
        field: impl Into<String>,
        query: impl Into<String>,
        fuzziness: Option<String>,
    ) -> Self {
        Self::new(ClauseKind::Match {
            field: field.into(),
            query: query.into(),
            fuzziness,
        })
    }

    /// Creates a `multi_match` clause.
    pub fn multi_match(query: impl Into<String>, fields: Vec<String>) -> Self {
        Self::new(ClauseKind::MultiMatch {
            fields,
            query: query.into(),
        })
    }

    /// Wraps a boolean compound query as a clause.
    pub fn bool(query: BoolQuery) -> Self {
        Self::new(ClauseKind::Bool(query))
    }

    /// Builds a boolean compound clause with a configuration closure.
    pub fn bool_with(build: impl FnOnce(&mut BoolQuery)) -> Self {
        let mut query = BoolQuery::new();
        build(&mut query);
        Self::bool(query)
    }

    /// Sets the boost factor, consuming and returning the clause.
    pub fn boost(mut self, boost: f64) -> Self {
        self.boost = boost;
        self
    }

    /// Returns the clause variant.
    pub fn kind(&self) -> &ClauseKind {
        &self.kind
    }

    /// Renders the clause to its raw document fragment.
    ///
    /// The boost factor is merged into the variant's natural position, e.g.
    /// `{"match": {field: {"query": q, "boost": b}}}`. `match_none` carries
    /// no parameters and ignores boost.
    pub fn to_raw(&self) -> Value {
        let boost = self.boost;
        match &self.kind {
            ClauseKind::Term { field, value } => json!({
                "term": { field.as_str(): { "value": value, "boost": boost } }
            }),
            ClauseKind::Terms { field, values } => json!({
                "terms": { field.as_str(): values, "boost": boost }
            }),
            ClauseKind::Range { field, bounds } => {
                let mut body = bounds.to_map();
                body.insert("boost".to_string(), json!(boost));
                json!({ "range": { field.as_str(): body } })
            }
            ClauseKind::Exists { field } => json!({
                "exists": { "field": field, "boost": boost }
            }),
            ClauseKind::Fuzzy { field, value } => json!({
                "fuzzy": { field.as_str(): { "value": value, "boost": boost } }
            }),
            ClauseKind::Regex { field, pattern } => json!({
                "regexp": { field.as_str(): { "value": pattern, "boost": boost } }
            }),
            ClauseKind::Wildcard { field, value } => json!({
                "wildcard": { field.as_str(): { "value": value, "boost": boost } }
            }),
            ClauseKind::Ids { values } => json!({
                "ids": { "values": values, "boost": boost }
            }),
            ClauseKind::MatchAll => json!({ "match_all": { "boost": boost } }),
            ClauseKind::MatchNone => json!({ "match_none": {} }),
            ClauseKind::Match {
                field,
                query,
                fuzziness,
            } => {
                let mut body = Map::new();
                body.insert("query".to_string(), json!(query));
                body.insert("boost".to_string(), json!(boost));
                if let Some(fuzziness) = fuzziness {
                    body.insert("fuzziness".to_string(), json!(fuzziness));
                }
                json!({ "match": { field.as_str(): body } })
            }
            ClauseKind::MultiMatch { fields, query } => json!({
                "multi_match": { "query": query, "fields": fields, "boost": boost }
            }),
            ClauseKind::Bool(query) => query.to_raw_with_boost(boost),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn term_renders_value_and_boost() {
        let raw = Clause::term("color", "red").to_raw();
        assert_eq!(raw["term"]["color"]["value"], "red");
        assert_eq!(raw["term"]["color"]["boost"], 1.0);
    }

    #[test]
    fn boost_is_merged_into_variant_form() {
        let raw = Clause::match_field("title", "shoe").boost(3.0).to_raw();
        assert_eq!(raw["match"]["title"]["query"], "shoe");
        assert_eq!(raw["match"]["title"]["boost"], 3.0);
    }

    #[test]
    fn match_without_fuzziness_omits_key() {
        let raw = Clause::match_field("title", "shoe").to_raw();
        assert!(raw["match"]["title"].get("fuzziness").is_none());
    }

    #[test]
    fn match_with_fuzziness_includes_key() {
        let raw =
            Clause::match_with_fuzziness("title", "shoe", Some("AUTO:3,6".to_string())).to_raw();
        assert_eq!(raw["match"]["title"]["fuzziness"], "AUTO:3,6");
    }

    #[test]
    fn range_renders_configured_bounds_only() {
        let bounds = RangeBounds {
            gte: Some(json!(10)),
            lt: Some(json!(20)),
            ..RangeBounds::default()
        };
        let raw = Clause::range("price", bounds).to_raw();
        assert_eq!(raw["range"]["price"]["gte"], 10);
        assert_eq!(raw["range"]["price"]["lt"], 20);
        assert!(raw["range"]["price"].get("gt").is_none());
        assert!(raw["range"]["price"].get("lte").is_none());
    }

    #[test]
    fn match_all_carries_boost() {
        let raw = Clause::match_all().boost(0.5).to_raw();
        assert_eq!(raw["match_all"]["boost"], 0.5);
    }

    #[test]
    fn match_none_has_empty_body() {
        let raw = Clause::match_none().to_raw();
        assert_eq!(raw, json!({ "match_none": {} }));
    }

    #[test]
    fn ids_renders_values() {
        let raw = Clause::ids(vec!["1".to_string(), "2".to_string()]).to_raw();
        assert_eq!(raw["ids"]["values"], json!(["1", "2"]));
    }

    #[test]
    fn multi_match_renders_fields() {
        let raw = Clause::multi_match("shoe", vec!["title".to_string(), "body".to_string()])
            .boost(2.0)
            .to_raw();
        assert_eq!(raw["multi_match"]["query"], "shoe");
        assert_eq!(raw["multi_match"]["fields"], json!(["title", "body"]));
        assert_eq!(raw["multi_match"]["boost"], 2.0);
    }

    #[test]
    fn rendering_is_context_independent() {
        let clause = Clause::exists("stock");
        let alone = clause.to_raw();
        let nested = Clause::bool_with(|b| {
            b.must().query(clause.clone());
        })
        .to_raw();
        assert_eq!(nested["bool"]["must"][0], alone);
    }
}
