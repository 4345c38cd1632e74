//! Boolean compound queries.
//!
//! A [`BoolQuery`] owns ordered sub-clauses partitioned into the four boolean
//! roles (`must`, `should`, `must_not`, `filter`). Role accessors return a
//! [`RoleBuilder`] for appending structured clauses; [`BoolQuery::add_raw`]
//! splices opaque key/value content into the rendered body, shadowing any
//! computed role of the same name. Raw injection is how template placeholders
//! ride inside an otherwise structured query.

use serde_json::{Map, Value, json};

use crate::clause::Clause;

/// A boolean composition of sub-clauses.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct BoolQuery {
    /// Clauses that must match and contribute to the score.
    must: Vec<Clause>,
    /// Clauses of which at least one should match.
    should: Vec<Clause>,
    /// Clauses that must not match.
    must_not: Vec<Clause>,
    /// Clauses that must match without scoring.
    filter: Vec<Clause>,
    /// Raw keys merged into the body after the structured roles.
    raw: Vec<(String, Value)>,
}

impl BoolQuery {
    /// Creates an empty boolean query.
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns a builder for the `must` role.
    pub fn must(&mut self) -> RoleBuilder<'_> {
        RoleBuilder {
            clauses: &mut self.must,
        }
    }

    /// Returns a builder for the `should` role.
    pub fn should(&mut self) -> RoleBuilder<'_> {
        RoleBuilder {
            clauses: &mut self.should,
        }
    }

    /// Returns a builder for the `must_not` role.
    pub fn must_not(&mut self) -> RoleBuilder<'_> {
        RoleBuilder {
            clauses: &mut self.must_not,
        }
    }

    /// Returns a builder for the `filter` role.
    pub fn filter(&mut self) -> RoleBuilder<'_> {
        RoleBuilder {
            clauses: &mut self.filter,
        }
    }

    /// Injects a raw key/value pair into the rendered body.
    ///
    /// Raw entries are applied after the structured roles, so a raw `should`
    /// shadows any structured `should` clauses. Later writes win on key
    /// collision.
    pub fn add_raw(&mut self, key: impl Into<String>, value: Value) -> &mut Self {
        self.raw.push((key.into(), value));
        self
    }

    /// Returns the structured clauses of the `should` role.
    pub fn should_clauses(&self) -> &[Clause] {
        &self.should
    }

    /// Renders the boolean body with the default boost.
    pub fn to_raw(&self) -> Value {
        self.to_raw_with_boost(1.0)
    }

    /// Renders the boolean body with an explicit boost factor.
    ///
    /// Only non-empty roles appear; raw entries are merged last.
    pub(crate) fn to_raw_with_boost(&self, boost: f64) -> Value {
        let mut body = Map::new();

        let roles: [(&str, &[Clause]); 4] = [
            ("must", &self.must),
            ("should", &self.should),
            ("must_not", &self.must_not),
            ("filter", &self.filter),
        ];
        for (name, clauses) in roles {
            if !clauses.is_empty() {
                let rendered: Vec<Value> = clauses.iter().map(Clause::to_raw).collect();
                body.insert(name.to_string(), Value::Array(rendered));
            }
        }

        body.insert("boost".to_string(), json!(boost));

        for (key, value) in &self.raw {
            body.insert(key.clone(), value.clone());
        }

        json!({ "bool": body })
    }
}

/// Appends clauses to one role of a [`BoolQuery`].
pub struct RoleBuilder<'a> {
    /// The role's clause list.
    clauses: &'a mut Vec<Clause>,
}

impl RoleBuilder<'_> {
    /// Appends a structured clause to the role.
    pub fn query(&mut self, clause: Clause) -> &mut Self {
        self.clauses.push(clause);
        self
    }

    /// Appends a nested boolean clause configured by the closure.
    pub fn bool(&mut self, build: impl FnOnce(&mut BoolQuery)) -> &mut Self {
        let mut nested = BoolQuery::new();
        build(&mut nested);
        self.clauses.push(Clause::bool(nested));
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_roles_are_omitted() {
        let raw = BoolQuery::new().to_raw();
        assert_eq!(raw, json!({ "bool": { "boost": 1.0 } }));
    }

    #[test]
    fn clauses_render_under_their_role() {
        let mut query = BoolQuery::new();
        query.must().query(Clause::term("color", "red"));
        query.should().query(Clause::exists("stock"));
        query.must_not().query(Clause::term("state", "archived"));
        query.filter().query(Clause::exists("price"));

        let raw = query.to_raw();
        assert_eq!(raw["bool"]["must"][0]["term"]["color"]["value"], "red");
        assert_eq!(raw["bool"]["should"][0]["exists"]["field"], "stock");
        assert_eq!(
            raw["bool"]["must_not"][0]["term"]["state"]["value"],
            "archived"
        );
        assert_eq!(raw["bool"]["filter"][0]["exists"]["field"], "price");
    }

    #[test]
    fn sub_clause_order_is_preserved() {
        let mut query = BoolQuery::new();
        query
            .should()
            .query(Clause::term("a", 1))
            .query(Clause::term("b", 2));

        let raw = query.to_raw();
        let should = raw["bool"]["should"].as_array().unwrap();
        assert!(should[0]["term"].get("a").is_some());
        assert!(should[1]["term"].get("b").is_some());
    }

    #[test]
    fn nested_bool_builder() {
        let mut query = BoolQuery::new();
        query.must().bool(|inner| {
            inner.should().query(Clause::match_all());
        });

        let raw = query.to_raw();
        assert!(raw["bool"]["must"][0]["bool"]["should"][0]["match_all"].is_object());
    }

    #[test]
    fn raw_entry_shadows_structured_role() {
        let mut query = BoolQuery::new();
        query.should().query(Clause::term("a", 1));
        query.add_raw("should", json!("@query([])@endquery"));

        let raw = query.to_raw();
        assert_eq!(raw["bool"]["should"], "@query([])@endquery");
    }

    #[test]
    fn raw_last_writer_wins() {
        let mut query = BoolQuery::new();
        query.add_raw("filter", json!("first"));
        query.add_raw("filter", json!("second"));

        let raw = query.to_raw();
        assert_eq!(raw["bool"]["filter"], "second");
    }
}
