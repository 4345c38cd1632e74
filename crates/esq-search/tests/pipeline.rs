//! End-to-end tests for the compile-and-persist pipeline.
//!
//! These cover the full flow: field-level options compile into a search,
//! the search renders a raw document carrying template placeholders, and
//! saving expands those placeholders into mustache source submitted to the
//! template store.

// Integration tests live outside cfg(test) by design
#![allow(clippy::tests_outside_test_module)]

use std::cell::RefCell;

use esq_search::{Connection, Direction, Response, SearchOptions, SortEntry, TransportError};
use serde_json::{Value, json};

/// A connection double that records template submissions.
#[derive(Default)]
struct RecordingConnection {
    /// Recorded `(name, body)` pairs from `put_template`.
    templates: RefCell<Vec<(String, Value)>>,
}

impl Connection for RecordingConnection {
    fn search(&self, _index: &str, _body: &Value) -> Result<Response, TransportError> {
        Ok(Response::new(json!({ "hits": { "total": { "value": 0 } } })))
    }

    fn put_template(&self, name: &str, body: &Value) -> Result<Response, TransportError> {
        self.templates
            .borrow_mut()
            .push((name.to_string(), body.clone()));
        Ok(Response::new(json!({ "acknowledged": true })))
    }
}

/// Builds a representative storefront search intent.
fn storefront_options() -> SearchOptions {
    SearchOptions::new("products")
        .query("running shoe")
        .fields(["title", "description"])
        .weight("title", 3.0)
        .typo_tolerant_fields(["title"])
        .filterable()
        .sortable()
        .sorts([SortEntry::new("price", Some(Direction::Asc)).unwrap()])
        .highlighting(["title"], "<em>", "</em>")
        .size(24)
}

#[test]
fn saved_template_contains_each_conditional_region() {
    let connection = RecordingConnection::default();

    let acknowledged = storefront_options()
        .save(&connection, "products-search")
        .unwrap();
    assert!(acknowledged);

    let templates = connection.templates.borrow();
    assert_eq!(templates.len(), 1);
    assert_eq!(templates[0].0, "products-search");

    let body = &templates[0].1;
    assert_eq!(body["script"]["lang"], "mustache");
    let source = body["script"]["source"].as_str().unwrap();

    // Filter slot: dump the bound filters variable as JSON.
    assert!(source.contains("{{#toJson}}filters{{/toJson}}"));
    // Page size: bound variable with the configured default.
    assert!(source.contains("{{size}}{{^size}}24{{/size}}"));
    // Query region: bound query, else match-all.
    assert!(source.contains("{{#query}}"));
    assert!(source.contains(r#"{{^query}}{"match_all": {}}{{/query}}"#));
    // Sort region: non-empty bound sort, else the default literal.
    assert!(source.contains("{{^sort.isEmpty}}{{#toJson}}sort{{/toJson}}{{/sort.isEmpty}}"));
    assert!(source.contains(r#"{{^sort}}[{"price":"asc"}]{{/sort}}"#));
}

#[test]
fn fallback_literals_appear_exactly_once() {
    let connection = RecordingConnection::default();

    storefront_options().save(&connection, "t").unwrap();

    let templates = connection.templates.borrow();
    let source = templates[0].1["script"]["source"].as_str().unwrap();

    assert_eq!(source.matches("match_all").count(), 1);
    assert_eq!(source.matches(r#"[{"price":"asc"}]"#).count(), 1);
}

#[test]
fn no_markers_expand_to_plain_serialization() {
    let connection = RecordingConnection::default();

    let mut search = esq_search::SearchBuilder::new("products").term("brand", "nike");
    search.size(10);
    search.save(&connection, "plain").unwrap();

    let templates = connection.templates.borrow();
    let source = templates[0].1["script"]["source"].as_str().unwrap();
    assert_eq!(source, serde_json::to_string(&search.to_raw()).unwrap());
}

#[test]
fn weighted_should_clauses_survive_into_template_source() {
    let connection = RecordingConnection::default();

    storefront_options().save(&connection, "t").unwrap();

    let templates = connection.templates.borrow();
    let source = templates[0].1["script"]["source"].as_str().unwrap();

    // The per-field clauses re-appear unescaped inside the query region.
    assert!(source.contains(r#""boost":3.0"#));
    assert!(source.contains(r#""fuzziness":"AUTO:3,6""#));
    assert!(source.contains(r#""query":"running shoe""#));
}

#[test]
fn degenerate_intent_compiles_to_permissive_document() {
    // No fields, no filter: nothing constrains the query.
    let raw = SearchOptions::new("products").compile().unwrap().to_raw();

    let must = raw["query"]["bool"]["must"].as_array().unwrap();
    assert_eq!(must.len(), 1);
    assert!(must[0]["bool"].get("should").is_none());
    assert!(must[0]["bool"].get("filter").is_none());
}
