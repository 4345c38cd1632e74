//! Marker expansion into mustache template source.
//!
//! Expansion is a pure, order-sensitive text rewrite over the document's JSON
//! serialization. It has to work on text rather than the structured tree:
//! the rewritten control syntax is not valid JSON, so it cannot round-trip
//! through a serializer. Each rewrite consumes the quoted marker string
//! wholesale, including its surrounding quotes.

use std::sync::LazyLock;

use regex::Regex;
use serde_json::Value;

use crate::error::TemplateError;

/// Matches a quoted `@json(name)` marker.
static JSON_VAR: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r#""@json\(([a-z]+)\)""#).expect("static pattern"));

/// Matches a quoted `@var(name,default)` marker.
static VAR: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r#""@var\(([a-z]+),([a-z0-9,]+)\)""#).expect("static pattern"));

/// Matches the quoted `@query(payload)@endquery` marker.
static QUERY_BLOCK: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r#""@query\((.+)\)@endquery""#).expect("static pattern"));

/// Matches the quoted `@sorting(payload)@endsorting` marker.
static SORT_BLOCK: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r#""@sorting\((.+)\)@endsorting""#).expect("static pattern"));

/// The fallback document used when no `query` variable is bound.
const MATCH_ALL_FALLBACK: &str = r#"{"match_all": {}}"#;

/// Expands all markers in `doc` into mustache template source.
///
/// Rewrites run in a fixed order: `@json`, then `@var`, then the single
/// `@query` block, then the single `@sorting` block. Content outside
/// marker-bearing string leaves is left byte-for-byte intact, so a document
/// without markers expands to exactly its JSON serialization.
///
/// # Errors
///
/// Returns [`TemplateError::InvalidPayload`] when a block marker's payload is
/// not valid JSON after unescaping — expansion fails rather than producing a
/// corrupt template.
pub fn expand(doc: &Value) -> Result<String, TemplateError> {
    let mut source = serde_json::to_string(doc)?;

    source = JSON_VAR
        .replace_all(&source, "{{#toJson}}$1{{/toJson}}")
        .into_owned();

    source = VAR
        .replace_all(&source, "{{$1}}{{^$1}}$2{{/$1}}")
        .into_owned();

    if let Some(captures) = QUERY_BLOCK.captures(&source) {
        let payload = unescape(&captures[1]);
        check_payload(&payload)?;
        let rewritten = format!(
            "{{{{#query}}}}{payload}{{{{/query}}}} {{{{^query}}}}{MATCH_ALL_FALLBACK}{{{{/query}}}}"
        );
        let range = captures.get(0).expect("whole match").range();
        source.replace_range(range, &rewritten);
    }

    if let Some(captures) = SORT_BLOCK.captures(&source) {
        let payload = unescape(&captures[1]);
        check_payload(&payload)?;
        let rewritten = format!(
            "{{{{^sort.isEmpty}}}}{{{{#toJson}}}}sort{{{{/toJson}}}}{{{{/sort.isEmpty}}}} {{{{^sort}}}}{payload}{{{{/sort}}}}"
        );
        let range = captures.get(0).expect("whole match").range();
        source.replace_range(range, &rewritten);
    }

    Ok(source)
}

/// Removes one level of JSON string escaping from a block payload.
///
/// Payloads are JSON text embedded inside a JSON string leaf, so their quotes
/// and backslashes arrive escaped. Each backslash is dropped and the
/// following character kept literally, undoing exactly one escaping level.
fn unescape(payload: &str) -> String {
    let mut out = String::with_capacity(payload.len());
    let mut chars = payload.chars();
    while let Some(c) = chars.next() {
        if c == '\\' {
            if let Some(next) = chars.next() {
                out.push(next);
            }
        } else {
            out.push(c);
        }
    }
    out
}

/// Fails expansion when a block payload is not syntactically valid JSON.
fn check_payload(payload: &str) -> Result<(), TemplateError> {
    serde_json::from_str::<Value>(payload)
        .map(|_| ())
        .map_err(|_| TemplateError::InvalidPayload(payload.to_string()))
}
