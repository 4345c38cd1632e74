//! Tagged template markers.
//!
//! Markers are validated at construction so that a marker which cannot be
//! rewritten never enters a document: names are lowercase letters, defaults
//! are lowercase letters, digits, or commas, and block payloads must already
//! be valid JSON text.

use serde_json::Value;

use crate::error::TemplateError;

/// A template placeholder carried inside a document as a string leaf.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Marker {
    /// Interpolate a bound variable, falling back to a literal default.
    Var {
        /// Variable name.
        name: String,
        /// Literal fallback when the variable is unbound.
        default: String,
    },

    /// Dump a bound variable as JSON, or nothing when unbound.
    JsonVar {
        /// Variable name.
        name: String,
    },

    /// Use the payload when a `query` variable is bound, else match-all.
    QueryBlock {
        /// JSON text substituted when `query` is bound.
        payload: String,
    },

    /// Dump a non-empty `sort` variable as JSON, else use the payload.
    SortBlock {
        /// JSON text used when `sort` is unbound or empty.
        payload: String,
    },
}

/// Checks the `[a-z]+` name grammar.
fn valid_name(name: &str) -> bool {
    !name.is_empty() && name.chars().all(|c| c.is_ascii_lowercase())
}

/// Checks the `[a-z0-9,]+` default grammar.
fn valid_default(default: &str) -> bool {
    !default.is_empty()
        && default
            .chars()
            .all(|c| c.is_ascii_lowercase() || c.is_ascii_digit() || c == ',')
}

impl Marker {
    /// Creates a value-or-default interpolation marker.
    pub fn var(name: impl Into<String>, default: impl Into<String>) -> Result<Self, TemplateError> {
        let name = name.into();
        let default = default.into();
        if !valid_name(&name) {
            return Err(TemplateError::InvalidName(name));
        }
        if !valid_default(&default) {
            return Err(TemplateError::InvalidDefault(default));
        }
        Ok(Self::Var { name, default })
    }

    /// Creates a dump-as-JSON marker.
    pub fn json_var(name: impl Into<String>) -> Result<Self, TemplateError> {
        let name = name.into();
        if !valid_name(&name) {
            return Err(TemplateError::InvalidName(name));
        }
        Ok(Self::JsonVar { name })
    }

    /// Creates a query-fallback marker from a structured payload.
    ///
    /// The payload serializes to compact JSON, so the marker is always valid.
    pub fn query_block(payload: &Value) -> Self {
        Self::QueryBlock {
            payload: payload.to_string(),
        }
    }

    /// Creates a query-fallback marker from pre-serialized JSON text.
    pub fn query_block_json(payload: impl Into<String>) -> Result<Self, TemplateError> {
        let payload = payload.into();
        validate_payload(&payload)?;
        Ok(Self::QueryBlock { payload })
    }

    /// Creates a sort-fallback marker from a structured payload.
    pub fn sort_block(payload: &Value) -> Self {
        Self::SortBlock {
            payload: payload.to_string(),
        }
    }

    /// Creates a sort-fallback marker from pre-serialized JSON text.
    pub fn sort_block_json(payload: impl Into<String>) -> Result<Self, TemplateError> {
        let payload = payload.into();
        validate_payload(&payload)?;
        Ok(Self::SortBlock { payload })
    }

    /// Encodes the marker in its textual form.
    pub fn encode(&self) -> String {
        match self {
            Self::Var { name, default } => format!("@var({name},{default})"),
            Self::JsonVar { name } => format!("@json({name})"),
            Self::QueryBlock { payload } => format!("@query({payload})@endquery"),
            Self::SortBlock { payload } => format!("@sorting({payload})@endsorting"),
        }
    }

    /// Returns the marker as a JSON string leaf for splicing into a document.
    pub fn value(&self) -> Value {
        Value::String(self.encode())
    }
}

/// Rejects payload text that is not syntactically valid JSON.
fn validate_payload(payload: &str) -> Result<(), TemplateError> {
    serde_json::from_str::<Value>(payload)
        .map(|_| ())
        .map_err(|_| TemplateError::InvalidPayload(payload.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn var_encodes() {
        let marker = Marker::var("size", "10").unwrap();
        assert_eq!(marker.encode(), "@var(size,10)");
    }

    #[test]
    fn json_var_encodes() {
        let marker = Marker::json_var("filters").unwrap();
        assert_eq!(marker.encode(), "@json(filters)");
    }

    #[test]
    fn query_block_encodes_payload_json() {
        let marker = Marker::query_block(&json!([{ "match_all": {} }]));
        assert_eq!(marker.encode(), r#"@query([{"match_all":{}}])@endquery"#);
    }

    #[test]
    fn sort_block_encodes_payload_json() {
        let marker = Marker::sort_block(&json!(["_score"]));
        assert_eq!(marker.encode(), r#"@sorting(["_score"])@endsorting"#);
    }

    #[test]
    fn rejects_uppercase_name() {
        assert!(matches!(
            Marker::var("Size", "10"),
            Err(TemplateError::InvalidName(_))
        ));
    }

    #[test]
    fn rejects_empty_name() {
        assert!(Marker::json_var("").is_err());
    }

    #[test]
    fn rejects_default_with_spaces() {
        assert!(matches!(
            Marker::var("size", "1 0"),
            Err(TemplateError::InvalidDefault(_))
        ));
    }

    #[test]
    fn accepts_comma_in_default() {
        assert!(Marker::var("fuzz", "auto3,6").is_ok());
    }

    #[test]
    fn rejects_malformed_block_payload() {
        assert!(matches!(
            Marker::query_block_json("{not json"),
            Err(TemplateError::InvalidPayload(_))
        ));
        assert!(Marker::sort_block_json("[1,").is_err());
    }

    #[test]
    fn accepts_valid_block_payload_text() {
        assert!(Marker::query_block_json(r#"[{"term":{"a":1}}]"#).is_ok());
    }

    #[test]
    fn value_is_a_string_leaf() {
        let marker = Marker::json_var("filters").unwrap();
        assert_eq!(marker.value(), json!("@json(filters)"));
    }
}
