//! Per-field highlight configuration.

use serde_json::{Value, json};

/// Fragment size for highlighted excerpts.
const FRAGMENT_SIZE: u64 = 150;

/// Number of fragments returned per field.
const NUMBER_OF_FRAGMENTS: u64 = 3;

/// Excerpt size when no fragment matches.
const NO_MATCH_SIZE: u64 = 150;

/// Highlight settings for one field.
///
/// Carries the wrapping tags; fragment sizing uses fixed engine-friendly
/// defaults (150-character fragments, three per field).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HighlightField {
    /// Tag inserted before each match.
    pub pre_tag: String,
    /// Tag inserted after each match.
    pub post_tag: String,
}

impl HighlightField {
    /// Creates highlight settings with the given wrapping tags.
    pub fn new(pre_tag: impl Into<String>, post_tag: impl Into<String>) -> Self {
        Self {
            pre_tag: pre_tag.into(),
            post_tag: post_tag.into(),
        }
    }

    /// Renders the per-field highlight entry.
    pub fn to_raw(&self) -> Value {
        json!({
            "type": "plain",
            "force_source": true,
            "pre_tags": [self.pre_tag],
            "post_tags": [self.post_tag],
            "fragment_size": FRAGMENT_SIZE,
            "number_of_fragments": NUMBER_OF_FRAGMENTS,
            "no_match_size": NO_MATCH_SIZE,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn renders_tags_as_arrays() {
        let raw = HighlightField::new("<em>", "</em>").to_raw();
        assert_eq!(raw["pre_tags"], json!(["<em>"]));
        assert_eq!(raw["post_tags"], json!(["</em>"]));
    }

    #[test]
    fn carries_fragment_defaults() {
        let raw = HighlightField::new("<b>", "</b>").to_raw();
        assert_eq!(raw["fragment_size"], 150);
        assert_eq!(raw["number_of_fragments"], 3);
        assert_eq!(raw["no_match_size"], 150);
        assert_eq!(raw["type"], "plain");
        assert_eq!(raw["force_source"], true);
    }
}
