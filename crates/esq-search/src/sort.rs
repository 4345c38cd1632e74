//! Sort specification entries.

use std::{fmt, str::FromStr};

use serde_json::{Value, json};

use crate::error::SearchError;

/// Sort direction for a field-based sort entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    /// Ascending order.
    Asc,
    /// Descending order.
    Desc,
}

impl Direction {
    /// Returns the wire-level name of the direction.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Asc => "asc",
            Self::Desc => "desc",
        }
    }
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Direction {
    type Err = SearchError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "asc" => Ok(Self::Asc),
            "desc" => Ok(Self::Desc),
            other => Err(SearchError::Configuration(format!(
                "invalid sort direction '{other}': expected 'asc' or 'desc'"
            ))),
        }
    }
}

/// One entry of a sort specification.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SortEntry {
    /// Sort by relevance score; takes no direction.
    Score,
    /// Sort by a field in a given direction.
    Field {
        /// Field to sort by.
        field: String,
        /// Sort direction.
        direction: Direction,
    },
}

impl SortEntry {
    /// Builds an entry from a field name and an optional direction.
    ///
    /// The sentinel field `_score` ignores any direction. Every other field
    /// requires one; omitting it is a configuration error.
    pub fn new(field: impl Into<String>, direction: Option<Direction>) -> Result<Self, SearchError> {
        let field = field.into();
        if field == "_score" {
            return Ok(Self::Score);
        }
        match direction {
            Some(direction) => Ok(Self::Field { field, direction }),
            None => Err(SearchError::Configuration(format!(
                "sort on '{field}' requires a direction; only _score sorts without one"
            ))),
        }
    }

    /// Renders the entry to its wire form.
    ///
    /// `_score` serializes as the bare string; field entries as a one-key
    /// object `{field: direction}`.
    pub fn to_raw(&self) -> Value {
        match self {
            Self::Score => json!("_score"),
            Self::Field { field, direction } => json!({ field.as_str(): direction.as_str() }),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn score_serializes_as_bare_string() {
        let entry = SortEntry::new("_score", None).unwrap();
        assert_eq!(entry.to_raw(), json!("_score"));
    }

    #[test]
    fn score_ignores_direction() {
        let entry = SortEntry::new("_score", Some(Direction::Desc)).unwrap();
        assert_eq!(entry, SortEntry::Score);
    }

    #[test]
    fn field_serializes_as_object() {
        let entry = SortEntry::new("price", Some(Direction::Asc)).unwrap();
        assert_eq!(entry.to_raw(), json!({ "price": "asc" }));
    }

    #[test]
    fn field_without_direction_is_rejected() {
        assert!(matches!(
            SortEntry::new("price", None),
            Err(SearchError::Configuration(_))
        ));
    }

    #[test]
    fn direction_parses_from_str() {
        assert_eq!("asc".parse::<Direction>().unwrap(), Direction::Asc);
        assert_eq!("desc".parse::<Direction>().unwrap(), Direction::Desc);
        assert!("ascending".parse::<Direction>().is_err());
    }
}
