//! Implementations of the `esq` subcommands.

use std::process::ExitCode;

use esq_search::{Direction, Search, SearchError, SearchOptions, SortEntry};
use esq_template::expand;
use serde_json::json;

use crate::args::{IntentArgs, QueryCommand, TemplateCommand};

/// Implements `esq query`.
pub fn cmd_query(command: &QueryCommand) -> ExitCode {
    let search = match compile(&command.intent) {
        Ok(search) => search,
        Err(e) => {
            eprintln!("error: {e}");
            return ExitCode::FAILURE;
        }
    };

    let raw = search.to_raw();
    let rendered = if command.compact {
        serde_json::to_string(&raw)
    } else {
        serde_json::to_string_pretty(&raw)
    };
    match rendered {
        Ok(text) => {
            println!("{text}");
            ExitCode::SUCCESS
        }
        Err(e) => {
            eprintln!("error: failed to serialize document: {e}");
            ExitCode::FAILURE
        }
    }
}

/// Implements `esq template`.
pub fn cmd_template(command: &TemplateCommand) -> ExitCode {
    let search = match compile(&command.intent) {
        Ok(search) => search,
        Err(e) => {
            eprintln!("error: {e}");
            return ExitCode::FAILURE;
        }
    };

    let source = match expand(&search.to_raw()) {
        Ok(source) => source,
        Err(e) => {
            eprintln!("error: {e}");
            return ExitCode::FAILURE;
        }
    };

    if command.script {
        let body = json!({ "script": { "lang": "mustache", "source": source } });
        match serde_json::to_string_pretty(&body) {
            Ok(text) => println!("{text}"),
            Err(e) => {
                eprintln!("error: failed to serialize document: {e}");
                return ExitCode::FAILURE;
            }
        }
    } else {
        println!("{source}");
    }

    ExitCode::SUCCESS
}

/// Builds and compiles the search intent described by the shared flags.
fn compile(intent: &IntentArgs) -> Result<Search, SearchError> {
    let mut options = SearchOptions::new(&intent.index)
        .query(&intent.query)
        .fields(intent.fields.iter().cloned())
        .typo_tolerant_fields(intent.typo_fields.iter().cloned())
        .typo_tolerance(intent.one_typo_chars, intent.two_typo_chars)
        .size(intent.size);

    for weight in &intent.weights {
        let (field, boost) = parse_weight(weight)?;
        options = options.weight(field, boost);
    }

    if !intent.sorts.is_empty() {
        let sorts = intent
            .sorts
            .iter()
            .map(|spec| parse_sort(spec))
            .collect::<Result<Vec<_>, _>>()?;
        options = options.sorts(sorts);
    }

    if intent.filterable {
        options = options.filterable();
    }
    if intent.sortable {
        options = options.sortable();
    }

    if !intent.highlight_fields.is_empty() {
        options = options.highlighting(
            intent.highlight_fields.iter().cloned(),
            &intent.pre_tag,
            &intent.post_tag,
        );
    }

    if !intent.retrieve.is_empty() {
        options = options.retrieve(intent.retrieve.iter().cloned());
    }

    options.compile()
}

/// Parses a `field=N` weight flag.
fn parse_weight(spec: &str) -> Result<(String, f64), SearchError> {
    let (field, boost) = spec.split_once('=').ok_or_else(|| {
        SearchError::Configuration(format!("invalid weight '{spec}': expected field=N"))
    })?;
    let boost: f64 = boost.parse().map_err(|_| {
        SearchError::Configuration(format!("invalid weight '{spec}': boost must be a number"))
    })?;
    Ok((field.to_string(), boost))
}

/// Parses a `field:direction` or `_score` sort flag.
fn parse_sort(spec: &str) -> Result<SortEntry, SearchError> {
    match spec.split_once(':') {
        None => SortEntry::new(spec, None),
        Some((field, direction)) => {
            let direction: Direction = direction.parse()?;
            SortEntry::new(field, Some(direction))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_weight_accepts_field_equals_number() {
        let (field, boost) = parse_weight("title=3").unwrap();
        assert_eq!(field, "title");
        assert_eq!(boost, 3.0);
    }

    #[test]
    fn parse_weight_rejects_missing_separator() {
        assert!(parse_weight("title3").is_err());
    }

    #[test]
    fn parse_weight_rejects_non_numeric_boost() {
        assert!(parse_weight("title=high").is_err());
    }

    #[test]
    fn parse_sort_accepts_score_without_direction() {
        assert_eq!(parse_sort("_score").unwrap(), SortEntry::Score);
    }

    #[test]
    fn parse_sort_accepts_field_with_direction() {
        let entry = parse_sort("price:desc").unwrap();
        assert_eq!(
            entry,
            SortEntry::Field {
                field: "price".to_string(),
                direction: Direction::Desc
            }
        );
    }

    #[test]
    fn parse_sort_rejects_field_without_direction() {
        assert!(parse_sort("price").is_err());
    }

    #[test]
    fn parse_sort_rejects_unknown_direction() {
        assert!(parse_sort("price:down").is_err());
    }
}
