use crate::dictionary::Dictionary;
use crate::error::{LoadError, LoadResult};
use serde_json::Value;
use std::collections::HashMap;
use tracing::warn;

/// Parse a dictionary document
///
/// The document should have the following structure:
/// ```json
/// {
///     "@metadata": { ... },  // Ignored
///     "happy": ["glad", "joyful", "delighted"],
///     "big": ["large", "enormous"]
/// }
/// ```
///
/// Entries whose value is not an array are skipped with a warning, as are
/// non-string items inside an array.
///
/// # Errors
/// - Invalid JSON
/// - Root is not an object
pub fn parse_dictionary(content: &str) -> LoadResult<Dictionary> {
    let json: Value = serde_json::from_str(content)?;
    parse_dictionary_value(json)
}

/// Same as [`parse_dictionary`] for an already-decoded JSON value
pub fn parse_dictionary_value(json: Value) -> LoadResult<Dictionary> {
    let Value::Object(obj) = json else {
        return Err(LoadError::InvalidShape(
            "root must be an object".to_string(),
        ));
    };

    let mut entries = HashMap::with_capacity(obj.len());
    for (word, value) in obj {
        if word.starts_with('@') {
            continue;
        }

        let Value::Array(items) = value else {
            warn!(word = %word, "dictionary entry is not an array, skipping");
            continue;
        };

        let candidates: Vec<String> = items
            .into_iter()
            .filter_map(|item| match item {
                Value::String(s) => Some(s),
                other => {
                    warn!(word = %word, item = %other, "non-string synonym, skipping");
                    None
                }
            })
            .collect();

        entries.insert(word, candidates);
    }

    Ok(Dictionary::from(entries))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_simple() {
        let dictionary =
            parse_dictionary(r#"{"hello": ["greetings"], "world": ["planet", "globe"]}"#)
                .unwrap();
        assert_eq!(dictionary.len(), 2);
        assert_eq!(dictionary.replacements_for("world"), vec!["planet", "globe"]);
    }

    #[test]
    fn test_parse_skips_metadata() {
        let dictionary = parse_dictionary(
            r#"{"@metadata": {"authors": ["someone"]}, "hello": ["greetings"]}"#,
        )
        .unwrap();
        assert_eq!(dictionary.len(), 1);
        assert!(dictionary.candidates("@metadata").is_none());
    }

    #[test]
    fn test_parse_skips_bad_entries() {
        let dictionary =
            parse_dictionary(r#"{"hello": "greetings", "world": ["planet", 3, null, "globe"]}"#)
                .unwrap();
        assert!(dictionary.candidates("hello").is_none());
        assert_eq!(dictionary.replacements_for("world"), vec!["planet", "globe"]);
    }

    #[test]
    fn test_parse_empty_object() {
        assert!(parse_dictionary("{}").unwrap().is_empty());
    }

    #[test]
    fn test_parse_invalid_json() {
        assert!(matches!(
            parse_dictionary("{\"hello\": [").unwrap_err(),
            LoadError::Parse(_)
        ));
    }

    #[test]
    fn test_parse_non_object_root() {
        assert!(matches!(
            parse_dictionary(r#"["hello", "world"]"#).unwrap_err(),
            LoadError::InvalidShape(_)
        ));
    }
}
