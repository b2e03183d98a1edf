use serde::Deserialize;
use std::collections::HashMap;

/// Synonym dictionary: lowercase word to an ordered list of candidates.
///
/// Deserializes from a plain JSON object, e.g.
/// ```json
/// { "hello": ["greetings", "salutations"], "world": ["planet", "globe"] }
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(transparent)]
pub struct Dictionary(HashMap<String, Vec<String>>);

impl Dictionary {
    pub fn new() -> Self {
        Dictionary(HashMap::new())
    }

    pub fn with_entry<I, S>(&mut self, word: &str, candidates: I) -> &mut Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.0.insert(
            word.to_owned(),
            candidates.into_iter().map(Into::into).collect(),
        );
        self
    }

    /// Candidates for a word, looked up by its lowercase form
    pub fn candidates(&self, word: &str) -> Option<&[String]> {
        self.0.get(&word.to_lowercase()).map(Vec::as_slice)
    }

    /// Candidates that can stand in for `word`: single words no shorter than it
    pub fn replacements_for(&self, word: &str) -> Vec<&str> {
        let min_len = word.chars().count();
        self.candidates(word)
            .unwrap_or_default()
            .iter()
            .filter(|c| !c.contains(' ') && c.chars().count() >= min_len)
            .map(String::as_str)
            .collect()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl From<HashMap<String, Vec<String>>> for Dictionary {
    fn from(map: HashMap<String, Vec<String>>) -> Self {
        Dictionary(map)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> Dictionary {
        let mut dictionary = Dictionary::new();
        dictionary
            .with_entry("happy", ["glad", "joyful", "over the moon", "delighted"])
            .with_entry("big", ["enormous", "gargantuan"]);
        dictionary
    }

    #[test]
    fn test_lookup_is_case_insensitive() {
        let dictionary = sample();
        assert!(dictionary.candidates("HAPPY").is_some());
        assert!(dictionary.candidates("Big").is_some());
        assert!(dictionary.candidates("small").is_none());
    }

    #[test]
    fn test_replacements_filter_spaces_and_short_words() {
        let dictionary = sample();
        assert_eq!(
            dictionary.replacements_for("happy"),
            vec!["joyful", "delighted"]
        );
    }

    #[test]
    fn test_replacements_for_missing_word() {
        assert!(sample().replacements_for("missing").is_empty());
    }

    #[test]
    fn test_deserialize_plain_object() {
        let dictionary: Dictionary =
            serde_json::from_str(r#"{"hello": ["greetings"], "world": ["planet", "globe"]}"#)
                .unwrap();
        assert_eq!(dictionary.len(), 2);
        assert_eq!(
            dictionary.candidates("world").unwrap(),
            &["planet".to_string(), "globe".to_string()]
        );
    }
}
