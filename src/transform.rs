//! The word-substitution transformer
//!
//! Text is trimmed, split into lines and tokenized with a word-boundary
//! pattern. Each token is either expanded through the contraction, slang and
//! override tables (with every word of the expansion then substituted on its
//! own) or substituted directly with a synonym from the dictionary. Anything
//! between tokens is copied through untouched.
//!
//! # Example
//!
//! ```
//! use kirstify::{Dictionary, kirstify};
//!
//! let mut dictionary = Dictionary::new();
//! dictionary.with_entry("hello", ["greetings"]);
//!
//! assert_eq!(kirstify("Hello, you!", &dictionary), "Greetings, you!");
//! ```

use crate::case::retain_case;
use crate::dictionary::Dictionary;
use crate::random::{Picker, RandomPolicy};
use crate::tables::expansion_for;
use regex::{Captures, Regex};
use std::sync::LazyLock;
use tracing::{debug, trace};

/// Word tokens, including internal straight or typographic apostrophes
static WORD_WITH_APOSTROPHES: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\b[\w'’]+\b").expect("word pattern is valid"));

/// Word tokens without apostrophes
static WORD: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\b\w+\b").expect("word pattern is valid"));

/// Words of at most this many characters are left alone unless allow-listed
pub const SHORT_WORD_MAX: usize = 2;

/// Transformer behaviour switches
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Options {
    pub random: RandomPolicy,
    /// Process each line on its own
    pub line_aware: bool,
    /// Treat internal apostrophes as part of a word, so contractions are
    /// single tokens
    pub apostrophes: bool,
    /// Expand contractions, slang and overrides before substitution
    pub expand: bool,
    /// Lowercase short words that may still be substituted
    pub short_word_allow_list: Vec<String>,
}

impl Default for Options {
    fn default() -> Self {
        Options {
            random: RandomPolicy::Seeded,
            line_aware: true,
            apostrophes: true,
            expand: true,
            short_word_allow_list: vec!["i".to_string(), "a".to_string(), "an".to_string()],
        }
    }
}

impl Options {
    /// Default options: seeded, line-aware, apostrophe-aware, expanding,
    /// with `i`, `a` and `an` allow-listed
    pub fn new() -> Self {
        Self::default()
    }

    /// Set how candidate picks are seeded
    ///
    /// # Arguments
    ///
    /// * `random` - [`RandomPolicy::Seeded`] for reproducible output per text,
    ///   `Fixed` for a caller-chosen seed, `Ambient` for fresh randomness
    pub fn with_random_policy(mut self, random: RandomPolicy) -> Self {
        self.random = random;
        self
    }

    /// Process each line on its own (`true`) or the whole text as one unit
    pub fn with_line_aware(mut self, line_aware: bool) -> Self {
        self.line_aware = line_aware;
        self
    }

    /// Keep internal apostrophes inside tokens, so a contraction like
    /// `can't` is one token rather than `can` and `t`
    pub fn with_apostrophes(mut self, apostrophes: bool) -> Self {
        self.apostrophes = apostrophes;
        self
    }

    /// Turn contraction, slang and override expansion on or off
    pub fn with_expansion(mut self, expand: bool) -> Self {
        self.expand = expand;
        self
    }

    /// Replace the list of short words that may still be substituted
    ///
    /// # Arguments
    ///
    /// * `words` - Words of at most [`SHORT_WORD_MAX`] characters; matched
    ///   case-insensitively
    ///
    /// # Example
    ///
    /// ```
    /// use kirstify::Options;
    ///
    /// let options = Options::new().with_short_word_allow_list(["I", "ok"]);
    /// assert_eq!(options.short_word_allow_list, vec!["i", "ok"]);
    /// ```
    pub fn with_short_word_allow_list<I, S>(mut self, words: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        self.short_word_allow_list = words
            .into_iter()
            .map(|w| w.as_ref().to_lowercase())
            .collect();
        self
    }
}

/// Applies synonym substitution to text using a borrowed dictionary
pub struct Transformer<'a> {
    dictionary: &'a Dictionary,
    options: Options,
}

impl<'a> Transformer<'a> {
    /// Create a transformer
    ///
    /// # Arguments
    ///
    /// * `dictionary` - Synonyms to draw from
    /// * `options` - Behaviour switches
    pub fn new(dictionary: &'a Dictionary, options: Options) -> Self {
        Transformer {
            dictionary,
            options,
        }
    }

    pub fn options(&self) -> &Options {
        &self.options
    }

    fn word_pattern(&self) -> &'static Regex {
        if self.options.apostrophes {
            &*WORD_WITH_APOSTROPHES
        } else {
            &*WORD
        }
    }

    /// Transform a whole piece of text. Never fails; anything that cannot be
    /// substituted is returned as it was.
    pub fn apply(&self, text: &str) -> String {
        let trimmed = text.trim();
        let mut picker = Picker::new(self.options.random, trimmed);

        if self.options.line_aware {
            trimmed
                .split('\n')
                .map(|line| self.apply_unit(line, &mut picker))
                .collect::<Vec<_>>()
                .join("\n")
        } else {
            self.apply_unit(trimmed, &mut picker)
        }
    }

    fn apply_unit(&self, unit: &str, picker: &mut Picker) -> String {
        self.word_pattern()
            .replace_all(unit, |caps: &Captures| self.apply_token(&caps[0], picker))
            .into_owned()
    }

    fn apply_token(&self, token: &str, picker: &mut Picker) -> String {
        if self.options.expand {
            if let Some((kind, expansion)) = expansion_for(token) {
                let phrase = retain_case(token, expansion);
                debug!(token, expansion = %phrase, ?kind, "expanded token");
                return self
                    .word_pattern()
                    .replace_all(&phrase, |caps: &Captures| self.swap_word(&caps[0], picker))
                    .into_owned();
            }
        }

        self.swap_word(token, picker)
    }

    fn is_allowed_short(&self, word: &str) -> bool {
        let lower = word.to_lowercase();
        self.options
            .short_word_allow_list
            .iter()
            .any(|allowed| *allowed == lower)
    }

    /// Replace a single word with a random candidate from the dictionary.
    ///
    /// The word is returned unchanged when it is too short, has no entry,
    /// or has no candidate that is a single word at least as long as it.
    pub fn swap_word(&self, word: &str, picker: &mut Picker) -> String {
        if word.chars().count() <= SHORT_WORD_MAX && !self.is_allowed_short(word) {
            trace!(word, "short word left alone");
            return word.to_string();
        }

        let replacements = self.dictionary.replacements_for(word);
        match picker.pick(&replacements) {
            Some(replacement) if !replacement.is_empty() => {
                let swapped = retain_case(word, replacement);
                debug!(word, replacement = %swapped, "swapped word");
                swapped
            }
            _ => {
                trace!(word, "no usable candidate");
                word.to_string()
            }
        }
    }
}

/// Transform text with the default options
pub fn kirstify(text: &str, dictionary: &Dictionary) -> String {
    kirstify_with(text, dictionary, &Options::default())
}

/// Transform text with explicit options
pub fn kirstify_with(text: &str, dictionary: &Dictionary, options: &Options) -> String {
    Transformer::new(dictionary, options.clone()).apply(text)
}
