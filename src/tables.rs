//! Static expansion tables for contractions, slang and custom overrides
//!
//! Expansions are applied before dictionary substitution, so a token like
//! `can't` becomes `cannot` and each word of the expansion is then eligible
//! for a synonym of its own.

/// Contracted forms and their literal expansions.
pub const CONTRACTIONS: &[(&str, &str)] = &[
    ("i'd", "I would"),
    ("i'll", "I will"),
    ("i've", "I have"),
    ("i'm", "I am"),
    ("she'd", "she would"),
    ("she's", "she is"),
    ("she'll", "she will"),
    ("he'd", "he would"),
    ("he's", "he is"),
    ("he'll", "he will"),
    ("they'll", "they will"),
    ("they're", "they are"),
    ("they've", "they have"),
    ("we'd", "we would"),
    ("we're", "we are"),
    ("we'll", "we will"),
    ("we've", "we have"),
    ("it'll", "it will"),
    ("it's", "it is"),
    ("it'd", "it would"),
    ("that's", "that is"),
    ("there's", "there is"),
    ("where's", "where is"),
    ("here's", "here is"),
    ("let's", "let us"),
    ("can't", "cannot"),
    ("didn't", "did not"),
    ("doesn't", "does not"),
    ("don't", "do not"),
    ("hadn't", "had not"),
    ("hasn't", "has not"),
    ("isn't", "is not"),
    ("wasn't", "was not"),
    ("won't", "will not"),
    ("couldn't", "could not"),
    ("shouldn't", "should not"),
    ("wouldn't", "would not"),
    ("could've", "could have"),
    ("would've", "would have"),
    ("should've", "should have"),
    ("might've", "might have"),
    ("must've", "must have"),
    ("who's", "who is"),
    ("'tis", "it is"),
    ("'twas", "it was"),
    ("you'll", "you will"),
    ("'n", "and"),
    ("'n'", "and"),
    ("n'", "and"),
    ("why'd", "why did"),
    ("why's", "why is"),
    ("how's", "how is"),
];

/// Informal spellings and text-speak.
pub const SLANG: &[(&str, &str)] = &[
    ("wanna", "want to"),
    ("gonna", "going to"),
    ("gotta", "got to"),
    ("kinda", "kind of"),
    ("outta", "out of"),
    ("gimme", "give me"),
    ("hafta", "have to"),
    ("lemme", "let me"),
    ("init", "is it not"),
    ("neva", "never"),
    ("u", "you"),
    ("r", "are"),
    ("ur", "you are"),
    ("im", "i am"),
    ("b", "be"),
    ("bb", "baby"),
    ("bae", "baby"),
    ("kl", "cool"),
    ("klkl", "cool cool"),
    ("lol", "laugh out loud"),
    ("nah", "no"),
    ("na", "no"),
];

/// Words that are always rewritten to a fixed phrase.
pub const OVERRIDES: &[(&str, &str)] = &[("never", "at no time")];

/// Which table an expansion came from
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExpansionKind {
    Contraction,
    Slang,
    Override,
}

fn lookup(table: &'static [(&str, &str)], key: &str) -> Option<&'static str> {
    table
        .iter()
        .find(|(form, _)| *form == key)
        .map(|(_, expansion)| *expansion)
}

/// Normalize a token into a table key: lowercase, typographic apostrophes
/// folded to `'`.
pub fn table_key(token: &str) -> String {
    token.to_lowercase().replace('\u{2019}', "'")
}

/// Find the expansion for a token, checking contractions, then slang, then
/// overrides.
///
/// # Example
///
/// ```
/// use kirstify::tables::{ExpansionKind, expansion_for};
///
/// assert_eq!(expansion_for("Can't"), Some((ExpansionKind::Contraction, "cannot")));
/// assert_eq!(expansion_for("gonna"), Some((ExpansionKind::Slang, "going to")));
/// assert_eq!(expansion_for("table"), None);
/// ```
pub fn expansion_for(token: &str) -> Option<(ExpansionKind, &'static str)> {
    let key = table_key(token);

    lookup(CONTRACTIONS, &key)
        .map(|e| (ExpansionKind::Contraction, e))
        .or_else(|| lookup(SLANG, &key).map(|e| (ExpansionKind::Slang, e)))
        .or_else(|| lookup(OVERRIDES, &key).map(|e| (ExpansionKind::Override, e)))
}
