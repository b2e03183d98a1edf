//! Dictionary source trait and source selection
//!
//! `DictionarySource` abstracts over where a dictionary comes from, so the
//! shell can load from disk, over HTTP, or from a mock without caring which.

use crate::dictionary::Dictionary;
use crate::error::{LoadError, LoadResult};
use crate::loader::file::FileSource;
use crate::loader::http::HttpSource;
use async_trait::async_trait;

/// Anything that can produce a dictionary
///
/// Loading happens once per session; implementations do not retry.
#[async_trait]
pub trait DictionarySource: Send + Sync {
    /// Load and parse the dictionary
    ///
    /// # Returns
    ///
    /// * `Ok(Dictionary)` - A fully parsed dictionary
    /// * `Err(LoadError)` - If the document cannot be fetched or parsed
    async fn load(&self) -> LoadResult<Dictionary>;

    /// Human-readable description of the source, for logs
    fn describe(&self) -> String;
}

/// Pick a source for a location: HTTP(S) URLs are fetched, anything else is
/// treated as a file path.
///
/// # Example
///
/// ```ignore
/// let source = source_for("https://example.org/dictionary.json")?;
/// assert!(source.describe().starts_with("http"));
/// ```
pub fn source_for(location: &str) -> LoadResult<Box<dyn DictionarySource>> {
    let location = location.trim();
    if location.is_empty() {
        return Err(LoadError::Config(
            "dictionary location is empty".to_string(),
        ));
    }

    if location.starts_with("http://") || location.starts_with("https://") {
        Ok(Box::new(HttpSource::new(location)?))
    } else {
        Ok(Box::new(FileSource::new(location)))
    }
}
