/// Dictionary loading
///
/// A dictionary is a JSON object mapping lowercase words to arrays of
/// synonyms. It can come from a local file, an HTTP(S) URL, or an in-memory
/// mock for tests. All sources implement the async [`DictionarySource`]
/// trait and share the same parsing rules.
///
/// # Example
///
/// ```ignore
/// use kirstify::loader::{DictionarySource, source_for};
///
/// #[tokio::main]
/// async fn main() -> Result<(), Box<dyn std::error::Error>> {
///     let source = source_for("./dictionary.json")?;
///     let dictionary = source.load().await?;
///     println!("{} words", dictionary.len());
///     Ok(())
/// }
/// ```
pub mod file;
pub mod http;
pub mod mock;
pub mod parse;
pub mod source;

pub use file::FileSource;
pub use http::HttpSource;
pub use mock::{MockMode, MockSource};
pub use parse::parse_dictionary;
pub use source::{DictionarySource, source_for};
