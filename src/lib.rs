//! Swap the words in a piece of text for longer, case-matched synonyms.
//!
//! ```
//! use kirstify::{Dictionary, kirstify};
//!
//! let mut dictionary = Dictionary::new();
//! dictionary
//!     .with_entry("hello", ["greetings"])
//!     .with_entry("world", ["planet", "globe"]);
//!
//! let output = kirstify("hello world", &dictionary);
//! assert!(output == "greetings planet" || output == "greetings globe");
//! ```

pub mod case;
pub mod config;
pub mod dictionary;
pub mod error;
pub mod loader;
pub mod random;
pub mod shell;
pub mod tables;
pub mod transform;


pub use case::retain_case;
pub use config::Config;
pub use dictionary::Dictionary;
pub use error::{LoadError, LoadResult};
pub use loader::{DictionarySource, FileSource, HttpSource, MockMode, MockSource, source_for};
pub use random::{Picker, RandomPolicy};
pub use shell::{DictionaryState, Shell};
pub use transform::{Options, Transformer, kirstify, kirstify_with};
