//! Mock dictionary source for testing
//!
//! Lets the shell and CLI paths be exercised without touching the disk or
//! the network.
//!
//! # Example
//!
//! ```ignore
//! use kirstify::loader::{DictionarySource, MockMode, MockSource};
//!
//! #[tokio::test]
//! async fn test_failure() {
//!     let mock = MockSource::new(MockMode::Status(500));
//!     assert!(mock.load().await.is_err());
//! }
//! ```

use crate::dictionary::Dictionary;
use crate::error::{LoadError, LoadResult};
use crate::loader::parse::parse_dictionary;
use crate::loader::source::DictionarySource;
use async_trait::async_trait;
use std::time::Duration;

/// What a mock source hands back
#[derive(Debug, Clone)]
pub enum MockMode {
    /// Return this dictionary
    Ready(Dictionary),
    /// Parse this raw document, as a real source would
    Document(String),
    /// Fail as if the server answered with this status
    Status(u16),
    /// Fail with a network error
    Network(String),
}

/// Mock source that resolves to a fixed outcome
///
/// Useful for driving the shell and integration tests without files or
/// network access.
#[derive(Debug, Clone)]
pub struct MockSource {
    mode: MockMode,
    /// Optional simulated latency (in milliseconds)
    delay_ms: u64,
}

impl MockSource {
    /// Create a new MockSource with the given mode
    ///
    /// # Arguments
    ///
    /// * `mode` - What `load` should return
    ///
    /// # Example
    ///
    /// ```ignore
    /// let mock = MockSource::new(MockMode::Status(404));
    /// ```
    pub fn new(mode: MockMode) -> Self {
        Self { mode, delay_ms: 0 }
    }

    /// Create a MockSource with simulated latency
    ///
    /// # Arguments
    ///
    /// * `mode` - What `load` should return
    /// * `delay_ms` - Delay before each load completes, in milliseconds
    ///
    /// # Example
    ///
    /// ```ignore
    /// let mock = MockSource::with_delay(MockMode::Document("{}".to_string()), 50);
    /// // Each load takes ~50ms
    /// ```
    pub fn with_delay(mode: MockMode, delay_ms: u64) -> Self {
        Self { mode, delay_ms }
    }
}

#[async_trait]
impl DictionarySource for MockSource {
    async fn load(&self) -> LoadResult<Dictionary> {
        if self.delay_ms > 0 {
            tokio::time::sleep(Duration::from_millis(self.delay_ms)).await;
        }

        match &self.mode {
            MockMode::Ready(dictionary) => Ok(dictionary.clone()),
            MockMode::Document(content) => parse_dictionary(content),
            MockMode::Status(code) => Err(LoadError::Status(*code)),
            MockMode::Network(msg) => Err(LoadError::Network(msg.clone())),
        }
    }

    fn describe(&self) -> String {
        "mock".to_string()
    }
}
