//! Dictionary fetched over HTTP(S)
//!
//! A non-success status is reported as [`LoadError::Status`], which renders
//! as "Failed to get Kirstinesses". Transport failures become
//! [`LoadError::Network`] and a body that is not a dictionary becomes
//! [`LoadError::Parse`] or [`LoadError::InvalidShape`].

use crate::dictionary::Dictionary;
use crate::error::{LoadError, LoadResult};
use crate::loader::parse::parse_dictionary_value;
use crate::loader::source::DictionarySource;
use async_trait::async_trait;
use std::time::Duration;
use tracing::{debug, info};

#[derive(Clone)]
pub struct HttpSource {
    url: String,
    client: reqwest::Client,
}

impl HttpSource {
    /// Request timeout for the single dictionary fetch
    const TIMEOUT: Duration = Duration::from_secs(30);

    /// Create a source for a dictionary URL
    ///
    /// # Arguments
    ///
    /// * `url` - `http://` or `https://` address of the JSON document
    ///
    /// # Returns
    ///
    /// * `Ok(Self)` - New source; nothing is fetched until [`DictionarySource::load`]
    /// * `Err(LoadError::Config)` - If the HTTP client cannot be built
    ///
    /// # Example
    ///
    /// ```ignore
    /// let source = HttpSource::new("https://example.org/dictionary.json")?;
    /// let dictionary = source.load().await?;
    /// ```
    pub fn new(url: &str) -> LoadResult<Self> {
        let client = reqwest::Client::builder()
            .timeout(Self::TIMEOUT)
            .build()
            .map_err(|e| LoadError::Config(format!("Failed to create HTTP client: {}", e)))?;

        Ok(Self {
            url: url.to_string(),
            client,
        })
    }

    /// The URL this source fetches
    pub fn url(&self) -> &str {
        &self.url
    }
}

#[async_trait]
impl DictionarySource for HttpSource {
    async fn load(&self) -> LoadResult<Dictionary> {
        debug!(url = %self.url, "fetching dictionary");
        let response = self.client.get(&self.url).send().await?;

        if !response.status().is_success() {
            return Err(LoadError::Status(response.status().as_u16()));
        }

        let json: serde_json::Value = response
            .json()
            .await
            .map_err(|e| LoadError::Parse(e.to_string()))?;

        let dictionary = parse_dictionary_value(json)?;
        info!(url = %self.url, words = dictionary.len(), "loaded dictionary");
        Ok(dictionary)
    }

    fn describe(&self) -> String {
        self.url.clone()
    }
}
