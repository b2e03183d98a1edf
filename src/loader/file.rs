use crate::dictionary::Dictionary;
use crate::error::{LoadError, LoadResult};
use crate::loader::parse::parse_dictionary;
use crate::loader::source::DictionarySource;
use async_trait::async_trait;
use std::path::{Path, PathBuf};
use tracing::info;

/// Dictionary stored in a local JSON file
#[derive(Debug, Clone)]
pub struct FileSource {
    path: PathBuf,
}

impl FileSource {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        FileSource { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

#[async_trait]
impl DictionarySource for FileSource {
    async fn load(&self) -> LoadResult<Dictionary> {
        let content = tokio::fs::read_to_string(&self.path)
            .await
            .map_err(|e| LoadError::Io(format!("'{}': {}", self.path.display(), e)))?;

        let dictionary = parse_dictionary(&content)?;
        info!(path = %self.path.display(), words = dictionary.len(), "loaded dictionary");
        Ok(dictionary)
    }

    fn describe(&self) -> String {
        format!("file {}", self.path.display())
    }
}
