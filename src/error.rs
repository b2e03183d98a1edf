/// Errors raised while loading a dictionary
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LoadError {
    /// Local file could not be read
    Io(String),
    /// Transport-level failure talking to a remote source
    Network(String),
    /// Remote source answered with a non-success status
    Status(u16),
    /// Document is not valid JSON
    Parse(String),
    /// Document is valid JSON but not a word-to-synonyms object
    InvalidShape(String),
    /// Source could not be configured
    Config(String),
}

impl std::fmt::Display for LoadError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            LoadError::Io(msg) => write!(f, "Failed to read dictionary: {}", msg),
            LoadError::Network(msg) => write!(f, "Network error: {}", msg),
            LoadError::Status(code) => {
                write!(f, "Failed to get Kirstinesses (status {})", code)
            }
            LoadError::Parse(msg) => write!(f, "Failed to parse dictionary: {}", msg),
            LoadError::InvalidShape(msg) => write!(f, "Invalid dictionary: {}", msg),
            LoadError::Config(msg) => write!(f, "Configuration error: {}", msg),
        }
    }
}

impl std::error::Error for LoadError {}

impl From<std::io::Error> for LoadError {
    fn from(err: std::io::Error) -> Self {
        LoadError::Io(err.to_string())
    }
}

impl From<serde_json::Error> for LoadError {
    fn from(err: serde_json::Error) -> Self {
        LoadError::Parse(err.to_string())
    }
}

impl From<reqwest::Error> for LoadError {
    fn from(err: reqwest::Error) -> Self {
        match err.status() {
            Some(status) => LoadError::Status(status.as_u16()),
            None => LoadError::Network(err.to_string()),
        }
    }
}

/// Result type for dictionary loading
pub type LoadResult<T> = Result<T, LoadError>;
