/// Errors raised by the indexing pipeline
/// Fetch, Status and Parse are fatal: the whole run aborts on the first one
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum IndexerError {
    /// Invalid or missing configuration, detected before the pipeline starts
    Config(String),

    /// Transport-level failure while fetching a page
    Fetch { url: String, message: String },

    /// Non-success HTTP status for a page
    Status { url: String, code: u16 },

    /// Response body could not be read or decoded
    Parse { url: String, message: String },

    /// Internal pipeline error (worker task panicked or was aborted)
    Internal(String),
}

impl std::fmt::Display for IndexerError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            IndexerError::Config(msg) => write!(f, "Configuration error: {}", msg),
            IndexerError::Fetch { url, message } => {
                write!(f, "Failed to fetch '{}': {}", url, message)
            }
            IndexerError::Status { url, code } => {
                write!(f, "Got response status code {} for '{}'. Aborting.", code, url)
            }
            IndexerError::Parse { url, message } => {
                write!(f, "Failed to parse response from '{}': {}", url, message)
            }
            IndexerError::Internal(msg) => write!(f, "Internal pipeline error: {}", msg),
        }
    }
}

impl std::error::Error for IndexerError {}
