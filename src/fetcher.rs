use crate::error::IndexerError;
use async_trait::async_trait;

/// Trait for fetching one remote document by URL
/// Abstracts the transport so the pipeline can run against mocks in tests
#[async_trait]
pub trait PageFetcher: Send + Sync + 'static {
    /// Fetch the document body at `url`
    /// Any transport failure or non-success status is an error; the pipeline
    /// treats every fetch error as fatal
    async fn fetch(&self, url: &str) -> Result<String, IndexerError>;
}
