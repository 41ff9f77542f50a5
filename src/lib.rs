mod types;
pub use types::{job_url, GlobalTable, JobId, PartialTable, RankedEntry};

mod error;
pub use error::IndexerError;

mod normalizer;
pub use normalizer::normalize;

mod fetcher;
pub use fetcher::PageFetcher;

mod http_fetcher;
pub use http_fetcher::HttpFetcher;

mod extractor;
pub use extractor::{SelectorExtractor, TextExtractor};

mod job_source;
mod worker;
mod collector;

mod ranker;
pub use ranker::rank;

mod exclusion;
pub use exclusion::load_exclusions;

mod pipeline;
pub use pipeline::Pipeline;

pub mod cli;
