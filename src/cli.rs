use clap::Parser;
use std::path::PathBuf;

/// Indexes phrase frequencies across the numbered pages of a thread and
/// prints a ranked frequency table.
#[derive(Debug, Parser)]
#[command(name = "phrase-indexer", version)]
pub struct Cli {
    /// URL of the thread to index; the page number is appended to it
    #[arg(long)]
    pub thread_url: String,

    /// CSS selector for the interesting parts of each page
    #[arg(long)]
    pub selector: String,

    /// Page number on which to end indexing (inclusive)
    #[arg(long)]
    pub end: u64,

    /// Page number on which to start indexing
    #[arg(long, default_value_t = 1)]
    pub start: u64,

    /// Number of workers fetching and scanning pages
    #[arg(long, default_value_t = 100)]
    pub workers: usize,

    /// Limit output to the top N entries
    #[arg(long)]
    pub limit: Option<usize>,

    /// Path to a file with phrases to exclude from the output, one per line
    #[arg(long)]
    pub exclude: Option<PathBuf>,
}
