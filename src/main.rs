use clap::Parser;
use phrase_indexer::cli::Cli;
use phrase_indexer::{
    load_exclusions, rank, HttpFetcher, IndexerError, Pipeline, SelectorExtractor,
};
use std::collections::HashSet;
use std::process::ExitCode;
use tracing::error;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")))
        .with_writer(std::io::stderr)
        .init();

    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(e) => {
            // Missing arguments exit with status 1, usage on stderr;
            // --help and --version are not errors.
            let _ = e.print();
            return ExitCode::from(if e.use_stderr() { 1 } else { 0 });
        }
    };

    match run(cli).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            error!("{}", e);
            ExitCode::from(1)
        }
    }
}

async fn run(cli: Cli) -> Result<(), IndexerError> {
    validate_base_url(&cli.thread_url)?;

    let excluded = match &cli.exclude {
        Some(path) => load_exclusions(path)?,
        None => HashSet::new(),
    };

    let fetcher = HttpFetcher::new()?;
    let extractor = SelectorExtractor::new(&cli.selector)?;
    let pipeline = Pipeline::new(fetcher, extractor);

    // Ctrl+C cancels the pipeline instead of killing it mid-merge.
    let cancel = pipeline.cancellation_token();
    tokio::spawn(async move {
        if tokio::signal::ctrl_c().await.is_ok() {
            error!("interrupted, shutting down");
            cancel.cancel();
        }
    });

    let global = pipeline
        .run(&cli.thread_url, cli.start, cli.end, cli.workers)
        .await?;

    let limit = cli.limit.unwrap_or(usize::MAX);
    for entry in rank(&global, limit, &excluded) {
        println!("{}\t{}", entry.count, entry.phrase);
    }
    Ok(())
}

fn validate_base_url(base_url: &str) -> Result<(), IndexerError> {
    let parsed = url::Url::parse(base_url)
        .map_err(|e| IndexerError::Config(format!("invalid thread URL '{}': {}", base_url, e)))?;
    if !matches!(parsed.scheme(), "http" | "https") {
        return Err(IndexerError::Config(format!(
            "thread URL must be http or https, got '{}'",
            parsed.scheme()
        )));
    }
    Ok(())
}
