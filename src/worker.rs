use crate::error::IndexerError;
use crate::extractor::TextExtractor;
use crate::fetcher::PageFetcher;
use crate::normalizer::normalize;
use crate::types::{job_url, JobId, PartialTable};
use std::sync::Arc;
use tokio::sync::{mpsc, Mutex};
use tokio::task::JoinHandle;
use tokio_util::sync::CancellationToken;
use tracing::{debug, info};

/// One worker of the pool
///
/// Drains the shared job queue: for each job it fetches the page, extracts
/// the selected text runs, normalizes and counts tokens locally, then emits
/// the per-job table to the collector. All per-job state is private to the
/// worker until emission, so no locking is needed on the counts.
pub struct Worker<F, E> {
    id: usize,
    base_url: String,
    fetcher: Arc<F>,
    extractor: Arc<E>,
    jobs: Arc<Mutex<mpsc::Receiver<JobId>>>,
    results: mpsc::Sender<PartialTable>,
    cancel: CancellationToken,
}

impl<F: PageFetcher, E: TextExtractor> Worker<F, E> {
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        id: usize,
        base_url: String,
        fetcher: Arc<F>,
        extractor: Arc<E>,
        jobs: Arc<Mutex<mpsc::Receiver<JobId>>>,
        results: mpsc::Sender<PartialTable>,
        cancel: CancellationToken,
    ) -> Self {
        Self {
            id,
            base_url,
            fetcher,
            extractor,
            jobs,
            results,
            cancel,
        }
    }

    /// Spawns the worker loop. The handle resolves once the job queue is
    /// closed and drained, the pipeline is cancelled, or a fetch fails.
    pub fn spawn(self) -> JoinHandle<Result<(), IndexerError>> {
        tokio::spawn(self.run())
    }

    async fn run(self) -> Result<(), IndexerError> {
        loop {
            let job = {
                let mut jobs = self.jobs.lock().await;
                tokio::select! {
                    _ = self.cancel.cancelled() => None,
                    job = jobs.recv() => job,
                }
            };
            let Some(job) = job else {
                debug!(worker = self.id, "no more jobs, exiting");
                return Ok(());
            };

            let url = job_url(&self.base_url, job);
            let html = match self.fetcher.fetch(&url).await {
                Ok(html) => html,
                Err(e) => {
                    // Fatal: a missing page would make the final ranking
                    // incomplete. Stop the whole pipeline.
                    self.cancel.cancel();
                    return Err(e);
                }
            };

            let counts = count_phrases(self.extractor.as_ref(), &html);

            if self.results.send(counts).await.is_err() {
                // Collector gone; nothing left to report to.
                return Ok(());
            }
            info!(worker = self.id, job, url, "job done");
        }
    }
}

/// Tokenizes every extracted run and counts normalized phrases for one job.
fn count_phrases<E: TextExtractor>(extractor: &E, html: &str) -> PartialTable {
    let mut counts = PartialTable::new();
    for run in extractor.extract(html) {
        let normalized = normalize(&run);
        for token in normalized.split_whitespace() {
            *counts.entry(token.to_string()).or_insert(0) += 1;
        }
    }
    counts
}

#[cfg(test)]
mod tests {
    use super::*;

    struct WholeText;

    impl TextExtractor for WholeText {
        fn extract(&self, html: &str) -> Vec<String> {
            vec![html.to_string()]
        }
    }

    #[test]
    fn test_count_phrases_normalizes_and_counts() {
        let counts = count_phrases(&WholeText, "Cat cat dog!");
        assert_eq!(counts.get("cat"), Some(&2));
        assert_eq!(counts.get("dog"), Some(&1));
        assert_eq!(counts.len(), 2);
    }

    #[test]
    fn test_count_phrases_empty_input() {
        let counts = count_phrases(&WholeText, "");
        assert!(counts.is_empty());
    }

    #[test]
    fn test_count_phrases_digits_only_tokens_vanish() {
        let counts = count_phrases(&WholeText, "42 1999 cat");
        assert_eq!(counts.len(), 1);
        assert_eq!(counts.get("cat"), Some(&1));
    }
}
