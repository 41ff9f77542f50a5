use crate::collector::spawn_collector;
use crate::error::IndexerError;
use crate::extractor::TextExtractor;
use crate::fetcher::PageFetcher;
use crate::job_source::{feed_jobs, QUEUE_CAPACITY};
use crate::types::{GlobalTable, JobId};
use crate::worker::Worker;
use std::sync::Arc;
use tokio::sync::{mpsc, Mutex};
use tokio_util::sync::CancellationToken;
use tracing::{debug, info};

/// Pipeline coordinates the whole indexing run: collector first, then the
/// worker pool, then the job feed; finally a join barrier over the workers
/// before the collector's table is read.
pub struct Pipeline<F, E> {
    fetcher: Arc<F>,
    extractor: Arc<E>,
    cancel: CancellationToken,
}

impl<F: PageFetcher, E: TextExtractor> Pipeline<F, E> {
    pub fn new(fetcher: F, extractor: E) -> Self {
        Self {
            fetcher: Arc::new(fetcher),
            extractor: Arc::new(extractor),
            cancel: CancellationToken::new(),
        }
    }

    /// Returns a clone of the cancellation token for external control
    pub fn cancellation_token(&self) -> CancellationToken {
        self.cancel.clone()
    }

    /// Runs jobs `start..=end` against `base_url` with at most `workers`
    /// concurrent workers and returns the merged global table.
    ///
    /// Fail-fast: the first fetch error cancels the remaining work and is
    /// returned instead of a table.
    pub async fn run(
        &self,
        base_url: &str,
        start: JobId,
        end: JobId,
        workers: usize,
    ) -> Result<GlobalTable, IndexerError> {
        if end < 1 {
            return Err(IndexerError::Config(
                "end page must be at least 1".to_string(),
            ));
        }
        if start > end {
            return Err(IndexerError::Config(format!(
                "start ({}) must not exceed end ({})",
                start, end
            )));
        }

        let job_count = (end - start + 1) as usize;
        // Never spawn more workers than there are jobs; the surplus would
        // only block on an already-closed queue.
        let workers = workers.min(job_count).max(1);
        info!(start, end, workers, "pipeline starting");

        let (job_tx, job_rx) = mpsc::channel::<JobId>(QUEUE_CAPACITY);
        let (result_tx, result_rx) = mpsc::channel(QUEUE_CAPACITY);

        let collector = spawn_collector(result_rx);

        let jobs = Arc::new(Mutex::new(job_rx));
        let mut handles = Vec::with_capacity(workers);
        for id in 0..workers {
            let worker = Worker::new(
                id,
                base_url.to_string(),
                self.fetcher.clone(),
                self.extractor.clone(),
                jobs.clone(),
                result_tx.clone(),
                self.cancel.clone(),
            );
            handles.push(worker.spawn());
        }
        // Only workers may hold the queue endpoints: the result channel then
        // closes exactly when the last worker exits, so the collector cannot
        // finalize while a partial table is still in flight, and the job feed
        // fails fast instead of blocking if the whole pool is gone.
        drop(result_tx);
        drop(jobs);

        feed_jobs(job_tx, start, end, self.cancel.clone()).await;

        // Join barrier. Every worker has exited past this loop.
        let mut first_error = None;
        for (id, handle) in handles.into_iter().enumerate() {
            match handle.await {
                Ok(Ok(())) => {}
                Ok(Err(e)) => {
                    debug!(worker = id, error = %e, "worker failed");
                    first_error.get_or_insert(e);
                }
                Err(join_error) => {
                    first_error.get_or_insert(IndexerError::Internal(format!(
                        "worker {} panicked: {}",
                        id, join_error
                    )));
                }
            }
        }

        let global = collector
            .await
            .map_err(|e| IndexerError::Internal(format!("collector panicked: {}", e)))?;

        if let Some(error) = first_error {
            return Err(error);
        }
        if self.cancel.is_cancelled() {
            return Err(IndexerError::Internal("pipeline cancelled".to_string()));
        }

        info!(phrases = global.len(), "pipeline finished");
        Ok(global)
    }
}
