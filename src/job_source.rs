use crate::types::JobId;
use tokio::sync::mpsc;
use tokio_util::sync::CancellationToken;

/// Feeds the job queue with every page number in `[start, end]`, in order,
/// then closes the queue by dropping the sender.
///
/// The queue has capacity 1, so each send waits for a worker to take the
/// previous job; the source never runs ahead of worker demand. The feed stops
/// early when the pipeline is cancelled or every worker is gone.
pub async fn feed_jobs(
    tx: mpsc::Sender<JobId>,
    start: JobId,
    end: JobId,
    cancel: CancellationToken,
) {
    for job in start..=end {
        tokio::select! {
            _ = cancel.cancelled() => break,
            sent = tx.send(job) => {
                if sent.is_err() {
                    // All receivers dropped: the pool died, nothing to feed.
                    break;
                }
            }
        }
    }
}

/// Capacity of the job and result queues. One slot keeps the handoff
/// rendezvous-like: producers block until the consumer side is ready.
pub const QUEUE_CAPACITY: usize = 1;
