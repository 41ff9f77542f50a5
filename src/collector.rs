use crate::types::{GlobalTable, PartialTable};
use tokio::sync::mpsc;
use tokio::task::JoinHandle;
use tracing::debug;

/// Spawns the collector task: the single writer of the global table.
///
/// It owns the table for its whole mutable lifetime and merges every partial
/// it receives. The handle resolves with the finished table once the result
/// channel closes, which the pipeline arranges to happen only after every
/// worker has exited, so no late partial can be lost and no reader can ever
/// observe the table mid-merge.
pub fn spawn_collector(mut results: mpsc::Receiver<PartialTable>) -> JoinHandle<GlobalTable> {
    tokio::spawn(async move {
        let mut global = GlobalTable::new();
        let mut merged = 0usize;

        while let Some(partial) = results.recv().await {
            for (phrase, count) in partial {
                *global.entry(phrase).or_insert(0) += count;
            }
            merged += 1;
        }

        debug!(merged, phrases = global.len(), "collector finished");
        global
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    #[tokio::test]
    async fn test_merge_is_additive() {
        let (tx, rx) = mpsc::channel(1);
        let collector = spawn_collector(rx);

        let first: PartialTable = HashMap::from([("cat".to_string(), 2), ("dog".to_string(), 1)]);
        let second: PartialTable = HashMap::from([("dog".to_string(), 2)]);
        tx.send(first).await.unwrap();
        tx.send(second).await.unwrap();
        drop(tx);

        let global = collector.await.unwrap();
        assert_eq!(global.get("cat"), Some(&2));
        assert_eq!(global.get("dog"), Some(&3));
    }

    #[tokio::test]
    async fn test_empty_partials_leave_table_untouched() {
        let (tx, rx) = mpsc::channel(1);
        let collector = spawn_collector(rx);

        tx.send(PartialTable::new()).await.unwrap();
        tx.send(PartialTable::new()).await.unwrap();
        drop(tx);

        let global = collector.await.unwrap();
        assert!(global.is_empty());
    }

    #[tokio::test]
    async fn test_no_partials_yields_empty_table() {
        let (tx, rx) = mpsc::channel::<PartialTable>(1);
        let collector = spawn_collector(rx);
        drop(tx);

        let global = collector.await.unwrap();
        assert!(global.is_empty());
    }
}
