use crate::types::{GlobalTable, RankedEntry};
use std::collections::HashSet;

/// Ranks the global table: excluded phrases dropped, entries sorted by
/// descending count with ascending phrase as the tie-break, truncated to
/// `limit` entries. The secondary key makes the output deterministic across
/// runs even though the table iterates in arbitrary order.
pub fn rank(table: &GlobalTable, limit: usize, excluded: &HashSet<String>) -> Vec<RankedEntry> {
    let mut ranking: Vec<RankedEntry> = table
        .iter()
        .filter(|(phrase, _)| !excluded.contains(*phrase))
        .map(|(phrase, count)| RankedEntry {
            phrase: phrase.clone(),
            count: *count,
        })
        .collect();

    ranking.sort_by(|a, b| b.count.cmp(&a.count).then(a.phrase.cmp(&b.phrase)));
    ranking.truncate(limit);
    ranking
}
