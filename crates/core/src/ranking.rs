//! Leaderboard ordering. Display-only; never writes back to storage.

use crate::model::ScoreEntry;

/// A scoreboard entry with its 1-based position.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RankedEntry {
    pub rank: usize,
    pub entry: ScoreEntry,
}

/// Order entries by score descending, then earliest `recorded_at` first.
///
/// The sort is stable, so entries tied on both keys keep insertion order.
#[must_use]
pub fn rank_entries(entries: &[ScoreEntry]) -> Vec<ScoreEntry> {
    let mut ranked = entries.to_vec();
    ranked.sort_by(|a, b| {
        b.score
            .cmp(&a.score)
            .then_with(|| a.recorded_at.cmp(&b.recorded_at))
    });
    ranked
}

/// [`rank_entries`] with positions attached.
#[must_use]
pub fn leaderboard(entries: &[ScoreEntry]) -> Vec<RankedEntry> {
    rank_entries(entries)
        .into_iter()
        .enumerate()
        .map(|(idx, entry)| RankedEntry {
            rank: idx + 1,
            entry,
        })
        .collect()
}
