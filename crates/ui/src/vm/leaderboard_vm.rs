use quiz_core::RankedEntry;

use super::time_fmt::format_datetime;

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct LeaderboardRowVm {
    pub rank_label: String,
    pub name: String,
    pub score_label: String,
    pub date_label: String,
}

#[must_use]
pub fn map_leaderboard_rows(rows: &[RankedEntry]) -> Vec<LeaderboardRowVm> {
    rows.iter()
        .map(|row| LeaderboardRowVm {
            rank_label: format!("#{}", row.rank),
            name: row.entry.name.to_string(),
            score_label: format!("{}/{}", row.entry.score, row.entry.total),
            date_label: format_datetime(row.entry.recorded_at),
        })
        .collect()
}
