use crate::analytics::aggregation::{summarize, top_openings};
use crate::analytics::clock::average_move_time;
use crate::analytics::ratings::latest_ratings;
use crate::models::analytics::AnalyticsSummary;
use crate::models::game::GameRecord;
use crate::models::stats::StatsSnapshot;

/// Assemble the full analytics view for one player. `games` counts every
/// supplied record, including ones the player's name does not match.
pub fn build_summary(
    username: &str,
    records: &[GameRecord],
    snapshot: &StatsSnapshot,
    top_n: usize,
) -> AnalyticsSummary {
    let summary = summarize(username, records);

    AnalyticsSummary {
        username: username.to_string(),
        games: records.len(),
        wins: summary.wins,
        losses: summary.losses,
        avg_move_time: average_move_time(records),
        latest_ratings: latest_ratings(snapshot),
        top_openings: top_openings(&summary.openings, top_n),
    }
}
