use std::collections::HashMap;

use tracing::debug;

use crate::analytics::openings::classify;
use crate::analytics::round2;
use crate::models::analytics::{GameSummary, OpeningAggregate, TopOpening};
use crate::models::game::{GameRecord, Side};

pub const DEFAULT_TOP_OPENINGS: usize = 3;

/// Which side `username` played, compared case-insensitively. White wins the
/// tie when a player is listed on both sides.
pub fn player_side(username: &str, record: &GameRecord) -> Option<Side> {
    let username = username.to_lowercase();
    [Side::White, Side::Black].into_iter().find(|side| {
        record
            .username(*side)
            .is_some_and(|name| name.to_lowercase() == username)
    })
}

/// Win/loss tallies and per-opening counts for one player.
///
/// Games the player did not take part in are skipped entirely. Every other
/// game with a classifiable opening adds to that opening's game count, but
/// only wins add opening credit. Openings keep first-seen order.
pub fn summarize<'a, I>(username: &str, records: I) -> GameSummary
where
    I: IntoIterator<Item = &'a GameRecord>,
{
    let mut summary = GameSummary::default();
    let mut index: HashMap<String, usize> = HashMap::new();

    for record in records {
        let Some(side) = player_side(username, record) else {
            debug!("Skipping game {:?}: {} did not play", record.id, username);
            continue;
        };

        let result = record.result(side);
        let won = result.is_some_and(|r| r.is_win());
        if won {
            summary.wins += 1;
        } else if result.is_some_and(|r| r.is_loss()) {
            summary.losses += 1;
        }

        let Some(key) = classify(record) else {
            continue;
        };

        let openings = &mut summary.openings;
        let slot = *index.entry(key.clone()).or_insert_with(|| {
            openings.push(OpeningAggregate::new(key));
            openings.len() - 1
        });

        let aggregate = &mut openings[slot];
        aggregate.games_played += 1;
        if won {
            aggregate.wins += 1;
        }
    }

    summary
}

/// Percentage of games won, rounded to two decimals.
pub fn win_rate(wins: u32, games: u32) -> Option<f64> {
    if games == 0 {
        return None;
    }
    Some(round2(f64::from(wins) / f64::from(games) * 100.0))
}

/// The `limit` most played openings. Equal counts keep their input order.
pub fn top_openings(openings: &[OpeningAggregate], limit: usize) -> Vec<TopOpening> {
    let mut ranked: Vec<&OpeningAggregate> = openings.iter().collect();
    // sort_by is stable, which is what keeps ties in first-seen order.
    ranked.sort_by(|a, b| b.games_played.cmp(&a.games_played));

    ranked
        .into_iter()
        .take(limit)
        .filter_map(|aggregate| {
            debug_assert!(aggregate.games_played > 0, "opening {} has no games", aggregate.key);
            let win_rate = win_rate(aggregate.wins, aggregate.games_played)?;
            Some(TopOpening {
                opening: aggregate.key.clone(),
                games: aggregate.games_played,
                wins: aggregate.wins,
                win_rate,
            })
        })
        .collect()
}
