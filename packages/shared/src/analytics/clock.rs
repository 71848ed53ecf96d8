use std::sync::LazyLock;

use regex::Regex;
use tracing::trace;

use crate::analytics::round2;
use crate::models::game::GameRecord;

static CLOCK_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"\[%clk (\d+):(\d+):(\d+)\]").expect("valid clock annotation regex")
});

/// Every `[%clk H:MM:SS]` reading in the text, in order, as total seconds.
/// Out-of-range readings saturate instead of being dropped, so each
/// reading still pairs with its textual neighbours.
pub fn extract_clock_seconds(move_text: &str) -> Vec<u64> {
    CLOCK_RE
        .captures_iter(move_text)
        .map(|caps| {
            let hours = parse_saturating(&caps[1]);
            let minutes = parse_saturating(&caps[2]);
            let seconds = parse_saturating(&caps[3]);
            hours
                .saturating_mul(3600)
                .saturating_add(minutes.saturating_mul(60))
                .saturating_add(seconds)
        })
        .collect()
}

// The pattern only captures digits, so overflow is the only parse failure.
fn parse_saturating(digits: &str) -> u64 {
    digits.parse().unwrap_or(u64::MAX)
}

/// Absolute clock change between each pair of consecutive readings.
///
/// Readings alternate between the two players and increments are not
/// subtracted, so a sample is the magnitude of the clock delta rather than
/// one player's thinking time.
pub fn move_time_samples(move_text: &str) -> Vec<u64> {
    extract_clock_seconds(move_text)
        .windows(2)
        .map(|pair| pair[0].abs_diff(pair[1]))
        .collect()
}

/// Mean of all clock-delta samples across the games, rounded to two
/// decimals. `None` when no game has at least two clock readings.
pub fn average_move_time(records: &[GameRecord]) -> Option<f64> {
    let mut total_time: u64 = 0;
    let mut total_moves: u64 = 0;

    for record in records {
        let Some(move_text) = record.move_text.as_deref() else {
            continue;
        };

        let samples = move_time_samples(move_text);
        if samples.is_empty() {
            trace!("No clock pairs in game {:?}", record.id);
            continue;
        }

        total_time = samples
            .iter()
            .fold(total_time, |total, sample| total.saturating_add(*sample));
        total_moves += samples.len() as u64;
    }

    if total_moves == 0 {
        return None;
    }

    Some(round2(total_time as f64 / total_moves as f64))
}
