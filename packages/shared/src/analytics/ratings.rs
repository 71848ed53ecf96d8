use std::collections::BTreeMap;

use crate::models::stats::{Mode, RatingObservation, RatingPoint, StatsSnapshot};

/// One observation per mode that has a dated latest rating. Undated
/// readings have no place in the time series.
pub fn extract(username: &str, snapshot: &StatsSnapshot) -> Vec<RatingObservation> {
    snapshot
        .modes
        .iter()
        .filter_map(|(mode, latest)| {
            Some(RatingObservation {
                username: username.to_string(),
                mode: *mode,
                rating: latest.rating,
                observed_at: latest.observed_at?,
            })
        })
        .collect()
}

pub fn latest_ratings(snapshot: &StatsSnapshot) -> BTreeMap<Mode, i32> {
    snapshot
        .modes
        .iter()
        .map(|(mode, latest)| (*mode, latest.rating))
        .collect()
}

/// Blitz is the player's headline rating.
pub fn latest_blitz_rating(snapshot: &StatsSnapshot) -> Option<i32> {
    snapshot.get(Mode::Blitz).map(|latest| latest.rating)
}

/// Group observations into one series per mode, oldest first. Repeated
/// snapshots of the same reading collapse into a single point.
pub fn series_by_mode(observations: &[RatingObservation]) -> BTreeMap<Mode, Vec<RatingPoint>> {
    let mut series: BTreeMap<Mode, Vec<RatingPoint>> = BTreeMap::new();

    for observation in observations {
        series.entry(observation.mode).or_default().push(RatingPoint {
            rating: observation.rating,
            observed_at: observation.observed_at,
        });
    }

    for points in series.values_mut() {
        points.sort_by_key(|point| point.observed_at);
        points.dedup();
    }

    series
}
