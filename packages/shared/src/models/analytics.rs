use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use crate::models::stats::{Mode, RatingPoint};

/// Per-opening tally. Recomputed on every query, never stored.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OpeningAggregate {
    pub key: String,
    pub games_played: u32,
    pub wins: u32,
}

impl OpeningAggregate {
    pub fn new(key: String) -> Self {
        OpeningAggregate {
            key,
            games_played: 0,
            wins: 0,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TopOpening {
    pub opening: String,
    pub games: u32,
    pub wins: u32,
    /// Percentage rounded to two decimals.
    pub win_rate: f64,
}

/// Win/loss counts plus every opening seen, in first-seen order.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct GameSummary {
    pub wins: u32,
    pub losses: u32,
    pub openings: Vec<OpeningAggregate>,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct MonthlyResult {
    pub wins: u32,
    pub losses: u32,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AnalyticsSummary {
    pub username: String,
    pub games: usize,
    pub wins: u32,
    pub losses: u32,
    pub avg_move_time: Option<f64>,
    pub latest_ratings: BTreeMap<Mode, i32>,
    pub top_openings: Vec<TopOpening>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RatingOverview {
    pub username: String,
    pub latest_ratings: BTreeMap<Mode, i32>,
    pub latest_blitz_rating: Option<i32>,
    /// Rating time series per mode, oldest first.
    pub history: BTreeMap<Mode, Vec<RatingPoint>>,
}

/// Outcome of pulling one month of games into storage.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SyncReport {
    pub username: String,
    pub year: i32,
    pub month: u32,
    pub fetched: usize,
    pub saved: usize,
    pub ratings_recorded: usize,
}
