use std::sync::Arc;

use tracing::{debug, info};

use crate::analytics::aggregation::{summarize, top_openings, DEFAULT_TOP_OPENINGS};
use crate::analytics::monthly::{games_in_month, month_bounds, monthly_result};
use crate::analytics::normalizer::normalize_all;
use crate::analytics::ratings::{extract, latest_blitz_rating, latest_ratings, series_by_mode};
use crate::analytics::summary::build_summary;
use crate::models::analytics::{AnalyticsSummary, MonthlyResult, RatingOverview, SyncReport, TopOpening};
use crate::models::stats::StatsSnapshot;
use crate::repositories::game_repository::GameRepository;
use crate::repositories::player_data_repository::PlayerDataRepository;
use crate::repositories::rating_repository::RatingRepository;
use crate::services::errors::analytics_service_errors::AnalyticsServiceError;

/// Runs the fetch, normalize, persist and aggregate pipeline. The analytics
/// themselves are pure functions; this only feeds them.
pub struct AnalyticsService {
    player_data: Arc<dyn PlayerDataRepository + Send + Sync>,
    games: Arc<dyn GameRepository + Send + Sync>,
    ratings: Arc<dyn RatingRepository + Send + Sync>,
    top_openings_limit: usize,
}

impl AnalyticsService {
    pub fn new(
        player_data: Arc<dyn PlayerDataRepository + Send + Sync>,
        games: Arc<dyn GameRepository + Send + Sync>,
        ratings: Arc<dyn RatingRepository + Send + Sync>,
    ) -> Self {
        let top_openings_limit = std::env::var("TOP_OPENINGS_LIMIT")
            .ok()
            .and_then(|value| value.parse().ok())
            .filter(|limit| *limit > 0)
            .unwrap_or(DEFAULT_TOP_OPENINGS);

        AnalyticsService {
            player_data,
            games,
            ratings,
            top_openings_limit,
        }
    }

    pub fn with_top_openings_limit(mut self, limit: usize) -> Self {
        self.top_openings_limit = limit;
        self
    }

    /// Pull one month of games plus the current stats into storage.
    pub async fn sync_month(
        &self,
        username: &str,
        year: i32,
        month: u32,
    ) -> Result<SyncReport, AnalyticsServiceError> {
        let username = normalize_username(username)?;
        month_bounds(year, month)?;

        // Both fetches finish before anything is written.
        let raw_games = self.player_data.fetch_games(&username, year, month).await?;
        let stats = self.player_data.fetch_stats(&username).await?;

        let fetched = raw_games.len();
        let records = normalize_all(raw_games);
        let saved = self.games.save_games(&username, &records).await?;

        let observations = extract(&username, &StatsSnapshot::from(&stats));
        self.ratings.save_observations(&observations).await?;

        info!(
            "Synced {} of {} games and {} ratings for {} ({}-{:02})",
            saved,
            fetched,
            observations.len(),
            username,
            year,
            month
        );

        Ok(SyncReport {
            username,
            year,
            month,
            fetched,
            saved,
            ratings_recorded: observations.len(),
        })
    }

    /// Summary straight from the provider, without touching storage.
    pub async fn live_summary(
        &self,
        username: &str,
        year: i32,
        month: u32,
    ) -> Result<AnalyticsSummary, AnalyticsServiceError> {
        let username = normalize_username(username)?;
        month_bounds(year, month)?;

        let raw_games = self.player_data.fetch_games(&username, year, month).await?;
        let stats = self.player_data.fetch_stats(&username).await?;
        let records = normalize_all(raw_games);

        debug!("Summarizing {} games for {}", records.len(), username);
        Ok(build_summary(
            &username,
            &records,
            &StatsSnapshot::from(&stats),
            self.top_openings_limit,
        ))
    }

    /// Latest ratings from the provider, recorded into the history before
    /// the history is read back.
    pub async fn rating_overview(
        &self,
        username: &str,
    ) -> Result<RatingOverview, AnalyticsServiceError> {
        let username = normalize_username(username)?;

        let stats = self.player_data.fetch_stats(&username).await?;
        let snapshot = StatsSnapshot::from(&stats);
        self.ratings
            .save_observations(&extract(&username, &snapshot))
            .await?;
        let history = self.ratings.get_history(&username).await?;

        Ok(RatingOverview {
            latest_ratings: latest_ratings(&snapshot),
            latest_blitz_rating: latest_blitz_rating(&snapshot),
            history: series_by_mode(&history),
            username,
        })
    }

    /// Most played opening among stored games, optionally limited to games
    /// that ended in `(year, month)`.
    pub async fn top_opening(
        &self,
        username: &str,
        month: Option<(i32, u32)>,
    ) -> Result<Option<TopOpening>, AnalyticsServiceError> {
        let username = normalize_username(username)?;
        if let Some((year, month)) = month {
            month_bounds(year, month)?;
        }

        let records = self.games.get_games(&username).await?;
        let summary = match month {
            Some((year, month)) => summarize(&username, games_in_month(&records, year, month)?),
            None => summarize(&username, &records),
        };

        Ok(top_openings(&summary.openings, 1).into_iter().next())
    }

    pub async fn monthly_results(
        &self,
        username: &str,
        year: i32,
        month: u32,
    ) -> Result<MonthlyResult, AnalyticsServiceError> {
        let username = normalize_username(username)?;
        month_bounds(year, month)?;

        let records = self.games.get_games(&username).await?;
        Ok(monthly_result(&username, &records, year, month)?)
    }
}

/// Lower-case and check a provider username before it is used in a lookup.
fn normalize_username(username: &str) -> Result<String, AnalyticsServiceError> {
    let username = username.trim().to_lowercase();

    if username.is_empty() {
        return Err(AnalyticsServiceError::ValidationError(
            "Username cannot be empty".to_string(),
        ));
    }
    if !username
        .chars()
        .all(|c| c.is_ascii_alphanumeric() || c == '_' || c == '-')
    {
        return Err(AnalyticsServiceError::ValidationError(format!(
            "Invalid username: {}",
            username
        )));
    }

    Ok(username)
}
