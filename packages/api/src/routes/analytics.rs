use axum::{
    extract::{Path, State},
    routing::get,
    Json, Router,
};
use lambda_http::tracing::{debug, error};
use shared::models::analytics::{AnalyticsSummary, MonthlyResult, RatingOverview, TopOpening};

use crate::{error::ApiError, state::AppState};

pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/analytics/{username}", get(rating_overview))
        .route("/analytics/{username}/top-opening", get(top_opening))
        .route(
            "/analytics/{username}/top-opening/{year}/{month}",
            get(top_opening_for_month),
        )
        .route(
            "/analytics/{username}/{year}/{month}/results",
            get(monthly_results),
        )
        .route(
            "/analytics/{username}/{year}/{month}/summary",
            get(summary),
        )
}

async fn rating_overview(
    State(state): State<AppState>,
    Path(username): Path<String>,
) -> Result<Json<RatingOverview>, ApiError> {
    state
        .analytics_service
        .rating_overview(&username)
        .await
        .map(Json)
        .map_err(|e| {
            error!("Failed to load ratings for {}: {}", username, e);
            ApiError::from(e)
        })
}

async fn top_opening(
    State(state): State<AppState>,
    Path(username): Path<String>,
) -> Result<Json<Option<TopOpening>>, ApiError> {
    state
        .analytics_service
        .top_opening(&username, None)
        .await
        .map(Json)
        .map_err(|e| {
            error!("Failed to rank openings for {}: {}", username, e);
            ApiError::from(e)
        })
}

async fn top_opening_for_month(
    State(state): State<AppState>,
    Path((username, year, month)): Path<(String, i32, u32)>,
) -> Result<Json<Option<TopOpening>>, ApiError> {
    state
        .analytics_service
        .top_opening(&username, Some((year, month)))
        .await
        .map(Json)
        .map_err(|e| {
            error!(
                "Failed to rank openings for {} ({}-{:02}): {}",
                username, year, month, e
            );
            ApiError::from(e)
        })
}

async fn monthly_results(
    State(state): State<AppState>,
    Path((username, year, month)): Path<(String, i32, u32)>,
) -> Result<Json<MonthlyResult>, ApiError> {
    let result = state
        .analytics_service
        .monthly_results(&username, year, month)
        .await
        .map_err(|e| {
            error!(
                "Failed to compute results for {} ({}-{:02}): {}",
                username, year, month, e
            );
            ApiError::from(e)
        })?;

    debug!(
        "{} in {}-{:02}: {} wins, {} losses",
        username, year, month, result.wins, result.losses
    );
    Ok(Json(result))
}

async fn summary(
    State(state): State<AppState>,
    Path((username, year, month)): Path<(String, i32, u32)>,
) -> Result<Json<AnalyticsSummary>, ApiError> {
    state
        .analytics_service
        .live_summary(&username, year, month)
        .await
        .map(Json)
        .map_err(|e| {
            error!(
                "Failed to summarize {} ({}-{:02}): {}",
                username, year, month, e
            );
            ApiError::from(e)
        })
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use async_trait::async_trait;
    use axum::{
        body::{to_bytes, Body},
        http::{Request, StatusCode},
    };
    use serde_json::Value;
    use shared::models::game::{GameRecord, GameResult, RawGame};
    use shared::models::stats::{RatingObservation, RawModeStats, RawRating, RawStats};
    use shared::repositories::errors::{
        game_repository_errors::GameRepositoryError,
        player_data_repository_errors::PlayerDataRepositoryError,
        rating_repository_errors::RatingRepositoryError,
    };
    use shared::repositories::game_repository::GameRepository;
    use shared::repositories::player_data_repository::PlayerDataRepository;
    use shared::repositories::rating_repository::RatingRepository;
    use shared::services::analytics_service::AnalyticsService;
    use tower::ServiceExt;

    use crate::routes::router;
    use crate::state::AppState;

    const DEC_2023_MID: i64 = 1_702_000_000;

    struct StubPlayerData;

    #[async_trait]
    impl PlayerDataRepository for StubPlayerData {
        async fn fetch_games(
            &self,
            _username: &str,
            _year: i32,
            _month: u32,
        ) -> Result<Vec<RawGame>, PlayerDataRepositoryError> {
            Ok(Vec::new())
        }

        async fn fetch_stats(&self, username: &str) -> Result<RawStats, PlayerDataRepositoryError> {
            if username == "ghost" {
                return Err(PlayerDataRepositoryError::NotFound);
            }
            Ok(RawStats {
                chess_blitz: Some(RawModeStats {
                    last: Some(RawRating {
                        rating: Some(1502),
                        date: Some(DEC_2023_MID),
                    }),
                    best: None,
                }),
                ..Default::default()
            })
        }
    }

    struct StubGames;

    #[async_trait]
    impl GameRepository for StubGames {
        async fn save_games(
            &self,
            _username: &str,
            records: &[GameRecord],
        ) -> Result<usize, GameRepositoryError> {
            Ok(records.len())
        }

        async fn get_games(&self, username: &str) -> Result<Vec<GameRecord>, GameRepositoryError> {
            let game = |result: GameResult, eco: &str| GameRecord {
                white_username: Some(username.to_string()),
                black_username: Some("bob".to_string()),
                white_result: Some(result),
                black_result: Some(GameResult::Agreed),
                eco_code: Some(eco.to_string()),
                end_time: Some(DEC_2023_MID),
                ..Default::default()
            };
            Ok(vec![
                game(GameResult::Win, "C50"),
                game(GameResult::Resigned, "C50"),
                game(GameResult::Timeout, "B01"),
            ])
        }
    }

    struct StubRatings;

    #[async_trait]
    impl RatingRepository for StubRatings {
        async fn save_observations(
            &self,
            _observations: &[RatingObservation],
        ) -> Result<(), RatingRepositoryError> {
            Ok(())
        }

        async fn get_history(
            &self,
            _username: &str,
        ) -> Result<Vec<RatingObservation>, RatingRepositoryError> {
            Ok(Vec::new())
        }
    }

    fn app() -> axum::Router {
        let analytics_service = Arc::new(
            AnalyticsService::new(
                Arc::new(StubPlayerData),
                Arc::new(StubGames),
                Arc::new(StubRatings),
            )
            .with_top_openings_limit(3),
        );
        router().with_state(AppState { analytics_service })
    }

    async fn get(uri: &str) -> (StatusCode, Value) {
        let response = app()
            .oneshot(Request::builder().uri(uri).body(Body::empty()).unwrap())
            .await
            .unwrap();
        let status = response.status();
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        let body = serde_json::from_slice(&bytes).unwrap_or(Value::Null);
        (status, body)
    }

    #[tokio::test]
    async fn test_health_check() {
        let response = app()
            .oneshot(Request::builder().uri("/health").body(Body::empty()).unwrap())
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
    }

    #[tokio::test]
    async fn test_monthly_results() {
        let (status, body) = get("/analytics/alice/2023/12/results").await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["wins"], 1);
        assert_eq!(body["losses"], 1);
    }

    #[tokio::test]
    async fn test_monthly_results_for_empty_month_are_zero() {
        let (status, body) = get("/analytics/alice/2024/1/results").await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["wins"], 0);
        assert_eq!(body["losses"], 0);
    }

    #[tokio::test]
    async fn test_invalid_month_is_bad_request() {
        let (status, body) = get("/analytics/alice/2023/13/results").await;

        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert!(body["detail"].as_str().unwrap().contains("Invalid month"));
    }

    #[tokio::test]
    async fn test_top_opening() {
        let (status, body) = get("/analytics/alice/top-opening").await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["opening"], "ECO C50");
        assert_eq!(body["games"], 2);
        assert_eq!(body["win_rate"], 50.0);
    }

    #[tokio::test]
    async fn test_top_opening_for_month_without_games_is_null() {
        let (status, body) = get("/analytics/alice/top-opening/2024/2").await;

        assert_eq!(status, StatusCode::OK);
        assert!(body.is_null());
    }

    #[tokio::test]
    async fn test_rating_overview() {
        let (status, body) = get("/analytics/Alice").await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["username"], "alice");
        assert_eq!(body["latest_blitz_rating"], 1502);
        assert_eq!(body["latest_ratings"]["blitz"], 1502);
    }

    #[tokio::test]
    async fn test_unknown_player_is_not_found() {
        let (status, _) = get("/analytics/ghost").await;

        assert_eq!(status, StatusCode::NOT_FOUND);
    }

    #[tokio::test]
    async fn test_summary_with_empty_archive() {
        let (status, body) = get("/analytics/alice/2023/12/summary").await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["games"], 0);
        assert!(body["avg_move_time"].is_null());
        assert_eq!(body["top_openings"], serde_json::json!([]));
    }

    #[tokio::test]
    async fn test_sync_user_games() {
        let (status, body) = get("/user/alice/2023/12").await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["fetched"], 0);
        assert_eq!(body["ratings_recorded"], 1);
    }
}
