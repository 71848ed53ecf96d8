use axum::{
    extract::{Path, State},
    routing::get,
    Json, Router,
};
use lambda_http::tracing::{debug, error};
use shared::models::analytics::SyncReport;

use crate::{error::ApiError, state::AppState};

pub fn routes() -> Router<AppState> {
    Router::new().route("/user/{username}/{year}/{month}", get(sync_user_games))
}

/// Fetch a month of games from the provider and store them.
async fn sync_user_games(
    State(state): State<AppState>,
    Path((username, year, month)): Path<(String, i32, u32)>,
) -> Result<Json<SyncReport>, ApiError> {
    let report = state
        .analytics_service
        .sync_month(&username, year, month)
        .await
        .map_err(|e| {
            error!(
                "Failed to sync games for {} ({}-{:02}): {}",
                username, year, month, e
            );
            ApiError::from(e)
        })?;

    debug!("Synced {} games for {}", report.saved, report.username);
    Ok(Json(report))
}
