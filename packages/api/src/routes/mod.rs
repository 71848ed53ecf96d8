use axum::{routing::get, Router};

use crate::state::AppState;

pub mod analytics;
pub mod health;
pub mod user;

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/health", get(health::health_check))
        .merge(user::routes())
        .merge(analytics::routes())
}
