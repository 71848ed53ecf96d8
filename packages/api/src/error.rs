use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use shared::repositories::errors::player_data_repository_errors::PlayerDataRepositoryError;
use shared::services::errors::analytics_service_errors::AnalyticsServiceError;

#[derive(Debug)]
pub enum ApiError {
    AnalyticsService(AnalyticsServiceError),
}

impl From<AnalyticsServiceError> for ApiError {
    fn from(error: AnalyticsServiceError) -> Self {
        ApiError::AnalyticsService(error)
    }
}

impl ApiError {
    pub fn status(&self) -> StatusCode {
        match self {
            ApiError::AnalyticsService(
                AnalyticsServiceError::ValidationError(_) | AnalyticsServiceError::Analytics(_),
            ) => StatusCode::BAD_REQUEST,

            ApiError::AnalyticsService(AnalyticsServiceError::PlayerData(
                PlayerDataRepositoryError::NotFound,
            )) => StatusCode::NOT_FOUND,
            ApiError::AnalyticsService(AnalyticsServiceError::PlayerData(
                PlayerDataRepositoryError::UpstreamStatus(..)
                | PlayerDataRepositoryError::Http(_)
                | PlayerDataRepositoryError::Deserialization(_),
            )) => StatusCode::BAD_GATEWAY,

            ApiError::AnalyticsService(
                AnalyticsServiceError::GameRepository(_)
                | AnalyticsServiceError::RatingRepository(_),
            ) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status();
        let detail = match &self {
            // Storage failures stay in the logs.
            _ if status == StatusCode::INTERNAL_SERVER_ERROR => "Internal server error".to_string(),
            ApiError::AnalyticsService(error) => error.to_string(),
        };

        (status, Json(json!({ "detail": detail }))).into_response()
    }
}
