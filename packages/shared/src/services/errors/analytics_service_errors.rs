use crate::analytics::errors::AnalyticsError;
use crate::repositories::errors::{
    game_repository_errors::GameRepositoryError,
    player_data_repository_errors::PlayerDataRepositoryError,
    rating_repository_errors::RatingRepositoryError,
};

#[derive(Debug)]
pub enum AnalyticsServiceError {
    ValidationError(String),
    Analytics(AnalyticsError),
    PlayerData(PlayerDataRepositoryError),
    GameRepository(GameRepositoryError),
    RatingRepository(RatingRepositoryError),
}

impl std::fmt::Display for AnalyticsServiceError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            AnalyticsServiceError::ValidationError(msg) => write!(f, "Validation error: {}", msg),
            AnalyticsServiceError::Analytics(err) => write!(f, "Analytics error: {}", err),
            AnalyticsServiceError::PlayerData(err) => write!(f, "Player data error: {}", err),
            AnalyticsServiceError::GameRepository(err) => {
                write!(f, "Game repository error: {}", err)
            }
            AnalyticsServiceError::RatingRepository(err) => {
                write!(f, "Rating repository error: {}", err)
            }
        }
    }
}

impl std::error::Error for AnalyticsServiceError {}

impl From<AnalyticsError> for AnalyticsServiceError {
    fn from(err: AnalyticsError) -> Self {
        AnalyticsServiceError::Analytics(err)
    }
}

impl From<PlayerDataRepositoryError> for AnalyticsServiceError {
    fn from(err: PlayerDataRepositoryError) -> Self {
        AnalyticsServiceError::PlayerData(err)
    }
}

impl From<GameRepositoryError> for AnalyticsServiceError {
    fn from(err: GameRepositoryError) -> Self {
        AnalyticsServiceError::GameRepository(err)
    }
}

impl From<RatingRepositoryError> for AnalyticsServiceError {
    fn from(err: RatingRepositoryError) -> Self {
        AnalyticsServiceError::RatingRepository(err)
    }
}
