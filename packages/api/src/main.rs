use axum::Router;
use lambda_http::{run, tracing, Error};
use std::env::set_var;
use std::sync::Arc;
use tower_http::cors::{Any, CorsLayer};

pub mod error;
pub mod routes;
pub mod state;

use shared::repositories::game_repository::DynamoDbGameRepository;
use shared::repositories::player_data_repository::ChessComRepository;
use shared::repositories::rating_repository::DynamoDbRatingRepository;
use shared::services::analytics_service::AnalyticsService;

#[tokio::main]
async fn main() -> Result<(), Error> {
    set_var("AWS_LAMBDA_HTTP_IGNORE_STAGE_IN_PATH", "true");

    // required to enable CloudWatch error logging by the runtime
    tracing::init_default_subscriber();

    let config = aws_config::load_from_env().await;
    let client = aws_sdk_dynamodb::Client::new(&config);

    let player_data = Arc::new(ChessComRepository::new());
    let game_repository = Arc::new(DynamoDbGameRepository::new(client.clone())?);
    let rating_repository = Arc::new(DynamoDbRatingRepository::new(client)?);
    let analytics_service = Arc::new(AnalyticsService::new(
        player_data,
        game_repository,
        rating_repository,
    ));

    let app_state = state::AppState { analytics_service };

    // The dashboards are served from other origins.
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    let app = Router::new()
        .merge(routes::router())
        .layer(cors)
        .with_state(app_state);

    run(app).await
}
