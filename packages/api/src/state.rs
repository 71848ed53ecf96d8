use std::sync::Arc;

use shared::services::analytics_service::AnalyticsService;

#[derive(Clone)]
pub struct AppState {
    pub analytics_service: Arc<AnalyticsService>,
}
