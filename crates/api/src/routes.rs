use crate::handlers;
use crate::state::AppState;
use axum::{routing::get, Router};

pub fn create_api_routes(state: AppState) -> Router {
    Router::new()
        .route("/weather", get(handlers::get_weather))
        .route("/weather/health", get(handlers::health_check))
        .route("/weather/info", get(handlers::service_info))
        .with_state(state)
}
