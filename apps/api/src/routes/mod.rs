pub mod health;

use axum::{
    routing::{get, post},
    Router,
};

use crate::causes::handlers::handle_suggest_causes;
use crate::state::AppState;
use crate::suggestions::handlers::handle_get_suggestions;

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/", get(health::root_handler))
        .route("/api/health", get(health::health_handler))
        .route("/api/get-suggestions", post(handle_get_suggestions))
        // Extended variant
        .route("/sugerir_causas", post(handle_suggest_causes))
        .with_state(state)
}
