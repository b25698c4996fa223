pub mod health;

use axum::{
    routing::{get, post},
    Router,
};

use crate::state::AppState;
use crate::words::handlers;

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health::health_handler))
        // Frontend endpoint
        .route("/api", get(handlers::handle_generate_query))
        // Crossword API
        .route("/api/v1/crosswords", post(handlers::handle_generate))
        .route("/api/v1/crosswords/layout", post(handlers::handle_layout))
        .with_state(state)
}
