pub mod health;

use axum::{
    extract::DefaultBodyLimit,
    routing::{get, post},
    Router,
};
use tower_http::services::ServeDir;

use crate::checker::handlers as checker;
use crate::generator::handlers as generator;
use crate::state::AppState;

pub fn build_router(state: AppState) -> Router {
    let body_limit = state.config.max_upload_bytes;
    let static_dir = state.config.static_dir.clone();

    let router = Router::new()
        .route("/health", get(health::health_handler))
        // Generator mode
        .route("/api/v1/cv/generate", post(generator::handle_generate_cv))
        // Checker mode
        .route("/api/v1/cv/check", post(checker::handle_check_cv))
        .route(
            "/api/v1/cv/check/upload",
            post(checker::handle_check_cv_upload),
        )
        .layer(DefaultBodyLimit::max(body_limit))
        .with_state(state);

    // Browser UI bundle, if deployed alongside the API
    match static_dir {
        Some(dir) => router
            .fallback_service(ServeDir::new(dir).append_index_html_on_directories(true)),
        None => router,
    }
}
