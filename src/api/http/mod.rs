// src/api/http/mod.rs

pub mod browse;
pub mod health;
pub mod login;
pub mod media;

use std::sync::Arc;

use axum::{
    Router,
    routing::{get, post},
};

use crate::shell::shell_handler;
use crate::state::AppState;

/// Routes mounted under /api.
pub fn create_api_router() -> Router<Arc<AppState>> {
    Router::new()
        .route("/login", post(login::login))
        .route("/browse", get(browse::browse_directory))
        .route("/image/{*path}", get(media::serve_image))
        .route("/thumbnail/{*path}", get(media::serve_thumbnail))
}

/// Full application router: API routes, health probes, and the static
/// shell fallback for everything else.
pub fn create_app(state: Arc<AppState>) -> Router {
    Router::new()
        .nest("/api", create_api_router())
        .route("/health", get(health::health_check))
        .route("/ready", get(health::readiness_check))
        .route("/live", get(health::liveness_check))
        .fallback(shell_handler)
        .with_state(state)
}
