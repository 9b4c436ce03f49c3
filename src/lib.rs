use std::sync::Arc;

use axum::http::Method;
use axum::routing::{get, post};
use axum::Router;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::{DefaultMakeSpan, DefaultOnResponse, TraceLayer};
use tracing::Level;

pub mod config;
pub mod error;
pub mod handlers {
    pub mod photo_handlers;
}
pub mod utils {
    pub mod phone;
    pub mod retry;
}

use config::AppConfig;
use handlers::photo_handlers;

pub struct AppState {
    pub config: AppConfig,
}

async fn health_check() -> &'static str {
    "OK"
}

pub fn app(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/api/health", get(health_check))
        .route("/api/whatsapp-photo", post(photo_handlers::fetch_whatsapp_photo))
        .layer(
            TraceLayer::new_for_http()
                .make_span_with(DefaultMakeSpan::new().level(Level::INFO))
                .on_response(DefaultOnResponse::new().level(Level::INFO)),
        )
        .layer(
            // The funnel frontend is served from another origin; the
            // endpoint itself is public, so any origin may call it.
            CorsLayer::new()
                .allow_methods([Method::GET, Method::POST, Method::OPTIONS])
                .allow_origin(Any)
                .allow_headers(Any),
        )
        .with_state(state)
}
