use std::sync::Arc;

use dotenvy::dotenv;

use whatspy_backend::config::AppConfig;
use whatspy_backend::{app, AppState};

#[tokio::main]
async fn main() {
    dotenv().ok();

    let _sentry_guard = std::env::var("SENTRY_DSN").ok().map(|dsn| {
        sentry::init((
            dsn,
            sentry::ClientOptions {
                release: sentry::release_name!(),
                ..Default::default()
            },
        ))
    });

    use tracing_subscriber::{fmt, EnvFilter};
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("info,whatspy_backend=debug"));
    fmt()
        .with_env_filter(filter)
        .with_target(true)
        .init();

    let config = AppConfig::from_env();
    let port = config.port;
    let state = Arc::new(AppState { config });
    let app = app(state);

    tracing::info!("Starting server on port {}", port);
    let listener = tokio::net::TcpListener::bind(format!("0.0.0.0:{}", port))
        .await
        .expect("Failed to bind server port");
    axum::serve(listener, app.into_make_service())
        .await
        .expect("Server error");
}
