use std::sync::Arc;

use anyhow::Result;
use axum::{
    http::{header, HeaderValue},
    routing::{get, post},
    Router,
};
use tower_http::set_header::SetResponseHeaderLayer;
use tracing::info;
use tracing_subscriber::EnvFilter;

use hellocurrency_common::Config;

mod auth;
mod components;
mod links;
mod pages;

pub struct AppState {
    pub config: Config,
}

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::from_default_env().add_directive("hellocurrency=info".parse()?),
        )
        .init();

    let config = Config::from_env();
    let host = config.web_host.clone();
    let port = config.web_port;

    let state = Arc::new(AppState { config });

    let app = Router::new()
        // Health check
        .route("/", get(pages::health))
        // Merchant auth
        .route("/login", get(pages::login_page).post(pages::login_submit))
        .route("/logout", post(pages::logout).get(pages::logout))
        // Dashboard (SSR)
        .route("/dashboard", get(pages::dashboard_page))
        // JSON API
        .route("/api/formats", get(pages::api_formats))
        .with_state(state)
        // Formats are account configuration; never cache them
        .layer(SetResponseHeaderLayer::overriding(
            header::CACHE_CONTROL,
            HeaderValue::from_static("no-store"),
        ))
        // Logging layer: method + path + status + latency only
        .layer(
            tower_http::trace::TraceLayer::new_for_http().make_span_with(
                |request: &axum::http::Request<_>| {
                    tracing::info_span!(
                        "http_request",
                        method = %request.method(),
                        path = %request.uri().path(),
                    )
                },
            ),
        );

    let addr = format!("{host}:{port}");
    info!("Hello Currency API starting on {addr}");

    let listener = tokio::net::TcpListener::bind(&addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
