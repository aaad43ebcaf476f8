use axum::{Extension, Router, routing::get};
use std::{net::SocketAddr, sync::Arc};
use tower_http::cors::CorsLayer;

use crate::{api, config::Config};

/// Builds the application router. Split out from [`start_api_server`] so
/// integration tests can drive it without binding a socket.
pub fn build_router(config: Arc<Config>) -> Router {
    Router::new()
        .route("/health", get(api::health))
        .route("/login", get(api::login))
        .route("/callback", get(api::callback))
        .route("/refresh_token", get(api::refresh_token))
        .route("/recommendations", get(api::recommendations))
        .layer(Extension(config))
        // The frontend is served from a different origin
        .layer(CorsLayer::permissive())
}

pub async fn start_api_server(config: Arc<Config>) {
    let addr = SocketAddr::from(([0, 0, 0, 0], config.port));
    let app = build_router(config);

    let listener = tokio::net::TcpListener::bind(&addr).await.unwrap();
    axum::serve(listener, app).await.unwrap();
}
