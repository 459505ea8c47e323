use axum::{
    Extension, Router,
    routing::{get, post},
};
use std::{net::SocketAddr, str::FromStr};
use tokio::sync::mpsc;

use crate::{api, config, error};

/// Routes for the login flow: redirect target, token proxy, health check.
///
/// The callback handler gets the code channel, the proxy handlers get the
/// confidential state. Split out from the server start so tests can drive
/// the router without binding a socket.
pub fn router(code_tx: mpsc::Sender<String>, proxy_state: api::ProxyState) -> Router {
    Router::new()
        .route("/health", get(api::health))
        .route("/callback", get(api::callback).layer(Extension(code_tx)))
        .route(
            "/api/token",
            post(api::token_post)
                .get(api::token_get)
                .layer(Extension(proxy_state)),
        )
}

/// Routes for a standalone token proxy, without the login callback.
pub fn proxy_router(proxy_state: api::ProxyState) -> Router {
    Router::new()
        .route("/health", get(api::health))
        .route(
            "/api/token",
            post(api::token_post)
                .get(api::token_get)
                .layer(Extension(proxy_state)),
        )
}

pub async fn start_api_server(code_tx: mpsc::Sender<String>, proxy_state: api::ProxyState) {
    serve(router(code_tx, proxy_state)).await;
}

pub async fn start_proxy_server(proxy_state: api::ProxyState) {
    serve(proxy_router(proxy_state)).await;
}

async fn serve(app: Router) {
    let addr = match SocketAddr::from_str(&config::server_addr()) {
        Ok(addr) => addr,
        Err(e) => error!("Failed to parse server address: {}", e),
    };

    let listener = match tokio::net::TcpListener::bind(&addr).await {
        Ok(listener) => listener,
        Err(e) => error!("Failed to bind {}: {}", addr, e),
    };

    if let Err(e) = axum::serve(listener, app).await {
        error!("Server error: {}", e);
    }
}
