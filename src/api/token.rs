use axum::{
    Extension, Json,
    extract::Query,
    http::{StatusCode, header},
    response::{IntoResponse, Response},
};
use base64::{Engine, engine::general_purpose::STANDARD};
use reqwest::Client;
use serde_json::json;

use crate::{config, types::TokenProxyRequest};

/// Credentials for the confidential half of the token exchange.
///
/// The client secret lives here and nowhere else. Handlers receive this
/// state by extension; no other part of the process ever reads the secret.
#[derive(Debug, Clone)]
pub struct ProxyState {
    pub client_id: String,
    pub client_secret: String,
    pub token_url: String,
}

impl ProxyState {
    pub fn from_env() -> Self {
        ProxyState {
            client_id: config::spotify_client_id(),
            client_secret: config::spotify_client_secret(),
            token_url: config::spotify_token_url(),
        }
    }
}

pub async fn token_post(
    Extension(state): Extension<ProxyState>,
    Json(request): Json<TokenProxyRequest>,
) -> Response {
    exchange(&state, &request).await
}

pub async fn token_get(
    Extension(state): Extension<ProxyState>,
    Query(request): Query<TokenProxyRequest>,
) -> Response {
    exchange(&state, &request).await
}

async fn exchange(state: &ProxyState, request: &TokenProxyRequest) -> Response {
    let form: Vec<(&str, &str)> = if let Some(code) = request.code.as_deref() {
        let Some(redirect_uri) = request.redirect_uri.as_deref() else {
            return (
                StatusCode::BAD_REQUEST,
                Json(json!({ "error": "Missing required parameters" })),
            )
                .into_response();
        };

        vec![
            ("grant_type", "authorization_code"),
            ("code", code),
            ("redirect_uri", redirect_uri),
        ]
    } else if let Some(refresh_token) = request.refresh_token.as_deref() {
        vec![
            ("grant_type", "refresh_token"),
            ("refresh_token", refresh_token),
        ]
    } else {
        return (
            StatusCode::BAD_REQUEST,
            Json(json!({ "error": "Missing code or refresh_token" })),
        )
            .into_response();
    };

    let basic = STANDARD.encode(format!("{}:{}", state.client_id, state.client_secret));

    let client = Client::new();
    let response = client
        .post(&state.token_url)
        .header(header::AUTHORIZATION, format!("Basic {}", basic))
        .form(&form)
        .send()
        .await;

    match response {
        Ok(response) => {
            // The provider's status and body are relayed verbatim. The
            // secret never appears in any response.
            let status = response.status();
            let body = response.text().await.unwrap_or_default();

            (status, [(header::CONTENT_TYPE, "application/json")], body).into_response()
        }
        Err(_) => (
            StatusCode::BAD_GATEWAY,
            Json(json!({ "error": "Token exchange failed" })),
        )
            .into_response(),
    }
}
