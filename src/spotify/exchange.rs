use std::str::FromStr;

use chrono::Utc;
use reqwest::Client;

use crate::{
    config,
    error::Error,
    types::{Credential, TokenProxyRequest, TokenResponse},
};

/// Wire convention spoken by a token proxy deployment.
///
/// Two proxy generations exist in the wild and this client speaks both:
///
/// - `JsonPost`: POST with a JSON body, `{"code": ..., "redirectUri": ...}`
///   for the code grant and `{"refresh_token": ...}` for the refresh grant.
/// - `QueryGet`: GET with query parameters, `?code=...&redirectUri=...` or
///   `?refresh_token=...`.
///
/// Selected through the `TOKEN_PROXY_STYLE` environment variable, values
/// `json_post` (default) and `query_get`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ProxyStyle {
    JsonPost,
    QueryGet,
}

impl FromStr for ProxyStyle {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "json_post" => Ok(ProxyStyle::JsonPost),
            "query_get" => Ok(ProxyStyle::QueryGet),
            other => Err(format!("unknown token proxy style '{}'", other)),
        }
    }
}

/// Client for the token proxy, the only party that may hold the client
/// secret.
///
/// Swaps an authorization code or a refresh token for a fresh access token.
/// The proxy performs the confidential call to the provider's token endpoint
/// on our behalf, so no request built here ever carries the client secret.
///
/// # Error Handling
///
/// - Proxy responds with a non-success status: [`Error::ExchangeFailed`]
///   carrying the proxy's status code and response body verbatim
/// - Network call cannot complete: [`Error::Transport`]
///
/// Exactly one request per call. Failed exchanges are surfaced, never
/// retried.
///
/// # Example
///
/// ```
/// let client = ExchangeClient::from_env();
/// let credential = client.exchange_code("AQA...code", &config::spotify_redirect_uri()).await?;
/// println!("Token expires at {}", credential.expires_at);
/// ```
#[derive(Debug, Clone)]
pub struct ExchangeClient {
    http: Client,
    endpoint: String,
    style: ProxyStyle,
}

impl ExchangeClient {
    pub fn new(endpoint: impl Into<String>, style: ProxyStyle) -> Self {
        ExchangeClient {
            http: Client::new(),
            endpoint: endpoint.into(),
            style,
        }
    }

    /// Builds a client from `TOKEN_PROXY_URL` and `TOKEN_PROXY_STYLE`.
    ///
    /// An unrecognized style value falls back to `json_post`.
    pub fn from_env() -> Self {
        let style = config::token_proxy_style()
            .parse()
            .unwrap_or(ProxyStyle::JsonPost);
        ExchangeClient::new(config::token_proxy_url(), style)
    }

    /// Exchanges an authorization code for a credential.
    ///
    /// The code is single-use. The `redirect_uri` must match the one used in
    /// the authorization request or the provider rejects the grant.
    ///
    /// On success the returned credential's `expires_at` is computed as the
    /// response receipt time plus the provider-reported lifetime in seconds.
    pub async fn exchange_code(&self, code: &str, redirect_uri: &str) -> Result<Credential, Error> {
        let request = TokenProxyRequest {
            code: Some(code.to_string()),
            redirect_uri: Some(redirect_uri.to_string()),
            refresh_token: None,
        };

        self.request_token(&request).await
    }

    /// Exchanges a refresh token for a fresh credential.
    ///
    /// Same contract as [`exchange_code`](ExchangeClient::exchange_code),
    /// using the refresh grant. The provider may or may not rotate the
    /// refresh token; the returned credential carries whatever came back.
    pub async fn refresh(&self, refresh_token: &str) -> Result<Credential, Error> {
        let request = TokenProxyRequest {
            code: None,
            redirect_uri: None,
            refresh_token: Some(refresh_token.to_string()),
        };

        self.request_token(&request).await
    }

    async fn request_token(&self, request: &TokenProxyRequest) -> Result<Credential, Error> {
        let response = match self.style {
            ProxyStyle::JsonPost => self.http.post(&self.endpoint).json(request).send().await?,
            ProxyStyle::QueryGet => self.http.get(&self.endpoint).query(request).send().await?,
        };

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(Error::ExchangeFailed {
                status: status.as_u16(),
                body,
            });
        }

        let received_at = Utc::now();
        let token: TokenResponse = response.json().await?;

        Ok(Credential::from_token_response(token, received_at))
    }
}
