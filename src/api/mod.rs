//! # API Module
//!
//! This module provides the HTTP endpoints for Spomix's local web server.
//! It implements the OAuth redirect target, the confidential token proxy,
//! and a health check.
//!
//! ## Overview
//!
//! The API module is the web interface layer for Spomix, a command-line
//! interface for the Spotify API. It provides HTTP endpoints that handle:
//!
//! - **OAuth Redirect**: Receives the provider's redirect carrying the
//!   one-time authorization code and forwards it to the waiting login flow
//! - **Token Proxy**: Performs the Basic-authenticated exchange against the
//!   provider's token endpoint, keeping the client secret server-side
//! - **Health Monitoring**: Reports service status and version for probes
//!
//! ## Endpoints
//!
//! ### Authentication
//!
//! - [`callback`] - Handles the OAuth redirect from the authorization
//!   server. Hands the authorization code to the login flow over a channel
//!   and serves a page that strips the code from the visible address.
//! - [`token_post`] / [`token_get`] - Token proxy in both observed wire
//!   conventions: a POST carrying a JSON body and a GET carrying query
//!   parameters. Both accept either `{code, redirectUri}` or
//!   `{refresh_token}` and relay the provider's status and body verbatim.
//!
//! ### Monitoring
//!
//! - [`health`] - Health check endpoint returning application status and
//!   version information.
//!
//! ## Architecture
//!
//! The module is built using the [Axum](https://docs.rs/axum) web framework.
//! Each endpoint is an async function wired into Axum's routing system, with
//! per-request state injected through extensions: the callback receives the
//! code channel, the proxy handlers receive a [`ProxyState`].
//!
//! ## Security Considerations
//!
//! - The client secret is confined to [`ProxyState`]; it is read once from
//!   the environment and never echoed in any response
//! - The authorization code is single-use; the callback page removes it from
//!   the address bar so a reload cannot replay it
//! - Requests missing both a code and a refresh token are rejected with a
//!   400 before any provider traffic
//!
//! ## Usage Example
//!
//! ```rust,ignore
//! use axum::{Extension, Router, routing::{get, post}};
//! use spomix::api::{ProxyState, callback, health, token_get, token_post};
//!
//! let app = Router::new()
//!     .route("/callback", get(callback))
//!     .route("/api/token", post(token_post).get(token_get))
//!     .route("/health", get(health))
//!     .layer(Extension(ProxyState::from_env()));
//! ```
//!
//! ## Dependencies
//!
//! This module depends on:
//! - [`axum`] for HTTP server functionality
//! - [`tokio`] for async runtime support and channels
//! - [`serde_json`] for JSON serialization
//! - `base64` for the Basic authorization header
//!
//! ## Related Modules
//!
//! - [`crate::spotify`] - Spotify API integration and the login flow
//! - [`crate::types`] - Type definitions for token requests

mod callback;
mod health;
mod token;

pub use callback::callback;
pub use health::health;
pub use token::ProxyState;
pub use token::token_get;
pub use token::token_post;
