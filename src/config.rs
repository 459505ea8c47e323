//! Configuration management for spomix.
//!
//! This module handles loading and accessing configuration values from environment
//! variables and `.env` files. It provides a centralized way to manage application
//! configuration: Spotify endpoints, OAuth client credentials, the local server
//! address, and the token proxy settings.
//!
//! The configuration system follows a hierarchical approach:
//! 1. Environment variables (highest priority)
//! 2. `.env` file in the local data directory
//! 3. Application defaults (where applicable)
//!
//! The client id and client secret are backend-only values: they are read by the
//! token proxy endpoint and never leave the process as part of a client request.

use dotenv;
use std::{env, path::PathBuf};

/// Loads environment variables from a `.env` file in the local data directory.
///
/// Creates the necessary directory structure if it doesn't exist and loads
/// environment variables from a `.env` file located in the platform-specific
/// local data directory under `spomix/.env`. This allows users to store
/// configuration securely without hardcoding sensitive values.
///
/// # Directory Structure
///
/// The function looks for the `.env` file in:
/// - Linux: `~/.local/share/spomix/.env`
/// - macOS: `~/Library/Application Support/spomix/.env`
/// - Windows: `%LOCALAPPDATA%/spomix/.env`
///
/// # Returns
///
/// Returns `Ok(())` if the environment file is successfully loaded, or an error
/// string if directory creation or file loading fails.
///
/// # Example
///
/// ```
/// use spomix::config;
///
/// #[tokio::main]
/// async fn main() {
///     if let Err(e) = config::load_env().await {
///         eprintln!("Configuration error: {}", e);
///     }
/// }
/// ```
pub async fn load_env() -> Result<(), String> {
    let mut path = dirs::data_local_dir().unwrap_or_else(|| PathBuf::from("."));
    path.push("spomix/.env");
    if let Some(parent) = path.parent() {
        async_fs::create_dir_all(parent)
            .await
            .map_err(|e| e.to_string())?;
    }

    dotenv::from_path(path).map_err(|e| e.to_string())?;
    Ok(())
}

/// Returns the address for the local HTTP server.
///
/// Retrieves the `SERVER_ADDRESS` environment variable which specifies the
/// address and port where the local server binds. The server hosts the OAuth
/// callback route during login and the token proxy endpoint.
///
/// # Panics
///
/// Panics if the `SERVER_ADDRESS` environment variable is not set.
///
/// # Example
///
/// ```
/// let addr = server_addr(); // e.g., "127.0.0.1:8080"
/// ```
pub fn server_addr() -> String {
    env::var("SERVER_ADDRESS").expect("SERVER_ADDRESS must be set")
}

/// Returns the Spotify API client ID.
///
/// Retrieves the `SPOTIFY_CLIENT_ID` environment variable, the client ID
/// obtained when registering the application with Spotify's developer
/// platform. Used when building the consent URL and by the token proxy.
///
/// # Panics
///
/// Panics if the `SPOTIFY_CLIENT_ID` environment variable is not set.
pub fn spotify_client_id() -> String {
    env::var("SPOTIFY_CLIENT_ID").expect("SPOTIFY_CLIENT_ID must be set")
}

/// Returns the Spotify API client secret.
///
/// Retrieves the `SPOTIFY_CLIENT_SECRET` environment variable. The secret is
/// consumed exclusively by the token proxy endpoint for the Basic-authenticated
/// exchange with Spotify's token endpoint.
///
/// # Panics
///
/// Panics if the `SPOTIFY_CLIENT_SECRET` environment variable is not set.
///
/// # Security Note
///
/// The client secret must never be included in a request sent by the
/// client-side exchange code, logged, or committed to version control.
pub fn spotify_client_secret() -> String {
    env::var("SPOTIFY_CLIENT_SECRET").expect("SPOTIFY_CLIENT_SECRET must be set")
}

/// Returns the OAuth redirect URI.
///
/// Retrieves the `SPOTIFY_REDIRECT_URI` environment variable, the callback URL
/// Spotify redirects to after user consent. Must match the redirect URI
/// registered in the Spotify application settings and point at the local
/// server's `/callback` route.
///
/// # Panics
///
/// Panics if the `SPOTIFY_REDIRECT_URI` environment variable is not set.
///
/// # Example
///
/// ```
/// let redirect_uri = spotify_redirect_uri(); // e.g., "http://127.0.0.1:8080/callback"
/// ```
pub fn spotify_redirect_uri() -> String {
    env::var("SPOTIFY_REDIRECT_URI").expect("SPOTIFY_REDIRECT_URI must be set")
}

/// Returns the OAuth scopes requested during authorization.
///
/// Retrieves the `SPOTIFY_AUTH_SCOPE` environment variable. The scopes
/// determine what the application may do on the user's behalf; playlist
/// creation needs `playlist-modify-public` or `playlist-modify-private` in
/// addition to `user-read-private`.
///
/// # Panics
///
/// Panics if the `SPOTIFY_AUTH_SCOPE` environment variable is not set.
pub fn spotify_scope() -> String {
    env::var("SPOTIFY_AUTH_SCOPE").expect("SPOTIFY_AUTH_SCOPE must be set")
}

/// Returns the Spotify OAuth authorization URL.
///
/// Retrieves the `SPOTIFY_AUTH_URL` environment variable, the base URL of
/// Spotify's consent page where the user is sent to grant permissions.
///
/// # Panics
///
/// Panics if the `SPOTIFY_AUTH_URL` environment variable is not set.
///
/// # Example
///
/// ```
/// let auth_url = spotify_auth_url(); // e.g., "https://accounts.spotify.com/authorize"
/// ```
pub fn spotify_auth_url() -> String {
    env::var("SPOTIFY_AUTH_URL").expect("SPOTIFY_AUTH_URL must be set")
}

/// Returns the Spotify OAuth token endpoint URL.
///
/// Retrieves the `SPOTIFY_TOKEN_URL` environment variable. Only the token
/// proxy talks to this endpoint; client-side code exchanges codes through the
/// proxy instead.
///
/// # Panics
///
/// Panics if the `SPOTIFY_TOKEN_URL` environment variable is not set.
///
/// # Example
///
/// ```
/// let token_url = spotify_token_url(); // e.g., "https://accounts.spotify.com/api/token"
/// ```
pub fn spotify_token_url() -> String {
    env::var("SPOTIFY_TOKEN_URL").expect("SPOTIFY_TOKEN_URL must be set")
}

/// Returns the Spotify Web API base URL.
///
/// Retrieves the `SPOTIFY_API_URL` environment variable containing the base
/// URL for resource endpoints (search, audio features, recommendations,
/// profile, playlists).
///
/// # Panics
///
/// Panics if the `SPOTIFY_API_URL` environment variable is not set.
///
/// # Example
///
/// ```
/// let api_url = spotify_api_url(); // e.g., "https://api.spotify.com/v1"
/// ```
pub fn spotify_api_url() -> String {
    env::var("SPOTIFY_API_URL").expect("SPOTIFY_API_URL must be set")
}

/// Returns the URL of the token proxy endpoint.
///
/// Retrieves the `TOKEN_PROXY_URL` environment variable, the endpoint the
/// exchange client sends authorization codes and refresh tokens to. For the
/// built-in server this is `http://<SERVER_ADDRESS>/api/token`; it may also
/// point at a separately deployed proxy.
///
/// # Panics
///
/// Panics if the `TOKEN_PROXY_URL` environment variable is not set.
pub fn token_proxy_url() -> String {
    env::var("TOKEN_PROXY_URL").expect("TOKEN_PROXY_URL must be set")
}

/// Returns the calling convention for the token proxy.
///
/// Retrieves the optional `TOKEN_PROXY_STYLE` environment variable. Accepted
/// values are `json_post` (JSON body over POST) and `query_get` (query string
/// over GET); defaults to `json_post` when unset.
pub fn token_proxy_style() -> String {
    env::var("TOKEN_PROXY_STYLE").unwrap_or_else(|_| "json_post".to_string())
}
