//! Error taxonomy for token handling and Spotify API calls.
//!
//! Every fallible library operation returns [`Error`]. The variants map
//! directly onto what a caller can do about the failure:
//!
//! - [`Error::NotAuthenticated`] - no credential is stored; start the auth
//!   flow before calling anything else.
//! - [`Error::AuthenticationExpired`] - the stored credential was rejected
//!   upstream and has been invalidated; re-authenticate or refresh.
//! - [`Error::ExchangeFailed`] - the token proxy answered with a non-success
//!   status during code exchange or refresh.
//! - [`Error::RequestFailed`] - a resource request answered with a
//!   non-success status other than 401.
//! - [`Error::Transport`] - the HTTP call itself never completed.
//! - [`Error::Io`] / [`Error::Serde`] - token store reads and writes.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
    /// No credential is stored, or the stored one has already expired
    /// locally. No network call was made.
    #[error("not authenticated, run `spomix auth` first")]
    NotAuthenticated,

    /// The upstream API rejected the bearer token with a 401. The stored
    /// credential has been cleared.
    #[error("authentication expired, run `spomix auth` again")]
    AuthenticationExpired,

    /// The token proxy responded with a non-success status. Carries the
    /// status and the raw response body for diagnostics.
    #[error("token exchange failed with status {status}: {body}")]
    ExchangeFailed { status: u16, body: String },

    /// A resource request responded with a non-success status other than 401.
    #[error("API request failed with status {status}")]
    RequestFailed { status: u16 },

    /// The request could not be completed at the transport level, or a
    /// response body could not be read.
    #[error("transport error: {0}")]
    Transport(#[from] reqwest::Error),

    #[error("storage error: {0}")]
    Io(#[from] std::io::Error),

    #[error("malformed stored token: {0}")]
    Serde(#[from] serde_json::Error),

    #[error("invalid URL: {0}")]
    Url(#[from] url::ParseError),
}
