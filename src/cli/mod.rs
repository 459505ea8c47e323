//! # CLI Module
//!
//! This module provides the command-line interface layer for Spomix, a
//! Spotify API client that builds recommendation playlists from a seed
//! track. It implements all user-facing CLI commands and coordinates between
//! the auth flow, the request gateway, and the domain operations.
//!
//! ## Overview
//!
//! The CLI module is the primary interface between users and the Spomix
//! functionality. It provides commands for:
//!
//! - **Authentication Management**: OAuth 2.0 authorization-code flow
//!   through the local callback server and token proxy
//! - **Track Discovery**: Catalog search and audio-feature inspection
//! - **Mix Generation**: The end-to-end seed-to-playlist workflow
//! - **Proxy Hosting**: Running the standalone confidential token proxy
//!
//! ## Command Categories
//!
//! ### Authentication
//!
//! - [`auth`] - Runs the login flow: local server, browser consent, code
//!   exchange, token persistence
//! - [`logout`] - Discards the stored credential
//!
//! ### Track Operations
//!
//! - [`search`] - Searches the catalog and renders matching tracks as a table
//! - [`features`] - Shows the audio-feature vector of a single track
//!
//! ### Mix Operations
//!
//! - [`mix`] - Searches for a seed, analyzes its audio features, gathers
//!   feature-steered recommendations, and persists them as a new playlist
//!
//! ### Server Operations
//!
//! - [`serve`] - Hosts only the token proxy and health endpoints
//!
//! ## Architecture Design
//!
//! The CLI module follows a layered architecture approach:
//!
//! ```text
//! CLI Layer (User Interface)
//!     ↓
//! Spotify Layer (Flow, Gateway, Domain Operations)
//!     ↓
//! Management Layer (Token Storage)
//!     ↓
//! Network Layer (HTTP Requests)
//! ```
//!
//! Each command builds its gateway over the file-backed token store, so a
//! credential persisted by `auth` is visible to every later invocation.
//!
//! ## Error Handling Philosophy
//!
//! Commands present library errors instead of propagating them: recoverable
//! conditions print a warning and continue, terminal ones print an error and
//! exit. A missing or expired credential surfaces as a clear instruction to
//! run `spomix auth`.
//!
//! ## Progress and User Experience
//!
//! All network-bound operations provide feedback:
//!
//! - **Progress Indicators**: Spinners while requests are in flight
//! - **Status Messages**: Seed and playlist announcements between steps
//! - **Detailed Output**: Result tables with name, artists, and track ID
//!
//! ## Usage Patterns
//!
//! ### Initial Setup
//! ```bash
//! spomix auth                      # Authenticate with Spotify
//! ```
//!
//! ### Regular Usage
//! ```bash
//! spomix search "discovery"        # Find candidate seed tracks
//! spomix features 4uLU6hMC...      # Inspect a track's audio features
//! spomix mix "discovery"           # Build a recommendation playlist
//! ```
//!
//! ### Advanced Usage
//! ```bash
//! spomix mix "discovery" --name "Friday Mix" --limit 30 --public
//! spomix serve                     # Host the token proxy standalone
//! spomix auth --force              # Re-run consent for another account
//! ```
//!
//! ## Dependencies
//!
//! This module depends on several core application components:
//! - [`crate::spotify`] - Auth flow, gateway, and domain operations
//! - [`crate::management`] - Token storage
//! - [`crate::types`] - Data structures and table row definitions
//! - [`crate::utils`] - Formatting helpers

mod auth;
mod mix;
mod serve;
mod tracks;

pub use auth::auth;
pub use auth::logout;
pub use mix::mix;
pub use serve::serve;
pub use tracks::features;
pub use tracks::search;
