//! # Spotify Integration Module
//!
//! This module provides the complete interface to the Spotify Web API used by
//! Spomix: the authorization-code OAuth flow, the token exchange against a
//! confidential proxy, the authenticated request gateway, and the domain
//! operations for search, audio features, recommendations, and playlists.
//!
//! ## Overview
//!
//! The module implements an SDK-like interface for the Spotify Web API
//! operations required by Spomix. It abstracts away HTTP requests, the OAuth
//! flow, and API quirks, providing a clean Rust interface for the CLI layer.
//!
//! ## Architecture
//!
//! The module follows a layered organization where every API request funnels
//! through a single authenticated gateway:
//!
//! ```text
//! Application Layer (CLI)
//!          ↓
//! Spotify Integration Layer
//!     ├── Authentication (OAuth 2.0 authorization code)
//!     ├── Token Exchange (confidential proxy client)
//!     ├── Request Gateway (bearer auth, error mapping)
//!     ├── Track Operations (search, features, recommendations)
//!     └── Playlist Operations (create, add tracks)
//!          ↓
//! HTTP Layer (reqwest, JSON)
//!          ↓
//! Spotify Web API / Token Proxy
//! ```
//!
//! ## Core Modules
//!
//! ### Authentication Module
//!
//! [`auth`] - Implements the OAuth 2.0 authorization-code flow:
//! - **Flow Controller**: [`AuthFlow`] state machine from `LoggedOut` through
//!   `Redirecting` and `ExchangingCode` to `LoggedIn`
//! - **Session Resume**: Picks up a stored credential across invocations
//! - **Completion Signal**: One-time channel that fires exactly once per
//!   successful exchange, never on failure
//! - **Browser Integration**: Automatic browser launch for user authorization
//! - **Local Callback Server**: Temporary HTTP server for receiving the
//!   OAuth redirect
//!
//! ### Token Exchange Module
//!
//! [`exchange`] - Talks to the token proxy holding the client secret:
//! - **Code Grant**: Swaps the one-time authorization code for a credential
//! - **Refresh Grant**: Swaps a refresh token for a fresh credential
//! - **Dual Conventions**: Speaks both the JSON-POST and the query-GET proxy
//!   wire formats through one client
//! - **Secret Hygiene**: No request built by this process' client side ever
//!   carries the client secret
//!
//! ### Gateway Module
//!
//! [`gateway`] - Single choke point for authenticated API requests:
//! - **Fail Fast**: Absent or locally expired credentials fail without any
//!   network traffic
//! - **Bearer Auth**: Attaches the stored access token to every request
//! - **Rejection Handling**: A 401 clears the store so the next call fails
//!   fast instead of re-sending a dead token
//! - **Single Attempt**: One request per call, no retries, no silent refresh
//!
//! ### Track Operations Module
//!
//! [`tracks`] - Catalog search and recommendation seeding:
//! - **Track Search**: Free-text search returning unwrapped track items
//! - **Audio Features**: Per-track feature analysis retrieval
//! - **Feature-Steered Recommendations**: Forwards every numeric feature of
//!   the seed as a `target_*` tuning parameter
//!
//! ### Playlist Operations Module
//!
//! [`playlist`] - Persists a recommendation set on the user's account:
//! - **Profile Lookup**: Resolves the account ID owning the credential
//! - **Playlist Creation**: Creates an empty playlist under that account
//! - **Track Addition**: Appends track URIs in order, up to 100 per request
//!
//! ## Authentication Strategy
//!
//! The module implements OAuth 2.0 authorization code with a confidential
//! token proxy:
//!
//! 1. **Authorization Request**: Directs the user to the provider's consent
//!    page with `show_dialog=true`
//! 2. **Local Callback**: Receives the one-time authorization code via the
//!    local HTTP server
//! 3. **Proxy Exchange**: The proxy performs the Basic-authenticated POST to
//!    the provider's token endpoint; only the proxy sees the client secret
//! 4. **Token Storage**: The credential is persisted with an absolute
//!    expiration instant computed at receipt time
//!
//! ## Error Handling Philosophy
//!
//! Expiry is surfaced, never hidden. The gateway performs exactly one
//! attempt per call and reports `NotAuthenticated`, `AuthenticationExpired`,
//! or `RequestFailed` so the caller decides whether to refresh or to send
//! the user back through login. Transport failures are kept distinct from
//! upstream rejections.
//!
//! ## API Coverage
//!
//! ### Catalog
//! - `GET /search` - Track search with free-text queries
//! - `GET /audio-features/{id}` - Audio feature analysis per track
//! - `GET /recommendations` - Seeded, feature-steered recommendations
//!
//! ### User Data
//! - `GET /me` - Profile of the authenticated user
//!
//! ### Playlist Operations
//! - `POST /users/{user_id}/playlists` - Create new playlists
//! - `POST /playlists/{playlist_id}/tracks` - Add tracks to playlists
//!
//! ### Authentication
//! - Token proxy endpoint - Code exchange and refresh operations
//!
//! ## Thread Safety
//!
//! The module is designed for async single-threaded use:
//! - All operations use async/await for non-blocking I/O
//! - Token store handles are cheap clones sharing one backing slot
//! - No global mutable state or unsafe operations
//!
//! ## Dependencies
//!
//! - **reqwest** - HTTP client with JSON support and async capabilities
//! - **serde_json** - JSON serialization and deserialization
//! - **chrono** - Receipt-time arithmetic for token expiration
//! - **tokio** - Async runtime, channels for code delivery and completion
//! - **url** - Consent and query URL construction
//!
//! ## Security Considerations
//!
//! - **Secret Confinement**: The client secret lives only in the proxy
//!   endpoints; no client-side request carries it
//! - **Code Hygiene**: The authorization code is consumed exactly once and
//!   stripped from the visible address after use
//! - **Limited Scope**: Requests only the permissions the workflow needs

pub mod auth;
pub mod exchange;
pub mod gateway;
pub mod playlist;
pub mod tracks;

pub use auth::AuthFlow;
pub use auth::AuthState;
pub use exchange::ExchangeClient;
pub use exchange::ProxyStyle;
pub use gateway::Gateway;
