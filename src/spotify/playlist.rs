use reqwest::Method;

use crate::{
    error::Error,
    management::TokenStore,
    spotify::Gateway,
    types::{AddTracksRequest, AddTracksResponse, CreatePlaylistRequest, Playlist, UserProfile},
    warning,
};

/// Retrieves the profile of the user the stored credential belongs to.
pub async fn get_user_profile<S: TokenStore>(gateway: &Gateway<S>) -> Result<UserProfile, Error> {
    let url = format!("{uri}/me", uri = gateway.api_url());
    let json = gateway.call(Method::GET, &url, None).await?;

    Ok(serde_json::from_value(json)?)
}

/// Creates a new, initially empty playlist on the user's account.
///
/// Two sequential requests: the user profile is fetched first to learn the
/// account ID, then the playlist is created under that account. A failure of
/// the profile request aborts the operation before anything is created.
///
/// # Arguments
///
/// * `gateway` - Authenticated request gateway
/// * `name` - Playlist display name
/// * `description` - Playlist description, may be empty
/// * `public` - Whether the playlist is publicly visible
///
/// # Example
///
/// ```
/// let playlist = create_playlist(&gateway, "Discovery Mix", "Seeded from Discovery", true).await?;
/// println!("Created playlist {}", playlist.id);
/// ```
pub async fn create_playlist<S: TokenStore>(
    gateway: &Gateway<S>,
    name: &str,
    description: &str,
    public: bool,
) -> Result<Playlist, Error> {
    let user = get_user_profile(gateway).await?;

    let body = serde_json::to_value(CreatePlaylistRequest {
        name: name.to_string(),
        description: description.to_string(),
        public,
    })?;

    let url = format!(
        "{uri}/users/{user_id}/playlists",
        uri = gateway.api_url(),
        user_id = user.id
    );
    let json = gateway.call(Method::POST, &url, Some(body)).await?;

    Ok(serde_json::from_value(json)?)
}

/// Appends tracks to a playlist in the given order.
///
/// The URI list is forwarded as-is. Duplicates are not filtered; the API
/// accepts at most 100 URIs per request.
pub async fn add_tracks_to_playlist<S: TokenStore>(
    gateway: &Gateway<S>,
    playlist_id: &str,
    track_uris: Vec<String>,
) -> Result<AddTracksResponse, Error> {
    let body = serde_json::to_value(AddTracksRequest { uris: track_uris })?;

    let url = format!(
        "{uri}/playlists/{id}/tracks",
        uri = gateway.api_url(),
        id = playlist_id
    );
    let json = gateway.call(Method::POST, &url, Some(body)).await?;

    Ok(serde_json::from_value(json)?)
}

/// Appends tracks in batches of 100, the API limit for a single request.
///
/// A rejected batch is skipped with a warning and the remaining batches are
/// still attempted. Returns the number of tracks actually added, which can
/// fall short of the input length.
pub async fn add_tracks_batched<S: TokenStore>(
    gateway: &Gateway<S>,
    playlist_id: &str,
    track_uris: Vec<String>,
) -> usize {
    let mut added = 0;
    for chunk in track_uris.chunks(100) {
        match add_tracks_to_playlist(gateway, playlist_id, chunk.to_vec()).await {
            Ok(_) => added += chunk.len(),
            Err(e) => warning!("Failed to add tracks to playlist: {}", e),
        }
    }

    added
}
