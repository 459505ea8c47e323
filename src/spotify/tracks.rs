use reqwest::Method;
use url::Url;

use crate::{
    error::Error,
    management::TokenStore,
    spotify::Gateway,
    types::{AudioFeatures, RecommendationsResponse, SearchResponse, Track},
    utils,
};

/// Searches the catalog for tracks matching a free-text query.
///
/// Issues a track-typed search through the gateway and unwraps the paging
/// envelope, returning only the track items.
///
/// # Arguments
///
/// * `gateway` - Authenticated request gateway
/// * `query` - Free-text search query, encoded for the URL here
/// * `limit` - Maximum number of tracks to return (1-50)
///
/// # Errors
///
/// Fails with [`Error::NotAuthenticated`] before any network traffic when no
/// valid credential is stored, otherwise with the gateway's error mapping.
///
/// # Example
///
/// ```
/// let tracks = search_tracks(&gateway, "discovery daft punk", 10).await?;
/// for track in &tracks {
///     println!("{} ({})", track.name, track.id);
/// }
/// ```
pub async fn search_tracks<S: TokenStore>(
    gateway: &Gateway<S>,
    query: &str,
    limit: u64,
) -> Result<Vec<Track>, Error> {
    let mut url = Url::parse(&format!("{}/search", gateway.api_url()))?;
    url.query_pairs_mut()
        .append_pair("q", query)
        .append_pair("type", "track")
        .append_pair("limit", &limit.to_string());

    let json = gateway.call(Method::GET, url.as_str(), None).await?;
    let response: SearchResponse = serde_json::from_value(json)?;

    Ok(response.tracks.items)
}

/// Retrieves the audio feature analysis for a single track.
pub async fn get_audio_features<S: TokenStore>(
    gateway: &Gateway<S>,
    track_id: &str,
) -> Result<AudioFeatures, Error> {
    let url = format!(
        "{uri}/audio-features/{id}",
        uri = gateway.api_url(),
        id = track_id
    );

    let json = gateway.call(Method::GET, &url, None).await?;

    Ok(serde_json::from_value(json)?)
}

/// Requests recommendations seeded from one track and steered by its audio
/// features.
///
/// Every numeric feature of the seed is forwarded as a `target_*` tuning
/// parameter, so the result set gravitates toward tracks that feel like the
/// seed rather than merely sharing its genre.
///
/// # Arguments
///
/// * `gateway` - Authenticated request gateway
/// * `seed_track_id` - Track ID used as the single recommendation seed
/// * `features` - Audio features of the seed, as returned by
///   [`get_audio_features`]
/// * `limit` - Maximum number of recommended tracks (1-100)
///
/// # Example
///
/// ```
/// let features = get_audio_features(&gateway, &seed.id).await?;
/// let similar = get_recommendations(&gateway, &seed.id, &features, 15).await?;
/// println!("{} tracks in the mix", similar.len());
/// ```
pub async fn get_recommendations<S: TokenStore>(
    gateway: &Gateway<S>,
    seed_track_id: &str,
    features: &AudioFeatures,
    limit: u64,
) -> Result<Vec<Track>, Error> {
    let mut url = Url::parse(&format!("{}/recommendations", gateway.api_url()))?;
    {
        let mut pairs = url.query_pairs_mut();
        pairs
            .append_pair("seed_tracks", seed_track_id)
            .append_pair("limit", &limit.to_string());

        for (name, value) in utils::feature_targets(features) {
            pairs.append_pair(name, &value);
        }
    }

    let json = gateway.call(Method::GET, url.as_str(), None).await?;
    let response: RecommendationsResponse = serde_json::from_value(json)?;

    Ok(response.tracks)
}
