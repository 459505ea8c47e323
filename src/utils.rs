use crate::types::{AudioFeatures, TrackArtist};

pub fn feature_targets(features: &AudioFeatures) -> Vec<(&'static str, String)> {
    vec![
        ("target_danceability", features.danceability.to_string()),
        ("target_energy", features.energy.to_string()),
        ("target_key", features.key.to_string()),
        ("target_loudness", features.loudness.to_string()),
        ("target_mode", features.mode.to_string()),
        ("target_speechiness", features.speechiness.to_string()),
        ("target_acousticness", features.acousticness.to_string()),
        (
            "target_instrumentalness",
            features.instrumentalness.to_string(),
        ),
        ("target_liveness", features.liveness.to_string()),
        ("target_valence", features.valence.to_string()),
        ("target_tempo", features.tempo.to_string()),
    ]
}

pub fn strip_authorization_code(url: &str) -> String {
    let (base, query) = match url.split_once('?') {
        Some((base, query)) => (base, query),
        None => return url.to_string(),
    };

    let kept: Vec<&str> = query
        .split('&')
        .filter(|pair| {
            let name = pair.split('=').next().unwrap_or("");
            name != "code" && name != "state"
        })
        .collect();

    if kept.is_empty() {
        base.to_string()
    } else {
        format!("{}?{}", base, kept.join("&"))
    }
}

pub fn format_artists(artists: &[TrackArtist]) -> String {
    artists
        .iter()
        .map(|a| a.name.clone())
        .collect::<Vec<_>>()
        .join(", ")
}
