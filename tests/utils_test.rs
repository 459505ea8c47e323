use spomix::types::{AudioFeatures, TrackArtist};
use spomix::utils::*;

// Helper function to create a test audio profile
fn create_test_features() -> AudioFeatures {
    AudioFeatures {
        danceability: 0.8,
        energy: 0.62,
        key: 5,
        loudness: -7.2,
        mode: 1,
        speechiness: 0.04,
        acousticness: 0.011,
        instrumentalness: 0.87,
        liveness: 0.09,
        valence: 0.35,
        tempo: 123.0,
    }
}

#[test]
fn test_feature_targets_order_and_names() {
    let targets = feature_targets(&create_test_features());

    // One tuning parameter per analysed feature
    assert_eq!(targets.len(), 11);

    let names: Vec<&str> = targets.iter().map(|(name, _)| *name).collect();
    assert_eq!(
        names,
        vec![
            "target_danceability",
            "target_energy",
            "target_key",
            "target_loudness",
            "target_mode",
            "target_speechiness",
            "target_acousticness",
            "target_instrumentalness",
            "target_liveness",
            "target_valence",
            "target_tempo",
        ]
    );
}

#[test]
fn test_feature_targets_values() {
    let targets = feature_targets(&create_test_features());

    assert!(targets.contains(&("target_danceability", "0.8".to_string())));
    assert!(targets.contains(&("target_key", "5".to_string())));
    assert!(targets.contains(&("target_loudness", "-7.2".to_string())));
    assert!(targets.contains(&("target_tempo", "123".to_string())));
}

#[test]
fn test_strip_authorization_code_removes_code_and_state() {
    let cleaned = strip_authorization_code("/callback?code=AQCsecret&state=xyz");

    // Nothing sensitive survives, and the dangling '?' goes with it
    assert_eq!(cleaned, "/callback");
}

#[test]
fn test_strip_authorization_code_keeps_other_params() {
    let cleaned = strip_authorization_code("/callback?code=AQCsecret&theme=dark");

    assert_eq!(cleaned, "/callback?theme=dark");
}

#[test]
fn test_strip_authorization_code_without_query() {
    // A bare path passes through untouched
    assert_eq!(strip_authorization_code("/callback"), "/callback");
}

#[test]
fn test_format_artists_joins_names() {
    let artists = vec![
        TrackArtist {
            id: Some("a1".to_string()),
            name: "Daft Punk".to_string(),
        },
        TrackArtist {
            id: None,
            name: "Pharrell Williams".to_string(),
        },
    ];

    assert_eq!(format_artists(&artists), "Daft Punk, Pharrell Williams");
}

#[test]
fn test_format_artists_single_and_empty() {
    let one = vec![TrackArtist {
        id: Some("a1".to_string()),
        name: "Daft Punk".to_string(),
    }];

    assert_eq!(format_artists(&one), "Daft Punk");
    assert_eq!(format_artists(&[]), "");
}
