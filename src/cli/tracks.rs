use std::time::Duration;

use indicatif::{ProgressBar, ProgressStyle};
use tabled::Table;

use crate::{
    error,
    management::FileTokenStore,
    spotify::{self, Gateway},
    types::{FeatureTableRow, TrackTableRow},
    utils, warning,
};

pub async fn search(query: String, limit: u64) {
    let gateway = Gateway::new(FileTokenStore::new());

    let pb = ProgressBar::new_spinner();
    pb.set_message("Searching tracks...");
    pb.enable_steady_tick(Duration::from_millis(100));
    pb.set_style(
        ProgressStyle::with_template("{spinner:.blue} {msg}")
            .unwrap()
            .tick_chars("⠋⠙⠹⠸⠼⠴⠦⠧⠇⠏"),
    );

    let tracks = match spotify::tracks::search_tracks(&gateway, &query, limit).await {
        Ok(tracks) => tracks,
        Err(e) => {
            pb.finish_and_clear();
            error!("Search failed: {}", e);
        }
    };
    pb.finish_and_clear();

    if tracks.is_empty() {
        warning!("No tracks found for '{}'.", query);
        return;
    }

    let table_rows: Vec<TrackTableRow> = tracks
        .into_iter()
        .map(|t| TrackTableRow {
            artists: utils::format_artists(&t.artists),
            name: t.name,
            id: t.id,
        })
        .collect();

    let table = Table::new(table_rows);
    println!("{}", table);
}

pub async fn features(track_id: String) {
    let gateway = Gateway::new(FileTokenStore::new());

    let pb = ProgressBar::new_spinner();
    pb.set_message("Fetching audio features...");
    pb.enable_steady_tick(Duration::from_millis(100));
    pb.set_style(
        ProgressStyle::with_template("{spinner:.blue} {msg}")
            .unwrap()
            .tick_chars("⠋⠙⠹⠸⠼⠴⠦⠧⠇⠏"),
    );

    let features = match spotify::tracks::get_audio_features(&gateway, &track_id).await {
        Ok(features) => features,
        Err(e) => {
            pb.finish_and_clear();
            error!("Failed to fetch audio features: {}", e);
        }
    };
    pb.finish_and_clear();

    let table_rows: Vec<FeatureTableRow> = utils::feature_targets(&features)
        .into_iter()
        .map(|(name, value)| FeatureTableRow {
            feature: name.trim_start_matches("target_").to_string(),
            value,
        })
        .collect();

    let table = Table::new(table_rows);
    println!("{}", table);
}
