use std::time::Duration;

use indicatif::{ProgressBar, ProgressStyle};
use tabled::Table;

use crate::{
    error, info,
    management::FileTokenStore,
    spotify::{self, Gateway},
    success,
    types::TrackTableRow,
    utils, warning,
};

pub async fn mix(
    query: String,
    name: Option<String>,
    description: Option<String>,
    public: bool,
    limit: u64,
) {
    let gateway = Gateway::new(FileTokenStore::new());

    let pb = ProgressBar::new_spinner();
    pb.set_message("Searching for a seed track...");
    pb.enable_steady_tick(Duration::from_millis(100));
    pb.set_style(
        ProgressStyle::with_template("{spinner:.blue} {msg}")
            .unwrap()
            .tick_chars("⠋⠙⠹⠸⠼⠴⠦⠧⠇⠏"),
    );

    let seed = match spotify::tracks::search_tracks(&gateway, &query, 1).await {
        Ok(tracks) => match tracks.into_iter().next() {
            Some(track) => track,
            None => {
                pb.finish_and_clear();
                error!("No track found for '{}'.", query);
            }
        },
        Err(e) => {
            pb.finish_and_clear();
            error!("Search failed: {}", e);
        }
    };
    pb.finish_and_clear();

    info!(
        "Seed track: {} - {}",
        utils::format_artists(&seed.artists),
        seed.name
    );

    let pb = ProgressBar::new_spinner();
    pb.set_message("Analyzing audio features...");
    pb.enable_steady_tick(Duration::from_millis(100));
    pb.set_style(
        ProgressStyle::with_template("{spinner:.blue} {msg}")
            .unwrap()
            .tick_chars("⠋⠙⠹⠸⠼⠴⠦⠧⠇⠏"),
    );

    let features = match spotify::tracks::get_audio_features(&gateway, &seed.id).await {
        Ok(features) => features,
        Err(e) => {
            pb.finish_and_clear();
            error!("Failed to fetch audio features: {}", e);
        }
    };
    pb.finish_and_clear();

    let pb = ProgressBar::new_spinner();
    pb.set_message("Gathering recommendations...");
    pb.enable_steady_tick(Duration::from_millis(100));
    pb.set_style(
        ProgressStyle::with_template("{spinner:.blue} {msg}")
            .unwrap()
            .tick_chars("⠋⠙⠹⠸⠼⠴⠦⠧⠇⠏"),
    );

    let recommended =
        match spotify::tracks::get_recommendations(&gateway, &seed.id, &features, limit).await {
            Ok(tracks) => tracks,
            Err(e) => {
                pb.finish_and_clear();
                error!("Failed to fetch recommendations: {}", e);
            }
        };
    pb.finish_and_clear();

    if recommended.is_empty() {
        warning!("No recommendations available for this seed.");
        return;
    }

    let playlist_name = name.unwrap_or_else(|| format!("Mix: {}", seed.name));
    let playlist_description = description.unwrap_or_else(|| {
        format!(
            "Tracks like {} by {}",
            seed.name,
            utils::format_artists(&seed.artists)
        )
    });

    info!("Create playlist {}", playlist_name);

    let playlist = match spotify::playlist::create_playlist(
        &gateway,
        &playlist_name,
        &playlist_description,
        public,
    )
    .await
    {
        Ok(playlist) => playlist,
        Err(e) => error!("Failed to create playlist: {}", e),
    };

    let uris: Vec<String> = recommended.iter().map(|t| t.uri.clone()).collect();
    let added = spotify::playlist::add_tracks_batched(&gateway, &playlist.id, uris).await;

    if added < recommended.len() {
        warning!(
            "Playlist '{}' created with {} of {} tracks.",
            playlist.name,
            added,
            recommended.len()
        );
    } else {
        success!(
            "Playlist '{}' created with {} tracks.",
            playlist.name,
            added
        );
    }

    let table_rows: Vec<TrackTableRow> = recommended
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
