use clap::{
    CommandFactory, Parser, Subcommand,
    builder::{
        Styles,
        styling::{AnsiColor, Effects},
    },
};
use clap_complete::{Shell, generate};

use spomix::{cli, config, error};

fn styles() -> Styles {
    Styles::styled()
        .header(AnsiColor::White.on_default() | Effects::BOLD)
        .usage(AnsiColor::White.on_default() | Effects::BOLD)
        .literal(AnsiColor::BrightBlue.on_default())
        .placeholder(AnsiColor::BrightGreen.on_default())
}

#[derive(Parser, Debug, Clone)]
#[clap(
  version = env!("CARGO_PKG_VERSION"),
  name=env!("CARGO_PKG_NAME"),
  bin_name=env!("CARGO_PKG_NAME"),
  author=env!("CARGO_PKG_AUTHORS"),
  about=env!("CARGO_PKG_DESCRIPTION"),
  styles=styles(),
)]
struct Cli {
    #[clap(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug, Clone)]
pub enum Command {
    /// Authorize with the Spotify API
    Auth(AuthOptions),

    /// Remove the stored credential
    Logout,

    /// Search the catalog for tracks
    Search(SearchOptions),

    /// Show the audio features of a track
    Features(FeaturesOptions),

    #[clap(about = "Build a recommendation playlist from a seed track")]
    Mix(MixOptions),

    /// Run the standalone token proxy
    Serve,

    /// Get shell completions
    Completions(CompletionsOption),
}

#[derive(Parser, Debug, Clone)]
pub struct AuthOptions {
    /// Run the consent flow even when already logged in
    #[clap(long)]
    pub force: bool,
}

#[derive(Parser, Debug, Clone)]
pub struct SearchOptions {
    /// Free-text search query
    pub query: String,

    /// Maximum number of tracks to list
    #[clap(long, default_value_t = 10)]
    pub limit: u64,
}

#[derive(Parser, Debug, Clone)]
pub struct FeaturesOptions {
    /// Track ID to analyze
    pub track_id: String,
}

#[derive(Parser, Debug, Clone)]
pub struct MixOptions {
    /// Free-text query; the first hit becomes the seed track
    pub query: String,

    /// Playlist name (defaults to "Mix: <seed name>")
    #[clap(long)]
    pub name: Option<String>,

    /// Playlist description
    #[clap(long)]
    pub description: Option<String>,

    /// Create the playlist as publicly visible
    #[clap(long)]
    pub public: bool,

    /// Number of recommended tracks
    #[clap(long, default_value_t = 15)]
    pub limit: u64,
}

#[derive(Parser, Debug, Clone)]
pub struct CompletionsOption {
    shell: Shell,
}

#[tokio::main]
async fn main() {
    if let Err(e) = config::load_env().await {
        error!("Cannot load environment. Err: {}", e);
    }

    let cli = Cli::parse();

    match cli.command {
        Command::Auth(opt) => cli::auth(opt.force).await,
        Command::Logout => cli::logout().await,
        Command::Search(opt) => cli::search(opt.query, opt.limit).await,
        Command::Features(opt) => cli::features(opt.track_id).await,
        Command::Mix(opt) => {
            cli::mix(opt.query, opt.name, opt.description, opt.public, opt.limit).await
        }
        Command::Serve => cli::serve().await,
        Command::Completions(opt) => {
            let mut cmd = Cli::command_for_update();
            let name = cmd.get_name().to_string();
            generate(opt.shell, &mut cmd, name, &mut std::io::stdout())
        }
    }
}
