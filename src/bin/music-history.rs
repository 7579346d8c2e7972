use clap::{Parser, Subcommand};
use std::path::PathBuf;
use yandex_music_history::{
    FileHistorySource, HistoryRequest, HistoryTab, Model, MusicHistoryClient, Track,
};

/// Inspect saved Yandex Music listening-history responses
#[derive(Parser)]
#[command(
    name = "music-history",
    about = "Inspect saved Yandex Music listening-history responses",
    long_about = None
)]
struct Cli {
    /// Show detailed debug information
    #[arg(long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Print the tracks played, in history order
    ///
    /// Usage examples:
    /// # Print every track title
    /// music-history tracks history.json
    ///
    /// # Print the first 20 tracks as JSON
    /// music-history tracks history.json --limit 20 --json
    Tracks {
        /// Saved history response
        file: PathBuf,

        /// Maximum number of tracks to show (0 for no limit)
        #[arg(long, default_value = "0")]
        limit: usize,

        /// Print tracks as JSON instead of one title per line
        #[arg(long)]
        json: bool,
    },

    /// Summarize each history tab: date, items, entries and context kinds
    Tabs {
        /// Saved history response
        file: PathBuf,
    },
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = Cli::parse();

    let default_filter = if args.verbose { "debug" } else { "warn" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(default_filter))
        .init();

    if let Err(e) = run(args.command).await {
        eprintln!("❌ {e}");
        std::process::exit(1);
    }

    Ok(())
}

async fn run(command: Commands) -> Result<(), Box<dyn std::error::Error>> {
    match command {
        Commands::Tracks { file, limit, json } => {
            let tracks = client_for(file).get_music_history_tracks().await?;
            let shown = if limit == 0 { tracks.len() } else { limit };
            print_tracks(&tracks[..shown.min(tracks.len())], json)?;
        }
        Commands::Tabs { file } => {
            let tabs = client_for(file).get_music_history().await?;
            print_tabs(&tabs);
        }
    }
    Ok(())
}

fn client_for(file: PathBuf) -> MusicHistoryClient {
    MusicHistoryClient::with_request(
        Box::new(FileHistorySource::new(file)),
        HistoryRequest::default(),
    )
}

fn print_tracks(tracks: &[Track], json: bool) -> Result<(), Box<dyn std::error::Error>> {
    if json {
        let values = tracks
            .iter()
            .map(Model::to_dict)
            .collect::<yandex_music_history::Result<Vec<_>>>()?;
        println!("{}", serde_json::to_string_pretty(&values)?);
        return Ok(());
    }

    if tracks.is_empty() {
        println!("No tracks in history");
        return Ok(());
    }

    for (index, track) in tracks.iter().enumerate() {
        println!("{:4}. {track}", index + 1);
    }
    Ok(())
}

fn print_tabs(tabs: &[HistoryTab]) {
    if tabs.is_empty() {
        println!("No history tabs");
        return;
    }

    for tab in tabs {
        let mut kinds: Vec<&str> = tab
            .items
            .iter()
            .filter_map(|item| item.context.as_ref().map(|context| context.kind()))
            .collect();
        kinds.dedup();

        println!(
            "📅 {}  {} items, {} entries, {} playable  [{}]",
            tab.date,
            tab.items.len(),
            tab.track_count(),
            HistoryTab::iter_tracks(std::slice::from_ref(tab)).count(),
            kinds.join(", ")
        );
    }
}
