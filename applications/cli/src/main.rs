/// Cantor - album play-queue explorer
use cantor_cli::{
    commands::{self, Step},
    config::CliConfig,
};
use cantor_core::{AlbumId, InMemoryCatalog, TrackId};
use cantor_queue::PlayerSession;
use clap::{Parser, Subcommand};
use std::path::PathBuf;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[derive(Parser)]
#[command(name = "cantor")]
#[command(about = "Explore album play queues", long_about = None)]
struct Cli {
    /// Configuration file path
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    /// Catalog file (overrides the configured path)
    #[arg(long, global = true)]
    catalog: Option<PathBuf>,

    /// Start in shuffle mode
    #[arg(long, global = true)]
    shuffle: bool,

    /// Wrap to the first track after the last
    #[arg(long, global = true)]
    autoplay: bool,

    /// Shuffle seed, for a reproducible order
    #[arg(long, global = true, env = "CANTOR_SEED")]
    seed: Option<u64>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// List albums
    Albums,
    /// List an album's tracks in playback order
    Tracks {
        /// Album id
        album: String,
    },
    /// Show the track after the given one
    Next {
        album: String,
        track: u32,
    },
    /// Show the track before the given one
    Prev {
        album: String,
        track: u32,
    },
    /// Show where "next" would go without moving the queue
    Peek {
        album: String,
        track: u32,
    },
    /// Play through the queue starting at the given track
    Walk {
        album: String,
        track: u32,
        /// Number of tracks to play
        #[arg(short, long, default_value_t = 10)]
        steps: usize,
    },
}

fn main() -> anyhow::Result<()> {
    // Initialize tracing (stderr, so stdout stays clean for output)
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "cantor_cli=info,cantor_queue=warn,cantor_core=warn".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let cli = Cli::parse();

    // Load configuration, CLI flags win
    let mut config = CliConfig::load(cli.config.as_deref())?;
    if let Some(catalog) = cli.catalog {
        config.catalog_path = catalog;
    }
    config.queue.shuffle |= cli.shuffle;
    config.queue.autoplay |= cli.autoplay;
    if cli.seed.is_some() {
        config.queue.shuffle_seed = cli.seed;
    }
    config.validate()?;

    let catalog = InMemoryCatalog::load(&config.catalog_path)?;
    tracing::debug!("Catalog: {:?}", config.catalog_path);

    let mut out = std::io::stdout().lock();

    match cli.command {
        Commands::Albums => commands::list_albums(&catalog, &mut out)?,
        Commands::Tracks { album } => {
            commands::list_tracks(&catalog, &AlbumId::new(album), &mut out)?;
        }
        Commands::Next { album, track } => {
            let mut session = PlayerSession::new(catalog, config.queue);
            commands::step(&mut session, AlbumId::new(album), TrackId::new(track), Step::Next, &mut out)?;
        }
        Commands::Prev { album, track } => {
            let mut session = PlayerSession::new(catalog, config.queue);
            commands::step(&mut session, AlbumId::new(album), TrackId::new(track), Step::Previous, &mut out)?;
        }
        Commands::Peek { album, track } => {
            let mut session = PlayerSession::new(catalog, config.queue);
            commands::step(&mut session, AlbumId::new(album), TrackId::new(track), Step::Peek, &mut out)?;
        }
        Commands::Walk {
            album,
            track,
            steps,
        } => {
            let mut session = PlayerSession::new(catalog, config.queue);
            let walked =
                commands::walk(&mut session, AlbumId::new(album), TrackId::new(track), steps, &mut out)?;
            if walked < steps {
                tracing::info!("Queue ended after {} track(s)", walked);
            }
        }
    }

    Ok(())
}
