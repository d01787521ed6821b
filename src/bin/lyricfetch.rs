//! lyricfetch: command-line client
//!
//! Resolve song/album links and look up metadata and lyrics through the
//! caching layer.

use std::path::{Path, PathBuf};
use std::sync::Arc;

use clap::{Parser, Subcommand};
use tracing::info;

use lyricfetch::{
    CacheStore, CachedProvider, CatalogProvider, Config, LyricError, OutputFilenameFormat,
    Provider, ReqwestFetcher, ResolvedInput, ResourceType, Resolver, Selection, SongRecord,
    format_timestamp_millis, output_name, safe_filename,
};

/// lyricfetch CLI
#[derive(Parser)]
#[command(name = "lyricfetch")]
#[command(version = lyricfetch::PKG_VERSION)]
#[command(about = "Resolve music links and fetch song metadata and lyrics")]
struct Args {
    /// Path to configuration file.
    #[arg(short, long, env = "LYRICFETCH_CONFIG")]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Classify an id or URL into provider, resource type and id
    Resolve {
        /// Raw id, URL or short link
        input: String,
        /// Provider to assume when the input does not name one
        #[arg(short, long)]
        provider: Option<Provider>,
        /// Resource type to assume when the input does not name one
        #[arg(short = 't', long = "type")]
        resource_type: Option<ResourceType>,
    },

    /// Print a filesystem-safe output name
    Filename {
        /// Song name
        name: String,
        /// Singer
        #[arg(short, long, default_value = "")]
        singer: String,
        /// name-singer, singer-name or name
        #[arg(short, long, default_value = "name-singer")]
        format: String,
    },

    /// List the song ids of an album
    Album {
        /// Album id or URL
        input: String,
        /// Catalog file (overrides config)
        #[arg(long)]
        catalog: Option<PathBuf>,
    },

    /// Show metadata for one or more songs
    Songs {
        /// Song ids or URLs
        #[arg(required = true)]
        inputs: Vec<String>,
        /// Catalog file (overrides config)
        #[arg(long)]
        catalog: Option<PathBuf>,
    },

    /// Print the lyric of a song
    Lyric {
        /// Song id or URL
        input: String,
        /// Fetch the unsynchronized variant
        #[arg(long)]
        verbatim: bool,
        /// Catalog file (overrides config)
        #[arg(long)]
        catalog: Option<PathBuf>,
    },
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Initialise tracing (default: warn for CLI; override with RUST_LOG).
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let args = Args::parse();
    let config = Config::load(args.config.as_deref())?;
    let resolver = Resolver::new(Arc::new(ReqwestFetcher::from_config(&config.http)?));
    let preset = config.defaults.selection();

    match args.command {
        Command::Resolve {
            input,
            provider,
            resource_type,
        } => {
            let preset = Selection::new(
                provider.unwrap_or(preset.provider),
                resource_type.unwrap_or(preset.resource_type),
            );
            let resolved = resolver.resolve(&input, preset).await?;
            println!("provider: {}", resolved.provider);
            println!("type:     {}", resolved.resource_type);
            println!("id:       {}", resolved.id);
        }

        Command::Filename {
            name,
            singer,
            format,
        } => {
            let format: OutputFilenameFormat = format.parse()?;
            let song = SongRecord::new("", name, singer);
            println!("{}", output_name(&song, format));
        }

        Command::Album { input, catalog } => {
            let api = open_catalog(&config, catalog.as_deref())?;
            let preset = Selection::new(preset.provider, ResourceType::Album);
            let resolved = resolver.resolve(&input, preset).await?;
            expect_type(&resolved, ResourceType::Album)?;

            match api.album_song_ids(&resolved.id).await {
                Some(ids) => {
                    info!(album_id = %resolved.id, count = ids.len(), "album resolved");
                    for id in ids {
                        println!("{id}");
                    }
                }
                None => return Err(not_found("album", &resolved.id)),
            }
        }

        Command::Songs { inputs, catalog } => {
            let api = open_catalog(&config, catalog.as_deref())?;
            let preset = Selection::new(preset.provider, ResourceType::Song);

            let mut ids = Vec::with_capacity(inputs.len());
            for input in &inputs {
                let resolved = resolver.resolve(input, preset).await?;
                expect_type(&resolved, ResourceType::Song)?;
                ids.push(resolved.id);
            }

            let results = api.song_metadata(&ids).await;
            for id in &ids {
                match results.get(id).and_then(|outcome| outcome.data()) {
                    Some(song) => print_song(song),
                    None => println!("{id}\t(unavailable)"),
                }
            }
        }

        Command::Lyric {
            input,
            verbatim,
            catalog,
        } => {
            let api = open_catalog(&config, catalog.as_deref())?;
            let preset = Selection::new(preset.provider, ResourceType::Song);
            let resolved = resolver.resolve(&input, preset).await?;
            expect_type(&resolved, ResourceType::Song)?;

            let ids = [resolved.id.clone()];
            let song = api
                .song_metadata(&ids)
                .await
                .remove(&resolved.id)
                .and_then(|outcome| outcome.into_data())
                .ok_or_else(|| not_found("song", &resolved.id))?;

            let lyric = api
                .lyric(&song, verbatim)
                .await
                .ok_or_else(|| not_found("lyric", &song.display_id))?;

            println!("# {}", safe_filename(&song.name));
            println!("{}", lyric.lyric);
            if let Some(translation) = lyric.translation {
                println!();
                println!("{translation}");
            }
        }
    }

    Ok(())
}

/// Open the catalog named on the command line or in the config.
fn open_catalog(config: &Config, explicit: Option<&Path>) -> Result<CachedProvider, LyricError> {
    let path = explicit
        .or(config.catalog.path.as_deref())
        .ok_or_else(|| {
            LyricError::Configuration(
                "no catalog configured; pass --catalog or set [catalog] path".to_string(),
            )
        })?;
    let provider = CatalogProvider::from_path(path)?;
    let cache = Arc::new(CacheStore::with_config(&config.cache_config()));
    Ok(CachedProvider::new(Arc::new(provider), cache))
}

fn expect_type(resolved: &ResolvedInput, expected: ResourceType) -> Result<(), LyricError> {
    if resolved.resource_type == expected {
        return Ok(());
    }
    Err(LyricError::input_invalid(format!(
        "expected a {expected} but the input is a {}",
        resolved.resource_type
    )))
}

fn not_found(what: &str, id: &str) -> Box<dyn std::error::Error> {
    Box::new(LyricError::NotFound(format!("{what} {id}")))
}

fn print_song(song: &SongRecord) {
    let released = song
        .publish_time_ms
        .and_then(format_timestamp_millis)
        .unwrap_or_default();
    println!(
        "{}\t{}\t{}\t{}\t{}",
        song.display_id, song.name, song.singer, song.album, released
    );
}
