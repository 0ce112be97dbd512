//! lectorium-inbox - Inbox review report
//!
//! Annotates every track of an inbox export against the reference dictionary
//! and prints the annotated rows as JSON on stdout. Logs go to stderr.

use anyhow::{Context, Result};
use clap::Parser;
use lectorium_common::config::ConfigResolver;
use lectorium_inbox::services::Dictionary;
use lectorium_inbox::{InboxAnnotator, InboxTrack};
use std::path::PathBuf;
use tracing::info;

/// Command-line arguments for lectorium-inbox
#[derive(Parser, Debug)]
#[command(name = "lectorium-inbox")]
#[command(about = "Annotate inbox tracks for review before publication")]
#[command(version)]
struct Args {
    /// Bootstrap config file (TOML)
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Reference dictionary export (JSON)
    #[arg(short, long, env = "LECTORIUM_DICTIONARY")]
    dictionary: Option<PathBuf>,

    /// Inbox tracks export (JSON array)
    #[arg(short, long, env = "LECTORIUM_INBOX")]
    inbox: Option<PathBuf>,

    /// Only print tracks that cannot be published yet
    #[arg(long)]
    blocked_only: bool,
}

#[tokio::main]
async fn main() -> Result<()> {
    let args = Args::parse();

    let config = ConfigResolver::new(args.config.clone()).resolve();
    lectorium_common::logging::init_tracing(&config.logging)?;

    info!("Version: {}", env!("CARGO_PKG_VERSION"));

    let dictionary_path = args
        .dictionary
        .or(config.dictionary_path)
        .context("No dictionary path given (--dictionary, LECTORIUM_DICTIONARY or config)")?;
    let inbox_path = args
        .inbox
        .or(config.inbox_path)
        .context("No inbox path given (--inbox, LECTORIUM_INBOX or config)")?;

    let dictionary = Dictionary::from_file(&dictionary_path)
        .with_context(|| format!("Failed to load dictionary {}", dictionary_path.display()))?;
    info!("Dictionary: {} ({} records)", dictionary_path.display(), dictionary.len());

    let inbox_json = std::fs::read_to_string(&inbox_path)
        .with_context(|| format!("Failed to read inbox {}", inbox_path.display()))?;
    let tracks: Vec<InboxTrack> = serde_json::from_str(&inbox_json)
        .with_context(|| format!("Failed to parse inbox {}", inbox_path.display()))?;
    info!("Inbox: {} ({} tracks)", inbox_path.display(), tracks.len());

    let annotator = InboxAnnotator::from_dictionary(&dictionary);
    let mut rows = annotator.annotate_inbox(&tracks).await;

    let publishable = rows.iter().filter(|row| row.is_publishable()).count();
    info!(
        "{} of {} tracks ready to publish",
        publishable,
        rows.len()
    );

    if args.blocked_only {
        rows.retain(|row| !row.is_publishable());
    }

    println!("{}", serde_json::to_string_pretty(&rows)?);

    Ok(())
}
