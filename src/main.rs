//! Generator binary: fetch the inputs, build the artifacts, write them out.

use std::fs;
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use tracing::info;

use emoji_iconset_gen::{collection, dictionary, fetch, render};

/// Generates the emoji iconset and shortname dictionary documents.
#[derive(Debug, Parser)]
#[command(name = "emoji-iconset-gen", version, about)]
struct Cli {
    /// Re-clone the emoji SVG sources even if they are already present.
    #[arg(long)]
    update_assets: bool,

    /// Re-fetch the remote dictionary and regenerate its document.
    #[arg(long)]
    update_dictionary: bool,

    /// Directory holding (or receiving) the cloned emoji sources.
    #[arg(long, default_value = "noto-emoji")]
    assets_dir: PathBuf,

    /// Output path for the iconset document.
    #[arg(long, default_value = "noto-emoji-iconset.html")]
    iconset_out: PathBuf,

    /// Output path for the dictionary document.
    #[arg(long, default_value = "emoji-dictionary.html")]
    dictionary_out: PathBuf,
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .init();

    let cli = Cli::parse();

    fetch::clone_assets(&cli.assets_dir, cli.update_assets)?;

    let svg_dir = cli.assets_dir.join("svg");
    let glyphs = collection::build(&svg_dir)?;
    info!(glyphs = glyphs.len(), "rendering iconset document");
    fs::write(&cli.iconset_out, render::iconset(&glyphs))
        .with_context(|| format!("failed to write `{}`", cli.iconset_out.display()))?;
    info!(path = %cli.iconset_out.display(), "iconset document written");

    let refresh = fetch::should_refresh(&cli.dictionary_out, cli.update_dictionary)
        .with_context(|| format!("failed to inspect `{}`", cli.dictionary_out.display()))?;
    if refresh {
        let entries = fetch::fetch_dictionary(fetch::DICTIONARY_URL)?;
        info!(entries = entries.len(), "rendering dictionary document");
        let dict = dictionary::build(&entries);
        let doc = render::dictionary(&dict).context("failed to serialize dictionary")?;
        fs::write(&cli.dictionary_out, doc)
            .with_context(|| format!("failed to write `{}`", cli.dictionary_out.display()))?;
        info!(path = %cli.dictionary_out.display(), "dictionary document written");
    } else {
        info!(path = %cli.dictionary_out.display(), "reusing existing dictionary document");
    }

    Ok(())
}
