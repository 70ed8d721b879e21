//! Preview binary - prints an edition to static HTML files
//!
//! Usage:
//!   cargo run --bin preview               # Fetch today's edition from Gemini
//!   cargo run --bin preview -- --offline  # Render the offline edition, no API call
//!
//! Writes one file per theme and language into PREVIEW_DIR (defaults to preview/).
//!
//! Required environment variables (unless --offline):
//! - GEMINI_API_KEY

use anyhow::{Context, Result};
use chrono::{Local, NaiveDate};
use daily_chronicle::{
    article::Article,
    config::Config,
    i18n::Language,
    newsroom,
    render::{render_page, PageView},
    theme::Theme,
};
use std::fs;
use std::path::{Path, PathBuf};
use tracing::info;

/// Write `{theme}-{lang}.html` for every combination into `dir`
fn write_previews(dir: &Path, date: NaiveDate, batch: &[Article]) -> Result<Vec<PathBuf>> {
    fs::create_dir_all(dir)
        .with_context(|| format!("Failed to create preview directory {}", dir.display()))?;

    let mut written = Vec::new();
    for theme in Theme::ALL {
        for language in Language::ALL {
            let html = render_page(&PageView {
                theme,
                language,
                date,
                batch: Some(batch),
                loading: false,
                refresh_enabled: false,
            });
            let path = dir.join(format!("{}-{}.html", theme.code(), language.code()));
            fs::write(&path, html)
                .with_context(|| format!("Failed to write {}", path.display()))?;
            written.push(path);
        }
    }
    Ok(written)
}

#[tokio::main]
async fn main() -> Result<()> {
    let _ = dotenvy::dotenv();

    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive("daily_chronicle=info".parse()?)
                .add_directive("preview=info".parse()?),
        )
        .init();

    let offline = std::env::args().any(|arg| arg == "--offline");
    let date = Local::now().date_naive();

    let batch = if offline {
        info!("Offline mode: rendering the fallback edition");
        newsroom::fallback_batch()
    } else {
        let config = Config::from_env()?;
        let client = reqwest::Client::new();
        newsroom::fetch_batch(&client, &config, date).await
    };

    let dir = PathBuf::from(std::env::var("PREVIEW_DIR").unwrap_or_else(|_| "preview".to_string()));
    let written = write_previews(&dir, date, &batch)?;

    println!("\n{}", "=".repeat(60));
    println!("EDITION PREVIEW ({} articles)", batch.len());
    println!("{}", "=".repeat(60));
    for path in &written {
        println!("  {}", path.display());
    }
    println!("{}\n", "=".repeat(60));

    Ok(())
}
