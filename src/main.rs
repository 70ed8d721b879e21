use anyhow::Result;
use daily_chronicle::{config::Config, edition::Newsroom, i18n::Language, scheduler, server};
use std::sync::Arc;
use tracing::info;

#[tokio::main]
async fn main() -> Result<()> {
    // Load .env file (ignored in production)
    let _ = dotenvy::dotenv();

    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive("daily_chronicle=info".parse()?)
                .add_directive("tower_http=info".parse()?),
        )
        .init();

    info!("Starting Daily Chronicle");

    let config = Arc::new(Config::from_env()?);
    info!(
        "Model {} | default {} / {} | refresh {}",
        config.gemini_model,
        config.default_language.name(),
        config.default_theme,
        if config.api_key.is_some() { "protected" } else { "public" }
    );
    if !config.default_language.is_canonical() {
        info!(
            "Missing {} translations fall back to {}",
            config.default_language.name(),
            Language::canonical().name()
        );
    }

    let newsroom = Newsroom::new(Arc::clone(&config));

    // First edition prints in the background while the skeleton is served
    let first_edition = newsroom.clone();
    tokio::spawn(async move { first_edition.refresh().await });

    let _scheduler = if config.schedule_times.is_empty() {
        info!("No SCHEDULE_TIMES configured, refreshes are manual only");
        None
    } else {
        Some(scheduler::start_scheduler(newsroom.clone(), &config.schedule_times).await?)
    };

    server::serve(newsroom, config.port).await
}
