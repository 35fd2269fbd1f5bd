use std::path::PathBuf;

use clap::Parser;
use eyre::Result;
use log::{error, info};

mod cli;

use cli::Cli;

fn setup_logging() -> Result<()> {
    let log_dir = log_dir();
    std::fs::create_dir_all(&log_dir)?;
    let log_file = log_dir.join("ytgrep.log");

    let target = Box::new(std::fs::OpenOptions::new().create(true).append(true).open(&log_file)?);

    env_logger::Builder::from_default_env()
        .target(env_logger::Target::Pipe(target))
        .init();

    info!("Logging initialized: {}", log_file.display());
    Ok(())
}

fn log_dir() -> PathBuf {
    dirs::data_local_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join("ytgrep")
        .join("logs")
}

/// YOUTUBE_API_KEY wins over the config file
fn resolve_api_key(config: &ytgrep::config::Config) -> Option<String> {
    std::env::var("YOUTUBE_API_KEY")
        .ok()
        .filter(|k| !k.is_empty())
        .or_else(|| config.api_key.clone())
}

#[tokio::main]
async fn main() -> Result<()> {
    setup_logging()?;

    let cli = Cli::parse();

    // Load config file (non-fatal if missing/invalid)
    let config = ytgrep::config::Config::load().unwrap_or_default();

    if cli.verbose {
        let config_path = ytgrep::config::config_path();
        if config_path.exists() {
            eprintln!("Config: {}", config_path.display());
        }
    }

    let Some(api_key) = resolve_api_key(&config) else {
        error!("no API key configured");
        eprintln!(
            "No YouTube Data API key found. Set YOUTUBE_API_KEY or add api_key to {}.",
            ytgrep::config::config_path().display()
        );
        return Ok(());
    };

    let http = reqwest::Client::new();
    let yt = ytgrep::youtube::YouTubeClient::new(http.clone(), api_key);

    if let Some(ref name) = cli.search_channel {
        match yt.find_channel_id(name).await {
            Ok(Some(id)) => println!("Channel ID for '{name}': {id}"),
            Ok(None) => println!("No channel found with the name '{name}'"),
            Err(e) => {
                error!("channel lookup failed: {e}");
                eprintln!("An error occurred: {e}");
            }
        }
        return Ok(());
    }

    let language = cli
        .language
        .clone()
        .or_else(|| config.default_language.clone())
        .unwrap_or_else(|| "en".to_string());
    let max_results = cli.max_results.or(config.default_max_results).unwrap_or(10);

    if cli.verbose {
        eprintln!(
            "Searching: query={:?} language={language} max_results={max_results} channel={:?}",
            cli.query, cli.channel_id
        );
    }

    let opts = ytgrep::search::ScanOptions {
        search: ytgrep::youtube::SearchQuery {
            query: cli.query.clone(),
            language,
            max_results,
            channel_id: cli.channel_id.clone(),
            order: cli.sort_by.into(),
            published_after: cli.published_after,
            published_before: cli.published_before,
        },
        keywords: cli.keywords.clone(),
        use_regex: cli.use_regex,
        context: cli.context,
    };

    ytgrep::search::run(&yt, &http, &opts).await
}
