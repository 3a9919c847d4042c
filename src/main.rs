// src/main.rs

//! Catalog crawler CLI
//!
//! Crawls a paginated catalog site starting from a root URL, follows
//! pagination links up to a bounded depth, and prints the deduplicated
//! product aggregate as JSON.

use clap::Parser;
use env_logger::Env;
use serde_json::json;

use catalog_crawler::models::Config;
use catalog_crawler::pipeline::run_crawler;

#[derive(Parser, Debug)]
#[command(
    name = "catalog-crawler",
    version,
    about = "Crawls paginated catalog sites and aggregates product listings"
)]
struct Cli {
    /// Root URL to crawl; defaults to crawler.start_url from the config
    url: Option<String>,

    /// Path to the TOML configuration file
    #[arg(short, long, default_value = "data/config.toml")]
    config: String,

    /// Write the JSON aggregate to this file instead of stdout
    #[arg(short, long)]
    output: Option<String>,

    /// Suppress progress output (warnings and errors only)
    #[arg(short, long)]
    quiet: bool,
}

/// Main entry point
#[tokio::main]
async fn main() {
    let cli = Cli::parse();

    let default_level = if cli.quiet { "warn" } else { "info" };
    env_logger::Builder::from_env(Env::default().default_filter_or(default_level)).init();

    let config = Config::load_or_default(&cli.config);
    let root_url = cli
        .url
        .clone()
        .unwrap_or_else(|| config.crawler.start_url.clone());

    if let Err(e) = run_crawler(&config, &root_url, cli.output.as_deref()).await {
        // The boundary reports failures as a JSON payload rather than a
        // bare abort.
        println!("{}", json!({ "error": e.to_string() }));
        std::process::exit(1);
    }
}
