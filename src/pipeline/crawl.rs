// src/pipeline/crawl.rs

//! Catalog crawling pipeline.

use std::fs;
use std::sync::Arc;

use crate::error::Result;
use crate::models::{Config, ProductList};
use crate::services::{HttpFetcher, SiteCrawler};

/// Run a crawl and emit the aggregate as JSON.
///
/// Writes the `{ "product": [...] }` document to `output` when given,
/// otherwise to stdout. Per-page failures are logged and reflected in
/// the exit report but do not abort the run.
pub async fn run_crawler(config: &Config, root_url: &str, output: Option<&str>) -> Result<()> {
    config.validate()?;
    url::Url::parse(root_url)?;

    log::info!("Crawling catalog at {}", root_url);

    let fetcher = Arc::new(HttpFetcher::new(&config.crawler)?);
    let crawler = SiteCrawler::new(config, fetcher)?;
    let report = crawler.crawl(root_url).await;

    log::info!(
        "Fetched {} page(s) in {}ms, {} item(s) aggregated",
        report.stats.pages_fetched,
        (report.stats.end_time - report.stats.start_time).num_milliseconds(),
        report.items.len()
    );
    if !report.is_complete() {
        log::warn!("{} page(s) failed; result is partial", report.failures.len());
    }

    let list = ProductList {
        products: report.items,
    };
    let json = serde_json::to_string_pretty(&list)?;

    match output {
        Some(path) => {
            fs::write(path, &json)?;
            log::info!("Wrote product list to {}", path);
        }
        None => println!("{json}"),
    }

    Ok(())
}
