//! Site crawl orchestration.
//!
//! Expands the page tree from a root URL level by level. Each level's
//! pages are fetched concurrently with a bounded fan-out and drained in
//! spawn order, so the merge result does not depend on network timing.
//! A fresh [`VisitedSet`] per run guarantees every reachable page is
//! fetched at most once, which also breaks link cycles.

use std::sync::Arc;
use std::time::{Duration, Instant};

use chrono::Utc;
use futures::stream::{self, StreamExt};

use crate::error::Result;
use crate::models::{
    Config, CrawlFailure, CrawlReport, CrawlStats, Item, PageDescriptor, merge_unique,
};
use crate::services::fetch::PageFetcher;
use crate::services::parse::CatalogParser;
use crate::services::visited::VisitedSet;

/// What one page contributed: its own items and candidate child links.
#[derive(Debug)]
pub struct PageOutcome {
    /// Valid items found on the page, in document order
    pub items: Vec<Item>,

    /// Pagination links, not yet filtered against the visited set
    pub links: Vec<String>,
}

/// Fetches and parses a single page.
pub struct PageWorker {
    fetcher: Arc<dyn PageFetcher>,
    parser: CatalogParser,
}

impl PageWorker {
    pub fn new(fetcher: Arc<dyn PageFetcher>, parser: CatalogParser) -> Self {
        Self { fetcher, parser }
    }

    /// Fetch one page and extract its items and outbound links.
    ///
    /// Does not touch the visited set; claiming links is the
    /// orchestrator's job.
    pub async fn process(&self, descriptor: &PageDescriptor) -> Result<PageOutcome> {
        log::debug!("Fetching {} (depth {})", descriptor.url, descriptor.depth);
        let html = self.fetcher.fetch(&descriptor.url).await?;
        let parsed = self.parser.parse(&descriptor.url, &html);

        let items = parsed
            .fragments
            .into_iter()
            .filter_map(|fragment| fragment.into_item())
            .collect();

        Ok(PageOutcome {
            items,
            links: parsed.links,
        })
    }
}

/// Orchestrates one bounded-depth crawl of a catalog site.
pub struct SiteCrawler {
    worker: PageWorker,
    max_depth: usize,
    max_concurrent: usize,
    deadline: Option<Duration>,
}

impl SiteCrawler {
    /// Build a crawler from configuration and a fetcher implementation.
    pub fn new(config: &Config, fetcher: Arc<dyn PageFetcher>) -> Result<Self> {
        let parser = CatalogParser::new(&config.selectors)?;
        Ok(Self {
            worker: PageWorker::new(fetcher, parser),
            max_depth: config.crawler.max_depth,
            max_concurrent: config.crawler.max_concurrent.max(1),
            deadline: config.crawler.deadline_secs.map(Duration::from_secs),
        })
    }

    /// Crawl the site rooted at `root_url` and aggregate its items.
    ///
    /// Fetch or parse failures are subtree-local: the failing page is
    /// recorded in the report and the rest of the crawl proceeds, so the
    /// caller always gets a best-effort partial aggregate.
    pub async fn crawl(&self, root_url: &str) -> CrawlReport {
        let start_time = Utc::now();
        let started = Instant::now();
        let visited = VisitedSet::new();

        let root = PageDescriptor::root(root_url);
        visited.try_claim(&root.url);

        let mut items: Vec<Item> = Vec::new();
        let mut failures: Vec<CrawlFailure> = Vec::new();
        let mut pages_fetched = 0usize;
        let mut level = vec![root];

        while !level.is_empty() {
            if let Some(deadline) = self.deadline {
                if started.elapsed() >= deadline {
                    log::warn!(
                        "Crawl deadline reached after {} page(s); returning partial result",
                        pages_fetched
                    );
                    for descriptor in level {
                        failures.push(CrawlFailure {
                            url: descriptor.url,
                            error: "crawl deadline exceeded".to_string(),
                        });
                    }
                    break;
                }
            }

            log::debug!(
                "Processing {} page(s) at depth {}",
                level.len(),
                level[0].depth
            );

            // Drain in spawn order, not completion order: the name
            // tie-break in merge_unique stays deterministic.
            let outcomes: Vec<(PageDescriptor, Result<PageOutcome>)> = stream::iter(level)
                .map(|descriptor| async move {
                    let outcome = self.worker.process(&descriptor).await;
                    (descriptor, outcome)
                })
                .buffered(self.max_concurrent)
                .collect()
                .await;

            let mut next_level = Vec::new();
            for (descriptor, outcome) in outcomes {
                match outcome {
                    Ok(outcome) => {
                        pages_fetched += 1;
                        items = merge_unique(items, outcome.items);

                        // Pages at max depth contribute items but are
                        // never expanded.
                        if descriptor.depth < self.max_depth {
                            for link in outcome.links {
                                if visited.try_claim(&link) {
                                    next_level.push(descriptor.child(link));
                                }
                            }
                        }
                    }
                    Err(error) => {
                        log::warn!("Failed to crawl {}: {}", descriptor.url, error);
                        failures.push(CrawlFailure {
                            url: descriptor.url,
                            error: error.to_string(),
                        });
                    }
                }
            }
            level = next_level;
        }

        let pages_failed = failures.len();
        log::info!(
            "Crawl finished: {} item(s) from {} page(s), {} failure(s)",
            items.len(),
            pages_fetched,
            pages_failed
        );

        CrawlReport {
            items,
            failures,
            stats: CrawlStats {
                start_time,
                end_time: Utc::now(),
                pages_fetched,
                pages_failed,
            },
        }
    }
}
