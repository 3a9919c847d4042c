//! Service layer for the crawler application.
//!
//! This module contains the business logic for:
//! - Page retrieval (`PageFetcher` / `HttpFetcher`)
//! - Structural extraction (`CatalogParser`)
//! - Visited-page deduplication (`VisitedSet`)
//! - Crawl orchestration (`SiteCrawler` / `PageWorker`)

mod crawler;
mod fetch;
mod parse;
mod visited;

pub use crawler::{PageOutcome, PageWorker, SiteCrawler};
pub use fetch::{HttpFetcher, PageFetcher};
pub use parse::{CatalogParser, Fragment, ParsedPage};
pub use visited::VisitedSet;
