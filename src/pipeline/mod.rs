//! Pipeline entry points for crawler operations.
//!
//! - `run_crawler`: Crawl a catalog site and emit the aggregate as JSON

pub mod crawl;

pub use crawl::run_crawler;
