// src/models/mod.rs

//! Domain models for the crawler application.
//!
//! This module contains all data structures used throughout the application,
//! organized by their primary purpose.

mod config;
mod item;
mod page;
mod report;

// Re-export all public types
pub use config::{Config, CrawlerConfig, SelectorConfig};
pub use item::{Item, ProductList, merge_unique};
pub use page::PageDescriptor;
pub use report::{CrawlFailure, CrawlReport, CrawlStats};
