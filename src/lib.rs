// src/lib.rs

//! Catalog Crawler Library

pub mod error;
pub mod models;
pub mod pipeline;
pub mod services;
pub mod utils;
