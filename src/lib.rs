//! grindmatch: convert coffee grinder settings between models
//!
//! This library provides the application layer around `grindmatch-core`:
//! - Record sources (directory of JSON documents, in-memory)
//! - A caching record loader
//! - Table, range and conversion views
//! - Configuration management

pub mod config;
pub mod core;
pub mod sources;

// Re-export commonly used types
pub use crate::core::{ConversionReport, LoadedGrinder, RecordLoader};
pub use config::AppConfig;
pub use grindmatch_core as engine;
