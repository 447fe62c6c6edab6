//! Per-run orchestration: load, translate and save every input file
//!
//! This module contains the run loop, its configuration, and statistics.

pub mod config;
pub mod engine;
pub mod stats;

pub use config::{ServiceErrorPolicy, TranslationConfig};
pub use engine::TranslationEngine;
pub use stats::{FileStatistics, RunStatistics};
