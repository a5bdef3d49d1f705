//! Whole-table analysis and its configuration

mod analysis;
mod config;

pub use analysis::{analyze, Analysis, ElementInverses};
pub use config::{AnalysisConfig, OutputFormat};
