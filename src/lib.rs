//! # ecu-harvester
//!
//! Reads identification metadata (software and hardware part numbers, ECU
//! family, engine code) out of automotive ECU firmware dumps so the dumps
//! can be renamed and filed by vehicle and ECU.
//!
//! - [`extract`] scans the raw image with per-brand byte patterns
//! - [`filename`] parses Flex and Autotuner file names
//! - [`executor`] runs many extractions concurrently

pub mod config;
pub mod executor;
pub mod extract;
pub mod filename;
pub mod logging;
pub mod model;
pub mod traits;

// Re-export common types for convenience
pub use config::ExtractorConfig;
pub use executor::*;
pub use extract::{extract, extract_bytes, parse_file, ExtractionPipeline};
pub use filename::parse_filename;
pub use model::*;
pub use traits::*;
