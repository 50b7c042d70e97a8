//! Extract module - brand-aware metadata extraction from firmware images.
//!
//! This module provides the extraction engine:
//! - **Patterns**: the byte-regex catalog in [`patterns`]
//! - **Extractors**: one [`BrandExtractor`](crate::traits::BrandExtractor) per ECU brand in [`brands`]
//! - **State**: [`RecordBuilder`] and [`BrandSignals`] threaded through the extractors
//! - **Pipeline**: the ordered executor [`ExtractionPipeline`]
//!
//! The free functions below run the standard pipeline and never fail: any
//! I/O problem yields an empty [`MetadataRecord`].

pub mod brands;
pub mod patterns;
pub mod pipeline;
pub mod scan;
pub mod state;
pub mod version;

use std::path::Path;

pub use pipeline::{ExtractionPipeline, ExtractionResult, ExtractionStats};
pub use scan::Scan;
pub use state::{BrandSignals, RecordBuilder};

use crate::model::{MetadataRecord, ParsedFile};

/// Reads `path` and extracts its metadata with the standard pipeline.
pub fn extract(path: &Path) -> MetadataRecord {
    ExtractionPipeline::standard().extract_file(path)
}

/// Extracts metadata from an in-memory image.
pub fn extract_bytes(data: &[u8]) -> MetadataRecord {
    ExtractionPipeline::standard().run(data)
}

/// Combines the file name fields of `path` with its binary metadata.
pub fn parse_file(path: &Path) -> ParsedFile {
    ExtractionPipeline::standard().parse_file(path)
}
