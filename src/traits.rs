use crate::extract::{BrandSignals, RecordBuilder, Scan};
use crate::model::Brand;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ExtractError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Input file is empty")]
    EmptyInput,
    #[error("Matched bytes at offset {offset} are not ASCII")]
    NonAscii { offset: usize },
}

/// One brand-specific pass over a firmware image.
///
/// Extractors only ever fill fields that are still empty (through
/// [`RecordBuilder::set_if_empty`]), so their position in the pipeline
/// decides which value wins.
pub trait BrandExtractor: Send + Sync {
    /// Returns the brand this extractor attributes its values to.
    fn brand(&self) -> Brand;

    /// Scans `scan` and writes whatever it finds into `record`.
    ///
    /// `signals` carries flags raised by earlier extractors (and lets this
    /// one raise its own).
    fn extract(&self, scan: &Scan<'_>, record: &mut RecordBuilder, signals: &mut BrandSignals);
}
