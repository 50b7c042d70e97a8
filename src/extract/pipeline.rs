//! Ordered extraction pipeline.
//!
//! This module provides the [`ExtractionPipeline`] coordinator that runs the
//! brand extractors over one in-memory firmware image:
//! - Fixed priority order (Bosch → Ford → Continental → Delphi → Delco →
//!   Transtron → BMW → Mercedes → Generic), then the version fallback
//! - Set-if-empty writes, so earlier extractors win
//! - Structured logging via `tracing`
//! - I/O failures degrade to an empty record instead of an error

use std::path::Path;
use std::time::Instant;

use tracing::{debug, info, warn};

use crate::config::ExtractorConfig;
use crate::extract::brands::{
    generic, BmwExtractor, BoschExtractor, ContinentalExtractor, DelcoExtractor, DelphiExtractor,
    FordExtractor, GenericExtractor, MercedesExtractor, TranstronExtractor,
};
use crate::extract::version::locate_sw_version;
use crate::extract::{BrandSignals, RecordBuilder, Scan};
use crate::filename::parse_filename;
use crate::model::{Brand, Field, MetadataRecord, ParsedFile};
use crate::traits::{BrandExtractor, ExtractError};

// ============================================================================
// Pipeline Types
// ============================================================================

/// Extraction result with statistics.
#[derive(Debug, Clone)]
pub struct ExtractionResult {
    /// Metadata found in the image
    pub record: MetadataRecord,

    /// Processing statistics
    pub stats: ExtractionStats,
}

/// Statistics about one extraction run.
#[derive(Debug, Default, Clone)]
pub struct ExtractionStats {
    /// Time spent running the extractors (microseconds)
    pub duration_us: u64,

    /// Size of the scanned image in bytes
    pub bytes_scanned: usize,

    /// Number of extractors that ran
    pub extractors_run: usize,

    /// Number of non-empty fields in the result
    pub fields_filled: usize,
}

// ============================================================================
// Pipeline Executor
// ============================================================================

/// Runs a fixed, ordered list of brand extractors over firmware images.
///
/// The pipeline holds no per-file state; one instance can be shared across
/// threads and reused for any number of files.
///
/// # Example
///
/// ```no_run
/// use ecu_harvester::extract::ExtractionPipeline;
/// use std::path::Path;
///
/// let pipeline = ExtractionPipeline::standard();
/// let record = pipeline.extract_file(Path::new("dump.bin"));
/// println!("ECU: {}", record.ecu_type);
/// ```
pub struct ExtractionPipeline {
    /// Extractors in priority order
    extractors: Vec<Box<dyn BrandExtractor>>,

    /// Tunable constants shared by all extractors
    config: ExtractorConfig,
}

impl std::fmt::Debug for ExtractionPipeline {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ExtractionPipeline")
            .field("order", &self.order())
            .field("config", &self.config)
            .finish()
    }
}

impl Default for ExtractionPipeline {
    fn default() -> Self {
        Self::standard()
    }
}

impl ExtractionPipeline {
    /// Creates the standard pipeline with default configuration.
    pub fn standard() -> Self {
        Self::with_config(ExtractorConfig::default())
    }

    /// Creates the standard pipeline with custom configuration.
    ///
    /// Ford runs before Continental so Ford software ids win; Delphi runs
    /// after Bosch so it can retract false Bosch matches; Transtron and BMW
    /// only fill what Bosch left; Mercedes depends on the Delphi signal;
    /// the generic extractor comes last.
    pub fn with_config(config: ExtractorConfig) -> Self {
        Self::with_extractors(
            vec![
                Box::new(BoschExtractor),
                Box::new(FordExtractor),
                Box::new(ContinentalExtractor),
                Box::new(DelphiExtractor),
                Box::new(DelcoExtractor),
                Box::new(TranstronExtractor),
                Box::new(BmwExtractor),
                Box::new(MercedesExtractor),
                Box::new(GenericExtractor),
            ],
            config,
        )
    }

    /// Creates a pipeline running exactly `extractors`, in the given order.
    pub fn with_extractors(extractors: Vec<Box<dyn BrandExtractor>>, config: ExtractorConfig) -> Self {
        Self { extractors, config }
    }

    /// Brands in the order their extractors run.
    pub fn order(&self) -> Vec<Brand> {
        self.extractors.iter().map(|e| e.brand()).collect()
    }

    pub fn config(&self) -> &ExtractorConfig {
        &self.config
    }

    /// Runs every extractor over `data` and returns the record.
    pub fn run(&self, data: &[u8]) -> MetadataRecord {
        self.run_with_stats(data).record
    }

    /// Runs every extractor over `data`, then the version fallback.
    pub fn run_with_stats(&self, data: &[u8]) -> ExtractionResult {
        let start = Instant::now();
        let scan = Scan::new(data, &self.config);
        let mut record = RecordBuilder::new();
        let mut signals = BrandSignals::default();

        for extractor in &self.extractors {
            let before = record.filled();
            extractor.extract(&scan, &mut record, &mut signals);
            debug!(
                brand = extractor.brand().as_str(),
                filled = record.filled(),
                added = record.filled().saturating_sub(before),
                "Extractor finished"
            );
        }

        if !record.is_set(Field::SwVersion) {
            let oems = generic::oem_numbers(&scan);
            if let Some(version) = locate_sw_version(&scan, &oems) {
                record.set_if_empty(Field::SwVersion, version, Brand::Fallback);
            }
        }

        let stats = ExtractionStats {
            duration_us: start.elapsed().as_micros() as u64,
            bytes_scanned: data.len(),
            extractors_run: self.extractors.len(),
            fields_filled: record.filled(),
        };

        ExtractionResult {
            record: record.build(),
            stats,
        }
    }

    /// Reads `path` in full and extracts its metadata.
    ///
    /// A missing, unreadable or empty file gives an empty record.
    pub fn extract_file(&self, path: &Path) -> MetadataRecord {
        let data = match read_image(path) {
            Ok(data) => data,
            Err(e) => {
                warn!(path = %path.display(), error = %e, "Cannot read firmware image");
                return MetadataRecord::default();
            }
        };

        let result = self.run_with_stats(&data);
        info!(
            path = %path.display(),
            duration_us = result.stats.duration_us,
            size_bytes = result.stats.bytes_scanned,
            fields = result.stats.fields_filled,
            "Extraction completed"
        );
        result.record
    }

    /// File name fields of `path` merged with its binary metadata.
    pub fn parse_file(&self, path: &Path) -> ParsedFile {
        let name = path
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_default();
        ParsedFile::merge(parse_filename(&name), self.extract_file(path))
    }
}

/// Reads a whole firmware image into memory.
///
/// # Errors
///
/// Returns [`ExtractError::Io`] if the file cannot be read and
/// [`ExtractError::EmptyInput`] if it has no content.
pub fn read_image(path: &Path) -> Result<Vec<u8>, ExtractError> {
    let data = std::fs::read(path)?;
    if data.is_empty() {
        return Err(ExtractError::EmptyInput);
    }
    Ok(data)
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::logging::init_test_tracing;
    use std::io::Write;

    // Mock extractor writing a fixed value
    struct FixedExtractor {
        brand: Brand,
        field: Field,
        value: &'static str,
    }

    impl BrandExtractor for FixedExtractor {
        fn brand(&self) -> Brand {
            self.brand
        }

        fn extract(&self, _scan: &Scan<'_>, record: &mut RecordBuilder, _signals: &mut BrandSignals) {
            record.set_if_empty(self.field, self.value, self.brand);
        }
    }

    #[test]
    fn test_standard_order() {
        let pipeline = ExtractionPipeline::standard();
        assert_eq!(
            pipeline.order(),
            vec![
                Brand::Bosch,
                Brand::Ford,
                Brand::Continental,
                Brand::Delphi,
                Brand::Delco,
                Brand::Transtron,
                Brand::Bmw,
                Brand::Mercedes,
                Brand::Generic,
            ]
        );
    }

    #[test]
    fn test_first_writer_wins() {
        let pipeline = ExtractionPipeline::with_extractors(
            vec![
                Box::new(FixedExtractor {
                    brand: Brand::Ford,
                    field: Field::EcuType,
                    value: "first",
                }),
                Box::new(FixedExtractor {
                    brand: Brand::Generic,
                    field: Field::EcuType,
                    value: "second",
                }),
            ],
            ExtractorConfig::default(),
        );

        let record = pipeline.run(b"anything");
        assert_eq!(record.ecu_type, "first");
    }

    #[test]
    fn test_stats() {
        init_test_tracing();
        let pipeline = ExtractionPipeline::standard();
        let data = b"\x00EDC17_C46\x00\x0003L906018JL\x00";

        let result = pipeline.run_with_stats(data);

        assert_eq!(result.stats.bytes_scanned, data.len());
        assert_eq!(result.stats.extractors_run, 9);
        assert_eq!(result.stats.fields_filled, 2);
        assert_eq!(result.record.ecu_type, "EDC17_C46");
    }

    #[test]
    fn test_version_fallback_only_when_unset() {
        let pipeline = ExtractionPipeline::standard();

        let record = pipeline.run(b"\x0003L906018JL\x00 1396 \x00");
        assert_eq!(record.sw_version, "1396");

        let record = pipeline.run(b"38/1/EDC17_X/2/P_2201//ID//\x0003L906018JL\x00 1396 \x00");
        assert_eq!(record.sw_version, "2201");
    }

    #[test]
    fn test_extract_file_reads_whole_image() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        let mut data = vec![0xffu8; 1 << 20];
        data.extend_from_slice(b"\x0003L907309AE\x00");
        file.write_all(&data).unwrap();

        let record = ExtractionPipeline::standard().extract_file(file.path());
        assert_eq!(record.oem_hw_number, "03L907309AE");
    }

    #[test]
    fn test_read_image_errors() {
        let missing = read_image(Path::new("/nonexistent/ecu.bin"));
        assert!(matches!(missing, Err(ExtractError::Io(_))));

        let empty = tempfile::NamedTempFile::new().unwrap();
        assert!(matches!(
            read_image(empty.path()),
            Err(ExtractError::EmptyInput)
        ));
    }
}
