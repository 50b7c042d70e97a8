//! Tunable constants of the extraction engine.
//!
//! The defaults were tuned against real firmware dumps. Change them only
//! with new sample data to back the change.

use serde::{Deserialize, Serialize};

/// Settings shared by every extractor in a pipeline.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExtractorConfig {
    /// Bytes searched before the first generic OEM number when looking for
    /// a fallback software version.
    #[serde(default = "default_window_before")]
    pub version_window_before: usize,

    /// Bytes searched after the first generic OEM number.
    #[serde(default = "default_window_after")]
    pub version_window_after: usize,

    /// How many leading characters of a candidate are inspected by the
    /// dummy-value filter.
    #[serde(default = "default_dummy_prefix_len")]
    pub dummy_prefix_len: usize,

    /// Candidates with fewer distinct characters than this in their prefix
    /// are treated as placeholders.
    #[serde(default = "default_dummy_min_distinct")]
    pub dummy_min_distinct: usize,
}

fn default_window_before() -> usize {
    2048
}
fn default_window_after() -> usize {
    4096
}
fn default_dummy_prefix_len() -> usize {
    8
}
fn default_dummy_min_distinct() -> usize {
    4
}

impl Default for ExtractorConfig {
    fn default() -> Self {
        Self {
            version_window_before: default_window_before(),
            version_window_after: default_window_after(),
            dummy_prefix_len: default_dummy_prefix_len(),
            dummy_min_distinct: default_dummy_min_distinct(),
        }
    }
}

impl ExtractorConfig {
    /// Sets the byte window searched around the first OEM number.
    pub fn with_version_window(mut self, before: usize, after: usize) -> Self {
        self.version_window_before = before;
        self.version_window_after = after;
        self
    }

    /// Sets the dummy-value filter thresholds.
    pub fn with_dummy_threshold(mut self, prefix_len: usize, min_distinct: usize) -> Self {
        self.dummy_prefix_len = prefix_len;
        self.dummy_min_distinct = min_distinct;
        self
    }
}
