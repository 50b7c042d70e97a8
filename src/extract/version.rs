//! Software-version locator used when no extractor found a version.
//!
//! The version of VAG-style images is usually a bare 4-5 digit number near
//! the OEM part numbers. The locator searches a window around the first
//! OEM number and filters out numbers that are more likely addresses,
//! offsets or pieces of the part numbers themselves.

use tracing::trace;

use crate::extract::brands::generic::OemMatch;
use crate::extract::patterns::VERSION_CANDIDATE;
use crate::extract::scan::{group_text, isolated_captures};
use crate::extract::Scan;

/// Returns the first plausible version near the first OEM number.
pub fn locate_sw_version(scan: &Scan<'_>, oems: &[OemMatch]) -> Option<String> {
    let first = oems.first()?;
    let data = scan.data();
    let config = scan.config();

    let start = first.offset.saturating_sub(config.version_window_before);
    let end = first
        .offset
        .saturating_add(config.version_window_after)
        .min(data.len());
    let region = &data[start..end];

    isolated_captures(&VERSION_CANDIDATE, region)
        .iter()
        .filter_map(|c| group_text(c, 1))
        .find(|candidate| is_plausible_version(candidate, oems))
}

fn is_plausible_version(candidate: &str, oems: &[OemMatch]) -> bool {
    if oems.iter().any(|oem| oem.value.contains(candidate)) {
        trace!(candidate, "Rejected: part of an OEM number");
        return false;
    }
    if candidate.starts_with('0') {
        trace!(candidate, "Rejected: leading zero");
        return false;
    }
    let Ok(number) = candidate.parse::<u32>() else {
        return false;
    };
    // Round values are almost always addresses or sizes.
    if number % 1000 == 0 || number < 1000 {
        trace!(candidate, "Rejected: round or too small");
        return false;
    }
    true
}
