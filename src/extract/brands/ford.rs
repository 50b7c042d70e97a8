use crate::extract::patterns::{FORD_CALIBRATION, FORD_PART_NUMBER};
use crate::extract::scan::group_text;
use crate::extract::{BrandSignals, RecordBuilder, Scan};
use crate::model::{Brand, Field};
use crate::traits::BrandExtractor;

/// Base parts Ford uses for calibration (software) part numbers.
const CALIBRATION_BASES: &[&str] = &["12A650", "12B684"];

/// Base-part prefixes of module assemblies (hardware).
const ASSEMBLY_PREFIXES: &[&str] = &["14C", "14D"];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum PartRole {
    Hardware,
    Software,
}

/// Role of a `PREFIX-BASE-SUFFIX` part number, decided by its base part.
pub(crate) fn classify(part: &str) -> Option<PartRole> {
    let base = part.split('-').nth(1)?;
    if CALIBRATION_BASES.contains(&base) {
        Some(PartRole::Software)
    } else if ASSEMBLY_PREFIXES.iter().any(|p| base.starts_with(p)) {
        Some(PartRole::Hardware)
    } else {
        None
    }
}

/// Ford calibration ids and module part numbers.
///
/// Runs before Continental so a Ford calibration id wins when both brands'
/// patterns hit the same image.
#[derive(Debug, Default)]
pub struct FordExtractor;

impl BrandExtractor for FordExtractor {
    fn brand(&self) -> Brand {
        Brand::Ford
    }

    fn extract(&self, scan: &Scan<'_>, record: &mut RecordBuilder, _signals: &mut BrandSignals) {
        if let Some(caps) = scan.first(&FORD_CALIBRATION) {
            if let (Some(prefix), Some(part)) = (group_text(&caps, 1), group_text(&caps, 2)) {
                if !scan.is_dummy(&part) {
                    record.set_if_empty(Field::SwVersion, format!("{prefix}{part}"), Brand::Ford);
                    record.set_if_empty(Field::OemSwNumber, part, Brand::Ford);
                }
            }
        }

        for caps in scan.isolated(&FORD_PART_NUMBER) {
            let Some(part) = group_text(&caps, 1) else {
                continue;
            };
            if scan.is_dummy(&part) {
                continue;
            }
            match classify(&part) {
                Some(PartRole::Software) => {
                    record.set_if_empty(Field::OemSwNumber, part, Brand::Ford);
                }
                Some(PartRole::Hardware) => {
                    record.set_if_empty(Field::OemHwNumber, part, Brand::Ford);
                }
                None => {}
            }
        }
    }
}
