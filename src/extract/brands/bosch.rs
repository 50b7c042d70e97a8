use crate::extract::patterns::{BOSCH_ECU_TYPE, BOSCH_PATH, BOSCH_SW, BOSCH_SW_VARIANT};
use crate::extract::scan::group_text;
use crate::extract::{BrandSignals, RecordBuilder, Scan};
use crate::model::{Brand, Field};
use crate::traits::BrandExtractor;

/// Bosch EDC/MED/MD1/MG1 software numbers, ECU family and firmware path.
#[derive(Debug, Default)]
pub struct BoschExtractor;

impl BrandExtractor for BoschExtractor {
    fn brand(&self) -> Brand {
        Brand::Bosch
    }

    fn extract(&self, scan: &Scan<'_>, record: &mut RecordBuilder, _signals: &mut BrandSignals) {
        if let Some(caps) = scan.first(&BOSCH_SW_VARIANT) {
            if let (Some(number), Some(variant)) = (group_text(&caps, 1), group_text(&caps, 2)) {
                record.set_if_empty(Field::BoschSwNumber, number, Brand::Bosch);
                record.set_if_empty(Field::BoschVariant, variant, Brand::Bosch);
            }
        }

        if !record.is_set(Field::BoschSwNumber) {
            if let Some(number) = scan.first(&BOSCH_SW).and_then(|c| group_text(&c, 1)) {
                record.set_if_empty(Field::BoschSwNumber, number, Brand::Bosch);
            }
        }

        if let Some(ecu) = scan.first(&BOSCH_ECU_TYPE).and_then(|c| group_text(&c, 1)) {
            record.set_if_empty(Field::EcuType, ecu, Brand::Bosch);
        }

        // 38/1/<family>/<rev>/<variant>//<id>/
        // Each segment decodes on its own; a non-ASCII one is dropped alone.
        if let Some(caps) = scan.first(&BOSCH_PATH) {
            if let Some(family) = group_text(&caps, 1) {
                record.set_if_empty(Field::EcuType, family, Brand::Bosch);
            }
            if let Some(variant) = group_text(&caps, 3) {
                if let Some(version) = calibration_version(&variant) {
                    record.set_if_empty(Field::SwVersion, version, Brand::Bosch);
                }
            }
            if let Some(id) = group_text(&caps, 4) {
                record.set_if_empty(Field::BoschSwNumber, id, Brand::Bosch);
            }
        }
    }
}

/// Numeric calibration version of a path variant.
///
/// `P_1401` and `1401` both give `1401`; project codes such as `P_A42X`
/// give nothing.
fn calibration_version(variant: &str) -> Option<&str> {
    let digits = match variant.split_once('_') {
        Some((prefix, rest))
            if prefix.len() == 1 && prefix.bytes().all(|b| b.is_ascii_alphabetic()) =>
        {
            rest
        }
        Some(_) => return None,
        None => variant,
    };

    if !digits.is_empty() && digits.bytes().all(|b| b.is_ascii_digit()) {
        Some(digits)
    } else {
        None
    }
}
