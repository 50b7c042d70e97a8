use tracing::trace;

use super::ford::{classify, PartRole};
use crate::extract::patterns::{CONTINENTAL_ECU, FORD_PART_NUMBER};
use crate::extract::scan::group_text;
use crate::extract::{BrandSignals, RecordBuilder, Scan};
use crate::model::{Brand, Field};
use crate::traits::BrandExtractor;

/// Continental/Siemens SID, EMS, SIM and PCR controllers.
///
/// Gated on the ECU family string. Continental units fitted to Ford and PSA
/// vehicles carry Ford-format software numbers, so the first such number
/// that is not a module assembly becomes the OEM software number.
#[derive(Debug, Default)]
pub struct ContinentalExtractor;

impl BrandExtractor for ContinentalExtractor {
    fn brand(&self) -> Brand {
        Brand::Continental
    }

    fn extract(&self, scan: &Scan<'_>, record: &mut RecordBuilder, _signals: &mut BrandSignals) {
        let Some(ecu) = scan
            .isolated(&CONTINENTAL_ECU)
            .iter()
            .find_map(|c| group_text(c, 1))
        else {
            trace!("No Continental ECU family, skipping");
            return;
        };
        record.set_if_empty(Field::EcuType, ecu, Brand::Continental);

        let software = scan
            .isolated(&FORD_PART_NUMBER)
            .iter()
            .filter_map(|c| group_text(c, 1))
            .filter(|part| !scan.is_dummy(part))
            .find(|part| classify(part) != Some(PartRole::Hardware));

        if let Some(part) = software {
            record.set_if_empty(Field::OemSwNumber, part, Brand::Continental);
        }
    }
}
