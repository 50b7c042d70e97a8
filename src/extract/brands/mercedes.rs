use crate::extract::patterns::MERCEDES_PART;
use crate::extract::scan::group_text;
use crate::extract::{BrandSignals, RecordBuilder, Scan};
use crate::model::{Brand, Field};
use crate::traits::BrandExtractor;

/// Mercedes-Benz part numbers in Delphi-built diesel controllers.
///
/// Only runs once the Delphi extractor confirmed a CRD signature. Part
/// group `150` is the control unit hardware, `900`..`904` its software;
/// the engine series in the number gives the engine code (`OM651`).
#[derive(Debug, Default)]
pub struct MercedesExtractor;

impl BrandExtractor for MercedesExtractor {
    fn brand(&self) -> Brand {
        Brand::Mercedes
    }

    fn extract(&self, scan: &Scan<'_>, record: &mut RecordBuilder, signals: &mut BrandSignals) {
        if !signals.delphi_crd {
            return;
        }

        for caps in scan.isolated(&MERCEDES_PART) {
            let (Some(series), Some(group), Some(serial_a), Some(serial_b)) = (
                group_text(&caps, 1),
                group_text(&caps, 2),
                group_text(&caps, 3),
                group_text(&caps, 4),
            ) else {
                continue;
            };

            let field = match group.as_str() {
                "150" => Field::OemHwNumber,
                "900" | "901" | "902" | "903" | "904" => Field::OemSwNumber,
                _ => continue,
            };

            let part = format!("A{series}{group}{serial_a}{serial_b}");
            if scan.is_dummy(&part) {
                continue;
            }

            record.set_if_empty(field, part, Brand::Mercedes);
            record.set_if_empty(Field::EngineCode, format!("OM{series}"), Brand::Mercedes);
        }
    }
}
