use crate::extract::patterns::{BMW_ECU, BMW_PART};
use crate::extract::scan::group_text;
use crate::extract::{BrandSignals, RecordBuilder, Scan};
use crate::model::{Brand, Field};
use crate::traits::BrandExtractor;

/// BMW DME/DDE controllers with `HW`/`SW` tagged part numbers.
///
/// Runs after Bosch, so on Bosch-built BMW units it only fills what the
/// Bosch patterns left empty.
#[derive(Debug, Default)]
pub struct BmwExtractor;

impl BrandExtractor for BmwExtractor {
    fn brand(&self) -> Brand {
        Brand::Bmw
    }

    fn extract(&self, scan: &Scan<'_>, record: &mut RecordBuilder, _signals: &mut BrandSignals) {
        let Some(family) = scan.isolated(&BMW_ECU).iter().find_map(|c| group_text(c, 1)) else {
            return;
        };
        record.set_if_empty(Field::EcuType, family, Brand::Bmw);

        for caps in scan.isolated(&BMW_PART) {
            let (Some(tag), Some(number)) = (group_text(&caps, 1), group_text(&caps, 2)) else {
                continue;
            };
            if scan.is_dummy(&number) {
                continue;
            }
            let field = if tag == "HW" {
                Field::OemHwNumber
            } else {
                Field::OemSwNumber
            };
            record.set_if_empty(field, number, Brand::Bmw);
        }
    }
}
