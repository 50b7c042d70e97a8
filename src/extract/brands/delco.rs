use regex::bytes::Regex;

use crate::extract::patterns::{DELCO_ECM, DELCO_HW, DELCO_MARKER, DELCO_SW};
use crate::extract::scan::group_text;
use crate::extract::{BrandSignals, RecordBuilder, Scan};
use crate::model::{Brand, Field};
use crate::traits::BrandExtractor;

/// Delco / GM Powertrain engine controllers.
#[derive(Debug, Default)]
pub struct DelcoExtractor;

impl BrandExtractor for DelcoExtractor {
    fn brand(&self) -> Brand {
        Brand::Delco
    }

    fn extract(&self, scan: &Scan<'_>, record: &mut RecordBuilder, _signals: &mut BrandSignals) {
        if !scan.contains(&DELCO_MARKER) {
            return;
        }

        if let Some(ecm) = scan.isolated(&DELCO_ECM).iter().find_map(|c| group_text(c, 1)) {
            record.set_if_empty(Field::EcuType, ecm, Brand::Delco);
        }

        if let Some(software) = first_genuine(scan, &DELCO_SW) {
            record.set_if_empty(Field::OemSwNumber, software, Brand::Delco);
        }
        if let Some(hardware) = first_genuine(scan, &DELCO_HW) {
            record.set_if_empty(Field::OemHwNumber, hardware, Brand::Delco);
        }
    }
}

fn first_genuine(scan: &Scan<'_>, re: &Regex) -> Option<String> {
    scan.isolated(re)
        .iter()
        .filter_map(|c| group_text(c, 1))
        .find(|value| !scan.is_dummy(value))
}
