use tracing::debug;

use crate::extract::patterns::DELPHI_CRD;
use crate::extract::scan::group_text;
use crate::extract::{BrandSignals, RecordBuilder, Scan};
use crate::model::{Brand, Field};
use crate::traits::BrandExtractor;

/// Delphi common-rail-diesel (CRD/CRD2) controllers.
///
/// Delphi images often contain 103x digit runs that the Bosch patterns take
/// for a Bosch software number. A confirmed CRD signature therefore retracts
/// everything attributed to Bosch before writing its own values, and raises
/// [`BrandSignals::delphi_crd`] for the Mercedes extractor.
#[derive(Debug, Default)]
pub struct DelphiExtractor;

impl BrandExtractor for DelphiExtractor {
    fn brand(&self) -> Brand {
        Brand::Delphi
    }

    fn extract(&self, scan: &Scan<'_>, record: &mut RecordBuilder, signals: &mut BrandSignals) {
        let signature = scan
            .isolated(&DELPHI_CRD)
            .iter()
            .find_map(|c| Some((group_text(c, 1)?, group_text(c, 2)?)));

        let Some((family, version)) = signature else {
            return;
        };

        let retracted = record.retract(Brand::Bosch);
        if !retracted.is_empty() {
            let fields: Vec<&str> = retracted.iter().map(|f| f.as_str()).collect();
            debug!(?fields, "Delphi CRD signature retracted Bosch matches");
        }

        signals.delphi_crd = true;
        record.set_if_empty(Field::EcuType, family, Brand::Delphi);
        record.set_if_empty(Field::SwVersion, version, Brand::Delphi);
    }
}
