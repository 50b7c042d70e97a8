use tracing::trace;

use crate::extract::patterns::{TRANSTRON_MARKER, TRANSTRON_PART};
use crate::extract::scan::group_text;
use crate::extract::{BrandSignals, RecordBuilder, Scan};
use crate::model::{Brand, Field};
use crate::traits::BrandExtractor;

/// Transtron (Isuzu) diesel controllers.
///
/// The 10-digit Isuzu part numbers look like any other long number, so
/// nothing is read unless the Transtron copyright string is present.
#[derive(Debug, Default)]
pub struct TranstronExtractor;

impl BrandExtractor for TranstronExtractor {
    fn brand(&self) -> Brand {
        Brand::Transtron
    }

    fn extract(&self, scan: &Scan<'_>, record: &mut RecordBuilder, _signals: &mut BrandSignals) {
        if !scan.contains(&TRANSTRON_MARKER) {
            trace!("No Transtron copyright, skipping");
            return;
        }

        let part = scan
            .isolated(&TRANSTRON_PART)
            .iter()
            .filter_map(|c| group_text(c, 1))
            .map(|raw| raw.replace('-', ""))
            .find(|part| !scan.is_dummy(part));

        if let Some(part) = part {
            record.set_if_empty(Field::OemSwNumber, part, Brand::Transtron);
        }
    }
}
