use crate::extract::patterns::{ENGINE, ENGINE_WITHOUT_CODE, OEM_NUMBER, PSA_HW};
use crate::extract::scan::{group_text, match_offset};
use crate::extract::{BrandSignals, RecordBuilder, Scan};
use crate::model::{Brand, Field};
use crate::traits::BrandExtractor;

/// A VAG-style OEM number and where it was found.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OemMatch {
    pub value: String,
    pub offset: usize,
}

/// Every isolated OEM number in file order, placeholders included.
pub fn oem_numbers(scan: &Scan<'_>) -> Vec<OemMatch> {
    scan.isolated(&OEM_NUMBER)
        .iter()
        .filter_map(|caps| {
            Some(OemMatch {
                value: group_text(caps, 1)?,
                offset: match_offset(caps),
            })
        })
        .collect()
}

/// Brand-agnostic fallbacks: VAG/PSA part numbers and the engine string.
///
/// Runs last so anything a brand extractor found takes precedence.
#[derive(Debug, Default)]
pub struct GenericExtractor;

impl BrandExtractor for GenericExtractor {
    fn brand(&self) -> Brand {
        Brand::Generic
    }

    fn extract(&self, scan: &Scan<'_>, record: &mut RecordBuilder, _signals: &mut BrandSignals) {
        let oems = oem_numbers(scan);
        let (hardware, software) = classify_oem_numbers(scan, &oems);
        if let Some(hw) = hardware.first() {
            record.set_if_empty(Field::OemHwNumber, hw.as_str(), Brand::Generic);
        }
        if let Some(sw) = software.first() {
            record.set_if_empty(Field::OemSwNumber, sw.as_str(), Brand::Generic);
        }

        let psa = scan
            .isolated(&PSA_HW)
            .iter()
            .filter_map(|c| group_text(c, 1))
            .find(|value| !scan.is_dummy(value));
        if let Some(psa) = psa {
            record.set_if_empty(Field::OemHwNumber, psa, Brand::Generic);
        }

        if let Some(caps) = scan.first(&ENGINE) {
            if let (Some(engine), Some(code)) = (group_text(&caps, 1), group_text(&caps, 2)) {
                record.set_if_empty(Field::EngineType, engine, Brand::Generic);
                record.set_if_empty(Field::EngineCode, code, Brand::Generic);
            }
        }
        if !record.is_set(Field::EngineType) {
            if let Some(engine) = scan.first(&ENGINE_WITHOUT_CODE).and_then(|c| group_text(&c, 1)) {
                record.set_if_empty(Field::EngineType, engine, Brand::Generic);
            }
        }
    }
}

/// Splits OEM numbers into hardware and software candidates.
///
/// VAG numbers carry their role in the part group (`907` hardware, `906`
/// software). Anything else is assigned by position: the first unclassified
/// number is hardware, the second software, the rest are dropped.
fn classify_oem_numbers(scan: &Scan<'_>, oems: &[OemMatch]) -> (Vec<String>, Vec<String>) {
    let mut hardware = Vec::new();
    let mut software = Vec::new();

    for oem in oems {
        let value = &oem.value;
        if scan.is_dummy(value) {
            continue;
        }
        if value.contains("907") {
            hardware.push(value.clone());
        } else if value.contains("906") {
            software.push(value.clone());
        } else if hardware.is_empty() {
            hardware.push(value.clone());
        } else if software.is_empty() {
            software.push(value.clone());
        }
    }

    (hardware, software)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::ExtractorConfig;

    fn run(data: &[u8]) -> RecordBuilder {
        let config = ExtractorConfig::default();
        let mut record = RecordBuilder::new();
        let mut signals = BrandSignals::default();
        GenericExtractor.extract(&Scan::new(data, &config), &mut record, &mut signals);
        record
    }

    #[test]
    fn test_vag_numbers_by_part_group() {
        let record = run(b"\x0003L906018JL\x00\x0003L907309AE\x00");
        assert_eq!(record.get(Field::OemHwNumber), "03L907309AE");
        assert_eq!(record.get(Field::OemSwNumber), "03L906018JL");
    }

    #[test]
    fn test_positional_fallback() {
        let record = run(b"\x0004E123456A\x00\x0004E654321B\x00\x0004E777111C\x00");
        assert_eq!(record.get(Field::OemHwNumber), "04E123456A");
        assert_eq!(record.get(Field::OemSwNumber), "04E654321B");
    }

    #[test]
    fn test_placeholder_oem_number_is_rejected() {
        let record = run(b"\x0022A222222\x00\x0003L906018JL\x00");
        assert!(!record.is_set(Field::OemHwNumber));
        assert_eq!(record.get(Field::OemSwNumber), "03L906018JL");
    }

    #[test]
    fn test_psa_hardware_reference() {
        let record = run(b"\x009665843380\x00");
        assert_eq!(record.get(Field::OemHwNumber), "9665843380");
    }

    #[test]
    fn test_engine_with_and_without_code() {
        let record = run(b"\x00R4 2.0l TDI  CFFB\x00");
        assert_eq!(record.get(Field::EngineType), "R4 2.0l TDI");
        assert_eq!(record.get(Field::EngineCode), "CFFB");

        let record = run(b"\x00R5 2,5L EDC\x00");
        assert_eq!(record.get(Field::EngineType), "R5 2,5L EDC");
        assert!(!record.is_set(Field::EngineCode));
    }

    #[test]
    fn test_oem_numbers_report_offsets() {
        let config = ExtractorConfig::default();
        let data = b"abc\x0003L907309AE";
        let oems = oem_numbers(&Scan::new(data, &config));
        assert_eq!(
            oems,
            vec![OemMatch {
                value: "03L907309AE".to_string(),
                offset: 4
            }]
        );
    }
}
