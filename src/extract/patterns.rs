// Byte patterns for ECU metadata, grouped by brand.
//
// Every pattern starts with `(?-u)` so character classes match raw bytes
// and `\d`/`\s`/`\w` stay ASCII-only. Patterns marked "isolated" are used
// through `Scan::isolated`, which rejects matches touching another
// alphanumeric byte.

use once_cell::sync::Lazy;
use regex::bytes::Regex;

fn compile(pattern: &str) -> Regex {
    Regex::new(pattern).expect("ECU pattern catalog must compile")
}

// ---------------------------------------------------------------------------
// Bosch
// ---------------------------------------------------------------------------

/// SW number followed by its variant, e.g. `1037394113P529TAYI`.
pub static BOSCH_SW_VARIANT: Lazy<Regex> =
    Lazy::new(|| compile(r"(?-u)(10[3-9]\d{7})([A-Z]\d{3}[A-Z0-9]{2,6})"));

/// Plain 10-digit SW number (103x..109x).
pub static BOSCH_SW: Lazy<Regex> = Lazy::new(|| compile(r"(?-u)(10[3-9]\d{7})"));

pub static BOSCH_ECU_TYPE: Lazy<Regex> = Lazy::new(|| {
    compile(
        r"(?-u)(MDG1_MD1CS\d{3}|MD1CS\d{3}|EDC\d+_[A-Z]?\d+|MED\d+_[A-Z]?\d+|MEVD\d+_[A-Z]?\d+|MG1_[A-Z]{1,2}\d+)",
    )
});

/// Firmware version path, e.g. `38/1/MDG1_MD1CS001/11/P_1401//VLWT0///`.
///
/// Groups: 1 = ECU family, 2 = revision, 3 = variant, 4 = internal id.
pub static BOSCH_PATH: Lazy<Regex> = Lazy::new(|| {
    compile(
        r"(?-u)\d+/\d+/((?:MDG1|EDC17|MED17|MG1|MD1|MEVD|ME)[^\x00/]{2,30})/(\d+)/([^\x00/]{2,20})//([^\x00/]{0,20})/",
    )
});

// ---------------------------------------------------------------------------
// Ford / Continental
// ---------------------------------------------------------------------------

/// Calibration id behind the copyright banner,
/// e.g. `Ford Motor Co. 2019PXRK3A-12A650-AA`.
pub static FORD_CALIBRATION: Lazy<Regex> = Lazy::new(|| {
    compile(r"(?-u)Ford Motor Co\.\s*\d{4}([A-Z]{2})([A-Z0-9]{4}-[A-Z0-9]{5,6}-[A-Z]{2})")
});

/// Ford-style part number, e.g. `RK3A-12A650-AB`. Isolated.
pub static FORD_PART_NUMBER: Lazy<Regex> =
    Lazy::new(|| compile(r"(?-u)([A-Z0-9]{4}-[A-Z0-9]{5,6}-[A-Z]{2})"));

/// Continental/Siemens ECU families: SID807, EMS3125, SIM271, PCR2.1. Isolated.
pub static CONTINENTAL_ECU: Lazy<Regex> =
    Lazy::new(|| compile(r"(?-u)((?:SID|EMS|SIM)\d{3,4}|PCR\d\.\d)"));

// ---------------------------------------------------------------------------
// Delphi
// ---------------------------------------------------------------------------

/// CRD signature with its software version, e.g. `CRD2\0SW\0402050`. Isolated.
pub static DELPHI_CRD: Lazy<Regex> =
    Lazy::new(|| compile(r"(?-u)(CRD2?\d?)[\x00 _]{1,4}(?:SW|V)[\x00 _.:]{0,3}(\d{3,6})"));

// ---------------------------------------------------------------------------
// Delco / GM
// ---------------------------------------------------------------------------

pub static DELCO_MARKER: Lazy<Regex> = Lazy::new(|| compile(r"(?-u)DELCO|Delco|GMPT"));

/// GM engine controller families E35..E99 with optional revision letter. Isolated.
pub static DELCO_ECM: Lazy<Regex> =
    Lazy::new(|| compile(r"(?-u)(E(?:3[5-9]|[4-9]\d)[A-Z]?)"));

/// Calibration part number with its alpha code, e.g. `12653917AA`. Isolated.
pub static DELCO_SW: Lazy<Regex> = Lazy::new(|| compile(r"(?-u)(\d{8}[A-Z]{2})"));

/// Bare 8-digit GM/Opel hardware number. Isolated.
pub static DELCO_HW: Lazy<Regex> = Lazy::new(|| compile(r"(?-u)((?:12|55)\d{6})"));

// ---------------------------------------------------------------------------
// Transtron
// ---------------------------------------------------------------------------

pub static TRANSTRON_MARKER: Lazy<Regex> = Lazy::new(|| compile(r"(?i-u)transtron"));

/// Isuzu part number, with or without dashes: `8981234560`, `8-98123456-0`. Isolated.
pub static TRANSTRON_PART: Lazy<Regex> = Lazy::new(|| compile(r"(?-u)(8-?\d{8}-?\d)"));

// ---------------------------------------------------------------------------
// BMW
// ---------------------------------------------------------------------------

/// DME/DDE families: MSD80, MSV70, MSS65, MEV17, DDE73.1. Isolated.
pub static BMW_ECU: Lazy<Regex> =
    Lazy::new(|| compile(r"(?-u)((?:MS[DSV]|MEV|DDE)\d{2}(?:\.\d)?)"));

/// Tagged 7-digit part number, e.g. `HW 7823456`. Isolated.
pub static BMW_PART: Lazy<Regex> =
    Lazy::new(|| compile(r"(?-u)(HW|SW)[\x00 _:]{0,2}([78]\d{6})"));

// ---------------------------------------------------------------------------
// Mercedes
// ---------------------------------------------------------------------------

/// `A6519023700` or `A 651 902 37 00`. Isolated.
///
/// Groups: 1 = engine series, 2 = part group, 3 and 4 = serial.
pub static MERCEDES_PART: Lazy<Regex> =
    Lazy::new(|| compile(r"(?-u)A ?(\d{3}) ?(\d{3}) ?(\d{2}) ?(\d{2})"));

// ---------------------------------------------------------------------------
// Generic / VAG / PSA
// ---------------------------------------------------------------------------

/// VAG-style OEM part number, e.g. `03L907309AE`. Isolated.
pub static OEM_NUMBER: Lazy<Regex> =
    Lazy::new(|| compile(r"(?-u)(\d{2,3}[A-Z]\d{6}[A-Z]{0,3})"));

/// PSA hardware reference, e.g. `9665843380`. Isolated.
pub static PSA_HW: Lazy<Regex> = Lazy::new(|| compile(r"(?-u)(9[68]\d{6}80)"));

/// Engine descriptor and code, e.g. `R4 2.0l TDI  CFFB`.
pub static ENGINE: Lazy<Regex> =
    Lazy::new(|| compile(r"(?-u)([RVLI]\d\s+[\d.,]+[lL]\s+\w{2,6})\s+([A-Z]{3,4})"));

/// Engine descriptor without a code, e.g. `R5 2,5L EDC`.
pub static ENGINE_WITHOUT_CODE: Lazy<Regex> =
    Lazy::new(|| compile(r"(?-u)([RVLI]\d\s+[\d.,]+[lL]\s+[A-Z]{2,6})"));

/// Candidate software version near the OEM block. Isolated.
pub static VERSION_CANDIDATE: Lazy<Regex> = Lazy::new(|| compile(r"(?-u)(\d{4,5})"));

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_catalog_compiles() {
        let all: [&Lazy<Regex>; 22] = [
            &BOSCH_SW_VARIANT,
            &BOSCH_SW,
            &BOSCH_ECU_TYPE,
            &BOSCH_PATH,
            &FORD_CALIBRATION,
            &FORD_PART_NUMBER,
            &CONTINENTAL_ECU,
            &DELPHI_CRD,
            &DELCO_MARKER,
            &DELCO_ECM,
            &DELCO_SW,
            &DELCO_HW,
            &TRANSTRON_MARKER,
            &TRANSTRON_PART,
            &BMW_ECU,
            &BMW_PART,
            &MERCEDES_PART,
            &OEM_NUMBER,
            &PSA_HW,
            &ENGINE,
            &ENGINE_WITHOUT_CODE,
            &VERSION_CANDIDATE,
        ];
        for re in all {
            assert!(!re.as_str().is_empty());
        }
    }

    #[test]
    fn test_bosch_path_groups() {
        let caps = BOSCH_PATH
            .captures(b"\x0038/1/MDG1_MD1CS001/11/P_1401//VLWT0///\x00")
            .unwrap();
        assert_eq!(&caps[1], b"MDG1_MD1CS001");
        assert_eq!(&caps[2], b"11");
        assert_eq!(&caps[3], b"P_1401");
        assert_eq!(&caps[4], b"VLWT0");
    }

    #[test]
    fn test_patterns_match_across_non_utf8_bytes() {
        let data = b"\xff\xfe03L907309AE\xff";
        let m = OEM_NUMBER.find(data).unwrap();
        assert_eq!(m.as_bytes(), b"03L907309AE");
    }

    #[test]
    fn test_engine_pattern() {
        let caps = ENGINE.captures(b"R4 2.0l TDI  CFFB").unwrap();
        assert_eq!(&caps[1], b"R4 2.0l TDI");
        assert_eq!(&caps[2], b"CFFB");
    }
}
