use ecu_harvester::{
    extract, extract_bytes, parse_file, parse_filename, ExtractionPipeline, ExtractorConfig,
    FilenameFormat, MetadataRecord, ReadMethod,
};
use std::io::Write;
use std::path::Path;

fn padded(chunks: &[&[u8]]) -> Vec<u8> {
    let mut data = vec![0xffu8; 256];
    for chunk in chunks {
        data.extend_from_slice(&[0u8; 16]);
        data.extend_from_slice(chunk);
        data.extend_from_slice(&[0u8; 16]);
    }
    data
}

#[test]
fn test_ford_calibration_beats_continental_software_number() {
    let data = padded(&[
        b"AV6Q-7J104-AB",
        b"SID807",
        b"Ford Motor Co. 2019PXRK3A-12A650-AA",
    ]);

    let record = extract_bytes(&data);

    assert_eq!(record.oem_sw_number, "RK3A-12A650-AA");
    assert_eq!(record.sw_version, "PXRK3A-12A650-AA");
    assert_eq!(record.ecu_type, "SID807");
}

#[test]
fn test_continental_alone_fills_software_number() {
    let record = extract_bytes(&padded(&[b"SID807", b"AV6Q-7J104-AB"]));
    assert_eq!(record.oem_sw_number, "AV6Q-7J104-AB");
}

#[test]
fn test_bosch_ecu_type_beats_later_brands() {
    let record = extract_bytes(&padded(&[b"SID807", b"MSD80", b"EDC17_C46"]));
    assert_eq!(record.ecu_type, "EDC17_C46");
}

#[test]
fn test_brand_oem_numbers_beat_generic() {
    let record = extract_bytes(&padded(&[
        b"03L907309AE",
        b"03L906018JL",
        b"JX6A-14C204-AB",
        b"JX6A-12B684-BC",
    ]));
    assert_eq!(record.oem_hw_number, "JX6A-14C204-AB");
    assert_eq!(record.oem_sw_number, "JX6A-12B684-BC");
}

#[test]
fn test_extraction_is_deterministic() {
    let data = padded(&[
        b"1037394113P529TAYI",
        b"03L907309AE",
        b"03L906018JL",
        b"R4 2.0l TDI  CFFB",
        b" 5000 1396 ",
    ]);

    let first = extract_bytes(&data);
    let second = extract_bytes(&data);

    assert_eq!(first, second);
    assert_eq!(first.bosch_sw_number, "1037394113");
    assert_eq!(first.engine_code, "CFFB");
    assert_eq!(first.sw_version, "1396");
}

#[test]
fn test_missing_and_empty_files_give_empty_records() {
    let missing = extract(Path::new("/definitely/not/here/ecu.bin"));
    assert_eq!(missing, MetadataRecord::default());

    let empty = tempfile::NamedTempFile::new().unwrap();
    let record = extract(empty.path());
    assert_eq!(record, MetadataRecord::default());
    assert!(record.is_empty());
}

#[test]
fn test_placeholder_part_numbers_are_rejected() {
    let record = extract_bytes(&padded(&[b"DELCO", b"22222222FU"]));
    assert!(record.oem_sw_number.is_empty());
    assert!(record.oem_hw_number.is_empty());

    let record = extract_bytes(&padded(&[b"11A111111"]));
    assert!(record.oem_hw_number.is_empty());
}

#[test]
fn test_version_fallback_boundary_cases() {
    let record = extract_bytes(&padded(&[b"03L906018JL", b" 5000 00123 0999 1396 "]));
    assert_eq!(record.sw_version, "1396");
}

#[test]
fn test_flex_and_autotuner_detection() {
    let flex = parse_filename("fomoco-delphi-dcm3.5-obd-maps-xyz-20260204104420.bin");
    assert_eq!(flex.format, FilenameFormat::Flex);
    assert_eq!(flex.make, "Ford");
    assert_eq!(flex.date, "20260204");
    assert_eq!(flex.read_method, Some(ReadMethod::NormalObd));

    let autotuner = parse_filename("Volkswagen_Golf_2008_PCR2_1_OBD_NR.bin");
    assert_eq!(autotuner.format, FilenameFormat::Autotuner);
    assert_eq!(autotuner.make, "Volkswagen");
    assert_eq!(autotuner.read_method_label(), "Normal Read-OBD");
}

#[test]
fn test_delphi_signature_retracts_bosch_match() {
    let record = extract_bytes(&padded(&[b"1037394113P529TAYI", b"CRD2\x00SW\x00402050"]));

    assert!(record.bosch_sw_number.is_empty());
    assert!(record.bosch_variant.is_empty());
    assert_eq!(record.ecu_type, "CRD2");
    assert_eq!(record.sw_version, "402050");
}

#[test]
fn test_mercedes_parts_need_delphi_signature() {
    let parts: &[u8] = b"A6511501579";
    let without = extract_bytes(&padded(&[parts]));
    assert!(without.engine_code.is_empty());

    let with = extract_bytes(&padded(&[b"CRD2 V 31150", parts]));
    assert_eq!(with.oem_hw_number, "A6511501579");
    assert_eq!(with.engine_code, "OM651");
}

#[test]
fn test_parse_file_prefers_binary_ecu_type() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir
        .path()
        .join("fomoco-delphi-dcm3.5-obd-maps-xyz-20260204104420.bin");
    let mut file = std::fs::File::create(&path).unwrap();
    file.write_all(&padded(&[b"CRD2\x00SW\x00402050"])).unwrap();
    drop(file);

    let parsed = parse_file(&path);

    assert_eq!(parsed.filename.make, "Ford");
    assert_eq!(parsed.filename.ecu, "CRD2");
    assert_eq!(parsed.metadata.sw_version, "402050");
}

#[test]
fn test_custom_config_changes_dummy_threshold() {
    let data = padded(&[b"DELCO", b"12121234AB"]);
    assert_eq!(extract_bytes(&data).oem_sw_number, "12121234AB");

    let strict = ExtractionPipeline::with_config(
        ExtractorConfig::default().with_dummy_threshold(8, 5),
    );
    assert!(strict.run(&data).oem_sw_number.is_empty());
}

#[test]
fn test_non_ascii_path_segments_do_not_stop_extraction() {
    let record = extract_bytes(&padded(&[
        b"38/1/MG1_CS002/4/P_14\xc301//VL\xc3T0///",
        b"03L907309AE",
    ]));

    assert_eq!(record.ecu_type, "MG1_CS002");
    assert!(record.sw_version.is_empty());
    assert!(record.bosch_sw_number.is_empty());
    assert_eq!(record.oem_hw_number, "03L907309AE");
}

#[test]
fn test_dotted_bmw_family_before_revision_letter() {
    let record = extract_bytes(b"\x00MSD80.5X\x00HW 7561234\x00");
    assert_eq!(record.ecu_type, "MSD80");
    assert_eq!(record.oem_hw_number, "7561234");
}
