//! File name parsing for the Flex and Autotuner naming conventions.
//!
//! Parsing never fails: whatever cannot be recovered stays empty, and the
//! date falls back to today.

use chrono::Local;

use crate::model::{FilenameFormat, ParsedFilename, ReadMethod};

/// ECU vendor substrings that start the ECU part of an Autotuner name.
pub const ECU_BRANDS: &[&str] = &[
    "Bosch",
    "Siemens",
    "Delphi",
    "Continental",
    "Marelli",
    "Valeo",
    "Denso",
    "PCR",
    "EDC",
    "MED",
];

/// Tokens that never belong to the model in an Autotuner name.
const MODEL_SKIP_MARKERS: &[&str] = &["OBD", "BENCH", "BOOT", "NR", "OR", "hp", "ps", "kW"];

/// Flex vehicle brand keys and the make they stand for.
const FLEX_BRANDS: &[(&str, &str)] = &[
    ("fomoco", "Ford"),
    ("ford", "Ford"),
    ("vag", "Volkswagen"),
    ("vw", "Volkswagen"),
    ("volkswagen", "Volkswagen"),
    ("audi", "Audi"),
    ("seat", "Seat"),
    ("skoda", "Skoda"),
    ("bmw", "BMW"),
    ("mini", "Mini"),
    ("mercedes", "Mercedes-Benz"),
    ("daimler", "Mercedes-Benz"),
    ("psa", "Peugeot"),
    ("peugeot", "Peugeot"),
    ("citroen", "Citroen"),
    ("renault", "Renault"),
    ("nissan", "Nissan"),
    ("opel", "Opel"),
    ("gm", "GM"),
    ("fiat", "Fiat"),
    ("toyota", "Toyota"),
    ("hyundai", "Hyundai"),
    ("kia", "Kia"),
    ("volvo", "Volvo"),
    ("jlr", "Land Rover"),
    ("landrover", "Land Rover"),
    ("mazda", "Mazda"),
    ("isuzu", "Isuzu"),
    ("mitsubishi", "Mitsubishi"),
];

/// Flex ECU vendor keys and their display names.
const FLEX_ECU_BRANDS: &[(&str, &str)] = &[
    ("bosch", "Bosch"),
    ("delphi", "Delphi"),
    ("siemens", "Siemens"),
    ("continental", "Continental"),
    ("conti", "Continental"),
    ("marelli", "Marelli"),
    ("denso", "Denso"),
    ("valeo", "Valeo"),
    ("delco", "Delco"),
    ("transtron", "Transtron"),
    ("visteon", "Visteon"),
    ("sagem", "Sagem"),
    ("kefico", "Kefico"),
    ("hitachi", "Hitachi"),
];

/// Flex read-method tokens.
const FLEX_READ_METHODS: &[(&str, ReadMethod)] = &[
    ("obd", ReadMethod::NormalObd),
    ("bench", ReadMethod::Bench),
    ("boot", ReadMethod::Boot),
];

/// Parses `name`, defaulting the date to today.
pub fn parse_filename(name: &str) -> ParsedFilename {
    let today = Local::now().format("%Y%m%d").to_string();
    parse_filename_with_date(name, &today)
}

/// Parses `name`, using `default_date` when the name carries no date.
pub fn parse_filename_with_date(name: &str, default_date: &str) -> ParsedFilename {
    let stem = strip_bin_extension(name);
    match detect_format(stem) {
        FilenameFormat::Flex => parse_flex(stem, default_date),
        FilenameFormat::Autotuner => parse_autotuner(stem, default_date),
    }
}

/// Decides which naming convention `stem` follows.
pub fn detect_format(stem: &str) -> FilenameFormat {
    if !stem.contains('-') {
        return FilenameFormat::Autotuner;
    }
    if !stem.contains('_') {
        return FilenameFormat::Flex;
    }

    let parts: Vec<&str> = stem.split('-').collect();
    let shaped_like_flex = parts.len() >= 4
        && (flex_make(parts[0]).is_some() || flex_ecu_brand(parts[1]).is_some());
    if shaped_like_flex {
        FilenameFormat::Flex
    } else {
        FilenameFormat::Autotuner
    }
}

fn strip_bin_extension(name: &str) -> &str {
    let len = name.len();
    if len >= 4 && name.is_char_boundary(len - 4) && name[len - 4..].eq_ignore_ascii_case(".bin") {
        &name[..len - 4]
    } else {
        name
    }
}

fn lookup<'a, T: Copy>(table: &'a [(&'a str, T)], key: &str) -> Option<T> {
    table
        .iter()
        .find(|(k, _)| k.eq_ignore_ascii_case(key))
        .map(|(_, v)| *v)
}

fn flex_make(key: &str) -> Option<&'static str> {
    lookup(FLEX_BRANDS, key)
}

fn flex_ecu_brand(key: &str) -> Option<&'static str> {
    lookup(FLEX_ECU_BRANDS, key)
}

fn capitalize(word: &str) -> String {
    let mut chars = word.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

fn is_flex_timestamp(part: &str) -> bool {
    part.len() == 14 && part.starts_with("20") && part.bytes().all(|b| b.is_ascii_digit())
}

// ============================================================================
// Flex
// ============================================================================

fn parse_flex(stem: &str, default_date: &str) -> ParsedFilename {
    let parts: Vec<&str> = stem.split('-').collect();

    let (metadata, date) = match parts.iter().position(|p| is_flex_timestamp(p)) {
        Some(idx) => (&parts[..idx], parts[idx][..8].to_string()),
        None => (&parts[..], default_date.to_string()),
    };

    let make = metadata
        .first()
        .filter(|p| !p.is_empty())
        .map(|p| flex_make(p).map(str::to_string).unwrap_or_else(|| capitalize(p)))
        .unwrap_or_default();

    let read_method = metadata
        .iter()
        .find_map(|p| lookup(FLEX_READ_METHODS, p));

    let vendor = metadata
        .get(1)
        .filter(|p| lookup(FLEX_READ_METHODS, p).is_none())
        .map(|p| flex_ecu_brand(p).map(str::to_string).unwrap_or_else(|| capitalize(p)));
    let ecu_type = metadata
        .get(2)
        .filter(|p| !p.is_empty() && lookup(FLEX_READ_METHODS, p).is_none())
        .map(|p| p.to_uppercase());

    let ecu = [vendor, ecu_type]
        .into_iter()
        .flatten()
        .collect::<Vec<_>>()
        .join(" ");

    ParsedFilename {
        format: FilenameFormat::Flex,
        make,
        model: String::new(),
        engine: String::new(),
        ecu,
        date,
        mileage: String::new(),
        registration: String::new(),
        read_method,
    }
}

// ============================================================================
// Autotuner
// ============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum AutotunerState {
    AccumulatingModel,
    AccumulatingEcu,
}

fn parse_autotuner(stem: &str, default_date: &str) -> ParsedFilename {
    let parts: Vec<&str> = stem.split('_').collect();
    let make = parts.first().map(|p| p.to_string()).unwrap_or_default();

    let mut state = AutotunerState::AccumulatingModel;
    let mut model_parts = Vec::new();
    let mut ecu_parts = Vec::new();

    for part in parts.iter().skip(1).filter(|p| !p.is_empty()) {
        if ECU_BRANDS.iter().any(|brand| part.contains(brand)) {
            state = AutotunerState::AccumulatingEcu;
        }
        match state {
            AutotunerState::AccumulatingEcu => ecu_parts.push(*part),
            AutotunerState::AccumulatingModel => {
                if !MODEL_SKIP_MARKERS.iter().any(|m| part.contains(m)) {
                    model_parts.push(*part);
                }
            }
        }
    }

    ParsedFilename {
        format: FilenameFormat::Autotuner,
        make,
        model: model_parts.join(" "),
        engine: String::new(),
        ecu: ecu_parts.join(" ").trim().to_string(),
        date: default_date.to_string(),
        mileage: String::new(),
        registration: String::new(),
        read_method: autotuner_read_method(stem),
    }
}

fn autotuner_read_method(stem: &str) -> Option<ReadMethod> {
    let upper = stem.to_uppercase();
    if upper.contains("BENCH") {
        Some(ReadMethod::Bench)
    } else if upper.contains("BOOT") {
        Some(ReadMethod::Boot)
    } else if upper.contains("OBD") {
        if upper.contains("VIRTUAL") || upper.contains("VR") {
            Some(ReadMethod::VirtualObd)
        } else {
            Some(ReadMethod::NormalObd)
        }
    } else {
        None
    }
}
