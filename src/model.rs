use serde::{Deserialize, Serialize};

/// Identification metadata recovered from one firmware image.
///
/// Every field defaults to the empty string; an empty field means the
/// extractors found nothing trustworthy for it.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct MetadataRecord {
    pub sw_version: String,
    pub bosch_sw_number: String,
    pub bosch_variant: String,
    pub oem_hw_number: String,
    pub oem_sw_number: String,
    pub ecu_type: String,
    pub engine_type: String,
    pub engine_code: String,
}

impl MetadataRecord {
    pub fn get(&self, field: Field) -> &str {
        match field {
            Field::SwVersion => &self.sw_version,
            Field::BoschSwNumber => &self.bosch_sw_number,
            Field::BoschVariant => &self.bosch_variant,
            Field::OemHwNumber => &self.oem_hw_number,
            Field::OemSwNumber => &self.oem_sw_number,
            Field::EcuType => &self.ecu_type,
            Field::EngineType => &self.engine_type,
            Field::EngineCode => &self.engine_code,
        }
    }

    pub(crate) fn slot_mut(&mut self, field: Field) -> &mut String {
        match field {
            Field::SwVersion => &mut self.sw_version,
            Field::BoschSwNumber => &mut self.bosch_sw_number,
            Field::BoschVariant => &mut self.bosch_variant,
            Field::OemHwNumber => &mut self.oem_hw_number,
            Field::OemSwNumber => &mut self.oem_sw_number,
            Field::EcuType => &mut self.ecu_type,
            Field::EngineType => &mut self.engine_type,
            Field::EngineCode => &mut self.engine_code,
        }
    }

    /// True when no extractor produced anything.
    pub fn is_empty(&self) -> bool {
        Field::ALL.iter().all(|f| self.get(*f).is_empty())
    }
}

/// Names the fields of a [`MetadataRecord`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Field {
    SwVersion,
    BoschSwNumber,
    BoschVariant,
    OemHwNumber,
    OemSwNumber,
    EcuType,
    EngineType,
    EngineCode,
}

impl Field {
    pub const ALL: [Field; 8] = [
        Field::SwVersion,
        Field::BoschSwNumber,
        Field::BoschVariant,
        Field::OemHwNumber,
        Field::OemSwNumber,
        Field::EcuType,
        Field::EngineType,
        Field::EngineCode,
    ];

    pub(crate) fn index(self) -> usize {
        self as usize
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Field::SwVersion => "sw_version",
            Field::BoschSwNumber => "bosch_sw_number",
            Field::BoschVariant => "bosch_variant",
            Field::OemHwNumber => "oem_hw_number",
            Field::OemSwNumber => "oem_sw_number",
            Field::EcuType => "ecu_type",
            Field::EngineType => "engine_type",
            Field::EngineCode => "engine_code",
        }
    }
}

/// The origin of a value written into a record.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Brand {
    Bosch,
    Ford,
    Continental,
    Delphi,
    Delco,
    Transtron,
    Bmw,
    Mercedes,
    Generic,
    /// The software-version locator that runs after every brand extractor.
    Fallback,
}

impl Brand {
    pub fn as_str(&self) -> &'static str {
        match self {
            Brand::Bosch => "bosch",
            Brand::Ford => "ford",
            Brand::Continental => "continental",
            Brand::Delphi => "delphi",
            Brand::Delco => "delco",
            Brand::Transtron => "transtron",
            Brand::Bmw => "bmw",
            Brand::Mercedes => "mercedes",
            Brand::Generic => "generic",
            Brand::Fallback => "fallback",
        }
    }
}

/// How the firmware was read from the vehicle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ReadMethod {
    #[serde(rename = "Normal Read-OBD")]
    NormalObd,
    #[serde(rename = "Virtual Read-OBD")]
    VirtualObd,
    #[serde(rename = "Bench")]
    Bench,
    #[serde(rename = "Boot")]
    Boot,
}

impl ReadMethod {
    pub fn label(&self) -> &'static str {
        match self {
            ReadMethod::NormalObd => "Normal Read-OBD",
            ReadMethod::VirtualObd => "Virtual Read-OBD",
            ReadMethod::Bench => "Bench",
            ReadMethod::Boot => "Boot",
        }
    }
}

/// Which tool naming convention a file name follows.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum FilenameFormat {
    /// Dash-delimited names with a 14-digit timestamp.
    Flex,
    /// Underscore-delimited `Make_Model_..._ECU_...` names.
    Autotuner,
}

/// Fields recovered from a file name alone.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ParsedFilename {
    pub format: FilenameFormat,
    pub make: String,
    pub model: String,
    pub engine: String,
    pub ecu: String,
    /// `YYYYMMDD`
    pub date: String,
    pub mileage: String,
    pub registration: String,
    pub read_method: Option<ReadMethod>,
}

impl ParsedFilename {
    pub fn read_method_label(&self) -> &'static str {
        self.read_method.map(|m| m.label()).unwrap_or("")
    }
}

/// File name fields merged with the metadata found inside the image.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ParsedFile {
    pub filename: ParsedFilename,
    pub metadata: MetadataRecord,
}

impl ParsedFile {
    /// Merges both sources; values found in the binary replace the ones
    /// guessed from the name.
    pub fn merge(mut filename: ParsedFilename, metadata: MetadataRecord) -> Self {
        if !metadata.ecu_type.is_empty() {
            filename.ecu = metadata.ecu_type.clone();
        }
        if !metadata.engine_type.is_empty() {
            filename.engine = metadata.engine_type.clone();
        }
        Self { filename, metadata }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn autotuner_name() -> ParsedFilename {
        ParsedFilename {
            format: FilenameFormat::Autotuner,
            make: "Volkswagen".to_string(),
            model: "Golf".to_string(),
            engine: String::new(),
            ecu: "PCR2 1".to_string(),
            date: "20260101".to_string(),
            mileage: String::new(),
            registration: String::new(),
            read_method: Some(ReadMethod::NormalObd),
        }
    }

    #[test]
    fn test_binary_ecu_type_overrides_filename() {
        let metadata = MetadataRecord {
            ecu_type: "SID807".to_string(),
            engine_type: "R4 2.0l TDI".to_string(),
            ..Default::default()
        };

        let merged = ParsedFile::merge(autotuner_name(), metadata);

        assert_eq!(merged.filename.ecu, "SID807");
        assert_eq!(merged.filename.engine, "R4 2.0l TDI");
        assert_eq!(merged.filename.make, "Volkswagen");
    }

    #[test]
    fn test_empty_binary_keeps_filename_values() {
        let merged = ParsedFile::merge(autotuner_name(), MetadataRecord::default());
        assert_eq!(merged.filename.ecu, "PCR2 1");
        assert!(merged.metadata.is_empty());
    }

    #[test]
    fn test_read_method_serializes_as_label() {
        let json = serde_json::to_string(&ReadMethod::VirtualObd).unwrap();
        assert_eq!(json, "\"Virtual Read-OBD\"");

        let back: ReadMethod = serde_json::from_str("\"Bench\"").unwrap();
        assert_eq!(back, ReadMethod::Bench);
    }

    #[test]
    fn test_field_accessors_cover_every_field() {
        let mut record = MetadataRecord::default();
        for field in Field::ALL {
            *record.slot_mut(field) = field.as_str().to_string();
        }
        for field in Field::ALL {
            assert_eq!(record.get(field), field.as_str());
        }
        assert!(!record.is_empty());
    }
}
