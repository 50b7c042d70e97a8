//! In-progress extraction state threaded through the brand extractors.

use tracing::debug;

use crate::model::{Brand, Field, MetadataRecord};

/// Accumulates a [`MetadataRecord`] while remembering which brand wrote
/// each field.
///
/// All writes go through [`RecordBuilder::set_if_empty`]: a field, once
/// filled, keeps its value. The only way to empty a field again is
/// [`RecordBuilder::retract`], which removes everything one brand wrote.
#[derive(Debug, Default, Clone)]
pub struct RecordBuilder {
    record: MetadataRecord,
    sources: [Option<Brand>; Field::ALL.len()],
}

impl RecordBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_set(&self, field: Field) -> bool {
        !self.record.get(field).is_empty()
    }

    pub fn get(&self, field: Field) -> &str {
        self.record.get(field)
    }

    /// The brand that wrote `field`, if it is set.
    pub fn source(&self, field: Field) -> Option<Brand> {
        self.sources[field.index()]
    }

    /// Writes `value` into `field` unless the field already holds a value.
    ///
    /// Empty values are ignored. Returns `true` when the write happened.
    pub fn set_if_empty(&mut self, field: Field, value: impl Into<String>, brand: Brand) -> bool {
        if self.is_set(field) {
            return false;
        }
        let value = value.into();
        if value.is_empty() {
            return false;
        }

        debug!(field = field.as_str(), brand = brand.as_str(), value = %value, "Field set");
        *self.record.slot_mut(field) = value;
        self.sources[field.index()] = Some(brand);
        true
    }

    /// Clears every field written by `brand` and returns the cleared fields.
    pub fn retract(&mut self, brand: Brand) -> Vec<Field> {
        let mut cleared = Vec::new();
        for field in Field::ALL {
            if self.sources[field.index()] == Some(brand) {
                self.record.slot_mut(field).clear();
                self.sources[field.index()] = None;
                cleared.push(field);
            }
        }
        cleared
    }

    /// Number of fields holding a value.
    pub fn filled(&self) -> usize {
        Field::ALL.iter().filter(|f| self.is_set(**f)).count()
    }

    pub fn build(self) -> MetadataRecord {
        self.record
    }
}

/// Flags one extractor raises for the ones after it.
///
/// Kept beside the record, never inside it, and dropped once the pipeline
/// returns.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct BrandSignals {
    /// A Delphi common-rail-diesel signature was confirmed.
    pub delphi_crd: bool,
}
