//! Layout: a named set of fields pulled out of a [BitExtractor] in one pass.

use std::collections::{BTreeMap, HashSet};

use crate::{
    errors::LayoutError,
    extractor::{BitExtractor, Unit},
    value::Value,
};

/// Where a field starts.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Placement {
    /// Absolute position, counted in the field's [Unit].
    At(usize),
    /// Directly after the previous field. Byte fields first align up to a byte boundary.
    Next,
}

/// A single named field of a [Layout].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldSpec {
    /// Name used in the extracted map.
    pub name: String,
    pub placement: Placement,
    /// Number of bits or bytes, depending on `unit`.
    pub length: usize,
    pub unit: Unit,
}

impl FieldSpec {
    pub fn bits(name: impl Into<String>, start: usize, length: usize) -> Self {
        Self {
            name: name.into(),
            placement: Placement::At(start),
            length,
            unit: Unit::Bits,
        }
    }

    pub fn bytes(name: impl Into<String>, start: usize, length: usize) -> Self {
        Self {
            name: name.into(),
            placement: Placement::At(start),
            length,
            unit: Unit::Bytes,
        }
    }

    /// A field that follows the previous one.
    pub fn next(name: impl Into<String>, length: usize, unit: Unit) -> Self {
        Self {
            name: name.into(),
            placement: Placement::Next,
            length,
            unit,
        }
    }
}

/// Validated fields in definition order. Build with [Layout::new], then [Layout::extract].
#[derive(Debug, Clone)]
pub struct Layout {
    fields: Vec<FieldSpec>,
}

impl Layout {
    /// Fails on empty or duplicate names and zero-length fields.
    pub fn new(fields: Vec<FieldSpec>) -> Result<Self, LayoutError> {
        let mut seen = HashSet::with_capacity(fields.len());

        for field in &fields {
            if field.name.trim().is_empty() {
                return Err(LayoutError::EmptyFieldName);
            }
            if field.length == 0 {
                return Err(LayoutError::ZeroLength(field.name.clone()));
            }
            if !seen.insert(field.name.as_str()) {
                return Err(LayoutError::DuplicateFieldName(field.name.clone()));
            }
        }

        Ok(Self { fields })
    }

    pub fn fields(&self) -> &[FieldSpec] {
        &self.fields
    }

    /// Bit position just past the furthest field.
    pub fn bit_len(&self) -> usize {
        self.spans()
            .iter()
            .map(|&(start, len, _)| start.saturating_add(len))
            .max()
            .unwrap_or(0)
    }

    /// Extracts every field. The extractor's cursor is not touched.
    pub fn extract(&self, extractor: &BitExtractor) -> BTreeMap<String, Value> {
        self.fields
            .iter()
            .zip(self.spans())
            .map(|(field, (start, _, unit))| {
                let value = match unit {
                    Unit::Bits => extractor.parse_bits(start, field.length),
                    Unit::Bytes => extractor.parse_bytes(start / 8, field.length),
                };
                (field.name.clone(), value)
            })
            .collect()
    }

    /// `(start_bit, len_bits, unit)` of every field, resolving [Placement::Next].
    fn spans(&self) -> Vec<(usize, usize, Unit)> {
        let mut cursor = 0usize;

        self.fields
            .iter()
            .map(|field| {
                let (start, len) = match (field.placement, field.unit) {
                    (Placement::At(start), Unit::Bits) => (start, field.length),
                    (Placement::At(start), Unit::Bytes) => (
                        start.saturating_mul(8),
                        field.length.saturating_mul(8),
                    ),
                    (Placement::Next, Unit::Bits) => (cursor, field.length),
                    (Placement::Next, Unit::Bytes) => (
                        cursor.checked_next_multiple_of(8).unwrap_or(usize::MAX),
                        field.length.saturating_mul(8),
                    ),
                };
                cursor = start.saturating_add(len);
                (start, len, field.unit)
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_extract_empty() {
        let layout = Layout::new(vec![]).unwrap();
        let ex = BitExtractor::from_hex("ff").unwrap();
        assert_eq!(layout.extract(&ex), BTreeMap::new());
        assert_eq!(layout.bit_len(), 0);
    }

    #[test]
    fn test_extract_absolute_fields() {
        let layout = Layout::new(vec![
            FieldSpec::bits("flag", 0, 1),
            FieldSpec::bits("low", 0, 4),
            FieldSpec::bytes("id", 1, 2),
        ])
        .unwrap();

        let ex = BitExtractor::from_hex("a51234").unwrap();
        assert_eq!(
            layout.extract(&ex),
            BTreeMap::from([
                ("flag".to_string(), Value::from(1u64)),
                ("low".to_string(), Value::from(5u64)),
                ("id".to_string(), Value::from(0x1234u64)),
            ])
        );
        assert_eq!(layout.bit_len(), 24);
    }

    #[test]
    fn test_extract_sequential_fields() {
        let layout = Layout::new(vec![
            FieldSpec::next("low", 4, Unit::Bits),
            FieldSpec::next("high", 4, Unit::Bits),
            FieldSpec::next("tag", 3, Unit::Bits),
            FieldSpec::next("tail", 1, Unit::Bytes),
        ])
        .unwrap();

        let ex = BitExtractor::from_hex("a5ff07").unwrap();
        assert_eq!(
            layout.extract(&ex),
            BTreeMap::from([
                ("low".to_string(), Value::from(5u64)),
                ("high".to_string(), Value::from(0xau64)),
                ("tag".to_string(), Value::from(0b111u64)),
                ("tail".to_string(), Value::from(7u64)),
            ])
        );
        assert_eq!(ex.offset(), 0);
    }

    #[test]
    fn test_extract_past_end_is_zero() {
        let layout = Layout::new(vec![FieldSpec::bytes("missing", 4, 1)]).unwrap();
        let ex = BitExtractor::new("ff", 16, 16).unwrap();
        assert_eq!(
            layout.extract(&ex).get("missing"),
            Some(&Value::Digits("0".to_string()))
        );
    }

    #[test]
    fn test_next_byte_field_after_far_field_is_zero() {
        let layout = Layout::new(vec![
            FieldSpec::bits("far", usize::MAX - 2, 8),
            FieldSpec::next("tail", 1, Unit::Bytes),
        ])
        .unwrap();

        let ex = BitExtractor::from_hex("a1b2").unwrap();
        assert_eq!(
            layout.extract(&ex),
            BTreeMap::from([
                ("far".to_string(), Value::from(0u64)),
                ("tail".to_string(), Value::from(0u64)),
            ])
        );
        assert_eq!(layout.bit_len(), usize::MAX);
    }

    #[test]
    fn test_rejects_duplicate_names() {
        let err = Layout::new(vec![FieldSpec::bits("a", 0, 1), FieldSpec::bits("a", 1, 1)])
            .unwrap_err();
        assert_eq!(err, LayoutError::DuplicateFieldName("a".to_string()));
    }

    #[test]
    fn test_rejects_empty_name_and_zero_length() {
        assert_eq!(
            Layout::new(vec![FieldSpec::bits(" ", 0, 1)]).unwrap_err(),
            LayoutError::EmptyFieldName
        );
        assert_eq!(
            Layout::new(vec![FieldSpec::bits("a", 0, 0)]).unwrap_err(),
            LayoutError::ZeroLength("a".to_string())
        );
    }
}
