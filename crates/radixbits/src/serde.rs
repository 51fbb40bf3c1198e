//! JSON-deserializable extractor and layout descriptions.
//!
//! These types let an application ship its field layouts as configuration
//! (for example a JSON file) and convert them into core `radixbits` types.

use serde::{Deserialize, Serialize, Serializer};

use crate::{
    errors::{InvalidInput, LayoutError},
    extractor::{BitExtractor, Unit},
    layout::{FieldSpec, Layout, Placement},
    value::Value,
};

fn default_from() -> u32 {
    16
}

fn default_to() -> u32 {
    10
}

/// Input value and bases. Bases default to hexadecimal in, decimal out.
#[derive(Debug, Deserialize, Serialize, Clone)]
pub struct ExtractorDef {
    /// Digits of the input value.
    pub data: String,
    /// Base of `data`.
    #[serde(default = "default_from")]
    pub from: u32,
    /// Base extracted fields are rendered in.
    #[serde(default = "default_to")]
    pub to: u32,
}

impl TryFrom<ExtractorDef> for BitExtractor {
    type Error = InvalidInput;

    fn try_from(value: ExtractorDef) -> Result<Self, Self::Error> {
        BitExtractor::new(&value.data, value.from, value.to)
    }
}

/// Addressing unit of a field.
#[derive(Debug, Deserialize, Serialize, Default, Clone, Copy)]
#[serde(rename_all = "lowercase")]
pub enum UnitDef {
    #[default]
    Bits,
    Bytes,
}

impl From<UnitDef> for Unit {
    fn from(value: UnitDef) -> Self {
        match value {
            UnitDef::Bits => Unit::Bits,
            UnitDef::Bytes => Unit::Bytes,
        }
    }
}

/// Top-level layout definition.
#[derive(Debug, Deserialize, Serialize, Clone)]
pub struct LayoutDef {
    pub fields: Vec<FieldDef>,
}

/// One named field.
#[derive(Debug, Deserialize, Serialize, Clone)]
pub struct FieldDef {
    /// Becomes the key in the extracted map.
    pub name: String,
    /// Absolute start in `unit`s; omitted means "after the previous field".
    #[serde(default)]
    pub start: Option<usize>,
    pub length: usize,
    #[serde(default)]
    pub unit: UnitDef,
}

impl From<FieldDef> for FieldSpec {
    fn from(value: FieldDef) -> Self {
        FieldSpec {
            name: value.name,
            placement: value.start.map_or(Placement::Next, Placement::At),
            length: value.length,
            unit: value.unit.into(),
        }
    }
}

impl TryFrom<LayoutDef> for Layout {
    type Error = LayoutError;

    fn try_from(value: LayoutDef) -> Result<Self, Self::Error> {
        Layout::new(value.fields.into_iter().map(Into::into).collect())
    }
}

/// Numbers that fit a `u64` serialize as numbers, wider ones as decimal strings.
impl Serialize for Value {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            Value::Number(n) => match self.to_u64() {
                Some(small) => serializer.serialize_u64(small),
                None => serializer.collect_str(n),
            },
            Value::Digits(s) => serializer.serialize_str(s),
        }
    }
}
