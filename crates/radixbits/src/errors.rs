//! Error types for construction, unit parsing and layout compilation.
//!
//! Extraction itself never fails: once a [crate::extractor::BitExtractor] exists,
//! every read returns a value.

use thiserror::Error;

/// The single input error: a base outside `2..=36` or a digit the source base does not allow.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum InvalidInput {
    /// Source or target base is outside `2..=36`.
    #[error("base {0} is outside 2..=36")]
    BaseOutOfRange(u32),
    /// A character of the input is not a digit of the source base.
    #[error("{digit:?} is not a valid digit in base {base}")]
    InvalidDigit { digit: char, base: u32 },
}

/// Returned when a unit name is neither `"bits"` nor `"bytes"`.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown unit {0:?}, expected \"bits\" or \"bytes\"")]
pub struct UnknownUnit(pub String);

/// Errors produced when compiling [crate::layout::FieldSpec]s into a [crate::layout::Layout].
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LayoutError {
    /// Field name is empty or whitespace.
    #[error("field name is empty")]
    EmptyFieldName,
    /// Two fields share a name.
    #[error("duplicate field {0:?}")]
    DuplicateFieldName(String),
    /// Field reads zero bits or bytes.
    #[error("field {0:?} has zero length")]
    ZeroLength(String),
}
