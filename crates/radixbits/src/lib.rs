//! # radixbits
//!
//! Treat a number written in any base from 2 to 36 as a bit buffer and pull
//! fixed-width fields (flags, counters, sub-identifiers) out of it.
//!
//! The input digits are converted to binary (exactly, beyond 64 bits), padded to
//! whole bytes, and then read back by bit or byte position, either at absolute
//! offsets or through a moving cursor. Each extracted field is rendered in a
//! target base.
//!
//! Bit reads walk the bytes in order and each byte from its least significant
//! bit up; byte reads are big-endian.
//!
//! ## Example
//!
//! ```
//! use radixbits::{BitExtractor, Unit, Value};
//!
//! let mut ex = BitExtractor::new("zz", 36, 10).unwrap();
//! assert_eq!(ex.parse(0, 2, Unit::Bytes), Value::from(1295u64));
//! assert_eq!(ex.shift_bits(4), Value::from(5u64));
//!
//! let ex = BitExtractor::new("ff", 16, 2).unwrap();
//! assert_eq!(ex.parse(0, 8, Unit::Bits), Value::Digits("11111111".to_string()));
//! ```
//!
//! Invalid bases or digits are reported by [BitExtractor::new]. [SoftExtractor]
//! keeps reading zeros from an invalid input instead.

pub mod alphabet;
pub mod bits;
pub mod convert;
pub mod errors;
pub mod extractor;
pub mod layout;
pub mod radix;
#[cfg(feature = "serde")]
pub mod serde;
pub mod soft;
pub mod value;

pub use errors::{InvalidInput, LayoutError, UnknownUnit};
pub use extractor::{BitExtractor, Unit};
pub use layout::{FieldSpec, Layout, Placement};
pub use radix::Radix;
pub use soft::SoftExtractor;
pub use value::Value;

/// Builds an extractor for `data` written in base `from`, rendering fields in base `to`.
pub fn create(data: &str, from: u32, to: u32) -> Result<BitExtractor, InvalidInput> {
    BitExtractor::new(data, from, to)
}
