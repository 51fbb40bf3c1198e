//! Fail-soft access to a [BitExtractor].
//!
//! Invalid input does not stop a pipeline: every read on an invalid instance returns zero.
//! Use [SoftExtractor::is_valid] to tell a legitimate zero from a rejected input.

use crate::{
    errors::InvalidInput,
    extractor::{BitExtractor, Unit},
    value::Value,
};

#[derive(Debug, Clone)]
pub struct SoftExtractor {
    inner: Result<BitExtractor, InvalidInput>,
}

impl SoftExtractor {
    pub fn new(data: &str, from: u32, to: u32) -> Self {
        Self {
            inner: BitExtractor::new(data, from, to),
        }
    }

    pub fn is_valid(&self) -> bool {
        self.inner.is_ok()
    }

    /// Why construction failed, if it did.
    pub fn error(&self) -> Option<&InvalidInput> {
        self.inner.as_ref().err()
    }

    pub fn get(&self) -> Option<&BitExtractor> {
        self.inner.as_ref().ok()
    }

    pub fn into_inner(self) -> Result<BitExtractor, InvalidInput> {
        self.inner
    }

    pub fn parse(&self, start: usize, length: usize, unit: Unit) -> Value {
        self.read(|ex| ex.parse(start, length, unit))
    }

    pub fn parse_bits(&self, start: usize, length: usize) -> Value {
        self.read(|ex| ex.parse_bits(start, length))
    }

    pub fn parse_bytes(&self, start: usize, length: usize) -> Value {
        self.read(|ex| ex.parse_bytes(start, length))
    }

    pub fn shift(&mut self, length: usize, unit: Unit) -> Value {
        self.advance(|ex| ex.shift(length, unit))
    }

    pub fn shift_bits(&mut self, length: usize) -> Value {
        self.advance(|ex| ex.shift_bits(length))
    }

    pub fn shift_bytes(&mut self, length: usize) -> Value {
        self.advance(|ex| ex.shift_bytes(length))
    }

    /// Canonical bytes, or an empty slice when invalid.
    pub fn buffer(&self) -> &[u8] {
        match &self.inner {
            Ok(ex) => ex.buffer(),
            Err(_) => &[],
        }
    }

    fn read(&self, f: impl FnOnce(&BitExtractor) -> Value) -> Value {
        self.inner.as_ref().map_or(Value::from(0u64), f)
    }

    fn advance(&mut self, f: impl FnOnce(&mut BitExtractor) -> Value) -> Value {
        self.inner.as_mut().map_or(Value::from(0u64), f)
    }
}

impl From<Result<BitExtractor, InvalidInput>> for SoftExtractor {
    fn from(inner: Result<BitExtractor, InvalidInput>) -> Self {
        Self { inner }
    }
}

impl From<BitExtractor> for SoftExtractor {
    fn from(extractor: BitExtractor) -> Self {
        Self { inner: Ok(extractor) }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn assert_all_zero(ex: &mut SoftExtractor) {
        assert_eq!(ex.parse(0, 1, Unit::Bits), Value::from(0u64));
        assert_eq!(ex.parse(0, 1, Unit::Bytes), Value::from(0u64));
        assert_eq!(ex.parse_bits(0, 8), Value::from(0u64));
        assert_eq!(ex.parse_bytes(0, 1), Value::from(0u64));
        assert_eq!(ex.shift(4, Unit::Bits), Value::from(0u64));
        assert_eq!(ex.shift_bits(4), Value::from(0u64));
        assert_eq!(ex.shift_bytes(1), Value::from(0u64));
        assert!(ex.buffer().is_empty());
    }

    #[test]
    fn test_out_of_range_bases_read_zero() {
        for (from, to) in [(1, 10), (37, 10), (16, 1), (16, 37)] {
            let mut ex = SoftExtractor::new("ff", from, to);
            assert!(!ex.is_valid());
            assert_all_zero(&mut ex);
        }
    }

    #[test]
    fn test_invalid_digit_reads_zero() {
        let mut ex = SoftExtractor::new("abc", 10, 10);
        assert_eq!(
            ex.error(),
            Some(&InvalidInput::InvalidDigit {
                digit: 'a',
                base: 10
            })
        );
        assert_all_zero(&mut ex);

        let mut ex = SoftExtractor::new("1g", 10, 16);
        assert!(!ex.is_valid());
        assert_all_zero(&mut ex);
    }

    #[test]
    fn test_valid_delegates() {
        let mut ex = SoftExtractor::new("ff", 16, 10);
        assert!(ex.is_valid());
        assert!(ex.error().is_none());
        assert_eq!(ex.parse(0, 8, Unit::Bits), Value::from(255u64));
        assert_eq!(ex.shift_bits(4), Value::from(15u64));
        assert_eq!(ex.get().map(BitExtractor::offset), Some(4));
        assert_eq!(ex.buffer(), &[0xff]);
    }

    #[test]
    fn test_into_inner() {
        let ex = SoftExtractor::from(BitExtractor::from_hex("01").unwrap());
        assert!(ex.into_inner().is_ok());
        assert!(SoftExtractor::new("ff", 16, 99).into_inner().is_err());
    }
}
