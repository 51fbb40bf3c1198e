//! Bit buffer built from a number written in any base, with random-access and
//! sequential extraction of bit or byte ranges.
//!
//! Two forms of the value are kept:
//! - the canonical bytes, big-endian and left-padded to a byte boundary, used for byte reads;
//! - the same bytes with each byte's bits reversed, used for bit reads, so "bit N from the
//!   start" walks bytes in order and each byte from its least significant bit up.

use std::str::FromStr;

use crate::{
    bits::{self, bytes_from_binary, reverse_each_byte},
    convert,
    errors::{InvalidInput, UnknownUnit},
    radix::Radix,
    value::Value,
};

/// Addressing unit for [BitExtractor::parse] and [BitExtractor::shift].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Unit {
    #[default]
    Bits,
    Bytes,
}

impl FromStr for Unit {
    type Err = UnknownUnit;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "bits" => Ok(Unit::Bits),
            "bytes" => Ok(Unit::Bytes),
            other => Err(UnknownUnit(other.to_string())),
        }
    }
}

/// A number decoded into bytes, read back as fields rendered in a target base.
#[derive(Debug, Clone)]
pub struct BitExtractor {
    target: Radix,
    bytes: Vec<u8>,
    reversed: Vec<u8>,
    offset: usize,
}

impl BitExtractor {
    /// Decodes `data` written in base `from`; extracted fields are rendered in base `to`.
    ///
    /// Fails if either base is outside `2..=36` or `data` holds a digit `from` does not allow.
    pub fn new(data: &str, from: u32, to: u32) -> Result<Self, InvalidInput> {
        let (source, target) = match (Radix::new(from), Radix::new(to)) {
            (Ok(source), Ok(target)) => (source, target),
            (Err(err), _) | (_, Err(err)) => {
                tracing::debug!(from, to, "rejected base");
                return Err(err);
            }
        };

        let binary = convert::convert(data, source).inspect_err(|err| {
            tracing::debug!(from, error = %err, "rejected input");
        })?;

        let bytes = bytes_from_binary(&binary);
        let reversed = reverse_each_byte(&bytes);

        tracing::debug!(from, to, bytes = bytes.len(), "built bit buffer");

        Ok(Self {
            target,
            bytes,
            reversed,
            offset: 0,
        })
    }

    /// Hexadecimal input, decimal output.
    pub fn from_hex(data: &str) -> Result<Self, InvalidInput> {
        Self::new(data, Radix::HEX.get(), Radix::DECIMAL.get())
    }

    pub fn target(&self) -> Radix {
        self.target
    }

    pub fn bit_len(&self) -> usize {
        self.bytes.len() * 8
    }

    pub fn byte_len(&self) -> usize {
        self.bytes.len()
    }

    /// Current cursor position, in bits.
    pub fn offset(&self) -> usize {
        self.offset
    }

    pub fn remaining_bits(&self) -> usize {
        self.bit_len().saturating_sub(self.offset)
    }

    /// The canonical big-endian bytes of the whole value.
    pub fn buffer(&self) -> &[u8] {
        &self.bytes
    }

    /// Reads `length` units at `start`, addressed in bits or bytes.
    pub fn parse(&self, start: usize, length: usize, unit: Unit) -> Value {
        match unit {
            Unit::Bits => self.parse_bits(start, length),
            Unit::Bytes => self.parse_bytes(start, length),
        }
    }

    /// Reads `length` bits at bit `start`. The first bit read is the least significant.
    pub fn parse_bits(&self, start: usize, length: usize) -> Value {
        self.target
            .render(bits::read_bits_clamped(&self.reversed, start, length))
    }

    /// Reads `length` bytes at byte `start` as a big-endian value.
    pub fn parse_bytes(&self, start: usize, length: usize) -> Value {
        match start.checked_mul(8) {
            Some(bit_start) if bit_start < self.bit_len() => self
                .target
                .render(bits::read_bytes_clamped(&self.bytes, start, length)),
            _ => self.target.zero(),
        }
    }

    /// Reads `length` units at the cursor and advances past them.
    pub fn shift(&mut self, length: usize, unit: Unit) -> Value {
        match unit {
            Unit::Bits => self.shift_bits(length),
            Unit::Bytes => self.shift_bytes(length),
        }
    }

    /// Reads `length` bits at the cursor and advances it by `length`.
    ///
    /// Once the cursor reaches the end, returns zero and stays put.
    pub fn shift_bits(&mut self, length: usize) -> Value {
        if self.offset >= self.bit_len() {
            return self.target.zero();
        }

        let value = self.parse_bits(self.offset, length);
        self.offset = self.offset.saturating_add(length);

        value
    }

    /// Aligns the cursor up to a byte boundary, reads `length` bytes and advances past them.
    ///
    /// Once the aligned cursor reaches the end, returns zero and leaves the cursor unchanged.
    pub fn shift_bytes(&mut self, length: usize) -> Value {
        let aligned = match self.offset.checked_next_multiple_of(8) {
            Some(aligned) if aligned < self.bit_len() => aligned,
            _ => return self.target.zero(),
        };

        let value = self.parse_bytes(aligned / 8, length);
        self.offset = aligned.saturating_add(length.saturating_mul(8));

        value
    }
}
