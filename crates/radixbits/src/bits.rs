//! Low-level bit and byte helpers over byte slices.
//!
//! Bits are addressed in MSB-first order: bit 0 is the high bit of the first byte.
//! Reads are clamped to the end of the data instead of failing.

use num_bigint::BigUint;
use num_traits::Zero;

/// Order in which bits are packed into a byte.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum BitOrder {
    #[default]
    MsbFirst,
    LsbFirst,
}

/// Packs a binary digit string into bytes, left-padding with zeros to a whole number of bytes.
///
/// Characters other than `'1'` count as zero bits.
pub fn bytes_from_binary(binary: &str) -> Vec<u8> {
    let pad = (8 - binary.len() % 8) % 8;
    let bits: Vec<u8> = std::iter::repeat_n(0u8, pad)
        .chain(binary.bytes().map(|b| u8::from(b == b'1')))
        .collect();

    bits_to_bytes(&bits, BitOrder::MsbFirst)
}

/// Reverses the bit order inside every byte, keeping byte order.
pub fn reverse_each_byte(data: &[u8]) -> Vec<u8> {
    data.iter().map(|b| b.reverse_bits()).collect()
}

/// Reads a single bit at `bit_pos` (0 = MSB of first byte). Returns `None` past the end.
pub fn read_bit_at(data: &[u8], bit_pos: usize) -> Option<u8> {
    let byte = data.get(bit_pos / 8)?;
    Some((byte >> (7 - bit_pos % 8)) & 1)
}

/// Reads up to `n` bits starting at `bit_pos`, stopping at the end of `data`.
///
/// The first bit read becomes the least significant bit of the result, so reading
/// a bit-reversed buffer yields values in byte-major, LSB-first order.
pub fn read_bits_clamped(data: &[u8], bit_pos: usize, n: usize) -> BigUint {
    let end = bit_pos.saturating_add(n).min(data.len() * 8);
    if bit_pos >= end {
        return BigUint::zero();
    }

    let bits: Vec<u8> = (bit_pos..end)
        .filter_map(|pos| read_bit_at(data, pos))
        .collect();

    BigUint::from_bytes_le(&bits_to_bytes(&bits, BitOrder::LsbFirst))
}

/// Reads up to `n` bytes starting at byte `start` as a big-endian value, stopping at the end of `data`.
pub fn read_bytes_clamped(data: &[u8], start: usize, n: usize) -> BigUint {
    let end = start.saturating_add(n).min(data.len());
    if start >= end {
        return BigUint::zero();
    }

    BigUint::from_bytes_be(&data[start..end])
}

/// Converts a slice of bits to a byte vector.
pub fn bits_to_bytes(bits: &[u8], bit_order: BitOrder) -> Vec<u8> {
    let n_bytes = bits.len().div_ceil(8);
    let mut out = vec![0u8; n_bytes];

    for (i, &bit) in bits.iter().enumerate() {
        let byte_index = i / 8;
        let bit_in_byte = match bit_order {
            BitOrder::MsbFirst => 7 - (i % 8),
            BitOrder::LsbFirst => i % 8,
        };
        out[byte_index] |= (bit & 1) << bit_in_byte;
    }

    out
}
