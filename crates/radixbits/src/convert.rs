//! Conversion of digit strings in any base from 2 to 36 into binary digit strings.
//!
//! Values that fit a `u64` take a native path. Longer inputs go through [BigUint]:
//! octal and hexadecimal are parsed directly, every other base is accumulated in
//! chunks of [CHUNK_DIGITS] digits so each big-integer step covers many digits.

use num_bigint::BigUint;

use crate::{alphabet, errors::InvalidInput, radix::Radix};

/// Digits folded natively per big-integer multiply. `36^10` still fits a `u64`.
pub const CHUNK_DIGITS: usize = 10;

/// A digit string that has been checked against its source base.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Digits {
    text: String,
    values: Vec<u8>,
}

impl Digits {
    /// The lower-cased input.
    pub fn as_str(&self) -> &str {
        &self.text
    }

    /// Numeric value of each digit, most significant first.
    pub fn values(&self) -> &[u8] {
        &self.values
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }
}

/// Lower-cases `data` and checks every character is a digit of `radix`.
pub fn verify(data: &str, radix: Radix) -> Result<Digits, InvalidInput> {
    let text = data.to_lowercase();
    let mut values = Vec::with_capacity(text.len());

    for c in text.chars() {
        match alphabet::digit_value(c) {
            Some(value) if alphabet::is_valid(c, radix) => values.push(value),
            _ => {
                return Err(InvalidInput::InvalidDigit {
                    digit: c,
                    base: radix.get(),
                });
            }
        }
    }

    Ok(Digits { text, values })
}

/// Binary digit string for verified `digits`. Leading zeros are only kept for binary input.
pub fn to_binary(digits: &Digits, radix: Radix) -> String {
    if digits.is_empty() {
        return "0".to_string();
    }

    if radix == Radix::BINARY {
        return digits.as_str().to_string();
    }

    if digits.len() < native_digit_limit(radix) {
        let value = fold_native(digits.values(), radix);
        return format!("{value:b}");
    }

    tracing::trace!(
        base = radix.get(),
        digits = digits.len(),
        "converting through big integer"
    );

    let value = match radix {
        Radix::HEX | Radix::OCTAL => {
            // digits were verified against `radix`, so this cannot reject
            BigUint::from_radix_be(digits.values(), radix.get()).unwrap_or_default()
        }
        _ => accumulate_chunks(digits.values(), radix),
    };

    value.to_str_radix(2)
}

/// Verifies `data` against `radix` and converts it to a binary digit string.
pub fn convert(data: &str, radix: Radix) -> Result<String, InvalidInput> {
    let digits = verify(data, radix)?;
    Ok(to_binary(&digits, radix))
}

/// Number of digits in `u64::MAX` written in `radix`. Shorter inputs always fit a `u64`.
fn native_digit_limit(radix: Radix) -> usize {
    let base = u64::from(radix.get());
    let mut rest = u64::MAX;
    let mut digits = 0;
    while rest > 0 {
        rest /= base;
        digits += 1;
    }

    digits
}

fn fold_native(values: &[u8], radix: Radix) -> u64 {
    let base = u64::from(radix.get());
    values
        .iter()
        .fold(0u64, |acc, &digit| acc * base + u64::from(digit))
}

/// `result = result * base^CHUNK_DIGITS + chunk`, with chunks aligned to the right end.
fn accumulate_chunks(values: &[u8], radix: Radix) -> BigUint {
    let factor = BigUint::from(radix.get()).pow(CHUNK_DIGITS as u32);

    let head_len = match values.len() % CHUNK_DIGITS {
        0 => CHUNK_DIGITS.min(values.len()),
        rem => rem,
    };
    let (head, tail) = values.split_at(head_len);

    tail.chunks(CHUNK_DIGITS)
        .fold(BigUint::from(fold_native(head, radix)), |acc, chunk| {
            acc * &factor + fold_native(chunk, radix)
        })
}
