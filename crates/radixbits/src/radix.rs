//! Numeric bases accepted for input and output.

use num_bigint::BigUint;
use num_traits::Zero;

use crate::{errors::InvalidInput, value::Value};

/// A base in `2..=36`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Radix(u32);

impl Radix {
    pub const MIN: u32 = 2;
    pub const MAX: u32 = 36;

    pub const BINARY: Radix = Radix(2);
    pub const OCTAL: Radix = Radix(8);
    pub const DECIMAL: Radix = Radix(10);
    pub const HEX: Radix = Radix(16);

    /// Validates `base`. Anything outside `2..=36` is [InvalidInput::BaseOutOfRange].
    pub fn new(base: u32) -> Result<Self, InvalidInput> {
        if (Self::MIN..=Self::MAX).contains(&base) {
            Ok(Radix(base))
        } else {
            Err(InvalidInput::BaseOutOfRange(base))
        }
    }

    pub fn get(self) -> u32 {
        self.0
    }

    /// Renders `value` in this base: a number for base 10, a lower-case digit string otherwise.
    pub fn render(self, value: BigUint) -> Value {
        if self == Radix::DECIMAL {
            Value::Number(value)
        } else {
            Value::Digits(value.to_str_radix(self.0))
        }
    }

    /// Zero in this base's output shape.
    pub fn zero(self) -> Value {
        self.render(BigUint::zero())
    }
}

impl TryFrom<u32> for Radix {
    type Error = InvalidInput;

    fn try_from(value: u32) -> Result<Self, Self::Error> {
        Radix::new(value)
    }
}

impl From<Radix> for u32 {
    fn from(value: Radix) -> Self {
        value.0
    }
}
