//! Values produced by extraction.

use std::fmt;

use num_bigint::BigUint;
use num_traits::{ToPrimitive, Zero};

/// An extracted field, rendered in the extractor's target base.
///
/// Base 10 yields [Value::Number]; every other base yields [Value::Digits].
/// Fields wider than 64 bits are kept exact.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Value {
    Number(BigUint),
    Digits(String),
}

impl Value {
    /// The numeric value if this is a [Value::Number] that fits in a `u64`.
    pub fn to_u64(&self) -> Option<u64> {
        match self {
            Value::Number(n) => n.to_u64(),
            Value::Digits(_) => None,
        }
    }

    pub fn is_zero(&self) -> bool {
        match self {
            Value::Number(n) => n.is_zero(),
            Value::Digits(s) => s.bytes().all(|b| b == b'0'),
        }
    }
}

impl From<u64> for Value {
    fn from(value: u64) -> Self {
        Value::Number(BigUint::from(value))
    }
}

impl From<BigUint> for Value {
    fn from(value: BigUint) -> Self {
        Value::Number(value)
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Number(n) => write!(f, "{n}"),
            Value::Digits(s) => f.write_str(s),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_to_u64() {
        assert_eq!(Value::from(42u64).to_u64(), Some(42));
        assert_eq!(Value::Number(BigUint::from(u64::MAX) + 1u32).to_u64(), None);
        assert_eq!(Value::Digits("2a".to_string()).to_u64(), None);
    }

    #[test]
    fn test_is_zero() {
        assert!(Value::from(0u64).is_zero());
        assert!(Value::Digits("0".to_string()).is_zero());
        assert!(!Value::Digits("10".to_string()).is_zero());
    }

    #[test]
    fn test_display() {
        assert_eq!(Value::from(1295u64).to_string(), "1295");
        assert_eq!(Value::Digits("zz".to_string()).to_string(), "zz");
    }
}
