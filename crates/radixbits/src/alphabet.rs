//! The 36-symbol digit alphabet shared by every base.
//!
//! Each symbol of `0-9a-z` maps to its rank plus one, so `0` can mean "not a digit".
//! A symbol is a digit of base `B` when its mapped value is at most `B`.

use crate::radix::Radix;

const ALPHABET: &[u8; 36] = b"0123456789abcdefghijklmnopqrstuvwxyz";

const fn build_table() -> [u8; 128] {
    let mut table = [0u8; 128];
    let mut i = 0;
    while i < ALPHABET.len() {
        table[ALPHABET[i] as usize] = i as u8 + 1;
        i += 1;
    }

    table
}

static TABLE: [u8; 128] = build_table();

/// Mapped value of `c` (rank + 1), or 0 when `c` is not a lower-case alphanumeric symbol.
pub fn lookup(c: char) -> u8 {
    if c.is_ascii() {
        TABLE[c as usize]
    } else {
        0
    }
}

/// Numeric digit value of `c` (`'0'` = 0 .. `'z'` = 35).
pub fn digit_value(c: char) -> Option<u8> {
    lookup(c).checked_sub(1)
}

/// Whether `c` is a digit of `radix`. Expects lower-case input.
pub fn is_valid(c: char, radix: Radix) -> bool {
    let value = lookup(c);
    value != 0 && u32::from(value) <= radix.get()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lookup_reserves_zero() {
        assert_eq!(lookup('0'), 1);
        assert_eq!(lookup('9'), 10);
        assert_eq!(lookup('a'), 11);
        assert_eq!(lookup('z'), 36);
        assert_eq!(lookup('-'), 0);
        assert_eq!(lookup('A'), 0);
        assert_eq!(lookup('é'), 0);
    }

    #[test]
    fn test_digit_value() {
        assert_eq!(digit_value('0'), Some(0));
        assert_eq!(digit_value('f'), Some(15));
        assert_eq!(digit_value('z'), Some(35));
        assert_eq!(digit_value(' '), None);
    }

    #[test]
    fn test_is_valid_respects_base() {
        assert!(is_valid('1', Radix::BINARY));
        assert!(!is_valid('2', Radix::BINARY));
        assert!(is_valid('9', Radix::DECIMAL));
        assert!(!is_valid('a', Radix::DECIMAL));
        assert!(is_valid('f', Radix::HEX));
        assert!(!is_valid('g', Radix::HEX));
        assert!(is_valid('z', Radix::new(36).unwrap()));
    }
}
