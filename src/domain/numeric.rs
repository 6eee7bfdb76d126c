//! Core version numbers of any size.
//!
//! MAJOR, MINOR and PATCH allow any count of digits, so they are kept as
//! canonical digit strings (no leading zeros) rather than a fixed-width
//! integer. Bumping carries through the digits and can never overflow.

use crate::error::{Result, VersionError};
use serde::de::{self, Visitor};
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::cmp::Ordering;
use std::fmt;

/// A non-negative integer in canonical decimal form
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Numeric(String);

impl Numeric {
    pub fn zero() -> Self {
        Numeric("0".to_string())
    }

    /// Accept `0 | [1-9][0-9]*`; anything else is a format error
    pub fn parse(digits: &str) -> Result<Self> {
        let canonical = !digits.is_empty()
            && digits.bytes().all(|b| b.is_ascii_digit())
            && (digits == "0" || !digits.starts_with('0'));

        if canonical {
            Ok(Numeric(digits.to_string()))
        } else {
            Err(VersionError::format(digits))
        }
    }

    /// Digits already matched by the core version grammar
    pub(crate) fn from_canonical(digits: &str) -> Self {
        Numeric(digits.to_string())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// The value as `u64`, if it fits
    pub fn to_u64(&self) -> Option<u64> {
        self.0.parse().ok()
    }

    pub fn is_zero(&self) -> bool {
        self.0 == "0"
    }

    /// The next integer: trailing nines roll over to zero and the digit in
    /// front of them goes up by one, or a leading `1` is added.
    pub fn incremented(&self) -> Self {
        let trailing_nines = self.0.bytes().rev().take_while(|&b| b == b'9').count();
        let head = &self.0[..self.0.len() - trailing_nines];

        let mut next = String::with_capacity(self.0.len() + 1);
        match head.bytes().last() {
            Some(last) => {
                next.push_str(&head[..head.len() - 1]);
                next.push(char::from(last + 1));
            }
            None => next.push('1'),
        }
        next.extend(std::iter::repeat('0').take(trailing_nines));
        Numeric(next)
    }
}

/// Order digit strings of any length numerically; leading zeros are ignored.
pub(crate) fn compare_digits(a: &str, b: &str) -> Ordering {
    let a = a.trim_start_matches('0');
    let b = b.trim_start_matches('0');
    a.len().cmp(&b.len()).then_with(|| a.cmp(b))
}

impl Ord for Numeric {
    fn cmp(&self, other: &Self) -> Ordering {
        compare_digits(&self.0, &other.0)
    }
}

impl PartialOrd for Numeric {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl From<u64> for Numeric {
    fn from(value: u64) -> Self {
        Numeric(value.to_string())
    }
}

impl PartialEq<u64> for Numeric {
    fn eq(&self, other: &u64) -> bool {
        self.to_u64() == Some(*other)
    }
}

impl fmt::Display for Numeric {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

// TOML integers are signed 64-bit, so larger values are written as strings.
impl Serialize for Numeric {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        match self.0.parse::<i64>() {
            Ok(value) => serializer.serialize_i64(value),
            Err(_) => serializer.serialize_str(&self.0),
        }
    }
}

struct NumericVisitor;

impl<'de> Visitor<'de> for NumericVisitor {
    type Value = Numeric;

    fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("a non-negative integer or a string of digits")
    }

    fn visit_u64<E: de::Error>(self, value: u64) -> std::result::Result<Numeric, E> {
        Ok(Numeric::from(value))
    }

    fn visit_i64<E: de::Error>(self, value: i64) -> std::result::Result<Numeric, E> {
        u64::try_from(value)
            .map(Numeric::from)
            .map_err(|_| E::custom(format!("negative version number {}", value)))
    }

    fn visit_str<E: de::Error>(self, value: &str) -> std::result::Result<Numeric, E> {
        Numeric::parse(value).map_err(E::custom)
    }
}

impl<'de> Deserialize<'de> for Numeric {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> std::result::Result<Self, D::Error> {
        deserializer.deserialize_any(NumericVisitor)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn n(s: &str) -> Numeric {
        Numeric::parse(s).unwrap()
    }

    #[test]
    fn test_parse_canonical() {
        assert_eq!(n("0").as_str(), "0");
        assert_eq!(n("120").as_str(), "120");
        assert_eq!(n("99999999999999999999").as_str(), "99999999999999999999");
    }

    #[test]
    fn test_parse_rejects_non_canonical() {
        for s in ["", "01", "00", "1a", "-1", "+1", " 1"] {
            assert_eq!(Numeric::parse(s).unwrap_err(), VersionError::format(s));
        }
    }

    #[test]
    fn test_incremented() {
        let cases = [
            ("0", "1"),
            ("8", "9"),
            ("9", "10"),
            ("199", "200"),
            ("1099", "1100"),
            ("18446744073709551615", "18446744073709551616"),
            ("99999999999999999999", "100000000000000000000"),
        ];
        for (from, to) in cases {
            assert_eq!(n(from).incremented().as_str(), to);
        }
    }

    #[test]
    fn test_ordering_beyond_u64() {
        assert!(n("9") < n("10"));
        assert!(n("18446744073709551615") < n("18446744073709551616"));
        assert_eq!(n("123").cmp(&n("123")), Ordering::Equal);
        assert_eq!(compare_digits("007", "7"), Ordering::Equal);
    }

    #[test]
    fn test_u64_conversions() {
        assert_eq!(Numeric::from(42_u64), 42_u64);
        assert_eq!(n("18446744073709551615").to_u64(), Some(u64::MAX));
        assert_eq!(n("18446744073709551616").to_u64(), None);
        assert!(Numeric::zero().is_zero());
    }

    #[test]
    fn test_toml_integer_or_string() {
        #[derive(Serialize, Deserialize, Debug, PartialEq)]
        struct Wrapper {
            value: Numeric,
        }

        let small = toml::to_string(&Wrapper { value: n("7") }).unwrap();
        assert_eq!(small.trim(), "value = 7");

        let big = toml::to_string(&Wrapper { value: n("99999999999999999999") }).unwrap();
        assert_eq!(big.trim(), "value = \"99999999999999999999\"");

        let back: Wrapper = toml::from_str(&big).unwrap();
        assert_eq!(back.value, n("99999999999999999999"));
        assert!(toml::from_str::<Wrapper>("value = -1").is_err());
        assert!(toml::from_str::<Wrapper>("value = \"01\"").is_err());
    }
}
