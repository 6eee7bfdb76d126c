//! SemVer precedence rules: https://semver.org/#spec-item-11

use super::identifier::is_numeric;
use super::numeric::compare_digits;
use std::cmp::Ordering;

/// Outcome of comparing a version against an arbitrary value
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Comparison {
    Less,
    Equal,
    Greater,
    /// The other value is not a version, so no precedence applies
    Incomparable,
}

impl Comparison {
    /// The ordering, if the values were comparable
    pub fn ordering(self) -> Option<Ordering> {
        match self {
            Comparison::Less => Some(Ordering::Less),
            Comparison::Equal => Some(Ordering::Equal),
            Comparison::Greater => Some(Ordering::Greater),
            Comparison::Incomparable => None,
        }
    }

    pub fn is_comparable(self) -> bool {
        self != Comparison::Incomparable
    }
}

impl From<Ordering> for Comparison {
    fn from(ordering: Ordering) -> Self {
        match ordering {
            Ordering::Less => Comparison::Less,
            Ordering::Equal => Comparison::Equal,
            Ordering::Greater => Comparison::Greater,
        }
    }
}

impl From<Option<Ordering>> for Comparison {
    fn from(ordering: Option<Ordering>) -> Self {
        ordering.map_or(Comparison::Incomparable, Comparison::from)
    }
}

/// Compare two pre-release fields.
///
/// A missing pre-release outranks any present one.
pub(crate) fn compare_pre_release(a: Option<&[String]>, b: Option<&[String]>) -> Ordering {
    match (a, b) {
        (None, None) => Ordering::Equal,
        (None, Some(_)) => Ordering::Greater,
        (Some(_), None) => Ordering::Less,
        (Some(a), Some(b)) => compare_identifier_lists(a, b),
    }
}

/// Walk both lists left to right; the first differing pair decides, else the
/// shorter list is smaller.
fn compare_identifier_lists(a: &[String], b: &[String]) -> Ordering {
    let mut i = 0;
    let mut j = 0;

    loop {
        match (a.get(i), b.get(j)) {
            (None, None) => return Ordering::Equal,
            (None, Some(_)) => return Ordering::Less,
            (Some(_), None) => return Ordering::Greater,
            (Some(left), Some(right)) => {
                let ordering = compare_identifiers(left, right);
                if ordering != Ordering::Equal {
                    return ordering;
                }
            }
        }
        i += 1;
        j += 1;
    }
}

/// Numeric identifiers compare numerically and sort below alphanumeric ones;
/// alphanumeric identifiers compare as ASCII bytes.
pub(crate) fn compare_identifiers(a: &str, b: &str) -> Ordering {
    match (is_numeric(a), is_numeric(b)) {
        (true, true) => compare_digits(a, b),
        (true, false) => Ordering::Less,
        (false, true) => Ordering::Greater,
        (false, false) => a.as_bytes().cmp(b.as_bytes()),
    }
}
