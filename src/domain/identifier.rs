//! Identifier grammar for the dot-separated pre-release and build segments.
//!
//! According to semver.org: https://semver.org/#spec-item-9 and
//! https://semver.org/#spec-item-10

use crate::error::{Result, VersionError};

/// Which suffix a segment list belongs to; decides the leading-zero rule and
/// the error kind.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Segment {
    PreRelease,
    Build,
}

/// Non-empty and made of `[0-9A-Za-z-]` only
pub(crate) fn is_identifier(s: &str) -> bool {
    !s.is_empty() && s.bytes().all(|b| b.is_ascii_alphanumeric() || b == b'-')
}

/// Non-empty and made of ASCII digits only
pub(crate) fn is_numeric(s: &str) -> bool {
    !s.is_empty() && s.bytes().all(|b| b.is_ascii_digit())
}

fn has_leading_zero(s: &str) -> bool {
    s.len() > 1 && s.starts_with('0')
}

/// Split a suffix (the text after `-` or `+`) into validated identifiers.
///
/// `input` is the full version string and is only used for error context.
pub(crate) fn parse_segments(input: &str, tail: &str, segment: Segment) -> Result<Vec<String>> {
    tail.split('.')
        .enumerate()
        .map(|(position, identifier)| {
            let valid = match segment {
                Segment::PreRelease => {
                    is_identifier(identifier)
                        && !(is_numeric(identifier) && has_leading_zero(identifier))
                }
                Segment::Build => is_identifier(identifier),
            };

            if valid {
                Ok(identifier.to_string())
            } else {
                Err(match segment {
                    Segment::PreRelease => VersionError::pre_release(input, identifier, position),
                    Segment::Build => VersionError::build(input, identifier, position),
                })
            }
        })
        .collect()
}
