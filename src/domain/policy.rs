use crate::error::{Result, VersionError};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// The field a bump advances.
///
/// Lower-significance fields are reset to zero and pre-release/build
/// metadata are cleared whichever policy is chosen.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum IncrementPolicy {
    Major,
    Minor,
    #[default]
    Patch,
}

impl IncrementPolicy {
    /// All policies, most significant first
    pub const ALL: [IncrementPolicy; 3] = [
        IncrementPolicy::Major,
        IncrementPolicy::Minor,
        IncrementPolicy::Patch,
    ];

    /// Parse a policy token; only the exact lowercase names are accepted
    pub fn parse(s: &str) -> Result<Self> {
        s.parse()
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            IncrementPolicy::Major => "major",
            IncrementPolicy::Minor => "minor",
            IncrementPolicy::Patch => "patch",
        }
    }
}

impl FromStr for IncrementPolicy {
    type Err = VersionError;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "major" => Ok(IncrementPolicy::Major),
            "minor" => Ok(IncrementPolicy::Minor),
            "patch" => Ok(IncrementPolicy::Patch),
            other => Err(VersionError::policy(other)),
        }
    }
}

impl fmt::Display for IncrementPolicy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
