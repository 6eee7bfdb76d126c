use super::identifier::{self, Segment};
use super::numeric::Numeric;
use super::policy::IncrementPolicy;
use super::precedence::{self, Comparison};
use crate::error::{Result, VersionError};
use lazy_static::lazy_static;
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::any::Any;
use std::cmp::Ordering;
use std::fmt;
use std::hash::{Hash, Hasher};
use std::str::FromStr;

lazy_static! {
    /// `MAJOR.MINOR.PATCH` plus the raw `-pre-release` and `+build` tails.
    /// The tails are checked identifier by identifier afterwards so each
    /// failure reports the right kind and position.
    /// `(?s)` keeps a newline inside a tail from failing the whole match.
    static ref SEMVER_RE: Regex = Regex::new(
        r"(?s)^(0|[1-9][0-9]*)\.(0|[1-9][0-9]*)\.(0|[1-9][0-9]*)(?:-([^+]*))?(?:\+(.*))?$"
    )
    .expect("semantic version pattern must compile");
}

/// A Semantic Versioning 2.0.0 identifier.
///
/// Values are validated on construction and only change through
/// [`Version::bump`]. Equality, ordering and hashing follow SemVer
/// precedence: build metadata and the attached increment policy are ignored.
#[derive(Debug, Clone)]
pub struct Version {
    major: Numeric,
    minor: Numeric,
    patch: Numeric,
    pre_release: Option<Vec<String>>,
    build_metadata: Option<Vec<String>>,
    increment_policy: IncrementPolicy,
}

/// Named-field view of a version, e.g. for rendering as TOML
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct VersionRecord {
    pub major: Numeric,
    pub minor: Numeric,
    pub patch: Numeric,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub pre_release: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub build_metadata: Option<String>,
}

/// `(major, minor, patch, pre_release, build_metadata)`
pub type VersionTuple = (Numeric, Numeric, Numeric, Option<String>, Option<String>);

impl Version {
    /// Parse `input` and attach the given increment policy.
    ///
    /// # Examples
    /// ```
    /// use semantic_versioning::{IncrementPolicy, Version};
    ///
    /// let v = Version::new("1.9.1", IncrementPolicy::Minor).unwrap();
    /// assert_eq!(v.bumped().to_string(), "1.10.0");
    /// ```
    pub fn new(input: &str, policy: IncrementPolicy) -> Result<Self> {
        let captures = SEMVER_RE
            .captures(input)
            .ok_or_else(|| VersionError::format(input))?;

        let major = Numeric::from_canonical(&captures[1]);
        let minor = Numeric::from_canonical(&captures[2]);
        let patch = Numeric::from_canonical(&captures[3]);

        let pre_release = captures
            .get(4)
            .map(|m| identifier::parse_segments(input, m.as_str(), Segment::PreRelease))
            .transpose()?;
        let build_metadata = captures
            .get(5)
            .map(|m| identifier::parse_segments(input, m.as_str(), Segment::Build))
            .transpose()?;

        Ok(Version {
            major,
            minor,
            patch,
            pre_release,
            build_metadata,
            increment_policy: policy,
        })
    }

    /// Parse `input` with the default `patch` policy
    pub fn parse(input: &str) -> Result<Self> {
        Self::new(input, IncrementPolicy::default())
    }

    /// Parse `input` and a policy token (`major`, `minor` or `patch`).
    ///
    /// The version string is checked first, then the token.
    pub fn with_policy_token(input: &str, policy: &str) -> Result<Self> {
        let version = Self::parse(input)?;
        let policy = IncrementPolicy::parse(policy)?;
        Ok(version.with_policy(policy))
    }

    /// A release version with no pre-release or build metadata
    pub fn from_parts(major: u64, minor: u64, patch: u64) -> Self {
        Version {
            major: Numeric::from(major),
            minor: Numeric::from(minor),
            patch: Numeric::from(patch),
            pre_release: None,
            build_metadata: None,
            increment_policy: IncrementPolicy::default(),
        }
    }

    pub fn with_policy(mut self, policy: IncrementPolicy) -> Self {
        self.increment_policy = policy;
        self
    }

    pub fn major(&self) -> &Numeric {
        &self.major
    }

    pub fn minor(&self) -> &Numeric {
        &self.minor
    }

    pub fn patch(&self) -> &Numeric {
        &self.patch
    }

    pub fn pre_release(&self) -> Option<&[String]> {
        self.pre_release.as_deref()
    }

    pub fn build_metadata(&self) -> Option<&[String]> {
        self.build_metadata.as_deref()
    }

    pub fn is_pre_release(&self) -> bool {
        self.pre_release.is_some()
    }

    pub fn increment_policy(&self) -> IncrementPolicy {
        self.increment_policy
    }

    pub fn set_increment_policy(&mut self, policy: IncrementPolicy) {
        self.increment_policy = policy;
    }

    /// SemVer precedence between two versions
    pub fn compare(&self, other: &Version) -> Ordering {
        self.major
            .cmp(&other.major)
            .then(self.minor.cmp(&other.minor))
            .then(self.patch.cmp(&other.patch))
            .then_with(|| {
                precedence::compare_pre_release(self.pre_release(), other.pre_release())
            })
    }

    /// Compare against a value of unknown type.
    ///
    /// Anything other than a [`Version`] yields [`Comparison::Incomparable`].
    pub fn try_compare(&self, other: &dyn Any) -> Comparison {
        other
            .downcast_ref::<Version>()
            .map(|other| self.compare(other))
            .into()
    }

    /// Compare against a version string; unparsable input is incomparable
    pub fn try_compare_str(&self, other: &str) -> Comparison {
        Version::parse(other)
            .ok()
            .map(|other| self.compare(&other))
            .into()
    }

    /// Bump in place using the attached policy and return `self` for chaining.
    pub fn bump(&mut self) -> &mut Self {
        self.apply(self.increment_policy);
        self
    }

    /// The next version under the attached policy; `self` is left untouched.
    pub fn bumped(&self) -> Version {
        self.bumped_with(self.increment_policy)
    }

    /// The next version under a one-off policy; the attached policy is kept.
    pub fn bumped_with(&self, policy: IncrementPolicy) -> Version {
        let mut next = self.clone();
        next.apply(policy);
        next
    }

    fn apply(&mut self, policy: IncrementPolicy) {
        match policy {
            IncrementPolicy::Major => {
                self.major = self.major.incremented();
                self.minor = Numeric::zero();
                self.patch = Numeric::zero();
            }
            IncrementPolicy::Minor => {
                self.minor = self.minor.incremented();
                self.patch = Numeric::zero();
            }
            IncrementPolicy::Patch => {
                self.patch = self.patch.incremented();
            }
        }
        self.pre_release = None;
        self.build_metadata = None;
    }

    pub fn to_tuple(&self) -> VersionTuple {
        (
            self.major.clone(),
            self.minor.clone(),
            self.patch.clone(),
            self.pre_release.as_ref().map(|ids| ids.join(".")),
            self.build_metadata.as_ref().map(|ids| ids.join(".")),
        )
    }

    pub fn to_record(&self) -> VersionRecord {
        let (major, minor, patch, pre_release, build_metadata) = self.to_tuple();
        VersionRecord {
            major,
            minor,
            patch,
            pre_release,
            build_metadata,
        }
    }
}

impl FromStr for Version {
    type Err = VersionError;

    fn from_str(s: &str) -> Result<Self> {
        Version::parse(s)
    }
}

impl TryFrom<VersionRecord> for Version {
    type Error = VersionError;

    /// Rebuild through the canonical string so the record gets the same
    /// validation as any parsed input.
    fn try_from(record: VersionRecord) -> Result<Self> {
        Version::parse(&record.to_string())
    }
}

impl fmt::Display for Version {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}.{}.{}", self.major, self.minor, self.patch)?;
        if let Some(pre) = &self.pre_release {
            write!(f, "-{}", pre.join("."))?;
        }
        if let Some(build) = &self.build_metadata {
            write!(f, "+{}", build.join("."))?;
        }
        Ok(())
    }
}

impl fmt::Display for VersionRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}.{}.{}", self.major, self.minor, self.patch)?;
        if let Some(pre) = &self.pre_release {
            write!(f, "-{}", pre)?;
        }
        if let Some(build) = &self.build_metadata {
            write!(f, "+{}", build)?;
        }
        Ok(())
    }
}

impl PartialEq for Version {
    fn eq(&self, other: &Self) -> bool {
        self.compare(other) == Ordering::Equal
    }
}

impl Eq for Version {}

impl PartialOrd for Version {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Version {
    fn cmp(&self, other: &Self) -> Ordering {
        self.compare(other)
    }
}

impl Hash for Version {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.major.hash(state);
        self.minor.hash(state);
        self.patch.hash(state);
        self.pre_release.hash(state);
    }
}
