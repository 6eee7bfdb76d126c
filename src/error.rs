use thiserror::Error;

/// Reasons a [`Version`](crate::Version) could not be constructed.
///
/// Every variant is raised at construction time; no partially built
/// version is ever observable.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum VersionError {
    #[error("'{input}' is not a valid Semantic Versioning string")]
    InvalidFormat { input: String },

    #[error("invalid pre-release identifier '{identifier}' at position {position} in '{input}'")]
    InvalidPreReleaseIdentifier {
        input: String,
        identifier: String,
        position: usize,
    },

    #[error("invalid build identifier '{identifier}' at position {position} in '{input}'")]
    InvalidBuildIdentifier {
        input: String,
        identifier: String,
        position: usize,
    },

    #[error("'{policy}' is not a valid increment policy (expected major, minor or patch)")]
    InvalidIncrementPolicy { policy: String },
}

/// Convenience type alias for Results in semantic-versioning
pub type Result<T> = std::result::Result<T, VersionError>;

impl VersionError {
    /// Create a format error for the given input
    pub fn format(input: impl Into<String>) -> Self {
        VersionError::InvalidFormat {
            input: input.into(),
        }
    }

    /// Create a pre-release identifier error
    pub fn pre_release(
        input: impl Into<String>,
        identifier: impl Into<String>,
        position: usize,
    ) -> Self {
        VersionError::InvalidPreReleaseIdentifier {
            input: input.into(),
            identifier: identifier.into(),
            position,
        }
    }

    /// Create a build metadata identifier error
    pub fn build(
        input: impl Into<String>,
        identifier: impl Into<String>,
        position: usize,
    ) -> Self {
        VersionError::InvalidBuildIdentifier {
            input: input.into(),
            identifier: identifier.into(),
            position,
        }
    }

    /// Create an increment policy error
    pub fn policy(policy: impl Into<String>) -> Self {
        VersionError::InvalidIncrementPolicy {
            policy: policy.into(),
        }
    }
}
