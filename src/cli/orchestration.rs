//! Main workflow orchestration logic
//!
//! Turns the two positional arguments into the next version string. It does
//! no printing and knows nothing about clap, so it can be called and tested
//! programmatically.

use anyhow::{Context, Result};

use crate::config::Config;
use crate::domain::Version;

/// Arguments for the increment workflow
#[derive(Debug, Clone, PartialEq)]
pub struct IncrementArgs {
    /// Policy token: `major`, `minor` or `patch`
    pub policy: String,

    /// Version string to bump
    pub version: String,

    /// Render the named-field record as well
    pub fields: bool,
}

/// Result of a successful increment
#[derive(Debug, Clone, PartialEq)]
pub struct IncrementOutcome {
    /// The version as given, after prefix stripping
    pub current: Version,

    /// The bumped version
    pub next: Version,

    /// `next` rendered through the configured output pattern
    pub rendered: String,

    /// `next` as a TOML table, when requested
    pub fields: Option<String>,
}

/// Bump `args.version` by `args.policy`.
///
/// # Returns
///
/// The bumped version and its rendered forms, or the construction error
/// for the version string or policy token.
pub fn run_increment(args: &IncrementArgs, config: &Config) -> Result<IncrementOutcome> {
    let raw = config.input.strip(&args.version);
    let current = Version::with_policy_token(raw, &args.policy)?;
    let next = current.bumped();

    let rendered = config.output.render(&next.to_string());
    let fields = if args.fields || config.output.fields {
        let table = toml::to_string(&next.to_record())
            .with_context(|| format!("Cannot render fields of {}", next))?;
        Some(table)
    } else {
        None
    };

    Ok(IncrementOutcome {
        current,
        next,
        rendered,
        fields,
    })
}
