//! Semantic Versioning 2.0.0 value type: parsing, precedence and increments.

pub mod cli;
pub mod config;
pub mod domain;
pub mod error;
pub mod ui;

pub use domain::{Comparison, IncrementPolicy, Numeric, Version, VersionRecord, VersionTuple};
pub use error::{Result, VersionError};
