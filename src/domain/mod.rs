//! Domain logic - the SemVer value type and its grammar, precedence and
//! increment rules

mod identifier;
pub mod numeric;
pub mod policy;
pub mod precedence;
pub mod version;

pub use numeric::Numeric;
pub use policy::IncrementPolicy;
pub use precedence::Comparison;
pub use version::{Version, VersionRecord, VersionTuple};
