//! Functional dependency discovery: candidate enumeration and support
//! estimation.

mod dependency;
mod enumerator;
mod support;

pub use dependency::FunctionalDependency;
pub use enumerator::{Candidate, Combinations, candidate_count, enumerate_candidates};
pub use support::{GroupKey, Partition, SupportEstimator, validate_support};
