//! fdscout: approximate functional dependency discovery for tabular datasets.
//!
//! Given a depth limit and a minimum support, fdscout enumerates every
//! left-hand side of up to `depth_limit` attributes and, for each remaining
//! attribute, measures how consistently the left-hand-side values determine
//! it. Dependencies whose support meets the threshold are reported.
//!
//! # Core Principles
//!
//! - **Brute force**: every candidate up to the depth limit is scored, with no pruning
//! - **Deterministic**: output follows candidate order, sequential or parallel
//! - **Raw data**: loaded values are kept as read and trimmed only for comparison
//!
//! # Example
//!
//! ```no_run
//! use fdscout::{Miner, MinerConfig};
//!
//! let miner = Miner::with_config(MinerConfig::new(2, 0.9));
//! let result = miner.discover_file("data.csv").unwrap();
//!
//! for fd in &result.dependencies {
//!     println!("{}", fd);
//! }
//! ```

pub mod discovery;
pub mod error;
pub mod input;
pub mod report;
pub mod schema;
pub mod timing;

mod miner;

pub use crate::miner::{
    DiscoveryOutcome, DiscoveryResult, DiscoverySummary, Miner, MinerConfig, discover_fds,
};
pub use discovery::{Candidate, FunctionalDependency, SupportEstimator, enumerate_candidates};
pub use error::{FdError, Result};
pub use input::{DataTable, Parser, ParserConfig, SourceMetadata};
pub use schema::{Attribute, Schema};
pub use timing::{TimingHarness, TimingReport};
