//! Top-level discovery API.

use std::path::Path;
use std::time::Instant;

use indexmap::IndexSet;
use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use crate::discovery::{
    Candidate, FunctionalDependency, SupportEstimator, enumerate_candidates, validate_support,
};
use crate::error::{FdError, Result};
use crate::input::{DataTable, Parser, ParserConfig, SourceMetadata};

/// Configuration for a discovery run.
#[derive(Debug, Clone)]
pub struct MinerConfig {
    /// Parser configuration used by [`Miner::discover_file`].
    pub parser: ParserConfig,
    /// Maximum number of attributes in a left-hand side.
    pub depth_limit: usize,
    /// Dependencies below this support are dropped (0.0-1.0).
    pub minimum_support: f64,
    /// Evaluate candidates on the rayon thread pool.
    pub parallel: bool,
}

impl Default for MinerConfig {
    fn default() -> Self {
        Self {
            parser: ParserConfig::default(),
            depth_limit: 1,
            minimum_support: 1.0,
            parallel: false,
        }
    }
}

impl MinerConfig {
    pub fn new(depth_limit: usize, minimum_support: f64) -> Self {
        Self {
            depth_limit,
            minimum_support,
            ..Self::default()
        }
    }

    pub fn with_parser(mut self, parser: ParserConfig) -> Self {
        self.parser = parser;
        self
    }

    pub fn with_parallel(mut self, parallel: bool) -> Self {
        self.parallel = parallel;
        self
    }

    /// Reject parameters that cannot produce a meaningful result.
    pub fn validate(&self) -> Result<()> {
        if self.depth_limit < 1 {
            return Err(FdError::InvalidParameter(format!(
                "depth limit must be at least 1, got {}",
                self.depth_limit
            )));
        }
        validate_support(self.minimum_support)
    }
}

/// Counters describing a discovery run.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct DiscoverySummary {
    /// Number of attributes in the schema.
    pub attribute_count: usize,
    /// Number of data rows scanned.
    pub row_count: usize,
    /// Number of candidate left-hand sides enumerated.
    pub candidate_count: usize,
    /// Number of (left-hand side, right-hand side) pairs scored.
    pub pairs_evaluated: usize,
    /// Number of dependencies meeting the threshold.
    pub dependency_count: usize,
    /// Dependencies with support 1.0.
    pub exact_count: usize,
    /// Wall-clock time spent in enumeration and estimation.
    pub elapsed_ms: f64,
}

/// Dependencies found in an in-memory table.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DiscoveryOutcome {
    pub dependencies: Vec<FunctionalDependency>,
    pub summary: DiscoverySummary,
}

/// Dependencies found in a file, with its source metadata.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DiscoveryResult {
    /// Metadata about the source file.
    pub source: SourceMetadata,
    /// Depth limit the run used.
    pub depth_limit: usize,
    /// Support threshold the run used.
    pub minimum_support: f64,
    /// Discovered dependencies in candidate order.
    pub dependencies: Vec<FunctionalDependency>,
    /// Run counters.
    pub summary: DiscoverySummary,
}

impl DiscoveryResult {
    /// Attach source metadata and run parameters to an in-memory outcome.
    pub fn from_outcome(
        source: SourceMetadata,
        config: &MinerConfig,
        outcome: DiscoveryOutcome,
    ) -> Self {
        Self {
            source,
            depth_limit: config.depth_limit,
            minimum_support: config.minimum_support,
            dependencies: outcome.dependencies,
            summary: outcome.summary,
        }
    }
}

/// Configured dependency miner.
pub struct Miner {
    config: MinerConfig,
    parser: Parser,
}

impl Miner {
    /// Create a miner with the given configuration.
    pub fn with_config(config: MinerConfig) -> Self {
        let parser = Parser::with_config(config.parser.clone());
        Self { config, parser }
    }

    pub fn config(&self) -> &MinerConfig {
        &self.config
    }

    /// Discover dependencies in an already loaded table.
    pub fn discover(&self, table: &DataTable) -> Result<DiscoveryOutcome> {
        self.config.validate()?;
        let started = Instant::now();

        let estimator = SupportEstimator::new(table, self.config.minimum_support)?;

        debug!(attributes = ?table.schema.index(), "resolved attribute positions");

        let attributes = table.schema.names();
        let mut candidates = enumerate_candidates(&attributes, self.config.depth_limit);
        if table.schema.has_duplicates() {
            debug!("header contains duplicate attribute names; lookups use the last column");
            candidates = distinct(candidates);
        }
        let pairs_evaluated: usize = candidates
            .iter()
            .map(|c| table.schema.remaining(c.attributes()).len())
            .sum();

        debug!(
            candidates = candidates.len(),
            pairs = pairs_evaluated,
            parallel = self.config.parallel,
            "enumerated candidates"
        );

        let dependencies = if self.config.parallel {
            estimator.estimate_parallel(&candidates)?
        } else {
            estimator.estimate(&candidates)?
        };

        let summary = DiscoverySummary {
            attribute_count: table.column_count(),
            row_count: table.row_count(),
            candidate_count: candidates.len(),
            pairs_evaluated,
            dependency_count: dependencies.len(),
            exact_count: dependencies.iter().filter(|fd| fd.is_exact()).count(),
            elapsed_ms: started.elapsed().as_secs_f64() * 1000.0,
        };

        info!(
            candidates = summary.candidate_count,
            pairs = summary.pairs_evaluated,
            dependencies = summary.dependency_count,
            exact = summary.exact_count,
            elapsed_ms = summary.elapsed_ms,
            "discovery finished"
        );

        Ok(DiscoveryOutcome {
            dependencies,
            summary,
        })
    }

    /// Load a delimited file with the configured parser.
    pub fn load(&self, path: impl AsRef<Path>) -> Result<(DataTable, SourceMetadata)> {
        // Parameter errors should not wait on file I/O.
        self.config.validate()?;
        self.parser.parse_file(path)
    }

    /// Load a delimited file and discover dependencies in it.
    pub fn discover_file(&self, path: impl AsRef<Path>) -> Result<DiscoveryResult> {
        let (table, source) = self.load(path)?;
        let outcome = self.discover(&table)?;
        Ok(DiscoveryResult::from_outcome(source, &self.config, outcome))
    }
}

/// Drop repeated candidates, keeping first-seen order.
///
/// Candidates repeat when the header names an attribute twice.
fn distinct(candidates: Vec<Candidate>) -> Vec<Candidate> {
    candidates
        .into_iter()
        .collect::<IndexSet<_>>()
        .into_iter()
        .collect()
}

/// Discover every dependency with a left-hand side of at most `depth_limit`
/// attributes and support of at least `minimum_support`.
pub fn discover_fds(
    dataset: &DataTable,
    depth_limit: usize,
    minimum_support: f64,
) -> Result<Vec<FunctionalDependency>> {
    let miner = Miner::with_config(MinerConfig::new(depth_limit, minimum_support));
    Ok(miner.discover(dataset)?.dependencies)
}
