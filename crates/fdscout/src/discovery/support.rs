//! Support estimation for candidate dependencies.
//!
//! For a left-hand side `X` and a right-hand side `Y`, rows are grouped by
//! their `X` value tuple. Within each group the most frequent `Y` value is the
//! one `X` "predicts"; the rows carrying it are consistent with the mapping.
//! Support is the number of consistent rows over all groups divided by the
//! number of data rows, so an exact dependency scores 1.0.

use std::collections::HashMap;

use indexmap::IndexMap;
use rayon::prelude::*;
use tracing::trace;

use super::dependency::FunctionalDependency;
use super::enumerator::Candidate;
use crate::error::{FdError, Result};
use crate::input::DataTable;

/// Composite key of trimmed left-hand-side values, in candidate order.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct GroupKey<'a>(Vec<&'a str>);

impl<'a> GroupKey<'a> {
    pub fn values(&self) -> &[&'a str] {
        &self.0
    }
}

/// Rows of a table split by their left-hand-side value tuple.
#[derive(Debug, Clone)]
pub struct Partition<'a> {
    /// Group index for each distinct key, in first-seen order.
    groups: IndexMap<GroupKey<'a>, usize>,
    /// Group index of every data row.
    row_groups: Vec<usize>,
}

impl<'a> Partition<'a> {
    /// Group the rows of `table` by the values at `positions`.
    pub fn new(table: &'a DataTable, positions: &[usize]) -> Self {
        let mut groups: IndexMap<GroupKey<'a>, usize> = IndexMap::new();
        let mut row_groups = Vec::with_capacity(table.row_count());

        for row in 0..table.row_count() {
            let key = GroupKey(positions.iter().map(|&col| table.value(row, col)).collect());
            let next = groups.len();
            let group = *groups.entry(key).or_insert(next);
            row_groups.push(group);
        }

        Self { groups, row_groups }
    }

    /// Number of distinct left-hand-side tuples.
    pub fn group_count(&self) -> usize {
        self.groups.len()
    }

    /// Distinct keys in first-seen row order.
    pub fn keys(&self) -> impl Iterator<Item = &GroupKey<'a>> {
        self.groups.keys()
    }

    /// Group index of every data row.
    pub fn row_groups(&self) -> &[usize] {
        &self.row_groups
    }
}

/// Check that a support threshold lies in `[0, 1]`.
pub fn validate_support(minimum_support: f64) -> Result<()> {
    if !(0.0..=1.0).contains(&minimum_support) {
        return Err(FdError::InvalidParameter(format!(
            "minimum support must be between 0 and 1, got {}",
            minimum_support
        )));
    }
    Ok(())
}

/// Scores candidate left-hand sides against every remaining attribute.
pub struct SupportEstimator<'a> {
    table: &'a DataTable,
    minimum_support: f64,
}

impl<'a> SupportEstimator<'a> {
    /// Create an estimator over `table`.
    ///
    /// Fails with [`FdError::EmptyData`] when the table has no data rows,
    /// since support is undefined there, and with [`FdError::Parse`] when a
    /// row does not have one field per attribute.
    pub fn new(table: &'a DataTable, minimum_support: f64) -> Result<Self> {
        validate_support(minimum_support)?;
        table.check_shape()?;

        if table.row_count() == 0 {
            return Err(FdError::EmptyData(
                "cannot estimate support without data rows".to_string(),
            ));
        }

        Ok(Self {
            table,
            minimum_support,
        })
    }

    /// Unfiltered support of `lhs -> rhs`.
    pub fn support(&self, lhs: &[String], rhs: &str) -> Result<f64> {
        if lhs.iter().any(|a| a == rhs) {
            return Err(FdError::InvalidParameter(format!(
                "right-hand side '{}' is part of the left-hand side",
                rhs
            )));
        }

        let positions = self.table.schema.positions(lhs)?;
        let rhs_position = self.table.schema.position(rhs)?;
        let partition = Partition::new(self.table, &positions);

        Ok(self.support_for(&partition, rhs_position))
    }

    /// Sum of per-group majority counts over the row count.
    fn support_for(&self, partition: &Partition<'a>, rhs_position: usize) -> f64 {
        let table = self.table;
        let mut counts: Vec<HashMap<&str, usize>> = vec![HashMap::new(); partition.group_count()];

        for (row, &group) in partition.row_groups().iter().enumerate() {
            *counts[group]
                .entry(table.value(row, rhs_position))
                .or_insert(0) += 1;
        }

        let consistent: usize = counts
            .iter()
            .map(|group| group.values().copied().max().unwrap_or(0))
            .sum();

        consistent as f64 / table.row_count() as f64
    }

    /// Dependencies with `candidate` as left-hand side that meet the threshold,
    /// one per remaining attribute in schema order.
    pub fn evaluate(&self, candidate: &Candidate) -> Result<Vec<FunctionalDependency>> {
        let schema = &self.table.schema;
        let positions = schema.positions(candidate.attributes())?;
        let partition = Partition::new(self.table, &positions);

        trace!(
            candidate = %candidate,
            groups = partition.group_count(),
            "partitioned rows"
        );

        let mut found = Vec::new();
        for rhs in schema.remaining(candidate.attributes()) {
            let support = self.support_for(&partition, schema.position(rhs)?);

            if support >= self.minimum_support {
                found.push(FunctionalDependency::new(
                    candidate.attributes().to_vec(),
                    rhs,
                    support,
                ));
            }
        }

        Ok(found)
    }

    /// Evaluate every candidate in order on the current thread.
    pub fn estimate(&self, candidates: &[Candidate]) -> Result<Vec<FunctionalDependency>> {
        let mut found = Vec::new();
        for candidate in candidates {
            found.extend(self.evaluate(candidate)?);
        }
        Ok(found)
    }

    /// Evaluate candidates on the rayon pool.
    ///
    /// Output order matches [`SupportEstimator::estimate`].
    pub fn estimate_parallel(&self, candidates: &[Candidate]) -> Result<Vec<FunctionalDependency>> {
        let per_candidate: Vec<Vec<FunctionalDependency>> = candidates
            .par_iter()
            .map(|candidate| self.evaluate(candidate))
            .collect::<Result<_>>()?;

        Ok(per_candidate.into_iter().flatten().collect())
    }
}
