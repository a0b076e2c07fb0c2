//! Candidate left-hand-side enumeration.
//!
//! Candidates are the non-empty ordered sub-sequences of the attribute list
//! with at most `depth` elements. They are produced depth-first: a prefix is
//! always emitted before its extensions, and extensions only use attributes
//! that come after the last chosen one. For `[A, B, C]` at depth 2 the order
//! is `[A], [A, B], [A, C], [B], [B, C], [C]`.
//!
//! The traversal keeps its own stack of chosen indices, so wide attribute
//! lists cannot exhaust the call stack.

use std::fmt;

use serde::{Deserialize, Serialize};

/// An ordered, non-empty set of attributes considered as a left-hand side.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Candidate {
    attributes: Vec<String>,
}

impl Candidate {
    pub fn new(attributes: Vec<String>) -> Self {
        Self { attributes }
    }

    /// Attribute names in schema order.
    pub fn attributes(&self) -> &[String] {
        &self.attributes
    }

    pub fn len(&self) -> usize {
        self.attributes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.attributes.is_empty()
    }

    pub fn contains(&self, name: &str) -> bool {
        self.attributes.iter().any(|a| a == name)
    }

}

impl fmt::Display for Candidate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}]", self.attributes.join(", "))
    }
}

/// Lazy depth-first iterator over candidates.
#[derive(Debug, Clone)]
pub struct Combinations<'a> {
    attributes: &'a [String],
    depth: usize,
    /// Indices of the attributes in the current candidate.
    path: Vec<usize>,
    /// Next index that may extend `path`.
    cursor: usize,
}

impl<'a> Combinations<'a> {
    pub fn new(attributes: &'a [String], depth: usize) -> Self {
        Self {
            attributes,
            depth,
            path: Vec::with_capacity(depth.min(attributes.len())),
            cursor: 0,
        }
    }

    fn current(&self) -> Candidate {
        Candidate::new(
            self.path
                .iter()
                .map(|&i| self.attributes[i].clone())
                .collect(),
        )
    }
}

impl Iterator for Combinations<'_> {
    type Item = Candidate;

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            if self.path.len() < self.depth && self.cursor < self.attributes.len() {
                self.path.push(self.cursor);
                self.cursor += 1;
                return Some(self.current());
            }

            // Current candidate cannot grow: move its last attribute forward.
            let last = self.path.pop()?;
            self.cursor = last + 1;
        }
    }
}

/// Upper bound on the up-front allocation for the candidate list.
const MAX_PREALLOCATED: usize = 1 << 16;

/// Every candidate of length `1..=depth`, in depth-first order.
///
/// A depth of zero yields no candidates.
pub fn enumerate_candidates(attributes: &[String], depth: usize) -> Vec<Candidate> {
    let capacity = candidate_count(attributes.len(), depth).min(MAX_PREALLOCATED);
    let mut output = Vec::with_capacity(capacity);
    output.extend(Combinations::new(attributes, depth));
    output
}

/// Number of candidates for `n` attributes at the given depth: the sum of
/// `C(n, k)` for `k` in `1..=depth`. Saturates at `usize::MAX`.
pub fn candidate_count(n: usize, depth: usize) -> usize {
    let limit = usize::MAX as u128;
    let n = n as u128;
    let mut total: u128 = 0;
    let mut binomial: u128 = 1;

    for k in 1..=(depth as u128).min(n) {
        // C(n, k) = C(n, k - 1) * (n - k + 1) / k, exact at every step.
        binomial = match binomial.checked_mul(n - k + 1) {
            Some(v) => v / k,
            None => return usize::MAX,
        };
        total += binomial;
        if total > limit {
            return usize::MAX;
        }
    }

    total as usize
}
