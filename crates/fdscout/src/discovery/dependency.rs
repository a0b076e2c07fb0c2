//! Discovered dependency records.

use std::fmt;

use serde::{Deserialize, Serialize};

/// An approximate functional dependency `lhs -> rhs`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FunctionalDependency {
    /// Determinant attributes, in schema order.
    pub lhs: Vec<String>,
    /// Dependent attribute.
    pub rhs: String,
    /// Fraction of rows consistent with the majority mapping (0.0-1.0).
    pub support: f64,
}

impl FunctionalDependency {
    pub fn new(lhs: Vec<String>, rhs: impl Into<String>, support: f64) -> Self {
        Self {
            lhs,
            rhs: rhs.into(),
            support,
        }
    }

    /// Whether the dependency holds on every row.
    pub fn is_exact(&self) -> bool {
        self.support >= 1.0
    }
}

impl fmt::Display for FunctionalDependency {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} -> {} with support {:?}",
            self.lhs.join(", "),
            self.rhs,
            self.support
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display() {
        let fd = FunctionalDependency::new(vec!["A".into(), "B".into()], "C", 0.75);
        assert_eq!(fd.to_string(), "A, B -> C with support 0.75");

        let exact = FunctionalDependency::new(vec!["A".into()], "C", 1.0);
        assert_eq!(exact.to_string(), "A -> C with support 1.0");
        assert!(exact.is_exact());
        assert!(!fd.is_exact());
    }
}
