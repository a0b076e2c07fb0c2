//! Attribute schema and name-to-position resolution.

use indexmap::{IndexMap, IndexSet};
use serde::{Deserialize, Serialize};

use crate::error::{FdError, Result};

/// A named attribute and its position in the header row.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Attribute {
    /// Header name.
    pub name: String,
    /// Zero-based column position.
    pub position: usize,
}

/// The ordered attribute names of a table.
///
/// Names are not deduplicated. When a name repeats, lookups resolve to the
/// last column carrying it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "Vec<String>", into = "Vec<String>")]
pub struct Schema {
    attributes: Vec<Attribute>,
    index: IndexMap<String, usize>,
}

impl Schema {
    /// Build a schema from header names in column order.
    pub fn new<I, S>(names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let attributes: Vec<Attribute> = names
            .into_iter()
            .enumerate()
            .map(|(position, name)| Attribute {
                name: name.into(),
                position,
            })
            .collect();

        let mut index = IndexMap::with_capacity(attributes.len());
        for attr in &attributes {
            index.insert(attr.name.clone(), attr.position);
        }

        Self { attributes, index }
    }

    /// Number of columns, duplicates included.
    pub fn len(&self) -> usize {
        self.attributes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.attributes.is_empty()
    }

    /// Attributes in column order.
    pub fn attributes(&self) -> &[Attribute] {
        &self.attributes
    }

    /// Attribute names in column order.
    pub fn names(&self) -> Vec<String> {
        self.attributes.iter().map(|a| a.name.clone()).collect()
    }

    /// Whether a name appears more than once in the header.
    pub fn has_duplicates(&self) -> bool {
        self.index.len() != self.attributes.len()
    }

    /// Resolve an attribute name to its column position.
    pub fn position(&self, name: &str) -> Result<usize> {
        self.index
            .get(name)
            .copied()
            .ok_or_else(|| FdError::UnknownAttribute(name.to_string()))
    }

    /// Resolve every name of a candidate, preserving candidate order.
    pub fn positions(&self, names: &[String]) -> Result<Vec<usize>> {
        names.iter().map(|n| self.position(n)).collect()
    }

    /// Distinct attribute names not in `excluded`, in column order.
    pub fn remaining(&self, excluded: &[String]) -> Vec<&str> {
        let excluded: IndexSet<&str> = excluded.iter().map(String::as_str).collect();
        self.index
            .keys()
            .map(String::as_str)
            .filter(|name| !excluded.contains(name))
            .collect()
    }

    /// Name-to-position map in first-seen column order.
    pub fn index(&self) -> &IndexMap<String, usize> {
        &self.index
    }
}

impl From<Vec<String>> for Schema {
    fn from(names: Vec<String>) -> Self {
        Self::new(names)
    }
}

impl From<Schema> for Vec<String> {
    fn from(schema: Schema) -> Self {
        schema.attributes.into_iter().map(|a| a.name).collect()
    }
}
