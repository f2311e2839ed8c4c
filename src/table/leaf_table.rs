//! Best known leaf count for each induced-tree size

use crate::{LeafTableError, Result};
use serde::{Deserialize, Serialize};
use std::convert::TryFrom;
use std::fmt;
use std::ops::Index;

/// Total map from subset size `m` in `0..=n` to the most leaves seen on an
/// `m`-vertex induced tree. Entries only ever grow.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "Vec<usize>", into = "Vec<usize>")]
pub struct LeafTable {
    best: Vec<usize>,
}

impl LeafTable {
    /// All-zero table for a graph on `vertex_count` vertices
    pub fn new(vertex_count: usize) -> Self {
        LeafTable {
            best: vec![0; vertex_count + 1],
        }
    }

    /// Largest size `n` covered by the table
    pub fn max_size(&self) -> usize {
        self.best.len() - 1
    }

    /// Number of entries (`n + 1`)
    pub fn len(&self) -> usize {
        self.best.len()
    }

    /// A table always holds at least the entry for size 0
    pub fn is_empty(&self) -> bool {
        false
    }

    /// Entry for size `m`, if within range
    pub fn get(&self, m: usize) -> Option<usize> {
        self.best.get(m).copied()
    }

    /// Raise the entry for size `m` to `leaves` if that is larger.
    ///
    /// Returns whether the entry improved.
    pub fn record(&mut self, m: usize, leaves: usize) -> bool {
        match self.best.get_mut(m) {
            Some(entry) if leaves > *entry => {
                *entry = leaves;
                true
            }
            _ => false,
        }
    }

    /// Iterate over `(m, leaves)` pairs
    pub fn iter(&self) -> impl Iterator<Item = (usize, usize)> + '_ {
        self.best.iter().copied().enumerate()
    }

    /// Entries indexed by size
    pub fn as_slice(&self) -> &[usize] {
        &self.best
    }

    /// Consume into the underlying vector
    pub fn into_vec(self) -> Vec<usize> {
        self.best
    }
}

impl Index<usize> for LeafTable {
    type Output = usize;

    fn index(&self, m: usize) -> &usize {
        &self.best[m]
    }
}

impl TryFrom<Vec<usize>> for LeafTable {
    type Error = LeafTableError;

    fn try_from(best: Vec<usize>) -> Result<Self> {
        match best.first() {
            None => Err(LeafTableError::InvalidTable(
                "table must contain the entry for size 0".to_string(),
            )),
            Some(&leaves) if leaves != 0 => Err(LeafTableError::InvalidTable(format!(
                "entry for size 0 must be 0, found {}",
                leaves
            ))),
            Some(_) => Ok(LeafTable { best }),
        }
    }
}

impl From<LeafTable> for Vec<usize> {
    fn from(table: LeafTable) -> Self {
        table.best
    }
}

impl fmt::Display for LeafTable {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (m, leaves) in self.iter() {
            writeln!(f, "{:>4}: {}", m, leaves)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_table() {
        let table = LeafTable::new(3);
        assert_eq!(table.len(), 4);
        assert_eq!(table.max_size(), 3);
        assert_eq!(table.as_slice(), &[0, 0, 0, 0]);
        assert_eq!(table.get(4), None);
    }

    #[test]
    fn test_record_is_max() {
        let mut table = LeafTable::new(4);
        assert!(table.record(3, 2));
        assert!(!table.record(3, 1));
        assert!(!table.record(3, 2));
        assert_eq!(table[3], 2);
        assert!(!table.record(9, 5));
    }

    #[test]
    fn test_try_from_vec() {
        assert!(LeafTable::try_from(vec![0, 0, 2]).is_ok());
        assert!(LeafTable::try_from(Vec::new()).is_err());
        assert!(LeafTable::try_from(vec![1, 0]).is_err());
    }

    #[test]
    fn test_json_shape() {
        let mut table = LeafTable::new(2);
        table.record(2, 2);
        let json = serde_json::to_string(&table).unwrap();
        assert_eq!(json, "[0,0,2]");

        let loaded: LeafTable = serde_json::from_str(&json).unwrap();
        assert_eq!(loaded, table);
        assert!(serde_json::from_str::<LeafTable>("[3]").is_err());
    }

    #[test]
    fn test_display() {
        let table = LeafTable::new(1);
        assert_eq!(table.to_string(), "   0: 0\n   1: 0\n");
    }
}
