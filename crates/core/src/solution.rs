//! Solution - ordered drop instructions
//!
//! A solution is a list of `(block id, x position)` pairs in drop order. The type
//! itself enforces nothing; ids are validated when the solution is replayed.

use std::fmt;

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Solution {
    block_ids: Vec<i64>,
    block_positions: Vec<i64>,
}

impl Solution {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build from `(id, x)` pairs
    pub fn from_pairs<I: IntoIterator<Item = (i64, i64)>>(pairs: I) -> Self {
        let mut solution = Self::new();
        for (id, x) in pairs {
            solution.push(id, x);
        }
        solution
    }

    pub fn push(&mut self, block_id: i64, x: i64) {
        self.block_ids.push(block_id);
        self.block_positions.push(x);
    }

    pub fn block_ids(&self) -> &[i64] {
        &self.block_ids
    }

    pub fn block_positions(&self) -> &[i64] {
        &self.block_positions
    }

    pub fn len(&self) -> usize {
        self.block_ids.len()
    }

    pub fn is_empty(&self) -> bool {
        self.block_ids.is_empty()
    }

    /// `(id, x)` pairs in drop order
    pub fn iter(&self) -> impl Iterator<Item = (i64, i64)> + '_ {
        self.block_ids
            .iter()
            .copied()
            .zip(self.block_positions.iter().copied())
    }
}

/// Solution text format: one `block_id x_position` line per drop
impl fmt::Display for Solution {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (id, x) in self.iter() {
            writeln!(f, "{} {}", id, x)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_writes_one_line_per_drop() {
        let solution = Solution::from_pairs([(2, 0), (0, 5), (1, -1)]);
        assert_eq!(solution.to_string(), "2 0\n0 5\n1 -1\n");
        assert_eq!(solution.len(), 3);
        assert_eq!(solution.iter().nth(1), Some((0, 5)));
    }

    #[test]
    fn empty_solution_writes_nothing() {
        assert!(Solution::new().is_empty());
        assert_eq!(Solution::new().to_string(), "");
    }
}
