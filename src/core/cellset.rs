//! A fixed-size set of grid cells packed into a `u128`.
//!
//! Cell `(row, col)` maps to bit `row * N + col`, so any `N` with `N * N <= 128`
//! fits. Used for the busy set of a grid; no heap allocation.

use std::fmt;

/// Errors returned by cell set operations.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum CellSetError {
    /// Row or column index is out of bounds [0..N).
    #[error("cell index out of bounds: row={row}, col={col}")]
    IndexOutOfBounds { row: usize, col: usize },
}

/// A set of cells of an `N×N` grid.
#[derive(Clone, Copy, PartialEq, Eq)]
pub struct CellSet<const N: usize> {
    bits: u128,
}

impl<const N: usize> CellSet<N> {
    /// Compile-time guard: the grid must fit into the backing integer.
    const FITS: () = assert!(N * N <= u128::BITS as usize, "grid too large for CellSet");

    /// Create an empty set.
    #[inline]
    pub const fn new() -> Self {
        let () = Self::FITS;
        CellSet { bits: 0 }
    }

    /// Number of cells in the set.
    pub(crate) fn len(&self) -> usize {
        self.bits.count_ones() as usize
    }

    /// Whether (row, col) is in the set.
    pub fn contains(&self, row: usize, col: usize) -> Result<bool, CellSetError> {
        let idx = Self::index(row, col)?;
        Ok((self.bits >> idx) & 1 == 1)
    }

    /// Adds (row, col); returns `true` if it was not present before.
    pub fn insert(&mut self, row: usize, col: usize) -> Result<bool, CellSetError> {
        let idx = Self::index(row, col)?;
        let bit = 1u128 << idx;
        let fresh = self.bits & bit == 0;
        self.bits |= bit;
        Ok(fresh)
    }

    /// Removes every cell.
    #[inline]
    pub fn clear(&mut self) {
        self.bits = 0;
    }

    #[inline]
    fn index(row: usize, col: usize) -> Result<usize, CellSetError> {
        if row >= N || col >= N {
            Err(CellSetError::IndexOutOfBounds { row, col })
        } else {
            Ok(row * N + col)
        }
    }
}

impl<const N: usize> Default for CellSet<N> {
    #[inline]
    fn default() -> Self {
        Self::new()
    }
}

impl<const N: usize> fmt::Debug for CellSet<N> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "CellSet<{}>:", N)?;
        for r in 0..N {
            for c in 0..N {
                let bit = if (self.bits >> (r * N + c)) & 1 == 1 {
                    '■'
                } else {
                    '□'
                };
                write!(f, "{} ", bit)?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn insert_reports_freshness() {
        let mut set = CellSet::<10>::new();
        assert_eq!(set.insert(3, 4), Ok(true));
        assert_eq!(set.insert(3, 4), Ok(false));
        assert_eq!(set.len(), 1);
        assert_eq!(set.contains(3, 4), Ok(true));
        assert_eq!(set.contains(4, 3), Ok(false));
    }

    #[test]
    fn out_of_range_is_an_error() {
        let mut set = CellSet::<10>::new();
        assert_eq!(
            set.insert(10, 0),
            Err(CellSetError::IndexOutOfBounds { row: 10, col: 0 })
        );
        assert!(set.contains(0, 10).is_err());
    }

    #[test]
    fn clear_empties_the_set() {
        let mut set = CellSet::<11>::new();
        set.insert(0, 0).unwrap();
        set.insert(10, 10).unwrap();
        assert_eq!(set.len(), 2);
        set.clear();
        assert_eq!(set.len(), 0);
        assert_eq!(set.contains(10, 10), Ok(false));
    }
}
