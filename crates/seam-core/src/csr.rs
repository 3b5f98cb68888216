//! Definitions and constructors for CSR (Compressed Sparse Row) matrices.
//!
//! CSR is the only format the kernels consume: each row stores its nonzero
//! column indices and values in a contiguous block, with `row_offsets`
//! marking row boundaries. The arrays are read-only for the duration of any
//! SpMV call.

use crate::error::{Error, Result};

/// CSR (Compressed Sparse Row) matrix.
///
/// - `row_offsets`: row pointers (length = nrows + 1)
///   - `row_offsets[i]` = start index in `col_indices`/`values` for row i
///   - `row_offsets[nrows]` = nnz
/// - `col_indices`: column index of each nonzero, in row order (length = nnz)
/// - `values`: nonzero values, in the same order as `col_indices`
///
/// Column indices within a row are not required to be sorted; the kernels
/// only rely on `col_indices` and `values` agreeing on ordering.
#[derive(Debug, Clone)]
pub struct Csr<T> {
    pub nrows: usize,
    pub ncols: usize,
    pub row_offsets: Vec<usize>,
    pub col_indices: Vec<usize>,
    pub values: Vec<T>,
}

impl<T> Csr<T> {
    /// Returns the number of stored nonzero entries.
    #[inline]
    #[must_use]
    pub const fn nnz(&self) -> usize {
        self.values.len()
    }

    /// Returns the shape of the matrix as (nrows, ncols).
    #[inline]
    #[must_use]
    pub const fn shape(&self) -> (usize, usize) {
        (self.nrows, self.ncols)
    }

    /// Constructs a `Csr` from parts, validating the CSR invariants when
    /// `check` is set.
    pub fn from_parts(
        nrows: usize,
        ncols: usize,
        row_offsets: Vec<usize>,
        col_indices: Vec<usize>,
        values: Vec<T>,
        check: bool,
    ) -> Result<Self> {
        let csr = Self {
            nrows,
            ncols,
            row_offsets,
            col_indices,
            values,
        };
        if check {
            csr.validate()?;
        }
        Ok(csr)
    }

    /// Constructs a `Csr` from parts without any checks.
    ///
    /// The caller must uphold the invariants listed on [`Csr::validate`];
    /// the SpMV entry points re-validate before dispatching workers, so a
    /// malformed matrix built this way is still rejected at the boundary.
    #[inline]
    #[must_use]
    pub const fn from_parts_unchecked(
        nrows: usize,
        ncols: usize,
        row_offsets: Vec<usize>,
        col_indices: Vec<usize>,
        values: Vec<T>,
    ) -> Self {
        Self {
            nrows,
            ncols,
            row_offsets,
            col_indices,
            values,
        }
    }

    /// Checks the CSR structural invariants:
    ///
    /// - `row_offsets.len() == nrows + 1`, first element 0, last element nnz
    /// - `row_offsets` non-decreasing
    /// - `col_indices.len() == values.len()`
    /// - every column index in `[0, ncols)`
    ///
    /// Sortedness of column indices within a row is deliberately not
    /// required.
    pub fn validate(&self) -> Result<()> {
        let invalid = |detail: String| Error::InvalidMatrix { detail };

        let Some(expected_len) = self.nrows.checked_add(1) else {
            return Err(invalid("nrows overflow when adding 1".into()));
        };
        if self.row_offsets.len() != expected_len {
            return Err(invalid(format!(
                "row_offsets length must be nrows + 1 ({} != {expected_len})",
                self.row_offsets.len()
            )));
        }
        if self.col_indices.len() != self.values.len() {
            return Err(invalid(format!(
                "col_indices and values must have equal length ({} != {})",
                self.col_indices.len(),
                self.values.len()
            )));
        }
        let nnz = self.values.len();
        if self.row_offsets[0] != 0 {
            return Err(invalid("row_offsets first element must be 0".into()));
        }
        if self.row_offsets[self.nrows] != nnz {
            return Err(invalid(format!(
                "row_offsets last element must equal nnz ({} != {nnz})",
                self.row_offsets[self.nrows]
            )));
        }
        for (row, pair) in self.row_offsets.windows(2).enumerate() {
            if pair[0] > pair[1] {
                return Err(invalid(format!(
                    "row_offsets must be non-decreasing (row {row}: {} > {})",
                    pair[0], pair[1]
                )));
            }
        }
        for (k, &col) in self.col_indices.iter().enumerate() {
            if col >= self.ncols {
                return Err(invalid(format!(
                    "column index out of bounds at entry {k}: {col} >= {}",
                    self.ncols
                )));
            }
        }
        Ok(())
    }
}
