//! COO (Coordinate) staging format.
//!
//! Loaders and generators build matrices as flat (row, col, value) triples;
//! the kernels only consume CSR, so `Coo` exists to be converted via
//! [`Coo::to_csr`].

use crate::csr::Csr;
use crate::error::{Error, Result};
use crate::scalar::Scalar;

/// COO (Coordinate) matrix: parallel lists of row indices, column indices,
/// and values, in no particular order.
#[derive(Debug, Clone)]
pub struct Coo<T> {
    pub nrows: usize,
    pub ncols: usize,
    pub rows: Vec<usize>,
    pub cols: Vec<usize>,
    pub values: Vec<T>,
}

impl<T> Coo<T> {
    /// Returns the number of stored entries.
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

    /// Constructs a `Coo` from parts, checking index bounds when `check`
    /// is set.
    pub fn from_parts(
        nrows: usize,
        ncols: usize,
        rows: Vec<usize>,
        cols: Vec<usize>,
        values: Vec<T>,
        check: bool,
    ) -> Result<Self> {
        if rows.len() != values.len() || cols.len() != values.len() {
            return Err(Error::InvalidMatrix {
                detail: "rows/cols/values must have equal length".into(),
            });
        }
        if check {
            for (k, (&i, &j)) in rows.iter().zip(&cols).enumerate() {
                if i >= nrows || j >= ncols {
                    return Err(Error::InvalidMatrix {
                        detail: format!("entry {k} out of bounds: ({i}, {j}) in {nrows}x{ncols}"),
                    });
                }
            }
        }
        Ok(Self {
            nrows,
            ncols,
            rows,
            cols,
            values,
        })
    }
}

impl<T: Scalar> Coo<T> {
    /// Converts to CSR by counting sort over rows.
    ///
    /// Entries keep their input order within each row, so within-row column
    /// order is arbitrary; the kernels accept that by contract. Duplicate
    /// coordinates are kept as distinct entries.
    #[must_use]
    pub fn to_csr(&self) -> Csr<T> {
        let nnz = self.nnz();
        let mut row_offsets = vec![0usize; self.nrows + 1];
        for &i in &self.rows {
            row_offsets[i + 1] += 1;
        }
        for i in 0..self.nrows {
            row_offsets[i + 1] += row_offsets[i];
        }
        let mut col_indices = vec![0usize; nnz];
        let mut values = vec![T::ZERO; nnz];
        let mut next = row_offsets.clone();
        for k in 0..nnz {
            let dst = next[self.rows[k]];
            next[self.rows[k]] += 1;
            col_indices[dst] = self.cols[k];
            values[dst] = self.values[k];
        }
        Csr::from_parts_unchecked(self.nrows, self.ncols, row_offsets, col_indices, values)
    }
}
