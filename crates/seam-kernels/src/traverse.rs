//! Per-worker traversal of a merge-list slice.

use crate::merge::MergeCoord;
use seam_core::{Csr, Scalar};
use std::collections::TryReserveError;

/// Partial dot product for the worker's final, possibly straddling, row.
///
/// When `row == nrows` (the slice ended exactly at the matrix boundary, or
/// the slice was empty) the carry is a no-op for the reducer.
#[derive(Debug, Clone, Copy)]
pub(crate) struct CarryOut<T> {
    pub row: usize,
    pub total: T,
}

impl<T: Scalar> CarryOut<T> {
    pub(crate) const fn empty(nrows: usize) -> Self {
        Self {
            row: nrows,
            total: T::ZERO,
        }
    }
}

/// Sequential dot product over one row segment.
#[inline]
fn row_dot<T: Scalar>(values: &[T], col_indices: &[usize], x: &[T]) -> T {
    let mut total = T::ZERO;
    for (v, &j) in values.iter().zip(col_indices) {
        total = v.mul_add(x[j], total);
    }
    total
}

/// Unrolled dot product for whole rows: four fused chains per step to keep
/// the gather pipeline busy. The `mul_add` nesting accumulates in the same
/// order as [`row_dot`], so both produce identical results.
#[inline]
fn row_dot_unrolled<T: Scalar>(values: &[T], col_indices: &[usize], x: &[T]) -> T {
    let len = values.len();
    debug_assert_eq!(len, col_indices.len());
    let mut acc = T::ZERO;
    let mut t = 0usize;
    let limit4 = len & !3;
    // Safety: t + 3 < len inside the unrolled loop, and every column index
    // was bounds-checked against ncols == x.len() at the call boundary.
    unsafe {
        while t < limit4 {
            let j0 = *col_indices.get_unchecked(t);
            let j1 = *col_indices.get_unchecked(t + 1);
            let j2 = *col_indices.get_unchecked(t + 2);
            let j3 = *col_indices.get_unchecked(t + 3);
            acc = (*values.get_unchecked(t + 3)).mul_add(
                *x.get_unchecked(j3),
                (*values.get_unchecked(t + 2)).mul_add(
                    *x.get_unchecked(j2),
                    (*values.get_unchecked(t + 1)).mul_add(
                        *x.get_unchecked(j1),
                        (*values.get_unchecked(t)).mul_add(*x.get_unchecked(j0), acc),
                    ),
                ),
            );
            t += 4;
        }
        while t < len {
            let j = *col_indices.get_unchecked(t);
            acc = (*values.get_unchecked(t)).mul_add(*x.get_unchecked(j), acc);
            t += 1;
        }
    }
    acc
}

/// Baseline traversal of the slice `[start, end)`.
///
/// Writes a full dot product into `y` for every row whose boundary event
/// lies inside the slice, then returns the partial sum of the trailing
/// row. Never writes `y[end.row]`; that row's owner (or the reducer)
/// completes it.
///
/// # Safety
/// `y` must be valid for writes at indices `[start.row, end.row)` and no
/// other thread may access those elements during the call.
pub(crate) unsafe fn consume_slice<T: Scalar>(
    a: &Csr<T>,
    x: &[T],
    y: *mut T,
    start: MergeCoord,
    end: MergeCoord,
) -> CarryOut<T> {
    let mut nz = start.nz;
    for row in start.row..end.row {
        let row_end = a.row_offsets[row + 1];
        let total = row_dot(&a.values[nz..row_end], &a.col_indices[nz..row_end], x);
        unsafe { y.add(row).write(total) };
        nz = row_end;
    }
    let total = row_dot(&a.values[nz..end.nz], &a.col_indices[nz..end.nz], x);
    CarryOut {
        row: end.row,
        total,
    }
}

/// Precomputes the nonzero count of each whole row in the slice, for
/// [`consume_slice_row_runs`]. Fallible: runs inside the parallel region,
/// so allocation failure must surface as a flag rather than an abort.
pub(crate) fn row_run_lengths<T>(
    a: &Csr<T>,
    start: MergeCoord,
    end: MergeCoord,
) -> std::result::Result<Vec<usize>, TryReserveError> {
    let mut first = start.row;
    if first < end.row && start.nz > a.row_offsets[first] {
        first += 1; // entered mid-row; the traversal finishes it separately
    }
    let mut lengths = Vec::new();
    lengths.try_reserve_exact(end.row - first)?;
    for row in first..end.row {
        lengths.push(a.row_offsets[row + 1] - a.row_offsets[row]);
    }
    Ok(lengths)
}

/// Row-run traversal variant: finishes a partially-entered first row with
/// the plain loop, drives the unrolled kernel over the run of whole rows
/// using the precomputed `row_lengths`, then accumulates the trailing
/// partial row. Output is identical to [`consume_slice`].
///
/// # Safety
/// Same ownership contract as [`consume_slice`].
pub(crate) unsafe fn consume_slice_row_runs<T: Scalar>(
    a: &Csr<T>,
    x: &[T],
    y: *mut T,
    start: MergeCoord,
    end: MergeCoord,
    row_lengths: &[usize],
) -> CarryOut<T> {
    let mut row = start.row;
    let mut nz = start.nz;
    if row < end.row && nz > a.row_offsets[row] {
        let row_end = a.row_offsets[row + 1];
        let total = row_dot(&a.values[nz..row_end], &a.col_indices[nz..row_end], x);
        unsafe { y.add(row).write(total) };
        nz = row_end;
        row += 1;
    }
    debug_assert_eq!(row_lengths.len(), end.row - row);
    for (r, &len) in (row..end.row).zip(row_lengths) {
        let total = row_dot_unrolled(&a.values[nz..nz + len], &a.col_indices[nz..nz + len], x);
        unsafe { y.add(r).write(total) };
        nz += len;
    }
    let total = row_dot(&a.values[nz..end.nz], &a.col_indices[nz..end.nz], x);
    CarryOut {
        row: end.row,
        total,
    }
}
