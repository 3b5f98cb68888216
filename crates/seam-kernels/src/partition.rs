//! Partitioning of the merge list across workers.

use crate::merge::{merge_path_search, MergeCoord};
use rayon::prelude::*;
use seam_core::{Csr, Error, Result};

/// Start and end merge coordinates delimiting each worker's contiguous
/// slice of the merge list.
///
/// The slices tile `[0, nrows + nnz]` exactly and differ in length by at
/// most one, regardless of row-length skew. A plan is pure data tied to a
/// (nrows, nnz, worker count) triple; it may be cached and reused across
/// SpMV calls on the same matrix.
#[derive(Debug, Clone)]
pub struct PartitionPlan {
    nrows: usize,
    nnz: usize,
    starts: Vec<MergeCoord>,
    ends: Vec<MergeCoord>,
}

impl PartitionPlan {
    /// Builds a plan for `workers` slices over a matrix described by its
    /// row offsets.
    ///
    /// Each worker's pair of coordinates comes from two independent
    /// merge-path searches, run as one parallel region. `workers == 0` is
    /// clamped to 1. When `nrows + nnz < workers`, trailing slices are
    /// empty (`start == end == (nrows, nnz)`) and their workers do no
    /// work.
    #[must_use]
    pub fn build(
        num_rows: usize,
        num_nonzeros: usize,
        row_offsets: &[usize],
        workers: usize,
    ) -> Self {
        debug_assert_eq!(row_offsets.len(), num_rows + 1);
        let workers = workers.max(1);
        let merge_items = num_rows + num_nonzeros;
        let items_per_worker = merge_items.div_ceil(workers);
        let row_end_offsets = &row_offsets[1..];

        let pairs: Vec<(MergeCoord, MergeCoord)> = (0..workers)
            .into_par_iter()
            .map(|tid| {
                let start_diagonal = tid.saturating_mul(items_per_worker).min(merge_items);
                let end_diagonal = (start_diagonal + items_per_worker).min(merge_items);
                (
                    merge_path_search(start_diagonal, row_end_offsets, num_nonzeros),
                    merge_path_search(end_diagonal, row_end_offsets, num_nonzeros),
                )
            })
            .collect();
        let (starts, ends): (Vec<_>, Vec<_>) = pairs.into_iter().unzip();

        log::debug!(
            "partitioned {merge_items} merge items into {workers} slices of <= {items_per_worker}"
        );
        Self {
            nrows: num_rows,
            nnz: num_nonzeros,
            starts,
            ends,
        }
    }

    /// Convenience form of [`PartitionPlan::build`] for an existing matrix.
    #[must_use]
    pub fn for_matrix<T>(a: &Csr<T>, workers: usize) -> Self {
        Self::build(a.nrows, a.nnz(), &a.row_offsets, workers)
    }

    /// Number of slices in the plan.
    #[inline]
    #[must_use]
    pub fn workers(&self) -> usize {
        self.starts.len()
    }

    #[inline]
    #[must_use]
    pub fn starts(&self) -> &[MergeCoord] {
        &self.starts
    }

    #[inline]
    #[must_use]
    pub fn ends(&self) -> &[MergeCoord] {
        &self.ends
    }

    /// Merge-list length of slice `tid`.
    #[must_use]
    pub fn slice_len(&self, tid: usize) -> usize {
        let (s, e) = (self.starts[tid], self.ends[tid]);
        (e.row + e.nz) - (s.row + s.nz)
    }

    /// Rejects a plan built for a different matrix shape.
    pub fn validate_for<T>(&self, a: &Csr<T>) -> Result<()> {
        if self.nrows != a.nrows {
            return Err(Error::InvalidDimensions {
                what: "plan rows",
                expected: a.nrows,
                actual: self.nrows,
            });
        }
        if self.nnz != a.nnz() {
            return Err(Error::InvalidDimensions {
                what: "plan nonzeros",
                expected: a.nnz(),
                actual: self.nnz,
            });
        }
        Ok(())
    }
}
