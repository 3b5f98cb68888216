//! Merge-path search over the row-boundary / nonzero merge list.
//!
//! The merge list interleaves two sorted sequences: list A is
//! `row_offsets[1..=nrows]` (one event per row boundary) and list B is the
//! identity sequence `0, 1, 2, ...` (one event per nonzero). A diagonal
//! `row + nz = d` crosses the resulting merge path at exactly one
//! coordinate. Because list B is the identity sequence, comparing against
//! it reduces to comparing against `d - pivot - 1`, so B is never
//! materialized.

/// A point on the merge path: `row` boundary events consumed and `nz`
/// nonzero events consumed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct MergeCoord {
    pub row: usize,
    pub nz: usize,
}

/// Finds the coordinate at which `diagonal` crosses the merge path.
///
/// `row_end_offsets` is `row_offsets[1..]` (length = nrows). Runs in
/// O(log min(nrows, nnz)) comparisons with no allocation. Ties advance
/// along the row list first, so a row's nonzeros are never separated from
/// their boundary event except at the seams the partitioner designates.
#[must_use]
pub fn merge_path_search(
    diagonal: usize,
    row_end_offsets: &[usize],
    num_nonzeros: usize,
) -> MergeCoord {
    let num_rows = row_end_offsets.len();
    debug_assert!(diagonal <= num_rows + num_nonzeros);

    let mut lo = diagonal.saturating_sub(num_nonzeros);
    let mut hi = diagonal.min(num_rows);
    while lo < hi {
        let pivot = (lo + hi) >> 1;
        if row_end_offsets[pivot] <= diagonal - pivot - 1 {
            lo = pivot + 1; // contract the range up the row list
        } else {
            hi = pivot; // contract the range down the row list
        }
    }
    MergeCoord {
        row: lo,
        nz: diagonal - lo,
    }
}
