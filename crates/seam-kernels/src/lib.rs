//! Merge-based parallel CSR SpMV.
//!
//! The kernels treat an SpMV as a merge of two sorted lists: row-boundary
//! events (`row_offsets[1..]`) and nonzero events (the identity sequence).
//! Partitioning that merge list into equal contiguous slices gives every
//! worker the same number of items regardless of row-length skew; rows
//! that straddle a slice boundary are stitched by a sequential carry-out
//! reduction. See [`spmv`] for the entry points and [`PartitionPlan`] for
//! the cacheable partitioning step.

pub mod merge;
pub mod partition;
pub mod reference;
pub mod spmv;
mod traverse;

pub use merge::{merge_path_search, MergeCoord};
pub use partition::PartitionPlan;
pub use reference::{spmv_serial, verify, Mismatch};
pub use spmv::{spmv, spmv_with, spmv_with_plan, Strategy};
