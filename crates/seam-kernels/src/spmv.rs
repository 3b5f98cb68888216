//! Merge-based parallel CSR SpMV driver: y = A·x.

use crate::partition::PartitionPlan;
use crate::traverse::{consume_slice, consume_slice_row_runs, row_run_lengths, CarryOut};
use rayon::prelude::*;
use seam_core::{Csr, Error, Result, Scalar};
use std::sync::atomic::{AtomicBool, Ordering};

/// Inner-loop selection for the traversal region.
///
/// Both strategies produce identical output; [`Strategy::Merge`] is the
/// canonical baseline.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Strategy {
    /// Baseline merge traversal: one cursor walks rows and nonzeros.
    #[default]
    Merge,
    /// Whole-row runs dispatched through the unrolled row kernel, driven by
    /// per-worker precomputed row lengths.
    RowRuns,
}

/// Computes `y = A·x`, building and discarding a plan for the current
/// rayon thread count.
pub fn spmv<T: Scalar>(a: &Csr<T>, x: &[T], y: &mut [T]) -> Result<()> {
    let plan = PartitionPlan::for_matrix(a, rayon::current_num_threads());
    spmv_with(a, x, y, &plan, Strategy::Merge)
}

/// Computes `y = A·x` with a caller-supplied (possibly cached) plan.
pub fn spmv_with_plan<T: Scalar>(
    a: &Csr<T>,
    x: &[T],
    y: &mut [T],
    plan: &PartitionPlan,
) -> Result<()> {
    spmv_with(a, x, y, plan, Strategy::Merge)
}

/// Computes `y = A·x` with an explicit plan and traversal strategy.
///
/// All structural validation happens here, before any worker is
/// dispatched; the traversal itself performs no checks. On error, `y` is
/// left in an unspecified state.
pub fn spmv_with<T: Scalar>(
    a: &Csr<T>,
    x: &[T],
    y: &mut [T],
    plan: &PartitionPlan,
    strategy: Strategy,
) -> Result<()> {
    a.validate()?;
    if x.len() != a.ncols {
        return Err(Error::InvalidDimensions {
            what: "x",
            expected: a.ncols,
            actual: x.len(),
        });
    }
    if y.len() != a.nrows {
        return Err(Error::InvalidDimensions {
            what: "y",
            expected: a.nrows,
            actual: y.len(),
        });
    }
    plan.validate_for(a)?;

    let failed = AtomicBool::new(false);
    let y_addr = y.as_mut_ptr() as usize;
    let carries: Vec<CarryOut<T>> = plan
        .starts()
        .par_iter()
        .zip(plan.ends())
        .map(|(&start, &end)| {
            if failed.load(Ordering::Relaxed) {
                return CarryOut::empty(a.nrows);
            }
            let y_ptr = y_addr as *mut T;
            // Safety: slices own disjoint primary row ranges
            // [start.row, end.row); row end.row is only touched through the
            // carry applied by the sequential reducer below.
            match strategy {
                Strategy::Merge => unsafe { consume_slice(a, x, y_ptr, start, end) },
                Strategy::RowRuns => match row_run_lengths(a, start, end) {
                    Ok(lengths) => unsafe {
                        consume_slice_row_runs(a, x, y_ptr, start, end, &lengths)
                    },
                    Err(_) => {
                        failed.store(true, Ordering::Relaxed);
                        CarryOut::empty(a.nrows)
                    }
                },
            }
        })
        .collect();

    if failed.into_inner() {
        return Err(Error::ResourceExhausted {
            detail: "row-length scratch allocation failed in traversal".into(),
        });
    }

    // Rows straddling worker boundaries: consecutive workers may all have
    // landed inside the same row, so their partials must be applied
    // sequentially, in ascending worker order. The last worker's carry row
    // is nrows and never applies.
    for carry in &carries[..carries.len() - 1] {
        if carry.row < a.nrows {
            y[carry.row] += carry.total;
        }
    }
    Ok(())
}
