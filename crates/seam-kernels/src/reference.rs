//! Serial reference SpMV and tolerance comparison.

use seam_core::{Csr, Scalar};

/// `y = A·x`, one row at a time, in index order. This is the semantic
/// baseline every parallel strategy is compared against.
pub fn spmv_serial<T: Scalar>(a: &Csr<T>, x: &[T], y: &mut [T]) {
    assert_eq!(x.len(), a.ncols, "x length must equal ncols");
    assert_eq!(y.len(), a.nrows, "y length must equal nrows");
    for (row, yi) in y.iter_mut().enumerate() {
        let mut total = T::ZERO;
        for k in a.row_offsets[row]..a.row_offsets[row + 1] {
            total = a.values[k].mul_add(x[a.col_indices[k]], total);
        }
        *yi = total;
    }
}

/// First element of `actual` that disagrees with `reference`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Mismatch {
    pub row: usize,
    pub actual: f64,
    pub expected: f64,
}

/// Reference magnitudes below this are treated as zero and skipped;
/// relative error against a denormal-scale reference is meaningless.
const MAGNITUDE_FLOOR: f64 = 1e-30;

/// Compares `actual` against `reference` element-wise with the value
/// type's relative tolerance. Returns the first offending row, or `None`
/// when the vectors agree.
#[must_use]
pub fn verify<T: Scalar>(actual: &[T], reference: &[T]) -> Option<Mismatch> {
    debug_assert_eq!(actual.len(), reference.len());
    for (row, (a, r)) in actual.iter().zip(reference).enumerate() {
        let expected = r.to_f64();
        if expected.abs() < MAGNITUDE_FLOOR {
            continue;
        }
        let got = a.to_f64();
        if ((got - expected) / expected).abs() > T::REL_TOL {
            return Some(Mismatch {
                row,
                actual: got,
                expected,
            });
        }
    }
    None
}
