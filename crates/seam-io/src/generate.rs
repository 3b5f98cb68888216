//! Deterministic synthetic matrices for benchmarking.
//!
//! All generators emit unit values: the interesting structure is the
//! sparsity pattern, which drives partitioning behavior. Lattices stress
//! the uniform case, `wheel` the pathological row-length skew, `dense`
//! the bandwidth-bound case.

use seam_core::{Coo, Scalar};

/// 2D lattice: width² nodes, each adjacent to its 4 in-bounds neighbors.
#[must_use]
pub fn grid2d<T: Scalar>(width: usize) -> Coo<T> {
    let n = width * width;
    let mut rows = Vec::new();
    let mut cols = Vec::new();
    let node = |i: usize, j: usize| i * width + j;
    for i in 0..width {
        for j in 0..width {
            if i > 0 {
                rows.push(node(i, j));
                cols.push(node(i - 1, j));
            }
            if i + 1 < width {
                rows.push(node(i, j));
                cols.push(node(i + 1, j));
            }
            if j > 0 {
                rows.push(node(i, j));
                cols.push(node(i, j - 1));
            }
            if j + 1 < width {
                rows.push(node(i, j));
                cols.push(node(i, j + 1));
            }
        }
    }
    unit_coo(n, rows, cols)
}

/// 3D lattice: width³ nodes, each adjacent to its 6 in-bounds neighbors.
#[must_use]
pub fn grid3d<T: Scalar>(width: usize) -> Coo<T> {
    let n = width * width * width;
    let mut rows = Vec::new();
    let mut cols = Vec::new();
    let node = |i: usize, j: usize, k: usize| (i * width + j) * width + k;
    for i in 0..width {
        for j in 0..width {
            for k in 0..width {
                let mut push = |r: usize, c: usize| {
                    rows.push(r);
                    cols.push(c);
                };
                if i > 0 {
                    push(node(i, j, k), node(i - 1, j, k));
                }
                if i + 1 < width {
                    push(node(i, j, k), node(i + 1, j, k));
                }
                if j > 0 {
                    push(node(i, j, k), node(i, j - 1, k));
                }
                if j + 1 < width {
                    push(node(i, j, k), node(i, j + 1, k));
                }
                if k > 0 {
                    push(node(i, j, k), node(i, j, k - 1));
                }
                if k + 1 < width {
                    push(node(i, j, k), node(i, j, k + 1));
                }
            }
        }
    }
    unit_coo(n, rows, cols)
}

/// Wheel graph: hub node 0 adjacent to every rim node and back. The hub
/// row holds half the nonzeros, so it dominates any row-based split.
#[must_use]
pub fn wheel<T: Scalar>(spokes: usize) -> Coo<T> {
    let n = spokes + 1;
    let mut rows = Vec::with_capacity(2 * spokes);
    let mut cols = Vec::with_capacity(2 * spokes);
    for s in 1..=spokes {
        rows.push(0);
        cols.push(s);
        rows.push(s);
        cols.push(0);
    }
    unit_coo(n, rows, cols)
}

/// Fully populated rows × cols matrix, stored sparsely.
#[must_use]
pub fn dense<T: Scalar>(nrows: usize, ncols: usize) -> Coo<T> {
    let mut rows = Vec::with_capacity(nrows * ncols);
    let mut cols = Vec::with_capacity(nrows * ncols);
    for i in 0..nrows {
        for j in 0..ncols {
            rows.push(i);
            cols.push(j);
        }
    }
    Coo {
        nrows,
        ncols,
        rows,
        cols,
        values: vec![T::ONE; nrows * ncols],
    }
}

fn unit_coo<T: Scalar>(n: usize, rows: Vec<usize>, cols: Vec<usize>) -> Coo<T> {
    let nnz = rows.len();
    Coo {
        nrows: n,
        ncols: n,
        rows,
        cols,
        values: vec![T::ONE; nnz],
    }
}
