//! Error taxonomy for the public SpMV entry points.

use thiserror::Error;

/// Failures surfaced at the call boundary.
///
/// Structural problems are detected before any worker is dispatched; once a
/// parallel region has started the inputs are assumed valid, and the only
/// in-region failure mode (scratch allocation in the row-run strategy) is
/// aggregated into a single [`Error::ResourceExhausted`] after the join.
#[derive(Debug, Error)]
pub enum Error {
    /// The CSR arrays are inconsistent: non-monotone row offsets,
    /// out-of-range column index, or length mismatches.
    #[error("invalid matrix: {detail}")]
    InvalidMatrix { detail: String },

    /// A vector or plan does not match the matrix shape.
    #[error("dimension mismatch for {what}: expected {expected}, got {actual}")]
    InvalidDimensions {
        what: &'static str,
        expected: usize,
        actual: usize,
    },

    /// Allocation of a plan or scratch buffer failed.
    #[error("resource exhausted: {detail}")]
    ResourceExhausted { detail: String },
}

pub type Result<T> = std::result::Result<T, Error>;
