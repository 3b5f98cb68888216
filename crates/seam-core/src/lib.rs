//! Core data structures for seam: the CSR matrix model consumed by the
//! merge-based SpMV kernels, the COO staging format produced by loaders and
//! generators, the value-type seam, and the error taxonomy.

pub const VERSION: &str = env!("CARGO_PKG_VERSION");

pub mod alloc;
mod coo;
mod csr;
mod error;
mod scalar;

pub use alloc::AlignedVec;
pub use coo::Coo;
pub use csr::Csr;
pub use error::{Error, Result};
pub use scalar::Scalar;
