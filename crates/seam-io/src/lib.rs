//! Matrix inputs for the seam benchmark harness: a Matrix-Market
//! coordinate reader and deterministic synthetic generators. Everything
//! here produces [`seam_core::Coo`], which converts to CSR for the
//! kernels.

pub mod generate;
pub mod market;

pub use market::{read_matrix_market, MarketError};

#[inline]
#[must_use]
pub const fn version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}
