//! Value-type seam for the kernels.
//!
//! SpMV is monomorphized over the element type; nothing dispatches on a
//! runtime dtype. The trait covers exactly what the kernels and the harness
//! need: fused accumulation, f64 round-trips for construction and
//! reporting, and the per-type verification tolerance.

use core::fmt::{Debug, Display};
use core::ops::{Add, AddAssign, Mul};

/// Element types the kernels are instantiated for (f32 and f64).
pub trait Scalar:
    Copy
    + Send
    + Sync
    + PartialOrd
    + Add<Output = Self>
    + AddAssign
    + Mul<Output = Self>
    + Debug
    + Display
    + 'static
{
    const ZERO: Self;
    const ONE: Self;

    /// Per-element relative tolerance when comparing against the serial
    /// reference. Parallel reduction order differs from serial order, so
    /// agreement is defined up to this bound.
    const REL_TOL: f64;

    /// `self * a + b` with a single rounding where the target supports it.
    #[must_use]
    fn mul_add(self, a: Self, b: Self) -> Self;

    #[must_use]
    fn abs(self) -> Self;

    #[must_use]
    fn to_f64(self) -> f64;

    #[must_use]
    fn from_f64(v: f64) -> Self;
}

impl Scalar for f64 {
    const ZERO: Self = 0.0;
    const ONE: Self = 1.0;
    const REL_TOL: f64 = 1e-12;

    #[inline]
    fn mul_add(self, a: Self, b: Self) -> Self {
        self.mul_add(a, b)
    }

    #[inline]
    fn abs(self) -> Self {
        self.abs()
    }

    #[inline]
    fn to_f64(self) -> f64 {
        self
    }

    #[inline]
    fn from_f64(v: f64) -> Self {
        v
    }
}

impl Scalar for f32 {
    const ZERO: Self = 0.0;
    const ONE: Self = 1.0;
    const REL_TOL: f64 = 1e-5;

    #[inline]
    fn mul_add(self, a: Self, b: Self) -> Self {
        self.mul_add(a, b)
    }

    #[inline]
    fn abs(self) -> Self {
        self.abs()
    }

    #[inline]
    fn to_f64(self) -> f64 {
        f64::from(self)
    }

    #[inline]
    #[allow(clippy::cast_possible_truncation, reason = "f64 -> f32 narrowing is the point")]
    fn from_f64(v: f64) -> Self {
        v as f32
    }
}
