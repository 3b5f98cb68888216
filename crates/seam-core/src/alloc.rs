//! Cache-line-aligned buffers for harness-owned vectors.
//!
//! The kernels take plain slices, so any allocation policy (including
//! NUMA-pinned buffers from a platform allocator) plugs in at the call
//! boundary; `AlignedVec` is the portable fallback the harness uses for
//! `x` and `y`.

use crate::error::{Error, Result};
use crate::scalar::Scalar;
use std::alloc::{alloc_zeroed, dealloc, Layout};
use std::ops::{Deref, DerefMut};
use std::ptr::NonNull;

/// Buffer alignment: one cache line, which also covers the widest SIMD
/// vectors the row kernels may be compiled to.
pub const BUFFER_ALIGN: usize = 64;

/// A zero-initialized, 64-byte-aligned heap buffer of scalars.
pub struct AlignedVec<T: Scalar> {
    ptr: NonNull<T>,
    len: usize,
}

impl<T: Scalar> AlignedVec<T> {
    /// Allocates `len` zeroed elements, or [`Error::ResourceExhausted`] if
    /// the allocator refuses.
    pub fn zeroed(len: usize) -> Result<Self> {
        if len == 0 {
            return Ok(Self {
                ptr: NonNull::dangling(),
                len: 0,
            });
        }
        let layout = Self::layout(len)?;
        // All-zero bytes are a valid 0.0 for the f32/f64 types Scalar seals.
        let raw = unsafe { alloc_zeroed(layout) };
        let Some(ptr) = NonNull::new(raw.cast::<T>()) else {
            return Err(Error::ResourceExhausted {
                detail: format!("aligned allocation of {} bytes failed", layout.size()),
            });
        };
        Ok(Self { ptr, len })
    }

    fn layout(len: usize) -> Result<Layout> {
        Layout::array::<T>(len)
            .and_then(|l| l.align_to(BUFFER_ALIGN))
            .map(|l| l.pad_to_align())
            .map_err(|_| Error::ResourceExhausted {
                detail: format!("layout overflow for {len} elements"),
            })
    }

    #[inline]
    #[must_use]
    pub const fn len(&self) -> usize {
        self.len
    }

    #[inline]
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.len == 0
    }
}

impl<T: Scalar> Deref for AlignedVec<T> {
    type Target = [T];

    #[inline]
    fn deref(&self) -> &[T] {
        unsafe { std::slice::from_raw_parts(self.ptr.as_ptr(), self.len) }
    }
}

impl<T: Scalar> DerefMut for AlignedVec<T> {
    #[inline]
    fn deref_mut(&mut self) -> &mut [T] {
        unsafe { std::slice::from_raw_parts_mut(self.ptr.as_ptr(), self.len) }
    }
}

impl<T: Scalar> Drop for AlignedVec<T> {
    fn drop(&mut self) {
        if self.len > 0 {
            // layout() succeeded at construction for this len
            let layout = Self::layout(self.len).expect("layout valid since construction");
            unsafe { dealloc(self.ptr.as_ptr().cast::<u8>(), layout) };
        }
    }
}

// Scalar elements are plain values; the buffer is as thread-safe as a Vec.
unsafe impl<T: Scalar> Send for AlignedVec<T> {}
unsafe impl<T: Scalar> Sync for AlignedVec<T> {}
