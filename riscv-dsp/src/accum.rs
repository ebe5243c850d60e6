//! Accumulator strategies for the Q15 multiply-accumulate kernels.
//!
//! Convolution and matrix multiplication come in two variants that differ
//! only in accumulator width. Rather than duplicating every loop, the loops
//! are generic over this trait:
//!
//! - [`i64`] — precise. 1.15 x 1.15 products land in 34.30 with 33 guard
//!   bits; no input length can overflow it. The final shift-and-saturate is
//!   the only lossy step.
//! - [`i32`] — fast. Products accumulate in 2.30 with a single guard bit and
//!   **wrap on overflow**. The caller must pre-scale inputs by
//!   `log2(min length)` bits; violating that produces silently wrong results,
//!   not an error. Wraparound is part of the variant's contract and is not
//!   upgraded to a wider accumulator here.

use crate::intrinsics::{mac, saturate16};

pub(crate) trait MacAccumulator: Copy {
    fn zero() -> Self;
    /// Accumulate one 1.15 x 1.15 product.
    fn mac(self, a: i16, b: i16) -> Self;
    /// Right-shift by 15 (undoing the 2.30 product scaling) and saturate
    /// to 1.15.
    fn into_q15(self) -> i16;
}

impl MacAccumulator for i64 {
    #[inline(always)]
    fn zero() -> Self {
        0
    }

    #[inline(always)]
    fn mac(self, a: i16, b: i16) -> Self {
        self + a as i64 * b as i64
    }

    #[inline(always)]
    fn into_q15(self) -> i16 {
        // 34.30 -> 34.15 by discarding the low 15 bits, then clamp to 1.15.
        let shifted = self >> 15;
        if shifted > i16::MAX as i64 {
            i16::MAX
        } else if shifted < i16::MIN as i64 {
            i16::MIN
        } else {
            shifted as i16
        }
    }
}

impl MacAccumulator for i32 {
    #[inline(always)]
    fn zero() -> Self {
        0
    }

    #[inline(always)]
    fn mac(self, a: i16, b: i16) -> Self {
        mac(a, b, self)
    }

    #[inline(always)]
    fn into_q15(self) -> i16 {
        saturate16(self >> 15)
    }
}
