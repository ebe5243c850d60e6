//! Element-wise saturating multiply.

use crate::intrinsics::{saturate16, saturate8, saturate_n};

/// `dst[n] = sat8((srcA[n] * srcB[n]) >> 7)`.
///
/// Only `-1.0 * -1.0` exceeds the Q7 range and saturates.
pub fn mult_q7(src_a: &[i8], src_b: &[i8], dst: &mut [i8]) {
    debug_assert_eq!(src_a.len(), src_b.len());
    debug_assert_eq!(src_a.len(), dst.len());
    if cfg!(feature = "simd") {
        mult_q7_packed(src_a, src_b, dst);
    } else {
        mult_q7_scalar(src_a, src_b, dst);
    }
}

pub(crate) fn mult_q7_scalar(src_a: &[i8], src_b: &[i8], dst: &mut [i8]) {
    for ((d, &a), &b) in dst.iter_mut().zip(src_a.iter()).zip(src_b.iter()) {
        *d = saturate8((a as i32 * b as i32) >> 7);
    }
}

pub(crate) fn mult_q7_packed(src_a: &[i8], src_b: &[i8], dst: &mut [i8]) {
    // Four products per iteration; the per-lane math is the scalar primitive.
    let mut quads_a = src_a.chunks_exact(4);
    let mut quads_b = src_b.chunks_exact(4);
    let mut quads_d = dst.chunks_exact_mut(4);
    for ((d, a), b) in (&mut quads_d).zip(&mut quads_a).zip(&mut quads_b) {
        for lane in 0..4 {
            d[lane] = saturate8((a[lane] as i32 * b[lane] as i32) >> 7);
        }
    }
    mult_q7_scalar(
        quads_a.remainder(),
        quads_b.remainder(),
        quads_d.into_remainder(),
    );
}

/// `dst[n] = sat16((srcA[n] * srcB[n]) >> 15)`.
pub fn mult_q15(src_a: &[i16], src_b: &[i16], dst: &mut [i16]) {
    debug_assert_eq!(src_a.len(), src_b.len());
    debug_assert_eq!(src_a.len(), dst.len());
    if cfg!(feature = "simd") {
        mult_q15_packed(src_a, src_b, dst);
    } else {
        mult_q15_scalar(src_a, src_b, dst);
    }
}

pub(crate) fn mult_q15_scalar(src_a: &[i16], src_b: &[i16], dst: &mut [i16]) {
    for ((d, &a), &b) in dst.iter_mut().zip(src_a.iter()).zip(src_b.iter()) {
        *d = saturate16((a as i32 * b as i32) >> 15);
    }
}

pub(crate) fn mult_q15_packed(src_a: &[i16], src_b: &[i16], dst: &mut [i16]) {
    let mut pairs_a = src_a.chunks_exact(2);
    let mut pairs_b = src_b.chunks_exact(2);
    let mut pairs_d = dst.chunks_exact_mut(2);
    for ((d, a), b) in (&mut pairs_d).zip(&mut pairs_a).zip(&mut pairs_b) {
        d[0] = saturate16((a[0] as i32 * b[0] as i32) >> 15);
        d[1] = saturate16((a[1] as i32 * b[1] as i32) >> 15);
    }
    mult_q15_scalar(
        pairs_a.remainder(),
        pairs_b.remainder(),
        pairs_d.into_remainder(),
    );
}

/// `dst[n] = sat((srcA[n] * srcB[n]) >> 32) << 1`.
///
/// The 1.31 x 1.31 product is taken as a 2.62 value, its top 32 bits are
/// clipped to 31 bits, and the guard bit is restored with a left shift.
pub fn mult_q31(src_a: &[i32], src_b: &[i32], dst: &mut [i32]) {
    debug_assert_eq!(src_a.len(), src_b.len());
    debug_assert_eq!(src_a.len(), dst.len());
    for ((d, &a), &b) in dst.iter_mut().zip(src_a.iter()).zip(src_b.iter()) {
        let out = (a as i64 * b as i64) >> 32;
        *d = saturate_n(out, 31) << 1;
    }
}

/// `dst[n] = srcA[n] * srcB[n]` with IEEE semantics; overflow produces
/// infinity, not a library error.
pub fn mult_f32(src_a: &[f32], src_b: &[f32], dst: &mut [f32]) {
    debug_assert_eq!(src_a.len(), src_b.len());
    debug_assert_eq!(src_a.len(), dst.len());
    for ((d, &a), &b) in dst.iter_mut().zip(src_a.iter()).zip(src_b.iter()) {
        *d = a * b;
    }
}
