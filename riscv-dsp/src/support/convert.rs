//! Fixed-point and floating-point format conversion.
//!
//! Widening conversions shift left and are exact. Narrowing conversions are
//! arithmetic right shifts: lossy truncation, but a narrowed value always
//! fits, so no saturation is needed. Float-to-fixed scales by `2^N`,
//! optionally rounds (the `rounding` feature adds ±0.5 before truncation),
//! and saturates.

use crate::intrinsics::{pack2, saturate16, saturate32, saturate8, sra2, unpack2};

/// Round-or-truncate, selected at compile time by the `rounding` feature.
#[inline(always)]
fn round_to_int(scaled: f32) -> f32 {
    if cfg!(feature = "rounding") {
        scaled + if scaled > 0.0 { 0.5 } else { -0.5 }
    } else {
        scaled
    }
}

/// `dst[n] = src[n] << 8` — exact widening.
pub fn q7_to_q15(src: &[i8], dst: &mut [i16]) {
    debug_assert_eq!(src.len(), dst.len());
    if cfg!(feature = "simd") {
        q7_to_q15_packed(src, dst);
    } else {
        q7_to_q15_scalar(src, dst);
    }
}

pub(crate) fn q7_to_q15_scalar(src: &[i8], dst: &mut [i16]) {
    for (d, &s) in dst.iter_mut().zip(src.iter()) {
        *d = (s as i16) << 8;
    }
}

pub(crate) fn q7_to_q15_packed(src: &[i8], dst: &mut [i16]) {
    let mut pairs_s = src.chunks_exact(2);
    let mut pairs_d = dst.chunks_exact_mut(2);
    for (d, s) in (&mut pairs_d).zip(&mut pairs_s) {
        // Widen the lanes, then lane-shift left by 8. A widened Q7 value
        // cannot overflow the Q15 lane, so the shift is exact.
        d[0] = (s[0] as i16) << 8;
        d[1] = (s[1] as i16) << 8;
    }
    q7_to_q15_scalar(pairs_s.remainder(), pairs_d.into_remainder());
}

/// `dst[n] = src[n] << 24` — exact widening.
pub fn q7_to_q31(src: &[i8], dst: &mut [i32]) {
    debug_assert_eq!(src.len(), dst.len());
    for (d, &s) in dst.iter_mut().zip(src.iter()) {
        *d = (s as i32) << 24;
    }
}

/// `dst[n] = src[n] / 128.0`.
pub fn q7_to_float(src: &[i8], dst: &mut [f32]) {
    debug_assert_eq!(src.len(), dst.len());
    for (d, &s) in dst.iter_mut().zip(src.iter()) {
        *d = s as f32 / 128.0;
    }
}

/// `dst[n] = src[n] >> 8` — lossy truncation; the result always fits.
pub fn q15_to_q7(src: &[i16], dst: &mut [i8]) {
    debug_assert_eq!(src.len(), dst.len());
    if cfg!(feature = "simd") {
        q15_to_q7_packed(src, dst);
    } else {
        q15_to_q7_scalar(src, dst);
    }
}

pub(crate) fn q15_to_q7_scalar(src: &[i16], dst: &mut [i8]) {
    for (d, &s) in dst.iter_mut().zip(src.iter()) {
        *d = (s >> 8) as i8;
    }
}

pub(crate) fn q15_to_q7_packed(src: &[i16], dst: &mut [i8]) {
    let mut pairs_s = src.chunks_exact(2);
    let mut pairs_d = dst.chunks_exact_mut(2);
    for (d, s) in (&mut pairs_d).zip(&mut pairs_s) {
        let [l0, l1] = unpack2(sra2(pack2(s[0], s[1]), 8));
        d[0] = l0 as i8;
        d[1] = l1 as i8;
    }
    q15_to_q7_scalar(pairs_s.remainder(), pairs_d.into_remainder());
}

/// `dst[n] = src[n] << 16` — exact widening.
pub fn q15_to_q31(src: &[i16], dst: &mut [i32]) {
    debug_assert_eq!(src.len(), dst.len());
    for (d, &s) in dst.iter_mut().zip(src.iter()) {
        *d = (s as i32) << 16;
    }
}

/// `dst[n] = src[n] / 32768.0`.
pub fn q15_to_float(src: &[i16], dst: &mut [f32]) {
    debug_assert_eq!(src.len(), dst.len());
    for (d, &s) in dst.iter_mut().zip(src.iter()) {
        *d = s as f32 / 32768.0;
    }
}

/// `dst[n] = src[n] >> 24` — lossy truncation.
pub fn q31_to_q7(src: &[i32], dst: &mut [i8]) {
    debug_assert_eq!(src.len(), dst.len());
    for (d, &s) in dst.iter_mut().zip(src.iter()) {
        *d = (s >> 24) as i8;
    }
}

/// `dst[n] = src[n] >> 16` — lossy truncation.
pub fn q31_to_q15(src: &[i32], dst: &mut [i16]) {
    debug_assert_eq!(src.len(), dst.len());
    for (d, &s) in dst.iter_mut().zip(src.iter()) {
        *d = (s >> 16) as i16;
    }
}

/// `dst[n] = src[n] / 2147483648.0`.
pub fn q31_to_float(src: &[i32], dst: &mut [f32]) {
    debug_assert_eq!(src.len(), dst.len());
    for (d, &s) in dst.iter_mut().zip(src.iter()) {
        *d = s as f32 / 2_147_483_648.0;
    }
}

/// `dst[n] = sat8(src[n] * 128)`, rounding per the `rounding` feature.
pub fn float_to_q7(src: &[f32], dst: &mut [i8]) {
    debug_assert_eq!(src.len(), dst.len());
    for (d, &s) in dst.iter_mut().zip(src.iter()) {
        *d = saturate8(round_to_int(s * 128.0) as i32);
    }
}

/// `dst[n] = sat16(src[n] * 32768)`, rounding per the `rounding` feature.
pub fn float_to_q15(src: &[f32], dst: &mut [i16]) {
    debug_assert_eq!(src.len(), dst.len());
    for (d, &s) in dst.iter_mut().zip(src.iter()) {
        *d = saturate16(round_to_int(s * 32768.0) as i32);
    }
}

/// `dst[n] = sat32(src[n] * 2^31)`, rounding per the `rounding` feature.
pub fn float_to_q31(src: &[f32], dst: &mut [i32]) {
    debug_assert_eq!(src.len(), dst.len());
    for (d, &s) in dst.iter_mut().zip(src.iter()) {
        *d = saturate32(round_to_int(s * 2_147_483_648.0) as i64);
    }
}
