//! Saturating absolute value over a vector.
//!
//! The minimum representable value of each Q format has no positive
//! counterpart; `abs` saturates it to the maximum instead of overflowing
//! back to the minimum.

use crate::intrinsics::{
    abs_sat_q15, abs_sat_q31, abs_sat_q7, pack2, pack4, qabs2, qabs4, unpack2, unpack4,
};

/// `dst[n] = |src[n]|`, saturating: `abs(-128)` yields `127`.
pub fn abs_q7(src: &[i8], dst: &mut [i8]) {
    debug_assert_eq!(src.len(), dst.len());
    if cfg!(feature = "simd") {
        abs_q7_packed(src, dst);
    } else {
        abs_q7_scalar(src, dst);
    }
}

pub(crate) fn abs_q7_scalar(src: &[i8], dst: &mut [i8]) {
    for (d, &s) in dst.iter_mut().zip(src.iter()) {
        *d = abs_sat_q7(s);
    }
}

pub(crate) fn abs_q7_packed(src: &[i8], dst: &mut [i8]) {
    let mut quads_s = src.chunks_exact(4);
    let mut quads_d = dst.chunks_exact_mut(4);
    for (d, s) in (&mut quads_d).zip(&mut quads_s) {
        let lanes = unpack4(qabs4(pack4(s[0], s[1], s[2], s[3])));
        d.copy_from_slice(&lanes);
    }
    abs_q7_scalar(quads_s.remainder(), quads_d.into_remainder());
}

/// `dst[n] = |src[n]|`, saturating: `abs(-32768)` yields `32767`.
pub fn abs_q15(src: &[i16], dst: &mut [i16]) {
    debug_assert_eq!(src.len(), dst.len());
    if cfg!(feature = "simd") {
        abs_q15_packed(src, dst);
    } else {
        abs_q15_scalar(src, dst);
    }
}

pub(crate) fn abs_q15_scalar(src: &[i16], dst: &mut [i16]) {
    for (d, &s) in dst.iter_mut().zip(src.iter()) {
        *d = abs_sat_q15(s);
    }
}

pub(crate) fn abs_q15_packed(src: &[i16], dst: &mut [i16]) {
    let mut pairs_s = src.chunks_exact(2);
    let mut pairs_d = dst.chunks_exact_mut(2);
    for (d, s) in (&mut pairs_d).zip(&mut pairs_s) {
        let lanes = unpack2(qabs2(pack2(s[0], s[1])));
        d.copy_from_slice(&lanes);
    }
    abs_q15_scalar(pairs_s.remainder(), pairs_d.into_remainder());
}

/// `dst[n] = |src[n]|`, saturating: `abs(i32::MIN)` yields `i32::MAX`.
pub fn abs_q31(src: &[i32], dst: &mut [i32]) {
    debug_assert_eq!(src.len(), dst.len());
    for (d, &s) in dst.iter_mut().zip(src.iter()) {
        *d = abs_sat_q31(s);
    }
}

/// `dst[n] = |src[n]|` with IEEE semantics.
pub fn abs_f32(src: &[f32], dst: &mut [f32]) {
    debug_assert_eq!(src.len(), dst.len());
    for (d, &s) in dst.iter_mut().zip(src.iter()) {
        *d = libm::fabsf(s);
    }
}
