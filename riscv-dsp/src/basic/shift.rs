//! Element-wise shift with sign-selected direction.
//!
//! A non-negative shift amount shifts left through a wider intermediate and
//! saturates the result; a negative amount is a pure arithmetic right shift,
//! which cannot overflow and never saturates. The hardware port accelerates
//! only the right-shift direction (`pv.sra`); saturating left shifts stay
//! scalar on both paths.

use crate::intrinsics::{pack2, pack4, saturate16, saturate32, saturate8, sra2, sra4, unpack2, unpack4};

/// `dst[n] = src[n] << shift` (saturating) or `src[n] >> -shift`.
pub fn shift_q7(src: &[i8], shift: i8, dst: &mut [i8]) {
    debug_assert_eq!(src.len(), dst.len());
    if cfg!(feature = "simd") {
        shift_q7_packed(src, shift, dst);
    } else {
        shift_q7_scalar(src, shift, dst);
    }
}

pub(crate) fn shift_q7_scalar(src: &[i8], shift: i8, dst: &mut [i8]) {
    if shift >= 0 {
        for (d, &s) in dst.iter_mut().zip(src.iter()) {
            *d = saturate8((s as i32) << shift);
        }
    } else {
        let rshift = -shift as u32;
        for (d, &s) in dst.iter_mut().zip(src.iter()) {
            *d = s >> rshift;
        }
    }
}

pub(crate) fn shift_q7_packed(src: &[i8], shift: i8, dst: &mut [i8]) {
    if shift >= 0 {
        shift_q7_scalar(src, shift, dst);
        return;
    }
    let rshift = -shift as u32;
    let mut quads_s = src.chunks_exact(4);
    let mut quads_d = dst.chunks_exact_mut(4);
    for (d, s) in (&mut quads_d).zip(&mut quads_s) {
        let lanes = unpack4(sra4(pack4(s[0], s[1], s[2], s[3]), rshift));
        d.copy_from_slice(&lanes);
    }
    shift_q7_scalar(quads_s.remainder(), shift, quads_d.into_remainder());
}

/// `dst[n] = src[n] << shift` (saturating) or `src[n] >> -shift`.
pub fn shift_q15(src: &[i16], shift: i8, dst: &mut [i16]) {
    debug_assert_eq!(src.len(), dst.len());
    if cfg!(feature = "simd") {
        shift_q15_packed(src, shift, dst);
    } else {
        shift_q15_scalar(src, shift, dst);
    }
}

pub(crate) fn shift_q15_scalar(src: &[i16], shift: i8, dst: &mut [i16]) {
    if shift >= 0 {
        for (d, &s) in dst.iter_mut().zip(src.iter()) {
            *d = saturate16((s as i32) << shift);
        }
    } else {
        let rshift = -shift as u32;
        for (d, &s) in dst.iter_mut().zip(src.iter()) {
            *d = s >> rshift;
        }
    }
}

pub(crate) fn shift_q15_packed(src: &[i16], shift: i8, dst: &mut [i16]) {
    if shift >= 0 {
        shift_q15_scalar(src, shift, dst);
        return;
    }
    let rshift = -shift as u32;
    let mut pairs_s = src.chunks_exact(2);
    let mut pairs_d = dst.chunks_exact_mut(2);
    for (d, s) in (&mut pairs_d).zip(&mut pairs_s) {
        let lanes = unpack2(sra2(pack2(s[0], s[1]), rshift));
        d.copy_from_slice(&lanes);
    }
    shift_q15_scalar(pairs_s.remainder(), shift, pairs_d.into_remainder());
}

/// `dst[n] = src[n] << shift` (saturating) or `src[n] >> -shift`.
pub fn shift_q31(src: &[i32], shift: i8, dst: &mut [i32]) {
    debug_assert_eq!(src.len(), dst.len());
    if shift >= 0 {
        for (d, &s) in dst.iter_mut().zip(src.iter()) {
            *d = saturate32((s as i64) << shift);
        }
    } else {
        let rshift = -shift as u32;
        for (d, &s) in dst.iter_mut().zip(src.iter()) {
            *d = s >> rshift;
        }
    }
}
