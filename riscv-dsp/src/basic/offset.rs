//! Element-wise saturating scalar offset.

use crate::intrinsics::{pack2, pack4, qadd2, qadd4, saturate16, saturate8, unpack2, unpack4};

/// `dst[n] = sat8(src[n] + offset)`.
pub fn offset_q7(src: &[i8], offset: i8, dst: &mut [i8]) {
    debug_assert_eq!(src.len(), dst.len());
    if cfg!(feature = "simd") {
        offset_q7_packed(src, offset, dst);
    } else {
        offset_q7_scalar(src, offset, dst);
    }
}

pub(crate) fn offset_q7_scalar(src: &[i8], offset: i8, dst: &mut [i8]) {
    for (d, &s) in dst.iter_mut().zip(src.iter()) {
        *d = saturate8(s as i32 + offset as i32);
    }
}

pub(crate) fn offset_q7_packed(src: &[i8], offset: i8, dst: &mut [i8]) {
    let replicated = pack4(offset, offset, offset, offset);
    let mut quads_s = src.chunks_exact(4);
    let mut quads_d = dst.chunks_exact_mut(4);
    for (d, s) in (&mut quads_d).zip(&mut quads_s) {
        let lanes = unpack4(qadd4(pack4(s[0], s[1], s[2], s[3]), replicated));
        d.copy_from_slice(&lanes);
    }
    offset_q7_scalar(quads_s.remainder(), offset, quads_d.into_remainder());
}

/// `dst[n] = sat16(src[n] + offset)`.
pub fn offset_q15(src: &[i16], offset: i16, dst: &mut [i16]) {
    debug_assert_eq!(src.len(), dst.len());
    if cfg!(feature = "simd") {
        offset_q15_packed(src, offset, dst);
    } else {
        offset_q15_scalar(src, offset, dst);
    }
}

pub(crate) fn offset_q15_scalar(src: &[i16], offset: i16, dst: &mut [i16]) {
    for (d, &s) in dst.iter_mut().zip(src.iter()) {
        *d = saturate16(s as i32 + offset as i32);
    }
}

pub(crate) fn offset_q15_packed(src: &[i16], offset: i16, dst: &mut [i16]) {
    let replicated = pack2(offset, offset);
    let mut pairs_s = src.chunks_exact(2);
    let mut pairs_d = dst.chunks_exact_mut(2);
    for (d, s) in (&mut pairs_d).zip(&mut pairs_s) {
        let lanes = unpack2(qadd2(pack2(s[0], s[1]), replicated));
        d.copy_from_slice(&lanes);
    }
    offset_q15_scalar(pairs_s.remainder(), offset, pairs_d.into_remainder());
}

/// `dst[n] = sat32(src[n] + offset)`.
pub fn offset_q31(src: &[i32], offset: i32, dst: &mut [i32]) {
    debug_assert_eq!(src.len(), dst.len());
    for (d, &s) in dst.iter_mut().zip(src.iter()) {
        *d = s.saturating_add(offset);
    }
}

/// `dst[n] = src[n] + offset` with IEEE semantics.
pub fn offset_f32(src: &[f32], offset: f32, dst: &mut [f32]) {
    debug_assert_eq!(src.len(), dst.len());
    for (d, &s) in dst.iter_mut().zip(src.iter()) {
        *d = s + offset;
    }
}
