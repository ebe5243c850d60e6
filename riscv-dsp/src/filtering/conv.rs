//! Direct Q15 convolution, three-phase form.
//!
//! `dst[n] = sum_k srcA[k] * srcB[n-k]` for `0 <= n < lenA + lenB - 1`,
//! treating both inputs as zero outside their defined range. The shorter
//! sequence always slides across the longer one, so the per-output MAC count
//! is driven by the shorter length: it grows by one tap per output during
//! ramp-up, holds at `lenB` across the plateau, and shrinks by one tap per
//! output during ramp-down.

use crate::accum::MacAccumulator;
use crate::intrinsics::{mac, pack2, saturate16, sum_dotp2};

/// Convolution of Q15 sequences, precise variant.
///
/// 64-bit accumulation: no input length can overflow the intermediate sums;
/// the final `>> 15` and saturation to 1.15 is the only lossy step.
/// `dst` must hold exactly `srcA.len() + srcB.len() - 1` samples.
pub fn conv_q15(src_a: &[i16], src_b: &[i16], dst: &mut [i16]) {
    conv_three_phase::<i64>(src_a, src_b, dst);
}

/// Convolution of Q15 sequences, fast variant.
///
/// 32-bit accumulation in 2.30 with a single guard bit and no saturation on
/// intermediate adds: if the accumulator overflows it wraps and distorts the
/// result. Scale the inputs down by `log2(min(lenA, lenB))` bits to rule
/// that out; for inputs so scaled the output is identical to [`conv_q15`].
pub fn conv_fast_q15(src_a: &[i16], src_b: &[i16], dst: &mut [i16]) {
    if cfg!(feature = "simd") {
        conv_fast_q15_packed(src_a, src_b, dst);
    } else {
        conv_fast_q15_scalar(src_a, src_b, dst);
    }
}

pub(crate) fn conv_fast_q15_scalar(src_a: &[i16], src_b: &[i16], dst: &mut [i16]) {
    conv_three_phase::<i32>(src_a, src_b, dst);
}

/// Order the operands so the shorter one is the sliding kernel.
#[inline(always)]
fn ordered<'a>(src_a: &'a [i16], src_b: &'a [i16]) -> (&'a [i16], &'a [i16]) {
    if src_a.len() >= src_b.len() {
        (src_a, src_b)
    } else {
        (src_b, src_a)
    }
}

fn conv_three_phase<A: MacAccumulator>(src_a: &[i16], src_b: &[i16], dst: &mut [i16]) {
    debug_assert!(!src_a.is_empty() && !src_b.is_empty());
    debug_assert_eq!(dst.len(), src_a.len() + src_b.len() - 1);

    let (x, y) = ordered(src_a, src_b);
    let (len_a, len_b) = (x.len(), y.len());

    // Ramp-up: output n accumulates n+1 products.
    for n in 0..len_b - 1 {
        let mut acc = A::zero();
        for j in 0..=n {
            acc = acc.mac(x[n - j], y[j]);
        }
        dst[n] = acc.into_q15();
    }

    // Plateau: full overlap, len_b products per output.
    for n in len_b - 1..len_a {
        let mut acc = A::zero();
        for j in 0..len_b {
            acc = acc.mac(x[n - j], y[j]);
        }
        dst[n] = acc.into_q15();
    }

    // Ramp-down: mirror of ramp-up, overlap shrinks by one tap per output.
    for n in len_a..len_a + len_b - 1 {
        let mut acc = A::zero();
        for j in n - len_a + 1..len_b {
            acc = acc.mac(x[n - j], y[j]);
        }
        dst[n] = acc.into_q15();
    }
}

/// `sum += sum_{j in j0..j1} x[n-j] * y[j]`, two taps per step.
///
/// Wrapping `i32` adds are associative, so regrouping the taps into packed
/// pairs leaves the result bit-identical to the scalar order.
#[inline(always)]
fn wrap_dot(x: &[i16], n: usize, y: &[i16], j0: usize, j1: usize, mut sum: i32) -> i32 {
    let mut j = j0;
    while j + 1 < j1 {
        sum = sum_dotp2(pack2(x[n - j], x[n - j - 1]), pack2(y[j], y[j + 1]), sum);
        j += 2;
    }
    if j < j1 {
        sum = mac(x[n - j], y[j], sum);
    }
    sum
}

pub(crate) fn conv_fast_q15_packed(src_a: &[i16], src_b: &[i16], dst: &mut [i16]) {
    debug_assert!(!src_a.is_empty() && !src_b.is_empty());
    debug_assert_eq!(dst.len(), src_a.len() + src_b.len() - 1);

    let (x, y) = ordered(src_a, src_b);
    let (len_a, len_b) = (x.len(), y.len());

    for n in 0..len_b - 1 {
        dst[n] = saturate16(wrap_dot(x, n, y, 0, n + 1, 0) >> 15);
    }
    for n in len_b - 1..len_a {
        dst[n] = saturate16(wrap_dot(x, n, y, 0, len_b, 0) >> 15);
    }
    for n in len_a..len_a + len_b - 1 {
        dst[n] = saturate16(wrap_dot(x, n, y, n - len_a + 1, len_b, 0) >> 15);
    }
}
