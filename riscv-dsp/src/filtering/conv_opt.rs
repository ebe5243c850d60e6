//! Scratch-buffer-optimized Q15 convolution.
//!
//! Same three-phase arithmetic as [`conv_q15`](super::conv_q15), refactored
//! so the inner loop is one uniform fixed-stride dot product: the shorter
//! sequence is pre-reversed into `scratch2` and the longer sequence is
//! zero-padded on both sides into `scratch1`. The ramp phases then fall out
//! of the zero padding instead of needing their own loop bounds. Output is
//! bit-identical to the direct form.

use crate::accum::MacAccumulator;
use crate::intrinsics::{dotp2, pack2};
use crate::support::{copy_q15, fill_q15};

/// Convolution of Q15 sequences using caller-supplied scratch buffers.
///
/// 64-bit accumulation, like [`conv_q15`](super::conv_q15). Scratch sizes:
/// `scratch1` at least `max(lenA, lenB) + 2 * min(lenA, lenB) - 2` samples,
/// `scratch2` at least `min(lenA, lenB)`. Previous scratch contents are
/// fully overwritten before use. `dst` must hold exactly
/// `lenA + lenB - 1` samples.
pub fn conv_opt_q15(
    src_a: &[i16],
    src_b: &[i16],
    dst: &mut [i16],
    scratch1: &mut [i16],
    scratch2: &mut [i16],
) {
    debug_assert!(!src_a.is_empty() && !src_b.is_empty());
    debug_assert_eq!(dst.len(), src_a.len() + src_b.len() - 1);

    let (x, y) = if src_a.len() >= src_b.len() {
        (src_a, src_b)
    } else {
        (src_b, src_a)
    };
    let (len_a, len_b) = (x.len(), y.len());

    debug_assert!(scratch1.len() >= len_a + 2 * (len_b - 1));
    debug_assert!(scratch2.len() >= len_b);

    // Shorter sequence, reversed.
    for (d, &s) in scratch2[..len_b].iter_mut().zip(y.iter().rev()) {
        *d = s;
    }

    // Longer sequence framed by len_b - 1 zeros on each side.
    let padded = &mut scratch1[..len_a + 2 * (len_b - 1)];
    fill_q15(0, &mut padded[..len_b - 1]);
    copy_q15(x, &mut padded[len_b - 1..len_b - 1 + len_a]);
    fill_q15(0, &mut padded[len_b - 1 + len_a..]);

    // One uniform dot product per output sample.
    for (n, d) in dst.iter_mut().enumerate() {
        let acc = if cfg!(feature = "simd") {
            staged_dot_packed(&padded[n..n + len_b], &scratch2[..len_b])
        } else {
            staged_dot_scalar(&padded[n..n + len_b], &scratch2[..len_b])
        };
        *d = acc.into_q15();
    }
}

fn staged_dot_scalar(x: &[i16], y: &[i16]) -> i64 {
    let mut acc = <i64 as MacAccumulator>::zero();
    for (&xs, &ys) in x.iter().zip(y.iter()) {
        acc = acc.mac(xs, ys);
    }
    acc
}

/// Two taps per step via the lane-pair dot product, widened into the 64-bit
/// accumulator. A pair of 2.30 products fits `i32` except when all four
/// operands are `-1.0`: that sum is exactly `2^31` and would wrap the lane
/// dot, so it is added as a constant instead.
fn staged_dot_packed(x: &[i16], y: &[i16]) -> i64 {
    let mut acc = 0i64;
    let mut pairs_x = x.chunks_exact(2);
    let mut pairs_y = y.chunks_exact(2);
    for (a, b) in (&mut pairs_x).zip(&mut pairs_y) {
        if a[0] == i16::MIN && a[1] == i16::MIN && b[0] == i16::MIN && b[1] == i16::MIN {
            acc += 1i64 << 31;
        } else {
            acc += dotp2(pack2(a[0], a[1]), pack2(b[0], b[1])) as i64;
        }
    }
    if let (&[a], &[b]) = (pairs_x.remainder(), pairs_y.remainder()) {
        acc += a as i64 * b as i64;
    }
    acc
}
