//! Q15 matrix multiplication, fast variant.
//!
//! Trades the precise variant's 64-bit accumulator for a 32-bit one: each
//! 1.15 x 1.15 product lands in 2.30 with a single guard bit and
//! intermediate adds wrap on overflow. Scale one operand down by
//! `log2(a.cols)` bits to rule that out; for inputs so scaled the output
//! matches [`mat_mult_q15`](super::mat_mult_q15) exactly.
//!
//! Before multiplying, `b` is transposed in full into the caller's scratch
//! buffer so the inner dot product walks both operands with unit stride.
//! The transpose cost is amortized across all `a.rows * b.cols` output
//! cells.

use super::trans::transpose_into;
use super::types::{MatQ15, MatQ15Mut};
use crate::accum::MacAccumulator;
use crate::intrinsics::{mac, pack2, saturate16, sum_dotp2};
use crate::status::Result;

/// `dst = a * b`, fast variant.
///
/// `scratch` must hold at least `b.rows * b.cols` samples; its previous
/// contents are irrelevant. Shape requirements and the mismatch status are
/// the same as the precise variant's; nothing is written on mismatch.
pub fn mat_mult_fast_q15(
    a: &MatQ15,
    b: &MatQ15,
    dst: &mut MatQ15Mut,
    scratch: &mut [i16],
) -> Result<()> {
    super::mult::check_mult_shapes(a.rows, a.cols, b.rows, b.cols, dst.rows, dst.cols)?;
    debug_assert!(scratch.len() >= b.rows * b.cols);

    let bt = &mut scratch[..b.rows * b.cols];
    transpose_into(b.data, b.rows, b.cols, bt);

    for i in 0..a.rows {
        let a_row = &a.data[i * a.cols..(i + 1) * a.cols];
        for j in 0..b.cols {
            let bt_row = &bt[j * b.rows..(j + 1) * b.rows];
            let sum = if cfg!(feature = "simd") {
                dot_packed(a_row, bt_row)
            } else {
                dot_scalar(a_row, bt_row)
            };
            dst.data[i * b.cols + j] = saturate16(sum >> 15);
        }
    }
    Ok(())
}

pub(crate) fn dot_scalar(a: &[i16], b: &[i16]) -> i32 {
    let mut sum = <i32 as MacAccumulator>::zero();
    for (&x, &y) in a.iter().zip(b.iter()) {
        sum = sum.mac(x, y);
    }
    sum
}

/// Two taps per step via the fused dot-product-accumulate. Wrapping adds
/// regroup freely, so the result is bit-identical to the scalar order.
pub(crate) fn dot_packed(a: &[i16], b: &[i16]) -> i32 {
    let mut sum = 0i32;
    let mut pairs_a = a.chunks_exact(2);
    let mut pairs_b = b.chunks_exact(2);
    for (pa, pb) in (&mut pairs_a).zip(&mut pairs_b) {
        sum = sum_dotp2(pack2(pa[0], pa[1]), pack2(pb[0], pb[1]), sum);
    }
    if let (&[x], &[y]) = (pairs_a.remainder(), pairs_b.remainder()) {
        sum = mac(x, y, sum);
    }
    sum
}
