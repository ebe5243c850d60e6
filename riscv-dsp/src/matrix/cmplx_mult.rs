//! Complex Q15 matrix multiplication.
//!
//! Same transpose-then-dot-product staging as the fast real variant, with
//! interleaved `(real, imag)` cells and 64-bit accumulation:
//!
//! ```text
//! sumReal += a.re * b.re - a.im * b.im
//! sumImag += a.re * b.im + a.im * b.re
//! ```
//!
//! One shift-and-saturate per component at the end of each cell.

use super::mult::check_mult_shapes;
use super::types::{CmplxMatQ15, CmplxMatQ15Mut};
use crate::intrinsics::{dotp2, pack2};
use crate::status::Result;

/// `dst = a * b` over complex Q15 matrices.
///
/// `scratch` must hold at least `b.rows * b.cols` complex cells
/// (`2 * b.rows * b.cols` samples) for the staged transpose of `b`. Shape
/// checking mirrors the real kernels: on mismatch nothing is written.
pub fn mat_cmplx_mult_q15(
    a: &CmplxMatQ15,
    b: &CmplxMatQ15,
    dst: &mut CmplxMatQ15Mut,
    scratch: &mut [i16],
) -> Result<()> {
    check_mult_shapes(a.rows, a.cols, b.rows, b.cols, dst.rows, dst.cols)?;
    debug_assert!(scratch.len() >= 2 * b.rows * b.cols);

    // Complex transpose: cells move, (re, im) order within a cell stays.
    let bt = &mut scratch[..2 * b.rows * b.cols];
    for r in 0..b.rows {
        for c in 0..b.cols {
            bt[2 * (c * b.rows + r)] = b.data[2 * (r * b.cols + c)];
            bt[2 * (c * b.rows + r) + 1] = b.data[2 * (r * b.cols + c) + 1];
        }
    }

    for i in 0..a.rows {
        let a_row = &a.data[2 * i * a.cols..2 * (i + 1) * a.cols];
        for j in 0..b.cols {
            let bt_row = &bt[2 * j * b.rows..2 * (j + 1) * b.rows];
            let (sum_re, sum_im) = if cfg!(feature = "simd") {
                cmplx_dot_packed(a_row, bt_row)
            } else {
                cmplx_dot_scalar(a_row, bt_row)
            };
            dst.data[2 * (i * b.cols + j)] = i64_to_q15(sum_re);
            dst.data[2 * (i * b.cols + j) + 1] = i64_to_q15(sum_im);
        }
    }
    Ok(())
}

#[inline(always)]
fn i64_to_q15(sum: i64) -> i16 {
    let shifted = sum >> 15;
    if shifted > i16::MAX as i64 {
        i16::MAX
    } else if shifted < i16::MIN as i64 {
        i16::MIN
    } else {
        shifted as i16
    }
}

pub(crate) fn cmplx_dot_scalar(a_row: &[i16], b_row: &[i16]) -> (i64, i64) {
    let mut sum_re = 0i64;
    let mut sum_im = 0i64;
    for (cell_a, cell_b) in a_row.chunks_exact(2).zip(b_row.chunks_exact(2)) {
        let (ar, ai) = (cell_a[0] as i64, cell_a[1] as i64);
        let (br, bi) = (cell_b[0] as i64, cell_b[1] as i64);
        sum_re += ar * br - ai * bi;
        sum_im += ar * bi + ai * br;
    }
    (sum_re, sum_im)
}

/// Negated-imaginary staging: packing `(a.re, -a.im)` against `(b.re, b.im)`
/// turns the real component into a single two-lane dot product, and
/// `(a.re, a.im)` against `(b.im, b.re)` does the same for the imaginary
/// component. Cells holding `-1.0` fall back to the four scalar multiplies:
/// `-1.0` has no Q15 negation and two full-scale lane products overflow the
/// 32-bit dot result, so the trick cannot represent those cells.
pub(crate) fn cmplx_dot_packed(a_row: &[i16], b_row: &[i16]) -> (i64, i64) {
    let mut sum_re = 0i64;
    let mut sum_im = 0i64;
    for (cell_a, cell_b) in a_row.chunks_exact(2).zip(b_row.chunks_exact(2)) {
        let (ar, ai) = (cell_a[0], cell_a[1]);
        let (br, bi) = (cell_b[0], cell_b[1]);
        if ar == i16::MIN || ai == i16::MIN || br == i16::MIN || bi == i16::MIN {
            sum_re += ar as i64 * br as i64 - ai as i64 * bi as i64;
            sum_im += ar as i64 * bi as i64 + ai as i64 * br as i64;
        } else {
            sum_re += dotp2(pack2(ar, -ai), pack2(br, bi)) as i64;
            sum_im += dotp2(pack2(ar, ai), pack2(bi, br)) as i64;
        }
    }
    (sum_re, sum_im)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::status::MathError;

    #[test]
    fn test_cmplx_identity() {
        // Complex identity: UNITY + 0i on the diagonal.
        let ident = [i16::MAX, 0, 0, 0, 0, 0, i16::MAX, 0];
        let m = [5i16 << 8, 1 << 8, 6 << 8, -2 << 8, 7 << 8, 3 << 8, 8 << 8, -4 << 8];
        let mut out = [0i16; 8];
        let mut scratch = [0i16; 8];
        let a = CmplxMatQ15::new(2, 2, &ident).unwrap();
        let b = CmplxMatQ15::new(2, 2, &m).unwrap();
        let mut dst = CmplxMatQ15Mut::new(2, 2, &mut out).unwrap();
        mat_cmplx_mult_q15(&a, &b, &mut dst, &mut scratch).unwrap();
        for (got, want) in out.iter().zip(m.iter()) {
            assert!((got - want).abs() <= 1, "got {} want {}", got, want);
        }
    }

    #[test]
    fn test_cmplx_1x1_known_product() {
        // (1 + 2i)(3 + 4i) = -5 + 10i, integers staged on the output scale.
        let a_data = [1i16 << 8, 2 << 8];
        let b_data = [3i16 << 7, 4 << 7];
        let mut out = [0i16; 2];
        let mut scratch = [0i16; 2];
        let a = CmplxMatQ15::new(1, 1, &a_data).unwrap();
        let b = CmplxMatQ15::new(1, 1, &b_data).unwrap();
        let mut dst = CmplxMatQ15Mut::new(1, 1, &mut out).unwrap();
        mat_cmplx_mult_q15(&a, &b, &mut dst, &mut scratch).unwrap();
        assert_eq!(out, [-5, 10]);
    }

    #[test]
    fn test_cmplx_mismatch_no_output() {
        let a_data = [0i16; 8];
        let b_data = [0i16; 8];
        let mut out = [9i16; 8];
        let mut scratch = [0i16; 8];
        let a = CmplxMatQ15::new(2, 2, &a_data).unwrap();
        let b = CmplxMatQ15::new(4, 1, &b_data).unwrap();
        let mut dst = CmplxMatQ15Mut::new(2, 2, &mut out).unwrap();
        assert_eq!(
            mat_cmplx_mult_q15(&a, &b, &mut dst, &mut scratch),
            Err(MathError::SizeMismatch)
        );
        assert_eq!(out, [9; 8]);
    }

    #[test]
    fn test_packed_trick_matches_scalar() {
        // Includes -1.0 components, which exercise the scalar fallback cells.
        let a_row = [i16::MIN, 1234, 32767, i16::MIN, -4567, 890];
        let b_row = [32767i16, i16::MIN, i16::MIN, i16::MIN, 2222, -3333];
        assert_eq!(cmplx_dot_packed(&a_row, &b_row), cmplx_dot_scalar(&a_row, &b_row));

        let a_row = [1000i16, -2000, 3000, 4000];
        let b_row = [-5000i16, 6000, 7000, -8000];
        assert_eq!(cmplx_dot_packed(&a_row, &b_row), cmplx_dot_scalar(&a_row, &b_row));
    }
}
