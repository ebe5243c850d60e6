//! Q15 matrix multiplication, precise variant.

use super::types::{MatQ15, MatQ15Mut};
use crate::accum::MacAccumulator;
use crate::status::{MathError, Result};

/// Check `C = A * B` operand shapes before any computation.
pub(crate) fn check_mult_shapes(
    a_rows: usize,
    a_cols: usize,
    b_rows: usize,
    b_cols: usize,
    dst_rows: usize,
    dst_cols: usize,
) -> Result<()> {
    if a_cols != b_rows || dst_rows != a_rows || dst_cols != b_cols {
        return Err(MathError::SizeMismatch);
    }
    Ok(())
}

/// `dst = a * b`, precise variant.
///
/// Each output cell is a 64-bit dot product of a row of `a` with a column of
/// `b`, shifted right by 15 and saturated to 1.15 once at the end — no
/// intermediate overflow is possible for any operand size. Requires
/// `a.cols == b.rows` and `dst` pre-sized to `{a.rows, b.cols}`; on mismatch
/// returns [`MathError::SizeMismatch`] without touching `dst`.
pub fn mat_mult_q15(a: &MatQ15, b: &MatQ15, dst: &mut MatQ15Mut) -> Result<()> {
    check_mult_shapes(a.rows, a.cols, b.rows, b.cols, dst.rows, dst.cols)?;

    for i in 0..a.rows {
        let a_row = &a.data[i * a.cols..(i + 1) * a.cols];
        for j in 0..b.cols {
            let mut acc = <i64 as MacAccumulator>::zero();
            for (k, &av) in a_row.iter().enumerate() {
                acc = acc.mac(av, b.data[k * b.cols + j]);
            }
            dst.data[i * b.cols + j] = acc.into_q15();
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    const UNITY: i16 = i16::MAX; // closest Q15 representation of 1.0

    #[test]
    fn test_identity_preserves_matrix() {
        // 2x2 identity times [[5, 6], [7, 8]] in Q15 scaled units.
        let ident = [UNITY, 0, 0, UNITY];
        let m = [5i16 << 8, 6 << 8, 7 << 8, 8 << 8];
        let mut out = [0i16; 4];
        let a = MatQ15::new(2, 2, &ident).unwrap();
        let b = MatQ15::new(2, 2, &m).unwrap();
        let mut dst = MatQ15Mut::new(2, 2, &mut out).unwrap();
        mat_mult_q15(&a, &b, &mut dst).unwrap();
        // UNITY is 1.0 - 2^-15, so each product is one LSB short of exact.
        for (got, want) in out.iter().zip(m.iter()) {
            assert!((got - want).abs() <= 1, "got {} want {}", got, want);
        }
    }

    #[test]
    fn test_known_product() {
        // Integers encoded as k << 8 on one side and k << 7 on the other:
        // each product carries exactly the >> 15 output scaling.
        let a_data = [1i16 << 8, 2 << 8, 3 << 8, 4 << 8];
        let b_data = [5i16 << 7, 6 << 7, 7 << 7, 8 << 7];
        let mut out = [0i16; 4];
        let a = MatQ15::new(2, 2, &a_data).unwrap();
        let b = MatQ15::new(2, 2, &b_data).unwrap();
        let mut dst = MatQ15Mut::new(2, 2, &mut out).unwrap();
        mat_mult_q15(&a, &b, &mut dst).unwrap();
        // [[1,2],[3,4]] * [[5,6],[7,8]] = [[19,22],[43,50]]
        assert_eq!(out, [19, 22, 43, 50]);
    }

    #[test]
    fn test_dimension_mismatch_leaves_output_untouched() {
        let a_data = [0i16; 6];
        let b_data = [0i16; 6];
        let mut out = [77i16; 4];
        let a = MatQ15::new(2, 3, &a_data).unwrap();
        let b = MatQ15::new(2, 3, &b_data).unwrap(); // a.cols != b.rows
        let mut dst = MatQ15Mut::new(2, 2, &mut out).unwrap();
        assert_eq!(mat_mult_q15(&a, &b, &mut dst), Err(MathError::SizeMismatch));
        assert_eq!(out, [77; 4]);
    }

    #[test]
    fn test_wrong_output_shape_rejected() {
        let a_data = [0i16; 6];
        let b_data = [0i16; 6];
        let mut out = [0i16; 9];
        let a = MatQ15::new(2, 3, &a_data).unwrap();
        let b = MatQ15::new(3, 2, &b_data).unwrap();
        let mut dst = MatQ15Mut::new(3, 3, &mut out).unwrap();
        assert_eq!(mat_mult_q15(&a, &b, &mut dst), Err(MathError::SizeMismatch));
    }

    #[test]
    fn test_rectangular_product() {
        // 1x3 times 3x1 -> 1x1 dot product.
        let a_data = [1i16 << 8, 2 << 8, 3 << 8];
        let b_data = [4i16 << 7, 5 << 7, 6 << 7];
        let mut out = [0i16; 1];
        let a = MatQ15::new(1, 3, &a_data).unwrap();
        let b = MatQ15::new(3, 1, &b_data).unwrap();
        let mut dst = MatQ15Mut::new(1, 1, &mut out).unwrap();
        mat_mult_q15(&a, &b, &mut dst).unwrap();
        assert_eq!(out, [32]); // 4 + 10 + 18
    }

    #[test]
    fn test_long_dot_product_saturates_once() {
        // 1x100 of -1.0 times 100x1 of 1.0-ish: the 64-bit accumulator holds
        // the full sum and only the final projection clamps.
        let a_data = [i16::MIN; 100];
        let b_data = [i16::MAX; 100];
        let mut out = [0i16; 1];
        let a = MatQ15::new(1, 100, &a_data).unwrap();
        let b = MatQ15::new(100, 1, &b_data).unwrap();
        let mut dst = MatQ15Mut::new(1, 1, &mut out).unwrap();
        mat_mult_q15(&a, &b, &mut dst).unwrap();
        assert_eq!(out, [i16::MIN]);
    }
}
