//! Q15 matrix transpose.

use super::types::{MatQ15, MatQ15Mut};
use crate::status::{MathError, Result};

/// `dst = src^T`.
///
/// `dst` must be pre-sized to `{src.cols, src.rows}`; on mismatch nothing is
/// written.
pub fn mat_trans_q15(src: &MatQ15, dst: &mut MatQ15Mut) -> Result<()> {
    if dst.rows != src.cols || dst.cols != src.rows {
        return Err(MathError::SizeMismatch);
    }
    transpose_into(src.data, src.rows, src.cols, dst.data);
    Ok(())
}

/// Row-major transpose of `rows x cols` into a `cols x rows` slice.
///
/// Shared with the fast multiply, which stages the same transpose into its
/// scratch buffer.
pub(crate) fn transpose_into(src: &[i16], rows: usize, cols: usize, dst: &mut [i16]) {
    for r in 0..rows {
        for c in 0..cols {
            dst[c * rows + r] = src[r * cols + c];
        }
    }
}
