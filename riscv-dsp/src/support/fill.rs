//! Constant fill and block copy.
//!
//! `fill` runs in time independent of the value; `copy` is a plain block
//! move. The optimized convolution uses both to stage its scratch buffers.

/// `dst[n] = value` for all `n`.
pub fn fill_q7(value: i8, dst: &mut [i8]) {
    dst.fill(value);
}

/// `dst[n] = value` for all `n`.
pub fn fill_q15(value: i16, dst: &mut [i16]) {
    dst.fill(value);
}

/// `dst[n] = value` for all `n`.
pub fn fill_q31(value: i32, dst: &mut [i32]) {
    dst.fill(value);
}

/// `dst[n] = src[n]`.
pub fn copy_q7(src: &[i8], dst: &mut [i8]) {
    debug_assert_eq!(src.len(), dst.len());
    dst.copy_from_slice(src);
}

/// `dst[n] = src[n]`.
pub fn copy_q15(src: &[i16], dst: &mut [i16]) {
    debug_assert_eq!(src.len(), dst.len());
    dst.copy_from_slice(src);
}

/// `dst[n] = src[n]`.
pub fn copy_q31(src: &[i32], dst: &mut [i32]) {
    debug_assert_eq!(src.len(), dst.len());
    dst.copy_from_slice(src);
}
