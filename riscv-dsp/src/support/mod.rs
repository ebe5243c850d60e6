//! Support kernels: format conversion, fill, copy.
//!
//! Pure element-wise maps over caller-owned buffers. Output length equals
//! input length, nothing is written partially, and none of these can fail.

mod convert;
mod fill;

pub use convert::{
    float_to_q15, float_to_q31, float_to_q7, q15_to_float, q15_to_q31, q15_to_q7, q31_to_float,
    q31_to_q15, q31_to_q7, q7_to_float, q7_to_q15, q7_to_q31,
};
pub use fill::{copy_q15, copy_q31, copy_q7, fill_q15, fill_q31, fill_q7};

#[cfg(test)]
pub(crate) use convert::{q15_to_q7_packed, q15_to_q7_scalar, q7_to_q15_packed, q7_to_q15_scalar};
