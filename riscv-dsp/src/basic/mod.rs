//! Element-wise vector kernels: absolute value, multiply, offset, shift.
//!
//! Every kernel is `O(blockSize)`, allocation-free, and stateless; paired
//! slices must have equal lengths. Q7/Q15 kernels carry a scalar reference
//! path and a packed-lane path selected by the `simd` feature; both produce
//! bit-identical output.

mod abs;
mod mult;
mod offset;
mod shift;

pub use abs::{abs_f32, abs_q15, abs_q31, abs_q7};
pub use mult::{mult_f32, mult_q15, mult_q31, mult_q7};
pub use offset::{offset_f32, offset_q15, offset_q31, offset_q7};
pub use shift::{shift_q15, shift_q31, shift_q7};

#[cfg(test)]
pub(crate) use abs::{abs_q15_packed, abs_q15_scalar, abs_q7_packed, abs_q7_scalar};
#[cfg(test)]
pub(crate) use mult::{mult_q15_packed, mult_q15_scalar, mult_q7_packed, mult_q7_scalar};
#[cfg(test)]
pub(crate) use offset::{offset_q15_packed, offset_q15_scalar, offset_q7_packed, offset_q7_scalar};
#[cfg(test)]
pub(crate) use shift::{shift_q15_packed, shift_q15_scalar, shift_q7_packed, shift_q7_scalar};
