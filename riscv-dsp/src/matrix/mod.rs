//! Q15 matrix kernels.
//!
//! Matrices are row-major slices wrapped in shape-carrying views; complex
//! matrices interleave `(real, imag)` per cell. The fast and complex multiply
//! kernels stage a transpose of the right-hand operand into caller-provided
//! scratch so every inner loop walks both operands contiguously.

mod cmplx_mult;
mod mult;
mod mult_fast;
mod trans;
mod types;

pub use cmplx_mult::mat_cmplx_mult_q15;
pub use mult::mat_mult_q15;
pub use mult_fast::mat_mult_fast_q15;
pub use trans::mat_trans_q15;
pub use types::{CmplxMatQ15, CmplxMatQ15Mut, MatQ15, MatQ15Mut};
