//! Q15 convolution kernels.
//!
//! Linear convolution with zero-padding boundary semantics, in three
//! variants: precise (64-bit accumulation), fast (32-bit wrapping
//! accumulation), and scratch-buffer optimized (precise accumulation over
//! uniform-stride staged operands).

mod conv;
mod conv_opt;

pub use conv::{conv_fast_q15, conv_q15};
pub use conv_opt::conv_opt_q15;

#[cfg(test)]
pub(crate) use conv::{conv_fast_q15_packed, conv_fast_q15_scalar};
