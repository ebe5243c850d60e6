//! # riscv-dsp
//!
//! A `no_std`, zero-allocation fixed-point DSP kernel library for RISC-V
//! cores with the XpulpV2 packed-SIMD extension, written in pure Rust. It
//! provides the classic Q7/Q15/Q31 kernel families (element-wise vector
//! math, convolution, matrix algebra) with bit-exact scalar and packed-lane
//! implementations of every kernel.
//!
//! ## Architecture
//!
//! | Layer | Module | Purpose |
//! |-------|--------|---------|
//! | Primitives | [`intrinsics`] | Saturating scalar ops + packed-lane SIMD |
//! | Errors | [`status`] | [`MathError`] and the crate [`Result`] alias |
//! | Vector | [`basic`] | Element-wise abs, multiply, offset, shift |
//! | Support | [`support`] | Q7/Q15/Q31/float conversions, fill, copy |
//! | Filtering | [`filtering`] | Q15 convolution: precise, fast, scratch-optimized |
//! | Matrix | [`matrix`] | Q15 transpose, real/fast/complex multiply |
//! | Board | [`board`] | Interrupt table + SPI bitstream loader (feature-gated) |
//!
//! ## Quick start
//!
//! ```ignore
//! use riscv_dsp::basic::mult_q15;
//! use riscv_dsp::filtering::conv_q15;
//!
//! let a = [16384i16; 32]; // 0.5 in Q15
//! let b = [8192i16; 32];  // 0.25
//! let mut prod = [0i16; 32];
//! mult_q15(&a, &b, &mut prod);
//!
//! let x = [1024i16, 2048, 3072];
//! let h = [16384i16, 16384];
//! let mut y = [0i16; 4]; // len(x) + len(h) - 1
//! conv_q15(&x, &h, &mut y);
//! ```
//!
//! ## Features
//!
//! | Feature | Default | Enables |
//! |---------|---------|---------|
//! | `simd` | yes | Packed-lane kernel paths (bit-identical to scalar) |
//! | `xpulp` | no | XpulpV2 inline assembly on `riscv32` targets |
//! | `rounding` | no | Rounded float→fixed conversions |
//! | `board` | yes | Interrupt dispatch + SPI loader (requires `embedded-hal`) |
//!
//! ## Numeric conventions
//!
//! - **Formats:** Q7 (`i8`, 1.7), Q15 (`i16`, 1.15), Q31 (`i32`, 1.31)
//! - **Saturation:** `abs(MIN) == MAX` at every width
//! - **Fast kernels:** 32-bit wrapping accumulators; callers pre-scale by
//!   the log2 of the accumulation length (see [`filtering::conv_fast_q15`])

#![no_std]

pub mod status;
pub mod intrinsics;
pub mod basic;
pub mod support;
pub mod filtering;
pub mod matrix;

#[cfg(feature = "board")]
pub mod board;

pub(crate) mod accum;

mod verification_tests;

pub use status::{MathError, Result};
