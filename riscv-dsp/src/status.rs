//! Kernel status codes.
//!
//! The error taxonomy is deliberately minimal: the only condition the library
//! detects at runtime is a matrix shape mismatch, reported before any output
//! is written. Caller-contract violations (undersized scratch buffers,
//! unscaled fast-path inputs) are checked with `debug_assert!` only; the
//! release numeric path carries no runtime checks.

/// Errors reported by the matrix kernels and matrix-view constructors.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MathError {
    /// Operand or output dimensions are incompatible, or a view's backing
    /// slice does not hold exactly `rows * cols` elements.
    SizeMismatch,
}

/// Result alias used throughout the matrix kernels.
pub type Result<T> = core::result::Result<T, MathError>;
