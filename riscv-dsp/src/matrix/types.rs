//! Borrowed matrix views.
//!
//! A matrix is a `{rows, cols, data}` triple over a dense, row-major,
//! caller-owned slice. The views never own or resize their storage; the
//! constructors are the one place the `data.len() == rows * cols` invariant
//! is enforced, so every kernel can index without re-checking it.

use crate::status::{MathError, Result};

/// Shared view of a real Q15 matrix.
#[derive(Debug, Clone, Copy)]
pub struct MatQ15<'a> {
    pub(crate) rows: usize,
    pub(crate) cols: usize,
    pub(crate) data: &'a [i16],
}

impl<'a> MatQ15<'a> {
    /// Wrap `data` as a `rows x cols` matrix.
    ///
    /// Fails with [`MathError::SizeMismatch`] unless
    /// `data.len() == rows * cols`.
    pub fn new(rows: usize, cols: usize, data: &'a [i16]) -> Result<Self> {
        if data.len() != rows * cols {
            return Err(MathError::SizeMismatch);
        }
        Ok(MatQ15 { rows, cols, data })
    }

    pub fn rows(&self) -> usize {
        self.rows
    }

    pub fn cols(&self) -> usize {
        self.cols
    }

    pub fn data(&self) -> &[i16] {
        self.data
    }
}

/// Exclusive view of a real Q15 matrix.
#[derive(Debug)]
pub struct MatQ15Mut<'a> {
    pub(crate) rows: usize,
    pub(crate) cols: usize,
    pub(crate) data: &'a mut [i16],
}

impl<'a> MatQ15Mut<'a> {
    /// Wrap `data` as a mutable `rows x cols` matrix.
    pub fn new(rows: usize, cols: usize, data: &'a mut [i16]) -> Result<Self> {
        if data.len() != rows * cols {
            return Err(MathError::SizeMismatch);
        }
        Ok(MatQ15Mut { rows, cols, data })
    }

    pub fn rows(&self) -> usize {
        self.rows
    }

    pub fn cols(&self) -> usize {
        self.cols
    }

    pub fn data(&self) -> &[i16] {
        self.data
    }

    /// Reborrow as a shared view.
    pub fn as_ref(&self) -> MatQ15<'_> {
        MatQ15 {
            rows: self.rows,
            cols: self.cols,
            data: self.data,
        }
    }
}

/// Shared view of a complex Q15 matrix: each cell is an interleaved
/// `(real, imag)` pair, so the backing slice holds `2 * rows * cols` values.
#[derive(Debug, Clone, Copy)]
pub struct CmplxMatQ15<'a> {
    pub(crate) rows: usize,
    pub(crate) cols: usize,
    pub(crate) data: &'a [i16],
}

impl<'a> CmplxMatQ15<'a> {
    /// Wrap `data` as a `rows x cols` complex matrix
    /// (`data.len() == 2 * rows * cols`).
    pub fn new(rows: usize, cols: usize, data: &'a [i16]) -> Result<Self> {
        if data.len() != 2 * rows * cols {
            return Err(MathError::SizeMismatch);
        }
        Ok(CmplxMatQ15 { rows, cols, data })
    }

    pub fn rows(&self) -> usize {
        self.rows
    }

    pub fn cols(&self) -> usize {
        self.cols
    }

    pub fn data(&self) -> &[i16] {
        self.data
    }
}

/// Exclusive view of a complex Q15 matrix.
#[derive(Debug)]
pub struct CmplxMatQ15Mut<'a> {
    pub(crate) rows: usize,
    pub(crate) cols: usize,
    pub(crate) data: &'a mut [i16],
}

impl<'a> CmplxMatQ15Mut<'a> {
    /// Wrap `data` as a mutable `rows x cols` complex matrix.
    pub fn new(rows: usize, cols: usize, data: &'a mut [i16]) -> Result<Self> {
        if data.len() != 2 * rows * cols {
            return Err(MathError::SizeMismatch);
        }
        Ok(CmplxMatQ15Mut { rows, cols, data })
    }

    pub fn rows(&self) -> usize {
        self.rows
    }

    pub fn cols(&self) -> usize {
        self.cols
    }

    pub fn data(&self) -> &[i16] {
        self.data
    }
}
