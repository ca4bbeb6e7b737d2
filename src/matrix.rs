//! Owned 2-D sample grid with flips, quarter-turn rotations, and text rendering.
//!
//! Samples are stored row-major in one contiguous buffer. Every constructor
//! copies or takes ownership of its input, and every transform returns a new
//! matrix, so no two matrices ever share storage.
//!
//! # Example
//!
//! ```
//! use graymatrix::GrayImage;
//!
//! let img = GrayImage::from_grid(&[[1, 2], [3, 4]]).unwrap();
//!
//! assert_eq!(img.flip_vertically().to_grid(), [[2, 1], [4, 3]]);
//! assert_eq!(img.rotate_clockwise().to_grid(), [[3, 1], [4, 2]]);
//! assert_eq!(img.render(), "1\t2\n3\t4\n");
//! ```
//!
//! ```text
//!     source        flip_vertically   flip_horizontally
//!     ┌─────┐       ┌─────┐           ┌─────┐
//!     │ 1 2 │       │ 2 1 │           │ 3 4 │
//!     │ 3 4 │       │ 4 3 │           │ 1 2 │
//!     └─────┘       └─────┘           └─────┘
//!
//!                   rotate_clockwise  rotate_counter_clockwise
//!                   ┌─────┐           ┌─────┐
//!                   │ 3 1 │           │ 2 4 │
//!                   │ 4 2 │           │ 1 3 │
//!                   └─────┘           └─────┘
//! ```

use alloc::string::{String, ToString};
use alloc::vec::Vec;
use core::fmt;

use num_traits::Zero;

use crate::error::ShapeError;

/// Intensity of a white sample.
pub const WHITE: u8 = 0;
/// Intensity of a black sample.
pub const BLACK: u8 = 255;

/// A grayscale image: 8-bit intensities, 0 is white and 255 is black.
pub type GrayImage = Matrix<u8>;

/// Rectangular grid of samples, at least 1×1.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct Matrix<T> {
    rows: usize,
    cols: usize,
    /// Row-major, `rows * cols` long.
    data: Vec<T>,
}

/// Checks dimensions and returns the sample count.
fn area(rows: usize, cols: usize) -> Result<usize, ShapeError> {
    if rows == 0 {
        return Err(ShapeError::NoRows);
    }
    if cols == 0 {
        return Err(ShapeError::NoColumns);
    }
    rows.checked_mul(cols).ok_or(ShapeError::TooLarge)
}

/// Empty buffer with capacity for `len` samples.
fn sample_buffer<T>(len: usize) -> Result<Vec<T>, ShapeError> {
    let mut data = Vec::new();
    data.try_reserve_exact(len).map_err(|_| ShapeError::TooLarge)?;
    Ok(data)
}

impl<T: Copy> Matrix<T> {
    /// Copy a nested grid into a new matrix.
    ///
    /// Every row must be as long as the first one. The matrix holds its own
    /// copy: later changes to `grid` are not observed.
    ///
    /// # Errors
    ///
    /// [`ShapeError::NoRows`] for an empty grid, [`ShapeError::NoColumns`] if
    /// the first row is empty, [`ShapeError::Ragged`] if any row's length
    /// differs from the first.
    pub fn from_grid<R: AsRef<[T]>>(grid: &[R]) -> Result<Self, ShapeError> {
        let rows = grid.len();
        let cols = grid.first().map_or(0, |r| r.as_ref().len());
        let len = area(rows, cols)?;

        let mut data = sample_buffer(len)?;
        for (row, samples) in grid.iter().enumerate() {
            let samples = samples.as_ref();
            if samples.len() != cols {
                return Err(ShapeError::Ragged {
                    row,
                    expected: cols,
                    found: samples.len(),
                });
            }
            data.extend_from_slice(samples);
        }
        Ok(Self { rows, cols, data })
    }

    /// Take ownership of a row-major buffer of `rows * cols` samples.
    ///
    /// # Errors
    ///
    /// [`ShapeError::LengthMismatch`] if `data.len() != rows * cols`, plus the
    /// dimension errors of [`filled`](Self::filled).
    pub fn from_vec(rows: usize, cols: usize, data: Vec<T>) -> Result<Self, ShapeError> {
        let len = area(rows, cols)?;
        if data.len() != len {
            return Err(ShapeError::LengthMismatch {
                expected: len,
                found: data.len(),
            });
        }
        Ok(Self { rows, cols, data })
    }

    /// Number of rows.
    #[inline]
    pub fn rows(&self) -> usize {
        self.rows
    }

    /// Number of samples per row.
    #[inline]
    pub fn cols(&self) -> usize {
        self.cols
    }

    /// `(rows, cols)`.
    #[inline]
    pub fn dimensions(&self) -> (usize, usize) {
        (self.rows, self.cols)
    }

    /// Sample at (`row`, `col`), or `None` outside the grid.
    #[inline]
    pub fn get(&self, row: usize, col: usize) -> Option<T> {
        if row < self.rows && col < self.cols {
            Some(self.data[row * self.cols + col])
        } else {
            None
        }
    }

    /// Samples of row `i`.
    ///
    /// # Panics
    ///
    /// If `i >= self.rows()`.
    #[inline]
    pub fn row(&self, i: usize) -> &[T] {
        assert!(i < self.rows, "row {i} out of bounds for {} rows", self.rows);
        let start = i * self.cols;
        &self.data[start..start + self.cols]
    }

    /// Iterate over rows, top to bottom.
    pub fn iter_rows(&self) -> core::slice::ChunksExact<'_, T> {
        self.data.chunks_exact(self.cols)
    }

    /// All samples, row-major.
    #[inline]
    pub fn as_slice(&self) -> &[T] {
        &self.data
    }

    /// Copy out as nested rows.
    pub fn to_grid(&self) -> Vec<Vec<T>> {
        self.iter_rows().map(<[T]>::to_vec).collect()
    }

    /// Consume into the row-major buffer.
    pub fn into_vec(self) -> Vec<T> {
        self.data
    }

    /// Reverse the order of samples within each row (mirror left-right).
    ///
    /// `out[i][j] = self[i][cols - 1 - j]`. Dimensions are unchanged.
    pub fn flip_vertically(&self) -> Self {
        let data = self
            .iter_rows()
            .flat_map(|row| row.iter().rev().copied())
            .collect();
        Self {
            rows: self.rows,
            cols: self.cols,
            data,
        }
    }

    /// Reverse the order of rows (mirror top-bottom).
    ///
    /// `out[i][j] = self[rows - 1 - i][j]`. Dimensions are unchanged.
    pub fn flip_horizontally(&self) -> Self {
        let data = self
            .iter_rows()
            .rev()
            .flat_map(|row| row.iter().copied())
            .collect();
        Self {
            rows: self.rows,
            cols: self.cols,
            data,
        }
    }

    /// Turn the image 90° clockwise.
    ///
    /// `out[j][rows - 1 - i] = self[i][j]`; the result is `cols × rows`.
    pub fn rotate_clockwise(&self) -> Self {
        let (rows, cols) = (self.rows, self.cols);
        let mut data = Vec::with_capacity(self.data.len());
        // Output row r is source column r, read bottom to top.
        for r in 0..cols {
            for c in 0..rows {
                data.push(self.data[(rows - 1 - c) * cols + r]);
            }
        }
        Self {
            rows: cols,
            cols: rows,
            data,
        }
    }

    /// Turn the image 90° counter-clockwise.
    ///
    /// `out[cols - 1 - j][i] = self[i][j]`; the result is `cols × rows`.
    pub fn rotate_counter_clockwise(&self) -> Self {
        let (rows, cols) = (self.rows, self.cols);
        let mut data = Vec::with_capacity(self.data.len());
        // Output row r is source column cols-1-r, read top to bottom.
        for r in 0..cols {
            for c in 0..rows {
                data.push(self.data[c * cols + (cols - 1 - r)]);
            }
        }
        Self {
            rows: cols,
            cols: rows,
            data,
        }
    }
}

impl<T: Copy + Zero> Matrix<T> {
    /// A `rows × cols` matrix of zeros (white, for [`GrayImage`]).
    ///
    /// # Errors
    ///
    /// [`ShapeError::NoRows`] or [`ShapeError::NoColumns`] for a zero
    /// dimension, [`ShapeError::TooLarge`] if `rows * cols` overflows or the
    /// buffer cannot be allocated.
    pub fn filled(rows: usize, cols: usize) -> Result<Self, ShapeError> {
        let len = area(rows, cols)?;
        let mut data = sample_buffer(len)?;
        data.resize(len, T::zero());
        Ok(Self { rows, cols, data })
    }
}

impl<T: Copy + fmt::Display> Matrix<T> {
    /// Tab-separated text, one line per row, each line ending in `\n`.
    ///
    /// Identical to the [`Display`](fmt::Display) output. Display-only:
    /// there is no parser for this format.
    pub fn render(&self) -> String {
        self.to_string()
    }
}

impl<T: Copy + fmt::Display> fmt::Display for Matrix<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in self.iter_rows() {
            for (j, sample) in row.iter().enumerate() {
                if j > 0 {
                    f.write_str("\t")?;
                }
                write!(f, "{sample}")?;
            }
            f.write_str("\n")?;
        }
        Ok(())
    }
}

impl<T: Copy> TryFrom<Vec<Vec<T>>> for Matrix<T> {
    type Error = ShapeError;

    fn try_from(grid: Vec<Vec<T>>) -> Result<Self, Self::Error> {
        Self::from_grid(&grid)
    }
}

impl<T: Copy> TryFrom<&[Vec<T>]> for Matrix<T> {
    type Error = ShapeError;

    fn try_from(grid: &[Vec<T>]) -> Result<Self, Self::Error> {
        Self::from_grid(grid)
    }
}
