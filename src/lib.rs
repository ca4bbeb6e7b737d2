//! Grayscale sample grids with flips, quarter-turn rotations, and text rendering.
//!
//! Pure array geometry without I/O. `no_std` compatible (needs `alloc`).
//!
//! # Modules
//!
//! - [`matrix`]: [`Matrix`] / [`GrayImage`], construction, transforms, rendering
//! - [`error`]: [`ShapeError`], raised by constructors on empty or ragged input
//!
//! # Example
//!
//! ```
//! use graymatrix::{GrayImage, ShapeError};
//!
//! let img = GrayImage::from_grid(&[[0, 128, 255], [10, 20, 30]]).unwrap();
//! let turned = img.rotate_clockwise();
//! assert_eq!(turned.dimensions(), (3, 2));
//! assert_eq!(turned.render(), "10\t0\n20\t128\n30\t255\n");
//!
//! let ragged = vec![vec![1u8, 2], vec![3]];
//! assert!(matches!(
//!     GrayImage::from_grid(&ragged),
//!     Err(ShapeError::Ragged { row: 1, .. })
//! ));
//! ```

#![cfg_attr(not(feature = "std"), no_std)]
#![forbid(unsafe_code)]

extern crate alloc;

pub mod error;
pub mod matrix;

pub use error::ShapeError;
pub use matrix::{BLACK, GrayImage, Matrix, WHITE};
