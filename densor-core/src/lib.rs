//! Densor is a minimal dense n-dimensional array library for `f64` data.
//!
//! An [`NdArray`] owns a flat row-major buffer together with its shape and
//! stride metadata. Indexing with [`NdArray::get`] resolves a full index
//! tuple to a single element, or a shorter tuple to the sub-array spanned
//! by the trailing dimensions; either way the result is an independently
//! owned copy, never a view into the parent.
//!
//! ## A quick guide
//! - Build arrays with the constructors: [`NdArray::zeros`], [`NdArray::ones`],
//!   [`NdArray::fill`], [`NdArray::eye`], [`NdArray::identity`], and
//!   [`NdArray::arange`].
//! - `fill` and `arange` write their buffers through a pool of parallel
//!   workers, one contiguous chunk each, and only return once every chunk
//!   has been written.
//! - Index misuse surfaces as an [`IndexError`], bad range parameters as an
//!   [`ArgError`]; both convert into the crate-wide [`Error`].
//! - [`benchmark`] runs a closure inside a dedicated worker pool of a given
//!   size and reports the elapsed wall-clock time.
//!
//! ```
//! use densor_core::NdArray;
//!
//! let grid = NdArray::arange(0.0, 5.0, 1.0).unwrap();
//! assert_eq!(grid.as_slice(), &[0.0, 1.0, 2.0, 3.0, 4.0, 5.0]);
//!
//! let eye = NdArray::eye(3);
//! let row = eye.get(&[1]).unwrap();
//! assert_eq!(row.shape(), &[3]);
//! assert_eq!(row.as_slice(), &[0.0, 1.0, 0.0]);
//! ```

mod array;
mod bench;
mod error;
mod fill;
mod init;
mod layout;

pub use array::NdArray;
pub use bench::benchmark;
pub use error::{ArgError, Error, IndexError, Result};
