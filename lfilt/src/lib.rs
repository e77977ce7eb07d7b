#![no_std]
#![deny(missing_docs)]
//!
//! Sequential evaluation of linear IIR/FIR filters.
//!
//! Given numerator (`b`, feedforward) and denominator (`a`, feedback) coefficients,
//! [`signal::filter`] computes the output of the difference equation
//!
//! ```text
//! y[n] = b[0]*x[n] + ... + b[J]*x[n-J] - a[1]*y[n-1] - ... - a[L]*y[n-L]
//! ```
//!
//! one sample at a time, starting from rest, after normalizing so that `a[0] == 1`.
//!
//! ```
//! use lfilt::kernel::KernelLifecycle;
//! use lfilt::signal::filter::{LFilterConfig, LFilterKernel};
//! use lfilt::signal::traits::LFilter1D;
//!
//! let kernel = LFilterKernel::try_new(LFilterConfig {
//!     b: vec![1.0, 0.25],
//!     a: vec![1.0, 0.5, 0.25],
//! })
//! .unwrap();
//! assert!(kernel.is_stable());
//! let y = kernel.run_alloc(&[1.0, 2.0, 3.0]).unwrap();
//! assert_eq!(y, vec![1.0, 1.75, 2.375]);
//! ```
//!
//! The crate is `no_std` with `alloc`; the default `std` feature forwards to
//! the dependencies, and the `serde` feature makes [`signal::filter::LFilterConfig`]
//! deserializable.
//!

#[cfg(feature = "std")]
extern crate std;

extern crate alloc;

/// Re-export of the nalgebra crate, whose `RealField` bounds the sample type.
pub use nalgebra as na;

pub use lfilt_core::{Error, Result};

/// Constructor validation and buffer adapters shared by the kernels.
pub mod kernel;

/// Linear algebra helpers.
pub mod linalg;

/// Signal processing.
pub mod signal;
