//! Types shared across the `lfilt` crates.

#![no_std]

#[cfg(feature = "std")]
extern crate std;

extern crate alloc;

mod error;

pub use error::*;
