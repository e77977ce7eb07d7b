//! Linear algebra helpers backing the filter diagnostics.

mod companion;

pub use companion::*;
