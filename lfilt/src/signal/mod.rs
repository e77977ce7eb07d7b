//! Signal processing: linear filtering and the capability traits it implements.

/// Digital IIR/FIR linear filtering.
pub mod filter;

/// Trait interfaces implemented by the signal kernels.
pub mod traits;
