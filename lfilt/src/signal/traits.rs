//! Trait interfaces for signal-processing capabilities.
//!
//! These traits define the trait-first API shape used by the filter kernels.

use crate::kernel::{ExecInvariantViolation, Read1D, Write1D};
use alloc::vec::Vec;

/// 1D `lfilter` capability.
pub trait LFilter1D<T> {
    /// Run filtering into a caller-provided output buffer.
    fn run_into<I, O>(&self, input: &I, out: &mut O) -> Result<(), ExecInvariantViolation>
    where
        I: Read1D<T> + ?Sized,
        O: Write1D<T> + ?Sized;

    /// Run filtering and allocate output.
    fn run_alloc<I>(&self, input: &I) -> Result<Vec<T>, ExecInvariantViolation>
    where
        I: Read1D<T> + ?Sized;
}
