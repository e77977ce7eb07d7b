//! Trait-first kernel wrappers for filtering primitives.

use crate::kernel::{ConfigError, ExecInvariantViolation, KernelLifecycle, Read1D, Write1D};
use crate::signal::traits::LFilter1D;
use alloc::vec::Vec;
use log::{debug, log_enabled, trace, warn, Level};
use nalgebra::{Complex, RealField};

use super::lfilter::{lfilter_normalized, lfilter_normalized_into};
use super::normalize::normalize_checked;
use super::{is_stable, poles_dyn};

/// Constructor config for [`LFilterKernel`].
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct LFilterConfig<T> {
    /// Numerator coefficients.
    pub b: Vec<T>,
    /// Denominator coefficients.
    pub a: Vec<T>,
}

/// 1D `lfilter` kernel.
///
/// Coefficients are validated and normalized once by [`KernelLifecycle::try_new`]; every run
/// starts from rest, so one kernel can be shared between threads filtering independent channels.
#[derive(Debug, Clone)]
pub struct LFilterKernel<T> {
    b: Vec<T>,
    a: Vec<T>,
}

impl<T> KernelLifecycle for LFilterKernel<T>
where
    T: RealField + Copy,
{
    type Config = LFilterConfig<T>;

    fn try_new(config: Self::Config) -> Result<Self, ConfigError> {
        let (b, a) = normalize_checked(&config.b, &config.a)?;
        debug!(
            "lfilter kernel: feedforward order {}, feedback order {}",
            b.len() - 1,
            a.len() - 1
        );
        if a.len() > 1 && log_enabled!(Level::Warn) && !is_stable(&a).unwrap_or(true) {
            warn!(
                "lfilter kernel: feedback order {} has poles on or outside the unit circle",
                a.len() - 1
            );
        }
        Ok(Self { b, a })
    }
}

impl<T> LFilterKernel<T>
where
    T: RealField + Copy,
{
    /// Normalized numerator coefficients.
    pub fn b(&self) -> &[T] {
        &self.b
    }

    /// Normalized denominator coefficients, `a()[0] == 1`.
    pub fn a(&self) -> &[T] {
        &self.a
    }

    /// Filter order, `max(len(a), len(b)) - 1`.
    pub fn order(&self) -> usize {
        self.a.len().max(self.b.len()) - 1
    }

    /// Poles of the filter.
    pub fn poles(&self) -> Vec<Complex<T>> {
        poles_dyn(&self.a).unwrap_or_default()
    }

    /// Whether every pole lies strictly inside the unit circle.
    pub fn is_stable(&self) -> bool {
        is_stable(&self.a).unwrap_or(false)
    }
}

impl<T> LFilter1D<T> for LFilterKernel<T>
where
    T: RealField + Copy,
{
    fn run_into<I, O>(&self, input: &I, out: &mut O) -> Result<(), ExecInvariantViolation>
    where
        I: Read1D<T> + ?Sized,
        O: Write1D<T> + ?Sized,
    {
        let input = input.read_slice().map_err(ExecInvariantViolation::from)?;
        let out_slice = out
            .write_slice_mut()
            .map_err(ExecInvariantViolation::from)?;
        if out_slice.len() != input.len() {
            return Err(ExecInvariantViolation::LengthMismatch {
                arg: "out",
                expected: input.len(),
                got: out_slice.len(),
            });
        }
        trace!("lfilter kernel: filtering {} samples", input.len());
        lfilter_normalized_into(&self.b, &self.a, input, out_slice);
        Ok(())
    }

    fn run_alloc<I>(&self, input: &I) -> Result<Vec<T>, ExecInvariantViolation>
    where
        I: Read1D<T> + ?Sized,
    {
        let input = input.read_slice().map_err(ExecInvariantViolation::from)?;
        trace!("lfilter kernel: filtering {} samples", input.len());
        Ok(lfilter_normalized(&self.b, &self.a, input))
    }
}
