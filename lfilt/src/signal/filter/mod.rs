//! Linear filtering of 1D signals with IIR or FIR coefficients.
//!
//! The entry points evaluate the difference equation
//! `a[0]*y[n] = sum(b[i]*x[n-i]) - sum(a[i]*y[n-i])` from rest, following the
//! `lfilter(b, a, x)` conventions of `scipy.signal`.

mod kernels;
mod lfilter;
mod normalize;
mod stability;

pub use kernels::*;
pub use lfilter::*;
pub use normalize::*;
pub use stability::*;
