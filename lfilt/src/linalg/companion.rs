use crate::kernel::ConfigError;
use core::ops::{Div, Neg};
use nalgebra::{Dyn, OMatrix, Scalar};
use num_traits::{One, Zero};

///
/// Create a companion matrix.
///
/// The first row is `-coeffs[1..] / coeffs[0]` and the sub-diagonal is ones, so the eigenvalues
/// of the matrix are the roots of the polynomial whose coefficients, highest power first, are
/// `coeffs`.
///
/// Requires at least 2 coefficients and a non-zero leading coefficient.
///
pub fn companion_dyn<T>(coeffs: &[T]) -> Result<OMatrix<T, Dyn, Dyn>, ConfigError>
where
    T: Scalar + One + Zero + Div<Output = T> + Neg<Output = T> + Copy,
{
    if coeffs.len() < 2 {
        return Err(ConfigError::InvalidCoefficients {
            arg: "coeffs",
            reason: "companion requires at least 2 coefficients",
        });
    }
    let a0 = coeffs[0];
    if a0.is_zero() {
        return Err(ConfigError::InvalidCoefficients {
            arg: "coeffs",
            reason: "leading coefficient must be non-zero",
        });
    }
    let m = coeffs.len() - 1;
    Ok(OMatrix::<T, Dyn, Dyn>::from_fn(m, m, |row, col| {
        if row == 0 {
            -coeffs[col + 1] / a0
        } else if row == col + 1 {
            T::one()
        } else {
            T::zero()
        }
    }))
}
