use super::normalize::leading_feedback;
use crate::linalg::companion_dyn;
use alloc::vec::Vec;
use lfilt_core::Result;
use nalgebra::{Complex, RealField};

/// Poles of the filter with feedback coefficients `a`.
///
/// The poles are the roots of `a[0]*z^L + a[1]*z^(L-1) + ... + a[L]`, found as the eigenvalues
/// of its companion matrix. A filter with `a.len() == 1` has no poles.
///
/// # Examples
/// ```
/// use lfilt::signal::filter::poles_dyn;
///
/// let poles = poles_dyn(&[2.0f64, -1.0]).unwrap();
/// assert_eq!(poles.len(), 1);
/// assert!((poles[0].re - 0.5).abs() < 1e-12);
/// assert!(poles_dyn(&[1.0f64]).unwrap().is_empty());
/// ```
pub fn poles_dyn<F>(a: &[F]) -> Result<Vec<Complex<F>>>
where
    F: RealField + Copy,
{
    leading_feedback(a)?;
    if a.len() < 2 {
        return Ok(Vec::new());
    }
    let companion = companion_dyn(a)?;
    Ok(companion.complex_eigenvalues().iter().copied().collect())
}

/// Whether every pole of the filter lies strictly inside the unit circle.
///
/// Unstable feedback still evaluates, but the output grows without bound (or oscillates forever
/// for poles on the circle) for almost any input.
pub fn is_stable<F>(a: &[F]) -> Result<bool>
where
    F: RealField + Copy,
{
    Ok(poles_dyn(a)?
        .iter()
        .all(|p| p.re * p.re + p.im * p.im < F::one()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use lfilt_core::Error;

    #[test]
    fn real_and_complex_poles() {
        let poles = poles_dyn(&[1.0f64, -0.5]).expect("valid");
        assert_eq!(poles.len(), 1);
        assert_relative_eq!(poles[0].re, 0.5, epsilon = 1e-12);
        assert_relative_eq!(poles[0].im, 0.0, epsilon = 1e-12);

        // z^2 + 0.25 has roots +-0.5j.
        let mut poles = poles_dyn(&[1.0f64, 0.0, 0.25]).expect("valid");
        poles.sort_by(|p, q| p.im.total_cmp(&q.im));
        assert_relative_eq!(poles[0].re, 0.0, epsilon = 1e-12);
        assert_relative_eq!(poles[0].im, -0.5, epsilon = 1e-12);
        assert_relative_eq!(poles[1].re, 0.0, epsilon = 1e-12);
        assert_relative_eq!(poles[1].im, 0.5, epsilon = 1e-12);

        // (z - 2)(z - 3)(z - 5), scaled.
        let mut poles = poles_dyn(&[2.0f64, -20.0, 62.0, -60.0]).expect("valid");
        poles.sort_by(|p, q| p.re.total_cmp(&q.re));
        for (p, root) in poles.iter().zip([2.0, 3.0, 5.0]) {
            assert_relative_eq!(p.re, root, epsilon = 1e-9);
            assert_relative_eq!(p.im, 0.0, epsilon = 1e-9);
        }
    }

    #[test]
    fn leading_coefficient_is_divided_out() {
        let poles = poles_dyn(&[2.0f64, -1.0]).expect("valid");
        assert_eq!(poles.len(), 1);
        assert_relative_eq!(poles[0].re, 0.5, epsilon = 1e-12);
        assert_relative_eq!(poles[0].im, 0.0, epsilon = 1e-12);
        assert!(poles_dyn(&[3.0f64]).expect("valid").is_empty());
    }

    #[test]
    fn stability() {
        assert!(is_stable(&[1.0f64]).expect("valid"));
        assert!(is_stable(&[1.0f64, -0.5]).expect("valid"));
        assert!(is_stable(&[1.0f64, 0.0, 0.1715728752538099]).expect("valid"));
        assert!(is_stable(&[4.0f64, 0.0, 1.0]).expect("valid"));

        assert!(!is_stable(&[1.0f64, -1.0]).expect("valid"));
        assert!(!is_stable(&[1.0f64, -2.0]).expect("valid"));
        assert!(!is_stable(&[1.0f64, 0.0, 1.5]).expect("valid"));
    }

    #[test]
    fn invalid_feedback() {
        let err = poles_dyn::<f64>(&[]).expect_err("empty a");
        assert!(matches!(err, Error::InvalidCoefficients { ref arg, .. } if arg == "a"));
        assert!(is_stable(&[0.0f64, 1.0]).is_err());
    }
}
