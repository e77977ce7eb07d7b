use crate::kernel::ConfigError;
use alloc::vec::Vec;
use lfilt_core::Result;
use nalgebra::RealField;

/// Validate the feedback vector `a` and return its leading coefficient.
pub(crate) fn leading_feedback<F>(a: &[F]) -> core::result::Result<F, ConfigError>
where
    F: RealField + Copy,
{
    match a.first() {
        None => Err(ConfigError::EmptyInput { arg: "a" }),
        Some(a0) if a0.is_zero() => Err(ConfigError::InvalidCoefficients {
            arg: "a",
            reason: "First element of a found to be zero.",
        }),
        Some(&a0) => Ok(a0),
    }
}

pub(crate) fn normalize_checked<F>(
    b: &[F],
    a: &[F],
) -> core::result::Result<(Vec<F>, Vec<F>), ConfigError>
where
    F: RealField + Copy,
{
    let a0 = leading_feedback(a)?;
    if b.is_empty() {
        return Err(ConfigError::EmptyInput { arg: "b" });
    }
    // Divide even when a[0] == 1; x / 1 is exact so the common case is unchanged.
    let b = b.iter().map(|&bi| bi / a0).collect(); // b /= a[0]
    let a = a.iter().map(|&ai| ai / a0).collect(); // a /= a[0]
    Ok((b, a))
}

/// Normalize filter coefficients so that the leading feedback coefficient is one.
///
/// ## Parameters
/// * `b` : The numerator (feedforward) coefficient vector, `J + 1` long.
/// * `a` : The denominator (feedback) coefficient vector, `L + 1` long.
///
/// ## Returns
/// `(b / a[0], a / a[0])`, in that order.
///
/// ## Errors
/// [`lfilt_core::Error::InvalidCoefficients`] when `a` is empty, `a[0]` is zero, or `b` is
/// empty.
///
/// # Examples
/// ```
/// use lfilt::signal::filter::normalize;
///
/// let (b, a) = normalize(&[2.0f64, 1.0], &[4.0, 2.0, 1.0]).unwrap();
/// assert_eq!(b, vec![0.5, 0.25]);
/// assert_eq!(a, vec![1.0, 0.5, 0.25]);
///
/// assert!(normalize(&[1.0f64], &[0.0, 1.0]).is_err());
/// ```
pub fn normalize<F>(b: &[F], a: &[F]) -> Result<(Vec<F>, Vec<F>)>
where
    F: RealField + Copy,
{
    Ok(normalize_checked(b, a)?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloc::vec;
    use lfilt_core::Error;

    #[test]
    fn unit_leading_coefficient_is_unchanged() {
        let b = [0.2928932188134524f64, 0.5857864376269049, 0.2928932188134524];
        let a = [1.0f64, 0.0, 0.1715728752538099];
        let (nb, na) = normalize(&b, &a).expect("valid coefficients");
        assert_eq!(nb, b.to_vec());
        assert_eq!(na, a.to_vec());
    }

    #[test]
    fn scales_both_vectors_by_leading_feedback() {
        let (b, a) = normalize(&[1.0f64, -3.0], &[-2.0f64, 1.0, 0.5]).expect("valid coefficients");
        assert_eq!(b, vec![-0.5, 1.5]);
        assert_eq!(a, vec![1.0, -0.5, -0.25]);
    }

    #[test]
    fn rejects_empty_and_zero_leading_feedback() {
        let err = normalize::<f64>(&[1.0], &[]).expect_err("empty a must fail");
        assert!(matches!(err, Error::InvalidCoefficients { ref arg, .. } if arg == "a"));

        let err = normalize(&[1.0f64], &[0.0, 0.5]).expect_err("a[0] == 0 must fail");
        assert_eq!(
            err,
            Error::InvalidCoefficients {
                arg: "a".into(),
                reason: "First element of a found to be zero.".into(),
            }
        );

        let err = normalize(&[1.0f64], &[-0.0, 0.5]).expect_err("a[0] == -0 must fail");
        assert!(matches!(err, Error::InvalidCoefficients { ref arg, .. } if arg == "a"));
    }

    #[test]
    fn rejects_empty_feedforward() {
        let err = normalize::<f32>(&[], &[1.0]).expect_err("empty b must fail");
        assert!(matches!(err, Error::InvalidCoefficients { ref arg, .. } if arg == "b"));
    }
}
