use super::normalize::normalize_checked;
use alloc::{vec, vec::Vec};
use core::borrow::Borrow;
use lfilt_core::Result;
use log::trace;
use nalgebra::RealField;
use ndarray::{Array1, ArrayBase, ArrayView1, Data, Ix1};

/// Evaluate the difference equation with already normalized coefficients into `y`.
///
/// `b` must be non-empty, `a[0]` must be one and `y.len() == x.len()`. Every sample of `y` is
/// overwritten.
///
/// For each `n` the feedforward sum over `x[n], x[n-1], ..` and the feedback sum over
/// `y[n-1], y[n-2], ..` are accumulated separately in ascending coefficient order, then
/// `y[n] = ff - fb`. Samples before index 0 are zero, which is realised by shrinking both windows
/// to `min(J, n)` and `min(L, n)` instead of padding.
pub(crate) fn lfilter_normalized_into<F>(b: &[F], a: &[F], x: &[F], y: &mut [F])
where
    F: RealField + Copy,
{
    debug_assert!(!b.is_empty() && !a.is_empty());
    debug_assert_eq!(x.len(), y.len());
    let j = b.len() - 1;
    let l = a.len() - 1;

    for n in 0..x.len() {
        let jn = j.min(n);
        let ln = l.min(n);

        let ff = b[..=jn]
            .iter()
            .zip(x[n - jn..=n].iter().rev())
            .fold(F::zero(), |acc, (&bi, &xi)| acc + bi * xi);
        let fb = a[1..1 + ln]
            .iter()
            .zip(y[n - ln..n].iter().rev())
            .fold(F::zero(), |acc, (&ai, &yi)| acc + ai * yi);

        y[n] = ff - fb;
    }
}

pub(crate) fn lfilter_normalized<F>(b: &[F], a: &[F], x: &[F]) -> Vec<F>
where
    F: RealField + Copy,
{
    let mut y = vec![F::zero(); x.len()];
    lfilter_normalized_into(b, a, x, &mut y);
    y
}

/// Filter a data sequence with an IIR or FIR filter given as coefficient slices.
///
/// Evaluates, for every sample `n` of `x`,
///
/// ```text
/// y[n] = b[0]*x[n] + b[1]*x[n-1] + ... + b[J]*x[n-J]
///                  - a[1]*y[n-1] - ... - a[L]*y[n-L]
/// ```
///
/// after dividing `b` and `a` by `a[0]`. Samples before the start of `x` are taken as zero
/// (initial rest).
///
/// ## Parameters
/// * `b` : The numerator coefficient vector.
/// * `a` : The denominator coefficient vector. If `a[0]` is not 1, then both `a` and `b` are
///   normalized by `a[0]`.
/// * `x` : The input signal.
///
/// ## Returns
/// * `y` : The output of the digital filter, as long as `x`. An empty `x` gives an empty `y`.
///
/// ## Errors
/// [`lfilt_core::Error::InvalidCoefficients`] when `a` is empty, `a[0]` is zero, or `b` is
/// empty.
///
/// # Examples
/// ```
/// use lfilt::signal::filter::lfilter_checked_slice;
///
/// let b = [1.0, 0.25];
/// let a = [1.0, 0.5, 0.25];
/// let x = [1.0, 2.0, 3.0, 4.0, 5.0];
/// let y = lfilter_checked_slice(&b, &a, &x).unwrap();
/// assert_eq!(y, vec![1.0, 1.75, 2.375, 3.125, 3.84375]);
/// ```
pub fn lfilter_checked_slice<F>(b: &[F], a: &[F], x: &[F]) -> Result<Vec<F>>
where
    F: RealField + Copy,
{
    let (b, a) = normalize_checked(b, a)?;
    trace!(
        "lfilter: {} samples, feedforward order {}, feedback order {}",
        x.len(),
        b.len() - 1,
        a.len() - 1
    );
    Ok(lfilter_normalized(&b, &a, x))
}

/// Filter samples from an iterator with an IIR or FIR filter.
///
/// Same semantics as [`lfilter_checked_slice`]; the iterator is drained into a buffer first since
/// every output sample reads back into the input window.
///
/// # Examples
/// ```
/// use lfilt::signal::filter::lfilter_dyn;
///
/// let x = [1.0f32, 0.0, 0.0, 0.0];
/// let y = lfilter_dyn(x.iter(), &[1.0], &[1.0, -0.5]).unwrap();
/// assert_eq!(y, vec![1.0, 0.5, 0.25, 0.125]);
/// ```
pub fn lfilter_dyn<I, B, F>(x: I, b: &[F], a: &[F]) -> Result<Vec<F>>
where
    I: Iterator<Item = B>,
    B: Borrow<F>,
    F: RealField + Copy,
{
    let (b, a) = normalize_checked(b, a)?;
    let x = x.map(|xi| *xi.borrow()).collect::<Vec<_>>();
    Ok(lfilter_normalized(&b, &a, &x))
}

/// Filter 1-dimensional data `x` with an IIR or FIR filter.
///
/// Filter a data sequence, `x`, using a digital filter. The filter is a direct evaluation of the
/// standard difference equation:
///
/// ```text
/// a[0]*y[n] = b[0]*x[n] + b[1]*x[n-1] + ... + b[M]*x[n-M]
///                       - a[1]*y[n-1] - ... - a[N]*y[n-N]
/// ```
///
/// ## Parameters
/// * `b` : array_like
///   The numerator coefficient vector in a 1-D sequence.
/// * `a` : array_like
///   The denominator coefficient vector in a 1-D sequence.  If ``a[0]``
///   is not 1, then both `a` and `b` are normalized by ``a[0]``.
/// * `x` : array_like
///   A 1-dimensional input array. Strided and reversed views are read in logical order.
///
/// ## Returns
/// * `y` : array
///   The output of the digital filter.
///
/// # Notes
/// Filtering starts from rest; there is no way to pass initial conditions.
///
/// # Examples
/// ```
/// use ndarray::array;
/// use lfilt::signal::filter::lfilter;
///
/// let b = array![5., 4., 1., 2.];
/// let a = array![1.];
/// let x = array![1., 2., 3., 4., 3., 5., 6.];
/// let expected = array![5., 14., 24., 36., 38., 47., 61.];
/// let result = lfilter(b.view(), a.view(), x.view()).unwrap(); // By ref
/// assert_eq!(result, expected);
///
/// let result = lfilter(b.view(), a.view(), x).unwrap(); // By value
/// assert_eq!(result, expected);
/// ```
pub fn lfilter<F, S>(
    b: ArrayView1<'_, F>,
    a: ArrayView1<'_, F>,
    x: ArrayBase<S, Ix1>,
) -> Result<Array1<F>>
where
    F: RealField + Copy,
    S: Data<Elem = F>,
{
    let (b, a) = normalize_checked(&b.to_vec(), &a.to_vec())?;
    let y = match x.as_slice() {
        Some(x) => lfilter_normalized(&b, &a, x),
        None => lfilter_normalized(&b, &a, &x.to_vec()),
    };
    Ok(Array1::from_vec(y))
}
