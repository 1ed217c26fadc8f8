//! Derivative entry points.
//!
//! Each function seeds `DualNumber(x, 1)`, runs the caller's function on it and
//! reads the tangent of the result. No step size is involved, so the only
//! error is the rounding of the underlying float arithmetic.

use crate::dual::DualNumber;
use crate::error::Result;
use crate::float::Float;

/// Derivative of a scalar function at `x`.
///
/// ```
/// use dual_autodiff::{derivative, DualNumber};
///
/// let d = derivative(|x: DualNumber<f64>| 2.0 * x * x + 2.0 * x + 2.0, 1.0);
/// assert_eq!(d, 6.0);
/// ```
#[inline]
pub fn derivative<F: Float>(f: impl FnOnce(DualNumber<F>) -> DualNumber<F>, x: F) -> F {
    f(DualNumber::variable(x)).dual
}

/// Derivative of a function that may fail, e.g. one that takes a logarithm.
///
/// ```
/// use dual_autodiff::{try_derivative, DualNumber};
///
/// // d/dx ln(x²) = 2/x
/// let d = try_derivative(|x: DualNumber<f64>| x.powf(2.0)?.log(), 4.0).unwrap();
/// assert_eq!(d, 0.5);
///
/// assert!(try_derivative(DualNumber::log, -1.0).is_err());
/// ```
///
/// # Errors
///
/// Whatever `f` returns, typically [`DualError::Domain`](crate::DualError::Domain).
#[inline]
pub fn try_derivative<F: Float>(
    f: impl FnOnce(DualNumber<F>) -> Result<DualNumber<F>>,
    x: F,
) -> Result<F> {
    f(DualNumber::variable(x)).map(|y| y.dual)
}

/// Value and derivative of `f` at `x` in a single evaluation: `(f(x), f'(x))`.
#[inline]
pub fn value_and_derivative<F: Float>(
    f: impl FnOnce(DualNumber<F>) -> DualNumber<F>,
    x: F,
) -> (F, F) {
    let y = f(DualNumber::variable(x));
    (y.real, y.dual)
}

/// Fallible counterpart of [`value_and_derivative`].
///
/// # Errors
///
/// Whatever `f` returns.
#[inline]
pub fn try_value_and_derivative<F: Float>(
    f: impl FnOnce(DualNumber<F>) -> Result<DualNumber<F>>,
    x: F,
) -> Result<(F, F)> {
    f(DualNumber::variable(x)).map(|y| (y.real, y.dual))
}

/// Elementwise derivative of `f` at every point of `xs`.
pub fn derivatives<F: Float>(f: impl Fn(DualNumber<F>) -> DualNumber<F>, xs: &[F]) -> Vec<F> {
    xs.iter().map(|&x| derivative(&f, x)).collect()
}

/// Parallel [`derivatives`]; the result is identical to the serial version.
#[cfg(feature = "parallel")]
pub fn par_derivatives<F: Float>(
    f: impl Fn(DualNumber<F>) -> DualNumber<F> + Sync,
    xs: &[F],
) -> Vec<F> {
    use rayon::prelude::*;

    xs.par_iter().map(|&x| derivative(&f, x)).collect()
}

/// Central finite difference `(f(x+h) − f(x−h)) / 2h`.
///
/// The truncation-error baseline that dual numbers are compared against.
pub fn central_difference<F: Float>(f: impl Fn(F) -> F, x: F, h: F) -> F {
    (f(x + h) - f(x - h)) / (h + h)
}

// ── Per-function helpers ──

/// `d/dx sin(x)` at `x`.
#[inline]
pub fn sin_derivative<F: Float>(x: F) -> F {
    derivative(DualNumber::sin, x)
}

/// `d/dx cos(x)` at `x`.
#[inline]
pub fn cos_derivative<F: Float>(x: F) -> F {
    derivative(DualNumber::cos, x)
}

/// `d/dx tan(x)` at `x`.
#[inline]
pub fn tan_derivative<F: Float>(x: F) -> F {
    derivative(DualNumber::tan, x)
}

/// `d/dx ln(x)` at `x`.
///
/// # Errors
///
/// [`DualError::Domain`](crate::DualError::Domain) unless `x > 0`.
#[inline]
pub fn log_derivative<F: Float>(x: F) -> Result<F> {
    try_derivative(DualNumber::log, x)
}

/// `d/dx exp(x)` at `x`.
#[inline]
pub fn exp_derivative<F: Float>(x: F) -> F {
    derivative(DualNumber::exp, x)
}
