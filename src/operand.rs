//! Operands and binary operations with explicit scalar coercion.
//!
//! The operator impls resolve `DualNumber × scalar` statically. When the kind
//! of each operand is only known at run time (an expression evaluator, a
//! benchmark table driven by data), wrap the values in [`Operand`] and let
//! [`BinaryOp::apply`] do the coercion: a scalar operand becomes a constant
//! `DualNumber(s, 0)` before the dual rule is applied, on either side.

use std::fmt::{self, Display};

use crate::dual::DualNumber;
use crate::error::{DualError, Result};
use crate::Float;

/// A plain scalar or a dual number.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Operand<F: Float> {
    Scalar(F),
    Dual(DualNumber<F>),
}

impl<F: Float> Operand<F> {
    /// Lift to a dual number; scalars become constants with zero tangent.
    #[inline]
    pub fn coerce(self) -> DualNumber<F> {
        match self {
            Operand::Scalar(s) => DualNumber::constant(s),
            Operand::Dual(d) => d,
        }
    }

    /// Type name used in error messages.
    pub fn kind(&self) -> &'static str {
        match self {
            Operand::Scalar(_) => "scalar",
            Operand::Dual(_) => "DualNumber",
        }
    }
}

impl<F: Float> From<DualNumber<F>> for Operand<F> {
    #[inline]
    fn from(d: DualNumber<F>) -> Self {
        Operand::Dual(d)
    }
}

macro_rules! impl_operand_from_scalar {
    ($f:ty) => {
        impl From<$f> for Operand<$f> {
            #[inline]
            fn from(s: $f) -> Self {
                Operand::Scalar(s)
            }
        }
    };
}

impl_operand_from_scalar!(f32);
impl_operand_from_scalar!(f64);

impl<F: Float> Display for Operand<F> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Operand::Scalar(s) => write!(f, "{s}"),
            Operand::Dual(d) => write!(f, "{d}"),
        }
    }
}

/// Binary operations supported between operands.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum BinaryOp {
    Add,
    Sub,
    Mul,
    Div,
    /// Exponentiation, `lhs ** rhs`.
    Pow,
}

impl BinaryOp {
    pub const ALL: [BinaryOp; 5] = [
        BinaryOp::Add,
        BinaryOp::Sub,
        BinaryOp::Mul,
        BinaryOp::Div,
        BinaryOp::Pow,
    ];

    pub fn symbol(self) -> &'static str {
        match self {
            BinaryOp::Add => "+",
            BinaryOp::Sub => "-",
            BinaryOp::Mul => "*",
            BinaryOp::Div => "/",
            BinaryOp::Pow => "**",
        }
    }

    /// Evaluate `lhs op rhs` in the written order.
    ///
    /// Two scalars stay a scalar. Any combination involving a dual number
    /// produces a dual number. `Pow` with a dual base uses the forward power
    /// path; a scalar base with a dual exponent uses the reversed path.
    ///
    /// ```
    /// use dual_autodiff::{BinaryOp, DualNumber, Operand};
    ///
    /// let d = DualNumber::new(1.0_f64, 2.0);
    /// let r = BinaryOp::Sub.apply(5.0, d).unwrap();
    /// assert_eq!(r, Operand::Dual(DualNumber::new(4.0, -2.0)));
    /// ```
    ///
    /// # Errors
    ///
    /// Propagates the domain errors of the power operations.
    pub fn apply<F: Float>(
        self,
        lhs: impl Into<Operand<F>>,
        rhs: impl Into<Operand<F>>,
    ) -> Result<Operand<F>> {
        let value = match (self, lhs.into(), rhs.into()) {
            (op, Operand::Scalar(x), Operand::Scalar(y)) => {
                return op.apply_scalar(x, y).map(Operand::Scalar)
            }
            (BinaryOp::Pow, Operand::Dual(base), Operand::Dual(exponent)) => base.powd(exponent)?,
            (BinaryOp::Pow, Operand::Dual(base), Operand::Scalar(n)) => base.powf(n)?,
            (BinaryOp::Pow, base, Operand::Dual(exponent)) => exponent.rpow(base)?,
            (BinaryOp::Add, lhs, rhs) => lhs.coerce() + rhs.coerce(),
            (BinaryOp::Sub, lhs, rhs) => lhs.coerce() - rhs.coerce(),
            (BinaryOp::Mul, lhs, rhs) => lhs.coerce() * rhs.coerce(),
            (BinaryOp::Div, lhs, rhs) => lhs.coerce() / rhs.coerce(),
        };
        Ok(Operand::Dual(value))
    }

    fn apply_scalar<F: Float>(self, x: F, y: F) -> Result<F> {
        Ok(match self {
            BinaryOp::Add => x + y,
            BinaryOp::Sub => x - y,
            BinaryOp::Mul => x * y,
            BinaryOp::Div => x / y,
            BinaryOp::Pow => {
                if x < F::zero() && !y.is_integral() {
                    return Err(DualError::domain(
                        "pow",
                        format!("negative base with a non-integer exponent (base {x}, exponent {y})"),
                    ));
                }
                x.powf(y)
            }
        })
    }
}

impl Display for BinaryOp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.symbol())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn scalar_operands_stay_scalar() {
        let r = BinaryOp::Mul.apply(3.0_f64, 4.0).unwrap();
        assert_eq!(r, Operand::Scalar(12.0));
        let p = BinaryOp::Pow.apply(2.0_f64, 10.0).unwrap();
        assert_eq!(p, Operand::Scalar(1024.0));
    }

    #[test]
    fn scalar_is_coerced_on_either_side() {
        let d = DualNumber::new(3.0_f64, 4.0);
        for op in [BinaryOp::Add, BinaryOp::Sub, BinaryOp::Mul, BinaryOp::Div] {
            let left = op.apply(2.0, d).unwrap().coerce();
            let left_coerced = op.apply(DualNumber::constant(2.0), d).unwrap().coerce();
            assert_eq!(left, left_coerced, "2 {op} d");

            let right = op.apply(d, 2.0).unwrap().coerce();
            let right_coerced = op.apply(d, DualNumber::constant(2.0)).unwrap().coerce();
            assert_eq!(right, right_coerced, "d {op} 2");
        }
    }

    #[test]
    fn pow_routes_by_operand_kind() {
        let base = DualNumber::new(1.0_f64, 2.0);
        let exponent = DualNumber::new(3.0_f64, 4.0);

        let dd = BinaryOp::Pow.apply(base, exponent).unwrap();
        assert_eq!(dd, Operand::Dual(DualNumber::new(1.0, 6.0)));

        let ds = BinaryOp::Pow.apply(base, 2.0).unwrap();
        assert_eq!(ds, Operand::Dual(DualNumber::new(1.0, 4.0)));

        let sd = BinaryOp::Pow.apply(2.0, DualNumber::new(1.0_f64, 2.0)).unwrap();
        assert_eq!(
            sd,
            Operand::Dual(DualNumber::new(2.0, 4.0 * 2.0_f64.ln()))
        );
    }

    #[test]
    fn scalar_pow_of_negative_base() {
        assert_eq!(
            BinaryOp::Pow.apply(-2.0_f64, 3.0).unwrap(),
            Operand::Scalar(-8.0)
        );
        let err = BinaryOp::Pow.apply(-2.0_f64, 0.5).unwrap_err();
        assert!(err.is_domain());
    }

    #[test]
    fn zero_exponent_through_dispatch() {
        let x = DualNumber::variable(0.0_f64);
        let one = Operand::Dual(DualNumber::new(1.0, 0.0));
        assert_eq!(BinaryOp::Pow.apply(x, 0.0).unwrap(), one);
        assert_eq!(BinaryOp::Pow.apply(x, DualNumber::constant(0.0)).unwrap(), one);
        assert_eq!(BinaryOp::Pow.apply(0.0_f64, 0.0).unwrap(), Operand::Scalar(1.0));
    }

    #[test]
    fn kind_and_display() {
        let s: Operand<f64> = 1.5.into();
        let d: Operand<f64> = DualNumber::new(1.0, 2.0).into();
        assert_eq!(s.kind(), "scalar");
        assert_eq!(d.kind(), "DualNumber");
        assert_eq!(format!("{s}"), "1.5");
        assert_eq!(format!("{d}"), "1 + 2ε");
        assert_eq!(format!("{}", BinaryOp::Pow), "**");
    }
}
