use std::fmt::{self, Display};

use crate::error::{DualError, Result};
use crate::operand::Operand;
use crate::Float;

/// Forward-mode dual number: a value paired with its tangent (derivative).
///
/// `DualNumber { real, dual }` represents `real + dual·ε` where `ε² = 0`.
/// Every operation returns a fresh value; a `DualNumber` is never normalised,
/// so reading back the fields yields exactly what was stored.
///
/// Equality is structural over both components.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct DualNumber<F: Float> {
    /// Primal (real) value.
    pub real: F,
    /// Tangent (dual) value.
    pub dual: F,
}

impl<F: Float> Display for DualNumber<F> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} + {}ε", self.real, self.dual)
    }
}

impl<F: Float> From<F> for DualNumber<F> {
    #[inline]
    fn from(real: F) -> Self {
        DualNumber::constant(real)
    }
}

impl<F: Float> DualNumber<F> {
    /// Create a new dual number.
    #[inline]
    pub fn new(real: F, dual: F) -> Self {
        DualNumber { real, dual }
    }

    /// Create a constant (zero derivative).
    #[inline]
    pub fn constant(real: F) -> Self {
        DualNumber {
            real,
            dual: F::zero(),
        }
    }

    /// Create a seed value (unit derivative) for differentiation.
    #[inline]
    pub fn variable(real: F) -> Self {
        DualNumber {
            real,
            dual: F::one(),
        }
    }

    /// Apply the chain rule: given `f(self.real)` and `f'(self.real)`, produce the dual result.
    #[inline]
    fn chain(self, f_val: F, f_deriv: F) -> Self {
        DualNumber {
            real: f_val,
            dual: self.dual * f_deriv,
        }
    }

    // ── Powers ──

    #[inline]
    pub fn recip(self) -> Self {
        DualNumber::constant(F::one()) / self
    }

    /// Integer power. Defined for every base, including negative ones.
    ///
    /// `x^0` is the constant one for every base, zero included.
    #[inline]
    pub fn powi(self, n: i32) -> Self {
        if n == 0 {
            return DualNumber::constant(F::one());
        }
        let nf = F::from(n).unwrap_or_else(F::nan);
        DualNumber {
            real: self.real.powi(n),
            dual: nf * self.dual * self.real.powi(n.saturating_sub(1)),
        }
    }

    /// `self ** n` for a plain scalar exponent.
    ///
    /// `(a + bε)^n = a^n + n·b·a^(n−1)ε`.
    ///
    /// # Errors
    ///
    /// [`DualError::Domain`] if the base is negative and `n` is not an integer.
    pub fn powf(self, n: F) -> Result<Self> {
        let (a, b) = (self.real, self.dual);
        if a < F::zero() && !n.is_integral() {
            return Err(DualError::domain(
                "pow",
                format!("real part of base cannot be negative for a non-integer exponent (base {a}, exponent {n})"),
            ));
        }
        if n == F::zero() {
            return Ok(DualNumber::constant(F::one()));
        }
        Ok(DualNumber {
            real: a.powf(n),
            dual: n * b * a.powf(n - F::one()),
        })
    }

    /// `self ** exponent` where both sides carry a tangent.
    ///
    /// `(a + bε)^(c + dε) = a^c + a^(c−1)·(b·c + a·d·ln a)ε`.
    ///
    /// ```
    /// use dual_autodiff::DualNumber;
    ///
    /// let p = DualNumber::new(1.0_f64, 2.0).powd(DualNumber::new(3.0, 4.0)).unwrap();
    /// assert_eq!(p, DualNumber::new(1.0, 6.0));
    /// ```
    ///
    /// # Errors
    ///
    /// [`DualError::Domain`] if the real part of the base is negative.
    pub fn powd(self, exponent: Self) -> Result<Self> {
        let (a, b) = (self.real, self.dual);
        let (c, d) = (exponent.real, exponent.dual);
        if a < F::zero() {
            return Err(DualError::domain(
                "pow",
                format!("real part of base cannot be negative (got {a})"),
            ));
        }
        if c == F::zero() && d == F::zero() {
            return Ok(DualNumber::constant(F::one()));
        }
        // A constant exponent drops the ln term, so a zero base with c > 0 stays finite.
        let spread = if d == F::zero() {
            b * c
        } else {
            b * c + a * d * a.ln()
        };
        Ok(DualNumber {
            real: a.powf(c),
            dual: a.powf(c - F::one()) * spread,
        })
    }

    /// `base ** self`: the reversed power path, with `self` as the exponent.
    ///
    /// `base^(a + bε) = base^a + base^a·b·ln(base)ε`.
    ///
    /// Only plain-number bases are accepted here. A dual base raised to a dual
    /// exponent goes through [`powd`](Self::powd) instead.
    ///
    /// # Errors
    ///
    /// - [`DualError::UnsupportedOperand`] if `base` is an [`Operand::Dual`].
    /// - [`DualError::Domain`] if `base` is negative.
    pub fn rpow(self, base: impl Into<Operand<F>>) -> Result<Self> {
        let base = match base.into() {
            Operand::Scalar(base) => base,
            other => {
                return Err(DualError::UnsupportedOperand {
                    operation: "pow",
                    operand: other.kind(),
                })
            }
        };
        if base < F::zero() {
            return Err(DualError::domain(
                "pow",
                format!("base cannot be negative when the exponent is a dual number (got {base})"),
            ));
        }
        let real = base.powf(self.real);
        Ok(DualNumber {
            real,
            dual: real * self.dual * base.ln(),
        })
    }

    // ── Exp/Log ──

    #[inline]
    pub fn exp(self) -> Self {
        let e = self.real.exp();
        self.chain(e, e)
    }

    /// Natural logarithm: `ln(a) + (b/a)ε`.
    ///
    /// # Errors
    ///
    /// [`DualError::Domain`] unless the real part is strictly positive.
    pub fn log(self) -> Result<Self> {
        if !(self.real > F::zero()) {
            return Err(DualError::domain(
                "log",
                format!("argument to ln must be positive (got {})", self.real),
            ));
        }
        Ok(DualNumber {
            real: self.real.ln(),
            dual: self.dual / self.real,
        })
    }

    // ── Trig ──

    #[inline]
    pub fn sin(self) -> Self {
        self.chain(self.real.sin(), self.real.cos())
    }

    #[inline]
    pub fn cos(self) -> Self {
        self.chain(self.real.cos(), -self.real.sin())
    }

    #[inline]
    pub fn tan(self) -> Self {
        let c = self.real.cos();
        self.chain(self.real.tan(), F::one() / (c * c))
    }
}
