use num_traits::{FromPrimitive, NumCast, One, Pow, ToPrimitive, Zero};

use crate::dual::DualNumber;
use crate::error::Result;
use crate::float::Float;
use crate::operand::Operand;

impl<F: Float> Zero for DualNumber<F> {
    #[inline]
    fn zero() -> Self {
        DualNumber::constant(F::zero())
    }
    /// Both components must be zero.
    #[inline]
    fn is_zero(&self) -> bool {
        self.real.is_zero() && self.dual.is_zero()
    }
}

impl<F: Float> One for DualNumber<F> {
    #[inline]
    fn one() -> Self {
        DualNumber::constant(F::one())
    }
}

impl<F: Float> FromPrimitive for DualNumber<F> {
    #[inline]
    fn from_i64(n: i64) -> Option<Self> {
        F::from_i64(n).map(DualNumber::constant)
    }
    #[inline]
    fn from_u64(n: u64) -> Option<Self> {
        F::from_u64(n).map(DualNumber::constant)
    }
    #[inline]
    fn from_f32(n: f32) -> Option<Self> {
        F::from_f32(n).map(DualNumber::constant)
    }
    #[inline]
    fn from_f64(n: f64) -> Option<Self> {
        F::from_f64(n).map(DualNumber::constant)
    }
}

impl<F: Float> ToPrimitive for DualNumber<F> {
    #[inline]
    fn to_i64(&self) -> Option<i64> {
        self.real.to_i64()
    }
    #[inline]
    fn to_u64(&self) -> Option<u64> {
        self.real.to_u64()
    }
    #[inline]
    fn to_f32(&self) -> Option<f32> {
        self.real.to_f32()
    }
    #[inline]
    fn to_f64(&self) -> Option<f64> {
        self.real.to_f64()
    }
}

impl<F: Float> NumCast for DualNumber<F> {
    #[inline]
    fn from<T: ToPrimitive>(n: T) -> Option<Self> {
        <F as NumCast>::from(n).map(DualNumber::constant)
    }
}

// ──────────────────────────────────────────────
//  Pow: all three operand combinations
// ──────────────────────────────────────────────

impl<F: Float> Pow<F> for DualNumber<F> {
    type Output = Result<DualNumber<F>>;
    #[inline]
    fn pow(self, rhs: F) -> Self::Output {
        self.powf(rhs)
    }
}

impl<F: Float> Pow<DualNumber<F>> for DualNumber<F> {
    type Output = Result<DualNumber<F>>;
    #[inline]
    fn pow(self, rhs: DualNumber<F>) -> Self::Output {
        self.powd(rhs)
    }
}

macro_rules! impl_scalar_pow_dual {
    ($f:ty) => {
        impl Pow<DualNumber<$f>> for $f {
            type Output = Result<DualNumber<$f>>;
            #[inline]
            fn pow(self, rhs: DualNumber<$f>) -> Self::Output {
                rhs.rpow(Operand::Scalar(self))
            }
        }
    };
}

impl_scalar_pow_dual!(f32);
impl_scalar_pow_dual!(f64);
