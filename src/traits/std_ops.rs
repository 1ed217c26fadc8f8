use std::iter::{Product, Sum};
use std::ops::{Add, AddAssign, Div, DivAssign, Mul, MulAssign, Neg, Sub, SubAssign};

use crate::dual::DualNumber;
use crate::float::Float;

// ──────────────────────────────────────────────
//  DualNumber<F> ∘ DualNumber<F>
// ──────────────────────────────────────────────

impl<F: Float> Add for DualNumber<F> {
    type Output = Self;
    #[inline]
    fn add(self, rhs: Self) -> Self {
        DualNumber {
            real: self.real + rhs.real,
            dual: self.dual + rhs.dual,
        }
    }
}

impl<F: Float> Sub for DualNumber<F> {
    type Output = Self;
    #[inline]
    fn sub(self, rhs: Self) -> Self {
        DualNumber {
            real: self.real - rhs.real,
            dual: self.dual - rhs.dual,
        }
    }
}

impl<F: Float> Mul for DualNumber<F> {
    type Output = Self;
    #[inline]
    fn mul(self, rhs: Self) -> Self {
        DualNumber {
            real: self.real * rhs.real,
            dual: self.real * rhs.dual + self.dual * rhs.real,
        }
    }
}

impl<F: Float> Div for DualNumber<F> {
    type Output = Self;
    #[inline]
    fn div(self, rhs: Self) -> Self {
        // (a + bε) / (c + dε) = a/c + (b·c − a·d)/c² ε
        DualNumber {
            real: self.real / rhs.real,
            dual: (self.dual * rhs.real - self.real * rhs.dual) / (rhs.real * rhs.real),
        }
    }
}

impl<F: Float> Neg for DualNumber<F> {
    type Output = Self;
    #[inline]
    fn neg(self) -> Self {
        DualNumber {
            real: -self.real,
            dual: -self.dual,
        }
    }
}

impl<F: Float> AddAssign for DualNumber<F> {
    #[inline]
    fn add_assign(&mut self, rhs: Self) {
        *self = *self + rhs;
    }
}

impl<F: Float> SubAssign for DualNumber<F> {
    #[inline]
    fn sub_assign(&mut self, rhs: Self) {
        *self = *self - rhs;
    }
}

impl<F: Float> MulAssign for DualNumber<F> {
    #[inline]
    fn mul_assign(&mut self, rhs: Self) {
        *self = *self * rhs;
    }
}

impl<F: Float> DivAssign for DualNumber<F> {
    #[inline]
    fn div_assign(&mut self, rhs: Self) {
        *self = *self / rhs;
    }
}

impl<F: Float> Sum for DualNumber<F> {
    fn sum<I: Iterator<Item = Self>>(iter: I) -> Self {
        iter.fold(DualNumber::constant(F::zero()), Add::add)
    }
}

impl<'a, F: Float> Sum<&'a DualNumber<F>> for DualNumber<F> {
    fn sum<I: Iterator<Item = &'a Self>>(iter: I) -> Self {
        iter.copied().sum()
    }
}

impl<F: Float> Product for DualNumber<F> {
    fn product<I: Iterator<Item = Self>>(iter: I) -> Self {
        iter.fold(DualNumber::constant(F::one()), Mul::mul)
    }
}

impl<'a, F: Float> Product<&'a DualNumber<F>> for DualNumber<F> {
    fn product<I: Iterator<Item = &'a Self>>(iter: I) -> Self {
        iter.copied().product()
    }
}

// Mixed ops: DualNumber<F> with primitive floats, in both operand orders.
// The scalar is lifted to a constant first, so `s ∘ d` is exactly
// `DualNumber::constant(s) ∘ d` and subtraction/division keep the written order.
macro_rules! impl_dual_scalar_ops {
    (@binary $f:ty, $op:ident, $method:ident, $op_assign:ident, $method_assign:ident) => {
        impl $op<$f> for DualNumber<$f> {
            type Output = DualNumber<$f>;
            #[inline]
            fn $method(self, rhs: $f) -> DualNumber<$f> {
                self.$method(DualNumber::constant(rhs))
            }
        }

        impl $op<DualNumber<$f>> for $f {
            type Output = DualNumber<$f>;
            #[inline]
            fn $method(self, rhs: DualNumber<$f>) -> DualNumber<$f> {
                DualNumber::constant(self).$method(rhs)
            }
        }

        impl $op_assign<$f> for DualNumber<$f> {
            #[inline]
            fn $method_assign(&mut self, rhs: $f) {
                *self = (*self).$method(rhs);
            }
        }
    };
    ($f:ty) => {
        impl_dual_scalar_ops!(@binary $f, Add, add, AddAssign, add_assign);
        impl_dual_scalar_ops!(@binary $f, Sub, sub, SubAssign, sub_assign);
        impl_dual_scalar_ops!(@binary $f, Mul, mul, MulAssign, mul_assign);
        impl_dual_scalar_ops!(@binary $f, Div, div, DivAssign, div_assign);
    };
}

impl_dual_scalar_ops!(f32);
impl_dual_scalar_ops!(f64);
