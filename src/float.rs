use std::fmt::{Debug, Display};

use num_traits::{Float as NumFloat, FloatConst, FromPrimitive};

/// Primitive floating-point types that can back a [`DualNumber`](crate::DualNumber).
///
/// Implemented for `f32` and `f64` only. The dual number itself does not
/// implement this trait: its logarithm and power are fallible, so it cannot
/// stand in for a plain float.
pub trait Float:
    NumFloat + FloatConst + FromPrimitive + Copy + Send + Sync + Default + Debug + Display + 'static
{
    /// `true` when the value has no fractional part.
    #[inline]
    fn is_integral(self) -> bool {
        self.is_finite() && self.fract() == Self::zero()
    }
}

impl Float for f32 {}
impl Float for f64 {}
