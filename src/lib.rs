//! Forward-mode automatic differentiation with dual numbers.
//!
//! A [`DualNumber`] carries a value and its derivative. Arithmetic and the
//! elementary functions propagate both at once, so evaluating a function on
//! the seed `DualNumber::variable(x)` yields `f(x)` and `f'(x)` exactly.
//!
//! ```
//! use dual_autodiff::{derivative, DualNumber64};
//!
//! // f(x) = sin(x)·x + 3, f'(x) = cos(x)·x + sin(x)
//! let d = derivative(|x: DualNumber64| x.sin() * x + 3.0, 0.5);
//! assert!((d - (0.5_f64.cos() * 0.5 + 0.5_f64.sin())).abs() < 1e-15);
//! ```

pub mod api;
pub mod dual;
pub mod error;
pub mod float;
pub mod operand;
mod traits;

#[cfg(feature = "parallel")]
pub use api::par_derivatives;
pub use api::{
    central_difference, cos_derivative, derivative, derivatives, exp_derivative, log_derivative,
    sin_derivative, tan_derivative, try_derivative, try_value_and_derivative,
    value_and_derivative,
};
pub use dual::DualNumber;
pub use error::{DualError, Result};
pub use float::Float;
pub use operand::{BinaryOp, Operand};

/// Type alias for dual numbers over `f64`.
pub type DualNumber64 = DualNumber<f64>;
/// Type alias for dual numbers over `f32`.
pub type DualNumber32 = DualNumber<f32>;
