//! Error type for operations whose mathematical precondition can fail.
//!
//! Only two operations are partial: exponentiation (negative bases) and the
//! natural logarithm (non-positive arguments). Everything else is total.

use thiserror::Error;

/// Failure of a dual-number operation.
///
/// # Examples
/// ```
/// use dual_autodiff::{DualError, DualNumber};
///
/// let err = DualNumber::new(0.0_f64, 1.0).log().unwrap_err();
/// assert!(matches!(err, DualError::Domain { operation: "log", .. }));
/// assert_eq!(
///     err.to_string(),
///     "domain error in log: argument to ln must be positive (got 0)"
/// );
/// ```
#[derive(Clone, Debug, PartialEq, Error)]
pub enum DualError {
    /// The operation's mathematical precondition was violated.
    #[error("domain error in {operation}: {reason}")]
    Domain {
        /// Operation that rejected its input.
        operation: &'static str,
        /// Human-readable description, including the offending value.
        reason: String,
    },

    /// The reversed power path received a base that is not a plain number.
    #[error("unsupported operand type for {operation}: {operand}")]
    UnsupportedOperand {
        /// Operation that rejected its operand.
        operation: &'static str,
        /// Kind of the rejected operand.
        operand: &'static str,
    },
}

impl DualError {
    pub(crate) fn domain(operation: &'static str, reason: impl Into<String>) -> Self {
        DualError::Domain {
            operation,
            reason: reason.into(),
        }
    }

    /// `true` for [`DualError::Domain`].
    pub fn is_domain(&self) -> bool {
        matches!(self, DualError::Domain { .. })
    }
}

/// Result alias used throughout the crate.
pub type Result<T> = std::result::Result<T, DualError>;
