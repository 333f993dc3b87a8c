//! Error types raised while configuring the recommendation scorer.
#![forbid(unsafe_code)]

use thiserror::Error;

/// Errors raised when validating [`ScoreWeights`](crate::ScoreWeights).
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ScorerError {
    /// A weight was negative, infinite or `NaN`.
    #[error("weight {field} must be finite and non-negative, got {value}")]
    InvalidWeight {
        /// Name of the offending field.
        field: &'static str,
        /// Value that failed validation.
        value: f64,
    },
    /// Individually valid weights combine into an infinite score bound.
    #[error("weights overflow {bound}: the combined maximum is {value}")]
    UnboundedScore {
        /// Name of the bound that overflowed.
        bound: &'static str,
        /// Value the bound evaluated to.
        value: f64,
    },
}
