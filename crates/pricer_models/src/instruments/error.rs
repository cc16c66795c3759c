//! Error types for instrument construction.

use thiserror::Error;

/// Instrument validation errors.
///
/// Every variant corresponds to a domain constraint checked when terms are
/// constructed. These are always client faults: the caller supplied a
/// parameter outside the documented domain.
///
/// # Examples
/// ```
/// use pricer_models::instruments::{ForwardTerms, InstrumentError};
///
/// let err = ForwardTerms::new(-10.0, 95.0, 0.02, 0.5).unwrap_err();
/// assert_eq!(err, InstrumentError::InvalidSpot { spot: -10.0 });
/// ```
#[derive(Debug, Clone, Error, PartialEq)]
pub enum InstrumentError {
    /// Negative spot price.
    #[error("invalid spot price: S0 = {spot} (must be non-negative)")]
    InvalidSpot {
        /// The offending spot value
        spot: f64,
    },

    /// Negative strike / delivery price.
    #[error("invalid strike: K = {strike} (must be non-negative)")]
    InvalidStrike {
        /// The offending strike value
        strike: f64,
    },

    /// Negative time to maturity.
    #[error("invalid expiry: T = {expiry} (must be non-negative)")]
    InvalidExpiry {
        /// The offending expiry value
        expiry: f64,
    },

    /// Unrecognised option type literal.
    #[error("invalid option type: {value:?} (must be \"call\" or \"put\")")]
    InvalidOptionType {
        /// The offending literal
        value: String,
    },
}
