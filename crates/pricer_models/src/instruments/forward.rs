//! Forward contract terms.

use super::error::InstrumentError;

/// Terms of a (long) forward contract on a non-dividend-paying underlying.
///
/// A forward is a linear instrument with fair value `S0 - K*exp(-r*T)`;
/// it carries unit spot sensitivity and no volatility sensitivity.
///
/// # Examples
/// ```
/// use pricer_models::instruments::ForwardTerms;
///
/// let terms = ForwardTerms::new(100.0, 95.0, 0.02, 0.5);
/// assert!(terms.is_ok());
///
/// // Negative maturity is rejected
/// assert!(ForwardTerms::new(100.0, 95.0, 0.02, -0.5).is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ForwardTerms {
    spot: f64,
    strike: f64,
    rate: f64,
    expiry: f64,
}

impl ForwardTerms {
    /// Creates validated forward terms.
    ///
    /// # Arguments
    /// * `spot` - Current spot price S0 (must be non-negative)
    /// * `strike` - Delivery price K (must be non-negative)
    /// * `rate` - Continuously compounded risk-free rate r (any real)
    /// * `expiry` - Time to maturity T in years (must be non-negative)
    ///
    /// # Errors
    /// `InstrumentError` when `spot`, `strike`, or `expiry` is negative.
    pub fn new(spot: f64, strike: f64, rate: f64, expiry: f64) -> Result<Self, InstrumentError> {
        if spot < 0.0 {
            return Err(InstrumentError::InvalidSpot { spot });
        }
        if strike < 0.0 {
            return Err(InstrumentError::InvalidStrike { strike });
        }
        if expiry < 0.0 {
            return Err(InstrumentError::InvalidExpiry { expiry });
        }

        Ok(Self {
            spot,
            strike,
            rate,
            expiry,
        })
    }

    /// Returns the spot price S0.
    #[inline]
    pub fn spot(&self) -> f64 {
        self.spot
    }

    /// Returns the delivery price K.
    #[inline]
    pub fn strike(&self) -> f64 {
        self.strike
    }

    /// Returns the risk-free rate r.
    #[inline]
    pub fn rate(&self) -> f64 {
        self.rate
    }

    /// Returns the time to maturity T in years.
    #[inline]
    pub fn expiry(&self) -> f64 {
        self.expiry
    }
}
