//! European option terms.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use super::error::InstrumentError;

/// Exercise side of a European option.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OptionType {
    /// Right to buy the underlying at the strike.
    Call,
    /// Right to sell the underlying at the strike.
    Put,
}

impl OptionType {
    /// Returns the canonical wire literal (`"call"` or `"put"`).
    #[inline]
    pub fn as_str(&self) -> &'static str {
        match self {
            OptionType::Call => "call",
            OptionType::Put => "put",
        }
    }

    /// Returns whether this is a call.
    #[inline]
    pub fn is_call(&self) -> bool {
        matches!(self, OptionType::Call)
    }
}

impl FromStr for OptionType {
    type Err = InstrumentError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "call" => Ok(OptionType::Call),
            "put" => Ok(OptionType::Put),
            other => Err(InstrumentError::InvalidOptionType {
                value: other.to_string(),
            }),
        }
    }
}

impl fmt::Display for OptionType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Terms of a European option on a non-dividend-paying underlying.
///
/// Volatility is accepted for any real value: `sigma <= 0` prices as the
/// deterministic zero-volatility limit rather than being rejected (see
/// [`crate::analytical::black_scholes`]).
///
/// # Examples
/// ```
/// use pricer_models::instruments::{EuropeanTerms, OptionType};
///
/// let terms = EuropeanTerms::new(100.0, 95.0, 0.02, 0.2, 0.5, OptionType::Call);
/// assert!(terms.is_ok());
///
/// assert!(EuropeanTerms::new(-1.0, 95.0, 0.02, 0.2, 0.5, OptionType::Call).is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct EuropeanTerms {
    spot: f64,
    strike: f64,
    rate: f64,
    volatility: f64,
    expiry: f64,
    option_type: OptionType,
}

impl EuropeanTerms {
    /// Creates validated European option terms.
    ///
    /// # Arguments
    /// * `spot` - Current spot price S0 (must be non-negative)
    /// * `strike` - Strike price K (must be non-negative)
    /// * `rate` - Continuously compounded risk-free rate r (any real)
    /// * `volatility` - Annualised volatility sigma (any real; non-positive
    ///   values price as the deterministic limit)
    /// * `expiry` - Time to maturity T in years (must be non-negative)
    /// * `option_type` - Call or Put
    ///
    /// # Errors
    /// `InstrumentError` when `spot`, `strike`, or `expiry` is negative.
    pub fn new(
        spot: f64,
        strike: f64,
        rate: f64,
        volatility: f64,
        expiry: f64,
        option_type: OptionType,
    ) -> Result<Self, InstrumentError> {
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
            volatility,
            expiry,
            option_type,
        })
    }

    /// Returns the spot price S0.
    #[inline]
    pub fn spot(&self) -> f64 {
        self.spot
    }

    /// Returns the strike price K.
    #[inline]
    pub fn strike(&self) -> f64 {
        self.strike
    }

    /// Returns the risk-free rate r.
    #[inline]
    pub fn rate(&self) -> f64 {
        self.rate
    }

    /// Returns the annualised volatility sigma.
    #[inline]
    pub fn volatility(&self) -> f64 {
        self.volatility
    }

    /// Returns the time to maturity T in years.
    #[inline]
    pub fn expiry(&self) -> f64 {
        self.expiry
    }

    /// Returns the option type.
    #[inline]
    pub fn option_type(&self) -> OptionType {
        self.option_type
    }
}
