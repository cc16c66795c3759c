//! Forward contract pricing.
//!
//! A forward on a non-dividend-paying underlying has the closed form
//! `V0 = S0 - K * exp(-r * T)` with constant Greeks: unit delta (the
//! position moves one-for-one with spot) and zero vega (no optionality,
//! no volatility sensitivity).

use crate::analytical::Quote;
use crate::instruments::ForwardTerms;

/// Prices a long forward contract.
///
/// # Examples
/// ```
/// use pricer_models::analytical::forward;
/// use pricer_models::instruments::ForwardTerms;
///
/// let terms = ForwardTerms::new(100.0, 95.0, 0.02, 0.5).unwrap();
/// let quote = forward::price(&terms);
/// assert!((quote.price - 5.9452658).abs() < 1e-6);
/// assert_eq!(quote.delta, 1.0);
/// assert_eq!(quote.vega, 0.0);
/// ```
pub fn price(terms: &ForwardTerms) -> Quote {
    let discounted_strike = terms.strike() * (-terms.rate() * terms.expiry()).exp();

    Quote {
        price: terms.spot() - discounted_strike,
        delta: 1.0,
        vega: 0.0,
    }
}
