//! Black-Scholes pricing for European options on a non-dividend underlying.
//!
//! ## Formulas
//!
//! **Call**: C = S0*N(d1) - K*e^(-rT)*N(d2), delta = N(d1)
//! **Put** (via put-call parity): P = C - S0 + K*e^(-rT), delta = N(d1) - 1
//! **Vega** (both types): S0*sqrt(T)*phi(d1)
//!
//! Where:
//! - d1 = (ln(S0/K) + (r + sigma^2/2)*T) / (sigma*sqrt(T))
//! - d2 = d1 - sigma*sqrt(T)
//!
//! ## Degenerate inputs (permissive policy)
//!
//! Rather than rejecting them, two families of degenerate but meaningful
//! inputs are priced as their closed-form limits:
//!
//! - `T == 0`: the option is at maturity; price is the intrinsic payoff,
//!   delta is the payoff slope (0.5 exactly at the strike), vega is 0.
//! - `sigma <= 0` with `T > 0`: the underlying is deterministic; the option
//!   is worth the positive part of the discounted forward `S0 - K*e^(-rT)`,
//!   with a 0/±1 delta by its sign and zero vega.
//!
//! `S0 == 0` or `K == 0` collapse `ln(S0/K)` to ∓infinity; `norm_cdf`
//! absorbs the infinite d1/d2, so the worthless-call / sure-call limits fall
//! out of the core formula without special cases.

use crate::analytical::distributions::{norm_cdf, norm_pdf};
use crate::analytical::Quote;
use crate::instruments::{EuropeanTerms, OptionType};

/// Prices a European option and its delta/vega.
///
/// Total over validated terms: every input accepted by
/// [`EuropeanTerms::new`] produces a finite quote.
///
/// # Examples
/// ```
/// use pricer_models::analytical::black_scholes;
/// use pricer_models::instruments::{EuropeanTerms, OptionType};
///
/// let terms = EuropeanTerms::new(100.0, 100.0, 0.0, 0.2, 1.0, OptionType::Call).unwrap();
/// let quote = black_scholes::price(&terms);
/// // ATM, r = 0: the textbook value 7.9656
/// assert!((quote.price - 7.9656).abs() < 1e-3);
/// ```
pub fn price(terms: &EuropeanTerms) -> Quote {
    let spot = terms.spot();
    let strike = terms.strike();
    let expiry = terms.expiry();

    if expiry == 0.0 {
        return intrinsic_quote(spot, strike, terms.option_type());
    }

    let discounted_strike = strike * (-terms.rate() * expiry).exp();

    if terms.volatility() <= 0.0 {
        return deterministic_quote(spot, discounted_strike, terms.option_type());
    }

    let sqrt_expiry = expiry.sqrt();
    let vol_sqrt_expiry = terms.volatility() * sqrt_expiry;

    let log_moneyness = if spot > 0.0 && strike > 0.0 {
        (spot / strike).ln()
    } else if spot > 0.0 {
        // K = 0: a call is the stock, a put is worthless
        f64::INFINITY
    } else {
        // S0 = 0: ln(S0/K) -> -inf, the call is worthless, the put a sure strike
        f64::NEG_INFINITY
    };

    let drift = (terms.rate() + 0.5 * terms.volatility() * terms.volatility()) * expiry;
    let d1 = (log_moneyness + drift) / vol_sqrt_expiry;
    let d2 = d1 - vol_sqrt_expiry;

    let n_d1 = norm_cdf(d1);
    let n_d2 = norm_cdf(d2);

    let call_price = spot * n_d1 - discounted_strike * n_d2;

    let (price, delta) = match terms.option_type() {
        OptionType::Call => (call_price, n_d1),
        // P = C - S0 + K*e^(-rT)
        OptionType::Put => (call_price - spot + discounted_strike, n_d1 - 1.0),
    };

    Quote {
        // Guard against -0.0 / rounding dust deep out of the money
        price: price.max(0.0),
        delta,
        vega: spot * sqrt_expiry * norm_pdf(d1),
    }
}

/// Payoff at maturity (`T == 0`).
fn intrinsic_quote(spot: f64, strike: f64, option_type: OptionType) -> Quote {
    let (price, delta) = match option_type {
        OptionType::Call => {
            let delta = if spot > strike {
                1.0
            } else if spot < strike {
                0.0
            } else {
                0.5
            };
            ((spot - strike).max(0.0), delta)
        }
        OptionType::Put => {
            let delta = if spot < strike {
                -1.0
            } else if spot > strike {
                0.0
            } else {
                -0.5
            };
            ((strike - spot).max(0.0), delta)
        }
    };

    Quote {
        price,
        delta,
        vega: 0.0,
    }
}

/// Zero-volatility limit (`sigma <= 0`, `T > 0`): the terminal outcome is
/// deterministic, so the option is the positive part of the discounted
/// forward.
fn deterministic_quote(spot: f64, discounted_strike: f64, option_type: OptionType) -> Quote {
    let forward_value = spot - discounted_strike;

    let (price, delta) = match option_type {
        OptionType::Call => {
            let delta = if forward_value > 0.0 { 1.0 } else { 0.0 };
            (forward_value.max(0.0), delta)
        }
        OptionType::Put => {
            let delta = if forward_value < 0.0 { -1.0 } else { 0.0 };
            ((-forward_value).max(0.0), delta)
        }
    };

    Quote {
        price,
        delta,
        vega: 0.0,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    fn call(spot: f64, strike: f64, rate: f64, vol: f64, expiry: f64) -> Quote {
        let terms =
            EuropeanTerms::new(spot, strike, rate, vol, expiry, OptionType::Call).unwrap();
        price(&terms)
    }

    fn put(spot: f64, strike: f64, rate: f64, vol: f64, expiry: f64) -> Quote {
        let terms = EuropeanTerms::new(spot, strike, rate, vol, expiry, OptionType::Put).unwrap();
        price(&terms)
    }

    #[test]
    fn atm_call_matches_textbook_value() {
        // S0 = K = 100, r = 0, sigma = 0.2, T = 1:
        // price = 100 * (N(0.1) - N(-0.1)) = 7.9656, delta = N(0.1) = 0.5398
        let quote = call(100.0, 100.0, 0.0, 0.2, 1.0);
        assert_relative_eq!(quote.price, 7.965567, max_relative = 1e-5);
        assert_relative_eq!(quote.delta, 0.539828, max_relative = 1e-5);
        // vega = 100 * phi(0.1) = 39.6953
        assert_relative_eq!(quote.vega, 39.69525, max_relative = 1e-5);
    }

    #[test]
    fn put_call_parity_holds() {
        // C - P = S0 - K*exp(-rT), to floating-point precision
        let cases = [
            (100.0, 95.0, 0.02, 0.2, 0.5),
            (100.0, 105.0, 0.01, 0.25, 1.0),
            (50.0, 120.0, 0.05, 0.8, 2.0),
            (120.0, 50.0, -0.01, 0.1, 0.25),
        ];
        for (s0, k, r, sigma, t) in cases {
            let lhs = call(s0, k, r, sigma, t).price - put(s0, k, r, sigma, t).price;
            let rhs = s0 - k * (-r * t).exp();
            assert_relative_eq!(lhs, rhs, max_relative = 1e-9, epsilon = 1e-9);
        }
    }

    #[test]
    fn expiry_boundary_returns_intrinsic() {
        let itm = call(100.0, 95.0, 0.02, 0.2, 0.0);
        assert_eq!(itm.price, 5.0);
        assert_eq!(itm.delta, 1.0);
        assert_eq!(itm.vega, 0.0);

        let otm = call(90.0, 95.0, 0.02, 0.2, 0.0);
        assert_eq!(otm.price, 0.0);
        assert_eq!(otm.delta, 0.0);

        let atm = call(95.0, 95.0, 0.02, 0.2, 0.0);
        assert_eq!(atm.price, 0.0);
        assert_eq!(atm.delta, 0.5);

        let put_itm = put(90.0, 95.0, 0.02, 0.2, 0.0);
        assert_eq!(put_itm.price, 5.0);
        assert_eq!(put_itm.delta, -1.0);

        let put_atm = put(95.0, 95.0, 0.02, 0.2, 0.0);
        assert_eq!(put_atm.delta, -0.5);
    }

    #[test]
    fn zero_volatility_prices_discounted_forward() {
        // F = 100 - 95*exp(-0.01) = 5.9452658 > 0
        let itm = call(100.0, 95.0, 0.02, 0.0, 0.5);
        assert_relative_eq!(itm.price, 5.945265793829, max_relative = 1e-9);
        assert_eq!(itm.delta, 1.0);
        assert_eq!(itm.vega, 0.0);

        let otm = call(90.0, 95.0, 0.0, 0.0, 0.5);
        assert_eq!(otm.price, 0.0);
        assert_eq!(otm.delta, 0.0);

        let put_quote = put(90.0, 95.0, 0.0, -0.1, 0.5);
        assert_relative_eq!(put_quote.price, 5.0, max_relative = 1e-12);
        assert_eq!(put_quote.delta, -1.0);
    }

    #[test]
    fn zero_spot_call_is_worthless() {
        let quote = call(0.0, 95.0, 0.02, 0.2, 0.5);
        assert_eq!(quote.price, 0.0);
        assert_eq!(quote.delta, 0.0);
        assert_eq!(quote.vega, 0.0);
    }

    #[test]
    fn zero_spot_put_is_sure_strike() {
        let quote = put(0.0, 95.0, 0.02, 0.2, 0.5);
        // P = K*exp(-rT), delta = -1
        assert_relative_eq!(quote.price, 95.0 * (-0.01f64).exp(), max_relative = 1e-12);
        assert_eq!(quote.delta, -1.0);
    }

    #[test]
    fn zero_strike_call_is_the_stock() {
        let quote = call(100.0, 0.0, 0.02, 0.2, 0.5);
        assert_relative_eq!(quote.price, 100.0, max_relative = 1e-12);
        assert_eq!(quote.delta, 1.0);

        let put_quote = put(100.0, 0.0, 0.02, 0.2, 0.5);
        assert_eq!(put_quote.price, 0.0);
        assert_eq!(put_quote.delta, 0.0);
    }

    #[test]
    fn deep_tails_stay_in_bounds() {
        let deep_otm = call(10.0, 1000.0, 0.0, 0.1, 0.5);
        assert!(deep_otm.price >= 0.0);
        assert!(deep_otm.price < 1e-10);
        assert!(deep_otm.delta >= 0.0);

        let deep_itm = call(1000.0, 10.0, 0.0, 0.1, 0.5);
        assert_relative_eq!(deep_itm.price, 990.0, max_relative = 1e-9);
        assert_relative_eq!(deep_itm.delta, 1.0, max_relative = 1e-12);
    }

    #[test]
    fn vega_is_identical_for_call_and_put() {
        let c = call(100.0, 95.0, 0.02, 0.2, 0.5);
        let p = put(100.0, 95.0, 0.02, 0.2, 0.5);
        assert_eq!(c.vega, p.vega);
        assert!(c.vega > 0.0);
    }

    #[test]
    fn call_exceeds_intrinsic_before_maturity() {
        // With r >= 0 a European call is worth at least its intrinsic value
        let quote = call(100.0, 95.0, 0.02, 0.2, 0.5);
        assert!(quote.price > 5.0);
        assert!(quote.price < 100.0);
    }
}
