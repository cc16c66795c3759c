//! Property-based tests for the closed-form pricers.

use approx::assert_relative_eq;
use proptest::prelude::*;

use pricer_models::analytical::{black_scholes, forward};
use pricer_models::instruments::{EuropeanTerms, ForwardTerms, OptionType};

// Strike and spot in a realistic trading range
fn price_strategy() -> impl Strategy<Value = f64> {
    0.01..10_000.0f64
}

// Rates between -5% and +20%
fn rate_strategy() -> impl Strategy<Value = f64> {
    -0.05..0.20f64
}

// Strictly positive volatility for the diffusive branch
fn vol_strategy() -> impl Strategy<Value = f64> {
    0.001..2.0f64
}

// Maturities from one day to thirty years
fn expiry_strategy() -> impl Strategy<Value = f64> {
    0.003..30.0f64
}

fn call_terms(s0: f64, k: f64, r: f64, sigma: f64, t: f64) -> EuropeanTerms {
    EuropeanTerms::new(s0, k, r, sigma, t, OptionType::Call).unwrap()
}

fn put_terms(s0: f64, k: f64, r: f64, sigma: f64, t: f64) -> EuropeanTerms {
    EuropeanTerms::new(s0, k, r, sigma, t, OptionType::Put).unwrap()
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(500))]

    #[test]
    fn forward_identity(
        s0 in price_strategy(),
        k in price_strategy(),
        r in rate_strategy(),
        t in expiry_strategy(),
    ) {
        let terms = ForwardTerms::new(s0, k, r, t).unwrap();
        let quote = forward::price(&terms);

        assert_relative_eq!(
            quote.price,
            s0 - k * (-r * t).exp(),
            max_relative = 1e-12,
            epsilon = 1e-12
        );
        prop_assert_eq!(quote.delta, 1.0);
        prop_assert_eq!(quote.vega, 0.0);
    }

    #[test]
    fn put_call_parity(
        s0 in price_strategy(),
        k in price_strategy(),
        r in rate_strategy(),
        sigma in vol_strategy(),
        t in expiry_strategy(),
    ) {
        let call = black_scholes::price(&call_terms(s0, k, r, sigma, t));
        let put = black_scholes::price(&put_terms(s0, k, r, sigma, t));
        let parity = s0 - k * (-r * t).exp();

        // Relative to the price scale, not the (possibly tiny) difference
        let scale = s0.max(k).max(1.0);
        prop_assert!(((call.price - put.price) - parity).abs() <= 1e-9 * scale);
    }

    #[test]
    fn call_delta_in_unit_interval(
        s0 in price_strategy(),
        k in price_strategy(),
        r in rate_strategy(),
        sigma in vol_strategy(),
        t in expiry_strategy(),
    ) {
        let quote = black_scholes::price(&call_terms(s0, k, r, sigma, t));
        prop_assert!((0.0..=1.0).contains(&quote.delta));
    }

    #[test]
    fn put_delta_in_negative_unit_interval(
        s0 in price_strategy(),
        k in price_strategy(),
        r in rate_strategy(),
        sigma in vol_strategy(),
        t in expiry_strategy(),
    ) {
        let quote = black_scholes::price(&put_terms(s0, k, r, sigma, t));
        prop_assert!((-1.0..=0.0).contains(&quote.delta));
    }

    #[test]
    fn vega_is_non_negative(
        s0 in price_strategy(),
        k in price_strategy(),
        r in rate_strategy(),
        sigma in vol_strategy(),
        t in expiry_strategy(),
    ) {
        let quote = black_scholes::price(&call_terms(s0, k, r, sigma, t));
        prop_assert!(quote.vega >= 0.0);
    }

    #[test]
    fn option_price_is_never_negative(
        s0 in price_strategy(),
        k in price_strategy(),
        r in rate_strategy(),
        sigma in vol_strategy(),
        t in expiry_strategy(),
    ) {
        prop_assert!(black_scholes::price(&call_terms(s0, k, r, sigma, t)).price >= 0.0);
        prop_assert!(black_scholes::price(&put_terms(s0, k, r, sigma, t)).price >= 0.0);
    }

    #[test]
    fn call_price_non_decreasing_in_spot(
        s0 in price_strategy(),
        bump in 0.01..100.0f64,
        k in price_strategy(),
        r in rate_strategy(),
        sigma in vol_strategy(),
        t in expiry_strategy(),
    ) {
        let low = black_scholes::price(&call_terms(s0, k, r, sigma, t));
        let high = black_scholes::price(&call_terms(s0 + bump, k, r, sigma, t));
        // Allow rounding noise at the price scale
        prop_assert!(high.price >= low.price - 1e-9 * (s0 + bump));
    }
}
