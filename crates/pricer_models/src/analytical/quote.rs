//! Pricing output type.

use serde::{Deserialize, Serialize};

/// Fair value and first-order sensitivities of an instrument.
///
/// This is the full engine output: the cache layer serialises it verbatim,
/// and the transport layer decorates it with a hit/miss flag. It therefore
/// deliberately carries no caching metadata.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Quote {
    /// Fair value of the instrument. Never negative.
    pub price: f64,
    /// Sensitivity of price to the spot: d(price)/d(S0).
    pub delta: f64,
    /// Sensitivity of price to volatility: d(price)/d(sigma).
    pub vega: f64,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn serialises_without_extra_fields() {
        let quote = Quote {
            price: 5.94,
            delta: 1.0,
            vega: 0.0,
        };
        let json = serde_json::to_value(&quote).unwrap();
        let object = json.as_object().unwrap();
        assert_eq!(object.len(), 3);
        assert!(object.contains_key("price"));
        assert!(object.contains_key("delta"));
        assert!(object.contains_key("vega"));
    }
}
