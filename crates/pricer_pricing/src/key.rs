//! Canonical cache key derivation.
//!
//! Key format: `"<instrument_prefix>:<canonical_json>"` where the JSON
//! object holds the request fields with keys in sorted (byte-lexicographic)
//! order, e.g.
//!
//! ```text
//! forward:{"K":95.0,"S0":100.0,"T":0.5,"r":0.02}
//! ```
//!
//! Sorting makes the key independent of field construction order, so
//! structurally equal requests map to byte-identical keys. This is a
//! memoization key, not a security token: readability is preferred over
//! hashing.

use serde_json::{Map, Value};

use pricer_models::instruments::{EuropeanTerms, ForwardTerms};

/// Prefix for forward contract keys.
pub const FORWARD_PREFIX: &str = "forward";

/// Prefix for European option keys.
pub const EUROPEAN_PREFIX: &str = "european";

fn render(prefix: &str, fields: &[(&str, Value)]) -> String {
    let mut object = Map::new();
    // Inserted in sorted order so the output is canonical regardless of the
    // map's backing representation
    for (name, value) in fields {
        object.insert((*name).to_string(), value.clone());
    }
    format!("{}:{}", prefix, Value::Object(object))
}

/// Derives the canonical key for a forward pricing request.
pub fn forward(terms: &ForwardTerms) -> String {
    render(
        FORWARD_PREFIX,
        &[
            ("K", terms.strike().into()),
            ("S0", terms.spot().into()),
            ("T", terms.expiry().into()),
            ("r", terms.rate().into()),
        ],
    )
}

/// Derives the canonical key for a European option pricing request.
pub fn european(terms: &EuropeanTerms) -> String {
    render(
        EUROPEAN_PREFIX,
        &[
            ("K", terms.strike().into()),
            ("S0", terms.spot().into()),
            ("T", terms.expiry().into()),
            ("r", terms.rate().into()),
            ("sigma", terms.volatility().into()),
            ("type", terms.option_type().as_str().into()),
        ],
    )
}
