//! Get-or-compute-and-set orchestration.

use std::sync::Arc;
use std::time::Duration;

use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use infra_store::KvStore;
use pricer_models::analytical::{black_scholes, forward, Quote};
use pricer_models::instruments::{EuropeanTerms, ForwardTerms};

use crate::key;

/// A quote decorated with cache provenance.
///
/// `cached` is set exclusively by this layer: `true` when the numbers came
/// out of the store, `false` when the engine was invoked.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PricedQuote {
    /// Fair value of the instrument.
    pub price: f64,
    /// Sensitivity of price to the spot.
    pub delta: f64,
    /// Sensitivity of price to volatility.
    pub vega: f64,
    /// Whether this quote was served from the store.
    pub cached: bool,
}

impl PricedQuote {
    fn from_quote(quote: Quote, cached: bool) -> Self {
        Self {
            price: quote.price,
            delta: quote.delta,
            vega: quote.vega,
            cached,
        }
    }
}

/// Cache-aside wrapper around the closed-form engine.
///
/// Holds the injected store handle and the write TTL; itself stateless
/// beyond that, so one instance serves all concurrent requests.
///
/// # Examples
/// ```
/// use std::sync::Arc;
/// use infra_store::MemoryStore;
/// use pricer_models::instruments::ForwardTerms;
/// use pricer_pricing::CachedPricer;
///
/// # tokio_test::block_on(async {
/// let pricer = CachedPricer::new(Arc::new(MemoryStore::new()));
/// let terms = ForwardTerms::new(100.0, 95.0, 0.02, 0.5).unwrap();
///
/// let first = pricer.forward(&terms).await;
/// let second = pricer.forward(&terms).await;
/// assert!(!first.cached);
/// assert!(second.cached);
/// assert_eq!(first.price, second.price);
/// # });
/// ```
pub struct CachedPricer {
    store: Arc<dyn KvStore>,
    ttl: Duration,
}

impl CachedPricer {
    /// Fixed TTL policy for cached quotes.
    pub const DEFAULT_TTL: Duration = Duration::from_secs(60);

    /// Creates a pricer over the given store with the default 60 s TTL.
    pub fn new(store: Arc<dyn KvStore>) -> Self {
        Self {
            store,
            ttl: Self::DEFAULT_TTL,
        }
    }

    /// Overrides the TTL (used by configuration and tests).
    pub fn with_ttl(mut self, ttl: Duration) -> Self {
        self.ttl = ttl;
        self
    }

    /// Prices a forward contract through the cache.
    pub async fn forward(&self, terms: &ForwardTerms) -> PricedQuote {
        let cache_key = key::forward(terms);
        self.get_or_compute(&cache_key, || forward::price(terms))
            .await
    }

    /// Prices a European option through the cache.
    pub async fn european(&self, terms: &EuropeanTerms) -> PricedQuote {
        let cache_key = key::european(terms);
        self.get_or_compute(&cache_key, || black_scholes::price(terms))
            .await
    }

    /// The cache-aside protocol: lookup, else compute and store.
    ///
    /// Fail-open throughout: a failed lookup, a failed write, and an
    /// undecodable cached payload all degrade to computing the quote
    /// directly. `compute` is pure and cheap, so no single-flight
    /// deduplication is attempted for concurrent misses.
    async fn get_or_compute<F>(&self, cache_key: &str, compute: F) -> PricedQuote
    where
        F: FnOnce() -> Quote,
    {
        match self.store.get(cache_key).await {
            Ok(Some(raw)) => match serde_json::from_str::<Quote>(&raw) {
                Ok(quote) => {
                    debug!(key = cache_key, "cache hit");
                    return PricedQuote::from_quote(quote, true);
                }
                Err(error) => {
                    warn!(key = cache_key, %error, "undecodable cache entry, recomputing");
                }
            },
            Ok(None) => debug!(key = cache_key, "cache miss"),
            Err(error) => {
                warn!(key = cache_key, %error, "cache lookup failed, pricing without cache");
            }
        }

        let quote = compute();

        match serde_json::to_string(&quote) {
            Ok(raw) => {
                if let Err(error) = self.store.set(cache_key, &raw, self.ttl).await {
                    warn!(key = cache_key, %error, "cache store failed");
                }
            }
            Err(error) => warn!(key = cache_key, %error, "quote not serialisable for cache"),
        }

        PricedQuote::from_quote(quote, false)
    }
}
