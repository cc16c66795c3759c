//! # pricer_pricing: Cache-Aside Pricing Orchestration
//!
//! Wraps the closed-form engine in a cache-aside protocol against a
//! [`KvStore`](infra_store::KvStore): derive a canonical key from the
//! request terms, return the cached quote on a hit, otherwise compute,
//! store with a TTL, and return. The returned quote carries a `cached`
//! flag; the stored copy never does.
//!
//! The cache is strictly an optimisation. Every store failure is logged and
//! absorbed (fail-open): a request is always answered from the engine if
//! the cache cannot help. No cross-request coordination is attempted —
//! concurrent misses for one key each compute and write the same value,
//! and last write wins.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]

mod cache_aside;
pub mod key;

pub use cache_aside::{CachedPricer, PricedQuote};
