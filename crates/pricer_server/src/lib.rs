//! REST API server for the closedform pricing service.
//!
//! Exposes the cache-aside pricing layer over HTTP:
//! - `POST /price/forward` - forward contract price and Greeks
//! - `POST /price/european-option` - European option price and Greeks
//! - `GET /health`, `GET /ready` - service monitoring
//!
//! The transport layer owns no pricing logic: request bodies are mapped into
//! validated instrument terms, handed to
//! [`CachedPricer`](pricer_pricing::CachedPricer), and the resulting quote is
//! relayed back as JSON. Validation failures map to 400; everything else the
//! framework maps to a generic failure response.

pub mod config;
pub mod routes;
pub mod server;

/// Server version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
