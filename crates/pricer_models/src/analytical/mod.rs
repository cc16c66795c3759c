//! Closed-form pricing with analytical Greeks.
//!
//! Pure, stateless functions from validated terms to a [`Quote`]. No module
//! here performs IO or holds mutable state, so everything is trivially safe
//! to call from concurrent tasks.

pub mod black_scholes;
pub mod distributions;
pub mod forward;

mod quote;

pub use quote::Quote;
