//! # pricer_models: Instruments and Closed-Form Pricing
//!
//! Leaf crate of the pricing service. Provides:
//! - Validated instrument terms: `ForwardTerms`, `EuropeanTerms` (`instruments`)
//! - Closed-form pricing with analytical Greeks (`analytical`)
//! - Error types: `InstrumentError` (`instruments::error`)
//!
//! ## Validation at Construction
//!
//! Domain constraints (non-negative spot, strike, and maturity; recognised
//! option type) are enforced once, when a terms value is constructed. The
//! pricing functions in `analytical` are total over constructed terms: they
//! hold no state, perform no IO, and cannot fail.
//!
//! ## Usage
//!
//! ```rust
//! use pricer_models::instruments::{EuropeanTerms, ForwardTerms, OptionType};
//! use pricer_models::analytical;
//!
//! let forward = ForwardTerms::new(100.0, 95.0, 0.02, 0.5).unwrap();
//! let quote = analytical::forward::price(&forward);
//! assert!((quote.price - 5.9452658).abs() < 1e-6);
//! assert_eq!(quote.delta, 1.0);
//!
//! let option = EuropeanTerms::new(100.0, 95.0, 0.02, 0.2, 0.5, OptionType::Call).unwrap();
//! let quote = analytical::black_scholes::price(&option);
//! assert!(quote.price > 5.0); // worth at least intrinsic
//! ```

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]

pub mod analytical;
pub mod instruments;

pub use analytical::Quote;
pub use instruments::{EuropeanTerms, ForwardTerms, InstrumentError, OptionType};
