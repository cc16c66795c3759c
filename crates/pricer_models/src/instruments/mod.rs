//! Instrument term definitions.
//!
//! Terms are validated at construction: a value of one of these types is the
//! proof that the domain constraints hold, so downstream pricing never
//! re-checks them.

mod error;
mod european;
mod forward;

pub use error::InstrumentError;
pub use european::{EuropeanTerms, OptionType};
pub use forward::ForwardTerms;
