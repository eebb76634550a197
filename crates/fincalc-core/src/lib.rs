//! Personal finance calculations with decimal precision.
//!
//! Every function is pure: the same inputs always give the same result, and
//! nothing is read from or written to the environment.

pub mod currency;
pub mod error;
pub mod inflation;
pub mod math;
pub mod types;

#[cfg(feature = "sip")]
pub mod sip;

#[cfg(feature = "tax")]
pub mod tax;

#[cfg(feature = "budget")]
pub mod budget;

pub use error::FinCalcError;
pub use types::*;

/// Standard result type for all fincalc operations
pub type FinCalcResult<T> = Result<T, FinCalcError>;
