//! pf-core: stable foundation for pulpflow.
//!
//! Contains:
//! - units (uom SI types + constructors)
//! - numeric (Real + tolerances + interpolation + bounded root finders)
//! - error (shared error types)

pub mod error;
pub mod numeric;
pub mod units;

// Re-exports: nice ergonomics for downstream crates
pub use error::{PfError, PfResult};
pub use numeric::*;
pub use units::*;
