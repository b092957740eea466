//! Error types for hydraulic calculations.

use pf_catalog::CatalogError;
use pf_fluids::FluidError;
use thiserror::Error;

/// Result type for hydraulic operations.
pub type HydraulicResult<T> = Result<T, HydraulicError>;

/// Errors that can occur during loss and NPSH calculations.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum HydraulicError {
    /// Bad caller input (non-positive diameter, negative flow, …).
    /// Callers must correct the input; retrying is pointless.
    #[error("Invalid input: {what}")]
    InvalidInput { what: &'static str },

    /// A computed quantity left the finite range.
    #[error("Non-physical value: {what}")]
    NonPhysical { what: &'static str },

    /// Unresolvable pipe or fitting reference.
    #[error(transparent)]
    Catalog(#[from] CatalogError),

    /// Property-layer failure.
    #[error(transparent)]
    Fluid(#[from] FluidError),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn error_display() {
        let err = HydraulicError::InvalidInput {
            what: "inner diameter must be positive",
        };
        assert!(err.to_string().contains("diameter"));
    }

    #[test]
    fn catalog_errors_convert() {
        let err: HydraulicError = CatalogError::FittingNotFound { id: "x".into() }.into();
        assert!(matches!(err, HydraulicError::Catalog(_)));
    }
}
