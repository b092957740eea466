//! Error types for system evaluation.

use pf_catalog::CatalogError;
use pf_hydraulics::HydraulicError;
use thiserror::Error;

/// Result type for system operations.
pub type SystemResult<T> = Result<T, SystemError>;

/// Errors that can occur while evaluating a pumping system.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum SystemError {
    /// Loss/NPSH layer failure (invalid input, unresolvable reference).
    #[error(transparent)]
    Hydraulic(#[from] HydraulicError),

    /// Pipe or fitting lookup failure during configuration.
    #[error(transparent)]
    Catalog(#[from] CatalogError),

    /// Configuration rejected before any math ran.
    #[error("Invalid configuration: {what}")]
    InvalidConfig { what: &'static str },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn hydraulic_errors_pass_through() {
        let err: SystemError = HydraulicError::InvalidInput {
            what: "inner diameter must be positive",
        }
        .into();
        assert!(err.to_string().contains("diameter"));
    }
}
