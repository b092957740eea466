//! Fluid and stock property errors.

use thiserror::Error;

/// Result type for fluid operations.
pub type FluidResult<T> = Result<T, FluidError>;

/// Errors that can occur during property calculations.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum FluidError {
    /// Unknown pulp grade key.
    #[error("Unknown pulp grade: {0}")]
    UnknownGrade(String),

    /// Value out of valid range.
    #[error("Value out of range for {what}")]
    OutOfRange { what: &'static str },

    /// Invalid argument.
    #[error("Invalid argument: {what}")]
    InvalidArg { what: &'static str },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn error_display() {
        let err = FluidError::UnknownGrade("mystery_pulp".into());
        assert!(err.to_string().contains("mystery_pulp"));

        let err = FluidError::OutOfRange { what: "temperature" };
        assert!(err.to_string().contains("temperature"));
    }
}
