//! Catalog lookup errors.

use crate::pipes::{PipeNorm, Schedule};
use thiserror::Error;

/// Result type for catalog operations.
pub type CatalogResult<T> = Result<T, CatalogError>;

/// Errors raised by catalog lookups.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum CatalogError {
    /// The norm/size/schedule combination has no table entry.
    #[error("No pipe for {norm} size {nominal} schedule {schedule}")]
    PipeNotFound {
        norm: PipeNorm,
        nominal: String,
        schedule: Schedule,
    },

    /// Unknown fitting identifier.
    #[error("Unknown fitting id: {id}")]
    FittingNotFound { id: String },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn error_display_names_the_combination() {
        let err = CatalogError::PipeNotFound {
            norm: PipeNorm::AnsiB36_10,
            nominal: "6".into(),
            schedule: Schedule::Sch10S,
        };
        let msg = err.to_string();
        assert!(msg.contains("ANSI_B36_10"));
        assert!(msg.contains("10S"));
    }
}
