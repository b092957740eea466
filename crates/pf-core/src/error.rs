use thiserror::Error;

pub type PfResult<T> = Result<T, PfError>;

#[derive(Error, Debug)]
pub enum PfError {
    #[error("Non-finite numeric value for {what}: {value}")]
    NonFinite { what: &'static str, value: f64 },

    #[error("Invalid argument: {what}")]
    InvalidArg { what: &'static str },

    #[error("No root bracketed: {what}")]
    NoBracket { what: &'static str },

    #[error("Convergence failed: {what}")]
    ConvergenceFailed { what: &'static str },

    #[error("Invariant violated: {what}")]
    Invariant { what: &'static str },
}
