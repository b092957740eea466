//! pf-catalog: pipe and fitting reference catalogs for pulpflow.
//!
//! Resolves nominal pipe sizes to real geometry (ANSI B36.10 carbon steel,
//! ANSI B36.19 stainless, PVC schedule 40/80) and fitting identifiers to
//! minor-loss coefficients (K or L/D). Unresolvable combinations fail with
//! a `NotFound`-class error rather than substituting a silent default —
//! downstream hydraulics depend on real geometry.

pub mod error;
pub mod fittings;
pub mod pipes;

pub use error::{CatalogError, CatalogResult};
pub use fittings::{
    contraction_k, equivalent_length, equivalent_length_from_k, expansion_k, fitting,
    resolve_k, total_k, FittingCategory, FittingEntry, FittingInstance, VariableK,
    K_FROM_LD_FRICTION,
};
pub use pipes::{
    available_schedules, available_sizes, resolve_pipe, roughness_default_mm, PipeDimensions,
    PipeNorm, Schedule,
};
