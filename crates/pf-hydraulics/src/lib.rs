//! pf-hydraulics: loss, NPSH and pump-curve calculations for pulpflow.
//!
//! Provides:
//! - Reynolds number and Colebrook-White/Swamee-Jain friction factors
//! - Darcy-Weisbach friction losses and fitting minor losses
//! - Per-section evaluation combining regime classification and Kmod
//! - NPSH available and the cavitation verdict machine
//! - Piecewise-linear pump-curve interpolation with flat extrapolation
//!
//! All operations are pure functions of their inputs; nothing blocks,
//! caches, or mutates shared state.

pub mod curve;
pub mod error;
pub mod friction;
pub mod losses;
pub mod npsh;

// Re-exports
pub use curve::{CurveField, CurvePoint, PumpCurve};
pub use error::{HydraulicError, HydraulicResult};
pub use friction::{friction_factor, modified_reynolds, pulp_friction_factor, reynolds};
pub use losses::{
    flow_velocity, friction_loss, minor_loss, section_losses, SectionLosses, SectionSpec,
};
pub use npsh::{
    check_cavitation, npsh_available, CavitationCheck, CavitationSeverity,
    DEFAULT_NPSH_MARGIN_M,
};
