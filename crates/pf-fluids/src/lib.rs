//! pf-fluids: fluid and stock property calculations for pulpflow.
//!
//! Provides:
//! - Tabulated water properties (0–100 °C) with linear interpolation
//! - Antoine vapor pressure as an analytic cross-check
//! - Dissolved-air solubility lookup
//! - The pulp grade catalog with Duffy-Möller coefficients
//! - Stock density and apparent viscosity
//! - Flow regime classification (fiber network → turbulent drag) and the
//!   Kmod friction modifier
//!
//! # Architecture
//!
//! Property tables are fixed reference data compiled into the crate; every
//! public operation is a pure function of its inputs plus those tables, so
//! values are recomputed on demand and never cached across calls.
//!
//! # Example
//!
//! ```
//! use pf_core::units::mm;
//! use pf_fluids::{classify_regime, water_properties, PulpGrade};
//!
//! let props = water_properties(20.0);
//! assert!((props.density_kg_m3 - 998.2).abs() < 1e-9);
//!
//! let def = PulpGrade::KraftBleachedPine.definition();
//! let regime = classify_regime(def, pf_core::units::mps(0.5), 3.0, mm(100.0));
//! assert!(regime.v1 < regime.vg && regime.vg < regime.vw);
//! ```

pub mod error;
pub mod pulp;
pub mod regime;
pub mod water;

// Re-exports for ergonomics
pub use error::{FluidError, FluidResult};
pub use pulp::{
    apparent_viscosity, pulp_density, PulpCategory, PulpDefinition, PulpGrade,
    REFERENCE_WATER_DENSITY_KG_M3,
};
pub use regime::{
    classify_regime, drag_velocity, kmod, minimum_loss_velocity, transition_velocity,
    FlowRegime, FlowRegimeResult, KmodMode, KmodModel, KMOD_MAX, KMOD_MIN,
};
pub use water::{
    air_solubility_mg_l, vapor_pressure_antoine, water_properties, WaterProperties,
};
