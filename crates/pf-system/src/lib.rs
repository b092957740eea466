//! pf-system: pumping-system evaluation for pulpflow.
//!
//! Composes the property, catalog and hydraulics layers into a single
//! verdict for a centrifugal stock pump in a given piping layout:
//!
//! - suction and discharge section losses (with the air-content correction)
//! - available vs. required NPSH and the cavitation verdict
//! - system vs. pump TDH balance
//! - hydraulic → shaft → motor power chain
//! - an overall safe/marginal/unsafe classification
//!
//! plus a ±variation sensitivity analysis and a validation layer whose
//! findings are collected and returned alongside results, never thrown.
//!
//! # Example
//!
//! ```
//! use pf_catalog::{FittingInstance, PipeNorm, Schedule};
//! use pf_hydraulics::{CurvePoint, PumpCurve};
//! use pf_system::{
//!     calculate_pumping_system, OperatingConditions, PipeLeg, ProcessConditions,
//!     PumpParameters, SystemConfig,
//! };
//!
//! let config = SystemConfig {
//!     process: ProcessConditions {
//!         grade: pf_fluids::PulpGrade::KraftBleachedPine,
//!         consistency_pct: 3.0,
//!         temperature_c: 40.0,
//!         ph: Some(7.0),
//!         sr_degrees: 30.0,
//!         air_content_pct: 1.0,
//!     },
//!     suction: PipeLeg::resolve(
//!         PipeNorm::AnsiB36_10,
//!         "8",
//!         Schedule::Sch40,
//!         8.0,
//!         vec![FittingInstance::new("tank_sharp", 1), FittingInstance::new("90_long", 1)],
//!     )
//!     .unwrap(),
//!     discharge: PipeLeg::resolve(
//!         PipeNorm::AnsiB36_10,
//!         "6",
//!         Schedule::Sch40,
//!         60.0,
//!         vec![FittingInstance::new("90_std", 4), FittingInstance::new("check_swing", 1)],
//!     )
//!     .unwrap(),
//!     operating: OperatingConditions {
//!         suction_tank_pressure_kpa: 0.0,
//!         suction_elevation_m: 2.0,
//!         discharge_tank_pressure_kpa: 50.0,
//!         discharge_elevation_m: 18.0,
//!     },
//!     pump: PumpParameters {
//!         flow_lps: 100.0,
//!         impeller_diameter_mm: 350.0,
//!         rpm: 1480.0,
//!         curve: PumpCurve::new(vec![
//!             CurvePoint::new(50.0, 48.0, 2.0, 55.0),
//!             CurvePoint::new(100.0, 42.0, 3.0, 70.0),
//!             CurvePoint::new(150.0, 33.0, 4.5, 68.0),
//!         ]),
//!     },
//!     use_air_correction: true,
//!     kmod_mode: Default::default(),
//!     motor_safety_factor: pf_system::DEFAULT_MOTOR_SAFETY_FACTOR,
//!     npsh_margin_m: pf_hydraulics::DEFAULT_NPSH_MARGIN_M,
//! };
//!
//! let report = calculate_pumping_system(&config).unwrap();
//! assert!(report.npsh.available_m > 0.0);
//! ```

pub mod config;
pub mod error;
pub mod report;
pub mod sensitivity;
pub mod system;
pub mod validate;

// Re-exports
pub use config::{
    OperatingConditions, PipeLeg, ProcessConditions, PumpParameters, SystemConfig,
    DEFAULT_MOTOR_SAFETY_FACTOR,
};
pub use error::{SystemError, SystemResult};
pub use report::{
    Corrections, NpshReport, PowerReport, PumpMatch, SectionReport, StatusReport, SystemReport,
    SystemStatus, TdhReport,
};
pub use sensitivity::{
    analyze_all_sensitivities, analyze_sensitivity, Direction, SensitivityMeasure,
    SensitivityParameter, SensitivityReport, DEFAULT_VARIATION,
};
pub use system::calculate_pumping_system;
pub use validate::{
    validate_pipe_velocity, validate_process, validate_pump_curve, validate_system,
    velocity_limits, IssueSeverity, LegSide, ValidationIssue, VelocityCheck, VelocityLimits,
};
