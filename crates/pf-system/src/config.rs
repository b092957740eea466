//! Plain-data configuration for a pumping-system evaluation.
//!
//! Everything here is explicit immutable input: the core never reads
//! ambient state, and persistence of these structures is the caller's
//! concern.

use pf_catalog::{resolve_pipe, CatalogResult, FittingInstance, PipeNorm, Schedule};
use pf_core::units::{lps, mm, m};
use pf_fluids::regime::KmodMode;
use pf_fluids::PulpGrade;
use pf_hydraulics::{PumpCurve, SectionSpec, DEFAULT_NPSH_MARGIN_M};
use serde::{Deserialize, Serialize};

/// Default motor sizing factor over shaft power.
pub const DEFAULT_MOTOR_SAFETY_FACTOR: f64 = 1.15;

/// Stock process parameters.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProcessConditions {
    pub grade: PulpGrade,
    pub consistency_pct: f64,
    pub temperature_c: f64,
    #[serde(default)]
    pub ph: Option<f64>,
    #[serde(default = "default_sr_degrees")]
    pub sr_degrees: f64,
    #[serde(default)]
    pub air_content_pct: f64,
}

fn default_sr_degrees() -> f64 {
    30.0
}

/// One leg of the piping layout, with geometry already resolved against
/// the pipe catalog.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PipeLeg {
    pub norm: PipeNorm,
    pub nominal: String,
    pub schedule: Schedule,
    pub inner_diameter_mm: f64,
    pub wall_mm: f64,
    pub roughness_mm: f64,
    pub length_m: f64,
    #[serde(default)]
    pub fittings: Vec<FittingInstance>,
}

impl PipeLeg {
    /// Resolve a nominal size against the catalog.
    ///
    /// Roughness defaults to the norm's material; override it afterwards
    /// with [`PipeLeg::with_roughness`] when the line is aged or lined.
    pub fn resolve(
        norm: PipeNorm,
        nominal: &str,
        schedule: Schedule,
        length_m: f64,
        fittings: Vec<FittingInstance>,
    ) -> CatalogResult<Self> {
        let dims = resolve_pipe(norm, nominal, schedule)?;
        Ok(Self {
            norm,
            nominal: nominal.to_string(),
            schedule,
            inner_diameter_mm: dims.id_mm,
            wall_mm: dims.wall_mm,
            roughness_mm: dims.roughness_default_mm,
            length_m,
            fittings,
        })
    }

    pub fn with_roughness(mut self, roughness_mm: f64) -> Self {
        self.roughness_mm = roughness_mm;
        self
    }
}

/// Tank pressures (gauge) and elevations on both sides of the pump.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OperatingConditions {
    pub suction_tank_pressure_kpa: f64,
    pub suction_elevation_m: f64,
    pub discharge_tank_pressure_kpa: f64,
    pub discharge_elevation_m: f64,
}

/// The pump: duty point, geometry and characteristic curve.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PumpParameters {
    pub flow_lps: f64,
    pub impeller_diameter_mm: f64,
    pub rpm: f64,
    pub curve: PumpCurve,
}

/// Complete evaluation input.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SystemConfig {
    pub process: ProcessConditions,
    pub suction: PipeLeg,
    pub discharge: PipeLeg,
    pub operating: OperatingConditions,
    pub pump: PumpParameters,
    #[serde(default = "default_true")]
    pub use_air_correction: bool,
    #[serde(default)]
    pub kmod_mode: KmodMode,
    #[serde(default = "default_motor_safety_factor")]
    pub motor_safety_factor: f64,
    #[serde(default = "default_npsh_margin_m")]
    pub npsh_margin_m: f64,
}

fn default_true() -> bool {
    true
}

fn default_motor_safety_factor() -> f64 {
    DEFAULT_MOTOR_SAFETY_FACTOR
}

fn default_npsh_margin_m() -> f64 {
    DEFAULT_NPSH_MARGIN_M
}

impl SystemConfig {
    /// Build the hydraulic section input for one leg.
    pub fn section_spec(&self, leg: &PipeLeg) -> SectionSpec {
        SectionSpec {
            flow: lps(self.pump.flow_lps),
            inner_diameter: mm(leg.inner_diameter_mm),
            length: m(leg.length_m),
            roughness: mm(leg.roughness_mm),
            fittings: leg.fittings.clone(),
            grade: self.process.grade,
            consistency_pct: self.process.consistency_pct,
            temperature_c: self.process.temperature_c,
            sr_degrees: self.process.sr_degrees,
            kmod_mode: self.kmod_mode,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn resolve_leg_pulls_catalog_geometry() {
        let leg = PipeLeg::resolve(
            PipeNorm::AnsiB36_10,
            "6",
            Schedule::Sch40,
            25.0,
            vec![FittingInstance::new("90_std", 2)],
        )
        .unwrap();
        assert_eq!(leg.inner_diameter_mm, 154.06);
        assert_eq!(leg.roughness_mm, 0.045);

        let lined = leg.with_roughness(0.1);
        assert_eq!(lined.roughness_mm, 0.1);
    }

    #[test]
    fn resolve_leg_rejects_bad_combination() {
        let result = PipeLeg::resolve(PipeNorm::Pvc40, "24", Schedule::Sch40, 10.0, vec![]);
        assert!(result.is_err());
    }

    #[test]
    fn serde_defaults_fill_options() {
        let json = r#"{
            "process": {
                "grade": "kraft_bleached_pine",
                "consistency_pct": 3.0,
                "temperature_c": 40.0
            },
            "suction": {
                "norm": "ANSI_B36_10", "nominal": "8", "schedule": "40",
                "inner_diameter_mm": 202.72, "wall_mm": 8.18,
                "roughness_mm": 0.045, "length_m": 8.0
            },
            "discharge": {
                "norm": "ANSI_B36_10", "nominal": "6", "schedule": "40",
                "inner_diameter_mm": 154.06, "wall_mm": 7.11,
                "roughness_mm": 0.045, "length_m": 60.0
            },
            "operating": {
                "suction_tank_pressure_kpa": 0.0, "suction_elevation_m": 2.0,
                "discharge_tank_pressure_kpa": 50.0, "discharge_elevation_m": 18.0
            },
            "pump": {
                "flow_lps": 100.0, "impeller_diameter_mm": 350.0, "rpm": 1480.0,
                "curve": { "points": [] }
            }
        }"#;

        let config: SystemConfig = serde_json::from_str(json).unwrap();
        assert!(config.use_air_correction);
        assert_eq!(config.motor_safety_factor, DEFAULT_MOTOR_SAFETY_FACTOR);
        assert_eq!(config.npsh_margin_m, DEFAULT_NPSH_MARGIN_M);
        assert_eq!(config.kmod_mode, KmodMode::RegionFallback);
        assert_eq!(config.process.sr_degrees, 30.0);
        assert!(config.suction.fittings.is_empty());
    }
}
