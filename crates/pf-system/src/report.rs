//! The nested result structure produced by a system evaluation.
//!
//! All fields are plain `f64` with unit-suffixed names so the structure
//! can be rendered, persisted, charted or printed entirely outside the
//! core.

use crate::validate::ValidationIssue;
use pf_core::units::constants::KW_PER_HP;
use pf_fluids::FlowRegime;
use pf_hydraulics::{CavitationCheck, SectionLosses};
use serde::{Deserialize, Serialize};

/// Evaluated losses and flow state for one leg.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SectionReport {
    pub velocity_m_s: f64,
    pub reynolds: f64,
    pub regime: FlowRegime,
    pub regime_description: String,
    pub v1_m_s: f64,
    pub vg_m_s: f64,
    pub vw_m_s: f64,
    pub f_water: f64,
    pub kmod: f64,
    pub f_pulp: f64,
    pub friction_loss_m: f64,
    pub minor_loss_m: f64,
    pub total_loss_m: f64,
    /// Total loss after the air-content correction factor.
    pub total_loss_corrected_m: f64,
    pub equivalent_length_m: f64,
    pub density_kg_m3: f64,
    pub viscosity_pa_s: f64,
}

impl SectionReport {
    pub(crate) fn from_losses(losses: &SectionLosses, total_loss_corrected_m: f64) -> Self {
        Self {
            velocity_m_s: losses.velocity.value,
            reynolds: losses.reynolds,
            regime: losses.regime.regime,
            regime_description: losses.regime.regime.description().to_string(),
            v1_m_s: losses.regime.v1.value,
            vg_m_s: losses.regime.vg.value,
            vw_m_s: losses.regime.vw.value,
            f_water: losses.f_water,
            kmod: losses.kmod,
            f_pulp: losses.f_pulp,
            friction_loss_m: losses.friction_loss.value,
            minor_loss_m: losses.minor_loss.value,
            total_loss_m: losses.total_loss.value,
            total_loss_corrected_m,
            equivalent_length_m: losses.equivalent_length.value,
            density_kg_m3: losses.density.value,
            viscosity_pa_s: losses.viscosity.value,
        }
    }
}

/// Available vs. required NPSH.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NpshReport {
    pub available_m: f64,
    pub required_m: f64,
    pub margin_m: f64,
    pub check: CavitationCheck,
}

/// Whether the pump can deliver the system head at the duty flow.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PumpMatch {
    pub tdh_available_m: f64,
    pub tdh_required_m: f64,
    pub margin_m: f64,
    pub adequate: bool,
}

/// System vs. pump total dynamic head.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TdhReport {
    pub system_m: f64,
    pub pump_m: f64,
    pub margin_m: f64,
    pub pump_match: PumpMatch,
}

/// Hydraulic → shaft → motor power chain.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PowerReport {
    pub hydraulic_w: f64,
    pub shaft_w: f64,
    pub motor_w: f64,
    pub motor_kw: f64,
    pub motor_hp: f64,
}

impl PowerReport {
    pub(crate) fn from_watts(hydraulic_w: f64, shaft_w: f64, motor_w: f64) -> Self {
        Self {
            hydraulic_w,
            shaft_w,
            motor_w,
            motor_kw: motor_w / 1000.0,
            motor_hp: motor_w / 1000.0 / KW_PER_HP,
        }
    }
}

/// Overall operating classification.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SystemStatus {
    Safe,
    Warning,
    Critical,
}

/// Overall status with its recommendation list.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StatusReport {
    pub status: SystemStatus,
    pub message: String,
    pub recommendations: Vec<String>,
}

/// Correction factors applied during the evaluation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Corrections {
    pub air_factor: f64,
    pub kmod_suction: f64,
    pub kmod_discharge: f64,
}

/// Complete evaluation output.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SystemReport {
    pub suction: SectionReport,
    pub discharge: SectionReport,
    pub npsh: NpshReport,
    pub tdh: TdhReport,
    pub power: PowerReport,
    pub efficiency_pct: f64,
    pub status: StatusReport,
    pub corrections: Corrections,
    /// Collected validation findings; never dropped, never thrown.
    pub warnings: Vec<ValidationIssue>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn power_report_converts_units() {
        let power = PowerReport::from_watts(10_000.0, 14_285.7, 16_428.6);
        assert!((power.motor_kw - 16.4286).abs() < 1e-3);
        assert!((power.motor_hp - 16.4286 / 0.746).abs() < 1e-3);
    }
}
