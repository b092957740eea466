//! Sensitivity analysis: perturb one input ±X% and report how hard TDH,
//! NPSH and power respond.

use crate::config::SystemConfig;
use crate::error::SystemResult;
use crate::report::SystemReport;
use crate::system::calculate_pumping_system;
use rayon::prelude::*;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Default fractional variation (±10%).
pub const DEFAULT_VARIATION: f64 = 0.1;

/// Inputs the analysis can perturb.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SensitivityParameter {
    Consistency,
    Flow,
    SuctionDiameter,
    DischargeDiameter,
    SuctionLength,
    DischargeLength,
}

impl fmt::Display for SensitivityParameter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            SensitivityParameter::Consistency => "consistency",
            SensitivityParameter::Flow => "flow",
            SensitivityParameter::SuctionDiameter => "suction_diameter",
            SensitivityParameter::DischargeDiameter => "discharge_diameter",
            SensitivityParameter::SuctionLength => "suction_length",
            SensitivityParameter::DischargeLength => "discharge_length",
        })
    }
}

/// Whether the output moves with the input or against it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Direction {
    Direct,
    Inverse,
}

/// Normalized sensitivity of one output.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SensitivityMeasure {
    /// Percent change of the output per percent change of the input.
    pub per_percent: f64,
    pub direction: Direction,
}

/// Full result of one parameter sweep.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SensitivityReport {
    pub parameter: SensitivityParameter,
    /// The applied variation, in percent.
    pub variation_pct: f64,
    pub tdh: SensitivityMeasure,
    pub npsh: SensitivityMeasure,
    pub power: SensitivityMeasure,
    pub base: SystemReport,
    pub plus: SystemReport,
    pub minus: SystemReport,
}

fn apply_variation(config: &mut SystemConfig, parameter: SensitivityParameter, factor: f64) {
    match parameter {
        SensitivityParameter::Consistency => config.process.consistency_pct *= factor,
        SensitivityParameter::Flow => config.pump.flow_lps *= factor,
        SensitivityParameter::SuctionDiameter => config.suction.inner_diameter_mm *= factor,
        SensitivityParameter::DischargeDiameter => config.discharge.inner_diameter_mm *= factor,
        SensitivityParameter::SuctionLength => config.suction.length_m *= factor,
        SensitivityParameter::DischargeLength => config.discharge.length_m *= factor,
    }
}

fn measure(base: f64, plus: f64, minus: f64, variation: f64) -> SensitivityMeasure {
    if base.abs() < f64::EPSILON {
        return SensitivityMeasure {
            per_percent: 0.0,
            direction: Direction::Direct,
        };
    }

    let delta_plus = (plus - base) / base;
    let delta_minus = (minus - base) / base;

    // Magnitude from the absolute deltas; direction from the signed mean
    // response along increasing input.
    let magnitude = (delta_plus.abs() + delta_minus.abs()) / 2.0;
    let signed_mean = (delta_plus - delta_minus) / 2.0;

    SensitivityMeasure {
        per_percent: (magnitude / variation) * 100.0,
        direction: if signed_mean >= 0.0 {
            Direction::Direct
        } else {
            Direction::Inverse
        },
    }
}

/// Re-evaluate the system at `×(1±variation)` of one parameter and report
/// the normalized response of TDH, NPSH available and motor power.
pub fn analyze_sensitivity(
    config: &SystemConfig,
    parameter: SensitivityParameter,
    variation: f64,
) -> SystemResult<SensitivityReport> {
    let base = calculate_pumping_system(config)?;

    let mut config_plus = config.clone();
    apply_variation(&mut config_plus, parameter, 1.0 + variation);
    let plus = calculate_pumping_system(&config_plus)?;

    let mut config_minus = config.clone();
    apply_variation(&mut config_minus, parameter, 1.0 - variation);
    let minus = calculate_pumping_system(&config_minus)?;

    Ok(SensitivityReport {
        parameter,
        variation_pct: variation * 100.0,
        tdh: measure(
            base.tdh.system_m,
            plus.tdh.system_m,
            minus.tdh.system_m,
            variation,
        ),
        npsh: measure(
            base.npsh.available_m,
            plus.npsh.available_m,
            minus.npsh.available_m,
            variation,
        ),
        power: measure(
            base.power.motor_kw,
            plus.power.motor_kw,
            minus.power.motor_kw,
            variation,
        ),
        base,
        plus,
        minus,
    })
}

/// Sweep several parameters concurrently.
///
/// The evaluation is pure, so the per-parameter sweeps run in parallel
/// without any coordination.
pub fn analyze_all_sensitivities(
    config: &SystemConfig,
    parameters: &[SensitivityParameter],
    variation: f64,
) -> SystemResult<Vec<SensitivityReport>> {
    parameters
        .par_iter()
        .map(|&parameter| analyze_sensitivity(config, parameter, variation))
        .collect()
}
