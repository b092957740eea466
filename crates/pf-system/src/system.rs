//! The system orchestrator: one call from configuration to verdict.

use crate::config::SystemConfig;
use crate::error::SystemResult;
use crate::report::{
    Corrections, NpshReport, PowerReport, PumpMatch, SectionReport, StatusReport, SystemReport,
    SystemStatus, TdhReport,
};
use crate::validate::validate_system;
use pf_core::units::constants::{G0_MPS2, P_ATM_KPA};
use pf_core::units::{kpa, m};
use pf_fluids::water_properties;
use pf_hydraulics::{check_cavitation, npsh_available, section_losses, CavitationSeverity};
use tracing::{debug, warn};

fn strs(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| s.to_string()).collect()
}

/// Evaluate the complete pumping system.
///
/// Pure function of the configuration plus the reference catalogs: section
/// losses for both legs, air-content correction, NPSH and cavitation
/// verdict, TDH balance against the pump curve, the power chain, and the
/// overall classification. Validation findings ride along in the report.
pub fn calculate_pumping_system(config: &SystemConfig) -> SystemResult<SystemReport> {
    debug!(
        flow_lps = config.pump.flow_lps,
        grade = config.process.grade.key(),
        consistency_pct = config.process.consistency_pct,
        "evaluating pumping system"
    );

    // 1-2. Section losses, both legs at the shared duty flow
    let suction = section_losses(&config.section_spec(&config.suction))?;
    let discharge = section_losses(&config.section_spec(&config.discharge))?;

    // 3. Air-content correction applies to both legs' total losses
    let air_factor = if config.use_air_correction && config.process.air_content_pct > 0.0 {
        1.0 + 0.025 * config.process.air_content_pct
    } else {
        1.0
    };
    let h_suction_corrected = suction.total_loss.value * air_factor;
    let h_discharge_corrected = discharge.total_loss.value * air_factor;

    // 4. Available NPSH from the corrected suction-side state
    let vapor_pressure_kpa = water_properties(config.process.temperature_c).vapor_pressure_kpa;
    let suction_pressure_abs_kpa = config.operating.suction_tank_pressure_kpa + P_ATM_KPA;
    let npshd_m = npsh_available(
        kpa(suction_pressure_abs_kpa),
        suction.velocity,
        kpa(vapor_pressure_kpa),
        m(h_suction_corrected),
        suction.density,
    )
    .value;

    // 5. Required NPSH and the cavitation verdict
    if config.pump.curve.is_empty() {
        warn!("pump curve is empty; TDH, NPSHr and efficiency interpolate to zero");
    }
    let npshr_m = config.pump.curve.npshr_at(config.pump.flow_lps);
    let cavitation = check_cavitation(npshd_m, npshr_m, config.npsh_margin_m);
    if cavitation.severity == CavitationSeverity::Critical {
        warn!(npshd_m, npshr_m, message = %cavitation.message, "cavitation verdict critical");
    }

    // 6. Static pressure heads on both sides
    let h_suction_static = config.operating.suction_elevation_m
        + config.operating.suction_tank_pressure_kpa * 1000.0 / (suction.density.value * G0_MPS2);
    let h_discharge_static = config.operating.discharge_elevation_m
        + config.operating.discharge_tank_pressure_kpa * 1000.0
            / (discharge.density.value * G0_MPS2);

    // 7. System TDH including the velocity-head difference
    let velocity_head =
        (discharge.velocity.value.powi(2) - suction.velocity.value.powi(2)) / (2.0 * G0_MPS2);
    let tdh_system_m = h_discharge_static - h_suction_static
        + h_discharge_corrected
        + h_suction_corrected
        + velocity_head;

    // 8. Pump TDH and the match verdict
    let tdh_pump_m = config.pump.curve.tdh_at(config.pump.flow_lps);
    let adequate = tdh_pump_m >= tdh_system_m;
    let pump_match = PumpMatch {
        tdh_available_m: tdh_pump_m,
        tdh_required_m: tdh_system_m,
        margin_m: tdh_pump_m - tdh_system_m,
        adequate,
    };

    // 9. Power chain at the interpolated efficiency
    let efficiency_pct = config.pump.curve.efficiency_at(config.pump.flow_lps);
    let flow_m3_s = config.pump.flow_lps / 1000.0;
    let hydraulic_w = flow_m3_s * tdh_system_m * discharge.density.value * G0_MPS2;
    let shaft_w = if efficiency_pct > 0.0 {
        hydraulic_w / (efficiency_pct / 100.0)
    } else {
        0.0
    };
    let motor_w = shaft_w * config.motor_safety_factor;

    // 10. Overall status, first matching branch wins
    let status = if !cavitation.safe {
        StatusReport {
            status: SystemStatus::Critical,
            message: "Imminent cavitation".into(),
            recommendations: strs(&[
                "Increase the suction bore",
                "Lower the stock temperature",
                "Reduce suction losses",
            ]),
        }
    } else if cavitation.severity == CavitationSeverity::Warning {
        StatusReport {
            status: SystemStatus::Warning,
            message: "NPSH margin reduced".into(),
            recommendations: strs(&[
                "Monitor NPSH continuously",
                "Consider a larger suction bore",
            ]),
        }
    } else if !adequate {
        StatusReport {
            status: SystemStatus::Warning,
            message: "Pump TDH insufficient".into(),
            recommendations: strs(&[
                "Increase the impeller diameter",
                "Increase the pump speed",
                "Consider a larger pump",
            ]),
        }
    } else {
        StatusReport {
            status: SystemStatus::Safe,
            message: "Operation within normal parameters".into(),
            recommendations: strs(&[
                "Continue periodic monitoring",
                "Log the operating parameters",
            ]),
        }
    };

    let warnings = validate_system(config);

    Ok(SystemReport {
        corrections: Corrections {
            air_factor,
            kmod_suction: suction.kmod,
            kmod_discharge: discharge.kmod,
        },
        suction: SectionReport::from_losses(&suction, h_suction_corrected),
        discharge: SectionReport::from_losses(&discharge, h_discharge_corrected),
        npsh: NpshReport {
            available_m: npshd_m,
            required_m: npshr_m,
            margin_m: npshd_m - npshr_m,
            check: cavitation,
        },
        tdh: TdhReport {
            system_m: tdh_system_m,
            pump_m: tdh_pump_m,
            margin_m: tdh_pump_m - tdh_system_m,
            pump_match,
        },
        power: PowerReport::from_watts(hydraulic_w, shaft_w, motor_w),
        efficiency_pct,
        status,
        warnings,
    })
}
