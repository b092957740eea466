//! End-to-end scenarios for the pumping-system evaluation.

use pf_catalog::{FittingInstance, PipeNorm, Schedule};
use pf_fluids::regime::KmodMode;
use pf_fluids::PulpGrade;
use pf_hydraulics::{CavitationSeverity, CurvePoint, PumpCurve};
use pf_system::{
    analyze_all_sensitivities, analyze_sensitivity, calculate_pumping_system, Direction,
    IssueSeverity, OperatingConditions, PipeLeg, ProcessConditions, PumpParameters,
    SensitivityParameter, SystemConfig, SystemStatus, DEFAULT_MOTOR_SAFETY_FACTOR,
};

fn sample_curve() -> PumpCurve {
    PumpCurve::new(vec![
        CurvePoint::new(50.0, 48.0, 2.0, 55.0),
        CurvePoint::new(100.0, 42.0, 3.0, 70.0),
        CurvePoint::new(150.0, 33.0, 4.5, 68.0),
    ])
}

/// A bleached-kraft transfer duty that should evaluate as safe.
fn baseline_config() -> SystemConfig {
    SystemConfig {
        process: ProcessConditions {
            grade: PulpGrade::KraftBleachedPine,
            consistency_pct: 3.0,
            temperature_c: 40.0,
            ph: Some(7.0),
            sr_degrees: 30.0,
            air_content_pct: 1.0,
        },
        suction: PipeLeg::resolve(
            PipeNorm::AnsiB36_10,
            "8",
            Schedule::Sch40,
            8.0,
            vec![
                FittingInstance::new("tank_sharp", 1),
                FittingInstance::new("90_long", 1),
            ],
        )
        .unwrap(),
        discharge: PipeLeg::resolve(
            PipeNorm::AnsiB36_10,
            "6",
            Schedule::Sch40,
            45.0,
            vec![
                FittingInstance::new("90_std", 4),
                FittingInstance::new("check_swing", 1),
                FittingInstance::new("gate_full", 1),
            ],
        )
        .unwrap(),
        operating: OperatingConditions {
            suction_tank_pressure_kpa: 0.0,
            suction_elevation_m: 2.0,
            discharge_tank_pressure_kpa: 50.0,
            discharge_elevation_m: 18.0,
        },
        pump: PumpParameters {
            flow_lps: 100.0,
            impeller_diameter_mm: 350.0,
            rpm: 1480.0,
            curve: sample_curve(),
        },
        use_air_correction: true,
        kmod_mode: KmodMode::RegionFallback,
        motor_safety_factor: DEFAULT_MOTOR_SAFETY_FACTOR,
        npsh_margin_m: 0.5,
    }
}

#[test]
fn baseline_duty_is_safe() {
    let report = calculate_pumping_system(&baseline_config()).unwrap();

    assert_eq!(report.status.status, SystemStatus::Safe);
    assert!(report.npsh.check.safe);
    assert_eq!(report.npsh.check.severity, CavitationSeverity::Safe);
    assert!(report.tdh.pump_match.adequate);
    assert!(!report.status.recommendations.is_empty());
}

#[test]
fn baseline_numbers_are_plausible() {
    let report = calculate_pumping_system(&baseline_config()).unwrap();

    // Suction: 100 L/s through a 202.72 mm bore ≈ 3.1 m/s
    assert!((report.suction.velocity_m_s - 3.10).abs() < 0.02);
    // Discharge: same flow through 154.06 mm ≈ 5.37 m/s
    assert!((report.discharge.velocity_m_s - 5.37).abs() < 0.02);

    // Atmospheric suction tank, warm stock, moderate losses
    assert!(
        report.npsh.available_m > 8.0 && report.npsh.available_m < 10.0,
        "NPSHd = {}",
        report.npsh.available_m
    );
    assert_eq!(report.npsh.required_m, 3.0);

    // System head stays below the curve head at the duty flow
    assert!(
        report.tdh.system_m > 30.0 && report.tdh.system_m < 42.0,
        "TDH = {}",
        report.tdh.system_m
    );
    assert_eq!(report.tdh.pump_m, 42.0);

    // Power chain: hydraulic < shaft < motor, with sane magnitudes
    assert!(report.power.hydraulic_w < report.power.shaft_w);
    assert!(report.power.shaft_w < report.power.motor_w);
    assert!(
        report.power.motor_kw > 45.0 && report.power.motor_kw < 80.0,
        "motor = {} kW",
        report.power.motor_kw
    );
    assert_eq!(report.efficiency_pct, 70.0);

    // Air factor for 1% entrained air
    assert!((report.corrections.air_factor - 1.025).abs() < 1e-12);
    assert!(
        (report.suction.total_loss_corrected_m
            - report.suction.total_loss_m * 1.025)
            .abs()
            < 1e-9
    );
}

#[test]
fn hot_stock_under_vacuum_is_physically_impossible() {
    let mut config = baseline_config();
    config.process.temperature_c = 90.0;
    config.operating.suction_tank_pressure_kpa = -60.0;
    config.suction = PipeLeg::resolve(
        PipeNorm::AnsiB36_10,
        "4",
        Schedule::Sch40,
        30.0,
        vec![FittingInstance::new("tank_sharp", 1)],
    )
    .unwrap();
    config.pump.flow_lps = 60.0;

    let report = calculate_pumping_system(&config).unwrap();

    assert!(report.npsh.available_m < 0.0);
    assert_eq!(report.status.status, SystemStatus::Critical);
    assert!(!report.npsh.check.safe);
    assert!(report.npsh.check.message.contains("physically impossible"));
    assert!(!report.npsh.check.consequences.is_empty());
}

#[test]
fn empty_curve_degrades_softly() {
    let mut config = baseline_config();
    config.pump.curve = PumpCurve::default();

    let report = calculate_pumping_system(&config).unwrap();

    // Interpolations degrade to zero instead of failing
    assert_eq!(report.npsh.required_m, 0.0);
    assert_eq!(report.tdh.pump_m, 0.0);
    assert_eq!(report.efficiency_pct, 0.0);
    assert_eq!(report.power.shaft_w, 0.0);

    // Zero pump head cannot carry the system head
    assert!(!report.tdh.pump_match.adequate);
    assert_eq!(report.status.status, SystemStatus::Warning);

    // The degenerate curve is flagged in the collected findings
    assert!(report
        .warnings
        .iter()
        .any(|w| w.severity == IssueSeverity::Error && w.field == "pump.curve"));
}

#[test]
fn air_correction_lowers_available_npsh() {
    let mut dry = baseline_config();
    dry.process.air_content_pct = 0.0;
    let mut aerated = baseline_config();
    aerated.process.air_content_pct = 4.0;

    let dry_report = calculate_pumping_system(&dry).unwrap();
    let aerated_report = calculate_pumping_system(&aerated).unwrap();

    assert_eq!(dry_report.corrections.air_factor, 1.0);
    assert!((aerated_report.corrections.air_factor - 1.1).abs() < 1e-12);
    assert!(aerated_report.npsh.available_m < dry_report.npsh.available_m);
    assert!(aerated_report.tdh.system_m > dry_report.tdh.system_m);

    // Disabling the correction ignores the air content entirely
    let mut disabled = baseline_config();
    disabled.process.air_content_pct = 4.0;
    disabled.use_air_correction = false;
    let disabled_report = calculate_pumping_system(&disabled).unwrap();
    assert_eq!(disabled_report.corrections.air_factor, 1.0);
}

#[test]
fn insufficient_pump_head_is_a_warning() {
    let mut config = baseline_config();
    // Push the static lift beyond what the curve delivers
    config.operating.discharge_elevation_m = 40.0;

    let report = calculate_pumping_system(&config).unwrap();
    assert!(!report.tdh.pump_match.adequate);
    assert_eq!(report.status.status, SystemStatus::Warning);
    assert!(report.status.message.contains("TDH"));
}

#[test]
fn cavitation_outranks_pump_match_in_overall_status() {
    let mut config = baseline_config();
    config.process.temperature_c = 90.0;
    config.operating.suction_tank_pressure_kpa = -60.0;
    config.operating.discharge_elevation_m = 40.0; // also inadequate TDH

    let report = calculate_pumping_system(&config).unwrap();
    assert_eq!(report.status.status, SystemStatus::Critical);
    assert!(report.status.message.contains("cavitation"));
}

#[test]
fn kmod_mode_flows_through_to_the_report() {
    let fallback = calculate_pumping_system(&baseline_config()).unwrap();

    let mut config = baseline_config();
    config.kmod_mode = KmodMode::VelocityRatio;
    let ratio_aware = calculate_pumping_system(&config).unwrap();

    assert!(
        (fallback.corrections.kmod_suction - ratio_aware.corrections.kmod_suction).abs() > 1e-6
    );
}

#[test]
fn velocity_findings_are_collected_not_thrown() {
    // 100 L/s through an 8" suction is ~3.1 m/s, far over the 3% band
    let report = calculate_pumping_system(&baseline_config()).unwrap();
    assert!(report
        .warnings
        .iter()
        .any(|w| w.field == "suction.velocity" && w.severity == IssueSeverity::Error));
}

#[test]
fn report_serializes_and_round_trips() {
    let report = calculate_pumping_system(&baseline_config()).unwrap();
    let json = serde_json::to_string(&report).unwrap();
    let back: pf_system::SystemReport = serde_json::from_str(&json).unwrap();
    assert_eq!(report, back);
}

#[test]
fn flow_sensitivity_is_direct_for_tdh_and_power() {
    let report =
        analyze_sensitivity(&baseline_config(), SensitivityParameter::Flow, 0.1).unwrap();

    assert_eq!(report.tdh.direction, Direction::Direct);
    assert!(report.tdh.per_percent > 0.0);
    assert_eq!(report.power.direction, Direction::Direct);
    // More flow means more suction loss, so NPSH available falls
    assert_eq!(report.npsh.direction, Direction::Inverse);
}

#[test]
fn suction_diameter_sensitivity_is_inverse_for_tdh() {
    let report = analyze_sensitivity(
        &baseline_config(),
        SensitivityParameter::SuctionDiameter,
        0.1,
    )
    .unwrap();

    // A wider suction bore lowers losses, so TDH falls and NPSHd rises
    assert_eq!(report.tdh.direction, Direction::Inverse);
    assert_eq!(report.npsh.direction, Direction::Direct);
}

#[test]
fn batch_sensitivity_covers_all_parameters() {
    let parameters = [
        SensitivityParameter::Consistency,
        SensitivityParameter::Flow,
        SensitivityParameter::SuctionDiameter,
        SensitivityParameter::DischargeDiameter,
        SensitivityParameter::SuctionLength,
        SensitivityParameter::DischargeLength,
    ];

    let reports =
        analyze_all_sensitivities(&baseline_config(), &parameters, 0.1).unwrap();
    assert_eq!(reports.len(), parameters.len());

    for (report, parameter) in reports.iter().zip(parameters) {
        assert_eq!(report.parameter, parameter);
        assert_eq!(report.variation_pct, 10.0);
        assert!(report.tdh.per_percent.is_finite());
    }
}
