//! Input validation and engineering plausibility checks.
//!
//! Findings are collected and returned, never thrown: a questionable
//! configuration still evaluates, and the engineer sees every flag next to
//! the numbers. Hard failures (unresolvable geometry, negative flow) are
//! the hydraulics layer's errors, not validation findings.

use crate::config::{ProcessConditions, SystemConfig};
use pf_core::units::constants::P_ATM_KPA;
use pf_core::units::{lps, mm};
use pf_fluids::regime::drag_velocity;
use pf_fluids::water_properties;
use pf_hydraulics::{flow_velocity, PumpCurve};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Severity of a collected finding.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum IssueSeverity {
    Info,
    Warning,
    Error,
}

/// One collected finding, tied to the input field it concerns.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ValidationIssue {
    pub severity: IssueSeverity,
    pub field: String,
    pub message: String,
}

impl ValidationIssue {
    pub fn info(field: &str, message: impl Into<String>) -> Self {
        Self {
            severity: IssueSeverity::Info,
            field: field.to_string(),
            message: message.into(),
        }
    }

    pub fn warning(field: &str, message: impl Into<String>) -> Self {
        Self {
            severity: IssueSeverity::Warning,
            field: field.to_string(),
            message: message.into(),
        }
    }

    pub fn error(field: &str, message: impl Into<String>) -> Self {
        Self {
            severity: IssueSeverity::Error,
            field: field.to_string(),
            message: message.into(),
        }
    }
}

/// Numeric range rule for one input field.
struct RangeRule {
    field: &'static str,
    name: &'static str,
    min: f64,
    max: f64,
    unit: &'static str,
}

const CONSISTENCY_RULE: RangeRule = RangeRule {
    field: "consistency_pct",
    name: "Consistency",
    min: 0.5,
    max: 8.0,
    unit: "%",
};
const TEMPERATURE_RULE: RangeRule = RangeRule {
    field: "temperature_c",
    name: "Temperature",
    min: 10.0,
    max: 90.0,
    unit: "°C",
};
const PH_RULE: RangeRule = RangeRule {
    field: "ph",
    name: "pH",
    min: 4.0,
    max: 10.0,
    unit: "",
};
const SR_RULE: RangeRule = RangeRule {
    field: "sr_degrees",
    name: "Refining degree",
    min: 0.0,
    max: 100.0,
    unit: "°SR",
};
const AIR_RULE: RangeRule = RangeRule {
    field: "air_content_pct",
    name: "Air content",
    min: 0.0,
    max: 5.0,
    unit: "%",
};
const LENGTH_RULE: RangeRule = RangeRule {
    field: "length_m",
    name: "Pipe length",
    min: 0.5,
    max: 500.0,
    unit: "m",
};
const ROUGHNESS_RULE: RangeRule = RangeRule {
    field: "roughness_mm",
    name: "Absolute roughness",
    min: 0.001,
    max: 1.0,
    unit: "mm",
};
const FLOW_RULE: RangeRule = RangeRule {
    field: "flow_lps",
    name: "Flow",
    min: 0.1,
    max: 5555.0,
    unit: "L/s",
};
const IMPELLER_RULE: RangeRule = RangeRule {
    field: "impeller_diameter_mm",
    name: "Impeller diameter",
    min: 50.0,
    max: 1000.0,
    unit: "mm",
};
const RPM_RULE: RangeRule = RangeRule {
    field: "rpm",
    name: "Rotational speed",
    min: 100.0,
    max: 6000.0,
    unit: "RPM",
};
const PRESSURE_RULE: RangeRule = RangeRule {
    field: "tank_pressure_kpa",
    name: "Tank pressure",
    min: -100.0,
    max: 5000.0,
    unit: "kPa",
};
const ELEVATION_RULE: RangeRule = RangeRule {
    field: "elevation_m",
    name: "Elevation",
    min: -50.0,
    max: 200.0,
    unit: "m",
};

fn check_range(value: f64, rule: &RangeRule, prefix: &str, issues: &mut Vec<ValidationIssue>) {
    let field = if prefix.is_empty() {
        rule.field.to_string()
    } else {
        format!("{prefix}.{}", rule.field)
    };

    if value < rule.min {
        issues.push(ValidationIssue {
            severity: IssueSeverity::Error,
            field,
            message: format!(
                "{} must be at least {} {}",
                rule.name, rule.min, rule.unit
            ),
        });
        return;
    }
    if value > rule.max {
        issues.push(ValidationIssue {
            severity: IssueSeverity::Error,
            field,
            message: format!("{} must be at most {} {}", rule.name, rule.max, rule.unit),
        });
        return;
    }

    // Near-limit values are flagged, not rejected
    if value < rule.min * 1.1 {
        issues.push(ValidationIssue {
            severity: IssueSeverity::Warning,
            field,
            message: format!(
                "{} is close to the lower limit ({} {})",
                rule.name, rule.min, rule.unit
            ),
        });
    } else if value > rule.max * 0.9 {
        issues.push(ValidationIssue {
            severity: IssueSeverity::Warning,
            field,
            message: format!(
                "{} is close to the upper limit ({} {})",
                rule.name, rule.max, rule.unit
            ),
        });
    }
}

/// Which leg a velocity check applies to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LegSide {
    Suction,
    Discharge,
}

impl fmt::Display for LegSide {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            LegSide::Suction => "suction",
            LegSide::Discharge => "discharge",
        })
    }
}

/// Recommended velocity band (m/s).
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct VelocityLimits {
    pub min_m_s: f64,
    pub max_m_s: f64,
}

/// `(consistency upper bound %, min m/s, max m/s)`, first matching bracket
/// wins. Suction runs slower to protect NPSH; discharge may run faster.
const SUCTION_BANDS: [(f64, f64, f64); 4] = [
    (2.0, 0.9, 1.8),
    (4.0, 1.0, 1.5),
    (6.0, 1.2, 1.3),
    (100.0, 1.0, 1.2),
];
const DISCHARGE_BANDS: [(f64, f64, f64); 4] = [
    (2.0, 1.0, 3.0),
    (4.0, 1.2, 2.5),
    (6.0, 1.2, 2.0),
    (100.0, 1.2, 1.5),
];

/// Fraction of the band treated as "near the limit".
const VELOCITY_WARNING_THRESHOLD: f64 = 0.2;

/// Recommended velocity band for a leg at the given consistency.
pub fn velocity_limits(side: LegSide, consistency_pct: f64) -> VelocityLimits {
    let bands = match side {
        LegSide::Suction => &SUCTION_BANDS,
        LegSide::Discharge => &DISCHARGE_BANDS,
    };
    let (_, min_m_s, max_m_s) = bands
        .iter()
        .copied()
        .find(|&(upper, _, _)| consistency_pct <= upper)
        .unwrap_or(bands[bands.len() - 1]);
    VelocityLimits { min_m_s, max_m_s }
}

/// Outcome of a pipe velocity check.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct VelocityCheck {
    pub side: LegSide,
    pub velocity_m_s: f64,
    pub limits: VelocityLimits,
    pub level: IssueSeverity,
    pub messages: Vec<String>,
    pub consequences: Vec<String>,
    pub recommendations: Vec<String>,
}

fn strs(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| s.to_string()).collect()
}

/// Check a leg's velocity against the recommended band for its
/// consistency.
///
/// Below/above the band is an error-level finding with consequences and
/// recommendations; within 20% of either limit is a warning; otherwise the
/// velocity is reported as optimal.
pub fn validate_pipe_velocity(
    side: LegSide,
    velocity_m_s: f64,
    consistency_pct: f64,
) -> VelocityCheck {
    let limits = velocity_limits(side, consistency_pct);
    let min_warning = limits.min_m_s * (1.0 + VELOCITY_WARNING_THRESHOLD);
    let max_warning = limits.max_m_s * (1.0 - VELOCITY_WARNING_THRESHOLD);

    let (level, messages, consequences, recommendations) = if velocity_m_s < limits.min_m_s {
        (
            IssueSeverity::Error,
            vec![format!(
                "Velocity too low: {velocity_m_s:.2} m/s (recommended minimum {:.2} m/s)",
                limits.min_m_s
            )],
            strs(&[
                "Fiber sedimentation along the pipe invert",
                "Gradual solids build-up reducing the flow area",
                "Possible partial or full blockage over time",
                "Loss of suspension homogeneity (phase separation)",
                "Hard restarts after extended shutdowns",
            ]),
            strs(&[
                "Reduce the pipe diameter",
                "Increase the operating flow",
                "Confirm the duty point is correct",
            ]),
        )
    } else if velocity_m_s < min_warning {
        (
            IssueSeverity::Warning,
            vec![format!(
                "Velocity close to the minimum: {velocity_m_s:.2} m/s (minimum {:.2} m/s)",
                limits.min_m_s
            )],
            strs(&["Monitor for sedimentation during extended operation"]),
            strs(&["Consider a smaller diameter if sedimentation appears"]),
        )
    } else if velocity_m_s > limits.max_m_s {
        (
            IssueSeverity::Error,
            vec![format!(
                "Velocity too high: {velocity_m_s:.2} m/s (recommended maximum {:.2} m/s)",
                limits.max_m_s
            )],
            strs(&[
                "Accelerated erosion of pipe walls and fittings",
                "Excessive head loss raising the required TDH",
                "High energy consumption",
                "Premature wear of valves and elbows",
                "Higher noise and vibration levels",
                "Possible cavitation at the pump suction",
            ]),
            strs(&[
                "Increase the pipe diameter",
                "Reduce the operating flow",
                "Review losses and pump selection",
            ]),
        )
    } else if velocity_m_s > max_warning {
        (
            IssueSeverity::Warning,
            vec![format!(
                "Velocity close to the maximum: {velocity_m_s:.2} m/s (maximum {:.2} m/s)",
                limits.max_m_s
            )],
            strs(&["Monitor head loss and energy consumption"]),
            strs(&["Consider a larger diameter if erosion or consumption grow"]),
        )
    } else {
        (
            IssueSeverity::Info,
            vec![format!(
                "Velocity optimal: {velocity_m_s:.2} m/s (recommended {:.2}-{:.2} m/s)",
                limits.min_m_s, limits.max_m_s
            )],
            Vec::new(),
            Vec::new(),
        )
    };

    VelocityCheck {
        side,
        velocity_m_s,
        limits,
        level,
        messages,
        consequences,
        recommendations,
    }
}

/// Validate a pump characteristic curve.
pub fn validate_pump_curve(curve: &PumpCurve) -> Vec<ValidationIssue> {
    let mut issues = Vec::new();

    if curve.points.len() < 2 {
        issues.push(ValidationIssue::error(
            "pump.curve",
            "The curve needs at least 2 points",
        ));
        return issues;
    }
    if curve.points.len() < 3 {
        issues.push(ValidationIssue::warning(
            "pump.curve",
            "At least 3 points are recommended for accurate interpolation",
        ));
    }

    for (i, pair) in curve.points.windows(2).enumerate() {
        if pair[1].flow_lps <= pair[0].flow_lps {
            issues.push(ValidationIssue::warning(
                "pump.curve",
                format!(
                    "Curve points must be ordered by increasing flow; point {} does not exceed point {}",
                    i + 2,
                    i + 1
                ),
            ));
        }
    }

    for (i, point) in curve.points.iter().enumerate() {
        let n = i + 1;
        for (value, what) in [
            (point.flow_lps, "flow"),
            (point.tdh_m, "TDH"),
            (point.npshr_m, "NPSHr"),
            (point.efficiency_pct, "efficiency"),
        ] {
            if !value.is_finite() {
                issues.push(ValidationIssue::error(
                    "pump.curve",
                    format!("Point {n}: {what} is missing or not a number"),
                ));
            }
        }

        if !(0.0..=500.0).contains(&point.tdh_m) {
            issues.push(ValidationIssue::warning(
                "pump.curve",
                format!("Point {n}: TDH outside the typical range (0-500 m)"),
            ));
        }
        if !(0.0..=20.0).contains(&point.npshr_m) {
            issues.push(ValidationIssue::warning(
                "pump.curve",
                format!("Point {n}: NPSHr outside the typical range (0-20 m)"),
            ));
        }
        if !(10.0..=95.0).contains(&point.efficiency_pct) {
            issues.push(ValidationIssue::warning(
                "pump.curve",
                format!("Point {n}: efficiency outside the typical range (10-95%)"),
            ));
        }
    }

    issues
}

/// Validate the stock process parameters.
pub fn validate_process(process: &ProcessConditions) -> Vec<ValidationIssue> {
    let mut issues = Vec::new();

    check_range(process.consistency_pct, &CONSISTENCY_RULE, "process", &mut issues);
    check_range(process.temperature_c, &TEMPERATURE_RULE, "process", &mut issues);
    if let Some(ph) = process.ph {
        check_range(ph, &PH_RULE, "process", &mut issues);
    }
    check_range(process.sr_degrees, &SR_RULE, "process", &mut issues);
    check_range(process.air_content_pct, &AIR_RULE, "process", &mut issues);

    // Water-like stock: the pulp corrections stop meaning anything
    if process.consistency_pct < 0.1 {
        issues.push(ValidationIssue::warning(
            "process.consistency_pct",
            "Consistency is essentially zero (plain water); pulp friction \
             corrections do not apply - use standard water pump methods",
        ));
    }

    let def = process.grade.definition();
    if process.consistency_pct < def.consistency_min_pct
        || process.consistency_pct > def.consistency_max_pct
    {
        issues.push(ValidationIssue::warning(
            "process.consistency_pct",
            format!(
                "Consistency outside the typical range for {} ({}%-{}%)",
                def.display_name, def.consistency_min_pct, def.consistency_max_pct
            ),
        ));
    }

    let vapor_pressure = water_properties(process.temperature_c).vapor_pressure_kpa;
    if vapor_pressure > P_ATM_KPA * 0.9 {
        issues.push(ValidationIssue::warning(
            "process.temperature_c",
            "Temperature is near the boiling point at atmospheric pressure",
        ));
    }

    issues
}

/// Validate the whole configuration: ranges, curve, velocities and
/// system-integrity review. Findings are returned in input order.
pub fn validate_system(config: &SystemConfig) -> Vec<ValidationIssue> {
    let mut issues = validate_process(&config.process);

    for (side, leg) in [
        (LegSide::Suction, &config.suction),
        (LegSide::Discharge, &config.discharge),
    ] {
        let prefix = side.to_string();
        check_range(leg.length_m, &LENGTH_RULE, &prefix, &mut issues);
        check_range(leg.roughness_mm, &ROUGHNESS_RULE, &prefix, &mut issues);

        if let Ok(velocity) =
            flow_velocity(lps(config.pump.flow_lps), mm(leg.inner_diameter_mm))
        {
            let check =
                validate_pipe_velocity(side, velocity.value, config.process.consistency_pct);
            if check.level != IssueSeverity::Info {
                for message in &check.messages {
                    issues.push(ValidationIssue {
                        severity: check.level,
                        field: format!("{prefix}.velocity"),
                        message: message.clone(),
                    });
                }
            }
        }
    }

    check_range(config.pump.flow_lps, &FLOW_RULE, "pump", &mut issues);
    check_range(
        config.pump.impeller_diameter_mm,
        &IMPELLER_RULE,
        "pump",
        &mut issues,
    );
    check_range(config.pump.rpm, &RPM_RULE, "pump", &mut issues);
    issues.extend(validate_pump_curve(&config.pump.curve));

    check_range(
        config.operating.suction_tank_pressure_kpa,
        &PRESSURE_RULE,
        "operating.suction",
        &mut issues,
    );
    check_range(
        config.operating.discharge_tank_pressure_kpa,
        &PRESSURE_RULE,
        "operating.discharge",
        &mut issues,
    );
    check_range(
        config.operating.suction_elevation_m,
        &ELEVATION_RULE,
        "operating.suction",
        &mut issues,
    );
    check_range(
        config.operating.discharge_elevation_m,
        &ELEVATION_RULE,
        "operating.discharge",
        &mut issues,
    );

    issues.extend(integrity_review(config));
    issues
}

/// Cross-field plausibility review of the assembled system.
fn integrity_review(config: &SystemConfig) -> Vec<ValidationIssue> {
    let mut issues = Vec::new();

    if config.suction.inner_diameter_mm > config.discharge.inner_diameter_mm {
        issues.push(ValidationIssue::warning(
            "suction.inner_diameter_mm",
            "Suction bore is larger than the discharge bore; review the \
             diameter selection",
        ));
    }

    if let Ok(velocity) = flow_velocity(
        lps(config.pump.flow_lps),
        mm(config.suction.inner_diameter_mm),
    ) {
        let def = config.process.grade.definition();
        let vw = drag_velocity(
            def,
            config.process.consistency_pct,
            mm(config.suction.inner_diameter_mm),
        );

        if velocity.value > vw.value * 0.95 && velocity.value < vw.value {
            issues.push(ValidationIssue::warning(
                "suction.velocity",
                format!(
                    "Suction velocity ({:.2} m/s) is within 5% of the drag velocity ({:.2} m/s)",
                    velocity.value, vw.value
                ),
            ));
        }
        if velocity.value > 0.0 && velocity.value < vw.value * 0.3 {
            issues.push(ValidationIssue::warning(
                "suction.velocity",
                "Suction velocity is in the fiber-network region (high loss); \
                 consider a higher velocity",
            ));
        }
    }

    for (name, leg) in [("suction", &config.suction), ("discharge", &config.discharge)] {
        if let Ok(leq) =
            pf_catalog::equivalent_length(&leg.fittings, mm(leg.inner_diameter_mm))
        {
            if leq.value > leg.length_m {
                issues.push(ValidationIssue::warning(
                    &format!("{name}.fittings"),
                    format!(
                        "Fitting equivalent length ({:.1} m) exceeds the straight run ({:.1} m)",
                        leq.value, leg.length_m
                    ),
                ));
            }
        }
    }

    if let Some((min_flow, max_flow)) = config.pump.curve.flow_span() {
        if config.pump.flow_lps < min_flow * 0.7 {
            issues.push(ValidationIssue::warning(
                "pump.flow_lps",
                format!(
                    "Operating flow ({:.1} L/s) is far below the curve minimum ({min_flow:.1} L/s)",
                    config.pump.flow_lps
                ),
            ));
        }
        if config.pump.flow_lps > max_flow * 1.1 {
            issues.push(ValidationIssue::warning(
                "pump.flow_lps",
                format!(
                    "Operating flow ({:.1} L/s) is far above the curve maximum ({max_flow:.1} L/s)",
                    config.pump.flow_lps
                ),
            ));
        }
    }

    issues
}

#[cfg(test)]
mod proptests {
    use super::*;
    use proptest::prelude::*;

    proptest! {
        #[test]
        fn velocity_band_is_always_ordered(
            consistency in 0.0f64..20.0,
            suction in proptest::bool::ANY,
        ) {
            let side = if suction { LegSide::Suction } else { LegSide::Discharge };
            let limits = velocity_limits(side, consistency);
            prop_assert!(limits.min_m_s < limits.max_m_s);
            prop_assert!(limits.min_m_s > 0.0);
        }

        #[test]
        fn velocity_check_never_panics_and_stays_consistent(
            velocity in 0.0f64..10.0,
            consistency in 0.1f64..10.0,
        ) {
            let check = validate_pipe_velocity(LegSide::Discharge, velocity, consistency);
            prop_assert!(!check.messages.is_empty());
            if check.level == IssueSeverity::Error {
                prop_assert!(
                    velocity < check.limits.min_m_s || velocity > check.limits.max_m_s
                );
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pf_fluids::PulpGrade;

    fn base_process() -> ProcessConditions {
        ProcessConditions {
            grade: PulpGrade::KraftBleachedPine,
            consistency_pct: 3.0,
            temperature_c: 40.0,
            ph: Some(7.0),
            sr_degrees: 30.0,
            air_content_pct: 1.0,
        }
    }

    #[test]
    fn clean_process_has_no_findings() {
        assert!(validate_process(&base_process()).is_empty());
    }

    #[test]
    fn out_of_range_consistency_is_an_error() {
        let mut process = base_process();
        process.consistency_pct = 12.0;
        let issues = validate_process(&process);
        assert!(issues
            .iter()
            .any(|i| i.severity == IssueSeverity::Error && i.field.contains("consistency")));
    }

    #[test]
    fn near_limit_temperature_warns() {
        let mut process = base_process();
        process.temperature_c = 85.0; // above 0.9 · 90
        let issues = validate_process(&process);
        assert!(issues
            .iter()
            .any(|i| i.severity == IssueSeverity::Warning && i.field.contains("temperature")));
    }

    #[test]
    fn water_like_stock_warns() {
        let mut process = base_process();
        process.consistency_pct = 0.05;
        let issues = validate_process(&process);
        assert!(issues.iter().any(|i| i.message.contains("plain water")));
    }

    #[test]
    fn consistency_outside_grade_band_warns() {
        let mut process = base_process();
        process.consistency_pct = 5.5; // valid globally, atypical for this grade
        let issues = validate_process(&process);
        assert!(issues
            .iter()
            .any(|i| i.severity == IssueSeverity::Warning && i.message.contains("typical range")));
    }

    #[test]
    fn velocity_bands_follow_consistency() {
        let low = velocity_limits(LegSide::Suction, 1.5);
        assert_eq!((low.min_m_s, low.max_m_s), (0.9, 1.8));

        let high = velocity_limits(LegSide::Suction, 7.0);
        assert_eq!((high.min_m_s, high.max_m_s), (1.0, 1.2));

        let discharge = velocity_limits(LegSide::Discharge, 3.0);
        assert_eq!((discharge.min_m_s, discharge.max_m_s), (1.2, 2.5));
    }

    #[test]
    fn velocity_check_levels() {
        // 3% stock, suction band is 1.0-1.5 m/s
        let too_low = validate_pipe_velocity(LegSide::Suction, 0.5, 3.0);
        assert_eq!(too_low.level, IssueSeverity::Error);
        assert!(!too_low.consequences.is_empty());

        let near_min = validate_pipe_velocity(LegSide::Suction, 1.1, 3.0);
        assert_eq!(near_min.level, IssueSeverity::Warning);

        // Warning thresholds overlap across the whole band here
        // (1.0·1.2 = 1.2 = 1.5·0.8), so 1.21 reads as near-max
        let near_max = validate_pipe_velocity(LegSide::Suction, 1.25, 3.0);
        assert_eq!(near_max.level, IssueSeverity::Warning);

        let too_high = validate_pipe_velocity(LegSide::Suction, 2.5, 3.0);
        assert_eq!(too_high.level, IssueSeverity::Error);

        // A wide band leaves a genuinely optimal middle
        let optimal = validate_pipe_velocity(LegSide::Discharge, 1.8, 3.0);
        assert_eq!(optimal.level, IssueSeverity::Info);
    }

    #[test]
    fn curve_validation_findings() {
        use pf_hydraulics::CurvePoint;

        let empty = PumpCurve::default();
        let issues = validate_pump_curve(&empty);
        assert!(issues.iter().any(|i| i.severity == IssueSeverity::Error));

        let two_points = PumpCurve::new(vec![
            CurvePoint::new(50.0, 48.0, 2.0, 55.0),
            CurvePoint::new(100.0, 42.0, 3.0, 70.0),
        ]);
        let issues = validate_pump_curve(&two_points);
        assert!(issues
            .iter()
            .any(|i| i.severity == IssueSeverity::Warning && i.message.contains("3 points")));

        let unordered = PumpCurve::new(vec![
            CurvePoint::new(100.0, 42.0, 3.0, 70.0),
            CurvePoint::new(50.0, 48.0, 2.0, 55.0),
            CurvePoint::new(150.0, 33.0, 4.5, 68.0),
        ]);
        let issues = validate_pump_curve(&unordered);
        assert!(issues
            .iter()
            .any(|i| i.message.contains("ordered by increasing flow")));

        let implausible = PumpCurve::new(vec![
            CurvePoint::new(50.0, 600.0, 25.0, 99.0),
            CurvePoint::new(100.0, 42.0, 3.0, 70.0),
            CurvePoint::new(150.0, 33.0, 4.5, 68.0),
        ]);
        let issues = validate_pump_curve(&implausible);
        assert!(issues.iter().filter(|i| i.message.contains("Point 1")).count() >= 3);
    }
}
