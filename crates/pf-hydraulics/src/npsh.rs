//! Available NPSH and the cavitation verdict.

use pf_core::units::constants::G0_MPS2;
use pf_core::units::{Density, Length, Pressure, Velocity, m};
use serde::{Deserialize, Serialize};

/// Default safety margin subtracted from NPSHd before comparing against
/// NPSHr (m).
pub const DEFAULT_NPSH_MARGIN_M: f64 = 0.5;

/// Available NPSH at the pump suction flange.
///
/// `NPSHd = P/γ + V²/2g − Pv/γ − h_losses`, with `γ = ρ·g`. `p_suction`
/// must be absolute.
pub fn npsh_available(
    p_suction: Pressure,
    velocity: Velocity,
    p_vapor: Pressure,
    losses: Length,
    density: Density,
) -> Length {
    let gamma = density.value * G0_MPS2;
    let pressure_head = p_suction.value / gamma;
    let velocity_head = velocity.value * velocity.value / (2.0 * G0_MPS2);
    let vapor_head = p_vapor.value / gamma;

    m(pressure_head + velocity_head - vapor_head - losses.value)
}

/// Cavitation verdict severity.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CavitationSeverity {
    Safe,
    Warning,
    Critical,
}

/// Structured cavitation verdict.
///
/// A negative NPSHd is a valid computed number describing an impossible
/// operating point; it comes back as the highest-severity verdict rather
/// than an error, because the caller must show it to the engineer.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CavitationCheck {
    pub safe: bool,
    pub severity: CavitationSeverity,
    pub message: String,
    /// `NPSHd − NPSHr` (m)
    pub margin_m: f64,
    pub consequences: Vec<String>,
    pub recommendations: Vec<String>,
}

fn strs(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| s.to_string()).collect()
}

/// Evaluate the cavitation verdict.
///
/// The branches are checked in priority order and the first match wins:
///
/// 1. `NPSHd < 0` — physically impossible operation (suction below vapor
///    pressure)
/// 2. margin under 5% over NPSHr — critical
/// 3. margin between 5% and 11% — warning, still operable
/// 4. below NPSHr — critical cavitation risk
/// 5. otherwise — safe
pub fn check_cavitation(npshd_m: f64, npshr_m: f64, margin_m: f64) -> CavitationCheck {
    let margin = npshd_m - npshr_m;

    if npshd_m < 0.0 {
        return CavitationCheck {
            safe: false,
            severity: CavitationSeverity::Critical,
            message: "Available NPSH is negative - operation physically impossible".into(),
            margin_m: margin,
            consequences: strs(&[
                "Suction pressure is below the fluid vapor pressure",
                "The pump cannot operate under these conditions",
                "Immediate and severe cavitation is guaranteed",
            ]),
            recommendations: strs(&[
                "Raise the suction tank pressure",
                "Lower the fluid temperature",
                "Lower the pump (reduce static lift)",
                "Reduce suction losses (increase the suction bore)",
            ]),
        };
    }

    let available = npshd_m - margin_m;

    if available < npshr_m * 1.05 && available >= npshr_m {
        return CavitationCheck {
            safe: false,
            severity: CavitationSeverity::Critical,
            message: "NPSH margin critical (under 5%)".into(),
            margin_m: margin,
            consequences: strs(&[
                "High cavitation risk under minor operating variations",
            ]),
            recommendations: strs(&["Increase the available NPSH"]),
        };
    }

    if available < npshr_m * 1.1 && available >= npshr_m * 1.05 {
        return CavitationCheck {
            safe: true,
            severity: CavitationSeverity::Warning,
            message: "NPSH margin reduced (5-11%)".into(),
            margin_m: margin,
            consequences: Vec::new(),
            recommendations: Vec::new(),
        };
    }

    if available < npshr_m {
        return CavitationCheck {
            safe: false,
            severity: CavitationSeverity::Critical,
            message: "Cavitation risk".into(),
            margin_m: margin,
            consequences: Vec::new(),
            recommendations: Vec::new(),
        };
    }

    CavitationCheck {
        safe: true,
        severity: CavitationSeverity::Safe,
        message: "Safe operation".into(),
        margin_m: margin,
        consequences: Vec::new(),
        recommendations: Vec::new(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pf_core::units::{kgpm3, kpa, mps};

    #[test]
    fn npsh_available_worked_example() {
        // Atmospheric suction, 1 m/s, 20 °C water, 1 m of losses:
        // γ = 998.2·9.80665 ≈ 9789 N/m³
        // 101325/9789 + 0.051 − 2338/9789 − 1.0 ≈ 9.16 m
        let npshd = npsh_available(
            kpa(101.325),
            mps(1.0),
            kpa(2.338),
            m(1.0),
            kgpm3(998.2),
        );
        assert!((npshd.value - 9.163).abs() < 0.005, "NPSHd = {}", npshd.value);
    }

    #[test]
    fn worked_example_is_safe() {
        let npshd = 9.163;
        let check = check_cavitation(npshd, 3.0, DEFAULT_NPSH_MARGIN_M);
        assert!(check.safe);
        assert_eq!(check.severity, CavitationSeverity::Safe);
        assert!((check.margin_m - (npshd - 3.0)).abs() < 1e-9);
    }

    #[test]
    fn negative_npshd_always_physically_impossible() {
        for npshr in [0.0, 1.0, 5.0, 100.0] {
            let check = check_cavitation(-1.0, npshr, DEFAULT_NPSH_MARGIN_M);
            assert!(!check.safe);
            assert_eq!(check.severity, CavitationSeverity::Critical);
            assert!(check.message.contains("physically impossible"));
            assert!(!check.consequences.is_empty());
            assert!(!check.recommendations.is_empty());
        }
    }

    #[test]
    fn margin_band_under_5_percent_is_critical() {
        // NPSHr = 4.0, margin 0.5: available in [4.0, 4.2)
        let check = check_cavitation(4.6, 4.0, 0.5);
        assert!(!check.safe);
        assert_eq!(check.severity, CavitationSeverity::Critical);
        assert!(check.message.contains("under 5%"));
    }

    #[test]
    fn margin_band_5_to_11_percent_warns_but_operates() {
        // available = 4.3 is within [4.2, 4.4)
        let check = check_cavitation(4.8, 4.0, 0.5);
        assert!(check.safe);
        assert_eq!(check.severity, CavitationSeverity::Warning);
    }

    #[test]
    fn below_required_is_cavitation_risk() {
        let check = check_cavitation(3.0, 4.0, 0.5);
        assert!(!check.safe);
        assert_eq!(check.severity, CavitationSeverity::Critical);
        assert!(check.message.contains("Cavitation risk"));
    }

    #[test]
    fn vacuum_conditions_can_push_npshd_negative() {
        // Deep vacuum on the suction tank with hot stock
        let npshd = npsh_available(
            kpa(5.0),
            mps(1.0),
            kpa(47.373),
            m(0.5),
            kgpm3(971.8),
        );
        assert!(npshd.value < 0.0);
    }
}
