//! Tabulated water properties and derived lookups.
//!
//! The table covers 0–100 °C in 5 °C steps. Lookups at a node temperature
//! return the stored record exactly; between nodes each field interpolates
//! linearly; outside the table the nearest edge node is returned (no
//! extrapolation).

use pf_core::numeric::lerp;
use pf_core::units::{kgpm3, kpa, pas, Density, DynVisc, Pressure};

/// Water properties at a single temperature.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct WaterProperties {
    pub temp_c: f64,
    pub density_kg_m3: f64,
    pub viscosity_pa_s: f64,
    pub vapor_pressure_kpa: f64,
    pub surface_tension_mn_m: f64,
    pub bulk_modulus_pa: f64,
}

impl WaterProperties {
    pub fn density(&self) -> Density {
        kgpm3(self.density_kg_m3)
    }

    pub fn viscosity(&self) -> DynVisc {
        pas(self.viscosity_pa_s)
    }

    pub fn vapor_pressure(&self) -> Pressure {
        kpa(self.vapor_pressure_kpa)
    }
}

const fn row(
    temp_c: f64,
    density_kg_m3: f64,
    viscosity_pa_s: f64,
    vapor_pressure_kpa: f64,
    surface_tension_mn_m: f64,
    bulk_modulus_pa: f64,
) -> WaterProperties {
    WaterProperties {
        temp_c,
        density_kg_m3,
        viscosity_pa_s,
        vapor_pressure_kpa,
        surface_tension_mn_m,
        bulk_modulus_pa,
    }
}

/// Saturated-water properties, 0–100 °C in 5 °C steps.
const WATER_TABLE: [WaterProperties; 21] = [
    row(0.0, 999.8, 0.001792, 0.611, 75.6, 2.04e9),
    row(5.0, 999.9, 0.001519, 0.872, 74.9, 2.06e9),
    row(10.0, 999.7, 0.001308, 1.228, 74.2, 2.11e9),
    row(15.0, 999.1, 0.001139, 1.705, 73.5, 2.14e9),
    row(20.0, 998.2, 0.001002, 2.338, 72.8, 2.18e9),
    row(25.0, 997.0, 0.000890, 3.169, 72.0, 2.22e9),
    row(30.0, 995.7, 0.000798, 4.245, 71.2, 2.25e9),
    row(35.0, 994.1, 0.000720, 5.627, 70.4, 2.26e9),
    row(40.0, 992.2, 0.000653, 7.381, 69.6, 2.28e9),
    row(45.0, 990.2, 0.000596, 9.593, 68.7, 2.29e9),
    row(50.0, 988.1, 0.000547, 12.344, 67.9, 2.29e9),
    row(55.0, 985.7, 0.000504, 15.763, 67.0, 2.30e9),
    row(60.0, 983.2, 0.000467, 19.944, 66.2, 2.28e9),
    row(65.0, 980.6, 0.000434, 25.022, 65.4, 2.26e9),
    row(70.0, 977.8, 0.000404, 31.176, 64.4, 2.25e9),
    row(75.0, 974.9, 0.000378, 38.595, 63.5, 2.22e9),
    row(80.0, 971.8, 0.000355, 47.373, 62.6, 2.20e9),
    row(85.0, 968.6, 0.000334, 57.815, 61.7, 2.17e9),
    row(90.0, 965.3, 0.000315, 70.117, 60.8, 2.14e9),
    row(95.0, 961.9, 0.000298, 84.529, 59.9, 2.10e9),
    row(100.0, 958.4, 0.000282, 101.325, 58.9, 2.06e9),
];

/// Dissolved-air solubility in water at 1 atm (°C, mg/L).
const AIR_SOLUBILITY_TABLE: [(f64, f64); 21] = [
    (0.0, 37.9),
    (5.0, 34.0),
    (10.0, 30.5),
    (15.0, 27.5),
    (20.0, 24.8),
    (25.0, 22.4),
    (30.0, 20.3),
    (35.0, 18.4),
    (40.0, 16.7),
    (45.0, 15.2),
    (50.0, 13.8),
    (55.0, 12.6),
    (60.0, 11.5),
    (65.0, 10.5),
    (70.0, 9.6),
    (75.0, 8.8),
    (80.0, 8.1),
    (85.0, 7.4),
    (90.0, 6.8),
    (95.0, 6.3),
    (100.0, 5.8),
];

/// Water properties at `temp_c`, interpolated between table nodes.
///
/// Temperatures outside [0, 100] °C clamp to the nearest edge node; the
/// returned `temp_c` always echoes the requested temperature.
pub fn water_properties(temp_c: f64) -> WaterProperties {
    let first = &WATER_TABLE[0];
    let last = &WATER_TABLE[WATER_TABLE.len() - 1];

    if temp_c <= first.temp_c {
        return WaterProperties { temp_c, ..*first };
    }
    if temp_c >= last.temp_c {
        return WaterProperties { temp_c, ..*last };
    }

    let mut lower = first;
    let mut upper = last;
    for pair in WATER_TABLE.windows(2) {
        if temp_c >= pair[0].temp_c && temp_c <= pair[1].temp_c {
            lower = &pair[0];
            upper = &pair[1];
            break;
        }
    }

    let t = (temp_c - lower.temp_c) / (upper.temp_c - lower.temp_c);
    WaterProperties {
        temp_c,
        density_kg_m3: lerp(lower.density_kg_m3, upper.density_kg_m3, t),
        viscosity_pa_s: lerp(lower.viscosity_pa_s, upper.viscosity_pa_s, t),
        vapor_pressure_kpa: lerp(lower.vapor_pressure_kpa, upper.vapor_pressure_kpa, t),
        surface_tension_mn_m: lerp(lower.surface_tension_mn_m, upper.surface_tension_mn_m, t),
        bulk_modulus_pa: lerp(lower.bulk_modulus_pa, upper.bulk_modulus_pa, t),
    }
}

/// Water vapor pressure (kPa) from the Antoine equation.
///
/// `log10(P_mmHg) = 8.07131 − 1730.63 / (233.426 + T)`, coefficients valid
/// for 1–100 °C. Serves as an analytic cross-check against the tabulated
/// vapor pressure.
pub fn vapor_pressure_antoine(temp_c: f64) -> f64 {
    const A: f64 = 8.07131;
    const B: f64 = 1730.63;
    const C: f64 = 233.426;

    let log10_p_mmhg = A - B / (C + temp_c);
    let p_mmhg = 10f64.powf(log10_p_mmhg);
    p_mmhg * pf_core::units::constants::MMHG_TO_KPA
}

/// Dissolved-air solubility (mg/L at 1 atm), interpolated with the same
/// edge-clamp policy as [`water_properties`].
pub fn air_solubility_mg_l(temp_c: f64) -> f64 {
    let (t_first, s_first) = AIR_SOLUBILITY_TABLE[0];
    let (t_last, s_last) = AIR_SOLUBILITY_TABLE[AIR_SOLUBILITY_TABLE.len() - 1];

    if temp_c <= t_first {
        return s_first;
    }
    if temp_c >= t_last {
        return s_last;
    }

    for pair in AIR_SOLUBILITY_TABLE.windows(2) {
        let (t0, s0) = pair[0];
        let (t1, s1) = pair[1];
        if temp_c >= t0 && temp_c <= t1 {
            return lerp(s0, s1, (temp_c - t0) / (t1 - t0));
        }
    }

    s_last
}
