//! Reynolds numbers and friction factors.

use pf_core::units::{Density, DynVisc, Length, Velocity};
use pf_fluids::REFERENCE_WATER_DENSITY_KG_M3;

/// Reynolds number `Re = ρ·V·D/μ`.
pub fn reynolds(
    velocity: Velocity,
    inner_diameter: Length,
    viscosity: DynVisc,
    density: Density,
) -> f64 {
    density.value * velocity.value * inner_diameter.value / viscosity.value
}

/// Modified Reynolds number for pulp suspensions.
///
/// The standard water Reynolds (at the 20 °C reference density) divided by
/// the fiber-network viscosity factor `1 + 2.5C + 10.05C²`.
pub fn modified_reynolds(
    velocity: Velocity,
    inner_diameter: Length,
    mu_water: DynVisc,
    consistency_pct: f64,
) -> f64 {
    let c = consistency_pct / 100.0;
    let viscosity_factor = 1.0 + 2.5 * c + 10.05 * c * c;
    let re_standard =
        REFERENCE_WATER_DENSITY_KG_M3 * velocity.value * inner_diameter.value / mu_water.value;
    re_standard / viscosity_factor
}

/// Darcy friction factor for water.
///
/// - `Re < 2000`: laminar, `64/Re`
/// - `Re > 4000`: Swamee-Jain estimate refined by up to 5 Colebrook-White
///   iterations (`1/√f = −2·log10(ε/3.7D + 2.51/(Re·√f))`), tolerance 1e-6
/// - `2000 ≤ Re ≤ 4000`: linear blend between the laminar value at 2000
///   and the turbulent value at 4000 (no correlation governs this zone)
///
/// Returns 0 for `Re ≤ 0` (stagnant flow contributes no friction loss).
pub fn friction_factor(re: f64, roughness: Length, inner_diameter: Length) -> f64 {
    if re <= 0.0 {
        return 0.0;
    }
    if re < 2000.0 {
        return 64.0 / re;
    }

    let epsilon_d = roughness.value / inner_diameter.value;

    if re <= 4000.0 {
        let f_laminar = 64.0 / 2000.0;
        let f_turbulent = swamee_jain(4000.0, epsilon_d);
        return f_laminar + (f_turbulent - f_laminar) * (re - 2000.0) / 2000.0;
    }

    let mut f = swamee_jain(re, epsilon_d);

    for _ in 0..5 {
        let sqrt_f = f.sqrt();
        let term = epsilon_d / 3.7 + 2.51 / (re * sqrt_f);
        let f_new = 1.0 / (4.0 * term.log10().powi(2));

        if (f_new - f).abs() < 1e-6 {
            return f_new;
        }
        f = f_new;
    }

    f
}

fn swamee_jain(re: f64, epsilon_d: f64) -> f64 {
    0.25 / (epsilon_d / 3.7 + 5.74 / re.powf(0.9)).log10().powi(2)
}

/// Pulp friction factor: the water factor scaled by Kmod.
pub fn pulp_friction_factor(f_water: f64, kmod: f64) -> f64 {
    f_water * kmod
}

#[cfg(test)]
mod tests {
    use super::*;
    use pf_core::units::{mm, mps, kgpm3, pas};

    #[test]
    fn reynolds_number_basic() {
        // 1 m/s of water in a 100 mm bore: Re = 998.2·1·0.1/0.001002
        let re = reynolds(mps(1.0), mm(100.0), pas(0.001002), kgpm3(998.2));
        assert!((re - 99_620.758).abs() < 0.01);
    }

    #[test]
    fn modified_reynolds_shrinks_with_consistency() {
        let re0 = modified_reynolds(mps(1.0), mm(100.0), pas(0.001002), 0.0);
        let re3 = modified_reynolds(mps(1.0), mm(100.0), pas(0.001002), 3.0);
        assert!(re3 < re0);
        // C = 0.03: factor = 1 + 0.075 + 0.009045
        assert!((re0 / re3 - 1.084045).abs() < 1e-9);
    }

    #[test]
    fn laminar_value_at_transition_edge() {
        // Blend at Re = 2000 starts exactly at 64/2000
        let f = friction_factor(2000.0, mm(0.045), mm(100.0));
        assert!((f - 0.032).abs() < 1e-12);
    }

    #[test]
    fn laminar_branch() {
        let f = friction_factor(1000.0, mm(0.045), mm(100.0));
        assert_eq!(f, 0.064);
    }

    #[test]
    fn turbulent_smooth_pipe_magnitude() {
        // Smooth pipe, Re = 1e5: f ≈ 0.018 (Moody chart)
        let f = friction_factor(1e5, mm(0.0015), mm(100.0));
        assert!((0.015..0.020).contains(&f), "f = {f}");
    }

    #[test]
    fn transition_blend_stays_bracketed() {
        let d = mm(100.0);
        let rough = mm(0.045);
        let f2000 = friction_factor(2000.0, rough, d);
        let f3000 = friction_factor(3000.0, rough, d);
        let f4000 = friction_factor(4000.0, rough, d);
        let (lo, hi) = if f2000 < f4000 {
            (f2000, f4000)
        } else {
            (f4000, f2000)
        };
        assert!((lo..=hi).contains(&f3000), "f3000 = {f3000} not in [{lo}, {hi}]");
        // The midpoint of the blend is the arithmetic mean of the ends
        assert!((f3000 - 0.5 * (f2000 + f4000)).abs() < 1e-3);
    }

    #[test]
    fn stagnant_flow_has_no_friction() {
        assert_eq!(friction_factor(0.0, mm(0.045), mm(100.0)), 0.0);
    }

    #[test]
    fn pulp_factor_scales_water_factor() {
        assert!((pulp_friction_factor(0.02, 2.5) - 0.05).abs() < 1e-12);
    }
}

#[cfg(test)]
mod proptests {
    use super::*;
    use pf_core::units::mm;
    use proptest::prelude::*;

    proptest! {
        #[test]
        fn friction_factor_nonnegative(
            re in 1.0f64..1e8,
            roughness_mm in 0.0001f64..1.0,
            d_mm in 10.0f64..600.0,
        ) {
            let f = friction_factor(re, mm(roughness_mm), mm(d_mm));
            prop_assert!(f >= 0.0);
            prop_assert!(f.is_finite());
        }
    }
}
