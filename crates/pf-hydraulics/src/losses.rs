//! Pipe section losses: Darcy-Weisbach friction, fitting minor losses and
//! the combined per-section evaluation.

use crate::error::{HydraulicError, HydraulicResult};
use crate::friction::{friction_factor, pulp_friction_factor, reynolds};
use pf_catalog::FittingInstance;
use pf_core::units::constants::G0_MPS2;
use pf_core::units::{m, mps, Density, DynVisc, Length, Velocity, VolumeRate};
use pf_fluids::regime::{classify_regime, kmod, FlowRegimeResult, KmodMode, KmodModel};
use pf_fluids::{apparent_viscosity, pulp_density, PulpGrade};

/// Mean velocity in a circular pipe from volumetric flow.
///
/// # Errors
/// `InvalidInput` for a non-positive diameter or negative flow.
pub fn flow_velocity(flow: VolumeRate, inner_diameter: Length) -> HydraulicResult<Velocity> {
    if inner_diameter.value <= 0.0 {
        return Err(HydraulicError::InvalidInput {
            what: "inner diameter must be positive",
        });
    }
    if flow.value < 0.0 {
        return Err(HydraulicError::InvalidInput {
            what: "flow cannot be negative",
        });
    }

    let area = std::f64::consts::PI * inner_diameter.value * inner_diameter.value / 4.0;
    Ok(mps(flow.value / area))
}

/// Darcy-Weisbach friction head loss `h = f·(L/D)·V²/2g`.
///
/// # Errors
/// `InvalidInput` for a non-positive diameter or negative velocity.
pub fn friction_loss(
    f: f64,
    length: Length,
    inner_diameter: Length,
    velocity: Velocity,
) -> HydraulicResult<Length> {
    if inner_diameter.value <= 0.0 {
        return Err(HydraulicError::InvalidInput {
            what: "inner diameter must be positive",
        });
    }
    if velocity.value < 0.0 {
        return Err(HydraulicError::InvalidInput {
            what: "velocity cannot be negative",
        });
    }

    let v = velocity.value;
    Ok(m(f * (length.value / inner_diameter.value) * v * v / (2.0 * G0_MPS2)))
}

/// Minor head loss from an aggregated K: `h = K·V²/2g`.
pub fn minor_loss(total_k: f64, velocity: Velocity) -> Length {
    let v = velocity.value;
    m(total_k * v * v / (2.0 * G0_MPS2))
}

/// Everything needed to evaluate one leg (suction or discharge).
#[derive(Debug, Clone)]
pub struct SectionSpec {
    pub flow: VolumeRate,
    pub inner_diameter: Length,
    pub length: Length,
    pub roughness: Length,
    pub fittings: Vec<FittingInstance>,
    pub grade: PulpGrade,
    pub consistency_pct: f64,
    pub temperature_c: f64,
    pub sr_degrees: f64,
    pub kmod_mode: KmodMode,
}

/// Evaluated losses for one pipe section.
#[derive(Debug, Clone)]
pub struct SectionLosses {
    pub velocity: Velocity,
    pub reynolds: f64,
    pub regime: FlowRegimeResult,
    pub f_water: f64,
    pub kmod: f64,
    pub f_pulp: f64,
    pub friction_loss: Length,
    pub minor_loss: Length,
    pub total_loss: Length,
    pub equivalent_length: Length,
    pub density: Density,
    pub viscosity: DynVisc,
}

/// Evaluate a pipe section under the given flow, consistency and
/// temperature.
///
/// Chains velocity, pulp-apparent Reynolds, regime classification, the
/// water friction factor, Kmod, the pulp friction factor, and the friction
/// and minor losses. Equivalent length is the straight run plus the
/// fittings' L/D contribution.
pub fn section_losses(spec: &SectionSpec) -> HydraulicResult<SectionLosses> {
    let def = spec.grade.definition();

    let density = pulp_density(spec.consistency_pct);
    let viscosity = apparent_viscosity(spec.consistency_pct, spec.temperature_c);

    let velocity = flow_velocity(spec.flow, spec.inner_diameter)?;
    let re = reynolds(velocity, spec.inner_diameter, viscosity, density);

    let regime = classify_regime(def, velocity, spec.consistency_pct, spec.inner_diameter);

    let f_water = friction_factor(re, spec.roughness, spec.inner_diameter);

    let model = match spec.kmod_mode {
        KmodMode::RegionFallback => KmodModel::RegionFallback,
        KmodMode::VelocityRatio => KmodModel::VelocityRatio {
            ratio: velocity.value / regime.vw.value,
        },
    };
    let kmod = kmod(def, regime.regime, spec.consistency_pct, spec.sr_degrees, model);
    let f_pulp = pulp_friction_factor(f_water, kmod);

    let h_friction = friction_loss(f_pulp, spec.length, spec.inner_diameter, velocity)?;
    let total_k = pf_catalog::total_k(&spec.fittings)?;
    let h_minor = minor_loss(total_k, velocity);

    let leq = spec.length + pf_catalog::equivalent_length(&spec.fittings, spec.inner_diameter)?;

    Ok(SectionLosses {
        velocity,
        reynolds: re,
        regime,
        f_water,
        kmod,
        f_pulp,
        friction_loss: h_friction,
        minor_loss: h_minor,
        total_loss: h_friction + h_minor,
        equivalent_length: leq,
        density,
        viscosity,
    })
}
