//! Duffy-Möller flow regime classification and the Kmod friction modifier.
//!
//! Pulp suspensions move through three hydraulic regimes as velocity rises,
//! bounded by the lower transition velocity V1, the minimum-loss velocity
//! Vg and the drag velocity Vw. All three derive from the grade's drag
//! velocity correlation `Vw = a·C^b·D^c`, so `V1 < Vg < Vw` holds by
//! construction.

use crate::pulp::{PulpCategory, PulpDefinition};
use pf_core::units::{mps, Length, Velocity};
use serde::{Deserialize, Serialize};

/// Lower clamp for the Kmod friction modifier.
pub const KMOD_MIN: f64 = 0.5;
/// Upper clamp for the Kmod friction modifier.
pub const KMOD_MAX: f64 = 5.0;

/// Flow regime of a pulp suspension, in increasing velocity order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FlowRegime {
    /// Region 1 (`V < V1`): laminar interconnected fiber mat, highest
    /// resistance.
    FiberNetwork,
    /// Region 2a (`V1 ≤ V < Vg`): network disintegrating, losses falling.
    EarlyTransition,
    /// Region 2b (`Vg ≤ V < Vw`): loss-curve minimum, the economic
    /// operating point.
    OptimalTransition,
    /// Region 3 (`V ≥ Vw`): fibers suspended individually, water-like
    /// behavior.
    TurbulentDrag,
}

impl FlowRegime {
    pub fn description(self) -> &'static str {
        match self {
            FlowRegime::FiberNetwork => {
                "Laminar flow with an interconnected fiber network; highest resistance"
            }
            FlowRegime::EarlyTransition => "Fiber network breaking up; losses decreasing",
            FlowRegime::OptimalTransition => {
                "Loss-curve minimum; economically optimal operation"
            }
            FlowRegime::TurbulentDrag => {
                "Fibers individually suspended; behavior close to water"
            }
        }
    }
}

/// Outcome of classifying a section's flow.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FlowRegimeResult {
    pub regime: FlowRegime,
    /// Lower transition velocity
    pub v1: Velocity,
    /// Minimum-loss velocity
    pub vg: Velocity,
    /// Drag velocity
    pub vw: Velocity,
}

impl PulpCategory {
    /// `(V1/Vw, Vg/Vw)` transition ratios. Both are below one, so the
    /// regime bounds stay strictly ordered.
    pub fn transition_ratios(self) -> (f64, f64) {
        match self {
            PulpCategory::Recycled => (0.25, 0.55),
            PulpCategory::Kraft => (0.35, 0.65),
            _ => (0.30, 0.60),
        }
    }
}

/// Drag velocity `Vw = a·C^b·D^c` (C as a fraction, D in meters).
pub fn drag_velocity(def: &PulpDefinition, consistency_pct: f64, diameter: Length) -> Velocity {
    let c = consistency_pct / 100.0;
    mps(def.vw_a * c.powf(def.vw_b) * diameter.value.powf(def.vw_c))
}

/// Lower transition velocity `V1 = r₁·Vw`.
pub fn transition_velocity(
    def: &PulpDefinition,
    consistency_pct: f64,
    diameter: Length,
) -> Velocity {
    let (r1, _) = def.category.transition_ratios();
    drag_velocity(def, consistency_pct, diameter) * r1
}

/// Minimum-loss velocity `Vg = r₂·Vw`.
pub fn minimum_loss_velocity(
    def: &PulpDefinition,
    consistency_pct: f64,
    diameter: Length,
) -> Velocity {
    let (_, r2) = def.category.transition_ratios();
    drag_velocity(def, consistency_pct, diameter) * r2
}

/// Classify the flow regime for a grade at the given velocity, consistency
/// and inner diameter.
///
/// First matching bound wins; the bounds are strictly ordered so exactly
/// one regime applies.
pub fn classify_regime(
    def: &PulpDefinition,
    velocity: Velocity,
    consistency_pct: f64,
    diameter: Length,
) -> FlowRegimeResult {
    let vw = drag_velocity(def, consistency_pct, diameter);
    let (r1, r2) = def.category.transition_ratios();
    let v1 = vw * r1;
    let vg = vw * r2;

    let regime = if velocity < v1 {
        FlowRegime::FiberNetwork
    } else if velocity < vg {
        FlowRegime::EarlyTransition
    } else if velocity < vw {
        FlowRegime::OptimalTransition
    } else {
        FlowRegime::TurbulentDrag
    };

    FlowRegimeResult { regime, v1, vg, vw }
}

/// Strategy for the Kmod friction modifier.
///
/// The two modes are distinct models, not an optional refinement: the
/// velocity-ratio mode applies region-specific piecewise formulas driven
/// by V/Vw, while the fallback uses region-only constants scaled by
/// consistency.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum KmodModel {
    /// Piecewise formulas in the ratio `V/Vw`.
    VelocityRatio { ratio: f64 },
    /// Simplified region-only model.
    RegionFallback,
}

/// Which [`KmodModel`] a section evaluation should build.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum KmodMode {
    /// Region-only constants (the default).
    #[default]
    RegionFallback,
    /// Velocity-ratio formulas, with the ratio taken from the computed
    /// section velocity over the grade's drag velocity.
    VelocityRatio,
}

/// Friction modifier for pulp relative to water.
///
/// The regime-specific base value is corrected for refining degree
/// (`1 + 0.006·°SR`) and the grade's Duffy-Möller `K`, then clamped to
/// `[KMOD_MIN, KMOD_MAX]`.
pub fn kmod(
    def: &PulpDefinition,
    regime: FlowRegime,
    consistency_pct: f64,
    sr_degrees: f64,
    model: KmodModel,
) -> f64 {
    let c = consistency_pct;

    let base = match model {
        KmodModel::VelocityRatio { ratio } => match regime {
            FlowRegime::FiberNetwork => 2.5 + c / 10.0 + (0.3 - ratio) * 2.0,
            FlowRegime::EarlyTransition => 1.8 - (ratio - 0.3) * 2.0,
            FlowRegime::OptimalTransition => 0.7 + (ratio - 0.6) * 0.5,
            FlowRegime::TurbulentDrag => 1.0 + (ratio - 1.0) * 0.1,
        },
        KmodModel::RegionFallback => match regime {
            FlowRegime::FiberNetwork => 2.0 + c / 10.0,
            FlowRegime::EarlyTransition | FlowRegime::OptimalTransition => 0.8 + c / 20.0,
            FlowRegime::TurbulentDrag => 1.0,
        },
    };

    let refining_factor = 1.0 + 0.006 * sr_degrees;
    (base * refining_factor * def.k).clamp(KMOD_MIN, KMOD_MAX)
}


#[cfg(test)]
mod proptests {
    use super::*;
    use crate::pulp::PulpGrade;
    use pf_core::units::mm;
    use proptest::prelude::*;

    proptest! {
        #[test]
        fn transition_velocities_strictly_ordered(
            grade_idx in 0usize..12,
            consistency in 0.1f64..10.0,
            diameter_mm in 10.0f64..600.0,
        ) {
            let def = PulpGrade::ALL[grade_idx].definition();
            let d = mm(diameter_mm);
            let r = classify_regime(def, mps(0.0), consistency, d);
            prop_assert!(r.v1.value > 0.0);
            prop_assert!(r.v1 < r.vg);
            prop_assert!(r.vg < r.vw);
        }

        #[test]
        fn kmod_always_within_clamp(
            grade_idx in 0usize..12,
            consistency in 0.0f64..12.0,
            sr in 0.0f64..100.0,
            ratio in 0.0f64..3.0,
            regime_idx in 0usize..4,
        ) {
            let def = PulpGrade::ALL[grade_idx].definition();
            let regime = [
                FlowRegime::FiberNetwork,
                FlowRegime::EarlyTransition,
                FlowRegime::OptimalTransition,
                FlowRegime::TurbulentDrag,
            ][regime_idx];

            for model in [KmodModel::VelocityRatio { ratio }, KmodModel::RegionFallback] {
                let k = kmod(def, regime, consistency, sr, model);
                prop_assert!((KMOD_MIN..=KMOD_MAX).contains(&k));
            }
        }
    }
}
