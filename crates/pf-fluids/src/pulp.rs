//! Pulp grade catalog and stock properties.
//!
//! One static [`PulpDefinition`] per grade, carrying the Duffy-Möller
//! coefficients, drag-velocity constants and typical process ranges. The
//! records are read-only reference data, never mutated.

use crate::error::FluidError;
use crate::water::water_properties;
use pf_core::units::{kgpm3, pas, Density, DynVisc};
use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// Water density at the 20 °C reference condition (kg/m³).
///
/// Stock density is defined against this fixed reference regardless of the
/// actual process temperature.
pub const REFERENCE_WATER_DENSITY_KG_M3: f64 = 998.2;

/// Broad pulping process family. Drives the V1/Vg transition ratios.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PulpCategory {
    Kraft,
    Mechanical,
    Recycled,
    Chemical,
    Semichemical,
    ChemiThermoMechanical,
}

/// Supported pulp grades.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PulpGrade {
    KraftBleachedPine,
    KraftBleachedEucalyptus,
    KraftUnbleachedPine,
    TmpMixed,
    TmpPine,
    OccRecycled,
    OnpRecycled,
    BisulfiteMixed,
    NsscMixed,
    CtmpMixed,
    FluffPulp,
    DissolvingPulp,
}

impl PulpGrade {
    pub const ALL: [PulpGrade; 12] = [
        PulpGrade::KraftBleachedPine,
        PulpGrade::KraftBleachedEucalyptus,
        PulpGrade::KraftUnbleachedPine,
        PulpGrade::TmpMixed,
        PulpGrade::TmpPine,
        PulpGrade::OccRecycled,
        PulpGrade::OnpRecycled,
        PulpGrade::BisulfiteMixed,
        PulpGrade::NsscMixed,
        PulpGrade::CtmpMixed,
        PulpGrade::FluffPulp,
        PulpGrade::DissolvingPulp,
    ];

    /// Stable string key, matching the serde representation.
    pub fn key(self) -> &'static str {
        self.definition().key
    }

    /// The static catalog record for this grade.
    pub fn definition(self) -> &'static PulpDefinition {
        &PULP_CATALOG[self as usize]
    }
}

impl FromStr for PulpGrade {
    type Err = FluidError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        PulpGrade::ALL
            .iter()
            .copied()
            .find(|g| g.key() == s)
            .ok_or_else(|| FluidError::UnknownGrade(s.to_string()))
    }
}

/// Static per-grade record: Duffy-Möller coefficients, drag-velocity
/// constants `Vw = a·C^b·D^c`, and typical process ranges.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PulpDefinition {
    pub key: &'static str,
    pub display_name: &'static str,
    pub category: PulpCategory,
    /// Duffy-Möller coefficients
    pub k: f64,
    pub alpha: f64,
    pub beta: f64,
    pub gamma: f64,
    /// Drag velocity constants
    pub vw_a: f64,
    pub vw_b: f64,
    pub vw_c: f64,
    /// Typical ranges
    pub consistency_min_pct: f64,
    pub consistency_max_pct: f64,
    pub consistency_typical_pct: f64,
    pub freeness_min_csf: f64,
    pub freeness_max_csf: f64,
    pub sr_min: f64,
    pub sr_max: f64,
    /// Fiber properties
    pub fiber_length_mm: f64,
    pub coarseness_mg_m: f64,
    pub bulk_cm3_g: f64,
}

/// Grade catalog, indexed by `PulpGrade as usize`.
static PULP_CATALOG: [PulpDefinition; 12] = [
    PulpDefinition {
        key: "kraft_bleached_pine",
        display_name: "Bleached softwood kraft (pine)",
        category: PulpCategory::Kraft,
        k: 1.05,
        alpha: -0.18,
        beta: 1.20,
        gamma: 0.10,
        vw_a: 1.35,
        vw_b: 1.15,
        vw_c: 0.40,
        consistency_min_pct: 1.5,
        consistency_max_pct: 5.0,
        consistency_typical_pct: 3.0,
        freeness_min_csf: 500.0,
        freeness_max_csf: 700.0,
        sr_min: 25.0,
        sr_max: 40.0,
        fiber_length_mm: 2.5,
        coarseness_mg_m: 0.15,
        bulk_cm3_g: 2.5,
    },
    PulpDefinition {
        key: "kraft_bleached_eucalyptus",
        display_name: "Bleached hardwood kraft (eucalyptus)",
        category: PulpCategory::Kraft,
        k: 0.95,
        alpha: -0.20,
        beta: 1.15,
        gamma: 0.08,
        vw_a: 1.30,
        vw_b: 1.10,
        vw_c: 0.35,
        consistency_min_pct: 1.5,
        consistency_max_pct: 5.0,
        consistency_typical_pct: 3.0,
        freeness_min_csf: 400.0,
        freeness_max_csf: 600.0,
        sr_min: 30.0,
        sr_max: 45.0,
        fiber_length_mm: 0.9,
        coarseness_mg_m: 0.09,
        bulk_cm3_g: 1.8,
    },
    PulpDefinition {
        key: "kraft_unbleached_pine",
        display_name: "Unbleached softwood kraft (pine)",
        category: PulpCategory::Kraft,
        k: 1.15,
        alpha: -0.15,
        beta: 1.25,
        gamma: 0.12,
        vw_a: 1.58,
        vw_b: 1.20,
        vw_c: 0.45,
        consistency_min_pct: 2.0,
        consistency_max_pct: 6.0,
        consistency_typical_pct: 3.5,
        freeness_min_csf: 600.0,
        freeness_max_csf: 750.0,
        sr_min: 15.0,
        sr_max: 30.0,
        fiber_length_mm: 3.0,
        coarseness_mg_m: 0.20,
        bulk_cm3_g: 2.8,
    },
    PulpDefinition {
        key: "tmp_mixed",
        display_name: "TMP (mixed furnish)",
        category: PulpCategory::Mechanical,
        k: 1.25,
        alpha: -0.12,
        beta: 1.30,
        gamma: 0.15,
        vw_a: 1.65,
        vw_b: 1.22,
        vw_c: 0.48,
        consistency_min_pct: 2.5,
        consistency_max_pct: 5.5,
        consistency_typical_pct: 4.0,
        freeness_min_csf: 100.0,
        freeness_max_csf: 200.0,
        sr_min: 60.0,
        sr_max: 90.0,
        fiber_length_mm: 1.8,
        coarseness_mg_m: 0.25,
        bulk_cm3_g: 3.2,
    },
    PulpDefinition {
        key: "tmp_pine",
        display_name: "TMP (pine)",
        category: PulpCategory::Mechanical,
        k: 1.30,
        alpha: -0.10,
        beta: 1.32,
        gamma: 0.16,
        vw_a: 1.70,
        vw_b: 1.25,
        vw_c: 0.50,
        consistency_min_pct: 2.5,
        consistency_max_pct: 5.5,
        consistency_typical_pct: 4.0,
        freeness_min_csf: 100.0,
        freeness_max_csf: 200.0,
        sr_min: 65.0,
        sr_max: 95.0,
        fiber_length_mm: 2.2,
        coarseness_mg_m: 0.28,
        bulk_cm3_g: 3.5,
    },
    PulpDefinition {
        key: "occ_recycled",
        display_name: "OCC (recycled corrugated)",
        category: PulpCategory::Recycled,
        k: 1.35,
        alpha: -0.10,
        beta: 1.35,
        gamma: 0.18,
        vw_a: 1.42,
        vw_b: 1.18,
        vw_c: 0.42,
        consistency_min_pct: 3.0,
        consistency_max_pct: 6.5,
        consistency_typical_pct: 4.5,
        freeness_min_csf: 300.0,
        freeness_max_csf: 500.0,
        sr_min: 40.0,
        sr_max: 60.0,
        fiber_length_mm: 1.5,
        coarseness_mg_m: 0.18,
        bulk_cm3_g: 2.2,
    },
    PulpDefinition {
        key: "onp_recycled",
        display_name: "ONP (recycled newsprint)",
        category: PulpCategory::Recycled,
        k: 1.30,
        alpha: -0.11,
        beta: 1.32,
        gamma: 0.16,
        vw_a: 1.45,
        vw_b: 1.20,
        vw_c: 0.44,
        consistency_min_pct: 2.5,
        consistency_max_pct: 5.5,
        consistency_typical_pct: 4.0,
        freeness_min_csf: 200.0,
        freeness_max_csf: 400.0,
        sr_min: 50.0,
        sr_max: 70.0,
        fiber_length_mm: 1.3,
        coarseness_mg_m: 0.22,
        bulk_cm3_g: 2.8,
    },
    PulpDefinition {
        key: "bisulfite_mixed",
        display_name: "Bisulfite (mixed furnish)",
        category: PulpCategory::Chemical,
        k: 1.10,
        alpha: -0.16,
        beta: 1.22,
        gamma: 0.11,
        vw_a: 1.32,
        vw_b: 1.12,
        vw_c: 0.38,
        consistency_min_pct: 2.0,
        consistency_max_pct: 5.0,
        consistency_typical_pct: 3.0,
        freeness_min_csf: 500.0,
        freeness_max_csf: 650.0,
        sr_min: 20.0,
        sr_max: 35.0,
        fiber_length_mm: 1.8,
        coarseness_mg_m: 0.12,
        bulk_cm3_g: 2.2,
    },
    PulpDefinition {
        key: "nssc_mixed",
        display_name: "NSSC semichemical (mixed furnish)",
        category: PulpCategory::Semichemical,
        k: 1.18,
        alpha: -0.13,
        beta: 1.26,
        gamma: 0.14,
        vw_a: 1.40,
        vw_b: 1.18,
        vw_c: 0.41,
        consistency_min_pct: 2.5,
        consistency_max_pct: 5.0,
        consistency_typical_pct: 3.5,
        freeness_min_csf: 400.0,
        freeness_max_csf: 600.0,
        sr_min: 30.0,
        sr_max: 50.0,
        fiber_length_mm: 1.6,
        coarseness_mg_m: 0.16,
        bulk_cm3_g: 2.6,
    },
    PulpDefinition {
        key: "ctmp_mixed",
        display_name: "CTMP (mixed furnish)",
        category: PulpCategory::ChemiThermoMechanical,
        k: 1.22,
        alpha: -0.14,
        beta: 1.28,
        gamma: 0.13,
        vw_a: 1.50,
        vw_b: 1.20,
        vw_c: 0.45,
        consistency_min_pct: 2.5,
        consistency_max_pct: 5.5,
        consistency_typical_pct: 4.0,
        freeness_min_csf: 250.0,
        freeness_max_csf: 450.0,
        sr_min: 45.0,
        sr_max: 65.0,
        fiber_length_mm: 1.9,
        coarseness_mg_m: 0.22,
        bulk_cm3_g: 3.0,
    },
    PulpDefinition {
        key: "fluff_pulp",
        display_name: "Fluff pulp",
        category: PulpCategory::Kraft,
        k: 1.40,
        alpha: -0.08,
        beta: 1.38,
        gamma: 0.20,
        vw_a: 1.55,
        vw_b: 1.25,
        vw_c: 0.48,
        consistency_min_pct: 3.0,
        consistency_max_pct: 6.0,
        consistency_typical_pct: 4.5,
        freeness_min_csf: 500.0,
        freeness_max_csf: 700.0,
        sr_min: 15.0,
        sr_max: 25.0,
        fiber_length_mm: 2.8,
        coarseness_mg_m: 0.22,
        bulk_cm3_g: 4.5,
    },
    PulpDefinition {
        key: "dissolving_pulp",
        display_name: "Dissolving pulp",
        category: PulpCategory::Kraft,
        k: 0.90,
        alpha: -0.22,
        beta: 1.10,
        gamma: 0.06,
        vw_a: 1.25,
        vw_b: 1.08,
        vw_c: 0.32,
        consistency_min_pct: 2.0,
        consistency_max_pct: 5.0,
        consistency_typical_pct: 3.0,
        freeness_min_csf: 450.0,
        freeness_max_csf: 600.0,
        sr_min: 18.0,
        sr_max: 28.0,
        fiber_length_mm: 2.0,
        coarseness_mg_m: 0.10,
        bulk_cm3_g: 1.5,
    },
];

/// Stock density from fiber consistency.
///
/// `ρ = 998.2 · (1 + 0.006 · consistency%)`, against the fixed 20 °C water
/// reference (the process temperature is deliberately not consulted).
pub fn pulp_density(consistency_pct: f64) -> Density {
    kgpm3(REFERENCE_WATER_DENSITY_KG_M3 * (1.0 + 0.006 * consistency_pct))
}

/// Apparent viscosity of the fiber suspension.
///
/// `μ = μ_water(T) · (1 + 2.5C + 10.05C² + 0.00273·e^(20C))` with C as a
/// mass fraction. The correlation models the fiber-network (laminar)
/// region; it is applied uniformly across regimes here.
pub fn apparent_viscosity(consistency_pct: f64, temp_c: f64) -> DynVisc {
    let mu_water = water_properties(temp_c).viscosity_pa_s;
    let c = consistency_pct / 100.0;
    let factor = 1.0 + 2.5 * c + 10.05 * c * c + 0.00273 * (20.0 * c).exp();
    pas(mu_water * factor)
}
