//! Fitting coefficient catalog and minor-loss aggregation.
//!
//! Each entry carries an equivalent-length ratio L/D and, where one exists,
//! a typical K. Fittings without an explicit K fall back to
//! `K = (L/D) · 0.02`. Sudden contractions and expansions compute K from
//! the bore diameters instead (Crane TP-410 forms).

use crate::error::{CatalogError, CatalogResult};
use pf_core::units::Length;
use serde::{Deserialize, Serialize};

/// Friction factor assumed when deriving K from L/D.
pub const K_FROM_LD_FRICTION: f64 = 0.02;

/// Fitting family, for grouping and reporting.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FittingCategory {
    Elbow,
    Tee,
    Reducer,
    Valve,
    Entry,
    Exit,
    Strainer,
    PulpService,
}

/// Diameter-dependent K computation for bore-change fittings.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum VariableK {
    SuddenContraction,
    SuddenExpansion,
}

/// One catalog record.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FittingEntry {
    pub id: &'static str,
    pub name: &'static str,
    pub category: FittingCategory,
    pub l_d: f64,
    pub k_typical: Option<f64>,
    pub variable: Option<VariableK>,
}

const fn entry(
    id: &'static str,
    name: &'static str,
    category: FittingCategory,
    l_d: f64,
    k_typical: f64,
) -> FittingEntry {
    FittingEntry {
        id,
        name,
        category,
        l_d,
        k_typical: Some(k_typical),
        variable: None,
    }
}

const fn variable(
    id: &'static str,
    name: &'static str,
    which: VariableK,
) -> FittingEntry {
    FittingEntry {
        id,
        name,
        category: FittingCategory::Reducer,
        l_d: 0.0,
        k_typical: None,
        variable: Some(which),
    }
}

use FittingCategory::*;

static FITTING_CATALOG: [FittingEntry; 50] = [
    // Elbows
    entry("90_std", "90° standard elbow", Elbow, 30.0, 0.9),
    entry("90_long", "90° long-radius elbow", Elbow, 20.0, 0.6),
    entry("90_short", "90° short-radius elbow", Elbow, 50.0, 1.3),
    entry("45_std", "45° elbow", Elbow, 16.0, 0.4),
    entry("90_miter", "90° mitered elbow", Elbow, 60.0, 1.2),
    entry("return_180", "180° return bend", Elbow, 50.0, 1.5),
    // Tees
    entry("tee_run", "Tee, flow through run", Tee, 20.0, 0.4),
    entry("tee_branch_90", "Tee, flow through 90° branch", Tee, 60.0, 1.0),
    entry("tee_branch_angle", "Tee, angled branch", Tee, 45.0, 0.8),
    entry("tee_diverging", "Tee, diverging flow", Tee, 70.0, 1.2),
    // Reducers
    variable("sudden_contraction", "Sudden contraction", VariableK::SuddenContraction),
    variable("sudden_expansion", "Sudden expansion", VariableK::SuddenExpansion),
    entry("concentric_gradual", "Gradual concentric reducer", Reducer, 10.0, 0.3),
    entry("eccentric_gradual", "Gradual eccentric reducer", Reducer, 10.0, 0.35),
    // Valves
    entry("gate_full", "Gate valve, fully open", Valve, 8.0, 0.15),
    entry("gate_75", "Gate valve, 75% open", Valve, 35.0, 0.26),
    entry("gate_50", "Gate valve, 50% open", Valve, 160.0, 2.1),
    entry("gate_25", "Gate valve, 25% open", Valve, 900.0, 17.0),
    entry("globe_full", "Globe valve, fully open", Valve, 340.0, 4.0),
    entry("angle_full", "Angle valve, fully open", Valve, 150.0, 2.0),
    entry("butterfly_2_8", "Butterfly valve, 2\"–8\"", Valve, 45.0, 0.5),
    entry("butterfly_10_14", "Butterfly valve, 10\"–14\"", Valve, 35.0, 0.4),
    entry("butterfly_16_24", "Butterfly valve, 16\"–24\"", Valve, 25.0, 0.3),
    entry("check_swing", "Swing check valve", Valve, 100.0, 1.5),
    entry("check_ball", "Ball check valve", Valve, 150.0, 2.0),
    entry("check_lift", "Lift check valve", Valve, 600.0, 8.0),
    entry("plug_full", "Plug valve, fully open", Valve, 18.0, 0.4),
    entry("ball_full", "Ball valve, fully open", Valve, 3.0, 0.05),
    entry("diaphragm", "Diaphragm valve", Valve, 120.0, 2.0),
    entry("needle", "Needle valve", Valve, 400.0, 6.0),
    entry("pinch", "Pinch valve", Valve, 50.0, 0.8),
    entry("foot_valve", "Foot valve with strainer", Valve, 420.0, 5.0),
    entry("foot_valve_hinged", "Hinged foot valve", Valve, 75.0, 1.2),
    entry("sluice", "Sluice gate valve", Valve, 10.0, 0.2),
    entry("knife_gate", "Knife gate valve", Valve, 12.0, 0.25),
    // Entries and exits
    entry("tank_sharp", "Tank entrance, sharp edge", Entry, 0.0, 0.5),
    entry("tank_rounded", "Tank entrance, rounded edge", Entry, 0.0, 0.04),
    entry("tank_projecting", "Tank entrance, projecting pipe", Entry, 0.0, 0.8),
    entry("tank_bellmouth", "Tank entrance, bellmouth", Entry, 0.0, 0.05),
    entry("exit_sharp", "Pipe exit to tank", Exit, 0.0, 1.0),
    entry("exit_diffuser", "Pipe exit with diffuser", Exit, 0.0, 0.5),
    // Strainers
    entry("strainer_basket", "Basket strainer", Strainer, 300.0, 4.0),
    entry("strainer_t", "T-strainer", Strainer, 400.0, 5.0),
    entry("strainer_y", "Y-strainer", Strainer, 350.0, 4.5),
    entry("duplex_strainer", "Duplex strainer", Strainer, 500.0, 6.0),
    // Pulp service
    entry("blowoff_valve", "Blowoff valve", PulpService, 100.0, 1.5),
    entry("dilution_connection", "Dilution connection", PulpService, 50.0, 0.8),
    entry("sample_cock", "Sample cock", PulpService, 30.0, 0.5),
    entry("stock_line_valve", "Stock line valve", PulpService, 80.0, 1.2),
    entry("refiner_discharge", "Refiner discharge connection", PulpService, 120.0, 2.0),
];

/// K for a sudden contraction: `0.5 · (1 − (D2/D1)²)`, D1 upstream.
pub fn contraction_k(d1_mm: f64, d2_mm: f64) -> f64 {
    let ratio = d2_mm / d1_mm;
    0.5 * (1.0 - ratio * ratio)
}

/// K for a sudden expansion: `1 − (D1/D2)²`, D1 upstream.
///
/// This is the corrected Crane TP-410 form without the outer square. For
/// reversed diameter ratios it leaves the conventional [0, 1] range; the
/// raw value is reported as-is.
pub fn expansion_k(d1_mm: f64, d2_mm: f64) -> f64 {
    let ratio = d1_mm / d2_mm;
    1.0 - ratio * ratio
}

/// Look up a catalog record by fitting id.
pub fn fitting(id: &str) -> CatalogResult<&'static FittingEntry> {
    FITTING_CATALOG
        .iter()
        .find(|e| e.id == id)
        .ok_or_else(|| CatalogError::FittingNotFound { id: id.to_string() })
}

/// One fitting in a pipe section: catalog id plus quantity, with optional
/// overrides for K, L/D, or (for bore-change fittings) the two diameters.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FittingInstance {
    pub id: String,
    pub quantity: u32,
    #[serde(default)]
    pub k_override: Option<f64>,
    #[serde(default)]
    pub ld_override: Option<f64>,
    /// `(D1, D2)` in mm, upstream then downstream, for variable-K fittings.
    #[serde(default)]
    pub bore_change_mm: Option<(f64, f64)>,
}

impl FittingInstance {
    pub fn new(id: impl Into<String>, quantity: u32) -> Self {
        Self {
            id: id.into(),
            quantity,
            k_override: None,
            ld_override: None,
            bore_change_mm: None,
        }
    }

    pub fn with_k(mut self, k: f64) -> Self {
        self.k_override = Some(k);
        self
    }

    pub fn with_bore_change(mut self, d1_mm: f64, d2_mm: f64) -> Self {
        self.bore_change_mm = Some((d1_mm, d2_mm));
        self
    }
}

/// Resolve the per-unit K of one fitting instance.
///
/// Priority: explicit override, then the diameter formula for variable-K
/// fittings, then the catalog's typical K, then the `L/D × 0.02` fallback.
/// A variable-K fitting without diameters resolves to 0.5.
pub fn resolve_k(inst: &FittingInstance) -> CatalogResult<f64> {
    if let Some(k) = inst.k_override {
        return Ok(k);
    }

    let entry = fitting(&inst.id)?;

    if let Some(which) = entry.variable {
        if let Some((d1, d2)) = inst.bore_change_mm {
            return Ok(match which {
                VariableK::SuddenContraction => contraction_k(d1, d2),
                VariableK::SuddenExpansion => expansion_k(d1, d2),
            });
        }
        return Ok(entry.k_typical.unwrap_or(0.5));
    }

    match entry.k_typical {
        Some(k) => Ok(k),
        None => Ok(inst.ld_override.unwrap_or(entry.l_d) * K_FROM_LD_FRICTION),
    }
}

/// Total K of a fitting list: `Σ Kᵢ · quantityᵢ`.
pub fn total_k(fittings: &[FittingInstance]) -> CatalogResult<f64> {
    let mut sum = 0.0;
    for inst in fittings {
        sum += resolve_k(inst)? * f64::from(inst.quantity);
    }
    Ok(sum)
}

/// Equivalent straight length for a known K: `Le = K·D/f`.
pub fn equivalent_length_from_k(k: f64, inner_diameter: Length, friction: f64) -> Length {
    pf_core::units::m(k * inner_diameter.value / friction)
}

/// Total equivalent length: `Σ (L/D)ᵢ · D · quantityᵢ`.
pub fn equivalent_length(
    fittings: &[FittingInstance],
    inner_diameter: Length,
) -> CatalogResult<Length> {
    let mut sum = 0.0;
    for inst in fittings {
        let l_d = match inst.ld_override {
            Some(ld) => ld,
            None => fitting(&inst.id)?.l_d,
        };
        sum += l_d * inner_diameter.value * f64::from(inst.quantity);
    }
    Ok(pf_core::units::m(sum))
}
