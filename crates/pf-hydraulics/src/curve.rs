//! Pump characteristic curve and piecewise-linear interpolation.

use pf_core::numeric::interp_linear;
use serde::{Deserialize, Serialize};

/// One point of a pump characteristic curve.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CurvePoint {
    pub flow_lps: f64,
    pub tdh_m: f64,
    pub npshr_m: f64,
    pub efficiency_pct: f64,
}

impl CurvePoint {
    pub fn new(flow_lps: f64, tdh_m: f64, npshr_m: f64, efficiency_pct: f64) -> Self {
        Self {
            flow_lps,
            tdh_m,
            npshr_m,
            efficiency_pct,
        }
    }
}

/// Which curve field to interpolate.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CurveField {
    Tdh,
    Npshr,
    Efficiency,
}

/// A pump characteristic curve, ordered by increasing flow.
///
/// Correct interpolation requires monotonically increasing flow; unordered
/// points degrade to whatever bracketing interval is found first, which the
/// validation layer reports as a warning.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PumpCurve {
    pub points: Vec<CurvePoint>,
}

impl PumpCurve {
    pub fn new(points: Vec<CurvePoint>) -> Self {
        Self { points }
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// `(min flow, max flow)` covered by the curve.
    pub fn flow_span(&self) -> Option<(f64, f64)> {
        let first = self.points.first()?;
        let last = self.points.last()?;
        let mut lo = first.flow_lps.min(last.flow_lps);
        let mut hi = first.flow_lps.max(last.flow_lps);
        for p in &self.points {
            lo = lo.min(p.flow_lps);
            hi = hi.max(p.flow_lps);
        }
        Some((lo, hi))
    }

    /// Interpolate a curve field at the given flow.
    ///
    /// Below the first point or above the last, the boundary value is
    /// returned (flat extrapolation). An empty curve yields 0 — a soft,
    /// caller-visible degenerate value rather than an error.
    pub fn interpolate(&self, flow_lps: f64, field: CurveField) -> f64 {
        let pairs: Vec<(f64, f64)> = self
            .points
            .iter()
            .map(|p| {
                let y = match field {
                    CurveField::Tdh => p.tdh_m,
                    CurveField::Npshr => p.npshr_m,
                    CurveField::Efficiency => p.efficiency_pct,
                };
                (p.flow_lps, y)
            })
            .collect();

        interp_linear(flow_lps, &pairs).unwrap_or(0.0)
    }

    pub fn tdh_at(&self, flow_lps: f64) -> f64 {
        self.interpolate(flow_lps, CurveField::Tdh)
    }

    pub fn npshr_at(&self, flow_lps: f64) -> f64 {
        self.interpolate(flow_lps, CurveField::Npshr)
    }

    pub fn efficiency_at(&self, flow_lps: f64) -> f64 {
        self.interpolate(flow_lps, CurveField::Efficiency)
    }
}
