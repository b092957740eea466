//! Pipe dimension tables by norm, nominal size and schedule.
//!
//! Sources: ANSI B36.10 (carbon steel), ANSI B36.19 (stainless), PVC
//! schedule 40 and 80. Each flat table row is
//! `(nominal, OD mm, wall mm, ID mm, weight kg/m)`.

use crate::error::{CatalogError, CatalogResult};
use pf_core::units::{mm, Length};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Pipe dimension norm (material family).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PipeNorm {
    /// ANSI B36.10, carbon steel
    #[serde(rename = "ANSI_B36_10")]
    AnsiB36_10,
    /// ANSI B36.19, stainless steel
    #[serde(rename = "ANSI_B36_19")]
    AnsiB36_19,
    /// PVC, schedule 40 catalog
    #[serde(rename = "PVC_40")]
    Pvc40,
    /// PVC, schedule 80 catalog
    #[serde(rename = "PVC_80")]
    Pvc80,
}

impl fmt::Display for PipeNorm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let key = match self {
            PipeNorm::AnsiB36_10 => "ANSI_B36_10",
            PipeNorm::AnsiB36_19 => "ANSI_B36_19",
            PipeNorm::Pvc40 => "PVC_40",
            PipeNorm::Pvc80 => "PVC_80",
        };
        f.write_str(key)
    }
}

/// Wall schedule. The S-series applies to the stainless norm only.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Schedule {
    #[serde(rename = "40")]
    Sch40,
    #[serde(rename = "80")]
    Sch80,
    #[serde(rename = "10S")]
    Sch10S,
    #[serde(rename = "40S")]
    Sch40S,
    #[serde(rename = "80S")]
    Sch80S,
}

impl fmt::Display for Schedule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let key = match self {
            Schedule::Sch40 => "40",
            Schedule::Sch80 => "80",
            Schedule::Sch10S => "10S",
            Schedule::Sch40S => "40S",
            Schedule::Sch80S => "80S",
        };
        f.write_str(key)
    }
}

/// Resolved pipe geometry for one norm/size/schedule combination.
#[derive(Debug, Clone, PartialEq)]
pub struct PipeDimensions {
    pub norm: PipeNorm,
    pub nominal: &'static str,
    pub schedule: Schedule,
    pub od_mm: f64,
    pub wall_mm: f64,
    pub id_mm: f64,
    pub weight_kg_m: f64,
    pub roughness_default_mm: f64,
}

impl PipeDimensions {
    pub fn inner_diameter(&self) -> Length {
        mm(self.id_mm)
    }

    pub fn wall_thickness(&self) -> Length {
        mm(self.wall_mm)
    }
}

/// `(nominal, OD mm, wall mm, ID mm, weight kg/m)`
type PipeRow = (&'static str, f64, f64, f64, f64);

const ANSI_B36_10_SCH40: [PipeRow; 20] = [
    ("1/4", 13.72, 2.24, 9.24, 0.63),
    ("3/8", 17.15, 2.31, 12.52, 0.84),
    ("1/2", 21.34, 2.77, 15.80, 1.27),
    ("3/4", 26.67, 2.87, 20.93, 1.69),
    ("1", 33.40, 3.38, 26.64, 2.50),
    ("1.25", 42.16, 3.56, 35.04, 3.39),
    ("1.5", 48.26, 3.68, 40.90, 4.05),
    ("2", 60.33, 3.91, 52.50, 5.44),
    ("2.5", 73.03, 5.16, 62.71, 8.63),
    ("3", 88.90, 5.49, 77.92, 11.29),
    ("4", 114.30, 6.02, 102.26, 16.07),
    ("6", 168.28, 7.11, 154.06, 28.26),
    ("8", 219.08, 8.18, 202.72, 42.35),
    ("10", 273.05, 9.27, 254.51, 60.31),
    ("12", 323.85, 9.53, 304.79, 73.78),
    ("14", 355.60, 9.53, 336.54, 81.37),
    ("16", 406.40, 9.53, 387.34, 93.45),
    ("18", 457.20, 9.53, 438.14, 105.39),
    ("20", 508.00, 9.53, 488.94, 117.46),
    ("24", 609.60, 9.53, 590.54, 141.73),
];

const ANSI_B36_10_SCH80: [PipeRow; 20] = [
    ("1/4", 13.72, 3.02, 7.68, 0.80),
    ("3/8", 17.15, 3.20, 10.74, 1.10),
    ("1/2", 21.34, 3.73, 13.88, 1.62),
    ("3/4", 26.67, 3.91, 18.85, 2.20),
    ("1", 33.40, 4.55, 24.30, 3.24),
    ("1.25", 42.16, 4.85, 32.46, 4.47),
    ("1.5", 48.26, 5.08, 38.10, 5.41),
    ("2", 60.33, 5.54, 49.25, 7.48),
    ("2.5", 73.03, 7.01, 59.01, 11.41),
    ("3", 88.90, 7.62, 73.66, 15.27),
    ("4", 114.30, 8.56, 97.18, 22.32),
    ("6", 168.28, 10.97, 146.34, 42.55),
    ("8", 219.08, 12.70, 193.68, 64.63),
    ("10", 273.05, 15.09, 242.87, 95.98),
    ("12", 323.85, 17.48, 288.89, 133.38),
    ("14", 355.60, 19.05, 317.50, 158.08),
    ("16", 406.40, 19.05, 368.30, 182.68),
    ("18", 457.20, 19.05, 419.10, 207.24),
    ("20", 508.00, 19.05, 469.90, 231.79),
    ("24", 609.60, 19.05, 571.50, 280.11),
];

const ANSI_B36_19_SCH10S: [PipeRow; 20] = [
    ("1/4", 13.72, 1.65, 10.42, 0.50),
    ("3/8", 17.15, 1.65, 13.85, 0.64),
    ("1/2", 21.34, 2.11, 17.12, 1.00),
    ("3/4", 26.67, 2.11, 22.45, 1.28),
    ("1", 33.40, 2.77, 27.86, 2.09),
    ("1.25", 42.16, 2.77, 36.62, 2.70),
    ("1.5", 48.26, 2.77, 42.72, 3.11),
    ("2", 60.33, 2.77, 54.79, 3.93),
    ("2.5", 73.03, 3.05, 66.93, 5.26),
    ("3", 88.90, 3.05, 82.80, 6.46),
    ("4", 114.30, 3.05, 108.20, 8.38),
    ("6", 168.28, 3.40, 161.48, 13.72),
    ("8", 219.08, 3.76, 211.56, 19.75),
    ("10", 273.05, 4.20, 264.65, 27.70),
    ("12", 323.85, 4.57, 314.71, 35.70),
    ("14", 355.60, 4.85, 345.90, 41.60),
    ("16", 406.40, 4.85, 396.70, 47.70),
    ("18", 457.20, 5.40, 446.40, 59.40),
    ("20", 508.00, 5.40, 497.20, 66.20),
    ("24", 609.60, 5.40, 598.80, 79.60),
];

const ANSI_B36_19_SCH40S: [PipeRow; 20] = [
    ("1/4", 13.72, 2.24, 9.24, 0.63),
    ("3/8", 17.15, 2.31, 12.53, 0.84),
    ("1/2", 21.34, 2.77, 15.80, 1.27),
    ("3/4", 26.67, 2.87, 20.93, 1.69),
    ("1", 33.40, 3.38, 26.64, 2.50),
    ("1.25", 42.16, 3.56, 35.04, 3.39),
    ("1.5", 48.26, 3.68, 40.90, 4.05),
    ("2", 60.33, 3.91, 52.51, 5.44),
    ("2.5", 73.03, 5.16, 62.71, 8.63),
    ("3", 88.90, 5.49, 77.92, 11.29),
    ("4", 114.30, 6.02, 102.26, 16.07),
    ("6", 168.28, 7.11, 154.06, 28.26),
    ("8", 219.08, 8.18, 202.72, 42.35),
    ("10", 273.05, 9.27, 254.51, 60.31),
    ("12", 323.85, 9.53, 304.79, 73.78),
    ("14", 355.60, 9.53, 336.54, 81.37),
    ("16", 406.40, 9.53, 387.34, 93.45),
    ("18", 457.20, 9.53, 438.14, 105.39),
    ("20", 508.00, 9.53, 488.94, 117.46),
    ("24", 609.60, 9.53, 590.54, 141.73),
];

const ANSI_B36_19_SCH80S: [PipeRow; 20] = [
    ("1/4", 13.72, 3.02, 7.68, 0.80),
    ("3/8", 17.15, 3.20, 10.75, 1.10),
    ("1/2", 21.34, 3.73, 13.88, 1.62),
    ("3/4", 26.67, 3.91, 18.85, 2.20),
    ("1", 33.40, 4.55, 24.30, 3.24),
    ("1.25", 42.16, 4.85, 32.46, 4.47),
    ("1.5", 48.26, 5.08, 38.10, 5.41),
    ("2", 60.33, 5.54, 49.25, 7.48),
    ("2.5", 73.03, 7.01, 59.01, 11.41),
    ("3", 88.90, 7.62, 73.66, 15.27),
    ("4", 114.30, 8.56, 97.18, 22.32),
    ("6", 168.28, 10.97, 146.34, 42.55),
    ("8", 219.08, 12.70, 193.68, 64.63),
    ("10", 273.05, 15.09, 242.87, 95.98),
    ("12", 323.85, 17.48, 288.89, 133.38),
    ("14", 355.60, 19.05, 317.50, 158.08),
    ("16", 406.40, 19.05, 368.30, 182.68),
    ("18", 457.20, 19.05, 419.10, 207.24),
    ("20", 508.00, 19.05, 469.90, 231.79),
    ("24", 609.60, 19.05, 571.50, 280.11),
];

const PVC_SCH40: [PipeRow; 13] = [
    ("1/2", 21.34, 2.41, 16.52, 0.38),
    ("3/4", 26.67, 2.87, 20.93, 0.54),
    ("1", 33.40, 3.38, 26.64, 0.86),
    ("1.25", 42.16, 3.56, 35.04, 1.14),
    ("1.5", 48.26, 3.68, 40.90, 1.35),
    ("2", 60.33, 3.91, 52.51, 1.79),
    ("2.5", 73.03, 5.16, 62.71, 2.93),
    ("3", 88.90, 5.49, 77.92, 3.77),
    ("4", 114.30, 6.02, 102.26, 5.30),
    ("6", 168.28, 7.11, 154.06, 10.25),
    ("8", 219.08, 8.18, 202.72, 16.12),
    ("10", 273.05, 9.27, 254.51, 24.51),
    ("12", 323.85, 9.53, 304.79, 29.84),
];

const PVC_SCH80: [PipeRow; 13] = [
    ("1/2", 21.34, 3.12, 15.10, 0.49),
    ("3/4", 26.67, 3.91, 18.85, 0.78),
    ("1", 33.40, 4.55, 24.30, 1.25),
    ("1.25", 42.16, 4.85, 32.46, 1.69),
    ("1.5", 48.26, 5.08, 38.10, 2.06),
    ("2", 60.33, 5.54, 49.25, 2.77),
    ("2.5", 73.03, 7.01, 59.01, 4.43),
    ("3", 88.90, 7.62, 73.66, 5.88),
    ("4", 114.30, 8.56, 97.18, 8.95),
    ("6", 168.28, 10.97, 146.34, 18.65),
    ("8", 219.08, 12.70, 193.68, 29.87),
    ("10", 273.05, 15.09, 242.87, 46.84),
    ("12", 323.85, 17.48, 288.89, 66.12),
];

fn table(norm: PipeNorm, schedule: Schedule) -> Option<&'static [PipeRow]> {
    match (norm, schedule) {
        (PipeNorm::AnsiB36_10, Schedule::Sch40) => Some(&ANSI_B36_10_SCH40),
        (PipeNorm::AnsiB36_10, Schedule::Sch80) => Some(&ANSI_B36_10_SCH80),
        (PipeNorm::AnsiB36_19, Schedule::Sch10S) => Some(&ANSI_B36_19_SCH10S),
        (PipeNorm::AnsiB36_19, Schedule::Sch40S) => Some(&ANSI_B36_19_SCH40S),
        (PipeNorm::AnsiB36_19, Schedule::Sch80S) => Some(&ANSI_B36_19_SCH80S),
        (PipeNorm::Pvc40, Schedule::Sch40) => Some(&PVC_SCH40),
        (PipeNorm::Pvc80, Schedule::Sch80) => Some(&PVC_SCH80),
        _ => None,
    }
}

/// Default absolute roughness for the norm's material (mm).
pub fn roughness_default_mm(norm: PipeNorm) -> f64 {
    match norm {
        PipeNorm::AnsiB36_10 => 0.045,
        PipeNorm::AnsiB36_19 => 0.015,
        PipeNorm::Pvc40 | PipeNorm::Pvc80 => 0.0015,
    }
}

/// Schedules the norm's catalog actually carries.
pub fn available_schedules(norm: PipeNorm) -> &'static [Schedule] {
    match norm {
        PipeNorm::AnsiB36_10 => &[Schedule::Sch40, Schedule::Sch80],
        PipeNorm::AnsiB36_19 => &[Schedule::Sch10S, Schedule::Sch40S, Schedule::Sch80S],
        PipeNorm::Pvc40 => &[Schedule::Sch40],
        PipeNorm::Pvc80 => &[Schedule::Sch80],
    }
}

/// Nominal sizes available under the norm.
pub fn available_sizes(norm: PipeNorm) -> Vec<&'static str> {
    let schedule = available_schedules(norm)[0];
    table(norm, schedule)
        .map(|rows| rows.iter().map(|r| r.0).collect())
        .unwrap_or_default()
}

/// Resolve a norm/size/schedule combination to real geometry.
///
/// Fails with [`CatalogError::PipeNotFound`] when the combination is absent
/// from the catalog.
pub fn resolve_pipe(
    norm: PipeNorm,
    nominal: &str,
    schedule: Schedule,
) -> CatalogResult<PipeDimensions> {
    let not_found = || CatalogError::PipeNotFound {
        norm,
        nominal: nominal.to_string(),
        schedule,
    };

    let rows = table(norm, schedule).ok_or_else(not_found)?;
    let row = rows.iter().find(|r| r.0 == nominal).ok_or_else(not_found)?;

    Ok(PipeDimensions {
        norm,
        nominal: row.0,
        schedule,
        od_mm: row.1,
        wall_mm: row.2,
        id_mm: row.3,
        weight_kg_m: row.4,
        roughness_default_mm: roughness_default_mm(norm),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn resolves_carbon_steel_6in_sch40() {
        let pipe = resolve_pipe(PipeNorm::AnsiB36_10, "6", Schedule::Sch40).unwrap();
        assert_eq!(pipe.od_mm, 168.28);
        assert_eq!(pipe.id_mm, 154.06);
        assert_eq!(pipe.wall_mm, 7.11);
        assert_eq!(pipe.roughness_default_mm, 0.045);
        assert!((pipe.inner_diameter().value - 0.15406).abs() < 1e-9);
    }

    #[test]
    fn wall_plus_bore_recovers_od() {
        for norm in [PipeNorm::AnsiB36_10, PipeNorm::AnsiB36_19] {
            for &schedule in available_schedules(norm) {
                for nominal in available_sizes(norm) {
                    let p = resolve_pipe(norm, nominal, schedule).unwrap();
                    let od = p.id_mm + 2.0 * p.wall_mm;
                    assert!(
                        (od - p.od_mm).abs() < 0.05,
                        "{norm} {nominal} sch {schedule}: {od} vs {}",
                        p.od_mm
                    );
                }
            }
        }
    }

    #[test]
    fn schedule_mismatch_is_not_found() {
        // Stainless S-schedules do not exist in the carbon steel catalog
        let err = resolve_pipe(PipeNorm::AnsiB36_10, "6", Schedule::Sch10S).unwrap_err();
        assert!(matches!(err, CatalogError::PipeNotFound { .. }));

        // PVC 40 catalog has no schedule 80 data
        assert!(resolve_pipe(PipeNorm::Pvc40, "2", Schedule::Sch80).is_err());
    }

    #[test]
    fn unknown_size_is_not_found() {
        let err = resolve_pipe(PipeNorm::Pvc40, "5", Schedule::Sch40).unwrap_err();
        assert!(matches!(err, CatalogError::PipeNotFound { .. }));
    }

    #[test]
    fn pvc_small_sizes_only() {
        let sizes = available_sizes(PipeNorm::Pvc40);
        assert_eq!(sizes.first(), Some(&"1/2"));
        assert_eq!(sizes.last(), Some(&"12"));
        assert!(!sizes.contains(&"24"));
    }
}
