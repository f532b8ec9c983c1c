//! The observation record: one building's assessed condition.
//!
//! Records are built by the collaborator (form, CLI, JSON file) and handed to
//! the engine read-only. Every field has a default, so a partial JSON document
//! deserializes into a "nothing observed" baseline.
//!
//! Confidence fields are optional. An absent, NaN or out-of-range confidence is
//! treated as full certainty (1.0) rather than rejected.

use std::path::Path;

use anyhow::Result;
use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use crate::error::TriageError;

/// Categorical crack assessment.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum CrackSeverity {
    #[default]
    None,
    Minor,
    Moderate,
    Severe,
}

impl CrackSeverity {
    /// Position on the 0-10 crack-severity scale.
    pub fn scale_value(self) -> f64 {
        match self {
            CrackSeverity::None => 0.0,
            CrackSeverity::Minor => 3.0,
            CrackSeverity::Moderate => 6.0,
            CrackSeverity::Severe => 10.0,
        }
    }
}

/// Normalize an optional confidence: absent, NaN or outside `[0, 1]` becomes 1.0.
pub fn normalize_confidence(conf: Option<f64>) -> f64 {
    match conf {
        Some(c) if (0.0..=1.0).contains(&c) => c,
        _ => 1.0,
    }
}

/// Snapshot of one building's structural, environmental, social and
/// infrastructure condition.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct ObservationRecord {
    // === Structural ===
    /// Significant SAR backscatter decrease
    pub sar_backscatter_detected: bool,
    pub crack_severity: CrackSeverity,
    pub crack_confidence: Option<f64>,
    /// Cracks in load-bearing walls
    pub load_bearing_cracks: bool,
    pub load_confidence: Option<f64>,
    /// Measured crack width in mm
    pub crack_width_mm: f64,
    pub width_confidence: Option<f64>,
    pub cracks_worsening: bool,
    pub worsening_confidence: Option<f64>,
    /// Stable radar backscatter over multiple intervals
    pub radar_stable: bool,

    // === Environmental ===
    pub hazardous_zone: bool,
    pub hazardous_confidence: Option<f64>,
    /// Radiation in material or soil, mSv/year
    pub radiation_level: f64,
    pub radiation_confidence: Option<f64>,
    /// Minefields or unexploded ordnance nearby
    pub unexploded_ordnance: bool,
    pub ordnance_confidence: Option<f64>,
    /// Slope gradient in degrees (0-90). `None` when no slope survey exists.
    pub slope_gradient_deg: Option<f64>,
    /// Distance to the nearest flood zone in meters. `None` when unknown.
    pub flood_zone_distance_m: Option<f64>,
    pub flood_confidence: Option<f64>,
    /// Peak ground acceleration in g (0-1)
    pub seismic_pga: f64,
    pub seismic_confidence: Option<f64>,
    pub contaminated_materials: bool,

    // === Social ===
    pub overcrowding: bool,
    pub overcrowding_confidence: Option<f64>,
    /// Houses vulnerable groups (elderly, children)
    pub vulnerable_population: bool,
    pub vulnerable_confidence: Option<f64>,
    pub multiple_families: bool,
    pub income_below_poverty: bool,
    pub income_confidence: Option<f64>,
    /// Displacement exceeding local housing capacity
    pub population_displacement: bool,
    pub temporary_shelter_needed: bool,
    pub urban_proximity: bool,

    // === Utility / infrastructure ===
    /// Damaged sewer or water pipes
    pub damaged_utilities: bool,
    pub utilities_confidence: Option<f64>,
    pub access_to_power: bool,
    pub critical_infrastructure: bool,
    pub infrastructure_confidence: Option<f64>,
    pub hospitals_or_schools_nearby: bool,
    /// Power outage duration in months. `None` when not reported.
    pub power_outage_months: Option<u32>,
    pub water_contamination: bool,
    pub water_access_disrupted: bool,
    pub road_inaccessible: bool,

    // === Data quality / design ===
    /// Conflicting SAR and optical data
    pub conflicting_data: bool,
    /// Significant difference between damage assessments
    pub significant_difference: bool,
    /// Missing pre- and post-war property records
    pub missing_records: bool,
    pub multiple_properties: bool,
    pub at_least_one_livable: bool,
    /// Design predates modern building codes
    pub outdated_design: bool,
    pub renewable_energy_feasible: bool,
}

impl ObservationRecord {
    /// Parse a record from a JSON document. Missing fields take their defaults.
    pub fn from_json(json: &str) -> Result<Self> {
        let record: ObservationRecord = serde_json::from_str(json)?;
        Ok(record)
    }

    /// Read and parse a record from a JSON file on disk.
    pub fn from_json_file(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        let record = Self::from_json(&content)?;
        debug!(
            "Read observation from {:?} ({} confidences provided)",
            path,
            record.provided_confidences().len()
        );
        Ok(record)
    }

    /// Every confidence field with its raw value.
    pub fn confidence_fields(&self) -> [(&'static str, Option<f64>); 14] {
        [
            ("crack_confidence", self.crack_confidence),
            ("load_confidence", self.load_confidence),
            ("width_confidence", self.width_confidence),
            ("worsening_confidence", self.worsening_confidence),
            ("hazardous_confidence", self.hazardous_confidence),
            ("radiation_confidence", self.radiation_confidence),
            ("ordnance_confidence", self.ordnance_confidence),
            ("flood_confidence", self.flood_confidence),
            ("seismic_confidence", self.seismic_confidence),
            ("overcrowding_confidence", self.overcrowding_confidence),
            ("vulnerable_confidence", self.vulnerable_confidence),
            ("income_confidence", self.income_confidence),
            ("utilities_confidence", self.utilities_confidence),
            ("infrastructure_confidence", self.infrastructure_confidence),
        ]
    }

    /// Normalized confidence for a named field. Unknown names read as 1.0.
    pub fn confidence(&self, field: &str) -> f64 {
        let raw = self
            .confidence_fields()
            .into_iter()
            .find(|(name, _)| *name == field)
            .and_then(|(_, conf)| conf);
        normalize_confidence(raw)
    }

    /// All confidence values the assessor actually supplied, raw.
    pub fn provided_confidences(&self) -> Vec<(&'static str, f64)> {
        self.confidence_fields()
            .into_iter()
            .filter_map(|(name, conf)| conf.map(|c| (name, c)))
            .collect()
    }

    /// Names of supplied confidences that will be replaced by 1.0.
    pub fn invalid_confidences(&self) -> Vec<&'static str> {
        self.provided_confidences()
            .into_iter()
            .filter(|(_, c)| !(0.0..=1.0).contains(c))
            .map(|(name, _)| name)
            .collect()
    }

    /// Log a warning for each confidence that gets normalized to 1.0.
    pub fn warn_invalid_confidences(&self) {
        for name in self.invalid_confidences() {
            warn!(
                "Confidence {} outside [0, 1]; treating as {}",
                name,
                self.confidence(name)
            );
        }
    }

    /// Check physical ranges of the numeric measurements.
    ///
    /// Confidences are not checked here; they normalize instead.
    pub fn validate(&self) -> Result<(), TriageError> {
        non_negative("crack_width_mm", self.crack_width_mm)?;
        non_negative("radiation_level", self.radiation_level)?;
        if let Some(distance) = self.flood_zone_distance_m {
            non_negative("flood_zone_distance_m", distance)?;
        }
        if let Some(slope) = self.slope_gradient_deg {
            in_range("slope_gradient_deg", slope, 0.0, 90.0)?;
        }
        in_range("seismic_pga", self.seismic_pga, 0.0, 1.0)?;
        Ok(())
    }
}

fn non_negative(field: &'static str, value: f64) -> Result<(), TriageError> {
    if value.is_nan() || value < 0.0 {
        return Err(TriageError::InvalidObservation {
            field,
            message: format!("{} must be a non-negative number", value),
        });
    }
    Ok(())
}

fn in_range(field: &'static str, value: f64, min: f64, max: f64) -> Result<(), TriageError> {
    if value.is_nan() || value < min || value > max {
        return Err(TriageError::InvalidObservation {
            field,
            message: format!("{} out of range ({}-{})", value, min, max),
        });
    }
    Ok(())
}
