//! The built-in rule set.
//!
//! Each rule is a pure guard over one [`ObservationRecord`] that yields at most
//! one action with a confidence. Rules are registered in a static table and all
//! of them run on every evaluation; order only matters for tie-breaking and
//! for first-writer-wins when two rules share an action id.
//!
//! Compound rules read several fields together. Their precedence over the
//! narrower single-factor rules is not encoded here; it lives in the
//! `[[overrides]]` table of the priority catalog and is applied at ranking.

use tracing::warn;

use super::actions;
use crate::fuzzy::CRACK_SEVERITY;
use crate::observation::{normalize_confidence, CrackSeverity, ObservationRecord};

/// Whether a rule reads one observation factor or several.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RuleKind {
    Single,
    Compound,
}

/// An action produced by a rule guard.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Firing {
    pub action: &'static str,
    pub confidence: f64,
}

impl Firing {
    fn certain(action: &'static str) -> Option<Self> {
        Some(Self {
            action,
            confidence: 1.0,
        })
    }

    fn with(action: &'static str, confidence: f64) -> Option<Self> {
        Some(Self { action, confidence })
    }
}

/// A named condition-action rule.
pub struct Rule {
    pub name: &'static str,
    pub kind: RuleKind,
    pub eval: fn(&ObservationRecord) -> Option<Firing>,
}

impl std::fmt::Debug for Rule {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Rule")
            .field("name", &self.name)
            .field("kind", &self.kind)
            .finish()
    }
}

// =============================================================================
// THRESHOLDS
// =============================================================================

/// Fuzzy "severe" membership must exceed this.
pub const SEVERE_MEMBERSHIP_MIN: f64 = 0.7;
/// Stated crack confidence must exceed this for the fuzzy rule.
pub const SEVERE_CONFIDENCE_MIN: f64 = 0.7;
pub const LOAD_BEARING_CONFIDENCE_MIN: f64 = 0.9;
pub const LARGE_CRACK_WIDTH_MM: f64 = 20.0;
pub const LARGE_CRACK_CONFIDENCE_MIN: f64 = 0.9;
pub const MODERATE_CRACK_CONFIDENCE_MIN: f64 = 0.6;
pub const MINOR_CRACK_CONFIDENCE_MIN: f64 = 0.5;
pub const WORSENING_CONFIDENCE_MIN: f64 = 0.8;

pub const HAZARD_CONFIDENCE_MIN: f64 = 0.6;
pub const RADIATION_HIGH_MSV: f64 = 20.0;
pub const RADIATION_MODERATE_MSV: f64 = 1.0;
pub const ORDNANCE_CONFIDENCE_MIN: f64 = 0.75;

pub const FLOOD_HIGH_DISTANCE_M: f64 = 500.0;
pub const FLOOD_MODERATE_DISTANCE_M: f64 = 100.0;
pub const FLOOD_HIGH_CONFIDENCE_MIN: f64 = 0.7;
pub const FLOOD_MODERATE_CONFIDENCE_MIN: f64 = 0.5;
pub const FLOOD_LOW_CONFIDENCE_MIN: f64 = 0.4;

pub const SEISMIC_HIGH_PGA: f64 = 0.4;
pub const SEISMIC_MODERATE_PGA: f64 = 0.2;
pub const SEISMIC_HIGH_CONFIDENCE_MIN: f64 = 0.7;
pub const SEISMIC_MODERATE_CONFIDENCE_MIN: f64 = 0.5;

pub const SLOPE_HIGH_DEG: f64 = 30.0;
pub const SLOPE_MODERATE_DEG: f64 = 20.0;
pub const SLOPE_HIGH_CONFIDENCE_MIN: f64 = 0.6;
pub const SLOPE_MODERATE_CONFIDENCE_MIN: f64 = 0.5;

pub const HAZARD_OVERCROWDING_CONFIDENCE_MIN: f64 = 0.7;
pub const FLOOD_WATER_HIGH_DISTANCE_M: f64 = 100.0;
pub const FLOOD_WATER_MODERATE_DISTANCE_M: f64 = 500.0;
pub const RADIATION_ORDNANCE_MSV: f64 = 1.0;
pub const RADIATION_ORDNANCE_CONFIDENCE_MIN: f64 = 0.75;
pub const RADIATION_CRACKS_HAZARD_MSV: f64 = 2.0;
pub const RADIATION_CRACKS_HAZARD_CONFIDENCE_MIN: f64 = 0.7;

pub const OVERCROWDING_CONFIDENCE_MIN: f64 = 0.7;
pub const VULNERABLE_CONFIDENCE_MIN: f64 = 0.8;
pub const INCOME_CONFIDENCE_MIN: f64 = 0.7;
pub const OVERCROWDING_VULNERABLE_CONFIDENCE_MIN: f64 = 0.7;
pub const VULNERABLE_UTILITIES_CONFIDENCE_MIN: f64 = 0.8;

pub const INFRASTRUCTURE_CONFIDENCE_MIN: f64 = 0.8;
pub const LONG_OUTAGE_MONTHS: u32 = 6;
pub const UTILITIES_CONFIDENCE_MIN: f64 = 0.8;

/// Confidence given to the fallback action when every stated confidence is zero.
pub const ZERO_CONFIDENCE_FALLBACK: f64 = 0.5;

// =============================================================================
// REGISTRATION
// =============================================================================

macro_rules! rule {
    ($name:literal, $kind:ident, $eval:path) => {
        Rule {
            name: $name,
            kind: RuleKind::$kind,
            eval: $eval,
        }
    };
}

/// Every built-in rule, in evaluation order.
pub static RULES: &[Rule] = &[
    // Structural
    rule!("sar_backscatter", Single, sar_backscatter),
    rule!("fuzzy_severe_cracks", Single, fuzzy_severe_cracks),
    rule!("load_bearing_zero_width", Single, load_bearing_zero_width),
    rule!("large_crack", Single, large_crack),
    rule!("moderate_cracks", Single, moderate_cracks),
    rule!("minor_cracks", Single, minor_cracks),
    rule!("worsening_cracks", Single, worsening_cracks),
    rule!("radar_stable", Single, radar_stable),
    // Environmental
    rule!("hazardous_zone", Single, hazardous_zone),
    rule!("radiation_tiers", Single, radiation_tiers),
    rule!("unexploded_ordnance", Single, unexploded_ordnance),
    rule!("contaminated_materials", Single, contaminated_materials),
    rule!("certified_materials", Single, certified_materials),
    rule!("flood_proximity", Single, flood_proximity),
    rule!("seismic_pga", Single, seismic_pga),
    rule!("landslide_slope", Single, landslide_slope),
    // Environmental compounds
    rule!("hazardous_zone_and_overcrowding", Compound, hazardous_zone_and_overcrowding),
    rule!("flood_and_water_contamination", Compound, flood_and_water_contamination),
    rule!("radiation_and_ordnance", Compound, radiation_and_ordnance),
    rule!("radiation_cracks_and_hazard", Compound, radiation_cracks_and_hazard),
    // Social
    rule!("overcrowding", Single, overcrowding),
    rule!("vulnerable_population", Single, vulnerable_population),
    rule!("income_below_poverty", Single, income_below_poverty),
    rule!("population_displacement", Single, population_displacement),
    rule!("multiple_families", Single, multiple_families),
    rule!("temporary_shelter", Single, temporary_shelter),
    rule!("urban_proximity", Single, urban_proximity),
    rule!("urban_temporary_shelter", Compound, urban_temporary_shelter),
    rule!("overcrowding_and_vulnerable", Compound, overcrowding_and_vulnerable),
    rule!("vulnerable_and_utilities", Compound, vulnerable_and_utilities),
    // Utility / infrastructure
    rule!("critical_infrastructure", Single, critical_infrastructure),
    rule!("hospitals_or_schools", Single, hospitals_or_schools),
    rule!("power_outage", Single, power_outage),
    rule!("damaged_utilities", Single, damaged_utilities),
    rule!("access_to_power", Single, access_to_power),
    rule!("road_access", Single, road_access),
    rule!("water_contamination", Single, water_contamination),
    rule!("water_disruption", Single, water_disruption),
    rule!("water_contamination_and_disruption", Compound, water_contamination_and_disruption),
    // Data quality / design
    rule!("significant_difference", Single, significant_difference),
    rule!("conflicting_data", Single, conflicting_data),
    rule!("missing_records", Single, missing_records),
    rule!("livable_alternative", Compound, livable_alternative),
    rule!("outdated_design", Single, outdated_design),
    rule!("renewable_energy", Single, renewable_energy),
];

/// True when the assessor stated at least one confidence and every stated
/// confidence is exactly zero.
pub fn all_confidences_zero(obs: &ObservationRecord) -> bool {
    let provided = obs.provided_confidences();
    !provided.is_empty() && provided.iter().all(|(_, c)| *c == 0.0)
}

fn conf(value: Option<f64>) -> f64 {
    normalize_confidence(value)
}

fn has_slope_data(obs: &ObservationRecord) -> bool {
    matches!(obs.slope_gradient_deg, Some(s) if s > 0.0)
}

fn has_outage_data(obs: &ObservationRecord) -> bool {
    matches!(obs.power_outage_months, Some(m) if m > 0)
}

// =============================================================================
// STRUCTURAL
// =============================================================================

fn sar_backscatter(obs: &ObservationRecord) -> Option<Firing> {
    obs.sar_backscatter_detected
        .then_some(Firing { action: actions::SAR_DAMAGE, confidence: 1.0 })
}

fn fuzzy_severe_cracks(obs: &ObservationRecord) -> Option<Firing> {
    if obs.crack_severity == CrackSeverity::None {
        return None;
    }
    let membership = match CRACK_SEVERITY.membership(obs.crack_severity.scale_value(), "severe") {
        Ok(m) => m,
        Err(e) => {
            warn!("Crack severity membership failed: {}", e);
            return None;
        }
    };
    let confidence = conf(obs.crack_confidence);
    if membership > SEVERE_MEMBERSHIP_MIN && confidence > SEVERE_CONFIDENCE_MIN {
        Firing::with(actions::VISUAL_SEVERE_CRACKS, membership.min(confidence))
    } else {
        None
    }
}

fn load_bearing_zero_width(obs: &ObservationRecord) -> Option<Firing> {
    let confidence = conf(obs.load_confidence);
    if obs.load_bearing_cracks
        && obs.crack_width_mm == 0.0
        && confidence >= LOAD_BEARING_CONFIDENCE_MIN
    {
        Firing::with(actions::STRUCTURAL_REPAIRS, confidence)
    } else {
        None
    }
}

fn large_crack(obs: &ObservationRecord) -> Option<Firing> {
    let confidence = conf(obs.width_confidence);
    if obs.crack_width_mm >= LARGE_CRACK_WIDTH_MM && confidence >= LARGE_CRACK_CONFIDENCE_MIN {
        Firing::with(actions::STRUCTURAL_REPAIRS, confidence)
    } else {
        None
    }
}

fn moderate_cracks(obs: &ObservationRecord) -> Option<Firing> {
    let confidence = conf(obs.crack_confidence);
    if obs.crack_severity == CrackSeverity::Moderate && confidence >= MODERATE_CRACK_CONFIDENCE_MIN
    {
        Firing::with(actions::MODERATE_CRACKS, confidence)
    } else {
        None
    }
}

fn minor_cracks(obs: &ObservationRecord) -> Option<Firing> {
    let confidence = conf(obs.crack_confidence);
    if obs.crack_severity == CrackSeverity::Minor && confidence >= MINOR_CRACK_CONFIDENCE_MIN {
        Firing::with(actions::MINOR_CRACKS, confidence)
    } else {
        None
    }
}

fn worsening_cracks(obs: &ObservationRecord) -> Option<Firing> {
    let confidence = conf(obs.worsening_confidence);
    if obs.cracks_worsening && confidence >= WORSENING_CONFIDENCE_MIN {
        Firing::with(actions::WORSENING_CRACKS, confidence)
    } else {
        None
    }
}

fn radar_stable(obs: &ObservationRecord) -> Option<Firing> {
    obs.radar_stable
        .then_some(Firing { action: actions::RADAR_STABLE, confidence: 1.0 })
}

// =============================================================================
// ENVIRONMENTAL
// =============================================================================

fn hazardous_zone(obs: &ObservationRecord) -> Option<Firing> {
    let confidence = conf(obs.hazardous_confidence);
    if obs.hazardous_zone && confidence >= HAZARD_CONFIDENCE_MIN && !has_slope_data(obs) {
        Firing::with(actions::HAZARDOUS_ZONE, confidence)
    } else {
        None
    }
}

fn radiation_tiers(obs: &ObservationRecord) -> Option<Firing> {
    let level = obs.radiation_level;
    let confidence = conf(obs.radiation_confidence);
    if level > RADIATION_HIGH_MSV {
        Firing::with(actions::RADIATION_HIGH, confidence)
    } else if level > RADIATION_MODERATE_MSV {
        Firing::with(actions::RADIATION_MODERATE, confidence)
    } else if level > 0.0 {
        Firing::with(actions::RADIATION_LOW, confidence)
    } else {
        None
    }
}

fn unexploded_ordnance(obs: &ObservationRecord) -> Option<Firing> {
    let confidence = conf(obs.ordnance_confidence);
    if obs.unexploded_ordnance && confidence >= ORDNANCE_CONFIDENCE_MIN {
        Firing::with(actions::ORDNANCE, confidence)
    } else {
        None
    }
}

fn contaminated_materials(obs: &ObservationRecord) -> Option<Firing> {
    if obs.contaminated_materials {
        Firing::certain(actions::CONTAMINATED_MATERIALS)
    } else {
        None
    }
}

fn certified_materials(obs: &ObservationRecord) -> Option<Firing> {
    if obs.contaminated_materials {
        Firing::certain(actions::CERTIFIED_MATERIALS)
    } else {
        None
    }
}

fn flood_proximity(obs: &ObservationRecord) -> Option<Firing> {
    let distance = obs.flood_zone_distance_m?;
    let confidence = conf(obs.flood_confidence);
    if distance >= FLOOD_HIGH_DISTANCE_M {
        (confidence >= FLOOD_HIGH_CONFIDENCE_MIN)
            .then_some(Firing { action: actions::FLOOD_HIGH, confidence })
    } else if distance >= FLOOD_MODERATE_DISTANCE_M {
        (confidence >= FLOOD_MODERATE_CONFIDENCE_MIN)
            .then_some(Firing { action: actions::FLOOD_MODERATE, confidence })
    } else if distance > 0.0 {
        (confidence >= FLOOD_LOW_CONFIDENCE_MIN)
            .then_some(Firing { action: actions::FLOOD_LOW, confidence })
    } else {
        None
    }
}

fn seismic_pga(obs: &ObservationRecord) -> Option<Firing> {
    let pga = obs.seismic_pga;
    let confidence = conf(obs.seismic_confidence);
    if pga > SEISMIC_HIGH_PGA {
        (confidence >= SEISMIC_HIGH_CONFIDENCE_MIN)
            .then_some(Firing { action: actions::SEISMIC_HIGH, confidence })
    } else if pga > SEISMIC_MODERATE_PGA {
        (confidence >= SEISMIC_MODERATE_CONFIDENCE_MIN)
            .then_some(Firing { action: actions::SEISMIC_MODERATE, confidence })
    } else if pga > 0.0 {
        Firing::with(actions::SEISMIC_LOW, confidence)
    } else {
        None
    }
}

/// Slope tiers, escalated to the infrastructure wording when the building is
/// near critical infrastructure.
fn landslide_slope(obs: &ObservationRecord) -> Option<Firing> {
    let slope = obs.slope_gradient_deg?;
    let confidence = conf(obs.hazardous_confidence);
    let near_infra = obs.critical_infrastructure;

    if slope > SLOPE_HIGH_DEG {
        let action = if near_infra {
            actions::LANDSLIDE_INFRA_HIGH
        } else {
            actions::LANDSLIDE_HIGH
        };
        (confidence >= SLOPE_HIGH_CONFIDENCE_MIN).then_some(Firing { action, confidence })
    } else if slope > SLOPE_MODERATE_DEG {
        let action = if near_infra {
            actions::LANDSLIDE_INFRA_MODERATE
        } else {
            actions::LANDSLIDE_MODERATE
        };
        (confidence >= SLOPE_MODERATE_CONFIDENCE_MIN).then_some(Firing { action, confidence })
    } else if slope > 0.0 {
        Firing::with(actions::LANDSLIDE_LOW, confidence)
    } else {
        None
    }
}

fn hazardous_zone_and_overcrowding(obs: &ObservationRecord) -> Option<Firing> {
    if !(obs.hazardous_zone && obs.overcrowding) {
        return None;
    }
    let combined = conf(obs.hazardous_confidence).min(conf(obs.overcrowding_confidence));
    (combined >= HAZARD_OVERCROWDING_CONFIDENCE_MIN).then_some(Firing {
        action: actions::HAZARD_AND_OVERCROWDING,
        confidence: combined,
    })
}

fn flood_and_water_contamination(obs: &ObservationRecord) -> Option<Firing> {
    if !obs.water_contamination {
        return None;
    }
    let distance = obs.flood_zone_distance_m?;
    if distance <= FLOOD_WATER_HIGH_DISTANCE_M {
        Firing::certain(actions::FLOOD_AND_WATER_HIGH)
    } else if distance <= FLOOD_WATER_MODERATE_DISTANCE_M {
        Firing::certain(actions::FLOOD_AND_WATER_MODERATE)
    } else {
        None
    }
}

fn radiation_and_ordnance(obs: &ObservationRecord) -> Option<Firing> {
    if !obs.unexploded_ordnance || obs.radiation_level <= RADIATION_ORDNANCE_MSV {
        return None;
    }
    let combined = conf(obs.radiation_confidence).min(conf(obs.ordnance_confidence));
    (combined >= RADIATION_ORDNANCE_CONFIDENCE_MIN).then_some(Firing {
        action: actions::RADIATION_AND_ORDNANCE,
        confidence: combined,
    })
}

fn radiation_cracks_and_hazard(obs: &ObservationRecord) -> Option<Firing> {
    if obs.radiation_level <= RADIATION_CRACKS_HAZARD_MSV
        || obs.crack_severity == CrackSeverity::None
        || !obs.hazardous_zone
    {
        return None;
    }
    let combined = conf(obs.radiation_confidence)
        .min(conf(obs.crack_confidence))
        .min(conf(obs.hazardous_confidence));
    (combined >= RADIATION_CRACKS_HAZARD_CONFIDENCE_MIN).then_some(Firing {
        action: actions::RADIATION_CRACKS_HAZARD,
        confidence: combined,
    })
}

// =============================================================================
// SOCIAL
// =============================================================================

fn overcrowding(obs: &ObservationRecord) -> Option<Firing> {
    let confidence = conf(obs.overcrowding_confidence);
    (obs.overcrowding && confidence >= OVERCROWDING_CONFIDENCE_MIN)
        .then_some(Firing { action: actions::OVERCROWDING, confidence })
}

fn vulnerable_population(obs: &ObservationRecord) -> Option<Firing> {
    let confidence = conf(obs.vulnerable_confidence);
    (obs.vulnerable_population && confidence >= VULNERABLE_CONFIDENCE_MIN)
        .then_some(Firing { action: actions::VULNERABLE_POPULATION, confidence })
}

fn income_below_poverty(obs: &ObservationRecord) -> Option<Firing> {
    let confidence = conf(obs.income_confidence);
    (obs.income_below_poverty && confidence >= INCOME_CONFIDENCE_MIN)
        .then_some(Firing { action: actions::INCOME_BELOW_POVERTY, confidence })
}

fn population_displacement(obs: &ObservationRecord) -> Option<Firing> {
    obs.population_displacement
        .then_some(Firing { action: actions::POPULATION_DISPLACEMENT, confidence: 1.0 })
}

fn multiple_families(obs: &ObservationRecord) -> Option<Firing> {
    obs.multiple_families
        .then_some(Firing { action: actions::MULTIPLE_FAMILIES, confidence: 1.0 })
}

fn temporary_shelter(obs: &ObservationRecord) -> Option<Firing> {
    obs.temporary_shelter_needed
        .then_some(Firing { action: actions::TEMPORARY_SHELTER, confidence: 1.0 })
}

fn urban_proximity(obs: &ObservationRecord) -> Option<Firing> {
    obs.urban_proximity
        .then_some(Firing { action: actions::URBAN_PROXIMITY, confidence: 1.0 })
}

fn urban_temporary_shelter(obs: &ObservationRecord) -> Option<Firing> {
    (obs.urban_proximity && obs.temporary_shelter_needed)
        .then_some(Firing { action: actions::URBAN_SHELTER, confidence: 1.0 })
}

fn overcrowding_and_vulnerable(obs: &ObservationRecord) -> Option<Firing> {
    if !(obs.overcrowding && obs.vulnerable_population) {
        return None;
    }
    let combined = conf(obs.overcrowding_confidence).min(conf(obs.vulnerable_confidence));
    (combined >= OVERCROWDING_VULNERABLE_CONFIDENCE_MIN).then_some(Firing {
        action: actions::OVERCROWDING_AND_VULNERABLE,
        confidence: combined,
    })
}

fn vulnerable_and_utilities(obs: &ObservationRecord) -> Option<Firing> {
    if !(obs.vulnerable_population && obs.damaged_utilities) {
        return None;
    }
    let combined = conf(obs.vulnerable_confidence).min(conf(obs.utilities_confidence));
    (combined >= VULNERABLE_UTILITIES_CONFIDENCE_MIN).then_some(Firing {
        action: actions::VULNERABLE_UTILITIES,
        confidence: combined,
    })
}

// =============================================================================
// UTILITY / INFRASTRUCTURE
// =============================================================================

fn critical_infrastructure(obs: &ObservationRecord) -> Option<Firing> {
    let confidence = conf(obs.infrastructure_confidence);
    (obs.critical_infrastructure
        && confidence >= INFRASTRUCTURE_CONFIDENCE_MIN
        && !has_outage_data(obs))
    .then_some(Firing { action: actions::CRITICAL_INFRASTRUCTURE, confidence })
}

fn hospitals_or_schools(obs: &ObservationRecord) -> Option<Firing> {
    obs.hospitals_or_schools_nearby
        .then_some(Firing { action: actions::HOSPITALS_OR_SCHOOLS, confidence: 1.0 })
}

fn power_outage(obs: &ObservationRecord) -> Option<Firing> {
    match obs.power_outage_months {
        Some(months) if months > LONG_OUTAGE_MONTHS => Firing::certain(actions::POWER_LONG_OUTAGE),
        Some(months) if months > 0 => Firing::certain(actions::POWER_SHORT_OUTAGE),
        _ => None,
    }
}

fn damaged_utilities(obs: &ObservationRecord) -> Option<Firing> {
    let confidence = conf(obs.utilities_confidence);
    (obs.damaged_utilities && confidence >= UTILITIES_CONFIDENCE_MIN)
        .then_some(Firing { action: actions::DAMAGED_UTILITIES, confidence })
}

fn access_to_power(obs: &ObservationRecord) -> Option<Firing> {
    obs.access_to_power
        .then_some(Firing { action: actions::ACCESS_TO_POWER, confidence: 1.0 })
}

fn road_access(obs: &ObservationRecord) -> Option<Firing> {
    obs.road_inaccessible
        .then_some(Firing { action: actions::ROAD_ACCESS, confidence: 1.0 })
}

fn water_contamination(obs: &ObservationRecord) -> Option<Firing> {
    obs.water_contamination
        .then_some(Firing { action: actions::WATER_CONTAMINATION, confidence: 1.0 })
}

fn water_disruption(obs: &ObservationRecord) -> Option<Firing> {
    obs.water_access_disrupted
        .then_some(Firing { action: actions::WATER_DISRUPTION, confidence: 1.0 })
}

fn water_contamination_and_disruption(obs: &ObservationRecord) -> Option<Firing> {
    (obs.water_contamination && obs.water_access_disrupted).then_some(Firing {
        action: actions::WATER_CONTAMINATION_AND_DISRUPTION,
        confidence: 1.0,
    })
}

// =============================================================================
// DATA QUALITY / DESIGN
// =============================================================================

fn significant_difference(obs: &ObservationRecord) -> Option<Firing> {
    obs.significant_difference
        .then_some(Firing { action: actions::SIGNIFICANT_DIFFERENCE, confidence: 1.0 })
}

fn conflicting_data(obs: &ObservationRecord) -> Option<Firing> {
    obs.conflicting_data
        .then_some(Firing { action: actions::CONFLICTING_DATA, confidence: 1.0 })
}

fn missing_records(obs: &ObservationRecord) -> Option<Firing> {
    obs.missing_records
        .then_some(Firing { action: actions::MISSING_RECORDS, confidence: 1.0 })
}

fn livable_alternative(obs: &ObservationRecord) -> Option<Firing> {
    (obs.multiple_properties && obs.at_least_one_livable)
        .then_some(Firing { action: actions::LIVABLE_ALTERNATIVE, confidence: 1.0 })
}

fn outdated_design(obs: &ObservationRecord) -> Option<Firing> {
    obs.outdated_design
        .then_some(Firing { action: actions::OUTDATED_DESIGN, confidence: 1.0 })
}

fn renewable_energy(obs: &ObservationRecord) -> Option<Firing> {
    obs.renewable_energy_feasible
        .then_some(Firing { action: actions::RENEWABLE_ENERGY, confidence: 1.0 })
}
