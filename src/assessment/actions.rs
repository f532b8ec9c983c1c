//! Canonical action ids.
//!
//! The id doubles as the text shown to the user, so these strings must match
//! the `id` keys in `config/priority_catalog.toml` exactly.

// Structural
pub const SAR_DAMAGE: &str = "Severe: Immediate Repairs Required (SAR Detected).";
pub const VISUAL_SEVERE_CRACKS: &str = "Severe: Immediate Repairs Required (Visual Assessment).";
pub const STRUCTURAL_REPAIRS: &str = "Severe: Immediate Repairs Required.";
pub const MODERATE_CRACKS: &str = "Moderate: Repairs Suggested.";
pub const MINOR_CRACKS: &str = "Minor: Routine Repairs Recommended.";
pub const WORSENING_CRACKS: &str = "Reclassify as Moderate Damage: Cracks worsening over time.";
pub const RADAR_STABLE: &str = "Low Priority: No immediate repairs required (Radar stable).";

// Environmental
pub const HAZARDOUS_ZONE: &str = "Critical: Reconstruction Delayed due to hazardous zone.";
pub const RADIATION_HIGH: &str = "Prohibit rebuilding due to high radiation.";
pub const RADIATION_MODERATE: &str = "Moderate: Restrict occupancy pending radiation remediation.";
pub const RADIATION_LOW: &str = "Low Priority: Monitor radiation levels.";
pub const ORDNANCE: &str = "Critical: Reconstruction Delayed due to minefields.";
pub const CONTAMINATED_MATERIALS: &str =
    "Critical: Reconstruction Delayed: Contaminated materials detected, remediation required.";
pub const CERTIFIED_MATERIALS: &str = "Recommendation: Import Certified Materials to Ensure Safety.";
pub const FLOOD_HIGH: &str = "Critical: Reconstruction Delayed due to High Flood Risk.";
pub const FLOOD_MODERATE: &str = "Moderate: Flood Protection Measures Required.";
pub const FLOOD_LOW: &str = "Low Priority: Flood risk is minimal.";
pub const SEISMIC_HIGH: &str = "Critical: Earthquake Reinforcement Required.";
pub const SEISMIC_MODERATE: &str = "Moderate: Incorporate Earthquake-Resistant Design.";
pub const SEISMIC_LOW: &str = "Low Priority: Seismic risk is minimal.";
pub const LANDSLIDE_HIGH: &str = "Critical: Reconstruction Delayed due to Landslide Risk.";
pub const LANDSLIDE_MODERATE: &str = "Moderate: Proceed with caution due to Landslide Susceptibility.";
pub const LANDSLIDE_LOW: &str = "Low Priority: Landslide risk is minimal.";
pub const LANDSLIDE_INFRA_HIGH: &str = "Critical: Landslide Risk Near Critical Infrastructure.";
pub const LANDSLIDE_INFRA_MODERATE: &str =
    "Moderate: Monitor Landslide Risk Near Critical Infrastructure.";

// Compound environmental
pub const HAZARD_AND_OVERCROWDING: &str =
    "Critical: Combined impact of hazardous zone and overcrowding.";
pub const FLOOD_AND_WATER_HIGH: &str = "Critical: Combined Flood and Water Contamination Risk.";
pub const FLOOD_AND_WATER_MODERATE: &str =
    "Moderate: Flood Zone and Water Contamination Mitigation Required.";
pub const RADIATION_AND_ORDNANCE: &str = "Prohibit rebuilding due to radiation and minefields.";
pub const RADIATION_CRACKS_HAZARD: &str =
    "Critical: Combined radiation, structural damage and hazardous zone risk.";

// Social
pub const OVERCROWDING: &str = "High Priority: Reconstruction due to overcrowding.";
pub const VULNERABLE_POPULATION: &str = "High Priority: Vulnerable population safety.";
pub const INCOME_BELOW_POVERTY: &str = "High Priority: Income below poverty threshold.";
pub const POPULATION_DISPLACEMENT: &str = "High Priority: Use pallet or container homes.";
pub const MULTIPLE_FAMILIES: &str = "High Priority: Building serves multiple families.";
pub const TEMPORARY_SHELTER: &str =
    "High Priority: Provide temporary shelter for displaced residents.";
pub const URBAN_PROXIMITY: &str = "Recommendation: Temporary housing near urban center.";
pub const URBAN_SHELTER: &str =
    "High Priority: Temporary housing near urban center for displaced residents.";
pub const OVERCROWDING_AND_VULNERABLE: &str =
    "High Priority: Combined impact of overcrowding and vulnerable population.";
pub const VULNERABLE_UTILITIES: &str = "High Priority: Restore Utilities for Vulnerable Population.";

// Utility / infrastructure
pub const CRITICAL_INFRASTRUCTURE: &str =
    "Critical: Near critical infrastructure (e.g., hospitals, schools).";
pub const HOSPITALS_OR_SCHOOLS: &str = "Critical Priority: Hospitals or schools zone reconstruction.";
pub const POWER_LONG_OUTAGE: &str =
    "High Priority: Deploy Temporary Power Sources for Critical Facilities.";
pub const POWER_SHORT_OUTAGE: &str = "Moderate Priority: Monitor Power Restoration Timelines.";
pub const DAMAGED_UTILITIES: &str = "Moderate: Repairs suggested for damaged utilities.";
pub const ACCESS_TO_POWER: &str = "Lower Priority: Energy resource allocation not required.";
pub const ROAD_ACCESS: &str = "Reconstruction Delayed: Clear road access before rebuilding.";
pub const WATER_CONTAMINATION: &str = "Critical Priority: Immediate Water Sanitation Required.";
pub const WATER_DISRUPTION: &str = "Moderate Priority: Restore Water Supply Access.";
pub const WATER_CONTAMINATION_AND_DISRUPTION: &str =
    "Critical: Water contamination with disrupted supply access.";

// Data quality / design
pub const SIGNIFICANT_DIFFERENCE: &str = "Moderate: Further Inspection Needed.";
pub const CONFLICTING_DATA: &str = "Uncertain: Requires Field Validation.";
pub const MISSING_RECORDS: &str = "Use geospatial data and neighboring properties for estimation.";
pub const LIVABLE_ALTERNATIVE: &str = "Lower Priority: At least one livable property available.";
pub const OUTDATED_DESIGN: &str = "Recommendation: Retrofit building to modern design standards.";
pub const RENEWABLE_ENERGY: &str =
    "Recommendation: Mandatory Renewable Energy Integration for Sustainability.";
pub const FURTHER_INSPECTION: &str =
    "Recommendation: Further inspection required (no confident observations).";

/// Every action id a built-in rule can declare.
pub const ALL: &[&str] = &[
    SAR_DAMAGE,
    VISUAL_SEVERE_CRACKS,
    STRUCTURAL_REPAIRS,
    MODERATE_CRACKS,
    MINOR_CRACKS,
    WORSENING_CRACKS,
    RADAR_STABLE,
    HAZARDOUS_ZONE,
    RADIATION_HIGH,
    RADIATION_MODERATE,
    RADIATION_LOW,
    ORDNANCE,
    CONTAMINATED_MATERIALS,
    CERTIFIED_MATERIALS,
    FLOOD_HIGH,
    FLOOD_MODERATE,
    FLOOD_LOW,
    SEISMIC_HIGH,
    SEISMIC_MODERATE,
    SEISMIC_LOW,
    LANDSLIDE_HIGH,
    LANDSLIDE_MODERATE,
    LANDSLIDE_LOW,
    LANDSLIDE_INFRA_HIGH,
    LANDSLIDE_INFRA_MODERATE,
    HAZARD_AND_OVERCROWDING,
    FLOOD_AND_WATER_HIGH,
    FLOOD_AND_WATER_MODERATE,
    RADIATION_AND_ORDNANCE,
    RADIATION_CRACKS_HAZARD,
    OVERCROWDING,
    VULNERABLE_POPULATION,
    INCOME_BELOW_POVERTY,
    POPULATION_DISPLACEMENT,
    MULTIPLE_FAMILIES,
    TEMPORARY_SHELTER,
    URBAN_PROXIMITY,
    URBAN_SHELTER,
    OVERCROWDING_AND_VULNERABLE,
    VULNERABLE_UTILITIES,
    CRITICAL_INFRASTRUCTURE,
    HOSPITALS_OR_SCHOOLS,
    POWER_LONG_OUTAGE,
    POWER_SHORT_OUTAGE,
    DAMAGED_UTILITIES,
    ACCESS_TO_POWER,
    ROAD_ACCESS,
    WATER_CONTAMINATION,
    WATER_DISRUPTION,
    WATER_CONTAMINATION_AND_DISRUPTION,
    SIGNIFICANT_DIFFERENCE,
    CONFLICTING_DATA,
    MISSING_RECORDS,
    LIVABLE_ALTERNATIVE,
    OUTDATED_DESIGN,
    RENEWABLE_ENERGY,
    FURTHER_INSPECTION,
];
