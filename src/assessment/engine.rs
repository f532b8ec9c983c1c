//! Rule evaluation engine for building triage.
//!
//! The `AssessmentEngine` runs every built-in rule over one observation and
//! produces a ranked, suppression-aware list of remediation actions.

use once_cell::sync::Lazy;
use tracing::{debug, info, warn};

use super::actions;
use super::aggregator::ActionAggregator;
use super::catalog::{default_catalog, PriorityCatalog};
use super::rules::{self, Rule, RULES};
use super::types::{Assessment, CatalogConfig};
use crate::error::TriageError;
use crate::observation::ObservationRecord;

static SHARED_ENGINE: Lazy<AssessmentEngine> = Lazy::new(|| {
    AssessmentEngine::new(default_catalog()).expect("embedded priority catalog must validate")
});

/// The rule evaluation engine.
///
/// Holds a validated priority catalog and the rule table. Evaluation reads the
/// observation only and never fails; each call uses a fresh aggregator, so an
/// engine can be shared across threads.
#[derive(Debug)]
pub struct AssessmentEngine {
    catalog: PriorityCatalog,
    rules: &'static [Rule],
}

impl AssessmentEngine {
    /// Create an engine from a catalog configuration.
    ///
    /// # Arguments
    /// * `config` - Catalog (typically from `default_catalog()` or `load_catalog()`)
    pub fn new(config: CatalogConfig) -> Result<Self, TriageError> {
        let catalog = PriorityCatalog::new(config)?;
        debug!(
            "Assessment engine ready: {} rules, {} catalogued actions",
            RULES.len(),
            catalog.len()
        );
        Ok(Self {
            catalog,
            rules: RULES,
        })
    }

    /// Process-wide engine built from the embedded catalog.
    pub fn shared() -> &'static AssessmentEngine {
        &SHARED_ENGINE
    }

    pub fn catalog(&self) -> &PriorityCatalog {
        &self.catalog
    }

    pub fn rule_names(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.rules.iter().map(|r| r.name)
    }

    /// Evaluate one observation.
    ///
    /// Out-of-range measurements are logged and evaluated as given; use
    /// [`evaluate_checked`](Self::evaluate_checked) to reject them instead.
    ///
    /// # Returns
    /// `Assessment` with ranked actions, suppressed ids and fired rule names.
    /// An empty ranking means nothing triggered.
    pub fn evaluate(&self, observation: &ObservationRecord) -> Assessment {
        observation.warn_invalid_confidences();
        if let Err(e) = observation.validate() {
            warn!("Evaluating implausible observation: {}", e);
        }

        let mut aggregator = ActionAggregator::new(&self.catalog);
        let mut fired_rules = Vec::new();

        for rule in self.rules {
            if let Some(firing) = (rule.eval)(observation) {
                debug!(
                    "Rule '{}' ({:?}) fired: {} @ {:.2}",
                    rule.name, rule.kind, firing.action, firing.confidence
                );
                fired_rules.push(rule.name);
                aggregator.declare(firing.action, firing.confidence);
            }
        }

        if aggregator.is_empty() && rules::all_confidences_zero(observation) {
            debug!("Every stated confidence is zero, requesting further inspection");
            fired_rules.push("zero_confidence_fallback");
            aggregator.declare(actions::FURTHER_INSPECTION, rules::ZERO_CONFIDENCE_FALLBACK);
        }

        let ranked = aggregator.ranked();
        let suppressed = aggregator.suppressed();

        info!(
            "Assessment complete: {} rules fired, {} actions ranked, {} suppressed",
            fired_rules.len(),
            ranked.len(),
            suppressed.len()
        );

        Assessment {
            ranked,
            suppressed,
            fired_rules,
        }
    }

    /// Like [`evaluate`](Self::evaluate) but rejects physically implausible
    /// measurements up front.
    pub fn evaluate_checked(
        &self,
        observation: &ObservationRecord,
    ) -> Result<Assessment, TriageError> {
        observation.validate()?;
        Ok(self.evaluate(observation))
    }
}

/// Evaluate an observation with the shared default engine.
pub fn evaluate(observation: &ObservationRecord) -> Assessment {
    AssessmentEngine::shared().evaluate(observation)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::assessment::types::{CatalogEntry, SeverityBand};
    use crate::observation::CrackSeverity;

    fn engine() -> &'static AssessmentEngine {
        AssessmentEngine::shared()
    }

    #[test]
    fn test_empty_observation_has_no_actions() {
        let result = engine().evaluate(&ObservationRecord::default());
        assert!(result.is_empty());
        assert!(result.fired_rules.is_empty());
        assert!(result.suppressed.is_empty());
    }

    #[test]
    fn test_hazard_and_overcrowding_compound() {
        let obs = ObservationRecord {
            hazardous_zone: true,
            hazardous_confidence: Some(0.8),
            overcrowding: true,
            overcrowding_confidence: Some(0.75),
            ..Default::default()
        };
        let result = engine().evaluate(&obs);

        let combo = result.get(actions::HAZARD_AND_OVERCROWDING).unwrap();
        assert_eq!(combo.confidence, 0.75);
        assert!((combo.effective_priority - 67.5).abs() < 1e-9);
        assert!(!result.contains(actions::HAZARDOUS_ZONE));
        assert!(!result.contains(actions::OVERCROWDING));
        assert!(result.suppressed.contains(&actions::HAZARDOUS_ZONE.to_string()));
        assert!(result.suppressed.contains(&actions::OVERCROWDING.to_string()));
    }

    #[test]
    fn test_singles_survive_below_compound_threshold() {
        let obs = ObservationRecord {
            hazardous_zone: true,
            hazardous_confidence: Some(0.9),
            overcrowding: true,
            overcrowding_confidence: Some(0.65),
            ..Default::default()
        };
        let result = engine().evaluate(&obs);
        assert!(!result.contains(actions::HAZARD_AND_OVERCROWDING));
        assert!(result.contains(actions::HAZARDOUS_ZONE));
        // Overcrowding single needs 0.7
        assert!(!result.contains(actions::OVERCROWDING));
    }

    #[test]
    fn test_severe_cracks_scaled_by_confidence() {
        let obs = ObservationRecord {
            crack_severity: CrackSeverity::Severe,
            crack_confidence: Some(0.9),
            ..Default::default()
        };
        let result = engine().evaluate(&obs);
        let action = result.get(actions::VISUAL_SEVERE_CRACKS).unwrap();
        assert_eq!(action.confidence, 0.9);
        assert!((action.effective_priority - 76.5).abs() < 1e-9);
        assert_eq!(action.band, SeverityBand::High);
    }

    #[test]
    fn test_high_radiation_only_top_tier() {
        let obs = ObservationRecord {
            radiation_level: 25.0,
            radiation_confidence: Some(0.9),
            ..Default::default()
        };
        let result = engine().evaluate(&obs);
        assert_eq!(result.len(), 1);
        assert_eq!(result.ranked[0].action_id, actions::RADIATION_HIGH);
        assert!((result.ranked[0].effective_priority - 85.5).abs() < 1e-9);
    }

    #[test]
    fn test_radiation_and_ordnance_suppresses_both() {
        let obs = ObservationRecord {
            radiation_level: 5.0,
            radiation_confidence: Some(0.9),
            unexploded_ordnance: true,
            ordnance_confidence: Some(0.8),
            ..Default::default()
        };
        let result = engine().evaluate(&obs);
        assert!(result.contains(actions::RADIATION_AND_ORDNANCE));
        assert!(!result.contains(actions::RADIATION_MODERATE));
        assert!(!result.contains(actions::ORDNANCE));
        assert_eq!(result.ranked[0].action_id, actions::RADIATION_AND_ORDNANCE);
    }

    #[test]
    fn test_zero_confidence_fallback() {
        let obs = ObservationRecord {
            hazardous_zone: true,
            hazardous_confidence: Some(0.0),
            overcrowding: true,
            overcrowding_confidence: Some(0.0),
            crack_severity: CrackSeverity::Severe,
            crack_confidence: Some(0.0),
            ..Default::default()
        };
        let result = engine().evaluate(&obs);
        assert_eq!(result.len(), 1);
        let action = &result.ranked[0];
        assert_eq!(action.action_id, actions::FURTHER_INSPECTION);
        assert_eq!(action.confidence, 0.5);
        assert_eq!(action.effective_priority, 25.0);
        assert_eq!(result.fired_rules, vec!["zero_confidence_fallback"]);
    }

    #[test]
    fn test_water_combination_suppresses_both_singles() {
        let obs = ObservationRecord {
            water_contamination: true,
            water_access_disrupted: true,
            ..Default::default()
        };
        let result = engine().evaluate(&obs);

        assert_eq!(result.len(), 1);
        assert_eq!(
            result.ranked[0].to_string(),
            format!("Priority 100.0: {}", actions::WATER_CONTAMINATION_AND_DISRUPTION)
        );
        assert_eq!(
            result.suppressed,
            vec![actions::WATER_CONTAMINATION, actions::WATER_DISRUPTION]
        );
    }

    #[test]
    fn test_water_contamination_alone() {
        let obs = ObservationRecord {
            water_contamination: true,
            ..Default::default()
        };
        let result = engine().evaluate(&obs);
        assert_eq!(result.len(), 1);
        assert_eq!(
            result.ranked[0].to_string(),
            format!("Priority 95.0: {}", actions::WATER_CONTAMINATION)
        );
        assert!(result.suppressed.is_empty());
    }

    #[test]
    fn test_income_below_gate_yields_nothing() {
        let below = ObservationRecord {
            income_below_poverty: true,
            income_confidence: Some(0.69),
            ..Default::default()
        };
        assert!(engine().evaluate(&below).is_empty());

        let at_gate = ObservationRecord {
            income_confidence: Some(0.7),
            ..below
        };
        let result = engine().evaluate(&at_gate);
        assert!((result.ranked[0].effective_priority - 49.0).abs() < 1e-9);
    }

    #[test]
    fn test_zero_confidence_low_tier_blocks_fallback() {
        let obs = ObservationRecord {
            radiation_level: 0.5,
            radiation_confidence: Some(0.0),
            ..Default::default()
        };
        let result = engine().evaluate(&obs);
        assert_eq!(result.len(), 1);
        assert_eq!(result.ranked[0].action_id, actions::RADIATION_LOW);
        assert_eq!(result.ranked[0].effective_priority, 0.0);
        assert!(!result.contains(actions::FURTHER_INSPECTION));
    }

    #[test]
    fn test_fallback_skipped_when_rules_fire() {
        let obs = ObservationRecord {
            hazardous_confidence: Some(0.0),
            population_displacement: true,
            ..Default::default()
        };
        let result = engine().evaluate(&obs);
        assert!(result.contains(actions::POPULATION_DISPLACEMENT));
        assert!(!result.contains(actions::FURTHER_INSPECTION));
    }

    #[test]
    fn test_large_crack_and_load_bearing_share_action() {
        let wide = ObservationRecord {
            crack_width_mm: 25.0,
            width_confidence: Some(0.92),
            ..Default::default()
        };
        let result = engine().evaluate(&wide);
        assert_eq!(result.get(actions::STRUCTURAL_REPAIRS).unwrap().confidence, 0.92);

        let load_bearing = ObservationRecord {
            load_bearing_cracks: true,
            load_confidence: Some(0.95),
            ..Default::default()
        };
        let result = engine().evaluate(&load_bearing);
        assert_eq!(result.len(), 1);
        assert_eq!(result.ranked[0].action_id, actions::STRUCTURAL_REPAIRS);
        assert_eq!(result.ranked[0].confidence, 0.95);
    }

    #[test]
    fn test_ranking_descending_and_stable() {
        let obs = ObservationRecord {
            population_displacement: true,
            multiple_families: true,
            urban_proximity: true,
            access_to_power: true,
            sar_backscatter_detected: true,
            ..Default::default()
        };
        let result = engine().evaluate(&obs);
        let ids: Vec<_> = result.ranked.iter().map(|a| a.action_id.as_str()).collect();
        assert_eq!(
            ids,
            vec![
                actions::SAR_DAMAGE,
                actions::POPULATION_DISPLACEMENT,
                actions::MULTIPLE_FAMILIES,
                actions::URBAN_PROXIMITY,
                actions::ACCESS_TO_POWER,
            ]
        );

        let again = engine().evaluate(&obs);
        assert_eq!(result.ranked, again.ranked, "Evaluation should be deterministic");
    }

    #[test]
    fn test_confidence_normalized_before_gating() {
        // 1.5 becomes 1.0 and passes the 0.7 gate
        let obs = ObservationRecord {
            overcrowding: true,
            overcrowding_confidence: Some(1.5),
            ..Default::default()
        };
        let result = engine().evaluate(&obs);
        assert_eq!(result.get(actions::OVERCROWDING).unwrap().confidence, 1.0);
    }

    #[test]
    fn test_evaluate_checked_rejects_bad_measurements() {
        let obs = ObservationRecord {
            seismic_pga: 3.0,
            ..Default::default()
        };
        assert!(matches!(
            engine().evaluate_checked(&obs),
            Err(TriageError::InvalidObservation { field: "seismic_pga", .. })
        ));
        assert!(engine().evaluate_checked(&ObservationRecord::default()).is_ok());
    }

    #[test]
    fn test_custom_catalog_changes_order() {
        let mut config = default_catalog();
        for entry in config.actions.iter_mut() {
            if entry.id == actions::ACCESS_TO_POWER {
                entry.priority = 100;
            }
        }
        let engine = AssessmentEngine::new(config).unwrap();
        let obs = ObservationRecord {
            access_to_power: true,
            sar_backscatter_detected: true,
            ..Default::default()
        };
        let result = engine.evaluate(&obs);
        assert_eq!(result.ranked[0].action_id, actions::ACCESS_TO_POWER);
    }

    #[test]
    fn test_invalid_catalog_rejected() {
        let config = CatalogConfig {
            actions: vec![CatalogEntry {
                id: "A".to_string(),
                priority: 0,
            }],
            overrides: vec![],
        };
        assert!(AssessmentEngine::new(config).is_err());
    }

    #[test]
    fn test_rule_names_exposed() {
        let names: Vec<_> = engine().rule_names().collect();
        assert!(names.contains(&"hazardous_zone_and_overcrowding"));
        assert_eq!(names.len(), RULES.len());
    }
}
