//! Per-evaluation action collection, suppression and ranking.

use std::collections::HashSet;

use tracing::debug;

use super::catalog::PriorityCatalog;
use super::types::{ActionEntry, RankedAction, SeverityBand};
use crate::fuzzy::CONFIDENCE;
use crate::observation::normalize_confidence;

/// Collects the actions declared during one evaluation pass.
///
/// Declaring an id that is already present is a no-op (first writer wins).
/// Ranking applies the catalog's override table first, so superseded actions
/// never reach the output.
#[derive(Debug)]
pub struct ActionAggregator<'c> {
    catalog: &'c PriorityCatalog,
    entries: Vec<ActionEntry>,
    seen: HashSet<String>,
}

impl<'c> ActionAggregator<'c> {
    pub fn new(catalog: &'c PriorityCatalog) -> Self {
        Self {
            catalog,
            entries: Vec::new(),
            seen: HashSet::new(),
        }
    }

    /// Declare an action. Returns false if the id was already declared.
    ///
    /// The confidence is normalized the same way observation confidences are.
    pub fn declare(&mut self, action_id: &str, confidence: f64) -> bool {
        if !self.seen.insert(action_id.to_string()) {
            debug!("Action already declared, ignoring: {}", action_id);
            return false;
        }
        self.entries.push(ActionEntry {
            action_id: action_id.to_string(),
            base_priority: self.catalog.base_priority(action_id),
            confidence: normalize_confidence(Some(confidence)),
        });
        true
    }

    /// True when nothing has been declared yet.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Clear all declared actions so the aggregator can be reused.
    pub fn reset(&mut self) {
        self.entries.clear();
        self.seen.clear();
    }

    /// Ids removed by the override table, in declaration order.
    pub fn suppressed(&self) -> Vec<String> {
        let superseded = self.superseded_ids();
        self.entries
            .iter()
            .filter(|e| superseded.contains(e.action_id.as_str()))
            .map(|e| e.action_id.clone())
            .collect()
    }

    /// Surviving actions sorted by effective priority, highest first.
    ///
    /// The sort is stable, so equal priorities keep declaration order.
    pub fn ranked(&self) -> Vec<RankedAction> {
        let superseded = self.superseded_ids();

        let mut ranked: Vec<RankedAction> = self
            .entries
            .iter()
            .filter(|e| !superseded.contains(e.action_id.as_str()))
            .map(|e| RankedAction {
                action_id: e.action_id.clone(),
                base_priority: e.base_priority,
                confidence: e.confidence,
                effective_priority: e.effective_priority(),
                band: SeverityBand::from_priority(e.base_priority),
                confidence_label: CONFIDENCE.best_label(e.confidence).unwrap_or("high"),
            })
            .collect();

        ranked.sort_by(|a, b| b.effective_priority.total_cmp(&a.effective_priority));
        ranked
    }

    /// First `n` ranked actions, or fewer if not enough fired.
    pub fn top(&self, n: usize) -> Vec<RankedAction> {
        let mut ranked = self.ranked();
        ranked.truncate(n);
        ranked
    }

    fn superseded_ids(&self) -> HashSet<&str> {
        let mut superseded = HashSet::new();
        for def in self.catalog.overrides() {
            if !self.seen.contains(&def.compound) {
                continue;
            }
            for id in &def.supersedes {
                if self.seen.contains(id) {
                    debug!("'{}' supersedes '{}'", def.compound, id);
                    superseded.insert(id.as_str());
                }
            }
        }
        superseded
    }
}
