//! Type definitions for the assessment engine.
//!
//! Catalog types are deserialized from TOML; result types serialize to JSON
//! for whatever front end renders them.

use std::fmt;

use serde::{Deserialize, Serialize};

// =============================================================================
// CONFIGURATION TYPES (loaded from TOML)
// =============================================================================

/// Root configuration loaded from priority_catalog.toml.
#[derive(Debug, Clone, Deserialize)]
pub struct CatalogConfig {
    /// Base priority for every known action id
    pub actions: Vec<CatalogEntry>,
    /// Compound actions and the narrower actions they replace
    #[serde(default)]
    pub overrides: Vec<OverrideDefinition>,
}

/// One action in the priority catalog.
#[derive(Debug, Clone, Deserialize)]
pub struct CatalogEntry {
    /// Canonical action id, also the text shown to the user
    pub id: String,
    /// Base severity weight (roughly 20-100)
    pub priority: u32,
}

/// A specificity override: when `compound` is declared, every id in
/// `supersedes` is dropped from the ranked result.
#[derive(Debug, Clone, Deserialize)]
pub struct OverrideDefinition {
    pub compound: String,
    pub supersedes: Vec<String>,
}

// =============================================================================
// ENGINE TYPES
// =============================================================================

/// Conceptual severity band of a base priority.
#[derive(Debug, Clone, Copy, Serialize, PartialEq, Eq, PartialOrd, Ord)]
#[serde(rename_all = "lowercase")]
pub enum SeverityBand {
    Low,
    Moderate,
    High,
    Critical,
}

impl SeverityBand {
    pub fn from_priority(priority: u32) -> Self {
        match priority {
            90.. => SeverityBand::Critical,
            70..=89 => SeverityBand::High,
            50..=69 => SeverityBand::Moderate,
            _ => SeverityBand::Low,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            SeverityBand::Critical => "critical",
            SeverityBand::High => "high",
            SeverityBand::Moderate => "moderate",
            SeverityBand::Low => "low",
        }
    }
}

/// An action declared during one evaluation pass.
#[derive(Debug, Clone, PartialEq)]
pub struct ActionEntry {
    pub action_id: String,
    pub base_priority: u32,
    /// Normalized confidence in `[0, 1]`
    pub confidence: f64,
}

impl ActionEntry {
    /// `base_priority x confidence`
    pub fn effective_priority(&self) -> f64 {
        self.base_priority as f64 * self.confidence
    }
}

// =============================================================================
// OUTPUT TYPES (serialized to the collaborator)
// =============================================================================

/// One entry of the ranked action list.
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct RankedAction {
    /// Action id (display text)
    pub action_id: String,
    /// Catalog base priority
    pub base_priority: u32,
    /// Confidence the priority was scaled by
    pub confidence: f64,
    /// base_priority x confidence; the ranking key
    pub effective_priority: f64,
    /// Band of the base priority
    pub band: SeverityBand,
    /// Linguistic confidence label ("low", "moderate", "high")
    pub confidence_label: &'static str,
}

impl fmt::Display for RankedAction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Priority {:.1}: {}", self.effective_priority, self.action_id)
    }
}

/// Result of evaluating one observation.
#[derive(Debug, Clone, Serialize)]
pub struct Assessment {
    /// Actions ordered by effective priority, highest first
    pub ranked: Vec<RankedAction>,
    /// Action ids removed because a compound action superseded them
    pub suppressed: Vec<String>,
    /// Names of rules whose guard held, in evaluation order
    pub fired_rules: Vec<&'static str>,
}

impl Assessment {
    /// First `n` ranked actions, or all of them if fewer fired.
    pub fn top(&self, n: usize) -> &[RankedAction] {
        &self.ranked[..n.min(self.ranked.len())]
    }

    /// No action triggered. This is a valid outcome, not a failure.
    pub fn is_empty(&self) -> bool {
        self.ranked.is_empty()
    }

    pub fn len(&self) -> usize {
        self.ranked.len()
    }

    pub fn contains(&self, action_id: &str) -> bool {
        self.ranked.iter().any(|a| a.action_id == action_id)
    }

    pub fn get(&self, action_id: &str) -> Option<&RankedAction> {
        self.ranked.iter().find(|a| a.action_id == action_id)
    }
}
