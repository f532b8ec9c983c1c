//! Priority catalog loading.
//!
//! Provides two loading methods:
//! - `default_catalog()` - Loads the catalog compiled into the binary
//! - `load_catalog(path)` - Loads a custom catalog from a file path

use std::collections::{HashMap, HashSet};
use std::path::Path;

use anyhow::Result;
use once_cell::sync::Lazy;
use tracing::debug;

use super::types::{CatalogConfig, OverrideDefinition};
use crate::error::TriageError;

/// Default catalog embedded in the binary at compile time.
const DEFAULT_CATALOG: &str = include_str!("../../config/priority_catalog.toml");

/// Base priority for action ids missing from the catalog.
pub const DEFAULT_BASE_PRIORITY: u32 = 50;

static DEFAULT_CONFIG: Lazy<CatalogConfig> = Lazy::new(|| {
    toml::from_str(DEFAULT_CATALOG).expect("embedded priority_catalog.toml must be valid TOML")
});

/// Load a catalog from a TOML file at the given path.
///
/// # Example
/// ```ignore
/// let config = load_catalog(Path::new("/path/to/custom_catalog.toml"))?;
/// let engine = AssessmentEngine::new(config)?;
/// ```
pub fn load_catalog(path: &Path) -> Result<CatalogConfig> {
    let content = std::fs::read_to_string(path)?;
    let config: CatalogConfig = toml::from_str(&content)?;
    debug!(
        "Loaded catalog from {:?}: {} actions, {} overrides",
        path,
        config.actions.len(),
        config.overrides.len()
    );
    Ok(config)
}

/// Get the catalog embedded in the binary.
///
/// # Panics
/// Panics if the embedded TOML is invalid (this would be a compile-time bug).
pub fn default_catalog() -> CatalogConfig {
    DEFAULT_CONFIG.clone()
}

/// Validated, read-only lookup built from a [`CatalogConfig`].
#[derive(Debug, Clone)]
pub struct PriorityCatalog {
    priorities: HashMap<String, u32>,
    overrides: Vec<OverrideDefinition>,
}

impl PriorityCatalog {
    /// Validate a config and index it by action id.
    ///
    /// Rejects duplicate ids, priorities outside 1-100, and overrides that
    /// supersede their own compound action.
    pub fn new(config: CatalogConfig) -> Result<Self, TriageError> {
        let mut priorities = HashMap::with_capacity(config.actions.len());
        for entry in config.actions {
            if entry.priority == 0 || entry.priority > 100 {
                return Err(TriageError::Catalog(format!(
                    "priority {} for '{}' out of range (1-100)",
                    entry.priority, entry.id
                )));
            }
            if priorities.insert(entry.id.clone(), entry.priority).is_some() {
                return Err(TriageError::Catalog(format!(
                    "duplicate action id '{}'",
                    entry.id
                )));
            }
        }

        let mut compounds = HashSet::new();
        for def in &config.overrides {
            if def.supersedes.contains(&def.compound) {
                return Err(TriageError::Catalog(format!(
                    "override '{}' supersedes itself",
                    def.compound
                )));
            }
            if !compounds.insert(def.compound.as_str()) {
                return Err(TriageError::Catalog(format!(
                    "duplicate override for '{}'",
                    def.compound
                )));
            }
        }

        Ok(Self {
            priorities,
            overrides: config.overrides,
        })
    }

    /// Base priority for an action, or [`DEFAULT_BASE_PRIORITY`] when unknown.
    pub fn base_priority(&self, action_id: &str) -> u32 {
        self.priorities
            .get(action_id)
            .copied()
            .unwrap_or(DEFAULT_BASE_PRIORITY)
    }

    pub fn contains(&self, action_id: &str) -> bool {
        self.priorities.contains_key(action_id)
    }

    pub fn overrides(&self) -> &[OverrideDefinition] {
        &self.overrides
    }

    pub fn len(&self) -> usize {
        self.priorities.len()
    }

    pub fn is_empty(&self) -> bool {
        self.priorities.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::assessment::actions;
    use crate::assessment::types::CatalogEntry;

    fn entry(id: &str, priority: u32) -> CatalogEntry {
        CatalogEntry {
            id: id.to_string(),
            priority,
        }
    }

    #[test]
    fn test_default_catalog_loads() {
        let config = default_catalog();
        assert!(!config.actions.is_empty(), "Should have catalog entries");
        assert!(!config.overrides.is_empty(), "Should have overrides");
        assert!(PriorityCatalog::new(config).is_ok());
    }

    #[test]
    fn test_every_rule_action_is_catalogued() {
        let catalog = PriorityCatalog::new(default_catalog()).unwrap();
        for id in actions::ALL {
            assert!(catalog.contains(id), "Action '{}' missing from catalog", id);
        }
        assert_eq!(catalog.len(), actions::ALL.len());
    }

    #[test]
    fn test_override_ids_are_catalogued() {
        let catalog = PriorityCatalog::new(default_catalog()).unwrap();
        for def in catalog.overrides() {
            assert!(catalog.contains(&def.compound), "Unknown compound '{}'", def.compound);
            for id in &def.supersedes {
                assert!(catalog.contains(id), "Unknown superseded id '{}'", id);
            }
        }
    }

    #[test]
    fn test_known_priorities() {
        let catalog = PriorityCatalog::new(default_catalog()).unwrap();
        assert_eq!(catalog.base_priority(actions::HAZARDOUS_ZONE), 100);
        assert_eq!(catalog.base_priority(actions::RADIATION_HIGH), 95);
        assert_eq!(catalog.base_priority(actions::HAZARD_AND_OVERCROWDING), 90);
        assert_eq!(catalog.base_priority(actions::SAR_DAMAGE), 85);
        assert_eq!(catalog.base_priority(actions::VULNERABLE_POPULATION), 80);
        assert_eq!(catalog.base_priority(actions::MINOR_CRACKS), 30);
        assert_eq!(catalog.base_priority(actions::RADAR_STABLE), 20);
    }

    #[test]
    fn test_priorities_within_bands() {
        let config = default_catalog();
        for entry in &config.actions {
            assert!(
                (20..=100).contains(&entry.priority),
                "Priority for '{}' should be 20-100, got {}",
                entry.id,
                entry.priority
            );
        }
    }

    #[test]
    fn test_unknown_action_defaults_to_fifty() {
        let catalog = PriorityCatalog::new(default_catalog()).unwrap();
        assert_eq!(catalog.base_priority("Something newly authored"), 50);
    }

    #[test]
    fn test_duplicate_id_rejected() {
        let config = CatalogConfig {
            actions: vec![entry("A", 90), entry("A", 80)],
            overrides: vec![],
        };
        let err = PriorityCatalog::new(config).unwrap_err();
        assert!(err.to_string().contains("duplicate"));
    }

    #[test]
    fn test_out_of_range_priority_rejected() {
        let config = CatalogConfig {
            actions: vec![entry("A", 150)],
            overrides: vec![],
        };
        assert!(PriorityCatalog::new(config).is_err());
    }

    #[test]
    fn test_self_superseding_override_rejected() {
        let config = CatalogConfig {
            actions: vec![entry("A", 90)],
            overrides: vec![OverrideDefinition {
                compound: "A".to_string(),
                supersedes: vec!["A".to_string()],
            }],
        };
        assert!(PriorityCatalog::new(config).is_err());
    }

    #[test]
    fn test_load_catalog_from_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("catalog.toml");
        std::fs::write(
            &path,
            r#"
[[actions]]
id = "Custom: Inspect roof."
priority = 65
"#,
        )
        .unwrap();

        let config = load_catalog(&path).unwrap();
        assert_eq!(config.actions.len(), 1);
        assert!(config.overrides.is_empty());

        let catalog = PriorityCatalog::new(config).unwrap();
        assert_eq!(catalog.base_priority("Custom: Inspect roof."), 65);
    }

    #[test]
    fn test_load_catalog_invalid_toml() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("broken.toml");
        std::fs::write(&path, "[[actions]\nid = ").unwrap();
        assert!(load_catalog(&path).is_err());
    }
}
