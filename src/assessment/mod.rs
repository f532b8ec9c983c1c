//! Observation-to-action triage engine for damaged buildings.
//!
//! This module turns one building's [`ObservationRecord`](crate::observation::ObservationRecord)
//! into a ranked list of remediation actions.
//!
//! # Architecture
//!
//! - **Rules**: A static table of named guards, each yielding at most one action
//! - **Catalog**: Base priorities and specificity overrides loaded from TOML
//!   (embedded default or a custom file)
//! - **Aggregation**: First declaration of an action id wins; compound actions
//!   suppress the single-factor actions they supersede
//! - **Ranking**: `base_priority x confidence`, highest first, stable on ties
//!
//! # Example
//!
//! ```ignore
//! use building_triage::assessment::{AssessmentEngine, default_catalog};
//! use building_triage::observation::ObservationRecord;
//!
//! let engine = AssessmentEngine::new(default_catalog())?;
//!
//! let observation = ObservationRecord {
//!     hazardous_zone: true,
//!     hazardous_confidence: Some(0.8),
//!     overcrowding: true,
//!     overcrowding_confidence: Some(0.75),
//!     ..Default::default()
//! };
//!
//! let result = engine.evaluate(&observation);
//! for action in result.top(5) {
//!     println!("{}", action);
//! }
//! ```

pub mod actions;
mod aggregator;
mod catalog;
mod engine;
pub mod rules;
mod types;

pub use aggregator::ActionAggregator;
pub use catalog::{default_catalog, load_catalog, PriorityCatalog, DEFAULT_BASE_PRIORITY};
pub use engine::{evaluate, AssessmentEngine};
pub use types::*;
