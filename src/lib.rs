pub mod assessment;
pub mod error;
pub mod fuzzy;
pub mod observation;

pub use assessment::{evaluate, Assessment, AssessmentEngine, RankedAction, SeverityBand};
pub use error::TriageError;
pub use observation::{CrackSeverity, ObservationRecord};

/// Install the global tracing subscriber. Honors `RUST_LOG`, defaulting to `info`.
pub fn init_tracing() {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .init();
}
