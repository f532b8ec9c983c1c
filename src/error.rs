use thiserror::Error;

#[derive(Debug, Error)]
pub enum TriageError {
    #[error("{universe}: value {value} is outside domain [{min}, {max}]")]
    OutOfDomain {
        universe: &'static str,
        value: f64,
        min: f64,
        max: f64,
    },

    #[error("{universe}: expected a numeric value, got {found}")]
    NotNumeric {
        universe: &'static str,
        found: String,
    },

    #[error("Invalid triangular breakpoints ({a}, {b}, {c}): require a <= b <= c")]
    InvalidBreakpoints { a: f64, b: f64, c: f64 },

    #[error("{universe}: unknown linguistic set '{set}'")]
    UnknownSet {
        universe: &'static str,
        set: String,
    },

    #[error("Invalid observation field {field}: {message}")]
    InvalidObservation {
        field: &'static str,
        message: String,
    },

    #[error("Catalog error: {0}")]
    Catalog(String),
}
