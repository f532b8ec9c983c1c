//! Triangular fuzzy membership over fixed measurement domains.
//!
//! Each [`Universe`] declares the physical range it accepts and a small set of
//! named linguistic categories. Breakpoints are hand-authored constants; they are
//! never fitted or mutated at runtime.
//!
//! Values outside a universe's domain are rejected with
//! [`TriageError::OutOfDomain`] instead of being clamped, since they indicate an
//! upstream measurement that is physically implausible.

use serde_json::Value;

use crate::error::TriageError;

/// A triangular membership function with breakpoints `a <= b <= c`.
///
/// Membership rises linearly from 0 at `a` to 1 at `b`, then falls back to 0
/// at `c`. Setting `a == b` or `b == c` gives a shoulder.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TriangularFn {
    pub a: f64,
    pub b: f64,
    pub c: f64,
}

impl TriangularFn {
    /// Build a triangle, rejecting unordered or non-finite breakpoints.
    pub fn new(a: f64, b: f64, c: f64) -> Result<Self, TriageError> {
        let finite = a.is_finite() && b.is_finite() && c.is_finite();
        if !finite || a > b || b > c {
            return Err(TriageError::InvalidBreakpoints { a, b, c });
        }
        Ok(Self { a, b, c })
    }

    /// Degree of membership for `x`. Zero outside `[a, c]`.
    pub fn degree(&self, x: f64) -> f64 {
        if x < self.a || x > self.c {
            return 0.0;
        }
        if x == self.b {
            return 1.0;
        }
        if x < self.b {
            (x - self.a) / (self.b - self.a)
        } else {
            (self.c - x) / (self.c - self.b)
        }
    }
}

/// A measurement domain with its named linguistic categories.
#[derive(Debug)]
pub struct Universe {
    pub name: &'static str,
    pub min: f64,
    pub max: f64,
    pub sets: &'static [(&'static str, TriangularFn)],
}

/// Crack severity on a 0-10 scale (`none=0, minor=3, moderate=6, severe=10`).
pub static CRACK_SEVERITY: Universe = Universe {
    name: "crack_severity",
    min: 0.0,
    max: 10.0,
    sets: &[
        ("minor", TriangularFn { a: 0.0, b: 0.0, c: 4.0 }),
        ("moderate", TriangularFn { a: 4.0, b: 6.0, c: 8.0 }),
        ("severe", TriangularFn { a: 7.0, b: 10.0, c: 10.0 }),
    ],
};

/// Assessor confidence in `[0, 1]`.
pub static CONFIDENCE: Universe = Universe {
    name: "confidence",
    min: 0.0,
    max: 1.0,
    sets: &[
        ("low", TriangularFn { a: 0.0, b: 0.0, c: 0.4 }),
        ("moderate", TriangularFn { a: 0.3, b: 0.6, c: 0.8 }),
        ("high", TriangularFn { a: 0.7, b: 1.0, c: 1.0 }),
    ],
};

/// Radiation dose in mSv/year, saturating at 5.1.
pub static RADIATION: Universe = Universe {
    name: "radiation",
    min: 0.0,
    max: 5.1,
    sets: &[
        ("low", TriangularFn { a: 0.0, b: 0.0, c: 1.0 }),
        ("elevated", TriangularFn { a: 0.5, b: 2.0, c: 3.5 }),
        ("high", TriangularFn { a: 3.0, b: 5.1, c: 5.1 }),
    ],
};

impl Universe {
    /// Reject NaN and values outside `[min, max]`.
    pub fn check(&self, value: f64) -> Result<f64, TriageError> {
        if value.is_nan() {
            return Err(TriageError::NotNumeric {
                universe: self.name,
                found: "NaN".to_string(),
            });
        }
        if value < self.min || value > self.max {
            return Err(TriageError::OutOfDomain {
                universe: self.name,
                value,
                min: self.min,
                max: self.max,
            });
        }
        Ok(value)
    }

    /// Look up one of this universe's predefined sets by label.
    pub fn set(&self, label: &str) -> Result<&TriangularFn, TriageError> {
        self.sets
            .iter()
            .find(|(name, _)| *name == label)
            .map(|(_, tri)| tri)
            .ok_or_else(|| TriageError::UnknownSet {
                universe: self.name,
                set: label.to_string(),
            })
    }

    /// Membership of `value` in the named set.
    pub fn membership(&self, value: f64, label: &str) -> Result<f64, TriageError> {
        let tri = self.set(label)?;
        membership(value, self, tri)
    }

    /// Membership for an untyped input such as a JSON form field.
    ///
    /// Anything other than a JSON number fails with [`TriageError::NotNumeric`].
    pub fn membership_json(&self, value: &Value, label: &str) -> Result<f64, TriageError> {
        let number = value.as_f64().ok_or_else(|| TriageError::NotNumeric {
            universe: self.name,
            found: value.to_string(),
        })?;
        self.membership(number, label)
    }

    /// Membership in every set, in declaration order.
    pub fn memberships(&self, value: f64) -> Result<Vec<(&'static str, f64)>, TriageError> {
        let value = self.check(value)?;
        Ok(self
            .sets
            .iter()
            .map(|(name, tri)| (*name, tri.degree(value)))
            .collect())
    }

    /// Label with the highest membership. Ties go to the later set.
    ///
    /// A universe with no sets fails with [`TriageError::UnknownSet`].
    pub fn best_label(&self, value: f64) -> Result<&'static str, TriageError> {
        self.memberships(value)?
            .into_iter()
            .max_by(|a, b| a.1.total_cmp(&b.1))
            .map(|(name, _)| name)
            .ok_or_else(|| TriageError::UnknownSet {
                universe: self.name,
                set: "<any>".to_string(),
            })
    }
}

/// Degree to which `value` belongs to `tri` within `universe`'s domain.
pub fn membership(value: f64, universe: &Universe, tri: &TriangularFn) -> Result<f64, TriageError> {
    let value = universe.check(value)?;
    Ok(tri.degree(value))
}
