//! Relative numeric tolerance.

use thiserror::Error;

/// Threshold used when no tolerance is configured: 5% of the larger operand.
pub const DEFAULT_THRESHOLD: f64 = 0.05;

#[derive(Debug, Error, Clone, Copy, PartialEq)]
pub enum ToleranceError {
    #[error("tolerance threshold must not be negative, got {0}")]
    Negative(f64),
    #[error("tolerance threshold must be a finite number, got {0}")]
    NotFinite(f64),
}

/// A validated relative tolerance.
///
/// Two numbers `a` and `b` are within tolerance `t` when
/// `|a - b| <= max(|a|, |b|) * t`. The scale is taken from the larger
/// operand, so the check is symmetric in `a` and `b`. When both operands are
/// zero the bound is zero and only an exact match passes.
///
/// # Examples
///
/// ```
/// use json_grade_equal::Tolerance;
///
/// let t = Tolerance::new(0.05).unwrap();
/// assert!(t.allows(100.0, 104.0));
/// assert!(!t.allows(100.0, 106.0));
/// assert!(Tolerance::new(-0.1).is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd)]
pub struct Tolerance(f64);

impl Tolerance {
    /// Zero tolerance: numbers must be equal once normalized to `f64`.
    pub const EXACT: Tolerance = Tolerance(0.0);

    pub fn new(threshold: f64) -> Result<Self, ToleranceError> {
        if !threshold.is_finite() {
            return Err(ToleranceError::NotFinite(threshold));
        }
        if threshold < 0.0 {
            return Err(ToleranceError::Negative(threshold));
        }
        // Folds -0.0 into 0.0.
        Ok(Tolerance(threshold + 0.0))
    }

    pub fn threshold(self) -> f64 {
        self.0
    }

    /// Largest difference accepted between `a` and `b`.
    pub fn bound(self, a: f64, b: f64) -> f64 {
        a.abs().max(b.abs()) * self.0
    }

    pub fn allows(self, a: f64, b: f64) -> bool {
        (a - b).abs() <= self.bound(a, b)
    }
}

impl Default for Tolerance {
    fn default() -> Self {
        Tolerance(DEFAULT_THRESHOLD)
    }
}

impl TryFrom<f64> for Tolerance {
    type Error = ToleranceError;

    fn try_from(threshold: f64) -> Result<Self, Self::Error> {
        Tolerance::new(threshold)
    }
}
