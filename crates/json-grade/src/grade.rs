//! Grading a candidate document against a reference.

use std::path::Path;

use json_grade_equal::{find_mismatch, Mismatch, Tolerance};
use serde_json::Value;
use tracing::{debug, info};

use crate::document::{parse_document, read_document};
use crate::error::GradeError;

/// Outcome of comparing two successfully parsed documents.
#[derive(Debug, Clone, PartialEq)]
pub enum Verdict {
    Equal,
    /// The documents differ; carries the first divergence found.
    NotEqual(Mismatch),
}

impl Verdict {
    pub fn is_equal(&self) -> bool {
        matches!(self, Verdict::Equal)
    }

    pub fn mismatch(&self) -> Option<&Mismatch> {
        match self {
            Verdict::Equal => None,
            Verdict::NotEqual(mismatch) => Some(mismatch),
        }
    }

    /// Line printed by `compare-results`.
    pub fn message(&self) -> &'static str {
        match self {
            Verdict::Equal => "The JSON files are deeply equal.",
            Verdict::NotEqual(_) => "The JSON files are NOT deeply equal.",
        }
    }
}

pub fn grade_values(reference: &Value, candidate: &Value, tolerance: Tolerance) -> Verdict {
    match find_mismatch(reference, candidate, tolerance) {
        None => Verdict::Equal,
        Some(mismatch) => {
            info!(
                pointer = %mismatch.pointer,
                threshold = tolerance.threshold(),
                "candidate diverges from reference {mismatch}"
            );
            Verdict::NotEqual(mismatch)
        }
    }
}

/// Loads both documents, then grades them.
///
/// Both files are read before either is parsed, so a missing file is
/// reported ahead of a malformed one. The first input error is returned and
/// no verdict is produced.
pub fn grade_files(
    reference_path: impl AsRef<Path>,
    candidate_path: impl AsRef<Path>,
    tolerance: Tolerance,
) -> Result<Verdict, GradeError> {
    let (reference_path, candidate_path) = (reference_path.as_ref(), candidate_path.as_ref());
    let reference_bytes = read_document(reference_path)?;
    let candidate_bytes = read_document(candidate_path)?;
    let reference = parse_document(reference_path, &reference_bytes)?;
    let candidate = parse_document(candidate_path, &candidate_bytes)?;
    let verdict = grade_values(&reference, &candidate, tolerance);
    debug!(equal = verdict.is_equal(), "graded candidate");
    Ok(verdict)
}

#[cfg(test)]
mod tests {
    use super::*;
    use json_grade_equal::MismatchKind;
    use serde_json::json;

    #[test]
    fn equal_documents() {
        let verdict = grade_values(&json!({"a": [1, 2]}), &json!({"a": [1, 2.05]}), Tolerance::default());
        assert_eq!(verdict, Verdict::Equal);
        assert!(verdict.is_equal());
        assert!(verdict.mismatch().is_none());
        assert_eq!(verdict.message(), "The JSON files are deeply equal.");
    }

    #[test]
    fn unequal_documents_carry_mismatch() {
        let verdict = grade_values(&json!({"a": "x"}), &json!({"a": 1}), Tolerance::default());
        assert!(!verdict.is_equal());
        assert_eq!(verdict.message(), "The JSON files are NOT deeply equal.");
        let mismatch = verdict.mismatch().unwrap();
        assert_eq!(mismatch.pointer, "/a");
        assert!(matches!(mismatch.kind, MismatchKind::Kind { .. }));
    }

    #[test]
    fn exact_tolerance_is_stricter() {
        let reference = json!([100]);
        let candidate = json!([101]);
        assert!(grade_values(&reference, &candidate, Tolerance::default()).is_equal());
        assert!(!grade_values(&reference, &candidate, Tolerance::EXACT).is_equal());
    }
}
