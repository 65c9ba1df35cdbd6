//! json-grade - Grade a candidate JSON document against a reference.
//!
//! Loads both documents, compares them with
//! [`json_grade_equal::deep_equal_within`] and reports a [`Verdict`].
//! The `compare-results` binary wraps [`grade_files`] with the default
//! tolerance.

pub mod document;
pub mod error;
pub mod grade;
pub mod logging;

pub use document::{load_document, parse_document, read_document, MAX_DEPTH};
pub use error::GradeError;
pub use grade::{grade_files, grade_values, Verdict};
pub use json_grade_equal::{Mismatch, MismatchKind, Tolerance, DEFAULT_THRESHOLD};
