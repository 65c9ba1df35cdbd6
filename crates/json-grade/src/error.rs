//! Grading error type.

use std::io;
use std::path::{Path, PathBuf};

use thiserror::Error;

/// Input errors that stop grading before any comparison runs.
///
/// A document that parses but differs from the reference is not an error;
/// see [`Verdict::NotEqual`](crate::Verdict::NotEqual).
#[derive(Debug, Error)]
pub enum GradeError {
    #[error("JSON file not found or unreadable: {}: {source}", .path.display())]
    InputNotFound {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("malformed JSON in {}: {source}", .path.display())]
    MalformedInput {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
    #[error("JSON in {} nests {depth} levels deep, limit is {limit}", .path.display())]
    NestingTooDeep {
        path: PathBuf,
        depth: usize,
        limit: usize,
    },
}

impl GradeError {
    pub fn path(&self) -> &Path {
        match self {
            GradeError::InputNotFound { path, .. }
            | GradeError::MalformedInput { path, .. }
            | GradeError::NestingTooDeep { path, .. } => path.as_path(),
        }
    }

    pub fn is_not_found(&self) -> bool {
        matches!(self, GradeError::InputNotFound { .. })
    }
}
