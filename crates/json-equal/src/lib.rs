//! json-grade-equal - Deep equality comparison for JSON values with a
//! relative numeric tolerance.
//!
//! [`deep_equal_within`] recursively compares two [`serde_json::Value`]
//! instances. Structure is compared strictly: objects need the same key set,
//! arrays the same length and order, and scalars of different types never
//! match. Numeric leaves, integer or float alike, match when their difference
//! is within [`Tolerance`] of the larger magnitude.
//!
//! [`find_mismatch`] walks the same rules and reports where two documents
//! first diverge.

mod deep_equal;
mod kind;
mod mismatch;
mod tolerance;

pub use deep_equal::deep_equal_within;
pub use kind::JsonKind;
pub use mismatch::{find_mismatch, Mismatch, MismatchKind};
pub use tolerance::{Tolerance, ToleranceError, DEFAULT_THRESHOLD};
