//! Locating the first divergence between two JSON documents.

use std::fmt;

use serde_json::Value;

use crate::deep_equal::number_pair;
use crate::kind::JsonKind;
use crate::tolerance::Tolerance;

/// Why two values at the same location are not equal.
#[derive(Debug, Clone, PartialEq)]
pub enum MismatchKind {
    /// The values have different JSON types.
    Kind {
        reference: JsonKind,
        candidate: JsonKind,
    },
    KeyCount {
        reference: usize,
        candidate: usize,
    },
    /// A reference key has no counterpart in the candidate object.
    MissingKey { key: String },
    Length {
        reference: usize,
        candidate: usize,
    },
    /// Numbers differ by more than `allowed`.
    Number {
        reference: f64,
        candidate: f64,
        allowed: f64,
    },
    /// Scalars of the same type with different values.
    Value,
}

/// First divergence found by [`find_mismatch`].
#[derive(Debug, Clone, PartialEq)]
pub struct Mismatch {
    /// RFC 6901 pointer to the diverging node, `""` for the document root.
    pub pointer: String,
    pub kind: MismatchKind,
}

impl fmt::Display for Mismatch {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let at = if self.pointer.is_empty() {
            "document root"
        } else {
            self.pointer.as_str()
        };
        match &self.kind {
            MismatchKind::Kind {
                reference,
                candidate,
            } => write!(f, "at {at}: expected {reference}, found {candidate}"),
            MismatchKind::KeyCount {
                reference,
                candidate,
            } => write!(f, "at {at}: expected {reference} keys, found {candidate}"),
            MismatchKind::MissingKey { key } => write!(f, "at {at}: missing key {key:?}"),
            MismatchKind::Length {
                reference,
                candidate,
            } => write!(
                f,
                "at {at}: expected {reference} elements, found {candidate}"
            ),
            MismatchKind::Number {
                reference,
                candidate,
                allowed,
            } => write!(
                f,
                "at {at}: expected {reference}, found {candidate} (allowed difference {allowed})"
            ),
            MismatchKind::Value => write!(f, "at {at}: values differ"),
        }
    }
}

/// Returns the first place where `candidate` diverges from `reference`, or
/// `None` when [`deep_equal_within`](crate::deep_equal_within) holds.
///
/// Object members are visited in the reference object's iteration order,
/// array elements in index order.
///
/// # Examples
///
/// ```
/// use json_grade_equal::{find_mismatch, MismatchKind, Tolerance};
/// use serde_json::json;
///
/// let reference = json!({"rows": [{"temp": 20.0}]});
/// let candidate = json!({"rows": [{"temp": 21.5}]});
///
/// let mismatch = find_mismatch(&reference, &candidate, Tolerance::default()).unwrap();
/// assert_eq!(mismatch.pointer, "/rows/0/temp");
/// assert!(matches!(mismatch.kind, MismatchKind::Number { .. }));
/// ```
pub fn find_mismatch(reference: &Value, candidate: &Value, tolerance: Tolerance) -> Option<Mismatch> {
    let mut path = Vec::new();
    let kind = walk(reference, candidate, tolerance, &mut path)?;
    Some(Mismatch {
        pointer: format_pointer(&path),
        kind,
    })
}

fn walk(
    reference: &Value,
    candidate: &Value,
    tolerance: Tolerance,
    path: &mut Vec<String>,
) -> Option<MismatchKind> {
    match (reference, candidate) {
        (Value::Object(obj_a), Value::Object(obj_b)) => {
            if obj_a.len() != obj_b.len() {
                return Some(MismatchKind::KeyCount {
                    reference: obj_a.len(),
                    candidate: obj_b.len(),
                });
            }
            for (key, val_a) in obj_a {
                let Some(val_b) = obj_b.get(key) else {
                    return Some(MismatchKind::MissingKey { key: key.clone() });
                };
                path.push(key.clone());
                if let Some(kind) = walk(val_a, val_b, tolerance, path) {
                    return Some(kind);
                }
                path.pop();
            }
            None
        }

        (Value::Array(arr_a), Value::Array(arr_b)) => {
            if arr_a.len() != arr_b.len() {
                return Some(MismatchKind::Length {
                    reference: arr_a.len(),
                    candidate: arr_b.len(),
                });
            }
            for (i, (a, b)) in arr_a.iter().zip(arr_b).enumerate() {
                path.push(i.to_string());
                if let Some(kind) = walk(a, b, tolerance, path) {
                    return Some(kind);
                }
                path.pop();
            }
            None
        }

        (Value::Number(a), Value::Number(b)) => match number_pair(a, b) {
            Some((a, b)) if tolerance.allows(a, b) => None,
            Some((a, b)) => Some(MismatchKind::Number {
                reference: a,
                candidate: b,
                allowed: tolerance.bound(a, b),
            }),
            None if a == b => None,
            None => Some(MismatchKind::Value),
        },

        _ => {
            let (kind_a, kind_b) = (JsonKind::of(reference), JsonKind::of(candidate));
            if kind_a != kind_b {
                Some(MismatchKind::Kind {
                    reference: kind_a,
                    candidate: kind_b,
                })
            } else if reference != candidate {
                Some(MismatchKind::Value)
            } else {
                None
            }
        }
    }
}

fn escape_component(component: &str) -> String {
    if !component.contains('/') && !component.contains('~') {
        return component.to_string();
    }
    component.replace('~', "~0").replace('/', "~1")
}

fn format_pointer(path: &[String]) -> String {
    let mut out = String::new();
    for component in path {
        out.push('/');
        out.push_str(&escape_component(component));
    }
    out
}
