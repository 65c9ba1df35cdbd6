use serde_json::{Number, Value};

use crate::tolerance::Tolerance;

/// Performs a deep equality check between a reference and a candidate JSON
/// value, accepting numeric leaves that differ by at most `tolerance`.
///
/// Objects must have the same number of keys and every reference key must
/// map to an equal candidate value; key order is ignored. Arrays must have
/// the same length and equal elements index by index. Numbers are compared
/// as `f64`, so `1` and `1.0` are the same number. Any other pair, including
/// values of different types, must be identical.
///
/// The check is symmetric: swapping `reference` and `candidate` never
/// changes the result.
///
/// # Examples
///
/// ```
/// use json_grade_equal::{deep_equal_within, Tolerance};
/// use serde_json::json;
///
/// let t = Tolerance::default();
/// let reference = json!({"data": {"temp": 20.0, "city": "Paris"}});
///
/// assert!(deep_equal_within(&reference, &json!({"data": {"temp": 20.9, "city": "Paris"}}), t));
/// assert!(!deep_equal_within(&reference, &json!({"data": {"temp": 21.5, "city": "Paris"}}), t));
/// assert!(!deep_equal_within(&json!({}), &json!([]), t));
/// ```
pub fn deep_equal_within(reference: &Value, candidate: &Value, tolerance: Tolerance) -> bool {
    match (reference, candidate) {
        (Value::Object(obj_a), Value::Object(obj_b)) => {
            if obj_a.len() != obj_b.len() {
                return false;
            }
            for (key, val_a) in obj_a {
                match obj_b.get(key) {
                    Some(val_b) => {
                        if !deep_equal_within(val_a, val_b, tolerance) {
                            return false;
                        }
                    }
                    None => return false,
                }
            }
            true
        }

        (Value::Array(arr_a), Value::Array(arr_b)) => {
            arr_a.len() == arr_b.len()
                && arr_a
                    .iter()
                    .zip(arr_b)
                    .all(|(a, b)| deep_equal_within(a, b, tolerance))
        }

        (Value::Number(a), Value::Number(b)) => match number_pair(a, b) {
            Some((a, b)) => tolerance.allows(a, b),
            None => a == b,
        },

        // Remaining scalars and mismatched types
        _ => reference == candidate,
    }
}

/// Normalizes both numbers to `f64`.
///
/// `None` only when a number has no `f64` form, which needs serde_json's
/// `arbitrary_precision` feature.
pub(crate) fn number_pair(a: &Number, b: &Number) -> Option<(f64, f64)> {
    Some((a.as_f64()?, b.as_f64()?))
}
