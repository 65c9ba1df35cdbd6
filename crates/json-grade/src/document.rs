//! Reading JSON documents from disk.

use std::fs;
use std::path::Path;

use serde::Deserialize;
use serde_json::Value;
use tracing::debug;

use crate::error::GradeError;

/// Deepest array/object nesting accepted in a document.
pub const MAX_DEPTH: usize = 1000;

/// Reads `path` and parses it as UTF-8 JSON text.
///
/// Read failures become [`GradeError::InputNotFound`]; invalid UTF-8 or
/// invalid JSON become [`GradeError::MalformedInput`]; nesting beyond
/// [`MAX_DEPTH`] becomes [`GradeError::NestingTooDeep`].
pub fn load_document(path: impl AsRef<Path>) -> Result<Value, GradeError> {
    let path = path.as_ref();
    let bytes = read_document(path)?;
    parse_document(path, &bytes)
}

/// Reads the raw bytes of `path` without parsing them.
pub fn read_document(path: impl AsRef<Path>) -> Result<Vec<u8>, GradeError> {
    let path = path.as_ref();
    let bytes = fs::read(path).map_err(|source| GradeError::InputNotFound {
        path: path.to_path_buf(),
        source,
    })?;
    debug!(path = %path.display(), bytes = bytes.len(), "read JSON document");
    Ok(bytes)
}

/// Parses in-memory bytes, attributing errors to `path`.
///
/// Nesting deeper than [`MAX_DEPTH`] is [`GradeError::NestingTooDeep`],
/// checked before parsing.
pub fn parse_document(path: impl AsRef<Path>, bytes: &[u8]) -> Result<Value, GradeError> {
    let path = path.as_ref();
    let depth = nesting_depth(bytes);
    if depth > MAX_DEPTH {
        return Err(GradeError::NestingTooDeep {
            path: path.to_path_buf(),
            depth,
            limit: MAX_DEPTH,
        });
    }

    let mut de = serde_json::Deserializer::from_slice(bytes);
    // Depth is bounded by MAX_DEPTH above.
    de.disable_recursion_limit();
    let malformed = |source| GradeError::MalformedInput {
        path: path.to_path_buf(),
        source,
    };
    let value = Value::deserialize(&mut de).map_err(malformed)?;
    de.end().map_err(malformed)?;
    Ok(value)
}

/// Maximum bracket nesting of JSON text, ignoring brackets inside strings.
fn nesting_depth(bytes: &[u8]) -> usize {
    let (mut depth, mut max) = (0usize, 0usize);
    let (mut in_string, mut escaped) = (false, false);
    for &b in bytes {
        if in_string {
            match b {
                _ if escaped => escaped = false,
                b'\\' => escaped = true,
                b'"' => in_string = false,
                _ => {}
            }
            continue;
        }
        match b {
            b'"' => in_string = true,
            b'[' | b'{' => {
                depth += 1;
                max = max.max(depth);
            }
            b']' | b'}' => depth = depth.saturating_sub(1),
            _ => {}
        }
    }
    max
}
