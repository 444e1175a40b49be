//! Canonical JSON bytes: the one serialization used for hashing.
//!
//! # Rules
//!
//! 1. Object keys sorted by byte order, at every depth.
//! 2. Compact form, no whitespace.
//! 3. Strings escaped as `serde_json` escapes them (RFC 8259).
//! 4. Numbers must be integers; floats are rejected so digests cannot drift
//!    with float formatting.

use std::io::Write;

/// Error produced while canonicalizing a JSON value.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CanonError {
    /// A number was not representable as `i64` or `u64`.
    NonIntegerNumber { raw: String },
}

impl std::fmt::Display for CanonError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::NonIntegerNumber { raw } => {
                write!(f, "non-integer number in canonical JSON: {raw}")
            }
        }
    }
}

impl std::error::Error for CanonError {}

/// Produce canonical JSON bytes for `value`.
///
/// # Errors
///
/// Returns [`CanonError::NonIntegerNumber`] if any number is a float.
pub fn canonical_json_bytes(value: &serde_json::Value) -> Result<Vec<u8>, CanonError> {
    let mut out = Vec::new();
    emit(&mut out, value)?;
    Ok(out)
}

fn emit(out: &mut Vec<u8>, value: &serde_json::Value) -> Result<(), CanonError> {
    use serde_json::Value;

    match value {
        Value::Null | Value::Bool(_) | Value::String(_) => emit_scalar(out, value),
        Value::Number(n) => {
            if let Some(i) = n.as_i64() {
                let _ = write!(out, "{i}");
            } else if let Some(u) = n.as_u64() {
                let _ = write!(out, "{u}");
            } else {
                return Err(CanonError::NonIntegerNumber { raw: n.to_string() });
            }
        }
        Value::Array(items) => {
            out.push(b'[');
            for (i, item) in items.iter().enumerate() {
                if i > 0 {
                    out.push(b',');
                }
                emit(out, item)?;
            }
            out.push(b']');
        }
        Value::Object(map) => {
            let mut entries: Vec<(&String, &Value)> = map.iter().collect();
            entries.sort_by(|a, b| a.0.as_bytes().cmp(b.0.as_bytes()));
            out.push(b'{');
            for (i, (key, item)) in entries.into_iter().enumerate() {
                if i > 0 {
                    out.push(b',');
                }
                emit_scalar(out, &Value::String(key.clone()));
                out.push(b':');
                emit(out, item)?;
            }
            out.push(b'}');
        }
    }
    Ok(())
}

/// Null, booleans and strings have exactly one compact rendering.
fn emit_scalar(out: &mut Vec<u8>, value: &serde_json::Value) {
    // Writing a scalar Value into a Vec cannot fail.
    let _ = serde_json::to_writer(out, value);
}
