//! Trace digests: a content address for a solution trace.
//!
//! Two runs that return the same states in the same order produce the same
//! digest, in-process or across processes. States are rendered through
//! `serde_json`, then canonicalized, so any `Serialize` state type works as
//! long as it contains no floats.

use serde::Serialize;

use super::canon::{canonical_json_bytes, CanonError};
use super::hash::{canonical_hash, ContentHash};
use super::hash_domain::HashDomain;

/// Failure to compute a trace digest.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TraceError {
    /// A state could not be rendered as JSON.
    Serialize { index: usize, detail: String },
    /// The rendered trace could not be canonicalized.
    Canon(CanonError),
}

impl std::fmt::Display for TraceError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Serialize { index, detail } => {
                write!(f, "state {index} of trace is not serializable: {detail}")
            }
            Self::Canon(e) => write!(f, "trace canonicalization failed: {e}"),
        }
    }
}

impl std::error::Error for TraceError {}

impl From<CanonError> for TraceError {
    fn from(e: CanonError) -> Self {
        Self::Canon(e)
    }
}

/// Render a trace as `{"length": n, "states": [...]}`.
///
/// # Errors
///
/// Returns [`TraceError::Serialize`] naming the first state that fails to serialize.
pub fn trace_to_json<S: Serialize>(trace: &[S]) -> Result<serde_json::Value, TraceError> {
    let states = trace
        .iter()
        .enumerate()
        .map(|(index, state)| {
            serde_json::to_value(state).map_err(|e| TraceError::Serialize {
                index,
                detail: e.to_string(),
            })
        })
        .collect::<Result<Vec<_>, _>>()?;
    Ok(serde_json::json!({
        "length": trace.len(),
        "states": states,
    }))
}

/// Digest of a whole trace under [`HashDomain::Trace`].
///
/// # Errors
///
/// Returns [`TraceError`] if a state cannot be serialized or contains floats.
pub fn trace_digest<S: Serialize>(trace: &[S]) -> Result<ContentHash, TraceError> {
    let bytes = canonical_json_bytes(&trace_to_json(trace)?)?;
    Ok(canonical_hash(HashDomain::Trace, &bytes))
}

/// Digest of one state under [`HashDomain::TraceState`].
///
/// # Errors
///
/// Returns [`TraceError`] if the state cannot be serialized or contains floats.
pub fn state_fingerprint<S: Serialize>(state: &S) -> Result<ContentHash, TraceError> {
    let value = serde_json::to_value(state).map_err(|e| TraceError::Serialize {
        index: 0,
        detail: e.to_string(),
    })?;
    let bytes = canonical_json_bytes(&value)?;
    Ok(canonical_hash(HashDomain::TraceState, &bytes))
}
