//! Typed search errors.
//!
//! `SearchError` represents configuration failures caught before the first
//! search step. "No solution" and budget exhaustion are normal outcomes,
//! reported through [`crate::search::TerminationReason`].

/// Pre-flight configuration failure. No node has been created when one of
/// these is returned.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SearchError {
    /// The requested ordering cannot run on this descriptor, or could not be parsed.
    UnsupportedOrder { detail: String },
    /// A budget was set to a value that forbids any progress.
    InvalidBudget { detail: String },
}

impl std::fmt::Display for SearchError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::UnsupportedOrder { detail } => write!(f, "unsupported search order: {detail}"),
            Self::InvalidBudget { detail } => write!(f, "invalid search budget: {detail}"),
        }
    }
}

impl std::error::Error for SearchError {}
