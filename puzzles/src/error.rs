//! Errors for puzzle selection and configuration.

/// A puzzle or cost model name that does not exist.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PuzzleError {
    UnknownPuzzle { name: String },
    UnknownCostModel { name: String },
}

impl std::fmt::Display for PuzzleError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::UnknownPuzzle { name } => {
                write!(f, "unknown puzzle {name:?} (expected crossing, frogs or family)")
            }
            Self::UnknownCostModel { name } => {
                write!(f, "unknown cost model {name:?} (expected depth, noise1 or noise2)")
            }
        }
    }
}

impl std::error::Error for PuzzleError {}
