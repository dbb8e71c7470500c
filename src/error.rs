//! Library error types.

use thiserror::Error;

/// Preconditions the analysis layer refuses to paper over.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum AnalysisError {
    #[error("need at least 2 groups to compare, got {found}")]
    InsufficientGroups { found: usize },
}
