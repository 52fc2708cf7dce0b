//! Errors raised inside a search.

use gambit_core::RulesError;

/// Why a search call stopped without producing a score.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SearchError {
    /// The search deadline passed.
    #[error("search cancelled")]
    Cancelled,

    /// The rules engine refused a push or undo.
    #[error(transparent)]
    Rules(#[from] RulesError),
}
