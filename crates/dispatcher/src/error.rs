//! Dispatcher error types

use std::collections::TryReserveError;

use thiserror::Error;

/// Dispatcher-specific errors
///
/// An empty structure is not an error: operations return `None` instead.
#[derive(Debug, Error)]
pub enum DispatchError {
    /// Could not grow a container for a new record or undo entry.
    /// Nothing was inserted.
    #[error("allocation failed while growing '{structure}'")]
    AllocationFailure {
        structure: &'static str,
        #[source]
        source: TryReserveError,
    },

    /// Intake fields rejected at the boundary
    #[error("intake rejected: {0}")]
    Intake(#[from] contracts::ContractError),
}

impl DispatchError {
    /// Create an allocation failure error
    pub fn allocation(structure: &'static str, source: TryReserveError) -> Self {
        Self::AllocationFailure { structure, source }
    }
}
