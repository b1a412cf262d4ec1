//! Error types for store operations.

use crate::marker::{MarkerId, VisitId};
use crate::storage::StorageError;

/// Errors from the marker store.
///
/// Validation and not-found errors abort an operation before any state
/// change. A `Persistence` error is different: the in-memory mutation has
/// already been applied and remains correct; only the durable copy lags.
#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    #[error("no marker with id {0}")]
    MarkerNotFound(MarkerId),

    #[error("no visit with id {visit_id} on marker {marker_id}")]
    VisitNotFound {
        marker_id: MarkerId,
        visit_id: VisitId,
    },

    #[error("invalid {field}: {message}")]
    Validation {
        field: &'static str,
        message: String,
    },

    #[error(transparent)]
    Persistence(#[from] StorageError),
}

impl StoreError {
    pub(crate) fn validation(field: &'static str, message: impl Into<String>) -> Self {
        Self::Validation {
            field,
            message: message.into(),
        }
    }
}
