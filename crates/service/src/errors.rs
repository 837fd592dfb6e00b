use models::{EntityId, EntityKind};
use thiserror::Error;

use crate::storage::StoreError;

#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum ServiceError {
    #[error("{kind} {id} not found")]
    NotFound { kind: EntityKind, id: EntityId },
    #[error("no submission by student {student_id} for assignment {assignment_id}")]
    SubmissionNotFound { assignment_id: EntityId, student_id: EntityId },
    #[error("permission denied: {0}")]
    PermissionDenied(String),
    #[error("store error: {0}")]
    Store(String),
}

impl ServiceError {
    pub fn not_found(kind: EntityKind, id: EntityId) -> Self { Self::NotFound { kind, id } }

    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::NotFound { .. } | Self::SubmissionNotFound { .. })
    }

    /// Whether the caller is at fault (maps to a 4xx at a transport boundary).
    pub fn is_client_error(&self) -> bool {
        !matches!(self, Self::Store(_))
    }

    /// Stable numeric code for external mapping/logging
    pub fn code(&self) -> u16 {
        match self {
            ServiceError::NotFound { .. } => 1001,
            ServiceError::SubmissionNotFound { .. } => 1002,
            ServiceError::PermissionDenied(_) => 1003,
            ServiceError::Store(_) => 1200,
        }
    }
}

impl From<StoreError> for ServiceError {
    fn from(err: StoreError) -> Self {
        match err {
            StoreError::NotFound { kind, id } => ServiceError::NotFound { kind, id },
            StoreError::Backend(msg) => ServiceError::Store(msg),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn store_not_found_keeps_context() {
        let err: ServiceError = StoreError::NotFound { kind: EntityKind::Course, id: 4 }.into();
        assert_eq!(err, ServiceError::not_found(EntityKind::Course, 4));
        assert_eq!(err.to_string(), "course 4 not found");
        assert!(err.is_client_error());
    }

    #[test]
    fn backend_failure_is_server_side() {
        let err: ServiceError = StoreError::Backend("disk on fire".into()).into();
        assert!(!err.is_client_error());
        assert!(!err.is_not_found());
        assert_eq!(err.code(), 1200);
    }
}
