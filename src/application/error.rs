// src/application/error.rs
use crate::domain::errors::{DomainError, ValidationError};
use thiserror::Error;

pub type ApplicationResult<T> = Result<T, ApplicationError>;

/// Failures surfaced by use cases. Domain errors pass through untouched so
/// validation codes reach the HTTP layer.
#[derive(Debug, Error)]
pub enum ApplicationError {
    #[error(transparent)]
    Domain(#[from] DomainError),

    #[error("validation error: {0}")]
    Validation(String),

    #[error("conflict: {0}")]
    Conflict(String),

    /// No session, or a session that failed verification.
    #[error("unauthorized: {0}")]
    Unauthorized(String),

    /// Authenticated, but not allowed to do this.
    #[error("forbidden: {0}")]
    Forbidden(String),

    #[error("infrastructure failure: {0}")]
    Infrastructure(String),
}

impl From<ValidationError> for ApplicationError {
    fn from(value: ValidationError) -> Self {
        Self::Domain(value.into())
    }
}

impl ApplicationError {
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }

    pub fn conflict(msg: impl Into<String>) -> Self {
        Self::Conflict(msg.into())
    }

    pub fn unauthorized(msg: impl Into<String>) -> Self {
        Self::Unauthorized(msg.into())
    }

    pub fn forbidden(msg: impl Into<String>) -> Self {
        Self::Forbidden(msg.into())
    }

    pub fn infrastructure(msg: impl Into<String>) -> Self {
        Self::Infrastructure(msg.into())
    }

    /// Whether the caller can fix the request and retry.
    pub fn is_client_error(&self) -> bool {
        match self {
            Self::Domain(DomainError::Persistence(_) | DomainError::Cancelled(_))
            | Self::Infrastructure(_) => false,
            Self::Domain(_)
            | Self::Validation(_)
            | Self::Conflict(_)
            | Self::Unauthorized(_)
            | Self::Forbidden(_) => true,
        }
    }
}
