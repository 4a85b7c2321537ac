// src/domain/errors.rs
use thiserror::Error;

pub type DomainResult<T> = Result<T, DomainError>;

/// Caller-input problems with a stable machine-readable code.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("no user provided")]
    NoUserProvided,
    #[error("contact is empty")]
    ContactEmpty,
    #[error("advert is missing basic info")]
    MissingBasicInfo,
    #[error("title and description share no supported language")]
    InvalidLanguages,
    #[error("invalid contact data")]
    InvalidContactData,
    #[error("password is empty")]
    EmptyPassword,
    #[error("missing personal data")]
    MissingPersonalData,
    #[error("missing contact data")]
    MissingContactData,
}

impl ValidationError {
    pub fn code(&self) -> &'static str {
        match self {
            Self::NoUserProvided => "no_user_provided",
            Self::ContactEmpty => "contact_empty",
            Self::MissingBasicInfo => "missing_basic_info",
            Self::InvalidLanguages => "invalid_languages",
            Self::InvalidContactData => "invalid_contact_data",
            Self::EmptyPassword => "empty_password",
            Self::MissingPersonalData => "missing_personal_data",
            Self::MissingContactData => "missing_contact_data",
        }
    }
}

#[derive(Debug, Error)]
pub enum DomainError {
    #[error(transparent)]
    Invalid(#[from] ValidationError),
    #[error("validation error: {0}")]
    Validation(String),
    #[error("conflict: {0}")]
    Conflict(String),
    #[error("not found: {0}")]
    NotFound(String),
    #[error("persistence error: {0}")]
    Persistence(String),
    #[error("operation cancelled: {0}")]
    Cancelled(String),
}
