use crate::application::{ApplicationResult, error::ApplicationError};
use crate::domain::errors::DomainError;
use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::Serialize;
use utoipa::ToSchema;

const INTERNAL_MESSAGE: &str = "internal server error";

#[derive(Debug)]
pub struct HttpError {
    status: StatusCode,
    code: Option<&'static str>,
    message: String,
}

impl HttpError {
    pub fn from_error(err: ApplicationError) -> Self {
        if err.is_client_error() {
            tracing::debug!(error = %err, "request rejected");
        }
        match err {
            ApplicationError::Domain(domain_err) => Self::from_domain(domain_err),
            ApplicationError::Validation(msg) => Self::new(StatusCode::UNPROCESSABLE_ENTITY, msg),
            ApplicationError::Conflict(msg) => Self::new(StatusCode::CONFLICT, msg),
            // cookie sessions: unauthenticated and unauthorized both answer 403
            ApplicationError::Unauthorized(msg) | ApplicationError::Forbidden(msg) => {
                Self::new(StatusCode::FORBIDDEN, msg)
            }
            ApplicationError::Infrastructure(msg) => Self::internal(&msg),
        }
    }

    fn from_domain(err: DomainError) -> Self {
        match err {
            DomainError::Invalid(validation) => Self {
                status: StatusCode::UNPROCESSABLE_ENTITY,
                code: Some(validation.code()),
                message: validation.to_string(),
            },
            DomainError::Validation(msg) => Self::new(StatusCode::UNPROCESSABLE_ENTITY, msg),
            DomainError::NotFound(msg) => Self::new(StatusCode::NOT_FOUND, msg),
            DomainError::Conflict(msg) => Self::new(StatusCode::CONFLICT, msg),
            DomainError::Cancelled(msg) => {
                tracing::warn!(cause = %msg, "request cancelled");
                Self::new(
                    StatusCode::SERVICE_UNAVAILABLE,
                    "operation cancelled, try again later".into(),
                )
            }
            DomainError::Persistence(msg) => Self::internal(&msg),
        }
    }

    pub fn invalid_payload() -> Self {
        Self::new(StatusCode::UNPROCESSABLE_ENTITY, "invalid payload".into())
    }

    pub fn payload_too_large() -> Self {
        Self::new(StatusCode::PAYLOAD_TOO_LARGE, "payload too large".into())
    }

    /// Generic 500 for a handler that panicked; the panic detail is logged only.
    pub fn from_panic(detail: &str) -> Self {
        tracing::error!(panic = detail, "handler panicked");
        Self::new(StatusCode::INTERNAL_SERVER_ERROR, INTERNAL_MESSAGE.into())
    }

    pub fn status(&self) -> StatusCode {
        self.status
    }

    fn internal(cause: &str) -> Self {
        tracing::error!(cause, "request failed");
        Self::new(StatusCode::INTERNAL_SERVER_ERROR, INTERNAL_MESSAGE.into())
    }

    fn new(status: StatusCode, message: String) -> Self {
        Self {
            status,
            code: None,
            message,
        }
    }
}

impl IntoResponse for HttpError {
    fn into_response(self) -> Response {
        let payload = ErrorResponse {
            error: self
                .status
                .canonical_reason()
                .unwrap_or("error")
                .to_string(),
            code: self.code.map(str::to_owned),
            message: self.message,
        };
        (self.status, Json(payload)).into_response()
    }
}

#[derive(Debug, Serialize, ToSchema)]
pub struct ErrorResponse {
    pub error: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub code: Option<String>,
    pub message: String,
}

pub type HttpResult<T> = Result<T, HttpError>;

pub trait IntoHttpResult<T> {
    fn into_http(self) -> HttpResult<T>;
}

impl<T> IntoHttpResult<T> for ApplicationResult<T> {
    fn into_http(self) -> HttpResult<T> {
        self.map_err(HttpError::from_error)
    }
}
