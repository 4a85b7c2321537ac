// src/presentation/http/extractors.rs
use crate::{
    application::{dto::SessionSubject, error::ApplicationError},
    presentation::http::state::HttpState,
};
use axum::{
    Extension, Json,
    extract::{FromRequest, FromRequestParts, Request, rejection::JsonRejection},
    http::{StatusCode, request::Parts},
};
use serde::de::DeserializeOwned;
use tower_cookies::Cookies;

use super::error::HttpError;

/// The login carried by a valid session cookie.
#[derive(Debug, Clone)]
pub struct CurrentSession(pub SessionSubject);

impl FromRequestParts<()> for CurrentSession {
    type Rejection = HttpError;

    async fn from_request_parts(parts: &mut Parts, state: &()) -> Result<Self, Self::Rejection> {
        let Extension(app_state) = Extension::<HttpState>::from_request_parts(parts, state)
            .await
            .map_err(|_| {
                HttpError::from_error(ApplicationError::Infrastructure(
                    "application state missing".into(),
                ))
            })?;

        let cookies = Cookies::from_request_parts(parts, state)
            .await
            .map_err(|(_, reason)| {
                HttpError::from_error(ApplicationError::Infrastructure(reason.into()))
            })?;
        let value = cookies
            .get(&app_state.session_cookie.name)
            .map(|cookie| cookie.value().to_owned())
            .ok_or_else(|| {
                tracing::info!("request without session cookie");
                HttpError::from_error(ApplicationError::unauthorized("not authorized"))
            })?;

        let subject = app_state
            .services
            .authenticate_session(&value)
            .map_err(HttpError::from_error)?;

        Ok(Self(subject))
    }
}

/// JSON body whose decoding failures answer 422 instead of axum's defaults.
#[derive(Debug, Clone)]
pub struct JsonPayload<T>(pub T);

impl<T> FromRequest<()> for JsonPayload<T>
where
    T: DeserializeOwned + Send,
{
    type Rejection = HttpError;

    async fn from_request(req: Request, state: &()) -> Result<Self, Self::Rejection> {
        match Json::<T>::from_request(req, state).await {
            Ok(Json(value)) => Ok(Self(value)),
            Err(rejection) => Err(reject_payload(&rejection)),
        }
    }
}

fn reject_payload(rejection: &JsonRejection) -> HttpError {
    if rejection.status() == StatusCode::PAYLOAD_TOO_LARGE {
        return HttpError::payload_too_large();
    }
    tracing::info!(reason = %rejection.body_text(), "rejected request payload");
    HttpError::invalid_payload()
}
