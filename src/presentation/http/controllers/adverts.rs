// src/presentation/http/controllers/adverts.rs
use crate::application::{
    commands::adverts::{ContactInput, CreateAdvertCommand, DeleteAdvertCommand},
    dto::AdvertDto,
    queries::adverts::{GetAdvertQuery, ListAdvertsQuery},
};
use crate::domain::translation::{MultilingualText, parse_language_list};
use crate::presentation::http::error::{HttpError, HttpResult, IntoHttpResult};
use crate::presentation::http::extractors::{CurrentSession, JsonPayload};
use crate::presentation::http::state::HttpState;
use axum::{
    Extension, Json,
    extract::{Path, Query, rejection::QueryRejection},
    http::StatusCode,
};
use serde::Deserialize;
use std::collections::BTreeMap;
use utoipa::{IntoParams, ToSchema};
use uuid::Uuid;

#[derive(Debug, Deserialize, IntoParams)]
pub struct AdvertListParams {
    /// Page size, 20 when absent, at most 100.
    pub limit: Option<u32>,
    pub offset: Option<u32>,
    /// Comma separated language tags such as `en,pl`. Empty means all.
    pub langs: Option<String>,
}

#[derive(Debug, Default, Deserialize, ToSchema)]
#[serde(deny_unknown_fields)]
pub struct ContactPayload {
    #[serde(default)]
    pub mail: String,
    #[serde(default, alias = "phone_number")]
    pub phone: String,
}

#[derive(Debug, Deserialize, ToSchema)]
#[serde(deny_unknown_fields)]
pub struct CreateAdvertRequest {
    #[schema(value_type = BTreeMap<String, String>)]
    pub title: MultilingualText,
    #[schema(value_type = BTreeMap<String, String>)]
    pub description: MultilingualText,
    #[serde(rename = "type")]
    pub advert_type: String,
    #[serde(default)]
    pub contact_details: ContactPayload,
}

#[utoipa::path(
    get,
    path = "/api/adverts",
    params(AdvertListParams),
    responses(
        (status = 200, description = "One page of adverts; may be shorter than the limit.", body = [AdvertDto]),
        (status = 422, description = "Invalid query.", body = crate::presentation::http::error::ErrorResponse)
    ),
    tag = "Adverts"
)]
pub async fn list_adverts(
    Extension(state): Extension<HttpState>,
    params: Result<Query<AdvertListParams>, QueryRejection>,
) -> HttpResult<Json<Vec<AdvertDto>>> {
    let Query(params) = params.map_err(|rejection| {
        tracing::info!(reason = %rejection.body_text(), "rejected advert list query");
        HttpError::invalid_payload()
    })?;

    let query = ListAdvertsQuery {
        languages: params
            .langs
            .as_deref()
            .map(parse_language_list)
            .unwrap_or_default(),
        limit: params.limit,
        offset: params.offset,
    };

    state
        .services
        .advert_queries
        .list_adverts(query)
        .await
        .into_http()
        .map(Json)
}

#[utoipa::path(
    get,
    path = "/api/adverts/{id}",
    params(("id" = Uuid, Path, description = "Advert identifier")),
    responses(
        (status = 200, description = "The advert with its owner.", body = AdvertDto),
        (status = 404, description = "Advert not found.", body = crate::presentation::http::error::ErrorResponse)
    ),
    tag = "Adverts"
)]
pub async fn get_advert(
    Extension(state): Extension<HttpState>,
    Path(id): Path<Uuid>,
) -> HttpResult<Json<AdvertDto>> {
    state
        .services
        .advert_queries
        .get_advert(GetAdvertQuery { id })
        .await
        .into_http()
        .map(Json)
}

#[utoipa::path(
    post,
    path = "/api/adverts",
    request_body = CreateAdvertRequest,
    responses(
        (status = 201, description = "Advert created.", body = AdvertDto),
        (status = 403, description = "No valid session.", body = crate::presentation::http::error::ErrorResponse),
        (status = 422, description = "Invalid advert.", body = crate::presentation::http::error::ErrorResponse)
    ),
    tag = "Adverts"
)]
pub async fn create_advert(
    Extension(state): Extension<HttpState>,
    CurrentSession(session): CurrentSession,
    JsonPayload(payload): JsonPayload<CreateAdvertRequest>,
) -> HttpResult<(StatusCode, Json<AdvertDto>)> {
    let command = CreateAdvertCommand {
        title: payload.title,
        description: payload.description,
        advert_type: payload.advert_type,
        contact: ContactInput {
            mail: payload.contact_details.mail,
            phone: payload.contact_details.phone,
        },
    };

    let advert = state
        .services
        .advert_commands
        .create_advert(&session, command)
        .await
        .into_http()?;

    Ok((StatusCode::CREATED, Json(advert)))
}

#[utoipa::path(
    delete,
    path = "/api/adverts/{id}",
    params(("id" = Uuid, Path, description = "Advert identifier")),
    responses(
        (status = 204, description = "Advert destroyed."),
        (status = 403, description = "No valid session or not the owner.", body = crate::presentation::http::error::ErrorResponse),
        (status = 404, description = "Advert not found.", body = crate::presentation::http::error::ErrorResponse)
    ),
    tag = "Adverts"
)]
pub async fn delete_advert(
    Extension(state): Extension<HttpState>,
    CurrentSession(session): CurrentSession,
    Path(id): Path<Uuid>,
) -> HttpResult<StatusCode> {
    state
        .services
        .advert_commands
        .delete_advert(&session, DeleteAdvertCommand { id })
        .await
        .into_http()?;

    Ok(StatusCode::NO_CONTENT)
}
