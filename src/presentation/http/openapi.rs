// src/presentation/http/openapi.rs
use axum::{Router, routing::get};
use serde::{Deserialize, Serialize};
use std::{env, fs::File, io::BufWriter, path::Path};
use utoipa::openapi::{
    Components,
    security::{ApiKey, ApiKeyValue, SecurityScheme},
};
use utoipa::{Modify, OpenApi, ToSchema};

pub const DEFAULT_SNAPSHOT_PATH: &str = "docs/openapi.json";

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct StatusResponse {
    pub status: String,
}

impl StatusResponse {
    pub fn ok() -> Self {
        Self {
            status: "ok".into(),
        }
    }
}

#[derive(OpenApi)]
#[openapi(
    paths(
        crate::presentation::http::controllers::users::register,
        crate::presentation::http::controllers::users::login,
        crate::presentation::http::controllers::users::logout,
        crate::presentation::http::controllers::users::profile,
        crate::presentation::http::controllers::users::exists,
        crate::presentation::http::controllers::adverts::list_adverts,
        crate::presentation::http::controllers::adverts::get_advert,
        crate::presentation::http::controllers::adverts::create_advert,
        crate::presentation::http::controllers::adverts::delete_advert,
        super::routes::health
    ),
    components(
        schemas(
            StatusResponse,
            crate::presentation::http::error::ErrorResponse,
            crate::presentation::http::controllers::users::RegisterRequest,
            crate::presentation::http::controllers::users::LoginRequest,
            crate::presentation::http::controllers::users::LoginResponse,
            crate::presentation::http::controllers::users::UserExistsResponse,
            crate::presentation::http::controllers::adverts::ContactPayload,
            crate::presentation::http::controllers::adverts::CreateAdvertRequest,
            crate::application::dto::UserDto,
            crate::application::dto::ContactDetailsDto,
            crate::application::dto::AdvertDto,
            crate::application::dto::AdvertOwnerDto
        )
    ),
    tags(
        (name = "Users", description = "Registration and cookie session endpoints"),
        (name = "Adverts", description = "Multilingual classified adverts"),
        (name = "System", description = "System level endpoints")
    ),
    modifiers(&ApiDocCustomizer),
    info(
        title = "Board API",
        description = "Classifieds board backend",
        version = "0.1.0"
    )
)]
pub struct ApiDoc;

struct ApiDocCustomizer;

impl Modify for ApiDocCustomizer {
    fn modify(&self, openapi: &mut utoipa::openapi::OpenApi) {
        let cookie_name =
            env::var("SESSION_COOKIE_NAME").unwrap_or_else(|_| "board_session".to_string());
        let components = openapi.components.get_or_insert_with(Components::default);
        components.add_security_scheme(
            "sessionCookie",
            SecurityScheme::ApiKey(ApiKey::Cookie(ApiKeyValue::new(cookie_name))),
        );
    }
}

pub async fn serve_openapi() -> axum::Json<utoipa::openapi::OpenApi> {
    axum::Json(ApiDoc::openapi())
}

pub fn docs_router() -> Router {
    Router::new().route("/openapi.json", get(serve_openapi))
}

pub fn write_openapi_snapshot(output_path: &str) -> std::io::Result<()> {
    let document = ApiDoc::openapi();
    let path = Path::new(output_path);
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)?;
    }
    let file = File::create(path)?;
    let writer = BufWriter::new(file);
    serde_json::to_writer_pretty(writer, &document)?;
    Ok(())
}
