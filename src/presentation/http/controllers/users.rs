// src/presentation/http/controllers/users.rs
use crate::application::{
    commands::users::{LoginUserCommand, RegisterUserCommand},
    dto::UserDto,
};
use crate::presentation::http::error::{HttpResult, IntoHttpResult};
use crate::presentation::http::extractors::{CurrentSession, JsonPayload};
use crate::presentation::http::openapi::StatusResponse;
use crate::presentation::http::state::HttpState;
use axum::{
    Extension, Json,
    extract::Query,
    http::StatusCode,
};
use tower_cookies::Cookies;
use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};

#[derive(Debug, Deserialize, ToSchema)]
#[serde(deny_unknown_fields)]
pub struct RegisterRequest {
    #[serde(alias = "Login")]
    pub login: String,
    pub password: String,
    pub firstname: String,
    pub surname: String,
    #[serde(default)]
    pub mail: String,
    #[serde(default)]
    pub phone: String,
}

#[derive(Debug, Deserialize, ToSchema)]
#[serde(deny_unknown_fields)]
pub struct LoginRequest {
    #[serde(alias = "Login")]
    pub login: String,
    #[serde(alias = "Password")]
    pub password: String,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct LoginResponse {
    pub status: String,
    pub user: UserDto,
}

#[derive(Debug, Deserialize, IntoParams)]
pub struct UserExistsParams {
    pub login: String,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct UserExistsResponse {
    pub exists: bool,
}

#[utoipa::path(
    post,
    path = "/api/user/register",
    request_body = RegisterRequest,
    responses(
        (status = 201, description = "User registered.", body = StatusResponse),
        (status = 409, description = "Login already taken.", body = crate::presentation::http::error::ErrorResponse),
        (status = 422, description = "Invalid payload.", body = crate::presentation::http::error::ErrorResponse)
    ),
    tag = "Users"
)]
pub async fn register(
    Extension(state): Extension<HttpState>,
    JsonPayload(payload): JsonPayload<RegisterRequest>,
) -> HttpResult<(StatusCode, Json<StatusResponse>)> {
    let command = RegisterUserCommand {
        login: payload.login,
        password: payload.password,
        first_name: payload.firstname,
        surname: payload.surname,
        mail: payload.mail,
        phone: payload.phone,
    };

    state
        .services
        .user_commands
        .register(command)
        .await
        .into_http()?;

    Ok((StatusCode::CREATED, Json(StatusResponse::ok())))
}

#[utoipa::path(
    post,
    path = "/api/user/login",
    request_body = LoginRequest,
    responses(
        (status = 200, description = "Signed in; the session cookie is set.", body = LoginResponse),
        (status = 403, description = "Wrong credentials.", body = crate::presentation::http::error::ErrorResponse),
        (status = 422, description = "Unknown user or invalid payload.", body = crate::presentation::http::error::ErrorResponse)
    ),
    tag = "Users"
)]
pub async fn login(
    Extension(state): Extension<HttpState>,
    cookies: Cookies,
    JsonPayload(payload): JsonPayload<LoginRequest>,
) -> HttpResult<Json<LoginResponse>> {
    let result = state
        .services
        .user_commands
        .login(LoginUserCommand {
            login: payload.login,
            password: payload.password,
        })
        .await
        .into_http()?;

    cookies.add(state.session_cookie.issue(&result.session.value));
    Ok(Json(LoginResponse {
        status: "ok".into(),
        user: result.user,
    }))
}

#[utoipa::path(
    post,
    path = "/api/user/logout",
    responses(
        (status = 200, description = "Session cookie cleared.", body = StatusResponse)
    ),
    tag = "Users"
)]
pub async fn logout(Extension(state): Extension<HttpState>, cookies: Cookies) -> Json<StatusResponse> {
    cookies.add(state.session_cookie.clear());
    Json(StatusResponse::ok())
}

#[utoipa::path(
    get,
    path = "/api/user/me",
    responses(
        (status = 200, description = "The signed-in user.", body = UserDto),
        (status = 403, description = "No valid session.", body = crate::presentation::http::error::ErrorResponse)
    ),
    tag = "Users"
)]
pub async fn profile(
    Extension(state): Extension<HttpState>,
    CurrentSession(session): CurrentSession,
) -> HttpResult<Json<UserDto>> {
    state
        .services
        .user_queries
        .get_profile(&session)
        .await
        .into_http()
        .map(Json)
}

#[utoipa::path(
    get,
    path = "/api/user/exists",
    params(UserExistsParams),
    responses(
        (status = 200, description = "Whether the login is taken.", body = UserExistsResponse)
    ),
    tag = "Users"
)]
pub async fn exists(
    Extension(state): Extension<HttpState>,
    Query(params): Query<UserExistsParams>,
) -> HttpResult<Json<UserExistsResponse>> {
    let exists = state
        .services
        .user_queries
        .user_exists(&params.login)
        .await
        .into_http()?;
    Ok(Json(UserExistsResponse { exists }))
}
