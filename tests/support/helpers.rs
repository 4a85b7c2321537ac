// tests/support/helpers.rs
use std::sync::Arc;

use axum::Router;
use axum::body::{self, Body};
use axum::http::{HeaderMap, Method, Request, StatusCode, header};
use board_backend::application::ports::{
    security::{PasswordHasher, SessionCodec},
    time::Clock,
};
use board_backend::application::services::ApplicationServices;
use board_backend::domain::{advert::AdvertRepository, user::UserRepository};
use board_backend::infrastructure::repositories::{InMemoryAdvertRepository, InMemoryUserRepository};
use board_backend::infrastructure::security::{
    password::Argon2PasswordHasher, session::SignedSessionCodec,
};
use board_backend::presentation::http::{
    routes::build_router,
    state::{HttpState, SessionCookie},
};
use serde_json::{Value, json};
use tower::util::ServiceExt as _;

use super::mocks::{COOKIE_NAME, SteppingClock, TEST_SECRET, cheap_hashing};

pub const TEST_ORIGIN: &str = "http://localhost:3000";

/// Router wired to in-memory repositories, a real Argon2 hasher with cheap
/// costs and a real signed session codec.
pub fn make_test_router() -> Router {
    make_router_with_hasher(Arc::new(Argon2PasswordHasher::new(cheap_hashing())))
}

/// Same wiring as [`make_test_router`] with a substitute password hasher.
pub fn make_router_with_hasher(password_hasher: Arc<dyn PasswordHasher>) -> Router {
    let user_repo: Arc<dyn UserRepository> = Arc::new(InMemoryUserRepository::new());
    let advert_repo: Arc<dyn AdvertRepository> =
        Arc::new(InMemoryAdvertRepository::new(Arc::clone(&user_repo)));
    let session_codec: Arc<dyn SessionCodec> = Arc::new(
        SignedSessionCodec::new(TEST_SECRET, chrono::Duration::hours(1))
            .expect("test secret is long enough"),
    );
    let clock: Arc<dyn Clock> = Arc::new(SteppingClock::default());

    let services = Arc::new(ApplicationServices::new(
        user_repo,
        advert_repo,
        password_hasher,
        session_codec,
        clock,
    ));

    let state = HttpState {
        services,
        session_cookie: SessionCookie {
            name: COOKIE_NAME.into(),
            secure: false,
            ttl: std::time::Duration::from_secs(3600),
        },
    };

    build_router(state, &[TEST_ORIGIN.to_string()])
}

pub struct TestResponse {
    pub status: StatusCode,
    pub headers: HeaderMap,
    pub body: Value,
}

impl TestResponse {
    /// `name=value` pair of the session cookie set by the response, if any.
    pub fn session_cookie(&self) -> Option<String> {
        self.headers
            .get_all(header::SET_COOKIE)
            .iter()
            .filter_map(|value| value.to_str().ok())
            .find(|value| value.starts_with(&format!("{COOKIE_NAME}=")))
            .and_then(|value| value.split(';').next())
            .map(str::to_owned)
    }

    pub fn error_code(&self) -> Option<&str> {
        self.body.get("code").and_then(Value::as_str)
    }
}

pub async fn send(
    app: &Router,
    method: Method,
    uri: &str,
    payload: Option<Value>,
    cookie: Option<&str>,
) -> TestResponse {
    let mut builder = Request::builder().method(method).uri(uri);
    if let Some(cookie) = cookie {
        builder = builder.header(header::COOKIE, cookie);
    }
    let request = match payload {
        Some(payload) => builder
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(payload.to_string()))
            .unwrap(),
        None => builder.body(Body::empty()).unwrap(),
    };

    let response = app.clone().oneshot(request).await.unwrap();
    let status = response.status();
    let (parts, body_stream) = response.into_parts();
    let bytes = body::to_bytes(body_stream, 1024 * 1024).await.unwrap();
    let body = if bytes.is_empty() {
        Value::Null
    } else {
        serde_json::from_slice(&bytes)
            .unwrap_or_else(|_| Value::String(String::from_utf8_lossy(&bytes).into_owned()))
    };

    TestResponse {
        status,
        headers: parts.headers,
        body,
    }
}

pub fn registration(login: &str) -> Value {
    json!({
        "login": login,
        "password": "correct horse",
        "firstname": "Adam",
        "surname": "Nowak",
        "mail": format!("{login}@example.com"),
        "phone": "+48 123 456 789"
    })
}

/// Register `login` and return the session cookie pair from signing in.
pub async fn register_and_login(app: &Router, login: &str) -> String {
    let registered = send(
        app,
        Method::POST,
        "/api/user/register",
        Some(registration(login)),
        None,
    )
    .await;
    assert_eq!(registered.status, StatusCode::CREATED, "{:?}", registered.body);

    let signed_in = send(
        app,
        Method::POST,
        "/api/user/login",
        Some(json!({ "login": login, "password": "correct horse" })),
        None,
    )
    .await;
    assert_eq!(signed_in.status, StatusCode::OK, "{:?}", signed_in.body);
    signed_in.session_cookie().expect("login sets the session cookie")
}

pub fn advert_payload(title: Value, description: Value) -> Value {
    json!({
        "title": title,
        "description": description,
        "type": "transport"
    })
}

/// Create an advert and return its id.
pub async fn create_advert(app: &Router, cookie: &str, payload: Value) -> String {
    let created = send(app, Method::POST, "/api/adverts", Some(payload), Some(cookie)).await;
    assert_eq!(created.status, StatusCode::CREATED, "{:?}", created.body);
    created.body["id"].as_str().expect("advert id").to_owned()
}

#[macro_export]
macro_rules! assert_error_status {
    ($resp:expr, $status:expr) => {{
        let resp = &$resp;
        assert_eq!(resp.status, $status, "unexpected body: {:?}", resp.body);
        assert!(
            resp.body.get("message").and_then(|m| m.as_str()).is_some(),
            "error body lacks a message: {:?}",
            resp.body
        );
    }};
}
