use chrono::{DateTime, Utc};

/// Cookie value handed out on login.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IssuedSession {
    pub value: String,
    pub expires_at: DateTime<Utc>,
}

/// The signed-in login recovered from a session cookie.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SessionSubject {
    pub login: String,
    pub expires_at: DateTime<Utc>,
}
