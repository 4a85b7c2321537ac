// src/application/ports/security.rs
use crate::application::{
    ApplicationResult,
    dto::{IssuedSession, SessionSubject},
};
use async_trait::async_trait;
use chrono::{DateTime, Utc};

#[async_trait]
pub trait PasswordHasher: Send + Sync {
    async fn hash(&self, password: &str) -> ApplicationResult<String>;
    /// `Ok(false)` on a mismatch. Malformed stored hashes are errors.
    async fn verify(&self, password: &str, expected_hash: &str) -> ApplicationResult<bool>;
}

/// Signs and checks the value carried by the session cookie.
pub trait SessionCodec: Send + Sync {
    fn issue(&self, login: &str, now: DateTime<Utc>) -> ApplicationResult<IssuedSession>;
    fn decode(&self, value: &str, now: DateTime<Utc>) -> ApplicationResult<SessionSubject>;
}
