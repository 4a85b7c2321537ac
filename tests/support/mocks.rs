// tests/support/mocks.rs
use async_trait::async_trait;
use board_backend::application::error::ApplicationResult;
use board_backend::application::ports::{security::PasswordHasher, time::Clock};
use board_backend::infrastructure::security::password::HashingParams;
use chrono::{DateTime, Duration, Utc};
use once_cell::sync::Lazy;
use std::sync::atomic::{AtomicI64, Ordering};

static EPOCH: Lazy<DateTime<Utc>> = Lazy::new(|| {
    DateTime::parse_from_rfc3339("2024-01-01T00:00:00Z")
        .expect("invalid RFC3339 in tests/support/mocks.rs")
        .with_timezone(&Utc)
});

pub fn fixed_now() -> DateTime<Utc> {
    *EPOCH
}

/// Clock moving one second forward on every reading, so creation order is
/// always visible in timestamps.
#[derive(Debug, Default)]
pub struct SteppingClock {
    ticks: AtomicI64,
}

impl Clock for SteppingClock {
    fn now(&self) -> DateTime<Utc> {
        let tick = self.ticks.fetch_add(1, Ordering::SeqCst);
        fixed_now() + Duration::seconds(tick)
    }
}

/// Argon2 costs low enough for tests.
pub fn cheap_hashing() -> HashingParams {
    HashingParams {
        memory_kib: 1024,
        iterations: 1,
        parallelism: 1,
        ..HashingParams::default()
    }
}

pub const TEST_SECRET: &[u8] = b"test-secret-test-secret-test-sec";
pub const COOKIE_NAME: &str = "board_session";

/// Hasher that blows up on use, for exercising panic recovery.
#[derive(Debug, Default)]
pub struct PanickingHasher;

#[async_trait]
impl PasswordHasher for PanickingHasher {
    async fn hash(&self, _password: &str) -> ApplicationResult<String> {
        panic!("hasher exploded");
    }

    async fn verify(&self, _password: &str, _expected_hash: &str) -> ApplicationResult<bool> {
        panic!("hasher exploded");
    }
}
