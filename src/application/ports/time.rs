// src/application/ports/time.rs
use chrono::{DateTime, Utc};

/// Source of creation, deletion and session timestamps.
pub trait Clock: Send + Sync {
    fn now(&self) -> DateTime<Utc>;
}
