// src/infrastructure/repositories/mod.rs
mod adverts;
mod error;
mod users;

pub use adverts::{InMemoryAdvertRepository, PostgresAdvertRepository};
pub use users::{InMemoryUserRepository, PostgresUserRepository};
