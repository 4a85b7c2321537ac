pub mod adverts;
pub mod auth;
pub mod users;

pub use adverts::{AdvertDto, AdvertOwnerDto};
pub use auth::{IssuedSession, SessionSubject};
pub use users::{ContactDetailsDto, UserDto};
