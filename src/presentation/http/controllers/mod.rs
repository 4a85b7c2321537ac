pub mod adverts;
pub mod users;
