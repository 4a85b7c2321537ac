pub mod advert;
pub mod contact;
pub mod errors;
pub mod translation;
pub mod user;
